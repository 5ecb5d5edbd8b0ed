use anyhow::Result;
use clap::Parser;
use raylib::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod animation;
mod config;
mod constants;
mod engine;
mod gesture;
mod indicator;
mod input;
mod positioner;
mod state;
mod texture_loader;

mod carousel {
    pub mod engine;
    pub mod slide;
}

use crate::carousel::engine::CarouselEngine;
use crate::config::{Args, CarouselConfig};
use crate::engine::Engine;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = CarouselConfig::try_from(Args::parse())?;
    info!(directory = %config.image_directory.display(), "starting carousel");

    let width = config.slide_width.round() as i32;
    let height = config.slide_height.round() as i32;

    let (mut rl, thread) = raylib::init()
        .size(width, height)
        .title("Parallax Carousel")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(config.fps);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let mut engine = CarouselEngine::load(&mut rl, &thread, &config)?;

    let mut framebuffer = rl
        .load_render_texture(&thread, width as u32, height as u32)
        .map_err(|e| anyhow::anyhow!("Failed to create render texture: {}", e))?;

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();

        engine.handle_input(&rl);
        engine.update(dt);
        engine.render_frame(&mut rl, &thread, &mut framebuffer);

        // Scale the fixed-size surface to the window, flipping the render texture
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);

        let sw = d.get_screen_width() as f32;
        let sh = d.get_screen_height() as f32;

        d.draw_texture_pro(
            &framebuffer,
            Rectangle::new(0.0, 0.0, framebuffer.width() as f32, -(framebuffer.height() as f32)),
            Rectangle::new(0.0, 0.0, sw, sh),
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE,
        );
    }

    info!("carousel closed");
    Ok(())
}
