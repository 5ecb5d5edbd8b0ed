use anyhow::{Context, Result};
use raylib::prelude::*;
use tracing::{info, warn};

use crate::animation::LayerMotion;
use crate::carousel::slide::Slide;
use crate::config::CarouselConfig;
use crate::constants::DOT_RADIUS;
use crate::gesture::{Carousel, Reposition};
use crate::indicator::{Indicators, NavKey, handle_key};
use crate::input::{PointerSample, PointerTracker, dispatch};
use crate::positioner::Positioner;
use crate::texture_loader::{load_image_with_exif_rotation, load_sorted_image_paths, load_texture};

const BACK_LAYER_BRIGHTNESS: i32 = -70;

pub struct CarouselEngine {
    carousel: Carousel,
    positioner: Positioner,
    indicators: Indicators,
    tracker: PointerTracker,

    slides: Vec<Slide>,
    front: Option<Texture2D>,
    front_motion: LayerMotion,

    width: f32,
    height: f32,
    transition: f32,
}

impl CarouselEngine {
    pub fn load(rl: &mut RaylibHandle, thread: &RaylibThread, config: &CarouselConfig) -> Result<Self> {
        let mut slides = Vec::new();
        for path in load_sorted_image_paths(&config.image_directory)? {
            match load_slide(rl, thread, &path) {
                Ok(slide) => slides.push(slide),
                Err(e) => warn!(path = %path.display(), error = %e, "skipping slide"),
            }
        }

        let carousel = Carousel::new(slides.len(), config.threshold)
            .with_context(|| format!("No slides could be loaded from {}", config.image_directory.display()))?;

        let front = match &config.front_image {
            Some(path) => Some(load_texture(rl, thread, path)?),
            None => None,
        };

        info!(
            slides = slides.len(),
            front_layer = front.is_some(),
            threshold = config.threshold,
            "carousel ready"
        );

        let slide_count = carousel.slide_count();
        let mut engine = Self {
            carousel,
            positioner: Positioner::new(config.slide_width, config.speeds),
            indicators: Indicators::new(slide_count, config.slide_width, config.slide_height),
            tracker: PointerTracker::new(),
            slides,
            front,
            front_motion: LayerMotion::new(0.0),
            width: config.slide_width,
            height: config.slide_height,
            transition: config.transition,
        };
        engine.reposition(Reposition::INSTANT);
        Ok(engine)
    }

    fn reposition(&mut self, reposition: Reposition) {
        let frame = self.positioner.layout(self.carousel.state(), self.slides.len(), reposition.animated);

        for (slide, offsets) in self.slides.iter_mut().zip(frame.slides) {
            slide.apply(offsets, frame.animated, self.transition);
        }
        if frame.animated {
            self.front_motion.animate_to(frame.front, self.transition);
        } else {
            self.front_motion.jump(frame.front);
        }
    }

    fn sample_pointer(&self, rl: &RaylibHandle) -> PointerSample {
        let (position, pressed, on_screen) = if rl.get_touch_point_count() > 0 {
            (rl.get_touch_position(0), true, true)
        } else {
            (
                rl.get_mouse_position(),
                rl.is_mouse_button_down(MouseButton::MOUSE_BUTTON_LEFT),
                rl.is_cursor_on_screen(),
            )
        };

        // Window coordinates to render-surface coordinates
        let x = position.x * self.width / rl.get_screen_width() as f32;
        let y = position.y * self.height / rl.get_screen_height() as f32;

        PointerSample {
            x: Some(x),
            y: Some(y),
            pressed,
            inside: on_screen && (0.0..self.width).contains(&x) && (0.0..self.height).contains(&y),
        }
    }

    fn draw_front(&self, d: &mut RaylibDrawHandle) {
        let Some(front) = &self.front else {
            return;
        };
        // The shared layer spans the whole track at front speed
        let track = self.width + (self.slides.len() - 1) as f32 * self.width * self.positioner.speeds.front;
        d.draw_texture_pro(
            front,
            Rectangle::new(0.0, 0.0, front.width() as f32, front.height() as f32),
            Rectangle::new(self.front_motion.value(), 0.0, track, self.height),
            Vector2::zero(),
            0.0,
            Color::WHITE,
        );
    }

    fn draw_dots(&self, d: &mut RaylibDrawHandle) {
        for dot in self.indicators.dots(self.carousel.active_index()) {
            let color = if dot.active { Color::WHITE } else { Color::new(255, 255, 255, 110) };
            d.draw_circle(dot.x.round() as i32, dot.y.round() as i32, DOT_RADIUS, color);
        }
    }
}

fn load_slide(rl: &mut RaylibHandle, thread: &RaylibThread, path: &std::path::Path) -> Result<Slide> {
    let image = load_image_with_exif_rotation(path)?;

    let mut back_image = image.clone();
    back_image.color_brightness(BACK_LAYER_BRIGHTNESS);

    let back = rl
        .load_texture_from_image(thread, &back_image)
        .map_err(|e| anyhow::anyhow!("Failed to create back layer for {}: {}", path.display(), e))?;
    let middle = rl
        .load_texture_from_image(thread, &image)
        .map_err(|e| anyhow::anyhow!("Failed to create middle layer for {}: {}", path.display(), e))?;

    Ok(Slide::new(back, middle))
}

impl crate::engine::Engine for CarouselEngine {
    fn handle_input(&mut self, rl: &RaylibHandle) {
        let mut requests = Vec::new();

        if let Some(event) = self.tracker.observe(self.sample_pointer(rl)) {
            requests.extend(dispatch(&mut self.carousel, &self.indicators, event));
        }
        if rl.is_key_pressed(KeyboardKey::KEY_LEFT) {
            requests.extend(handle_key(&mut self.carousel, NavKey::Left));
        }
        if rl.is_key_pressed(KeyboardKey::KEY_RIGHT) {
            requests.extend(handle_key(&mut self.carousel, NavKey::Right));
        }

        for reposition in requests {
            self.reposition(reposition);
        }
    }

    fn update(&mut self, dt: f32) {
        for slide in self.slides.iter_mut() {
            slide.update(dt);
        }
        self.front_motion.update(dt);
    }

    fn render_frame(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread, framebuffer: &mut RenderTexture2D) {
        rl.draw_texture_mode(thread, framebuffer, |mut tmd| {
            let mut d = tmd.begin_drawing(thread);
            d.clear_background(Color::BLACK);

            for slide in self.slides.iter() {
                slide.draw(&mut d, self.width, self.height);
            }
            self.draw_front(&mut d);
            self.draw_dots(&mut d);
        });
    }
}
