use raylib::prelude::*;

pub trait Engine {
    fn handle_input(&mut self, rl: &RaylibHandle);
    fn update(&mut self, dt: f32);
    fn render_frame(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread, framebuffer: &mut RenderTexture2D);
}
