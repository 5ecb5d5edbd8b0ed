use raylib::prelude::*;

use crate::animation::LayerMotion;
use crate::positioner::SlideOffsets;

/// Part of the texture that fills `dest_width` x `dest_height` without distortion.
pub fn cover_source_rect(tex_width: f32, tex_height: f32, dest_width: f32, dest_height: f32) -> Rectangle {
    let scale = (dest_width / tex_width).max(dest_height / tex_height);
    let width = dest_width / scale;
    let height = dest_height / scale;
    Rectangle::new((tex_width - width) * 0.5, (tex_height - height) * 0.5, width, height)
}

pub struct Slide {
    back: Texture2D,
    middle: Texture2D,

    back_motion: LayerMotion,
    middle_motion: LayerMotion,
}

impl Slide {
    pub fn new(back: Texture2D, middle: Texture2D) -> Self {
        Self {
            back,
            middle,
            back_motion: LayerMotion::new(0.0),
            middle_motion: LayerMotion::new(0.0),
        }
    }

    pub fn apply(&mut self, offsets: SlideOffsets, animated: bool, duration: f32) {
        if animated {
            self.back_motion.animate_to(offsets.back, duration);
            self.middle_motion.animate_to(offsets.middle, duration);
        } else {
            self.back_motion.jump(offsets.back);
            self.middle_motion.jump(offsets.middle);
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.back_motion.update(dt);
        self.middle_motion.update(dt);
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, width: f32, height: f32) {
        let middle_x = self.middle_motion.value();
        // Entirely off the surface
        if middle_x >= width || middle_x + width <= 0.0 {
            return;
        }

        // Back layer is clipped to the slide's window and overscans horizontally
        {
            let mut s = d.begin_scissor_mode(middle_x.round() as i32, 0, width as i32, height as i32);
            let overscan = width * 0.5;
            let back_dest = Rectangle::new(self.back_motion.value() - overscan * 0.5, 0.0, width + overscan, height);
            s.draw_texture_pro(
                &self.back,
                cover_source_rect(self.back.width() as f32, self.back.height() as f32, back_dest.width, back_dest.height),
                back_dest,
                Vector2::zero(),
                0.0,
                Color::WHITE,
            );
        }

        // Middle image inset so the back layer frames it
        let inset = width * 0.08;
        let middle_dest = Rectangle::new(middle_x + inset, height * 0.15, width - inset * 2.0, height * 0.6);
        d.draw_texture_pro(
            &self.middle,
            cover_source_rect(self.middle.width() as f32, self.middle.height() as f32, middle_dest.width, middle_dest.height),
            middle_dest,
            Vector2::zero(),
            0.0,
            Color::WHITE,
        );
    }
}
