use raylib::prelude::*;
use crate::carousel::Toggle;
use crate::constants::*;

pub struct Slide {
    image: Texture2D,
    scale: f32,
    active: bool,
}

impl Slide {
    pub fn new(image: Texture2D) -> Self {
        let scale = fit_scale(image.width() as f32, image.height() as f32);
        Self { image, scale, active: false }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        if !self.is_active() {
            return;
        }

        let tex_width = self.image.width() as f32;
        let tex_height = self.image.height() as f32;

        let scaled_width = tex_width * self.scale;
        let scaled_height = tex_height * self.scale;

        // Centred on the render target
        let dest = Rectangle::new(
            (RENDER_WIDTH as f32 - scaled_width) * 0.5,
            (RENDER_HEIGHT as f32 - scaled_height) * 0.5,
            scaled_width,
            scaled_height,
        );

        d.draw_texture_pro(
            &self.image,
            Rectangle::new(0.0, 0.0, tex_width, tex_height),
            dest,
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE,
        );
    }
}

impl Toggle for Slide {
    fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    fn is_active(&self) -> bool {
        self.active
    }
}

/// Scale that keeps an image within `SLIDE_FIT` of the render target. Small images are not enlarged.
pub fn fit_scale(width: f32, height: f32) -> f32 {
    if width <= 0.0 || height <= 0.0 {
        return 1.0;
    }

    let max_width = RENDER_WIDTH as f32 * SLIDE_FIT;
    let max_height = RENDER_HEIGHT as f32 * SLIDE_FIT;

    (max_width / width).min(max_height / height).min(1.0)
}
