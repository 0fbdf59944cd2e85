use raylib::prelude::*;
use crate::carousel::Toggle;
use crate::constants::*;

pub struct Dot {
    center: Vector2,
    radius: f32,
    active: bool,
}

impl Dot {
    pub fn new(center: Vector2, radius: f32) -> Self {
        Self { center, radius, active: false }
    }

    pub fn center(&self) -> Vector2 {
        self.center
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        let center = self.center();
        if self.is_active() {
            d.draw_circle_v(center, self.radius, Color::WHITE);
        } else {
            d.draw_circle_lines(center.x as i32, center.y as i32, self.radius, Color::LIGHTGRAY);
        }
    }
}

impl Toggle for Dot {
    fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    fn is_active(&self) -> bool {
        self.active
    }
}

/// Lays `count` dots out in a row centred horizontally near the bottom of the render target.
pub fn layout_dots(count: usize) -> Vec<Dot> {
    if count == 0 {
        return Vec::new();
    }

    let row_width = DOT_SPACING * (count - 1) as f32;
    let first_x = (RENDER_WIDTH as f32 - row_width) * 0.5;
    let y = RENDER_HEIGHT as f32 - DOT_MARGIN_BOTTOM;

    (0..count)
        .map(|n| Dot::new(Vector2::new(first_x + DOT_SPACING * n as f32, y), DOT_RADIUS))
        .collect()
}
