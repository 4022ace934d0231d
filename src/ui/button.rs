use macroquad::prelude::*;

use super::{ACTIVE_BUTTON_COLOR, BUTTON_COLOR};
use crate::application::Control;

/// Top bar button bound to one [`Control`]
#[derive(Clone)]
pub struct Button {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    control: Control,
}

impl Button {
    pub fn new(x: f32, y: f32, width: f32, height: f32, control: Control) -> Self {
        Self { x, y, width, height, control }
    }

    pub const fn control(&self) -> Control {
        self.control
    }

    pub const fn x(&self) -> f32 {
        self.x
    }

    pub const fn y(&self) -> f32 {
        self.y
    }

    /// Check if a point lies on the button
    pub fn contains(&self, pos: (f32, f32)) -> bool {
        pos.0 >= self.x
            && pos.0 <= self.x + self.width
            && pos.1 >= self.y
            && pos.1 <= self.y + self.height
    }

    /// Draw button, darker while hovered
    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let color = if self.contains(mouse_pos) {
            ACTIVE_BUTTON_COLOR
        } else {
            BUTTON_COLOR
        };

        draw_rectangle(self.x, self.y, self.width, self.height, color);
        draw_rectangle_lines(self.x, self.y, self.width, self.height, 2.0, DARKGRAY);

        let text = self.control.label();
        let text_size = measure_text(text, None, 20, 1.0);
        draw_text(
            text,
            self.x + (self.width - text_size.width) / 2.0,
            self.y + (self.height + text_size.height) / 2.0,
            20.0,
            BLACK,
        );
    }

    /// Check if button was clicked this frame
    pub fn is_clicked(&self, mouse_pos: (f32, f32)) -> bool {
        self.contains(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_edges() {
        let button = Button::new(10.0, 20.0, 100.0, 30.0, Control::New);
        assert!(button.contains((10.0, 20.0)));
        assert!(button.contains((110.0, 50.0)));
        assert!(!button.contains((9.9, 25.0)));
        assert!(!button.contains((50.0, 50.1)));
    }
}
