mod button;

pub use button::Button;

use macroquad::prelude::Color;

use crate::application::Control;
use crate::config::Config;

pub const MARGIN: f32 = 10.0;
pub const TOP_BAR_HEIGHT: f32 = 52.0;
pub const FOOTER_HEIGHT: f32 = 30.0;
pub const BUTTON_WIDTH: f32 = 110.0;
pub const BUTTON_HEIGHT: f32 = 32.0;
pub const BUTTON_GAP: f32 = 6.0;

// Widths the top bar needs before the generation label and info line fit
const TOP_BAR_MIN_WIDTH: f32 = 900.0;

pub const NEUTRAL_COLOR: Color = Color::new(0.94, 0.94, 0.94, 1.0);
pub const ALIVE_COLOR: Color = Color::new(0.0, 0.0, 0.0, 1.0);
pub const BUTTON_COLOR: Color = Color::new(0.83, 0.83, 0.83, 1.0);
pub const ACTIVE_BUTTON_COLOR: Color = Color::new(0.80, 0.79, 0.79, 1.0);

/// Pixel layout of the window, derived once from the board size
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub cell_size: f32,
    pub canvas_x: f32,
    pub canvas_y: f32,
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub window_width: f32,
    pub window_height: f32,
}

impl Layout {
    pub fn new(config: &Config) -> Self {
        let canvas_width = config.columns as f32 * config.cell_size;
        let canvas_height = config.rows as f32 * config.cell_size;
        let window_width = (canvas_width + 2.0 * MARGIN).max(TOP_BAR_MIN_WIDTH);

        Self {
            cell_size: config.cell_size,
            // Center the canvas when the top bar is wider than the board
            canvas_x: (window_width - canvas_width) / 2.0,
            canvas_y: TOP_BAR_HEIGHT + MARGIN,
            canvas_width,
            canvas_height,
            window_width,
            window_height: TOP_BAR_HEIGHT + MARGIN + canvas_height + FOOTER_HEIGHT,
        }
    }

    /// Screen rectangle of cell (row, column) as (x, y, size)
    pub fn cell_rect(&self, row: usize, column: usize) -> (f32, f32, f32) {
        (
            self.canvas_x + column as f32 * self.cell_size,
            self.canvas_y + row as f32 * self.cell_size,
            self.cell_size,
        )
    }

    /// X position where the generation label starts, right of the buttons
    pub fn labels_x(&self) -> f32 {
        MARGIN + Control::ALL.len() as f32 * (BUTTON_WIDTH + BUTTON_GAP) + 2.0 * MARGIN
    }

    /// Baseline of the footer text
    pub fn footer_y(&self) -> f32 {
        self.window_height - FOOTER_HEIGHT / 3.0
    }
}

/// Create the top bar buttons, one per [`Control`], left to right
pub fn create_buttons() -> Vec<Button> {
    let y = (TOP_BAR_HEIGHT - BUTTON_HEIGHT) / 2.0 + MARGIN / 2.0;
    Control::ALL
        .iter()
        .enumerate()
        .map(|(idx, &control)| {
            let x = MARGIN + idx as f32 * (BUTTON_WIDTH + BUTTON_GAP);
            Button::new(x, y, BUTTON_WIDTH, BUTTON_HEIGHT, control)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_fits_board() {
        let layout = Layout::new(&Config::default());
        assert_eq!(layout.canvas_width, 1400.0);
        assert_eq!(layout.canvas_height, 800.0);
        assert_eq!(layout.window_width, 1420.0);
        assert_eq!(layout.canvas_x, MARGIN);
        assert!(layout.canvas_y >= TOP_BAR_HEIGHT);
        assert!(layout.window_height > layout.canvas_y + layout.canvas_height);
    }

    #[test]
    fn test_small_board_is_centered() {
        let config = Config { rows: 5, columns: 5, ..Config::default() };
        let layout = Layout::new(&config);
        assert_eq!(layout.window_width, TOP_BAR_MIN_WIDTH);
        assert_eq!(layout.canvas_x * 2.0 + layout.canvas_width, layout.window_width);
    }

    #[test]
    fn test_cell_rect() {
        let layout = Layout::new(&Config::default());
        let (x, y, size) = layout.cell_rect(2, 3);
        assert_eq!(x, layout.canvas_x + 60.0);
        assert_eq!(y, layout.canvas_y + 40.0);
        assert_eq!(size, 20.0);
    }

    #[test]
    fn test_buttons_follow_controls() {
        let buttons = create_buttons();
        let controls: Vec<_> = buttons.iter().map(|b| b.control()).collect();
        assert_eq!(controls, Control::ALL);
        assert!(buttons.windows(2).all(|w| !w[0].contains((w[1].x(), w[1].y() + 1.0))));
    }

    #[test]
    fn test_labels_start_after_buttons() {
        let layout = Layout::new(&Config::default());
        let last = create_buttons().pop().unwrap();
        assert!(layout.labels_x() > last.x() + BUTTON_WIDTH);
    }
}
