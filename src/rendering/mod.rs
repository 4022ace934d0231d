use macroquad::prelude::*;

use crate::application::GameState;
use crate::domain::Generation;
use crate::ui::{ALIVE_COLOR, Button, Layout, MARGIN, NEUTRAL_COLOR, TOP_BAR_HEIGHT};

const LABEL_COLOR: Color = BLACK;
const INFO_COLOR: Color = RED;
const FOOTER_COLOR: Color = GRAY;

/// Draw every cell of the generation onto the canvas
pub fn draw_generation(generation: &Generation, layout: &Layout) {
    draw_rectangle(
        layout.canvas_x,
        layout.canvas_y,
        layout.canvas_width,
        layout.canvas_height,
        NEUTRAL_COLOR,
    );

    // Dead cells are the canvas background
    generation
        .iter_cells()
        .filter(|(_, _, cell)| cell.is_alive())
        .for_each(|(row, column, _)| {
            let (x, y, size) = layout.cell_rect(row, column);
            draw_rectangle(x, y, size, size, ALIVE_COLOR);
        });

    draw_rectangle_lines(
        layout.canvas_x - 1.0,
        layout.canvas_y - 1.0,
        layout.canvas_width + 2.0,
        layout.canvas_height + 2.0,
        2.0,
        DARKGRAY,
    );
}

/// Draw the top bar: buttons, generation counter and info line
pub fn draw_top_bar(state: &GameState, layout: &Layout, buttons: &[Button], mouse_pos: (f32, f32)) {
    draw_rectangle_lines(
        MARGIN / 2.0,
        MARGIN / 2.0,
        layout.window_width - MARGIN,
        TOP_BAR_HEIGHT - MARGIN / 2.0,
        2.0,
        LIGHTGRAY,
    );

    buttons.iter().for_each(|btn| btn.draw(mouse_pos));

    let baseline = TOP_BAR_HEIGHT / 2.0 + 10.0;
    let x = layout.labels_x();
    let generation = state.generation.to_string();

    let labels = [
        ("Generation:", x, 20.0, LABEL_COLOR),
        (generation.as_str(), x + 120.0, 20.0, LABEL_COLOR),
        (state.info_text(), x + 220.0, 20.0, INFO_COLOR),
    ];

    labels.iter().for_each(|(text, x, size, color)| {
        draw_text(text, *x, baseline, *size, *color);
    });
}

/// Draw the version line under the canvas
pub fn draw_footer(layout: &Layout) {
    draw_text(
        concat!("Version ", env!("CARGO_PKG_VERSION")),
        MARGIN,
        layout.footer_y(),
        16.0,
        FOOTER_COLOR,
    );
}

/// Draw a complete frame
pub fn draw_frame(state: &GameState, layout: &Layout, buttons: &[Button], mouse_pos: (f32, f32)) {
    clear_background(NEUTRAL_COLOR);
    draw_generation(state.simulation.current(), layout);
    draw_top_bar(state, layout, buttons, mouse_pos);
    draw_footer(layout);
}
