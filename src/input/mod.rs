use macroquad::prelude::*;

use crate::application::{Control, GameState};
use crate::ui::Button;

/// Keyboard shortcuts for the top bar controls
pub const SHORTCUTS: [(KeyCode, Control); 3] = [
    (KeyCode::N, Control::New),
    (KeyCode::Space, Control::PauseRun),
    (KeyCode::Escape, Control::Exit),
];

/// Controls requested by keyboard this frame
pub fn pressed_controls() -> impl Iterator<Item = Control> {
    SHORTCUTS
        .into_iter()
        .filter(|(key, _)| is_key_pressed(*key))
        .map(|(_, control)| control)
}

/// Controls requested by button clicks this frame
pub fn clicked_controls(buttons: &[Button], mouse_pos: (f32, f32)) -> impl Iterator<Item = Control> + '_ {
    buttons
        .iter()
        .filter(move |btn| btn.is_clicked(mouse_pos))
        .map(Button::control)
}

/// Apply all controls of this frame functionally
pub fn process_input(state: GameState, buttons: &[Button], mouse_pos: (f32, f32)) -> GameState {
    clicked_controls(buttons, mouse_pos)
        .chain(pressed_controls())
        .fold(state, GameState::apply)
}
