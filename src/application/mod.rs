mod game_state;

pub use game_state::{Control, GameState, INFO_PAUSED, INFO_START};
