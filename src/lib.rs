// Domain layer - the automaton
pub mod domain;

// Application layer - driver state and controls
pub mod application;

// Configuration and its errors
pub mod config;
pub mod error;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, Generation, Simulation};
pub use application::{Control, GameState};
pub use config::{Config, Overrides};
pub use error::ConfigError;
pub use ui::{Button, Layout};
