mod cell;
mod generation;
mod simulation;

pub use cell::Cell;
pub use generation::Generation;
pub use simulation::Simulation;
