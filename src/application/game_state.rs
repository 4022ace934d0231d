use rand::{SeedableRng, rngs::StdRng};
use tracing::{debug, info, trace};

use crate::config::Config;
use crate::domain::Simulation;

/// User actions offered by the top bar and keyboard shortcuts
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    /// Seed a fresh random population and start running
    New,
    /// Toggle between paused and running
    PauseRun,
    /// Close the window
    Exit,
}

impl Control {
    /// Button order in the top bar
    pub const ALL: [Control; 3] = [Control::New, Control::PauseRun, Control::Exit];

    pub const fn label(self) -> &'static str {
        match self {
            Control::New => "New",
            Control::PauseRun => "Pause/Run",
            Control::Exit => "Exit",
        }
    }
}

pub const INFO_START: &str = "Press \"New\" to start.";
pub const INFO_PAUSED: &str = "Game is paused, press \"Pause/Run\" to continue.";

/// GameState drives the simulation from the window loop.
/// Pause flag, generation counter and pacing live here, not in the automaton.
pub struct GameState {
    pub simulation: Simulation,
    pub generation: u64,
    pub started: bool,
    pub paused: bool,
    pub exit_requested: bool,
    pub update_timer: f32,
    step_interval: f32,
    parallel: bool,
    rng: StdRng,
}

impl GameState {
    /// Create the initial, dead board described by `config`
    pub fn new(config: &Config) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Self {
            simulation: Simulation::new(config.rows, config.columns),
            generation: 0,
            started: false,
            paused: false,
            exit_requested: false,
            update_timer: 0.0,
            step_interval: config.step_interval(),
            parallel: config.parallel,
            rng,
        }
    }

    /// True while generations are advancing
    pub const fn is_running(&self) -> bool {
        self.started && !self.paused
    }

    /// Status line shown next to the generation counter
    pub const fn info_text(&self) -> &'static str {
        if !self.started {
            INFO_START
        } else if self.paused {
            INFO_PAUSED
        } else {
            ""
        }
    }

    /// Dispatch a control action
    pub fn apply(self, control: Control) -> Self {
        match control {
            Control::New => self.new_population(),
            Control::PauseRun => self.toggle_paused(),
            Control::Exit => self.request_exit(),
        }
    }

    /// Randomize the board, reset the counter and start running
    pub fn new_population(mut self) -> Self {
        self.simulation.randomize(&mut self.rng);
        self.generation = 0;
        self.started = true;
        self.paused = false;
        self.update_timer = 0.0;
        info!(
            population = self.simulation.current().population(),
            "new population"
        );
        self
    }

    /// Toggle pause; ignored until a population exists
    pub fn toggle_paused(mut self) -> Self {
        if !self.started {
            debug!("pause/run ignored before first population");
            return self;
        }
        self.paused = !self.paused;
        info!(paused = self.paused, generation = self.generation, "pause toggled");
        self
    }

    pub fn request_exit(mut self) -> Self {
        info!(generation = self.generation, "exit requested");
        self.exit_requested = true;
        self
    }

    /// Advance by frame time. At most one generation per step interval.
    pub fn tick(mut self, delta_time: f32) -> Self {
        if !self.is_running() {
            return self;
        }

        self.update_timer += delta_time;
        if self.update_timer >= self.step_interval {
            if self.parallel {
                self.simulation.step_parallel();
            } else {
                self.simulation.step();
            }
            self.generation += 1;
            self.update_timer = 0.0;
            trace!(generation = self.generation, "stepped");
        }

        self
    }
}
