use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use macroquad::prelude::*;
use macroquad::Window;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use toroidal_life::{Config, GameState, Layout, Overrides, input, rendering, ui};

/// Conway's Game of Life on a wrap-around board
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// TOML config file; built-in defaults are used when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of grid rows
    #[arg(long)]
    rows: Option<usize>,

    /// Number of grid columns
    #[arg(long)]
    columns: Option<usize>,

    /// Cell edge in pixels
    #[arg(long)]
    cell_size: Option<f32>,

    /// Delay between generations in milliseconds
    #[arg(short, long)]
    delay_ms: Option<u64>,

    /// Seed for reproducible populations
    #[arg(short, long)]
    seed: Option<u64>,

    /// Compute generations on all cores
    #[arg(short, long)]
    parallel: bool,
}

impl Args {
    fn overrides(&self) -> Overrides {
        Overrides {
            rows: self.rows,
            columns: self.columns,
            cell_size: self.cell_size,
            step_delay_ms: self.delay_ms,
            parallel: self.parallel,
            seed: self.seed,
        }
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "toroidal_life=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn load_config(args: &Args) -> Result<Config> {
    let base = match &args.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::default(),
    };
    base.with_overrides(&args.overrides())
        .context("applying command line options")
}

fn window_conf(layout: &Layout) -> Conf {
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: layout.window_width.ceil() as i32,
        window_height: layout.window_height.ceil() as i32,
        window_resizable: false,
        ..Default::default()
    }
}

async fn run(config: Config, layout: Layout) {
    let mut state = GameState::new(&config);
    let buttons = ui::create_buttons();

    loop {
        let mouse_pos = mouse_position();

        state = input::process_input(state, &buttons, mouse_pos);
        if state.exit_requested {
            break;
        }

        state = state.tick(get_frame_time());

        rendering::draw_frame(&state, &layout, &buttons, mouse_pos);

        next_frame().await;
    }

    info!(generation = state.generation, "window closed");
}

fn main() -> Result<()> {
    init_tracing();

    let args = Args::parse();
    let config = load_config(&args)?;
    let layout = Layout::new(&config);

    info!(
        rows = config.rows,
        columns = config.columns,
        step_delay_ms = config.step_delay_ms,
        parallel = config.parallel,
        seed = ?config.seed,
        "starting"
    );

    Window::from_config(window_conf(&layout), run(config, layout));
    Ok(())
}
