//! Cavewalk - Entry Point
//!
//! Initializes logging and the terminal, generates a cave, and runs the
//! game loop until the player quits.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use anyhow::Result;

use cavewalk::game::{GameConfig, Session, StopSignal};
use cavewalk::ui::{KeyboardInput, TerminalRenderer};

const LOG_FILE: &str = "cavewalk.log";

/// Log file at `path`, or a sink that drops everything if it cannot be opened
fn log_target(path: &Path) -> Box<dyn Write + Send> {
    match OpenOptions::new().create(true).write(true).truncate(true).open(path) {
        Ok(file) => Box::new(file),
        Err(_) => Box::new(io::sink()),
    }
}

fn main() -> Result<()> {
    // Initialize logging to file (to avoid interfering with TUI)
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")
    )
    .target(env_logger::Target::Pipe(log_target(Path::new(LOG_FILE))))
    .init();

    log::info!("Starting Cavewalk v{}", env!("CARGO_PKG_VERSION"));

    let config = GameConfig::load_or_default();
    let mut session = Session::start(&config);

    let stop = StopSignal::new();
    let mut input = KeyboardInput::new(stop.clone());
    let mut renderer = TerminalRenderer::new()?;

    let result = session.run(&mut input, &mut renderer, &stop);

    // Restore terminal
    renderer.restore()?;

    // Report any errors
    match &result {
        Ok(summary) => log::info!("Explored for {} moves", summary.moves),
        Err(e) => {
            log::error!("Game exited with error: {}", e);
            eprintln!("Error: {}", e);
        }
    }

    if let Some(seed) = session.seed() {
        println!("Cave seed: {}", seed);
    }

    log::info!("Cavewalk shut down cleanly");
    result.map(|_| ()).map_err(Into::into)
}
