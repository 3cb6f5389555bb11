// algotty: step-by-step algorithm and data structure visualizer

use std::io::{self, Write};

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use algotty::config::Cli;
use algotty::logging;
use algotty::playback::Player;
use algotty::ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = match Cli::parse().into_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    logging::init(&config)?;

    let title = config.scenario.title();
    let frames = match config.scenario.run() {
        Ok(frames) => frames,
        Err(e) => {
            tracing::error!(error = %e, "run failed");
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    tracing::info!(scenario = %title, frames = frames.len(), "frames ready");

    if config.json {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        for frame in &frames {
            writeln!(out, "{}", serde_json::to_string(frame)?)?;
        }
        return Ok(());
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(Player::new(frames, config.speed), title);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "terminal loop failed");
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
