//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `geowoot` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use geowoot::app::cancel_on_ctrl_c;
use geowoot::config::{Cli, Command};
use geowoot::initialization::init_logger_with;
use geowoot::{render_userscript, run_poller, run_server, Phase, View};

#[tokio::main]
async fn main() -> Result<()> {
    // Try the current directory first, then next to the executable
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let cli = Cli::parse();

    let serve_or_watch = match cli.command {
        Command::Script(args) => {
            print!("{}", render_userscript(&args.base_url));
            return Ok(());
        }
        command => command,
    };

    init_logger_with(cli.log_level.into(), cli.log_format).context("Failed to initialize logger")?;
    let shutdown = cancel_on_ctrl_c();

    let result = match serve_or_watch {
        Command::Serve(args) => run_server(args.into(), shutdown).await,
        Command::Watch(args) => run_poller(args.into(), shutdown, print_view).await,
        Command::Script(_) => Ok(()),
    };

    if let Err(e) = result {
        eprintln!("geowoot error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}

fn print_view(phase: Phase, view: &View) {
    let Some(place) = &view.place else {
        return;
    };
    println!("📍 {}, {}", place.city, place.country);
    if phase == Phase::Annotated {
        match &view.metadata {
            Some(html) => println!("{html}"),
            None => println!("(metadata unavailable)"),
        }
    }
}
