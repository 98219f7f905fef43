use std::{
    fs::File,
    io::{self, BufReader},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;
use order_screen::OrderScreenController;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod session;
mod terminal;

use config::{load_settings, log_filter, Settings};
use session::run_session;
use terminal::TerminalDisplay;

#[derive(Parser, Debug)]
#[command(name = "kiosk", about = "Order a coffee from the terminal")]
struct Args {
    #[arg(long, default_value = "kiosk.toml")]
    config: PathBuf,
    /// Read commands from a file instead of stdin.
    #[arg(long)]
    script: Option<PathBuf>,
    /// Print confirmations and errors as JSON lines.
    #[arg(long)]
    json: bool,
    #[arg(long)]
    drink_name: Option<String>,
    #[arg(long)]
    drink_size: Option<String>,
    #[arg(long)]
    shots: Option<u32>,
    /// `--iced` alone means iced; `--iced false` serves it hot.
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    iced: Option<bool>,
}

fn apply_cli_overrides(settings: &mut Settings, args: &Args) {
    if let Some(name) = &args.drink_name {
        settings.drink_name = name.clone();
    }
    if let Some(size) = &args.drink_size {
        settings.drink_size = size.clone();
    }
    if let Some(shots) = args.shots {
        settings.shot_count = shots;
    }
    if let Some(iced) = args.iced {
        settings.is_iced = iced;
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_filter(|key| std::env::var(key).ok())))
        .with_writer(io::stderr)
        .init();
    let args = Args::parse();

    let mut settings = load_settings(&args.config)?;
    apply_cli_overrides(&mut settings, &args);
    tracing::info!(?settings, "starting kiosk");

    let display = TerminalDisplay::new(io::stdout(), args.json);
    let mut screen = OrderScreenController::with_order(settings.starting_order(), display)
        .with_max_shots(settings.max_shots);
    let mut notices = io::stderr();

    let report = match &args.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open script '{}'", path.display()))?;
            run_session(BufReader::new(file), &mut screen, &mut notices, args.json)?
        }
        None => run_session(io::stdin().lock(), &mut screen, &mut notices, args.json)?,
    };

    tracing::info!(
        actions = report.actions,
        rejected = report.rejected,
        orders = report.confirmations.len(),
        "kiosk session finished"
    );
    Ok(())
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
