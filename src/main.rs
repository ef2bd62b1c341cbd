//! Five-in-a-row GUI
//!
//! Play X against the scripted bot on a 10x10 board.

use clap::Parser;
use gomoku::ui::{GomokuApp, WINDOW_MIN_SIZE, WINDOW_SIZE};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gomoku", about = "10x10 five-in-a-row against a scripted bot")]
struct Cli {
    /// Seed for the bot's random fallback (random when omitted)
    #[arg(long, env = "GOMOKU_SEED")]
    seed: Option<u64>,

    /// Tracing filter directive, e.g. "debug" or "gomoku=trace"
    #[arg(long, default_value = "info", env = "GOMOKU_LOG")]
    log_filter: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&cli.log_filter)?)
        .init();

    tracing::info!(seed = ?cli.seed, "starting gomoku");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(WINDOW_SIZE)
            .with_min_inner_size(WINDOW_MIN_SIZE)
            .with_title("Five in a Row"),
        ..Default::default()
    };

    let seed = cli.seed;
    eframe::run_native(
        "Five in a Row",
        options,
        Box::new(move |cc| Ok(Box::new(GomokuApp::new(cc, seed)))),
    )?;

    Ok(())
}
