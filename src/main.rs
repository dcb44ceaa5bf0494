use anyhow::Result;
use clap::Parser;
use recalc::cli::App;
use recalc::Config;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "recalc")]
#[command(about = "Decimal calculator with undo/redo, logging and CSV history", long_about = None)]
struct Args {
    /// Calculation log file (overrides CALCULATOR_LOG_FILE)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// CSV history file (overrides CALCULATOR_HISTORY_FILE)
    #[arg(long)]
    history_file: Option<PathBuf>,

    /// Enable debug diagnostics on stderr
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn main() -> Result<()> {
    // A missing .env is fine; the environment and defaults still apply.
    let _ = dotenvy::dotenv();

    let args = Args::parse();

    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env().with_overrides(args.log_file, args.history_file);
    let mut app = App::new(config)?;
    app.run()?;
    Ok(())
}
