use std::{
    fs::File,
    io::{self, BufReader},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;
use robot_core::TableController;
use toy_robot::{
    config::{load_settings, ReportFormat},
    console::Console,
};
use tracing::info;

/// Drives a toy robot around a 5x5 table from PLACE/MOVE/LEFT/RIGHT/REPORT/ROBOT commands.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// TOML settings file; defaults to ./toy_robot.toml when present.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Overrides the configured report format.
    #[arg(long, value_enum)]
    format: Option<ReportFormat>,
    /// Command script; reads stdin when omitted.
    input: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut settings = load_settings(args.config.as_deref())?;
    if let Some(format) = args.format {
        settings.report_format = format;
    }

    tracing_subscriber::fmt()
        .with_env_filter(settings.log_filter.as_str())
        .with_writer(io::stderr)
        .init();

    let stdout = io::stdout();
    let mut console = Console::new(TableController::new(), stdout.lock(), &settings);

    let dispatched = match &args.input {
        Some(path) => {
            info!(input = %path.display(), "reading commands from file");
            let file = File::open(path)
                .with_context(|| format!("failed to open command file '{}'", path.display()))?;
            console.run(BufReader::new(file))?
        }
        None => {
            info!("reading commands from stdin");
            console.run(io::stdin().lock())?
        }
    };

    info!(commands = dispatched, "session finished");
    Ok(())
}
