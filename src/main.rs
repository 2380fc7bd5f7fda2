// file: src/main.rs
// description: commandline application entry point
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use assessment_extract::utils::logging::{format_error, init_logger};
use assessment_extract::{Config, ExtractionDriver};
use clap::{ArgAction, Parser};
use std::process::ExitCode;
use tracing::{debug, warn};

#[derive(Parser)]
#[command(name = "assessment_extract")]
#[command(author = "cipher")]
#[command(version = "0.1.0")]
#[command(
    about = "Extracts the text of ./Assessment.pdf into ./Assessment.extracted.txt",
    long_about = None
)]
struct Cli {
    #[arg(long, value_name = "BOOL", action = ArgAction::Set)]
    color: Option<bool>,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let loaded = Config::load();
    let config = loaded
        .as_ref()
        .ok()
        .cloned()
        .unwrap_or_else(Config::default_config);

    let color = cli.color.unwrap_or(config.logging.color);
    if !color {
        colored::control::set_override(false);
    }
    init_logger(color, cli.verbose || config.logging.verbose);

    if let Err(e) = loaded {
        warn!("Falling back to built-in defaults: {}", e);
    }

    let driver =
        ExtractionDriver::from_current_dir().context("Failed to resolve working directory")?;
    debug!("Working directory: {}", driver.workdir().display());

    match driver.run() {
        Ok(report) => {
            println!("{report}");
            Ok(ExitCode::SUCCESS)
        }
        Err(e) if e.is_input_missing() => {
            eprintln!("{}", format_error(&e.to_string()));
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e).context("Extraction failed"),
    }
}
