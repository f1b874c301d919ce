//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `launch_inspector` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Printing the command report and setting the exit code
//!
//! All core functionality is implemented in the library crate.

use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use launch_inspector::config::Opt;
use launch_inspector::initialization::init_logger_with;
use launch_inspector::{run_command, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let opt = Opt::parse();
    let config = Config::from(&opt);

    if let Err(e) = config.validate() {
        eprintln!("launch_inspector error: {e}");
        process::exit(2);
    }

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    match run_command(&config, &opt.command).await {
        Ok(report) => {
            println!("{}", report.output.trim_end());
            if !report.success {
                process::exit(1);
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("launch_inspector error: {:#}", e);
            process::exit(1);
        }
    }
}
