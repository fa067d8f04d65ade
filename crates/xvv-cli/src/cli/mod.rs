//! CLI for the XVV archive validator.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use xvv_core::{config, logging};

use commands::{run_checksum, run_validate};

/// Top-level CLI for the XVV validator.
#[derive(Debug, Parser)]
#[command(name = "xvv", version)]
#[command(about = "XVV: integrity validator for XVA backup archives", long_about = None)]
pub struct Cli {
    /// Verbosity: 0 failures only, 1 also confirms success, 2+ every entry and pair.
    #[arg(short = 'v', long, global = true, value_name = "N")]
    pub verbosity: Option<u8>,

    /// Config file to use instead of ~/.config/xvv/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Check that every block in an XVA file matches its checksum record.
    Validate {
        /// Path to the XVA file, or `-` for stdin.
        #[arg(long, default_value = "backup.xva", value_name = "PATH")]
        xva: PathBuf,
    },

    /// Print the SHA-1 of a file as an XVA checksum record would store it.
    Checksum {
        /// Path to the file.
        path: PathBuf,
    },
}

impl CliCommand {
    /// Parse arguments, set up config and logging, and run. Returns the exit code.
    pub fn run_from_args() -> Result<i32> {
        let cli = Cli::parse();
        let cfg = config::load(cli.config.as_deref())?;
        let opts = cfg.validate_options(cli.verbosity);
        logging::init_logging(cfg.log_file.as_deref(), opts.verbosity);
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Validate { xva } => Ok(run_validate(&xva, &opts)),
            CliCommand::Checksum { path } => {
                run_checksum(&path)?;
                Ok(0)
            }
        }
    }
}

#[cfg(test)]
mod tests;
