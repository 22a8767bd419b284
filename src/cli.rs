//! CLI argument parsing and command dispatch

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use log::debug;

use origin_sync::config::{SyncConfig, DEFAULT_CONFIG_FILE};
use origin_sync::dispatch::Invocation;
use origin_sync::output::{Marker, OutputConfig};
use origin_sync::repository::GitRepository;

use crate::commands;

/// Exit status for an unsupported command line.
const EXIT_INVALID_ARGS: u8 = 2;

/// Sync the origin remote with a portable config file
///
/// Without arguments, the URLs in the config file's [remote "origin"]
/// section replace the repository's origin remote. With `save`, the
/// repository's origin URLs are written to the config file.
#[derive(Parser, Debug)]
#[command(name = "origin-sync")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Nothing to apply the config file, or `save` to write it
    #[arg(value_name = "COMMAND")]
    args: Vec<String>,

    /// Config file holding the [remote "origin"] section
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_CONFIG_FILE)]
    file: PathBuf,

    /// Repository root (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    repo: Option<PathBuf>,

    /// Colorize output (always, never, auto)
    #[arg(long, value_name = "WHEN", default_value = "auto", value_parser = ["always", "never", "auto"])]
    color: String,

    /// Set log level (error, warn, info, debug, trace); defaults to RUST_LOG or warn
    #[arg(long, value_name = "LEVEL", value_parser = ["error", "warn", "info", "debug", "trace"])]
    log_level: Option<String>,
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<ExitCode> {
        init_logging(self.log_level.as_deref());
        let out = OutputConfig::from_env_and_flag(&self.color);

        let repo_dir = match self.repo {
            Some(dir) => dir,
            None => std::env::current_dir()?,
        };
        let repo = GitRepository::open(&repo_dir)?;
        let config = SyncConfig::new(self.file).resolved_in(repo.root());
        debug!("Using config file {}", config.config_path.display());

        match Invocation::from_args(&self.args) {
            Invocation::Apply => commands::apply::execute(&repo, &config, &out),
            Invocation::Save => commands::save::execute(&repo, &config, &out),
            invalid => {
                if let Some(error) = invalid.into_error() {
                    eprintln!("{} {}", out.marker(Marker::Error), error);
                }
                Ok(ExitCode::from(EXIT_INVALID_ARGS))
            }
        }
    }
}

fn init_logging(level: Option<&str>) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(level) = level {
        builder.parse_filters(level);
    }
    builder.format_timestamp(None).init();
}
