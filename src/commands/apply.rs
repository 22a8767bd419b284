//! Apply command implementation
//!
//! Reads the `[remote "origin"]` section of the config file and makes the
//! repository's `origin` remote match it, then shows `git remote -v`
//! whatever the outcome of the replacement.

use std::process::ExitCode;

use anyhow::Result;
use log::info;

use origin_sync::config::SyncConfig;
use origin_sync::dispatch;
use origin_sync::output::{Marker, OutputConfig};
use origin_sync::repository::{GitRepository, Replacement};

/// Execute the apply flow.
pub fn execute(repo: &GitRepository, config: &SyncConfig, out: &OutputConfig) -> Result<ExitCode> {
    let replacement = match dispatch::apply_from_config(repo, config) {
        Ok(replacement) => replacement,
        Err(e) if e.is_not_found() => {
            eprintln!("{} {}", out.marker(Marker::Warn), e);
            return Ok(ExitCode::SUCCESS);
        }
        Err(e) => return Err(e.into()),
    };

    let outcome: Result<ExitCode> = match replacement {
        Replacement::Replaced { previous, current } => {
            if let Some(previous) = previous {
                info!("Previous {} URLs: {}", config.remote_name, previous);
            }
            println!(
                "{} {} set to {}",
                out.marker(Marker::Ok),
                config.remote_name,
                current
            );
            Ok(ExitCode::SUCCESS)
        }
        Replacement::LeftEmpty { previous, error } => {
            eprintln!(
                "{} {} was removed but could not be recreated",
                out.marker(Marker::Error),
                config.remote_name
            );
            if let Some(previous) = previous {
                eprintln!("{} Previous URLs: {}", out.marker(Marker::Info), previous);
            }
            Err(error.into())
        }
        Replacement::Unchanged { error } => {
            eprintln!(
                "{} {} left unchanged",
                out.marker(Marker::Error),
                config.remote_name
            );
            Err(error.into())
        }
    };

    if let Some(listing) = dispatch::remote_listing(repo) {
        print!("{}", listing);
    }
    outcome
}
