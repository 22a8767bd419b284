//! Save command implementation
//!
//! Writes the repository's `origin` URLs to the config file, replacing its
//! previous content.

use std::process::ExitCode;

use anyhow::Result;

use origin_sync::config::SyncConfig;
use origin_sync::dispatch;
use origin_sync::output::{Marker, OutputConfig};
use origin_sync::repository::GitRepository;

/// Execute the save flow.
pub fn execute(repo: &GitRepository, config: &SyncConfig, out: &OutputConfig) -> Result<ExitCode> {
    match dispatch::save_to_config(repo, config) {
        Ok(set) => {
            println!(
                "{} Saved {} ({} URL(s)) to {}",
                out.marker(Marker::Ok),
                config.remote_name,
                set.len(),
                config.config_path.display()
            );
            Ok(ExitCode::SUCCESS)
        }
        Err(e) if e.is_not_found() => {
            eprintln!("{} {}", out.marker(Marker::Warn), e);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => Err(e.into()),
    }
}
