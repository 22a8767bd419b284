//! # Command Dispatch
//!
//! Turns the positional command line into an [`Invocation`] and runs the
//! matching flow:
//!
//! - no arguments: **apply**, config file → repository
//! - `save`: **save**, repository → config file
//! - anything else: invalid
//!
//! Both flows read first and only write once the read succeeded, so a
//! missing config section or a repository without remotes never causes a
//! change.

use log::{info, warn};

use crate::config::{self, SyncConfig};
use crate::error::{Error, Result};
use crate::remote::RemoteUrlSet;
use crate::repository::{self, RemoteOperations, Replacement};

/// Literal argument selecting the save flow.
pub const SAVE_COMMAND: &str = "save";

/// What the user asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Install the config file's URLs as the repository's remote.
    Apply,
    /// Write the repository's remote URLs to the config file.
    Save,
    /// Unsupported argument shape.
    Invalid(Vec<String>),
}

impl Invocation {
    /// Classifies the positional arguments.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Self {
        match args {
            [] => Invocation::Apply,
            [only] if only.as_ref() == SAVE_COMMAND => Invocation::Save,
            other => Invocation::Invalid(other.iter().map(|a| a.as_ref().to_string()).collect()),
        }
    }

    /// The error to report for an invalid invocation.
    pub fn into_error(self) -> Option<Error> {
        match self {
            Invocation::Invalid(args) => Some(Error::InvalidArguments { args }),
            _ => None,
        }
    }
}

/// Apply flow: read the config file, then replace the remote.
///
/// Lookup failures ([`Error::is_not_found`]) are returned before the
/// repository is touched.
pub fn apply_from_config(repo: &dyn RemoteOperations, config: &SyncConfig) -> Result<Replacement> {
    let set = config::read_remote(config)?;
    info!(
        "Applying {} from {}: {}",
        config.remote_name,
        config.config_path.display(),
        set
    );
    Ok(repository::apply(repo, &config.remote_name, &set))
}

/// Save flow: read the repository's remote, then overwrite the config file.
///
/// Returns the URLs that were written.
pub fn save_to_config(repo: &dyn RemoteOperations, config: &SyncConfig) -> Result<RemoteUrlSet> {
    let set = repository::read_remote(repo, &config.remote_name)?;
    config::write_remote(config, &set)?;
    info!(
        "Saved {} to {}: {}",
        config.remote_name,
        config.config_path.display(),
        set
    );
    Ok(set)
}

/// The `git remote -v` listing shown after an apply, if there is anything
/// to show.
///
/// This is informational only: failures are logged and yield `None`.
pub fn remote_listing(repo: &dyn RemoteOperations) -> Option<String> {
    match repo.list_remotes() {
        Ok(remotes) if remotes.is_empty() => return None,
        Ok(_) => {}
        Err(e) => {
            warn!("Could not list remotes: {}", e);
            return None;
        }
    }

    match repo.show_remotes() {
        Ok(listing) => Some(listing),
        Err(e) => {
            warn!("Could not show remotes: {}", e);
            None
        }
    }
}
