//! # Error Handling
//!
//! This module defines the centralized error type for `origin-sync`. It uses
//! the `thiserror` library to describe every failure the apply and save
//! flows can run into, with enough context to print a useful message.
//!
//! ## Key Components
//!
//! - **`Error`**: The main enum. Variants fall into three groups:
//!   - *Lookup failures* (`ConfigNotFound`, `SectionNotFound`,
//!     `NoRemoteConfigured`): the source of URLs is missing. The calling flow
//!     stops without touching the repository or the config file.
//!   - *Mutation failures* (`RemoteReplacement`, `EmptyRemote`, `FileWrite`):
//!     something went wrong while changing state.
//!   - *Environment failures* (`RepositoryNotFound`, `GitCommand`,
//!     `InvalidArguments`).
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`.
//!
//! [`Error::is_not_found`] lets the command layer tell "nothing to do"
//! outcomes apart from real failures.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for origin-sync operations
#[derive(Error, Debug)]
pub enum Error {
    /// The target directory is not the root of a git repository.
    #[error("git repo not found: {}", path.display())]
    RepositoryNotFound { path: PathBuf },

    /// The portable config file does not exist or cannot be read.
    #[error("{} not found", path.display())]
    ConfigNotFound { path: PathBuf },

    /// The config file exists but is not valid INI.
    #[error("Configuration parsing error in {}: {message}", path.display())]
    ConfigParse { path: PathBuf, message: String },

    /// The config file has no section for the remote.
    #[error("{section} not found in {}", path.display())]
    SectionNotFound { section: String, path: PathBuf },

    /// The repository has no remote that could be exported.
    #[error("no remote configured")]
    NoRemoteConfigured,

    /// Deleting or creating a remote failed.
    #[error("Failed to replace remote {remote}: {message}")]
    RemoteReplacement { remote: String, message: String },

    /// A remote cannot be created without at least one URL.
    #[error("Refusing to create remote {remote} with no URLs")]
    EmptyRemote { remote: String },

    /// Writing the config file failed.
    #[error("Failed to write {}: {source}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A `git` invocation exited unsuccessfully.
    #[error("Git command failed: {command} - {stderr}")]
    GitCommand { command: String, stderr: String },

    /// The command line did not match any supported shape.
    #[error("invalid args: {}", args.join(" "))]
    InvalidArguments { args: Vec<String> },
}

impl Error {
    /// Returns `true` for the lookup failures that end a flow without any
    /// change being made.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::ConfigNotFound { .. } | Error::SectionNotFound { .. } | Error::NoRemoteConfigured
        )
    }
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
