//! # Portable Remote Configuration
//!
//! This module reads and writes the portable config file that mirrors the
//! repository's `origin` remote. The file uses git's own config syntax:
//!
//! ```text
//! [remote "origin"]
//! url = https://example.com/repo.git
//! url = https://mirror.example.com/repo.git
//! pushurl = ssh://git@example.com/repo.git
//! ```
//!
//! ## Reading
//!
//! Keys may repeat inside a section. Every value is kept (nothing is
//! overwritten), so the reader collects all `url` values in file order,
//! then all `pushurl` values in file order, and deduplicates the combined
//! list. Parsing is delegated to `rust-ini`.
//!
//! ## Writing
//!
//! The writer emits one section with one `url = ...` line per URL and
//! replaces the whole file. `pushurl` is never written: a file that had
//! `pushurl` entries comes back with those URLs as plain `url` lines.
//!
//! ## Configuration
//!
//! The file location and remote name travel in a [`SyncConfig`] value
//! instead of a process-wide constant.

use std::fs;
use std::path::{Path, PathBuf};

use ini::{Ini, ParseOption};
use log::debug;

use crate::error::{Error, Result};
use crate::remote::{RemoteUrlSet, ORIGIN};

/// Default file name of the portable config, relative to the repository root.
pub const DEFAULT_CONFIG_FILE: &str = ".gitconfig";

const URL_KEY: &str = "url";
const PUSHURL_KEY: &str = "pushurl";

/// Where the portable config lives and which remote it describes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    /// Path of the portable config file.
    pub config_path: PathBuf,
    /// Remote mirrored by the file. Always `origin` from the CLI.
    pub remote_name: String,
}

impl SyncConfig {
    /// Creates a configuration for the `origin` remote stored at `config_path`.
    pub fn new(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
            remote_name: ORIGIN.to_string(),
        }
    }

    /// Resolves a relative config path against the repository root.
    pub fn resolved_in(mut self, root: &Path) -> Self {
        if self.config_path.is_relative() {
            self.config_path = root.join(&self.config_path);
        }
        self
    }
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CONFIG_FILE)
    }
}

fn section_name(remote_name: &str) -> String {
    format!("remote \"{}\"", remote_name)
}

fn parse_options() -> ParseOption {
    // Backslashes are literal in URLs and Windows paths.
    ParseOption {
        enabled_escape: false,
        ..ParseOption::default()
    }
}

/// Reads the remote described by `config` from its config file.
///
/// # Errors
///
/// - [`Error::ConfigNotFound`] if the file is missing or unreadable.
/// - [`Error::ConfigParse`] if the file is not valid INI.
/// - [`Error::SectionNotFound`] if there is no `[remote "<name>"]` section.
pub fn read_remote(config: &SyncConfig) -> Result<RemoteUrlSet> {
    let content = fs::read_to_string(&config.config_path).map_err(|e| {
        debug!("Reading {} failed: {}", config.config_path.display(), e);
        Error::ConfigNotFound {
            path: config.config_path.clone(),
        }
    })?;

    let set = parse_remote_in(&content, &config.remote_name, &config.config_path)?;
    debug!(
        "Read {} URL(s) for {} from {}",
        set.len(),
        config.remote_name,
        config.config_path.display()
    );
    Ok(set)
}

/// Parses the URLs of `remote_name` from config file content.
///
/// All `url` values come first, then all `pushurl` values; duplicates are
/// dropped keeping the first occurrence. Sections repeated under the same
/// header contribute in file order.
pub fn parse_remote(content: &str, remote_name: &str) -> Result<RemoteUrlSet> {
    parse_remote_in(content, remote_name, Path::new("<input>"))
}

fn parse_remote_in(content: &str, remote_name: &str, path: &Path) -> Result<RemoteUrlSet> {
    let ini = Ini::load_from_str_opt(content, parse_options()).map_err(|e| Error::ConfigParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let section = section_name(remote_name);
    let matching: Vec<_> = ini
        .iter()
        .filter(|(name, _)| *name == Some(section.as_str()))
        .map(|(_, properties)| properties)
        .collect();

    if matching.is_empty() {
        return Err(Error::SectionNotFound {
            section,
            path: path.to_path_buf(),
        });
    }

    let urls = matching
        .iter()
        .flat_map(|properties| properties.get_all(URL_KEY))
        .chain(
            matching
                .iter()
                .flat_map(|properties| properties.get_all(PUSHURL_KEY)),
        );

    Ok(RemoteUrlSet::new(urls))
}

/// Renders a remote in the portable config format.
///
/// Only `url` lines are produced.
pub fn render(set: &RemoteUrlSet, remote_name: &str) -> String {
    let mut output = String::new();
    output.push('[');
    output.push_str(&section_name(remote_name));
    output.push_str("]\n");

    for url in set.urls() {
        output.push_str(URL_KEY);
        output.push_str(" = ");
        output.push_str(url);
        output.push('\n');
    }

    output
}

/// Overwrites the config file with the rendered remote.
///
/// Any previous content of the file is discarded.
///
/// # Errors
///
/// Returns [`Error::FileWrite`] if the file cannot be written.
pub fn write_remote(config: &SyncConfig, set: &RemoteUrlSet) -> Result<()> {
    let content = render(set, &config.remote_name);
    fs::write(&config.config_path, content).map_err(|source| Error::FileWrite {
        path: config.config_path.clone(),
        source,
    })?;
    debug!(
        "Wrote {} URL(s) for {} to {}",
        set.len(),
        config.remote_name,
        config.config_path.display()
    );
    Ok(())
}
