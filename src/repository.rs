//! # Repository Remote Management
//!
//! This module reads the `origin` remote out of a repository and replaces it
//! with a new set of URLs.
//!
//! ## Design
//!
//! Repository access goes through the **`RemoteOperations`** trait, which
//! covers the handful of capabilities the tool needs: listing remotes,
//! deleting and creating a remote, and producing a human-readable listing.
//! [`GitRepository`] implements it on top of the system `git` command (see
//! [`crate::git`]); tests substitute an in-memory implementation.
//!
//! ## Replacing a remote
//!
//! Git has no "replace remote" primitive, so [`apply`] deletes the old remote
//! and then creates the new one. The two steps are not atomic. Instead of
//! hiding that, [`apply`] returns a [`Replacement`] that says exactly which
//! state the repository was left in.

use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::error::{Error, Result};
use crate::remote::{Remote, RemoteUrlSet};

/// Trait for remote operations - allows mocking in tests
pub trait RemoteOperations: Send + Sync {
    /// Lists all remotes with their URLs, in the repository's own order.
    fn list_remotes(&self) -> Result<Vec<Remote>>;

    /// Deletes a remote. Returns `false` if the remote did not exist.
    fn delete_remote(&self, name: &str) -> Result<bool>;

    /// Creates a remote with the given URLs, in order.
    fn create_remote(&self, name: &str, urls: &[String]) -> Result<Remote>;

    /// Human-readable listing of the remotes (`git remote -v`).
    fn show_remotes(&self) -> Result<String>;
}

/// A git working tree driven through the system `git` command.
#[derive(Debug, Clone)]
pub struct GitRepository {
    root: PathBuf,
}

impl GitRepository {
    /// Opens the repository whose root is `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RepositoryNotFound`] if `path` is not the root of a
    /// git working tree.
    pub fn open(path: &Path) -> Result<Self> {
        let root = crate::git::open(path)?;
        debug!("Opened repository at {}", root.display());
        Ok(Self { root })
    }

    /// The canonical repository root.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl RemoteOperations for GitRepository {
    fn list_remotes(&self) -> Result<Vec<Remote>> {
        crate::git::list_remotes(&self.root)
    }

    fn delete_remote(&self, name: &str) -> Result<bool> {
        crate::git::delete_remote(&self.root, name)
    }

    fn create_remote(&self, name: &str, urls: &[String]) -> Result<Remote> {
        crate::git::create_remote(&self.root, name, urls)
    }

    fn show_remotes(&self) -> Result<String> {
        crate::git::remote_listing(&self.root)
    }
}

/// Reads the URLs of `remote_name` from the repository.
///
/// The remote named `remote_name` is used when it exists. Otherwise the
/// first remote the repository reports is used instead, and a warning is
/// logged.
///
/// # Errors
///
/// Returns [`Error::NoRemoteConfigured`] if the repository has no remotes
/// or they cannot be listed.
pub fn read_remote(repo: &dyn RemoteOperations, remote_name: &str) -> Result<RemoteUrlSet> {
    let remotes = repo.list_remotes().map_err(|e| {
        debug!("Listing remotes failed: {}", e);
        Error::NoRemoteConfigured
    })?;

    let position = remotes.iter().position(|r| r.name == remote_name);
    let remote = match position {
        Some(index) => remotes.into_iter().nth(index),
        None => {
            let first = remotes.into_iter().next();
            if let Some(remote) = &first {
                warn!(
                    "No remote named {}; using first remote {} instead",
                    remote_name, remote.name
                );
            }
            first
        }
    }
    .ok_or(Error::NoRemoteConfigured)?;

    Ok(RemoteUrlSet::new(remote.urls))
}

/// The state a repository was left in by [`apply`].
#[derive(Debug)]
pub enum Replacement {
    /// The remote now has exactly the requested URLs.
    Replaced {
        /// URLs the remote had before, if it existed.
        previous: Option<RemoteUrlSet>,
        /// URLs as stored by the repository after the change.
        current: RemoteUrlSet,
    },
    /// The old remote was deleted but the new one could not be created.
    /// The repository now has no remote of that name.
    LeftEmpty {
        previous: Option<RemoteUrlSet>,
        error: Error,
    },
    /// Nothing was changed.
    Unchanged { error: Error },
}

impl Replacement {
    pub fn is_replaced(&self) -> bool {
        matches!(self, Replacement::Replaced { .. })
    }
}

/// Replaces remote `remote_name` so that it has exactly the URLs in `set`.
///
/// Any existing remote of that name is deleted first (a missing remote is
/// fine), then the remote is recreated. An empty set is refused before
/// anything is deleted.
pub fn apply(repo: &dyn RemoteOperations, remote_name: &str, set: &RemoteUrlSet) -> Replacement {
    if set.is_empty() {
        return Replacement::Unchanged {
            error: Error::EmptyRemote {
                remote: remote_name.to_string(),
            },
        };
    }

    let previous = match repo.list_remotes() {
        Ok(remotes) => remotes
            .into_iter()
            .find(|r| r.name == remote_name)
            .map(|r| RemoteUrlSet::new(r.urls)),
        Err(e) => {
            debug!("Could not record previous URLs of {}: {}", remote_name, e);
            None
        }
    };

    match repo.delete_remote(remote_name) {
        Ok(true) => info!("Removed remote {}", remote_name),
        Ok(false) => debug!("Remote {} did not exist", remote_name),
        Err(e) => {
            return Replacement::Unchanged {
                error: Error::RemoteReplacement {
                    remote: remote_name.to_string(),
                    message: format!("could not delete existing remote: {}", e),
                },
            }
        }
    }

    match repo.create_remote(remote_name, set.urls()) {
        Ok(remote) => {
            info!("Created remote {} with {} URL(s)", remote_name, remote.urls.len());
            Replacement::Replaced {
                previous,
                current: RemoteUrlSet::new(remote.urls),
            }
        }
        Err(e) => Replacement::LeftEmpty {
            previous,
            error: Error::RemoteReplacement {
                remote: remote_name.to_string(),
                message: format!("could not create remote: {}", e),
            },
        },
    }
}
