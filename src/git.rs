//! Thin wrappers around the system `git` executable.
//!
//! Every function takes the repository root and runs `git -C <root> ...`,
//! so the user's own git installation and configuration are used as-is.
//! Remotes may carry several `url` entries; they are read with
//! `git config --get-all` and written with `git config --add`.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use log::{debug, trace};

use crate::error::{Error, Result};
use crate::remote::Remote;

fn git(root: &Path, args: &[&str]) -> Result<Output> {
    trace!("git -C {} {}", root.display(), args.join(" "));
    let output = Command::new("git")
        .arg("-C")
        .arg(root)
        .args(args)
        .output()
        .map_err(|e| Error::GitCommand {
            command: format!("git {}", args.join(" ")),
            stderr: e.to_string(),
        })?;
    Ok(output)
}

fn git_checked(root: &Path, args: &[&str]) -> Result<String> {
    let output = git(root, args)?;

    if !output.status.success() {
        return Err(Error::GitCommand {
            command: format!("git {}", args.join(" ")),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}

/// Verifies that `path` is the root of a git working tree.
///
/// Returns the canonical root path. A subdirectory of a repository is
/// rejected, as is anything that is not a repository at all.
pub fn open(path: &Path) -> Result<PathBuf> {
    let not_found = || Error::RepositoryNotFound {
        path: path.to_path_buf(),
    };

    let requested = fs::canonicalize(path).map_err(|_| not_found())?;
    let toplevel = git_checked(&requested, &["rev-parse", "--show-toplevel"]).map_err(|e| {
        debug!("{} is not a git work tree: {}", requested.display(), e);
        not_found()
    })?;
    let toplevel = fs::canonicalize(toplevel.trim()).map_err(|_| not_found())?;

    if toplevel != requested {
        debug!(
            "{} is inside {} but is not its root",
            requested.display(),
            toplevel.display()
        );
        return Err(not_found());
    }

    Ok(requested)
}

/// Names of all configured remotes, in the order git reports them.
pub fn remote_names(root: &Path) -> Result<Vec<String>> {
    let stdout = git_checked(root, &["remote"])?;
    Ok(stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// All `url` entries of a remote, in config order.
pub fn remote_urls(root: &Path, name: &str) -> Result<Vec<String>> {
    let key = format!("remote.{}.url", name);
    let output = git(root, &["config", "--get-all", &key])?;

    // Exit status 1 means the key is not set.
    match output.status.code() {
        Some(0) => Ok(String::from_utf8_lossy(&output.stdout)
            .lines()
            .map(str::to_string)
            .collect()),
        Some(1) => Ok(Vec::new()),
        _ => Err(Error::GitCommand {
            command: format!("git config --get-all {}", key),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }),
    }
}

/// Lists every remote together with its URLs.
pub fn list_remotes(root: &Path) -> Result<Vec<Remote>> {
    remote_names(root)?
        .into_iter()
        .map(|name| {
            let urls = remote_urls(root, &name)?;
            Ok(Remote::new(name, urls))
        })
        .collect()
}

/// Removes a remote's config section. Returns `false` if no such remote
/// existed.
///
/// Only `[remote "<name>"]` goes away. Branch tracking entries and
/// `refs/remotes/<name>/*` are kept, unlike `git remote remove`.
pub fn delete_remote(root: &Path, name: &str) -> Result<bool> {
    if !remote_names(root)?.iter().any(|n| n == name) {
        return Ok(false);
    }

    let section = format!("remote.{}", name);
    git_checked(root, &["config", "--remove-section", &section])?;
    Ok(true)
}

/// Creates a remote with the given URLs, first URL first.
pub fn create_remote(root: &Path, name: &str, urls: &[String]) -> Result<Remote> {
    let (first, rest) = urls.split_first().ok_or_else(|| Error::EmptyRemote {
        remote: name.to_string(),
    })?;

    git_checked(root, &["remote", "add", name, first])?;

    let key = format!("remote.{}.url", name);
    for url in rest {
        git_checked(root, &["config", "--add", &key, url])?;
    }

    Ok(Remote::new(name, remote_urls(root, name)?))
}

/// Output of `git remote -v`, stdout and stderr combined.
pub fn remote_listing(root: &Path) -> Result<String> {
    let output = git(root, &["remote", "-v"])?;
    let mut combined = String::from_utf8_lossy(&output.stdout).to_string();
    combined.push_str(&String::from_utf8_lossy(&output.stderr));

    if !output.status.success() {
        return Err(Error::GitCommand {
            command: "git remote -v".to_string(),
            stderr: combined.trim().to_string(),
        });
    }

    Ok(combined)
}
