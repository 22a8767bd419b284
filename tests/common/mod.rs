//! Shared test utilities for the CLI end-to-end tests.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_origin(&["https://example.com/a.git"]);
//!     fixture.command().arg("save").assert().success();
//! }
//! ```

use std::path::Path;
use std::process::Command;

use assert_fs::prelude::*;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_fs::prelude::*;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::configs;
    pub use super::TestFixture;
}

/// Config file snippets for testing.
#[allow(dead_code)]
pub mod configs {
    /// Two URLs for origin.
    pub const TWO_URLS: &str = r#"[remote "origin"]
url = https://example.com/repo.git
url = https://mirror.example.com/repo.git
"#;

    /// The same URL twice.
    pub const REPEATED_URL: &str = r#"[remote "origin"]
url = A
url = A
"#;

    /// url, pushurl and a url that repeats the pushurl.
    pub const URL_PUSHURL_URL: &str = r#"[remote "origin"]
url = A
pushurl = B
url = B
"#;

    /// An origin section with a push-only URL.
    pub const WITH_PUSHURL: &str = r#"[remote "origin"]
url = https://example.com/repo.git
pushurl = ssh://git@example.com/repo.git
"#;

    /// A section for some other remote only.
    pub const UPSTREAM_ONLY: &str = r#"[remote "upstream"]
url = https://upstream.example.com/repo.git
"#;

    /// An origin section without any URL.
    pub const EMPTY_ORIGIN: &str = r#"[remote "origin"]
fetch = +refs/heads/*:refs/remotes/origin/*
"#;

    /// A URL that `git remote add` takes for an option and rejects.
    pub const OPTION_LIKE_URL: &str = r#"[remote "origin"]
url = --bogus-url
"#;
}

fn git(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .arg("-C")
        .arg(dir)
        .args(args)
        .output()
        .expect("git must be installed to run these tests");
    assert!(
        output.status.success(),
        "git {} failed: {}",
        args.join(" "),
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// A freshly initialised git repository in a temporary directory.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

impl TestFixture {
    /// Create a new, empty git repository.
    pub fn new() -> Self {
        let temp_dir = assert_fs::TempDir::new().expect("Failed to create temp directory");
        git(temp_dir.path(), &["init", "--quiet"]);
        Self { temp_dir }
    }

    /// Write the default `.gitconfig` config file.
    pub fn with_config(self, content: &str) -> Self {
        self.with_file(".gitconfig", content)
    }

    /// Add a file with the given path and content.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Configure the `origin` remote with the given URLs.
    pub fn with_origin(self, urls: &[&str]) -> Self {
        self.with_remote("origin", urls)
    }

    /// Configure a remote with the given URLs.
    pub fn with_remote(self, name: &str, urls: &[&str]) -> Self {
        let (first, rest) = urls.split_first().expect("at least one URL");
        git(self.path(), &["remote", "add", name, first]);
        let key = format!("remote.{}.url", name);
        for url in rest {
            git(self.path(), &["config", "--add", &key, url]);
        }
        self
    }

    /// Run an arbitrary git command in the repository during setup.
    #[allow(dead_code)]
    pub fn with_git(self, args: &[&str]) -> Self {
        git(self.path(), args);
        self
    }

    /// Create an empty commit, so refs have something to point at.
    #[allow(dead_code)]
    pub fn with_commit(self) -> Self {
        self.with_git(&[
            "-c",
            "user.name=Test",
            "-c",
            "user.email=test@example.com",
            "commit",
            "--allow-empty",
            "--quiet",
            "-m",
            "initial",
        ])
    }

    /// Get the path to the repository root.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create a child path in the repository.
    #[allow(dead_code)]
    pub fn child(&self, path: &str) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child(path)
    }

    /// Names of the configured remotes.
    #[allow(dead_code)]
    pub fn remotes(&self) -> Vec<String> {
        git(self.path(), &["remote"])
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// URLs of a remote as stored by git; empty if the remote does not exist.
    pub fn remote_urls(&self, name: &str) -> Vec<String> {
        let output = Command::new("git")
            .arg("-C")
            .arg(self.path())
            .args(["config", "--get-all", &format!("remote.{}.url", name)])
            .output()
            .expect("git must be installed to run these tests");
        String::from_utf8_lossy(&output.stdout)
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Value of a git config key, if set.
    #[allow(dead_code)]
    pub fn config_value(&self, key: &str) -> Option<String> {
        let output = Command::new("git")
            .arg("-C")
            .arg(self.path())
            .args(["config", "--get", key])
            .output()
            .expect("git must be installed to run these tests");
        output
            .status
            .success()
            .then(|| String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    /// Whether a ref exists in the repository.
    #[allow(dead_code)]
    pub fn has_ref(&self, name: &str) -> bool {
        Command::new("git")
            .arg("-C")
            .arg(self.path())
            .args(["show-ref", "--verify", "--quiet", name])
            .status()
            .expect("git must be installed to run these tests")
            .success()
    }

    /// Create a command configured to run in this fixture's directory.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("origin-sync");
        cmd.current_dir(self.path())
            .env_remove("RUST_LOG")
            .arg("--color")
            .arg("never");
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
