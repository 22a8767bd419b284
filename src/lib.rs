//! # origin-sync
//!
//! Keeps a repository's `origin` remote in sync with a small, portable
//! config file that can be committed alongside the code.
//!
//! ## Quick Example
//!
//! ```
//! use origin_sync::config::{parse_remote, render};
//!
//! let content = r#"
//! [remote "origin"]
//! url = https://example.com/repo.git
//! pushurl = https://mirror.example.com/repo.git
//! url = https://example.com/repo.git
//! "#;
//!
//! let set = parse_remote(content, "origin").unwrap();
//! assert_eq!(set.len(), 2);
//!
//! // Saved files only ever contain `url` lines.
//! assert_eq!(
//!     render(&set, "origin"),
//!     "[remote \"origin\"]\n\
//!      url = https://example.com/repo.git\n\
//!      url = https://mirror.example.com/repo.git\n"
//! );
//! ```
//!
//! ## Core Concepts
//!
//! - **URL sets (`remote`, `dedup`)**: an ordered, duplicate-free list of
//!   URLs for one remote. The first URL stays first.
//! - **Config file (`config`)**: reads `url`/`pushurl` entries of a
//!   `[remote "origin"]` section, writes `url` entries back.
//! - **Repository (`repository`, `git`)**: reads the live remote and replaces
//!   it, reporting exactly what state the repository was left in.
//! - **Dispatch (`dispatch`)**: the `apply` and `save` flows.
//!
//! ## Execution Flow
//!
//! - `apply`: config file → URL set → repository `origin`
//! - `save`: repository `origin` → URL set → config file

pub mod config;
pub mod dedup;
pub mod dispatch;
pub mod error;
pub mod git;
pub mod output;
pub mod remote;
pub mod repository;

#[cfg(test)]
mod dedup_proptest;
