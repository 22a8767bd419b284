//! # CLI Command Implementations
//!
//! One module per flow. Each exposes an `execute` function that runs the
//! flow through the `origin_sync` library and turns the outcome into
//! user-facing messages and an exit code:
//!
//! - "nothing to do" outcomes (missing config, missing section, no remote)
//!   are reported on stderr and exit successfully;
//! - real failures are returned as errors and exit with status 1.

pub mod apply;
pub mod save;
