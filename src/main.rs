//! # origin-sync CLI
//!
//! Binary entry point for the `origin-sync` command-line tool.
//!
//! It parses the command line with `clap`, opens the repository in the
//! current directory and runs either the apply or the save flow. The logic
//! lives in the `origin_sync` library; this binary only wires it up and
//! turns outcomes into messages and exit codes.

mod cli;
mod commands;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<ExitCode> {
    let cli = cli::Cli::parse();
    cli.execute()
}
