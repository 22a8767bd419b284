//! # Status Markers
//!
//! The CLI prefixes its status lines with a marker: an emoji on a capable
//! terminal, a bracketed tag otherwise (`[OK]`, `[WARN]`, ...).
//!
//! The `--color` flag decides first (`always`, `never`, `auto`). In `auto`
//! mode the environment is consulted:
//! - `NO_COLOR` set (any value) disables markers (https://no-color.org/)
//! - `CLICOLOR=0` disables them
//! - `CLICOLOR_FORCE` set to a non-zero value forces them on
//! - `TERM=dumb` disables them
//! - otherwise the terminal's own color support decides

use std::env;

/// Kinds of status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Ok,
    Warn,
    Error,
    Info,
}

impl Marker {
    fn emoji(self) -> &'static str {
        match self {
            Marker::Ok => "✅",
            Marker::Warn => "⚠️",
            Marker::Error => "❌",
            Marker::Info => "🔗",
        }
    }

    fn plain(self) -> &'static str {
        match self {
            Marker::Ok => "[OK]",
            Marker::Warn => "[WARN]",
            Marker::Error => "[ERR]",
            Marker::Info => "[INFO]",
        }
    }
}

/// Output configuration for status markers.
#[derive(Debug, Clone, Copy)]
pub struct OutputConfig {
    /// Whether emoji markers should be used.
    pub use_color: bool,
}

impl OutputConfig {
    /// Builds the configuration from the `--color` flag value.
    ///
    /// Unknown values behave like `auto`.
    pub fn from_env_and_flag(color_flag: &str) -> Self {
        let use_color = match color_flag.to_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => Self::detect_color_support(),
        };

        Self { use_color }
    }

    fn detect_color_support() -> bool {
        if env::var_os("NO_COLOR").is_some() {
            return false;
        }

        if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
            return false;
        }

        if env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0" && !v.is_empty()) {
            return true;
        }

        if env::var("TERM").is_ok_and(|v| v == "dumb") {
            return false;
        }

        console::Term::stdout().features().colors_supported()
    }

    /// The marker text for a status line.
    pub fn marker(&self, marker: Marker) -> &'static str {
        if self.use_color {
            marker.emoji()
        } else {
            marker.plain()
        }
    }
}
