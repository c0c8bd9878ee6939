//! Shell configuration
//!
//! Values come from an optional YAML file and are then overridden by
//! command-line flags:
//!
//! ```yaml
//! theme: purple
//! animate: true
//! tick_ms: 100
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{CliError, CliResult};
use crate::theme::Theme;

/// CLI verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Verbosity {
    /// Quiet - errors only
    Quiet,
    /// Normal - warnings and errors
    #[default]
    Normal,
    /// Verbose - informational messages
    Verbose,
    /// Debug - every engine operation
    Debug,
    /// Trace - engine internals
    Trace,
}

impl Verbosity {
    /// Verbosity from the `-q` flag and the `-v` count
    #[must_use]
    pub const fn from_flags(quiet: bool, verbose: u8) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            2 => Self::Debug,
            _ => Self::Trace,
        }
    }

    /// Log filter directive for this level
    #[must_use]
    pub const fn filter_directive(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Verbose => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

/// Presentation settings for the interactive shell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShellConfig {
    /// Starting color theme
    pub theme: Theme,
    /// Draw the bubble strip
    pub animate: bool,
    /// Animation tick interval in milliseconds
    pub tick_ms: u64,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            animate: true,
            tick_ms: Self::DEFAULT_TICK_MS,
        }
    }
}

impl ShellConfig {
    /// Default animation tick interval
    pub const DEFAULT_TICK_MS: u64 = 100;

    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses configuration from YAML text
    pub fn from_yaml(text: &str, origin: &Path) -> CliResult<Self> {
        let config: Self =
            serde_yaml_ng::from_str(text).map_err(|source| CliError::ConfigFormat {
                path: origin.to_path_buf(),
                source,
            })?;
        config.validate()
    }

    /// Loads configuration from a YAML file
    pub fn load(path: &Path) -> CliResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            CliError::config(format!("cannot read {}: {e}", path.display()))
        })?;
        tracing::info!(path = %path.display(), "loaded configuration file");
        Self::from_yaml(&text, path)
    }

    /// Set theme
    #[must_use]
    pub const fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Set animation
    #[must_use]
    pub const fn with_animate(mut self, animate: bool) -> Self {
        self.animate = animate;
        self
    }

    /// Set tick interval
    #[must_use]
    pub const fn with_tick_ms(mut self, tick_ms: u64) -> Self {
        self.tick_ms = tick_ms;
        self
    }

    /// Animation tick interval
    #[must_use]
    pub const fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    /// Rejects settings the shell cannot run with
    pub fn validate(self) -> CliResult<Self> {
        if self.tick_ms == 0 {
            return Err(CliError::config("tick_ms must be greater than zero"));
        }
        Ok(self)
    }
}
