//! Error types and helpers for user-friendly error messages
//!
//! Two failure shapes exist: configuration problems found before anything
//! runs, and toolchain commands exiting non-zero. The latter carry the
//! child's exit code so the shell sees the same code a Makefile would
//! surface.

use thiserror::Error;

/// Custom error types with helpful context and suggestions
#[derive(Error, Debug)]
pub enum RmakeError {
    /// Configuration file errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        hint: Option<String>,
    },

    /// A target's external command exited non-zero
    #[error("target '{target}' failed with exit code {code}")]
    TargetFailed { target: String, code: i32 },
}

impl RmakeError {
    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            hint: None,
        }
    }

    /// Create a configuration error with a hint
    pub fn config_error_with_hint(message: impl Into<String>, hint: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            hint: Some(hint.into()),
        }
    }

    /// Create a target failure error
    pub fn target_failed(target: impl Into<String>, code: i32) -> Self {
        Self::TargetFailed {
            target: target.into(),
            code,
        }
    }

    /// Exit code to surface to the calling shell
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::TargetFailed { code, .. } => *code,
            Self::Config { .. } => 1,
        }
    }

    /// Display error with formatting and hints
    pub fn display_with_hints(&self) {
        use console::style;

        eprintln!("{} {}", style("ERROR:").red().bold(), self);

        let hint = match self {
            Self::Config { hint, .. } => hint.as_deref(),
            Self::TargetFailed { .. } => None,
        };
        if let Some(hint) = hint {
            eprintln!("{} {}", style("HINT:").yellow().bold(), hint);
        }
    }
}

/// Common error hints
pub mod hints {
    /// Hint for a missing cargo toolchain
    pub fn cargo() -> &'static str {
        "Install Rust and Cargo via rustup:\n\
         • curl --proto '=https' --tlsv1.2 -sSf https://sh.rustup.rs | sh\n\
         • or see https://rustup.rs/"
    }

    /// Hint for an unparsable RMAKE.toml
    pub fn invalid_rmake_toml() -> &'static str {
        "RMAKE.toml is invalid. Common issues:\n\
         • Invalid TOML syntax (check quotes, brackets, commas)\n\
         • Misspelled section names ([project], [toolchain], [targets])\n\
         • targets.all must be an array of target names"
    }

    /// Hint listing the valid target names
    pub fn valid_targets() -> &'static str {
        "Valid target names: all, build, compile, clean, check, run, help"
    }

    /// Hint listing the targets allowed inside the `all` chain
    pub fn valid_chain_targets() -> &'static str {
        "targets.all may only chain toolchain targets: build, compile, clean, check, run"
    }
}
