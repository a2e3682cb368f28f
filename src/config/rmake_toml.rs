//! RMAKE.toml configuration parsing
//!
//! Every section is optional; a project with no RMAKE.toml at all gets the
//! stock Cargo toolchain and the four-step `all` chain.
//!
//! ```toml
//! [project]
//! name = "rlox"
//! version = "0.1.0"
//!
//! [toolchain]
//! check = "cargo clippy"
//!
//! [targets]
//! all = ["check", "clean", "run"]
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::error::{hints, RmakeError};
use crate::graph::Target;
use crate::utils::paths;

pub const CONFIG_FILE: &str = "RMAKE.toml";

/// Root configuration from RMAKE.toml
///
/// Built once at startup and passed explicitly to the dispatcher; never
/// read from ambient global state.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RmakeConfig {
    /// Project metadata
    #[serde(default)]
    pub project: ProjectConfig,

    /// Toolchain command lines, run through the platform shell
    #[serde(default)]
    pub toolchain: ToolchainConfig,

    /// Target graph configuration
    #[serde(default)]
    pub targets: TargetsConfig,

    /// Directory the configuration was loaded from (or the working
    /// directory when no RMAKE.toml exists)
    #[serde(skip)]
    pub root: PathBuf,
}

/// Project metadata from the [project] section
///
/// `version`, `executable` and `prefix` are inert metadata: parsed and
/// surfaced in help/verbose output, never consumed by target logic.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectConfig {
    /// Project name used in status banners
    pub name: Option<String>,

    /// Version string
    pub version: Option<String>,

    /// Executable name produced by the toolchain
    pub executable: Option<String>,

    /// Installation prefix
    pub prefix: Option<PathBuf>,
}

/// Toolchain command lines from the [toolchain] section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ToolchainConfig {
    pub build: String,
    pub check: String,
    pub clean: String,
    pub run: String,
}

impl Default for ToolchainConfig {
    fn default() -> Self {
        Self {
            build: "cargo build".to_string(),
            check: "cargo check".to_string(),
            clean: "cargo clean".to_string(),
            run: "cargo run".to_string(),
        }
    }
}

/// Target graph configuration from the [targets] section
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct TargetsConfig {
    /// Target executed when none is named on the command line
    pub default: String,

    /// Ordered chain executed by the `all` target
    pub all: Vec<String>,

    /// Build output directory removed by `clean`
    pub build_dir: PathBuf,
}

impl Default for TargetsConfig {
    fn default() -> Self {
        Self {
            default: "help".to_string(),
            all: vec![
                "check".to_string(),
                "clean".to_string(),
                "build".to_string(),
                "run".to_string(),
            ],
            build_dir: PathBuf::from("target"),
        }
    }
}

impl RmakeConfig {
    /// Load configuration starting from the current working directory
    pub fn load() -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;
        Self::load_from(&cwd)
    }

    /// Load configuration by walking up from `start` looking for RMAKE.toml
    pub fn load_from(start: &Path) -> Result<Self> {
        let config = match paths::find_config_root(start) {
            Some(root) => {
                let path = root.join(CONFIG_FILE);
                let raw = std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                let mut config: RmakeConfig = toml::from_str(&raw).map_err(|e| {
                    RmakeError::config_error_with_hint(
                        format!("{}: {}", path.display(), e),
                        hints::invalid_rmake_toml(),
                    )
                })?;
                config.root = root;
                config
            }
            None => {
                let mut config = RmakeConfig::default();
                config.root = start.to_path_buf();
                config
            }
        };
        config.validate()?;
        Ok(config)
    }

    /// Project name used in status banners, falling back to the root
    /// directory's name
    pub fn project_name(&self) -> String {
        self.project.name.clone().unwrap_or_else(|| {
            self.root
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| "project".to_string())
        })
    }

    /// Project version string
    pub fn version(&self) -> String {
        self.project
            .version
            .clone()
            .unwrap_or_else(|| "0.1.0".to_string())
    }

    /// Executable name, falling back to the project name
    pub fn executable(&self) -> String {
        self.project
            .executable
            .clone()
            .unwrap_or_else(|| self.project_name())
    }

    /// Installation prefix, falling back to ~/.local
    pub fn prefix(&self) -> PathBuf {
        self.project
            .prefix
            .clone()
            .unwrap_or_else(paths::default_prefix)
    }

    /// The target executed when none is named on the command line
    pub fn default_target(&self) -> Target {
        Target::from_name(&self.targets.default).unwrap_or(Target::Help)
    }

    /// Absolute path of the build output directory
    pub fn build_dir(&self) -> PathBuf {
        self.root.join(&self.targets.build_dir)
    }

    fn validate(&self) -> Result<()> {
        for (label, line) in [
            ("build", &self.toolchain.build),
            ("check", &self.toolchain.check),
            ("clean", &self.toolchain.clean),
            ("run", &self.toolchain.run),
        ] {
            if line.trim().is_empty() {
                return Err(RmakeError::config_error(format!(
                    "toolchain.{} must not be empty",
                    label
                ))
                .into());
            }
        }

        if Target::from_name(&self.targets.default).is_none() {
            return Err(RmakeError::config_error_with_hint(
                format!(
                    "targets.default names unknown target '{}'",
                    self.targets.default
                ),
                hints::valid_targets(),
            )
            .into());
        }

        for name in &self.targets.all {
            let is_chainable = Target::from_name(name).is_some_and(|target| target.is_leaf());
            if !is_chainable {
                return Err(RmakeError::config_error_with_hint(
                    format!("targets.all entry '{}' is not a toolchain target", name),
                    hints::valid_chain_targets(),
                )
                .into());
            }
        }

        Ok(())
    }
}
