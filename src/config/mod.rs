//! Configuration loading and validation

mod rmake_toml;

pub use rmake_toml::{RmakeConfig, CONFIG_FILE};
