//! Build target implementation

use anyhow::Result;

use crate::commands::DispatchOptions;
use crate::config::RmakeConfig;
use crate::utils::terminal;

/// Print the build banner and hand off to the toolchain build command.
/// Reached by both the `build` and `compile` target names.
pub fn execute(config: &RmakeConfig, opts: DispatchOptions) -> Result<()> {
    terminal::print_banner(&format!("Building {}", config.project_name()));
    super::invoke_toolchain("build", &config.toolchain.build, opts)
}
