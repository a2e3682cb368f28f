//! Shell pass-through execution
//!
//! Toolchain command lines run through the platform shell exactly as a
//! Makefile recipe line would, so pipelines, redirections and builtins all
//! behave the same way.

use std::process::{Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};

/// Result of a subprocess execution
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded (exit code 0)
    pub success: bool,

    /// Process exit code (-1 when terminated by a signal)
    pub exit_code: i32,

    /// Captured standard output (empty in pass-through mode)
    pub stdout: String,

    /// Execution duration
    pub duration: Duration,
}

impl CommandResult {
    fn from_status(status: ExitStatus, stdout: String, duration: Duration) -> Self {
        Self {
            success: status.success(),
            exit_code: status.code().unwrap_or(-1),
            stdout,
            duration,
        }
    }
}

/// Split the program name off a shell command line
pub fn program_name(command_line: &str) -> Option<&str> {
    command_line.split_whitespace().next()
}

/// Run a shell command line, either passing stdio through to the child or
/// capturing its output
pub fn run_shell(command_line: &str, inherit_io: bool) -> Result<CommandResult> {
    let start = Instant::now();

    let (shell, shell_arg) = if cfg!(target_os = "windows") {
        ("cmd", "/C")
    } else {
        ("sh", "-c")
    };

    let mut cmd = Command::new(shell);
    cmd.arg(shell_arg).arg(command_line);

    if inherit_io {
        cmd.stdin(Stdio::inherit());
        cmd.stdout(Stdio::inherit());
        cmd.stderr(Stdio::inherit());

        let status = cmd
            .status()
            .with_context(|| format!("Failed to execute `{}`", command_line))?;
        Ok(CommandResult::from_status(
            status,
            String::new(),
            start.elapsed(),
        ))
    } else {
        let output = cmd
            .output()
            .with_context(|| format!("Failed to execute `{}`", command_line))?;
        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        Ok(CommandResult::from_status(
            output.status,
            stdout,
            start.elapsed(),
        ))
    }
}

/// Check if a command exists in PATH
pub fn command_exists(program: &str) -> bool {
    which::which(program).is_ok()
}
