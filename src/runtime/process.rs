//! Child process invocation.

use anyhow::{Context, Result};
use std::path::Path;
use tokio::process::Command;

use super::RealRuntime;

/// Exit status of a finished child process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandStatus {
    /// Exit code, `None` when the process was terminated by a signal.
    pub code: Option<i32>,
}

impl CommandStatus {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Captured result of a finished child process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub status: CommandStatus,
    pub stdout: String,
    pub stderr: String,
}

impl RealRuntime {
    #[tracing::instrument(skip(self, args))]
    pub(crate) async fn run_command_impl(
        &self,
        program: &str,
        args: &[String],
        cwd: &Path,
    ) -> Result<CommandStatus> {
        let status = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .status()
            .await
            .with_context(|| format!("Failed to run {}", program))?;
        Ok(CommandStatus {
            code: status.code(),
        })
    }

    #[tracing::instrument(skip(self, args))]
    pub(crate) async fn command_output_impl(
        &self,
        program: &str,
        args: &[String],
    ) -> Result<CommandOutput> {
        let output = Command::new(program)
            .args(args)
            .output()
            .await
            .with_context(|| format!("Failed to run {}", program))?;
        Ok(CommandOutput {
            status: CommandStatus {
                code: output.status.code(),
            },
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
