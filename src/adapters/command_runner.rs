use std::ffi::OsString;
use std::process::{Command, Stdio};

use crate::domain::AppError;
use crate::ports::{CommandRunner, display_command};

/// Runs tools as child processes. Tool stdout is forwarded to ours; stderr is
/// captured for diagnostics.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCommandRunner;

impl SystemCommandRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemCommandRunner {
    fn run(&self, program: &str, args: &[OsString]) -> Result<(), AppError> {
        let rendered = display_command(program, args);
        tracing::info!("Running {}", rendered);

        let mut command = Command::new(program);
        command.args(args).stdin(Stdio::null()).stdout(Stdio::inherit()).stderr(Stdio::piped());

        let output = command
            .output()
            .map_err(|e| AppError::ToolFailed { command: rendered.clone(), details: e.to_string() })?;

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        if !output.status.success() {
            let details = if stderr.is_empty() { output.status.to_string() } else { stderr };
            return Err(AppError::ToolFailed { command: rendered, details });
        }
        if !stderr.is_empty() {
            tracing::warn!("{} reported: {}", program, stderr);
        }
        Ok(())
    }

    fn is_available(&self, program: &str) -> bool {
        which::which(program).is_ok()
    }
}
