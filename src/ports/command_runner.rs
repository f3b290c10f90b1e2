use std::ffi::OsString;

use crate::domain::AppError;

/// Port for invoking external unpack and package tools.
pub trait CommandRunner {
    /// Run `program` with `args`, streaming its output. A non-zero exit status
    /// is reported as `AppError::ToolFailed`.
    fn run(&self, program: &str, args: &[OsString]) -> Result<(), AppError>;

    /// Check whether `program` resolves on `PATH`.
    fn is_available(&self, program: &str) -> bool;
}

/// Render a command line for diagnostics.
pub fn display_command(program: &str, args: &[OsString]) -> String {
    let mut rendered = program.to_string();
    for arg in args {
        rendered.push(' ');
        rendered.push_str(&arg.to_string_lossy());
    }
    rendered
}
