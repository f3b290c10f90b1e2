use std::collections::HashSet;
use std::ffi::OsString;
use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::{CommandRunner, display_command};

/// Records invocations instead of spawning processes.
#[derive(Default)]
pub struct FakeCommandRunner {
    pub invocations: Mutex<Vec<String>>,
    available: Mutex<HashSet<String>>,
    failing: Mutex<HashSet<String>>,
}

impl FakeCommandRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runner on which every program in `programs` resolves.
    pub fn with_available(programs: &[&str]) -> Self {
        let runner = Self::new();
        runner.available.lock().unwrap().extend(programs.iter().map(|p| p.to_string()));
        runner
    }

    /// Make every invocation whose rendered command line starts with `prefix` fail.
    pub fn fail_on(&self, prefix: &str) {
        self.failing.lock().unwrap().insert(prefix.to_string());
    }

    pub fn invocations(&self) -> Vec<String> {
        self.invocations.lock().unwrap().clone()
    }
}

impl CommandRunner for FakeCommandRunner {
    fn run(&self, program: &str, args: &[OsString]) -> Result<(), AppError> {
        let rendered = display_command(program, args);
        self.invocations.lock().unwrap().push(rendered.clone());
        let fails = self.failing.lock().unwrap().iter().any(|prefix| rendered.starts_with(prefix));
        if fails {
            return Err(AppError::ToolFailed { command: rendered, details: "exit status: 2".into() });
        }
        // A successful package install makes the unpack tools resolvable.
        if program == "sudo" {
            self.available.lock().unwrap().extend(["7z".to_string(), "dmg2img".to_string()]);
        }
        Ok(())
    }

    fn is_available(&self, program: &str) -> bool {
        self.available.lock().unwrap().contains(program)
    }
}
