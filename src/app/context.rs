use crate::app::config::InstallConfig;
use crate::ports::CommandRunner;

/// Application context holding dependencies for command execution.
pub struct AppContext<R: CommandRunner> {
    config: InstallConfig,
    runner: R,
}

impl<R: CommandRunner> AppContext<R> {
    /// Create a new application context.
    pub fn new(config: InstallConfig, runner: R) -> Self {
        Self { config, runner }
    }

    /// Get a reference to the install configuration.
    pub fn config(&self) -> &InstallConfig {
        &self.config
    }

    /// Get a reference to the external tool runner.
    pub fn runner(&self) -> &R {
        &self.runner
    }
}
