//! Install configuration, resolved once at startup.

use std::env;
use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// Environment variable naming an existing command-line toolchain.
pub const TOOL_HOME_ENV: &str = "HAMONY_TOOL_HOME";

/// Java agent jar shipped alongside the binary for legacy releases.
pub const JAVA_AGENT_JAR: &str = "deveco_java_agent.jar";

/// Everything the install pipeline needs to know about its environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallConfig {
    /// Directory holding the vendor archives and the IDEA base directory.
    pub source_dir: PathBuf,
    /// Optional install prefix; without it the IDEA base is converted in place.
    pub prefix: Option<PathBuf>,
    /// Whether to write a desktop entry after a prefix install.
    pub create_desktop_entry: bool,
    /// Existing toolchain to link against instead of copying.
    pub tool_home: Option<PathBuf>,
    /// Home directory for the desktop entry.
    pub home_dir: PathBuf,
    /// Java agent jar installed for legacy releases.
    pub java_agent_jar: PathBuf,
}

impl InstallConfig {
    /// Build a configuration with no environment influence. Relative paths are
    /// resolved against the current directory.
    pub fn new(source_dir: impl AsRef<Path>) -> Result<Self, AppError> {
        Ok(Self {
            source_dir: absolute(source_dir.as_ref())?,
            prefix: None,
            create_desktop_entry: true,
            tool_home: None,
            home_dir: PathBuf::new(),
            java_agent_jar: PathBuf::from(JAVA_AGENT_JAR),
        })
    }

    pub fn with_prefix(mut self, prefix: Option<PathBuf>) -> Result<Self, AppError> {
        self.prefix = prefix.map(|p| absolute(&p)).transpose()?;
        Ok(self)
    }

    pub fn with_desktop_entry(mut self, create: bool) -> Self {
        self.create_desktop_entry = create;
        self
    }

    /// Relative toolchain homes are resolved against the current directory.
    pub fn with_tool_home(mut self, tool_home: Option<PathBuf>) -> Result<Self, AppError> {
        self.tool_home = tool_home.map(|p| absolute(&p)).transpose()?;
        Ok(self)
    }

    pub fn with_home_dir(mut self, home_dir: PathBuf) -> Self {
        self.home_dir = home_dir;
        self
    }

    pub fn with_java_agent_jar(mut self, jar: PathBuf) -> Self {
        self.java_agent_jar = jar;
        self
    }

    /// Fill toolchain home, home directory and the default Java agent location
    /// from the process environment.
    pub fn with_environment(mut self) -> Result<Self, AppError> {
        let tool_home = env::var_os(TOOL_HOME_ENV).filter(|v| !v.is_empty()).map(PathBuf::from);
        self = self.with_tool_home(tool_home)?;
        self.home_dir = env::var_os("HOME")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .ok_or_else(|| AppError::config_error("HOME is not set"))?;
        if let Some(dir) = env::current_exe().ok().as_deref().and_then(Path::parent) {
            self.java_agent_jar = dir.join(JAVA_AGENT_JAR);
        }
        Ok(self)
    }

    /// Whether the configured toolchain home is present on disk.
    pub fn tool_home_exists(&self) -> bool {
        self.tool_home.as_deref().is_some_and(Path::exists)
    }
}

fn absolute(path: &Path) -> Result<PathBuf, AppError> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(env::current_dir()?.join(path))
    }
}
