//! Vendor input files located by name in the source directory.

use std::path::{Path, PathBuf};

use regex::Regex;

use crate::domain::AppError;

pub const VENDOR_DOWNLOADS: &str = "https://developer.huawei.com/consumer/cn/download/";

/// Java runtime required by legacy releases.
pub const RUNTIME_ARCHIVE: &str = "jbrsdk_jcef-17.0.6-linux-x64-b829.1.tar.gz";
pub const RUNTIME_DOWNLOAD: &str =
    "https://github.com/JetBrains/JetBrainsRuntime/releases/tag/jbr-release-17.0.6b829.1";

pub const IDEA_DOWNLOAD: &str = "https://www.jetbrains.com/idea/download/other.html";

/// One kind of input and how to recognise it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    StudioImage,
    Toolchain,
    Runtime,
}

impl InputKind {
    pub fn describe(self) -> &'static str {
        match self {
            InputKind::StudioImage => "DevEco Studio disk image",
            InputKind::Toolchain => "command-line tools archive",
            InputKind::Runtime => "JetBrains runtime archive",
        }
    }

    /// Human-readable pattern, used in diagnostics.
    pub fn pattern(self) -> &'static str {
        match self {
            InputKind::StudioImage => "deveco-studio-*.dmg",
            InputKind::Toolchain => "commandline-tools-linux-*.zip",
            InputKind::Runtime => RUNTIME_ARCHIVE,
        }
    }

    fn regex(self) -> Regex {
        let source = match self {
            InputKind::StudioImage => r"^deveco-studio-.*\.dmg$".to_string(),
            InputKind::Toolchain => r"^commandline-tools-linux-.*\.zip$".to_string(),
            InputKind::Runtime => format!("^{}$", regex::escape(RUNTIME_ARCHIVE)),
        };
        Regex::new(&source).expect("input patterns are valid regexes")
    }

    fn hint(self) -> String {
        match self {
            InputKind::StudioImage => format!(
                "Download the Mac (X86) release of DevEco Studio, extract it and place the .dmg image in the source directory ({VENDOR_DOWNLOADS})"
            ),
            InputKind::Toolchain => format!(
                "Download the Linux command-line tools and place the .zip archive in the source directory ({VENDOR_DOWNLOADS})"
            ),
            InputKind::Runtime => {
                format!("Download the runtime and place it in the source directory ({RUNTIME_DOWNLOAD})")
            }
        }
    }

    /// Error for an input that could not be resolved in `dir`.
    pub fn missing(self, dir: &Path) -> AppError {
        AppError::MissingInput {
            what: self.describe().to_string(),
            pattern: self.pattern().to_string(),
            dir: dir.display().to_string(),
            hint: self.hint(),
        }
    }
}

/// Inputs found in the source directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputArchives {
    pub studio_image: Option<PathBuf>,
    pub toolchain: Option<PathBuf>,
    pub runtime: Option<PathBuf>,
}

impl InputArchives {
    /// Match entry names of `dir`. When several names match one kind, the
    /// lexicographically greatest wins.
    pub fn discover<S: AsRef<str>>(dir: &Path, names: &[S]) -> Self {
        let mut sorted: Vec<&str> = names.iter().map(AsRef::as_ref).collect();
        sorted.sort_unstable();

        let find = |kind: InputKind| {
            let regex = kind.regex();
            sorted.iter().rev().find(|name| regex.is_match(name)).map(|name| dir.join(name))
        };

        Self {
            studio_image: find(InputKind::StudioImage),
            toolchain: find(InputKind::Toolchain),
            runtime: find(InputKind::Runtime),
        }
    }

    pub fn require(&self, kind: InputKind, dir: &Path) -> Result<&Path, AppError> {
        let found = match kind {
            InputKind::StudioImage => self.studio_image.as_deref(),
            InputKind::Toolchain => self.toolchain.as_deref(),
            InputKind::Runtime => self.runtime.as_deref(),
        };
        found.ok_or_else(|| kind.missing(dir))
    }
}

/// Error for a missing `idea-IC-<build>` directory.
pub fn missing_ide_dir(dir: &Path, expected: &str) -> AppError {
    AppError::MissingInput {
        what: "IntelliJ IDEA Community directory".to_string(),
        pattern: expected.to_string(),
        dir: dir.display().to_string(),
        hint: format!(
            "Download IntelliJ IDEA Community Edition for Linux x86_64 (tar.gz), extract it and place the folder in the source directory ({IDEA_DOWNLOAD})"
        ),
    }
}
