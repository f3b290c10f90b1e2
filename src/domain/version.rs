use std::fmt;

/// Releases below this major version use the legacy bundle layout.
pub const LEGACY_MAJOR_THRESHOLD: u32 = 5;

/// A dotted `major.minor.patch` version (e.g. "5.0.3" or "233.14475.28").
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self { major, minor, patch }
    }

    /// Parse a version string into a `Version` object.
    ///
    /// The first three segments must be numeric. Trailing segments such as the
    /// build suffix in "5.0.3.900" are ignored. Returns `None` otherwise.
    pub fn parse(s: &str) -> Option<Self> {
        let mut segments = s.trim().split('.');
        let mut next = || segments.next().and_then(|segment| segment.parse::<u32>().ok());
        let major = next()?;
        let minor = next()?;
        let patch = next()?;
        Some(Self { major, minor, patch })
    }

    /// Whether this release predates the unified command-line toolchain layout.
    pub fn is_legacy(&self) -> bool {
        self.major < LEGACY_MAJOR_THRESHOLD
    }

    /// `major.minor`, used to tag side-by-side legacy installs.
    pub fn short(&self) -> String {
        format!("{}.{}", self.major, self.minor)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
