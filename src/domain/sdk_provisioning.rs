//! How the command-line toolchain is wired into the IDE tree.

use std::path::{Path, PathBuf};

use crate::domain::layout::TOOLCHAIN_DIR;

/// Resolved once per run from the toolchain home and the install prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SdkProvisioning {
    /// Copy the toolchain directories into the IDE tree.
    Copy,
    /// Symlink to absolute paths under an existing toolchain home.
    LinkAbsolute(PathBuf),
    /// Symlink to the `command-line-tools` directory installed next to the IDE.
    LinkRelative,
}

impl SdkProvisioning {
    /// `tool_home` is the configured toolchain home, `tool_home_exists` whether
    /// it is present on disk, `prefix` the optional install prefix.
    pub fn resolve(tool_home: Option<&Path>, tool_home_exists: bool, prefix: Option<&Path>) -> Self {
        match (tool_home.filter(|_| tool_home_exists), prefix) {
            (Some(home), Some(prefix)) if is_prefix_toolchain(home, prefix) => {
                SdkProvisioning::LinkRelative
            }
            (Some(home), _) => SdkProvisioning::LinkAbsolute(home.to_path_buf()),
            (None, Some(_)) => SdkProvisioning::LinkRelative,
            (None, None) => SdkProvisioning::Copy,
        }
    }

    /// Link target for a toolchain entry (`sdk`, `hvigor`, `tool/node`, ...)
    /// seen from a link created `depth` directories below the IDE root.
    pub fn link_target(&self, entry: &str, depth: usize) -> Option<PathBuf> {
        match self {
            SdkProvisioning::Copy => None,
            SdkProvisioning::LinkAbsolute(home) => Some(home.join(entry)),
            SdkProvisioning::LinkRelative => {
                let mut target = PathBuf::new();
                for _ in 0..depth {
                    target.push("..");
                }
                Some(target.join(TOOLCHAIN_DIR).join(entry))
            }
        }
    }
}

/// The prefix install places the toolchain at `<prefix>/command-line-tools`.
/// Paths compare component-wise, so trailing separators and `.` segments do
/// not matter. A home nested deeper than that directory is not the prefix
/// toolchain.
fn is_prefix_toolchain(home: &Path, prefix: &Path) -> bool {
    home == prefix.join(TOOLCHAIN_DIR)
}
