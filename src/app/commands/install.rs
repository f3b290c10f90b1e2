//! Install the converted IDE under a prefix and register a desktop entry.

use std::fs;
use std::path::{Path, PathBuf};

use crate::adapters::local_fs::{copy_tree, ensure_dir, remove_path};
use crate::app::InstallConfig;
use crate::domain::layout::TOOLCHAIN_DIR;
use crate::domain::{AppError, DesktopEntry, Version};

/// Where a prefix install lands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallTarget {
    pub install_path: PathBuf,
    pub toolchain_path: PathBuf,
    /// Desktop entry suffix, `-<major>.<minor>` for legacy releases.
    pub suffix: String,
}

impl InstallTarget {
    /// Current releases install as `<prefix>/DevEco-Studio` with the toolchain
    /// beside it. Legacy releases get a versioned directory holding both, so
    /// several can be installed side by side.
    pub fn resolve(prefix: &Path, version: Version) -> Self {
        if version.is_legacy() {
            let suffix = format!("-{}", version.short());
            let install_path = prefix.join(format!("DevEco-Studio{suffix}"));
            let toolchain_path = install_path.join(TOOLCHAIN_DIR);
            Self { install_path, toolchain_path, suffix }
        } else {
            Self {
                install_path: prefix.join("DevEco-Studio"),
                toolchain_path: prefix.join(TOOLCHAIN_DIR),
                suffix: String::new(),
            }
        }
    }
}

/// Result of a prefix install.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallOutcome {
    pub install_path: PathBuf,
    pub desktop_entry: Option<PathBuf>,
}

/// Copy the IDE tree and toolchain under `prefix`, then write the desktop entry
/// unless the configuration disables it.
pub fn install_to_prefix(
    config: &InstallConfig,
    prefix: &Path,
    ide_dir: &Path,
    toolchain_dir: &Path,
    version: Version,
) -> Result<InstallOutcome, AppError> {
    let target = InstallTarget::resolve(prefix, version);
    println!("Installing into {} ...", target.install_path.display());

    ensure_dir(prefix)?;
    remove_path(&target.install_path)?;
    let copied = copy_tree(ide_dir, &target.install_path)?;
    tracing::info!("Copied {} IDE files to {}", copied, target.install_path.display());
    let copied = copy_tree(toolchain_dir, &target.toolchain_path)?;
    tracing::info!("Copied {} toolchain files to {}", copied, target.toolchain_path.display());

    let desktop_entry = if config.create_desktop_entry {
        Some(write_desktop_entry(&config.home_dir, &target)?)
    } else {
        tracing::info!("Desktop entry disabled");
        None
    };

    Ok(InstallOutcome { install_path: target.install_path, desktop_entry })
}

fn write_desktop_entry(home: &Path, target: &InstallTarget) -> Result<PathBuf, AppError> {
    let entry = DesktopEntry::new(&target.install_path, target.suffix.clone());
    let path = entry.path_in(home);
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    fs::write(&path, entry.render()).map_err(|e| AppError::filesystem("write", &path, e))?;
    tracing::info!("Wrote desktop entry {}", path.display());
    Ok(path)
}
