use std::path::{Path, PathBuf};

use crate::domain::layout::{STUDIO_ICON, applications_dir};

/// Freedesktop `.desktop` launcher for an installed studio.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesktopEntry {
    install_path: PathBuf,
    /// `-<major>.<minor>` for side-by-side legacy installs, empty otherwise.
    suffix: String,
}

impl DesktopEntry {
    pub fn new(install_path: &Path, suffix: impl Into<String>) -> Self {
        Self { install_path: install_path.to_path_buf(), suffix: suffix.into() }
    }

    pub fn file_name(&self) -> String {
        format!("DevEco-Studio{}.desktop", self.suffix)
    }

    /// `~/.local/share/applications/DevEco-Studio<suffix>.desktop`
    pub fn path_in(&self, home: &Path) -> PathBuf {
        applications_dir(home).join(self.file_name())
    }

    pub fn render(&self) -> String {
        let install = self.install_path.display();
        let suffix = &self.suffix;
        format!(
            "[Desktop Entry]\n\
             Name=DevEco-Studio{suffix}\n\
             Exec=\"{install}/bin/idea.sh\" %f\n\
             Icon={install}/{STUDIO_ICON}\n\
             Type=Application\n\
             Categories=Development;Harmony;IDE;\n\
             Terminal=false\n\
             StartupWMClass=huawei-deveco-studio{suffix}\n\
             StartupNotify=true\n"
        )
    }
}
