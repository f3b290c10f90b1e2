use std::path::{Path, PathBuf};

/// Unpacked command-line toolchain directory name.
pub const TOOLCHAIN_DIR: &str = "command-line-tools";

/// Marker files are named after the archive stem with this extension.
pub const MARKER_EXTENSION: &str = "txt";

/// Vendor descriptor, relative to the app bundle `Contents/`.
pub const PRODUCT_INFO: &str = "Resources/product-info.json";

/// Studio icon, relative to both the bundle `Contents/` and the IDE root.
pub const STUDIO_ICON: &str = "bin/devecostudio.svg";

/// Toolchain entries wired into the IDE: (entry in toolchain, destination in IDE).
pub const TOOLCHAIN_ENTRIES: [(&str, &str); 4] = [
    ("sdk", "sdk"),
    ("hvigor", "tools/hvigor"),
    ("ohpm", "tools/ohpm"),
    ("tool/node", "tools/node"),
];

/// `<dir>/<archive stem>.txt`
pub fn marker_for(dir: &Path, archive: &Path) -> PathBuf {
    let stem = archive.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default();
    dir.join(format!("{stem}.{MARKER_EXTENSION}"))
}

/// Paths produced by unpacking the studio disk image in `source`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudioImageLayout {
    source: PathBuf,
}

impl StudioImageLayout {
    pub fn new(source: &Path) -> Self {
        Self { source: source.to_path_buf() }
    }

    /// Raw image converted by dmg2img.
    pub fn img_file(&self) -> PathBuf {
        self.source.join("deveco-studio.img")
    }

    pub fn img_dir(&self) -> PathBuf {
        self.source.join("DevEco-Studio-Img")
    }

    /// HFS+ partition extracted from the raw image.
    pub fn hfsx_file(&self) -> PathBuf {
        self.img_dir().join("disk image.hfsx")
    }

    pub fn studio_dir(&self) -> PathBuf {
        self.img_dir().join("DevEco-Studio")
    }

    /// `DevEco-Studio.app/Contents`
    pub fn app_contents(&self) -> PathBuf {
        self.studio_dir().join("DevEco-Studio.app").join("Contents")
    }

    pub fn product_info(&self) -> PathBuf {
        self.app_contents().join(PRODUCT_INFO)
    }
}

/// `<source>/command-line-tools`
pub fn toolchain_dir(source: &Path) -> PathBuf {
    source.join(TOOLCHAIN_DIR)
}

/// `idea-IC-<build>`
pub fn ide_dir_name(build: &crate::domain::Version) -> String {
    format!("idea-IC-{build}")
}

/// Launcher script inside an IDE root.
pub fn launcher_script(ide_dir: &Path) -> PathBuf {
    ide_dir.join("bin").join("idea.sh")
}

/// Pristine copy of the launcher script, created once.
pub fn launcher_backup(ide_dir: &Path) -> PathBuf {
    ide_dir.join("bin").join("idea_bak.sh")
}

/// Freedesktop launcher entries of the current user.
pub fn applications_dir(home: &Path) -> PathBuf {
    home.join(".local").join("share").join("applications")
}
