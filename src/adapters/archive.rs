//! Zip and tar.gz extraction.

use std::fs::{self, File};
use std::io::Read;
use std::os::unix::fs::{PermissionsExt, symlink};
use std::path::Path;

use flate2::read::GzDecoder;

use crate::adapters::local_fs::{ensure_dir, remove_path};
use crate::domain::AppError;

const S_IFMT: u32 = 0o170000;
const S_IFLNK: u32 = 0o120000;

fn archive_error(archive: &Path, details: impl ToString) -> AppError {
    AppError::Archive { archive: archive.display().to_string(), details: details.to_string() }
}

/// Extract a zip archive into `dest`, restoring unix modes and symlinks.
pub fn extract_zip(archive: &Path, dest: &Path) -> Result<usize, AppError> {
    let file = File::open(archive).map_err(|e| archive_error(archive, e))?;
    let mut zip = zip::ZipArchive::new(file).map_err(|e| archive_error(archive, e))?;

    let mut extracted = 0;
    for index in 0..zip.len() {
        let mut entry = zip.by_index(index).map_err(|e| archive_error(archive, e))?;
        let Some(relative) = entry.enclosed_name().map(Path::to_path_buf) else {
            tracing::warn!("Skipping unsafe entry {} in {}", entry.name(), archive.display());
            continue;
        };
        let out_path = dest.join(relative);
        let mode = entry.unix_mode();

        if entry.is_dir() {
            ensure_dir(&out_path)?;
            continue;
        }
        if let Some(parent) = out_path.parent() {
            ensure_dir(parent)?;
        }

        if mode.is_some_and(|mode| mode & S_IFMT == S_IFLNK) {
            let mut target = String::new();
            entry.read_to_string(&mut target).map_err(|e| archive_error(archive, e))?;
            remove_path(&out_path)?;
            symlink(&target, &out_path)
                .map_err(|e| AppError::filesystem("link", &out_path, e))?;
        } else {
            let mut outfile = File::create(&out_path)
                .map_err(|e| AppError::filesystem("create", &out_path, e))?;
            std::io::copy(&mut entry, &mut outfile).map_err(|e| archive_error(archive, e))?;
            if let Some(mode) = mode {
                fs::set_permissions(&out_path, fs::Permissions::from_mode(mode & 0o7777))
                    .map_err(|e| AppError::filesystem("change permissions of", &out_path, e))?;
            }
        }
        extracted += 1;
    }

    tracing::info!("Extracted {} entries from {}", extracted, archive.display());
    Ok(extracted)
}

/// Extract a gzip-compressed tarball into `dest`.
pub fn extract_tar_gz(archive: &Path, dest: &Path) -> Result<(), AppError> {
    let file = File::open(archive).map_err(|e| archive_error(archive, e))?;
    let mut tarball = tar::Archive::new(GzDecoder::new(file));
    tarball.set_preserve_permissions(true);
    tarball.unpack(dest).map_err(|e| archive_error(archive, e))?;
    tracing::info!("Extracted {} into {}", archive.display(), dest.display());
    Ok(())
}
