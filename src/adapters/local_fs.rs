//! Local filesystem operations used by the install pipeline.

use std::fs;
use std::os::unix::fs::{PermissionsExt, symlink};
use std::path::Path;

use walkdir::WalkDir;

use crate::domain::AppError;

fn walk_error(root: &Path, err: walkdir::Error) -> AppError {
    let path = err.path().unwrap_or(root).to_path_buf();
    let source = err.into_io_error().unwrap_or_else(|| std::io::Error::other("filesystem loop"));
    AppError::filesystem("walk", &path, source)
}

/// Whether anything (including a dangling symlink) exists at `path`.
pub fn entry_exists(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}

pub fn ensure_dir(path: &Path) -> Result<(), AppError> {
    fs::create_dir_all(path).map_err(|e| AppError::filesystem("create directory", path, e))
}

/// Remove a file, symlink or directory tree. No-op if absent.
pub fn remove_path(path: &Path) -> Result<(), AppError> {
    let Ok(metadata) = fs::symlink_metadata(path) else {
        return Ok(());
    };
    let result =
        if metadata.is_dir() { fs::remove_dir_all(path) } else { fs::remove_file(path) };
    result.map_err(|e| AppError::filesystem("remove", path, e))
}

/// Copy one file, creating the destination directory.
pub fn copy_file(src: &Path, dst: &Path) -> Result<(), AppError> {
    if let Some(parent) = dst.parent() {
        ensure_dir(parent)?;
    }
    fs::copy(src, dst).map_err(|e| AppError::filesystem("copy", src, e))?;
    tracing::debug!("Copied {} -> {}", src.display(), dst.display());
    Ok(())
}

fn copy_symlink(src: &Path, dst: &Path) -> Result<(), AppError> {
    let target = fs::read_link(src).map_err(|e| AppError::filesystem("read link", src, e))?;
    remove_path(dst)?;
    symlink(&target, dst).map_err(|e| AppError::filesystem("link", dst, e))
}

/// Copy a directory tree, recreating symlinks instead of following them.
/// Returns the number of files and links copied.
pub fn copy_tree(src: &Path, dst: &Path) -> Result<usize, AppError> {
    if !src.is_dir() {
        return Err(AppError::filesystem(
            "copy",
            src,
            std::io::Error::new(std::io::ErrorKind::NotFound, "directory not found"),
        ));
    }

    let mut copied = 0;
    for entry in WalkDir::new(src).follow_links(false) {
        let entry = entry.map_err(|e| walk_error(src, e))?;
        let relative = entry.path().strip_prefix(src).unwrap_or(entry.path());
        let target = dst.join(relative);
        let file_type = entry.file_type();

        if file_type.is_dir() {
            ensure_dir(&target)?;
        } else if file_type.is_symlink() {
            copy_symlink(entry.path(), &target)?;
            copied += 1;
        } else {
            copy_file(entry.path(), &target)?;
            copied += 1;
        }
    }
    Ok(copied)
}

/// `copy_tree` for optional bundle content: a missing source is logged and skipped.
pub fn copy_tree_if_present(src: &Path, dst: &Path) -> Result<usize, AppError> {
    if !src.is_dir() {
        tracing::warn!("Skipping missing directory {}", src.display());
        return Ok(0);
    }
    copy_tree(src, dst)
}

/// Copy every `*.jar` below `src` into `dst`, keeping relative structure.
/// Nothing is copied when `dst` does not exist.
pub fn copy_jars(src: &Path, dst: &Path) -> Result<usize, AppError> {
    if !dst.exists() {
        tracing::warn!("Jar destination {} does not exist, skipping", dst.display());
        return Ok(0);
    }

    let mut copied = 0;
    for entry in WalkDir::new(src).follow_links(false) {
        let entry = entry.map_err(|e| walk_error(src, e))?;
        let is_jar = entry.path().extension().is_some_and(|ext| ext == "jar");
        if !entry.file_type().is_file() || !is_jar {
            continue;
        }
        let relative = entry.path().strip_prefix(src).unwrap_or(entry.path());
        copy_file(entry.path(), &dst.join(relative))?;
        copied += 1;
    }
    Ok(copied)
}

/// Create `link -> target` unless `link` already exists. Absolute targets must
/// exist; relative targets are resolved later, once the install is in place.
pub fn link_if_absent(target: &Path, link: &Path) -> Result<bool, AppError> {
    if entry_exists(link) {
        tracing::debug!("Link {} already present", link.display());
        return Ok(false);
    }
    if target.is_absolute() && !target.exists() {
        tracing::warn!("Link target {} does not exist, skipping {}", target.display(), link.display());
        return Ok(false);
    }
    if let Some(parent) = link.parent() {
        ensure_dir(parent)?;
    }
    symlink(target, link).map_err(|e| AppError::filesystem("link", link, e))?;
    tracing::debug!("Linked {} -> {}", link.display(), target.display());
    Ok(true)
}

/// Add write and execute permission for everyone (`chmod -R a+xw`).
pub fn grant_write_exec(root: &Path) -> Result<(), AppError> {
    for entry in WalkDir::new(root).follow_links(false) {
        let entry = entry.map_err(|e| walk_error(root, e))?;
        if entry.file_type().is_symlink() {
            continue;
        }
        let path = entry.path();
        let metadata = entry.metadata().map_err(|e| walk_error(root, e))?;
        let mut permissions = metadata.permissions();
        permissions.set_mode(permissions.mode() | 0o333);
        fs::set_permissions(path, permissions)
            .map_err(|e| AppError::filesystem("change permissions of", path, e))?;
    }
    Ok(())
}

/// Create an empty marker file recording a completed phase.
pub fn create_marker(path: &Path) -> Result<(), AppError> {
    fs::write(path, b"").map_err(|e| AppError::filesystem("create marker", path, e))
}
