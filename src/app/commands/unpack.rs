//! Unpacking of the vendor archives.
//!
//! Each archive gets a marker file next to it once fully unpacked, so a
//! re-run skips the work and reuses the unpacked tree.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::adapters::archive::{extract_tar_gz, extract_zip};
use crate::adapters::local_fs::{create_marker, grant_write_exec, remove_path};
use crate::app::AppContext;
use crate::app::commands::prerequisites::ensure_unpack_tools;
use crate::domain::layout::{self, StudioImageLayout, TOOLCHAIN_DIR};
use crate::domain::AppError;
use crate::ports::CommandRunner;

/// Convert and unpack the studio `.dmg` into `<source>/DevEco-Studio-Img`.
pub fn unpack_studio_image<R: CommandRunner>(
    ctx: &AppContext<R>,
    dmg: &Path,
) -> Result<StudioImageLayout, AppError> {
    let source = &ctx.config().source_dir;
    let image = StudioImageLayout::new(source);
    let marker = layout::marker_for(source, dmg);
    if marker.exists() {
        tracing::info!("Studio image already unpacked ({})", marker.display());
        return Ok(image);
    }

    ensure_unpack_tools(ctx.runner())?;

    remove_path(&image.img_file())?;
    remove_path(&image.hfsx_file())?;
    remove_path(&image.img_dir())?;

    println!("Unpacking {} ...", dmg.display());
    let runner = ctx.runner();
    runner.run("dmg2img", &[dmg.into(), image.img_file().into()])?;
    runner.run("7z", &["x".into(), image.img_file().into(), output_flag(&image.img_dir())])?;
    // 7z exits non-zero on harmless HFS+ warnings (e.g. resource forks).
    if let Err(e) =
        runner.run("7z", &["x".into(), image.hfsx_file().into(), output_flag(&image.img_dir())])
    {
        tracing::warn!("Ignoring HFS+ extraction failure: {}", e);
    }

    create_marker(&marker)?;
    Ok(image)
}

/// Extract the toolchain zip into `<source>/command-line-tools`.
pub fn unpack_toolchain<R: CommandRunner>(
    ctx: &AppContext<R>,
    archive: &Path,
) -> Result<PathBuf, AppError> {
    let source = &ctx.config().source_dir;
    let toolchain = layout::toolchain_dir(source);
    let marker = layout::marker_for(source, archive);
    if marker.exists() {
        tracing::info!("Toolchain already unpacked ({})", marker.display());
        return Ok(toolchain);
    }

    remove_path(&toolchain)?;
    println!("Unpacking {} ...", archive.display());
    extract_zip(archive, source)?;
    if !toolchain.is_dir() {
        return Err(AppError::Archive {
            archive: archive.display().to_string(),
            details: format!("no top-level {TOOLCHAIN_DIR}/ directory"),
        });
    }
    grant_write_exec(&toolchain)?;

    create_marker(&marker)?;
    Ok(toolchain)
}

/// Extract the Java runtime tarball next to itself; returns the runtime root.
pub fn unpack_runtime(archive: &Path) -> Result<PathBuf, AppError> {
    let name = archive.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
    let stem = name.strip_suffix(".tar.gz").ok_or_else(|| AppError::Archive {
        archive: archive.display().to_string(),
        details: "expected a .tar.gz archive".to_string(),
    })?;
    let dest = archive.parent().unwrap_or(Path::new("."));

    println!("Unpacking {} ...", archive.display());
    extract_tar_gz(archive, dest)?;
    Ok(dest.join(stem))
}

fn output_flag(dir: &Path) -> OsString {
    let mut flag = OsString::from("-o");
    flag.push(dir.as_os_str());
    flag
}
