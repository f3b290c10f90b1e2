//! The full port: unpack, merge, rewrite and optionally install.

use std::fs;
use std::path::{Path, PathBuf};

use crate::app::AppContext;
use crate::app::commands::install::install_to_prefix;
use crate::app::commands::launcher::rewrite_launcher;
use crate::app::commands::merge::{MergePlan, merge_into_ide};
use crate::app::commands::unpack::{unpack_studio_image, unpack_toolchain};
use crate::domain::inputs::missing_ide_dir;
use crate::domain::layout::ide_dir_name;
use crate::domain::{AppError, InputArchives, InputKind, ProductInfo, Version};
use crate::ports::CommandRunner;

/// What a completed port produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortReport {
    pub studio_version: Version,
    /// The converted IDEA base inside the source directory.
    pub ide_dir: PathBuf,
    /// Install location when a prefix was given.
    pub install_path: Option<PathBuf>,
    pub desktop_entry: Option<PathBuf>,
    /// Whether this run merged the bundle (false when an earlier run had).
    pub merged: bool,
}

pub fn execute<R: CommandRunner>(ctx: &AppContext<R>) -> Result<PortReport, AppError> {
    let config = ctx.config();
    let source = config.source_dir.as_path();
    if !source.is_dir() {
        return Err(AppError::SourceDirNotFound(source.display().to_string()));
    }

    let names = list_names(source)?;
    let inputs = InputArchives::discover(source, &names);
    tracing::info!("Discovered inputs: {:?}", inputs);

    let dmg = inputs.require(InputKind::StudioImage, source)?.to_path_buf();
    let image = unpack_studio_image(ctx, &dmg)?;
    let descriptor = image.product_info();
    let product = ProductInfo::load(&descriptor)?;
    let (build, version) = product.require_versions(&descriptor)?;
    println!("Found DevEco Studio {} (IDEA build {})", version, build);

    let toolchain_archive = inputs.require(InputKind::Toolchain, source)?;
    let toolchain_dir = unpack_toolchain(ctx, toolchain_archive)?;

    let ide_name = ide_dir_name(&build);
    let ide_dir = source.join(&ide_name);
    if !ide_dir.is_dir() {
        return Err(missing_ide_dir(source, &ide_name));
    }

    let plan = MergePlan {
        image,
        image_archive: dmg,
        toolchain_dir: toolchain_dir.clone(),
        ide_dir: ide_dir.clone(),
        version,
        runtime_archive: inputs.runtime.clone(),
    };
    let merged = merge_into_ide(ctx, &plan)?;
    rewrite_launcher(&ide_dir, &product, version)?;

    let (install_path, desktop_entry) = match config.prefix.as_deref() {
        Some(prefix) => {
            let outcome = install_to_prefix(config, prefix, &ide_dir, &toolchain_dir, version)?;
            (Some(outcome.install_path), outcome.desktop_entry)
        }
        None => (None, None),
    };

    Ok(PortReport { studio_version: version, ide_dir, install_path, desktop_entry, merged })
}

fn list_names(dir: &Path) -> Result<Vec<String>, AppError> {
    let entries = fs::read_dir(dir).map_err(|e| AppError::filesystem("list", dir, e))?;
    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| AppError::filesystem("list", dir, e))?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    Ok(names)
}
