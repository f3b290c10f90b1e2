//! Rewrite `bin/idea.sh` of an IDE tree for the studio's launch descriptor.

use std::fs;
use std::path::Path;

use crate::domain::launcher_script::CLASS_PATH_VAR;
use crate::domain::layout::{launcher_backup, launcher_script};
use crate::domain::{AppError, LauncherRewriter, ProductInfo, RewriteOutcome, Version};

/// Rewrite the launcher script of `ide_dir`.
///
/// The first run saves the pristine script as `bin/idea_bak.sh`; every run
/// rewrites from that backup, so repeated runs produce the same script.
pub fn rewrite_launcher(
    ide_dir: &Path,
    product: &ProductInfo,
    version: Version,
) -> Result<RewriteOutcome, AppError> {
    let script = launcher_script(ide_dir);
    let backup = launcher_backup(ide_dir);

    if !backup.exists() {
        fs::copy(&script, &backup).map_err(|e| AppError::filesystem("back up", &script, e))?;
        tracing::info!("Saved original launcher to {}", backup.display());
    }
    let original =
        fs::read_to_string(&backup).map_err(|e| AppError::filesystem("read", &backup, e))?;

    let rewriter = LauncherRewriter::new(product.launch(), version);
    let outcome = rewriter.rewrite(&original);

    if !outcome.classpath_inserted {
        tracing::warn!("No {} declaration found in {}", CLASS_PATH_VAR, backup.display());
    }
    if !outcome.property_block_rewritten {
        tracing::warn!("No property flag block found in {}", backup.display());
    }
    if outcome.dropped_classpath_lines > 0 {
        tracing::debug!("Dropped {} stale classpath lines", outcome.dropped_classpath_lines);
    }

    fs::write(&script, &outcome.content).map_err(|e| AppError::filesystem("write", &script, e))?;
    tracing::info!(
        "Rewrote {} ({} classpath jars, {} property substitutions)",
        script.display(),
        rewriter.classpath().lines().len(),
        rewriter.substitutions().len()
    );
    Ok(outcome)
}
