//! API Facade for the application.
//!
//! Glues context creation to command execution for library callers.

use std::path::Path;

use crate::adapters::SystemCommandRunner;
use crate::app::commands::{launcher, port};
use crate::app::{AppContext, InstallConfig};
use crate::domain::version::LEGACY_MAJOR_THRESHOLD;
use crate::domain::{AppError, ProductInfo, RewriteOutcome, Version};

pub use crate::app::commands::port::PortReport;

/// Run the full port for `config`, spawning the real unpack tools.
pub fn install(config: &InstallConfig) -> Result<PortReport, AppError> {
    let ctx = AppContext::new(config.clone(), SystemCommandRunner::new());
    port::execute(&ctx)
}

/// Rewrite `<ide_dir>/bin/idea.sh` for `product` without touching anything else.
///
/// A descriptor without a `version` is treated as a current release, so no
/// legacy flags are added.
pub fn rewrite_launcher_script(
    ide_dir: &Path,
    product: &ProductInfo,
) -> Result<RewriteOutcome, AppError> {
    let version = product.version.unwrap_or(Version::new(LEGACY_MAJOR_THRESHOLD, 0, 0));
    launcher::rewrite_launcher(ide_dir, product, version)
}
