//! Unpack tool bootstrap.

use std::ffi::OsString;

use crate::domain::AppError;
use crate::ports::CommandRunner;

/// Tools needed to unpack the studio disk image.
pub const UNPACK_TOOLS: [&str; 2] = ["7z", "dmg2img"];

/// Debian packages providing `UNPACK_TOOLS`.
const UNPACK_PACKAGES: [&str; 2] = ["p7zip-full", "dmg2img"];

/// Ensure the image unpack tools resolve, installing them with apt if needed.
pub fn ensure_unpack_tools<R: CommandRunner>(runner: &R) -> Result<(), AppError> {
    let missing: Vec<&str> =
        UNPACK_TOOLS.into_iter().filter(|tool| !runner.is_available(tool)).collect();
    if missing.is_empty() {
        return Ok(());
    }

    tracing::info!("Installing missing unpack tools: {}", missing.join(", "));
    println!("Installing {} ...", UNPACK_PACKAGES.join(", "));

    let mut args: Vec<OsString> = ["apt", "install", "-y"].into_iter().map(OsString::from).collect();
    args.extend(UNPACK_PACKAGES.into_iter().map(OsString::from));
    runner.run("sudo", &args).map_err(|e| AppError::PrerequisiteMissing {
        tools: missing.join(", "),
        details: e.to_string(),
    })?;

    let still_missing: Vec<&str> =
        UNPACK_TOOLS.into_iter().filter(|tool| !runner.is_available(tool)).collect();
    if !still_missing.is_empty() {
        return Err(AppError::PrerequisiteMissing {
            tools: still_missing.join(", "),
            details: "not found on PATH after installation".to_string(),
        });
    }
    Ok(())
}
