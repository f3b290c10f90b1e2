//! deveco-port: run the macOS DevEco Studio release on Linux by merging it into
//! an IntelliJ IDEA Community base.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;


pub use app::api::{PortReport, install, rewrite_launcher_script};
pub use app::{AppContext, InstallConfig};
pub use domain::{
    AppError, LaunchDescriptor, LauncherRewriter, ProductInfo, RewriteOutcome, SdkProvisioning,
    Version,
};
