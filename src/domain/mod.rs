pub mod descriptor;
pub mod desktop_entry;
pub mod error;
pub mod inputs;
pub mod launcher_script;
pub mod layout;
pub mod sdk_provisioning;
pub mod version;

pub use descriptor::{LaunchDescriptor, ProductInfo};
pub use desktop_entry::DesktopEntry;
pub use error::AppError;
pub use inputs::{InputArchives, InputKind};
pub use launcher_script::{LauncherRewriter, RewriteOutcome};
pub use layout::StudioImageLayout;
pub use sdk_provisioning::SdkProvisioning;
pub use version::Version;
