//! Merge the unpacked studio bundle into the IDEA Community base.

use std::fs;
use std::path::{Path, PathBuf};

use crate::adapters::local_fs::{
    copy_file, copy_jars, copy_tree, copy_tree_if_present, create_marker, link_if_absent,
    remove_path,
};
use crate::app::AppContext;
use crate::app::commands::unpack::unpack_runtime;
use crate::domain::layout::{self, STUDIO_ICON, StudioImageLayout, TOOLCHAIN_ENTRIES};
use crate::domain::{AppError, InputKind, SdkProvisioning, Version};
use crate::ports::CommandRunner;

/// Java agent location inside a legacy IDE tree.
const JAVA_AGENT_DEST: &str = "bin/deveco-java-agent.jar";

/// Everything a merge needs, resolved by the pipeline.
#[derive(Debug, Clone)]
pub struct MergePlan {
    pub image: StudioImageLayout,
    /// The `.dmg` the image was unpacked from; names the merge marker.
    pub image_archive: PathBuf,
    pub toolchain_dir: PathBuf,
    pub ide_dir: PathBuf,
    pub version: Version,
    /// Java runtime tarball, required for legacy releases only.
    pub runtime_archive: Option<PathBuf>,
}

/// Copy the studio's jars, plugins and tools into the IDEA base.
/// Returns `false` if an earlier run already merged.
pub fn merge_into_ide<R: CommandRunner>(
    ctx: &AppContext<R>,
    plan: &MergePlan,
) -> Result<bool, AppError> {
    let contents = plan.image.app_contents();
    let marker = layout::marker_for(&contents, &plan.image_archive);
    if marker.exists() {
        tracing::info!("IDE already merged ({})", marker.display());
        return Ok(false);
    }

    println!("Merging DevEco Studio {} into {} ...", plan.version, plan.ide_dir.display());
    let ide = plan.ide_dir.as_path();

    remove_path(&ide.join("plugins"))?;
    let jars = copy_jars(&contents.join("lib"), &ide.join("lib"))?;
    tracing::info!("Copied {} jars", jars);
    copy_tree(&contents.join("plugins"), &ide.join("plugins"))?;

    if plan.version.is_legacy() {
        merge_legacy_tools(ctx, plan, &contents)?;
    } else {
        let config = ctx.config();
        let provisioning = SdkProvisioning::resolve(
            config.tool_home.as_deref(),
            config.tool_home_exists(),
            config.prefix.as_deref(),
        );
        provision_toolchain(&provisioning, &plan.toolchain_dir, ide)?;
        copy_tree_if_present(&contents.join("tools/llvm"), &ide.join("tools/llvm"))?;
    }

    if ide.join("jbr").exists() {
        link_if_absent(Path::new("../../bin"), &ide.join("jbr/Contents/Home/bin"))?;
    }

    copy_file(&contents.join(STUDIO_ICON), &ide.join(STUDIO_ICON))?;

    create_marker(&marker)?;
    Ok(true)
}

/// Wire the toolchain `sdk` and `tools/*` entries into the IDE tree.
pub fn provision_toolchain(
    provisioning: &SdkProvisioning,
    toolchain_dir: &Path,
    ide_dir: &Path,
) -> Result<(), AppError> {
    tracing::info!("Provisioning toolchain: {:?}", provisioning);
    for (entry, dest) in TOOLCHAIN_ENTRIES {
        let destination = ide_dir.join(dest);
        let depth = Path::new(dest).components().count();
        match provisioning.link_target(entry, depth) {
            Some(target) => {
                link_if_absent(&target, &destination)?;
            }
            None => {
                copy_tree_if_present(&toolchain_dir.join(entry), &destination)?;
            }
        }
    }
    Ok(())
}

fn merge_legacy_tools<R: CommandRunner>(
    ctx: &AppContext<R>,
    plan: &MergePlan,
    contents: &Path,
) -> Result<(), AppError> {
    let ide = plan.ide_dir.as_path();
    copy_tree_if_present(&contents.join("tools/hvigor"), &ide.join("tools/hvigor"))?;
    copy_tree_if_present(&contents.join("tools/llvm"), &ide.join("tools/llvm"))?;
    let ohpm = contents.join("tools/ohpm.zip");
    if ohpm.exists() {
        copy_file(&ohpm, &ide.join("tools/ohpm.zip"))?;
    }

    let source = &ctx.config().source_dir;
    let archive = plan.runtime_archive.as_deref().ok_or_else(|| InputKind::Runtime.missing(source))?;
    let runtime = unpack_runtime(archive)?;
    let jbr = ide.join("jbr");
    remove_path(&jbr)?;
    copy_tree(&runtime, &jbr)?;

    let agent = &ctx.config().java_agent_jar;
    if agent.is_file() {
        copy_file(agent, &ide.join(JAVA_AGENT_DEST))?;
        let version_file = ide.join("bin/version.txt");
        fs::write(&version_file, plan.version.short())
            .map_err(|e| AppError::filesystem("write", &version_file, e))?;
    } else {
        tracing::warn!("Java agent {} not found, skipping", agent.display());
    }
    Ok(())
}
