//! Shared testing harness for `deveco-port` integration tests.

use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::fixture::ChildPath;
use assert_fs::prelude::*;
use flate2::Compression;
use flate2::write::GzEncoder;
use std::fs::File;
use std::path::{Path, PathBuf};

use super::fixtures::{IDEA_BUILD, IDEA_SH, RUNTIME_ARCHIVE, product_info};

/// Isolated source directory, home directory and install prefix.
///
/// Staged inputs come with their unpack markers, so the pipeline never needs
/// `dmg2img` or `7z` on the test host.
pub(crate) struct TestContext {
    root: TempDir,
}

impl TestContext {
    /// Create a new isolated environment with an empty source directory.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        root.child("source").create_dir_all().expect("Failed to create source directory");
        root.child("home").create_dir_all().expect("Failed to create home directory");
        Self { root }
    }

    pub(crate) fn source(&self) -> ChildPath {
        self.root.child("source")
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub(crate) fn home(&self) -> ChildPath {
        self.root.child("home")
    }

    /// Install prefix (not created up front).
    pub(crate) fn prefix(&self) -> PathBuf {
        self.root.path().join("opt")
    }

    /// `idea-IC-<build>` in the source directory.
    pub(crate) fn ide_dir(&self) -> ChildPath {
        self.source().child(format!("idea-IC-{IDEA_BUILD}"))
    }

    /// Unpacked studio bundle `Contents/`.
    pub(crate) fn app_contents(&self) -> ChildPath {
        self.source().child("DevEco-Studio-Img/DevEco-Studio/DevEco-Studio.app/Contents")
    }

    /// Stage every input for a studio release, already unpacked.
    pub(crate) fn stage_release(&self, version: &str) {
        self.stage_studio_image(version);
        self.stage_toolchain(version);
        self.stage_ide();
    }

    /// The `.dmg`, its marker and the unpacked bundle.
    pub(crate) fn stage_studio_image(&self, version: &str) {
        let source = self.source();
        write(&source.child(format!("deveco-studio-{version}.dmg")), "");
        write(&source.child(format!("deveco-studio-{version}.txt")), "");

        let contents = self.app_contents();
        write(&contents.child("Resources/product-info.json"), &product_info(version));
        write(&contents.child("lib/app.jar"), "app");
        write(&contents.child("lib/util-8.jar"), "util-8");
        write(&contents.child("plugins/harmony/lib/harmony.jar"), "harmony");
        write(&contents.child("tools/llvm/bin/clang"), "clang");
        write(&contents.child("tools/hvigor/bin/hvigorw"), "hvigor");
        write(&contents.child("tools/ohpm.zip"), "ohpm");
        write(&contents.child("bin/devecostudio.svg"), "<svg/>");
    }

    /// The toolchain zip, its marker and the unpacked `command-line-tools/`.
    pub(crate) fn stage_toolchain(&self, version: &str) {
        let source = self.source();
        write(&source.child(format!("commandline-tools-linux-x64-{version}.zip")), "");
        write(&source.child(format!("commandline-tools-linux-x64-{version}.txt")), "");

        let toolchain = source.child("command-line-tools");
        write(&toolchain.child("sdk/default/sdk-pkg.json"), "{}");
        write(&toolchain.child("hvigor/bin/hvigorw"), "hvigor");
        write(&toolchain.child("ohpm/bin/ohpm"), "ohpm");
        write(&toolchain.child("tool/node/bin/node"), "node");
    }

    /// An IDEA Community base with a launcher script.
    pub(crate) fn stage_ide(&self) {
        let ide = self.ide_dir();
        write(&ide.child("bin/idea.sh"), IDEA_SH);
        write(&ide.child("lib/idea.jar"), "idea");
        write(&ide.child("plugins/java/lib/java.jar"), "java");
    }

    /// The Java runtime tarball required by legacy releases.
    pub(crate) fn stage_runtime(&self) {
        let archive = self.source().child(RUNTIME_ARCHIVE);
        let encoder = GzEncoder::new(
            File::create(archive.path()).expect("Failed to create runtime archive"),
            Compression::default(),
        );
        let mut builder = tar::Builder::new(encoder);
        let mut header = tar::Header::new_gnu();
        header.set_size(4);
        header.set_mode(0o755);
        header.set_cksum();
        builder
            .append_data(&mut header, "jbrsdk_jcef-17.0.6-linux-x64-b829.1/bin/java", &b"java"[..])
            .expect("Failed to append runtime entry");
        builder
            .into_inner()
            .and_then(|encoder| encoder.finish())
            .expect("Failed to finish runtime archive");
    }

    /// A Java agent jar outside the source directory.
    pub(crate) fn java_agent(&self) -> PathBuf {
        let agent = self.root.child("deveco_java_agent.jar");
        write(&agent, "agent");
        agent.to_path_buf()
    }

    /// Build a command for invoking the compiled binary with an isolated `$HOME`.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("deveco-port").expect("Failed to locate deveco-port binary");
        cmd.current_dir(self.root.path())
            .env("HOME", self.home().path())
            .env_remove("HAMONY_TOOL_HOME")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Read a file below the IDE directory.
    pub(crate) fn read_ide(&self, relative: &str) -> String {
        std::fs::read_to_string(self.ide_dir().child(relative).path())
            .unwrap_or_else(|e| panic!("Failed to read {relative}: {e}"))
    }
}

fn write(child: &ChildPath, content: &str) {
    child.write_str(content).unwrap_or_else(|e| panic!("Failed to write {}: {e}", display(child)));
}

fn display(child: &ChildPath) -> String {
    let path: &Path = child.path();
    path.display().to_string()
}
