use crate::harness::TestContext;
use crate::harness::fixtures::IDEA_SH;
use assert_fs::prelude::*;
use predicates::prelude::*;
use std::fs;

const EXPECTED_FLAGS: &str = "  ${IDE_PROPERTIES_PROPERTY} \\
  -Djava.system.class.loader=com.intellij.util.lang.PathClassLoader \\
  -Didea.vendor.name=Huawei \\
  -Didea.paths.selector=DevEcoStudio5.0 \\
  -Didea.platform.prefix=DevEcoStudio \\
  com.intellij.idea.Main \\
";

#[test]
fn converts_idea_base_in_place() {
    let ctx = TestContext::new();
    ctx.stage_release("5.0.3.900");

    ctx.cli()
        .arg(ctx.source().path())
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ Converted"))
        .stdout(predicate::str::contains("DevEco Studio 5.0.3"));

    let script = ctx.read_ide("bin/idea.sh");
    assert!(script.contains(
        "CLASS_PATH=\"$IDE_HOME/lib/platform-loader.jar\"\n\
         CLASS_PATH=\"$CLASS_PATH:$IDE_HOME/lib/util-8.jar\"\n\
         CLASS_PATH=\"$CLASS_PATH:$IDE_HOME/lib/app.jar\"\n\n"
    ));
    assert!(!script.contains("lib/util.jar"));
    assert!(script.contains(EXPECTED_FLAGS), "{script}");
    assert!(!script.contains("deveco-java-agent"));
    assert_eq!(ctx.read_ide("bin/idea_bak.sh"), IDEA_SH);

    let ide = ctx.ide_dir();
    ide.child("lib/app.jar").assert("app");
    ide.child("plugins/harmony/lib/harmony.jar").assert(predicate::path::exists());
    ide.child("plugins/java").assert(predicate::path::missing());
    ide.child("tools/llvm/bin/clang").assert(predicate::path::exists());
    ide.child("sdk/default/sdk-pkg.json").assert(predicate::path::exists());
    ide.child("tools/node/bin/node").assert(predicate::path::exists());
    ide.child("bin/devecostudio.svg").assert("<svg/>");
    assert!(!fs::symlink_metadata(ide.child("sdk").path()).unwrap().file_type().is_symlink());
    ctx.app_contents().child("deveco-studio-5.0.3.900.txt").assert(predicate::path::exists());
}

#[test]
fn rerun_refreshes_launcher_only() {
    let ctx = TestContext::new();
    ctx.stage_release("5.0.3.900");
    ctx.cli().arg(ctx.source().path()).assert().success();
    let first = ctx.read_ide("bin/idea.sh");
    fs::remove_file(ctx.ide_dir().child("lib/app.jar").path()).unwrap();

    ctx.cli()
        .arg(ctx.source().path())
        .assert()
        .success()
        .stdout(predicate::str::contains("already merged"));

    assert_eq!(ctx.read_ide("bin/idea.sh"), first);
    ctx.ide_dir().child("lib/app.jar").assert(predicate::path::missing());
}

#[test]
fn links_existing_tool_home() {
    let ctx = TestContext::new();
    ctx.stage_release("5.0.3.900");
    let home = ctx.source().child("command-line-tools");

    ctx.cli()
        .env("HAMONY_TOOL_HOME", home.path())
        .arg(ctx.source().path())
        .assert()
        .success();

    let sdk = ctx.ide_dir().child("sdk");
    assert_eq!(fs::read_link(sdk.path()).unwrap(), home.path().join("sdk"));
    assert_eq!(
        fs::read_link(ctx.ide_dir().child("tools/ohpm").path()).unwrap(),
        home.path().join("ohpm")
    );
}

#[test]
fn relative_tool_home_resolves_from_working_directory() {
    let ctx = TestContext::new();
    ctx.stage_release("5.0.3.900");

    ctx.cli()
        .env("HAMONY_TOOL_HOME", "source/command-line-tools")
        .arg(ctx.source().path())
        .assert()
        .success();

    let sdk = ctx.ide_dir().child("sdk");
    assert!(fs::read_link(sdk.path()).unwrap().is_absolute());
    sdk.child("default/sdk-pkg.json").assert(predicate::path::exists());
}
