use crate::harness::TestContext;
use assert_fs::prelude::*;
use predicates::prelude::*;

#[test]
fn reports_missing_studio_image() {
    let ctx = TestContext::new();
    ctx.stage_toolchain("5.0.3.900");
    ctx.stage_ide();

    ctx.cli()
        .arg(ctx.source().path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("deveco-studio-*.dmg"))
        .stderr(predicate::str::contains("developer.huawei.com"));
}

#[test]
fn reports_missing_toolchain_archive() {
    let ctx = TestContext::new();
    ctx.stage_studio_image("5.0.3.900");
    ctx.stage_ide();

    ctx.cli()
        .arg(ctx.source().path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("commandline-tools-linux-*.zip"));
}

#[test]
fn reports_missing_idea_base() {
    let ctx = TestContext::new();
    ctx.stage_studio_image("5.0.3.900");
    ctx.stage_toolchain("5.0.3.900");

    ctx.cli()
        .args(["-d", ctx.source().path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("idea-IC-233.14475.28"));
}

#[test]
fn reports_malformed_descriptor() {
    let ctx = TestContext::new();
    ctx.stage_release("5.0.3.900");
    ctx.app_contents().child("Resources/product-info.json").write_str(r#"{"launch": []}"#).unwrap();

    ctx.cli()
        .arg(ctx.source().path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("product-info.json"));
}
