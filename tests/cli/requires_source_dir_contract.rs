use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn prints_help_and_fails_without_source_dir() {
    let ctx = TestContext::new();

    ctx.cli()
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("--prefix"));
}

#[test]
fn rejects_nonexistent_source_dir() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["--dir", "does-not-exist"])
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("Error: "))
        .stderr(predicate::str::contains("does-not-exist"));
}

#[test]
fn rejects_dir_and_positional_source_together() {
    let ctx = TestContext::new();

    ctx.cli().args(["-d", "source", "source"]).assert().failure();
}
