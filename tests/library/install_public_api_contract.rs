use crate::harness::TestContext;
use deveco_port::{AppError, InstallConfig, Version, install};

#[test]
fn install_converts_staged_release() {
    let ctx = TestContext::new();
    ctx.stage_release("5.0.3.900");
    let config = InstallConfig::new(ctx.source().path())
        .unwrap()
        .with_home_dir(ctx.home().path().to_path_buf());

    let report = install(&config).unwrap();

    assert_eq!(report.studio_version, Version::new(5, 0, 3));
    assert_eq!(report.ide_dir, ctx.ide_dir().path());
    assert!(report.merged);
    assert_eq!(report.install_path, None);
    assert_eq!(report.desktop_entry, None);
    assert!(ctx.read_ide("bin/idea.sh").contains("-Didea.vendor.name=Huawei"));
}

#[test]
fn install_reports_missing_source() {
    let ctx = TestContext::new();
    let config = InstallConfig::new(ctx.source().path().join("missing")).unwrap();

    let err = install(&config).unwrap_err();

    assert!(matches!(err, AppError::SourceDirNotFound(_)));
}
