use deveco_port::{AppError, ProductInfo, rewrite_launcher_script};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const DESCRIPTOR: &str = r#"{"launch":[{"bootClassPathJarNames":["a.jar","b.jar"],"additionalJvmArguments":["-Didea.vendor.name=Acme"]}]}"#;

const SCRIPT: &str = "#!/bin/sh
CLASS_PATH=\"$IDE_HOME/lib/idea.jar\"
\"$JAVA_BIN\" \\
  ${IDE_PROPERTIES_PROPERTY} \\
  -Didea.vendor.name=JetBrains \\
  com.intellij.idea.Main
";

fn stage_ide(root: &Path) -> std::path::PathBuf {
    let ide = root.join("idea-IC-233.14475.28");
    fs::create_dir_all(ide.join("bin")).unwrap();
    fs::write(ide.join("bin/idea.sh"), SCRIPT).unwrap();
    ide
}

#[test]
fn minimal_descriptor_rewrites_classpath_and_vendor() {
    let temp = TempDir::new().unwrap();
    let ide = stage_ide(temp.path());
    let product = ProductInfo::parse(DESCRIPTOR, Path::new("product-info.json")).unwrap();

    let outcome = rewrite_launcher_script(&ide, &product).unwrap();

    assert!(outcome.classpath_inserted);
    assert!(outcome.property_block_rewritten);
    let script = fs::read_to_string(ide.join("bin/idea.sh")).unwrap();
    assert_eq!(
        script,
        "#!/bin/sh
CLASS_PATH=\"$IDE_HOME/lib/a.jar\"
CLASS_PATH=\"$CLASS_PATH:$IDE_HOME/lib/b.jar\"
\"$JAVA_BIN\" \\
  ${IDE_PROPERTIES_PROPERTY} \\
  -Didea.vendor.name=Acme \\
  com.intellij.idea.Main
"
    );
}

#[test]
fn repeated_rewrite_is_stable() {
    let temp = TempDir::new().unwrap();
    let ide = stage_ide(temp.path());
    let product = ProductInfo::parse(DESCRIPTOR, Path::new("product-info.json")).unwrap();

    let first = rewrite_launcher_script(&ide, &product).unwrap();
    let second = rewrite_launcher_script(&ide, &product).unwrap();

    assert_eq!(first.content, second.content);
    assert_eq!(fs::read_to_string(ide.join("bin/idea_bak.sh")).unwrap(), SCRIPT);
}

#[test]
fn missing_launcher_is_an_error() {
    let temp = TempDir::new().unwrap();
    let product = ProductInfo::parse(DESCRIPTOR, Path::new("product-info.json")).unwrap();

    let err = rewrite_launcher_script(temp.path(), &product).unwrap_err();

    assert!(matches!(err, AppError::Filesystem { .. }));
}
