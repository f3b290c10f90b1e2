//! Vendor launch descriptor (`product-info.json`).

use std::path::Path;

use serde::Deserialize;

use crate::domain::{AppError, Version};

/// How the vendor boots the IDE: classpath jars and extra JVM flags.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchDescriptor {
    /// Jar names relative to `$IDE_HOME/lib`, in classpath order.
    pub boot_class_path_jar_names: Vec<String>,
    /// Flags such as `-Didea.vendor.name=Huawei`.
    pub additional_jvm_arguments: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProductInfoDto {
    #[serde(default)]
    build_number: Option<String>,
    #[serde(default)]
    version: Option<String>,
    launch: Vec<LaunchDescriptor>,
}

/// Parsed `product-info.json`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductInfo {
    /// IDEA platform build the studio is based on.
    pub build_number: Option<Version>,
    /// DevEco Studio release version.
    pub version: Option<Version>,
    launch: LaunchDescriptor,
}

impl ProductInfo {
    /// Parse descriptor content. `path` is only used for error messages.
    ///
    /// Requires a non-empty `launch` array whose first entry carries a
    /// non-empty `bootClassPathJarNames` and an `additionalJvmArguments` list.
    pub fn parse(content: &str, path: &Path) -> Result<Self, AppError> {
        let dto: ProductInfoDto = serde_json::from_str(content)
            .map_err(|e| AppError::malformed_descriptor(path, e.to_string()))?;

        let parse_version = |field: &str, raw: Option<String>| -> Result<Option<Version>, AppError> {
            match raw {
                None => Ok(None),
                Some(raw) => Version::parse(&raw).map(Some).ok_or_else(|| {
                    AppError::malformed_descriptor(
                        path,
                        format!("'{}' is not a dotted 3-part version: '{}'", field, raw),
                    )
                }),
            }
        };
        let build_number = parse_version("buildNumber", dto.build_number)?;
        let version = parse_version("version", dto.version)?;

        let launch = dto
            .launch
            .into_iter()
            .next()
            .ok_or_else(|| AppError::malformed_descriptor(path, "'launch' has no entries"))?;

        if launch.boot_class_path_jar_names.is_empty() {
            return Err(AppError::malformed_descriptor(path, "'bootClassPathJarNames' is empty"));
        }

        Ok(Self { build_number, version, launch })
    }

    /// Read and parse a descriptor file.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::malformed_descriptor(path, e.to_string()))?;
        Self::parse(&content, path)
    }

    /// The first launch entry.
    pub fn launch(&self) -> &LaunchDescriptor {
        &self.launch
    }

    /// Both versions, required by the full install pipeline.
    pub fn require_versions(&self, path: &Path) -> Result<(Version, Version), AppError> {
        let build = self
            .build_number
            .ok_or_else(|| AppError::malformed_descriptor(path, "missing 'buildNumber'"))?;
        let version =
            self.version.ok_or_else(|| AppError::malformed_descriptor(path, "missing 'version'"))?;
        Ok((build, version))
    }
}
