//! Rewriter for the IDEA launcher script (`bin/idea.sh`).
//!
//! A single forward scan classifies each line and replaces the classpath
//! declaration and the vendor property block with values taken from the
//! DevEco launch descriptor. Every other line is passed through untouched,
//! line ending included.

use std::collections::BTreeMap;

use crate::domain::{LaunchDescriptor, Version};

/// Shell variable that accumulates the boot classpath.
pub const CLASS_PATH_VAR: &str = "CLASS_PATH";

/// Sentinel preceding the injected `-D` property line.
pub const PROPERTIES_MARKER: &str = "${IDE_PROPERTIES_PROPERTY}";

const FLAG_PREFIX: &str = "-D";
const CONTINUATION: &str = "\\";

/// Flags appended to the property block for legacy releases.
pub const LEGACY_FLAGS: [&str; 2] =
    ["\"-DIDE_HOME=$IDE_HOME\"", "\"-javaagent:$IDE_HOME/bin/deveco-java-agent.jar\""];

/// JVM properties taken over from the vendor descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PropertyKey {
    VendorName,
    PathsSelector,
    PlatformPrefix,
}

impl PropertyKey {
    pub const ALL: [PropertyKey; 3] =
        [PropertyKey::VendorName, PropertyKey::PathsSelector, PropertyKey::PlatformPrefix];

    pub fn name(self) -> &'static str {
        match self {
            PropertyKey::VendorName => "idea.vendor.name",
            PropertyKey::PathsSelector => "idea.paths.selector",
            PropertyKey::PlatformPrefix => "idea.platform.prefix",
        }
    }

    /// Whether `token` begins with `-D<key>`.
    pub fn matches(self, token: &str) -> bool {
        token.strip_prefix(FLAG_PREFIX).is_some_and(|rest| rest.starts_with(self.name()))
    }

    fn of(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.matches(token))
    }
}

/// Replacement flag per known property key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertySubstitutions(BTreeMap<PropertyKey, String>);

impl PropertySubstitutions {
    /// Build the table from descriptor arguments. The last occurrence of a key wins.
    pub fn from_arguments(arguments: &[String]) -> Self {
        let mut table = BTreeMap::new();
        for argument in arguments {
            if let Some(key) = PropertyKey::of(argument) {
                table.insert(key, argument.clone());
            }
        }
        Self(table)
    }

    /// Replacement for a script token, if its key has one.
    pub fn get(&self, token: &str) -> Option<&str> {
        PropertyKey::of(token).and_then(|key| self.0.get(&key)).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// `CLASS_PATH` assignment lines, one per boot jar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClasspathAssembly {
    lines: Vec<String>,
}

impl ClasspathAssembly {
    pub fn from_jars(jars: &[String]) -> Self {
        let lines = jars
            .iter()
            .enumerate()
            .map(|(index, jar)| {
                if index == 0 {
                    format!("{CLASS_PATH_VAR}=\"$IDE_HOME/lib/{jar}\"\n")
                } else {
                    format!("{CLASS_PATH_VAR}=\"${CLASS_PATH_VAR}:$IDE_HOME/lib/{jar}\"\n")
                }
            })
            .collect();
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn render(&self) -> String {
        self.lines.concat()
    }
}

/// Classification of one launcher script line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptLine {
    ClasspathDeclaration,
    PropertyMarker,
    PropertyFlags,
    Passthrough,
}

impl ScriptLine {
    /// Classify `line`. `block_armed` is set after a property marker until the
    /// next `-D` line consumes it.
    pub fn classify(line: &str, block_armed: bool) -> Self {
        let trimmed = line.trim();
        if block_armed && trimmed.starts_with(FLAG_PREFIX) {
            ScriptLine::PropertyFlags
        } else if trimmed.starts_with(CLASS_PATH_VAR) {
            ScriptLine::ClasspathDeclaration
        } else if trimmed.starts_with(PROPERTIES_MARKER) {
            ScriptLine::PropertyMarker
        } else {
            ScriptLine::Passthrough
        }
    }
}

/// Result of a rewrite pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteOutcome {
    pub content: String,
    pub classpath_inserted: bool,
    pub dropped_classpath_lines: usize,
    pub property_block_rewritten: bool,
}

/// Rewrites an IDEA launcher script for a DevEco launch descriptor.
#[derive(Debug, Clone)]
pub struct LauncherRewriter {
    classpath: ClasspathAssembly,
    substitutions: PropertySubstitutions,
    legacy: bool,
}

impl LauncherRewriter {
    pub fn new(launch: &LaunchDescriptor, version: Version) -> Self {
        Self {
            classpath: ClasspathAssembly::from_jars(&launch.boot_class_path_jar_names),
            substitutions: PropertySubstitutions::from_arguments(&launch.additional_jvm_arguments),
            legacy: version.is_legacy(),
        }
    }

    pub fn classpath(&self) -> &ClasspathAssembly {
        &self.classpath
    }

    pub fn substitutions(&self) -> &PropertySubstitutions {
        &self.substitutions
    }

    /// Produce the rewritten script. The input is never modified.
    pub fn rewrite(&self, original: &str) -> RewriteOutcome {
        let mut content = String::with_capacity(original.len() + 64 * self.classpath.lines.len());
        let mut block_armed = false;
        let mut classpath_inserted = false;
        let mut dropped_classpath_lines = 0;
        let mut property_block_rewritten = false;

        for line in original.split_inclusive('\n') {
            match ScriptLine::classify(line, block_armed) {
                ScriptLine::PropertyFlags => {
                    self.rewrite_flags(line, &mut content);
                    block_armed = false;
                    property_block_rewritten = true;
                }
                ScriptLine::ClasspathDeclaration => {
                    if classpath_inserted {
                        dropped_classpath_lines += 1;
                    } else {
                        content.push_str(&self.classpath.render());
                        classpath_inserted = true;
                    }
                }
                ScriptLine::PropertyMarker => {
                    content.push_str(line);
                    block_armed = true;
                }
                ScriptLine::Passthrough => content.push_str(line),
            }
        }

        RewriteOutcome { content, classpath_inserted, dropped_classpath_lines, property_block_rewritten }
    }

    /// Emit one flag per line, keeping the original indentation and ending
    /// with a continuation only if the source line had one.
    fn rewrite_flags(&self, line: &str, out: &mut String) {
        let indent = &line[..line.len() - line.trim_start().len()];
        let mut tokens: Vec<&str> = line.split_whitespace().collect();
        let continued = tokens.last() == Some(&CONTINUATION);
        if continued {
            tokens.pop();
        }

        let mut flags: Vec<&str> = tokens
            .into_iter()
            .map(|token| self.substitutions.get(token).unwrap_or(token))
            .collect();
        if self.legacy {
            flags.extend(LEGACY_FLAGS);
        }

        let last = flags.len().saturating_sub(1);
        for (index, flag) in flags.iter().enumerate() {
            out.push_str(indent);
            out.push_str(flag);
            if index < last || continued {
                out.push_str(" \\");
            }
            out.push('\n');
        }
    }
}
