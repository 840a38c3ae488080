//! Interop naming configuration
//!
//! Everything here is data: which package roots get an extra namespace
//! segment, which base-library types map to fixed foreign names, and which
//! annotation classes the generated fragments refer to. Defaults come from
//! Rust code plus the rules embedded from `rules/well_known.toml`; a user
//! TOML document is merged on top.
//!
//! ```toml
//! reserved_package_roots = ["java", "javax"]
//! reserved_root_namespace = "j2kt"
//!
//! [well_known_types]
//! "java.util.Date" = "NSDate"
//!
//! [annotations]
//! interop_name = "kotlin.native.ObjCName"
//! ```

use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::CoreError;
use crate::qualified::QualifiedName;

/// Configuration consumed by the interop name deriver and annotation renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteropConfig {
    /// First package segments that receive `reserved_root_namespace` in front
    pub reserved_package_roots: Vec<String>,
    /// Extra leading package segment for reserved roots (outside member context)
    pub reserved_root_namespace: String,
    /// Qualified name -> canonical foreign name
    pub well_known_types: BTreeMap<String, String>,
    /// Annotation classes referenced by generated fragments
    pub annotations: AnnotationNames,
}

/// Qualified names of the annotation classes the renderer emits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnotationNames {
    /// Annotation carrying an interop name (and optional `exact` flag)
    pub interop_name: String,
    /// File-level opt-in annotation
    pub opt_in: String,
    /// Marker class the opt-in annotation refers to
    pub experimental_marker: String,
}

impl Default for AnnotationNames {
    fn default() -> Self {
        Self {
            interop_name: "kotlin.native.ObjCName".to_string(),
            opt_in: "kotlin.OptIn".to_string(),
            experimental_marker: "kotlin.experimental.ExperimentalObjCName".to_string(),
        }
    }
}

impl AnnotationNames {
    /// Every annotation class must be a well-formed qualified name
    fn validate(&self) -> Result<(), CoreError> {
        for name in [&self.interop_name, &self.opt_in, &self.experimental_marker] {
            QualifiedName::parse(name)?;
        }
        Ok(())
    }
}

/// Partial configuration as written by users; absent keys keep their defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigOverrides {
    reserved_package_roots: Option<Vec<String>>,
    reserved_root_namespace: Option<String>,
    #[serde(default)]
    well_known_types: BTreeMap<String, String>,
    annotations: Option<AnnotationNames>,
}

/// Embedded rule file layout
#[derive(Debug, Clone, Default, Deserialize)]
struct WellKnownRules {
    #[serde(default)]
    well_known_types: BTreeMap<String, String>,
}

impl Default for InteropConfig {
    fn default() -> Self {
        let mut config = Self {
            reserved_package_roots: vec!["java".to_string(), "javax".to_string()],
            reserved_root_namespace: "j2kt".to_string(),
            well_known_types: BTreeMap::new(),
            annotations: AnnotationNames::default(),
        };

        match Self::load_embedded_rules(include_str!("rules/well_known.toml")) {
            Ok(rules) => config.well_known_types.extend(rules.well_known_types),
            Err(e) => warn!("Ignoring embedded well-known type rules: {}", e),
        }

        config
    }
}

impl InteropConfig {
    /// Parse a TOML document and merge it over the defaults
    pub fn parse(content: &str) -> Result<Self, CoreError> {
        let overrides: ConfigOverrides = toml::from_str(content)
            .map_err(|e| CoreError::Config(format!("Failed to parse interop config: {}", e)))?;
        let mut config = Self::default();
        config.merge(overrides);
        config.annotations.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML config file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            CoreError::Config(format!(
                "Failed to read interop config '{}': {}",
                path.display(),
                e
            ))
        })?;
        debug!("Loaded interop config from {}", path.display());
        Self::parse(&content)
    }

    fn load_embedded_rules(content: &str) -> Result<WellKnownRules, toml::de::Error> {
        toml::from_str(content)
    }

    fn merge(&mut self, overrides: ConfigOverrides) {
        if let Some(roots) = overrides.reserved_package_roots {
            self.reserved_package_roots = roots;
        }
        if let Some(namespace) = overrides.reserved_root_namespace {
            self.reserved_root_namespace = namespace;
        }
        if let Some(annotations) = overrides.annotations {
            self.annotations = annotations;
        }
        self.well_known_types.extend(overrides.well_known_types);
    }

    /// Fixed foreign name for a base-library type, if it has one
    pub fn well_known_name(&self, qualified_name: &str) -> Option<&str> {
        self.well_known_types.get(qualified_name).map(String::as_str)
    }

    /// Whether a package path lies below one of the reserved root segments
    ///
    /// The root alone (`java`) does not count; `java.util` does.
    pub fn is_reserved_package(&self, package_name: &str) -> bool {
        package_name
            .split_once('.')
            .is_some_and(|(root, _)| self.reserved_package_roots.iter().any(|r| r == root))
    }
}

impl FromStr for InteropConfig {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_loads_embedded_rules() {
        let config = InteropConfig::default();
        assert_eq!(config.well_known_types.len(), 5);
        assert_eq!(config.well_known_name("java.lang.Object"), Some("NSObject"));
        assert_eq!(config.well_known_name("java.lang.String"), Some("NSString"));
        assert_eq!(config.well_known_name("java.lang.Class"), Some("IOSClass"));
        assert_eq!(config.well_known_name("java.lang.Number"), Some("NSNumber"));
        assert_eq!(config.well_known_name("java.lang.Cloneable"), Some("NSCopying"));
        assert_eq!(config.well_known_name("java.lang.Integer"), None);
    }

    #[test]
    fn test_reserved_package() {
        let config = InteropConfig::default();
        assert!(config.is_reserved_package("java.util"));
        assert!(config.is_reserved_package("javax.annotation"));
        assert!(!config.is_reserved_package("java"));
        assert!(!config.is_reserved_package("javax"));
        assert!(!config.is_reserved_package("javafx.scene"));
        assert!(!config.is_reserved_package("org.jbox2d"));
    }

    #[test]
    fn test_parse_merges_over_defaults() {
        let config = InteropConfig::parse(
            r#"
            reserved_root_namespace = "shim"

            [well_known_types]
            "java.util.Date" = "NSDate"
            "java.lang.String" = "JavaString"
            "#,
        )
        .unwrap();

        assert_eq!(config.reserved_root_namespace, "shim");
        assert_eq!(config.reserved_package_roots, vec!["java", "javax"]);
        assert_eq!(config.well_known_name("java.util.Date"), Some("NSDate"));
        assert_eq!(config.well_known_name("java.lang.String"), Some("JavaString"));
        assert_eq!(config.well_known_name("java.lang.Object"), Some("NSObject"));
        assert_eq!(config.annotations, AnnotationNames::default());
    }

    #[test]
    fn test_parse_partial_annotations() {
        let config: InteropConfig = r#"
            [annotations]
            interop_name = "bridge.Name"
            "#
        .parse()
        .unwrap();

        assert_eq!(config.annotations.interop_name, "bridge.Name");
        assert_eq!(config.annotations.opt_in, "kotlin.OptIn");
    }

    #[test]
    fn test_parse_rejects_unknown_keys() {
        let err = InteropConfig::parse("reserved_roots = []").unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));
    }

    #[test]
    fn test_parse_rejects_malformed_annotation_name() {
        let err = InteropConfig::parse(
            r#"
            [annotations]
            opt_in = "kotlin..OptIn"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, CoreError::InvalidQualifiedName(_)));
        assert_eq!(
            err.to_string(),
            "Invalid qualified name: Empty segment in qualified name: 'kotlin..OptIn'"
        );
    }

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(InteropConfig::parse("").unwrap(), InteropConfig::default());
    }
}
