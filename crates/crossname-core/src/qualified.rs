//! Qualified names as supplied by the upstream type model
//!
//! A qualified name is a dot-separated path that identifies one declared
//! entity across the whole program:
//!
//! - Top-level type: `org.jbox2d.common.Vec2`
//! - Nested type: `org.jbox2d.dynamics.Body.Flags`
//! - Default package: `Main`
//!
//! ## Usage
//!
//! ```
//! use crossname_core::QualifiedName;
//!
//! let name = QualifiedName::parse("org.jbox2d.common.Vec2").unwrap();
//! assert_eq!(name.simple_name(), "Vec2");
//! assert_eq!(name.package(), Some("org.jbox2d.common"));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A parsed, validated qualified name
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct QualifiedName {
    /// The full dotted spelling
    original: String,
    /// Byte offset of the last segment within `original`
    simple_start: usize,
}

/// Errors that can occur while parsing a qualified name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QualifiedNameError {
    #[error("Empty qualified name")]
    Empty,

    #[error("Empty segment in qualified name: '{0}'")]
    EmptySegment(String),
}

impl QualifiedName {
    /// Parse a dotted qualified name, rejecting empty input and empty segments
    pub fn parse(name: &str) -> Result<Self, QualifiedNameError> {
        if name.is_empty() {
            return Err(QualifiedNameError::Empty);
        }
        if name.split('.').any(str::is_empty) {
            return Err(QualifiedNameError::EmptySegment(name.to_string()));
        }

        let simple_start = name.rfind('.').map_or(0, |dot| dot + 1);
        Ok(Self {
            original: name.to_string(),
            simple_start,
        })
    }

    /// The full dotted spelling
    pub fn as_str(&self) -> &str {
        &self.original
    }

    /// The last segment (e.g., "Vec2")
    pub fn simple_name(&self) -> &str {
        &self.original[self.simple_start..]
    }

    /// Everything before the last segment, or `None` for a single-segment name
    pub fn package(&self) -> Option<&str> {
        if self.simple_start == 0 {
            None
        } else {
            Some(&self.original[..self.simple_start - 1])
        }
    }

    /// Qualified name of a member nested directly inside this one
    pub fn child(&self, simple_name: &str) -> Result<Self, QualifiedNameError> {
        Self::parse(&format!("{}.{}", self.original, simple_name))
    }
}

/// Last segment of a dotted name; the whole input when it has no dot
pub fn simple_name_of(qualified_name: &str) -> &str {
    qualified_name
        .rsplit('.')
        .next()
        .unwrap_or(qualified_name)
}

/// Derive an import alias from a qualified name alone
///
/// Underscores are doubled first, then every dot becomes a single underscore,
/// so `gadget.Button` becomes `gadget_Button` and `my_pkg.Button` becomes
/// `my__pkg_Button`. Total over all inputs.
pub fn alias_for(qualified_name: &str) -> String {
    qualified_name.replace('_', "__").replace('.', "_")
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.original)
    }
}

impl AsRef<str> for QualifiedName {
    fn as_ref(&self) -> &str {
        &self.original
    }
}

impl TryFrom<String> for QualifiedName {
    type Error = QualifiedNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<QualifiedName> for String {
    fn from(name: QualifiedName) -> Self {
        name.original
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_nested_package() {
        let name = QualifiedName::parse("org.jbox2d.collision.broadphase.BroadPhase").unwrap();
        assert_eq!(name.simple_name(), "BroadPhase");
        assert_eq!(name.package(), Some("org.jbox2d.collision.broadphase"));
        assert_eq!(simple_name_of(name.as_str()), "BroadPhase");
    }

    #[test]
    fn test_parse_default_package() {
        let name = QualifiedName::parse("Main").unwrap();
        assert_eq!(name.simple_name(), "Main");
        assert_eq!(name.package(), None);
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(QualifiedName::parse(""), Err(QualifiedNameError::Empty));
    }

    #[test]
    fn test_parse_empty_segment() {
        assert!(matches!(
            QualifiedName::parse("org..Vec2"),
            Err(QualifiedNameError::EmptySegment(_))
        ));
        assert!(matches!(
            QualifiedName::parse("org.Vec2."),
            Err(QualifiedNameError::EmptySegment(_))
        ));
    }

    #[test]
    fn test_child() {
        let outer = QualifiedName::parse("org.jbox2d.dynamics.Body").unwrap();
        let inner = outer.child("Flags").unwrap();
        assert_eq!(inner.as_str(), "org.jbox2d.dynamics.Body.Flags");
        assert_eq!(inner.package(), Some("org.jbox2d.dynamics.Body"));
    }

    #[test]
    fn test_simple_name_of() {
        assert_eq!(simple_name_of("widget.Button"), "Button");
        assert_eq!(simple_name_of("Button"), "Button");
        assert_eq!(simple_name_of(""), "");
    }

    #[test]
    fn test_alias_for() {
        assert_eq!(alias_for("gadget.Button"), "gadget_Button");
        assert_eq!(alias_for("my_pkg.Button"), "my__pkg_Button");
        assert_eq!(alias_for("Button"), "Button");
    }

    #[test]
    fn test_serde_round_trip_rejects_invalid() {
        let parsed: QualifiedName = serde_json::from_str("\"kotlin.native.ObjCName\"").unwrap();
        assert_eq!(parsed.simple_name(), "ObjCName");
        assert!(serde_json::from_str::<QualifiedName>("\"kotlin..ObjCName\"").is_err());
    }

    #[test]
    fn test_display() {
        let name = QualifiedName::parse("kotlin.OptIn").unwrap();
        assert_eq!(format!("{}", name), "kotlin.OptIn");
    }

    proptest! {
        #[test]
        fn parse_splits_at_last_dot(
            segments in prop::collection::vec("[A-Za-z0-9_$]{1,6}", 1..5),
        ) {
            let dotted = segments.join(".");
            let name = QualifiedName::parse(&dotted).unwrap();
            let (simple, package) = segments.split_last().unwrap();
            prop_assert_eq!(name.simple_name(), simple.as_str());
            let expected_package = (!package.is_empty()).then(|| package.join("."));
            prop_assert_eq!(name.package().map(str::to_string), expected_package);
            prop_assert_eq!(simple_name_of(&dotted), simple.as_str());
            prop_assert!(!alias_for(&dotted).contains('.'));
        }
    }
}
