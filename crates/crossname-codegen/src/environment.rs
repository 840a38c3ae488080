//! Per-unit naming state
//!
//! One `NamingEnvironment` exists per output unit. It is created when
//! rendering of the unit starts and dropped when it ends. It holds:
//! - the local names bound by the scopes the emitter is currently inside
//! - every qualified name declared at top level in the unit
//! - the import claims: simple name -> qualified name
//!
//! Simple names are kept in their rendered spelling, after [`sanitize`].
//! Two raw names that sanitize alike (`class` and `class__`) compete for the
//! same identifier.
//!
//! Claims are monotonic. Once a simple name is bound to a qualified name it
//! keeps that binding for the rest of the unit, so later references observe
//! every earlier decision. That makes resolution order-sensitive: the
//! emitter must resolve references in the order it writes them.
//!
//! ## Usage
//!
//! ```
//! use crossname_codegen::environment::NamingEnvironment;
//!
//! let mut env = NamingEnvironment::new("org/jbox2d/dynamics/Body.kt")
//!     .with_top_level(["org.jbox2d.dynamics.Body"]);
//!
//! env.enter_scope();
//! env.bind_local("world");
//! assert!(env.is_local("world"));
//! env.exit_scope();
//! assert!(!env.is_local("world"));
//! ```

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use crossname_core::qualified::simple_name_of;
use tracing::trace;

use crate::identifier::sanitize;

/// Naming state for one output unit
#[derive(Debug, Clone, Default)]
pub struct NamingEnvironment {
    /// Unit being rendered (for diagnostics)
    unit: String,
    /// Innermost scope last
    scopes: Vec<HashSet<String>>,
    /// Qualified names declared at top level in this unit
    top_level_qualified_names: BTreeSet<String>,
    /// Rendered simple name -> top-level qualified names that end with it
    top_level_by_simple_name: HashMap<String, BTreeSet<String>>,
    /// Import claims: rendered simple name -> qualified name
    imported_simple_name_to_qualified_name: BTreeMap<String, String>,
    /// Reverse lookup for granted aliases: qualified name -> alias
    qualified_name_to_alias: HashMap<String, String>,
}

impl NamingEnvironment {
    /// Fresh environment for a unit
    pub fn new(unit: impl Into<String>) -> Self {
        Self {
            unit: unit.into(),
            ..Self::default()
        }
    }

    /// Declare the unit's top-level qualified names
    pub fn with_top_level<I, S>(mut self, qualified_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in qualified_names {
            self.declare_top_level(name);
        }
        self
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Record a qualified name declared at top level in this unit
    pub fn declare_top_level(&mut self, qualified_name: impl Into<String>) {
        let qualified_name = qualified_name.into();
        self.top_level_by_simple_name
            .entry(rendered_simple_name(&qualified_name))
            .or_default()
            .insert(qualified_name.clone());
        self.top_level_qualified_names.insert(qualified_name);
    }

    pub fn is_top_level(&self, qualified_name: &str) -> bool {
        self.top_level_qualified_names.contains(qualified_name)
    }

    /// Whether a top-level declaration other than `qualified_name` renders as `identifier`
    pub fn shares_top_level_simple_name(&self, identifier: &str, qualified_name: &str) -> bool {
        self.top_level_by_simple_name
            .get(identifier)
            .is_some_and(|names| names.iter().any(|n| n != qualified_name))
    }

    pub fn top_level_qualified_names(&self) -> impl Iterator<Item = &str> {
        self.top_level_qualified_names.iter().map(String::as_str)
    }

    /// Start a nested scope (method body, lambda, type parameter list)
    pub fn enter_scope(&mut self) {
        self.scopes.push(HashSet::new());
    }

    /// Leave the innermost scope, dropping its local names
    pub fn exit_scope(&mut self) {
        self.scopes.pop();
    }

    /// Bind a local name in the innermost scope, opening one if none is live
    ///
    /// The name is stored as it will be rendered.
    pub fn bind_local(&mut self, name: impl AsRef<str>) {
        if self.scopes.is_empty() {
            self.enter_scope();
        }
        if let Some(scope) = self.scopes.last_mut() {
            scope.insert(sanitize(name.as_ref()));
        }
    }

    /// Whether a live scope binds the rendered identifier
    pub fn is_local(&self, identifier: &str) -> bool {
        self.scopes.iter().any(|scope| scope.contains(identifier))
    }

    pub fn scope_depth(&self) -> usize {
        self.scopes.len()
    }

    /// Qualified name claimed under `simple_name`, if any
    pub fn imported_qualified_name(&self, simple_name: &str) -> Option<&str> {
        self.imported_simple_name_to_qualified_name
            .get(simple_name)
            .map(String::as_str)
    }

    /// Claim `simple_name` for `qualified_name`
    ///
    /// Returns `false` without changing anything when the name is already
    /// claimed by a different qualified name.
    pub fn claim(&mut self, simple_name: &str, qualified_name: &str) -> bool {
        match self.imported_simple_name_to_qualified_name.get(simple_name) {
            Some(existing) => existing == qualified_name,
            None => {
                trace!(
                    "{}: claiming '{}' for '{}'",
                    self.unit,
                    simple_name,
                    qualified_name
                );
                self.imported_simple_name_to_qualified_name
                    .insert(simple_name.to_string(), qualified_name.to_string());
                true
            }
        }
    }

    /// Claim `alias` for `qualified_name` and remember it for re-resolution
    pub fn claim_alias(&mut self, alias: &str, qualified_name: &str) -> bool {
        if !self.claim(alias, qualified_name) {
            return false;
        }
        self.qualified_name_to_alias
            .entry(qualified_name.to_string())
            .or_insert_with(|| alias.to_string());
        true
    }

    /// Alias previously granted to `qualified_name`
    pub fn alias_of(&self, qualified_name: &str) -> Option<&str> {
        self.qualified_name_to_alias
            .get(qualified_name)
            .map(String::as_str)
    }

    /// All claims, ordered by simple name
    pub fn imports(&self) -> impl Iterator<Item = (&str, &str)> {
        self.imported_simple_name_to_qualified_name
            .iter()
            .map(|(simple, qualified)| (simple.as_str(), qualified.as_str()))
    }

    pub fn has_imports(&self) -> bool {
        !self.imported_simple_name_to_qualified_name.is_empty()
    }

    /// Get statistics about claims
    pub fn stats(&self) -> ImportStats {
        let aliased_count = self
            .imports()
            .filter(|(simple, qualified)| *simple != rendered_simple_name(qualified))
            .count();
        ImportStats {
            bare_count: self.imported_simple_name_to_qualified_name.len() - aliased_count,
            aliased_count,
            top_level_count: self.top_level_qualified_names.len(),
        }
    }
}

/// Last segment of `qualified_name` as it appears in the output
pub fn rendered_simple_name(qualified_name: &str) -> String {
    sanitize(simple_name_of(qualified_name))
}

/// Statistics about a unit's import claims
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportStats {
    /// Claims under the qualified name's own last segment
    pub bare_count: usize,
    /// Claims under a derived alias
    pub aliased_count: usize,
    pub top_level_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_are_monotonic() {
        let mut env = NamingEnvironment::new("unit.kt");
        assert!(env.claim("Button", "widget.Button"));
        assert!(env.claim("Button", "widget.Button"));
        assert!(!env.claim("Button", "gadget.Button"));
        assert_eq!(env.imported_qualified_name("Button"), Some("widget.Button"));
    }

    #[test]
    fn test_shares_top_level_simple_name() {
        let env = NamingEnvironment::new("unit.kt").with_top_level([
            "widget.Button",
            "gadget.Button",
            "widget.Label",
        ]);
        assert!(env.shares_top_level_simple_name("Button", "widget.Button"));
        assert!(env.shares_top_level_simple_name("Button", "other.Button"));
        assert!(!env.shares_top_level_simple_name("Label", "widget.Label"));
        assert!(env.shares_top_level_simple_name("Label", "other.Label"));
        assert!(!env.shares_top_level_simple_name("Icon", "widget.Icon"));
    }

    #[test]
    fn test_names_are_compared_as_rendered() {
        let mut env = NamingEnvironment::new("unit.kt").with_top_level(["a.class"]);
        env.bind_local("object");
        assert!(env.is_local("`object`"));
        assert!(!env.is_local("object"));
        assert!(env.shares_top_level_simple_name("class__", "b.class__"));
        assert!(!env.shares_top_level_simple_name("class", "b.class"));
        assert_eq!(rendered_simple_name("pkg.access$000"), "access___000");
    }

    #[test]
    fn test_nested_scopes() {
        let mut env = NamingEnvironment::new("unit.kt");
        env.bind_local("a");
        assert_eq!(env.scope_depth(), 1);
        env.enter_scope();
        env.bind_local("b");
        assert!(env.is_local("a"));
        assert!(env.is_local("b"));
        env.exit_scope();
        assert!(env.is_local("a"));
        assert!(!env.is_local("b"));
        env.exit_scope();
        env.exit_scope();
        assert_eq!(env.scope_depth(), 0);
    }

    #[test]
    fn test_claim_alias_records_reverse_lookup() {
        let mut env = NamingEnvironment::new("unit.kt");
        assert!(env.claim("Button", "widget.Button"));
        assert!(env.claim_alias("gadget_Button", "gadget.Button"));
        assert!(!env.claim_alias("Button", "gadget.Button"));
        assert_eq!(env.alias_of("gadget.Button"), Some("gadget_Button"));
        assert_eq!(env.alias_of("widget.Button"), None);
    }

    #[test]
    fn test_stats() {
        let mut env = NamingEnvironment::new("unit.kt").with_top_level(["a.Main"]);
        env.claim("Button", "widget.Button");
        env.claim_alias("gadget_Button", "gadget.Button");

        let stats = env.stats();
        assert_eq!(stats.bare_count, 1);
        assert_eq!(stats.aliased_count, 1);
        assert_eq!(stats.top_level_count, 1);
        assert!(env.has_imports());
    }
}
