//! Qualified-name resolution against a unit's naming environment
//!
//! For every qualified-name reference the emitter asks the [`Renderer`] what
//! to write. The answer is, in order of preference:
//!
//! 1. the bare simple name, when nothing in scope or in the unit competes
//!    for it (claiming it as an import on first use)
//! 2. an alias derived from the full qualified name, claimed the same way
//!
//! Every candidate is sanitized before it is checked or claimed, so the
//! claim covers the identifier that is actually written. Decisions are
//! recorded in the [`NamingEnvironment`], so resolving the same name again
//! in the same unit gives the same answer.

use crossname_core::qualified::alias_for;
use crossname_core::InteropConfig;
use sha2::{Digest, Sha256};
use tracing::{debug, instrument, trace};

use crate::environment::{rendered_simple_name, NamingEnvironment};
use crate::identifier::{package_name, qualified_identifier, sanitize};
use crate::source::Source;

/// Renders names for one output unit
///
/// Borrows the unit's environment exclusively for as long as it lives.
#[derive(Debug)]
pub struct Renderer<'a> {
    environment: &'a mut NamingEnvironment,
    config: &'a InteropConfig,
}

impl<'a> Renderer<'a> {
    pub fn new(environment: &'a mut NamingEnvironment, config: &'a InteropConfig) -> Self {
        Self {
            environment,
            config,
        }
    }

    pub fn environment(&self) -> &NamingEnvironment {
        self.environment
    }

    /// Mutable access for scope management while rendering
    pub fn environment_mut(&mut self) -> &mut NamingEnvironment {
        self.environment
    }

    pub fn config(&self) -> &'a InteropConfig {
        self.config
    }

    /// Sanitized simple name (bare or alias) to use for `qualified_name` here
    #[instrument(skip(self), level = "debug")]
    pub fn resolve(&mut self, qualified_name: &str) -> String {
        match self.non_aliased_simple_name(qualified_name) {
            Some(simple_name) => simple_name,
            None => self.aliased_simple_name(qualified_name),
        }
    }

    /// The sanitized bare name if it can be used without an alias
    ///
    /// Claims the name on first use. Returns `None` exactly where
    /// [`Renderer::resolve`] would fall back to an alias.
    pub fn non_aliased_simple_name(&mut self, qualified_name: &str) -> Option<String> {
        let rendered = rendered_simple_name(qualified_name);
        let simple_name = rendered.as_str();

        if self.environment.is_local(simple_name) {
            trace!("'{}' is shadowed by a local name", simple_name);
            return None;
        }

        if self.environment.is_top_level(qualified_name) {
            if !self
                .environment
                .shares_top_level_simple_name(simple_name, qualified_name)
            {
                return Some(simple_name.to_string());
            }
            // Two top-level declarations with one simple name: first reference wins
            return self
                .environment
                .claim(simple_name, qualified_name)
                .then(|| simple_name.to_string());
        }

        match self.environment.imported_qualified_name(simple_name) {
            None => {
                if self
                    .environment
                    .shares_top_level_simple_name(simple_name, qualified_name)
                {
                    trace!(
                        "'{}' would shadow a top-level declaration of the same name",
                        simple_name
                    );
                    return None;
                }
                self.environment.claim(simple_name, qualified_name);
                Some(simple_name.to_string())
            }
            Some(imported) if imported == qualified_name => Some(simple_name.to_string()),
            Some(imported) => {
                trace!("'{}' is already imported as '{}'", simple_name, imported);
                None
            }
        }
    }

    fn aliased_simple_name(&mut self, qualified_name: &str) -> String {
        if let Some(alias) = self.environment.alias_of(qualified_name) {
            if self.is_alias_available(alias, qualified_name) {
                return alias.to_string();
            }
        }

        // Path alias first, then the path alias plus a digest of the name
        let path_alias = alias_for(qualified_name);
        let primary = sanitize(&path_alias);
        if self.try_claim_alias(&primary, qualified_name) {
            return primary;
        }
        let mut attempt = 0u32;
        loop {
            let alias = sanitize(&format!(
                "{}_{}",
                path_alias,
                short_digest(qualified_name, attempt)
            ));
            if self.try_claim_alias(&alias, qualified_name) {
                return alias;
            }
            attempt += 1;
        }
    }

    fn try_claim_alias(&mut self, alias: &str, qualified_name: &str) -> bool {
        if self.is_alias_available(alias, qualified_name)
            && self.environment.claim_alias(alias, qualified_name)
        {
            debug!(
                "{}: aliased '{}' as '{}'",
                self.environment.unit(),
                qualified_name,
                alias
            );
            true
        } else {
            trace!("Alias '{}' unavailable for '{}'", alias, qualified_name);
            false
        }
    }

    fn is_alias_available(&self, alias: &str, qualified_name: &str) -> bool {
        !self.environment.is_local(alias)
            && !self
                .environment
                .shares_top_level_simple_name(alias, qualified_name)
            && self
                .environment
                .imported_qualified_name(alias)
                .map_or(true, |imported| imported == qualified_name)
    }

    /// Simple name (bare or alias) as a fragment
    pub fn simple_name_source(&mut self, qualified_name: &str) -> Source {
        Source::text(self.resolve(qualified_name))
    }

    /// Sanitized bare name when usable, otherwise the fully qualified name
    ///
    /// Never allocates an alias.
    pub fn top_level_qualified_name_source(&mut self, qualified_name: &str) -> Source {
        match self.non_aliased_simple_name(qualified_name) {
            Some(simple_name) => Source::text(simple_name),
            None => Source::text(qualified_identifier(qualified_name)),
        }
    }

    /// Extension members cannot be referenced qualified, so always a simple name
    pub fn extension_member_qualified_name_source(&mut self, qualified_name: &str) -> Source {
        self.simple_name_source(qualified_name)
    }

    pub fn package_name_source(&self, package: &str) -> Source {
        Source::text(package_name(package))
    }

    /// Import declarations for the unit header, sorted by qualified name
    ///
    /// Bare claims of the unit's own top-level names need no import.
    pub fn import_sources(&self) -> Vec<Source> {
        let mut imports: Vec<(&str, &str)> = self
            .environment
            .imports()
            .filter(|(simple, qualified)| {
                !(self.environment.is_top_level(qualified)
                    && *simple == rendered_simple_name(qualified))
            })
            .map(|(simple, qualified)| (qualified, simple))
            .collect();
        imports.sort_unstable();

        imports
            .into_iter()
            .map(|(qualified, simple)| {
                let path = qualified_identifier(qualified);
                if simple == rendered_simple_name(qualified) {
                    Source::text(format!("import {}", path))
                } else {
                    Source::text(format!("import {} as {}", path, simple))
                }
            })
            .collect()
    }
}

/// First 8 hex digits of SHA-256 over the name (and attempt number after the first)
fn short_digest(qualified_name: &str, attempt: u32) -> String {
    let mut hasher = Sha256::new();
    hasher.update(qualified_name.as_bytes());
    if attempt > 0 {
        hasher.update(attempt.to_le_bytes());
    }
    hasher
        .finalize()
        .iter()
        .take(4)
        .map(|byte| format!("{:02x}", byte))
        .collect()
}
