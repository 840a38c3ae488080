//! Opaque text fragments handed to the source-assembly layer
//!
//! A [`Source`] is an ordered list of fragments that the caller concatenates.
//! The helpers here only cover what naming output needs (brackets, commas,
//! assignments); layout belongs to the assembly layer.

use std::fmt;

/// Ordered text fragments, concatenated verbatim
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Source {
    fragments: Vec<String>,
}

impl Source {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn text(text: impl Into<String>) -> Self {
        let text = text.into();
        if text.is_empty() {
            return Self::empty();
        }
        Self {
            fragments: vec![text],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    /// Concatenate sources in order
    pub fn join(sources: impl IntoIterator<Item = Source>) -> Self {
        Self {
            fragments: sources.into_iter().flat_map(|s| s.fragments).collect(),
        }
    }

    /// Join the non-empty sources with `separator` between them
    pub fn separated(separator: &str, sources: impl IntoIterator<Item = Source>) -> Self {
        let mut fragments = Vec::new();
        for source in sources.into_iter().filter(|s| !s.is_empty()) {
            if !fragments.is_empty() {
                fragments.push(separator.to_string());
            }
            fragments.extend(source.fragments);
        }
        Self { fragments }
    }

    pub fn comma_separated(sources: impl IntoIterator<Item = Source>) -> Self {
        Self::separated(", ", sources)
    }

    pub fn in_round_brackets(self) -> Self {
        Self::join([Source::text("("), self, Source::text(")")])
    }

    /// `name = value`
    pub fn assignment(name: Source, value: Source) -> Self {
        Self::join([name, Source::text(" = "), value])
    }

    /// Double-quoted string literal with `\`, `"` and `$` escaped
    pub fn string_literal(value: &str) -> Self {
        let mut literal = String::with_capacity(value.len() + 2);
        literal.push('"');
        for c in value.chars() {
            match c {
                '\\' => literal.push_str("\\\\"),
                '"' => literal.push_str("\\\""),
                '$' => literal.push_str("\\$"),
                '\n' => literal.push_str("\\n"),
                other => literal.push(other),
            }
        }
        literal.push('"');
        Self::text(literal)
    }

    pub fn bool_literal(value: bool) -> Self {
        Self::text(if value { "true" } else { "false" })
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for fragment in &self.fragments {
            f.write_str(fragment)?;
        }
        Ok(())
    }
}
