//! Error types for name rendering
//!
//! Naming has exactly one fatal failure: a descriptor reaching a branch that
//! assumes a different, mutually exclusive kind. That indicates a defect in
//! the upstream model and aborts rendering of the whole unit. Every other
//! naming rule is total.

use std::fmt;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NamingError {
    #[error("Unexpected {descriptor} descriptor at {location}")]
    UnexpectedDescriptor {
        location: DeclarationLocation,
        descriptor: String,
    },
}

/// Where in the model a naming failure occurred
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeclarationLocation {
    /// Qualified name of the type being named or owning the member
    pub type_name: Option<String>,
    /// Member name (method, field)
    pub member: Option<String>,
    /// Parameter name
    pub parameter: Option<String>,
}

impl DeclarationLocation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_type(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }

    pub fn in_member(mut self, member: impl Into<String>) -> Self {
        self.member = Some(member.into());
        self
    }

    pub fn in_parameter(mut self, parameter: impl Into<String>) -> Self {
        self.parameter = Some(parameter.into());
        self
    }
}

impl fmt::Display for DeclarationLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.type_name, &self.member) {
            (Some(t), Some(m)) => write!(f, "{}::{}", t, m)?,
            (Some(t), None) => write!(f, "{}", t)?,
            (None, Some(m)) => write!(f, "::{}", m)?,
            (None, None) => write!(f, "<unknown declaration>")?,
        }
        if let Some(ref parameter) = self.parameter {
            write!(f, "({})", parameter)?;
        }
        Ok(())
    }
}
