//! Qualified names, the read-only declaration model and configuration for crossname

pub mod config;
pub mod error;
pub mod model;
pub mod naming;
pub mod qualified;

pub use config::InteropConfig;
pub use error::CoreError;
pub use model::{
    FieldDescriptor, MethodDescriptor, PrimitiveKind, TypeDeclaration, TypeDescriptor, Variable,
    Visibility,
};
pub use qualified::{QualifiedName, QualifiedNameError};
