//! Name rendering for generated sources
//!
//! Everything a code emitter needs to spell names in the output language:
//! identifier sanitization, per-unit import and alias resolution, and the
//! interop naming scheme with its annotations.

pub mod environment;
pub mod error;
pub mod identifier;
pub mod interop;
pub mod reserved;
pub mod resolver;
pub mod source;

pub use environment::{ImportStats, NamingEnvironment};
pub use error::{DeclarationLocation, NamingError};
pub use identifier::sanitize;
pub use interop::{InteropNamer, MethodInteropNames};
pub use resolver::Renderer;
pub use source::Source;
