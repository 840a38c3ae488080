use thiserror::Error;

use crate::qualified::QualifiedNameError;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid qualified name: {0}")]
    InvalidQualifiedName(#[from] QualifiedNameError),

    #[error("Configuration error: {0}")]
    Config(String),
}
