use std::io;

use thiserror::Error;

/// Failure reported by a KEM provider.
#[derive(Debug, Error)]
pub enum KemError {
    #[error("{what} has {actual} bytes, expected {expected}")]
    Length {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("kem backend failure: {0}")]
    Provider(String),
}

/// Failure of one generation cycle. Nothing is recovered locally.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("key pair generation failed")]
    Generation(#[source] KemError),

    #[error("encapsulation failed")]
    Encapsulation(#[source] KemError),

    #[error("writing payload failed")]
    OutputWrite(#[source] io::Error),
}

#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("payload has {actual} bytes, expected {expected}")]
    Length { expected: usize, actual: usize },

    #[error(transparent)]
    Kem(#[from] KemError),
}
