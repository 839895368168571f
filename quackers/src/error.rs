use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuackError {
    #[error("Unsupported operation: {quacker} does not support `{operation}`")]
    UnsupportedOperation {
        operation: &'static str,
        quacker: String,
    },
    #[error("Child out of range: no child at index {index}, flock has {len}")]
    ChildOutOfRange { index: usize, len: usize },
    #[error("Sink failure: {0}")]
    Sink(#[from] io::Error),
}

impl QuackError {
    pub(crate) fn unsupported(operation: &'static str, quacker: &str) -> Self {
        QuackError::UnsupportedOperation {
            operation,
            quacker: quacker.to_string(),
        }
    }
}

pub type QuackResult<T> = Result<T, QuackError>;
