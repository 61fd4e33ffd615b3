use thiserror::Error;

// Unified error type for laplace-inpaint

#[derive(Error, Debug)]
pub enum InpaintError {
    #[error("shape mismatch: expected {expected:?}, found {found:?}")]
    InvalidShape {
        expected: (usize, usize),
        found: (usize, usize),
    },
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("ragged row on line {line}: expected {expected} columns, found {found}")]
    RaggedRow { line: usize, expected: usize, found: usize },
    #[error("parse error on line {line}: cannot read {token:?} as a number")]
    Parse { line: usize, token: String },
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
