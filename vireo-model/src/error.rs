use thiserror::Error;

/// Errors produced by model constructors and validation routines.
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("invalid identifier: {0:?}")]
    InvalidId(String),

    #[error("unrecognized parental rating: {0:?}")]
    InvalidRating(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
