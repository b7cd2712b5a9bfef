//! The module contains the errors the engine can throw.
//!
//! The errors are:
//!
//! - [`EngineError`] thrown when the expense log cannot be written to storage.
//! - [`RecordRejection`] describing why a stored element was dropped on load.
//!   Rejections never leave the engine as failures: they only explain a drop.
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Reason a stored element could not be turned into an
/// [`ExpenseRecord`](crate::ExpenseRecord).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordRejection {
    #[error("element is not an object")]
    NotAnObject,
    #[error("missing \"{0}\" field")]
    MissingField(&'static str),
    #[error("\"{0}\" field has the wrong type")]
    WrongType(&'static str),
    #[error("amount is not a number: {0}")]
    NotANumber(String),
    #[error("amount must be > 0")]
    NonPositiveAmount,
    #[error("\"{0}\" field is blank")]
    Blank(&'static str),
}
