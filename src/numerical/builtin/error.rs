use thiserror::Error;
use crate::numerical::error::{kind, Error};

/// Represents an error that can occur while evaluating a builtin function.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BuiltinError {
    /// The function was called with too many arguments.
    #[error(transparent)]
    TooManyArguments(kind::TooManyArguments),

    /// An argument to the function call is missing.
    #[error(transparent)]
    MissingArgument(kind::MissingArgument),

    /// An argument is outside the function's real-valued domain.
    #[error(transparent)]
    OutOfDomain(kind::OutOfDomain),
}

impl From<BuiltinError> for Error {
    fn from(err: BuiltinError) -> Self {
        match err {
            BuiltinError::TooManyArguments(kind) => Error::TooManyArguments(kind),
            BuiltinError::MissingArgument(kind) => Error::MissingArgument(kind),
            BuiltinError::OutOfDomain(kind) => Error::OutOfDomain(kind),
        }
    }
}
