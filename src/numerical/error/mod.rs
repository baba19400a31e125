pub mod kind;

use thiserror::Error;

/// Any error that can occur while numerically evaluating an expression.
///
/// Every variant wraps one of the error kinds in [`kind`]; the enum exists
/// so a single [`eval`](crate::numerical::Eval::eval) call has a single
/// error type while each kind keeps its own typed payload. Errors are
/// always surfaced to the caller — nothing is recovered or retried
/// internally.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum Error {
    /// Evaluation reached a symbol not present in the supplied context.
    #[error(transparent)]
    UnboundSymbol(#[from] kind::UnboundSymbol),

    /// A call node names a function outside the builtin set.
    #[error(transparent)]
    UnknownFunction(#[from] kind::UnknownFunction),

    /// A function call has more arguments than its definition accepts.
    #[error(transparent)]
    TooManyArguments(#[from] kind::TooManyArguments),

    /// A function call has fewer arguments than its definition requires.
    #[error(transparent)]
    MissingArgument(#[from] kind::MissingArgument),

    /// A division's divisor evaluated to exactly zero.
    #[error(transparent)]
    DivisionByZero(#[from] kind::DivisionByZero),

    /// An operator or function was applied outside its real-valued domain.
    #[error(transparent)]
    OutOfDomain(#[from] kind::OutOfDomain),

    /// The expression tree is nested too deeply to evaluate.
    #[error(transparent)]
    StackOverflow(#[from] kind::StackOverflow),
}
