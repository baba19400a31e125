//! The individual kinds of error evaluation can produce.
//!
//! Each kind is a small struct carrying exactly the data needed to explain
//! the failure; the umbrella [`Error`](super::Error) enum wraps one of
//! these per variant.

use thiserror::Error;

/// Renders the "did you mean" tail of an unknown-function message.
fn fmt_suggestions(suggestions: &[String]) -> String {
    match suggestions {
        [] => String::new(),
        [one] => format!("; did you mean the `{}` function?", one),
        many => format!(
            "; did you mean one of these functions? {}",
            many.iter()
                .map(|s| format!("`{}`", s))
                .collect::<Vec<_>>()
                .join(", ")
        ),
    }
}

/// The symbol is not bound in the evaluation context.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("`{name}` is not defined")]
pub struct UnboundSymbol {
    /// The name of the symbol that was unbound.
    pub name: String,
}

/// The function name is outside the builtin set.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("the `{}` function does not exist{}", .name, fmt_suggestions(.suggestions))]
pub struct UnknownFunction {
    /// The name of the function that was called.
    pub name: String,

    /// A list of similarly named builtin functions, if any.
    pub suggestions: Vec<String>,
}

/// Too many arguments were given to a function call.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("too many arguments were given to the `{name}` function \
    (at most {expected} accepted, {given} given); usage: `{signature}`")]
pub struct TooManyArguments {
    /// The name of the function that was called.
    pub name: String,

    /// The maximum number of arguments the function accepts.
    pub expected: usize,

    /// The number of arguments that were given.
    pub given: usize,

    /// The function's signature, for the error message.
    pub signature: String,
}

/// An argument to a function call is missing.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("missing argument(s) for the `{name}` function \
    (at least {expected} required, {given} given); usage: `{signature}`")]
pub struct MissingArgument {
    /// The name of the function that was called.
    pub name: String,

    /// The minimum number of arguments the function requires.
    pub expected: usize,

    /// The number of arguments that were given.
    pub given: usize,

    /// The function's signature, for the error message.
    pub signature: String,
}

/// The divisor of a division evaluated to exactly zero.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("attempted to divide by zero")]
pub struct DivisionByZero;

/// An operator or function was applied outside its real-valued domain,
/// e.g. `(-8) ^ 0.5`, `ln(-1)`, or `sqrt(-4)`.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("`{name}` is undefined for the given operand(s)")]
pub struct OutOfDomain {
    /// The operator symbol or function name that was applied.
    pub name: String,
}

/// The expression tree is nested too deeply to evaluate.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("maximum recursion depth exceeded")]
pub struct StackOverflow;
