pub mod error;

use error::BuiltinError;
use crate::numerical::error::kind::{MissingArgument, TooManyArguments};

/// A function parameter to a builtin function.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BuiltinParam {
    /// The name of the parameter.
    pub name: &'static str,

    /// Whether the parameter is required, optional, or variadic.
    pub kind: ParamKind,
}

/// The kind of the function parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParamKind {
    /// The parameter must be given.
    Required,

    /// The parameter may be omitted.
    Optional,

    /// The parameter stands for any number of trailing arguments,
    /// including none.
    Variadic,
}

/// A trait implemented by all builtin functions.
pub trait Builtin: std::fmt::Debug + Send + Sync {
    /// Returns the name of the function.
    // NOTE: this is a `&self` method and not an associated constant to make the trait object-safe
    fn name(&self) -> &'static str;

    /// The function's signature, indicating all parameters and whether they
    /// are required, optional, or variadic.
    fn sig(&self) -> &'static [BuiltinParam];

    /// The function's signature as a string, used for error messages.
    fn sig_str(&self) -> String {
        let params = self.sig()
            .iter()
            .map(|param| match param.kind {
                ParamKind::Required => param.name.to_string(),
                ParamKind::Optional => format!("{}?", param.name),
                ParamKind::Variadic => format!("...{}", param.name),
            })
            .collect::<Vec<_>>()
            .join(", ");
        format!("{}({})", self.name(), params)
    }

    /// Evaluates the function over already-evaluated arguments.
    fn eval(&self, args: &[f64]) -> Result<f64, BuiltinError>;
}

/// Checks the number of given arguments against a builtin's signature,
/// producing the appropriate arity error on mismatch.
pub(crate) fn check_args(builtin: &dyn Builtin, given: usize) -> Result<(), BuiltinError> {
    let sig = builtin.sig();
    let required = sig.iter()
        .filter(|param| param.kind == ParamKind::Required)
        .count();
    let variadic = sig.iter().any(|param| param.kind == ParamKind::Variadic);

    if given < required {
        return Err(BuiltinError::MissingArgument(MissingArgument {
            name: builtin.name().to_string(),
            expected: required,
            given,
            signature: builtin.sig_str(),
        }));
    }

    if !variadic && given > sig.len() {
        return Err(BuiltinError::TooManyArguments(TooManyArguments {
            name: builtin.name().to_string(),
            expected: sig.len(),
            given,
            signature: builtin.sig_str(),
        }));
    }

    Ok(())
}
