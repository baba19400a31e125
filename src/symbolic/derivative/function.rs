//! Symbolic derivatives of the builtin functions in [`crate::funcs`].

use crate::expr::Expr;
use super::{derivative, DerivativeError};

/// Computes the derivative of a supported function call, applying the
/// chain rule: the result is `d(outer)/d(inner) * inner'`.
///
/// `sum` and `log` have no derivative rule and fail with
/// [`DerivativeError::Unsupported`], as does any name outside the builtin
/// set.
pub(super) fn function_derivative(
    name: &str,
    args: &[Expr],
    with: &str,
) -> Result<Expr, DerivativeError> {
    match name {
        "sin" | "cos" | "tan" | "exp" | "ln" | "sqrt" => {},
        _ => {
            return Err(DerivativeError::Unsupported { name: name.to_string() });
        },
    }

    let [arg] = args else {
        return Err(DerivativeError::InvalidArity {
            name: name.to_string(),
            given: args.len(),
        });
    };
    let d_arg = derivative(arg, with)?;

    let outer = match name {
        "sin" => Expr::call("cos", vec![arg.clone()]),
        "cos" => Expr::Number(-1.0) * Expr::call("sin", vec![arg.clone()]),
        // sec is not a node kind here; 1 / cos^2 expresses the same thing
        "tan" => {
            Expr::Number(1.0)
                / Expr::call("cos", vec![arg.clone()]).pow(Expr::Number(2.0))
        },
        "exp" => Expr::call("exp", vec![arg.clone()]),
        "ln" => Expr::Number(1.0) / arg.clone(),
        "sqrt" => {
            Expr::Number(1.0)
                / (Expr::Number(2.0) * Expr::call("sqrt", vec![arg.clone()]))
        },
        _ => unreachable!(),
    };

    Ok(outer * d_arg)
}
