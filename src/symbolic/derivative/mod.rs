//! Symbolic differentiation of expressions.
//!
//! [`derivative()`] computes the derivative of an expression with respect
//! to a symbol name, as a new expression tree. The result is intentionally
//! left **unsimplified** — the rules construct the textbook shapes and do
//! not fold constants or cancel terms, so `d/dx (x * x)` comes back as
//! `((1 * x) + (x * 1))`. Callers that want the reduced form pass the
//! result to [`simplify`](crate::symbolic::simplify()):
//!
//! ```
//! use symtree::expr::Expr;
//! use symtree::symbolic::{derivative, simplify};
//!
//! let expr = Expr::symbol("x") * Expr::symbol("x");
//! let diff = derivative(&expr, "x").unwrap();
//! assert_eq!(simplify(&diff).to_string(), "(2 * x)");
//! ```

mod function;

use thiserror::Error;
use crate::expr::{BinOpKind, Expr, UnaryOpKind};

/// An error produced when a derivative cannot be symbolically computed.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DerivativeError {
    /// The function may be differentiable, but no symbolic rule for it is
    /// implemented (`sum`, `log`, and any name outside the builtin set).
    #[error("no symbolic derivative rule exists for the `{name}` function")]
    Unsupported {
        /// The name of the function that was differentiated.
        name: String,
    },

    /// A function with a derivative rule was applied to the wrong number
    /// of arguments.
    #[error("cannot differentiate a call to `{name}` with {given} argument(s)")]
    InvalidArity {
        /// The name of the function that was differentiated.
        name: String,

        /// The number of arguments the call carries.
        given: usize,
    },
}

/// Computes the derivative of the given expression with respect to the
/// symbol named `with`. Returns [`Err`] if the expression contains a
/// function call with no symbolic derivative rule.
///
/// Subtrees reused on both sides of a rule (e.g. `f` in the product rule)
/// are cloned into the result; the input is never aliased or mutated.
pub fn derivative(expr: &Expr, with: &str) -> Result<Expr, DerivativeError> {
    match expr {
        Expr::Number(_) => Ok(Expr::Number(0.0)),
        Expr::Symbol(name) => Ok(Expr::Number(if name == with { 1.0 } else { 0.0 })),
        Expr::Unary(UnaryOpKind::Neg, operand) => Ok(-derivative(operand, with)?),
        Expr::Binary(left, op, right) => match op {
            BinOpKind::Add => Ok(derivative(left, with)? + derivative(right, with)?),
            BinOpKind::Sub => Ok(derivative(left, with)? - derivative(right, with)?),
            BinOpKind::Mul => product_rule(left, right, with),
            BinOpKind::Div => quotient_rule(left, right, with),
            BinOpKind::Exp => power_rule(left, right, with),
        },
        Expr::Call(name, args) => function::function_derivative(name, args, with),
    }
}

/// `(f * g)' = f' * g + f * g'`
fn product_rule(f: &Expr, g: &Expr, with: &str) -> Result<Expr, DerivativeError> {
    let left = derivative(f, with)? * g.clone();
    let right = f.clone() * derivative(g, with)?;
    Ok(left + right)
}

/// `(f / g)' = (f' * g - f * g') / g^2`
fn quotient_rule(f: &Expr, g: &Expr, with: &str) -> Result<Expr, DerivativeError> {
    let numerator = derivative(f, with)? * g.clone() - f.clone() * derivative(g, with)?;
    let denominator = g.clone().pow(Expr::Number(2.0));
    Ok(numerator / denominator)
}

/// The power rule.
///
/// With a constant exponent, `(f ^ n)' = n * f^(n - 1) * f'`. Otherwise
/// the general form `(f ^ g)' = f^g * (g' * ln(f) + g * f' / f)` applies,
/// which constructs a `ln` call over the base.
fn power_rule(f: &Expr, g: &Expr, with: &str) -> Result<Expr, DerivativeError> {
    if let Some(n) = g.as_number() {
        let coefficient = Expr::Number(n) * f.clone().pow(Expr::Number(n - 1.0));
        Ok(coefficient * derivative(f, with)?)
    } else {
        let f_diff = derivative(f, with)?;
        let g_diff = derivative(g, with)?;
        let ln_f = Expr::call("ln", vec![f.clone()]);
        let term1 = g_diff * ln_f;
        let term2 = g.clone() * (f_diff / f.clone());
        Ok(f.clone().pow(g.clone()) * (term1 + term2))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use crate::numerical::{Ctxt, Eval};
    use crate::symbolic::simplify;
    use super::*;

    /// Evaluates an expression with `x` bound to the given value.
    fn eval_x(expr: &Expr, x: f64) -> f64 {
        let mut ctxt = Ctxt::new();
        ctxt.add_var("x", x);
        expr.eval(&ctxt).unwrap()
    }

    /// Approximates the derivative of the expression at `x` with a central
    /// finite difference.
    fn finite_difference(expr: &Expr, x: f64) -> f64 {
        const DX: f64 = 1e-6;
        (eval_x(expr, x + DX) - eval_x(expr, x - DX)) / (2.0 * DX)
    }

    /// Cross-checks the symbolic derivative against the finite difference
    /// at each of the given points.
    fn check_derivative(expr: &Expr, points: impl IntoIterator<Item = f64>) {
        const TOL: f64 = 1e-4;

        let symbolic = derivative(expr, "x").unwrap();
        for point in points {
            let symbolically_computed = eval_x(&symbolic, point);
            let numerically_computed = finite_difference(expr, point);
            assert!(
                (symbolically_computed - numerically_computed).abs() < TOL,
                "for {expr} at x={point}: symbolic derivative was \
                 {symbolically_computed}, finite difference was {numerically_computed}",
            );
        }
    }

    #[test]
    fn constant() {
        let diff = derivative(&Expr::Number(5.0), "x").unwrap();
        assert_eq!(diff, Expr::Number(0.0));
    }

    #[test]
    fn symbol() {
        assert_eq!(derivative(&Expr::symbol("x"), "x").unwrap(), Expr::Number(1.0));
        assert_eq!(derivative(&Expr::symbol("y"), "x").unwrap(), Expr::Number(0.0));
    }

    #[test]
    fn sum_and_difference() {
        // d/dx (x + 5) = 1
        let expr = Expr::symbol("x") + Expr::Number(5.0);
        let diff = simplify(&derivative(&expr, "x").unwrap());
        assert_eq!(diff, Expr::Number(1.0));

        check_derivative(&(Expr::symbol("x") - Expr::Number(3.0)), [0.0, 1.0, 8.0]);
    }

    #[test]
    fn unary_minus() {
        // d/dx -(x^2) = -2x
        let expr = -Expr::symbol("x").pow(Expr::Number(2.0));
        check_derivative(&expr, [-2.0, 0.0, 1.0, 5.0]);
    }

    #[test]
    fn product_rule_shape() {
        // unsimplified: (f' * g) + (f * g')
        let expr = Expr::symbol("x") * Expr::symbol("x");
        let diff = derivative(&expr, "x").unwrap();
        assert_eq!(diff.to_string(), "((1 * x) + (x * 1))");

        // simplified, it reads as 2x and evaluates accordingly
        let simplified = simplify(&diff);
        let rendered = simplified.to_string();
        assert!(rendered.contains('2') && rendered.contains('x'), "got {rendered}");
        assert_eq!(eval_x(&simplified, 7.0), 14.0);
    }

    #[test]
    fn product_rule_values() {
        let expr = (Expr::symbol("x") + Expr::Number(1.0))
            * Expr::call("sin", vec![Expr::symbol("x")]);
        check_derivative(&expr, [-1.0, 0.0, 0.5, 2.0]);
    }

    #[test]
    fn quotient_rule_shape() {
        let expr = Expr::symbol("x") / Expr::symbol("y");
        let diff = derivative(&expr, "x").unwrap();
        assert_eq!(diff.to_string(), "(((1 * y) - (x * 0)) / (y ^ 2))");
    }

    #[test]
    fn quotient_rule_values() {
        let expr = Expr::symbol("x") / (Expr::symbol("x") + Expr::Number(2.0));
        check_derivative(&expr, [0.0, 1.0, 3.0]);
    }

    #[test]
    fn power_rule_constant_exponent() {
        // d/dx x^2 = 2x
        let expr = Expr::symbol("x").pow(Expr::Number(2.0));
        let diff = simplify(&derivative(&expr, "x").unwrap());
        let rendered = diff.to_string();
        assert!(rendered.contains('2') && rendered.contains('x'), "got {rendered}");
        assert_eq!(eval_x(&diff, 4.0), 8.0);

        check_derivative(&Expr::symbol("x").pow(Expr::Number(5.0)), [-2.0, 1.0, 1.5]);
    }

    #[test]
    fn power_rule_general() {
        // d/dx x^x needs the ln form
        let expr = Expr::symbol("x").pow(Expr::symbol("x"));
        let diff = derivative(&expr, "x").unwrap();
        assert!(diff.to_string().contains("ln(x)"));
        check_derivative(&expr, [0.5, 1.0, 2.0]);
    }

    #[test]
    fn function_derivatives() {
        let x = || Expr::symbol("x");

        let diff = derivative(&Expr::call("sin", vec![x()]), "x").unwrap();
        assert!(diff.to_string().contains("cos(x)"));

        let diff = derivative(&Expr::call("ln", vec![x()]), "x").unwrap();
        assert!(diff.to_string().contains("(1 / x)"));

        let diff = derivative(&Expr::call("exp", vec![x()]), "x").unwrap();
        assert!(diff.to_string().contains("exp(x)"));

        check_derivative(&Expr::call("sin", vec![x()]), [-1.0, 0.0, 0.5, 2.0]);
        check_derivative(&Expr::call("cos", vec![x()]), [-1.0, 0.0, 0.5, 2.0]);
        check_derivative(&Expr::call("tan", vec![x()]), [-0.5, 0.0, 0.5, 1.0]);
        check_derivative(&Expr::call("exp", vec![x()]), [-1.0, 0.0, 1.0]);
        check_derivative(&Expr::call("ln", vec![x()]), [0.5, 1.0, 4.0]);
        check_derivative(&Expr::call("sqrt", vec![x()]), [0.5, 1.0, 9.0]);
    }

    #[test]
    fn chain_rule() {
        // d/dx sin(x^2) = cos(x^2) * 2x
        let expr = Expr::call("sin", vec![Expr::symbol("x").pow(Expr::Number(2.0))]);
        check_derivative(&expr, [-1.0, 0.0, 0.5, 1.5]);
    }

    #[test]
    fn derivative_of_sin_evaluates_as_cos() {
        let expr = Expr::call("sin", vec![Expr::symbol("x")]);
        let diff = simplify(&derivative(&expr, "x").unwrap());
        assert_eq!(diff, Expr::call("cos", vec![Expr::symbol("x")]));
    }

    #[test]
    fn unsupported_functions() {
        let expr = Expr::call("sum", vec![Expr::symbol("x"), Expr::symbol("y")]);
        assert_eq!(
            derivative(&expr, "x"),
            Err(DerivativeError::Unsupported { name: "sum".to_string() }),
        );

        let expr = Expr::call("log", vec![Expr::symbol("x"), Expr::Number(2.0)]);
        assert_eq!(
            derivative(&expr, "x"),
            Err(DerivativeError::Unsupported { name: "log".to_string() }),
        );
    }

    #[test]
    fn malformed_call() {
        let expr = Expr::call("sin", vec![]);
        assert_eq!(
            derivative(&expr, "x"),
            Err(DerivativeError::InvalidArity { name: "sin".to_string(), given: 0 }),
        );
    }
}
