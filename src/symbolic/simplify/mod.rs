//! Algebraic simplification of expressions.
//!
//! The entry point is [`simplify()`], which accepts an expression and
//! returns a simplified version of it:
//!
//! ```
//! use symtree::expr::Expr;
//! use symtree::symbolic::simplify;
//!
//! // (0 + x) -> x
//! let expr = Expr::Number(0.0) + Expr::symbol("x");
//! assert_eq!(simplify(&expr), Expr::symbol("x"));
//! ```
//!
//! # Simplification policy
//!
//! Simplification is **single-pass and bottom-up**: the children of a node
//! are simplified first, then the rules in [`rules`] run on the rebuilt
//! node, first match wins. It is *not* a repeat-until-stable rewrite. The
//! one exception is the `a + a = 2 * a` rewrite, which simplifies the
//! product it introduces before returning it (the behavior the rule set
//! was defined with). A consequence of the single pass is that the result
//! is locally reduced, not canonical: nothing reassociates or reorders
//! operands, so `(2 * x) + x` comes back unchanged even though `3 * x` is
//! semantically equal.
//!
//! Constant folding in this module evaluates through the same arithmetic
//! as [`Eval`](crate::numerical::Eval), with the same edge-case policy: a
//! sub-expression whose evaluation would fail (`1 / 0`, `(-8) ^ 0.5`,
//! `ln(0)`) is left symbolic rather than folded.
//!
//! Every call returns a newly constructed tree; even when no rule applies,
//! the result is a fresh node around the simplified children, never the
//! original input.

pub mod rules;
pub mod step;

use crate::expr::Expr;
use crate::symbolic::step_collector::StepCollector;
use step::Step;

/// Simplifies an expression.
pub fn simplify(expr: &Expr) -> Expr {
    simplify_with(expr, &mut ())
}

/// Simplifies an expression, returning the simplified expression together
/// with the rewrite steps that were applied, in application order.
pub fn simplify_with_steps(expr: &Expr) -> (Expr, Vec<Step>) {
    let mut steps = Vec::new();
    let simplified = simplify_with(expr, &mut steps);
    (simplified, steps)
}

/// Simplifies an expression, reporting each applied rewrite to the given
/// step collector.
///
/// See the [module-level documentation](self) for the simplification
/// policy.
pub fn simplify_with(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Expr {
    let rebuilt = match expr {
        Expr::Number(_) | Expr::Symbol(_) => expr.clone(),
        Expr::Unary(op, operand) => Expr::Unary(
            *op,
            Box::new(simplify_with(operand, step_collector)),
        ),
        Expr::Binary(left, op, right) => Expr::Binary(
            Box::new(simplify_with(left, step_collector)),
            *op,
            Box::new(simplify_with(right, step_collector)),
        ),
        Expr::Call(name, args) => Expr::Call(
            name.clone(),
            args.iter()
                .map(|arg| simplify_with(arg, step_collector))
                .collect(),
        ),
    };

    rules::all(&rebuilt, step_collector).unwrap_or(rebuilt)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use std::f64::consts::FRAC_PI_2;
    use crate::numerical::{Ctxt, Eval};
    use super::*;

    #[test]
    fn constant_folding() {
        let expr = Expr::Number(5.0) + Expr::Number(3.0);
        assert_eq!(simplify(&expr), Expr::Number(8.0));

        // folds recursively, bottom-up
        let expr = (Expr::Number(2.0) * Expr::Number(3.0)) - Expr::Number(1.0);
        assert_eq!(simplify(&expr), Expr::Number(5.0));

        let expr = -Expr::Number(5.0);
        assert_eq!(simplify(&expr), Expr::Number(-5.0));
    }

    #[test]
    fn folding_is_sound() {
        // evaluating before and after simplification agrees
        let mut ctxt = Ctxt::new();
        ctxt.add_var("x", 3.5);
        let expr = (Expr::Number(2.0).pow(Expr::Number(5.0)) + Expr::Number(1.0))
            * Expr::symbol("x");
        assert_eq!(
            expr.eval(&ctxt).unwrap(),
            simplify(&expr).eval(&ctxt).unwrap(),
        );
    }

    #[test]
    fn folding_skips_division_by_zero() {
        // `1 / 0` must not fold away the error evaluation reports
        let expr = Expr::Number(1.0) / Expr::Number(0.0);
        assert_eq!(simplify(&expr), expr);
        assert!(simplify(&expr).eval_default().is_err());
    }

    #[test]
    fn folding_skips_undefined_power() {
        let expr = Expr::Number(-8.0).pow(Expr::Number(0.5));
        assert_eq!(simplify(&expr), expr);
    }

    #[test]
    fn add_zero() {
        let expr = Expr::Number(0.0) + Expr::symbol("x");
        assert_eq!(simplify(&expr), Expr::symbol("x"));

        let expr = Expr::symbol("x") + Expr::Number(0.0);
        assert_eq!(simplify(&expr), Expr::symbol("x"));
    }

    #[test]
    fn add_self() {
        let expr = Expr::symbol("x") + Expr::symbol("x");
        assert_eq!(simplify(&expr), Expr::Number(2.0) * Expr::symbol("x"));

        // works for any strictly equal operands, not just symbols
        let sin_x = || Expr::call("sin", vec![Expr::symbol("x")]);
        let expr = sin_x() + sin_x();
        assert_eq!(simplify(&expr), Expr::Number(2.0) * sin_x());
    }

    #[test]
    fn sub_zero() {
        let expr = Expr::symbol("x") - Expr::Number(0.0);
        assert_eq!(simplify(&expr), Expr::symbol("x"));
    }

    #[test]
    fn sub_self() {
        let expr = Expr::symbol("x") - Expr::symbol("x");
        assert_eq!(simplify(&expr), Expr::Number(0.0));

        let xy = || Expr::symbol("x") * Expr::symbol("y");
        let expr = xy() - xy();
        assert_eq!(simplify(&expr), Expr::Number(0.0));
    }

    #[test]
    fn reordered_operands_are_not_cancelled() {
        // strict equality is syntactic: (x + 1) and (1 + x) differ
        let expr = (Expr::symbol("x") + Expr::Number(1.0))
            - (Expr::Number(1.0) + Expr::symbol("x"));
        assert_eq!(simplify(&expr), expr);
    }

    #[test]
    fn multiply_zero() {
        let expr = Expr::Number(0.0) * Expr::symbol("x");
        assert_eq!(simplify(&expr), Expr::Number(0.0));

        let expr = Expr::symbol("x") * Expr::Number(0.0);
        assert_eq!(simplify(&expr), Expr::Number(0.0));
    }

    #[test]
    fn multiply_one() {
        let expr = Expr::Number(1.0) * Expr::symbol("x");
        assert_eq!(simplify(&expr), Expr::symbol("x"));

        let expr = Expr::symbol("x") * Expr::Number(1.0);
        assert_eq!(simplify(&expr), Expr::symbol("x"));
    }

    #[test]
    fn divide_one() {
        let expr = Expr::symbol("x") / Expr::Number(1.0);
        assert_eq!(simplify(&expr), Expr::symbol("x"));
    }

    #[test]
    fn power_zero() {
        let expr = Expr::symbol("x").pow(Expr::Number(0.0));
        assert_eq!(simplify(&expr), Expr::Number(1.0));
    }

    #[test]
    fn power_one() {
        let expr = Expr::symbol("x").pow(Expr::Number(1.0));
        assert_eq!(simplify(&expr), Expr::symbol("x"));
    }

    #[test]
    fn fold_call() {
        let expr = Expr::call("sum", vec![
            Expr::Number(1.0),
            Expr::Number(2.0),
            Expr::Number(3.0),
        ]);
        assert_eq!(simplify(&expr), Expr::Number(6.0));

        let expr = Expr::call("sin", vec![Expr::Number(FRAC_PI_2)]);
        let simplified = simplify(&expr);
        let value = simplified.as_number().unwrap();
        assert!((value - 1.0).abs() < 1e-9);
    }

    #[test]
    fn fold_call_with_symbol_stays() {
        let expr = Expr::call("sum", vec![Expr::Number(2.0), Expr::symbol("x")]);
        assert_eq!(simplify(&expr), expr);
    }

    #[test]
    fn fold_call_out_of_domain_stays() {
        let expr = Expr::call("ln", vec![Expr::Number(-1.0)]);
        assert_eq!(simplify(&expr), expr);
    }

    #[test]
    fn unknown_call_stays() {
        let expr = Expr::call("frobnicate", vec![Expr::Number(1.0)]);
        assert_eq!(simplify(&expr), expr);
    }

    #[test]
    fn rules_compose_bottom_up() {
        // ((x * 1) + (x / 1)) -> x + x -> 2 * x
        let expr = (Expr::symbol("x") * Expr::Number(1.0))
            + (Expr::symbol("x") / Expr::Number(1.0));
        assert_eq!(simplify(&expr), Expr::Number(2.0) * Expr::symbol("x"));
    }

    #[test]
    fn single_pass_is_not_canonicalizing() {
        // nothing combines (2 * x) with a lone x; documented policy
        let expr = (Expr::Number(2.0) * Expr::symbol("x")) + Expr::symbol("x");
        assert_eq!(simplify(&expr), expr);
    }

    #[test]
    fn steps_are_collected_in_order() {
        // (0 + x) * 1: the child rewrites before the parent
        let expr = (Expr::Number(0.0) + Expr::symbol("x")) * Expr::Number(1.0);
        let (simplified, steps) = simplify_with_steps(&expr);
        assert_eq!(simplified, Expr::symbol("x"));
        assert_eq!(steps, [Step::AddZero, Step::MultiplyOne]);
    }
}
