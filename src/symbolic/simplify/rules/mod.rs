//! Implementation of the simplification rules.
//!
//! Each rule in this module is a function that takes the expression to
//! simplify as an argument, and returns `Some(expr)` with the simplified
//! expression if the rule applies, or `None` if the rule does not apply.
//!
//! [`all`] chains every rule in a fixed order; the first rule that applies
//! wins, and at most one rule rewrites any given node per simplification
//! pass.

pub mod add;
pub mod call;
pub mod fold;
pub mod multiply;
pub mod power;

use crate::expr::{BinOpKind, Expr, UnaryOpKind};
use crate::symbolic::step_collector::StepCollector;
use super::step::Step;

/// If the expression is a binary node with the given operator, calls the
/// given transformation function with the left and right operands.
///
/// Returns `Some(expr)` with the transformed expression if a
/// transformation was applied.
pub(crate) fn do_binary(
    expr: &Expr,
    op: BinOpKind,
    f: impl Copy + Fn(&Expr, &Expr) -> Option<Expr>,
) -> Option<Expr> {
    if let Expr::Binary(left, target_op, right) = expr {
        if *target_op == op {
            return f(left, right);
        }
    }

    None
}

/// If the expression is a unary node, calls the given transformation
/// function with the operator and operand.
///
/// Returns `Some(expr)` with the transformed expression if a
/// transformation was applied.
pub(crate) fn do_unary(
    expr: &Expr,
    f: impl Copy + Fn(UnaryOpKind, &Expr) -> Option<Expr>,
) -> Option<Expr> {
    if let Expr::Unary(op, operand) = expr {
        f(*op, operand)
    } else {
        None
    }
}

/// If the expression is a function call, calls the given transformation
/// function with the function name and arguments.
///
/// Returns `Some(expr)` with the transformed expression if a
/// transformation was applied.
pub(crate) fn do_call(
    expr: &Expr,
    f: impl Copy + Fn(&str, &[Expr]) -> Option<Expr>,
) -> Option<Expr> {
    if let Expr::Call(name, args) = expr {
        f(name, args)
    } else {
        None
    }
}

/// Applies all rules; the first rule that matches wins.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    fold::all(expr, step_collector)
        .or_else(|| add::all(expr, step_collector))
        .or_else(|| multiply::all(expr, step_collector))
        .or_else(|| power::all(expr, step_collector))
        .or_else(|| call::all(expr, step_collector))
}
