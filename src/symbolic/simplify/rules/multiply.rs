//! Simplification rules for expressions involving multiplication and
//! division.

use crate::expr::{BinOpKind, Expr};
use crate::symbolic::{simplify::step::Step, step_collector::StepCollector};
use super::do_binary;

/// `0*a = 0`
/// `a*0 = 0`
///
/// The annihilator is checked before the identity, so `0 * 1` folds to `0`
/// through the constant-folding rule before either rule here is consulted.
pub fn multiply_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinOpKind::Mul, |left, right| {
        if left.as_number() == Some(0.0) || right.as_number() == Some(0.0) {
            Some(Expr::Number(0.0))
        } else {
            None
        }
    })?;

    step_collector.push(Step::MultiplyZero);
    Some(opt)
}

/// `1*a = a`
/// `a*1 = a`
pub fn multiply_one(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinOpKind::Mul, |left, right| {
        if left.as_number() == Some(1.0) {
            Some(right.clone())
        } else if right.as_number() == Some(1.0) {
            Some(left.clone())
        } else {
            None
        }
    })?;

    step_collector.push(Step::MultiplyOne);
    Some(opt)
}

/// `a/1 = a`
pub fn divide_one(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinOpKind::Div, |left, right| {
        if right.as_number() == Some(1.0) {
            Some(left.clone())
        } else {
            None
        }
    })?;

    step_collector.push(Step::DivideOne);
    Some(opt)
}

/// Applies all multiplication and division rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    multiply_zero(expr, step_collector)
        .or_else(|| multiply_one(expr, step_collector))
        .or_else(|| divide_one(expr, step_collector))
}
