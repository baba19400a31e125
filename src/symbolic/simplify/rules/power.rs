//! Simplification rules for expressions involving exponentiation.

use crate::expr::{BinOpKind, Expr};
use crate::symbolic::{simplify::step::Step, step_collector::StepCollector};
use super::do_binary;

/// `a^0 = 1`
pub fn power_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinOpKind::Exp, |_, right| {
        if right.as_number() == Some(0.0) {
            Some(Expr::Number(1.0))
        } else {
            None
        }
    })?;

    step_collector.push(Step::PowerZero);
    Some(opt)
}

/// `a^1 = a`
pub fn power_one(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinOpKind::Exp, |left, right| {
        if right.as_number() == Some(1.0) {
            Some(left.clone())
        } else {
            None
        }
    })?;

    step_collector.push(Step::PowerOne);
    Some(opt)
}

/// Applies all exponentiation rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    power_zero(expr, step_collector)
        .or_else(|| power_one(expr, step_collector))
}
