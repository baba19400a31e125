//! Simplification rules for expressions involving addition and
//! subtraction.

use crate::expr::{BinOpKind, Expr};
use crate::symbolic::{
    simplify::{simplify_with, step::Step},
    step_collector::StepCollector,
};
use super::do_binary;

/// `0+a = a`
/// `a+0 = a`
pub fn add_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinOpKind::Add, |left, right| {
        if left.as_number() == Some(0.0) {
            Some(right.clone())
        } else if right.as_number() == Some(0.0) {
            Some(left.clone())
        } else {
            None
        }
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::AddZero);
    Some(opt)
}

/// `a+a = 2*a`
///
/// The operands must be strictly equal; `x + 1` and `1 + x` do not count.
/// The product this rewrite introduces is simplified again, since it can
/// expose further rules.
pub fn add_self(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinOpKind::Add, |left, right| {
        if left == right {
            Some(Expr::Number(2.0) * left.clone())
        } else {
            None
        }
    })?;

    step_collector.push(Step::AddSelf);
    Some(simplify_with(&opt, step_collector))
}

/// `a-0 = a`
pub fn sub_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinOpKind::Sub, |left, right| {
        if right.as_number() == Some(0.0) {
            Some(left.clone())
        } else {
            None
        }
    })?;

    step_collector.push(Step::SubZero);
    Some(opt)
}

/// `a-a = 0`
///
/// The operands must be strictly equal.
pub fn sub_self(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinOpKind::Sub, |left, right| {
        if left == right {
            Some(Expr::Number(0.0))
        } else {
            None
        }
    })?;

    step_collector.push(Step::SubSelf);
    Some(opt)
}

/// Applies all addition and subtraction rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    add_zero(expr, step_collector)
        .or_else(|| add_self(expr, step_collector))
        .or_else(|| sub_zero(expr, step_collector))
        .or_else(|| sub_self(expr, step_collector))
}
