//! Constant folding of operator nodes.

use crate::expr::Expr;
use crate::numerical::eval::{eval_binary_operands, eval_unary_operand};
use crate::symbolic::{simplify::step::Step, step_collector::StepCollector};
use super::do_unary;

/// Folds a binary operator node whose operands are both numbers into a
/// number.
///
/// If evaluating the operator would fail (division by zero, an undefined
/// power), the rule does not apply and the node is left symbolic, so that
/// folding never hides an error that evaluation would report.
pub fn fold_binary(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let Expr::Binary(left, op, right) = expr else {
        return None;
    };
    let value = eval_binary_operands(*op, left.as_number()?, right.as_number()?).ok()?;

    step_collector.push(Step::ConstantFold);
    Some(Expr::Number(value))
}

/// Folds a unary operator node whose operand is a number into a number.
pub fn fold_unary(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_unary(expr, |op, operand| {
        Some(Expr::Number(eval_unary_operand(op, operand.as_number()?)))
    })?;

    step_collector.push(Step::ConstantFold);
    Some(opt)
}

/// Applies all constant-folding rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    fold_binary(expr, step_collector)
        .or_else(|| fold_unary(expr, step_collector))
}
