//! Constant folding of function calls.

use crate::expr::Expr;
use crate::funcs;
use crate::symbolic::{simplify::step::Step, step_collector::StepCollector};
use super::do_call;

/// Folds a function call whose arguments are all numbers by evaluating it
/// through the builtin registry, so `sum(1, 2, 3)` becomes `6`.
///
/// An unknown function name, an arity mismatch, or an out-of-domain
/// argument leaves the call untouched; evaluation is where those are
/// reported.
pub fn fold_call(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_call(expr, |name, args| {
        let values = args.iter()
            .map(Expr::as_number)
            .collect::<Option<Vec<_>>>()?;
        let value = funcs::get(name)?.eval(&values).ok()?;
        Some(Expr::Number(value))
    })?;

    step_collector.push(Step::FoldCall);
    Some(opt)
}

/// Applies all function-call rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    fold_call(expr, step_collector)
}
