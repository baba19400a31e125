use crate::expr::Expr;
use crate::funcs;
use crate::numerical::{
    ctxt::Ctxt,
    error::{kind::UnknownFunction, Error},
};
use super::eval_at;

/// Evaluates a function-call node: resolves the name against the builtin
/// registry, evaluates every argument left to right, then dispatches to the
/// builtin (which checks arity and domain).
pub(crate) fn eval_call(
    name: &str,
    args: &[Expr],
    ctxt: &Ctxt,
    depth: usize,
) -> Result<f64, Error> {
    let builtin = funcs::get(name).ok_or_else(|| UnknownFunction {
        name: name.to_string(),
        suggestions: funcs::similar_names(name)
            .into_iter()
            .map(|s| s.to_string())
            .collect(),
    })?;

    let mut values = Vec::with_capacity(args.len());
    for arg in args {
        values.push(eval_at(arg, ctxt, depth)?);
    }

    builtin.eval(&values).map_err(Error::from)
}
