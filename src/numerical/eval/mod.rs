mod call;
mod operator;

pub(crate) use operator::eval_binary_operands;
pub(crate) use operator::eval_unary_operand;

use crate::expr::Expr;
use super::ctxt::{Ctxt, MAX_RECURSION_DEPTH};
use super::error::{kind, Error};

/// Any type that can be evaluated to produce a value.
pub trait Eval {
    /// Evaluate the expression to produce a value, using the given context.
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, Error>;

    /// Evaluate the expression to produce a value, using the default
    /// context.
    fn eval_default(&self) -> Result<f64, Error> {
        self.eval(&Default::default())
    }
}

impl Eval for Expr {
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, Error> {
        eval_at(self, ctxt, 0)
    }
}

/// The recursive evaluator. `depth` tracks how far below the root the
/// current node is, bounding recursion at [`MAX_RECURSION_DEPTH`].
pub(crate) fn eval_at(expr: &Expr, ctxt: &Ctxt, depth: usize) -> Result<f64, Error> {
    if depth > MAX_RECURSION_DEPTH {
        return Err(kind::StackOverflow.into());
    }

    match expr {
        Expr::Number(value) => Ok(*value),
        Expr::Symbol(name) => ctxt.get_var(name)
            .ok_or_else(|| kind::UnboundSymbol { name: name.clone() }.into()),
        Expr::Unary(op, operand) => {
            let operand = eval_at(operand, ctxt, depth + 1)?;
            Ok(operator::eval_unary_operand(*op, operand))
        },
        Expr::Binary(left, op, right) => {
            let left = eval_at(left, ctxt, depth + 1)?;
            let right = eval_at(right, ctxt, depth + 1)?;
            operator::eval_binary_operands(*op, left, right)
        },
        Expr::Call(name, args) => call::eval_call(name, args, ctxt, depth + 1),
    }
}
