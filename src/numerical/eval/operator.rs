use crate::expr::{BinOpKind, UnaryOpKind};
use crate::numerical::error::{
    kind::{DivisionByZero, OutOfDomain},
    Error,
};

/// Evaluates a binary operator over the values of its two operands.
///
/// This is the single home of the crate's arithmetic edge-case policy, used
/// by both evaluation and constant folding so the two can never disagree:
/// division by exactly zero and exponentiation with an undefined real
/// result are errors; overflow to an infinity propagates as the IEEE value.
pub(crate) fn eval_binary_operands(op: BinOpKind, left: f64, right: f64) -> Result<f64, Error> {
    Ok(match op {
        BinOpKind::Add => left + right,
        BinOpKind::Sub => left - right,
        BinOpKind::Mul => left * right,
        BinOpKind::Div => {
            if right == 0.0 {
                return Err(DivisionByZero.into());
            }
            left / right
        },
        BinOpKind::Exp => {
            let result = left.powf(right);
            // a NaN from non-NaN operands means the real result is
            // undefined, e.g. a negative base with a fractional exponent
            if result.is_nan() && !left.is_nan() && !right.is_nan() {
                return Err(OutOfDomain { name: BinOpKind::Exp.to_string() }.into());
            }
            result
        },
    })
}

/// Evaluates a unary operator over the value of its operand.
pub(crate) fn eval_unary_operand(op: UnaryOpKind, operand: f64) -> f64 {
    match op {
        UnaryOpKind::Neg => -operand,
    }
}
