//! Functions related to exponentials, logarithms, and roots.

use crate::funcs::simple;
use crate::numerical::builtin::{check_args, Builtin, BuiltinParam, ParamKind};
use crate::numerical::builtin::error::BuiltinError;
use crate::numerical::error::kind::OutOfDomain;

simple! {
    exp Exp; "The exponential function, `e ^ x`.",
}

/// The natural logarithm, `ln(x)`. Defined for `x > 0`.
#[derive(Debug)]
pub struct Ln;

impl Ln {
    pub fn eval_static(n: f64) -> f64 {
        n.ln()
    }
}

impl Builtin for Ln {
    fn name(&self) -> &'static str {
        "ln"
    }

    fn sig(&self) -> &'static [BuiltinParam] {
        &[BuiltinParam { name: "n", kind: ParamKind::Required }]
    }

    fn eval(&self, args: &[f64]) -> Result<f64, BuiltinError> {
        check_args(self, args.len())?;
        if args[0] <= 0.0 {
            return Err(BuiltinError::OutOfDomain(OutOfDomain {
                name: self.name().to_string(),
            }));
        }
        Ok(Self::eval_static(args[0]))
    }
}

/// The logarithm function, `log(x, base)`.
///
/// With one argument this is the natural logarithm; with two, the
/// logarithm of `x` in the given base, so `log(8, 2) = 3`.
#[derive(Debug)]
pub struct Log;

impl Log {
    pub fn eval_static(n: f64, base: Option<f64>) -> f64 {
        match base {
            Some(base) => n.ln() / base.ln(),
            None => n.ln(),
        }
    }
}

impl Builtin for Log {
    fn name(&self) -> &'static str {
        "log"
    }

    fn sig(&self) -> &'static [BuiltinParam] {
        &[
            BuiltinParam { name: "n", kind: ParamKind::Required },
            BuiltinParam { name: "base", kind: ParamKind::Optional },
        ]
    }

    fn eval(&self, args: &[f64]) -> Result<f64, BuiltinError> {
        check_args(self, args.len())?;
        let out_of_domain = || {
            BuiltinError::OutOfDomain(OutOfDomain {
                name: self.name().to_string(),
            })
        };

        if args[0] <= 0.0 {
            return Err(out_of_domain());
        }
        if let Some(&base) = args.get(1) {
            // a base of 1 would divide by ln(1) = 0
            if base <= 0.0 || base == 1.0 {
                return Err(out_of_domain());
            }
        }

        Ok(Self::eval_static(args[0], args.get(1).copied()))
    }
}

/// The square root function, `sqrt(x)`. Defined for `x >= 0`.
#[derive(Debug)]
pub struct Sqrt;

impl Sqrt {
    pub fn eval_static(n: f64) -> f64 {
        n.sqrt()
    }
}

impl Builtin for Sqrt {
    fn name(&self) -> &'static str {
        "sqrt"
    }

    fn sig(&self) -> &'static [BuiltinParam] {
        &[BuiltinParam { name: "n", kind: ParamKind::Required }]
    }

    fn eval(&self, args: &[f64]) -> Result<f64, BuiltinError> {
        check_args(self, args.len())?;
        if args[0] < 0.0 {
            return Err(BuiltinError::OutOfDomain(OutOfDomain {
                name: self.name().to_string(),
            }));
        }
        Ok(Self::eval_static(args[0]))
    }
}
