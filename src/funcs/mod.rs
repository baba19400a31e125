//! All builtin functions known to the evaluator.
//!
//! Each function is implemented as a unit `struct` with an associated
//! `eval_static` method. This method can be used to evaluate the function
//! directly in Rust code when the arguments are known at compile time.
//!
//! Each function also implements the [`Builtin`] trait, which adds
//! name/signature metadata and an arity- and domain-checked [`Builtin::eval`]
//! over runtime argument lists. The registry returned by [`all`] is what
//! evaluation and constant folding dispatch function-call nodes through.
//!
//! # Example
//!
//! ```
//! use symtree::funcs::trigonometry::Sin;
//!
//! // evaluate sin(pi / 2) using `eval_static`
//! let result = Sin::eval_static(std::f64::consts::FRAC_PI_2);
//! assert!((result - 1.0).abs() < 1e-12);
//! ```

pub mod power;
pub mod sequence;
pub mod trigonometry;

use levenshtein::levenshtein;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use crate::numerical::builtin::Builtin;

/// Builds a one-argument function whose `f64` implementation has the same
/// name as the given function.
macro_rules! simple {
    ($($method:ident $upname:ident; $doc:literal),* $(,)?) => {
        $(
            #[doc = $doc]
            #[derive(Debug)]
            pub struct $upname;

            impl $upname {
                pub fn eval_static(n: f64) -> f64 {
                    n.$method()
                }
            }

            impl $crate::numerical::builtin::Builtin for $upname {
                fn name(&self) -> &'static str {
                    stringify!($method)
                }

                fn sig(&self) -> &'static [$crate::numerical::builtin::BuiltinParam] {
                    &[$crate::numerical::builtin::BuiltinParam {
                        name: "n",
                        kind: $crate::numerical::builtin::ParamKind::Required,
                    }]
                }

                fn eval(
                    &self,
                    args: &[f64],
                ) -> Result<f64, $crate::numerical::builtin::error::BuiltinError> {
                    $crate::numerical::builtin::check_args(self, args.len())?;
                    Ok(Self::eval_static(args[0]))
                }
            }
        )*
    };
}

pub(crate) use simple;

/// The registry of all builtin functions, keyed by name.
static ALL: Lazy<HashMap<&'static str, &'static dyn Builtin>> = Lazy::new(|| {
    use power::*;
    use sequence::*;
    use trigonometry::*;

    macro_rules! build {
        ($($name:literal $upname:ident),* $(,)?) => {
            [
                $(
                    ($name, &$upname as &'static dyn Builtin),
                )*
            ]
                .into_iter()
                .collect()
        };
    }

    build! {
        "sin" Sin,
        "cos" Cos,
        "tan" Tan,
        "exp" Exp,
        "ln" Ln,
        "log" Log,
        "sqrt" Sqrt,
        "sum" Sum,
    }
});

/// Returns the registry of all builtin functions that can be numerically
/// evaluated.
pub fn all() -> &'static HashMap<&'static str, &'static dyn Builtin> {
    &ALL
}

/// Looks up a builtin function by name.
pub fn get(name: &str) -> Option<&'static dyn Builtin> {
    ALL.get(name).copied()
}

/// Returns the names of all builtin functions with a name similar to the
/// given name, for "did you mean" suggestions.
pub fn similar_names(name: &str) -> Vec<&'static str> {
    let mut names = ALL.keys()
        .filter(|n| levenshtein(n, name) < 2)
        .copied()
        .collect::<Vec<_>>();
    names.sort_unstable();
    names
}
