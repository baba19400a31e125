//! Numeric evaluation of expressions under a symbol binding.
//!
//! The entry point is the [`Eval`] trait, implemented for
//! [`Expr`](crate::expr::Expr): [`Eval::eval`] reduces an expression tree
//! to an `f64` under the bindings in a [`Ctxt`], and [`Eval::eval_default`]
//! evaluates against the default context (which binds `e`, `pi`, and
//! `tau`).
//!
//! Evaluation is a pure function of the tree and the context; failures are
//! reported through [`error::Error`], never panics.

pub mod builtin;
pub mod ctxt;
pub mod error;
pub mod eval;

pub use ctxt::Ctxt;
pub use eval::Eval;
