//! Symbolic expression trees with numeric evaluation, algebraic
//! simplification, and symbolic differentiation.
//!
//! Expressions are values of the [`Expr`] sum type, built programmatically
//! (there is no parser in this crate) from numbers, symbols, operators,
//! and calls to a fixed set of builtin functions (`sin`, `cos`, `tan`,
//! `exp`, `ln`, `log`, `sqrt`, `sum`). Three operations consume them:
//!
//! - **evaluation** ([`numerical::Eval`]): reduce a tree to an `f64` under
//!   the symbol bindings of a [`numerical::Ctxt`];
//! - **simplification** ([`symbolic::simplify()`]): rewrite a tree with
//!   constant folding and the identity/cancellation laws;
//! - **differentiation** ([`symbolic::derivative()`]): build the derivative
//!   of a tree with respect to a symbol, as a new tree.
//!
//! Trees are immutable; every operation is a pure function returning a new
//! tree or a scalar, so expressions can be shared across threads freely.
//!
//! # Example
//!
//! ```
//! use symtree::expr::Expr;
//! use symtree::numerical::{Ctxt, Eval};
//! use symtree::symbolic::{derivative, simplify};
//!
//! // f = x^2 + sin(x)
//! let f = Expr::symbol("x").pow(Expr::Number(2.0))
//!     + Expr::call("sin", vec![Expr::symbol("x")]);
//!
//! // evaluate f at x = 0
//! let mut ctxt = Ctxt::new();
//! ctxt.add_var("x", 0.0);
//! assert_eq!(f.eval(&ctxt).unwrap(), 0.0);
//!
//! // f' = 2x + cos(x)
//! let diff = simplify(&derivative(&f, "x").unwrap());
//! assert_eq!(diff.to_string(), "((2 * x) + cos(x))");
//!
//! // f'(0) = 1
//! assert_eq!(diff.eval(&ctxt).unwrap(), 1.0);
//! ```

pub mod expr;
pub mod funcs;
pub mod numerical;
pub mod symbolic;

pub use expr::Expr;
