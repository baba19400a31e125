//! Algebraic manipulation of expressions.
//!
//! This module hosts the two transformations that treat an
//! [`Expr`](crate::expr::Expr) as a formula rather than a computation:
//!
//! - [`simplify()`] rewrites an expression into a locally reduced form,
//!   folding constant sub-expressions and applying the identity and
//!   cancellation laws. See [`mod@simplify`] for the exact rule set and the
//!   single-pass policy.
//! - [`derivative()`] produces the symbolic derivative of an expression
//!   with respect to a symbol name, leaving the result unsimplified for
//!   the caller to reduce.
//!
//! Both are pure functions from trees to trees; neither evaluates symbols
//! or needs a context.
//!
//! ```
//! use symtree::expr::Expr;
//! use symtree::symbolic::{derivative, simplify};
//!
//! // d/dx (x^2 + x) = 2x + 1
//! let expr = Expr::symbol("x").pow(Expr::Number(2.0)) + Expr::symbol("x");
//! let diff = simplify(&derivative(&expr, "x").unwrap());
//! assert_eq!(diff.to_string(), "((2 * x) + 1)");
//! ```

pub mod derivative;
pub mod simplify;
pub mod step_collector;

pub use derivative::{derivative, DerivativeError};
pub use simplify::{simplify, simplify_with, simplify_with_steps};
pub use step_collector::StepCollector;
