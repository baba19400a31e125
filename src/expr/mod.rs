//! The expression tree manipulated by every operation in this crate.
//!
//! An [`Expr`] is a closed sum type over the four kinds of node a
//! mathematical expression is built from: numeric constants, symbols,
//! operator applications, and calls to the fixed set of builtin functions.
//! Expressions are constructed programmatically, either with the enum
//! variants directly or with the [`std::ops`] implementations, which build
//! operator nodes without simplifying:
//!
//! ```
//! use symtree::expr::Expr;
//!
//! // (x + 3)
//! let expr = Expr::symbol("x") + Expr::Number(3.0);
//! assert_eq!(expr.to_string(), "(x + 3)");
//! ```
//!
//! Every node exclusively owns its children; transforming operations
//! ([`simplify`](crate::symbolic::simplify()), [`derivative`](crate::symbolic::derivative()))
//! return newly constructed trees and never mutate their input.
//!
//! # Strict equality
//!
//! Determining whether two expressions are semantically equal is as hard as
//! simplification itself: `x^2 + 2x + 1` and `(x + 1)^2` denote the same
//! function but share no structure. Instead of chasing semantic equality,
//! this module defines **strict equality**: two expressions are strictly
//! equal if they are the same kind of node with pairwise strictly equal
//! children (argument order included). Strict equality can never report a
//! false positive — strictly equal expressions are always semantically
//! equal — which makes it a safe foundation for rewrites like
//! `x + x -> 2 * x`. It is not semantic equality, though: `x + 1` and
//! `1 + x` are *not* strictly equal, and no rewrite in this crate treats
//! them as interchangeable.
//!
//! The [`PartialEq`] implementation for [`Expr`] implements strict
//! equality.

mod iter;

use iter::ExprIter;
use std::collections::BTreeSet;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A binary operator that can appear in an [`Expr::Binary`] node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOpKind {
    /// Addition, `+`.
    Add,

    /// Subtraction, `-`.
    Sub,

    /// Multiplication, `*`.
    Mul,

    /// Division, `/`.
    Div,

    /// Real exponentiation, `^`.
    Exp,
}

impl std::fmt::Display for BinOpKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Exp => "^",
        })
    }
}

/// A unary operator that can appear in an [`Expr::Unary`] node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOpKind {
    /// Negation, `-`.
    Neg,
}

/// A mathematical expression.
///
/// The operator sets are closed enums, so a node carrying an operator
/// outside the supported set cannot be constructed. Function calls carry
/// their name as a string and are validated against the builtin registry
/// when evaluated.
#[derive(Debug, Clone)]
pub enum Expr {
    /// A numeric constant, such as `2` or `3.14`.
    Number(f64),

    /// A variable, such as `x` or `y`, resolved through a
    /// [`Ctxt`](crate::numerical::Ctxt) at evaluation time.
    Symbol(String),

    /// A unary operator applied to a single operand.
    Unary(UnaryOpKind, Box<Expr>),

    /// A binary operator applied to two operands.
    Binary(Box<Expr>, BinOpKind, Box<Expr>),

    /// A call to a builtin function, such as `sin(x)` or `log(x, 2)`.
    Call(String, Vec<Expr>),
}

impl Expr {
    /// Creates a [`Expr::Symbol`] node with the given name.
    pub fn symbol(name: impl Into<String>) -> Expr {
        Expr::Symbol(name.into())
    }

    /// Creates a [`Expr::Call`] node for the given function name and
    /// arguments. The name is not validated here; evaluation reports
    /// unknown functions.
    pub fn call(name: impl Into<String>, args: Vec<Expr>) -> Expr {
        Expr::Call(name.into(), args)
    }

    /// Raises this expression to the given power. No simplification is
    /// done.
    pub fn pow(self, exp: Expr) -> Expr {
        Expr::Binary(Box::new(self), BinOpKind::Exp, Box::new(exp))
    }

    /// If the expression is a [`Expr::Number`], returns the contained
    /// value.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns true if the expression is a [`Expr::Number`].
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }

    /// If the expression is a [`Expr::Symbol`], returns a reference to the
    /// contained name.
    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Self::Symbol(name) => Some(name),
            _ => None,
        }
    }

    /// Returns an iterator that traverses the tree of expressions in
    /// left-to-right post-order (i.e. depth-first), without recursing.
    pub fn post_order_iter(&self) -> ExprIter {
        ExprIter::new(self)
    }

    /// Returns the set of symbol names that occur anywhere in the
    /// expression.
    pub fn symbols(&self) -> BTreeSet<&str> {
        self.post_order_iter()
            .filter_map(Expr::as_symbol)
            .collect()
    }
}

/// Expressions render fully parenthesized: binary nodes as
/// `(left op right)`, unary negation as `(-operand)`, and calls as
/// `name(arg1, arg2)`. The output is syntactically unambiguous, but it is
/// a display format, not a re-entry format — nothing in this crate parses
/// it back.
impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{}", value),
            Self::Symbol(name) => write!(f, "{}", name),
            Self::Unary(UnaryOpKind::Neg, operand) => write!(f, "(-{})", operand),
            Self::Binary(left, op, right) => write!(f, "({} {} {})", left, op, right),
            Self::Call(name, args) => {
                write!(f, "{}(", name)?;
                let mut iter = args.iter();
                if let Some(arg) = iter.next() {
                    write!(f, "{}", arg)?;
                    for arg in iter {
                        write!(f, ", {}", arg)?;
                    }
                }
                write!(f, ")")
            },
        }
    }
}

/// Checks if two expressions are **strictly** equal.
///
/// Two expressions are strictly equal if they are the same kind of node and
/// their payloads and children are pairwise strictly equal, in order. This
/// is a structural predicate over the tree shape, deliberately independent
/// of rendering: two nodes that merely print alike are not thereby equal,
/// and reordered operands (`x + 1` vs. `1 + x`) are unequal.
///
/// For more information about strict equality, see the
/// [module-level documentation](self).
impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number(lhs), Self::Number(rhs)) => lhs == rhs,
            (Self::Symbol(lhs), Self::Symbol(rhs)) => lhs == rhs,
            (Self::Unary(lhs_op, lhs), Self::Unary(rhs_op, rhs)) => {
                lhs_op == rhs_op && lhs == rhs
            },
            (Self::Binary(lhs_l, lhs_op, lhs_r), Self::Binary(rhs_l, rhs_op, rhs_r)) => {
                lhs_op == rhs_op && lhs_l == rhs_l && lhs_r == rhs_r
            },
            (Self::Call(lhs_name, lhs_args), Self::Call(rhs_name, rhs_args)) => {
                lhs_name == rhs_name && lhs_args == rhs_args
            },
            _ => false,
        }
    }
}

impl From<f64> for Expr {
    fn from(value: f64) -> Self {
        Expr::Number(value)
    }
}

/// Adds two [`Expr`]s together, producing a [`Expr::Binary`] node. No
/// simplification is done; `0 + x` stays `(0 + x)` until
/// [`simplify`](crate::symbolic::simplify()) runs.
impl Add for Expr {
    type Output = Expr;

    fn add(self, rhs: Self) -> Self::Output {
        Expr::Binary(Box::new(self), BinOpKind::Add, Box::new(rhs))
    }
}

/// Subtracts one [`Expr`] from another, producing a [`Expr::Binary`] node.
/// No simplification is done.
impl Sub for Expr {
    type Output = Expr;

    fn sub(self, rhs: Self) -> Self::Output {
        Expr::Binary(Box::new(self), BinOpKind::Sub, Box::new(rhs))
    }
}

/// Multiplies two [`Expr`]s together, producing a [`Expr::Binary`] node.
/// No simplification is done.
impl Mul for Expr {
    type Output = Expr;

    fn mul(self, rhs: Self) -> Self::Output {
        Expr::Binary(Box::new(self), BinOpKind::Mul, Box::new(rhs))
    }
}

/// Divides one [`Expr`] by another, producing a [`Expr::Binary`] node. No
/// simplification is done, and no division-by-zero check happens until the
/// node is evaluated.
impl Div for Expr {
    type Output = Expr;

    fn div(self, rhs: Self) -> Self::Output {
        Expr::Binary(Box::new(self), BinOpKind::Div, Box::new(rhs))
    }
}

/// Negates an [`Expr`], producing a [`Expr::Unary`] node. No simplification
/// is done; `-5` as an expression is `(-5)`, a negation wrapping a number.
impl Neg for Expr {
    type Output = Expr;

    fn neg(self) -> Self::Output {
        Expr::Unary(UnaryOpKind::Neg, Box::new(self))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn render_number() {
        assert_eq!(Expr::Number(42.0).to_string(), "42");
        assert_eq!(Expr::Number(0.5).to_string(), "0.5");
    }

    #[test]
    fn render_binary() {
        let expr = Expr::Number(5.0) + Expr::Number(3.0);
        assert_eq!(expr.to_string(), "(5 + 3)");
    }

    #[test]
    fn render_nested() {
        let expr = Expr::Number(5.0) + Expr::symbol("x") * Expr::Number(2.0);
        assert_eq!(expr.to_string(), "(5 + (x * 2))");
    }

    #[test]
    fn render_unary() {
        let expr = -Expr::Number(5.0);
        assert_eq!(expr.to_string(), "(-5)");
    }

    #[test]
    fn render_call() {
        let expr = Expr::call("sum", vec![
            Expr::Number(1.0),
            Expr::Number(2.0),
            Expr::Number(3.0),
        ]);
        assert_eq!(expr.to_string(), "sum(1, 2, 3)");

        let expr = Expr::call("sin", vec![Expr::symbol("x")]);
        assert_eq!(expr.to_string(), "sin(x)");
    }

    #[test]
    fn strict_equality() {
        let a = Expr::symbol("x") + Expr::Number(1.0);
        let b = Expr::symbol("x") + Expr::Number(1.0);
        assert_eq!(a, b);
    }

    #[test]
    fn strict_equality_is_ordered() {
        // semantically equal, but not strictly equal
        let a = Expr::symbol("x") + Expr::Number(1.0);
        let b = Expr::Number(1.0) + Expr::symbol("x");
        assert_ne!(a, b);
    }

    #[test]
    fn strict_equality_distinguishes_operators() {
        let a = Expr::symbol("x") + Expr::symbol("y");
        let b = Expr::symbol("x") * Expr::symbol("y");
        assert_ne!(a, b);
    }

    #[test]
    fn post_order() {
        let expr = (Expr::symbol("x") + Expr::Number(1.0)) * Expr::symbol("y");
        let visited = expr.post_order_iter()
            .map(Expr::to_string)
            .collect::<Vec<_>>();
        assert_eq!(visited, ["x", "1", "(x + 1)", "y", "((x + 1) * y)"]);
    }

    #[test]
    fn symbols() {
        let expr = Expr::call("sin", vec![Expr::symbol("x")])
            / (Expr::symbol("y") - Expr::symbol("x"));
        let symbols = expr.symbols();
        assert_eq!(symbols.into_iter().collect::<Vec<_>>(), ["x", "y"]);
    }
}
