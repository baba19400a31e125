//! Trigonometric functions. All of them operate on radians.

use crate::funcs::simple;

simple! {
    sin Sin; "The sine function, `sin(x)`.",
    cos Cos; "The cosine function, `cos(x)`.",
    tan Tan; "The tangent function, `tan(x)`.",
}
