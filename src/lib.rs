#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(
    clippy::needless_return,
    clippy::missing_docs_in_private_items,
    clippy::non_ascii_literal
)]

//! Deskcalc, a crate for safe evaluation of calculator expressions.
//!
//! This crate provides run-time evaluation of the arithmetic expressions a
//! desktop calculator produces, embedded in strings. The easiest way to use
//! this crate is with the [`eval`](fn.eval.html) function:
//!
//! ```
//! assert_eq!(deskcalc::eval("3 + 5 * 2"), Ok(13.0));
//! ```
//!
//! Parsing can be separated from evaluation with the
//! [`Expr`](struct.Expr.html) type:
//!
//! ```
//! use deskcalc::Expr;
//!
//! let expr = Expr::parse("sqrt(16) + 2").unwrap();
//! assert_eq!(expr.eval(), Ok(6.0));
//! ```
//!
//! # Language definition
//!
//! The language implemented by deskcalc can contain the following elements:
//!
//! - number literals: `3`, `12.75`, `.5`;
//! - left and right parenthesis;
//! - mathematical operators: `+` for addition, `-` for subtraction and
//!   negation, `*` for multiplication, `/` for division and `^` for
//!   exponentiation (right-associative);
//! - function calls: `sin(90)`, `sqrt(2)`. The recognized functions are
//!   `sin`, `cos` and `tan` (arguments in degrees), `log` (base 10) and
//!   `sqrt`;
//! - the keypad glyphs `×`, `÷` and `√` as aliases for `*`, `/` and `sqrt`.
//!
//! Any other symbol is rejected with a typed [`Error`](enum.Error.html)
//! naming the character and its position. No input string, however
//! malformed, reaches anything but this grammar; there is no host-language
//! `eval` anywhere.
//!
//! # Technical details
//!
//! deskcalc is based on an AST interpreter: a single-pass lexer, a recursive
//! descent parser over the usual precedence grammar, and a post-order tree
//! walk over `f64` data. Mathematically undefined operations (division by
//! zero, square roots of negative numbers, logarithms of non-positive
//! numbers, non-real powers) are reported as typed errors instead of NaN.
//! Every call is a pure function of its input string, so evaluation is safe
//! to invoke from any number of threads.

#[macro_use]
extern crate lazy_static;

mod ast;
mod error;
mod expr;
mod lexer;
mod parser;
mod token;
mod util;

pub use ast::Ast;
pub use error::Error;
pub use expr::{eval, Expr};
pub use lexer::Lexer;
pub use parser::Parser;
pub use token::{MathFn, Op, Token};
pub use util::FUNCTIONS;

#[cfg(test)]
mod tests {
    #[test]
    fn smoke() {
        assert_eq!(crate::eval("2 + 2"), Ok(4.0));
    }
}
