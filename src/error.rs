use std::error;
use std::fmt::{self, Display, Formatter};

/// Error type for the deskcalc crate.
///
/// Every failure mode of tokenizing, parsing and evaluating maps to exactly
/// one variant, so callers and tests can match on the kind instead of
/// inspecting message strings.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A character outside the recognized set
    UnexpectedCharacter {
        /// The offending character
        character: char,
        /// 0-based character position in the input
        position: usize,
    },
    /// An opening parenthesis without a close, or a close without an open
    UnbalancedParentheses,
    /// An operator or function left without its operand; names the culprit
    MissingOperand(String),
    /// Leftover tokens after a complete expression, e.g. `2 3`
    TrailingTokens,
    /// Division by zero
    DivisionByZero,
    /// A mathematically undefined operation; names the operation
    DomainError(String),
    /// Empty or whitespace-only input
    EmptyExpression,
}

impl Display for Error {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        match *self {
            Self::UnexpectedCharacter { character, position } => {
                write!(fmt, "unexpected character '{character}' at position {position}")
            }
            Self::UnbalancedParentheses => write!(fmt, "unbalanced parentheses"),
            Self::MissingOperand(ref what) => write!(fmt, "missing operand: {what}"),
            Self::TrailingTokens => write!(fmt, "trailing tokens after expression"),
            Self::DivisionByZero => write!(fmt, "division by zero"),
            Self::DomainError(ref what) => write!(fmt, "domain error: {what}"),
            Self::EmptyExpression => write!(fmt, "empty expression"),
        }
    }
}

impl error::Error for Error {}
