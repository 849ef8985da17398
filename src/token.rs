/// Possible tokens to find in the input string
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// A numeric literal
    Number(f64),
    /// An arithmetic operator
    Op(Op),
    /// A function name, e.g. `sin` or `sqrt`
    Function(MathFn),
    /// Left parenthesis
    LParen,
    /// Right parenthesis
    RParen,
}

/// Allowed operators in the grammar
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Op {
    /// `+`
    Plus,
    /// `-`, both binary and unary
    Minus,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `^`
    Exp,
}

impl Op {
    /// Get the character this operator is written as, for diagnostics.
    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Minus => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Exp => '^',
        }
    }
}

/// The functions a calculator keypad can produce.
///
/// Trigonometric functions take their argument in degrees, `Log` is the
/// base-10 logarithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MathFn {
    /// Sine, argument in degrees
    Sin,
    /// Cosine, argument in degrees
    Cos,
    /// Tangent, argument in degrees
    Tan,
    /// Base-10 logarithm
    Log,
    /// Square root
    Sqrt,
}

impl MathFn {
    /// Get the name this function is written as, for diagnostics.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Log => "log",
            Self::Sqrt => "sqrt",
        }
    }
}
