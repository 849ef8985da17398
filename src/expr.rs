use crate::ast::Ast;
use crate::error::Error;
use crate::lexer::Lexer;
use crate::parser::Parser;
use crate::token::{MathFn, Op};

/// Evaluate a single expression from `input`.
///
/// Returns `Ok(result)` if the evaluation is successful, or `Err(cause)` if
/// tokenizing, parsing or evaluating the expression failed.
///
/// # Example
///
/// ```
/// # use deskcalc::eval;
/// assert_eq!(eval("45 - 2^3"), Ok(37.0));
/// assert_eq!(eval("2+3*4"), Ok(14.0));
/// assert!(eval("5/0").is_err());
/// ```
///
/// # Errors
/// One of the [`Error`](enum.Error.html) kinds, from the first stage that
/// fails.
pub fn eval(input: &str) -> Result<f64, Error> {
    Expr::parse(input).and_then(|expr| expr.eval())
}

/// A parsed mathematical expression.
///
/// Separating parsing from evaluation lets a caller keep the tree around,
/// inspect it, or report parse errors before evaluation ever runs.
///
/// # Examples
/// ```
/// # use deskcalc::Expr;
/// let expr = Expr::parse("3 + 5 * 2").unwrap();
/// assert_eq!(expr.eval(), Ok(13.0));
///
/// // parse errors surface here, domain errors only at eval time
/// assert!(Expr::parse("3 +").is_err());
/// assert!(Expr::parse("sqrt(-1)").unwrap().eval().is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    ast: Ast,
}

impl Expr {
    /// Parse the given mathematical `expression` into an `Expr`.
    ///
    /// # Examples
    /// ```
    /// # use deskcalc::Expr;
    /// // a valid expression
    /// assert!(Expr::parse("3 + 5 * 2").is_ok());
    /// // an invalid one
    /// assert!(Expr::parse("3eff + 5 * 2").is_err());
    /// ```
    ///
    /// # Errors
    /// The lexer's and parser's [`Error`](enum.Error.html) kinds.
    pub fn parse(expression: &str) -> Result<Expr, Error> {
        let tokens = Lexer::new(expression).tokenize()?;
        log::trace!("tokenized {expression:?} into {} tokens", tokens.len());
        let ast = Parser::new(tokens).parse()?;
        Ok(Expr { ast })
    }

    /// Evaluate the expression.
    ///
    /// # Examples
    /// ```
    /// # use deskcalc::Expr;
    /// let expr = Expr::parse("sqrt(16) + 2").unwrap();
    /// assert_eq!(expr.eval(), Ok(6.0));
    /// ```
    ///
    /// # Errors
    /// `DivisionByZero` or `DomainError` when the arithmetic itself is
    /// undefined.
    pub fn eval(&self) -> Result<f64, Error> {
        Self::inner_eval(&self.ast)
    }

    /// Access the expression tree.
    #[must_use]
    pub fn ast(&self) -> &Ast {
        &self.ast
    }

    fn inner_eval(ast: &Ast) -> Result<f64, Error> {
        match *ast {
            Ast::Value(number) => Ok(number),
            Ast::Neg(ref child) => Ok(-Self::inner_eval(child)?),
            Ast::Binary(op, ref left, ref right) => {
                let left = Self::inner_eval(left)?;
                let right = Self::inner_eval(right)?;
                match op {
                    Op::Plus => Ok(left + right),
                    Op::Minus => Ok(left - right),
                    Op::Mul => Ok(left * right),
                    Op::Div => {
                        if right == 0.0 {
                            return Err(Error::DivisionByZero);
                        }
                        Ok(left / right)
                    }
                    Op::Exp => {
                        let value = libm::pow(left, right);
                        // powf only goes NaN on non-NaN operands for a
                        // negative base with a fractional exponent
                        if value.is_nan() && !left.is_nan() && !right.is_nan() {
                            return Err(Error::DomainError(format!(
                                "{left} cannot be raised to the power {right}"
                            )));
                        }
                        Ok(value)
                    }
                }
            }
            Ast::Function(function, ref argument) => {
                apply_function(function, Self::inner_eval(argument)?)
            }
        }
    }
}

/// Apply one of the keypad functions to an already-evaluated argument.
///
/// Trigonometric arguments are in degrees. `tan` near an odd multiple of 90°
/// follows the floating-point result of the radian conversion, a very large
/// finite value, rather than erroring.
fn apply_function(function: MathFn, argument: f64) -> Result<f64, Error> {
    match function {
        MathFn::Sin => Ok(libm::sin(argument.to_radians())),
        MathFn::Cos => Ok(libm::cos(argument.to_radians())),
        MathFn::Tan => Ok(libm::tan(argument.to_radians())),
        MathFn::Log => {
            if argument <= 0.0 {
                return Err(Error::DomainError(format!(
                    "log of non-positive number {argument}"
                )));
            }
            Ok(libm::log10(argument))
        }
        MathFn::Sqrt => {
            if argument < 0.0 {
                return Err(Error::DomainError(format!(
                    "sqrt of negative number {argument}"
                )));
            }
            Ok(libm::sqrt(argument))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{eval, Expr};
    use crate::error::Error;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn eval_pairs() {
        let eval_pairs = [
            ("3 + 5", 8.0),
            ("2 - 5", -3.0),
            ("2 * 5", 10.0),
            ("10 / 5", 2.0),
            ("10 / 4", 2.5),
            ("2 ^ 3", 8.0),
            ("-3", -3.0),
            ("25 + -3", 22.0),
            ("25 - -3", 28.0),
            ("2+3*4", 14.0),
            ("(2+3)*4", 20.0),
            ("2^3^2", 512.0),
            ("-2^2", -4.0),
            ("(-2)^2", 4.0),
            ("2^-1", 0.5),
            ("sqrt(9)", 3.0),
            ("sqrt(9 + 7)", 4.0),
            ("√(16)", 4.0),
            ("6×7", 42.0),
            ("9÷3", 3.0),
            ("log(100)", 2.0),
        ];
        for (input, expected) in &eval_pairs {
            assert_eq!(eval(input), Ok(*expected), "{input}");
        }
    }

    #[test]
    fn trig_works_in_degrees() {
        assert!(close(eval("sin(90)").unwrap(), 1.0));
        assert!(close(eval("cos(0)").unwrap(), 1.0));
        assert!(close(eval("sin(30)").unwrap(), 0.5));
        assert!(close(eval("tan(45)").unwrap(), 1.0));
        assert!(close(eval("sin(cos(30))").unwrap(), (30f64.to_radians().cos().to_radians()).sin()));
    }

    #[test]
    fn tan_near_asymptote_stays_finite() {
        let value = eval("tan(90)").unwrap();
        assert!(value.is_finite());
        assert!(value.abs() > 1e12);
    }

    #[test]
    fn division_by_zero() {
        assert_eq!(eval("5/0"), Err(Error::DivisionByZero));
        assert_eq!(eval("1/(2-2)"), Err(Error::DivisionByZero));
    }

    #[test]
    fn domain_errors() {
        assert!(matches!(eval("sqrt(-1)"), Err(Error::DomainError(_))));
        assert!(matches!(eval("log(0)"), Err(Error::DomainError(_))));
        assert!(matches!(eval("log(-3)"), Err(Error::DomainError(_))));
        assert!(matches!(eval("(-8)^0.5"), Err(Error::DomainError(_))));
    }

    #[test]
    fn malformed_input_is_rejected() {
        assert!(matches!(eval("2+"), Err(Error::MissingOperand(_))));
        assert_eq!(eval("(2+3"), Err(Error::UnbalancedParentheses));
        assert_eq!(eval("2 3"), Err(Error::TrailingTokens));
        assert_eq!(eval(""), Err(Error::EmptyExpression));
        assert_eq!(
            eval("2+@3"),
            Err(Error::UnexpectedCharacter { character: '@', position: 2 })
        );
    }

    #[test]
    fn reevaluation_is_stable() {
        let expr = Expr::parse("sin(45) * sqrt(2)").unwrap();
        assert_eq!(expr.eval(), expr.eval());
        assert_eq!(eval("2^3^2"), eval("2^3^2"));
        assert_eq!(eval("sqrt(-1)"), eval("sqrt(-1)"));
    }
}
