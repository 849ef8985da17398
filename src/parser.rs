use crate::ast::Ast;
use crate::error::Error;
use crate::token::{Op, Token};
use std::iter::Peekable;
use std::vec::IntoIter;

/// Recursive descent parser from the flat token sequence to an [`Ast`].
///
/// The grammar, from loosest to tightest binding:
///
/// ```text
/// expression := term (('+' | '-') term)*
/// term       := unary (('*' | '/') unary)*
/// unary      := '-' unary | power
/// power      := atom ('^' unary)?
/// atom       := number
///             | function '(' expression ')'
///             | '(' expression ')'
/// ```
///
/// `+ - * /` are left-associative, `^` is right-associative, and unary minus
/// binds tighter than binary `+ -` but looser than `^`, so `-2^2` is `-(2^2)`.
pub struct Parser {
    tokens: Peekable<IntoIter<Token>>,
}

impl Parser {
    /// Create a parser over a token sequence produced by the lexer.
    #[must_use]
    pub fn new(tokens: Vec<Token>) -> Parser {
        Parser {
            tokens: tokens.into_iter().peekable(),
        }
    }

    /// Parse the whole token sequence into a single expression tree.
    ///
    /// # Errors
    /// - `EmptyExpression` for an empty sequence,
    /// - `UnbalancedParentheses` for unmatched opens or closes,
    /// - `MissingOperand` for operators and functions without their operand,
    /// - `TrailingTokens` when tokens remain after a complete expression.
    pub fn parse(mut self) -> Result<Ast, Error> {
        if self.tokens.peek().is_none() {
            return Err(Error::EmptyExpression);
        }
        let ast = self.expression()?;
        match self.tokens.next() {
            None => Ok(ast),
            Some(Token::RParen) => Err(Error::UnbalancedParentheses),
            Some(_) => Err(Error::TrailingTokens),
        }
    }

    fn expression(&mut self) -> Result<Ast, Error> {
        let mut node = self.term()?;
        while let Some(&Token::Op(op @ (Op::Plus | Op::Minus))) = self.tokens.peek() {
            self.tokens.next();
            let right = self.term()?;
            node = Ast::Binary(op, Box::new(node), Box::new(right));
        }
        Ok(node)
    }

    fn term(&mut self) -> Result<Ast, Error> {
        let mut node = self.unary()?;
        while let Some(&Token::Op(op @ (Op::Mul | Op::Div))) = self.tokens.peek() {
            self.tokens.next();
            let right = self.unary()?;
            node = Ast::Binary(op, Box::new(node), Box::new(right));
        }
        Ok(node)
    }

    fn unary(&mut self) -> Result<Ast, Error> {
        if let Some(Token::Op(Op::Minus)) = self.tokens.peek() {
            self.tokens.next();
            return Ok(Ast::Neg(Box::new(self.unary()?)));
        }
        self.power()
    }

    // The exponent re-enters at `unary`, making `^` right-associative:
    // `2^3^2` is `2^(3^2)` and `2^-3` keeps its negative exponent.
    fn power(&mut self) -> Result<Ast, Error> {
        let base = self.atom()?;
        if let Some(Token::Op(Op::Exp)) = self.tokens.peek() {
            self.tokens.next();
            let exponent = self.unary()?;
            return Ok(Ast::Binary(Op::Exp, Box::new(base), Box::new(exponent)));
        }
        Ok(base)
    }

    fn atom(&mut self) -> Result<Ast, Error> {
        match self.tokens.next() {
            Some(Token::Number(value)) => Ok(Ast::Value(value)),
            Some(Token::Function(function)) => {
                match self.tokens.next() {
                    Some(Token::LParen) => {}
                    _ => {
                        return Err(Error::MissingOperand(format!(
                            "function '{}' must be followed by a parenthesized argument",
                            function.name()
                        )));
                    }
                }
                let argument = self.expression()?;
                self.closing_paren()?;
                Ok(Ast::Function(function, Box::new(argument)))
            }
            Some(Token::LParen) => {
                let inner = self.expression()?;
                self.closing_paren()?;
                Ok(inner)
            }
            Some(Token::RParen) => Err(Error::UnbalancedParentheses),
            Some(Token::Op(op)) => Err(Error::MissingOperand(format!(
                "operator '{}' has no left-hand operand",
                op.symbol()
            ))),
            None => Err(Error::MissingOperand(
                "expression ends where a value was expected".to_string(),
            )),
        }
    }

    fn closing_paren(&mut self) -> Result<(), Error> {
        match self.tokens.next() {
            Some(Token::RParen) => Ok(()),
            // junk before the close is trailing input, a missing close is
            // an unbalanced open
            Some(_) => Err(Error::TrailingTokens),
            None => Err(Error::UnbalancedParentheses),
        }
    }
}
