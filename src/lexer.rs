use crate::error::Error;
use crate::token::{MathFn, Op, Token};
use crate::util::FUNCTIONS;
use std::iter::Peekable;
use std::str::Chars;

/// An helper struct for tokenizing the input.
///
/// The lexer makes a single left-to-right pass and knows nothing about
/// precedence; a `-` is tokenized the same way whether it is unary or
/// binary, and telling them apart is the parser's job.
pub struct Lexer<'a> {
    input: Peekable<Chars<'a>>,
    position: usize,
}

impl<'a> Lexer<'a> {
    /// Create a lexer over `string`.
    pub fn new(string: &str) -> Lexer {
        Lexer {
            input: string.chars().peekable(),
            position: 0,
        }
    }

    /// Scan the whole input into a flat token sequence.
    ///
    /// # Errors
    /// `Error::UnexpectedCharacter` for anything outside the recognized set,
    /// naming the character and its 0-based position.
    pub fn tokenize(mut self) -> Result<Vec<Token>, Error> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }

    fn next_token(&mut self) -> Result<Option<Token>, Error> {
        if let Some(c) = self.bump() {
            let token = match c {
                ' ' | '\t' | '\n' | '\r' => return self.next_token(),
                c if is_number_start(c) => self.number(c)?,
                c if c.is_ascii_alphabetic() => self.word(c)?,
                '+' => Token::Op(Op::Plus),
                '-' => Token::Op(Op::Minus),
                // the keypad emits ×, ÷ and √ rather than their ASCII forms
                '*' | '×' => Token::Op(Op::Mul),
                '/' | '÷' => Token::Op(Op::Div),
                '^' => Token::Op(Op::Exp),
                '√' => Token::Function(MathFn::Sqrt),
                '(' => Token::LParen,
                ')' => Token::RParen,
                other => {
                    return Err(Error::UnexpectedCharacter {
                        character: other,
                        position: self.position - 1,
                    });
                }
            };
            Ok(Some(token))
        } else {
            Ok(None)
        }
    }

    /// Greedily accumulate a number literal: digits and at most one decimal
    /// point. A second point fails at its own position.
    fn number(&mut self, first: char) -> Result<Token, Error> {
        let start = self.position - 1;
        let mut literal = String::new();
        literal.push(first);
        let mut seen_point = first == '.';
        while let Some(&c) = self.input.peek() {
            if c == '.' {
                if seen_point {
                    return Err(Error::UnexpectedCharacter {
                        character: '.',
                        position: self.position,
                    });
                }
                seen_point = true;
            } else if !c.is_ascii_digit() {
                break;
            }
            literal.push(c);
            self.bump();
        }
        // a lone '.' is the only literal this scan produces that f64 rejects
        literal.parse().map(Token::Number).map_err(|_| Error::UnexpectedCharacter {
            character: first,
            position: start,
        })
    }

    /// Greedily accumulate a word and look it up in the function registry.
    fn word(&mut self, first: char) -> Result<Token, Error> {
        let start = self.position - 1;
        let mut name = String::new();
        name.push(first);
        while let Some(&c) = self.input.peek() {
            if c.is_ascii_alphabetic() {
                name.push(c);
                self.bump();
            } else {
                break;
            }
        }
        match FUNCTIONS.get(name.as_str()) {
            Some(&function) => Ok(Token::Function(function)),
            None => Err(Error::UnexpectedCharacter {
                character: first,
                position: start,
            }),
        }
    }

    /// Consume one character, keeping the 0-based position current.
    fn bump(&mut self) -> Option<char> {
        let c = self.input.next();
        if c.is_some() {
            self.position += 1;
        }
        c
    }
}

/// Check if `c` can appear at the first character of a number
fn is_number_start(c: char) -> bool {
    c == '.' || c.is_ascii_digit()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::{MathFn, Op, Token};
    use test_case::test_case;

    #[test_case("2 + 2" => Ok(vec![Token::Number(2.0), Token::Op(Op::Plus), Token::Number(2.0)]) ; "addition is tokenized properly")]
    #[test_case("2+2" => Ok(vec![Token::Number(2.0), Token::Op(Op::Plus), Token::Number(2.0)]) ; "spaces are optional")]
    #[test_case("6×7" => Ok(vec![Token::Number(6.0), Token::Op(Op::Mul), Token::Number(7.0)]) ; "multiplication glyph")]
    #[test_case("9÷3" => Ok(vec![Token::Number(9.0), Token::Op(Op::Div), Token::Number(3.0)]) ; "division glyph")]
    #[test_case("√(16)" => Ok(vec![Token::Function(MathFn::Sqrt), Token::LParen, Token::Number(16.0), Token::RParen]) ; "square root glyph")]
    #[test_case("sqrt(16)" => Ok(vec![Token::Function(MathFn::Sqrt), Token::LParen, Token::Number(16.0), Token::RParen]) ; "square root name")]
    #[test_case("sin(90)" => Ok(vec![Token::Function(MathFn::Sin), Token::LParen, Token::Number(90.0), Token::RParen]) ; "sine")]
    #[test_case("-3" => Ok(vec![Token::Op(Op::Minus), Token::Number(3.0)]) ; "unary minus is a plain minus token")]
    #[test_case("2+@3" => Err(Error::UnexpectedCharacter { character: '@', position: 2 }) ; "unknown character with position")]
    #[test_case("1.2.3" => Err(Error::UnexpectedCharacter { character: '.', position: 3 }) ; "second decimal point")]
    #[test_case("." => Err(Error::UnexpectedCharacter { character: '.', position: 0 }) ; "lone decimal point")]
    #[test_case("exp(2)" => Err(Error::UnexpectedCharacter { character: 'e', position: 0 }) ; "unknown word")]
    fn tokenize(input: &str) -> Result<Vec<Token>, Error> {
        Lexer::new(input).tokenize()
    }

    #[test]
    fn numbers() {
        assert_eq!(Lexer::new(".5").tokenize(), Ok(vec![Token::Number(0.5)]));
        assert_eq!(Lexer::new("12.75").tokenize(), Ok(vec![Token::Number(12.75)]));
        assert_eq!(Lexer::new("2.").tokenize(), Ok(vec![Token::Number(2.0)]));
    }

    #[test]
    fn positions_count_characters() {
        // multi-byte glyphs still advance the position by one
        let err = Lexer::new("×#").tokenize().unwrap_err();
        assert_eq!(err, Error::UnexpectedCharacter { character: '#', position: 1 });
    }

    #[test]
    fn whitespace_only_input_is_empty() {
        assert_eq!(Lexer::new(" \t\n").tokenize(), Ok(vec![]));
    }
}
