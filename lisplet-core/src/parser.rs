use thiserror::Error;

use crate::ast::{Atom, Expression};
use crate::lexer::Token;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Unexpected end of input while a form was still open")]
    UnexpectedEndOfInput,
    #[error("Unexpected `)` where a new form was expected")]
    UnexpectedCloseParen,
}

/// Recursive-descent parser over an immutable token slice. The cursor only
/// moves forward; nothing is removed from the slice.
pub struct Parser<'a> {
    tokens: &'a [Token<'a>],
    position: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token<'a>]) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    fn next(&mut self) -> Option<Token<'a>> {
        let token = self.tokens.get(self.position).copied();
        if token.is_some() {
            self.position += 1;
        }
        token
    }

    fn peek(&self) -> Option<Token<'a>> {
        self.tokens.get(self.position).copied()
    }

    /// Parses one expression and leaves the cursor just past it. Tokens
    /// after the first complete form are left unconsumed.
    pub fn parse_expression(&mut self) -> Result<Expression, ParseError> {
        match self.next() {
            None => Err(ParseError::UnexpectedEndOfInput),
            Some(Token::LParen) => self.parse_list(),
            Some(Token::RParen) => Err(ParseError::UnexpectedCloseParen),
            Some(Token::Atom(token)) => Ok(Expression::Atom(Atom::classify(token))),
        }
    }

    fn parse_list(&mut self) -> Result<Expression, ParseError> {
        let mut items = Vec::new();
        loop {
            match self.peek() {
                None => return Err(ParseError::UnexpectedEndOfInput),
                Some(Token::RParen) => {
                    self.position += 1;
                    return Ok(Expression::List(items));
                }
                Some(_) => items.push(self.parse_expression()?),
            }
        }
    }
}
