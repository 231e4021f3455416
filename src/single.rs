use crate::error::{ErrorCode, ParseResult};
use crate::parser::Parser;
use crate::state::ParsingState;
use crate::transaction::Transaction;

/// Parser that matches exactly one expected character
pub struct IsChar {
    expected: char,
}

impl IsChar {
    pub fn new(expected: char) -> Self {
        IsChar { expected }
    }
}

impl<'src> Parser<'src> for IsChar {
    type Output = char;

    fn parse(&self, state: &mut ParsingState<'src>) -> ParseResult<char> {
        let mut tx = Transaction::auto_rollback(state);
        match tx.state().next_char() {
            Some(c) if c == self.expected => Ok(tx.success(c)),
            Some(c) => Err(tx.failure(
                ErrorCode::ExpectedLiteral,
                format!("expected '{}', found '{}'", self.expected, c),
            )),
            None => Err(tx.failure(
                ErrorCode::UnexpectedEof,
                format!("expected '{}', found end of input", self.expected),
            )),
        }
    }
}

/// Convenience function to create an IsChar parser
pub fn is_char(expected: char) -> IsChar {
    IsChar::new(expected)
}
