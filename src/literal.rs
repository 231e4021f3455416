use crate::error::{ErrorCode, ParseResult};
use crate::parser::Parser;
use crate::state::ParsingState;
use crate::transaction::Transaction;
use std::borrow::Cow;

/// Parser that matches an exact string, optionally ignoring case.
///
/// The success value is always the expected text, so a case-insensitive
/// match of `"hElLo"` against `literal_ignore_case("hello")` yields
/// `"hello"`.
pub struct Literal {
    expected: Cow<'static, str>,
    ignore_case: bool,
}

impl Literal {
    pub fn new(expected: impl Into<Cow<'static, str>>, ignore_case: bool) -> Self {
        Literal {
            expected: expected.into(),
            ignore_case,
        }
    }
}

impl<'src> Parser<'src> for Literal {
    type Output = Cow<'static, str>;

    fn parse(&self, state: &mut ParsingState<'src>) -> ParseResult<Cow<'static, str>> {
        let mut tx = Transaction::auto_rollback(state);
        let wanted = self.expected.chars().count();
        let found = tx.state().next_chars(wanted);

        if found.chars().count() < wanted {
            return Err(tx.failure(
                ErrorCode::UnexpectedEof,
                format!(
                    "expected '{}', but input ended after '{}'",
                    self.expected, found
                ),
            ));
        }

        let matches = if self.ignore_case {
            found.to_lowercase() == self.expected.to_lowercase()
        } else {
            found == self.expected
        };

        if matches {
            Ok(tx.success(self.expected.clone()))
        } else {
            Err(tx.failure(
                ErrorCode::ExpectedLiteral,
                format!("expected '{}', found '{}'", self.expected, found),
            ))
        }
    }
}

/// Creates a parser matching `expected` exactly
pub fn literal(expected: impl Into<Cow<'static, str>>) -> Literal {
    Literal::new(expected, false)
}

/// Creates a parser matching `expected` with Unicode case folding
pub fn literal_ignore_case(expected: impl Into<Cow<'static, str>>) -> Literal {
    Literal::new(expected, true)
}
