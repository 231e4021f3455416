use crate::error::{ErrorCode, ParseResult};
use crate::parser::Parser;
use crate::state::ParsingState;
use crate::transaction::Transaction;

/// Parser combinator that tries the first parser, and if it fails, tries
/// the second parser.
///
/// Alternatives are tried strictly left to right and the first success
/// wins, even when a later alternative would match more input. When every
/// alternative fails the individual errors are discarded in favor of a
/// single [`ErrorCode::AllParsersFailed`] with a zero-width span at the
/// entry point; the cursor never moves on failure.
pub struct Or<P1, P2> {
    first: P1,
    second: P2,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(first: P1, second: P2) -> Self {
        Or { first, second }
    }
}

impl<'src, P1, P2, O> Parser<'src> for Or<P1, P2>
where
    P1: Parser<'src, Output = O>,
    P2: Parser<'src, Output = O>,
{
    type Output = O;

    fn parse(&self, state: &mut ParsingState<'src>) -> ParseResult<O> {
        let mut tx = Transaction::auto_commit(state);
        if let Ok(parsed) = self.first.parse(tx.state()) {
            return Ok(parsed);
        }
        match self.second.parse(tx.state()) {
            Ok(parsed) => Ok(parsed),
            Err(_) => Err(tx.failure(
                ErrorCode::AllParsersFailed,
                "no alternative matched".to_string(),
            )),
        }
    }
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt<'src>: Parser<'src> + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<'src, Output = Self::Output>,
    {
        Or::new(self, other)
    }
}

impl<'src, P> OrExt<'src> for P where P: Parser<'src> {}

/// Convenience function to create an Or parser
pub fn or<'src, P1, P2, O>(first: P1, second: P2) -> Or<P1, P2>
where
    P1: Parser<'src, Output = O>,
    P2: Parser<'src, Output = O>,
{
    Or::new(first, second)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::literal::literal;
    use crate::single::is_char;

    #[test]
    fn test_first_succeeds() {
        let parsed = or(is_char('a'), is_char('b')).parse_str("abc").unwrap();
        assert_eq!(parsed.value, 'a');
    }

    #[test]
    fn test_second_succeeds() {
        let parsed = or(is_char('a'), is_char('b')).parse_str("bcd").unwrap();
        assert_eq!(parsed.value, 'b');
    }

    #[test]
    fn test_both_fail() {
        let failure = or(is_char('a'), is_char('b')).parse_str("xyz").unwrap_err();
        assert_eq!(failure.code, ErrorCode::AllParsersFailed);
    }

    #[test]
    fn test_failure_leaves_cursor_untouched() {
        let mut state = ParsingState::new("xyz");
        assert!(or(literal("ab"), literal("cd")).parse(&mut state).is_err());
        assert_eq!(state.position(), 0);
    }

    #[test]
    fn test_short_circuits_left_to_right() {
        // First alternative wins even though the second would match more
        let parsed = or(literal("a"), literal("ab")).parse_str("ab").unwrap();
        assert_eq!(parsed.value, "a");
        assert_eq!(parsed.span.end, 1);
    }

    #[test]
    fn test_method_chain() {
        let parser = is_char('a').or(is_char('b')).or(is_char('c'));
        assert_eq!(parser.parse_str("c").unwrap().value, 'c');
    }

    #[test]
    fn test_nested_failure_is_summarized() {
        let parser = is_char('a').or(is_char('b')).or(is_char('c'));
        let failure = parser.parse_str("z").unwrap_err();
        assert_eq!(failure.code, ErrorCode::AllParsersFailed);
        assert!(failure.span.is_empty());
    }
}
