use crate::error::ParseResult;
use crate::parser::Parser;
use crate::state::ParsingState;
use crate::transaction::Transaction;

/// Parser combinator that trims surrounding whitespace.
///
/// Skips zero or more whitespace characters, runs the inner parser, skips
/// trailing whitespace. Yields only the inner value; the span covers the
/// whole trimmed region. On inner failure the leading skip is rolled back
/// too.
pub struct Token<P> {
    parser: P,
}

impl<P> Token<P> {
    pub fn new(parser: P) -> Self {
        Token { parser }
    }
}

fn skip_whitespace(state: &mut ParsingState<'_>) {
    while state.peek().is_some_and(char::is_whitespace) {
        state.next_char();
    }
}

impl<'src, P> Parser<'src> for Token<P>
where
    P: Parser<'src>,
{
    type Output = P::Output;

    fn parse(&self, state: &mut ParsingState<'src>) -> ParseResult<P::Output> {
        let mut tx = Transaction::auto_rollback(state);
        skip_whitespace(tx.state());
        let parsed = self.parser.parse(tx.state())?;
        skip_whitespace(tx.state());
        Ok(tx.success(parsed.value))
    }
}

/// Creates a parser running `parser` with surrounding whitespace skipped
pub fn token<'src, P>(parser: P) -> Token<P>
where
    P: Parser<'src>,
{
    Token::new(parser)
}

/// Extension trait to add .token() method support for parsers
pub trait TokenExt<'src>: Parser<'src> + Sized {
    fn token(self) -> Token<Self> {
        Token::new(self)
    }
}

impl<'src, P> TokenExt<'src> for P where P: Parser<'src> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::literal::literal;
    use crate::sequence::ThenExt;
    use crate::single::is_char;

    #[test]
    fn test_trims_both_sides() {
        let mut state = ParsingState::new("  hello \t next");
        let parsed = token(literal("hello")).parse(&mut state).unwrap();
        assert_eq!(parsed.value, "hello");
        assert_eq!(state.peek(), Some('n'));
    }

    #[test]
    fn test_no_whitespace_needed() {
        let parsed = token(literal("hi")).parse_str("hi").unwrap();
        assert_eq!(parsed.value, "hi");
    }

    #[test]
    fn test_inner_failure_restores_everything() {
        let mut state = ParsingState::new("   world");
        assert!(token(literal("hello")).parse(&mut state).is_err());
        // Leading whitespace skip rolled back too
        assert_eq!(state.position(), 0);
    }

    #[test]
    fn test_tokens_compose() {
        let parser = token(is_char('a')).then(token(is_char('b')));
        let parsed = parser.parse_str(" a  b ").unwrap();
        assert_eq!(parsed.value, ('a', 'b'));
    }

    #[test]
    fn test_newlines_are_whitespace() {
        let parsed = token(literal("x")).parse_str("\n\n x \n").unwrap();
        assert_eq!(parsed.value, "x");
    }
}
