use crate::error::ParseResult;
use crate::parser::Parser;
use crate::state::ParsingState;
use crate::transaction::Transaction;

/// Parser combinator that turns a failure into a `None` success.
///
/// Runs the inner parser inside an auto-commit transaction; since a failing
/// child restores the cursor itself, a failed attempt leaves no trace and
/// the combinator succeeds with a zero-width span at the entry point.
pub struct Optional<P> {
    parser: P,
}

impl<P> Optional<P> {
    pub fn new(parser: P) -> Self {
        Optional { parser }
    }
}

impl<'src, P> Parser<'src> for Optional<P>
where
    P: Parser<'src>,
{
    type Output = Option<P::Output>;

    fn parse(&self, state: &mut ParsingState<'src>) -> ParseResult<Option<P::Output>> {
        let mut tx = Transaction::auto_commit(state);
        match self.parser.parse(tx.state()) {
            Ok(parsed) => Ok(parsed.map(Some)),
            Err(_) => Ok(tx.success(None)),
        }
    }
}

/// Convenience function to create an Optional parser
pub fn optional<'src, P>(parser: P) -> Optional<P>
where
    P: Parser<'src>,
{
    Optional::new(parser)
}

/// Extension trait to add .optional() method support for parsers
pub trait OptionalExt<'src>: Parser<'src> + Sized {
    fn optional(self) -> Optional<Self> {
        Optional::new(self)
    }
}

impl<'src, P> OptionalExt<'src> for P where P: Parser<'src> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::literal::literal;
    use crate::single::is_char;

    #[test]
    fn test_present() {
        let parsed = optional(is_char('a')).parse_str("abc").unwrap();
        assert_eq!(parsed.value, Some('a'));
        assert_eq!(parsed.span.len(), 1);
    }

    #[test]
    fn test_absent_succeeds_with_none() {
        let mut state = ParsingState::new("xyz");
        let parsed = optional(is_char('a')).parse(&mut state).unwrap();
        assert_eq!(parsed.value, None);
        assert!(parsed.span.is_empty());
        assert_eq!(state.position(), 0);
    }

    #[test]
    fn test_absent_on_empty_input() {
        let parsed = optional(literal("hi")).parse_str("").unwrap();
        assert_eq!(parsed.value, None);
    }

    #[test]
    fn test_method_syntax() {
        let parser = is_char('-').optional();
        assert_eq!(parser.parse_str("-5").unwrap().value, Some('-'));
        assert_eq!(parser.parse_str("5").unwrap().value, None);
    }
}
