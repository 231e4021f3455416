use crate::error::{ErrorCode, ParseResult};
use crate::parser::Parser;
use crate::state::ParsingState;
use crate::transaction::Transaction;

/// Parser that succeeds with no value only at end of input
pub struct Eof;

impl<'src> Parser<'src> for Eof {
    type Output = ();

    fn parse(&self, state: &mut ParsingState<'src>) -> ParseResult<()> {
        let mut tx = Transaction::auto_rollback(state);
        match tx.state().peek() {
            None => Ok(tx.success(())),
            Some(found) => Err(tx.failure(
                ErrorCode::ExpectedLiteral,
                format!("expected end of input, found '{}'", found),
            )),
        }
    }
}

/// Creates a parser matching end of input
pub fn eof() -> Eof {
    Eof
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::single::is_char;

    #[test]
    fn test_eof_on_empty_input() {
        let parsed = eof().parse_str("").unwrap();
        assert_eq!(parsed.value, ());
        assert!(parsed.span.is_empty());
    }

    #[test]
    fn test_eof_after_consuming_all() {
        let mut state = ParsingState::new("a");
        is_char('a').parse(&mut state).unwrap();
        assert!(eof().parse(&mut state).is_ok());
    }

    #[test]
    fn test_eof_with_remaining_input() {
        let failure = eof().parse_str("a").unwrap_err();
        assert_eq!(failure.code, ErrorCode::ExpectedLiteral);
        assert!(failure.message.contains("found 'a'"));
    }

    #[test]
    fn test_eof_never_consumes() {
        let mut state = ParsingState::new("abc");
        assert!(eof().parse(&mut state).is_err());
        assert_eq!(state.position(), 0);
    }
}
