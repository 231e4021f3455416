use crate::error::{ErrorCode, ParseResult};
use crate::parser::Parser;
use crate::state::ParsingState;
use crate::transaction::Transaction;
use regex::Regex;

/// Parser that matches an anchored regular expression against the
/// remaining input.
///
/// The pattern must be anchored with `^` or `\A`; an unanchored pattern
/// would silently match somewhere in the middle of the remainder, so
/// [`pattern`] treats it as a programmer error and panics at construction
/// time. Match failures at parse time are ordinary
/// [`ErrorCode::ExpectedRegex`] failures.
pub struct Pattern {
    regex: Regex,
}

impl Pattern {
    /// Wrap an already compiled regex. Panics if `regex` is not anchored.
    pub fn from_regex(regex: Regex) -> Self {
        let source = regex.as_str();
        assert!(
            source.starts_with('^') || source.starts_with(r"\A"),
            "regex parser pattern '{}' must be anchored with '^' or '\\A'",
            source
        );
        Pattern { regex }
    }
}

impl<'src> Parser<'src> for Pattern {
    type Output = &'src str;

    fn parse(&self, state: &mut ParsingState<'src>) -> ParseResult<&'src str> {
        let mut tx = Transaction::auto_rollback(state);
        let remainder = tx.state().remainder();
        match self.regex.find(remainder) {
            Some(m) if m.start() == 0 => {
                let matched = tx.state().next_chars(m.as_str().chars().count());
                Ok(tx.success(matched))
            }
            _ => Err(tx.failure(
                ErrorCode::ExpectedRegex,
                format!("input does not match pattern '{}'", self.regex.as_str()),
            )),
        }
    }
}

/// Creates a parser for an anchored regex pattern.
///
/// # Panics
///
/// Panics if `source` is not anchored with `^` or `\A`, or is not a valid
/// regular expression. Both are construction-time caller mistakes, never
/// runtime parse failures.
pub fn pattern(source: &str) -> Pattern {
    let regex = Regex::new(source)
        .unwrap_or_else(|e| panic!("invalid regex parser pattern '{}': {}", source, e));
    Pattern::from_regex(regex)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_consumes_exact_length() {
        let mut state = ParsingState::new("1234abc");
        let parsed = pattern(r"^[0-9]+").parse(&mut state).unwrap();
        assert_eq!(parsed.value, "1234");
        assert_eq!(state.position(), 4);
        assert_eq!(state.peek(), Some('a'));
    }

    #[test]
    fn test_no_match() {
        let failure = pattern(r"^[0-9]+").parse_str("abc").unwrap_err();
        assert_eq!(failure.code, ErrorCode::ExpectedRegex);
    }

    #[test]
    fn test_no_match_restores_position() {
        let mut state = ParsingState::new("abc");
        assert!(pattern(r"^[0-9]+").parse(&mut state).is_err());
        assert_eq!(state.position(), 0);
    }

    #[test]
    fn test_matches_at_remainder_start_only() {
        // Digits exist later in the input but not at the cursor
        let failure = pattern(r"^[0-9]+").parse_str("x123").unwrap_err();
        assert_eq!(failure.code, ErrorCode::ExpectedRegex);
    }

    #[test]
    fn test_anchored_with_slash_a() {
        let parsed = pattern(r"\A[a-z]+").parse_str("abc123").unwrap();
        assert_eq!(parsed.value, "abc");
    }

    #[test]
    fn test_mid_input_match() {
        let mut state = ParsingState::new("ab12");
        state.next_chars(2);
        let parsed = pattern(r"^[0-9]+").parse(&mut state).unwrap();
        assert_eq!(parsed.value, "12");
        assert_eq!(parsed.span.start, 2);
    }

    #[test]
    fn test_empty_match_succeeds_without_consuming() {
        let mut state = ParsingState::new("abc");
        let parsed = pattern(r"^[0-9]*").parse(&mut state).unwrap();
        assert_eq!(parsed.value, "");
        assert_eq!(state.position(), 0);
    }

    #[test]
    #[should_panic(expected = "must be anchored")]
    fn test_unanchored_pattern_panics() {
        pattern(r"[0-9]+");
    }

    #[test]
    #[should_panic(expected = "invalid regex")]
    fn test_invalid_pattern_panics() {
        pattern(r"^[");
    }
}
