use crate::span::Span;
use thiserror::Error;

/// Closed set of failure codes produced by the engine.
///
/// Every failure a combinator generates carries one of these; user code can
/// match on them without parsing message strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ErrorCode {
    #[error("expected literal")]
    ExpectedLiteral,
    #[error("expected pattern")]
    ExpectedRegex,
    #[error("unexpected end of input")]
    UnexpectedEof,
    #[error("all parsers failed")]
    AllParsersFailed,
    #[error("recursion limit exceeded")]
    RecursionLimit,
}

/// A parse failure: code, span of the failed attempt, human message.
///
/// Failures are values, not panics; combinators either pass them through,
/// substitute a default, or summarize them (see [`or`](crate::or)).
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{code} at line {}, column {}: {message}", .span.start_line, .span.start_column)]
pub struct Failure {
    pub code: ErrorCode,
    pub span: Span,
    pub message: String,
}

impl Failure {
    pub fn new(code: ErrorCode, span: Span, message: impl Into<String>) -> Self {
        Failure {
            code,
            span,
            message: message.into(),
        }
    }
}

/// A successful parse: the typed value plus the span it matched
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parsed<T> {
    pub value: T,
    pub span: Span,
}

impl<T> Parsed<T> {
    /// Transform the value, keeping the span
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Parsed<U> {
        Parsed {
            value: f(self.value),
            span: self.span,
        }
    }
}

/// Outcome of a parse attempt; the failure side is a value, never a panic
pub type ParseResult<T> = Result<Parsed<T>, Failure>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ParsingState;

    #[test]
    fn test_failure_display() {
        let mut state = ParsingState::new("ab\ncd");
        state.next_chars(3);

        let failure = Failure::new(
            ErrorCode::ExpectedLiteral,
            Span::empty_at(state.snapshot()),
            "expected 'x', found 'c'",
        );

        let rendered = failure.to_string();
        assert!(rendered.contains("expected literal"));
        assert!(rendered.contains("line 2"));
        assert!(rendered.contains("column 1"));
        assert!(rendered.contains("found 'c'"));
    }

    #[test]
    fn test_parsed_map_keeps_span() {
        let state = ParsingState::new("42");
        let parsed = Parsed {
            value: "42",
            span: Span::empty_at(state.snapshot()),
        };

        let mapped = parsed.map(|s| s.len());
        assert_eq!(mapped.value, 2);
        assert_eq!(mapped.span, parsed.span);
    }

    #[test]
    fn test_code_display() {
        assert_eq!(ErrorCode::UnexpectedEof.to_string(), "unexpected end of input");
        assert_eq!(ErrorCode::AllParsersFailed.to_string(), "all parsers failed");
    }
}
