use crate::error::ParseResult;
use crate::parser::Parser;
use crate::state::ParsingState;
use std::borrow::Cow;
use tracing::trace;

/// Parser combinator that instruments another parser with entry/exit
/// tracing.
///
/// A `tracing` span named after the label is entered for the duration of
/// the attempt and released when the attempt's scope ends, on both the
/// success and failure paths. Parsing semantics and results are untouched;
/// with no subscriber installed this is close to free.
pub struct Traced<P> {
    parser: P,
    label: Cow<'static, str>,
}

impl<P> Traced<P> {
    pub fn new(parser: P, label: impl Into<Cow<'static, str>>) -> Self {
        Traced {
            parser,
            label: label.into(),
        }
    }
}

impl<'src, P> Parser<'src> for Traced<P>
where
    P: Parser<'src>,
{
    type Output = P::Output;

    fn parse(&self, state: &mut ParsingState<'src>) -> ParseResult<P::Output> {
        let span = tracing::debug_span!("parse", label = %self.label);
        let _guard = span.entered();

        trace!(
            position = state.position(),
            line = state.line(),
            "enter"
        );
        let result = self.parser.parse(state);
        match &result {
            Ok(parsed) => trace!(
                start = parsed.span.start,
                end = parsed.span.end,
                "success"
            ),
            Err(failure) => trace!(code = %failure.code, "failure"),
        }
        result
    }
}

/// Convenience function to create a Traced parser
pub fn traced<'src, P>(parser: P, label: impl Into<Cow<'static, str>>) -> Traced<P>
where
    P: Parser<'src>,
{
    Traced::new(parser, label)
}

/// Extension trait to add .traced() method support for parsers
pub trait TracedExt<'src>: Parser<'src> + Sized {
    fn traced(self, label: impl Into<Cow<'static, str>>) -> Traced<Self> {
        Traced::new(self, label)
    }
}

impl<'src, P> TracedExt<'src> for P where P: Parser<'src> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::literal::literal;

    #[test]
    fn test_success_unchanged() {
        let plain = literal("hello").parse_str("hello world").unwrap();
        let wrapped = literal("hello")
            .traced("greeting")
            .parse_str("hello world")
            .unwrap();
        assert_eq!(plain.value, wrapped.value);
        assert_eq!(plain.span, wrapped.span);
    }

    #[test]
    fn test_failure_unchanged() {
        let failure = traced(literal("hello"), "greeting")
            .parse_str("world")
            .unwrap_err();
        assert_eq!(failure.code, ErrorCode::ExpectedLiteral);
    }

    #[test]
    fn test_failure_restores_position() {
        let mut state = ParsingState::new("world");
        assert!(literal("hello").traced("g").parse(&mut state).is_err());
        assert_eq!(state.position(), 0);
    }
}
