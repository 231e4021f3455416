use crate::error::ParseResult;
use crate::parser::Parser;
use crate::state::ParsingState;

/// Parser combinator that transforms the output of a parser using a
/// mapping function. The matched span is preserved; failures pass through
/// unchanged.
pub struct Map<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Map { parser, mapper }
    }
}

impl<'src, P, F, U> Parser<'src> for Map<P, F>
where
    P: Parser<'src>,
    F: Fn(P::Output) -> U,
{
    type Output = U;

    fn parse(&self, state: &mut ParsingState<'src>) -> ParseResult<U> {
        let parsed = self.parser.parse(state)?;
        Ok(parsed.map(&self.mapper))
    }
}

/// Convenience function to create a Map parser
pub fn map<'src, P, F, U>(parser: P, mapper: F) -> Map<P, F>
where
    P: Parser<'src>,
    F: Fn(P::Output) -> U,
{
    Map::new(parser, mapper)
}

/// Extension trait to add .map() method support for parsers
pub trait MapExt<'src>: Parser<'src> + Sized {
    fn map<F, U>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, mapper)
    }
}

impl<'src, P> MapExt<'src> for P where P: Parser<'src> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::literal::literal;
    use crate::single::is_char;

    #[test]
    fn test_map_transforms_value() {
        let parser = is_char('a').map(|c| c.to_ascii_uppercase());
        assert_eq!(parser.parse_str("abc").unwrap().value, 'A');
    }

    #[test]
    fn test_map_preserves_span() {
        let parser = literal("hello").map(|s| s.len());
        let parsed = parser.parse_str("hello!").unwrap();
        assert_eq!(parsed.value, 5);
        assert_eq!((parsed.span.start, parsed.span.end), (0, 5));
    }

    #[test]
    fn test_map_passes_failure_through() {
        let parser = is_char('a').map(|c| c as u32);
        let failure = parser.parse_str("xyz").unwrap_err();
        assert_eq!(failure.code, ErrorCode::ExpectedLiteral);
    }

    #[test]
    fn test_map_chaining() {
        let parser = is_char('5')
            .map(|c| c.to_digit(10).unwrap_or(0))
            .map(|d| d * 2);
        assert_eq!(parser.parse_str("5").unwrap().value, 10);
    }

    #[test]
    fn test_function_syntax() {
        let parser = map(is_char('9'), |c| c as u8);
        assert_eq!(parser.parse_str("9").unwrap().value, b'9');
    }
}
