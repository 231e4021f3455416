use crate::error::{ErrorCode, Failure, ParseResult};
use crate::span::Span;
use crate::state::ParsingState;

/// Core trait for parser combinators.
///
/// A parser is an immutable, reusable value wrapping a function from a
/// mutable [`ParsingState`] to a [`ParseResult`]: success carries the typed
/// value and the matched span, failure carries a code, span and message.
/// Parsers hold no hidden state of their own; the same instance may be run
/// against many cursors, or repeatedly against one.
///
/// Implementations must not leave the cursor advanced on failure; the usual
/// way to guarantee that is a [`Transaction`](crate::transaction::Transaction).
pub trait Parser<'src> {
    type Output;

    /// Attempt to parse at the cursor's current position.
    ///
    /// On success the cursor is left after the consumed input; on failure it
    /// is restored to where it was.
    fn parse(&self, state: &mut ParsingState<'src>) -> ParseResult<Self::Output>;

    /// Run against a caller-supplied cursor, e.g. to resume a prior parse.
    ///
    /// Guards the entry: a cursor positioned past the end of input yields
    /// [`ErrorCode::UnexpectedEof`] before any parser logic runs.
    fn run(&self, state: &mut ParsingState<'src>) -> ParseResult<Self::Output> {
        if state.position() > state.source().len() {
            return Err(Failure::new(
                ErrorCode::UnexpectedEof,
                Span::empty_at(state.snapshot()),
                format!(
                    "parse position {} is past the end of input (length {})",
                    state.position(),
                    state.source().len()
                ),
            ));
        }
        self.parse(state)
    }

    /// Parse a string from the start with a fresh cursor
    fn parse_str(&self, input: &'src str) -> ParseResult<Self::Output> {
        let mut state = ParsingState::new(input);
        self.run(&mut state)
    }
}

/// Blanket impl so parsers compose behind plain references
impl<'src, P> Parser<'src> for &P
where
    P: Parser<'src> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, state: &mut ParsingState<'src>) -> ParseResult<Self::Output> {
        (**self).parse(state)
    }
}
