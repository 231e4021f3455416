use crate::error::ParseResult;
use crate::parser::Parser;
use crate::state::ParsingState;
use crate::transaction::Transaction;

/// Parser combinator that runs a parser without consuming input.
///
/// The inner result, success or failure, is returned as-is (including its
/// span over the would-be match), but the cursor is unconditionally rolled
/// back to the entry point.
pub struct Peek<P> {
    parser: P,
}

impl<P> Peek<P> {
    pub fn new(parser: P) -> Self {
        Peek { parser }
    }
}

impl<'src, P> Parser<'src> for Peek<P>
where
    P: Parser<'src>,
{
    type Output = P::Output;

    fn parse(&self, state: &mut ParsingState<'src>) -> ParseResult<P::Output> {
        let mut tx = Transaction::auto_rollback(state);
        let result = self.parser.parse(tx.state());
        tx.rollback();
        result
    }
}

/// Convenience function to create a Peek parser
pub fn peek<'src, P>(parser: P) -> Peek<P>
where
    P: Parser<'src>,
{
    Peek::new(parser)
}
