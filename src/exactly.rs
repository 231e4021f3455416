use crate::error::ParseResult;
use crate::parser::Parser;
use crate::state::ParsingState;
use crate::transaction::Transaction;

/// Parser combinator that matches exactly `n` occurrences of the given
/// parser.
///
/// All-or-nothing: any individual failure rolls back every occurrence
/// consumed so far and propagates the child failure.
pub struct Exactly<P> {
    parser: P,
    count: usize,
}

impl<P> Exactly<P> {
    pub fn new(parser: P, count: usize) -> Self {
        Exactly { parser, count }
    }
}

impl<'src, P> Parser<'src> for Exactly<P>
where
    P: Parser<'src>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, state: &mut ParsingState<'src>) -> ParseResult<Vec<P::Output>> {
        let mut tx = Transaction::auto_rollback(state);
        let mut results = Vec::with_capacity(self.count);

        for _ in 0..self.count {
            let parsed = self.parser.parse(tx.state())?;
            results.push(parsed.value);
        }

        Ok(tx.success(results))
    }
}

/// Creates a parser matching `parser` exactly `count` times
pub fn exactly<'src, P>(parser: P, count: usize) -> Exactly<P>
where
    P: Parser<'src>,
{
    Exactly::new(parser, count)
}
