use crate::error::ParseResult;
use crate::parser::Parser;
use crate::state::ParsingState;
use crate::transaction::Transaction;

/// Parser combinator that matches zero or more occurrences of the given
/// parser.
///
/// Never fails: collection stops at the first child failure, or at a child
/// success that did not advance the cursor (the loop guard against
/// zero-width matches, whose value is discarded).
pub struct Many<P> {
    parser: P,
}

impl<P> Many<P> {
    pub fn new(parser: P) -> Self {
        Many { parser }
    }
}

impl<'src, P> Parser<'src> for Many<P>
where
    P: Parser<'src>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, state: &mut ParsingState<'src>) -> ParseResult<Vec<P::Output>> {
        let mut tx = Transaction::auto_commit(state);
        let mut results = Vec::new();

        loop {
            let before = tx.state().position();
            match self.parser.parse(tx.state()) {
                Ok(parsed) => {
                    if tx.state().position() == before {
                        break;
                    }
                    results.push(parsed.value);
                }
                Err(_) => break,
            }
        }

        Ok(tx.success(results))
    }
}

/// Convenience function to create a Many parser
pub fn many<'src, P>(parser: P) -> Many<P>
where
    P: Parser<'src>,
{
    Many::new(parser)
}
