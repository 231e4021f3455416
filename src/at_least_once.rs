use crate::error::ParseResult;
use crate::parser::Parser;
use crate::state::ParsingState;
use crate::transaction::Transaction;

/// Parser combinator that matches one or more occurrences of the given
/// parser.
///
/// The first run must succeed or its failure propagates unchanged; after
/// that it collects like [`many`](crate::many::many), including the
/// zero-width loop guard.
pub struct AtLeastOnce<P> {
    parser: P,
}

impl<P> AtLeastOnce<P> {
    pub fn new(parser: P) -> Self {
        AtLeastOnce { parser }
    }
}

impl<'src, P> Parser<'src> for AtLeastOnce<P>
where
    P: Parser<'src>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, state: &mut ParsingState<'src>) -> ParseResult<Vec<P::Output>> {
        let mut tx = Transaction::auto_commit(state);

        let first = self.parser.parse(tx.state())?;
        let mut results = vec![first.value];

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

/// Convenience function to create an AtLeastOnce parser
pub fn at_least_once<'src, P>(parser: P) -> AtLeastOnce<P>
where
    P: Parser<'src>,
{
    AtLeastOnce::new(parser)
}
