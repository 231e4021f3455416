use crate::error::ParseResult;
use crate::parser::Parser;
use crate::state::ParsingState;
use crate::transaction::Transaction;

/// Parser combinator that matches items separated by a delimiter.
///
/// Deliberately lenient about absence: if not even the first item matches
/// the combinator succeeds with an empty vec. It is strict about trailing
/// delimiters: once a delimiter matched, the following item must match or
/// the whole combinator fails and rolls back.
///
/// # Examples
/// - `"1,2,3"` → `[1, 2, 3]`
/// - `""` → `[]`
/// - `"1,"` → failure (trailing delimiter with no item)
pub struct SepBy<P, D> {
    item: P,
    delimiter: D,
}

impl<P, D> SepBy<P, D> {
    pub fn new(item: P, delimiter: D) -> Self {
        SepBy { item, delimiter }
    }
}

impl<'src, P, D> Parser<'src> for SepBy<P, D>
where
    P: Parser<'src>,
    D: Parser<'src>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, state: &mut ParsingState<'src>) -> ParseResult<Vec<P::Output>> {
        let mut tx = Transaction::auto_rollback(state);

        let first = match self.item.parse(tx.state()) {
            Ok(parsed) => parsed.value,
            Err(_) => return Ok(tx.success(Vec::new())),
        };
        let mut results = vec![first];

        loop {
            if self.delimiter.parse(tx.state()).is_err() {
                break;
            }
            // Delimiter consumed, the next item is mandatory
            let parsed = self.item.parse(tx.state())?;
            results.push(parsed.value);
        }

        Ok(tx.success(results))
    }
}

/// Creates a parser matching `item`s separated by `delimiter`
pub fn sep_by<'src, P, D>(item: P, delimiter: D) -> SepBy<P, D>
where
    P: Parser<'src>,
    D: Parser<'src>,
{
    SepBy::new(item, delimiter)
}
