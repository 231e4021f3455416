use crate::error::ParseResult;
use crate::parser::Parser;
use crate::state::ParsingState;
use crate::transaction::Transaction;

/// Parser that greedily consumes characters while a predicate holds.
///
/// Never fails; the result may be an empty slice. Stops at end of input.
pub struct TakeWhile<F> {
    predicate: F,
}

impl<'src, F> Parser<'src> for TakeWhile<F>
where
    F: Fn(char) -> bool,
{
    type Output = &'src str;

    fn parse(&self, state: &mut ParsingState<'src>) -> ParseResult<&'src str> {
        let mut tx = Transaction::auto_commit(state);
        let start = tx.state().position();

        while let Some(c) = tx.state().peek() {
            if !(self.predicate)(c) {
                break;
            }
            tx.state().next_char();
        }

        let end = tx.state().position();
        let matched = &tx.state().source()[start..end];
        Ok(tx.success(matched))
    }
}

/// Consume characters while `predicate` holds on the next character
pub fn take_while<F>(predicate: F) -> TakeWhile<F>
where
    F: Fn(char) -> bool,
{
    TakeWhile { predicate }
}

/// Consume characters until `predicate` holds on the next character.
///
/// The character satisfying the predicate is left unconsumed.
pub fn take_until<F>(predicate: F) -> TakeWhile<impl Fn(char) -> bool>
where
    F: Fn(char) -> bool,
{
    TakeWhile {
        predicate: move |c| !predicate(c),
    }
}
