use crate::error::ParseResult;
use crate::parser::Parser;
use crate::state::ParsingState;
use crate::transaction::Transaction;

/// Error-recovery combinator: try `base`, and on failure skip ahead to a
/// synchronization point found by `recovery` before retrying.
///
/// - `base` succeeds → its result, wrapped in `Some`.
/// - `base` fails → advance one character at a time, trying `recovery` at
///   each position. Once `recovery` matches (consuming its match), `base`
///   is retried right after it: a success there is returned as `Some`; a
///   failure yields a `None` success whose span runs back to the original
///   start — the content was skipped, not matched.
/// - End of input without `recovery` ever matching → the original `base`
///   failure, with the cursor restored to the start.
pub struct SkipUntil<P, R> {
    base: P,
    recovery: R,
}

impl<P, R> SkipUntil<P, R> {
    pub fn new(base: P, recovery: R) -> Self {
        SkipUntil { base, recovery }
    }
}

impl<'src, P, R> Parser<'src> for SkipUntil<P, R>
where
    P: Parser<'src>,
    R: Parser<'src>,
{
    type Output = Option<P::Output>;

    fn parse(&self, state: &mut ParsingState<'src>) -> ParseResult<Option<P::Output>> {
        let mut tx = Transaction::auto_rollback(state);

        let original = match self.base.parse(tx.state()) {
            Ok(parsed) => {
                tx.commit();
                return Ok(parsed.map(Some));
            }
            Err(failure) => failure,
        };

        loop {
            if tx.state().is_eof() {
                return Err(original);
            }
            tx.state().next_char();

            if self.recovery.parse(tx.state()).is_err() {
                continue;
            }
            return match self.base.parse(tx.state()) {
                Ok(parsed) => {
                    tx.commit();
                    Ok(parsed.map(Some))
                }
                Err(_) => Ok(tx.success(None)),
            };
        }
    }
}

/// Creates a recovery parser skipping to where `recovery` matches
pub fn skip_until<'src, P, R>(base: P, recovery: R) -> SkipUntil<P, R>
where
    P: Parser<'src>,
    R: Parser<'src>,
{
    SkipUntil::new(base, recovery)
}
