use crate::error::ParseResult;
use crate::parser::Parser;
use crate::state::ParsingState;
use crate::transaction::Transaction;

/// Parser combinator that runs a tuple of parsers in order against the
/// same cursor.
///
/// All-or-nothing: the first child failure propagates unchanged and every
/// earlier match is rolled back. Success yields the tuple of child values.
/// Implemented for parser tuples of arity 2 through 8; longer chains nest
/// or use [`ThenExt::then`] pairs.
pub struct Sequence<T> {
    parsers: T,
}

/// Creates a parser running a tuple of parsers in order
pub fn sequence<T>(parsers: T) -> Sequence<T> {
    Sequence { parsers }
}

macro_rules! impl_sequence {
    ($($P:ident $idx:tt),+) => {
        impl<'src, $($P),+> Parser<'src> for Sequence<($($P,)+)>
        where
            $($P: Parser<'src>,)+
        {
            type Output = ($($P::Output,)+);

            fn parse(&self, state: &mut ParsingState<'src>) -> ParseResult<Self::Output> {
                let mut tx = Transaction::auto_rollback(state);
                let values = ($(self.parsers.$idx.parse(tx.state())?.value,)+);
                Ok(tx.success(values))
            }
        }
    };
}

impl_sequence!(P0 0, P1 1);
impl_sequence!(P0 0, P1 1, P2 2);
impl_sequence!(P0 0, P1 1, P2 2, P3 3);
impl_sequence!(P0 0, P1 1, P2 2, P3 3, P4 4);
impl_sequence!(P0 0, P1 1, P2 2, P3 3, P4 4, P5 5);
impl_sequence!(P0 0, P1 1, P2 2, P3 3, P4 4, P5 5, P6 6);
impl_sequence!(P0 0, P1 1, P2 2, P3 3, P4 4, P5 5, P6 6, P7 7);

/// Extension trait for fluent two-parser sequencing
pub trait ThenExt<'src>: Parser<'src> + Sized {
    fn then<P>(self, next: P) -> Sequence<(Self, P)>
    where
        P: Parser<'src>,
    {
        sequence((self, next))
    }
}

impl<'src, P> ThenExt<'src> for P where P: Parser<'src> {}
