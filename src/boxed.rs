use crate::error::ParseResult;
use crate::parser::Parser;
use crate::state::ParsingState;
use std::rc::Rc;

/// A cheaply clonable, type-erased parser.
///
/// Grammar functions that return `impl Parser` cannot refer to themselves
/// (the nominal type would be infinite); returning a `BoxedParser` erases
/// the concrete combinator tree so mutually recursive rules can be written
/// as ordinary functions, usually together with
/// [`recursive`](crate::recursive::recursive).
pub struct BoxedParser<'src, T> {
    inner: Rc<dyn Parser<'src, Output = T> + 'src>,
}

impl<'src, T> Clone for BoxedParser<'src, T> {
    fn clone(&self) -> Self {
        BoxedParser {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<'src, T> Parser<'src> for BoxedParser<'src, T> {
    type Output = T;

    fn parse(&self, state: &mut ParsingState<'src>) -> ParseResult<T> {
        self.inner.parse(state)
    }
}

/// Extension trait to add `.boxed()` support for parsers
pub trait BoxedExt<'src>: Parser<'src> + Sized + 'src {
    fn boxed(self) -> BoxedParser<'src, Self::Output> {
        BoxedParser {
            inner: Rc::new(self),
        }
    }
}

impl<'src, P> BoxedExt<'src> for P where P: Parser<'src> + 'src {}
