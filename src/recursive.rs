use crate::error::ParseResult;
use crate::parser::Parser;
use crate::state::ParsingState;

/// A parser that defers construction of the wrapped parser until parse
/// time.
///
/// Self-referential grammars cannot build their full combinator tree at
/// definition time; wrapping the recursive reference in a factory thunk
/// breaks the cycle. The thunk is evaluated once per invocation, not
/// memoized across cursors.
///
/// Every invocation passes through the cursor's recursion depth guard, so
/// a left-recursive grammar fails with
/// [`ErrorCode::RecursionLimit`](crate::error::ErrorCode::RecursionLimit)
/// instead of exhausting the call stack.
pub struct Recursive<F> {
    factory: F,
}

impl<F> Recursive<F> {
    pub fn new(factory: F) -> Self {
        Recursive { factory }
    }
}

impl<'src, F, P> Parser<'src> for Recursive<F>
where
    F: Fn() -> P,
    P: Parser<'src>,
{
    type Output = P::Output;

    fn parse(&self, state: &mut ParsingState<'src>) -> ParseResult<P::Output> {
        state.enter_recursion()?;
        let result = (self.factory)().parse(state);
        state.exit_recursion();
        result
    }
}

/// Create a recursive parser from a factory thunk
pub fn recursive<'src, F, P>(factory: F) -> Recursive<F>
where
    F: Fn() -> P,
    P: Parser<'src>,
{
    Recursive::new(factory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boxed::{BoxedExt, BoxedParser};
    use crate::error::ErrorCode;
    use crate::map::MapExt;
    use crate::or::OrExt;
    use crate::sequence::ThenExt;
    use crate::single::is_char;

    // Matches balanced parens around an 'x': x, (x), ((x)), ...
    fn nested<'src>() -> BoxedParser<'src, u32> {
        is_char('(')
            .then(recursive(|| nested()))
            .then(is_char(')'))
            .map(|((_, depth), _)| depth + 1)
            .or(is_char('x').map(|_| 0))
            .boxed()
    }

    #[test]
    fn test_self_referential_grammar() {
        assert_eq!(nested().parse_str("x").unwrap().value, 0);
        assert_eq!(nested().parse_str("(x)").unwrap().value, 1);
        assert_eq!(nested().parse_str("(((x)))").unwrap().value, 3);
    }

    #[test]
    fn test_unbalanced_fails() {
        assert!(nested().parse_str("((x)").is_err());
    }

    // Left-recursive with no terminating alternative
    fn left<'src>() -> BoxedParser<'src, u32> {
        recursive(|| left()).boxed()
    }

    #[test]
    fn test_depth_limit_is_failure_not_crash() {
        let mut state = ParsingState::new("x").with_max_depth(64);
        let failure = left().parse(&mut state).unwrap_err();
        assert_eq!(failure.code, ErrorCode::RecursionLimit);
        assert_eq!(state.position(), 0);
    }

    #[test]
    fn test_depth_resets_between_parses() {
        let parser = nested();
        for _ in 0..3 {
            assert_eq!(parser.parse_str("((x))").unwrap().value, 2);
        }
    }
}
