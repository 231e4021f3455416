use crate::error::{ErrorCode, ParseResult};
use crate::map::MapExt;
use crate::or::OrExt;
use crate::parser::Parser;
use crate::state::ParsingState;
use crate::transaction::Transaction;
use once_cell::sync::Lazy;
use regex::Regex;

static UINT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+").unwrap());
static INT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[+-]?[0-9]+").unwrap());
static FLOAT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?(?:[0-9]+\.[0-9]*|[0-9]*\.[0-9]+)").unwrap());

/// Match an anchored regex at the cursor, consuming the matched text
fn match_at_cursor<'src>(
    tx: &mut Transaction<'_, 'src>,
    regex: &Regex,
) -> Option<&'src str> {
    let m = regex.find(tx.state().remainder())?;
    if m.start() != 0 {
        return None;
    }
    Some(tx.state().next_chars(m.as_str().chars().count()))
}

/// Parser for an unsigned decimal integer
pub struct Uint;

impl<'src> Parser<'src> for Uint {
    type Output = u64;

    fn parse(&self, state: &mut ParsingState<'src>) -> ParseResult<u64> {
        let mut tx = Transaction::auto_rollback(state);
        let Some(text) = match_at_cursor(&mut tx, &UINT_RE) else {
            return Err(tx.failure(ErrorCode::ExpectedRegex, "expected an unsigned integer"));
        };
        match text.parse::<u64>() {
            Ok(value) => Ok(tx.success(value)),
            Err(_) => Err(tx.failure(
                ErrorCode::ExpectedRegex,
                format!("integer literal '{}' out of range", text),
            )),
        }
    }
}

/// Parser for a decimal integer with an optional leading sign
pub struct Int;

impl<'src> Parser<'src> for Int {
    type Output = i64;

    fn parse(&self, state: &mut ParsingState<'src>) -> ParseResult<i64> {
        let mut tx = Transaction::auto_rollback(state);
        let Some(text) = match_at_cursor(&mut tx, &INT_RE) else {
            return Err(tx.failure(ErrorCode::ExpectedRegex, "expected an integer"));
        };
        match text.parse::<i64>() {
            Ok(value) => Ok(tx.success(value)),
            Err(_) => Err(tx.failure(
                ErrorCode::ExpectedRegex,
                format!("integer literal '{}' out of range", text),
            )),
        }
    }
}

/// Parser for a decimal float with a mandatory decimal point.
///
/// Accepts `12.`, `12.5`, `.5`, with an optional leading sign. The value is
/// the real floating-point number; the fractional part is not truncated.
pub struct Float;

impl<'src> Parser<'src> for Float {
    type Output = f64;

    fn parse(&self, state: &mut ParsingState<'src>) -> ParseResult<f64> {
        let mut tx = Transaction::auto_rollback(state);
        let Some(text) = match_at_cursor(&mut tx, &FLOAT_RE) else {
            return Err(tx.failure(ErrorCode::ExpectedRegex, "expected a float"));
        };
        match text.parse::<f64>() {
            Ok(value) => Ok(tx.success(value)),
            Err(_) => Err(tx.failure(
                ErrorCode::ExpectedRegex,
                format!("malformed float literal '{}'", text),
            )),
        }
    }
}

/// Parser matching an unsigned integer
pub fn uint() -> Uint {
    Uint
}

/// Parser matching a signed integer
pub fn int() -> Int {
    Int
}

/// Parser matching a float (decimal point required)
pub fn float() -> Float {
    Float
}

/// Parser matching a float or an integer, as `f64`.
///
/// Float is tried first so `"2.5"` is not consumed as `2` with a dangling
/// `.5`.
pub fn number<'src>() -> impl Parser<'src, Output = f64> {
    float().or(int().map(|i| i as f64))
}
