use crate::error::{ErrorCode, Failure};
use crate::span::Span;

/// Default recursion depth limit for [`ParsingState`], see
/// [`ParsingState::with_max_depth`] to override it.
pub const DEFAULT_MAX_DEPTH: u32 = 128;

/// A saved cursor position that can be restored later.
///
/// Snapshots are cheap `Copy` values; transactions capture one at open time
/// and restore it on rollback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    /// Byte offset into the source, always on a char boundary
    pub position: usize,
    /// 1-based line number
    pub line: u32,
    /// 1-based column number
    pub column: u32,
}

/// Mutable cursor over a fully materialized input string.
///
/// Owns the scan position plus 1-based line/column coordinates which stay
/// consistent with having consumed exactly `raw[..position]`. A state is
/// created once per top-level parse, or handed in by the caller to resume
/// a previous partial parse (e.g. statement-by-statement parsing).
///
/// Not shared between logical parses; parsers borrow it mutably down the
/// call stack.
#[derive(Debug)]
pub struct ParsingState<'src> {
    raw: &'src str,
    position: usize,
    line: u32,
    column: u32,
    depth: u32,
    max_depth: u32,
}

impl<'src> ParsingState<'src> {
    /// Create a state at the start of `raw` (position 0, line 1, column 1)
    pub fn new(raw: &'src str) -> Self {
        Self::at(raw, 0, 1, 1)
    }

    /// Create a state at an explicit position, for resuming a prior parse.
    ///
    /// The caller is responsible for passing coordinates consistent with
    /// `position`; a position past the end of input is permitted here and
    /// rejected by [`Parser::run`](crate::parser::Parser::run) instead.
    pub fn at(raw: &'src str, position: usize, line: u32, column: u32) -> Self {
        Self {
            raw,
            position,
            line,
            column,
            depth: 0,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Override the recursion depth limit enforced by
    /// [`recursive`](crate::recursive::recursive) parsers
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// The complete source text
    pub fn source(&self) -> &'src str {
        self.raw
    }

    /// Current byte offset into the source
    pub fn position(&self) -> usize {
        self.position
    }

    /// Current 1-based line number
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Current 1-based column number
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Whether the cursor has consumed all input
    pub fn is_eof(&self) -> bool {
        self.position >= self.raw.len()
    }

    /// The unconsumed suffix of the source
    pub fn remainder(&self) -> &'src str {
        &self.raw[self.position.min(self.raw.len())..]
    }

    /// Look at the next character without consuming it
    pub fn peek(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    /// Consume and return the next character, updating line/column.
    ///
    /// Returns `None` at end of input; never fails.
    pub fn next_char(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.position += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    /// Consume up to `n` characters and return them as a slice.
    ///
    /// If fewer than `n` characters remain the truncated remainder is
    /// returned; callers decide whether a short read is a failure.
    pub fn next_chars(&mut self, n: usize) -> &'src str {
        let start = self.position;
        for _ in 0..n {
            if self.next_char().is_none() {
                break;
            }
        }
        &self.raw[start..self.position]
    }

    /// Capture the current position for later [`restore`](Self::restore)
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            position: self.position,
            line: self.line,
            column: self.column,
        }
    }

    /// Reset the cursor to a previously captured snapshot
    pub fn restore(&mut self, snapshot: Snapshot) {
        self.position = snapshot.position;
        self.line = snapshot.line;
        self.column = snapshot.column;
    }

    /// Enter one level of grammar recursion, failing with
    /// [`ErrorCode::RecursionLimit`] once the configured limit is reached
    pub fn enter_recursion(&mut self) -> Result<(), Failure> {
        if self.depth >= self.max_depth {
            return Err(Failure::new(
                ErrorCode::RecursionLimit,
                Span::empty_at(self.snapshot()),
                format!("recursion depth limit of {} exceeded", self.max_depth),
            ));
        }
        self.depth += 1;
        Ok(())
    }

    /// Leave one level of grammar recursion
    pub fn exit_recursion(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}
