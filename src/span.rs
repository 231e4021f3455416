use crate::state::Snapshot;

/// The extent of a match in the source text.
///
/// Carries byte offsets plus the 1-based line/column coordinates of both
/// endpoints. Produced by a [`Transaction`](crate::transaction::Transaction)
/// from its origin snapshot and the cursor's current position; attached to
/// every success and failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
    pub start_line: u32,
    pub end_line: u32,
    pub start_column: u32,
    pub end_column: u32,
}

impl Span {
    /// Build a span from the snapshots of its two endpoints
    pub fn between(origin: Snapshot, end: Snapshot) -> Self {
        Span {
            start: origin.position,
            end: end.position,
            start_line: origin.line,
            end_line: end.line,
            start_column: origin.column,
            end_column: end.column,
        }
    }

    /// Zero-width span at a single position
    pub fn empty_at(at: Snapshot) -> Self {
        Self::between(at, at)
    }

    /// Length of the span in bytes
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the span covers no input
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The matched slice of `source`
    pub fn slice<'src>(&self, source: &'src str) -> &'src str {
        &source[self.start..self.end]
    }
}
