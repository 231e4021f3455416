use crate::error::{ErrorCode, Failure, Parsed};
use crate::span::Span;
use crate::state::{ParsingState, Snapshot};

/// Action a [`Transaction`] takes if it is dropped without an explicit
/// decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposal {
    /// Keep whatever the scope consumed
    AutoCommit,
    /// Restore the cursor to the origin snapshot
    AutoRollback,
}

/// Scoped borrow of a [`ParsingState`] with commit/rollback semantics.
///
/// A transaction captures an origin snapshot at open time. Child parsers run
/// against [`state`](Transaction::state); the attempt ends in exactly one of:
///
/// - [`success`](Transaction::success), producing a [`Parsed`] whose span
///   runs from the origin to the current position;
/// - [`failure`](Transaction::failure), producing a [`Failure`] with the
///   same span and restoring the cursor to the origin;
/// - going out of scope, in which case `Drop` fires the configured
///   [`Disposal`] action. This holds on every exit path, including early
///   returns and unwinding out of user callbacks, so a rollback-scoped
///   combinator can simply `return Err(..)` and leave the restore to the
///   guard.
///
/// Manual [`commit`](Transaction::commit) and
/// [`rollback`](Transaction::rollback) are available for combinators that
/// need mid-scope control; both are no-ops when the cursor has not moved
/// relative to the origin.
#[derive(Debug)]
pub struct Transaction<'a, 'src> {
    state: &'a mut ParsingState<'src>,
    origin: Snapshot,
    mode: Disposal,
    settled: bool,
}

impl<'a, 'src> Transaction<'a, 'src> {
    /// Open a transaction that rolls back on an undecided scope exit
    pub fn auto_rollback(state: &'a mut ParsingState<'src>) -> Self {
        Self::open(state, Disposal::AutoRollback)
    }

    /// Open a transaction that keeps consumed input on an undecided scope
    /// exit
    pub fn auto_commit(state: &'a mut ParsingState<'src>) -> Self {
        Self::open(state, Disposal::AutoCommit)
    }

    fn open(state: &'a mut ParsingState<'src>, mode: Disposal) -> Self {
        let origin = state.snapshot();
        Transaction {
            state,
            origin,
            mode,
            settled: false,
        }
    }

    /// The underlying cursor, for running child parsers
    pub fn state(&mut self) -> &mut ParsingState<'src> {
        self.state
    }

    /// Whether the cursor has moved since the origin (or last commit)
    pub fn is_dirty(&self) -> bool {
        self.state.position() != self.origin.position
    }

    /// Span from the origin to the cursor's current position, without
    /// touching the cursor
    pub fn meta(&self) -> Span {
        Span::between(self.origin, self.state.snapshot())
    }

    /// Advance the origin to the current position, keeping consumed input.
    ///
    /// Spans measured after a commit are relative to the new baseline.
    /// No-op if the transaction is not dirty.
    pub fn commit(&mut self) {
        if self.is_dirty() {
            self.origin = self.state.snapshot();
        }
    }

    /// Restore the cursor to the origin. No-op if the transaction is not
    /// dirty.
    pub fn rollback(&mut self) {
        if self.is_dirty() {
            self.state.restore(self.origin);
        }
    }

    /// Finish the attempt as a success spanning origin to current position
    pub fn success<T>(mut self, value: T) -> Parsed<T> {
        let span = self.meta();
        self.settled = true;
        Parsed { value, span }
    }

    /// Finish the attempt as a failure, restoring the cursor to the origin.
    ///
    /// The reported span still covers origin to the pre-rollback position,
    /// so diagnostics point at the extent of the failed attempt.
    pub fn failure(mut self, code: ErrorCode, message: impl Into<String>) -> Failure {
        let span = self.meta();
        self.rollback();
        self.settled = true;
        Failure::new(code, span, message)
    }
}

impl Drop for Transaction<'_, '_> {
    fn drop(&mut self) {
        if !self.settled && self.mode == Disposal::AutoRollback {
            self.rollback();
        }
    }
}
