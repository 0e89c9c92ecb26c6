//! Errors reported by the checked list operations.

use core::fmt;

/// Why a position could not be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionError {
    /// The position is the end marker; nothing comes after it.
    End,
    /// The node this position named has been removed.
    Stale,
    /// There is no node after the position to remove.
    NoSuccessor,
    /// The position was produced by a different list.
    Foreign,
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionError::End => f.write_str("position is past the end"),
            PositionError::Stale => f.write_str("position refers to a removed node"),
            PositionError::NoSuccessor => f.write_str("no node follows the position"),
            PositionError::Foreign => f.write_str("position belongs to another list"),
        }
    }
}

impl core::error::Error for PositionError {}

/// A rejected insertion, carrying the value back to the caller.
#[derive(Clone, PartialEq, Eq)]
pub struct InsertError<T> {
    /// Why the position was rejected.
    pub kind: PositionError,
    /// The value that was not inserted.
    pub value: T,
}

impl<T> InsertError<T> {
    /// Take back the value that was not inserted.
    pub fn into_inner(self) -> T {
        self.value
    }
}

// Manual impl so `T` need not be `Debug`.
impl<T> fmt::Debug for InsertError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InsertError")
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

impl<T> fmt::Display for InsertError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot insert: {}", self.kind)
    }
}

impl<T> core::error::Error for InsertError<T> {}
