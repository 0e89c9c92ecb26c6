use core::fmt::Debug;

use super::arena::Key;

/// A forward link in the chain.
///
/// Both the list's sentinel and every node implement this, so linking a
/// new node "after" something does not care which of the two it is.
pub(crate) trait Link {
    /// Get the key of the next node
    fn next(&self) -> Option<Key>;

    /// Set the key of the next node
    fn set_next(&mut self, next: Option<Key>);

    /// Detach the rest of the chain from this link
    fn take_next(&mut self) -> Option<Key> {
        let next = self.next();
        self.set_next(None);
        next
    }
}

/// Access marker carried by a [`Position`](super::position::Position).
///
/// Implemented only by [`Mutable`](super::position::Mutable) and
/// [`Immutable`](super::position::Immutable).
pub trait Access: sealed::Sealed + Copy + Debug + 'static {
    /// Whether positions of this kind may be used for mutable access.
    const MUTABLE: bool;
}

pub(crate) mod sealed {
    pub trait Sealed {}
}
