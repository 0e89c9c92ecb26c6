use core::{
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
    sync::atomic::{AtomicUsize, Ordering},
};

use super::{
    arena::Key,
    traits::{Access, sealed::Sealed},
};

/// Marker for positions that allow mutable access to the element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mutable {}

/// Marker for positions that only allow shared access to the element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Immutable {}

impl Sealed for Mutable {}
impl Sealed for Immutable {}

impl Access for Mutable {
    const MUTABLE: bool = true;
}

impl Access for Immutable {
    const MUTABLE: bool = false;
}

/// Identity of a list, carried by the positions it hands out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct ListId(usize);

impl ListId {
    pub(crate) fn next() -> Self {
        static NEXT: AtomicUsize = AtomicUsize::new(0);
        ListId(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// Where a position points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Place {
    BeforeBegin,
    Node(Key),
    End,
}

impl Place {
    pub(crate) fn from_link(next: Option<Key>) -> Self {
        next.map_or(Place::End, Place::Node)
    }
}

/// A position in a [`LinkedList`](super::list::LinkedList).
///
/// Positions are cheap `Copy` handles; they do not borrow the list, but they
/// remember which list produced them. The access marker `A` decides whether
/// [`LinkedList::get_mut`] accepts them.
///
/// [`LinkedList::get_mut`]: super::list::LinkedList::get_mut
pub struct Position<A: Access = Mutable> {
    // `None` only for the end, which is the same place in every list.
    pub(crate) owner: Option<ListId>,
    pub(crate) place: Place,
    _access: PhantomData<A>,
}

/// A position that only grants shared access.
pub type ConstPosition = Position<Immutable>;

impl<A: Access> Position<A> {
    pub(crate) fn new(owner: ListId, place: Place) -> Self {
        let owner = match place {
            Place::End => None,
            Place::BeforeBegin | Place::Node(_) => Some(owner),
        };
        Self {
            owner,
            place,
            _access: PhantomData,
        }
    }

    pub(crate) fn with_access<B: Access>(self) -> Position<B> {
        Position {
            owner: self.owner,
            place: self.place,
            _access: PhantomData,
        }
    }

    /// Returns `true` if this is a before-begin position.
    pub fn is_before_begin(&self) -> bool {
        self.place == Place::BeforeBegin
    }

    /// Returns `true` if this is an end position.
    pub fn is_end(&self) -> bool {
        self.place == Place::End
    }

    /// Drop mutable access.
    pub fn as_const(self) -> ConstPosition {
        self.with_access()
    }
}

impl From<Position<Mutable>> for ConstPosition {
    fn from(pos: Position<Mutable>) -> Self {
        pos.as_const()
    }
}

impl<A: Access> Clone for Position<A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A: Access> Copy for Position<A> {}

impl<A: Access, B: Access> PartialEq<Position<B>> for Position<A> {
    fn eq(&self, other: &Position<B>) -> bool {
        self.owner == other.owner && self.place == other.place
    }
}

impl<A: Access> Eq for Position<A> {}

impl<A: Access> Hash for Position<A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.owner.hash(state);
        self.place.hash(state);
    }
}

impl<A: Access> fmt::Debug for Position<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if A::MUTABLE { "Position" } else { "ConstPosition" };
        match self.place {
            Place::BeforeBegin => write!(f, "{kind}(before_begin)"),
            Place::Node(key) => f.debug_tuple(kind).field(&key).finish(),
            Place::End => write!(f, "{kind}(end)"),
        }
    }
}
