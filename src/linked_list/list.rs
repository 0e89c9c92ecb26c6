use super::{
    arena::{Arena, Key},
    error::{InsertError, PositionError},
    iter::{Iter, IterMut},
    node::{Head, Node},
    position::{ConstPosition, ListId, Mutable, Place, Position},
    traits::{Access, Link},
};

/// A singly-linked list with a before-begin sentinel.
///
/// Nodes live in a per-list arena and are chained by generational keys, so
/// positions into the list are plain handles that can be checked for
/// staleness instead of dangling.
///
/// Slots vacated by removals are reused by later insertions; the storage
/// itself is only released when the list is dropped.
pub struct LinkedList<T> {
    pub(crate) id: ListId,
    pub(crate) head: Head,
    pub(crate) nodes: Arena<Node<T>>,
    pub(crate) len: usize,
}

impl<T> LinkedList<T> {
    /// Creates a new, empty list.
    pub fn new() -> Self {
        Self {
            id: ListId::next(),
            head: Head::new(),
            nodes: Arena::new(),
            len: 0,
        }
    }

    /// Number of elements in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn front(&self) -> Option<&T> {
        let key = self.head.next()?;
        self.nodes.get(key).map(|node| &node.value)
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        let key = self.head.next()?;
        self.nodes.get_mut(key).map(|node| &mut node.value)
    }

    /// Prepends an element. O(1).
    pub fn push_front(&mut self, value: T) {
        let key = self.nodes.insert(Node::new(value, self.head.next()));
        self.head.set_next(Some(key));
        self.len += 1;
    }

    /// Removes the first element and returns it, or `None` if the list is
    /// empty. O(1).
    ///
    /// The vacated slot is kept for the next insertion.
    pub fn pop_front(&mut self) -> Option<T> {
        let key = self.head.next()?;
        let node = self.nodes.remove(key)?;
        self.head.set_next(node.next());
        self.len -= 1;
        Some(node.value)
    }

    /// Inserts `value` right after `pos` and returns its position. O(1).
    ///
    /// `pos` may be [`before_begin`](Self::before_begin), in which case this
    /// is the same as [`push_front`](Self::push_front).
    ///
    /// # Panics
    ///
    /// Panics if `pos` is the end position or names a removed node.
    pub fn insert_after<A: Access>(&mut self, pos: Position<A>, value: T) -> Position {
        match self.try_insert_after(pos, value) {
            Ok(inserted) => inserted,
            Err(err) => panic!("insert_after: {}", err.kind),
        }
    }

    /// Like [`insert_after`](Self::insert_after), but hands the value back
    /// instead of panicking when `pos` cannot be used.
    pub fn try_insert_after<A: Access>(
        &mut self,
        pos: Position<A>,
        value: T,
    ) -> Result<Position, InsertError<T>> {
        let linked = match self.resolve(pos) {
            Ok(place) => self.link_after(place, value),
            Err(kind) => Err((kind, value)),
        };
        match linked {
            Ok(key) => Ok(self.position(Place::Node(key))),
            Err((kind, value)) => {
                log::debug!("rejected insert_after at {pos:?}: {kind}");
                Err(InsertError { kind, value })
            }
        }
    }

    /// Removes the element after `pos` and returns the position that now
    /// follows `pos`, which is the end if the removed element was last. O(1).
    ///
    /// # Panics
    ///
    /// Panics if `pos` is the end position, names a removed node, or has no
    /// element after it.
    pub fn erase_after<A: Access>(&mut self, pos: Position<A>) -> Position {
        match self.try_erase_after(pos) {
            Ok(next) => next,
            Err(kind) => panic!("erase_after: {kind}"),
        }
    }

    /// Like [`erase_after`](Self::erase_after), but reports an unusable
    /// position instead of panicking.
    pub fn try_erase_after<A: Access>(&mut self, pos: Position<A>) -> Result<Position, PositionError> {
        self.unlink_after(pos).map(|(_, next)| self.position(next))
    }

    /// Removes the element after `pos` and returns it.
    pub fn remove_after<A: Access>(&mut self, pos: Position<A>) -> Result<T, PositionError> {
        self.unlink_after(pos).map(|(value, _)| value)
    }

    /// Drops every element. O(n).
    ///
    /// Positions into the list become stale. The slot storage keeps its peak
    /// size and is reused by later insertions.
    pub fn clear(&mut self) {
        let mut next = self.head.take_next();
        // Reset first so a panicking destructor leaves an empty list behind.
        self.len = 0;
        let mut dropped = 0usize;
        while let Some(key) = next {
            next = self.nodes.remove(key).and_then(|node| node.next());
            dropped += 1;
        }
        debug_assert_eq!(self.nodes.len(), 0);
        log::trace!("cleared {dropped} nodes");
    }

    /// Exchanges the contents of two lists in O(1) without touching any node.
    ///
    /// The lists' identities move with their contents, so positions follow
    /// their elements into the other list.
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(self, other);
    }

    /// Returns `true` if the list contains an element equal to `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|elt| elt == value)
    }

    /// The sentinel position in front of the first element.
    pub fn before_begin(&self) -> ConstPosition {
        self.position(Place::BeforeBegin)
    }

    pub fn before_begin_mut(&mut self) -> Position {
        self.position(Place::BeforeBegin)
    }

    /// The first element's position, or the end if the list is empty.
    pub fn begin(&self) -> ConstPosition {
        self.position(Place::from_link(self.head.next()))
    }

    pub fn begin_mut(&mut self) -> Position {
        self.position(Place::from_link(self.head.next()))
    }

    /// The position one past the last element.
    pub fn end(&self) -> ConstPosition {
        self.position(Place::End)
    }

    pub fn end_mut(&mut self) -> Position {
        self.position(Place::End)
    }

    /// The position after `pos`, with the same access.
    pub fn advance<A: Access>(&self, pos: Position<A>) -> Result<Position<A>, PositionError> {
        let link = self.link(self.resolve(pos)?)?;
        Ok(self.position(Place::from_link(link.next())))
    }

    /// The element at `pos`, or `None` for the sentinel, the end, a removed
    /// node, or a position from another list.
    pub fn get<A: Access>(&self, pos: Position<A>) -> Option<&T> {
        match self.resolve(pos) {
            Ok(Place::Node(key)) => self.nodes.get(key).map(|node| &node.value),
            _ => None,
        }
    }

    pub fn get_mut(&mut self, pos: Position<Mutable>) -> Option<&mut T> {
        match self.resolve(pos) {
            Ok(Place::Node(key)) => self.nodes.get_mut(key).map(|node| &mut node.value),
            _ => None,
        }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.nodes, self.head.next(), self.len)
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let first = self.head.next();
        IterMut::new(self.nodes.raw_slots(), first, self.len)
    }

    fn position<A: Access>(&self, place: Place) -> Position<A> {
        Position::new(self.id, place)
    }

    /// The place `pos` names in this list.
    fn resolve<A: Access>(&self, pos: Position<A>) -> Result<Place, PositionError> {
        match pos.owner {
            Some(owner) if owner != self.id => Err(PositionError::Foreign),
            _ => Ok(pos.place),
        }
    }

    fn link(&self, place: Place) -> Result<&dyn Link, PositionError> {
        match place {
            Place::BeforeBegin => Ok(&self.head as &dyn Link),
            Place::Node(key) => match self.nodes.get(key) {
                Some(node) => Ok(node as &dyn Link),
                None => Err(PositionError::Stale),
            },
            Place::End => Err(PositionError::End),
        }
    }

    fn link_mut(&mut self, place: Place) -> Result<&mut dyn Link, PositionError> {
        match place {
            Place::BeforeBegin => Ok(&mut self.head as &mut dyn Link),
            Place::Node(key) => match self.nodes.get_mut(key) {
                Some(node) => Ok(node as &mut dyn Link),
                None => Err(PositionError::Stale),
            },
            Place::End => Err(PositionError::End),
        }
    }

    /// Links a new node holding `value` after `at`.
    fn link_after(&mut self, at: Place, value: T) -> Result<Key, (PositionError, T)> {
        let next = match self.link(at) {
            Ok(link) => link.next(),
            Err(kind) => return Err((kind, value)),
        };
        let key = self.nodes.insert(Node::new(value, next));
        // Inserting never vacates a slot, so `at` still resolves.
        match self.link_mut(at) {
            Ok(link) => link.set_next(Some(key)),
            Err(kind) => unreachable!("insertion point vanished: {kind}"),
        }
        self.len += 1;
        Ok(key)
    }

    fn unlink_after<A: Access>(&mut self, pos: Position<A>) -> Result<(T, Place), PositionError> {
        let result = self
            .resolve(pos)
            .and_then(|place| self.unlink_place_after(place));
        if let Err(kind) = &result {
            log::debug!("rejected erase_after at {pos:?}: {kind}");
        }
        result
    }

    fn unlink_place_after(&mut self, at: Place) -> Result<(T, Place), PositionError> {
        let key = self.link(at)?.next().ok_or(PositionError::NoSuccessor)?;
        let Some(node) = self.nodes.remove(key) else {
            unreachable!("chain links to a vacant slot");
        };
        let next = node.next();
        // The chain is acyclic, so `at` was not the removed node.
        self.link_mut(at)?.set_next(next);
        self.len -= 1;
        Ok((node.value, Place::from_link(next)))
    }

    /// The last node, or the sentinel if the list is empty.
    pub(crate) fn last_place(&self) -> Place {
        let mut place = Place::BeforeBegin;
        let mut next = self.head.next();
        while let Some(key) = next {
            place = Place::Node(key);
            next = self.nodes.get(key).and_then(|node| node.next());
        }
        place
    }

    /// Appends every value from `iter` in order after `at`, which must be a
    /// live place with nothing after it.
    pub(crate) fn extend_after<I>(&mut self, at: Place, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        let mut tail = at;
        for value in iter {
            match self.link_after(tail, value) {
                Ok(key) => tail = Place::Node(key),
                Err((kind, _)) => unreachable!("append point vanished: {kind}"),
            }
        }
    }

    /// Walks the chain and checks it against the element count.
    #[cfg(test)]
    pub(crate) fn assert_invariants(&self) {
        let mut steps = 0;
        let mut next = self.head.next();
        while let Some(key) = next {
            let node = self.nodes.get(key).expect("chain links to a vacant slot");
            steps += 1;
            assert!(steps <= self.len, "chain is longer than len ({})", self.len);
            next = node.next();
        }
        assert_eq!(steps, self.len);
        assert_eq!(self.nodes.len(), self.len);
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}
