//! Standard trait impls for [`LinkedList`].

use core::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
};

use super::{list::LinkedList, position::Place};

/// Exchanges the contents of two lists. Same as [`LinkedList::swap`].
pub fn swap<T>(lhs: &mut LinkedList<T>, rhs: &mut LinkedList<T>) {
    lhs.swap(rhs);
}

impl<T: Clone> Clone for LinkedList<T> {
    /// Deep copy, node by node, in order.
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    /// Builds a complete copy of `source` first and only then swaps it in,
    /// so a panicking `T::clone` leaves `self` untouched.
    fn clone_from(&mut self, source: &Self) {
        let mut copy = source.clone();
        self.swap(&mut copy);
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: PartialOrd> PartialOrd for LinkedList<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for LinkedList<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T: Hash> Hash for LinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for elt in self {
            elt.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    /// Builds the chain in iteration order by appending after the last node.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend_after(Place::BeforeBegin, iter);
        list
    }
}

impl<T, const N: usize> From<[T; N]> for LinkedList<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T> Extend<T> for LinkedList<T> {
    /// Appends at the back. Finding the back is O(n).
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let tail = self.last_place();
        self.extend_after(tail, iter);
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}
