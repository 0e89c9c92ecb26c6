use super::{arena::Key, traits::Link};

/// A node in the chain. Owned by the arena, linked by key.
pub(crate) struct Node<T> {
    pub(crate) value: T,
    next: Option<Key>,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T, next: Option<Key>) -> Self {
        Self { value, next }
    }
}

impl<T> Link for Node<T> {
    fn next(&self) -> Option<Key> {
        self.next
    }

    fn set_next(&mut self, next: Option<Key>) {
        self.next = next;
    }
}

/// The before-begin sentinel.
///
/// Carries no value; its link is the first real node.
#[derive(Debug, Default)]
pub(crate) struct Head {
    next: Option<Key>,
}

impl Head {
    pub(crate) const fn new() -> Self {
        Self { next: None }
    }
}

impl Link for Head {
    fn next(&self) -> Option<Key> {
        self.next
    }

    fn set_next(&mut self, next: Option<Key>) {
        self.next = next;
    }
}
