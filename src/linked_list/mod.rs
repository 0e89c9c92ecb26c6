//! A forward-only linked list.
//!
//! The list keeps a sentinel link in front of the first element, so every
//! insertion and removal is expressed as "after some position", including
//! at the front:
//!
//! ```
//! use forward_list::LinkedList;
//!
//! let mut list = LinkedList::from([2, 4]);
//!
//! let front = list.before_begin();
//! let one = list.insert_after(front, 1);
//! let two = list.advance(one).unwrap();
//! list.insert_after(two, 3);
//!
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
//!
//! // Erasing the node after `two` yields the position that now follows it.
//! let four = list.erase_after(two);
//! assert_eq!(list.get(four), Some(&4));
//! assert_eq!(list.len(), 3);
//! ```
//!
//! ## Positions
//!
//! A [`Position`] is a `Copy` handle that does not borrow the list. It names
//! either the sentinel ([`LinkedList::before_begin`]), a node, or the end
//! ([`LinkedList::end`]). Handles obtained through the `_mut` accessors are
//! [`Position<Mutable>`] and allow [`LinkedList::get_mut`]; the others are
//! [`ConstPosition`]s. Both compare equal when they name the same place.
//!
//! Removing a node makes every position naming it stale. Stale positions
//! never alias another node: lookups return `None`, and the checked
//! operations report [`PositionError::Stale`].
//!
//! Positions remember the list that produced them. Another list rejects them
//! with [`PositionError::Foreign`], and [`LinkedList::get`] returns `None`.
//! [`LinkedList::swap`] moves the identity along with the elements, so
//! positions keep working in the list their nodes now live in. End
//! positions compare equal across lists.
//!
//! [`Position`]: position::Position
//! [`Position<Mutable>`]: position::Position
//! [`ConstPosition`]: position::ConstPosition
//! [`PositionError::Stale`]: error::PositionError::Stale
//! [`PositionError::Foreign`]: error::PositionError::Foreign

pub mod traits;
mod arena;
mod node;
pub mod position;
pub mod error;
pub mod list;
pub mod iter;
pub mod ops;

#[cfg(test)]
mod tests;
