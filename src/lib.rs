//! A singly-linked list with a before-begin sentinel.
//!
//! See [`linked_list`] for the container and its positions.
#![no_std]

extern crate alloc;

pub mod linked_list;

pub use crate::linked_list::{
    error::{InsertError, PositionError},
    iter::{IntoIter, Iter, IterMut},
    list::LinkedList,
    ops::swap,
    position::{ConstPosition, Immutable, Mutable, Position},
    traits::Access,
};
