extern crate std;

use std::{
    format,
    panic::{AssertUnwindSafe, catch_unwind},
    string::ToString,
    vec,
    vec::Vec,
};

use core::{cell::Cell, cmp::Ordering};

use hashbrown::HashSet;

use super::to_vec;
use crate::linked_list::{
    error::{InsertError, PositionError},
    list::LinkedList,
};

#[test]
#[allow(clippy::eq_op)]
fn test_equality() {
    let a = LinkedList::from([1, 2, 3]);
    let b = LinkedList::from([1, 2, 3]);
    let c = LinkedList::from([1, 2, 3]);
    let shorter = LinkedList::from([1, 2]);

    assert!(a == a);
    assert!(a == b && b == a);
    assert!(a == b && b == c && a == c);
    assert!(shorter != a);
    assert!(a != shorter);
    assert_ne!(LinkedList::from([1, 2, 4]), a);
    assert_eq!(LinkedList::<i32>::new(), LinkedList::new());
}

#[test]
fn test_ordering() {
    let prefix = LinkedList::from([1, 2]);
    let longer = LinkedList::from([1, 2, 3]);
    assert!(prefix < longer);
    assert!(prefix <= longer);
    assert!(longer > prefix);
    assert!(longer >= prefix);

    let a = LinkedList::from([1, 3]);
    let b = LinkedList::from([1, 2, 9]);
    assert!(a > b);
    assert!(!(a < b));
    assert_eq!(a.cmp(&b), Ordering::Greater);

    assert!(longer <= longer.clone());
    assert!(longer >= longer.clone());
    assert_eq!(longer.cmp(&longer.clone()), Ordering::Equal);
    assert!(LinkedList::<i32>::new() < prefix);
}

#[test]
fn test_partial_ordering_with_nan() {
    let a = LinkedList::from([1.0, f64::NAN]);
    let b = LinkedList::from([1.0, 2.0]);
    assert_eq!(a.partial_cmp(&b), None);
    assert!(a != a.clone());
}

#[test]
fn test_clone_is_deep() {
    let original = LinkedList::from([1, 2, 3]);
    let mut copy = original.clone();
    assert_eq!(copy, original);

    copy.push_front(0);
    *copy.front_mut().unwrap() = 100;
    let front = copy.before_begin();
    copy.insert_after(front, 50);
    copy.iter_mut().for_each(|v| *v += 1);

    assert_eq!(to_vec(&original), vec![1, 2, 3]);
    assert_eq!(to_vec(&copy), vec![51, 101, 2, 3, 4]);
    copy.assert_invariants();
}

#[test]
fn test_clone_from() {
    let source = LinkedList::from([4, 5]);
    let mut target = LinkedList::from([1, 2, 3]);
    target.clone_from(&source);
    assert_eq!(target, source);
    assert_eq!(target.len(), 2);
    target.assert_invariants();

    target.push_front(3);
    assert_eq!(to_vec(&source), vec![4, 5]);
}

/// Clones fine until its shared budget runs out, then panics.
struct Fragile<'a> {
    value: i32,
    clones_left: &'a Cell<usize>,
}

impl Clone for Fragile<'_> {
    fn clone(&self) -> Self {
        let left = self.clones_left.get();
        if left == 0 {
            panic!("clone budget exhausted");
        }
        self.clones_left.set(left - 1);
        Fragile {
            value: self.value,
            clones_left: self.clones_left,
        }
    }
}

fn values(list: &LinkedList<Fragile<'_>>) -> Vec<i32> {
    list.iter().map(|f| f.value).collect()
}

#[test]
fn test_clone_from_panic_leaves_target_untouched() {
    let clones_left = Cell::new(usize::MAX);
    let source: LinkedList<_> = [1, 2, 3]
        .into_iter()
        .map(|value| Fragile {
            value,
            clones_left: &clones_left,
        })
        .collect();
    let mut target: LinkedList<_> = [10, 20]
        .into_iter()
        .map(|value| Fragile {
            value,
            clones_left: &clones_left,
        })
        .collect();
    let target_begin = target.begin();

    // The third clone panics, halfway through building the copy.
    clones_left.set(2);
    let result = catch_unwind(AssertUnwindSafe(|| target.clone_from(&source)));
    assert!(result.is_err());

    assert_eq!(values(&target), vec![10, 20]);
    assert_eq!(target.len(), 2);
    assert_eq!(target.get(target_begin).map(|f| f.value), Some(10));
    target.assert_invariants();
    assert_eq!(values(&source), vec![1, 2, 3]);

    clones_left.set(usize::MAX);
    target.clone_from(&source);
    assert_eq!(values(&target), vec![1, 2, 3]);
    assert!(target.get(target_begin).is_none());
    target.assert_invariants();
}

#[test]
fn test_hash_agrees_with_eq() {
    let mut set = HashSet::new();
    assert!(set.insert(LinkedList::from([1, 2, 3])));
    assert!(!set.insert(LinkedList::from([1, 2, 3])));
    assert!(set.insert(LinkedList::from([1, 2])));
    assert!(set.insert(LinkedList::new()));
    assert_eq!(set.len(), 3);
    assert!(set.contains(&LinkedList::from([1, 2])));
}

#[test]
fn test_debug() {
    let list = LinkedList::from([1, 2, 3]);
    assert_eq!(format!("{:?}", list), "[1, 2, 3]");
    assert_eq!(format!("{:?}", LinkedList::<i32>::new()), "[]");
    assert_eq!(format!("{:?}", list.iter()), "Iter(3)");
}

#[test]
fn test_extend_appends_at_back() {
    let mut list = LinkedList::from([1, 2]);
    list.extend(vec![3, 4]);
    assert_eq!(to_vec(&list), vec![1, 2, 3, 4]);
    list.extend(&[5, 6]);
    assert_eq!(to_vec(&list), vec![1, 2, 3, 4, 5, 6]);
    list.assert_invariants();

    let mut empty = LinkedList::new();
    empty.extend([7, 8]);
    assert_eq!(to_vec(&empty), vec![7, 8]);
    empty.assert_invariants();
}

#[test]
fn test_from_iter() {
    let list: LinkedList<_> = (1..=5).collect();
    assert_eq!(to_vec(&list), vec![1, 2, 3, 4, 5]);
    assert_eq!(list.len(), 5);
    list.assert_invariants();
}

#[test]
fn test_error_display() {
    assert_eq!(PositionError::End.to_string(), "position is past the end");
    assert_eq!(PositionError::Stale.to_string(), "position refers to a removed node");
    assert_eq!(
        PositionError::NoSuccessor.to_string(),
        "no node follows the position"
    );
    assert_eq!(
        PositionError::Foreign.to_string(),
        "position belongs to another list"
    );

    let err = InsertError {
        kind: PositionError::Stale,
        value: 1,
    };
    assert_eq!(err.to_string(), "cannot insert: position refers to a removed node");
    assert_eq!(format!("{:?}", err), "InsertError { kind: Stale, .. }");
}
