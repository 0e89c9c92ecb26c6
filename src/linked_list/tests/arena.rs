use crate::linked_list::arena::Arena;

#[test]
fn test_vacated_slot_is_reused() {
    let mut arena = Arena::new();
    let first = arena.insert("a");
    assert_eq!(arena.remove(first), Some("a"));

    let second = arena.insert("b");
    assert_eq!(arena.capacity(), 1);
    assert_eq!(arena.get(first), None);
    assert_eq!(arena.get(second), Some(&"b"));
    assert_eq!(arena.remove(first), None);
}

#[test]
fn test_exhausted_slot_is_retired() {
    let mut arena = Arena::new();
    let key = arena.insert(1);
    let last_generation = arena.set_generation(key, u32::MAX).unwrap();
    assert_eq!(arena.remove(last_generation), Some(1));
    assert_eq!(arena.len(), 0);

    // The slot cannot take a new generation, so it stays out of the free list.
    let fresh = arena.insert(2);
    assert_eq!(arena.capacity(), 2);
    assert_eq!(arena.get(last_generation), None);
    assert_eq!(arena.get(fresh), Some(&2));

    assert_eq!(arena.remove(fresh), Some(2));
    let again = arena.insert(3);
    assert_eq!(arena.capacity(), 2);
    assert_eq!(arena.get(again), Some(&3));
    assert_eq!(arena.get(last_generation), None);
}
