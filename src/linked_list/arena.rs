use alloc::vec::Vec;
use core::{marker::PhantomData, ptr::NonNull};

/// Handle to an occupied arena slot.
///
/// The generation is bumped each time a slot is vacated, so a key outlives
/// its value only as a key that no longer resolves. A slot whose generation
/// is exhausted is retired rather than reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct Key {
    index: usize,
    generation: u32,
}

struct Slot<T> {
    generation: u32,
    entry: Entry<T>,
}

enum Entry<T> {
    Occupied(T),
    Vacant { next_free: Option<usize> },
}

/// Slot storage with a free list and generational keys.
pub(crate) struct Arena<T> {
    slots: Vec<Slot<T>>,
    free: Option<usize>,
    len: usize,
}

impl<T> Arena<T> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: None,
            len: 0,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Stores `value`, reusing a vacated slot when one exists.
    pub(crate) fn insert(&mut self, value: T) -> Key {
        self.len += 1;
        match self.free {
            Some(index) => {
                let slot = &mut self.slots[index];
                if let Entry::Vacant { next_free } = slot.entry {
                    self.free = next_free;
                } else {
                    unreachable!("free list points at an occupied slot");
                }
                slot.entry = Entry::Occupied(value);
                Key {
                    index,
                    generation: slot.generation,
                }
            }
            None => {
                let index = self.slots.len();
                self.slots.push(Slot {
                    generation: 0,
                    entry: Entry::Occupied(value),
                });
                Key {
                    index,
                    generation: 0,
                }
            }
        }
    }

    pub(crate) fn remove(&mut self, key: Key) -> Option<T> {
        let slot = self.slots.get_mut(key.index)?;
        if slot.generation != key.generation || matches!(slot.entry, Entry::Vacant { .. }) {
            return None;
        }
        let next_generation = slot.generation.checked_add(1);
        let entry = core::mem::replace(
            &mut slot.entry,
            Entry::Vacant {
                next_free: next_generation.and(self.free),
            },
        );
        if let Some(generation) = next_generation {
            slot.generation = generation;
            self.free = Some(key.index);
        }
        self.len -= 1;
        match entry {
            Entry::Occupied(value) => Some(value),
            Entry::Vacant { .. } => unreachable!(),
        }
    }

    pub(crate) fn get(&self, key: Key) -> Option<&T> {
        match self.slots.get(key.index)? {
            Slot {
                generation,
                entry: Entry::Occupied(value),
            } if *generation == key.generation => Some(value),
            _ => None,
        }
    }

    pub(crate) fn get_mut(&mut self, key: Key) -> Option<&mut T> {
        match self.slots.get_mut(key.index)? {
            Slot {
                generation,
                entry: Entry::Occupied(value),
            } if *generation == key.generation => Some(value),
            _ => None,
        }
    }

    /// Number of slots ever allocated, vacant or not.
    #[cfg(test)]
    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Moves an occupied slot to `generation`, returning its new key.
    #[cfg(test)]
    pub(crate) fn set_generation(&mut self, key: Key, generation: u32) -> Option<Key> {
        let slot = self.slots.get_mut(key.index)?;
        if slot.generation != key.generation {
            return None;
        }
        slot.generation = generation;
        Some(Key {
            index: key.index,
            generation,
        })
    }

    /// Hands out disjoint mutable access to slots by key.
    pub(crate) fn raw_slots(&mut self) -> RawSlots<'_, T> {
        RawSlots {
            base: NonNull::new(self.slots.as_mut_ptr()).unwrap_or(NonNull::dangling()),
            len: self.slots.len(),
            _marker: PhantomData,
        }
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Mutable view over an arena's slots that does not hold a unique borrow of
/// the whole slot vector, so references into different slots can coexist.
pub(crate) struct RawSlots<'a, T> {
    base: NonNull<Slot<T>>,
    len: usize,
    _marker: PhantomData<&'a mut [Slot<T>]>,
}

impl<'a, T> RawSlots<'a, T> {
    /// Resolve `key` to a reference that lives as long as the view.
    ///
    /// # Safety
    ///
    /// The caller must not resolve the same key twice while an earlier
    /// reference obtained for it is alive.
    pub(crate) unsafe fn get_mut(&self, key: Key) -> Option<&'a mut T> {
        if key.index >= self.len {
            return None;
        }
        unsafe {
            let slot = &mut *self.base.as_ptr().add(key.index);
            match slot {
                Slot {
                    generation,
                    entry: Entry::Occupied(value),
                } if *generation == key.generation => Some(value),
                _ => None,
            }
        }
    }
}

unsafe impl<T: Send> Send for RawSlots<'_, T> {}
unsafe impl<T: Sync> Sync for RawSlots<'_, T> {}
