extern crate std;

use std::vec::Vec;

use crate::linked_list::list::LinkedList;

mod arena;
mod ops;

fn to_vec<T: Clone>(list: &LinkedList<T>) -> Vec<T> {
    list.iter().cloned().collect()
}
