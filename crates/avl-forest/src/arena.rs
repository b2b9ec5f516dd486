//! Slot arena owning every node of a tree.
//!
//! Nodes never hold references to each other; a child link is a [`NodeId`]
//! into the arena of the tree that owns it. Removed slots are threaded onto a
//! free list and reused by the next allocation, so the arena never grows past
//! the peak number of live nodes.

use std::fmt;
use std::ops::{Index, IndexMut};

/// Stable handle to a node slot.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Debug)]
enum Slot<T> {
    Occupied(T),
    Vacant(Option<u32>),
}

#[derive(Clone, Debug)]
pub struct Arena<T> {
    slots: Vec<Slot<T>>,
    free: Option<u32>,
    len: usize,
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Arena<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: None,
            len: 0,
        }
    }

    /// Number of live values.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots, live or vacant.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn alloc(&mut self, value: T) -> NodeId {
        self.len += 1;
        match self.free {
            Some(i) => {
                let slot = &mut self.slots[i as usize];
                if let Slot::Vacant(next) = *slot {
                    self.free = next;
                }
                *slot = Slot::Occupied(value);
                NodeId(i)
            }
            None => {
                self.slots.push(Slot::Occupied(value));
                NodeId((self.slots.len() - 1) as u32)
            }
        }
    }

    /// Moves the value out of its slot and recycles the slot.
    ///
    /// Returns `None` when `id` is already vacant.
    pub fn take(&mut self, id: NodeId) -> Option<T> {
        let slot = self.slots.get_mut(id.index())?;
        if matches!(slot, Slot::Vacant(_)) {
            return None;
        }
        match std::mem::replace(slot, Slot::Vacant(self.free)) {
            Slot::Occupied(value) => {
                self.free = Some(id.0);
                self.len -= 1;
                Some(value)
            }
            Slot::Vacant(_) => None,
        }
    }

    pub fn get(&self, id: NodeId) -> Option<&T> {
        match self.slots.get(id.index())? {
            Slot::Occupied(value) => Some(value),
            Slot::Vacant(_) => None,
        }
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        match self.slots.get_mut(id.index())? {
            Slot::Occupied(value) => Some(value),
            Slot::Vacant(_) => None,
        }
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.free = None;
        self.len = 0;
    }
}

impl<T> Index<NodeId> for Arena<T> {
    type Output = T;

    fn index(&self, id: NodeId) -> &T {
        match &self.slots[id.index()] {
            Slot::Occupied(value) => value,
            Slot::Vacant(_) => panic!("vacant arena slot {id:?}"),
        }
    }
}

impl<T> IndexMut<NodeId> for Arena<T> {
    fn index_mut(&mut self, id: NodeId) -> &mut T {
        match &mut self.slots[id.index()] {
            Slot::Occupied(value) => value,
            Slot::Vacant(_) => panic!("vacant arena slot {id:?}"),
        }
    }
}
