//! Slab arena with free-list slot reuse.
//!
//! List nodes live here and link to each other by [`SlotId`] instead of by
//! owning pointers. That keeps self-referential topologies (notably the
//! circular variant, where the tail links back to the head) expressible
//! without ownership cycles or `Rc<RefCell<..>>` chains, while relinking
//! stays O(1): rewriting a link is an index assignment.
//!
//! ## Architecture
//!
//! ```text
//!   SlotArena<T>
//!   ┌────────┬──────────────┐
//!   │ slot 0 │ Some(node A) │  ◄─ SlotId(0)
//!   │ slot 1 │ None         │  ◄─ on the free list, reused by next insert
//!   │ slot 2 │ Some(node B) │  ◄─ SlotId(2)
//!   └────────┴──────────────┘
//! ```
//!
//! A removed slot's index goes on the free list and is handed out again by a
//! later insert, so `SlotId`s are only stable while the slot is occupied.
//! Stable *identity* across reuse is the job of [`NodeId`], not `SlotId`.
//!
//! [`NodeId`]: crate::node::NodeId

/// Handle to an occupied slot in a [`SlotArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotId(pub(crate) usize);

impl SlotId {
    /// Returns the underlying slot index.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Vec-backed slab keyed by [`SlotId`], with free-slot reuse.
#[derive(Debug)]
pub struct SlotArena<T> {
    slots: Vec<Option<T>>,
    free: Vec<usize>,
    len: usize,
}

impl<T> SlotArena<T> {
    /// Creates an empty arena.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            len: 0,
        }
    }

    /// Creates an empty arena with reserved slot capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            len: 0,
        }
    }

    /// Stores `value`, reusing a free slot when one exists.
    pub fn insert(&mut self, value: T) -> SlotId {
        let idx = match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = Some(value);
                idx
            }
            None => {
                self.slots.push(Some(value));
                self.slots.len() - 1
            }
        };
        self.len += 1;
        SlotId(idx)
    }

    /// Vacates the slot and returns its value, if occupied.
    pub fn remove(&mut self, id: SlotId) -> Option<T> {
        let value = self.slots.get_mut(id.0)?.take()?;
        self.free.push(id.0);
        self.len -= 1;
        Some(value)
    }

    /// Returns the value at `id`, if the slot is occupied.
    pub fn get(&self, id: SlotId) -> Option<&T> {
        self.slots.get(id.0)?.as_ref()
    }

    /// Returns a mutable reference to the value at `id`, if occupied.
    pub fn get_mut(&mut self, id: SlotId) -> Option<&mut T> {
        self.slots.get_mut(id.0)?.as_mut()
    }

    /// Returns `true` if `id` refers to an occupied slot.
    pub fn contains(&self, id: SlotId) -> bool {
        matches!(self.slots.get(id.0), Some(Some(_)))
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no slot is occupied.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Vacates every slot. Allocated capacity is released.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.len = 0;
    }

    /// Iterates occupied slots in index order.
    pub fn iter(&self) -> impl Iterator<Item = (SlotId, &T)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(idx, slot)| slot.as_ref().map(|value| (SlotId(idx), value)))
    }
}

impl<T> Default for SlotArena<T> {
    fn default() -> Self {
        Self::new()
    }
}
