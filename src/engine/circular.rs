//! # Circular Linked List Engine
//!
//! Forward-only cyclic chain: the tail's `next` is the head, and a single
//! node links to itself. The arena-of-indices layout makes the cycle
//! expressible without ownership cycles; every link is just a `SlotId`.
//!
//! ## Architecture
//!
//! ```text
//!          ┌───────────────────────────────────┐
//!          ▼                                   │
//!   head ──► [ id:1 ] ──► [ id:2 ] ──► [ id:3 ]┘
//!                                      (tail links back to head)
//! ```
//!
//! ## Invariants (hold after every public mutation)
//!
//! - Non-empty: following `next` from any node returns to the head after
//!   exactly N steps (N = node count); the tail's `next` is the head.
//! - Every live node's `next` is occupied (`None` never appears in a linked
//!   slot).
//! - Empty state is "head is absent", same as the other variants.
//!
//! ## Example Usage
//!
//! ```
//! use chainkit::ListEngine;
//! use chainkit::engine::CircularList;
//!
//! let mut list = CircularList::new();
//! list.insert_end(5);
//! list.insert_end(7);
//! let data: Vec<i64> = list.nodes().iter().map(|n| n.data).collect();
//! assert_eq!(data, vec![5, 7]);
//! // The node holding 7 links forward to the node holding 5.
//! assert!(list.check_invariants().is_ok());
//! ```

use rustc_hash::FxHashMap;

use crate::ds::{SlotArena, SlotId};
use crate::error::InvariantError;
use crate::node::{NodeId, NodeIdGen, NodeView};
use crate::notify::{ChangeListener, ChangeListeners};
use crate::op::OpKind;
use crate::traits::ListEngine;

#[derive(Debug)]
struct Slot {
    id: NodeId,
    data: i64,
    // Always Some while the node is linked; a lone node points to itself.
    next: Option<SlotId>,
}

/// Forward-only cyclic list engine.
#[derive(Debug)]
pub struct CircularList {
    arena: SlotArena<Slot>,
    head: Option<SlotId>,
    index: FxHashMap<NodeId, SlotId>,
    ids: NodeIdGen,
    listeners: ChangeListeners,
}

impl CircularList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            arena: SlotArena::new(),
            head: None,
            index: FxHashMap::default(),
            ids: NodeIdGen::new(),
            listeners: ChangeListeners::new(),
        }
    }

    /// Number of nodes in the cycle.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Returns `true` if the head is absent.
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    fn mint(&mut self, data: i64, next: Option<SlotId>) -> (NodeId, SlotId) {
        let id = self.ids.mint();
        let sid = self.arena.insert(Slot { id, data, next });
        self.index.insert(id, sid);
        (id, sid)
    }

    fn next_of(&self, sid: SlotId) -> Option<SlotId> {
        self.arena.get(sid).and_then(|slot| slot.next)
    }

    fn view(&self, sid: SlotId) -> Option<NodeView> {
        self.arena.get(sid).map(|slot| NodeView {
            id: slot.id,
            data: slot.data,
        })
    }

    /// Finds the node whose `next` is the head.
    fn tail_of(&self, head: SlotId) -> SlotId {
        let mut cur = head;
        while let Some(next) = self.next_of(cur) {
            if next == head {
                break;
            }
            cur = next;
        }
        cur
    }

    /// Inserts a lone node closing the cycle on itself.
    fn mint_sole(&mut self, data: i64) -> NodeId {
        let (id, sid) = self.mint(data, None);
        if let Some(slot) = self.arena.get_mut(sid) {
            slot.next = Some(sid);
        }
        self.head = Some(sid);
        id
    }

    /// Links a fresh node between the tail and the head; the caller decides
    /// whether it becomes the new head.
    fn splice_before_head(&mut self, data: i64, head: SlotId) -> (NodeId, SlotId) {
        let tail = self.tail_of(head);
        let (id, sid) = self.mint(data, Some(head));
        if let Some(slot) = self.arena.get_mut(tail) {
            slot.next = Some(sid);
        }
        (id, sid)
    }

    /// Removes the head of a non-empty list, rewiring the former tail.
    fn remove_head(&mut self, head: SlotId) -> Option<NodeId> {
        if self.next_of(head) == Some(head) {
            let slot = self.arena.remove(head)?;
            self.index.remove(&slot.id);
            self.head = None;
            return Some(slot.id);
        }
        let tail = self.tail_of(head);
        let new_head = self.next_of(head);
        if let Some(slot) = self.arena.get_mut(tail) {
            slot.next = new_head;
        }
        let slot = self.arena.remove(head)?;
        self.index.remove(&slot.id);
        self.head = new_head;
        Some(slot.id)
    }

    /// Unlinks and frees the successor of `sid`.
    fn remove_after(&mut self, sid: SlotId) -> Option<NodeId> {
        let victim = self.next_of(sid)?;
        let after = self.next_of(victim);
        if let Some(slot) = self.arena.get_mut(sid) {
            slot.next = after;
        }
        let slot = self.arena.remove(victim)?;
        self.index.remove(&slot.id);
        Some(slot.id)
    }

    /// Walks up to `steps` nodes from the head, clamping at the tail
    /// boundary (the node whose `next` is the head).
    fn walk_clamped(&self, head: SlotId, steps: usize) -> SlotId {
        let mut cur = head;
        for _ in 0..steps {
            match self.next_of(cur) {
                Some(next) if next != head => cur = next,
                _ => break,
            }
        }
        cur
    }

    /// Validates cycle closure, link occupancy, and the id index.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        let Some(head) = self.head else {
            if !self.arena.is_empty() || !self.index.is_empty() {
                return Err(InvariantError::new("headless list still owns nodes"));
            }
            return Ok(());
        };
        let mut count = 0usize;
        let mut cur = head;
        loop {
            count += 1;
            if count > self.arena.len() {
                return Err(InvariantError::new(format!(
                    "cycle does not close at head within {} steps",
                    self.arena.len()
                )));
            }
            let slot = self
                .arena
                .get(cur)
                .ok_or_else(|| InvariantError::new("cycle references a vacant slot"))?;
            if self.index.get(&slot.id) != Some(&cur) {
                return Err(InvariantError::new(format!(
                    "id index out of sync for node {}",
                    slot.id
                )));
            }
            let next = slot
                .next
                .ok_or_else(|| InvariantError::new(format!("node {} has no forward link", slot.id)))?;
            if next == head {
                break;
            }
            cur = next;
        }
        if count != self.arena.len() {
            return Err(InvariantError::new(format!(
                "cycle length {} != arena len {}",
                count,
                self.arena.len()
            )));
        }
        if count != self.index.len() {
            return Err(InvariantError::new("id index size mismatch"));
        }
        Ok(())
    }

    #[cfg(any(test, debug_assertions))]
    pub(crate) fn debug_snapshot_data(&self) -> Vec<i64> {
        self.nodes().iter().map(|n| n.data).collect()
    }
}

impl Default for CircularList {
    fn default() -> Self {
        Self::new()
    }
}

impl ListEngine for CircularList {
    fn insert_start(&mut self, value: i64) {
        let id = match self.head {
            None => self.mint_sole(value),
            Some(head) => {
                let (id, sid) = self.splice_before_head(value, head);
                self.head = Some(sid);
                id
            }
        };
        self.listeners.emit(OpKind::InsertStart, Some(id));
    }

    fn insert_end(&mut self, value: i64) {
        let id = match self.head {
            None => self.mint_sole(value),
            // Same splice as insert_start, but the head stays put, so the
            // new node becomes the tail.
            Some(head) => self.splice_before_head(value, head).0,
        };
        self.listeners.emit(OpKind::InsertEnd, Some(id));
    }

    fn insert_at(&mut self, value: i64, position: usize) {
        if position == 0 {
            self.insert_start(value);
            return;
        }
        let Some(head) = self.head else {
            // The walk needs a head; an empty list degrades to the only
            // possible placement.
            self.insert_start(value);
            return;
        };
        let prev = self.walk_clamped(head, position - 1);
        let after = self.next_of(prev);
        let (id, sid) = self.mint(value, after);
        if let Some(slot) = self.arena.get_mut(prev) {
            slot.next = Some(sid);
        }
        self.listeners.emit(OpKind::InsertAt, Some(id));
    }

    fn delete_value(&mut self, value: i64) {
        let Some(head) = self.head else { return };
        if self.arena.get(head).map(|slot| slot.data) == Some(value) {
            if let Some(id) = self.remove_head(head) {
                self.listeners.emit(OpKind::DeleteValue, Some(id));
            }
            return;
        }
        // One full cycle; the head was already ruled out above.
        let mut cur = head;
        loop {
            let Some(next) = self.next_of(cur) else { return };
            if next == head {
                return;
            }
            if self.arena.get(next).map(|slot| slot.data) == Some(value) {
                if let Some(id) = self.remove_after(cur) {
                    self.listeners.emit(OpKind::DeleteValue, Some(id));
                }
                return;
            }
            cur = next;
        }
    }

    fn delete_at(&mut self, position: usize) {
        let Some(head) = self.head else { return };
        if position == 0 {
            if let Some(id) = self.remove_head(head) {
                self.listeners.emit(OpKind::DeleteAt, Some(id));
            }
            return;
        }
        let prev = self.walk_clamped(head, position - 1);
        // The walk stops once the forward link wraps to the head; a wrapped
        // position is out of range.
        if self.next_of(prev) == Some(head) {
            return;
        }
        if let Some(id) = self.remove_after(prev) {
            self.listeners.emit(OpKind::DeleteAt, Some(id));
        }
    }

    fn reverse(&mut self) {
        let Some(head) = self.head else { return };
        if self.next_of(head) == Some(head) {
            // Single node: nothing to reverse, and no event fires.
            return;
        }
        let mut prev: Option<SlotId> = None;
        let mut cur = head;
        loop {
            let next = self.next_of(cur);
            if let Some(slot) = self.arena.get_mut(cur) {
                slot.next = prev;
            }
            prev = Some(cur);
            match next {
                Some(next) if next != head => cur = next,
                _ => break,
            }
        }
        // `prev` is the former tail; close the cycle through the old head.
        if let Some(slot) = self.arena.get_mut(head) {
            slot.next = prev;
        }
        self.head = prev;
        self.listeners.emit(OpKind::Reverse, None);
    }

    fn search(&self, value: i64) -> Option<NodeView> {
        let head = self.head?;
        let mut cur = head;
        loop {
            let slot = self.arena.get(cur)?;
            if slot.data == value {
                return self.view(cur);
            }
            match slot.next {
                Some(next) if next != head => cur = next,
                _ => return None,
            }
        }
    }

    fn clear(&mut self) {
        self.arena.clear();
        self.index.clear();
        self.head = None;
        self.listeners.emit(OpKind::Clear, None);
    }

    fn nodes(&self) -> Vec<NodeView> {
        let Some(head) = self.head else {
            return Vec::new();
        };
        let mut out = Vec::with_capacity(self.arena.len());
        let mut cur = head;
        loop {
            match self.view(cur) {
                Some(view) => out.push(view),
                None => break,
            }
            match self.next_of(cur) {
                Some(next) if next != head => cur = next,
                _ => break,
            }
        }
        out
    }

    fn node(&self, id: NodeId) -> Option<NodeView> {
        let sid = *self.index.get(&id)?;
        self.view(sid)
    }

    fn len(&self) -> usize {
        CircularList::len(self)
    }

    fn add_change_listener(&mut self, listener: ChangeListener) {
        self.listeners.subscribe(listener);
    }

    fn check_invariants(&self) -> Result<(), InvariantError> {
        CircularList::check_invariants(self)
    }
}
