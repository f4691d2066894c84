//! # Doubly Linked List Engine
//!
//! Forward-and-backward-linked, null-terminated chain. Same arena-plus-index
//! layout as the singly variant; each node additionally carries a `prev`
//! link, and every mutation keeps the two directions coherent.
//!
//! ## Architecture
//!
//! ```text
//!   head ──► [ id:1 ] ◄──► [ id:2 ] ◄──► [ id:3 ] ──► ∅
//!            prev: ∅                     next: ∅
//! ```
//!
//! ## Invariants (hold after every public mutation)
//!
//! - The last reachable node's `next` is `None`; the head's `prev` is `None`.
//! - For every non-head node `n`: `n.prev.next == n`.
//! - For every non-tail node `n`: `n.next.prev == n`.
//!
//! ## Example Usage
//!
//! ```
//! use chainkit::ListEngine;
//! use chainkit::engine::DoublyList;
//!
//! let mut list = DoublyList::new();
//! list.insert_end(1);
//! list.insert_start(0);
//! list.insert_at(2, 2);
//! let data: Vec<i64> = list.nodes().iter().map(|n| n.data).collect();
//! assert_eq!(data, vec![0, 1, 2]);
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
    next: Option<SlotId>,
    prev: Option<SlotId>,
}

/// Forward+backward-linked, null-terminated list engine.
#[derive(Debug)]
pub struct DoublyList {
    arena: SlotArena<Slot>,
    head: Option<SlotId>,
    index: FxHashMap<NodeId, SlotId>,
    ids: NodeIdGen,
    listeners: ChangeListeners,
}

impl DoublyList {
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

    /// Number of nodes in the chain.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Returns `true` if the head is absent.
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    fn mint(&mut self, data: i64, next: Option<SlotId>, prev: Option<SlotId>) -> (NodeId, SlotId) {
        let id = self.ids.mint();
        let sid = self.arena.insert(Slot {
            id,
            data,
            next,
            prev,
        });
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

    /// Detaches `sid` from both directions and frees it.
    ///
    /// Repoints the head when the victim has no predecessor.
    fn unlink(&mut self, sid: SlotId) -> Option<NodeId> {
        let (prev, next) = {
            let slot = self.arena.get(sid)?;
            (slot.prev, slot.next)
        };
        match prev {
            Some(prev_sid) => {
                if let Some(slot) = self.arena.get_mut(prev_sid) {
                    slot.next = next;
                }
            }
            None => self.head = next,
        }
        if let Some(next_sid) = next {
            if let Some(slot) = self.arena.get_mut(next_sid) {
                slot.prev = prev;
            }
        }
        let slot = self.arena.remove(sid)?;
        self.index.remove(&slot.id);
        Some(slot.id)
    }

    /// Walks `steps` nodes from the head, stopping early at the end.
    fn walk(&self, steps: usize) -> Option<SlotId> {
        let mut cur = self.head;
        for _ in 0..steps {
            let sid = cur?;
            cur = self.next_of(sid);
        }
        cur
    }

    /// Validates termination, bidirectional link coherence, and the id index.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        let mut count = 0usize;
        let mut cur = self.head;
        let mut expected_prev: Option<SlotId> = None;
        while let Some(sid) = cur {
            count += 1;
            if count > self.arena.len() {
                return Err(InvariantError::new(
                    "chain does not terminate within arena length",
                ));
            }
            let slot = self
                .arena
                .get(sid)
                .ok_or_else(|| InvariantError::new("chain references a vacant slot"))?;
            if slot.prev != expected_prev {
                return Err(InvariantError::new(format!(
                    "prev link broken at node {}",
                    slot.id
                )));
            }
            if self.index.get(&slot.id) != Some(&sid) {
                return Err(InvariantError::new(format!(
                    "id index out of sync for node {}",
                    slot.id
                )));
            }
            expected_prev = Some(sid);
            cur = slot.next;
        }
        if count != self.arena.len() {
            return Err(InvariantError::new(format!(
                "reachable count {} != arena len {}",
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

impl Default for DoublyList {
    fn default() -> Self {
        Self::new()
    }
}

impl ListEngine for DoublyList {
    fn insert_start(&mut self, value: i64) {
        let old_head = self.head;
        let (id, sid) = self.mint(value, old_head, None);
        if let Some(old_sid) = old_head {
            if let Some(slot) = self.arena.get_mut(old_sid) {
                slot.prev = Some(sid);
            }
        }
        self.head = Some(sid);
        self.listeners.emit(OpKind::InsertStart, Some(id));
    }

    fn insert_end(&mut self, value: i64) {
        match self.head {
            None => {
                let (id, sid) = self.mint(value, None, None);
                self.head = Some(sid);
                self.listeners.emit(OpKind::InsertEnd, Some(id));
            }
            Some(head) => {
                let mut tail = head;
                while let Some(next) = self.next_of(tail) {
                    tail = next;
                }
                let (id, sid) = self.mint(value, None, Some(tail));
                if let Some(slot) = self.arena.get_mut(tail) {
                    slot.next = Some(sid);
                }
                self.listeners.emit(OpKind::InsertEnd, Some(id));
            }
        }
    }

    fn insert_at(&mut self, value: i64, position: usize) {
        if position == 0 {
            self.insert_start(value);
            return;
        }
        match self.walk(position - 1) {
            None => self.insert_end(value),
            Some(prev) => {
                let after = self.next_of(prev);
                let (id, sid) = self.mint(value, after, Some(prev));
                if let Some(after_sid) = after {
                    if let Some(slot) = self.arena.get_mut(after_sid) {
                        slot.prev = Some(sid);
                    }
                }
                if let Some(slot) = self.arena.get_mut(prev) {
                    slot.next = Some(sid);
                }
                self.listeners.emit(OpKind::InsertAt, Some(id));
            }
        }
    }

    fn delete_value(&mut self, value: i64) {
        let mut cur = self.head;
        while let Some(sid) = cur {
            let slot = match self.arena.get(sid) {
                Some(slot) => slot,
                None => return,
            };
            if slot.data == value {
                if let Some(id) = self.unlink(sid) {
                    self.listeners.emit(OpKind::DeleteValue, Some(id));
                }
                return;
            }
            cur = slot.next;
        }
    }

    fn delete_at(&mut self, position: usize) {
        if let Some(target) = self.walk(position) {
            if let Some(id) = self.unlink(target) {
                self.listeners.emit(OpKind::DeleteAt, Some(id));
            }
        }
    }

    fn reverse(&mut self) {
        // Swap next/prev on every node; the last node visited becomes the
        // new head.
        let mut cur = self.head;
        let mut last: Option<SlotId> = None;
        while let Some(sid) = cur {
            let next = self.next_of(sid);
            if let Some(slot) = self.arena.get_mut(sid) {
                slot.next = slot.prev;
                slot.prev = next;
            }
            last = Some(sid);
            cur = next;
        }
        if last.is_some() {
            self.head = last;
        }
        self.listeners.emit(OpKind::Reverse, None);
    }

    fn search(&self, value: i64) -> Option<NodeView> {
        let mut cur = self.head;
        while let Some(sid) = cur {
            let slot = self.arena.get(sid)?;
            if slot.data == value {
                return self.view(sid);
            }
            cur = slot.next;
        }
        None
    }

    fn clear(&mut self) {
        self.arena.clear();
        self.index.clear();
        self.head = None;
        self.listeners.emit(OpKind::Clear, None);
    }

    fn nodes(&self) -> Vec<NodeView> {
        let mut out = Vec::with_capacity(self.arena.len());
        let mut cur = self.head;
        while let Some(sid) = cur {
            if let Some(view) = self.view(sid) {
                out.push(view);
            }
            cur = self.next_of(sid);
        }
        out
    }

    fn node(&self, id: NodeId) -> Option<NodeView> {
        let sid = *self.index.get(&id)?;
        self.view(sid)
    }

    fn len(&self) -> usize {
        DoublyList::len(self)
    }

    fn add_change_listener(&mut self, listener: ChangeListener) {
        self.listeners.subscribe(listener);
    }

    fn check_invariants(&self) -> Result<(), InvariantError> {
        DoublyList::check_invariants(self)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    fn with_event_log(list: &mut DoublyList) -> Rc<RefCell<Vec<(OpKind, Option<NodeId>)>>> {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        list.add_change_listener(Box::new(move |event| {
            sink.borrow_mut().push((event.op, event.node));
        }));
        log
    }

    #[test]
    fn inserts_keep_both_directions_coherent() {
        let mut list = DoublyList::new();
        list.insert_start(2);
        list.insert_start(1);
        list.insert_end(4);
        list.insert_at(3, 2);
        assert_eq!(list.debug_snapshot_data(), vec![1, 2, 3, 4]);
        list.check_invariants().unwrap();
    }

    #[test]
    fn insert_at_past_end_degrades_to_append() {
        let mut list = DoublyList::new();
        list.insert_end(1);
        let log = with_event_log(&mut list);
        list.insert_at(2, 9);
        assert_eq!(list.debug_snapshot_data(), vec![1, 2]);
        assert_eq!(log.borrow()[0].0, OpKind::InsertEnd);
        list.check_invariants().unwrap();
    }

    #[test]
    fn delete_value_head_clears_new_head_prev() {
        let mut list = DoublyList::new();
        list.insert_end(1);
        list.insert_end(2);
        list.delete_value(1);
        assert_eq!(list.debug_snapshot_data(), vec![2]);
        list.check_invariants().unwrap();
    }

    #[test]
    fn delete_value_mid_and_tail() {
        let mut list = DoublyList::new();
        for v in [1, 2, 3] {
            list.insert_end(v);
        }
        list.delete_value(2);
        assert_eq!(list.debug_snapshot_data(), vec![1, 3]);
        list.delete_value(3);
        assert_eq!(list.debug_snapshot_data(), vec![1]);
        list.check_invariants().unwrap();
    }

    #[test]
    fn delete_value_without_match_is_silent() {
        let mut list = DoublyList::new();
        list.insert_end(1);
        let log = with_event_log(&mut list);
        list.delete_value(99);
        assert!(log.borrow().is_empty());
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn delete_at_targets_exact_position() {
        let mut list = DoublyList::new();
        for v in [10, 20, 30] {
            list.insert_end(v);
        }
        list.delete_at(1);
        assert_eq!(list.debug_snapshot_data(), vec![10, 30]);
        list.delete_at(0);
        assert_eq!(list.debug_snapshot_data(), vec![30]);
        list.check_invariants().unwrap();
    }

    #[test]
    fn delete_at_out_of_range_is_silent() {
        let mut list = DoublyList::new();
        list.insert_end(1);
        list.insert_end(2);
        let log = with_event_log(&mut list);
        list.delete_at(10);
        assert_eq!(list.debug_snapshot_data(), vec![1, 2]);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn reverse_swaps_directions() {
        let mut list = DoublyList::new();
        for v in [1, 2, 3] {
            list.insert_end(v);
        }
        list.reverse();
        assert_eq!(list.debug_snapshot_data(), vec![3, 2, 1]);
        list.check_invariants().unwrap();
        list.reverse();
        assert_eq!(list.debug_snapshot_data(), vec![1, 2, 3]);
        list.check_invariants().unwrap();
    }

    #[test]
    fn reverse_emits_even_on_trivial_lists() {
        let mut list = DoublyList::new();
        let log = with_event_log(&mut list);
        list.reverse();
        list.insert_end(1);
        list.reverse();
        let ops: Vec<OpKind> = log.borrow().iter().map(|(op, _)| *op).collect();
        assert_eq!(
            ops,
            vec![OpKind::Reverse, OpKind::InsertEnd, OpKind::Reverse]
        );
    }

    #[test]
    fn identity_is_stable_across_reverse() {
        let mut list = DoublyList::new();
        list.insert_end(10);
        list.insert_end(20);
        let id = list.search(10).unwrap().id;
        list.reverse();
        assert_eq!(list.node(id).unwrap().data, 10);
    }

    #[test]
    fn clear_and_search_behave() {
        let mut list = DoublyList::new();
        list.insert_end(5);
        assert_eq!(list.search(5).unwrap().data, 5);
        assert!(list.search(6).is_none());
        list.clear();
        assert!(list.is_empty());
        assert!(list.search(5).is_none());
        list.check_invariants().unwrap();
    }
}
