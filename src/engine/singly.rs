//! # Singly Linked List Engine
//!
//! Forward-only, null-terminated chain with arena-backed nodes and an id
//! index for O(1) lookup by [`NodeId`].
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────────┐
//!   │                          SinglyList                              │
//!   │                                                                  │
//!   │   ┌────────────────────────────────────────────────────────────┐ │
//!   │   │  FxHashMap<NodeId, SlotId> (id index)                      │ │
//!   │   └────────────────────────────────────────────────────────────┘ │
//!   │                                                                  │
//!   │   ┌────────────────────────────────────────────────────────────┐ │
//!   │   │  SlotArena<Slot> (nodes live here)                         │ │
//!   │   │                                                            │ │
//!   │   │  head ──► [ id:1 ] ──► [ id:2 ] ──► [ id:3 ] ──► ∅         │ │
//!   │   │           data:10      data:20      data:30                │ │
//!   │   └────────────────────────────────────────────────────────────┘ │
//!   │                                                                  │
//!   │   ┌────────────────────────────────────────────────────────────┐ │
//!   │   │  ChangeListeners (synchronous broadcast per mutation)      │ │
//!   │   └────────────────────────────────────────────────────────────┘ │
//!   └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants (hold after every public mutation)
//!
//! - The last reachable node's `next` is `None`.
//! - The id index and the arena agree: every live node appears in both.
//! - Node identity never changes across relinking; only links move.
//!
//! ## Example Usage
//!
//! ```
//! use chainkit::ListEngine;
//! use chainkit::engine::SinglyList;
//!
//! let mut list = SinglyList::new();
//! list.insert_end(1);
//! list.insert_end(2);
//! list.insert_end(3);
//! let data: Vec<i64> = list.nodes().iter().map(|n| n.data).collect();
//! assert_eq!(data, vec![1, 2, 3]);
//!
//! list.reverse();
//! let data: Vec<i64> = list.nodes().iter().map(|n| n.data).collect();
//! assert_eq!(data, vec![3, 2, 1]);
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
}

/// Forward-only, null-terminated list engine.
#[derive(Debug)]
pub struct SinglyList {
    arena: SlotArena<Slot>,
    head: Option<SlotId>,
    index: FxHashMap<NodeId, SlotId>,
    ids: NodeIdGen,
    listeners: ChangeListeners,
}

impl SinglyList {
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

    /// Unlinks and frees the successor of `sid`, returning the freed id.
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

    fn remove_head(&mut self) -> Option<NodeId> {
        let head = self.head?;
        let next = self.next_of(head);
        let slot = self.arena.remove(head)?;
        self.index.remove(&slot.id);
        self.head = next;
        Some(slot.id)
    }

    /// Walks `steps` nodes from the head, stopping early at the end.
    ///
    /// Mirrors the insertion/deletion walk: the return value is `None` when
    /// the walk ran off the end of the chain.
    fn walk(&self, steps: usize) -> Option<SlotId> {
        let mut cur = self.head;
        for _ in 0..steps {
            let sid = cur?;
            cur = self.next_of(sid);
        }
        cur
    }

    /// Validates chain termination, length agreement, and index coherence.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        let mut count = 0usize;
        let mut cur = self.head;
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
            if self.index.get(&slot.id) != Some(&sid) {
                return Err(InvariantError::new(format!(
                    "id index out of sync for node {}",
                    slot.id
                )));
            }
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

impl Default for SinglyList {
    fn default() -> Self {
        Self::new()
    }
}

impl ListEngine for SinglyList {
    fn insert_start(&mut self, value: i64) {
        let old_head = self.head;
        let (id, sid) = self.mint(value, old_head);
        self.head = Some(sid);
        self.listeners.emit(OpKind::InsertStart, Some(id));
    }

    fn insert_end(&mut self, value: i64) {
        match self.head {
            None => {
                let (id, sid) = self.mint(value, None);
                self.head = Some(sid);
                self.listeners.emit(OpKind::InsertEnd, Some(id));
            }
            Some(head) => {
                let mut tail = head;
                while let Some(next) = self.next_of(tail) {
                    tail = next;
                }
                let (id, sid) = self.mint(value, None);
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
        // Walk to the node after which the new one goes; running off the
        // end degrades to an append.
        match self.walk(position - 1) {
            None => self.insert_end(value),
            Some(prev) => {
                let after = self.next_of(prev);
                let (id, sid) = self.mint(value, after);
                if let Some(slot) = self.arena.get_mut(prev) {
                    slot.next = Some(sid);
                }
                self.listeners.emit(OpKind::InsertAt, Some(id));
            }
        }
    }

    fn delete_value(&mut self, value: i64) {
        let Some(head) = self.head else { return };
        if self.arena.get(head).map(|slot| slot.data) == Some(value) {
            if let Some(id) = self.remove_head() {
                self.listeners.emit(OpKind::DeleteValue, Some(id));
            }
            return;
        }
        let mut cur = head;
        loop {
            let Some(next) = self.next_of(cur) else { return };
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
        if self.head.is_none() {
            return;
        }
        if position == 0 {
            if let Some(id) = self.remove_head() {
                self.listeners.emit(OpKind::DeleteAt, Some(id));
            }
            return;
        }
        if let Some(prev) = self.walk(position - 1) {
            if let Some(id) = self.remove_after(prev) {
                self.listeners.emit(OpKind::DeleteAt, Some(id));
            }
        }
    }

    fn reverse(&mut self) {
        let mut prev: Option<SlotId> = None;
        let mut cur = self.head;
        while let Some(sid) = cur {
            let next = self.next_of(sid);
            if let Some(slot) = self.arena.get_mut(sid) {
                slot.next = prev;
            }
            prev = Some(sid);
            cur = next;
        }
        self.head = prev;
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
        SinglyList::len(self)
    }

    fn add_change_listener(&mut self, listener: ChangeListener) {
        self.listeners.subscribe(listener);
    }

    fn check_invariants(&self) -> Result<(), InvariantError> {
        SinglyList::check_invariants(self)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    fn with_event_log(list: &mut SinglyList) -> Rc<RefCell<Vec<(OpKind, Option<NodeId>)>>> {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        list.add_change_listener(Box::new(move |event| {
            sink.borrow_mut().push((event.op, event.node));
        }));
        log
    }

    #[test]
    fn insert_start_prepends() {
        let mut list = SinglyList::new();
        list.insert_start(2);
        list.insert_start(1);
        assert_eq!(list.debug_snapshot_data(), vec![1, 2]);
        list.check_invariants().unwrap();
    }

    #[test]
    fn insert_end_appends_in_order() {
        let mut list = SinglyList::new();
        list.insert_end(1);
        list.insert_end(2);
        list.insert_end(3);
        assert_eq!(list.debug_snapshot_data(), vec![1, 2, 3]);
        list.check_invariants().unwrap();
    }

    #[test]
    fn insert_at_zero_is_insert_start() {
        let mut list = SinglyList::new();
        let log = with_event_log(&mut list);
        list.insert_at(9, 0);
        assert_eq!(list.debug_snapshot_data(), vec![9]);
        assert_eq!(log.borrow()[0].0, OpKind::InsertStart);
    }

    #[test]
    fn insert_at_mid_chain() {
        let mut list = SinglyList::new();
        list.insert_end(1);
        list.insert_end(3);
        let log = with_event_log(&mut list);
        list.insert_at(2, 1);
        assert_eq!(list.debug_snapshot_data(), vec![1, 2, 3]);
        assert_eq!(log.borrow()[0].0, OpKind::InsertAt);
        list.check_invariants().unwrap();
    }

    #[test]
    fn insert_at_past_end_degrades_to_append() {
        let mut list = SinglyList::new();
        list.insert_end(1);
        let log = with_event_log(&mut list);
        list.insert_at(2, 50);
        assert_eq!(list.debug_snapshot_data(), vec![1, 2]);
        assert_eq!(log.borrow()[0].0, OpKind::InsertEnd);
    }

    #[test]
    fn insert_at_on_empty_list_appends() {
        let mut list = SinglyList::new();
        let log = with_event_log(&mut list);
        list.insert_at(7, 3);
        assert_eq!(list.debug_snapshot_data(), vec![7]);
        assert_eq!(log.borrow()[0].0, OpKind::InsertEnd);
    }

    #[test]
    fn delete_value_removes_first_match_only() {
        let mut list = SinglyList::new();
        for v in [1, 2, 2, 3] {
            list.insert_end(v);
        }
        list.delete_value(2);
        assert_eq!(list.debug_snapshot_data(), vec![1, 2, 3]);
        list.check_invariants().unwrap();
    }

    #[test]
    fn delete_value_at_head_repoints_head() {
        let mut list = SinglyList::new();
        list.insert_end(1);
        list.insert_end(2);
        list.delete_value(1);
        assert_eq!(list.debug_snapshot_data(), vec![2]);
        list.check_invariants().unwrap();
    }

    #[test]
    fn delete_value_without_match_is_silent() {
        let mut list = SinglyList::new();
        list.insert_end(1);
        let log = with_event_log(&mut list);
        list.delete_value(99);
        assert_eq!(list.debug_snapshot_data(), vec![1]);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn delete_at_bounds() {
        let mut list = SinglyList::new();
        list.insert_end(1);
        list.insert_end(2);
        let log = with_event_log(&mut list);

        list.delete_at(10); // out of range: silent no-op
        assert_eq!(list.debug_snapshot_data(), vec![1, 2]);
        assert!(log.borrow().is_empty());

        list.delete_at(1);
        assert_eq!(list.debug_snapshot_data(), vec![1]);
        list.delete_at(0);
        assert!(list.is_empty());
        assert_eq!(log.borrow().len(), 2);
        list.check_invariants().unwrap();
    }

    #[test]
    fn reverse_is_involution() {
        let mut list = SinglyList::new();
        for v in [1, 2, 3, 4] {
            list.insert_end(v);
        }
        list.reverse();
        assert_eq!(list.debug_snapshot_data(), vec![4, 3, 2, 1]);
        list.reverse();
        assert_eq!(list.debug_snapshot_data(), vec![1, 2, 3, 4]);
        list.check_invariants().unwrap();
    }

    #[test]
    fn reverse_emits_even_on_empty_list() {
        let mut list = SinglyList::new();
        let log = with_event_log(&mut list);
        list.reverse();
        assert_eq!(log.borrow().as_slice(), &[(OpKind::Reverse, None)]);
    }

    #[test]
    fn search_finds_first_match_or_none() {
        let mut list = SinglyList::new();
        list.insert_end(5);
        list.insert_end(7);
        let hit = list.search(7).unwrap();
        assert_eq!(hit.data, 7);
        assert!(list.search(42).is_none());
    }

    #[test]
    fn search_does_not_emit() {
        let mut list = SinglyList::new();
        list.insert_end(5);
        let log = with_event_log(&mut list);
        let _ = list.search(5);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn identity_is_stable_across_relocation() {
        let mut list = SinglyList::new();
        list.insert_end(10);
        list.insert_end(20);
        let id = list.search(20).unwrap().id;
        list.insert_start(5);
        list.reverse();
        assert_eq!(list.search(20).unwrap().id, id);
        assert_eq!(list.node(id).unwrap().data, 20);
    }

    #[test]
    fn clear_empties_and_emits() {
        let mut list = SinglyList::new();
        list.insert_end(1);
        let log = with_event_log(&mut list);
        list.clear();
        assert!(list.is_empty());
        assert!(list.nodes().is_empty());
        assert_eq!(log.borrow().as_slice(), &[(OpKind::Clear, None)]);
        list.check_invariants().unwrap();
    }

    #[test]
    fn events_carry_the_affected_node_id() {
        let mut list = SinglyList::new();
        let log = with_event_log(&mut list);
        list.insert_start(1);
        let id = list.nodes()[0].id;
        list.delete_value(1);
        let events = log.borrow();
        assert_eq!(events[0], (OpKind::InsertStart, Some(id)));
        assert_eq!(events[1], (OpKind::DeleteValue, Some(id)));
    }
}
