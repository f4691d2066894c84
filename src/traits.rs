//! # List Engine Contract
//!
//! This module defines [`ListEngine`], the single mutation contract all three
//! topology variants implement. Callers that only need the operation surface
//! program against the trait (or the [`List`](crate::builder::List) enum
//! dispatcher) and stay agnostic of link layout.
//!
//! ## Architecture
//!
//! ```text
//!                      ┌─────────────────────────────────────────┐
//!                      │             ListEngine                  │
//!                      │                                         │
//!                      │  insert_start(i64)                      │
//!                      │  insert_end(i64)                        │
//!                      │  insert_at(i64, usize)                  │
//!                      │  delete_value(i64)                      │
//!                      │  delete_at(usize)                       │
//!                      │  reverse()                              │
//!                      │  search(i64) → Option<NodeView>         │
//!                      │  clear()                                │
//!                      │  nodes() → Vec<NodeView>                │
//!                      │  node(NodeId) → Option<NodeView>        │
//!                      │  len() / is_empty()                     │
//!                      │  add_change_listener(ChangeListener)    │
//!                      │  check_invariants() → Result<(), _>     │
//!                      └──────────────────┬──────────────────────┘
//!                                         │
//!             ┌───────────────────────────┼───────────────────────────┐
//!             ▼                           ▼                           ▼
//!      ┌─────────────┐            ┌─────────────┐            ┌──────────────┐
//!      │ SinglyList  │            │ DoublyList  │            │ CircularList │
//!      │ next only   │            │ next + prev │            │ tail → head  │
//!      │ null tail   │            │ null tail   │            │ cyclic next  │
//!      └─────────────┘            └─────────────┘            └──────────────┘
//! ```
//!
//! ## Contract
//!
//! Every method is total for well-typed input: boundary conditions (empty
//! list, out-of-range position, absent value) degrade to a no-op or a clamped
//! alternative, never an error or panic. Each completed mutation emits exactly
//! one [`ChangeEvent`](crate::notify::ChangeEvent) synchronously; the silent
//! branches are spelled out per method.

use crate::error::InvariantError;
use crate::node::{NodeId, NodeView};
use crate::notify::ChangeListener;

/// The variant-polymorphic mutation contract shared by all list topologies.
///
/// Implementations assume external serialization: no internal locking, one
/// logical caller at a time.
pub trait ListEngine {
    /// Inserts `value` as the new head. Emits `InsertStart`.
    fn insert_start(&mut self, value: i64);

    /// Appends `value` after the tail, found by full traversal from the head
    /// (no tail cache; O(n)). On an empty list this is equivalent to
    /// [`insert_start`](ListEngine::insert_start) except that it emits
    /// `InsertEnd`.
    fn insert_end(&mut self, value: i64);

    /// Inserts `value` at `position` (0-based).
    ///
    /// `position == 0` delegates to [`insert_start`](ListEngine::insert_start).
    /// A walk that runs off the end degrades to
    /// [`insert_end`](ListEngine::insert_end) (null-terminated variants) or
    /// clamps at the tail boundary (circular). Emits `InsertAt` when the node
    /// lands mid-chain; delegated paths emit the delegate's event.
    fn insert_at(&mut self, value: i64, position: usize);

    /// Removes the first node whose data equals `value`, in head-to-tail scan
    /// order (circular: one full cycle). Silent no-op when no node matches.
    /// Emits `DeleteValue` with the removed node's id.
    fn delete_value(&mut self, value: i64);

    /// Removes the node at `position` (0-based). Out-of-range positions are a
    /// silent no-op. Emits `DeleteAt` with the removed node's id.
    fn delete_at(&mut self, position: usize);

    /// Reverses link direction in place; the head becomes the former tail.
    /// Emits `Reverse` with no node id. The circular variant is a silent
    /// no-op on lists of fewer than two nodes.
    fn reverse(&mut self);

    /// Returns the first node whose data equals `value`, or `None`. Pure
    /// query: no mutation, no event.
    fn search(&self, value: i64) -> Option<NodeView>;

    /// Discards the entire chain. Emits `Clear` with no node id.
    fn clear(&mut self);

    /// Order-preserving snapshot from head to tail (circular: one full cycle,
    /// each node exactly once). Restartable; each call re-traverses.
    fn nodes(&self) -> Vec<NodeView>;

    /// Looks up a live node by its stable identity. Pure query.
    fn node(&self, id: NodeId) -> Option<NodeView>;

    /// Number of nodes currently in the chain.
    fn len(&self) -> usize;

    /// Returns `true` if the head is absent.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Registers a change listener; listeners fire synchronously, in
    /// registration order, on every completed mutation.
    fn add_change_listener(&mut self, listener: ChangeListener);

    /// Validates the variant's structural invariants (termination, link
    /// coherence, id-index consistency, cycle closure for the circular
    /// variant). For tests and debug tooling; never called by mutations.
    fn check_invariants(&self) -> Result<(), InvariantError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::Variant;

    #[test]
    fn trait_is_object_safe() {
        for variant in [Variant::Singly, Variant::Doubly, Variant::Circular] {
            let mut engine: Box<dyn ListEngine> = variant.build_boxed();
            engine.insert_start(1);
            assert_eq!(engine.len(), 1);
            assert!(!engine.is_empty());
            assert!(engine.check_invariants().is_ok());
        }
    }

    #[test]
    fn default_is_empty_tracks_len() {
        let mut engine = crate::engine::DoublyList::new();
        assert!(engine.is_empty());
        engine.insert_end(5);
        assert!(!engine.is_empty());
        engine.clear();
        assert!(engine.is_empty());
    }
}
