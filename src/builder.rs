//! Runtime variant selection over the three list topologies.
//!
//! Provides a simple API to create a list of any topology and drive it
//! through one concrete type, so a caller can switch the active structure at
//! runtime without generics or boxing.
//!
//! ## Example
//!
//! ```rust
//! use chainkit::ListEngine;
//! use chainkit::builder::{List, Variant};
//!
//! let mut list = List::new(Variant::Circular);
//! list.insert_end(5);
//! list.insert_end(7);
//! assert_eq!(list.len(), 2);
//! assert_eq!(list.variant(), Variant::Circular);
//! ```

use crate::engine::{CircularList, DoublyList, SinglyList};
use crate::error::InvariantError;
use crate::node::{NodeId, NodeView};
use crate::notify::ChangeListener;
use crate::traits::ListEngine;

/// Available list topologies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Forward-only, null-terminated.
    Singly,
    /// Forward and backward links, null-terminated.
    Doubly,
    /// Forward-only, tail links back to the head.
    Circular,
}

impl Variant {
    /// Builds a boxed engine of this topology for trait-object callers.
    pub fn build_boxed(self) -> Box<dyn ListEngine> {
        match self {
            Variant::Singly => Box::new(SinglyList::new()),
            Variant::Doubly => Box::new(DoublyList::new()),
            Variant::Circular => Box::new(CircularList::new()),
        }
    }
}

/// Unified list wrapper that provides a consistent API regardless of
/// topology.
pub struct List {
    inner: ListInner,
}

enum ListInner {
    Singly(SinglyList),
    Doubly(DoublyList),
    Circular(CircularList),
}

impl List {
    /// Creates an empty list of the given topology.
    pub fn new(variant: Variant) -> Self {
        let inner = match variant {
            Variant::Singly => ListInner::Singly(SinglyList::new()),
            Variant::Doubly => ListInner::Doubly(DoublyList::new()),
            Variant::Circular => ListInner::Circular(CircularList::new()),
        };
        Self { inner }
    }

    /// Which topology this list uses.
    pub fn variant(&self) -> Variant {
        match self.inner {
            ListInner::Singly(_) => Variant::Singly,
            ListInner::Doubly(_) => Variant::Doubly,
            ListInner::Circular(_) => Variant::Circular,
        }
    }

    fn core(&self) -> &dyn ListEngine {
        match &self.inner {
            ListInner::Singly(list) => list,
            ListInner::Doubly(list) => list,
            ListInner::Circular(list) => list,
        }
    }

    fn core_mut(&mut self) -> &mut dyn ListEngine {
        match &mut self.inner {
            ListInner::Singly(list) => list,
            ListInner::Doubly(list) => list,
            ListInner::Circular(list) => list,
        }
    }
}

impl ListEngine for List {
    fn insert_start(&mut self, value: i64) {
        self.core_mut().insert_start(value);
    }

    fn insert_end(&mut self, value: i64) {
        self.core_mut().insert_end(value);
    }

    fn insert_at(&mut self, value: i64, position: usize) {
        self.core_mut().insert_at(value, position);
    }

    fn delete_value(&mut self, value: i64) {
        self.core_mut().delete_value(value);
    }

    fn delete_at(&mut self, position: usize) {
        self.core_mut().delete_at(position);
    }

    fn reverse(&mut self) {
        self.core_mut().reverse();
    }

    fn search(&self, value: i64) -> Option<NodeView> {
        self.core().search(value)
    }

    fn clear(&mut self) {
        self.core_mut().clear();
    }

    fn nodes(&self) -> Vec<NodeView> {
        self.core().nodes()
    }

    fn node(&self, id: NodeId) -> Option<NodeView> {
        self.core().node(id)
    }

    fn len(&self) -> usize {
        self.core().len()
    }

    fn add_change_listener(&mut self, listener: ChangeListener) {
        self.core_mut().add_change_listener(listener);
    }

    fn check_invariants(&self) -> Result<(), InvariantError> {
        self.core().check_invariants()
    }
}
