//! Node identity and read-only node views.
//!
//! Every node carries a [`NodeId`] assigned once at creation and never
//! reassigned, no matter how the chain is relinked around it. The id is the
//! correlation key the presentation layer uses to match change-notification
//! events to on-screen cells, so it must stay stable while `next`/`prev`
//! links churn underneath it.
//!
//! Ids come from a monotonic per-engine counter rather than a
//! timestamp-plus-random composition: the counter is collision-free by
//! construction and makes test output deterministic.
//!
//! ## Example Usage
//!
//! ```
//! use chainkit::ListEngine;
//! use chainkit::engine::SinglyList;
//!
//! let mut list = SinglyList::new();
//! list.insert_end(7);
//! let view = list.search(7).unwrap();
//! assert_eq!(view.data, 7);
//! // The id survives relocation within the chain.
//! list.insert_start(3);
//! list.reverse();
//! assert_eq!(list.search(7).unwrap().id, view.id);
//! ```

use std::fmt;

/// Stable identity of a list node.
///
/// Unique within the owning engine for the lifetime of the process. Renders
/// as a plain integer string for the notification wire surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

impl NodeId {
    /// Returns the raw counter value behind this id.
    #[inline]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Read-only snapshot of a node: its identity and payload.
///
/// Returned by `nodes()`, `search()`, and `node()` on the engines. A view is
/// a copy taken at call time, not a live cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeView {
    /// Stable identity of the node.
    pub id: NodeId,
    /// Payload value.
    pub data: i64,
}

/// Monotonic id mint; one per engine.
#[derive(Debug, Default)]
pub(crate) struct NodeIdGen {
    next: u64,
}

impl NodeIdGen {
    pub(crate) fn new() -> Self {
        Self { next: 0 }
    }

    /// Issues the next id. Ids start at 1 and never repeat.
    pub(crate) fn mint(&mut self) -> NodeId {
        self.next += 1;
        NodeId(self.next)
    }
}
