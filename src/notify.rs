//! Synchronous change-notification channel.
//!
//! Each engine owns a [`ChangeListeners`] registry. Every completed mutation
//! emits exactly one [`ChangeEvent`] to all registered listeners, in
//! registration order, before the mutation method returns. Silent no-op
//! branches (unmatched `delete_value`, out-of-range `delete_at`, circular
//! `reverse` of fewer than two nodes) emit nothing.
//!
//! There is no queue behind this: no persistence, no replay, no back-pressure.
//! Listeners run on the caller's stack and must not block.
//!
//! ## Example Usage
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use chainkit::ListEngine;
//! use chainkit::engine::SinglyList;
//! use chainkit::op::OpKind;
//!
//! let mut list = SinglyList::new();
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let sink = Rc::clone(&seen);
//! list.add_change_listener(Box::new(move |event| {
//!     sink.borrow_mut().push(event.op.tag());
//! }));
//!
//! list.insert_start(1);
//! list.clear();
//! assert_eq!(*seen.borrow(), vec!["ins-start", "clear"]);
//! ```

use std::fmt;

use crate::node::NodeId;
use crate::op::OpKind;

/// A completed mutation, as broadcast to listeners.
///
/// `node` is the affected node's identity; `Reverse` and `Clear` carry no
/// node id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangeEvent {
    /// Which operation completed.
    pub op: OpKind,
    /// Identity of the affected node, when one exists.
    pub node: Option<NodeId>,
}

/// Boxed listener callback invoked synchronously on every mutation.
pub type ChangeListener = Box<dyn FnMut(ChangeEvent)>;

/// Ordered one-to-many listener registry.
#[derive(Default)]
pub struct ChangeListeners {
    listeners: Vec<ChangeListener>,
}

impl ChangeListeners {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }

    /// Registers a listener. Listeners fire in registration order.
    pub fn subscribe(&mut self, listener: ChangeListener) {
        self.listeners.push(listener);
    }

    /// Number of registered listeners.
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Returns `true` if no listener is registered.
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Invokes every listener with the event, in registration order.
    pub fn emit(&mut self, op: OpKind, node: Option<NodeId>) {
        let event = ChangeEvent { op, node };
        for listener in &mut self.listeners {
            listener(event);
        }
    }
}

impl fmt::Debug for ChangeListeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeListeners")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
