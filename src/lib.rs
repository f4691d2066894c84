//! chainkit: linked-list engines with stable node handles, synchronous
//! change notification, and statistical next-operation prediction.
//!
//! Three list topologies — [`SinglyList`], [`DoublyList`], [`CircularList`]
//! — implement one mutation contract ([`ListEngine`]), broadcast every
//! completed mutation to registered listeners, and hand out [`NodeId`]s that
//! stay stable however the chain is relinked. An independent [`Predictor`]
//! consumes the same operation stream and ranks likely next operations from
//! frequency and first-order transition statistics.
//!
//! ```
//! use chainkit::prelude::*;
//!
//! let mut list = List::new(Variant::Singly);
//! let mut predictor = Predictor::new();
//!
//! list.insert_end(1);
//! predictor.record_operation(OpKind::InsertEnd, 1);
//! list.insert_end(2);
//! predictor.record_operation(OpKind::InsertEnd, 2);
//!
//! let data: Vec<i64> = list.nodes().iter().map(|n| n.data).collect();
//! assert_eq!(data, vec![1, 2]);
//! assert_eq!(predictor.predictions()[0].operation, OpKind::InsertEnd);
//! ```

pub mod builder;
pub mod ds;
pub mod engine;
pub mod error;
pub mod node;
pub mod notify;
pub mod op;
pub mod predict;
pub mod prelude;
pub mod traits;

pub use crate::builder::{List, Variant};
pub use crate::ds::{OpHistory, SlotArena, SlotId};
pub use crate::engine::{CircularList, DoublyList, SinglyList};
pub use crate::error::InvariantError;
pub use crate::node::{NodeId, NodeView};
pub use crate::notify::{ChangeEvent, ChangeListener, ChangeListeners};
pub use crate::op::OpKind;
pub use crate::predict::{MAX_HISTORY, MAX_PREDICTIONS, Prediction, Predictor};
pub use crate::traits::ListEngine;
