//! Convenience re-exports for common usage.

pub use crate::builder::{List, Variant};
pub use crate::engine::{CircularList, DoublyList, SinglyList};
pub use crate::node::{NodeId, NodeView};
pub use crate::notify::ChangeEvent;
pub use crate::op::OpKind;
pub use crate::predict::{Prediction, Predictor};
pub use crate::traits::ListEngine;
