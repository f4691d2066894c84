//! The three list-engine variants.
//!
//! All variants share one mutation contract
//! ([`ListEngine`](crate::traits::ListEngine)) over different link
//! topologies; [`crate::builder::List`] dispatches over them at runtime.

pub mod circular;
pub mod doubly;
pub mod singly;

pub use circular::CircularList;
pub use doubly::DoublyList;
pub use singly::SinglyList;
