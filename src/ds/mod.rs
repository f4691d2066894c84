pub mod op_history;
pub mod slot_arena;

pub use op_history::OpHistory;
pub use slot_arena::{SlotArena, SlotId};
