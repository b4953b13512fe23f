//! Topic-based event distribution.
//!
//! Core lifecycle events are buffered inside the engine during a turn and
//! drained into the [`crate::session::StepReport`]; the session republishes
//! them here. Subscribers observe, they never feed back into the turn.
mod bus;

pub use bus::{EventBus, Topic};
