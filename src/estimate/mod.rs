//! Cycle-time Estimation
//!
//! Modal machine state, group records and the single-pass engine tying them
//! together.

pub mod engine;
pub mod group;
pub mod state;

pub use engine::{estimate_line, parse, GroupAccumulator};
pub use group::{FeedValue, GroupRecord, NO_TOOL};
pub use state::{MachineState, Move};
