//! Core data models for the scheduler.

mod matches;
mod pair;
mod player;
mod stats;

pub use matches::*;
pub use pair::*;
pub use player::*;
pub use stats::*;
