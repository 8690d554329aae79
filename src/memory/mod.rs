//! Simulated physical memory.
//!
//! A fixed table of frames, each able to hold one page identifier, plus
//! the policies that decide where a faulted-in page goes.
//!
//! # Components
//! - [`FrameTable`] - The fixed set of frames for one run
//! - [`Frame`] - A slot holding a page id + recency counter
//! - [`SimulationStats`] - Hit/miss/fault counters
//! - [`replacer`] - Replacement policy implementations

mod frame;
mod frame_table;
pub mod replacer;
mod stats;

pub use frame::Frame;
pub use frame_table::FrameTable;
pub use stats::SimulationStats;
