//! pagesim - A trace-driven page replacement simulator.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            pagesim                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │   CLI (main.rs) → SimConfig (common/config) → simulate()        │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │           TraceReader (trace)  →  PageId stream          │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                 Simulator (simulator)                    │   │
//! │  │   lookup → hit: touch   |   miss: select_victim+install  │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                  Memory (memory/)                        │   │
//! │  │   FrameTable + Frame + SimulationStats                   │   │
//! │  │   ┌─────────────────────────────────────────────────┐   │   │
//! │  │   │      Replacement Policies: FIFO | LRU | Random   │   │   │
//! │  │   └─────────────────────────────────────────────────┘   │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │               write_report (report) → stdout                    │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, FrameId, Error, config)
//! - [`memory`] - Frame table, statistics and replacement policies
//! - [`simulator`] - Per-access state machine and the run driver
//! - [`trace`] - Trace file parsing
//! - [`report`] - End-of-run report
//!
//! # Quick Start
//! ```no_run
//! use pagesim::{simulate, SimConfig};
//!
//! let config = SimConfig::new("lru", "trace.txt", 4, 1024).unwrap();
//! let stats = simulate(&config).unwrap();
//! println!("{}", stats);
//! ```

pub mod common;
pub mod memory;
pub mod report;
pub mod simulator;
pub mod trace;

// Re-export commonly used items at crate root for convenience
pub use common::{Error, FrameId, PageId, Result, SimConfig};

pub use memory::replacer::{
    FifoReplacer, LruReplacer, Policy, PolicyKind, RandomReplacer, Replacer,
};
pub use memory::{Frame, FrameTable, SimulationStats};
pub use report::write_report;
pub use simulator::{simulate, AccessOutcome, Simulator};
pub use trace::TraceReader;
