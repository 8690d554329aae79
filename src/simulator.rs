//! Simulator - drives a trace through the frame table.
//!
//! The [`Simulator`] provides:
//! - Hit/miss classification of each access
//! - Victim selection through a pluggable [`Replacer`]
//! - Running [`SimulationStats`]
//!
//! [`simulate`] wires a validated [`SimConfig`] to a trace file and runs it
//! to the end.

use log::{debug, info, trace};

use crate::common::{FrameId, PageId, Result, SimConfig};
use crate::memory::replacer::{Policy, Replacer};
use crate::memory::{FrameTable, SimulationStats};
use crate::trace::TraceReader;

/// What happened on a single access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessOutcome {
    /// The page was resident in `frame`.
    Hit { frame: FrameId },
    /// The page was brought into `frame`, displacing `evicted` if the
    /// frame was occupied.
    Miss {
        frame: FrameId,
        evicted: Option<PageId>,
    },
}

impl AccessOutcome {
    #[inline]
    pub fn is_hit(&self) -> bool {
        matches!(self, AccessOutcome::Hit { .. })
    }

    /// The frame the page ended up in.
    #[inline]
    pub fn frame(&self) -> FrameId {
        match *self {
            AccessOutcome::Hit { frame } | AccessOutcome::Miss { frame, .. } => frame,
        }
    }
}

/// Runs page accesses against a frame table under one policy.
///
/// # Usage
/// ```
/// use pagesim::{FifoReplacer, PageId, Simulator};
///
/// let mut sim = Simulator::new(4, FifoReplacer::new(4));
/// let trace = [1, 2, 3, 4, 1, 2, 3, 4, 5].map(PageId::new);
/// let stats = sim.run(trace);
///
/// assert_eq!(stats.hits, 4);
/// assert_eq!(stats.misses, 5);
/// assert_eq!(stats.faults, 5);
/// ```
#[derive(Debug)]
pub struct Simulator<P = Policy> {
    table: FrameTable,
    policy: P,
    stats: SimulationStats,
}

impl Simulator<Policy> {
    /// Build a simulator from a validated configuration.
    pub fn from_config(config: &SimConfig) -> Self {
        let capacity = config.frame_count();
        Self::new(capacity, Policy::new(config.policy, capacity, config.seed))
    }
}

impl<P: Replacer> Simulator<P> {
    /// Create a simulator with `capacity` empty frames.
    ///
    /// # Panics
    /// Panics if `capacity` is 0.
    pub fn new(capacity: usize, policy: P) -> Self {
        Self {
            table: FrameTable::new(capacity),
            policy,
            stats: SimulationStats::new(),
        }
    }

    /// Process one page access.
    ///
    /// A hit bumps the frame's recency. A miss counts a miss and a fault,
    /// asks the policy for a frame and installs the page there.
    pub fn process_access(&mut self, page_id: PageId) -> AccessOutcome {
        if let Some(frame) = self.table.lookup(page_id) {
            self.stats.record_hit();
            self.table.touch(frame);
            trace!("{} hit in {}", page_id, frame);
            return AccessOutcome::Hit { frame };
        }

        self.stats.record_miss();
        let frame = self.policy.select_victim(&self.table, page_id);
        let evicted = self.table.install(frame, page_id);

        match evicted {
            Some(old) => {
                self.stats.record_eviction();
                debug!("{} evicted {} from {}", page_id, old, frame);
            }
            None => trace!("{} miss, loaded into {}", page_id, frame),
        }

        AccessOutcome::Miss { frame, evicted }
    }

    /// Process every access of `trace` in order.
    ///
    /// Returns the counters after the last access.
    pub fn run<I>(&mut self, trace: I) -> SimulationStats
    where
        I: IntoIterator<Item = PageId>,
    {
        for page_id in trace {
            self.process_access(page_id);
        }
        self.stats
    }

    /// Current counters.
    #[inline]
    pub fn stats(&self) -> SimulationStats {
        self.stats
    }

    /// The frame table.
    #[inline]
    pub fn table(&self) -> &FrameTable {
        &self.table
    }

    /// The active policy.
    #[inline]
    pub fn policy(&self) -> &P {
        &self.policy
    }
}

/// Run the trace named by `config` to completion.
///
/// # Errors
/// - `Error::TraceOpen` if the trace file cannot be opened
/// - `Error::Io` if reading fails part way through
pub fn simulate(config: &SimConfig) -> Result<SimulationStats> {
    let trace = TraceReader::open(&config.trace_path)?;
    let mut sim = Simulator::from_config(config);

    info!(
        "simulating {} with policy {}, {} frames ({} B memory / {} B pages)",
        config.trace_path.display(),
        sim.policy().name(),
        sim.table().capacity(),
        config.memory_size,
        config.page_size
    );

    for page_id in trace {
        sim.process_access(page_id?);
    }

    let stats = sim.stats();
    info!("finished: {}", stats);
    Ok(stats)
}
