//! Simulation statistics tracking.

use std::fmt;

/// Counters tracked over one simulation run.
///
/// Plain integers: a run is single-threaded and the simulator owns its
/// stats exclusively. Counters only ever go up.
///
/// Every miss is also counted as a fault, so `misses == faults` at all
/// times. `evictions` counts the misses that displaced a resident page.
///
/// # Example
/// ```
/// use pagesim::SimulationStats;
///
/// let mut stats = SimulationStats::new();
/// stats.record_hit();
/// stats.record_miss();
/// assert_eq!(stats.total_accesses(), 2);
/// assert_eq!(stats.hit_rate(), 0.5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimulationStats {
    /// Accesses whose page was already resident.
    pub hits: u64,

    /// Accesses whose page had to be brought in.
    pub misses: u64,

    /// Page faults (always equal to `misses`).
    pub faults: u64,

    /// Misses that replaced an occupied frame.
    pub evictions: u64,
}

impl SimulationStats {
    /// Create a new stats tracker with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a hit.
    #[inline]
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    /// Count a miss and its fault.
    #[inline]
    pub fn record_miss(&mut self) {
        self.misses += 1;
        self.faults += 1;
    }

    /// Count a miss that displaced a resident page.
    #[inline]
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    /// Number of trace entries processed.
    pub fn total_accesses(&self) -> u64 {
        self.hits + self.misses
    }

    /// Calculate hit rate (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        let total = self.total_accesses();
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

impl fmt::Display for SimulationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ hits: {}, misses: {}, faults: {}, evictions: {}, hit_rate: {:.2}% }}",
            self.hits,
            self.misses,
            self.faults,
            self.evictions,
            self.hit_rate() * 100.0
        )
    }
}
