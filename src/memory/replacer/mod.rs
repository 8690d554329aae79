//! Replacement policy implementations (replacers).
//!
//! Implements:
//! - [`FifoReplacer`] - rotating cursor over slots
//! - [`LruReplacer`] - lowest recency counter wins
//! - [`RandomReplacer`] - uniform pick from an injected RNG
//!
//! A [`Policy`] is the closed set of the three, resolved once from a
//! [`PolicyKind`] when a run is set up.

mod fifo;
mod lru;
mod random;

use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::common::{Error, FrameId, PageId};
use crate::memory::FrameTable;

pub use fifo::FifoReplacer;
pub use lru::LruReplacer;
pub use random::RandomReplacer;

/// Picks the frame that receives a faulted-in page.
///
/// Implementations only read the table. The caller installs the page into
/// the returned frame, which must be `< table.capacity()`.
pub trait Replacer {
    /// Select the frame to fill with `incoming`.
    fn select_victim(&mut self, table: &FrameTable, incoming: PageId) -> FrameId;

    /// Short policy name, as accepted on the command line.
    fn name(&self) -> &'static str;
}

/// The policy names a run can be configured with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolicyKind {
    Fifo,
    Lru,
    Random,
}

impl PolicyKind {
    pub const ALL: [PolicyKind; 3] = [PolicyKind::Fifo, PolicyKind::Lru, PolicyKind::Random];

    /// The lowercase name of the policy.
    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyKind::Fifo => "fifo",
            PolicyKind::Lru => "lru",
            PolicyKind::Random => "random",
        }
    }
}

impl FromStr for PolicyKind {
    type Err = Error;

    /// Names are matched exactly (case-sensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fifo" => Ok(PolicyKind::Fifo),
            "lru" => Ok(PolicyKind::Lru),
            "random" => Ok(PolicyKind::Random),
            other => Err(Error::UnknownPolicy(other.to_string())),
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A configured replacement policy, dispatched once per miss.
#[derive(Debug)]
pub enum Policy {
    Fifo(FifoReplacer),
    Lru(LruReplacer),
    Random(RandomReplacer<StdRng>),
}

impl Policy {
    /// Build a fresh policy for a table of `capacity` frames.
    ///
    /// `seed` only matters for [`PolicyKind::Random`]. Without one, the
    /// generator is seeded from the OS here, once per run.
    pub fn new(kind: PolicyKind, capacity: usize, seed: Option<u64>) -> Self {
        match kind {
            PolicyKind::Fifo => Policy::Fifo(FifoReplacer::new(capacity)),
            PolicyKind::Lru => Policy::Lru(LruReplacer::new()),
            PolicyKind::Random => {
                let rng = match seed {
                    Some(seed) => StdRng::seed_from_u64(seed),
                    None => StdRng::from_os_rng(),
                };
                Policy::Random(RandomReplacer::new(rng))
            }
        }
    }

    /// Which variant this is.
    pub fn kind(&self) -> PolicyKind {
        match self {
            Policy::Fifo(_) => PolicyKind::Fifo,
            Policy::Lru(_) => PolicyKind::Lru,
            Policy::Random(_) => PolicyKind::Random,
        }
    }
}

impl Replacer for Policy {
    fn select_victim(&mut self, table: &FrameTable, incoming: PageId) -> FrameId {
        match self {
            Policy::Fifo(r) => r.select_victim(table, incoming),
            Policy::Lru(r) => r.select_victim(table, incoming),
            Policy::Random(r) => r.select_victim(table, incoming),
        }
    }

    fn name(&self) -> &'static str {
        self.kind().as_str()
    }
}
