//! Random replacement policy.

use rand::Rng;

use crate::common::{FrameId, PageId};
use crate::memory::replacer::Replacer;
use crate::memory::FrameTable;

/// Picks a frame uniformly at random from `[0, capacity)`.
///
/// The generator is injected so runs can be reproduced with a fixed seed.
/// Empty and occupied frames are equally likely to be chosen.
#[derive(Debug, Clone)]
pub struct RandomReplacer<R> {
    rng: R,
}

impl<R: Rng> RandomReplacer<R> {
    /// Create a replacer drawing from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Replacer for RandomReplacer<R> {
    fn select_victim(&mut self, table: &FrameTable, _incoming: PageId) -> FrameId {
        FrameId::new(self.rng.random_range(0..table.capacity()))
    }

    fn name(&self) -> &'static str {
        "random"
    }
}
