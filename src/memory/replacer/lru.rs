//! LRU (Least Recently Used) replacement policy.

use crate::common::{FrameId, PageId};
use crate::memory::replacer::Replacer;
use crate::memory::FrameTable;

/// Picks the frame with the smallest recency counter.
///
/// The scan starts at frame 0 and only moves on a strictly smaller
/// counter, so ties go to the lowest index. Empty frames sit at recency 0
/// and any filled frame is at least 1, which makes the policy fill empty
/// slots in ascending order before it evicts anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct LruReplacer;

impl LruReplacer {
    pub fn new() -> Self {
        LruReplacer
    }
}

impl Replacer for LruReplacer {
    fn select_victim(&mut self, table: &FrameTable, _incoming: PageId) -> FrameId {
        let frames = table.frames();
        let mut victim = 0;
        for (i, frame) in frames.iter().enumerate().skip(1) {
            if frame.recency() < frames[victim].recency() {
                victim = i;
            }
        }
        FrameId::new(victim)
    }

    fn name(&self) -> &'static str {
        "lru"
    }
}
