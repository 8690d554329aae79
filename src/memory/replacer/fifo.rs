//! FIFO (First-In-First-Out) replacement policy.

use crate::common::{FrameId, PageId};
use crate::memory::replacer::Replacer;
use crate::memory::FrameTable;

/// A FIFO policy driven by a single rotating cursor.
///
/// Each call hands out the cursor and advances it modulo the capacity, so
/// frames are filled and later replaced in strict slot order
/// 0, 1, ..., N-1, 0, 1, ... Frame contents and the incoming page are
/// never consulted: an empty frame and an occupied one are treated alike.
#[derive(Debug, Clone)]
pub struct FifoReplacer {
    /// Next frame to hand out.
    cursor: FrameId,

    /// Number of frames the cursor wraps around.
    capacity: usize,
}

impl FifoReplacer {
    /// Create a FIFO replacer for `capacity` frames, cursor at 0.
    ///
    /// # Panics
    /// Panics if `capacity` is 0.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be > 0");
        Self {
            cursor: FrameId::new(0),
            capacity,
        }
    }

    /// The frame the next call will return.
    #[inline]
    pub fn cursor(&self) -> FrameId {
        self.cursor
    }
}

impl Replacer for FifoReplacer {
    fn select_victim(&mut self, table: &FrameTable, _incoming: PageId) -> FrameId {
        debug_assert_eq!(table.capacity(), self.capacity);

        let victim = self.cursor;
        self.cursor = victim.next_in(self.capacity);
        victim
    }

    fn name(&self) -> &'static str {
        "fifo"
    }
}
