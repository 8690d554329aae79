//! Frame slot index.

use std::fmt;

/// Position of a frame in the [`FrameTable`](crate::memory::FrameTable).
///
/// Slots are numbered from 0 in table order. Replacers hand these out as
/// victims and the FIFO cursor walks them in ascending order, so the
/// ordering derives are meaningful. A `FrameId` is only valid for a table
/// whose capacity exceeds it; anything else panics on use.
///
/// # Example
/// ```
/// use pagesim::{FrameId, FrameTable, PageId};
///
/// let mut table = FrameTable::new(4);
/// table.install(FrameId::new(3), PageId::new(9));
/// assert_eq!(table.lookup(PageId::new(9)), Some(FrameId::new(3)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameId(pub usize);

impl FrameId {
    #[inline]
    pub fn new(slot: usize) -> Self {
        FrameId(slot)
    }

    /// The slot after this one, wrapping at `capacity`.
    #[inline]
    pub fn next_in(self, capacity: usize) -> Self {
        FrameId((self.0 + 1) % capacity)
    }
}

impl fmt::Display for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Frame({})", self.0)
    }
}
