//! Frame Table - the fixed set of frames a run works against.

use crate::common::{FrameId, PageId};
use crate::memory::Frame;

/// A fixed-capacity, ordered table of frames.
///
/// # Architecture
/// ```text
/// ┌───────────────────────────────────────────────────────────┐
/// │                        FrameTable                         │
/// │   frames: Vec<Frame>  (len == capacity, never resized)    │
/// │  ┌──────────┐ ┌──────────┐ ┌──────────┐     ┌──────────┐  │
/// │  │ Frame 0  │ │ Frame 1  │ │ Frame 2  │ ... │ Frame N-1│  │
/// │  │ page: 7  │ │ page: 3  │ │  empty   │     │  empty   │  │
/// │  │ rec:  4  │ │ rec:  1  │ │ rec:  0  │     │ rec:  0  │  │
/// │  └──────────┘ └──────────┘ └──────────┘     └──────────┘  │
/// └───────────────────────────────────────────────────────────┘
/// ```
///
/// Lookups are a linear scan in slot order, so the first matching frame
/// wins. A page can only enter through [`install`](Self::install) after a
/// failed lookup, which keeps non-empty occupants distinct.
///
/// Passing an out-of-range [`FrameId`] is a caller bug and panics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameTable {
    frames: Vec<Frame>,
}

impl FrameTable {
    /// Create a table of `capacity` empty frames.
    ///
    /// # Panics
    /// Panics if `capacity` is 0.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be > 0");

        Self {
            frames: vec![Frame::new(); capacity],
        }
    }

    /// Find the frame holding `page_id`.
    pub fn lookup(&self, page_id: PageId) -> Option<FrameId> {
        self.frames
            .iter()
            .position(|frame| frame.holds(page_id))
            .map(FrameId::new)
    }

    /// Bump the recency counter of `frame_id` after a hit.
    #[inline]
    pub fn touch(&mut self, frame_id: FrameId) {
        self.frames[frame_id.0].touch();
    }

    /// Load `page_id` into `frame_id`, resetting its recency to 1.
    ///
    /// Returns the page that was displaced, if the frame was occupied.
    #[inline]
    pub fn install(&mut self, frame_id: FrameId, page_id: PageId) -> Option<PageId> {
        self.frames[frame_id.0].load(page_id)
    }

    /// Number of frames (fixed at construction).
    #[inline]
    pub fn capacity(&self) -> usize {
        self.frames.len()
    }

    /// Get a frame by id.
    #[inline]
    pub fn frame(&self, frame_id: FrameId) -> &Frame {
        &self.frames[frame_id.0]
    }

    /// All frames in slot order.
    #[inline]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Number of frames currently holding a page.
    pub fn occupied(&self) -> usize {
        self.frames.iter().filter(|frame| !frame.is_empty()).count()
    }

    /// Pages currently resident, in slot order.
    pub fn resident_pages(&self) -> Vec<PageId> {
        self.frames.iter().filter_map(Frame::occupant).collect()
    }
}
