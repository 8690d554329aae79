//! Frame - a slot in the frame table.
//!
//! A [`Frame`] holds no page data, only the bookkeeping the simulator needs:
//! - Which page occupies it (if any)
//! - A recency counter read by the LRU policy

use crate::common::PageId;

/// A frame in the simulated memory.
///
/// The recency counter is not a timestamp. It is reset to 1 when a page is
/// installed and bumped by one on every hit, whichever policy is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Frame {
    /// Which page is currently loaded, or None if the frame is empty.
    occupant: Option<PageId>,

    /// Per-frame access counter, 0 while the frame has never been filled.
    recency: u64,
}

impl Frame {
    /// Create a new empty frame.
    pub fn new() -> Self {
        Self {
            occupant: None,
            recency: 0,
        }
    }

    /// Get the page ID of the loaded page.
    #[inline]
    pub fn occupant(&self) -> Option<PageId> {
        self.occupant
    }

    /// Get the recency counter.
    #[inline]
    pub fn recency(&self) -> u64 {
        self.recency
    }

    /// Check if the frame is empty (no page loaded).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }

    /// Check whether `page_id` occupies this frame.
    #[inline]
    pub fn holds(&self, page_id: PageId) -> bool {
        self.occupant == Some(page_id)
    }

    /// Record a hit on this frame.
    #[inline]
    pub(crate) fn touch(&mut self) {
        self.recency += 1;
    }

    /// Load `page_id`, returning the page it displaced.
    #[inline]
    pub(crate) fn load(&mut self, page_id: PageId) -> Option<PageId> {
        self.recency = 1;
        self.occupant.replace(page_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_new() {
        let frame = Frame::new();
        assert!(frame.is_empty());
        assert_eq!(frame.occupant(), None);
        assert_eq!(frame.recency(), 0);
        assert_eq!(frame, Frame::default());
    }

    #[test]
    fn test_frame_load() {
        let mut frame = Frame::new();

        assert_eq!(frame.load(PageId::new(7)), None);
        assert_eq!(frame.occupant(), Some(PageId::new(7)));
        assert_eq!(frame.recency(), 1);
        assert!(frame.holds(PageId::new(7)));
        assert!(!frame.holds(PageId::new(8)));
    }

    #[test]
    fn test_frame_load_replaces_and_resets_recency() {
        let mut frame = Frame::new();
        frame.load(PageId::new(1));
        frame.touch();
        frame.touch();
        assert_eq!(frame.recency(), 3);

        assert_eq!(frame.load(PageId::new(2)), Some(PageId::new(1)));
        assert_eq!(frame.recency(), 1);
    }

    #[test]
    fn test_frame_touch_empty() {
        let mut frame = Frame::new();
        frame.touch();
        assert!(frame.is_empty());
        assert_eq!(frame.recency(), 1);
    }
}
