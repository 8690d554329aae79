//! Page identifier type.

use std::fmt;

/// Identifies a page requested by the trace.
///
/// Trace entries are signed decimal integers, so the identifier wraps an
/// `i32`. Empty frames are modeled as `Option<PageId>::None`, which means
/// every `i32` (including negative values) is a valid page.
///
/// # Example
/// ```
/// use pagesim::PageId;
///
/// let page_id = PageId::new(42);
/// assert_eq!(page_id.0, 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(pub i32);

impl PageId {
    /// Create a new PageId.
    #[inline]
    pub fn new(id: i32) -> Self {
        PageId(id)
    }
}

impl From<i32> for PageId {
    fn from(id: i32) -> Self {
        PageId(id)
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Page({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_new() {
        let pid = PageId::new(42);
        assert_eq!(pid.0, 42);
        assert_eq!(PageId::from(42), pid);
    }

    #[test]
    fn test_page_id_negative() {
        let pid = PageId::new(-1);
        assert_eq!(pid.0, -1);
        assert_eq!(format!("{}", pid), "Page(-1)");
    }

    #[test]
    fn test_page_id_ordering() {
        assert!(PageId::new(1) < PageId::new(2));
        assert!(PageId::new(-5) < PageId::new(3));
    }

    #[test]
    fn test_page_id_display() {
        assert_eq!(format!("{}", PageId::new(42)), "Page(42)");
    }
}
