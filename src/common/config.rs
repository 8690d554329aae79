//! Configuration constants and the validated run configuration.

use std::path::PathBuf;

use crate::common::{Error, Result};
use crate::memory::replacer::PolicyKind;

/// Smallest accepted page size in bytes.
pub const MIN_PAGE_SIZE: u32 = 2;

/// Largest accepted page size in bytes.
pub const MAX_PAGE_SIZE: u32 = 64;

/// Smallest accepted memory size in bytes.
///
/// With the largest page size this still yields two frames.
pub const MIN_MEMORY_SIZE: u32 = 128;

/// Largest accepted memory size in bytes.
pub const MAX_MEMORY_SIZE: u32 = 16384;

/// Largest frame table the limits allow (16384 / 2).
pub const MAX_FRAMES: usize = (MAX_MEMORY_SIZE / MIN_PAGE_SIZE) as usize;

/// A validated simulation configuration.
///
/// Construction checks the page size first, then the memory size, then
/// resolves the policy name, so a run never starts with a bad setup.
///
/// # Example
/// ```
/// use pagesim::SimConfig;
///
/// let config = SimConfig::new("lru", "trace.txt", 4, 130).unwrap();
/// assert_eq!(config.frame_count(), 32);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    pub policy: PolicyKind,
    pub trace_path: PathBuf,
    pub page_size: u32,
    pub memory_size: u32,
    /// Seed for the random policy. `None` seeds from the OS once per run.
    pub seed: Option<u64>,
}

impl SimConfig {
    /// Validate raw settings and build a configuration.
    ///
    /// Sizes are taken as `i64` so negative or oversized input reaches the
    /// range check instead of failing to parse.
    ///
    /// # Errors
    /// - `Error::PageSizeOutOfRange` if `page_size` is outside 2..=64
    /// - `Error::MemorySizeOutOfRange` if `memory_size` is outside 128..=16384
    /// - `Error::UnknownPolicy` if `policy` is not `fifo`, `lru` or `random`
    pub fn new(
        policy: &str,
        trace_path: impl Into<PathBuf>,
        page_size: i64,
        memory_size: i64,
    ) -> Result<Self> {
        let page_size = check_range(page_size, MIN_PAGE_SIZE, MAX_PAGE_SIZE)
            .ok_or(Error::PageSizeOutOfRange(page_size))?;
        let memory_size = check_range(memory_size, MIN_MEMORY_SIZE, MAX_MEMORY_SIZE)
            .ok_or(Error::MemorySizeOutOfRange(memory_size))?;
        let policy = policy.parse::<PolicyKind>()?;

        Ok(Self {
            policy,
            trace_path: trace_path.into(),
            page_size,
            memory_size,
            seed: None,
        })
    }

    /// Fix the seed used by the random policy.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of frames: memory size divided by page size, truncated.
    ///
    /// Leftover bytes that do not fill a whole page are ignored.
    #[inline]
    pub fn frame_count(&self) -> usize {
        (self.memory_size / self.page_size) as usize
    }
}

/// Read a byte size from a command-line argument the way C's `atoi` does.
///
/// Leading whitespace and one sign are accepted, then digits up to the first
/// non-digit. Input with no digits reads as 0, and values too large for
/// `i64` saturate, so both end up at the range check in [`SimConfig::new`].
///
/// # Example
/// ```
/// use pagesim::common::config::parse_size;
///
/// assert_eq!(parse_size("512"), 512);
/// assert_eq!(parse_size("16kb"), 16);
/// assert_eq!(parse_size("abc"), 0);
/// ```
pub fn parse_size(raw: &str) -> i64 {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let magnitude = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, d| {
            acc.saturating_mul(10).saturating_add(i64::from(d - b'0'))
        });

    if negative {
        -magnitude
    } else {
        magnitude
    }
}

fn check_range(value: i64, min: u32, max: u32) -> Option<u32> {
    if (i64::from(min)..=i64::from(max)).contains(&value) {
        u32::try_from(value).ok()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_count_truncates() {
        let config = SimConfig::new("fifo", "t", 4, 130).unwrap();
        assert_eq!(config.frame_count(), 32);
    }

    #[test]
    fn test_frame_count_bounds() {
        let smallest = SimConfig::new("fifo", "t", 64, 128).unwrap();
        assert_eq!(smallest.frame_count(), 2);

        let largest = SimConfig::new("fifo", "t", 2, 16384).unwrap();
        assert_eq!(largest.frame_count(), MAX_FRAMES);
    }

    #[test]
    fn test_page_size_limits() {
        assert!(SimConfig::new("lru", "t", 2, 128).is_ok());
        assert!(SimConfig::new("lru", "t", 64, 128).is_ok());
        assert!(matches!(
            SimConfig::new("lru", "t", 1, 128),
            Err(Error::PageSizeOutOfRange(1))
        ));
        assert!(matches!(
            SimConfig::new("lru", "t", 65, 128),
            Err(Error::PageSizeOutOfRange(65))
        ));
        assert!(matches!(
            SimConfig::new("lru", "t", -4, 128),
            Err(Error::PageSizeOutOfRange(-4))
        ));
    }

    #[test]
    fn test_memory_size_limits() {
        assert!(SimConfig::new("lru", "t", 4, 16384).is_ok());
        assert!(matches!(
            SimConfig::new("lru", "t", 4, 127),
            Err(Error::MemorySizeOutOfRange(127))
        ));
        assert!(matches!(
            SimConfig::new("lru", "t", 4, 16385),
            Err(Error::MemorySizeOutOfRange(16385))
        ));
    }

    #[test]
    fn test_sizes_checked_before_policy() {
        assert!(matches!(
            SimConfig::new("bogus", "t", 0, 128),
            Err(Error::PageSizeOutOfRange(0))
        ));
        assert!(matches!(
            SimConfig::new("bogus", "t", 4, 128),
            Err(Error::UnknownPolicy(_))
        ));
    }

    #[test]
    fn test_parse_size() {
        assert_eq!(parse_size("64"), 64);
        assert_eq!(parse_size("  +8"), 8);
        assert_eq!(parse_size("-4"), -4);
        assert_eq!(parse_size("32bytes"), 32);
        assert_eq!(parse_size("four"), 0);
        assert_eq!(parse_size(""), 0);
        assert_eq!(parse_size("-"), 0);
        assert_eq!(parse_size("99999999999999999999999"), i64::MAX);
    }

    #[test]
    fn test_non_numeric_size_is_out_of_range() {
        assert!(matches!(
            SimConfig::new("lru", "t", parse_size("big"), 1024),
            Err(Error::PageSizeOutOfRange(0))
        ));
        assert!(matches!(
            SimConfig::new("lru", "t", 4, parse_size("lots")),
            Err(Error::MemorySizeOutOfRange(0))
        ));
    }

    #[test]
    fn test_with_seed() {
        let config = SimConfig::new("random", "t", 4, 128).unwrap();
        assert_eq!(config.seed, None);
        assert_eq!(config.with_seed(7).seed, Some(7));
    }
}
