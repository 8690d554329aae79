//! Error types for pagesim.

use std::path::PathBuf;

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All fatal conditions a simulation run can hit.
///
/// Every variant is a setup-time failure except `Io`, which covers a read
/// error while streaming the trace. Hits and misses are never errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Page size outside the accepted byte range.
    #[error(
        "page size {0} out of range ({min}..={max} bytes)",
        min = crate::common::config::MIN_PAGE_SIZE,
        max = crate::common::config::MAX_PAGE_SIZE
    )]
    PageSizeOutOfRange(i64),

    /// Memory size outside the accepted byte range.
    #[error(
        "memory size {0} out of range ({min}..={max} bytes)",
        min = crate::common::config::MIN_MEMORY_SIZE,
        max = crate::common::config::MAX_MEMORY_SIZE
    )]
    MemorySizeOutOfRange(i64),

    /// Policy name is not one of `fifo`, `lru`, `random`.
    #[error("unknown replacement policy '{0}' (expected fifo, lru or random)")]
    UnknownPolicy(String),

    /// The trace file could not be opened.
    #[error("cannot open trace file {}: {source}", .path.display())]
    TraceOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// I/O error while reading the trace.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
