//! Common types and utilities shared across pagesim.
//!
//! This module contains the fundamental primitives used throughout:
//! - Configuration limits and [`SimConfig`](config::SimConfig)
//! - Error types
//! - Identifiers (PageId, FrameId)

pub mod config;
pub mod error;
mod frame_id;
mod page_id;

pub use config::SimConfig;
pub use error::{Error, Result};
pub use frame_id::FrameId;
pub use page_id::PageId;
