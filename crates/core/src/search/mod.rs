//! File-search abstraction.
//!
//! This module provides a `SearchProvider` trait for dispatching free-text
//! queries against an external file-search backend, plus deduplication of
//! the raw hits those queries return.

mod dedup;
mod types;

pub use dedup::deduplicate_hits;
pub use types::*;
