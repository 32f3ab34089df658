//! Types for the file-search system.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A raw search result, one per file the backend knows about.
///
/// Every field defaults to its zero value so a backend omitting a field
/// deserializes cleanly instead of failing the whole result list.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RawHit {
    /// Backend identifier for the file, used for deduplication.
    #[serde(default)]
    pub ident: String,
    /// Display name, typically a release file name.
    #[serde(default)]
    pub name: String,
    /// Language tag reported by the backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Positive vote count.
    #[serde(default)]
    pub pos_votes: u32,
    /// Negative vote count.
    #[serde(default)]
    pub neg_votes: u32,
    /// File size in bytes.
    #[serde(default)]
    pub size_bytes: u64,
    /// True when the file is inaccessible without special authorization.
    #[serde(default)]
    pub protected: bool,
}

/// Errors that can occur when dispatching a search query.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Search backend connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Search backend API error: {0}")]
    ApiError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Trait for file-search backends.
///
/// Implementations own credentials and transport; the engine only hands
/// them query strings. Calls may run concurrently and fail independently.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Provider name for logging.
    fn name(&self) -> &str;

    /// Execute one free-text search query.
    async fn search(&self, query: &str) -> Result<Vec<RawHit>, SearchError>;
}
