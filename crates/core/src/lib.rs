//! Match-and-rank engine for media file search results.
//!
//! Given a [`ShowDescriptor`] and a [`SearchProvider`], the engine expands
//! the request into search queries, fans them out concurrently, then
//! deduplicates, enriches, scores, filters and orders the hits into a list
//! of [`RankedStream`]s ready to present to a streaming client.
//!
//! ```no_run
//! use streamrank_core::{EngineConfig, ShowDescriptor, StreamRanker};
//!
//! # async fn example(provider: &dyn streamrank_core::SearchProvider) {
//! let ranker = StreamRanker::new(EngineConfig::default());
//! let show = ShowDescriptor::movie("Soul", Some(2020));
//! let streams = ranker.search_and_rank(&show, provider).await;
//! # }
//! ```

pub mod config;
pub mod metrics;
pub mod ranker;
pub mod release;
pub mod search;
pub mod show;

pub use config::{load_config, load_config_from_str, ConfigError, EngineConfig, ProviderConfig, RankingPolicy};
pub use ranker::{compare_streams, RankError, RankedStream, StreamRanker};
pub use release::{parse, ParsedTitle, SeasonEpisode};
pub use search::{deduplicate_hits, RawHit, SearchError, SearchProvider};
pub use show::{ContentKind, DescriptorError, ShowDescriptor};
