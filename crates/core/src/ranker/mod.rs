//! Match-and-rank pipeline.
//!
//! Turns a show descriptor plus raw search hits into an ordered list of
//! playable streams: query expansion, enrichment, fuzzy scoring, filtering
//! and tiered ordering.

mod compare;
mod enrich;
mod filter;
mod normalize;
mod pipeline;
mod query;
mod score;
mod types;

pub use compare::compare_streams;
pub use enrich::enrich;
pub use filter::should_include;
pub use normalize::{clean_title, normalize_text};
pub use pipeline::{RankError, StreamRanker};
pub use query::build_queries;
pub use score::{best_match, score_candidate, BestMatch};
pub use types::{human_size, EnrichedCandidate, MatchScores, RankedStream};
