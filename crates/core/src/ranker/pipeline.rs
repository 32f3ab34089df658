//! The rank pipeline orchestrator.

use std::time::Instant;

use futures::future::join_all;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::EngineConfig;
use crate::metrics;
use crate::ranker::compare::compare_streams;
use crate::ranker::enrich::enrich;
use crate::ranker::filter::should_include;
use crate::ranker::query::build_queries;
use crate::ranker::score::score_candidate;
use crate::ranker::types::{human_size, EnrichedCandidate, MatchScores, RankedStream};
use crate::release;
use crate::search::{deduplicate_hits, RawHit, SearchProvider};
use crate::show::{DescriptorError, ShowDescriptor};

/// Errors from the rank pipeline entry points.
#[derive(Debug, Error)]
pub enum RankError {
    #[error("Invalid show descriptor: {0}")]
    InvalidDescriptor(#[from] DescriptorError),
}

/// The match-and-rank engine.
///
/// Stateless apart from its configuration; invocations are independent and
/// may run concurrently.
pub struct StreamRanker {
    config: EngineConfig,
}

impl StreamRanker {
    /// Create a ranker with the given configuration.
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Full flow: expand queries, dispatch them concurrently against the
    /// provider, then rank whatever came back.
    ///
    /// A failing sub-query degrades to an empty result list; only a
    /// malformed descriptor is an error.
    pub async fn search_and_rank(
        &self,
        show: &ShowDescriptor,
        provider: &dyn SearchProvider,
    ) -> Result<Vec<RankedStream>, RankError> {
        show.validate()?;
        let queries = build_queries(show);

        let search_start = Instant::now();
        let results = join_all(queries.iter().map(|query| provider.search(query))).await;
        debug!(
            provider = provider.name(),
            queries = queries.len(),
            duration_ms = search_start.elapsed().as_millis() as u64,
            "executed all search queries"
        );

        let mut hits_per_query: Vec<Vec<RawHit>> = Vec::with_capacity(results.len());
        for (query, result) in queries.iter().zip(results) {
            match result {
                Ok(hits) => {
                    metrics::SEARCH_QUERIES.with_label_values(&["ok"]).inc();
                    hits_per_query.push(hits);
                }
                Err(error) => {
                    warn!(query = %query, error = %error, "search query failed, continuing without it");
                    metrics::SEARCH_QUERIES.with_label_values(&["error"]).inc();
                    hits_per_query.push(Vec::new());
                }
            }
        }

        self.rank_streams(show, hits_per_query)
    }

    /// Rank pre-fetched per-query hit lists.
    ///
    /// Flattens, deduplicates by identifier (last occurrence wins), then
    /// enriches, scores, filters, stable-sorts and truncates. An empty
    /// outcome is an empty list, never an error.
    pub fn rank_streams(
        &self,
        show: &ShowDescriptor,
        hits_per_query: Vec<Vec<RawHit>>,
    ) -> Result<Vec<RankedStream>, RankError> {
        show.validate()?;

        let hits = deduplicate_hits(hits_per_query.into_iter().flatten().collect());
        let total_hits = hits.len();

        let mut streams: Vec<RankedStream> = Vec::new();
        for hit in hits {
            let parsed = release::parse(&hit.name);
            let candidate = enrich(hit, parsed, show);
            let scores = score_candidate(&candidate);
            if should_include(&candidate, &scores, show, &self.config.ranking) {
                streams.push(self.to_stream(candidate, scores));
            }
        }

        streams.sort_by(|a, b| compare_streams(a, b, &self.config.ranking));
        streams.truncate(self.config.ranking.max_results);

        debug!(
            hits = total_hits,
            streams = streams.len(),
            "ranked search hits"
        );
        metrics::STREAMS_RANKED.observe(streams.len() as f64);
        if let Some(best) = streams.first() {
            metrics::BEST_MATCH_SCORE.observe(best.match_score);
        }

        Ok(streams)
    }

    fn to_stream(&self, candidate: EnrichedCandidate, scores: MatchScores) -> RankedStream {
        let policy = &self.config.ranking;
        let provider = &self.config.provider;
        let EnrichedCandidate { hit, parsed, .. } = candidate;

        let mut description = hit.name.clone();
        if let Some(language) = &hit.language {
            description.push_str(&format!("\n{language}"));
        }
        description.push_str(&format!("\n+{} -{}", hit.pos_votes, hit.neg_votes));
        description.push_str(&format!("\n{}", human_size(hit.size_bytes)));

        let name = match &parsed.resolution {
            Some(resolution) => format!("{} {}", provider.label, resolution),
            None => provider.label.clone(),
        };

        let binge_group = format!(
            "{}|{}|{}|{}",
            provider.label,
            hit.language.as_deref().unwrap_or(""),
            parsed.resolution.as_deref().unwrap_or(""),
            parsed.source.as_deref().unwrap_or(""),
        );

        RankedStream {
            url: format!("{}{}", provider.stream_url_base, hit.ident),
            ident: hit.ident,
            name,
            description,
            match_score: scores.title_match,
            strong_match: scores.is_strong(policy),
            fulltext_match: scores.fulltext_bucket(),
            weak_match: scores.is_weak(policy),
            binge_group,
            size_bytes: hit.size_bytes,
            filename: hit.name,
            protected: hit.protected,
            language: hit.language,
            pos_votes: hit.pos_votes,
            episode: parsed.episode,
        }
    }
}
