//! Prometheus metrics for the rank pipeline.

use once_cell::sync::Lazy;
use prometheus::{Histogram, HistogramOpts, IntCounter, IntCounterVec, Opts};

/// Search queries dispatched, by result.
pub static SEARCH_QUERIES: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "streamrank_search_queries_total",
            "Total search queries dispatched",
        ),
        &["result"], // "ok", "error"
    )
    .unwrap()
});

/// Hits dropped because the backend returned no identifier.
pub static HITS_MISSING_IDENT: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new(
        "streamrank_hits_missing_ident_total",
        "Search hits dropped for missing identifier",
    )
    .unwrap()
});

/// Ranked streams returned per invocation.
pub static STREAMS_RANKED: Lazy<Histogram> = Lazy::new(|| {
    Histogram::with_opts(
        HistogramOpts::new(
            "streamrank_streams_ranked",
            "Number of ranked streams returned per invocation",
        )
        .buckets(vec![0.0, 1.0, 5.0, 10.0, 25.0, 50.0, 100.0]),
    )
    .unwrap()
});

/// Best title-match score per invocation.
pub static BEST_MATCH_SCORE: Lazy<Histogram> = Lazy::new(|| {
    Histogram::with_opts(
        HistogramOpts::new(
            "streamrank_best_match_score",
            "Distribution of the top-ranked stream's title-match score",
        )
        .buckets(vec![0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 1.0]),
    )
    .unwrap()
});

/// Get all engine metrics for registration in a registry.
pub fn all_metrics() -> Vec<Box<dyn prometheus::core::Collector>> {
    vec![
        Box::new(SEARCH_QUERIES.clone()),
        Box::new(HITS_MISSING_IDENT.clone()),
        Box::new(STREAMS_RANKED.clone()),
        Box::new(BEST_MATCH_SCORE.clone()),
    ]
}
