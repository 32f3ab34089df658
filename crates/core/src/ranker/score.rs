//! Fuzzy similarity scoring against the reference-title pool.

use crate::ranker::normalize::clean_title;
use crate::ranker::types::{EnrichedCandidate, MatchScores};

/// Best entry of a match pool for one candidate string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BestMatch {
    /// Index into the pool; 0 when the pool is empty.
    pub index: usize,
    /// Sorensen-Dice rating in [0, 1]; 0.0 when the pool is empty.
    pub rating: f64,
}

/// Find the pool entry most similar to `candidate`.
///
/// Uses the bigram Sorensen-Dice coefficient: order-insensitive,
/// whitespace-insensitive, symmetric, deterministic.
pub fn best_match(candidate: &str, pool: &[String]) -> BestMatch {
    let mut best = BestMatch {
        index: 0,
        rating: 0.0,
    };
    for (index, entry) in pool.iter().enumerate() {
        let rating = strsim::sorensen_dice(candidate, entry);
        if rating > best.rating {
            best = BestMatch { index, rating };
        }
    }
    best
}

/// Build the match pool: every reference title plus ordered pairwise
/// concatenations joined by `/`.
///
/// The pair entries cover hits whose file names embed two language variants
/// of the title, e.g. `OriginalTitle/LocalTitle`.
pub fn build_match_pool(reference_titles: &[String]) -> Vec<String> {
    let mut pool: Vec<String> = reference_titles.to_vec();
    for (i, a) in reference_titles.iter().enumerate() {
        for (j, b) in reference_titles.iter().enumerate() {
            if i != j && a != b {
                pool.push(format!("{a}/{b}"));
            }
        }
    }
    pool
}

/// Score one enriched candidate against its reference titles.
pub fn score_candidate(candidate: &EnrichedCandidate) -> MatchScores {
    let pool = build_match_pool(&candidate.reference_titles);
    MatchScores {
        title_match: best_match(&candidate.cleaned_title, &pool).rating,
        name_match: best_match(&clean_title(&candidate.hit.name), &pool).rating,
    }
}
