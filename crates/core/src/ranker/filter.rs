//! Candidate filtering - drops hits that cannot plausibly be the requested media.

use crate::config::RankingPolicy;
use crate::ranker::types::{EnrichedCandidate, MatchScores};
use crate::show::{ContentKind, ShowDescriptor};

/// Words that mark a movie file name as legitimately episode-like.
const EPISODE_WORDS: [&str; 2] = ["episode", "part"];

/// Decide whether a scored candidate stays in the result set.
///
/// A candidate is dropped when any of these holds:
/// 1. it is protected,
/// 2. it is neither a strong nor a weak match,
/// 3. both year strings are present and further apart than the tolerance
///    (one year of slack absorbs regional premiere discrepancies between
///    databases),
/// 4. a movie search hit a file with an episode marker, unless the file
///    name shares an "episode"/"part" word with a reference title,
/// 5. a series search hit a file whose season/episode pair is not exactly
///    the requested one.
pub fn should_include(
    candidate: &EnrichedCandidate,
    scores: &MatchScores,
    show: &ShowDescriptor,
    policy: &RankingPolicy,
) -> bool {
    if candidate.hit.protected {
        return false;
    }

    if !scores.is_strong(policy) && !scores.is_weak(policy) {
        return false;
    }

    if !candidate.item_year.is_empty() && !candidate.reference_year.is_empty() {
        if let (Ok(item), Ok(reference)) = (
            candidate.item_year.parse::<i32>(),
            candidate.reference_year.parse::<i32>(),
        ) {
            if (item - reference).abs() > policy.year_tolerance {
                return false;
            }
        }
    }

    if show.kind == ContentKind::Movie && candidate.parsed.episode.is_some() {
        let filename = candidate.hit.name.to_lowercase();
        let keyword_shared = EPISODE_WORDS.iter().any(|word| {
            filename.contains(word)
                && candidate
                    .reference_titles
                    .iter()
                    .any(|title| title.contains(word))
        });
        if !keyword_shared {
            return false;
        }
    }

    if show.kind == ContentKind::Series && candidate.parsed.episode != show.episode {
        return false;
    }

    true
}
