//! The tiered stream comparator.

use std::cmp::Ordering;

use crate::config::RankingPolicy;
use crate::ranker::types::RankedStream;

/// Total order over ranked streams; `Less` means "ranks first".
///
/// When the policy names preferred language tags, matching streams rank
/// before everything else, ordered by the first tag they match. Within the
/// same preference rank: a lone strong match always beats a non-strong one;
/// two strong matches order by title score, then positive votes, then size;
/// two non-strong matches insert the fulltext bucket between title score
/// and votes. Ties fall through to input order under a stable sort.
pub fn compare_streams(a: &RankedStream, b: &RankedStream, policy: &RankingPolicy) -> Ordering {
    if !policy.preferred_languages.is_empty() {
        let rank_a = preference_rank(a, policy);
        let rank_b = preference_rank(b, policy);
        let by_preference = match (rank_a, rank_b) {
            (Some(i), Some(j)) => i.cmp(&j),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };
        if by_preference != Ordering::Equal {
            return by_preference;
        }
    }

    match (a.strong_match, b.strong_match) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (true, true) => desc_f64(a.match_score, b.match_score)
            .then(b.pos_votes.cmp(&a.pos_votes))
            .then(b.size_bytes.cmp(&a.size_bytes)),
        (false, false) => desc_f64(a.match_score, b.match_score)
            .then(desc_f64(a.fulltext_match, b.fulltext_match))
            .then(b.pos_votes.cmp(&a.pos_votes))
            .then(b.size_bytes.cmp(&a.size_bytes)),
    }
}

/// Index of the first preferred tag this stream matches, via its language
/// tag or its file name.
fn preference_rank(stream: &RankedStream, policy: &RankingPolicy) -> Option<usize> {
    let filename = stream.filename.to_lowercase();
    policy.preferred_languages.iter().position(|tag| {
        let tag = tag.to_lowercase();
        stream
            .language
            .as_deref()
            .is_some_and(|lang| lang.eq_ignore_ascii_case(&tag))
            || filename.contains(&tag)
    })
}

fn desc_f64(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}
