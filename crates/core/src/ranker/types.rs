//! Types flowing through the rank pipeline.
//!
//! Each stage produces a new immutable value: `RawHit` → `EnrichedCandidate`
//! → `RankedStream`. No stage mutates a prior stage's output.

use serde::{Deserialize, Serialize};

use crate::config::RankingPolicy;
use crate::release::{ParsedTitle, SeasonEpisode};
use crate::search::RawHit;

/// A raw hit plus the derived comparison fields the scorer and filter need.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedCandidate {
    pub hit: RawHit,
    pub parsed: ParsedTitle,
    /// Cleaned candidate title, with the hit's year appended when year
    /// comparison is eligible.
    pub cleaned_title: String,
    /// The hit's parsed year as a comparison string, empty when ineligible.
    pub item_year: String,
    /// The descriptor's year as a comparison string, empty when ineligible.
    pub reference_year: String,
    /// Normalized reference titles (up to four), each carrying the
    /// descriptor year suffix under the same eligibility rule.
    pub reference_titles: Vec<String>,
}

/// Fuzzy similarity scores for one candidate, both in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchScores {
    /// Best score of the cleaned candidate title against the match pool.
    pub title_match: f64,
    /// Best score of the cleaned raw display name against the match pool.
    pub name_match: f64,
}

impl MatchScores {
    /// High-confidence title match.
    pub fn is_strong(&self, policy: &RankingPolicy) -> bool {
        self.title_match > policy.strong_match_threshold
    }

    /// Admissible on display-name similarity alone.
    pub fn is_weak(&self, policy: &RankingPolicy) -> bool {
        self.name_match > policy.weak_match_threshold
    }

    /// Name score rounded to one decimal, the coarse secondary sort key.
    pub fn fulltext_bucket(&self) -> f64 {
        (self.name_match * 10.0).round() / 10.0
    }
}

/// A ranked, annotated playable candidate - the engine's output entity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RankedStream {
    /// Backend identifier.
    pub ident: String,
    /// Playable URL (configured base + identifier).
    pub url: String,
    /// Display label (provider label + resolution tag).
    pub name: String,
    /// Human-readable detail block: file name, language, votes, size.
    pub description: String,
    /// Title similarity score in [0, 1].
    pub match_score: f64,
    /// Title similarity above the high-confidence threshold.
    pub strong_match: bool,
    /// Name similarity rounded to one decimal.
    pub fulltext_match: f64,
    /// Name similarity above the weak threshold.
    pub weak_match: bool,
    /// Grouping key for client-side binge sequencing
    /// (`label|language|resolution|source`).
    pub binge_group: String,
    /// File size in bytes.
    pub size_bytes: u64,
    /// Raw display name of the underlying file.
    pub filename: String,
    /// True when the file needs special authorization.
    pub protected: bool,
    /// Language tag reported by the backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Positive vote count.
    pub pos_votes: u32,
    /// Season/episode pair parsed from the file name, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub episode: Option<SeasonEpisode>,
}

/// Format a byte count for display (`1.4 GB`).
pub fn human_size(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{bytes} B")
    } else {
        format!("{value:.1} {}", UNITS[unit])
    }
}
