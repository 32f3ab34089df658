//! Best-effort parser for release file names.
//!
//! Parsing never fails: anything that cannot be recognized is simply left
//! absent, and a name with no recognizable metadata yields an empty title.

use once_cell::sync::Lazy;
use regex_lite::Regex;
use serde::{Deserialize, Serialize};

/// A season/episode pair as found in release names (`S01E02`, `01x02`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeasonEpisode {
    pub season: u32,
    pub episode: u32,
}

/// Structured metadata extracted from a release file name.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ParsedTitle {
    /// Title fragment, separators replaced by spaces.
    pub title: String,
    /// Resolution tag (`1080p`, `2160p`, ...), lowercased.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,
    /// Source tag (`bluray`, `web-dl`, ...), lowercased.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Release year, when the name carries one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<u16>,
    /// Season/episode pair, when the name carries one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub episode: Option<SeasonEpisode>,
}

static RESOLUTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(2160p|1440p|1080p|1080i|720p|576p|480p|4k)\b").unwrap());

static SOURCE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(blu-?ray|bd-?rip|br-?rip|remux|web-?dl|web-?rip|hd-?tv|hd-?rip|dvd-?rip|dvdscr|dvd|telesync|cam)\b",
    )
    .unwrap()
});

static YEAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(19\d{2}|20\d{2})\b").unwrap());

static SEASON_EPISODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bs(\d{1,2})[ ._-]*e(\d{1,3})\b").unwrap());

static SEASON_X_EPISODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d{1,2})x(\d{2,3})\b").unwrap());

/// Parse a release file name into its structured parts.
pub fn parse(name: &str) -> ParsedTitle {
    let resolution = RESOLUTION_RE
        .captures(name)
        .map(|c| c[1].to_lowercase());
    let source = SOURCE_RE.captures(name).map(|c| c[1].to_lowercase());
    let episode = parse_season_episode(name);

    // Titles can legitimately start with a year ("1917 (2019)"), so the
    // release year is the last match and only it bounds the title.
    let year_match = YEAR_RE.find_iter(name).last();
    let year = year_match.as_ref().and_then(|m| m.as_str().parse().ok());

    let mut cut = name.len();
    for start in [
        year_match.map(|m| m.start()),
        RESOLUTION_RE.find(name).map(|m| m.start()),
        SOURCE_RE.find(name).map(|m| m.start()),
        SEASON_EPISODE_RE.find(name).map(|m| m.start()),
        SEASON_X_EPISODE_RE.find(name).map(|m| m.start()),
    ]
    .into_iter()
    .flatten()
    {
        cut = cut.min(start);
    }

    ParsedTitle {
        title: tidy_title(&name[..cut]),
        resolution,
        source,
        year,
        episode,
    }
}

fn parse_season_episode(name: &str) -> Option<SeasonEpisode> {
    let captures = SEASON_EPISODE_RE
        .captures(name)
        .or_else(|| SEASON_X_EPISODE_RE.captures(name))?;
    let season = captures[1].parse().ok()?;
    let episode = captures[2].parse().ok()?;
    Some(SeasonEpisode { season, episode })
}

/// Turn a raw title fragment into readable text: dot/underscore separators
/// become spaces, whitespace collapses, dangling bracket/dash noise left by
/// the cut is trimmed.
fn tidy_title(fragment: &str) -> String {
    let spaced: String = fragment
        .chars()
        .map(|c| if c == '.' || c == '_' { ' ' } else { c })
        .collect();
    spaced
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .trim_end_matches(['-', '(', '[', ' '])
        .to_string()
}
