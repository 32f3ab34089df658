//! Types describing what the caller wants to find.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::release::SeasonEpisode;

/// What kind of content a descriptor refers to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    Movie,
    Series,
}

/// Normalized request describing the media being searched for.
///
/// Carries up to four title variants (metadata databases often disagree on
/// naming across languages), the release year for movies, and the requested
/// season/episode pair for series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShowDescriptor {
    /// Canonical title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// First localized title variant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_name: Option<String>,
    /// Second localized title variant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub english_name: Option<String>,
    /// Title in the original release language.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_name: Option<String>,
    /// Release year (movies).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<u16>,
    /// Movie or series.
    pub kind: ContentKind,
    /// Requested season/episode pair (series only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub episode: Option<SeasonEpisode>,
}

/// Errors for descriptors that cannot produce meaningful queries.
#[derive(Debug, Error)]
pub enum DescriptorError {
    #[error("Descriptor has no non-empty name")]
    MissingName,

    #[error("Series descriptor is missing its season/episode pair")]
    MissingEpisode,

    #[error("Movie descriptor carries a season/episode pair")]
    UnexpectedEpisode,
}

impl ShowDescriptor {
    /// Convenience constructor for a movie descriptor.
    pub fn movie(name: impl Into<String>, year: Option<u16>) -> Self {
        Self {
            name: Some(name.into()),
            local_name: None,
            english_name: None,
            original_name: None,
            year,
            kind: ContentKind::Movie,
            episode: None,
        }
    }

    /// Convenience constructor for a series descriptor.
    pub fn series(name: impl Into<String>, season: u32, episode: u32) -> Self {
        Self {
            name: Some(name.into()),
            local_name: None,
            english_name: None,
            original_name: None,
            year: None,
            kind: ContentKind::Series,
            episode: Some(SeasonEpisode { season, episode }),
        }
    }

    /// The four name slots in priority order (canonical, localized,
    /// localized, original). Empty strings are treated as absent.
    pub fn name_slots(&self) -> [Option<&str>; 4] {
        fn non_empty(slot: &Option<String>) -> Option<&str> {
            slot.as_deref().map(str::trim).filter(|s| !s.is_empty())
        }
        [
            non_empty(&self.name),
            non_empty(&self.local_name),
            non_empty(&self.english_name),
            non_empty(&self.original_name),
        ]
    }

    /// Distinct non-empty names in slot order.
    pub fn distinct_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for slot in self.name_slots().into_iter().flatten() {
            if !names.contains(&slot) {
                names.push(slot);
            }
        }
        names
    }

    /// Check descriptor invariants before building queries.
    ///
    /// Fails fast on descriptors that would otherwise render empty tokens
    /// into query strings.
    pub fn validate(&self) -> Result<(), DescriptorError> {
        if self.distinct_names().is_empty() {
            return Err(DescriptorError::MissingName);
        }
        match (self.kind, self.episode.as_ref()) {
            (ContentKind::Series, None) => Err(DescriptorError::MissingEpisode),
            (ContentKind::Movie, Some(_)) => Err(DescriptorError::UnexpectedEpisode),
            _ => Ok(()),
        }
    }
}
