//! Candidate enrichment - derives the comparison fields for one raw hit.

use crate::ranker::normalize::{clean_title, normalize_text};
use crate::ranker::types::EnrichedCandidate;
use crate::release::{self, ParsedTitle};
use crate::show::{ContentKind, ShowDescriptor};

/// Attach comparison titles and year strings to a parsed hit.
///
/// Year comparison only engages for movies where both sides carry a year
/// AND the descriptor's original title does not itself parse out a year -
/// a film named after a year ("1917") must not be penalized because its
/// title digits coincide with a release year.
pub fn enrich(hit: crate::search::RawHit, parsed: ParsedTitle, show: &ShowDescriptor) -> EnrichedCandidate {
    let years_comparable = show.kind == ContentKind::Movie
        && parsed.year.is_some()
        && show.year.is_some()
        && show
            .original_name
            .as_deref()
            .is_none_or(|name| release::parse(name).year.is_none());

    let (reference_year, item_year) = if years_comparable {
        (
            show.year.map(|y| y.to_string()).unwrap_or_default(),
            parsed.year.map(|y| y.to_string()).unwrap_or_default(),
        )
    } else {
        (String::new(), String::new())
    };

    // The year suffix keeps title and year comparable in one string: the
    // candidate carries its own year, the references carry the descriptor's.
    let cleaned_title = format!("{}{}", clean_title(&parsed.title), item_year);

    let reference_titles: Vec<String> = show
        .name_slots()
        .into_iter()
        .flatten()
        .map(|name| normalize_text(&format!("{name}{reference_year}")))
        .filter(|t| !t.is_empty())
        .collect();

    EnrichedCandidate {
        hit,
        parsed,
        cleaned_title,
        item_year,
        reference_year,
        reference_titles,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::RawHit;

    fn make_hit(name: &str) -> RawHit {
        RawHit {
            ident: "abc".to_string(),
            name: name.to_string(),
            ..Default::default()
        }
    }

    fn enrich_named(filename: &str, show: &ShowDescriptor) -> EnrichedCandidate {
        let parsed = release::parse(filename);
        enrich(make_hit(filename), parsed, show)
    }

    #[test]
    fn test_movie_with_years_on_both_sides() {
        let show = ShowDescriptor::movie("Soul", Some(2020));
        let candidate = enrich_named("Soul.2020.1080p.WEB.mkv", &show);

        assert_eq!(candidate.reference_year, "2020");
        assert_eq!(candidate.item_year, "2020");
        assert_eq!(candidate.cleaned_title, "soul2020");
        assert_eq!(candidate.reference_titles, vec!["soul2020"]);
    }

    #[test]
    fn test_movie_hit_without_year_disables_comparison() {
        let show = ShowDescriptor::movie("Soul", Some(2020));
        let candidate = enrich_named("Soul.1080p.WEB.mkv", &show);

        assert!(candidate.reference_year.is_empty());
        assert!(candidate.item_year.is_empty());
        assert_eq!(candidate.cleaned_title, "soul");
        assert_eq!(candidate.reference_titles, vec!["soul"]);
    }

    #[test]
    fn test_descriptor_without_year_disables_comparison() {
        let show = ShowDescriptor::movie("Soul", None);
        let candidate = enrich_named("Soul.2020.1080p.WEB.mkv", &show);

        assert!(candidate.item_year.is_empty());
        assert_eq!(candidate.cleaned_title, "soul");
    }

    #[test]
    fn test_series_never_compares_years() {
        let show = ShowDescriptor::series("Show", 1, 2);
        let candidate = enrich_named("Show.2020.S01E02.mkv", &show);

        assert!(candidate.reference_year.is_empty());
        assert!(candidate.item_year.is_empty());
    }

    #[test]
    fn test_original_title_containing_year_disables_comparison() {
        let mut show = ShowDescriptor::movie("1917", Some(2019));
        show.original_name = Some("1917".to_string());
        let candidate = enrich_named("1917.2019.BluRay.mkv", &show);

        // The title's own digits parse as a year, so year matching is off.
        assert!(candidate.reference_year.is_empty());
        assert!(candidate.item_year.is_empty());
        assert_eq!(candidate.cleaned_title, "1917");
    }

    #[test]
    fn test_reference_titles_cover_all_slots() {
        let show = ShowDescriptor {
            name: Some("Soul".to_string()),
            local_name: Some("Duše".to_string()),
            english_name: Some("Soul".to_string()),
            original_name: Some("Soul Movie".to_string()),
            year: Some(2020),
            kind: ContentKind::Movie,
            episode: None,
        };
        let candidate = enrich_named("Soul.2020.mkv", &show);

        assert_eq!(
            candidate.reference_titles,
            vec!["soul2020", "duse2020", "soul2020", "soul movie2020"]
        );
    }
}
