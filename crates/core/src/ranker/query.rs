//! Search query expansion from a show descriptor.

use std::collections::HashSet;

use crate::show::{ContentKind, ShowDescriptor};

/// Expand a descriptor into search query strings, deduplicated by value.
///
/// Series get two episode-marker variants per name (`S01E02` and `01x02`)
/// since backends index both conventions. Movies get every name both bare
/// and with the year appended - the bare variant keeps recall for backends
/// that don't index years, the year variant narrows generic one-word titles
/// that would otherwise over-match.
///
/// Assumes a validated descriptor; an empty name list yields no queries.
pub fn build_queries(show: &ShowDescriptor) -> Vec<String> {
    let names = show.distinct_names();
    let mut queries: Vec<String> = Vec::new();

    match show.kind {
        ContentKind::Series => {
            if let Some(se) = show.episode {
                for name in &names {
                    queries.push(format!("{} S{:02}E{:02}", name, se.season, se.episode));
                    queries.push(format!("{} {:02}x{:02}", name, se.season, se.episode));
                }
            }
        }
        ContentKind::Movie => {
            for name in &names {
                queries.push((*name).to_string());
            }
            if let Some(year) = show.year {
                for name in &names {
                    queries.push(format!("{name} {year}"));
                }
            }
        }
    }

    let mut seen = HashSet::new();
    queries.into_iter().filter(|q| seen.insert(q.clone())).collect()
}
