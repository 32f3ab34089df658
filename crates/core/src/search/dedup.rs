//! Deduplication of search hits by backend identifier.

use std::collections::HashMap;

use tracing::warn;

use super::RawHit;
use crate::metrics;

/// Deduplicate raw hits by identifier.
///
/// When the same identifier appears more than once (typically because
/// several queries returned the same file), the **last** occurrence wins
/// but the hit keeps the position where its identifier was first seen.
/// Callers relying on first-seen metadata must therefore query in ascending
/// priority order. Downstream rank stability is defined over this order.
///
/// Hits with an empty identifier cannot be deduplicated or played and are
/// dropped with a warning.
pub fn deduplicate_hits(raw: Vec<RawHit>) -> Vec<RawHit> {
    let mut slot_by_ident: HashMap<String, usize> = HashMap::new();
    let mut hits: Vec<RawHit> = Vec::new();

    for hit in raw {
        if hit.ident.is_empty() {
            warn!(name = %hit.name, "dropping search hit without an identifier");
            metrics::HITS_MISSING_IDENT.inc();
            continue;
        }
        match slot_by_ident.get(&hit.ident) {
            Some(&slot) => hits[slot] = hit,
            None => {
                slot_by_ident.insert(hit.ident.clone(), hits.len());
                hits.push(hit);
            }
        }
    }

    hits
}
