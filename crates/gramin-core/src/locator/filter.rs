//! Retention filter for grounded-query evidence.
//!
//! The remote service mixes map places, web pages, and unrecognized chunks
//! in one list. Only chunks carrying a map payload with a non-empty title
//! survive; everything else is discarded. Order is preserved -- the service
//! is assumed to sort by distance and the filter never re-sorts.

use gramin_types::grounding::EvidenceChunk;
use gramin_types::location::FacilityEvidence;

/// Project the retained chunks into display-ready facility records.
///
/// Of a place's review snippets, only the first is surfaced; having none
/// simply omits the field.
pub fn retain_facilities(chunks: &[EvidenceChunk]) -> Vec<FacilityEvidence> {
    chunks
        .iter()
        .filter_map(EvidenceChunk::map)
        .filter(|map| !map.title.is_empty())
        .map(|map| FacilityEvidence {
            title: map.title.clone(),
            map_uri: map.uri.clone(),
            review_snippet: map.review_snippets.first().cloned(),
        })
        .collect()
}
