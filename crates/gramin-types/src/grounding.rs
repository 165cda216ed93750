//! Evidence chunk types for grounded query responses.
//!
//! The remote service returns supporting evidence as a list of
//! loosely-typed chunks: a chunk may describe a web page, a map place, or
//! neither. Anything unrecognized or malformed decodes to
//! [`EvidenceChunk::Unknown`] and is dropped by the retention filter
//! downstream instead of raising.

use serde::{Deserialize, Serialize};

/// One unit of supporting data returned alongside a generated answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EvidenceChunk {
    Web(WebEvidence),
    Map(MapEvidence),
    Unknown,
}

impl EvidenceChunk {
    /// The map payload, if this chunk carries one.
    pub fn map(&self) -> Option<&MapEvidence> {
        match self {
            EvidenceChunk::Map(map) => Some(map),
            _ => None,
        }
    }
}

/// Evidence pointing at a web page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebEvidence {
    pub uri: String,
    pub title: String,
}

/// Evidence pointing at a map place.
///
/// `title` may be empty when the service returned a map payload without a
/// usable name; such chunks are discarded by the retention filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapEvidence {
    pub uri: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place_id: Option<String>,
    /// Review excerpts for the place, best first. Only the first one is
    /// ever surfaced to a front end.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub review_snippets: Vec<String>,
}
