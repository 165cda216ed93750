//! Generative Language API wire types.
//!
//! These are Gemini-specific request/response structures used for HTTP
//! communication with the `generateContent` endpoint. They are NOT the
//! generic contract types from gramin-types -- those are
//! provider-agnostic. Response shapes deserialize defensively: every field
//! defaults, so a sparse or unfamiliar payload degrades to empty values
//! instead of a parse error.

use serde::{Deserialize, Serialize};

use gramin_types::grounding::{EvidenceChunk, MapEvidence, WebEvidence};

/// Request body for `models/{model}:generateContent`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiRequest {
    pub contents: Vec<GeminiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<GeminiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<GeminiTool>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_config: Option<GeminiToolConfig>,
}

/// One content entry: a role plus text parts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeminiContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub parts: Vec<GeminiPart>,
}

impl GeminiContent {
    pub fn user(text: &str) -> Self {
        Self::with_role("user", text)
    }

    pub fn model(text: &str) -> Self {
        Self::with_role("model", text)
    }

    /// System instructions carry no role.
    pub fn system(text: &str) -> Self {
        Self {
            role: None,
            parts: vec![GeminiPart {
                text: Some(text.to_string()),
            }],
        }
    }

    fn with_role(role: &str, text: &str) -> Self {
        Self {
            role: Some(role.to_string()),
            parts: vec![GeminiPart {
                text: Some(text.to_string()),
            }],
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeminiPart {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
}

/// Tool declaration; the grounded query enables Maps grounding.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiTool {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_maps: Option<GoogleMapsTool>,
}

/// Marker object; the API expects `{"googleMaps": {}}`.
#[derive(Debug, Clone, Serialize)]
pub struct GoogleMapsTool {}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiToolConfig {
    pub retrieval_config: RetrievalConfig,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RetrievalConfig {
    pub lat_lng: LatLng,
}

#[derive(Debug, Clone, Serialize)]
pub struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

/// Response body for `generateContent`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeminiResponse {
    pub candidates: Vec<GeminiCandidate>,
}

impl GeminiResponse {
    /// The first candidate's text parts joined, or `None` when the
    /// response carried no usable text.
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let joined: String = content
            .parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect();
        if joined.is_empty() { None } else { Some(joined) }
    }

    /// Grounding chunks of the first candidate, converted into the
    /// generic evidence shape.
    pub fn evidence_chunks(&self) -> Vec<EvidenceChunk> {
        self.candidates
            .first()
            .and_then(|candidate| candidate.grounding_metadata.as_ref())
            .map(|metadata| {
                metadata
                    .grounding_chunks
                    .iter()
                    .cloned()
                    .map(EvidenceChunk::from)
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeminiCandidate {
    pub content: Option<GeminiContent>,
    pub grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GroundingMetadata {
    pub grounding_chunks: Vec<RawGroundingChunk>,
}

/// A grounding chunk as the wire carries it: maybe a web source, maybe a
/// map place, maybe nothing recognizable.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawGroundingChunk {
    pub web: Option<RawWebSource>,
    pub maps: Option<RawMapSource>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawWebSource {
    pub uri: String,
    pub title: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawMapSource {
    pub uri: String,
    pub title: String,
    pub place_id: Option<String>,
    pub place_answer_sources: Option<RawPlaceAnswerSources>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawPlaceAnswerSources {
    pub review_snippets: Vec<RawReviewSnippet>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawReviewSnippet {
    pub content: String,
}

impl From<RawGroundingChunk> for EvidenceChunk {
    fn from(raw: RawGroundingChunk) -> Self {
        if let Some(maps) = raw.maps {
            let review_snippets = maps
                .place_answer_sources
                .map(|sources| {
                    sources
                        .review_snippets
                        .into_iter()
                        .map(|snippet| snippet.content)
                        .collect()
                })
                .unwrap_or_default();
            EvidenceChunk::Map(MapEvidence {
                uri: maps.uri,
                title: maps.title,
                place_id: maps.place_id,
                review_snippets,
            })
        } else if let Some(web) = raw.web {
            EvidenceChunk::Web(WebEvidence {
                uri: web.uri,
                title: web.title,
            })
        } else {
            EvidenceChunk::Unknown
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serialization_is_camel_case() {
        let req = GeminiRequest {
            contents: vec![GeminiContent::user("Hello")],
            system_instruction: Some(GeminiContent::system("Be helpful.")),
            generation_config: Some(GenerationConfig {
                temperature: Some(0.7),
            }),
            tools: None,
            tool_config: None,
        };

        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(json["contents"][0]["parts"][0]["text"], "Hello");
        assert_eq!(json["systemInstruction"]["parts"][0]["text"], "Be helpful.");
        assert!(json["systemInstruction"].get("role").is_none());
        assert_eq!(json["generationConfig"]["temperature"], 0.7);
        assert!(json.get("tools").is_none());
        assert!(json.get("toolConfig").is_none());
    }

    #[test]
    fn test_grounded_request_serialization() {
        let req = GeminiRequest {
            contents: vec![GeminiContent::user("find clinics")],
            system_instruction: None,
            generation_config: None,
            tools: Some(vec![GeminiTool {
                google_maps: Some(GoogleMapsTool {}),
            }]),
            tool_config: Some(GeminiToolConfig {
                retrieval_config: RetrievalConfig {
                    lat_lng: LatLng {
                        latitude: 28.6,
                        longitude: 77.2,
                    },
                },
            }),
        };

        let json = serde_json::to_value(&req).unwrap();
        assert!(json["tools"][0]["googleMaps"].is_object());
        assert_eq!(
            json["toolConfig"]["retrievalConfig"]["latLng"]["latitude"],
            28.6
        );
        assert_eq!(
            json["toolConfig"]["retrievalConfig"]["latLng"]["longitude"],
            77.2
        );
    }

    #[test]
    fn test_response_text_joins_parts() {
        let json = r#"{
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [{"text": "Hello "}, {"text": "there."}]
                }
            }]
        }"#;
        let response: GeminiResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.text().as_deref(), Some("Hello there."));
    }

    #[test]
    fn test_response_without_candidates_has_no_text() {
        let response: GeminiResponse = serde_json::from_str("{}").unwrap();
        assert!(response.text().is_none());
        assert!(response.evidence_chunks().is_empty());
    }

    #[test]
    fn test_grounding_chunks_convert_defensively() {
        let json = r#"{
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "ok"}]},
                "groundingMetadata": {
                    "groundingChunks": [
                        {"maps": {
                            "uri": "https://maps.example/vc",
                            "title": "Village Clinic",
                            "placeId": "p1",
                            "placeAnswerSources": {
                                "reviewSnippets": [{"content": "X"}, {"content": "Y"}]
                            }
                        }},
                        {"web": {"uri": "https://example.com", "title": "Article"}},
                        {},
                        {"maps": {"uri": "https://maps.example/unnamed", "title": ""}}
                    ]
                }
            }]
        }"#;
        let response: GeminiResponse = serde_json::from_str(json).unwrap();
        let chunks = response.evidence_chunks();
        assert_eq!(chunks.len(), 4);

        let map = chunks[0].map().unwrap();
        assert_eq!(map.title, "Village Clinic");
        assert_eq!(map.place_id.as_deref(), Some("p1"));
        assert_eq!(map.review_snippets, ["X", "Y"]);

        assert!(matches!(&chunks[1], EvidenceChunk::Web(web) if web.title == "Article"));
        assert_eq!(chunks[2], EvidenceChunk::Unknown);
        assert_eq!(chunks[3].map().unwrap().title, "");
    }

    #[test]
    fn test_unfamiliar_chunk_payload_decodes_to_unknown() {
        let json = r#"{"retrievedContext": {"uri": "x", "text": "y"}}"#;
        let raw: RawGroundingChunk = serde_json::from_str(json).unwrap();
        assert_eq!(EvidenceChunk::from(raw), EvidenceChunk::Unknown);
    }
}
