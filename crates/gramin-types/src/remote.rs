//! Remote AI service contract types for GraminHealth.
//!
//! These types model the two logical operations the system performs against
//! the hosted generative-AI backend: a multi-turn conversation and a
//! one-shot location-grounded query. They are provider-agnostic -- the
//! concrete wire shapes live in `gramin-infra`.

use serde::{Deserialize, Serialize};

use crate::grounding::EvidenceChunk;

/// Behavior configuration bound to a conversation handle at creation.
///
/// Immutable for the handle's lifetime: there is no mid-conversation
/// persona change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonaConfig {
    pub system_instruction: String,
    pub temperature: f64,
}

/// Result of a grounded location query.
///
/// `text` is the narrative answer; callers substitute a placeholder when it
/// is absent. `chunks` is the supporting evidence in the order the service
/// returned it (assumed distance-sorted; never re-sorted here).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroundedReply {
    pub text: Option<String>,
    pub chunks: Vec<EvidenceChunk>,
}

/// Errors from remote AI service operations.
///
/// None of these are retried by the client layer; retry policy, if any,
/// belongs to the caller.
#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    #[error("no API credential configured")]
    MissingCredential,

    #[error("provider error: {message}")]
    Provider { message: String },

    #[error("deserialization error: {0}")]
    Deserialization(String),

    #[error("rate limited (retry after {retry_after_ms:?}ms)")]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("authentication failed")]
    AuthenticationFailed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_error_display() {
        let err = RemoteError::Provider {
            message: "HTTP 500: boom".to_string(),
        };
        assert_eq!(err.to_string(), "provider error: HTTP 500: boom");
        assert_eq!(
            RemoteError::MissingCredential.to_string(),
            "no API credential configured"
        );
    }

    #[test]
    fn test_grounded_reply_serde() {
        let reply = GroundedReply {
            text: Some("Two clinics nearby.".to_string()),
            chunks: Vec::new(),
        };
        let json = serde_json::to_string(&reply).unwrap();
        let parsed: GroundedReply = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.text.as_deref(), Some("Two clinics nearby."));
        assert!(parsed.chunks.is_empty());
    }
}
