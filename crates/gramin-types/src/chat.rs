//! Conversation transcript types for GraminHealth.
//!
//! A transcript is an append-only, ordered sequence of turns. Once a turn
//! is appended it is never edited; remote failures become error-flagged
//! assistant turns so the transcript stays a complete record of the
//! exchange, failures included.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::fmt;
use std::str::FromStr;

/// Author of a turn in a conversation transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    User,
    Assistant,
}

impl fmt::Display for TurnRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnRole::User => write!(f, "user"),
            TurnRole::Assistant => write!(f, "assistant"),
        }
    }
}

impl FromStr for TurnRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(TurnRole::User),
            "assistant" => Ok(TurnRole::Assistant),
            other => Err(format!("invalid turn role: '{other}'")),
        }
    }
}

/// One message in a conversation transcript.
///
/// Turn ids are UUIDv7, so they sort in append order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub id: Uuid,
    pub role: TurnRole,
    pub text: String,
    /// True for assistant turns that stand in for a failed remote call.
    pub is_error: bool,
    pub created_at: DateTime<Utc>,
}

impl ConversationTurn {
    /// A turn authored by the user.
    pub fn user(text: impl Into<String>) -> Self {
        Self::build(TurnRole::User, text.into(), false)
    }

    /// A normal assistant turn.
    pub fn assistant(text: impl Into<String>) -> Self {
        Self::build(TurnRole::Assistant, text.into(), false)
    }

    /// An assistant turn standing in for a failed remote call.
    pub fn error(text: impl Into<String>) -> Self {
        Self::build(TurnRole::Assistant, text.into(), true)
    }

    fn build(role: TurnRole, text: String, is_error: bool) -> Self {
        Self {
            id: Uuid::now_v7(),
            role,
            text,
            is_error,
            created_at: Utc::now(),
        }
    }
}

/// State of a chat session's send machinery.
///
/// `Uninitialized -> Ready` on a successful session start,
/// `Uninitialized -> Disconnected` when no conversation handle could be
/// obtained, and `Ready -> Sending -> Ready` around every send, success
/// or failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatPhase {
    Uninitialized,
    Ready,
    Sending,
    Disconnected,
}

impl fmt::Display for ChatPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChatPhase::Uninitialized => write!(f, "uninitialized"),
            ChatPhase::Ready => write!(f, "ready"),
            ChatPhase::Sending => write!(f, "sending"),
            ChatPhase::Disconnected => write!(f, "disconnected"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_role_roundtrip() {
        for role in [TurnRole::User, TurnRole::Assistant] {
            let s = role.to_string();
            let parsed: TurnRole = s.parse().unwrap();
            assert_eq!(role, parsed);
        }
    }

    #[test]
    fn test_turn_role_serde() {
        let json = serde_json::to_string(&TurnRole::Assistant).unwrap();
        assert_eq!(json, "\"assistant\"");
        let parsed: TurnRole = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, TurnRole::Assistant);
    }

    #[test]
    fn test_turn_constructors() {
        let user = ConversationTurn::user("I have a fever");
        assert_eq!(user.role, TurnRole::User);
        assert_eq!(user.text, "I have a fever");
        assert!(!user.is_error);

        let assistant = ConversationTurn::assistant("Rest and drink water.");
        assert_eq!(assistant.role, TurnRole::Assistant);
        assert!(!assistant.is_error);

        let error = ConversationTurn::error("connection trouble");
        assert_eq!(error.role, TurnRole::Assistant);
        assert!(error.is_error);
    }

    #[test]
    fn test_turn_ids_sort_in_append_order() {
        let a = ConversationTurn::user("first");
        let b = ConversationTurn::assistant("second");
        assert!(a.id < b.id);
    }

    #[test]
    fn test_chat_phase_display() {
        assert_eq!(ChatPhase::Disconnected.to_string(), "disconnected");
        assert_eq!(ChatPhase::Sending.to_string(), "sending");
    }
}
