//! Remote AI service port definitions.
//!
//! This is the sole point of contact with the backend AI service; both
//! orchestrators depend on it and it depends on nothing else in this
//! system. Uses native async fn in traits (RPITIT, Rust 2024 edition).
//! Implementations live in gramin-infra (e.g., `GeminiService`).
//!
//! Both query-style operations are one-shot: a single completed result or
//! a single failure, no streaming, no internal retries.

use gramin_types::location::Coordinate;
use gramin_types::remote::{GroundedReply, PersonaConfig, RemoteError};

/// An open conversational session with the backend.
///
/// The handle is opaque: it is bound to the persona configuration it was
/// created with and carries whatever per-conversation state the backend
/// needs. A handle is exclusively owned by one session manager, so `send`
/// takes `&mut self` -- the at-most-one-outstanding-send invariant holds
/// in the type system as well as in the caller's latch.
pub trait Conversation: Send {
    /// One request/response exchange on this conversation.
    fn send(
        &mut self,
        text: &str,
    ) -> impl std::future::Future<Output = Result<String, RemoteError>> + Send;
}

/// The two logical operations the system performs against the backend.
///
/// Stateless from the caller's perspective: holds no data between calls
/// except inside the opaque handles it issues.
pub trait RemoteService: Send + Sync {
    type Handle: Conversation;

    /// Open a conversation bound to the given behavior configuration.
    ///
    /// The configuration is immutable for the handle's lifetime. Fails
    /// without touching the network when the service has no credential.
    fn start_conversation(&self, persona: &PersonaConfig) -> Result<Self::Handle, RemoteError>;

    /// One grounded search exchange parametrized by a location hint.
    fn grounded_query(
        &self,
        intent: &str,
        coordinate: Coordinate,
    ) -> impl std::future::Future<Output = Result<GroundedReply, RemoteError>> + Send;
}
