//! Chat session manager for the medical assistant.
//!
//! Owns one ordered transcript and routes user input through a live remote
//! conversation. Remote failures are converted to in-band error turns so
//! the transcript remains a complete, inspectable record of the exchange;
//! nothing propagates past this type and nothing is retried.
//!
//! Phase machine: `Uninitialized -> Ready` (start succeeds),
//! `Uninitialized -> Disconnected` (no handle could be obtained), and
//! `Ready -> Sending -> Ready` around every send, success or failure.

use gramin_types::chat::{ChatPhase, ConversationTurn};
use tracing::{debug, warn};

use crate::chat::persona::medical_persona;
use crate::remote::{Conversation, RemoteService};

/// Greeting synthesized locally as the first transcript entry. Never sent
/// to the remote service.
pub const WELCOME_TEXT: &str = "Namaste! I am your health assistant. I can help you \
understand symptoms or guide you on basic first aid. How are you feeling today?";

/// Substituted when the remote reply text is empty or absent.
pub const EMPTY_REPLY_TEXT: &str = "I'm sorry, I couldn't understand that. Please try again.";

/// In-band error turn text for a failed or impossible send. The raw error
/// goes to the log, never to the transcript.
pub const CONNECTION_TROUBLE_TEXT: &str =
    "I'm having trouble connecting right now. Please check your internet connection.";

/// One conversational session: transcript, phase, and the remote handle.
///
/// Created once per screen visit; dropping it discards the handle without
/// negotiating any close with the backend. Starting a new session means
/// starting a new transcript -- there is no merge.
pub struct AssistantSession<C: Conversation> {
    transcript: Vec<ConversationTurn>,
    phase: ChatPhase,
    handle: Option<C>,
}

impl<C: Conversation> AssistantSession<C> {
    /// A fresh session: welcome turn in place, no remote handle yet.
    pub fn new() -> Self {
        Self {
            transcript: vec![ConversationTurn::assistant(WELCOME_TEXT)],
            phase: ChatPhase::Uninitialized,
            handle: None,
        }
    }

    /// Request a conversation handle bound to the medical persona.
    ///
    /// Called exactly once per session; a repeat call is ignored. Failure
    /// lands the session in `Disconnected`, from which every send yields
    /// the connection-trouble error turn without touching the network.
    pub fn start_session<R>(&mut self, remote: &R)
    where
        R: RemoteService<Handle = C>,
    {
        if self.phase != ChatPhase::Uninitialized {
            warn!(phase = %self.phase, "start_session called on an already-started session; ignoring");
            return;
        }
        match remote.start_conversation(&medical_persona()) {
            Ok(handle) => {
                self.handle = Some(handle);
                self.phase = ChatPhase::Ready;
            }
            Err(err) => {
                warn!(error = %err, "could not open assistant conversation; session is disconnected");
                self.phase = ChatPhase::Disconnected;
            }
        }
    }

    /// Route one user message through the remote conversation.
    ///
    /// No-op for empty/whitespace-only input, before `start_session`, or
    /// while a send is in flight (the rejected call is dropped, not
    /// queued). Otherwise appends the user turn with the literal input
    /// text, then exactly one assistant turn: the reply, the empty-reply
    /// fallback, or an error-flagged turn.
    pub async fn send_message(&mut self, text: &str) {
        if text.trim().is_empty() {
            debug!("dropping empty message");
            return;
        }

        match self.phase {
            ChatPhase::Uninitialized => {
                debug!("no conversation handle; dropping message");
                return;
            }
            ChatPhase::Sending => {
                debug!("send already in flight; dropping message");
                return;
            }
            ChatPhase::Disconnected => {
                self.transcript.push(ConversationTurn::user(text));
                self.transcript
                    .push(ConversationTurn::error(CONNECTION_TROUBLE_TEXT));
                return;
            }
            ChatPhase::Ready => {}
        }

        self.transcript.push(ConversationTurn::user(text));
        self.phase = ChatPhase::Sending;

        // Ready implies a handle; treat a missing one as a failed send
        // rather than panicking in the UI loop.
        let reply = match self.handle.as_mut() {
            Some(handle) => handle.send(text).await,
            None => Err(gramin_types::remote::RemoteError::MissingCredential),
        };

        let turn = match reply {
            Ok(reply) if reply.trim().is_empty() => ConversationTurn::assistant(EMPTY_REPLY_TEXT),
            Ok(reply) => ConversationTurn::assistant(reply),
            Err(err) => {
                warn!(error = %err, "assistant send failed");
                ConversationTurn::error(CONNECTION_TROUBLE_TEXT)
            }
        };
        self.transcript.push(turn);

        // Released on every outcome, success or failure.
        self.phase = ChatPhase::Ready;
    }

    /// The append-only transcript, welcome turn first.
    pub fn transcript(&self) -> &[ConversationTurn] {
        &self.transcript
    }

    pub fn phase(&self) -> ChatPhase {
        self.phase
    }

    /// The most recent turn, if any beyond the welcome exists.
    pub fn last_turn(&self) -> Option<&ConversationTurn> {
        self.transcript.last()
    }
}

impl<C: Conversation> Default for AssistantSession<C> {
    fn default() -> Self {
        Self::new()
    }
}
