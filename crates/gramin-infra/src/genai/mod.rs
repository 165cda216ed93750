//! Gemini implementation of the remote AI service contract.

mod client;
mod types;

pub use client::{GeminiConversation, GeminiService};
