//! Shared domain types for GraminHealth.
//!
//! This crate contains the core domain types used across the GraminHealth
//! system: conversation transcripts, coordinates, facility records, the
//! remote AI service contract, and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod chat;
pub mod config;
pub mod emergency;
pub mod grounding;
pub mod location;
pub mod remote;
