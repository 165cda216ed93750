//! Orchestration logic and port definitions for GraminHealth.
//!
//! This crate defines the "ports" (the remote service and location provider
//! traits) that the infrastructure layer implements, plus the two
//! orchestrators built on them: the chat session manager and the facility
//! locator. It depends only on `gramin-types` -- never on `gramin-infra`
//! or any HTTP/IO crate.

pub mod chat;
pub mod emergency;
pub mod location;
pub mod locator;
pub mod remote;
