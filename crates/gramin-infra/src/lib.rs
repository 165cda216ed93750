//! Infrastructure layer for GraminHealth.
//!
//! Contains implementations of the ports defined in `gramin-core`: the
//! Gemini generative-AI client, geolocation providers, configuration
//! loading, and API-key resolution from the environment.

pub mod config;
pub mod genai;
pub mod geo;
pub mod secret;
