//! GeminiService -- concrete [`RemoteService`] implementation for the
//! Google Generative Language API.
//!
//! Sends requests to `models/{model}:generateContent` with the
//! `x-goog-api-key` header. Conversations keep their turn history on this
//! side and resend it with every exchange; the grounded query enables
//! Maps grounding with the coordinate as the retrieval hint.
//!
//! The API key is wrapped in [`secrecy::SecretString`] and is never logged.
//! A service may be built without a credential; both operations then fail
//! with [`RemoteError::MissingCredential`] before touching the network.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use gramin_core::remote::{Conversation, RemoteService};
use gramin_types::config::AppConfig;
use gramin_types::location::Coordinate;
use gramin_types::remote::{GroundedReply, PersonaConfig, RemoteError};

use super::types::{
    GeminiContent, GeminiRequest, GeminiResponse, GeminiTool, GeminiToolConfig, GenerationConfig,
    GoogleMapsTool, LatLng, RetrievalConfig,
};
use crate::secret::resolve_api_key;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Gemini-backed remote AI service.
// No Debug derive: the client must never end up in logs, even though the
// SecretString field would redact itself.
#[derive(Clone)]
pub struct GeminiService {
    client: reqwest::Client,
    api_key: Option<SecretString>,
    base_url: String,
    model: String,
}

impl GeminiService {
    /// Create a service with an explicit API key.
    pub fn new(api_key: SecretString, model: String) -> Self {
        Self::build(Some(api_key), model, Duration::from_secs(30))
    }

    /// Create a service from the environment and configuration.
    ///
    /// A missing `GEMINI_API_KEY` does not fail here; the resulting
    /// service refuses both operations with `MissingCredential`, which is
    /// what lands a chat session in its disconnected state.
    pub fn from_env(config: &AppConfig) -> Self {
        Self::build(
            resolve_api_key(),
            config.model.clone(),
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    fn build(api_key: Option<SecretString>, model: String, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            model,
        }
    }

    /// Override the base URL (useful for testing or proxies).
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    fn key(&self) -> Result<&SecretString, RemoteError> {
        self.api_key.as_ref().ok_or(RemoteError::MissingCredential)
    }

    /// One `generateContent` exchange. Never retried here.
    async fn generate(&self, body: &GeminiRequest) -> Result<GeminiResponse, RemoteError> {
        let key = self.key()?;

        let response = self
            .client
            .post(self.url())
            .header("x-goog-api-key", key.expose_secret())
            .header("content-type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| RemoteError::Provider {
                message: format!("HTTP request failed: {e}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(match status.as_u16() {
                401 | 403 => RemoteError::AuthenticationFailed,
                429 => RemoteError::RateLimited {
                    retry_after_ms: None,
                },
                _ => RemoteError::Provider {
                    message: format!("HTTP {status}: {error_body}"),
                },
            });
        }

        response
            .json::<GeminiResponse>()
            .await
            .map_err(|e| RemoteError::Deserialization(format!("failed to parse response: {e}")))
    }

    fn grounded_request(intent: &str, coordinate: Coordinate) -> GeminiRequest {
        GeminiRequest {
            contents: vec![GeminiContent::user(intent)],
            system_instruction: None,
            generation_config: None,
            tools: Some(vec![GeminiTool {
                google_maps: Some(GoogleMapsTool {}),
            }]),
            tool_config: Some(GeminiToolConfig {
                retrieval_config: RetrievalConfig {
                    lat_lng: LatLng {
                        latitude: coordinate.latitude(),
                        longitude: coordinate.longitude(),
                    },
                },
            }),
        }
    }
}

impl RemoteService for GeminiService {
    type Handle = GeminiConversation;

    fn start_conversation(&self, persona: &PersonaConfig) -> Result<GeminiConversation, RemoteError> {
        // Fail fast without touching the network when there is no key.
        self.key()?;
        Ok(GeminiConversation {
            service: self.clone(),
            persona: persona.clone(),
            history: Vec::new(),
        })
    }

    async fn grounded_query(
        &self,
        intent: &str,
        coordinate: Coordinate,
    ) -> Result<GroundedReply, RemoteError> {
        let body = Self::grounded_request(intent, coordinate);
        let response = self.generate(&body).await?;
        Ok(GroundedReply {
            text: response.text(),
            chunks: response.evidence_chunks(),
        })
    }
}

/// An open Gemini conversation.
///
/// Bound to the persona it was created with for its whole lifetime. The
/// turn history lives here and is resent with each request; an exchange is
/// committed to it only after a successful reply, so a failed send leaves
/// no dangling user message behind.
pub struct GeminiConversation {
    service: GeminiService,
    persona: PersonaConfig,
    history: Vec<GeminiContent>,
}

impl GeminiConversation {
    /// Committed turns so far (user and model, alternating).
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    fn chat_request(&self, contents: Vec<GeminiContent>) -> GeminiRequest {
        GeminiRequest {
            contents,
            system_instruction: Some(GeminiContent::system(&self.persona.system_instruction)),
            generation_config: Some(GenerationConfig {
                temperature: Some(self.persona.temperature),
            }),
            tools: None,
            tool_config: None,
        }
    }
}

impl Conversation for GeminiConversation {
    async fn send(&mut self, text: &str) -> Result<String, RemoteError> {
        let mut contents = self.history.clone();
        contents.push(GeminiContent::user(text));

        let body = self.chat_request(contents.clone());
        let response = self.service.generate(&body).await?;
        let reply = response.text().unwrap_or_default();

        self.history = contents;
        self.history.push(GeminiContent::model(&reply));
        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gramin_core::chat::persona::medical_persona;

    fn make_service() -> GeminiService {
        GeminiService::new(
            SecretString::from("test-key-not-real"),
            "gemini-2.5-flash".to_string(),
        )
    }

    #[test]
    fn test_url_construction() {
        let service = make_service().with_base_url("http://localhost:8080".to_string());
        assert_eq!(
            service.url(),
            "http://localhost:8080/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn test_start_conversation_without_key_fails() {
        let service = GeminiService::build(None, "gemini-2.5-flash".to_string(), Duration::from_secs(5));
        let result = service.start_conversation(&medical_persona());
        assert!(matches!(result, Err(RemoteError::MissingCredential)));
    }

    #[tokio::test]
    async fn test_grounded_query_without_key_fails_before_network() {
        let service = GeminiService::build(None, "gemini-2.5-flash".to_string(), Duration::from_secs(5));
        // No server behind this base URL; a network attempt would error
        // differently, so MissingCredential proves the early return.
        let service = service.with_base_url("http://127.0.0.1:9".to_string());
        let coordinate = Coordinate::new(28.6, 77.2).unwrap();
        let result = service.grounded_query("find clinics", coordinate).await;
        assert!(matches!(result, Err(RemoteError::MissingCredential)));
    }

    #[test]
    fn test_fresh_conversation_has_empty_history() {
        let service = make_service();
        let conversation = service.start_conversation(&medical_persona()).unwrap();
        assert_eq!(conversation.history_len(), 0);
    }

    #[test]
    fn test_chat_request_carries_persona() {
        let service = make_service();
        let conversation = service.start_conversation(&medical_persona()).unwrap();
        let body = conversation.chat_request(vec![GeminiContent::user("hello")]);

        let json = serde_json::to_value(&body).unwrap();
        assert!(
            json["systemInstruction"]["parts"][0]["text"]
                .as_str()
                .unwrap()
                .contains("GraminHealth")
        );
        assert_eq!(json["generationConfig"]["temperature"], 0.7);
        assert!(json.get("tools").is_none());
    }

    #[test]
    fn test_grounded_request_shape() {
        let coordinate = Coordinate::new(28.6, 77.2).unwrap();
        let body = GeminiService::grounded_request("find clinics", coordinate);

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["text"], "find clinics");
        assert!(json["tools"][0]["googleMaps"].is_object());
        assert_eq!(
            json["toolConfig"]["retrievalConfig"]["latLng"]["latitude"],
            28.6
        );
        assert!(json.get("systemInstruction").is_none());
    }
}
