//! Shared application state for CLI commands.

use gramin_infra::config::{default_data_dir, load_config};
use gramin_infra::genai::GeminiService;
use gramin_types::config::AppConfig;

/// Configuration plus the remote service, built once at startup.
pub struct AppState {
    pub config: AppConfig,
    pub service: GeminiService,
}

impl AppState {
    /// Load `config.toml` and build the Gemini service from the
    /// environment. Never fails: a missing config means defaults, a
    /// missing API key means a service that reports the problem on use.
    pub async fn init() -> Self {
        let config = load_config(&default_data_dir()).await;
        let service = GeminiService::from_env(&config);
        Self { config, service }
    }
}
