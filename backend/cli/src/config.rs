use serde::Deserialize;

/// StudyForge runtime configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Gemini API key; required, the generation service has no offline mode
    pub gemini_api_key: Option<String>,
    /// Generation model id
    pub model: String,
    /// Override for the Generative Language API base URL
    pub gemini_base_url: Option<String>,
    /// Log level
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            model: "gemini-2.5-flash".to_string(),
            gemini_base_url: None,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables with sensible defaults.
    pub fn from_env() -> Self {
        Self {
            gemini_api_key: std::env::var("GEMINI_API_KEY").ok(),
            model: std::env::var("STUDYFORGE_MODEL")
                .unwrap_or_else(|_| "gemini-2.5-flash".to_string()),
            gemini_base_url: std::env::var("GEMINI_BASE_URL").ok(),
            log_level: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        }
    }
}
