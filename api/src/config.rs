use std::env;

pub const DEFAULT_FEED_URL: &str = "https://www.trumpstruth.org/feed";
pub const DEFAULT_API_VERSION: &str = "2024-06-01";
pub const DEFAULT_MIN_WORD_COUNT: usize = 1;
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful assistant that rewrites text to have a \
positive, uplifting sentiment. Preserve the original meaning as much as possible and keep the \
response concise.";

/// Placeholder values written by deployment templates when no provider exists
const PLACEHOLDER_ENDPOINT: &str = "https://fallback.openai.azure.com";
const PLACEHOLDER_API_KEY: &str = "fallback-key";

#[derive(Clone)]
pub struct Config {
    pub feed_url: String,
    /// Minimum whitespace-separated words a feed entry needs to be kept
    pub min_word_count: usize,
    pub system_prompt: String,
    pub azure_openai: AzureOpenAiSettings,
    pub port: u16,
}

/// Azure OpenAI connection settings. Empty strings mean "absent".
#[derive(Clone, Default)]
pub struct AzureOpenAiSettings {
    pub endpoint: String,
    pub api_key: String,
    pub deployment: String,
    pub api_version: String,
}

impl std::fmt::Debug for AzureOpenAiSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AzureOpenAiSettings")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"<redacted>")
            .field("deployment", &self.deployment)
            .field("api_version", &self.api_version)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_string());

        Self {
            feed_url: var("FEED_URL")
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_FEED_URL.to_string()),
            min_word_count: var("MIN_WORD_COUNT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MIN_WORD_COUNT),
            system_prompt: var("OPENAI_SYSTEM_PROMPT")
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_SYSTEM_PROMPT.to_string()),
            azure_openai: AzureOpenAiSettings {
                endpoint: var("AZURE_OPENAI_ENDPOINT").unwrap_or_default(),
                api_key: var("AZURE_OPENAI_API_KEY").unwrap_or_default(),
                deployment: var("AZURE_OPENAI_DEPLOYMENT").unwrap_or_default(),
                api_version: var("AZURE_OPENAI_API_VERSION")
                    .filter(|v| !v.is_empty())
                    .unwrap_or_else(|| DEFAULT_API_VERSION.to_string()),
            },
            port: var("PORT").and_then(|p| p.parse().ok()).unwrap_or(8080),
        }
    }
}

impl AzureOpenAiSettings {
    /// Check if every setting needed to call the provider is present and real
    pub fn is_configured(&self) -> bool {
        !self.endpoint.is_empty()
            && !self.api_key.is_empty()
            && !self.deployment.is_empty()
            && self.endpoint.trim_end_matches('/') != PLACEHOLDER_ENDPOINT
            && self.api_key != PLACEHOLDER_API_KEY
    }

    /// Endpoint with an `https://` scheme added when none was given
    pub fn normalized_endpoint(&self) -> String {
        let endpoint = self.endpoint.trim_end_matches('/');
        let lower = endpoint.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            endpoint.to_string()
        } else {
            format!("https://{}", endpoint)
        }
    }
}
