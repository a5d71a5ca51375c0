use serde::Deserialize;
use std::path::PathBuf;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// OpenAI API key. When unset or blank the service runs in stub mode.
    #[serde(default)]
    pub openai_api_key: Option<String>,

    /// OpenAI API base URL
    #[serde(default = "default_openai_api_url")]
    pub openai_api_url: String,

    /// Chat model used for live explanations
    #[serde(default = "default_openai_model")]
    pub openai_model: String,

    /// Response length cap sent with every completion request
    #[serde(default = "default_completion_max_tokens")]
    pub completion_max_tokens: u32,

    /// Sampling temperature sent with every completion request
    #[serde(default = "default_completion_temperature")]
    pub completion_temperature: f32,

    /// Upper bound on a single completion call, in seconds
    #[serde(default = "default_completion_timeout_secs")]
    pub completion_timeout_secs: u64,

    /// Directory scanned for catalog files
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// File extension of catalog files inside `data_dir`
    #[serde(default = "default_catalog_extension")]
    pub catalog_extension: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_openai_api_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_openai_model() -> String {
    "gpt-4".to_string()
}

fn default_completion_max_tokens() -> u32 {
    400
}

fn default_completion_temperature() -> f32 {
    0.7
}

fn default_completion_timeout_secs() -> u64 {
    30
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_catalog_extension() -> String {
    "json".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// The API credential, if one is configured and not blank
    pub fn api_key(&self) -> Option<&str> {
        self.openai_api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    /// Socket address string the server binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
