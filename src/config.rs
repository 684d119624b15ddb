use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Base URL of the recipe API
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// HTTP request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// Number of search results per page
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Directory for persisted data (likes); `None` keeps state in memory only
    #[serde(default)]
    pub data_dir: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            api_base_url: default_api_base_url(),
            timeout: default_timeout(),
            page_size: default_page_size(),
            data_dir: None,
        }
    }
}

// Default value functions
fn default_api_base_url() -> String {
    "https://forkify-api.herokuapp.com".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_page_size() -> usize {
    10
}

impl AppConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with FORKFUL__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: FORKFUL__API_BASE_URL
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("config").required(false))
            .add_source(
                Environment::with_prefix("FORKFUL")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
