use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Server and fetch configuration
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Address to bind the HTTP server on
    #[serde(default = "default_bind")]
    pub bind: String,
    /// Port for the HTTP server
    #[serde(default = "default_port")]
    pub port: u16,
    /// Timeout for the outbound page fetch, in seconds. The target host is
    /// untrusted and may hang, so this is always bounded.
    #[serde(default = "default_fetch_timeout")]
    pub fetch_timeout: u64,
    /// User agent sent with the outbound fetch; some sites return an empty
    /// page without a browser-like one
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_bind() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8787
}

fn default_fetch_timeout() -> u64 {
    10
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120 Safari/537.36 VeckomatImporter/1.0".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            port: default_port(),
            fetch_timeout: default_fetch_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl AppConfig {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables with VECKOMAT__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: VECKOMAT__FETCH_TIMEOUT
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("config").required(false))
            .add_source(
                Environment::with_prefix("VECKOMAT")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
