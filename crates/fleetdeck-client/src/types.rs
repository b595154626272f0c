use serde::{Deserialize, Serialize};

/// Connection settings for the fleet admin API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the admin API, without trailing slash.
    pub base_url: String,
    /// Bearer token for the admin endpoints.
    pub api_token: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            api_token: String::new(),
            timeout_secs: 30,
        }
    }
}

fn default_timeout_secs() -> u64 {
    30
}
