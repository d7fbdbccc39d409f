//! API configuration

use serde::Deserialize;

/// API configuration
///
/// Read from `INTAKE_*` environment variables; unset fields keep their
/// defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// CSV file with the policy table
    pub policy_table_path: String,
    /// ONNX image classifier
    pub model_path: String,
    /// Newline-separated class labels of the model
    pub labels_path: String,
    /// Fixed seed for damage estimates; entropy when unset
    pub rng_seed: Option<u64>,
    /// Largest accepted request body, in bytes
    pub max_upload_bytes: usize,
    /// CSV file the claim history is restored from at startup and saved to on shutdown
    pub history_path: Option<String>,
    /// Minutes an unfinished wizard session is kept before it is evicted
    pub session_ttl_minutes: u32,
    /// Log level
    pub log_level: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            policy_table_path: "data/policies.csv".to_string(),
            model_path: "models/resnet50.onnx".to_string(),
            labels_path: "models/imagenet_classes.txt".to_string(),
            rng_seed: None,
            max_upload_bytes: 10 * 1024 * 1024,
            history_path: None,
            session_ttl_minutes: 60,
            log_level: "info".to_string(),
        }
    }
}

impl ApiConfig {
    /// Loads configuration from environment
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("INTAKE").try_parsing(true))
            .build()?
            .try_deserialize()
    }

    pub fn session_ttl(&self) -> chrono::Duration {
        chrono::Duration::minutes(i64::from(self.session_ttl_minutes))
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
