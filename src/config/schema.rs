//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.
//! Every field has a default so a minimal (or absent) config file works.

use serde::{Deserialize, Serialize};

/// Root configuration for a run.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RunConfig {
    /// HTTP client settings (endpoint, timeout, probe path).
    pub client: ClientConfig,

    /// Retry policy for the attempt loop.
    pub retry: RetryConfig,
}

/// HTTP client configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base address of the target API (e.g., "http://10.3.10.104:3000").
    pub base_url: String,

    /// Per-call timeout in milliseconds, applied to every request.
    pub request_timeout_ms: u64,

    /// Path probed once before the attempt loop; any 2xx passes.
    pub probe_path: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            request_timeout_ms: 3_000,
            probe_path: "/docs".to_string(),
        }
    }
}

/// Retry policy configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Maximum number of full attempts before giving up.
    pub max_attempts: u32,

    /// Delay after a failed token issuance in milliseconds.
    pub issue_retry_delay_ms: u64,

    /// Delay after a failed claim in milliseconds.
    pub claim_retry_delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 10,
            issue_retry_delay_ms: 500,
            claim_retry_delay_ms: 200,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RunConfig::default();
        assert_eq!(config.client.request_timeout_ms, 3_000);
        assert_eq!(config.client.probe_path, "/docs");
        assert_eq!(config.retry.max_attempts, 10);
        assert_eq!(config.retry.issue_retry_delay_ms, 500);
        assert_eq!(config.retry.claim_retry_delay_ms, 200);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: RunConfig = toml::from_str(
            r#"
            [client]
            base_url = "http://10.3.10.104:3000"
            "#,
        )
        .unwrap();
        assert_eq!(config.client.base_url, "http://10.3.10.104:3000");
        assert_eq!(config.client.request_timeout_ms, 3_000);
        assert_eq!(config.retry.max_attempts, 10);
    }
}
