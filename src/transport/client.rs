//! HTTP client for the lab API.
//!
//! # Responsibilities
//! - Perform the three protocol calls with a fixed per-call timeout
//! - Attach the bearer credential where a step requires one
//! - Surface network/status/parse failures as `TransportError`
//! - Provide the one-shot connectivity probe
//!
//! # Design Decisions
//! - The timeout is set once on the reqwest client, so every call gets
//!   the same bound without per-call plumbing
//! - Status is checked before JSON parsing; the raw body is kept in the
//!   error so the operator sees what the server actually said
//! - Missing response fields are not errors here; payload types carry
//!   `Option` fields and the protocol layer classifies absence

use std::time::Duration;

use reqwest::header::AUTHORIZATION;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::transport::types::{
    RawClaim, RawIssuance, RawVerification, TransportError, TransportResult,
};

/// Client for the token/verify/claim endpoints.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    probe_path: String,
}

impl ApiClient {
    /// Build a client with the configured per-call timeout.
    pub fn new(config: &ClientConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            probe_path: config.probe_path.clone(),
        })
    }

    /// Request a fresh token. No credential, no body.
    pub async fn issue_token(&self) -> TransportResult<RawIssuance> {
        self.post_json("/token", None, None).await
    }

    /// Verify a token, presenting it as a bearer credential.
    pub async fn verify_token(&self, token: &str) -> TransportResult<RawVerification> {
        self.post_json("/verify", Some(token), None).await
    }

    /// Claim the flag with token and secret.
    pub async fn claim_flag(&self, token: &str, secret: &str) -> TransportResult<RawClaim> {
        let body = serde_json::json!({ "secret": secret });
        self.post_json("/claim", Some(token), Some(body)).await
    }

    /// One-shot connectivity probe against the docs endpoint.
    ///
    /// Any 2xx passes. Runs once before the attempt loop; a failure
    /// aborts the run without consuming an attempt.
    pub async fn probe(&self) -> bool {
        let url = format!("{}{}", self.base_url, self.probe_path);
        match self.client.get(&url).send().await {
            Ok(response) => {
                let ok = response.status().is_success();
                if !ok {
                    tracing::warn!(status = %response.status(), "Probe failed: non-success status");
                }
                ok
            }
            Err(e) => {
                tracing::warn!(error = %e, "Probe failed: connection error");
                false
            }
        }
    }

    async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        bearer: Option<&str>,
        body: Option<Value>,
    ) -> TransportResult<T> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.post(&url);

        if let Some(token) = bearer {
            request = request.header(AUTHORIZATION, format!("Bearer {}", token));
        }
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        Ok(serde_json::from_str(&text)?)
    }
}
