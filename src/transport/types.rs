//! Wire payloads and error definitions for the lab API.

use serde::Deserialize;
use thiserror::Error;

/// Response body of `POST /token`.
///
/// Every field is optional on the wire: a well-formed body missing a
/// field still deserializes, and the protocol layer decides what that
/// absence means.
#[derive(Debug, Clone, Deserialize)]
pub struct RawIssuance {
    pub token: Option<String>,

    /// Server-side issuance instant, epoch milliseconds.
    #[serde(rename = "issuedAtMs")]
    pub issued_at_ms: Option<i64>,

    /// Budget for calling verify, measured from `issuedAtMs`.
    #[serde(rename = "verifyWithinMs")]
    pub verify_within_ms: Option<i64>,

    /// Budget for calling claim, measured from `issuedAtMs`.
    #[serde(rename = "claimWithinMs")]
    pub claim_within_ms: Option<i64>,
}

/// Response body of `POST /verify`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawVerification {
    pub secret: Option<String>,

    /// Fresher claim budget; supersedes the one from issuance when present.
    #[serde(rename = "claimWithinMs")]
    pub claim_within_ms: Option<i64>,
}

/// Response body of `POST /claim`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawClaim {
    pub flag: Option<String>,
}

/// Errors that can occur while talking to the API.
///
/// All three variants mean the call itself failed. A call that returned
/// 2xx with valid JSON but without the field the caller hoped for is
/// NOT a transport error; the raw payload carries `None` instead.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connection failure or per-call timeout.
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// Server answered with a non-2xx status.
    #[error("server returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// Body was not the JSON shape we expected.
    #[error("malformed response body: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issuance_full_payload() {
        let raw: RawIssuance = serde_json::from_str(
            r#"{"token":"abc","issuedAtMs":1000,"verifyWithinMs":500,"claimWithinMs":1500}"#,
        )
        .unwrap();
        assert_eq!(raw.token.as_deref(), Some("abc"));
        assert_eq!(raw.issued_at_ms, Some(1000));
        assert_eq!(raw.verify_within_ms, Some(500));
        assert_eq!(raw.claim_within_ms, Some(1500));
    }

    #[test]
    fn test_issuance_sparse_payload() {
        let raw: RawIssuance = serde_json::from_str(r#"{"token":"abc"}"#).unwrap();
        assert_eq!(raw.token.as_deref(), Some("abc"));
        assert!(raw.issued_at_ms.is_none());
        assert!(raw.verify_within_ms.is_none());
        assert!(raw.claim_within_ms.is_none());
    }

    #[test]
    fn test_empty_object_is_not_malformed() {
        let raw: RawVerification = serde_json::from_str("{}").unwrap();
        assert!(raw.secret.is_none());

        let raw: RawClaim = serde_json::from_str("{}").unwrap();
        assert!(raw.flag.is_none());
    }

    #[test]
    fn test_error_display() {
        let err = TransportError::Status {
            status: 503,
            body: "unavailable".to_string(),
        };
        assert!(err.to_string().contains("503"));
    }
}
