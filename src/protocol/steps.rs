//! The three protocol step functions.
//!
//! Each step wraps one transport call and maps its result to a typed
//! record or an attempt outcome. No step retries internally; all retry
//! policy lives in the orchestrator.

use crate::protocol::deadline::now_ms;
use crate::protocol::types::{AttemptOutcome, Issuance, Verification};
use crate::transport::ApiClient;

/// Log-safe prefix of an opaque credential.
fn redact(value: &str) -> &str {
    match value.char_indices().nth(20) {
        Some((idx, _)) => &value[..idx],
        None => value,
    }
}

/// Step 1: obtain a fresh token.
///
/// Transport failure and a usable-token-free payload are treated the
/// same: the token is unavailable this attempt.
pub async fn issue(client: &ApiClient) -> Result<Issuance, AttemptOutcome> {
    let raw = match client.issue_token().await {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!(error = %e, "Token issuance failed");
            return Err(AttemptOutcome::TokenUnavailable);
        }
    };

    match Issuance::from_raw(raw, now_ms()) {
        Some(record) => {
            tracing::info!(
                token = redact(&record.token),
                verify_within_ms = record.verify_within_ms,
                claim_within_ms = record.claim_within_ms,
                "Token obtained"
            );
            Ok(record)
        }
        None => {
            tracing::warn!("Issuance response carried no token");
            Err(AttemptOutcome::TokenUnavailable)
        }
    }
}

/// Step 2: verify the token and obtain the secret.
pub async fn verify(client: &ApiClient, token: &str) -> Result<Verification, AttemptOutcome> {
    let raw = match client.verify_token(token).await {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!(error = %e, "Verification failed");
            return Err(AttemptOutcome::VerifyFailed);
        }
    };

    match Verification::from_raw(raw) {
        Some(record) => {
            tracing::info!(secret = redact(&record.secret), "Token verified");
            Ok(record)
        }
        None => {
            tracing::warn!("Verification response carried no secret");
            Err(AttemptOutcome::VerifyFailed)
        }
    }
}

/// Step 3: claim the flag with token and secret.
pub async fn claim(client: &ApiClient, token: &str, secret: &str) -> AttemptOutcome {
    let raw = match client.claim_flag(token, secret).await {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!(error = %e, "Claim failed");
            return AttemptOutcome::ClaimFailed;
        }
    };

    match raw.flag.filter(|f| !f.is_empty()) {
        Some(flag) => {
            tracing::info!(flag = %flag, "Flag claimed");
            AttemptOutcome::Claimed(flag)
        }
        None => {
            tracing::warn!("Claim response carried no flag");
            AttemptOutcome::ClaimFailed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact_short_and_long() {
        assert_eq!(redact("abc"), "abc");
        let long = "a".repeat(40);
        assert_eq!(redact(&long).len(), 20);
    }

    #[test]
    fn test_redact_multibyte() {
        let long = "é".repeat(40);
        assert_eq!(redact(&long).chars().count(), 20);
    }
}
