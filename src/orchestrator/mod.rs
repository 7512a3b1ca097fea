//! Retry orchestrator: the attempt state machine.
//!
//! # States
//! ```text
//! Issuing → CheckVerifyWindow → Verifying → CheckClaimWindow → Claiming
//!     → Done(flag) | Retry | Exhausted
//! ```
//!
//! # Design Decisions
//! - Deadlines are re-checked before Verify AND before Claim: each
//!   remote call consumes wall-clock time that can by itself push the
//!   attempt past a budget
//! - Every attempt starts from a freshly issued token; nothing survives
//!   an attempt except the counter
//! - Failed issuance waits longer (transient server-side condition)
//!   than a failed claim (race worth retrying quickly)
//! - A successful claim short-circuits the loop immediately

use std::time::Duration;

use tokio::time::sleep;

use crate::config::RetryConfig;
use crate::protocol::deadline::{expired, now_ms};
use crate::protocol::steps;
use crate::protocol::AttemptOutcome;
use crate::transport::ApiClient;

/// Terminal result of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The flag was claimed.
    Claimed(String),
    /// Every attempt failed.
    Exhausted { attempts: u32 },
}

impl RunOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, RunOutcome::Claimed(_))
    }
}

/// Drives the issue/verify/claim chain until a flag is claimed or the
/// attempt budget runs out.
pub struct Orchestrator {
    client: ApiClient,
    retry: RetryConfig,
}

impl Orchestrator {
    pub fn new(client: ApiClient, retry: RetryConfig) -> Self {
        Self { client, retry }
    }

    /// Run the attempt loop to completion.
    ///
    /// Strictly sequential: one attempt, and within it one remote call,
    /// in flight at a time. Expected failures become retries; only an
    /// exhausted budget surfaces as a non-success outcome.
    pub async fn run(&self) -> RunOutcome {
        let max_attempts = self.retry.max_attempts;

        for attempt in 1..=max_attempts {
            tracing::info!(attempt, max_attempts, "Starting attempt");

            let outcome = self.attempt().await;
            tracing::info!(attempt, outcome = ?outcome, "Attempt finished");

            match outcome {
                AttemptOutcome::Claimed(flag) => return RunOutcome::Claimed(flag),
                AttemptOutcome::TokenUnavailable => {
                    self.pause(attempt, self.retry.issue_retry_delay_ms).await;
                }
                AttemptOutcome::ClaimFailed => {
                    self.pause(attempt, self.retry.claim_retry_delay_ms).await;
                }
                // Local decisions cost no server round trip; retry at once.
                AttemptOutcome::ExpiredBeforeVerify
                | AttemptOutcome::VerifyFailed
                | AttemptOutcome::ExpiredBeforeClaim
                | AttemptOutcome::SecretMissing => {}
            }
        }

        RunOutcome::Exhausted {
            attempts: max_attempts,
        }
    }

    /// One pass through the chain with a fresh token.
    async fn attempt(&self) -> AttemptOutcome {
        // Issuing
        let issuance = match steps::issue(&self.client).await {
            Ok(record) => record,
            Err(outcome) => return outcome,
        };

        // CheckVerifyWindow: the issue call itself may have eaten the
        // budget, or the server anchor may already be in the past.
        if expired(now_ms(), issuance.issued_at_ms, issuance.verify_within_ms) {
            tracing::warn!(
                verify_within_ms = issuance.verify_within_ms,
                "Verify window already elapsed, abandoning token"
            );
            return AttemptOutcome::ExpiredBeforeVerify;
        }

        // Verifying
        let verification = match steps::verify(&self.client, &issuance.token).await {
            Ok(record) => record,
            Err(outcome) => return outcome,
        };

        // CheckClaimWindow, with the verify response allowed to supply
        // a fresher budget. Same anchor either way.
        let claim_within_ms = verification
            .claim_within_ms_override
            .unwrap_or(issuance.claim_within_ms);
        if expired(now_ms(), issuance.issued_at_ms, claim_within_ms) {
            tracing::warn!(
                claim_within_ms,
                "Claim window already elapsed, abandoning token"
            );
            return AttemptOutcome::ExpiredBeforeClaim;
        }

        // Verify guarantees a non-empty secret; re-check anyway before
        // spending the claim call on it.
        if verification.secret.is_empty() {
            tracing::warn!("No secret after verification");
            return AttemptOutcome::SecretMissing;
        }

        // Claiming
        steps::claim(&self.client, &issuance.token, &verification.secret).await
    }

    /// Inter-attempt delay, skipped when no attempt remains.
    async fn pause(&self, attempt: u32, delay_ms: u64) {
        if attempt < self.retry.max_attempts && delay_ms > 0 {
            sleep(Duration::from_millis(delay_ms)).await;
        }
    }
}
