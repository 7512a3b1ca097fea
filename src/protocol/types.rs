//! Typed protocol records and per-attempt outcomes.

use crate::transport::{RawIssuance, RawVerification};

/// Verify budget assumed when the server omits `verifyWithinMs`.
pub const DEFAULT_VERIFY_WITHIN_MS: i64 = 1_000;

/// Claim budget assumed when the server omits `claimWithinMs`.
pub const DEFAULT_CLAIM_WITHIN_MS: i64 = 2_000;

/// A freshly issued token with its deadline anchors.
///
/// Immutable once produced; every attempt works from a new one. Both
/// deadline windows are measured from `issued_at_ms`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issuance {
    /// Opaque bearer credential. Never empty.
    pub token: String,

    /// Deadline anchor, epoch milliseconds.
    pub issued_at_ms: i64,

    /// How long after issuance the token stays verifiable.
    pub verify_within_ms: i64,

    /// How long after issuance the secret stays claimable.
    pub claim_within_ms: i64,
}

impl Issuance {
    /// Build a record from the wire payload, applying defaulting rules
    /// exactly once at this boundary.
    ///
    /// Returns `None` when the payload has no usable token.
    ///
    /// When the server omits `issuedAtMs`, the local clock at issuance
    /// stands in for it. That is a best-effort approximation with no
    /// guarantee the two clocks agree, kept because the windows are
    /// useless without some anchor.
    pub fn from_raw(raw: RawIssuance, local_now_ms: i64) -> Option<Self> {
        let token = raw.token.filter(|t| !t.is_empty())?;
        Some(Self {
            token,
            issued_at_ms: raw.issued_at_ms.unwrap_or(local_now_ms),
            verify_within_ms: raw.verify_within_ms.unwrap_or(DEFAULT_VERIFY_WITHIN_MS),
            claim_within_ms: raw.claim_within_ms.unwrap_or(DEFAULT_CLAIM_WITHIN_MS),
        })
    }
}

/// Successful verification: the secret plus an optional fresher claim
/// budget that supersedes the issuance one for this attempt only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verification {
    pub secret: String,
    pub claim_within_ms_override: Option<i64>,
}

impl Verification {
    /// Build a record from the wire payload.
    ///
    /// Returns `None` when no non-empty secret came back.
    pub fn from_raw(raw: RawVerification) -> Option<Self> {
        let secret = raw.secret.filter(|s| !s.is_empty())?;
        Some(Self {
            secret,
            claim_within_ms_override: raw.claim_within_ms,
        })
    }
}

/// Result of one pass (full or partial) through the three-step chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptOutcome {
    /// Issuance failed or returned no usable token.
    TokenUnavailable,
    /// Verify window elapsed before the verify call was made.
    ExpiredBeforeVerify,
    /// Verify call failed or returned no secret.
    VerifyFailed,
    /// Claim window elapsed before the claim call was made.
    ExpiredBeforeClaim,
    /// Secret turned out empty at claim time.
    SecretMissing,
    /// Claim call failed or returned no flag.
    ClaimFailed,
    /// The flag was claimed. Terminal.
    Claimed(String),
}
