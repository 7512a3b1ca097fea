//! Protocol layer: typed records, step functions, deadline tracking.

pub mod deadline;
pub mod steps;
pub mod types;

pub use types::{AttemptOutcome, Issuance, Verification};
pub use types::{DEFAULT_CLAIM_WITHIN_MS, DEFAULT_VERIFY_WITHIN_MS};
