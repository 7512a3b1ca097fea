//! Transport layer: HTTP calls to the lab API.

pub mod client;
pub mod types;

pub use client::ApiClient;
pub use types::{RawClaim, RawIssuance, RawVerification, TransportError, TransportResult};
