//! Timed token-chain client.
//!
//! Drives a three-step handshake against a lab API: issue a short-lived
//! token, verify it within a server-given window to obtain a secret,
//! then claim the flag with that secret within a second window. The
//! whole exchange is bounded to a fixed number of attempts.
//!
//! # Architecture Overview
//!
//! ```text
//!  main (CLI) ──▶ probe ──▶ orchestrator
//!                               │  attempt loop (1..=max)
//!                               ▼
//!                 issue ─▶ [verify window?] ─▶ verify ─▶ [claim window?] ─▶ claim
//!                   │              │              │             │            │
//!                   └── transport (reqwest, fixed per-call timeout) ─────────┘
//! ```

pub mod config;
pub mod orchestrator;
pub mod protocol;
pub mod transport;

pub use config::RunConfig;
pub use orchestrator::{Orchestrator, RunOutcome};
pub use transport::ApiClient;
