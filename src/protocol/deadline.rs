//! Deadline window arithmetic.
//!
//! A window is a budget in milliseconds measured from the issuance
//! anchor. Callers read the clock fresh at every check so time spent in
//! network calls counts against the budget.

use std::time::{SystemTime, UNIX_EPOCH};

/// Whether a window has elapsed.
///
/// Strict greater-than: a check performed exactly at the boundary is
/// still inside the window. The anchor comes off the wire, so the
/// subtraction saturates instead of overflowing on extreme values.
pub fn expired(now_ms: i64, issued_at_ms: i64, budget_ms: i64) -> bool {
    now_ms.saturating_sub(issued_at_ms) > budget_ms
}

/// Current wall-clock time in epoch milliseconds.
pub fn now_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}
