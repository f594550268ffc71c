use rust_decimal::Decimal;

// =============================================================================
// ESCALATION CONSTANTS
// =============================================================================

/// Tickets older than this (at creation) are escalated one step
pub const ESCALATION_AGE_SECS: i64 = 60 * 60;

/// Case-sensitive title substrings that escalate a ticket one step
pub const TITLE_ESCALATION_KEYWORDS: [&str; 3] = ["Crash", "Important", "Failure"];

// =============================================================================
// PRICING CONSTANTS
// =============================================================================

/// Price for a paying customer's High priority ticket
pub const PAYING_HIGH_PRICE: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// Price for a paying customer's Low or Medium priority ticket
pub const PAYING_STANDARD_PRICE: Decimal = Decimal::from_parts(50, 0, 0, false, 0);

// =============================================================================
// AUDIT CONSTANTS
// =============================================================================

/// File name prefix for audit snapshots (`ticket_{id}.json`)
pub const AUDIT_FILE_PREFIX: &str = "ticket_";
