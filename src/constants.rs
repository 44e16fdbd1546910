//! Domain-level constants.
//!
//! These constants define the validation bounds shared by the value types.

// =============================================================================
// Time
// =============================================================================

/// Earliest supported instant: 1970-01-01T00:00:00Z
pub const MIN_EPOCH_SECONDS: i64 = 0;

/// Latest supported instant: 2100-12-31T23:59:59Z
pub const MAX_EPOCH_SECONDS: i64 = 4_133_980_799;

// =============================================================================
// Currency
// =============================================================================

/// Maximum decimal places a currency may declare (covers 18-decimal digital
/// currencies such as ETH)
pub const MAX_DECIMAL_PLACES: u32 = 18;

/// Tolerance for the decimal -> minor-unit round-trip check
pub const DECIMAL_TOLERANCE: f64 = 1e-6;

// =============================================================================
// Timezone
// =============================================================================

/// Offsets must lie strictly inside (-MAX_OFFSET_MINUTES, MAX_OFFSET_MINUTES);
/// exactly +/-24h is rejected
pub const MAX_OFFSET_MINUTES: i32 = 1440;

// =============================================================================
// Phone
// =============================================================================

/// Minimum digits in a national number
pub const MIN_PHONE_DIGITS: usize = 7;

/// Maximum digits in a national number
pub const MAX_PHONE_DIGITS: usize = 15;
