//! Centralized error handling.
//!
//! Every constructor and arithmetic operation in this crate returns an
//! explicit `I18nResult`; no partially-constructed value is ever handed
//! back on failure. All variants are local validation failures - nothing
//! here is transient or retryable, and this crate never logs or suppresses.

use thiserror::Error;

/// Validation and arithmetic errors for the i18n value types.
/// SOLID - Open/Closed: Extend via new variants without modifying behavior
#[derive(Error, Debug, Clone, PartialEq)]
pub enum I18nError {
    /// Currency code format is bad, the code is unsupported, or the
    /// decimal-place count is out of range
    #[error("Invalid currency: {0}")]
    InvalidCurrency(String),

    /// Country code or number fails its pattern, or no parse strategy
    /// matched the input string
    #[error("Invalid phone: {0}")]
    InvalidPhone(String),

    /// Zone id not found in the IANA database, or offset outside (-1440, 1440)
    #[error("Unsupported timezone: {0}")]
    UnsupportedTimezone(String),

    /// Epoch seconds outside the supported 1970-2100 window
    #[error("Time out of range: {0}")]
    OutOfRangeTime(String),

    /// Arithmetic attempted between two Money values of different currencies
    #[error("Currency mismatch: {left} vs {right}")]
    CurrencyMismatch { left: String, right: String },

    /// Decimal-to-minor-unit conversion cannot round-trip within tolerance
    #[error("Precision loss: {0}")]
    PrecisionLoss(String),

    /// 64-bit overflow detected before it would occur
    #[error("Arithmetic overflow: {0}")]
    ArithmeticOverflow(String),

    /// A composite type's member failed its own validation
    #[error("Validation failed for {field}: {source}")]
    CompositeValidation {
        field: &'static str,
        #[source]
        source: Box<I18nError>,
    },
}

/// Convenience constructors
impl I18nError {
    pub fn invalid_currency(msg: impl Into<String>) -> Self {
        I18nError::InvalidCurrency(msg.into())
    }

    pub fn invalid_phone(msg: impl Into<String>) -> Self {
        I18nError::InvalidPhone(msg.into())
    }

    pub fn unsupported_timezone(msg: impl Into<String>) -> Self {
        I18nError::UnsupportedTimezone(msg.into())
    }

    pub fn out_of_range_time(msg: impl Into<String>) -> Self {
        I18nError::OutOfRangeTime(msg.into())
    }

    pub fn currency_mismatch(left: impl Into<String>, right: impl Into<String>) -> Self {
        I18nError::CurrencyMismatch {
            left: left.into(),
            right: right.into(),
        }
    }

    pub fn precision_loss(msg: impl Into<String>) -> Self {
        I18nError::PrecisionLoss(msg.into())
    }

    pub fn overflow(msg: impl Into<String>) -> Self {
        I18nError::ArithmeticOverflow(msg.into())
    }

    /// Wrap a member failure with the name of the failing field
    pub fn composite(field: &'static str, source: I18nError) -> Self {
        I18nError::CompositeValidation {
            field,
            source: Box::new(source),
        }
    }
}

/// Result type alias
pub type I18nResult<T> = Result<T, I18nError>;
