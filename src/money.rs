//! Money value object - integer minor units plus currency.
//!
//! DDD: Value object - immutable, compared by value.
//! Amounts are stored as an integer count of the currency's smallest unit
//! (cents for USD) so repeated arithmetic never drifts. Floating point only
//! appears at the edges: decimal construction (with a round-trip precision
//! check) and display conversion.

use std::cmp::Ordering;
use std::fmt;

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use crate::constants::DECIMAL_TOLERANCE;
use crate::currency::Currency;
use crate::errors::{I18nError, I18nResult};

/// A monetary amount in one currency.
///
/// Same-currency arithmetic is overflow-checked; mixing currencies is a
/// `CurrencyMismatch` error, never a silent coercion. Ordering is by
/// `(amount_minor, currency code)` - a deterministic sort key, not a
/// cross-currency monetary comparison.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Money {
    amount_minor: i64,
    currency: Currency,
}

impl Money {
    /// Build from an integer minor-unit amount. Infallible: a held
    /// `Currency` is valid by construction.
    pub fn from_minor_units(amount_minor: i64, currency: Currency) -> Self {
        Self {
            amount_minor,
            currency,
        }
    }

    /// Build from a decimal value, scaling by `10^decimal_places` and
    /// rounding to the nearest minor unit.
    ///
    /// # Errors
    /// Returns `PrecisionLoss` when the value needs more precision than the
    /// currency's minor unit supports (round-trip deviates by more than
    /// 1e-6), or is not finite; `ArithmeticOverflow` when the scaled value
    /// exceeds i64.
    pub fn from_decimal(value: f64, currency: Currency) -> I18nResult<Self> {
        if !value.is_finite() {
            return Err(I18nError::precision_loss(format!(
                "value {} is not a finite number",
                value
            )));
        }

        let factor = 10f64.powi(currency.decimal_places() as i32);
        let scaled = value * factor;
        if !scaled.is_finite() || scaled < i64::MIN as f64 || scaled > i64::MAX as f64 {
            return Err(I18nError::overflow(format!(
                "{} does not fit in 64-bit minor units of {}",
                value,
                currency.code()
            )));
        }

        let amount_minor = scaled.round() as i64;
        let round_trip = amount_minor as f64 / factor;
        if (round_trip - value).abs() > DECIMAL_TOLERANCE {
            return Err(I18nError::precision_loss(format!(
                "{} cannot be represented with {} decimal places",
                value,
                currency.decimal_places()
            )));
        }

        Ok(Self {
            amount_minor,
            currency,
        })
    }

    /// Rebuild from the primitive `(amount_minor, currency code)` pair.
    ///
    /// # Errors
    /// Returns `InvalidCurrency` when the code is not in the built-in table.
    pub fn from_parts(amount_minor: i64, currency_code: &str) -> I18nResult<Self> {
        let currency = Currency::from_code(currency_code)?;
        Ok(Self::from_minor_units(amount_minor, currency))
    }

    /// The amount in minor units.
    pub fn amount_minor(&self) -> i64 {
        self.amount_minor
    }

    /// The currency.
    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    /// The amount as a decimal, for display and API payloads. Lossy for
    /// humans - never fed back into arithmetic internally.
    pub fn to_decimal(&self) -> f64 {
        self.amount_minor as f64 / 10f64.powi(self.currency.decimal_places() as i32)
    }

    /// The primitive storage pair.
    pub fn to_parts(&self) -> (i64, &str) {
        (self.amount_minor, self.currency.code())
    }

    /// Add a same-currency amount.
    ///
    /// # Errors
    /// Returns `CurrencyMismatch` when the codes differ,
    /// `ArithmeticOverflow` when the sum leaves i64.
    pub fn add(&self, other: &Money) -> I18nResult<Self> {
        self.ensure_same_currency(other)?;
        let amount_minor = self
            .amount_minor
            .checked_add(other.amount_minor)
            .ok_or_else(|| {
                I18nError::overflow(format!(
                    "{} + {} in {}",
                    self.amount_minor,
                    other.amount_minor,
                    self.currency.code()
                ))
            })?;
        Ok(Self {
            amount_minor,
            currency: self.currency.clone(),
        })
    }

    /// Subtract a same-currency amount.
    ///
    /// # Errors
    /// Returns `CurrencyMismatch` when the codes differ,
    /// `ArithmeticOverflow` when the difference leaves i64.
    pub fn subtract(&self, other: &Money) -> I18nResult<Self> {
        self.ensure_same_currency(other)?;
        let amount_minor = self
            .amount_minor
            .checked_sub(other.amount_minor)
            .ok_or_else(|| {
                I18nError::overflow(format!(
                    "{} - {} in {}",
                    self.amount_minor,
                    other.amount_minor,
                    self.currency.code()
                ))
            })?;
        Ok(Self {
            amount_minor,
            currency: self.currency.clone(),
        })
    }

    /// Multiply by an integer factor.
    ///
    /// # Errors
    /// Returns `ArithmeticOverflow` when the product leaves i64.
    pub fn multiply(&self, factor: i64) -> I18nResult<Self> {
        let amount_minor = self.amount_minor.checked_mul(factor).ok_or_else(|| {
            I18nError::overflow(format!(
                "{} * {} in {}",
                self.amount_minor,
                factor,
                self.currency.code()
            ))
        })?;
        Ok(Self {
            amount_minor,
            currency: self.currency.clone(),
        })
    }

    /// Multiply by a decimal factor. Round-trips through the decimal
    /// representation, so it inherits `from_decimal`'s precision check.
    ///
    /// # Errors
    /// Returns `PrecisionLoss` or `ArithmeticOverflow` per `from_decimal`.
    pub fn multiply_decimal(&self, factor: f64) -> I18nResult<Self> {
        Self::from_decimal(self.to_decimal() * factor, self.currency.clone())
    }

    /// Render with the currency symbol (`$100.50`).
    pub fn format(&self) -> String {
        self.currency.format(self.amount_minor)
    }

    /// Render with the currency code suffix (`100.50 USD`).
    pub fn format_with_code(&self) -> String {
        self.currency.format_with_code(self.amount_minor)
    }

    /// Render with the currency name suffix (`100.50 US Dollar`).
    pub fn format_with_name(&self) -> String {
        self.currency.format_with_name(self.amount_minor)
    }

    fn ensure_same_currency(&self, other: &Money) -> I18nResult<()> {
        if self.currency.code() != other.currency.code() {
            return Err(I18nError::currency_mismatch(
                self.currency.code(),
                other.currency.code(),
            ));
        }
        Ok(())
    }
}

// Deterministic sort key, not a monetary comparison across currencies
impl Ord for Money {
    fn cmp(&self, other: &Self) -> Ordering {
        self.amount_minor
            .cmp(&other.amount_minor)
            .then_with(|| self.currency.code().cmp(other.currency.code()))
    }
}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_code())
    }
}

// Wire format carries the integer amount, a derived decimal value for
// consumers that cannot do minor-unit math, and the full currency descriptor.
impl Serialize for Money {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Money", 3)?;
        state.serialize_field("amount", &self.amount_minor)?;
        state.serialize_field("value", &self.to_decimal())?;
        state.serialize_field("currency", &self.currency)?;
        state.end()
    }
}

/// Incoming wire shape. Accepts the integer-amount form or the legacy
/// decimal-value form; both normalize to minor units.
#[derive(Deserialize)]
struct MoneyWire {
    #[serde(default)]
    amount: Option<i64>,
    #[serde(default)]
    value: Option<f64>,
    currency: Currency,
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let wire = MoneyWire::deserialize(deserializer)?;
        match (wire.amount, wire.value) {
            // Integer amount is authoritative when both are present
            (Some(amount), _) => Ok(Money::from_minor_units(amount, wire.currency)),
            (None, Some(value)) => {
                Money::from_decimal(value, wire.currency).map_err(serde::de::Error::custom)
            }
            (None, None) => Err(serde::de::Error::missing_field("amount")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usd() -> Currency {
        Currency::from_code("USD").unwrap()
    }

    fn eur() -> Currency {
        Currency::from_code("EUR").unwrap()
    }

    #[test]
    fn test_from_decimal_scales_to_minor_units() {
        let money = Money::from_decimal(100.50, usd()).unwrap();
        assert_eq!(money.amount_minor(), 10_050);
        assert_eq!(money.format(), "$100.50");
    }

    #[test]
    fn test_from_decimal_zero_decimal_currency() {
        let jpy = Currency::from_code("JPY").unwrap();
        let money = Money::from_decimal(1500.0, jpy).unwrap();
        assert_eq!(money.amount_minor(), 1500);
        assert_eq!(money.format(), "¥1500");
    }

    #[test]
    fn test_from_decimal_rejects_precision_loss() {
        // Sub-cent precision in a 2-decimal currency
        let result = Money::from_decimal(1.001, usd());
        assert!(matches!(result, Err(I18nError::PrecisionLoss(_))));

        let jpy = Currency::from_code("JPY").unwrap();
        assert!(Money::from_decimal(0.5, jpy).is_err());
    }

    #[test]
    fn test_from_decimal_rejects_non_finite() {
        assert!(Money::from_decimal(f64::NAN, usd()).is_err());
        assert!(Money::from_decimal(f64::INFINITY, usd()).is_err());
    }

    #[test]
    fn test_from_decimal_negative() {
        let money = Money::from_decimal(-42.75, usd()).unwrap();
        assert_eq!(money.amount_minor(), -4275);
    }

    #[test]
    fn test_decimal_round_trip() {
        let money = Money::from_decimal(100.50, usd()).unwrap();
        assert!((money.to_decimal() - 100.50).abs() < 1e-6);
    }

    #[test]
    fn test_parts_round_trip() {
        let money = Money::from_minor_units(10_050, usd());
        let (amount, code) = money.to_parts();
        assert_eq!(Money::from_parts(amount, code).unwrap(), money);
    }

    #[test]
    fn test_add_same_currency() {
        let a = Money::from_minor_units(10_050, usd());
        let b = Money::from_minor_units(4_950, usd());
        let sum = a.add(&b).unwrap();
        assert_eq!(sum.amount_minor(), 15_000);
        assert_eq!(sum.format(), "$150.00");
    }

    #[test]
    fn test_add_currency_mismatch() {
        let dollars = Money::from_minor_units(100, usd());
        let euros = Money::from_minor_units(50, eur());
        let result = dollars.add(&euros);
        assert_eq!(
            result,
            Err(I18nError::currency_mismatch("USD", "EUR"))
        );
    }

    #[test]
    fn test_add_commutative_and_associative() {
        let a = Money::from_minor_units(100, usd());
        let b = Money::from_minor_units(250, usd());
        let c = Money::from_minor_units(333, usd());

        assert_eq!(a.add(&b).unwrap(), b.add(&a).unwrap());
        assert_eq!(
            a.add(&b).unwrap().add(&c).unwrap(),
            a.add(&b.add(&c).unwrap()).unwrap()
        );
    }

    #[test]
    fn test_add_overflow() {
        let max = Money::from_minor_units(i64::MAX, usd());
        let one = Money::from_minor_units(1, usd());
        assert!(matches!(
            max.add(&one),
            Err(I18nError::ArithmeticOverflow(_))
        ));
    }

    #[test]
    fn test_subtract() {
        let a = Money::from_minor_units(10_000, usd());
        let b = Money::from_minor_units(2_500, usd());
        assert_eq!(a.subtract(&b).unwrap().amount_minor(), 7_500);

        let min = Money::from_minor_units(i64::MIN, usd());
        let one = Money::from_minor_units(1, usd());
        assert!(min.subtract(&one).is_err());
        assert!(a.subtract(&Money::from_minor_units(50, eur())).is_err());
    }

    #[test]
    fn test_multiply() {
        let money = Money::from_minor_units(2_500, usd());
        assert_eq!(money.multiply(4).unwrap().amount_minor(), 10_000);
        assert!(Money::from_minor_units(i64::MAX, usd()).multiply(2).is_err());
    }

    #[test]
    fn test_multiply_decimal() {
        let money = Money::from_minor_units(10_000, usd()); // $100.00
        let result = money.multiply_decimal(1.5).unwrap();
        assert_eq!(result.amount_minor(), 15_000);
    }

    #[test]
    fn test_multiply_decimal_inherits_precision_check() {
        let money = Money::from_minor_units(1, usd()); // $0.01
        // 0.01 * 0.1 = 0.001, below USD minor-unit precision
        assert!(money.multiply_decimal(0.1).is_err());
    }

    #[test]
    fn test_equality_requires_same_currency() {
        let dollars = Money::from_minor_units(100, usd());
        let euros = Money::from_minor_units(100, eur());
        assert_ne!(dollars, euros);
        assert_eq!(dollars, Money::from_minor_units(100, usd()));
    }

    #[test]
    fn test_ordering_by_amount_then_code() {
        let mut values = vec![
            Money::from_minor_units(200, usd()),
            Money::from_minor_units(100, usd()),
            Money::from_minor_units(100, eur()),
        ];
        values.sort();
        assert_eq!(values[0], Money::from_minor_units(100, eur()));
        assert_eq!(values[1], Money::from_minor_units(100, usd()));
        assert_eq!(values[2], Money::from_minor_units(200, usd()));
    }
}
