//! Currency value object - ISO 4217 descriptor with decimal-place metadata.
//!
//! DDD: Value object - immutable, compared by value (code only).
//! The built-in table is loaded once and exposed only through read-only
//! lookup; callers needing a currency outside the table use [`Currency::new`].

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::constants::MAX_DECIMAL_PLACES;
use crate::errors::{I18nError, I18nResult};

/// 3 uppercase ASCII letters, per ISO 4217
static CODE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Z]{3}$").expect("currency code pattern is valid")
});

/// Built-in currency table: (code, symbol, name, decimal places).
/// 31 major fiat currencies plus two digital currencies.
const BUILTIN_CURRENCIES: &[(&str, &str, &str, u32)] = &[
    ("USD", "$", "US Dollar", 2),
    ("EUR", "€", "Euro", 2),
    ("GBP", "£", "British Pound", 2),
    ("JPY", "¥", "Japanese Yen", 0),
    ("CNY", "¥", "Chinese Yuan", 2),
    ("AUD", "A$", "Australian Dollar", 2),
    ("CAD", "C$", "Canadian Dollar", 2),
    ("CHF", "CHF", "Swiss Franc", 2),
    ("HKD", "HK$", "Hong Kong Dollar", 2),
    ("NZD", "NZ$", "New Zealand Dollar", 2),
    ("SGD", "S$", "Singapore Dollar", 2),
    ("SEK", "kr", "Swedish Krona", 2),
    ("NOK", "kr", "Norwegian Krone", 2),
    ("DKK", "kr", "Danish Krone", 2),
    ("KRW", "₩", "South Korean Won", 0),
    ("INR", "₹", "Indian Rupee", 2),
    ("MXN", "Mex$", "Mexican Peso", 2),
    ("BRL", "R$", "Brazilian Real", 2),
    ("ZAR", "R", "South African Rand", 2),
    ("RUB", "₽", "Russian Ruble", 2),
    ("TRY", "₺", "Turkish Lira", 2),
    ("PLN", "zł", "Polish Zloty", 2),
    ("THB", "฿", "Thai Baht", 2),
    ("IDR", "Rp", "Indonesian Rupiah", 2),
    ("MYR", "RM", "Malaysian Ringgit", 2),
    ("PHP", "₱", "Philippine Peso", 2),
    ("VND", "₫", "Vietnamese Dong", 0),
    ("AED", "د.إ", "UAE Dirham", 2),
    ("SAR", "﷼", "Saudi Riyal", 2),
    ("KWD", "د.ك", "Kuwaiti Dinar", 3),
    ("ILS", "₪", "Israeli New Shekel", 2),
    ("BTC", "₿", "Bitcoin", 8),
    ("ETH", "Ξ", "Ethereum", 18),
];

static CURRENCY_TABLE: Lazy<HashMap<&'static str, &'static (&'static str, &'static str, &'static str, u32)>> =
    Lazy::new(|| {
        BUILTIN_CURRENCIES
            .iter()
            .map(|entry| (entry.0, entry))
            .collect()
    });

/// ISO 4217 currency descriptor.
///
/// DDD: Value object - immutable after construction, no setter surface.
/// Equality and hashing consider the `code` only; symbol, name, and decimal
/// places are display metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "CurrencyWire")]
pub struct Currency {
    code: String,
    symbol: String,
    name: String,
    decimal_places: u32,
}

/// Raw wire shape; validated on deserialization so no invalid currency can
/// enter through serde.
#[derive(Deserialize)]
struct CurrencyWire {
    code: String,
    symbol: String,
    name: String,
    decimal_places: u32,
}

impl TryFrom<CurrencyWire> for Currency {
    type Error = I18nError;

    fn try_from(wire: CurrencyWire) -> Result<Self, Self::Error> {
        // Built-in codes normalize to their canonical metadata even if the
        // wire copy drifted; unknown codes validate as explicit entries
        match Currency::from_code(&wire.code) {
            Ok(currency) => Ok(currency),
            Err(_) => Currency::new(wire.code, wire.symbol, wire.name, wire.decimal_places),
        }
    }
}

impl Currency {
    /// Look up a currency from the built-in table by its 3-letter code.
    ///
    /// # Errors
    /// Returns `InvalidCurrency` when the code is not in the table.
    pub fn from_code(code: &str) -> I18nResult<Self> {
        let entry = CURRENCY_TABLE.get(code).ok_or_else(|| {
            I18nError::invalid_currency(format!("unsupported currency code: {}", code))
        })?;
        Ok(Self {
            code: entry.0.to_string(),
            symbol: entry.1.to_string(),
            name: entry.2.to_string(),
            decimal_places: entry.3,
        })
    }

    /// Build a currency from explicit fields, for codes outside the
    /// built-in table.
    ///
    /// # Errors
    /// Returns `InvalidCurrency` when the code is not 3 uppercase ASCII
    /// letters, symbol or name is empty, or decimal places exceed 18.
    pub fn new(
        code: impl Into<String>,
        symbol: impl Into<String>,
        name: impl Into<String>,
        decimal_places: u32,
    ) -> I18nResult<Self> {
        let code = code.into();
        let symbol = symbol.into();
        let name = name.into();

        if !CODE_PATTERN.is_match(&code) {
            return Err(I18nError::invalid_currency(format!(
                "code must be 3 uppercase letters, got {:?}",
                code
            )));
        }
        if symbol.is_empty() {
            return Err(I18nError::invalid_currency("symbol must not be empty"));
        }
        if name.is_empty() {
            return Err(I18nError::invalid_currency("name must not be empty"));
        }
        if decimal_places > MAX_DECIMAL_PLACES {
            return Err(I18nError::invalid_currency(format!(
                "decimal places must be at most {}, got {}",
                MAX_DECIMAL_PLACES, decimal_places
            )));
        }

        Ok(Self {
            code,
            symbol,
            name,
            decimal_places,
        })
    }

    /// The 3-letter ISO 4217 code.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The display glyph, e.g. `$`.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// The display name, e.g. `US Dollar`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// How many fractional digits one unit of this currency subdivides into.
    pub fn decimal_places(&self) -> u32 {
        self.decimal_places
    }

    /// Render a minor-unit amount as `symbol` + decimal string, with exactly
    /// `decimal_places` fractional digits (`$100.50`, `¥1500`).
    pub fn format(&self, amount_minor: i64) -> String {
        format!(
            "{}{}",
            self.symbol,
            render_decimal(amount_minor, self.decimal_places)
        )
    }

    /// Same rendering with the code as suffix (`100.50 USD`).
    pub fn format_with_code(&self, amount_minor: i64) -> String {
        format!(
            "{} {}",
            render_decimal(amount_minor, self.decimal_places),
            self.code
        )
    }

    /// Same rendering with the name as suffix (`100.50 US Dollar`).
    pub fn format_with_name(&self, amount_minor: i64) -> String {
        format!(
            "{} {}",
            render_decimal(amount_minor, self.decimal_places),
            self.name
        )
    }
}

/// Render a minor-unit amount as a plain decimal string using integer math
/// only. Widens to i128 so `i64::MIN` cannot overflow on negation.
pub(crate) fn render_decimal(amount_minor: i64, decimal_places: u32) -> String {
    let amount = i128::from(amount_minor);
    if decimal_places == 0 {
        return amount.to_string();
    }
    let divisor = 10u128.pow(decimal_places);
    let sign = if amount < 0 { "-" } else { "" };
    let magnitude = amount.unsigned_abs();
    let major = magnitude / divisor;
    let fraction = magnitude % divisor;
    format!(
        "{}{}.{:0width$}",
        sign,
        major,
        fraction,
        width = decimal_places as usize
    )
}

// Identity is the code; two lookups of "USD" are the same currency even if
// display metadata were to differ.
impl PartialEq for Currency {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Currency {}

impl std::hash::Hash for Currency {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)
    }
}
