//! i18n value types - money, timestamps, and phone numbers that are safe to
//! persist, compare, format, and exchange across service boundaries.
//!
//! Four leaf types ([`Currency`], [`Phone`], [`Timezone`], [`Time`]) compose
//! into three composites ([`Money`], [`LocalizedDateTime`],
//! [`LocalizedPhone`]). Every type is an immutable value: validation runs
//! only at construction, "mutating" operations return new values, and each
//! type round-trips losslessly to a small set of primitives for column
//! storage (see the `to_parts`/`from_parts` pairs).
//!
//! # Modules
//!
//! - **currency**: ISO 4217 descriptor with decimal-place metadata
//! - **phone**: country code + national number, with heuristic parsing
//! - **timezone**: IANA zone id with a construction-time cached offset
//! - **time**: validated epoch-seconds wrapper (1970-2100)
//! - **money**: integer minor units + currency, overflow-checked arithmetic
//! - **datetime**: timezone-aware instant
//! - **localized_phone**: phone + country/region + timezone
//! - **constants**: shared validation bounds
//! - **errors**: centralized error handling
//!
//! # Example
//!
//! ```
//! use i18n_types::{Currency, Money};
//!
//! let usd = Currency::from_code("USD")?;
//! let price = Money::from_decimal(100.50, usd)?;
//! assert_eq!(price.amount_minor(), 10_050);
//! assert_eq!(price.format(), "$100.50");
//! # Ok::<(), i18n_types::I18nError>(())
//! ```

pub mod constants;
pub mod currency;
pub mod datetime;
pub mod errors;
pub mod localized_phone;
pub mod money;
pub mod phone;
pub mod time;
pub mod timezone;

// Re-export commonly used types at crate root
pub use currency::Currency;
pub use datetime::LocalizedDateTime;
pub use errors::{I18nError, I18nResult};
pub use localized_phone::LocalizedPhone;
pub use money::Money;
pub use phone::Phone;
pub use time::Time;
pub use timezone::Timezone;
