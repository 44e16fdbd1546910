//! Phone value object - country calling code plus national number.
//!
//! DDD: Value object - immutable, compared by value.
//! Parsing is a deliberately ordered, first-match-wins heuristic: it
//! disambiguates country codes by longest-prefix matching and falls back to
//! documented local-format assumptions. The result is deterministic behavior,
//! not a guarantee of the "true" country.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::constants::{MAX_PHONE_DIGITS, MIN_PHONE_DIGITS};
use crate::errors::{I18nError, I18nResult};

/// 1-3 digits, no leading zero
static COUNTRY_CODE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[1-9]\d{0,2}$").expect("country code pattern is valid"));

/// 7-15 digits
static NUMBER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{7,15}$").expect("number pattern is valid"));

/// Known country calling codes, sorted longest-first so that multi-digit
/// codes are tried before their numeric prefixes ("852" before "85" before
/// "8" - and crucially before "1" when scanning "+852...").
const COUNTRY_CODES: &[&str] = &[
    // 3-digit codes
    "852", "853", "855", "856", "880", "886", "960", "961", "962", "963", "964", "965", "966",
    "968", "970", "971", "972", "973", "974", "975", "976", "977", "992", "993", "994", "995",
    "996", "998",
    // 2-digit codes
    "20", "27", "30", "31", "32", "33", "34", "36", "39", "40", "41", "43", "44", "45", "46",
    "47", "48", "49", "51", "52", "53", "54", "55", "56", "57", "58", "60", "61", "62", "63",
    "64", "65", "66", "81", "82", "84", "86", "90", "91", "92", "93", "94", "95", "98",
    // 1-digit codes
    "1", "7",
];

/// Codes tried, in order, when interpreting a bare local-format number.
const COMMON_LOCAL_CODES: &[&str] = &["1", "44", "49", "33", "81", "86", "91", "7"];

/// A phone number split into country calling code and national number.
///
/// Both fields are digit strings; construction validates them against the
/// patterns above and nothing mutates them afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone {
    country_code: String,
    number: String,
}

impl From<Phone> for String {
    fn from(phone: Phone) -> Self {
        phone.format()
    }
}

impl TryFrom<String> for Phone {
    type Error = I18nError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Phone::parse(&value)
    }
}

impl Phone {
    /// Build a phone from explicit components.
    ///
    /// # Errors
    /// Returns `InvalidPhone` when the country code is not 1-3 digits
    /// (no leading zero) or the number is not 7-15 digits.
    pub fn new(country_code: impl Into<String>, number: impl Into<String>) -> I18nResult<Self> {
        let country_code = country_code.into();
        let number = number.into();

        if !COUNTRY_CODE_PATTERN.is_match(&country_code) {
            return Err(I18nError::invalid_phone(format!(
                "country code must be 1-3 digits with no leading zero, got {:?}",
                country_code
            )));
        }
        if !NUMBER_PATTERN.is_match(&number) {
            return Err(I18nError::invalid_phone(format!(
                "number must be {}-{} digits, got {:?}",
                MIN_PHONE_DIGITS, MAX_PHONE_DIGITS, number
            )));
        }

        Ok(Self {
            country_code,
            number,
        })
    }

    /// Parse a free-form phone string.
    ///
    /// Strategies are tried in order, first match wins:
    /// 1. The canonical `"+{cc} {number}"` form splits structurally at the
    ///    space, so any constructible phone re-parses from its own
    ///    [`Phone::format`] output, country codes outside the known table
    ///    included.
    /// 2. Other leading `+`: strip it and longest-prefix match the country
    ///    code.
    /// 3. Leading `00`: rewrite as international and use strategy 2.
    /// 4. Otherwise strip separators and apply local-format heuristics:
    ///    exactly 10 digits is assumed country code "1"; else common codes
    ///    are tried as prefixes; else 10+ digits fall back to "1".
    ///
    /// # Errors
    /// Returns `InvalidPhone` when no strategy produces a valid phone.
    pub fn parse(input: &str) -> I18nResult<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(I18nError::invalid_phone("input is empty"));
        }

        if let Some(rest) = trimmed.strip_prefix('+') {
            // Exactly one space with digit groups on both sides is the
            // canonical form; anything else (multiple groups, dashes) goes
            // through prefix matching
            if let Some((country_code, number)) = rest.split_once(' ') {
                if let Ok(phone) = Self::new(country_code, number) {
                    return Ok(phone);
                }
            }
            return Self::parse_international(rest);
        }
        if let Some(rest) = trimmed.strip_prefix("00") {
            return Self::parse_international(rest);
        }
        Self::parse_local(trimmed)
    }

    /// Longest-prefix country-code matching over the digits after `+`/`00`.
    fn parse_international(rest: &str) -> I18nResult<Self> {
        let digits = strip_non_digits(rest);
        if digits.is_empty() {
            return Err(I18nError::invalid_phone("no digits after international prefix"));
        }

        // COUNTRY_CODES is length-sorted, so the first hit is the longest
        for code in COUNTRY_CODES {
            if let Some(number) = digits.strip_prefix(code) {
                if (MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&number.len()) {
                    return Self::new(*code, number);
                }
            }
        }

        Err(I18nError::invalid_phone(format!(
            "no known country code matches {:?}",
            digits
        )))
    }

    /// Local-format heuristics. The fallback to country code "1" for 10+
    /// digit inputs is a documented assumption; it can misclassify non-US
    /// numbers, and callers wanting certainty should pass international
    /// format.
    fn parse_local(input: &str) -> I18nResult<Self> {
        let digits = strip_non_digits(input);

        // A bare 10-digit number is assumed to be US/Canada
        if digits.len() == 10 {
            return Self::new("1", digits);
        }

        for code in COMMON_LOCAL_CODES {
            if let Some(number) = digits.strip_prefix(code) {
                if (MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&number.len()) {
                    return Self::new(*code, number);
                }
            }
        }

        if digits.len() >= 10 {
            return Self::new("1", digits);
        }

        Err(I18nError::invalid_phone(format!(
            "cannot determine country code for {:?}",
            input
        )))
    }

    /// The country calling code, without `+`.
    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    /// The national number digits.
    pub fn number(&self) -> &str {
        &self.number
    }

    /// International format: `+{cc} {number}`.
    pub fn format(&self) -> String {
        format!("+{} {}", self.country_code, self.number)
    }

    /// International format without the separating space: `+{cc}{number}`.
    pub fn format_compact(&self) -> String {
        format!("+{}{}", self.country_code, self.number)
    }

    /// US-style dashed grouping (`555-123-4567`) when the country code is
    /// "1" and the number has exactly 10 digits; otherwise the bare number.
    pub fn format_local(&self) -> String {
        if self.country_code == "1" && self.number.len() == 10 {
            format!(
                "{}-{}-{}",
                &self.number[0..3],
                &self.number[3..6],
                &self.number[6..10]
            )
        } else {
            self.number.clone()
        }
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format())
    }
}

/// Keep ASCII digits, drop every separator (spaces, dashes, parens, dots).
fn strip_non_digits(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}
