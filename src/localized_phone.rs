//! LocalizedPhone value object - a phone number anchored to a country,
//! optional region, and timezone.
//!
//! DDD: Value object - immutable, compared by value.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{I18nError, I18nResult};
use crate::phone::Phone;
use crate::timezone::Timezone;

/// A phone number with its geographic context.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "LocalizedPhoneWire")]
pub struct LocalizedPhone {
    phone: Phone,
    country: String,
    region: String,
    timezone: Timezone,
}

/// Raw wire shape; validated on deserialization.
#[derive(Deserialize)]
struct LocalizedPhoneWire {
    phone: Phone,
    country: String,
    #[serde(default)]
    region: String,
    timezone: Timezone,
}

impl TryFrom<LocalizedPhoneWire> for LocalizedPhone {
    type Error = I18nError;

    fn try_from(wire: LocalizedPhoneWire) -> Result<Self, Self::Error> {
        LocalizedPhone::new(wire.phone, wire.country, wire.region, wire.timezone)
    }
}

impl LocalizedPhone {
    /// Pair a validated phone and timezone with country/region labels.
    /// The region may be empty; the country may not.
    ///
    /// # Errors
    /// Returns `CompositeValidation` on the `country` field when it is empty.
    pub fn new(
        phone: Phone,
        country: impl Into<String>,
        region: impl Into<String>,
        timezone: Timezone,
    ) -> I18nResult<Self> {
        let country = country.into();
        if country.is_empty() {
            return Err(I18nError::composite(
                "country",
                I18nError::invalid_phone("country must not be empty"),
            ));
        }
        Ok(Self {
            phone,
            country,
            region: region.into(),
            timezone,
        })
    }

    /// Rebuild from the primitive 4-tuple of strings.
    ///
    /// # Errors
    /// Returns `CompositeValidation` naming the failing member.
    pub fn from_parts(
        phone: &str,
        country: impl Into<String>,
        region: impl Into<String>,
        timezone_id: &str,
    ) -> I18nResult<Self> {
        let phone = Phone::parse(phone).map_err(|e| I18nError::composite("phone", e))?;
        let timezone =
            Timezone::from_id(timezone_id).map_err(|e| I18nError::composite("timezone", e))?;
        Self::new(phone, country, region, timezone)
    }

    /// The phone number.
    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    /// The country label.
    pub fn country(&self) -> &str {
        &self.country
    }

    /// The region label; empty when unknown.
    pub fn region(&self) -> &str {
        &self.region
    }

    /// The timezone.
    pub fn timezone(&self) -> &Timezone {
        &self.timezone
    }

    /// International phone format, delegating to [`Phone::format`].
    pub fn format(&self) -> String {
        self.phone.format()
    }

    /// `"{region}, {country}"` when a region is present, else the country.
    pub fn full_location(&self) -> String {
        if self.region.is_empty() {
            self.country.clone()
        } else {
            format!("{}, {}", self.region, self.country)
        }
    }

    /// Structural equality on the country field; `None` compares false.
    pub fn is_same_country(&self, other: Option<&LocalizedPhone>) -> bool {
        match other {
            Some(other) => self.country == other.country,
            None => false,
        }
    }

    /// Structural equality on region and country; `None` compares false.
    pub fn is_same_region(&self, other: Option<&LocalizedPhone>) -> bool {
        match other {
            Some(other) => self.country == other.country && self.region == other.region,
            None => false,
        }
    }

    /// The primitive storage 4-tuple.
    pub fn to_parts(&self) -> (String, String, String, String) {
        (
            self.phone.format(),
            self.country.clone(),
            self.region.clone(),
            self.timezone.id().to_string(),
        )
    }
}

impl fmt::Display for LocalizedPhone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.phone.format(), self.full_location())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn us_phone() -> Phone {
        Phone::new("1", "5551234567").unwrap()
    }

    fn est() -> Timezone {
        Timezone::new("America/New_York", "EST", -300).unwrap()
    }

    #[test]
    fn test_new_requires_country() {
        let result = LocalizedPhone::new(us_phone(), "", "New York", est());
        assert!(matches!(
            result,
            Err(I18nError::CompositeValidation { field: "country", .. })
        ));
    }

    #[test]
    fn test_region_is_optional() {
        let phone = LocalizedPhone::new(us_phone(), "United States", "", est()).unwrap();
        assert_eq!(phone.full_location(), "United States");
    }

    #[test]
    fn test_full_location_with_region() {
        let phone =
            LocalizedPhone::new(us_phone(), "United States", "New York", est()).unwrap();
        assert_eq!(phone.full_location(), "New York, United States");
    }

    #[test]
    fn test_format_delegates_to_phone() {
        let phone = LocalizedPhone::new(us_phone(), "United States", "", est()).unwrap();
        assert_eq!(phone.format(), "+1 5551234567");
    }

    #[test]
    fn test_same_country_and_region() {
        let ny = LocalizedPhone::new(us_phone(), "United States", "New York", est()).unwrap();
        let ca = LocalizedPhone::new(
            Phone::new("1", "4155551234").unwrap(),
            "United States",
            "California",
            est(),
        )
        .unwrap();
        let ny_twin =
            LocalizedPhone::new(Phone::new("1", "2125551234").unwrap(), "United States", "New York", est())
                .unwrap();

        assert!(ny.is_same_country(Some(&ca)));
        assert!(!ny.is_same_region(Some(&ca)));
        assert!(ny.is_same_region(Some(&ny_twin)));

        assert!(!ny.is_same_country(None));
        assert!(!ny.is_same_region(None));
    }

    #[test]
    fn test_from_parts() {
        let phone =
            LocalizedPhone::from_parts("+1 5551234567", "United States", "New York", "UTC")
                .unwrap();
        assert_eq!(phone.phone().country_code(), "1");
        assert_eq!(phone.timezone().id(), "UTC");
    }

    #[test]
    fn test_from_parts_names_failing_member() {
        let bad_phone =
            LocalizedPhone::from_parts("nonsense", "United States", "", "UTC").unwrap_err();
        assert!(matches!(
            bad_phone,
            I18nError::CompositeValidation { field: "phone", .. }
        ));

        let bad_zone =
            LocalizedPhone::from_parts("+1 5551234567", "United States", "", "Nowhere/Null")
                .unwrap_err();
        assert!(matches!(
            bad_zone,
            I18nError::CompositeValidation { field: "timezone", .. }
        ));
    }

    #[test]
    fn test_to_parts() {
        let phone =
            LocalizedPhone::new(us_phone(), "United States", "New York", est()).unwrap();
        assert_eq!(
            phone.to_parts(),
            (
                "+1 5551234567".to_string(),
                "United States".to_string(),
                "New York".to_string(),
                "America/New_York".to_string()
            )
        );
    }
}
