//! End-to-end scenarios across the value types.

use chrono::Duration;
use i18n_types::{
    Currency, I18nError, LocalizedDateTime, LocalizedPhone, Money, Phone, Time, Timezone,
};

#[test]
fn test_usd_price_scenario() {
    let usd = Currency::from_code("USD").unwrap();
    assert_eq!(usd.decimal_places(), 2);

    let price = Money::from_decimal(100.50, usd).unwrap();
    assert_eq!(price.amount_minor(), 10_050);
    assert_eq!(price.format(), "$100.50");
    assert_eq!(price.format_with_code(), "100.50 USD");
}

#[test]
fn test_money_storage_round_trip() {
    let eur = Currency::from_code("EUR").unwrap();
    let original = Money::from_decimal(19.99, eur).unwrap();

    let (amount, code) = original.to_parts();
    let restored = Money::from_parts(amount, code).unwrap();
    assert_eq!(restored, original);
    assert!((restored.to_decimal() - 19.99).abs() < 1e-6);
}

#[test]
fn test_mixed_currency_arithmetic_is_rejected() {
    let usd = Money::from_parts(100, "USD").unwrap();
    let eur = Money::from_parts(50, "EUR").unwrap();

    assert!(matches!(
        usd.add(&eur),
        Err(I18nError::CurrencyMismatch { .. })
    ));
    assert!(matches!(
        usd.subtract(&eur),
        Err(I18nError::CurrencyMismatch { .. })
    ));
}

#[test]
fn test_christmas_morning_in_new_york() {
    // 2023-12-25T10:30:00Z with a cached EST offset of -300 minutes
    let time = Time::new(1_703_500_200).unwrap();
    let est = Timezone::new("America/New_York", "EST", -300).unwrap();
    let local = LocalizedDateTime::new(time, est);

    assert_eq!(local.format("%Y-%m-%d %H:%M:%S"), "2023-12-25 05:30:00");
    assert_eq!(local.timezone().format_offset(), "-05:00");
    assert_eq!(local.to_parts(), (1_703_500_200, "America/New_York"));
}

#[test]
fn test_datetime_arithmetic_across_the_frame() {
    let local = LocalizedDateTime::from_parts(1_703_500_200, "UTC").unwrap();
    let next_day = local.add(Duration::days(1)).unwrap();

    assert!(local.is_before(&next_day));
    assert_eq!(next_day.duration_since(&local), Duration::days(1));
    assert_eq!(next_day.timezone().id(), "UTC");
}

#[test]
fn test_phone_parse_strategies_agree() {
    let explicit = Phone::new("44", "2071234567").unwrap();
    assert_eq!(Phone::parse("+44 207 123 4567").unwrap(), explicit);
    assert_eq!(Phone::parse("00442071234567").unwrap(), explicit);
}

#[test]
fn test_phone_longest_prefix_beats_short_codes() {
    let hk = Phone::parse("+8525551234567").unwrap();
    assert_eq!(hk.country_code(), "852");
    assert_eq!(hk.number(), "5551234567");
}

#[test]
fn test_parse_format_idempotence() {
    for (cc, number) in [
        ("1", "5551234567"),
        ("44", "2071234567"),
        ("852", "55512345"),
        ("7", "4951234567"),
    ] {
        let phone = Phone::new(cc, number).unwrap();
        assert_eq!(Phone::parse(&phone.format()).unwrap(), phone);
    }
}

#[test]
fn test_localized_phone_locations() {
    let phone = Phone::new("1", "5551234567").unwrap();
    let est = Timezone::new("America/New_York", "EST", -300).unwrap();

    let without_region =
        LocalizedPhone::new(phone.clone(), "United States", "", est.clone()).unwrap();
    assert_eq!(without_region.full_location(), "United States");

    let with_region = LocalizedPhone::new(phone, "United States", "New York", est).unwrap();
    assert_eq!(with_region.full_location(), "New York, United States");
    assert!(with_region.is_same_country(Some(&without_region)));
    assert!(!with_region.is_same_region(Some(&without_region)));
}

#[test]
fn test_localized_phone_storage_round_trip() {
    let original = LocalizedPhone::from_parts(
        "+1 5551234567",
        "United States",
        "New York",
        "America/New_York",
    )
    .unwrap();

    let (phone_str, country, region, tz_id) = original.to_parts();
    let restored =
        LocalizedPhone::from_parts(&phone_str, country, region, &tz_id).unwrap();

    assert_eq!(restored.phone(), original.phone());
    assert_eq!(restored.country(), original.country());
    assert_eq!(restored.region(), original.region());
    assert_eq!(restored.timezone().id(), original.timezone().id());
}

#[test]
fn test_timezone_offset_rendering() {
    let kolkata = Timezone::new("Asia/Kolkata", "IST", 330).unwrap();
    assert_eq!(kolkata.format_offset(), "+05:30");

    let new_york = Timezone::new("America/New_York", "EST", -300).unwrap();
    assert_eq!(new_york.format_offset(), "-05:00");
}

#[test]
fn test_time_window_boundaries() {
    assert!(Time::new(0).is_ok());
    assert!(Time::new(4_133_980_799).is_ok());
    assert!(matches!(Time::new(-1), Err(I18nError::OutOfRangeTime(_))));
    assert!(matches!(
        Time::new(4_133_980_800),
        Err(I18nError::OutOfRangeTime(_))
    ));
}

#[test]
fn test_display_renderings() {
    let time = Time::new(1_703_500_200).unwrap();
    assert_eq!(time.to_string(), "1703500200");

    let est = Timezone::new("America/New_York", "EST", -300).unwrap();
    let local = LocalizedDateTime::new(time, est);
    assert_eq!(
        local.to_string(),
        "2023-12-25 05:30:00 [America/New_York]"
    );
}

#[test]
fn test_overflow_is_reported_not_wrapped() {
    let usd = Currency::from_code("USD").unwrap();
    let max = Money::from_minor_units(i64::MAX, usd.clone());
    let one = Money::from_minor_units(1, usd);

    assert!(matches!(
        max.add(&one),
        Err(I18nError::ArithmeticOverflow(_))
    ));
}
