//! Length options and custom messages

use stillmail::{assert_email_errors, assert_invalid_email, assert_valid_email};
use stillmail::{validate, ConfigError, ValidationConfig};

fn long_address() -> String {
    format!("a@{}.com", "a".repeat(315))
}

#[test]
fn minimum_length() {
    let config = ValidationConfig::builder().minimum(8).build().unwrap();

    assert_valid_email!(config, "a@aa.com");
    assert_invalid_email!(config, "a@a.com");
}

#[test]
fn minimum_length_disables_maximum() {
    let config = ValidationConfig::builder().minimum(10).build().unwrap();

    assert_valid_email!(config, &long_address());
}

#[test]
fn maximum_length() {
    let config = ValidationConfig::builder().maximum(8).build().unwrap();

    assert_valid_email!(config, "a@aa.com");
    assert_email_errors!(config, "a@aaa.com", ["is too long (maximum is 8 characters)"]);
}

#[test]
fn maximum_length_disables_minimum() {
    let config = ValidationConfig::builder().maximum(8).build().unwrap();

    // Malformed, but not too short
    assert_invalid_email!(config, "a@a", count = 1);
}

#[test]
fn exact_length() {
    let config = ValidationConfig::builder().is(8).build().unwrap();

    assert_valid_email!(config, "a@aa.com");
    assert_invalid_email!(config, "a@a.com");
    assert_email_errors!(
        config,
        "a@aaa.com",
        ["is the wrong length (should be 8 characters)"]
    );
}

#[test]
fn within_range() {
    let config = ValidationConfig::builder().within(8..=10).build().unwrap();

    assert_invalid_email!(config, "a@a.com");
    assert_valid_email!(config, "a@aa.com");
    assert_valid_email!(config, "a@aaaa.com");
    assert_email_errors!(
        config,
        "a@aaaaa.com",
        ["is too long (maximum is 10 characters)"]
    );
}

#[test]
fn in_range() {
    let config = ValidationConfig::builder().in_range(8..=10).build().unwrap();

    assert_invalid_email!(config, "a@a.com");
    assert_valid_email!(config, "a@aa.com");
    assert_valid_email!(config, "a@aaaa.com");
    assert_invalid_email!(config, "a@aaaaa.com");
}

#[test]
fn range_too_short_uses_lower_bound() {
    let config = ValidationConfig::builder().range(9..=10).build().unwrap();

    assert_email_errors!(
        config,
        "a@aa.com",
        ["is too short (minimum is 9 characters)"]
    );
}

#[test]
fn too_long_message() {
    let config = ValidationConfig::builder()
        .too_long("custom")
        .build()
        .unwrap();

    let errors = validate(&long_address(), &config);
    assert_eq!(errors.last().map(String::as_str), Some("custom"));
}

#[test]
fn too_short_message() {
    let config = ValidationConfig::builder()
        .too_short("custom")
        .build()
        .unwrap();

    let errors = validate("a@", &config);
    assert_eq!(errors.last().map(String::as_str), Some("custom"));
}

#[test]
fn wrong_length_message() {
    let config = ValidationConfig::builder()
        .is(8)
        .wrong_length("custom")
        .build()
        .unwrap();

    let errors = validate("a@a.com", &config);
    assert_eq!(errors.last().map(String::as_str), Some("custom"));
}

#[test]
fn wrong_format_message() {
    let config = ValidationConfig::builder()
        .is(8)
        .wrong_format("custom")
        .build()
        .unwrap();

    let errors = validate("a@a", &config);
    assert_eq!(errors.first().map(String::as_str), Some("custom"));
}

#[test]
fn message_template_interpolates_bound() {
    let config = ValidationConfig::builder()
        .maximum(8)
        .too_long("at most {count} please")
        .build()
        .unwrap();

    assert_email_errors!(config, "a@aaa.com", ["at most 8 please"]);
}

#[test]
fn minimum_with_maximum_is_rejected() {
    let result = ValidationConfig::<()>::builder()
        .minimum(3)
        .maximum(320)
        .build();

    assert_eq!(
        result.unwrap_err(),
        ConfigError::ConflictingLength {
            first: "minimum",
            second: "maximum"
        }
    );
}

#[test]
fn within_with_exact_is_rejected() {
    let result = ValidationConfig::<()>::builder()
        .within(3..=10)
        .is(5)
        .build();

    assert!(matches!(
        result,
        Err(ConfigError::ConflictingLength { .. })
    ));
}
