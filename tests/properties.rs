//! Property-based tests for email validation

use proptest::prelude::*;
use stillmail::predicate::{email_format, Predicate};
use stillmail::{validate, ValidationConfig};

fn local_part() -> impl Strategy<Value = String> {
    "[a-z0-9!#$%&'*+/=?^_`{|}~-]{1,12}"
}

fn host_name() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z][a-z0-9-]{0,8}[a-z0-9]", 1..=3).prop_map(|labels| labels.join("."))
}

fn strict_address() -> impl Strategy<Value = String> {
    (local_part(), host_name()).prop_map(|(local, host)| format!("{}@{}", local, host))
}

proptest! {
    #[test]
    fn prop_short_values_report_too_short(value in "[a-z@.]{0,2}") {
        let errors = validate(&value, &ValidationConfig::default());
        prop_assert!(errors
            .iter()
            .any(|e| e == "is too short (minimum is 3 characters)"));
    }

    #[test]
    fn prop_long_strict_address_reports_only_too_long(extra in 316usize..400) {
        let address = format!("a@{}.com", "a".repeat(extra));
        let errors = validate(&address, &ValidationConfig::default());
        prop_assert_eq!(errors, vec!["is too long (maximum is 320 characters)".to_string()]);
    }

    #[test]
    fn prop_strict_addresses_have_no_errors(address in strict_address()) {
        prop_assert!(validate(&address, &ValidationConfig::default()).is_empty());
    }

    #[test]
    fn prop_strict_implies_unrestricted(value in "[a-z0-9@.\\[\\]_ -]{0,24}") {
        if email_format(true).check(value.as_str()) {
            prop_assert!(email_format(false).check(value.as_str()));
        }
    }

    #[test]
    fn prop_format_error_is_first_and_single(value in "[a-z ]{0,24}") {
        // No `@`, so never an address
        let errors = validate(&value, &ValidationConfig::default());
        prop_assert_eq!(errors.first().map(String::as_str), Some("is invalid"));
        prop_assert_eq!(errors.iter().filter(|e| *e == "is invalid").count(), 1);
    }

    #[test]
    fn prop_minimum_has_no_upper_bound(min in 0usize..16, extra in 0usize..400) {
        let address = format!("a@{}.com", "a".repeat(extra + 2));
        let config = ValidationConfig::builder().minimum(min).build().unwrap();
        let errors = validate(&address, &config);
        let expected = address.chars().count() >= min;
        prop_assert_eq!(errors.is_empty(), expected);
    }

    #[test]
    fn prop_exact_passes_only_at_length(len in 0usize..32, address in strict_address()) {
        let config = ValidationConfig::builder().is(len).build().unwrap();
        let errors = validate(&address, &config);
        prop_assert_eq!(errors.is_empty(), address.chars().count() == len);
    }

    #[test]
    fn prop_range_messages_match_side(lo in 0usize..20, span in 0usize..20, address in strict_address()) {
        let hi = lo + span;
        let config = ValidationConfig::builder().within(lo..=hi).build().unwrap();
        let len = address.chars().count();
        let errors = validate(&address, &config);
        if len < lo {
            prop_assert_eq!(errors, vec![format!("is too short (minimum is {} characters)", lo)]);
        } else if len > hi {
            prop_assert_eq!(errors, vec![format!("is too long (maximum is {} characters)", hi)]);
        } else {
            prop_assert!(errors.is_empty());
        }
    }

    #[test]
    fn prop_false_guard_skips_everything(value in ".{0,40}") {
        let config = ValidationConfig::builder().when(|_: &()| false).build().unwrap();
        prop_assert!(validate(&value, &config).is_empty());
    }
}
