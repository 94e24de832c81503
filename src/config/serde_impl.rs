//! Serde support for configurations (feature-gated)
//!
//! A configuration serializes as its [`Options`] table. Deserializing runs
//! the same checks as [`ValidationConfigBuilder::build`], so conflicting
//! length options fail to load. Guards are code and are never serialized; a
//! loaded configuration always validates.
//!
//! ```rust,ignore
//! let config: ValidationConfig = serde_json::from_str(r#"{"within": [8, 10], "strict": false}"#)?;
//! ```
//!
//! [`ValidationConfigBuilder::build`]: super::ValidationConfigBuilder::build

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{Options, ValidationConfig};
use crate::condition::Condition;

impl<R: ?Sized> Serialize for ValidationConfig<R> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Options::from(self).serialize(serializer)
    }
}

impl<'de, R: ?Sized> Deserialize<'de> for ValidationConfig<R> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let options = Options::deserialize(deserializer)?;
        options
            .into_config(Condition::Always)
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LengthConstraint, Messages};

    #[test]
    fn test_deserialize_range_alias() {
        let config: ValidationConfig =
            serde_json::from_str(r#"{"in": [8, 10], "strict": false}"#).unwrap();
        assert_eq!(config.length(), Some(&LengthConstraint::Range(8..=10)));
        assert!(!config.is_strict());
    }

    #[test]
    fn test_deserialize_empty_table_is_default() {
        let config: ValidationConfig = serde_json::from_str("{}").unwrap();
        assert!(config.is_strict());
        assert_eq!(config.length(), None);
        assert_eq!(config.messages(), &Messages::default());
    }

    #[test]
    fn test_deserialize_rejects_conflicting_length() {
        let result: Result<ValidationConfig, _> =
            serde_json::from_str(r#"{"minimum": 3, "maximum": 10}"#);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("conflicting length options"));
    }

    #[test]
    fn test_deserialize_rejects_unknown_option() {
        let result: Result<ValidationConfig, _> = serde_json::from_str(r#"{"minimun": 3}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_exact_as_is() {
        let config = ValidationConfig::<()>::builder()
            .is(8)
            .wrong_format("custom")
            .build()
            .unwrap();
        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value["is"], 8);
        assert_eq!(value["wrong_format"], "custom");
        assert!(value.get("minimum").is_none());
    }
}
