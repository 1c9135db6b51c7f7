mod post;
mod profile;
mod view_mode;

pub use post::{sort_recent_first, LikeSet, Post};
pub use profile::Profile;
pub use view_mode::ViewMode;

use serde::{Deserialize, Deserializer};
use uuid::Uuid;

/// Auth user id; profiles, posts and likes are all keyed by it.
pub type UserId = Uuid;

/// Primary key of a post row.
pub type PostId = i64;

/// Helper to deserialize nullable strings as empty string
/// Handles both missing fields and explicit null values
pub(crate) fn deserialize_nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(|opt| opt.unwrap_or_default())
}

/// Treat an explicit null like a missing field.
pub(crate) fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(|opt| opt.unwrap_or_default())
}

/// Helper to deserialize a price as either a number or a numeric string
pub(crate) fn deserialize_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct PriceVisitor;

    impl<'de> Visitor<'de> for PriceVisitor {
        type Value = f64;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a number, numeric string or null")
        }

        fn visit_f64<E>(self, value: f64) -> Result<f64, E>
        where
            E: de::Error,
        {
            Ok(value)
        }

        fn visit_i64<E>(self, value: i64) -> Result<f64, E>
        where
            E: de::Error,
        {
            Ok(value as f64)
        }

        fn visit_u64<E>(self, value: u64) -> Result<f64, E>
        where
            E: de::Error,
        {
            Ok(value as f64)
        }

        fn visit_str<E>(self, value: &str) -> Result<f64, E>
        where
            E: de::Error,
        {
            value.trim().parse::<f64>().map_err(E::custom)
        }

        fn visit_unit<E>(self) -> Result<f64, E>
        where
            E: de::Error,
        {
            Ok(0.0)
        }

        fn visit_none<E>(self) -> Result<f64, E>
        where
            E: de::Error,
        {
            Ok(0.0)
        }
    }

    deserializer.deserialize_any(PriceVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Priced {
        #[serde(default, deserialize_with = "deserialize_price")]
        price: f64,
    }

    #[test]
    fn test_deserialize_price_variants() {
        let from_int: Priced = serde_json::from_str(r#"{"price": 5}"#).unwrap();
        assert_eq!(from_int.price, 5.0);

        let from_float: Priced = serde_json::from_str(r#"{"price": 4.75}"#).unwrap();
        assert_eq!(from_float.price, 4.75);

        let from_str: Priced = serde_json::from_str(r#"{"price": " 3.5 "}"#).unwrap();
        assert_eq!(from_str.price, 3.5);

        let missing: Priced = serde_json::from_str("{}").unwrap();
        assert_eq!(missing.price, 0.0);
    }

    #[test]
    fn test_deserialize_price_rejects_garbage() {
        let result = serde_json::from_str::<Priced>(r#"{"price": "cheap"}"#);
        assert!(result.is_err());
    }
}
