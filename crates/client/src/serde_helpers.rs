//! Serde helpers for the engine's loose JSON typing.
//!
//! Responsibilities:
//! - Accept either JSON numbers or strings for identifier fields.
//! - Treat `null` collections (nil slices on the server) as empty.
//!
//! Explicitly does NOT handle:
//! - Validating higher-level semantics (ranges, required fields).
//!
//! Invariants / assumptions:
//! - Integration ids arrive as numbers from the engine but are handled as
//!   strings by the UI layer, so both forms must parse.

use serde::{Deserialize, Deserializer};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    U64(u64),
    I64(i64),
    F64(f64),
}

pub fn string_from_number_or_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = StringOrNumber::deserialize(deserializer)?;
    match value {
        StringOrNumber::String(s) => Ok(s),
        StringOrNumber::U64(v) => Ok(v.to_string()),
        StringOrNumber::I64(v) => Ok(v.to_string()),
        StringOrNumber::F64(v) => Ok(v.to_string()),
    }
}

/// Deserialize `null` as `T::default()`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(deserialize_with = "string_from_number_or_string")]
        id: String,
        #[serde(default, deserialize_with = "null_as_default")]
        items: Vec<u32>,
    }

    #[test]
    fn test_numeric_id_becomes_string() {
        let probe: Probe = serde_json::from_str(r#"{"id": 42, "items": [1]}"#).unwrap();
        assert_eq!(probe.id, "42");
        assert_eq!(probe.items, vec![1]);
    }

    #[test]
    fn test_null_collection_is_empty() {
        let probe: Probe = serde_json::from_str(r#"{"id": "7", "items": null}"#).unwrap();
        assert_eq!(probe.id, "7");
        assert!(probe.items.is_empty());
    }

    #[test]
    fn test_missing_collection_is_empty() {
        let probe: Probe = serde_json::from_str(r#"{"id": "7"}"#).unwrap();
        assert!(probe.items.is_empty());
    }

    proptest::proptest! {
        #[test]
        fn prop_any_numeric_id_matches_display(id in proptest::num::u64::ANY) {
            let probe: Probe = serde_json::from_str(&format!(r#"{{"id": {id}}}"#)).unwrap();
            proptest::prop_assert_eq!(probe.id, id.to_string());
        }
    }
}
