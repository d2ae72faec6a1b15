//! Serde adapter writing absent values as the `"N/A"` sentinel.
//!
//! Internally every optional field is an `Option<T>` so "absent" and
//! "present but empty" stay distinct. Only at the serialization boundary is
//! `None` rendered as [`NOT_AVAILABLE`]; reading it back restores `None`.
//!
//! Use with `#[serde(with = "crate::types::sentinel", default)]`.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

use crate::constants::NOT_AVAILABLE;

pub fn serialize<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Serialize,
    S: Serializer,
{
    match value {
        Some(v) => v.serialize(serializer),
        None => serializer.serialize_str(NOT_AVAILABLE),
    }
}

pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw<T> {
        Sentinel(Sentinel),
        Null(()),
        Value(T),
    }

    Ok(match Raw::<T>::deserialize(deserializer)? {
        Raw::Sentinel(_) | Raw::Null(()) => None,
        Raw::Value(v) => Some(v),
    })
}

/// Deserializes only from the exact sentinel string.
struct Sentinel;

impl<'de> Deserialize<'de> for Sentinel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        if s == NOT_AVAILABLE {
            Ok(Sentinel)
        } else {
            Err(de::Error::custom("not the sentinel value"))
        }
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Probe {
        #[serde(with = "super", default)]
        name: Option<String>,
        #[serde(with = "super", default)]
        score: Option<f64>,
    }

    #[test]
    fn absent_values_serialize_as_sentinel() {
        let json = serde_json::to_string(&Probe { name: None, score: None }).unwrap();
        assert_eq!(json, r#"{"name":"N/A","score":"N/A"}"#);
    }

    #[test]
    fn sentinel_reads_back_as_none() {
        let probe: Probe = serde_json::from_str(r#"{"name":"N/A","score":7.5}"#).unwrap();
        assert_eq!(probe, Probe { name: None, score: Some(7.5) });
    }

    #[test]
    fn empty_string_is_not_absent() {
        let probe = Probe { name: Some(String::new()), score: None };
        let json = serde_json::to_string(&probe).unwrap();
        let back: Probe = serde_json::from_str(&json).unwrap();
        assert_eq!(back.name, Some(String::new()));
    }

    #[test]
    fn missing_key_defaults_to_none() {
        let probe: Probe = serde_json::from_str("{}").unwrap();
        assert_eq!(probe, Probe { name: None, score: None });
    }
}
