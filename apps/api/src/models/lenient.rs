//! Deserializers that turn malformed optional input into defaults instead of
//! rejecting the whole document.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// `null` (or a value of the wrong shape) becomes `T::default()`.
pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + serde::de::DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Keeps the string items of an array; anything else becomes an empty list.
pub fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

/// A string, or empty for `null` and non-string values.
pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => s,
        _ => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Default, Deserialize, PartialEq)]
    struct Inner {
        #[serde(default)]
        n: u32,
    }

    #[derive(Debug, Deserialize)]
    struct Sample {
        #[serde(default, deserialize_with = "super::string_list")]
        list: Vec<String>,
        #[serde(default, deserialize_with = "super::string")]
        text: String,
        #[serde(default, deserialize_with = "super::or_default")]
        inner: Inner,
    }

    fn parse(value: serde_json::Value) -> Sample {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_null_fields_become_defaults() {
        let p = parse(json!({"list": null, "text": null, "inner": null}));
        assert!(p.list.is_empty());
        assert_eq!(p.text, "");
        assert_eq!(p.inner, Inner::default());
    }

    #[test]
    fn test_missing_fields_become_defaults() {
        let p = parse(json!({}));
        assert!(p.list.is_empty());
        assert_eq!(p.text, "");
    }

    #[test]
    fn test_list_keeps_only_strings() {
        let p = parse(json!({"list": ["Rust", 3, null, "Go"], "text": 7, "inner": "x"}));
        assert_eq!(p.list, vec!["Rust", "Go"]);
        assert_eq!(p.text, "");
        assert_eq!(p.inner, Inner::default());
    }

    #[test]
    fn test_well_formed_values_pass_through() {
        let p = parse(json!({"list": ["Rust"], "text": "hi", "inner": {"n": 2}}));
        assert_eq!(p.list, vec!["Rust"]);
        assert_eq!(p.text, "hi");
        assert_eq!(p.inner, Inner { n: 2 });
    }
}
