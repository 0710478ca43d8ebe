use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[cfg(feature = "schema")]
use schemars::JsonSchema;

use crate::error::{ModelError, ModelResult};

/// String options handed to a skill provider when building a skill.
///
/// Keys are matched exactly. Typed accessors parse on demand and report
/// malformed values as [`ModelError::InvalidOption`].
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(transparent)]
pub struct Options(BTreeMap<String, String>);

impl Options {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert or overwrite an option.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(|s| s.as_str())
    }

    /// Value of a required option.
    pub fn require(&self, key: &str) -> ModelResult<&str> {
        self.get(key)
            .ok_or_else(|| ModelError::MissingOption(key.to_string()))
    }

    /// Value of an optional option, or `default`.
    pub fn optional_str<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    /// Boolean option; accepts `true/false`, `yes/no`, `1/0` (case-insensitive).
    pub fn optional_bool(&self, key: &str, default: bool) -> ModelResult<bool> {
        let Some(raw) = self.get(key) else {
            return Ok(default);
        };
        match raw.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" | "1" => Ok(true),
            "false" | "no" | "0" => Ok(false),
            _ => Err(invalid(key, raw)),
        }
    }

    /// Unsigned integer option.
    pub fn optional_u64(&self, key: &str, default: u64) -> ModelResult<u64> {
        match self.get(key) {
            Some(raw) => raw.trim().parse().map_err(|_| invalid(key, raw)),
            None => Ok(default),
        }
    }

    /// Signed integer option.
    pub fn optional_i64(&self, key: &str, default: i64) -> ModelResult<i64> {
        match self.get(key) {
            Some(raw) => raw.trim().parse().map_err(|_| invalid(key, raw)),
            None => Ok(default),
        }
    }

    /// `;`-separated list option. Blank entries are skipped, order is kept.
    pub fn list(&self, key: &str) -> ModelResult<Vec<String>> {
        let raw = self.require(key)?;
        Ok(raw
            .split(';')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect())
    }

    /// Iterate through all options as `(&str, &str)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for Options
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

fn invalid(key: &str, value: &str) -> ModelError {
    ModelError::InvalidOption {
        key: key.to_string(),
        value: value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_reports_missing_key() {
        let opts = Options::new();
        match opts.require("intents") {
            Err(ModelError::MissingOption(key)) => assert_eq!(key, "intents"),
            other => panic!("expected MissingOption, got {other:?}"),
        }
    }

    #[test]
    fn optional_values_fall_back_to_default() {
        let opts = Options::new();
        assert!(!opts.optional_bool("any", false).unwrap());
        assert_eq!(opts.optional_u64("poll-ms", 500).unwrap(), 500);
        assert_eq!(opts.optional_i64("timeout-ms", -1).unwrap(), -1);
        assert_eq!(opts.optional_str("slot", "NLUSlot"), "NLUSlot");
    }

    #[test]
    fn bool_accepts_common_spellings() {
        for (raw, expected) in [("true", true), ("YES", true), ("1", true), ("no", false), ("0", false)] {
            let opts = Options::new().with("any", raw);
            assert_eq!(opts.optional_bool("any", !expected).unwrap(), expected, "{raw}");
        }
    }

    #[test]
    fn malformed_numbers_are_rejected() {
        let opts = Options::new().with("poll-ms", "fast").with("timeout-ms", "1.5");
        assert!(matches!(
            opts.optional_u64("poll-ms", 500),
            Err(ModelError::InvalidOption { .. })
        ));
        assert!(opts.optional_i64("timeout-ms", -1).is_err());
    }

    #[test]
    fn negative_is_not_an_u64() {
        let opts = Options::new().with("learn-ms", "-5");
        assert!(opts.optional_u64("learn-ms", 8000).is_err());
    }

    #[test]
    fn list_splits_and_skips_blanks() {
        let opts = Options::new().with("intents", "yes; no;;maybe ;");
        assert_eq!(opts.list("intents").unwrap(), vec!["yes", "no", "maybe"]);
    }

    #[test]
    fn serde_is_a_plain_map() {
        let opts: Options = [("any", "true"), ("timeout-ms", "3000")].into_iter().collect();
        let json = serde_json::to_string(&opts).unwrap();
        assert_eq!(json, r#"{"any":"true","timeout-ms":"3000"}"#);

        let back: Options = serde_json::from_str(&json).unwrap();
        assert_eq!(back, opts);
    }
}
