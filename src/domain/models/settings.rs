//! Raw settings snapshot as supplied by configuration sources.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::errors::SettingsError;

/// Flat snapshot of raw string settings keyed by dotted name
/// (`azure.storage.account-name`).
///
/// Keys are case-sensitive and iterate in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Settings {
    entries: BTreeMap<String, String>,
}

impl Settings {
    /// Empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `KEY=VALUE` entries. The split happens at the first `=`, the key
    /// is trimmed and the value is kept verbatim, so `key=` is an empty value.
    /// Later entries override earlier ones.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self, SettingsError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut settings = Self::new();
        for pair in pairs {
            let (key, value) = parse_pair(pair.as_ref())?;
            settings.insert(key, value);
        }
        Ok(settings)
    }

    /// Insert or replace a setting, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), value.into())
    }

    /// Raw value for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Whether `key` is present, even with an empty value.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the snapshot has no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Key/value pairs in sorted key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Overlay `other` on top of `self`; keys in `other` win.
    pub fn merge(&mut self, other: Self) {
        self.entries.extend(other.entries);
    }
}

/// Split a single `KEY=VALUE` entry.
pub fn parse_pair(pair: &str) -> Result<(String, String), SettingsError> {
    let (key, value) = pair
        .split_once('=')
        .ok_or_else(|| SettingsError::MalformedPair(pair.to_string()))?;

    let key = key.trim();
    if key.is_empty() {
        return Err(SettingsError::EmptyKey(pair.to_string()));
    }

    Ok((key.to_string(), value.to_string()))
}

impl<K, V> FromIterator<(K, V)> for Settings
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<K, V> Extend<(K, V)> for Settings
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl From<BTreeMap<String, String>> for Settings {
    fn from(entries: BTreeMap<String, String>) -> Self {
        Self { entries }
    }
}

impl From<std::collections::HashMap<String, String>> for Settings {
    fn from(entries: std::collections::HashMap<String, String>) -> Self {
        entries.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pairs_splits_at_first_equals() {
        let settings = Settings::from_pairs([
            "azure.storage.account-key=ZmFrZUFjY291bnRLZXk=",
            "azure.storage.emulator-blob-host=http://127.0.0.1:1000",
        ])
        .unwrap();

        assert_eq!(
            settings.get("azure.storage.account-key"),
            Some("ZmFrZUFjY291bnRLZXk=")
        );
        assert_eq!(
            settings.get("azure.storage.emulator-blob-host"),
            Some("http://127.0.0.1:1000")
        );
    }

    #[test]
    fn test_from_pairs_keeps_empty_values() {
        let settings = Settings::from_pairs(["azure.storage.account-name="]).unwrap();
        assert_eq!(settings.get("azure.storage.account-name"), Some(""));
    }

    #[test]
    fn test_from_pairs_trims_key_but_not_value() {
        let settings = Settings::from_pairs(["  azure.storage.container-name = box "]).unwrap();
        assert_eq!(settings.get("azure.storage.container-name"), Some(" box "));
    }

    #[test]
    fn test_from_pairs_later_entry_wins() {
        let settings = Settings::from_pairs(["a=1", "a=2"]).unwrap();
        assert_eq!(settings.get("a"), Some("2"));
        assert_eq!(settings.len(), 1);
    }

    #[test]
    fn test_from_pairs_rejects_missing_equals() {
        let err = Settings::from_pairs(["azure.storage.account-name"]).unwrap_err();
        assert!(matches!(err, SettingsError::MalformedPair(p) if p == "azure.storage.account-name"));
    }

    #[test]
    fn test_from_pairs_rejects_empty_key() {
        let err = Settings::from_pairs(["=value"]).unwrap_err();
        assert!(matches!(err, SettingsError::EmptyKey(_)));
    }

    #[test]
    fn test_merge_overrides() {
        let mut base: Settings = [("a", "1"), ("b", "2")].into_iter().collect();
        let overlay: Settings = [("b", "3")].into_iter().collect();
        base.merge(overlay);

        assert_eq!(base.get("a"), Some("1"));
        assert_eq!(base.get("b"), Some("3"));
    }

    #[test]
    fn test_iteration_is_sorted() {
        let settings: Settings = [("z", "1"), ("a", "2"), ("m", "3")].into_iter().collect();
        let keys: Vec<_> = settings.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "m", "z"]);
    }
}
