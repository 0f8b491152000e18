//! The environment produced by activating a profile.

use std::collections::BTreeMap;

use crate::domain::error::ProfileError;

/// Variables a sourced profile left behind, to be handed to the manager.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivatedEnv {
    vars: BTreeMap<String, String>,
}

impl ActivatedEnv {
    /// Parse `env -0` output: `KEY=VALUE` entries separated by NUL bytes.
    ///
    /// Values may contain `=` and newlines; only the first `=` splits.
    ///
    /// # Errors
    ///
    /// Returns an error for empty output, or for an entry without `=`, with
    /// an empty key, or that is not UTF-8.
    pub fn from_nul_separated(bytes: &[u8]) -> Result<Self, ProfileError> {
        let mut vars = BTreeMap::new();
        for (index, entry) in bytes
            .split(|b| *b == 0)
            .filter(|entry| !entry.is_empty())
            .enumerate()
        {
            let entry = std::str::from_utf8(entry).map_err(|_| ProfileError::NotUtf8 { index })?;
            let (key, value) = entry
                .split_once('=')
                .filter(|(key, _)| !key.is_empty())
                .ok_or(ProfileError::MalformedEntry { index })?;
            vars.insert(key.to_string(), value.to_string());
        }
        if vars.is_empty() {
            return Err(ProfileError::Empty);
        }
        Ok(Self { vars })
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ActivatedEnv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
