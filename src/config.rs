use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::dice::Dice;
use crate::error::GenError;

/// A resolved key -> value configuration table.
///
/// Values may hold several space-separated options; a key may carry
/// numbered variants (`key`, `key.1`, `key.2`, ...). Sourcing the table is
/// the caller's job - the generators only ever consume an already-resolved
/// mapping like this one.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    values: BTreeMap<String, String>,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Parse a flat YAML mapping of strings.
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let values: BTreeMap<String, String> =
            serde_yaml::from_str(text).context("settings must be a flat string mapping")?;
        Ok(Self { values })
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings file {}", path.display()))?;
        Self::from_yaml_str(&text).with_context(|| format!("failed to parse {}", path.display()))
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Look up `key`, choosing uniformly among numbered variants when they
    /// exist. Index 0 is the unsuffixed base key; each call re-rolls.
    pub fn variant(&self, key: &str, dice: &mut Dice) -> Option<&str> {
        let base = self.values.get(key)?;
        let mut count = 0;
        while self.values.contains_key(&format!("{key}.{}", count + 1)) {
            count += 1;
        }
        if count == 0 {
            return Some(base);
        }
        let choice = dice.roll_zero(count + 1);
        if choice == 0 {
            Some(base)
        } else {
            self.values.get(&format!("{key}.{choice}")).map(String::as_str)
        }
    }

    /// One option from a space-separated option list, chosen uniformly.
    pub fn one_option(&self, key: &str, dice: &mut Dice) -> Option<String> {
        let value = self.values.get(key)?.trim();
        if value.is_empty() {
            return None;
        }
        let options: Vec<&str> = value.split_whitespace().collect();
        let choice = if options.len() > 1 {
            dice.roll_zero(options.len() as i32) as usize
        } else {
            0
        };
        Some(options[choice].to_string())
    }

    /// Every option in a space-separated option list, in order.
    pub fn all_options(&self, key: &str) -> Vec<String> {
        match self.values.get(key) {
            Some(value) => value.split_whitespace().map(str::to_string).collect(),
            None => Vec::new(),
        }
    }

    /// `one_option` on `key.scope`, falling back to the unscoped `key`.
    pub fn scoped_option(
        &self,
        key: &str,
        scope: impl std::fmt::Display,
        dice: &mut Dice,
    ) -> Option<String> {
        self.one_option(&format!("{key}.{scope}"), dice)
            .or_else(|| self.one_option(key, dice))
    }

    /// Like [`Settings::scoped_option`] but missing keys are a
    /// configuration error.
    pub fn require_scoped(
        &self,
        key: &str,
        scope: impl std::fmt::Display,
        dice: &mut Dice,
    ) -> Result<String, GenError> {
        self.scoped_option(key, scope, dice)
            .ok_or_else(|| GenError::MissingKey(key.to_string()))
    }

    /// Parse a required scoped option into a typed value.
    pub fn require_parsed<T>(
        &self,
        key: &str,
        scope: impl std::fmt::Display,
        dice: &mut Dice,
    ) -> Result<T, GenError>
    where
        T: std::str::FromStr,
    {
        let value = self.require_scoped(key, scope, dice)?;
        value.parse().map_err(|_| GenError::Malformed {
            key: key.to_string(),
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dice() -> Dice {
        Dice::new(5)
    }

    #[test]
    fn single_option_needs_no_roll() {
        let settings = Settings::from_pairs([("government", "Monarchy")]);
        let mut dice = dice();
        assert_eq!(
            settings.one_option("government", &mut dice).as_deref(),
            Some("Monarchy")
        );
    }

    #[test]
    fn option_lists_pick_one_of_the_listed() {
        let settings = Settings::from_pairs([("starPort", "D E X")]);
        let mut dice = dice();
        for _ in 0..50 {
            let pick = settings.one_option("starPort", &mut dice).unwrap();
            assert!(["D", "E", "X"].contains(&pick.as_str()));
        }
    }

    #[test]
    fn scoped_lookup_falls_back_to_base_key() {
        let settings = Settings::from_pairs([("lawLevel", "2"), ("lawLevel.Large", "4")]);
        let mut dice = dice();
        assert_eq!(
            settings
                .scoped_option("lawLevel", "Large", &mut dice)
                .as_deref(),
            Some("4")
        );
        assert_eq!(
            settings
                .scoped_option("lawLevel", "Tiny", &mut dice)
                .as_deref(),
            Some("2")
        );
    }

    #[test]
    fn numbered_variants_all_reachable() {
        let settings = Settings::from_pairs([
            ("greeting", "a"),
            ("greeting.1", "b"),
            ("greeting.2", "c"),
        ]);
        let mut dice = dice();
        let mut seen = std::collections::BTreeSet::new();
        for _ in 0..200 {
            seen.insert(settings.variant("greeting", &mut dice).unwrap().to_string());
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn missing_required_key_is_a_config_error() {
        let settings = Settings::new();
        let mut dice = dice();
        let err = settings
            .require_scoped("government", "Tiny", &mut dice)
            .unwrap_err();
        assert!(matches!(err, GenError::MissingKey(_)));
    }
}
