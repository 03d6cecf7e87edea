use crate::config::Settings;
use crate::dice::Dice;
use crate::error::GenError;

// Productions must bottom out in literals well before this.
const MAX_DEPTH: usize = 32;

/// Grammar-driven random name generator.
///
/// Rules live in a [`Settings`] table. A style's `<style>.format` key (or
/// `<style>.<modifier>.format` when a modifier is given) lists the root
/// keys of a name, one per word. Each production is a space-separated list
/// of candidate rules; within a rule, uppercase ASCII letters reference
/// the `<style>.<letter>` production and every other character is a
/// literal. Numbered variants of any key are re-rolled independently on
/// every expansion, so the same key can yield different fragments within
/// one name.
#[derive(Debug, Clone)]
pub struct NameGenerator {
    rules: Settings,
}

impl NameGenerator {
    pub fn new(rules: Settings) -> Self {
        Self { rules }
    }

    pub fn planet_name(&self, dice: &mut Dice) -> Result<String, GenError> {
        self.name("planet", None, dice)
    }

    /// Build one name in the given style. Missing format or production
    /// keys are configuration errors; a name cannot be produced without
    /// them.
    pub fn name(
        &self,
        style: &str,
        modifier: Option<&str>,
        dice: &mut Dice,
    ) -> Result<String, GenError> {
        let format = self
            .scoped_rule(style, modifier, &format!("{style}.format"), dice)
            .ok_or_else(|| GenError::MissingKey(format!("{style}.format")))?;

        let mut name = String::new();
        for root in format.split_whitespace() {
            let word = self.expand_key(style, modifier, root, dice, 0)?;
            name.push_str(&capitalize(&word));
            name.push(' ');
        }

        let name = name.replace("' ", "'").replace('_', " ");
        Ok(capitalize_words(name.trim()))
    }

    /// Resolve `key` preferring the modifier-scoped variant. For format
    /// keys the modifier sits between style and suffix
    /// (`planet.desert.format`); for productions it is appended.
    fn scoped_rule(
        &self,
        style: &str,
        modifier: Option<&str>,
        key: &str,
        dice: &mut Dice,
    ) -> Option<String> {
        if let Some(modifier) = modifier {
            let scoped = if let Some(suffix) = key.strip_prefix(style) {
                format!("{style}.{modifier}{suffix}")
            } else {
                format!("{key}.{modifier}")
            };
            if let Some(rule) = self.rules.variant(&scoped, dice) {
                return Some(rule.to_string());
            }
        }
        self.rules.variant(key, dice).map(str::to_string)
    }

    fn expand_key(
        &self,
        style: &str,
        modifier: Option<&str>,
        key: &str,
        dice: &mut Dice,
        depth: usize,
    ) -> Result<String, GenError> {
        if depth > MAX_DEPTH {
            return Err(GenError::Malformed {
                key: key.to_string(),
                value: "recursive production never reaches a literal".to_string(),
            });
        }
        let list = self
            .scoped_rule(style, modifier, key, dice)
            .ok_or_else(|| GenError::MissingKey(key.to_string()))?;

        let rules: Vec<&str> = list.split_whitespace().collect();
        if rules.is_empty() {
            return Ok(String::new());
        }
        let rule = rules[dice.roll_zero(rules.len() as i32) as usize];

        let mut word = String::new();
        for c in rule.chars() {
            if c.is_ascii_uppercase() {
                let sub = self.expand_key(
                    style,
                    modifier,
                    &format!("{style}.{c}"),
                    dice,
                    depth + 1,
                )?;
                word.push_str(&sub);
            } else {
                word.push(c);
            }
        }
        Ok(word)
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Uppercase the first letter of every space-separated component.
fn capitalize_words(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if at_word_start {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = c == ' ';
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> Settings {
        Settings::from_pairs([
            ("planet.format", "planet.root"),
            ("planet.root", "CVC CVCVC"),
            ("planet.C", "b k r t th"),
            ("planet.V", "a e o u"),
        ])
    }

    #[test]
    fn names_are_capitalized_and_nonempty() {
        let names = NameGenerator::new(rules());
        let mut dice = Dice::new(17);
        for _ in 0..50 {
            let name = names.planet_name(&mut dice).unwrap();
            assert!(!name.is_empty());
            assert!(name.chars().next().unwrap().is_uppercase());
        }
    }

    #[test]
    fn missing_format_is_a_config_error() {
        let names = NameGenerator::new(Settings::new());
        let mut dice = Dice::new(1);
        let err = names.planet_name(&mut dice).unwrap_err();
        assert!(matches!(err, GenError::MissingKey(_)));
    }

    #[test]
    fn missing_production_is_a_config_error() {
        let names = NameGenerator::new(Settings::from_pairs([
            ("planet.format", "planet.root"),
            ("planet.root", "CV"),
            ("planet.C", "k"),
            // planet.V deliberately absent.
        ]));
        let mut dice = Dice::new(1);
        let err = names.planet_name(&mut dice).unwrap_err();
        assert!(matches!(err, GenError::MissingKey(key) if key == "planet.V"));
    }

    #[test]
    fn runaway_recursion_is_reported() {
        let names = NameGenerator::new(Settings::from_pairs([
            ("planet.format", "planet.root"),
            ("planet.root", "R"),
            ("planet.R", "R"),
        ]));
        let mut dice = Dice::new(1);
        let err = names.planet_name(&mut dice).unwrap_err();
        assert!(matches!(err, GenError::Malformed { .. }));
    }

    #[test]
    fn modifier_scoped_rules_take_precedence() {
        let names = NameGenerator::new(Settings::from_pairs([
            ("planet.format", "planet.root"),
            ("planet.desert.format", "planet.dune"),
            ("planet.root", "V"),
            ("planet.dune", "VV"),
            ("planet.V", "a"),
        ]));
        let mut dice = Dice::new(3);
        assert_eq!(names.name("planet", Some("desert"), &mut dice).unwrap(), "Aa");
        assert_eq!(names.name("planet", None, &mut dice).unwrap(), "A");
    }

    #[test]
    fn underscores_become_spaces_with_recapitalization() {
        let names = NameGenerator::new(Settings::from_pairs([
            ("planet.format", "planet.root"),
            ("planet.root", "new_V"),
            ("planet.V", "haven"),
        ]));
        let mut dice = Dice::new(3);
        assert_eq!(names.planet_name(&mut dice).unwrap(), "New Haven");
    }
}
