use crate::config::Settings;
use crate::dice::Dice;
use crate::error::GenError;
use crate::names::NameGenerator;
use crate::planet::Planet;

// Phrase references must be acyclic; stop silently if they are not.
const MAX_DEPTH: usize = 16;

/// Renders narrative text for planets and settlements from a keyed phrase
/// table.
///
/// A phrase may use:
/// - numbered variants (`key`, `key.1`, ...) - one chosen per lookup;
/// - `[a|b|c]` - inline random choice;
/// - `{key}` or `{a|b|c}` - expand another phrase by key;
/// - `$Property` - substitute a planet property (`$Name` draws a fresh
///   name from the grammar generator when the planet has none).
///
/// A missing top-level key renders nothing: sparse phrase tables are
/// normal. A missing name grammar, however, is a configuration error.
pub struct Describer<'a> {
    phrases: &'a Settings,
    names: &'a NameGenerator,
}

impl<'a> Describer<'a> {
    pub fn new(phrases: &'a Settings, names: &'a NameGenerator) -> Self {
        Self { phrases, names }
    }

    /// Render the phrase at `key`, or `None` when the table has no entry.
    pub fn describe(
        &self,
        key: &str,
        planet: &Planet,
        dice: &mut Dice,
    ) -> Result<Option<String>, GenError> {
        let Some(phrase) = self.phrases.variant(key, dice).map(str::to_string) else {
            return Ok(None);
        };
        let rendered = self.render(&phrase, planet, dice, 0)?;
        Ok(Some(rendered.trim().to_string()))
    }

    /// Render `key`, falling back to `fallback` when the specific entry is
    /// absent or blank.
    pub fn describe_with_fallback(
        &self,
        key: &str,
        fallback: &str,
        planet: &Planet,
        dice: &mut Dice,
    ) -> Result<Option<String>, GenError> {
        match self.describe(key, planet, dice)? {
            Some(text) if !text.is_empty() => Ok(Some(text)),
            _ => self.describe(fallback, planet, dice),
        }
    }

    fn render(
        &self,
        phrase: &str,
        planet: &Planet,
        dice: &mut Dice,
        depth: usize,
    ) -> Result<String, GenError> {
        if depth > MAX_DEPTH {
            return Ok(String::new());
        }
        let mut out = String::new();
        let mut chars = phrase.chars().peekable();
        while let Some(c) = chars.next() {
            match c {
                '[' => {
                    let body = take_until(&mut chars, ']');
                    out.push_str(choose(&body, dice));
                }
                '{' => {
                    let body = take_until(&mut chars, '}');
                    let key = choose(&body, dice);
                    if let Some(referenced) = self.phrases.variant(key, dice).map(str::to_string) {
                        let rendered = self.render(&referenced, planet, dice, depth + 1)?;
                        out.push_str(&rendered);
                    }
                }
                '$' => {
                    let mut prop = String::new();
                    while let Some(&next) = chars.peek() {
                        if next.is_ascii_alphanumeric() {
                            prop.push(next);
                            chars.next();
                        } else {
                            break;
                        }
                    }
                    out.push_str(&self.property(&prop, planet, dice)?);
                }
                other => out.push(other),
            }
        }
        Ok(out)
    }

    fn property(
        &self,
        prop: &str,
        planet: &Planet,
        dice: &mut Dice,
    ) -> Result<String, GenError> {
        Ok(match prop {
            "Name" => {
                if planet.name.is_empty() {
                    self.names.planet_name(dice)?
                } else {
                    planet.name.clone()
                }
            }
            "PlanetType" => planet.planet_type.to_string(),
            "Atmosphere" => format!("{:?}", planet.atmosphere),
            "Temperature" => format!("{:?}", planet.temperature),
            "LifeType" => format!("{:?}", planet.life),
            "Hydrographics" => planet.hydrographics.to_string(),
            "Radius" => planet.radius.to_string(),
            "Population" => planet.population.to_string(),
            // Unknown properties render as nothing, like a gap in a roll
            // table.
            _ => String::new(),
        })
    }
}

fn take_until(chars: &mut std::iter::Peekable<std::str::Chars<'_>>, close: char) -> String {
    let mut body = String::new();
    for c in chars.by_ref() {
        if c == close {
            break;
        }
        body.push(c);
    }
    body
}

fn choose<'b>(body: &'b str, dice: &mut Dice) -> &'b str {
    let options: Vec<&str> = body.split('|').collect();
    if options.len() == 1 {
        return options[0];
    }
    options[dice.roll_zero(options.len() as i32) as usize]
}
