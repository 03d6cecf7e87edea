//! Settlement generation. Once a planet has a population, an era-specific
//! facility builder layers installations (residential, agriculture,
//! mining, ...) onto it, driven by the era's configuration table. The
//! facility catalog itself is an external, read-only collaborator.

mod lowtech;
mod primitive;

pub use lowtech::{Medieval, Renaissance};
pub use primitive::{BronzeAge, NeolithicTribes};

use std::collections::BTreeMap;
use std::rc::Rc;

use anyhow::{Context, Result as AnyResult};
use serde::Deserialize;

use crate::codes::{GovernmentType, PopulationSize, StarportType, TradeCode};
use crate::config::Settings;
use crate::dice::Dice;
use crate::error::GenError;
use crate::names::NameGenerator;
use crate::planet::Planet;

/// What role a facility plays in a settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, serde::Serialize)]
pub enum FacilityKind {
    Residential,
    Agriculture,
    Mining,
    Industry,
    Military,
    Religion,
    Trade,
}

/// A catalog template describing a type of settlement installation. The
/// generation core only ever reads these.
#[derive(Debug, Clone, Deserialize)]
pub struct Facility {
    pub name: String,
    pub kind: FacilityKind,
    #[serde(default)]
    pub codes: Vec<String>,
    #[serde(default)]
    pub inputs: Vec<String>,
    #[serde(default)]
    pub outputs: Vec<String>,
}

/// Read-only lookup into the facility catalog.
pub trait FacilityCatalog {
    fn facility(&self, name: &str) -> Option<Rc<Facility>>;
}

/// In-memory catalog, loadable from a YAML list of facility entries.
#[derive(Debug, Default)]
pub struct CatalogMap {
    facilities: BTreeMap<String, Rc<Facility>>,
}

impl CatalogMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, facility: Facility) {
        self.facilities
            .insert(facility.name.clone(), Rc::new(facility));
    }

    pub fn from_yaml_str(text: &str) -> AnyResult<Self> {
        let entries: Vec<Facility> =
            serde_yaml::from_str(text).context("facility catalog must be a list of entries")?;
        let mut catalog = Self::new();
        for entry in entries {
            catalog.insert(entry);
        }
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.facilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facilities.is_empty()
    }
}

impl FacilityCatalog for CatalogMap {
    fn facility(&self, name: &str) -> Option<Rc<Facility>> {
        self.facilities.get(name).cloned()
    }
}

/// Everything a settlement step works against.
pub struct SettlementContext<'a> {
    pub planet: &'a mut Planet,
    pub dice: &'a mut Dice,
    pub catalog: &'a dyn FacilityCatalog,
    /// Era configuration: key -> space-separated option list, with
    /// population-size scoped overrides (`government.Large`).
    pub config: &'a Settings,
    pub phrases: &'a Settings,
    pub names: &'a NameGenerator,
}

/// An era-specific settlement builder. Constructors validate the
/// population size: `None` is never legal, and each era has a ceiling.
pub trait FacilityBuilder: std::fmt::Debug {
    fn era(&self) -> &'static str;

    fn generate(&mut self, ctx: &mut SettlementContext<'_>) -> Result<(), GenError>;
}

/// Construct the era builder registered under `era`.
pub fn builder_for(
    era: &str,
    population: PopulationSize,
) -> Result<Box<dyn FacilityBuilder>, GenError> {
    match era {
        "NeolithicTribes" => Ok(Box::new(NeolithicTribes::new(population)?)),
        "BronzeAge" => Ok(Box::new(BronzeAge::new(population)?)),
        "Medieval" => Ok(Box::new(Medieval::new(population)?)),
        "Renaissance" => Ok(Box::new(Renaissance::new(population)?)),
        other => Err(GenError::MissingKey(format!("era.{other}"))),
    }
}

/// Names of every era understood by [`builder_for`].
pub const ERAS: [&str; 4] = ["NeolithicTribes", "BronzeAge", "Medieval", "Renaissance"];

pub(crate) fn lookup(
    catalog: &dyn FacilityCatalog,
    name: &str,
) -> Result<Rc<Facility>, GenError> {
    catalog
        .facility(name)
        .ok_or_else(|| GenError::UnknownFacility(name.to_string()))
}

/// Common first step for every era: government, law, technology, starport
/// and population count from the era configuration, plus its standing
/// trade codes. Keys may carry population-scoped overrides; option lists
/// are resolved one uniform pick per invocation.
pub(crate) fn apply_society(
    ctx: &mut SettlementContext<'_>,
    population: PopulationSize,
) -> Result<(), GenError> {
    let government: GovernmentType =
        ctx.config.require_parsed("government", population, ctx.dice)?;
    let tech_level: i32 = ctx.config.require_parsed("techLevel", population, ctx.dice)?;
    let law_level: i32 = ctx.config.require_parsed("lawLevel", population, ctx.dice)?;
    let starport: StarportType =
        ctx.config.require_parsed("starPort", population, ctx.dice)?;
    let population_code: i32 =
        ctx.config.require_parsed("population", population, ctx.dice)?;

    let planet = &mut *ctx.planet;
    planet.government = Some(government);
    planet.tech_level = tech_level;
    planet.law_level = law_level;
    planet.starport = starport;
    planet.population = roll_population(ctx.dice, population_code);

    for code in ctx.config.all_options("trade") {
        // Unrecognised codes in configuration are skipped, not fatal.
        if let Ok(code) = code.parse::<TradeCode>() {
            planet.add_trade_code(code);
        }
    }
    Ok(())
}

/// Population is configured as a power of ten; roll a plausible count to
/// four significant figures.
fn roll_population(dice: &mut Dice, code: i32) -> u64 {
    match code {
        i32::MIN..=0 => dice.roll(9) as u64,
        1 => 10 + dice.roll_zero(90) as u64,
        2 => 100 + dice.roll_zero(900) as u64,
        code => {
            let significant = (1000 + dice.roll_zero(9000)) as u64;
            significant * 10u64.pow((code - 3) as u32)
        }
    }
}

/// Add the primary residential facility. Size shifts with the planet's
/// wealth codes and technology level: industrialised societies support a
/// more effective workforce.
pub(crate) fn add_residential(
    ctx: &mut SettlementContext<'_>,
    residential: Rc<Facility>,
    mut size: i32,
) {
    let planet = &mut *ctx.planet;
    if planet.has_trade_code(TradeCode::Po) {
        size -= ctx.dice.roll_sum(6, 3);
    } else if planet.has_trade_code(TradeCode::Ri) {
        size += ctx.dice.roll_sum(6, 3);
    }
    size += match planet.tech_level {
        i32::MIN..=0 => -ctx.dice.roll_sum(6, 2),
        1 => -ctx.dice.d4(),
        2..=4 => 0,
        5 => 5,
        6 => 10,
        level => level * 2,
    };
    planet.add_installation(residential, size.max(1));
}

/// Add the non-residential installations, rescaled so their capacities
/// total about 100 (more for advanced societies), with a small jitter per
/// entry. Installations always append to the planet's list.
pub(crate) fn add_installations(
    ctx: &mut SettlementContext<'_>,
    installations: Vec<(Rc<Facility>, i32)>,
) {
    let total: i32 = installations.iter().map(|(_, size)| *size).sum();
    if total <= 0 {
        return;
    }

    let mut max_size = 100.0;
    let tech_level = ctx.planet.tech_level;
    if tech_level > 4 {
        max_size += ((tech_level - 4) as f64).sqrt() * 5.0;
    }
    let multiplier = max_size / total as f64;

    for (facility, size) in installations {
        let mut scaled = (size as f64 * multiplier) as i32;
        scaled += ctx.dice.d6() - ctx.dice.d6();
        if scaled < 2 {
            scaled = ctx.dice.d4();
        }
        ctx.planet.add_installation(facility, scaled);
    }
}

/// Append the settlement's narrative: the population-specific key first,
/// the template's generic key when the specific one is absent or blank.
pub(crate) fn append_settlement_description(
    ctx: &mut SettlementContext<'_>,
    template: &str,
    population: PopulationSize,
) -> Result<(), GenError> {
    let describer = crate::text::Describer::new(ctx.phrases, ctx.names);
    let key = format!("description.{template}.{population}");
    let fallback = format!("description.{template}");
    if let Some(text) =
        describer.describe_with_fallback(&key, &fallback, ctx.planet, ctx.dice)?
    {
        ctx.planet.append_description(&text);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_lookup_is_by_name() {
        let mut catalog = CatalogMap::new();
        catalog.insert(Facility {
            name: "hunterGatherer".into(),
            kind: FacilityKind::Agriculture,
            codes: vec![],
            inputs: vec![],
            outputs: vec!["Meat".into()],
        });
        assert!(catalog.facility("hunterGatherer").is_some());
        assert!(catalog.facility("orbitalDock").is_none());
    }

    #[test]
    fn catalog_parses_yaml_entries() {
        let catalog = CatalogMap::from_yaml_str(
            "- name: primitiveMining\n  kind: Mining\n  outputs: [\"Silicate Ore\"]\n",
        )
        .unwrap();
        assert_eq!(catalog.len(), 1);
        let mining = catalog.facility("primitiveMining").unwrap();
        assert_eq!(mining.kind, FacilityKind::Mining);
    }

    #[test]
    fn population_rolls_match_their_magnitude() {
        let mut dice = Dice::new(23);
        for _ in 0..50 {
            assert!((1..=9).contains(&roll_population(&mut dice, 0)));
            assert!((10..100).contains(&roll_population(&mut dice, 1)));
            assert!((100..1000).contains(&roll_population(&mut dice, 2)));
            let millions = roll_population(&mut dice, 6);
            assert!((1_000_000..10_000_000).contains(&millions));
        }
    }

    #[test]
    fn unknown_era_is_an_error() {
        let err = builder_for("Starfaring", PopulationSize::Medium).unwrap_err();
        assert!(matches!(err, GenError::MissingKey(_)));
    }
}
