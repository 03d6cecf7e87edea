use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use serde::Serialize;

use crate::codes::{
    AtmospherePressure, AtmosphereType, GovernmentType, LifeType, PlanetFeature, PlanetType,
    PopulationSize, StarportType, TechnologyLevel, Temperature, TradeCode,
};
use crate::facilities::Facility;
use crate::surface::SurfaceGrid;

/// A facility placed on a planet at a given capacity. The facility itself
/// is a read-only catalog template.
#[derive(Debug, Clone)]
pub struct Installation {
    pub facility: Rc<Facility>,
    pub capacity: i32,
}

/// The mutable record a generation run populates. Created empty by the
/// caller, filled exactly once by a planet builder, optionally extended
/// once by a settlement builder. Generation steps are not idempotent:
/// running a phase twice double-adds resources and installations.
#[derive(Debug)]
pub struct Planet {
    pub name: String,
    pub planet_type: PlanetType,
    /// Radius in kilometres; greater than zero once generated.
    pub radius: i32,
    /// Day length in seconds.
    pub day_length: i32,
    /// Axial tilt in degrees, 0-90.
    pub axial_tilt: i32,
    pub atmosphere: AtmosphereType,
    pub pressure: AtmospherePressure,
    pub temperature: Temperature,
    /// Surface water coverage, 0-100.
    pub hydrographics: i32,
    pub life: LifeType,
    pub population: u64,
    pub government: Option<GovernmentType>,
    pub law_level: i32,
    pub tech_level: i32,
    pub starport: StarportType,
    pub trade_codes: BTreeSet<TradeCode>,
    pub features: BTreeSet<PlanetFeature>,
    pub resources: BTreeMap<String, i32>,
    pub description: String,
    pub installations: Vec<Installation>,
    pub surface: Option<SurfaceGrid>,
}

impl Planet {
    pub fn new() -> Self {
        Self {
            name: String::new(),
            planet_type: PlanetType::Undefined,
            radius: 0,
            day_length: 0,
            axial_tilt: 0,
            atmosphere: AtmosphereType::Vacuum,
            pressure: AtmospherePressure::None,
            temperature: Temperature::Standard,
            hydrographics: 0,
            life: LifeType::None,
            population: 0,
            government: None,
            law_level: 0,
            tech_level: 0,
            starport: StarportType::X,
            trade_codes: BTreeSet::new(),
            features: BTreeSet::new(),
            resources: BTreeMap::new(),
            description: String::new(),
            installations: Vec::new(),
            surface: None,
        }
    }

    /// Accumulate a resource. Adding the same name twice in one run sums
    /// the quantities; there is no overwrite.
    pub fn add_resource(&mut self, name: &str, quantity: i32) {
        *self.resources.entry(name.to_string()).or_insert(0) += quantity;
    }

    pub fn resource(&self, name: &str) -> i32 {
        self.resources.get(name).copied().unwrap_or(0)
    }

    pub fn add_trade_code(&mut self, code: TradeCode) {
        self.trade_codes.insert(code);
    }

    pub fn has_trade_code(&self, code: TradeCode) -> bool {
        self.trade_codes.contains(&code)
    }

    pub fn add_feature(&mut self, feature: PlanetFeature) {
        self.features.insert(feature);
    }

    pub fn has_feature(&self, feature: PlanetFeature) -> bool {
        self.features.contains(&feature)
    }

    pub fn add_installation(&mut self, facility: Rc<Facility>, capacity: i32) {
        self.installations.push(Installation { facility, capacity });
    }

    /// Append narrative text, separating sentences with a single space.
    pub fn append_description(&mut self, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }
        if !self.description.is_empty() {
            self.description.push(' ');
        }
        self.description.push_str(text);
    }

    pub fn population_size(&self) -> PopulationSize {
        match self.population {
            0 => PopulationSize::None,
            1..=100 => PopulationSize::Tiny,
            101..=10_000 => PopulationSize::Small,
            10_001..=1_000_000 => PopulationSize::Medium,
            1_000_001..=100_000_000 => PopulationSize::Large,
            100_000_001..=10_000_000_000 => PopulationSize::Huge,
            _ => PopulationSize::Gigantic,
        }
    }

    /// Serialisable summary handed to callers for persistence or display.
    pub fn report(&self) -> PlanetReport {
        PlanetReport {
            name: self.name.clone(),
            planet_type: self.planet_type,
            category: self.planet_type.category(),
            radius: self.radius,
            day_length: self.day_length,
            axial_tilt: self.axial_tilt,
            atmosphere: self.atmosphere,
            pressure: self.pressure,
            temperature: self.temperature,
            hydrographics: self.hydrographics,
            life: self.life,
            population: self.population,
            technology: TechnologyLevel::from_level(self.tech_level),
            starport: self.starport,
            trade_codes: self.trade_codes.iter().copied().collect(),
            features: self.features.iter().copied().collect(),
            resources: self.resources.clone(),
            installations: self
                .installations
                .iter()
                .map(|i| InstallationReport {
                    facility: i.facility.name.clone(),
                    capacity: i.capacity,
                })
                .collect(),
            description: self.description.clone(),
        }
    }
}

impl Default for Planet {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct InstallationReport {
    pub facility: String,
    pub capacity: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlanetReport {
    pub name: String,
    pub planet_type: PlanetType,
    pub category: crate::codes::Category,
    pub radius: i32,
    pub day_length: i32,
    pub axial_tilt: i32,
    pub atmosphere: AtmosphereType,
    pub pressure: AtmospherePressure,
    pub temperature: Temperature,
    pub hydrographics: i32,
    pub life: LifeType,
    pub population: u64,
    pub technology: TechnologyLevel,
    pub starport: StarportType,
    pub trade_codes: Vec<TradeCode>,
    pub features: Vec<PlanetFeature>,
    pub resources: BTreeMap<String, i32>,
    pub installations: Vec<InstallationReport>,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resources_sum_on_repeat_adds() {
        let mut planet = Planet::new();
        planet.add_resource("Silicate Ore", 30);
        planet.add_resource("Silicate Ore", 12);
        assert_eq!(planet.resource("Silicate Ore"), 42);
    }

    #[test]
    fn trade_codes_do_not_duplicate() {
        let mut planet = Planet::new();
        planet.add_trade_code(TradeCode::Va);
        planet.add_trade_code(TradeCode::Va);
        assert_eq!(planet.trade_codes.len(), 1);
    }

    #[test]
    fn population_size_tiers() {
        let mut planet = Planet::new();
        assert_eq!(planet.population_size(), PopulationSize::None);
        planet.population = 5_000;
        assert_eq!(planet.population_size(), PopulationSize::Small);
        planet.population = 40_000_000;
        assert_eq!(planet.population_size(), PopulationSize::Large);
    }

    #[test]
    fn description_appends_with_spacing() {
        let mut planet = Planet::new();
        planet.append_description("A barren rock.");
        planet.append_description("Nobody lives here.");
        assert_eq!(planet.description, "A barren rock. Nobody lives here.");
    }
}
