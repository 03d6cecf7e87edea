use crate::codes::{AtmospherePressure, AtmosphereType, PlanetType, Temperature, TradeCode};
use crate::error::GenError;

use super::{GenContext, WorldBuilder};

/// A belt of rocky or icy debris rather than a single body. Belts have no
/// surface of their own, so no tile grid is produced; the radius records
/// the belt's thickness in millions of kilometres.
pub struct AsteroidBelt;

impl AsteroidBelt {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AsteroidBelt {
    fn default() -> Self {
        Self::new()
    }
}

impl WorldBuilder for AsteroidBelt {
    fn planet_type(&self) -> PlanetType {
        PlanetType::AsteroidBelt
    }

    fn roll_attributes(&mut self, ctx: &mut GenContext<'_>) -> Result<(), GenError> {
        let planet = &mut *ctx.planet;
        planet.radius = ctx.dice.roll_sum(6, 3);
        planet.atmosphere = AtmosphereType::Vacuum;
        planet.pressure = AtmospherePressure::None;
        planet.add_trade_code(TradeCode::As);
        Ok(())
    }

    fn generate_map(&mut self, _ctx: &mut GenContext<'_>) {
        // Belts are drawn as orbital charts by the map layer; there is no
        // surface to tile.
    }

    /// The resource set splits on temperature band: belts near the star
    /// carry metals and radioactives, cold belts carry ices and carbon
    /// compounds instead. Presence is deterministic per band; quantities
    /// roll.
    fn generate_resources(&mut self, ctx: &mut GenContext<'_>) {
        let dice = &mut *ctx.dice;
        let planet = &mut *ctx.planet;
        let base = planet.radius / 5;
        if planet.temperature >= Temperature::Hot {
            planet.add_resource("Silicate Ore", 30 + base + dice.roll_sum(12, 2));
            planet.add_resource("Ferric Ore", 15 + base + dice.roll_sum(6, 3));
            planet.add_resource("Heavy Metals", 15 + dice.roll_sum(6, 2));
            planet.add_resource("Rare Metals", 10 + dice.roll_sum(6, 3));
            planet.add_resource("Radioactives", 5 + dice.roll_sum(6, 2));
        } else {
            planet.add_resource("Silicate Ore", 20 + base + dice.roll_sum(12, 2));
            planet.add_resource("Water", 20 + dice.roll_sum(20, 2));
            planet.add_resource("Carbonic Ore", 10 + dice.roll_sum(12, 2));
            if dice.d2() == 1 {
                planet.add_resource("Precious Metals", 5 + dice.roll_sum(6, 2));
            }
        }
    }
}
