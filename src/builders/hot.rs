use crate::codes::{
    AtmospherePressure, AtmosphereType, LifeType, PlanetFeature, PlanetType, Temperature,
    TradeCode,
};
use crate::error::GenError;
use crate::surface::{
    add_continents, add_craters, CraterSettings, SurfaceGrid, TerrainPalette, Tile, MAP_HEIGHT,
};

use super::{roll_axial_tilt, roll_radius, GenContext, WorldBuilder};

/// Venus-like world: a runaway greenhouse under a permanent deck of dense
/// cloud. The surface map shows the rock beneath; the clouds are carried
/// as a feature.
pub struct Cytherean;

impl Cytherean {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Cytherean {
    fn default() -> Self {
        Self::new()
    }
}

impl WorldBuilder for Cytherean {
    fn planet_type(&self) -> PlanetType {
        PlanetType::Cytherean
    }

    fn roll_attributes(&mut self, ctx: &mut GenContext<'_>) -> Result<(), GenError> {
        let dice = &mut *ctx.dice;
        let planet = &mut *ctx.planet;
        planet.radius = roll_radius(dice, self.planet_type().base_radius());
        // These worlds rotate slowly, often slower than their year.
        planet.day_length = dice.roll_sum(6, 2) * 10_000 + dice.roll(30_000);
        planet.axial_tilt = roll_axial_tilt(dice);

        match dice.roll_sum(6, 2) {
            2..=4 => planet.atmosphere = AtmosphereType::SulphurCompounds,
            5..=9 => planet.atmosphere = AtmosphereType::CarbonDioxide,
            _ => {
                planet.atmosphere = AtmosphereType::Exotic;
                planet.add_resource("Exotic Gases", dice.roll_sum(20, 3));
            }
        }

        match dice.d6() {
            1 | 2 => {
                planet.pressure = AtmospherePressure::Dense;
                planet.temperature = Temperature::VeryHot;
            }
            3..=5 => {
                planet.pressure = AtmospherePressure::VeryDense;
                planet.temperature = Temperature::VeryHot;
            }
            _ => {
                planet.pressure = AtmospherePressure::SuperDense;
                planet.temperature = Temperature::ExtremelyHot;
            }
        }

        planet.hydrographics = 0;
        planet.life = LifeType::None;
        planet.add_trade_code(TradeCode::H5);
        planet.add_feature(PlanetFeature::DenseClouds);
        Ok(())
    }

    fn generate_map(&mut self, ctx: &mut GenContext<'_>) {
        let palette = TerrainPalette {
            base: Tile::shared("Plains", "#997755", false),
            shelf: Tile::shared("Uplands", "#AA8866", false),
            mountains: Tile::shared("Mountains", "#B0B0B0", false),
        };
        let crater = Tile::shared("Crater", "#886644", false);
        let mut grid = SurfaceGrid::new(MAP_HEIGHT, &palette.base);
        add_continents(&mut grid, ctx.dice, &palette, 0);
        // The thick atmosphere erodes all but the largest impacts.
        let settings = CraterSettings {
            count: ctx.dice.roll_sum(6, 2),
            max_radius: 5,
            min_radius: 2,
        };
        add_craters(&mut grid, ctx.dice, &crater, &settings);
        ctx.planet.surface = Some(grid);
    }

    fn generate_resources(&mut self, ctx: &mut GenContext<'_>) {
        let dice = &mut *ctx.dice;
        let planet = &mut *ctx.planet;
        planet.add_resource("Corrosive Gases", 30 + dice.roll_sum(20, 2));
        planet.add_resource("Corrosive Chemicals", 20 + dice.roll_sum(12, 2));
        planet.add_resource("Silicate Ore", 20 + dice.roll_sum(10, 3));
        planet.add_resource("Silicate Crystals", 5 + dice.roll_sum(6, 2));
        planet.add_resource("Ferric Ore", 10 + dice.roll_sum(8, 3));
    }
}
