use crate::codes::{
    AtmospherePressure, AtmosphereType, LifeType, PlanetType, Temperature, TradeCode,
};
use crate::error::GenError;
use crate::surface::{
    add_continents, add_ecology, EcologyPalette, SurfaceGrid, TerrainPalette, Tile, MAP_HEIGHT,
};

use super::{roll_axial_tilt, roll_day_length, roll_radius, GenContext, WorldBuilder};

/// An Earth-like world, the most suitable category for complex life.
/// Individual worlds vary greatly in just how suitable they are; the
/// attribute rolls track a suitability modifier that picks the life tier
/// and habitability code.
pub struct Gaian;

impl Gaian {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Gaian {
    fn default() -> Self {
        Self::new()
    }
}

impl WorldBuilder for Gaian {
    fn planet_type(&self) -> PlanetType {
        PlanetType::Gaian
    }

    fn roll_attributes(&mut self, ctx: &mut GenContext<'_>) -> Result<(), GenError> {
        let dice = &mut *ctx.dice;
        let planet = &mut *ctx.planet;
        planet.radius = roll_radius(dice, self.planet_type().base_radius());
        planet.day_length = roll_day_length(dice);
        planet.axial_tilt = roll_axial_tilt(dice);

        let mut suitability = 0;

        // 3d6 keeps the tails rare; most worlds breathe something close
        // to a standard mix.
        match dice.roll_sum(6, 3) {
            3 | 4 => {
                planet.atmosphere = AtmosphereType::LowOxygen;
                suitability -= 1;
            }
            5..=7 => {
                planet.atmosphere = AtmosphereType::Pollutants;
                suitability -= 1;
            }
            14..=16 => {
                planet.atmosphere = AtmosphereType::HighOxygen;
                suitability += 1;
            }
            17 | 18 => {
                planet.atmosphere = AtmosphereType::HighCarbonDioxide;
                suitability -= 1;
            }
            _ => planet.atmosphere = AtmosphereType::Standard,
        }

        // Pressure scales with planet size; the dense branches trap heat
        // and push the temperature band up.
        match dice.roll_sum(6, 2) + planet.radius / 2000 {
            3 => {
                planet.pressure = AtmospherePressure::VeryThin;
                suitability -= 2;
            }
            4..=6 => {
                planet.pressure = AtmospherePressure::Thin;
                suitability -= 1;
            }
            14..=16 => {
                planet.pressure = AtmospherePressure::Dense;
                planet.temperature = planet.temperature.hotter();
            }
            17..=20 => {
                planet.pressure = AtmospherePressure::VeryDense;
                planet.temperature = planet.temperature.hotter();
                suitability -= 1;
            }
            _ => {
                planet.pressure = AtmospherePressure::Standard;
                planet.temperature = planet.temperature.hotter();
            }
        }

        planet.hydrographics = 15 + dice.roll_sum(20, 4);
        if planet.hydrographics > 50 && planet.hydrographics < 85 {
            suitability += 1;
        }
        if planet.temperature == Temperature::Warm {
            suitability += 1;
        }

        if suitability < -2 {
            planet.add_trade_code(TradeCode::H2);
            planet.life = LifeType::SimpleLand;
        } else if suitability < 0 {
            planet.add_trade_code(TradeCode::H1);
            planet.life = LifeType::ComplexLand;
        } else {
            planet.add_trade_code(TradeCode::H0);
            planet.life = LifeType::Extensive;
        }
        Ok(())
    }

    fn generate_map(&mut self, ctx: &mut GenContext<'_>) {
        let sea = Tile::shared("Sea", "#4444aa", true);
        let land = Tile::shared("Land", "#aaaa44", false);
        let palette = TerrainPalette {
            base: sea,
            shelf: land.clone(),
            mountains: Tile::shared("Mountains", "#B0B0B0", false),
        };
        let ecology = EcologyPalette {
            ice: Tile::shared("Ice", "#f0f0f0", false),
            woodland: Tile::shared("Woodland", "#44aa44", false),
            desert: Tile::shared("Desert", "#cccc33", false),
            jungle: Tile::shared("Jungle", "#338833", false),
        };
        let mut grid = SurfaceGrid::new(MAP_HEIGHT, &palette.base);
        add_continents(&mut grid, ctx.dice, &palette, ctx.planet.hydrographics);
        add_ecology(&mut grid, &ecology, &land);
        ctx.planet.surface = Some(grid);
    }

    /// Base resources are independent of the current ecology (though the
    /// oil assumes there was one at some point); the ecological entries
    /// read the finished tile composition, so the map must exist first.
    fn generate_resources(&mut self, ctx: &mut GenContext<'_>) {
        let dice = &mut *ctx.dice;
        let planet = &mut *ctx.planet;
        planet.add_resource("Water", planet.hydrographics);
        if planet.atmosphere == AtmosphereType::LowOxygen {
            planet.add_resource("Oxygen", 20);
        } else {
            planet.add_resource("Oxygen", 40);
        }
        planet.add_resource("Silicate Ore", 20 + dice.roll_sum(10, 3));
        planet.add_resource("Ferric Ore", 10 + dice.roll_sum(8, 3));
        planet.add_resource("Carbonic Ore", 10 + dice.roll_sum(10, 3));
        planet.add_resource("Natural Oil", 30 + dice.roll_sum(10, 3));

        let forest_percentage = planet
            .surface
            .as_ref()
            .map(|grid| {
                let forest = grid
                    .count_tiles(|t| t.name == "Woodland" || t.name == "Jungle");
                (forest * 100 / grid.surface_area().max(1)) as i32
            })
            .unwrap_or(0);

        match planet.life {
            LifeType::Extensive => {
                planet.add_resource("Wood", 10 + forest_percentage + dice.roll_sum(10, 2));
                planet.add_resource("Vegetables", 20 + dice.roll_sum(12, 3));
                planet.add_resource("Meat", 15 + dice.roll_sum(10, 2));
                planet.add_resource("Seafood", planet.hydrographics / 2 + dice.roll_sum(10, 2));
            }
            LifeType::ComplexLand => {
                planet.add_resource("Wood", 5 + forest_percentage / 2 + dice.roll_sum(8, 2));
                planet.add_resource("Vegetables", 10 + dice.roll_sum(10, 2));
                planet.add_resource("Seafood", planet.hydrographics / 3 + dice.roll_sum(8, 2));
            }
            LifeType::SimpleLand => {
                planet.add_resource("Algae", 10 + dice.roll_sum(8, 2));
                planet.add_resource("Organic Chemicals", 10 + dice.roll_sum(6, 2));
            }
            _ => {}
        }
    }
}
