use crate::codes::{
    AtmospherePressure, AtmosphereType, LifeType, PlanetType, TradeCode,
};
use crate::error::GenError;
use crate::surface::{mottle, SurfaceGrid, Tile, MAP_HEIGHT};

use super::{roll_axial_tilt, roll_day_length, roll_radius, GenContext, WorldBuilder};

/// Europa-like ice moon: a fractured water-ice crust over a liquid ocean,
/// with a real chance of simple life in the dark underneath.
pub struct Europan;

impl Europan {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Europan {
    fn default() -> Self {
        Self::new()
    }
}

impl WorldBuilder for Europan {
    fn planet_type(&self) -> PlanetType {
        PlanetType::Europan
    }

    fn roll_attributes(&mut self, ctx: &mut GenContext<'_>) -> Result<(), GenError> {
        let dice = &mut *ctx.dice;
        let planet = &mut *ctx.planet;
        planet.radius = roll_radius(dice, self.planet_type().base_radius());
        planet.day_length = roll_day_length(dice);
        planet.axial_tilt = roll_axial_tilt(dice);

        if planet.radius > 3000 {
            planet.pressure = AtmospherePressure::Trace;
            planet.atmosphere = match dice.d3() {
                1 => AtmosphereType::Oxygen,
                2 => AtmosphereType::WaterVapour,
                _ => AtmosphereType::InertGases,
            };
            planet.add_trade_code(TradeCode::Ba);
        } else {
            planet.pressure = AtmospherePressure::None;
            planet.add_trade_code(TradeCode::Va);
        }
        planet.add_trade_code(TradeCode::Ic);
        planet.add_trade_code(TradeCode::H3);

        // Rolls of 8+ leave the ocean sterile.
        planet.life = match dice.roll_sum(6, 2) {
            2 => LifeType::Aerobic,
            3 | 4 => LifeType::Archaean,
            5..=7 => LifeType::Organic,
            _ => LifeType::None,
        };
        Ok(())
    }

    fn generate_map(&mut self, ctx: &mut GenContext<'_>) {
        let light = Tile::shared("Ice", "#F0F0F0", false);
        let dark = Tile::shared("Fractures", "#E8E8F0", false);
        let mut grid = SurfaceGrid::new(MAP_HEIGHT, &light);
        mottle(&mut grid, ctx.dice, &dark, 3);
        ctx.planet.surface = Some(grid);
    }

    fn generate_resources(&mut self, ctx: &mut GenContext<'_>) {
        let dice = &mut *ctx.dice;
        let planet = &mut *ctx.planet;
        planet.add_resource("Water", 20 + dice.roll_sum(20, 4));

        match planet.life {
            LifeType::Organic => {
                planet.add_resource("Organic Chemicals", dice.d20());
            }
            LifeType::Archaean => {
                let level = dice.d10() + 10;
                planet.add_resource("Organic Chemicals", level);
                match dice.d3() {
                    1 => {
                        planet.add_resource("Protobionts", level / dice.d3() + 1);
                    }
                    2 => {
                        planet.add_resource("Protobionts", level / 2);
                        planet.add_resource("Cyanobacteria", level / 3);
                    }
                    _ => {
                        planet.add_resource("Protobionts", level / 2);
                        planet.add_resource("Cyanobacteria", level + dice.d6());
                    }
                }
            }
            LifeType::Aerobic => {
                let level = 12 + dice.roll_sum(6, 3);
                planet.add_resource("Cyanobacteria", level + dice.d6());
                planet.add_resource("Algae", (level + dice.d4() - dice.d6()).max(1));
                planet.add_resource("Cnidarians", (level - dice.roll_sum(6, 2)).max(1));
            }
            _ => {}
        }
    }
}
