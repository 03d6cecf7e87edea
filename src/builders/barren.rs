//! Barren rock worlds: no surface water, no life, little or no
//! atmosphere. Potentially rich in mineral resources, but with little
//! else going for them. Maps are crater fields over a cracked crust.

use crate::codes::{
    AtmospherePressure, AtmosphereType, PlanetFeature, PlanetType, Temperature, TradeCode,
};
use crate::error::GenError;
use crate::surface::{
    add_continents, add_craters, CraterSettings, SurfaceGrid, TerrainPalette, Tile, TileRef,
    MAP_HEIGHT,
};

use super::{roll_axial_tilt, roll_day_length, roll_radius, GenContext, WorldBuilder};

/// Build a continental crust and overlay the category's crater field.
fn cratered_map(
    ctx: &mut GenContext<'_>,
    palette: &TerrainPalette,
    crater: &TileRef,
    settings: CraterSettings,
) {
    let mut grid = SurfaceGrid::new(MAP_HEIGHT, &palette.base);
    add_continents(&mut grid, ctx.dice, palette, 0);
    add_craters(&mut grid, ctx.dice, crater, &settings);
    ctx.planet.surface = Some(grid);
}

/// Mercury-like world close to its sun: a silicate mantle over a large
/// metal core, baked and heavily cratered.
pub struct Hermian;

impl Hermian {
    pub fn new() -> Self {
        Self
    }
}

impl WorldBuilder for Hermian {
    fn planet_type(&self) -> PlanetType {
        PlanetType::Hermian
    }

    fn roll_attributes(&mut self, ctx: &mut GenContext<'_>) -> Result<(), GenError> {
        let planet = &mut *ctx.planet;
        planet.radius = roll_radius(ctx.dice, self.planet_type().base_radius());
        planet.day_length = roll_day_length(ctx.dice);
        planet.axial_tilt = roll_axial_tilt(ctx.dice);
        if planet.radius > 3000 {
            // Just enough gravity to hold on to a trace of inert gas.
            planet.pressure = AtmospherePressure::Trace;
            planet.atmosphere = AtmosphereType::InertGases;
            planet.add_trade_code(TradeCode::Ba);
        } else {
            planet.add_trade_code(TradeCode::Va);
        }
        Ok(())
    }

    fn generate_map(&mut self, ctx: &mut GenContext<'_>) {
        let palette = TerrainPalette {
            base: Tile::shared("Dark", "#BBBBBB", false),
            shelf: Tile::shared("Light", "#CCCCCC", false),
            mountains: Tile::shared("Mountains", "#DDDDDD", false),
        };
        let crater = Tile::shared("Crater", "#A0A0A0", false);
        cratered_map(
            ctx,
            &palette,
            &crater,
            CraterSettings {
                count: 120,
                ..CraterSettings::default()
            },
        );
    }

    fn generate_resources(&mut self, ctx: &mut GenContext<'_>) {
        let dice = &mut *ctx.dice;
        let planet = &mut *ctx.planet;
        planet.add_resource("Silicate Ore", 30 + dice.roll_sum(20, 3));
        if dice.d2() == 1 {
            planet.add_resource("Silicate Crystals", 10 + dice.roll_sum(10, 2));
        }
        planet.add_resource("Ferric Ore", 20 + dice.roll_sum(20, 2));
        if dice.d2() == 1 {
            planet.add_resource("Heavy Metals", 10 + dice.roll_sum(12, 2));
        }
        planet.add_resource("Radioactives", 5 + dice.roll_sum(6, 2));
        if dice.d4() == 1 {
            planet.add_resource("Rare Metals", 5 + dice.roll_sum(6, 2));
        }
        planet.add_resource("Helium 3", dice.roll_sum(6, 2));
    }
}

/// Moon-like world: dry, airless and quiet, with limited resources.
pub struct Selenian;

impl Selenian {
    pub fn new() -> Self {
        Self
    }
}

impl WorldBuilder for Selenian {
    fn planet_type(&self) -> PlanetType {
        PlanetType::Selenian
    }

    fn roll_attributes(&mut self, ctx: &mut GenContext<'_>) -> Result<(), GenError> {
        let planet = &mut *ctx.planet;
        planet.radius = roll_radius(ctx.dice, self.planet_type().base_radius());
        planet.day_length = roll_day_length(ctx.dice);
        planet.axial_tilt = roll_axial_tilt(ctx.dice);
        planet.atmosphere = AtmosphereType::Vacuum;
        planet.add_trade_code(TradeCode::Va);
        if planet.temperature.is_hotter_than(Temperature::ExtremelyHot) {
            planet.add_trade_code(TradeCode::H4);
        } else {
            planet.add_trade_code(TradeCode::In);
        }
        Ok(())
    }

    fn generate_map(&mut self, ctx: &mut GenContext<'_>) {
        let palette = TerrainPalette {
            base: Tile::shared("Dark", "#C0C0C0", false),
            shelf: Tile::shared("Light", "#D0D0D0", false),
            mountains: Tile::shared("Highlands", "#E0E0E0", false),
        };
        let crater = Tile::shared("Crater", "#B0B0B0", false);
        cratered_map(
            ctx,
            &palette,
            &crater,
            CraterSettings {
                count: 120,
                ..CraterSettings::default()
            },
        );
    }

    fn generate_resources(&mut self, ctx: &mut GenContext<'_>) {
        let dice = &mut *ctx.dice;
        let planet = &mut *ctx.planet;
        planet.add_resource("Silicate Ore", 30 + dice.roll_sum(20, 3));
        if dice.d2() == 1 {
            planet.add_resource("Silicate Crystals", 10 + dice.roll_sum(10, 2));
        }
        if dice.d2() == 1 {
            // Oxygen locked up in the regolith.
            planet.add_resource("Oxygen", dice.roll_sum(4, 2));
        }
        planet.add_resource("Helium 3", dice.roll_sum(4, 2));
    }
}

/// A small world stripped down to its core of heavy metals.
pub struct Hadean;

impl Hadean {
    pub fn new() -> Self {
        Self
    }
}

impl WorldBuilder for Hadean {
    fn planet_type(&self) -> PlanetType {
        PlanetType::Hadean
    }

    fn roll_attributes(&mut self, ctx: &mut GenContext<'_>) -> Result<(), GenError> {
        let planet = &mut *ctx.planet;
        planet.radius = roll_radius(ctx.dice, self.planet_type().base_radius());
        planet.day_length = roll_day_length(ctx.dice);
        planet.axial_tilt = roll_axial_tilt(ctx.dice);
        planet.add_trade_code(TradeCode::Va);
        if planet.temperature.is_hotter_than(Temperature::ExtremelyHot) {
            planet.add_trade_code(TradeCode::H4);
        } else {
            planet.add_trade_code(TradeCode::H3);
        }
        if ctx.dice.d4() == 1 {
            planet.add_feature(PlanetFeature::HeavilyCratered);
        }
        Ok(())
    }

    fn generate_map(&mut self, ctx: &mut GenContext<'_>) {
        let palette = TerrainPalette {
            base: Tile::shared("Dark", "#908070", false),
            shelf: Tile::shared("Light", "#A09080", false),
            mountains: Tile::shared("Ridges", "#B0A090", false),
        };
        let crater = Tile::shared("Crater", "#807060", false);
        let count = if ctx.planet.has_feature(PlanetFeature::HeavilyCratered) {
            100
        } else {
            50
        };
        cratered_map(
            ctx,
            &palette,
            &crater,
            CraterSettings {
                count,
                ..CraterSettings::default()
            },
        );
    }

    fn generate_resources(&mut self, ctx: &mut GenContext<'_>) {
        let dice = &mut *ctx.dice;
        let planet = &mut *ctx.planet;
        planet.add_resource("Silicate Ore", 15 + dice.roll_sum(8, 2));
        planet.add_resource("Ferric Ore", 65 + dice.roll_sum(20, 2));
        planet.add_resource("Heavy Metals", 45 + dice.roll_sum(20, 2));
        planet.add_resource("Radioactives", 10 + dice.roll_sum(8, 3));
    }
}

/// Iron-rich dwarf world, dense and heavily cratered.
pub struct Ferrinian;

impl Ferrinian {
    pub fn new() -> Self {
        Self
    }
}

impl WorldBuilder for Ferrinian {
    fn planet_type(&self) -> PlanetType {
        PlanetType::Ferrinian
    }

    fn roll_attributes(&mut self, ctx: &mut GenContext<'_>) -> Result<(), GenError> {
        let planet = &mut *ctx.planet;
        planet.radius = roll_radius(ctx.dice, self.planet_type().base_radius());
        planet.day_length = roll_day_length(ctx.dice);
        planet.axial_tilt = roll_axial_tilt(ctx.dice);
        planet.add_trade_code(TradeCode::Va);
        if planet.temperature.is_hotter_than(Temperature::ExtremelyHot) {
            planet.add_trade_code(TradeCode::H4);
        } else {
            planet.add_trade_code(TradeCode::H3);
        }
        // Gaps in this table deliberately leave the surface unremarkable.
        match ctx.dice.d6() {
            1..=3 => planet.add_feature(PlanetFeature::HeavilyCratered),
            6 => planet.add_feature(PlanetFeature::GiantCrater),
            _ => {}
        }
        Ok(())
    }

    fn generate_map(&mut self, ctx: &mut GenContext<'_>) {
        let palette = TerrainPalette {
            base: Tile::shared("Dark", "#706050", false),
            shelf: Tile::shared("Crust", "#907060", false),
            mountains: Tile::shared("Mountains", "#C0B0B0", false),
        };
        let crater = Tile::shared("Crater", "#807060", false);
        let count = if ctx.planet.has_feature(PlanetFeature::HeavilyCratered) {
            150 + ctx.dice.d100()
        } else {
            150
        };
        cratered_map(
            ctx,
            &palette,
            &crater,
            CraterSettings {
                count,
                ..CraterSettings::default()
            },
        );
    }

    fn generate_resources(&mut self, ctx: &mut GenContext<'_>) {
        let dice = &mut *ctx.dice;
        let planet = &mut *ctx.planet;
        planet.add_resource("Silicate Ore", 30 + dice.roll_sum(20, 2));
        if dice.d6() == 1 {
            planet.add_resource("Silicate Crystals", 5 + dice.roll_sum(6, 2));
        }
        planet.add_resource("Ferric Ore", 35 + dice.roll_sum(20, 3));
        planet.add_resource("Heavy Metals", 25 + dice.roll_sum(20, 2));
        planet.add_resource("Radioactives", 15 + dice.roll_sum(12, 3));
        planet.add_resource("Rare Metals", 5 + dice.roll_sum(6, 3));
    }
}

/// Mars-like world: cold deserts, a thin carbon-dioxide atmosphere on the
/// larger examples, and permafrost water locked under the surface.
pub struct Arean;

impl Arean {
    pub fn new() -> Self {
        Self
    }
}

impl WorldBuilder for Arean {
    fn planet_type(&self) -> PlanetType {
        PlanetType::Arean
    }

    fn roll_attributes(&mut self, ctx: &mut GenContext<'_>) -> Result<(), GenError> {
        let planet = &mut *ctx.planet;
        planet.radius = roll_radius(ctx.dice, self.planet_type().base_radius());
        planet.day_length = roll_day_length(ctx.dice);
        planet.axial_tilt = roll_axial_tilt(ctx.dice);
        planet.add_trade_code(TradeCode::Ba);
        if planet.radius > 4000 {
            planet.pressure = AtmospherePressure::Thin;
            planet.atmosphere = AtmosphereType::CarbonDioxide;
            planet.temperature = planet.temperature.hotter();
        } else if planet.radius > 3000 {
            planet.pressure = AtmospherePressure::VeryThin;
            planet.atmosphere = AtmosphereType::CarbonDioxide;
        } else if planet.radius > 2000 {
            planet.pressure = AtmospherePressure::Trace;
            planet.atmosphere = AtmosphereType::CarbonDioxide;
        }
        Ok(())
    }

    fn generate_map(&mut self, ctx: &mut GenContext<'_>) {
        let palette = TerrainPalette {
            base: Tile::shared("Desert", "#CC6633", false),
            shelf: Tile::shared("Highlands", "#AA5522", false),
            mountains: Tile::shared("Mountains", "#BB7744", false),
        };
        let crater = Tile::shared("Crater", "#994411", false);
        cratered_map(
            ctx,
            &palette,
            &crater,
            CraterSettings {
                count: 30,
                // Thin air has worn the smallest craters away.
                min_radius: 1,
                ..CraterSettings::default()
            },
        );
    }

    fn generate_resources(&mut self, ctx: &mut GenContext<'_>) {
        let dice = &mut *ctx.dice;
        let planet = &mut *ctx.planet;
        planet.add_resource("Silicate Ore", 25 + dice.roll_sum(20, 3));
        if dice.d2() == 1 {
            planet.add_resource("Silicate Crystals", 10 + dice.roll_sum(10, 2));
        }
        planet.add_resource("Carbonic Ore", 10 + dice.roll_sum(12, 3));
        planet.add_resource("Ferric Ore", 10 + dice.roll_sum(12, 2));
        if dice.d4() == 1 {
            planet.add_resource("Radioactives", dice.roll_sum(6, 2));
        }
        let water = dice.roll_sum(10, 2);
        planet.add_resource("Water", water);
        if water > 5 {
            planet.add_trade_code(TradeCode::Ic);
        }
    }
}
