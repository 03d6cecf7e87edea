//! Gas giants. The map is the outer cloud deck: horizontal bands with no
//! land or sea. Most of these worlds carry some kind of ring system.

use crate::codes::{PlanetFeature, PlanetType, TradeCode};
use crate::dice::Dice;
use crate::error::GenError;
use crate::planet::Planet;
use crate::surface::{add_bands, BandScheme, SurfaceGrid, Tile, TileRef, MAP_HEIGHT};

use super::{roll_radius, GenContext, WorldBuilder};

fn roll_jovian_spin(dice: &mut Dice, planet: &mut Planet) {
    planet.day_length = 2000 + dice.d100() * 1000 + dice.roll(10_000);
    planet.axial_tilt = dice.d10();
    if planet.axial_tilt == 10 {
        planet.axial_tilt = dice.roll_sum(10, 3);
    }
    if planet.axial_tilt == 30 {
        planet.axial_tilt = dice.roll_sum(20, 3);
    }
}

/// Most jovian worlds have rings of some sort; the middle of the table is
/// a deliberate gap where nothing notable formed.
fn roll_rings(dice: &mut Dice, planet: &mut Planet) {
    match dice.roll_sum(6, 3) {
        3 => planet.add_feature(PlanetFeature::BrightIceRings),
        4 | 5 => planet.add_feature(PlanetFeature::IceRings),
        6..=9 => planet.add_feature(PlanetFeature::FaintIceRings),
        15..=17 => planet.add_feature(PlanetFeature::PartialIceRings),
        18 => planet.add_feature(PlanetFeature::ExtensiveIceRings),
        _ => {}
    }
}

fn banded_map(ctx: &mut GenContext<'_>, palette: &[TileRef], scheme: BandScheme) {
    let mut grid = SurfaceGrid::new(MAP_HEIGHT, &palette[0]);
    add_bands(&mut grid, palette, scheme);
    ctx.planet.surface = Some(grid);
}

/// A Jupiter-like world.
pub struct EuJovian;

impl EuJovian {
    pub fn new() -> Self {
        Self
    }
}

impl WorldBuilder for EuJovian {
    fn planet_type(&self) -> PlanetType {
        PlanetType::EuJovian
    }

    fn roll_attributes(&mut self, ctx: &mut GenContext<'_>) -> Result<(), GenError> {
        let planet = &mut *ctx.planet;
        planet.radius = roll_radius(ctx.dice, self.planet_type().base_radius());
        roll_jovian_spin(ctx.dice, planet);
        roll_rings(ctx.dice, planet);
        planet.add_trade_code(TradeCode::Jv);
        Ok(())
    }

    fn generate_map(&mut self, ctx: &mut GenContext<'_>) {
        let palette = [
            Tile::shared("Dark", "#aaaa77", false),
            Tile::shared("Light", "#cccc99", false),
            Tile::shared("White", "#ddddcc", false),
            Tile::shared("Orange", "#aa6666", false),
        ];
        banded_map(ctx, &palette, BandScheme::PolarCapped);
    }

    fn generate_resources(&mut self, ctx: &mut GenContext<'_>) {
        let dice = &mut *ctx.dice;
        let planet = &mut *ctx.planet;
        planet.add_resource("Hydrogen", 60 + dice.roll_sum(20, 2));
        planet.add_resource("Helium 3", 10 + dice.roll_sum(10, 2));
        planet.add_resource("Oxygen", dice.roll_sum(6, 2));
        planet.add_resource("Water", dice.roll_sum(6, 2));
    }
}

/// A cold gas giant similar to Neptune or Uranus.
pub struct CryoJovian;

impl CryoJovian {
    pub fn new() -> Self {
        Self
    }
}

impl WorldBuilder for CryoJovian {
    fn planet_type(&self) -> PlanetType {
        PlanetType::CryoJovian
    }

    fn roll_attributes(&mut self, ctx: &mut GenContext<'_>) -> Result<(), GenError> {
        let planet = &mut *ctx.planet;
        planet.radius = roll_radius(ctx.dice, self.planet_type().base_radius());
        roll_jovian_spin(ctx.dice, planet);
        roll_rings(ctx.dice, planet);
        planet.add_trade_code(TradeCode::Jv);
        Ok(())
    }

    fn generate_map(&mut self, ctx: &mut GenContext<'_>) {
        let banding = if ctx.dice.d2() == 1 {
            Tile::shared("Banding", "#0077aa", false)
        } else {
            Tile::shared("Banding", "#00aa77", false)
        };
        let palette = [
            Tile::shared("Dark", "#008899", false),
            Tile::shared("Light", "#0099bb", false),
            Tile::shared("White", "#55ddff", false),
            banding,
        ];
        banded_map(ctx, &palette, BandScheme::PolarCapped);
    }

    fn generate_resources(&mut self, ctx: &mut GenContext<'_>) {
        let dice = &mut *ctx.dice;
        let planet = &mut *ctx.planet;
        planet.add_resource("Hydrogen", 40 + dice.roll_sum(20, 2));
        planet.add_resource("Inert Gases", 30 + dice.roll_sum(20, 2));
        planet.add_resource("Exotic Gases", 20 + dice.roll_sum(12, 2));
        planet.add_resource("Water", dice.roll_sum(10, 3));
    }
}

/// A small, dim gas giant with muted cloud bands.
pub struct SubJovian;

impl SubJovian {
    pub fn new() -> Self {
        Self
    }
}

impl WorldBuilder for SubJovian {
    fn planet_type(&self) -> PlanetType {
        PlanetType::SubJovian
    }

    fn roll_attributes(&mut self, ctx: &mut GenContext<'_>) -> Result<(), GenError> {
        let planet = &mut *ctx.planet;
        planet.radius = roll_radius(ctx.dice, self.planet_type().base_radius());
        roll_jovian_spin(ctx.dice, planet);
        roll_rings(ctx.dice, planet);
        planet.add_trade_code(TradeCode::Jv);
        Ok(())
    }

    fn generate_map(&mut self, ctx: &mut GenContext<'_>) {
        let palette = [
            Tile::shared("Dark", "#999977", false),
            Tile::shared("Light", "#cccc99", false),
        ];
        banded_map(ctx, &palette, BandScheme::Simple);
    }

    fn generate_resources(&mut self, ctx: &mut GenContext<'_>) {
        let dice = &mut *ctx.dice;
        let planet = &mut *ctx.planet;
        planet.add_resource("Hydrogen", 50 + dice.roll_sum(20, 2));
        planet.add_resource("Helium 3", 5 + dice.roll_sum(10, 2));
        planet.add_resource("Inert Gases", dice.roll_sum(10, 2));
    }
}
