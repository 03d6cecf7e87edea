//! Planet builders, one per category. The capability set is the same for
//! every category: set attributes, build the surface map, assign
//! resources, write a description. Shared terrain behaviour lives in
//! [`crate::surface`] as strategy functions parameterised by an explicit
//! palette, so each builder stays flat and testable on its own.

mod barren;
mod belt;
mod gaian;
mod hot;
mod ice;
mod jovian;

pub use barren::{Arean, Ferrinian, Hadean, Hermian, Selenian};
pub use belt::AsteroidBelt;
pub use gaian::Gaian;
pub use hot::Cytherean;
pub use ice::Europan;
pub use jovian::{CryoJovian, EuJovian, SubJovian};

use crate::codes::PlanetType;
use crate::config::Settings;
use crate::dice::Dice;
use crate::error::GenError;
use crate::names::NameGenerator;
use crate::planet::Planet;
use crate::text::Describer;

/// Everything a generation step works against: the target planet, the
/// dice, and the narrative tables. The target is always passed in
/// explicitly, so a builder cannot run against a missing planet.
pub struct GenContext<'a> {
    pub planet: &'a mut Planet,
    pub dice: &'a mut Dice,
    pub phrases: &'a Settings,
    pub names: &'a NameGenerator,
}

/// Capability set of a planet builder. `generate` runs the steps in the
/// required order; the other methods may be driven individually by tests
/// or callers that need a single phase. Re-running a phase on an already
/// populated planet double-adds resources and text - callers invoke each
/// phase exactly once per planet.
pub trait WorldBuilder {
    fn planet_type(&self) -> PlanetType;

    /// Category tag, physical attributes, atmosphere and pressure tables,
    /// hydrographics and life where applicable, and the category-defining
    /// trade codes. Runs before any other step.
    fn roll_attributes(&mut self, ctx: &mut GenContext<'_>) -> Result<(), GenError>;

    /// Build the surface grid. Must run before resource generation for
    /// categories whose resources read the finished tile composition.
    fn generate_map(&mut self, ctx: &mut GenContext<'_>);

    fn generate_resources(&mut self, ctx: &mut GenContext<'_>);

    fn generate_description(&mut self, ctx: &mut GenContext<'_>) -> Result<(), GenError> {
        let key = format!("description.{}", self.planet_type());
        let describer = Describer::new(ctx.phrases, ctx.names);
        if let Some(text) = describer.describe(&key, ctx.planet, ctx.dice)? {
            ctx.planet.append_description(&text);
        }
        Ok(())
    }

    fn generate(&mut self, ctx: &mut GenContext<'_>) -> Result<(), GenError> {
        ctx.planet.planet_type = self.planet_type();
        self.roll_attributes(ctx)?;
        self.generate_map(ctx);
        self.generate_resources(ctx);
        self.generate_description(ctx)
    }
}

/// Tagged dispatch from category to builder.
pub fn builder_for(planet_type: PlanetType) -> Result<Box<dyn WorldBuilder>, GenError> {
    Ok(match planet_type {
        PlanetType::AsteroidBelt => Box::new(belt::AsteroidBelt::new()),
        PlanetType::Hermian => Box::new(barren::Hermian::new()),
        PlanetType::Selenian => Box::new(barren::Selenian::new()),
        PlanetType::Hadean => Box::new(barren::Hadean::new()),
        PlanetType::Ferrinian => Box::new(barren::Ferrinian::new()),
        PlanetType::Arean => Box::new(barren::Arean::new()),
        PlanetType::Cytherean => Box::new(hot::Cytherean::new()),
        PlanetType::Gaian => Box::new(gaian::Gaian::new()),
        PlanetType::Europan => Box::new(ice::Europan::new()),
        PlanetType::EuJovian => Box::new(jovian::EuJovian::new()),
        PlanetType::CryoJovian => Box::new(jovian::CryoJovian::new()),
        PlanetType::SubJovian => Box::new(jovian::SubJovian::new()),
        PlanetType::Undefined => return Err(GenError::UnknownPlanetType(planet_type)),
    })
}

/// Front door: owns the dice and the narrative tables, creates and names
/// an empty planet, and runs the matching builder over it.
pub struct PlanetGenerator {
    dice: Dice,
    names: NameGenerator,
    phrases: Settings,
}

impl PlanetGenerator {
    pub fn new(dice: Dice, names: NameGenerator, phrases: Settings) -> Self {
        Self {
            dice,
            names,
            phrases,
        }
    }

    /// Generator wired to the bundled default tables.
    pub fn with_defaults(seed: u64) -> Self {
        Self::new(
            Dice::new(seed),
            crate::defaults::name_generator(),
            crate::defaults::phrase_table(),
        )
    }

    pub fn generate(&mut self, planet_type: PlanetType) -> Result<Planet, GenError> {
        let mut builder = builder_for(planet_type)?;
        let mut planet = Planet::new();
        planet.name = self.names.planet_name(&mut self.dice)?;
        let mut ctx = GenContext {
            planet: &mut planet,
            dice: &mut self.dice,
            phrases: &self.phrases,
            names: &self.names,
        };
        builder.generate(&mut ctx)?;
        Ok(planet)
    }

    pub fn dice_mut(&mut self) -> &mut Dice {
        &mut self.dice
    }

    pub fn names(&self) -> &NameGenerator {
        &self.names
    }
}

/// Standard radius roll: half the category base plus a two-die spread.
pub(crate) fn roll_radius(dice: &mut Dice, base: i32) -> i32 {
    base / 2 + dice.roll_sum(base, 2) / 2
}

/// Terrestrial day length in seconds.
pub(crate) fn roll_day_length(dice: &mut Dice) -> i32 {
    dice.roll_sum(6, 2) * 10_000 + dice.roll(30_000)
}

pub(crate) fn roll_axial_tilt(dice: &mut Dice) -> i32 {
    dice.roll_sum(10, 3)
}
