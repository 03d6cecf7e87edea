pub mod builders;
pub mod codes;
pub mod config;
pub mod defaults;
pub mod dice;
pub mod error;
pub mod facilities;
pub mod names;
pub mod planet;
pub mod surface;
pub mod text;

pub use builders::{builder_for, GenContext, PlanetGenerator, WorldBuilder};
pub use codes::{PlanetType, PopulationSize};
pub use config::Settings;
pub use dice::Dice;
pub use error::GenError;
pub use facilities::{builder_for as era_builder_for, FacilityBuilder, SettlementContext};
pub use names::NameGenerator;
pub use planet::Planet;
