use thiserror::Error;

use crate::codes::PopulationSize;

/// Failures surfaced by the generation engine. Precondition and
/// configuration problems are fatal for the step that hit them; the caller
/// should treat the planet as unusable rather than partially generated.
#[derive(Debug, Error)]
pub enum GenError {
    #[error("cannot have zero population")]
    ZeroPopulation,

    #[error("population {size} out of range for {era}")]
    PopulationOutOfRange {
        size: PopulationSize,
        era: &'static str,
    },

    #[error("missing configuration key '{0}'")]
    MissingKey(String),

    #[error("malformed value '{value}' for configuration key '{key}'")]
    Malformed { key: String, value: String },

    #[error("no facility named '{0}' in the catalog")]
    UnknownFacility(String),

    #[error("no builder registered for planet type {0}")]
    UnknownPlanetType(crate::codes::PlanetType),
}
