//! Pre-metalworking and early-metalworking cultures.

use crate::codes::PopulationSize;
use crate::error::GenError;

use super::{
    add_installations, add_residential, append_settlement_description, apply_society, lookup,
    FacilityBuilder, SettlementContext,
};

// Residential.
const R_NEOLITHIC_TRIBES: &str = "neolithicTribes";
const R_NEOLITHIC_FARMERS: &str = "neolithicFarmers";
const R_TRIBAL_STATES: &str = "tribalStates";

// Agriculture.
const A_HUNTER_GATHERER: &str = "hunterGatherer";
const A_NEOLITHIC_FARMING: &str = "neolithicFarming";
const A_PRIMITIVE_FARMING: &str = "primitiveFarming";

// Mining.
const M_PRIMITIVE_MINING: &str = "primitiveMining";

/// Stone-age tribal cultures. Small populations live by hunting and
/// gathering; the larger ones have discovered farming.
#[derive(Debug)]
pub struct NeolithicTribes {
    population: PopulationSize,
}

impl NeolithicTribes {
    pub fn new(population: PopulationSize) -> Result<Self, GenError> {
        match population {
            PopulationSize::None => Err(GenError::ZeroPopulation),
            PopulationSize::Tiny
            | PopulationSize::Small
            | PopulationSize::Medium
            | PopulationSize::Large => Ok(Self { population }),
            _ => Err(GenError::PopulationOutOfRange {
                size: population,
                era: "NeolithicTribes",
            }),
        }
    }
}

impl FacilityBuilder for NeolithicTribes {
    fn era(&self) -> &'static str {
        "NeolithicTribes"
    }

    fn generate(&mut self, ctx: &mut SettlementContext<'_>) -> Result<(), GenError> {
        apply_society(ctx, self.population)?;

        let mut residential_name = R_NEOLITHIC_TRIBES;
        let mut residential_size = 93 + ctx.dice.roll_sum(6, 2);

        let mut list = Vec::new();
        match self.population {
            PopulationSize::Tiny | PopulationSize::Small => {
                list.push((lookup(ctx.catalog, A_HUNTER_GATHERER)?, 100));
            }
            PopulationSize::Medium => {
                list.push((lookup(ctx.catalog, A_HUNTER_GATHERER)?, 75));
                if ctx.dice.d2() == 1 {
                    residential_name = R_NEOLITHIC_FARMERS;
                    list.push((lookup(ctx.catalog, A_NEOLITHIC_FARMING)?, 100));
                } else {
                    list.push((lookup(ctx.catalog, A_NEOLITHIC_FARMING)?, 25));
                }
            }
            _ => {
                // Large; anything bigger was rejected at construction.
                residential_name = R_NEOLITHIC_FARMERS;
                residential_size -= 5;
                list.push((lookup(ctx.catalog, A_HUNTER_GATHERER)?, 25));
                list.push((lookup(ctx.catalog, A_NEOLITHIC_FARMING)?, 100));
                list.push((lookup(ctx.catalog, M_PRIMITIVE_MINING)?, 25));
            }
        }

        let residential = lookup(ctx.catalog, residential_name)?;
        add_residential(ctx, residential, residential_size);
        add_installations(ctx, list);

        append_settlement_description(ctx, residential_name, self.population)
    }
}

/// Early metalworking cultures organised into loose tribal states.
#[derive(Debug)]
pub struct BronzeAge {
    population: PopulationSize,
}

impl BronzeAge {
    pub fn new(population: PopulationSize) -> Result<Self, GenError> {
        match population {
            PopulationSize::None => Err(GenError::ZeroPopulation),
            PopulationSize::Gigantic => Err(GenError::PopulationOutOfRange {
                size: population,
                era: "BronzeAge",
            }),
            _ => Ok(Self { population }),
        }
    }
}

impl FacilityBuilder for BronzeAge {
    fn era(&self) -> &'static str {
        "BronzeAge"
    }

    fn generate(&mut self, ctx: &mut SettlementContext<'_>) -> Result<(), GenError> {
        apply_society(ctx, self.population)?;

        let residential_size = 93 + ctx.dice.roll_sum(6, 2);
        let residential = lookup(ctx.catalog, R_TRIBAL_STATES)?;
        add_residential(ctx, residential, residential_size);

        let list = vec![
            (lookup(ctx.catalog, A_PRIMITIVE_FARMING)?, 100),
            (lookup(ctx.catalog, M_PRIMITIVE_MINING)?, 50),
        ];
        add_installations(ctx, list);

        append_settlement_description(ctx, R_TRIBAL_STATES, self.population)
    }
}
