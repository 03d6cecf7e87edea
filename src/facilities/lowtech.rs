//! Low-technology cultures: medieval kingdoms and renaissance states on
//! the verge of a scientific revolution.

use crate::codes::PopulationSize;
use crate::error::GenError;

use super::{
    add_installations, add_residential, append_settlement_description, apply_society, lookup,
    FacilityBuilder, SettlementContext,
};

// Residential.
const R_FEUDAL_KINGDOMS: &str = "feudalKingdoms";
const R_MERCHANT_KINGDOMS: &str = "merchantKingdoms";

// Agriculture.
const A_SIMPLE_FARMING: &str = "simpleFarming";
const A_COASTAL_FISHING: &str = "coastalFishing";

// Mining.
const M_SIMPLE_MINING: &str = "simpleMining";

// Industry.
const I_SIMPLE_INDUSTRY: &str = "simpleIndustry";

fn check_lowtech_population(
    population: PopulationSize,
    era: &'static str,
) -> Result<(), GenError> {
    match population {
        PopulationSize::None => Err(GenError::ZeroPopulation),
        PopulationSize::Tiny | PopulationSize::Small | PopulationSize::Gigantic => {
            Err(GenError::PopulationOutOfRange {
                size: population,
                era,
            })
        }
        _ => Ok(()),
    }
}

/// Feudal kingdoms at roughly TL3, farming their land and fishing their
/// coasts.
#[derive(Debug)]
pub struct Medieval {
    population: PopulationSize,
}

impl Medieval {
    pub fn new(population: PopulationSize) -> Result<Self, GenError> {
        check_lowtech_population(population, "Medieval")?;
        Ok(Self { population })
    }
}

impl FacilityBuilder for Medieval {
    fn era(&self) -> &'static str {
        "Medieval"
    }

    fn generate(&mut self, ctx: &mut SettlementContext<'_>) -> Result<(), GenError> {
        apply_society(ctx, self.population)?;

        let residential_size = 93 + ctx.dice.roll_sum(6, 2);
        let residential = lookup(ctx.catalog, R_FEUDAL_KINGDOMS)?;
        add_residential(ctx, residential, residential_size);

        let mut list = vec![
            (lookup(ctx.catalog, A_SIMPLE_FARMING)?, 100),
            (lookup(ctx.catalog, M_SIMPLE_MINING)?, 50),
        ];
        if ctx.planet.hydrographics > 50 {
            list.push((
                lookup(ctx.catalog, A_COASTAL_FISHING)?,
                ctx.planet.hydrographics / 3,
            ));
        }
        add_installations(ctx, list);

        append_settlement_description(ctx, R_FEUDAL_KINGDOMS, self.population)
    }
}

/// Merchant kingdoms with early industry; culturally still medieval but
/// changing intellectually.
#[derive(Debug)]
pub struct Renaissance {
    population: PopulationSize,
}

impl Renaissance {
    pub fn new(population: PopulationSize) -> Result<Self, GenError> {
        check_lowtech_population(population, "Renaissance")?;
        Ok(Self { population })
    }
}

impl FacilityBuilder for Renaissance {
    fn era(&self) -> &'static str {
        "Renaissance"
    }

    fn generate(&mut self, ctx: &mut SettlementContext<'_>) -> Result<(), GenError> {
        apply_society(ctx, self.population)?;

        let residential_size = 93 + ctx.dice.roll_sum(6, 2);
        let residential = lookup(ctx.catalog, R_MERCHANT_KINGDOMS)?;
        add_residential(ctx, residential, residential_size);

        let mut list = vec![
            (lookup(ctx.catalog, A_SIMPLE_FARMING)?, 100),
            (lookup(ctx.catalog, M_SIMPLE_MINING)?, 50),
            (lookup(ctx.catalog, I_SIMPLE_INDUSTRY)?, 25),
        ];
        if ctx.planet.hydrographics > 50 {
            list.push((
                lookup(ctx.catalog, A_COASTAL_FISHING)?,
                ctx.planet.hydrographics / 2,
            ));
        }
        add_installations(ctx, list);

        append_settlement_description(ctx, R_MERCHANT_KINGDOMS, self.population)
    }
}
