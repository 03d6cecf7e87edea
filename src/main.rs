use anyhow::{anyhow, Result};
use clap::Parser;

use worldforge::{
    codes::{PlanetType, PopulationSize},
    defaults,
    facilities::{self, SettlementContext},
    PlanetGenerator,
};

#[derive(Debug, Parser)]
#[command(author, version, about = "Procedural planet and settlement generator")]
struct Cli {
    /// Seed for the dice engine
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Planet category to generate (e.g. Gaian, AsteroidBelt, CryoJovian)
    #[arg(long, default_value = "Gaian")]
    category: String,

    /// Number of planets to generate
    #[arg(long, default_value_t = 1)]
    count: u32,

    /// Settle the planet with this era's culture (e.g. NeolithicTribes)
    #[arg(long)]
    era: Option<String>,

    /// Population size for the settlement (e.g. Medium, Large)
    #[arg(long, default_value = "Medium")]
    population: String,
}

fn parse_population(value: &str) -> Result<PopulationSize> {
    Ok(match value {
        "None" => PopulationSize::None,
        "Tiny" => PopulationSize::Tiny,
        "Small" => PopulationSize::Small,
        "Medium" => PopulationSize::Medium,
        "Large" => PopulationSize::Large,
        "Huge" => PopulationSize::Huge,
        "Gigantic" => PopulationSize::Gigantic,
        other => return Err(anyhow!("unknown population size '{other}'")),
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let planet_type: PlanetType = cli
        .category
        .parse()
        .map_err(|_| anyhow!("unknown planet category '{}'", cli.category))?;

    let mut generator = PlanetGenerator::with_defaults(cli.seed);
    let catalog = defaults::facility_catalog();
    let phrases = defaults::phrase_table();
    let names = defaults::name_generator();

    for _ in 0..cli.count {
        let mut planet = generator.generate(planet_type)?;

        if let Some(era) = &cli.era {
            let population = parse_population(&cli.population)?;
            let config = defaults::era_config(era)
                .ok_or_else(|| anyhow!("no bundled configuration for era '{era}'"))?;
            let mut builder = facilities::builder_for(era, population)?;
            let mut ctx = SettlementContext {
                planet: &mut planet,
                dice: generator.dice_mut(),
                catalog: &catalog,
                config: &config,
                phrases: &phrases,
                names: &names,
            };
            builder.generate(&mut ctx)?;
        }

        println!("{}", serde_json::to_string_pretty(&planet.report())?);
    }
    Ok(())
}
