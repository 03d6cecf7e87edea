use worldforge::builders::{builder_for, GenContext, PlanetGenerator};
use worldforge::codes::{LifeType, PlanetFeature, PlanetType, Temperature};
use worldforge::defaults;
use worldforge::names::NameGenerator;
use worldforge::planet::Planet;
use worldforge::{Dice, Settings};

const ALL_TYPES: [PlanetType; 12] = [
    PlanetType::AsteroidBelt,
    PlanetType::Hermian,
    PlanetType::Selenian,
    PlanetType::Hadean,
    PlanetType::Ferrinian,
    PlanetType::Arean,
    PlanetType::Cytherean,
    PlanetType::Gaian,
    PlanetType::Europan,
    PlanetType::EuJovian,
    PlanetType::CryoJovian,
    PlanetType::SubJovian,
];

fn generator(seed: u64) -> PlanetGenerator {
    PlanetGenerator::with_defaults(seed)
}

struct Tables {
    phrases: Settings,
    names: NameGenerator,
}

impl Tables {
    fn new() -> Self {
        Self {
            phrases: defaults::phrase_table(),
            names: defaults::name_generator(),
        }
    }

    fn ctx<'a>(&'a self, planet: &'a mut Planet, dice: &'a mut Dice) -> GenContext<'a> {
        GenContext {
            planet,
            dice,
            phrases: &self.phrases,
            names: &self.names,
        }
    }
}

#[test]
fn every_category_generates_a_valid_planet() {
    let mut generator = generator(2024);
    for planet_type in ALL_TYPES {
        let planet = generator.generate(planet_type).expect("generation succeeds");
        assert_eq!(planet.planet_type, planet_type);
        assert!(planet.radius > 0, "{planet_type} radius must be positive");
        assert!(!planet.name.is_empty());
    }
}

#[test]
fn resource_quantities_are_never_negative() {
    for seed in 0..20 {
        let mut generator = generator(seed);
        for planet_type in ALL_TYPES {
            let planet = generator.generate(planet_type).unwrap();
            assert!(!planet.resources.is_empty(), "{planet_type} adds resources");
            for (name, quantity) in &planet.resources {
                assert!(
                    *quantity >= 0,
                    "{planet_type} resource {name} went negative: {quantity}"
                );
            }
        }
    }
}

#[test]
fn generation_replays_under_a_fixed_seed() {
    let report_a = generator(7).generate(PlanetType::Gaian).unwrap().report();
    let report_b = generator(7).generate(PlanetType::Gaian).unwrap().report();
    assert_eq!(
        serde_json::to_string(&report_a).unwrap(),
        serde_json::to_string(&report_b).unwrap()
    );
}

#[test]
fn hot_asteroid_belts_always_carry_the_metal_set() {
    let tables = Tables::new();
    for seed in 0..30 {
        let mut dice = Dice::new(seed);
        let mut planet = Planet::new();
        planet.temperature = Temperature::Hot;
        planet.radius = 18;
        let mut builder = builder_for(PlanetType::AsteroidBelt).unwrap();
        let mut ctx = tables.ctx(&mut planet, &mut dice);
        builder.generate_resources(&mut ctx);

        for key in [
            "Silicate Ore",
            "Ferric Ore",
            "Heavy Metals",
            "Rare Metals",
            "Radioactives",
        ] {
            assert!(
                planet.resources.contains_key(key),
                "hot belt missing {key} (seed {seed})"
            );
        }
        assert!(!planet.resources.contains_key("Water"));
    }
}

#[test]
fn cold_asteroid_belts_carry_ices_instead_of_metals() {
    let tables = Tables::new();
    for seed in 0..30 {
        let mut dice = Dice::new(seed);
        let mut planet = Planet::new();
        planet.temperature = Temperature::Cold;
        planet.radius = 18;
        let mut builder = builder_for(PlanetType::AsteroidBelt).unwrap();
        let mut ctx = tables.ctx(&mut planet, &mut dice);
        builder.generate_resources(&mut ctx);

        assert!(planet.resources.contains_key("Water"));
        assert!(planet.resources.contains_key("Carbonic Ore"));
        assert!(!planet.resources.contains_key("Radioactives"));
        assert!(!planet.resources.contains_key("Heavy Metals"));
    }
}

#[test]
fn cytherean_worlds_are_dry_lifeless_and_clouded() {
    for seed in 0..20 {
        let mut generator = generator(seed);
        let planet = generator.generate(PlanetType::Cytherean).unwrap();
        assert_eq!(planet.hydrographics, 0);
        assert_eq!(planet.life, LifeType::None);
        assert!(planet.has_feature(PlanetFeature::DenseClouds));
        assert!(planet.temperature >= Temperature::VeryHot);
    }
}

#[test]
fn gaian_worlds_set_hydrographics_and_life() {
    let mut generator = generator(31);
    let planet = generator.generate(PlanetType::Gaian).unwrap();
    assert!((15..=95).contains(&planet.hydrographics));
    assert!(planet.life >= LifeType::SimpleLand);
    assert!(planet.surface.is_some());
}

#[test]
fn belts_produce_no_surface_grid() {
    let mut generator = generator(5);
    let planet = generator.generate(PlanetType::AsteroidBelt).unwrap();
    assert!(planet.surface.is_none());
}

#[test]
fn every_generated_planet_gets_a_description() {
    let mut generator = generator(91);
    for planet_type in ALL_TYPES {
        let planet = generator.generate(planet_type).unwrap();
        assert!(
            !planet.description.is_empty(),
            "{planet_type} has no description"
        );
    }
}

// Re-running a phase is documented as a caller hazard, not a guarded
// error: resources accumulate.
#[test]
fn rerunning_the_resource_phase_double_adds() {
    let tables = Tables::new();
    let mut dice = Dice::new(12);
    let mut planet = Planet::new();
    planet.temperature = Temperature::Hot;
    planet.radius = 10;
    let mut builder = builder_for(PlanetType::AsteroidBelt).unwrap();
    let mut ctx = tables.ctx(&mut planet, &mut dice);
    builder.generate_resources(&mut ctx);
    let first = planet.resource("Silicate Ore");
    let mut ctx = tables.ctx(&mut planet, &mut dice);
    builder.generate_resources(&mut ctx);
    assert!(planet.resource("Silicate Ore") > first);
}

#[test]
fn unknown_category_is_rejected() {
    assert!(builder_for(PlanetType::Undefined).is_err());
}
