//! Classification vocabulary shared by the generators: planet categories,
//! atmosphere and temperature bands, life tiers, trade codes and the
//! population/technology scales used by the settlement builders.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Broad physical classification a [`PlanetType`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Belt,
    Dwarf,
    Terrestrial,
    Jovian,
}

/// Concrete planet category. Each variant has its own builder with its own
/// generation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlanetType {
    Undefined,
    AsteroidBelt,
    Hermian,
    Selenian,
    Hadean,
    Ferrinian,
    Arean,
    Cytherean,
    Gaian,
    Europan,
    EuJovian,
    CryoJovian,
    SubJovian,
}

impl PlanetType {
    pub fn category(self) -> Category {
        use PlanetType::*;
        match self {
            Undefined | AsteroidBelt => Category::Belt,
            Selenian | Hadean | Ferrinian | Europan => Category::Dwarf,
            Hermian | Arean | Cytherean | Gaian => Category::Terrestrial,
            EuJovian | CryoJovian | SubJovian => Category::Jovian,
        }
    }

    /// Typical radius in kilometres; the attribute roll spreads the real
    /// value around this.
    pub fn base_radius(self) -> i32 {
        use PlanetType::*;
        match self {
            Undefined | AsteroidBelt => 0,
            Hadean => 500,
            Europan => 1500,
            Selenian => 1700,
            Ferrinian => 1800,
            Hermian => 2500,
            Arean => 3500,
            Cytherean => 6200,
            Gaian => 6500,
            CryoJovian => 50_000,
            SubJovian => 70_000,
            EuJovian => 90_000,
        }
    }
}

impl fmt::Display for PlanetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

impl FromStr for PlanetType {
    type Err = UnknownCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use PlanetType::*;
        Ok(match s {
            "AsteroidBelt" => AsteroidBelt,
            "Hermian" => Hermian,
            "Selenian" => Selenian,
            "Hadean" => Hadean,
            "Ferrinian" => Ferrinian,
            "Arean" => Arean,
            "Cytherean" => Cytherean,
            "Gaian" => Gaian,
            "Europan" => Europan,
            "EuJovian" => EuJovian,
            "CryoJovian" => CryoJovian,
            "SubJovian" => SubJovian,
            other => return Err(UnknownCode(other.to_string())),
        })
    }
}

/// Surface temperature band, coldest to hottest.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Temperature {
    UltraCold,
    ExtremelyCold,
    VeryCold,
    Cold,
    Cool,
    Standard,
    Warm,
    Hot,
    VeryHot,
    ExtremelyHot,
    UltraHot,
}

impl Temperature {
    /// The next band up, saturating at [`Temperature::UltraHot`].
    pub fn hotter(self) -> Temperature {
        use Temperature::*;
        match self {
            UltraCold => ExtremelyCold,
            ExtremelyCold => VeryCold,
            VeryCold => Cold,
            Cold => Cool,
            Cool => Standard,
            Standard => Warm,
            Warm => Hot,
            Hot => VeryHot,
            VeryHot => ExtremelyHot,
            ExtremelyHot | UltraHot => UltraHot,
        }
    }

    /// The next band down, saturating at [`Temperature::UltraCold`].
    pub fn colder(self) -> Temperature {
        use Temperature::*;
        match self {
            UltraHot => ExtremelyHot,
            ExtremelyHot => VeryHot,
            VeryHot => Hot,
            Hot => Warm,
            Warm => Standard,
            Standard => Cool,
            Cool => Cold,
            Cold => VeryCold,
            VeryCold => ExtremelyCold,
            ExtremelyCold | UltraCold => UltraCold,
        }
    }

    pub fn is_hotter_than(self, other: Temperature) -> bool {
        self > other
    }

    pub fn is_colder_than(self, other: Temperature) -> bool {
        self < other
    }
}

/// Complexity tier of native life, ordered from none to extensive.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum LifeType {
    None,
    Organic,
    Archaean,
    Aerobic,
    ComplexOcean,
    SimpleLand,
    ComplexLand,
    Extensive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AtmosphereType {
    Vacuum,
    Standard,
    Oxygen,
    LowOxygen,
    HighOxygen,
    Pollutants,
    HighCarbonDioxide,
    CarbonDioxide,
    InertGases,
    SulphurCompounds,
    WaterVapour,
    Hydrogen,
    Primordial,
    Exotic,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum AtmospherePressure {
    None,
    Trace,
    VeryThin,
    Thin,
    Standard,
    Dense,
    VeryDense,
    SuperDense,
}

/// Short tags summarising trade-relevant properties of a world. The `H0`
/// to `H5` codes grade habitability from garden world to hostile.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum TradeCode {
    /// Agricultural.
    Ag,
    /// Asteroid belt.
    As,
    /// Barren.
    Ba,
    /// Desert.
    De,
    /// Ice world.
    Ic,
    /// Industrial.
    In,
    /// Jovian world.
    Jv,
    /// Low population.
    Lo,
    /// High population.
    Hi,
    /// Non-industrial.
    Ni,
    /// Poor.
    Po,
    /// Rich.
    Ri,
    /// Vacuum world.
    Va,
    /// Water world.
    Wa,
    /// Garden world.
    H0,
    /// Habitable.
    H1,
    /// Unpleasant.
    H2,
    /// Inhospitable.
    H3,
    /// Hostile.
    H4,
    /// Extremely hostile.
    H5,
}

impl FromStr for TradeCode {
    type Err = UnknownCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use TradeCode::*;
        Ok(match s {
            "Ag" => Ag,
            "As" => As,
            "Ba" => Ba,
            "De" => De,
            "Ic" => Ic,
            "In" => In,
            "Jv" => Jv,
            "Lo" => Lo,
            "Hi" => Hi,
            "Ni" => Ni,
            "Po" => Po,
            "Ri" => Ri,
            "Va" => Va,
            "Wa" => Wa,
            "H0" => H0,
            "H1" => H1,
            "H2" => H2,
            "H3" => H3,
            "H4" => H4,
            "H5" => H5,
            other => return Err(UnknownCode(other.to_string())),
        })
    }
}

/// Notable physical features a world may carry besides its terrain.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum PlanetFeature {
    BrightIceRings,
    IceRings,
    FaintIceRings,
    PartialIceRings,
    ExtensiveIceRings,
    ThickClouds,
    DenseClouds,
    HeavilyCratered,
    GiantCrater,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StarportType {
    A,
    B,
    C,
    D,
    E,
    X,
}

impl FromStr for StarportType {
    type Err = UnknownCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "A" => StarportType::A,
            "B" => StarportType::B,
            "C" => StarportType::C,
            "D" => StarportType::D,
            "E" => StarportType::E,
            "X" => StarportType::X,
            other => return Err(UnknownCode(other.to_string())),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GovernmentType {
    Anarchy,
    TribalChiefdom,
    CityState,
    Feudalism,
    Monarchy,
    Oligarchy,
    Theocracy,
    Republic,
}

impl FromStr for GovernmentType {
    type Err = UnknownCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use GovernmentType::*;
        Ok(match s {
            "Anarchy" => Anarchy,
            "TribalChiefdom" => TribalChiefdom,
            "CityState" => CityState,
            "Feudalism" => Feudalism,
            "Monarchy" => Monarchy,
            "Oligarchy" => Oligarchy,
            "Theocracy" => Theocracy,
            "Republic" => Republic,
            other => return Err(UnknownCode(other.to_string())),
        })
    }
}

/// Population size class to roughly two orders of magnitude. Drives which
/// settlement builders are legal and which residential template is chosen.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum PopulationSize {
    /// No population at all.
    None,
    /// Up to 100 people.
    Tiny,
    /// Up to 10,000 people.
    Small,
    /// Up to 1 million people.
    Medium,
    /// Up to 100 million people.
    Large,
    /// Up to 10 billion people. A full civilisation.
    Huge,
    /// More than 10 billion people. City or hive worlds.
    Gigantic,
}

impl fmt::Display for PopulationSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// Rough technology grouping, three tech levels per step.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum TechnologyLevel {
    Primitive,
    LowTech,
    HighTech,
    Interplanetary,
    Interstellar,
}

impl TechnologyLevel {
    pub fn from_level(level: i32) -> TechnologyLevel {
        match level {
            i32::MIN..=2 => TechnologyLevel::Primitive,
            3..=5 => TechnologyLevel::LowTech,
            6..=8 => TechnologyLevel::HighTech,
            9..=11 => TechnologyLevel::Interplanetary,
            _ => TechnologyLevel::Interstellar,
        }
    }
}

/// A code string that does not name any known variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCode(pub String);

impl fmt::Display for UnknownCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown code '{}'", self.0)
    }
}

impl std::error::Error for UnknownCode {}
