use std::rc::Rc;

use worldforge::builders::PlanetGenerator;
use worldforge::codes::PlanetType;
use worldforge::surface::{
    add_bands, add_continents, add_craters, BandScheme, CraterSettings, SurfaceGrid,
    TerrainPalette, Tile, MAP_HEIGHT,
};
use worldforge::Dice;

const MAPPED_TYPES: [PlanetType; 11] = [
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

/// Every cell outside a row's west/east range must still hold the
/// out-of-bounds sentinel after generation; every cell inside must not.
fn assert_bounds_respected(grid: &SurfaceGrid, label: &str) {
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let is_sentinel = Rc::ptr_eq(grid.get(y, x), grid.out_of_bounds());
            if grid.in_bounds(y, x) {
                assert!(!is_sentinel, "{label}: sentinel inside bounds at ({y}, {x})");
            } else {
                assert!(is_sentinel, "{label}: terrain outside bounds at ({y}, {x})");
            }
        }
    }
}

#[test]
fn generated_maps_respect_row_bounds() {
    let mut generator = PlanetGenerator::with_defaults(1234);
    for planet_type in MAPPED_TYPES {
        let planet = generator.generate(planet_type).unwrap();
        let grid = planet.surface.as_ref().expect("surface grid exists");
        assert_bounds_respected(grid, &planet_type.to_string());
    }
}

#[test]
fn continents_hit_the_requested_land_split() {
    let mut dice = Dice::new(77);
    let palette = TerrainPalette {
        base: Tile::shared("Sea", "#4444aa", true),
        shelf: Tile::shared("Land", "#aaaa44", false),
        mountains: Tile::shared("Mountains", "#B0B0B0", false),
    };
    let mut grid = SurfaceGrid::new(MAP_HEIGHT, &palette.base);
    add_continents(&mut grid, &mut dice, &palette, 70);
    let water = grid.water_percentage();
    // The growth loop can stop a little past the target and bails out
    // when stuck, so allow a generous band around 70 percent.
    assert!(
        (40..=85).contains(&water),
        "water percentage {water} far from requested 70"
    );
}

#[test]
fn craters_do_not_escape_bounds_or_touch_the_sentinel() {
    let mut dice = Dice::new(3);
    let base = Tile::shared("Rock", "#909090", false);
    let crater = Tile::shared("Crater", "#656060", false);
    let mut grid = SurfaceGrid::new(MAP_HEIGHT, &base);
    add_craters(
        &mut grid,
        &mut dice,
        &crater,
        &CraterSettings {
            count: 500,
            max_radius: 4,
            min_radius: 0,
        },
    );
    assert_bounds_respected(&grid, "crater field");
    let cratered = grid.count_tiles(|t| t.name == "Crater");
    assert!(cratered > 0, "a 500-crater field must leave some craters");
}

#[test]
fn minimum_crater_size_suppresses_small_impacts() {
    let mut dice = Dice::new(3);
    let base = Tile::shared("Rock", "#909090", false);
    let crater = Tile::shared("Crater", "#656060", false);
    let mut grid = SurfaceGrid::new(MAP_HEIGHT, &base);
    // Minimum above the maximum roll: nothing may be drawn.
    add_craters(
        &mut grid,
        &mut dice,
        &crater,
        &CraterSettings {
            count: 200,
            max_radius: 3,
            min_radius: 5,
        },
    );
    assert_eq!(grid.count_tiles(|t| t.name == "Crater"), 0);
}

#[test]
fn simple_banding_assigns_rows_by_period() {
    let palette = [
        Tile::shared("Dark", "#999977", false),
        Tile::shared("Light", "#cccc99", false),
    ];
    let mut grid = SurfaceGrid::new(MAP_HEIGHT, &palette[0]);
    add_bands(&mut grid, &palette, BandScheme::Simple);
    for y in 0..grid.height() {
        let expected = &palette[(y / 2) % palette.len()];
        for x in grid.west(y)..grid.east(y) {
            assert!(Rc::ptr_eq(grid.get(y, x), expected), "row {y} wrong band");
        }
    }
}

#[test]
fn polar_capped_banding_marks_every_eighth_row() {
    let palette = [
        Tile::shared("Dark", "#008899", false),
        Tile::shared("Light", "#0099bb", false),
        Tile::shared("White", "#55ddff", false),
        Tile::shared("Banding", "#0077aa", false),
    ];
    let mut grid = SurfaceGrid::new(MAP_HEIGHT, &palette[0]);
    add_bands(&mut grid, &palette, BandScheme::PolarCapped);
    let height = grid.height();
    let eighth = height / 8;
    for y in 0..height {
        let x = grid.west(y);
        let tile = grid.get(y, x);
        if y < eighth || y >= height - eighth {
            let polar = Rc::ptr_eq(tile, &palette[0]) || Rc::ptr_eq(tile, &palette[1]);
            assert!(polar, "row {y} should use a polar shade");
        } else if y % 8 == 0 {
            assert!(Rc::ptr_eq(tile, &palette[3]), "row {y} should be banding");
        }
    }
}

#[test]
fn gaian_ecology_bands_follow_latitude() {
    let mut generator = PlanetGenerator::with_defaults(555);
    let planet = generator.generate(PlanetType::Gaian).unwrap();
    let grid = planet.surface.as_ref().unwrap();
    for y in 0..grid.height() {
        let latitude = grid.latitude(y);
        for x in grid.west(y)..grid.east(y) {
            let name = grid.get(y, x).name.as_str();
            match name {
                "Jungle" => assert!(latitude <= 15, "jungle at latitude {latitude}"),
                "Desert" => {
                    assert!((16..=35).contains(&latitude), "desert at {latitude}")
                }
                "Woodland" => {
                    assert!((36..=70).contains(&latitude), "woodland at {latitude}")
                }
                "Ice" => assert!(latitude > 70, "ice at latitude {latitude}"),
                // Sea, mountains and raw land carry no latitude claim.
                _ => {}
            }
        }
    }
}
