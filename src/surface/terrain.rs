use std::rc::Rc;

use crate::dice::Dice;

use super::{SurfaceGrid, TileRef};

/// Terrain tiles a continental map is built from. Passed explicitly into
/// the map step so each run owns its palette.
#[derive(Debug, Clone)]
pub struct TerrainPalette {
    pub base: TileRef,
    pub shelf: TileRef,
    pub mountains: TileRef,
}

const CONTINENT_SEEDS: i32 = 9;
const MOUNTAIN_HEIGHT: i32 = 25;

/// Grow continental shelves over a sea of `palette.base` until land covers
/// `100 - hydrographics` percent of the surface. Seeds a handful of
/// continents, then spreads them cell by cell; where two shelves collide
/// the height map rises, and the tallest cells become mountains.
///
/// Pass `hydrographics <= 0` to roll a default of `20 + d20(3)`.
pub fn add_continents(
    grid: &mut SurfaceGrid,
    dice: &mut Dice,
    palette: &TerrainPalette,
    hydrographics: i32,
) {
    let hydrographics = if hydrographics <= 0 {
        20 + dice.roll_sum(20, 3)
    } else {
        hydrographics.min(100)
    };

    let height = grid.height();
    let width = grid.width();

    // Shelf map: 0 is seabed, -1 out of bounds, +ve a continent number.
    let mut shelf = vec![vec![0i32; width]; height];
    for (y, row) in shelf.iter_mut().enumerate() {
        for (x, cell) in row.iter_mut().enumerate() {
            if grid.in_bounds(y, x) {
                grid.set_height(y, x, -dice.d4());
            } else {
                *cell = -1;
                grid.set_height(y, x, 0);
            }
        }
    }

    let mut num = CONTINENT_SEEDS;
    while num > 0 {
        let x = dice.roll_zero(width as i32) as usize;
        let y = dice.roll_zero(height as i32) as usize;
        if shelf[y][x] == 0 {
            shelf[y][x] = num;
            num -= 1;
            grid.set_height(y, x, 10 + dice.roll_sum(6, 2));
        }
    }

    // Spread until the land target is met. The growth can stall when the
    // remaining seabed is unreachable, so give up after ten stagnant
    // sweeps.
    let target = 100 - hydrographics;
    let mut last_percentage = 0;
    let mut stuck = 0;
    let mut current = shelf_percentage(&shelf);
    while current < target {
        if current == last_percentage {
            stuck += 1;
            if stuck > 10 {
                break;
            }
        } else {
            last_percentage = current;
            stuck = 0;
        }
        for y in 0..height {
            for x in 0..width {
                if shelf[y][x] <= 0 || dice.d10() < 5 {
                    continue;
                }
                let yy = y as i64 + (dice.d2() - dice.d2()) as i64;
                if yy < 0 || yy >= height as i64 {
                    continue;
                }
                let yy = yy as usize;
                let xx = grid.wrap_x(yy, x as i64 + (dice.d2() - dice.d2()) as i64);
                if shelf[yy][xx] == 0 {
                    shelf[yy][xx] = shelf[y][x];
                    grid.set_height(yy, xx, grid.height_at(y, x));
                } else if shelf[yy][xx] > 0 && shelf[yy][xx] != shelf[y][x] {
                    grid.raise(yy, xx, dice.roll_sum(6, 2));
                    grid.raise(y, x, dice.d4());
                }
            }
        }
        current = shelf_percentage(&shelf);
    }

    for y in 0..height {
        for x in grid.west(y)..grid.east(y) {
            if shelf[y][x] == 0 {
                grid.set(y, x, Rc::clone(&palette.base));
            } else if grid.height_at(y, x) >= MOUNTAIN_HEIGHT {
                grid.set(y, x, Rc::clone(&palette.mountains));
            } else {
                grid.set(y, x, Rc::clone(&palette.shelf));
            }
        }
    }
}

fn shelf_percentage(shelf: &[Vec<i32>]) -> i32 {
    let mut size = 0;
    let mut count = 0;
    for row in shelf {
        for &cell in row {
            if cell >= 0 {
                size += 1;
                if cell > 0 {
                    count += 1;
                }
            }
        }
    }
    if size == 0 {
        return 100;
    }
    (count * 100) / size
}

/// Climate tiles the latitude-banding pass reclassifies land into.
#[derive(Debug, Clone)]
pub struct EcologyPalette {
    pub ice: TileRef,
    pub woodland: TileRef,
    pub desert: TileRef,
    pub jungle: TileRef,
}

/// Reclassify land tiles by latitude band: ice above 70 degrees, woodland
/// 35-70, desert 15-35, jungle below 15. Sea tiles are left untouched.
pub fn add_ecology(grid: &mut SurfaceGrid, palette: &EcologyPalette, land: &TileRef) {
    for y in 0..grid.height() {
        let latitude = grid.latitude(y);
        for x in grid.west(y)..grid.east(y) {
            if grid.get(y, x) != land {
                continue;
            }
            let tile = if latitude > 70 {
                &palette.ice
            } else if latitude > 35 {
                &palette.woodland
            } else if latitude > 15 {
                &palette.desert
            } else {
                &palette.jungle
            };
            grid.set(y, x, Rc::clone(tile));
        }
    }
}

/// Speckle the surface with `accent` tiles (one cell in twenty), then let
/// each speckle creep into a random neighbour for `passes` sweeps. Gives
/// ice crusts their fractured, mottled look.
pub fn mottle(grid: &mut SurfaceGrid, dice: &mut Dice, accent: &TileRef, passes: usize) {
    for y in 0..grid.height() {
        for x in grid.west(y)..grid.east(y) {
            if dice.d20() == 1 {
                grid.set(y, x, Rc::clone(accent));
            }
        }
    }

    for _ in 0..passes {
        let marked: Vec<(usize, usize)> = (0..grid.height())
            .flat_map(|y| (grid.west(y)..grid.east(y)).map(move |x| (y, x)))
            .filter(|&(y, x)| Rc::ptr_eq(grid.get(y, x), accent))
            .collect();
        for (y, x) in marked {
            match dice.d3() {
                1 => {
                    let xx = grid.wrap_x(y, x as i64 - 1);
                    grid.set(y, xx, Rc::clone(accent));
                }
                2 => {
                    let xx = grid.wrap_x(y, x as i64 + 1);
                    grid.set(y, xx, Rc::clone(accent));
                }
                _ => {
                    let yy = if dice.d2() == 1 && y > 0 {
                        y - 1
                    } else {
                        (y + 1).min(grid.height() - 1)
                    };
                    let xx = grid.wrap_x(yy, x as i64);
                    grid.set(yy, xx, Rc::clone(accent));
                }
            }
        }
    }
}
