use std::rc::Rc;

use crate::dice::Dice;

use super::{SurfaceGrid, TileRef};

/// Category-specific crater knobs. Craters rolled below `min_radius` are
/// skipped entirely, which models small impacts eroded away by geological
/// or atmospheric activity.
#[derive(Debug, Clone, Copy)]
pub struct CraterSettings {
    pub count: i32,
    pub max_radius: i32,
    pub min_radius: i32,
}

impl Default for CraterSettings {
    fn default() -> Self {
        Self {
            count: 150,
            max_radius: 4,
            min_radius: 0,
        }
    }
}

/// Overlay a field of roughly circular craters. Positions avoid the polar
/// five percent of rows; each splat only overwrites in-bounds cells and
/// lowers the height map by the crater radius.
pub fn add_craters(
    grid: &mut SurfaceGrid,
    dice: &mut Dice,
    crater: &TileRef,
    settings: &CraterSettings,
) {
    let height = grid.height() as i32;
    for _ in 0..settings.count {
        let polar_margin = (height as f64 * 0.05).ceil() as i32;
        let y = dice.roll_zero((height as f64 * 0.9) as i32) + polar_margin;
        let y = y.clamp(0, height - 1) as usize;
        let west = grid.west(y) as i32;
        let east = grid.east(y) as i32;
        let x = dice.roll_zero(east - west) + west;

        let r = dice.roll_zero(settings.max_radius);
        if r < settings.min_radius || r < 1 {
            continue;
        }

        for yy in (y as i32 - r)..(y as i32 + r) {
            if yy < 0 || yy >= height {
                continue;
            }
            for xx in (x - r)..(x + r) {
                if xx < 0 || xx >= grid.width() as i32 {
                    continue;
                }
                let (yy, xx) = (yy as usize, xx as usize);
                if !grid.in_bounds(yy, xx) {
                    continue;
                }
                let dx = (x - xx as i32) as f64;
                let dy = (y as i32 - yy as i32) as f64;
                if dx.hypot(dy) < (r + dice.roll(r)) as f64 / 2.0 {
                    if !Rc::ptr_eq(grid.get(yy, xx), crater) {
                        grid.raise(yy, xx, -r);
                        grid.set(yy, xx, Rc::clone(crater));
                    }
                }
            }
        }
    }
}
