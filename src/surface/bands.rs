use std::rc::Rc;

use super::{SurfaceGrid, TileRef};

/// How cloud bands are assigned to rows of a jovian map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandScheme {
    /// Palette cycles every two rows: `palette[(y / 2) % len]`.
    Simple,
    /// Polar eighths alternate the two primary shades, every eighth row
    /// takes the final "banding" tile, everything else cycles the middle
    /// of the palette. Needs a palette of four tiles.
    PolarCapped,
}

/// Paint horizontal cloud bands across the whole grid. Jovian worlds have
/// no land or sea; the map is just the outer cloud layer.
pub fn add_bands(grid: &mut SurfaceGrid, palette: &[TileRef], scheme: BandScheme) {
    assert!(!palette.is_empty(), "band palette must not be empty");
    if scheme == BandScheme::PolarCapped {
        assert!(
            palette.len() >= 4,
            "polar-capped banding needs four palette tiles"
        );
    }
    let height = grid.height();
    for y in 0..height {
        let band = match scheme {
            BandScheme::Simple => &palette[(y / 2) % palette.len()],
            BandScheme::PolarCapped => {
                let eighth = height / 8;
                if y < eighth || y >= height - eighth {
                    &palette[(y / 2) % 2]
                } else if y % 8 == 0 {
                    &palette[3]
                } else {
                    &palette[(y / 2) % 2 + 1]
                }
            }
        };
        for x in grid.west(y)..grid.east(y) {
            grid.set(y, x, Rc::clone(band));
        }
    }
}
