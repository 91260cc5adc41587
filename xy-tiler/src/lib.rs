//! A library for mapping planar coordinates onto tiled pixel rasters
//!
//! ## Coordinates and tiles
//!
//! ```rust
//! use xy_tiler::{Anchor, TilePixel, Tiler};
//!
//! let tiler = Tiler::new(1.0, 1.0, 10, 10).unwrap();
//! assert_eq!(tiler.xy_to_tile(93.501, 34.301, true), TilePixel::new(93, 34, 5, 3));
//! let (x, y) = tiler.tile_to_xy(93, 34, 5, 3, Anchor::LowerLeft, true);
//! assert!(x <= 93.501 && y <= 34.301);
//! ```
//!
//! ## Margins
//!
//! Each tile raster can carry a halo of pixels duplicated from its neighbours.
//!
//! ```rust
//! use xy_tiler::{TilePixel, Tiler};
//!
//! let tiler = Tiler::new(1.0, 1.0, 10, 10).unwrap().with_margin(2).unwrap();
//! assert_eq!(tiler.full_nx(), 14);
//! assert_eq!(tiler.xy_to_tile(93.501, 34.301, true), TilePixel::new(93, 34, 7, 5));
//! assert_eq!(tiler.xy_to_tile(93.501, 34.301, false), TilePixel::new(93, 34, 5, 3));
//! ```
//!
//! ## Covered tiles
//!
//! ```rust
//! use xy_tiler::Tiler;
//!
//! let tiler = Tiler::new(1.0, 1.0, 10, 10).unwrap();
//! let tiles = tiler.covered_tiles(0.05, 0.05, 2.0, 1.0, 0);
//! assert_eq!(tiles, vec![(0, 0), (1, 0)]);
//!
//! let detail = tiler.covered_tiles_detail(0.05, 0.05, 2.0, 1.0, 0, true);
//! assert_eq!(detail.ni, 20);
//! assert_eq!(detail.nj, 10);
//! assert_eq!(detail.xs.len(), 20);
//! ```
//!
//! ## Neighborhoods
//!
//! ```rust
//! use xy_tiler::{TilePixel, Tiler};
//!
//! let tiler = Tiler::new(1.0, 1.0, 10, 10).unwrap();
//! let block = tiler.surrounding_pixels(5, 0, 0, 4, 1, false);
//! assert_eq!(block.at(-1, 0), Some(&TilePixel::new(4, 0, 9, 4)));
//! ```

#[macro_use]
extern crate log;

mod coverage;
mod error;
mod neighborhood;
mod tile_iterator;
mod tiler;

#[cfg(test)]
mod coverage_test;

pub use coverage::{linspace, CoverageDetail, PixelSpan};
pub use error::TilerError;
pub use neighborhood::Neighborhood;
pub use tile_iterator::TileIter;
pub use tiler::{
    floor_div, floor_mod, to_coord_1d, to_tile_1d, Anchor, TileBbox, TilePixel, Tiler,
};
