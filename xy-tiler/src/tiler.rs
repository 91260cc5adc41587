//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Coordinate to tile/pixel mapping

use crate::error::TilerError;
use std::fmt;

/// Tile and pixel address of a location
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct TilePixel {
    pub tile_i: i64,
    pub tile_j: i64,
    /// Pixel column within the tile
    pub i: i64,
    /// Pixel row within the tile
    pub j: i64,
}

impl TilePixel {
    pub fn new(tile_i: i64, tile_j: i64, i: i64, j: i64) -> TilePixel {
        TilePixel {
            tile_i,
            tile_j,
            i,
            j,
        }
    }
}

impl From<(i64, i64, i64, i64)> for TilePixel {
    fn from(t: (i64, i64, i64, i64)) -> TilePixel {
        TilePixel::new(t.0, t.1, t.2, t.3)
    }
}

impl From<TilePixel> for (i64, i64, i64, i64) {
    fn from(p: TilePixel) -> (i64, i64, i64, i64) {
        (p.tile_i, p.tile_j, p.i, p.j)
    }
}

/// Position within a pixel a coordinate refers to
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Anchor {
    Center,
    LowerLeft,
    LowerRight,
    UpperLeft,
    UpperRight,
}

impl Anchor {
    /// Fractional (x, y) offset within the pixel
    pub fn offsets(&self) -> (f64, f64) {
        match self {
            Anchor::Center => (0.5, 0.5),
            Anchor::LowerLeft => (0.0, 0.0),
            Anchor::LowerRight => (1.0, 0.0),
            Anchor::UpperLeft => (0.0, 1.0),
            Anchor::UpperRight => (1.0, 1.0),
        }
    }
}

impl Default for Anchor {
    fn default() -> Anchor {
        Anchor::Center
    }
}

/// Unknown names fall back to `Center`
impl From<&str> for Anchor {
    fn from(name: &str) -> Anchor {
        match &name.to_lowercase() as &str {
            "lowerleft" => Anchor::LowerLeft,
            "lowerright" => Anchor::LowerRight,
            "upperleft" => Anchor::UpperLeft,
            "upperright" => Anchor::UpperRight,
            _ => Anchor::Center,
        }
    }
}

/// Planar extent of a tile
#[derive(PartialEq, Clone, Debug)]
pub struct TileBbox {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Floor division. Tile indices are unbounded in both directions, so
/// truncating division would carry into the wrong tile for negative values.
pub fn floor_div(a: i64, b: i64) -> i64 {
    a.div_euclid(b)
}

/// Floor modulo, non-negative for positive `b`
pub fn floor_mod(a: i64, b: i64) -> i64 {
    a.rem_euclid(b)
}

/// Map a scalar coordinate to `(tile index, pixel index)` along one axis
pub fn to_tile_1d(x: f64, origin: f64, block_size: f64, pixel_num: u32) -> (i64, i64) {
    let x_ = x - origin;
    let mut tile = (x_ / block_size).floor() as i64;
    let mut pixel =
        ((x_ - block_size * tile as f64) / (block_size / pixel_num as f64)).floor() as i64;
    // rounding right at a tile edge
    if pixel == pixel_num as i64 {
        tile += 1;
        pixel = 0;
    }
    (tile, pixel)
}

/// Coordinate of `pixel` in `tile` along one axis.
/// `offset` selects the position inside the pixel (0: lower edge, 0.5: center, 1: upper edge).
pub fn to_coord_1d(
    tile: i64,
    pixel: f64,
    origin: f64,
    block_size: f64,
    pixel_num: u32,
    offset: f64,
) -> f64 {
    origin + tile as f64 * block_size + (pixel + offset) * block_size / pixel_num as f64
}

/// Infinite grid of equally sized tiles with a fixed pixel raster each
#[derive(Clone, Debug, PartialEq)]
pub struct Tiler {
    /// Extent of a tile along x, in coordinate units
    x_size: f64,
    /// Extent of a tile along y, in coordinate units
    y_size: f64,
    /// Pixels per tile along x
    nx: u32,
    /// Pixels per tile along y
    ny: u32,
    /// Grid origin. The lower left corner of tile (0, 0).
    x0: f64,
    y0: f64,
    /// Halo width in pixels, added on every side of the tile raster.
    /// Halo pixels alias the edge pixels of the neighbouring tiles.
    margin: u32,
}

impl Tiler {
    pub fn new(x_size: f64, y_size: f64, nx: u32, ny: u32) -> Result<Tiler, TilerError> {
        if !(x_size.is_finite() && x_size > 0.0) {
            return Err(TilerError::InvalidTileSize {
                axis: 'x',
                value: x_size,
            });
        }
        if !(y_size.is_finite() && y_size > 0.0) {
            return Err(TilerError::InvalidTileSize {
                axis: 'y',
                value: y_size,
            });
        }
        if nx == 0 {
            return Err(TilerError::ZeroPixels { axis: 'x' });
        }
        if ny == 0 {
            return Err(TilerError::ZeroPixels { axis: 'y' });
        }
        Ok(Tiler {
            x_size,
            y_size,
            nx,
            ny,
            x0: 0.0,
            y0: 0.0,
            margin: 0,
        })
    }
    /// Move the grid origin
    pub fn with_origin(mut self, x0: f64, y0: f64) -> Result<Tiler, TilerError> {
        if !(x0.is_finite() && y0.is_finite()) {
            return Err(TilerError::InvalidOrigin { x0, y0 });
        }
        self.x0 = x0;
        self.y0 = y0;
        Ok(self)
    }
    /// Set the halo width. `nx + 2 * margin` and `ny + 2 * margin` must fit into `u32`.
    pub fn with_margin(mut self, margin: u32) -> Result<Tiler, TilerError> {
        let fits = |n: u32| margin.checked_mul(2).and_then(|m| n.checked_add(m)).is_some();
        if !(fits(self.nx) && fits(self.ny)) {
            return Err(TilerError::InvalidMargin {
                margin,
                nx: self.nx,
                ny: self.ny,
            });
        }
        self.margin = margin;
        Ok(self)
    }
    pub fn x_size(&self) -> f64 {
        self.x_size
    }
    pub fn y_size(&self) -> f64 {
        self.y_size
    }
    pub fn nx(&self) -> u32 {
        self.nx
    }
    pub fn ny(&self) -> u32 {
        self.ny
    }
    pub fn x0(&self) -> f64 {
        self.x0
    }
    pub fn y0(&self) -> f64 {
        self.y0
    }
    pub fn margin(&self) -> u32 {
        self.margin
    }
    /// Pixel width
    pub fn dx(&self) -> f64 {
        self.x_size / self.nx as f64
    }
    /// Pixel height
    pub fn dy(&self) -> f64 {
        self.y_size / self.ny as f64
    }
    /// Raster width including margin on both sides
    pub fn full_nx(&self) -> u32 {
        self.nx + 2 * self.margin
    }
    /// Raster height including margin on both sides
    pub fn full_ny(&self) -> u32 {
        self.ny + 2 * self.margin
    }
    /// Tile and pixel containing (x, y).
    /// With `margin`, pixel indices are shifted into the margin-padded raster.
    pub fn xy_to_tile(&self, x: f64, y: f64, margin: bool) -> TilePixel {
        let (tile_i, mut i) = to_tile_1d(x, self.x0, self.x_size, self.nx);
        let (tile_j, mut j) = to_tile_1d(y, self.y0, self.y_size, self.ny);
        if margin {
            i += self.margin as i64;
            j += self.margin as i64;
        }
        TilePixel::new(tile_i, tile_j, i, j)
    }
    /// Coordinate of the `anchor` point of a pixel
    pub fn tile_to_xy(
        &self,
        tile_i: i64,
        tile_j: i64,
        i: i64,
        j: i64,
        anchor: Anchor,
        margin: bool,
    ) -> (f64, f64) {
        let (i_offset, j_offset) = anchor.offsets();
        let (i, j) = if margin {
            (i - self.margin as i64, j - self.margin as i64)
        } else {
            (i, j)
        };
        let x = to_coord_1d(tile_i, i as f64, self.x0, self.x_size, self.nx, i_offset);
        let y = to_coord_1d(tile_j, j as f64, self.y0, self.y_size, self.ny, j_offset);
        (x, y)
    }
    /// Same as `tile_to_xy` for an address value
    pub fn pixel_to_xy(&self, pixel: &TilePixel, anchor: Anchor, margin: bool) -> (f64, f64) {
        self.tile_to_xy(pixel.tile_i, pixel.tile_j, pixel.i, pixel.j, anchor, margin)
    }
    /// Coordinates of all pixel columns (xs) and rows (ys) of a tile.
    /// With `margin` the halo pixels are included on both ends.
    pub fn tile_pixel_coords(
        &self,
        tile_i: i64,
        tile_j: i64,
        anchor: Anchor,
        margin: bool,
    ) -> (Vec<f64>, Vec<f64>) {
        let (i_offset, j_offset) = anchor.offsets();
        let m = if margin { self.margin as i64 } else { 0 };
        let xs = (-m..self.nx as i64 + m)
            .map(|i| to_coord_1d(tile_i, i as f64, self.x0, self.x_size, self.nx, i_offset))
            .collect();
        let ys = (-m..self.ny as i64 + m)
            .map(|j| to_coord_1d(tile_j, j as f64, self.y0, self.y_size, self.ny, j_offset))
            .collect();
        (xs, ys)
    }
    /// Extent of a tile, without margin
    pub fn tile_bbox(&self, tile_i: i64, tile_j: i64) -> TileBbox {
        let x1 = self.x0 + self.x_size * tile_i as f64;
        let y1 = self.y0 + self.y_size * tile_j as f64;
        TileBbox {
            x1,
            y1,
            x2: x1 + self.x_size,
            y2: y1 + self.y_size,
        }
    }
}

impl fmt::Display for Tiler {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "<Tiler size: ({}, {}), n_pixel: ({}, {}), orig: ({}, {}), margin: {}>",
            self.x_size, self.y_size, self.nx, self.ny, self.x0, self.y0, self.margin
        )
    }
}
