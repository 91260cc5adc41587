//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Tiles covering an extent

use crate::tile_iterator::TileIter;
use crate::tiler::{floor_div, floor_mod, Anchor, Tiler};
use std::collections::BTreeMap;

/// Pixel range of one tile column or row taking part in a mosaic
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct PixelSpan {
    /// First pixel used (inclusive)
    pub beg: i64,
    /// Last pixel used (exclusive)
    pub end: i64,
    /// Position of `beg` in the mosaic raster
    pub offset: i64,
}

impl PixelSpan {
    pub fn len(&self) -> i64 {
        self.end - self.beg
    }
}

/// Layout for stitching the clipped rasters of covered tiles into one mosaic
#[derive(PartialEq, Clone, Debug)]
pub struct CoverageDetail {
    /// Mosaic width in pixels
    pub ni: i64,
    /// Mosaic height in pixels
    pub nj: i64,
    /// Pixel center x coordinates of the mosaic columns
    pub xs: Vec<f64>,
    /// Pixel center y coordinates of the mosaic rows
    pub ys: Vec<f64>,
    /// Pixel span per tile column index
    pub columns: BTreeMap<i64, PixelSpan>,
    /// Pixel span per tile row index
    pub rows: BTreeMap<i64, PixelSpan>,
    /// Covered tiles, row by row
    pub tiles: Vec<(i64, i64)>,
}

impl CoverageDetail {
    fn empty() -> CoverageDetail {
        CoverageDetail {
            ni: 0,
            nj: 0,
            xs: Vec::new(),
            ys: Vec::new(),
            columns: BTreeMap::new(),
            rows: BTreeMap::new(),
            tiles: Vec::new(),
        }
    }
}

/// First and last covered pixel, as (tile, pixel) pairs per axis
#[derive(PartialEq, Clone, Debug)]
struct CoverageLimits {
    tile_i1: i64,
    tile_j1: i64,
    i1: i64,
    j1: i64,
    tile_i2: i64,
    tile_j2: i64,
    i2: i64,
    j2: i64,
}

impl CoverageLimits {
    fn tiles(&self) -> TileIter {
        TileIter::new(self.tile_i1, self.tile_j1, self.tile_i2, self.tile_j2)
    }
}

/// `n` evenly spaced values from `start` to `stop`, both included
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            let mut values: Vec<f64> = (0..n).map(|k| start + k as f64 * step).collect();
            values[n - 1] = stop;
            values
        }
    }
}

/// Pixel spans of consecutive tiles along one axis
fn axis_spans(
    tile1: i64,
    p1: i64,
    tile2: i64,
    p2: i64,
    pixel_num: i64,
    margin: i64,
) -> (BTreeMap<i64, PixelSpan>, i64) {
    let mut spans = BTreeMap::new();
    let mut offset = 0;
    for t in tile1..=tile2 {
        let beg = if t == tile1 { p1 } else { 0 };
        let end = if t == tile2 && p2 < pixel_num {
            p2 + 1
        } else {
            pixel_num
        };
        let span = PixelSpan {
            beg: beg + margin,
            end: end + margin,
            offset,
        };
        offset += span.len();
        spans.insert(t, span);
    }
    (spans, offset)
}

impl Tiler {
    fn coverage_limits(
        &self,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        padding: i64,
    ) -> Option<CoverageLimits> {
        let nx = self.nx() as i64;
        let ny = self.ny() as i64;
        // Pixel indices without margin, the margin is applied to the details only
        let ll = self.xy_to_tile(x1, y1, false);
        let ur = self.xy_to_tile(x2, y2, false);
        let (mut tile_i1, mut tile_j1, mut i1, mut j1) = (ll.tile_i, ll.tile_j, ll.i, ll.j);
        let (mut tile_i2, mut tile_j2, mut i2, mut j2) = (ur.tile_i, ur.tile_j, ur.i, ur.j);

        // An upper bound within a tenth of a pixel past a tile edge belongs to
        // the previous tile
        let (x2_, y2_) = self.tile_to_xy(tile_i2, tile_j2, i2, j2, Anchor::LowerLeft, false);
        if i2 == 0 && x2 < x2_ + self.dx() / 10.0 {
            debug!("x={} snapped to last pixel of tile column {}", x2, tile_i2 - 1);
            tile_i2 = tile_i2.saturating_sub(1);
            i2 = nx - 1;
        }
        if j2 == 0 && y2 < y2_ + self.dy() / 10.0 {
            debug!("y={} snapped to last pixel of tile row {}", y2, tile_j2 - 1);
            tile_j2 = tile_j2.saturating_sub(1);
            j2 = ny - 1;
        }

        // Padding beyond the i64 range saturates
        i1 = i1.saturating_sub(padding);
        i2 = i2.saturating_add(padding);
        j1 = j1.saturating_sub(padding);
        j2 = j2.saturating_add(padding);

        tile_i1 = tile_i1.saturating_add(floor_div(i1, nx));
        tile_i2 = tile_i2.saturating_add(floor_div(i2, nx));
        tile_j1 = tile_j1.saturating_add(floor_div(j1, ny));
        tile_j2 = tile_j2.saturating_add(floor_div(j2, ny));
        i1 = floor_mod(i1, nx);
        i2 = floor_mod(i2, nx);
        j1 = floor_mod(j1, ny);
        j2 = floor_mod(j2, ny);

        // Shrinking (negative padding) or inverted input leaves nothing covered
        if (tile_i1, i1) > (tile_i2, i2) || (tile_j1, j1) > (tile_j2, j2) {
            trace!("empty coverage for ({}, {}, {}, {})", x1, y1, x2, y2);
            return None;
        }
        Some(CoverageLimits {
            tile_i1,
            tile_j1,
            i1,
            j1,
            tile_i2,
            tile_j2,
            i2,
            j2,
        })
    }

    /// Tiles intersecting the extent (x1, y1, x2, y2), row by row.
    /// `padding` widens (or, if negative, shrinks) the extent by whole pixels.
    /// The result is empty when, on either axis, the first covered (tile, pixel)
    /// pair comes after the last one, even if both lie in the same tile.
    pub fn covered_tiles(&self, x1: f64, y1: f64, x2: f64, y2: f64, padding: i64) -> Vec<(i64, i64)> {
        match self.coverage_limits(x1, y1, x2, y2, padding) {
            Some(limits) => limits.tiles().collect(),
            None => Vec::new(),
        }
    }

    /// Covered tiles with the pixel ranges needed from each tile and the
    /// layout of the resulting mosaic.
    /// With `margin`, pixel ranges address the margin-padded tile rasters.
    pub fn covered_tiles_detail(
        &self,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        padding: i64,
        margin: bool,
    ) -> CoverageDetail {
        let limits = match self.coverage_limits(x1, y1, x2, y2, padding) {
            Some(limits) => limits,
            None => return CoverageDetail::empty(),
        };
        let m = if margin { self.margin() as i64 } else { 0 };
        let (rows, nj) = axis_spans(
            limits.tile_j1,
            limits.j1,
            limits.tile_j2,
            limits.j2,
            self.ny() as i64,
            m,
        );
        let (columns, ni) = axis_spans(
            limits.tile_i1,
            limits.i1,
            limits.tile_i2,
            limits.i2,
            self.nx() as i64,
            m,
        );

        let (x_beg, y_beg) = self.tile_to_xy(
            limits.tile_i1,
            limits.tile_j1,
            limits.i1,
            limits.j1,
            Anchor::Center,
            false,
        );
        let (x_end, y_end) = self.tile_to_xy(
            limits.tile_i2,
            limits.tile_j2,
            limits.i2,
            limits.j2,
            Anchor::Center,
            false,
        );
        let tiles: Vec<_> = limits.tiles().collect();
        trace!("{} tiles, mosaic {}x{} pixels", tiles.len(), ni, nj);

        CoverageDetail {
            ni,
            nj,
            xs: linspace(x_beg, x_end, ni as usize),
            ys: linspace(y_beg, y_end, nj as usize),
            columns,
            rows,
            tiles,
        }
    }
}

#[test]
fn test_coverage_limits_saturate() {
    let tiler = Tiler::new(1.0, 1.0, 10, 10).unwrap();
    let limits = tiler
        .coverage_limits(0.05, 0.05, 0.95, 0.95, i64::MAX)
        .unwrap();
    assert_eq!((limits.tile_i1, limits.i1), (-922337203685477581, 3));
    assert_eq!((limits.tile_i2, limits.i2), (922337203685477580, 7));
    assert_eq!((limits.tile_j1, limits.j1), (-922337203685477581, 3));
    assert_eq!((limits.tile_j2, limits.j2), (922337203685477580, 7));

    assert_eq!(tiler.coverage_limits(0.05, 0.05, 0.95, 0.95, i64::MIN), None);
    assert!(tiler
        .covered_tiles(0.05, 0.05, 0.95, 0.95, i64::MIN)
        .is_empty());
}

#[test]
fn test_linspace() {
    assert_eq!(linspace(1.0, 2.0, 0), Vec::<f64>::new());
    assert_eq!(linspace(1.0, 2.0, 1), vec![1.0]);
    assert_eq!(linspace(1.0, 2.0, 3), vec![1.0, 1.5, 2.0]);
    assert_eq!(linspace(0.0, -4.0, 5), vec![0.0, -1.0, -2.0, -3.0, -4.0]);
}

#[test]
fn test_axis_spans() {
    let (spans, total) = axis_spans(3, 7, 5, 1, 10, 0);
    assert_eq!(total, 3 + 10 + 2);
    assert_eq!(
        spans[&3],
        PixelSpan {
            beg: 7,
            end: 10,
            offset: 0
        }
    );
    assert_eq!(
        spans[&4],
        PixelSpan {
            beg: 0,
            end: 10,
            offset: 3
        }
    );
    assert_eq!(
        spans[&5],
        PixelSpan {
            beg: 0,
            end: 2,
            offset: 13
        }
    );

    let (spans, total) = axis_spans(0, 2, 0, 5, 10, 1);
    assert_eq!(total, 4);
    assert_eq!(
        spans[&0],
        PixelSpan {
            beg: 3,
            end: 7,
            offset: 0
        }
    );
}
