//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Pixel neighborhoods across tile edges

use crate::tiler::{floor_div, floor_mod, TilePixel, Tiler};

/// Square block of pixel addresses around a center pixel.
/// Cells are stored row by row, rows running along j and columns along i.
#[derive(PartialEq, Clone, Debug)]
pub struct Neighborhood {
    length: u32,
    cells: Vec<TilePixel>,
}

impl Neighborhood {
    /// Number of cells along each side (`2 * length + 1`)
    pub fn side(&self) -> usize {
        2 * self.length as usize + 1
    }
    pub fn length(&self) -> u32 {
        self.length
    }
    /// Address at offset (d_i, d_j) from the center.
    /// Returns `None` if the offset lies outside the block.
    pub fn at(&self, d_i: i64, d_j: i64) -> Option<&TilePixel> {
        let l = self.length as i64;
        if d_i.abs() > l || d_j.abs() > l {
            return None;
        }
        let row = (d_j + l) as usize;
        let col = (d_i + l) as usize;
        self.cells.get(row * self.side() + col)
    }
    pub fn center(&self) -> &TilePixel {
        &self.cells[self.cells.len() / 2]
    }
    pub fn iter(&self) -> std::slice::Iter<'_, TilePixel> {
        self.cells.iter()
    }
    /// Rows of the block, lowest j first
    pub fn rows(&self) -> std::slice::Chunks<'_, TilePixel> {
        self.cells.chunks(self.side())
    }
}

impl Tiler {
    /// Pixels within `length` of (i, j) in both directions.
    /// Indices leaving the tile wrap into the neighbouring tile instead of being clamped.
    pub fn surrounding_pixels(
        &self,
        tile_i: i64,
        tile_j: i64,
        i: i64,
        j: i64,
        length: u32,
        margin: bool,
    ) -> Neighborhood {
        let nx = self.nx() as i64;
        let ny = self.ny() as i64;
        let m = if margin { self.margin() as i64 } else { 0 };
        let (i, j) = (i - m, j - m);
        let l = length as i64;

        let mut cells = Vec::with_capacity((2 * length as usize + 1).pow(2));
        for d_j in -l..=l {
            for d_i in -l..=l {
                let ii = i + d_i;
                let jj = j + d_j;
                cells.push(TilePixel::new(
                    tile_i + floor_div(ii, nx),
                    tile_j + floor_div(jj, ny),
                    floor_mod(ii, nx) + m,
                    floor_mod(jj, ny) + m,
                ));
            }
        }
        Neighborhood { length, cells }
    }
}

#[test]
fn test_wrap_at_tile_edges() {
    let tiler = Tiler::new(1.0, 1.0, 10, 10).unwrap();
    let block = tiler.surrounding_pixels(5, 7, 0, 9, 1, false);
    assert_eq!(block.side(), 3);
    assert_eq!(block.iter().count(), 9);
    assert_eq!(block.center(), &TilePixel::new(5, 7, 0, 9));
    assert_eq!(block.at(-1, 0), Some(&TilePixel::new(4, 7, 9, 9)));
    assert_eq!(block.at(1, 1), Some(&TilePixel::new(5, 8, 1, 0)));
    assert_eq!(block.at(-1, 1), Some(&TilePixel::new(4, 8, 9, 0)));
    assert_eq!(block.at(2, 0), None);
    assert!(block.iter().all(|p| p.i >= 0 && p.i < 10 && p.j >= 0 && p.j < 10));

    let rows: Vec<_> = block.rows().collect();
    assert_eq!(rows.len(), 3);
    assert_eq!(
        rows[0],
        &[
            TilePixel::new(4, 7, 9, 8),
            TilePixel::new(5, 7, 0, 8),
            TilePixel::new(5, 7, 1, 8)
        ]
    );
}

#[test]
fn test_neighborhood_with_margin() {
    let tiler = Tiler::new(1.0, 1.0, 10, 10).unwrap().with_margin(2).unwrap();
    let block = tiler.surrounding_pixels(0, 0, 2, 11, 2, true);
    assert_eq!(block.side(), 5);
    assert_eq!(block.length(), 2);
    assert_eq!(block.center(), &TilePixel::new(0, 0, 2, 11));
    assert_eq!(block.at(-1, 0), Some(&TilePixel::new(-1, 0, 11, 11)));
    assert_eq!(block.at(-2, 2), Some(&TilePixel::new(-1, 1, 10, 3)));
    assert!(block.iter().all(|p| p.i >= 2 && p.i < 12 && p.j >= 2 && p.j < 12));
}

#[test]
fn test_long_reach() {
    let tiler = Tiler::new(1.0, 1.0, 4, 4).unwrap();
    let block = tiler.surrounding_pixels(0, 0, 0, 0, 9, false);
    assert_eq!(block.iter().count(), 19 * 19);
    assert_eq!(block.at(-9, -9), Some(&TilePixel::new(-3, -3, 3, 3)));
    assert_eq!(block.at(9, 0), Some(&TilePixel::new(2, 0, 1, 0)));
}
