//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::coverage::PixelSpan;
use crate::tiler::{TilePixel, Tiler};

fn tiler() -> Tiler {
    Tiler::new(1.0, 1.0, 10, 10).unwrap()
}

fn assert_approx(a: &[f64], b: &[f64]) {
    assert_eq!(a.len(), b.len());
    for (va, vb) in a.iter().zip(b) {
        assert!((va - vb).abs() < 1e-9, "{:?} != {:?}", a, b);
    }
}

#[test]
fn test_covered_tiles() {
    let t = tiler();
    assert_eq!(t.covered_tiles(0.05, 0.05, 0.95, 0.95, 0), vec![(0, 0)]);
    assert_eq!(
        t.covered_tiles(0.5, 0.5, 2.5, 1.5, 0),
        vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]
    );
    assert_eq!(
        t.covered_tiles(-1.5, -0.5, -0.5, 0.5, 0),
        vec![(-2, -1), (-1, -1), (-2, 0), (-1, 0)]
    );
}

#[test]
fn test_boundary_snapping() {
    let t = tiler();
    // Upper bounds exactly on tile edges stay in the previous tiles
    assert_eq!(t.covered_tiles(0.05, 0.05, 2.0, 1.0, 0), vec![(0, 0), (1, 0)]);
    // Within a tenth of a pixel past the edge
    assert_eq!(t.covered_tiles(0.05, 0.05, 2.005, 1.005, 0), vec![(0, 0), (1, 0)]);
    // Further away the next tile is covered
    assert_eq!(
        t.covered_tiles(0.05, 0.05, 2.02, 0.95, 0),
        vec![(0, 0), (1, 0), (2, 0)]
    );

    let detail = t.covered_tiles_detail(0.05, 0.05, 2.0, 1.0, 0, false);
    assert_eq!(
        detail.columns[&1],
        PixelSpan {
            beg: 0,
            end: 10,
            offset: 10
        }
    );
    assert!(detail.columns.values().all(|span| span.len() >= 1));
    assert!(detail.rows.values().all(|span| span.len() >= 1));
}

#[test]
fn test_padding() {
    let t = tiler();
    let tiles = t.covered_tiles(0.05, 0.05, 0.95, 0.95, 1);
    assert_eq!(tiles.len(), 9);
    assert_eq!(tiles[0], (-1, -1));
    assert_eq!(tiles[1], (0, -1));
    assert_eq!(tiles[8], (1, 1));

    // Padding not reaching the tile edge
    assert_eq!(t.covered_tiles(0.25, 0.25, 0.75, 0.75, 2), vec![(0, 0)]);

    // Padding pushing over several tiles
    let tiles = t.covered_tiles(0.05, 0.05, 0.05, 0.05, 25);
    assert_eq!(tiles.first(), Some(&(-3, -3)));
    assert_eq!(tiles.last(), Some(&(2, 2)));
    assert_eq!(tiles.len(), 36);
}

#[test]
fn test_negative_padding() {
    let t = tiler();
    assert_eq!(t.covered_tiles(0.05, 0.05, 0.95, 0.95, -1), vec![(0, 0)]);
    assert_eq!(
        t.covered_tiles(0.05, 0.05, 1.95, 1.95, -5),
        vec![(0, 0), (1, 0), (0, 1), (1, 1)]
    );
    // Lower bound carried past the upper bound
    assert_eq!(t.covered_tiles(0.05, 0.05, 1.95, 1.95, -10), Vec::<(i64, i64)>::new());
    assert_eq!(t.covered_tiles(0.05, 0.05, 0.95, 0.95, -6), Vec::<(i64, i64)>::new());

    let detail = t.covered_tiles_detail(0.05, 0.05, 0.95, 0.95, -6, true);
    assert_eq!(detail.ni, 0);
    assert_eq!(detail.nj, 0);
    assert!(detail.xs.is_empty());
    assert!(detail.columns.is_empty());
    assert!(detail.tiles.is_empty());

    let detail = t.covered_tiles_detail(0.05, 0.05, 0.95, 0.95, -2, false);
    assert_eq!(detail.ni, 6);
    assert_eq!(
        detail.columns[&0],
        PixelSpan {
            beg: 2,
            end: 8,
            offset: 0
        }
    );
}

#[test]
fn test_inverted_extent() {
    let t = tiler();
    assert!(t.covered_tiles(2.5, 0.5, 0.5, 1.5, 0).is_empty());
    assert!(t.covered_tiles(0.75, 0.5, 0.25, 0.7, 0).is_empty());
}

#[test]
fn test_covered_tiles_detail() {
    let t = tiler().with_margin(2).unwrap();
    let detail = t.covered_tiles_detail(0.23, 0.37, 1.56, 0.94, 0, true);
    assert_eq!(detail.tiles, vec![(0, 0), (1, 0)]);
    assert_eq!(detail.ni, 14);
    assert_eq!(detail.nj, 7);
    assert_eq!(
        detail.columns[&0],
        PixelSpan {
            beg: 4,
            end: 12,
            offset: 0
        }
    );
    assert_eq!(
        detail.columns[&1],
        PixelSpan {
            beg: 2,
            end: 8,
            offset: 8
        }
    );
    assert_eq!(
        detail.rows[&0],
        PixelSpan {
            beg: 5,
            end: 12,
            offset: 0
        }
    );
    assert_eq!(detail.xs.len(), 14);
    assert!((detail.xs[0] - 0.25).abs() < 1e-9);
    assert!((detail.xs[13] - 1.55).abs() < 1e-9);
    assert_approx(&detail.ys, &[0.35, 0.45, 0.55, 0.65, 0.75, 0.85, 0.95]);

    // Mosaic columns line up with the pixel centers of the source tiles
    for (ti, span) in &detail.columns {
        for p in span.beg..span.end {
            let (x, _) = t.tile_to_xy(*ti, 0, p, 0, Default::default(), true);
            let k = (span.offset + p - span.beg) as usize;
            assert!((detail.xs[k] - x).abs() < 1e-9);
        }
    }

    // Without margin
    let detail = t.covered_tiles_detail(0.23, 0.37, 1.56, 0.94, 0, false);
    assert_eq!(
        detail.columns[&0],
        PixelSpan {
            beg: 2,
            end: 10,
            offset: 0
        }
    );
    assert_eq!(detail.ni, 14);
}

#[test]
fn test_detail_matches_tile_list() {
    let t = Tiler::new(2.0, 3.0, 8, 6)
        .unwrap()
        .with_origin(-1.0, 0.5)
        .unwrap();
    for padding in 0..4 {
        let tiles = t.covered_tiles(-7.3, -4.1, 3.9, 11.2, padding);
        let detail = t.covered_tiles_detail(-7.3, -4.1, 3.9, 11.2, padding, false);
        assert_eq!(tiles, detail.tiles);
        assert_eq!(detail.tiles.len(), detail.columns.len() * detail.rows.len());
        let ni: i64 = detail.columns.values().map(|s| s.len()).sum();
        let nj: i64 = detail.rows.values().map(|s| s.len()).sum();
        assert_eq!(detail.ni, ni);
        assert_eq!(detail.nj, nj);
        assert_eq!(detail.xs.len(), ni as usize);
        assert_eq!(detail.ys.len(), nj as usize);
    }
}

#[test]
fn test_corners_inside_coverage() {
    let t = tiler();
    let corners = [(3.27, -1.61), (5.02, 0.33)];
    let tiles = t.covered_tiles(corners[0].0, corners[0].1, corners[1].0, corners[1].1, 0);
    for (x, y) in corners.iter() {
        let TilePixel { tile_i, tile_j, .. } = t.xy_to_tile(*x, *y, false);
        assert!(tiles.contains(&(tile_i, tile_j)));
    }
}
