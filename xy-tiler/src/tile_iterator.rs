//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Tile range iterators

/// Row-by-row iterator over an inclusive tile range
pub struct TileIter {
    ti: i64,
    tj: i64,
    min_i: i64,
    max_i: i64,
    max_j: i64,
    finished: bool,
}

impl TileIter {
    /// Iterate tiles `(min_i..=max_i) x (min_j..=max_j)`, `tile_i` varying fastest
    pub fn new(min_i: i64, min_j: i64, max_i: i64, max_j: i64) -> TileIter {
        TileIter {
            ti: min_i,
            tj: min_j,
            min_i,
            max_i,
            max_j,
            // Inverted ranges are empty
            finished: min_i > max_i || min_j > max_j,
        }
    }
    /// Number of remaining tiles
    pub fn remaining(&self) -> usize {
        if self.finished {
            return 0;
        }
        let width = (self.max_i - self.min_i + 1) as usize;
        let full_rows = (self.max_j - self.tj) as usize;
        full_rows * width + (self.max_i - self.ti + 1) as usize
    }
}

impl Iterator for TileIter {
    /// Current tile index `(tile_i, tile_j)`
    type Item = (i64, i64);

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let current = (self.ti, self.tj);
        if self.ti < self.max_i {
            self.ti += 1;
        } else if self.tj < self.max_j {
            self.tj += 1;
            self.ti = self.min_i;
        } else {
            self.finished = true;
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for TileIter {}

#[test]
fn test_row_major_iter() {
    let cells = TileIter::new(-1, 4, 1, 5).collect::<Vec<_>>();
    assert_eq!(
        cells,
        vec![(-1, 4), (0, 4), (1, 4), (-1, 5), (0, 5), (1, 5)]
    );

    let cells = TileIter::new(3, 3, 3, 3).collect::<Vec<_>>();
    assert_eq!(cells, vec![(3, 3)]);
}

#[test]
fn test_iter_len() {
    let mut iter = TileIter::new(0, 0, 2, 1);
    assert_eq!(iter.len(), 6);
    iter.next();
    iter.next();
    assert_eq!(iter.len(), 4);
    assert_eq!(iter.count(), 4);
}

#[test]
fn test_inverted_range() {
    assert_eq!(TileIter::new(2, 0, 1, 0).count(), 0);
    assert_eq!(TileIter::new(0, 2, 0, 1).count(), 0);
    assert_eq!(TileIter::new(2, 0, 1, 0).len(), 0);
}
