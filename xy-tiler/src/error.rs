//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use thiserror::Error;

/// Invalid tiler configuration
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TilerError {
    /// Tile extent along an axis is zero, negative or not finite
    #[error("Invalid tile size along {axis}: {value} (must be a positive finite number)")]
    InvalidTileSize { axis: char, value: f64 },

    /// Pixel count along an axis is zero
    #[error("Invalid pixel count along {axis}: must be at least 1")]
    ZeroPixels { axis: char },

    /// Grid origin is not finite
    #[error("Invalid grid origin ({x0}, {y0})")]
    InvalidOrigin { x0: f64, y0: f64 },

    /// Margin too wide for the raster size to be represented
    #[error("Invalid margin {margin}: raster of {nx}x{ny} pixels plus margin exceeds the pixel count range")]
    InvalidMargin { margin: u32, nx: u32, ny: u32 },
}
