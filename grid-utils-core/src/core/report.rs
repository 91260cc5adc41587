//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! JSON representation of query results

use serde_json::Value;
use std::collections::BTreeMap;
use xy_tiler::{CoverageDetail, Neighborhood, PixelSpan, TileBbox, TilePixel};

pub fn tile_pixel_json(pixel: &TilePixel) -> Value {
    json!({
        "tile_i": pixel.tile_i,
        "tile_j": pixel.tile_j,
        "i": pixel.i,
        "j": pixel.j,
    })
}

pub fn bbox_json(bbox: &TileBbox) -> Value {
    json!([bbox.x1, bbox.y1, bbox.x2, bbox.y2])
}

pub fn tiles_json(tiles: &[(i64, i64)]) -> Value {
    Value::Array(tiles.iter().map(|&(ti, tj)| json!([ti, tj])).collect())
}

fn spans_json(spans: &BTreeMap<i64, PixelSpan>) -> Value {
    let entries = spans
        .iter()
        .map(|(tile, span)| {
            (
                tile.to_string(),
                json!({"beg": span.beg, "end": span.end, "offset": span.offset}),
            )
        })
        .collect();
    Value::Object(entries)
}

pub fn coverage_json(detail: &CoverageDetail) -> Value {
    json!({
        "ni": detail.ni,
        "nj": detail.nj,
        "xs": detail.xs,
        "ys": detail.ys,
        "columns": spans_json(&detail.columns),
        "rows": spans_json(&detail.rows),
        "tiles": tiles_json(&detail.tiles),
    })
}

/// Rows of the neighborhood, lowest j first
pub fn neighborhood_json(block: &Neighborhood) -> Value {
    Value::Array(
        block
            .rows()
            .map(|row| Value::Array(row.iter().map(tile_pixel_json).collect()))
            .collect(),
    )
}
