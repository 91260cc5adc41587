//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::report::{bbox_json, coverage_json, neighborhood_json, tile_pixel_json, tiles_json};
use xy_tiler::{TilePixel, Tiler};

#[test]
fn test_tile_pixel_json() {
    let pixel = TilePixel::new(93, -34, 5, 3);
    assert_eq!(
        tile_pixel_json(&pixel).to_string(),
        r#"{"i":5,"j":3,"tile_i":93,"tile_j":-34}"#
    );
}

#[test]
fn test_coverage_json() {
    let tiler = Tiler::new(1.0, 1.0, 10, 10).unwrap();
    let tiles = tiler.covered_tiles(0.05, 0.05, 2.0, 1.0, 0);
    assert_eq!(tiles_json(&tiles).to_string(), "[[0,0],[1,0]]");

    let detail = tiler.covered_tiles_detail(0.05, 0.05, 2.0, 1.0, 0, false);
    let json = coverage_json(&detail);
    assert_eq!(json["ni"], 20);
    assert_eq!(json["nj"], 10);
    assert_eq!(json["xs"].as_array().map(|xs| xs.len()), Some(20));
    assert_eq!(json["columns"]["1"]["offset"], 10);
    assert_eq!(json["rows"]["0"]["end"], 10);
    assert_eq!(json["tiles"][1][0], 1);

    assert_eq!(
        bbox_json(&tiler.tile_bbox(1, 2)).to_string(),
        "[1.0,2.0,2.0,3.0]"
    );
}

#[test]
fn test_neighborhood_json() {
    let tiler = Tiler::new(1.0, 1.0, 10, 10).unwrap();
    let block = tiler.surrounding_pixels(5, 0, 0, 0, 1, false);
    let json = neighborhood_json(&block);
    assert_eq!(json.as_array().map(|rows| rows.len()), Some(3));
    assert_eq!(json[0][0]["tile_i"], 4);
    assert_eq!(json[0][0]["tile_j"], -1);
    assert_eq!(json[0][0]["i"], 9);
    assert_eq!(json[1][1]["i"], 0);
}
