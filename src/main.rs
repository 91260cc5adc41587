//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

#[macro_use]
extern crate clap;
#[macro_use]
extern crate log;

use clap::{App, AppSettings, ArgMatches, SubCommand};
use dotenv::dotenv;
use env_logger::Builder;
use grid_utils_core::axis::{AxisIndex, AxisKey};
use grid_utils_core::core::config::ApplicationCfg;
use grid_utils_core::core::report;
use grid_utils_core::core::{read_config, Config};
use log::Record;
use serde_json::{json, Value};
use std::env;
use std::io::Write;
use std::process;
use std::str::FromStr;
use time;
use xy_tiler::{Anchor, Tiler};

fn init_logger(args: &ArgMatches<'_>) {
    let mut builder = Builder::new();
    builder.format(|buf, record: &Record<'_>| {
        let t = time::now();
        writeln!(
            buf,
            "{}.{:03} {} {}",
            time::strftime("%Y-%m-%d %H:%M:%S", &t).unwrap_or_default(),
            t.tm_nsec / 1000_000,
            record.level(),
            record.args()
        )
    });

    let rust_log = match (args.value_of("loglevel"), env::var("RUST_LOG")) {
        (None, Ok(rust_log_env)) => rust_log_env,
        (loglevel, _) => loglevel.unwrap_or("info").to_string(),
    };
    builder.parse_filters(&rust_log);

    builder.init();
}

fn config_from_args(args: &ArgMatches<'_>) -> Result<ApplicationCfg, String> {
    let path = args
        .value_of("config")
        .ok_or("Missing configuration file".to_string())?;
    info!("Reading configuration from '{}'", path);
    read_config(path)
}

fn tiler_from_args(args: &ArgMatches<'_>) -> Result<Tiler, String> {
    let config = config_from_args(args)?;
    Tiler::from_config(&config.tiler)
}

/// Comma separated list of exactly `len` values
fn parse_list<T: FromStr>(args: &ArgMatches<'_>, name: &str, len: usize) -> Result<Vec<T>, String> {
    let numlist = args
        .value_of(name)
        .ok_or(format!("Missing '{}'", name))?;
    let values = numlist
        .split(',')
        .map(|v| v.trim().parse::<T>())
        .collect::<Result<Vec<T>, _>>()
        .map_err(|_| format!("Error parsing '{}' as list of {} values", name, len))?;
    if values.len() != len {
        return Err(format!("Error parsing '{}' as list of {} values", name, len));
    }
    Ok(values)
}

fn parse_value<T: FromStr>(args: &ArgMatches<'_>, name: &str, default: T) -> Result<T, String> {
    match args.value_of(name) {
        Some(s) => s
            .parse::<T>()
            .map_err(|_| format!("Error parsing '{}': {}", name, s)),
        None => Ok(default),
    }
}

fn anchor_from_args(args: &ArgMatches<'_>) -> Anchor {
    args.value_of("anchor").map(Anchor::from).unwrap_or_default()
}

fn xy2tile(args: &ArgMatches<'_>) -> Result<Value, String> {
    let tiler = tiler_from_args(args)?;
    let xy = parse_list::<f64>(args, "point", 2)?;
    let margin = parse_value(args, "margin", true)?;
    Ok(report::tile_pixel_json(&tiler.xy_to_tile(
        xy[0], xy[1], margin,
    )))
}

fn tile2xy(args: &ArgMatches<'_>) -> Result<Value, String> {
    let tiler = tiler_from_args(args)?;
    let tile = parse_list::<i64>(args, "tile", 2)?;
    let pixel = parse_list::<i64>(args, "pixel", 2)?;
    let margin = parse_value(args, "margin", true)?;
    let (x, y) = tiler.tile_to_xy(
        tile[0],
        tile[1],
        pixel[0],
        pixel[1],
        anchor_from_args(args),
        margin,
    );
    Ok(json!([x, y]))
}

fn bbox(args: &ArgMatches<'_>) -> Result<Value, String> {
    let tiler = tiler_from_args(args)?;
    let tile = parse_list::<i64>(args, "tile", 2)?;
    Ok(report::bbox_json(&tiler.tile_bbox(tile[0], tile[1])))
}

fn pixelcoords(args: &ArgMatches<'_>) -> Result<Value, String> {
    let tiler = tiler_from_args(args)?;
    let tile = parse_list::<i64>(args, "tile", 2)?;
    let margin = parse_value(args, "margin", true)?;
    let (xs, ys) = tiler.tile_pixel_coords(tile[0], tile[1], anchor_from_args(args), margin);
    Ok(json!({"xs": xs, "ys": ys}))
}

fn covered(args: &ArgMatches<'_>) -> Result<Value, String> {
    let tiler = tiler_from_args(args)?;
    let extent = parse_list::<f64>(args, "extent", 4)?;
    let padding = parse_value(args, "padding", 0i64)?;
    let detail = parse_value(args, "detail", false)?;
    let margin = parse_value(args, "margin", true)?;
    if detail {
        let detail = tiler.covered_tiles_detail(
            extent[0], extent[1], extent[2], extent[3], padding, margin,
        );
        info!("{} tiles covered", detail.tiles.len());
        Ok(report::coverage_json(&detail))
    } else {
        let tiles = tiler.covered_tiles(extent[0], extent[1], extent[2], extent[3], padding);
        info!("{} tiles covered", tiles.len());
        Ok(report::tiles_json(&tiles))
    }
}

fn surrounding(args: &ArgMatches<'_>) -> Result<Value, String> {
    let tiler = tiler_from_args(args)?;
    let tile = parse_list::<i64>(args, "tile", 2)?;
    let pixel = parse_list::<i64>(args, "pixel", 2)?;
    let length = parse_value(args, "length", 1u32)?;
    let margin = parse_value(args, "margin", true)?;
    let block = tiler.surrounding_pixels(tile[0], tile[1], pixel[0], pixel[1], length, margin);
    Ok(report::neighborhood_json(&block))
}

fn axis(args: &ArgMatches<'_>) -> Result<Value, String> {
    let config = config_from_args(args)?;
    let name = args.value_of("name").ok_or("Missing 'name'".to_string())?;
    let axis_cfg = config
        .axis(name)
        .ok_or(format!("Unknown axis '{}'", name))?;
    let axis = AxisIndex::<String>::from_config(axis_cfg)?;
    let key = args.value_of("key").ok_or("Missing 'key'".to_string())?;
    let selection = axis
        .get_index(&AxisKey::Value(key.to_string()))
        .map_err(|e| e.to_string())?;
    Ok(json!(selection.positions(axis.size())))
}

fn genconfig() -> String {
    format!(
        "{}{}",
        <Tiler as Config<_>>::gen_config(),
        <AxisIndex<String> as Config<_>>::gen_config()
    )
}

fn run(name: &str, args: &ArgMatches<'_>, command: fn(&ArgMatches<'_>) -> Result<Value, String>) {
    init_logger(args);
    debug!("Running {}", name);
    match command(args) {
        Ok(result) => println!("{}", result),
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    }
}

fn build_app() -> App<'static, 'static> {
    let common_args = "-c, --config=<FILE> 'Load from custom config file'
                       --loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'";
    // http://kbknapp.github.io/clap-rs/clap/
    App::new("grid_utils")
        .version(crate_version!())
        .author("Pirmin Kalberer <pka@sourcepole.ch>")
        .about("Coordinate to tile/pixel conversions for tiled rasters")
        .subcommand(SubCommand::with_name("genconfig")
                        .about("Generate configuration template"))
        .subcommand(SubCommand::with_name("xy2tile")
                        .setting(AppSettings::AllowLeadingHyphen)
                        .args_from_usage(common_args)
                        .args_from_usage("--point=<x,y> 'Coordinate'
                                              --margin=[true|false] 'Pixel indices include margin (Default: true)'")
                        .about("Tile and pixel containing a coordinate"))
        .subcommand(SubCommand::with_name("tile2xy")
                        .setting(AppSettings::AllowLeadingHyphen)
                        .args_from_usage(common_args)
                        .args_from_usage("--tile=<tile_i,tile_j> 'Tile index'
                                              --pixel=<i,j> 'Pixel index'
                                              --anchor=[center|lowerleft|lowerright|upperleft|upperright] 'Position within pixel (Default: center)'
                                              --margin=[true|false] 'Pixel indices include margin (Default: true)'")
                        .about("Coordinate of a pixel"))
        .subcommand(SubCommand::with_name("bbox")
                        .setting(AppSettings::AllowLeadingHyphen)
                        .args_from_usage(common_args)
                        .args_from_usage("--tile=<tile_i,tile_j> 'Tile index'")
                        .about("Extent of a tile"))
        .subcommand(SubCommand::with_name("pixelcoords")
                        .setting(AppSettings::AllowLeadingHyphen)
                        .args_from_usage(common_args)
                        .args_from_usage("--tile=<tile_i,tile_j> 'Tile index'
                                              --anchor=[center|lowerleft|lowerright|upperleft|upperright] 'Position within pixel (Default: center)'
                                              --margin=[true|false] 'Include margin pixels (Default: true)'")
                        .about("Coordinates of all pixel columns and rows of a tile"))
        .subcommand(SubCommand::with_name("covered")
                        .setting(AppSettings::AllowLeadingHyphen)
                        .args_from_usage(common_args)
                        .args_from_usage("--extent=<x1,y1,x2,y2> 'Extent'
                                              --padding=[PIXELS] 'Extra pixels around extent (Default: 0)'
                                              --detail=[true|false] 'Mosaic layout (Default: false)'
                                              --margin=[true|false] 'Layout addresses margin-padded tiles (Default: true)'")
                        .about("Tiles covering an extent"))
        .subcommand(SubCommand::with_name("surrounding")
                        .setting(AppSettings::AllowLeadingHyphen)
                        .args_from_usage(common_args)
                        .args_from_usage("--tile=<tile_i,tile_j> 'Tile index'
                                              --pixel=<i,j> 'Center pixel index'
                                              --length=[PIXELS] 'Distance from center (Default: 1)'
                                              --margin=[true|false] 'Pixel indices include margin (Default: true)'")
                        .about("Pixel neighborhood wrapping across tile edges"))
        .subcommand(SubCommand::with_name("axis")
                        .args_from_usage(common_args)
                        .args_from_usage("--name=<NAME> 'Axis name'
                                              --key=<VALUE> 'Axis value'")
                        .about("Position of a value on a configured axis"))
}

fn main() {
    dotenv().ok();
    let mut app = build_app();
    match app.get_matches_from_safe_borrow(env::args()) {
        //app.get_matches() prohibits later call of app.print_help()
        Result::Err(e) => {
            println!("{}", e);
        }
        Result::Ok(matches) => match matches.subcommand() {
            ("genconfig", Some(_)) => {
                println!("{}", genconfig());
            }
            ("xy2tile", Some(sub_m)) => run("xy2tile", sub_m, xy2tile),
            ("tile2xy", Some(sub_m)) => run("tile2xy", sub_m, tile2xy),
            ("bbox", Some(sub_m)) => run("bbox", sub_m, bbox),
            ("pixelcoords", Some(sub_m)) => run("pixelcoords", sub_m, pixelcoords),
            ("covered", Some(sub_m)) => run("covered", sub_m, covered),
            ("surrounding", Some(sub_m)) => run("surrounding", sub_m, surrounding),
            ("axis", Some(sub_m)) => run("axis", sub_m, axis),
            _ => {
                let _ = app.print_help();
                println!("");
            }
        },
    }
}

#[test]
fn test_genconfig() {
    let config: ApplicationCfg =
        grid_utils_core::core::parse_config(genconfig(), "").expect("invalid template");
    assert!(Tiler::from_config(&config.tiler).is_ok());
}

#[test]
fn test_xy2tile_args() {
    let matches = build_app()
        .get_matches_from_safe(vec![
            "grid_utils",
            "xy2tile",
            "-c",
            "grid.toml",
            "--point=-1.5,2.25",
            "--margin=false",
        ])
        .unwrap();
    let (name, sub_m) = matches.subcommand();
    assert_eq!(name, "xy2tile");
    let sub_m = sub_m.unwrap();
    assert_eq!(parse_list::<f64>(sub_m, "point", 2), Ok(vec![-1.5, 2.25]));
    assert_eq!(parse_value(sub_m, "margin", true), Ok(false));
    assert!(parse_list::<f64>(sub_m, "point", 3).is_err());

    assert!(build_app()
        .get_matches_from_safe(vec!["grid_utils", "xy2tile", "-c", "grid.toml", "--x=1"])
        .is_err());
}
