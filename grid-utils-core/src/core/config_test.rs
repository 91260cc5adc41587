//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::axis::AxisIndex;
use crate::core::config::{read_config, ApplicationCfg, TilerCfg, DEFAULT_CONFIG};
use crate::core::Config;
use xy_tiler::Tiler;

#[test]
fn test_load_config() {
    let config = read_config("src/test/example.toml");
    println!("{:#?}", config);
    let config: ApplicationCfg = config.expect("load_config returned Err");
    assert_eq!(config.tiler.nx, 10);
    assert_eq!(config.tiler.x0, 100.0);
    assert_eq!(config.tiler.margin, 2);
    assert_eq!(config.axes.len(), 2);
    assert_eq!(config.axes[0].name, "level");
    assert_eq!(config.axes[0].values, vec!["1000", "850", "500"]);
    assert_eq!(config.axes[0].serializer, Some("{}hPa".to_string()));
    assert!(config.axis("member").is_some());
    assert!(config.axis("time").is_none());
}

#[test]
fn test_parse_error() {
    let config: Result<ApplicationCfg, _> = read_config("src/core/mod.rs");
    assert!(config.err().unwrap().starts_with("src/core/mod.rs - "));

    let config: Result<ApplicationCfg, _> = read_config("wrongfile");
    assert_eq!("Could not find config file!", config.err().unwrap());
}

#[test]
fn test_defaults() {
    use crate::core::parse_config;
    let toml = r#"
        [tiler]
        x_size = 2.5
        y_size = 2.5
        nx = 100
        ny = 50
        "#;
    let config: ApplicationCfg = parse_config(toml.to_string(), "").unwrap();
    assert_eq!(config.tiler.x0, 0.0);
    assert_eq!(config.tiler.y0, 0.0);
    assert_eq!(config.tiler.margin, 0);
    assert!(config.axes.is_empty());

    let config: ApplicationCfg = parse_config(DEFAULT_CONFIG.to_string(), "").unwrap();
    assert!(Tiler::from_config(&config.tiler).is_ok());
    assert!(config
        .axes
        .iter()
        .all(|axis| AxisIndex::<String>::from_config(axis).is_ok()));
}

#[test]
fn test_env_expansion() {
    use crate::core::parse_config;
    std::env::set_var("GRID_UTILS_TEST_NX", "64");
    let toml = r#"
        x_size = 1.0
        y_size = 1.0
        nx = {{ env.GRID_UTILS_TEST_NX }}
        ny = 32
        "#;
    let config: TilerCfg = parse_config(toml.to_string(), "").unwrap();
    assert_eq!(config.nx, 64);

    let toml = r#"
        nx = ${NX}
        "#;
    let config: Result<TilerCfg, _> = parse_config(toml.to_string(), "");
    assert_eq!(
        config.err(),
        Some("Replace old environment variable syntax ${VARNAME} with `{{env.VARNAME}}`".to_string())
    );
}
