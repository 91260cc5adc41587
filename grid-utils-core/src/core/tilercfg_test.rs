//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::axis::{AxisIndex, AxisKey, AxisSelection};
use crate::core::config::{AxisCfg, TilerCfg};
use crate::core::Config;
use xy_tiler::{TilePixel, Tiler};

#[test]
fn test_tiler_from_config() {
    use crate::core::parse_config;

    let toml = r#"
        #[tiler]
        x_size = 1.0
        y_size = 1.0
        nx = 10
        ny = 10
        x0 = 100.0
        y0 = 30.0
        "#;
    let config: TilerCfg = parse_config(toml.to_string(), "").unwrap();
    let tiler = Tiler::from_config(&config).unwrap();
    assert_eq!(tiler.xy_to_tile(93.501, 34.301, true), TilePixel::new(-7, 4, 5, 3));

    let toml = r#"
        x_size = 1.0
        y_size = 1.0
        nx = 10
        ny = 10
        margin = 2
        "#;
    let config: TilerCfg = parse_config(toml.to_string(), "").unwrap();
    let tiler = Tiler::from_config(&config).unwrap();
    assert_eq!(tiler.full_nx(), 14);
    assert_eq!(tiler.xy_to_tile(93.001, 34.999, true), TilePixel::new(93, 34, 2, 11));
}

#[test]
fn test_invalid_tiler_config() {
    use crate::core::parse_config;

    let toml = r#"
        x_size = 1.0
        y_size = 1.0
        nx = 0
        ny = 10
        "#;
    let config: TilerCfg = parse_config(toml.to_string(), "").unwrap();
    assert_eq!(
        Tiler::from_config(&config).err(),
        Some("Invalid tiler definition: Invalid pixel count along x: must be at least 1".to_string())
    );

    let toml = r#"
        x_size = -1.0
        y_size = 1.0
        nx = 10
        ny = 10
        "#;
    let config: TilerCfg = parse_config(toml.to_string(), "").unwrap();
    assert!(Tiler::from_config(&config).is_err());

    let toml = r#"
        x_size = 1.0
        y_size = 1.0
        nx = 10
        ny = 10
        margin = 2147483647
        "#;
    let config: TilerCfg = parse_config(toml.to_string(), "").unwrap();
    assert!(Tiler::from_config(&config)
        .unwrap_err()
        .starts_with("Invalid tiler definition: Invalid margin 2147483647"));
}

#[test]
fn test_gen_config() {
    use crate::core::parse_config;
    use crate::core::ApplicationCfg;

    let toml = format!(
        "{}{}",
        <Tiler as Config<TilerCfg>>::gen_config(),
        <AxisIndex<String> as Config<AxisCfg>>::gen_config()
    );
    let config: ApplicationCfg = parse_config(toml, "").unwrap();
    assert!(Tiler::from_config(&config.tiler).is_ok());
    assert!(AxisIndex::<String>::from_config(&config.axes[0]).is_ok());
}

#[test]
fn test_axis_from_config() {
    use crate::core::read_config;
    use crate::core::ApplicationCfg;

    let config: ApplicationCfg = read_config("src/test/example.toml").unwrap();
    let level = AxisIndex::<String>::from_config(&config.axes[0]).unwrap();
    assert_eq!(level.name(), "level");
    assert_eq!(
        level.get_index(&AxisKey::Value("850".to_string())),
        Ok(AxisSelection::Single(1))
    );

    let member = AxisIndex::<String>::from_config(&config.axes[1]).unwrap();
    assert_eq!(member.serialize(&"2".to_string()).unwrap(), "002");
    assert_eq!(
        member.get_index(&AxisKey::Value("12".to_string())),
        Ok(AxisSelection::Single(2))
    );

    let cfg = AxisCfg {
        name: "member".to_string(),
        values: vec!["0".to_string(), "5".to_string(), "12".to_string()],
        serializer: Some("mem{:03d}".to_string()),
    };
    let member = AxisIndex::<String>::from_config(&cfg).unwrap();
    assert_eq!(
        member.get_index(&AxisKey::Value("5".to_string())),
        Ok(AxisSelection::Single(1))
    );
    assert_eq!(
        member.get_index(&AxisKey::Value("7".to_string())).unwrap_err().to_string(),
        "mem007, valid values: [mem000, mem005, mem012]"
    );

    let cfg = AxisCfg {
        name: "bad".to_string(),
        values: Vec::new(),
        serializer: Some("no placeholder".to_string()),
    };
    assert_eq!(
        AxisIndex::<String>::from_config(&cfg).err(),
        Some("Invalid serializer in axis bad: no placeholder".to_string())
    );
}
