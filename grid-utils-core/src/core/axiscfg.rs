//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::axis::{AxisIndex, Serializer};
use crate::core::config::AxisCfg;
use crate::core::Config;

impl<'a> Config<'a, AxisCfg> for AxisIndex<String> {
    fn from_config(axis_cfg: &AxisCfg) -> Result<Self, String> {
        if axis_cfg.name.is_empty() {
            return Err("Axis without name".to_string());
        }
        let axis = AxisIndex::new(&axis_cfg.name, axis_cfg.values.clone());
        match axis_cfg.serializer {
            Some(ref pattern) => {
                let serializer = Serializer::from_pattern(pattern).map_err(|_| {
                    format!(
                        "Invalid serializer in axis {}: {}",
                        axis_cfg.name, pattern
                    )
                })?;
                Ok(axis.with_serializer(serializer))
            }
            None => Ok(axis),
        }
    }
    fn gen_config() -> String {
        let toml = r#"
[[axis]]
name = "level"
values = ["500", "850", "1000"]
# Optional value format, e.g. "{}hPa" or "%04d"
#serializer = "{}hPa"
"#;
        toml.to_string()
    }
}
