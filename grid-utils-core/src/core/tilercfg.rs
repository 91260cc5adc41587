//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::config::TilerCfg;
use crate::core::Config;
use xy_tiler::Tiler;

impl<'a> Config<'a, TilerCfg> for Tiler {
    fn from_config(tiler_cfg: &TilerCfg) -> Result<Self, String> {
        let tiler = Tiler::new(
            tiler_cfg.x_size,
            tiler_cfg.y_size,
            tiler_cfg.nx,
            tiler_cfg.ny,
        )
        .and_then(|tiler| tiler.with_origin(tiler_cfg.x0, tiler_cfg.y0))
        .and_then(|tiler| tiler.with_margin(tiler_cfg.margin))
        .map_err(|e| format!("Invalid tiler definition: {}", e))?;
        info!("Using tiler {}", tiler);
        Ok(tiler)
    }
    fn gen_config() -> String {
        let toml = r#"
[tiler]
# Extent of one tile in coordinate units
x_size = 1.0
y_size = 1.0
# Pixels per tile
nx = 256
ny = 256
# Lower left corner of tile (0, 0)
x0 = 0.0
y0 = 0.0
# Halo pixels replicated from neighbouring tiles
margin = 0
"#;
        toml.to_string()
    }
}
