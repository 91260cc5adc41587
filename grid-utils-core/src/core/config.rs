//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use regex::Regex;
use serde::Deserialize;
use std;
use std::collections::HashMap;
use std::env;
use std::error::Error;
use std::fs::File;
use std::io::prelude::*;
use tera::{Context, Tera};
use toml::Value;

pub trait Config<'a, C: Deserialize<'a>>
where
    Self: std::marker::Sized,
{
    /// Read configuration
    fn from_config(config: &C) -> Result<Self, String>;
    /// Generate configuration template
    fn gen_config() -> String;
}

#[derive(Deserialize, Clone, Debug)]
pub struct ApplicationCfg {
    pub tiler: TilerCfg,
    #[serde(rename = "axis", default)]
    pub axes: Vec<AxisCfg>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct TilerCfg {
    /// Extent of a tile along x and y, in coordinate units
    pub x_size: f64,
    pub y_size: f64,
    /// Number of pixels per tile along x and y
    pub nx: u32,
    pub ny: u32,
    /// Coordinate of the lower left corner of tile (0, 0)
    #[serde(default)]
    pub x0: f64,
    #[serde(default)]
    pub y0: f64,
    /// Halo width in pixels
    #[serde(default)]
    pub margin: u32,
}

#[derive(Deserialize, Clone, Debug)]
pub struct AxisCfg {
    pub name: String,
    pub values: Vec<String>,
    /// Value format, either with a `{}` placeholder or a printf style `%` directive
    pub serializer: Option<String>,
}

impl ApplicationCfg {
    /// Axis configuration by name
    pub fn axis(&self, name: &str) -> Option<&AxisCfg> {
        self.axes.iter().find(|axis| axis.name == name)
    }
}

pub const DEFAULT_CONFIG: &'static str = r#"
[tiler]
x_size = 1.0
y_size = 1.0
nx = 256
ny = 256
x0 = 0.0
y0 = 0.0
margin = 0
"#;

/// Load and parse the config file into an config struct.
pub fn read_config<'a, T: Deserialize<'a>>(path: &str) -> Result<T, String> {
    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(_) => {
            return Err("Could not find config file!".to_string());
        }
    };
    let mut config_toml = String::new();
    if let Err(err) = file.read_to_string(&mut config_toml) {
        return Err(format!("Error while reading config: [{}]", err));
    };

    parse_config(config_toml, path)
}

/// Parse the configuration into an config struct.
pub fn parse_config<'a, T: Deserialize<'a>>(config_toml: String, path: &str) -> Result<T, String> {
    // Check for old ${var} expressions
    let re = Regex::new(r"\$\{([[:alnum:]]+)\}").unwrap();
    if re.is_match(&config_toml) {
        return Err(
            "Replace old environment variable syntax ${VARNAME} with `{{env.VARNAME}}`".to_string(),
        );
    }

    // Parse template
    let mut tera = Tera::default();
    tera.add_raw_template(path, &config_toml)
        .map_err(|e| format!("Template error: {}", e))?;
    let mut context = Context::new();
    let mut env = HashMap::new();
    for (key, value) in env::vars() {
        env.insert(key, value);
    }
    context.insert("env", &env);
    let toml = tera.render(path, &context).map_err(|e| match e.source() {
        Some(source) => format!("Template error: {}", source),
        None => format!("Template error: {}", e),
    })?;
    debug!("Parsing configuration {}", path);

    toml.parse::<Value>()
        .and_then(|cfg| cfg.try_into::<T>())
        .map_err(|err| format!("{} - {}", path, err))
}
