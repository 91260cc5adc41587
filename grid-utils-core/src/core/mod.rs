//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

pub mod axiscfg;
pub mod config;
pub mod report;
pub mod tilercfg;

pub use self::config::{parse_config, read_config, ApplicationCfg, Config};

#[cfg(test)]
mod config_test;
#[cfg(test)]
mod report_test;
#[cfg(test)]
mod tilercfg_test;
