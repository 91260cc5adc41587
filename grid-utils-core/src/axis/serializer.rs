//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Value to lookup key conversion

use crate::axis::AxisError;
use regex::Regex;
use std::fmt;

/// printf style directive
#[derive(PartialEq, Clone, Debug)]
pub struct PrintfSpec {
    zero_pad: bool,
    width: usize,
    precision: Option<usize>,
    conversion: char,
}

impl PrintfSpec {
    /// Directive body like `03d` or `.2f`, without the leading `%` or `:`
    pub fn parse(spec: &str) -> Option<PrintfSpec> {
        let re = Regex::new(r"^(0?)(\d*)(?:\.(\d+))?([sdf])$").unwrap();
        let caps = re.captures(spec)?;
        Some(PrintfSpec {
            zero_pad: &caps[1] == "0",
            width: caps[2].parse::<usize>().unwrap_or(0),
            precision: caps.get(3).and_then(|p| p.as_str().parse::<usize>().ok()),
            conversion: caps[4].chars().next().unwrap_or('s'),
        })
    }

    fn format(&self, value: &str) -> Result<String, AxisError> {
        let w = self.width;
        match self.conversion {
            'd' => {
                let n: i64 = value.trim().parse().map_err(|_| AxisError::Serialize {
                    value: value.to_string(),
                    reason: "integer expected".to_string(),
                })?;
                Ok(if self.zero_pad {
                    format!("{:0w$}", n, w = w)
                } else {
                    format!("{:>w$}", n, w = w)
                })
            }
            'f' => {
                let f: f64 = value.trim().parse().map_err(|_| AxisError::Serialize {
                    value: value.to_string(),
                    reason: "number expected".to_string(),
                })?;
                let p = self.precision.unwrap_or(6);
                Ok(if self.zero_pad {
                    format!("{:0w$.p$}", f, w = w, p = p)
                } else {
                    format!("{:>w$.p$}", f, w = w, p = p)
                })
            }
            _ => Ok(format!("{:>w$}", value, w = w)),
        }
    }
}

/// Conversion of axis values into the strings used as lookup keys
pub enum Serializer<T> {
    /// `Display` representation
    Display,
    /// Text around a single `{}` or `{name}` placeholder, optionally with a
    /// `:[0][width][.precision](d|f|s)` format spec
    Template {
        prefix: String,
        spec: Option<PrintfSpec>,
        suffix: String,
    },
    /// Text around a single `%s`, `%d` or `%f` directive with optional width and precision
    Printf {
        prefix: String,
        spec: PrintfSpec,
        suffix: String,
    },
    Custom(Box<dyn Fn(&T) -> String>),
}

impl<T> Serializer<T> {
    /// Serializer from a format pattern like `"{}hPa"` or `"%03d"`
    pub fn from_pattern(pattern: &str) -> Result<Serializer<T>, AxisError> {
        let invalid = || AxisError::InvalidSerializer(pattern.to_string());
        let template = Regex::new(r"^([^{}]*)\{\w*(?::([^{}]*))?\}([^{}]*)$").unwrap();
        if let Some(caps) = template.captures(pattern) {
            let spec = match caps.get(2).map(|m| m.as_str()) {
                None | Some("") => None,
                Some(spec) => Some(PrintfSpec::parse(spec).ok_or_else(invalid)?),
            };
            return Ok(Serializer::Template {
                prefix: caps[1].to_string(),
                spec,
                suffix: caps[3].to_string(),
            });
        }
        let printf = Regex::new(r"^([^%]*)%(0?\d*(?:\.\d+)?[sdf])([^%]*)$").unwrap();
        if let Some(caps) = printf.captures(pattern) {
            return Ok(Serializer::Printf {
                prefix: caps[1].to_string(),
                spec: PrintfSpec::parse(&caps[2]).ok_or_else(invalid)?,
                suffix: caps[3].to_string(),
            });
        }
        Err(invalid())
    }

    pub fn custom<F>(f: F) -> Serializer<T>
    where
        F: Fn(&T) -> String + 'static,
    {
        Serializer::Custom(Box::new(f))
    }
}

impl<T: fmt::Display> Serializer<T> {
    pub fn serialize(&self, value: &T) -> Result<String, AxisError> {
        match self {
            Serializer::Display => Ok(value.to_string()),
            Serializer::Template {
                prefix,
                spec: None,
                suffix,
            } => Ok(format!("{}{}{}", prefix, value, suffix)),
            Serializer::Template {
                prefix,
                spec: Some(spec),
                suffix,
            } => Ok(format!(
                "{}{}{}",
                prefix,
                spec.format(&value.to_string())?,
                suffix
            )),
            Serializer::Printf {
                prefix,
                spec,
                suffix,
            } => Ok(format!(
                "{}{}{}",
                prefix,
                spec.format(&value.to_string())?,
                suffix
            )),
            Serializer::Custom(f) => Ok(f(value)),
        }
    }
}

impl<T> Default for Serializer<T> {
    fn default() -> Serializer<T> {
        Serializer::Display
    }
}

impl<T> fmt::Debug for Serializer<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Serializer::Display => write!(f, "Display"),
            Serializer::Template {
                prefix,
                spec: None,
                suffix,
            } => write!(f, "Template({}{{}}{})", prefix, suffix),
            Serializer::Template {
                prefix,
                spec: Some(spec),
                suffix,
            } => write!(f, "Template({}{{{:?}}}{})", prefix, spec, suffix),
            Serializer::Printf {
                prefix,
                spec,
                suffix,
            } => write!(f, "Printf({}{:?}{})", prefix, spec, suffix),
            Serializer::Custom(_) => write!(f, "Custom"),
        }
    }
}

#[test]
fn test_template() {
    let s: Serializer<u32> = Serializer::from_pattern("{}hPa").unwrap();
    assert_eq!(s.serialize(&850).unwrap(), "850hPa");
    let s: Serializer<&str> = Serializer::from_pattern("lev_{level}_x").unwrap();
    assert_eq!(s.serialize(&"3").unwrap(), "lev_3_x");
}

#[test]
fn test_template_format_spec() {
    let s: Serializer<u32> = Serializer::from_pattern("{:03d}").unwrap();
    assert_eq!(s.serialize(&5).unwrap(), "005");
    let s: Serializer<f64> = Serializer::from_pattern("{:.2f}").unwrap();
    assert_eq!(s.serialize(&2.5).unwrap(), "2.50");
    let s: Serializer<i32> = Serializer::from_pattern("m{member:4d}").unwrap();
    assert_eq!(s.serialize(&-7).unwrap(), "m  -7");
    let s: Serializer<u32> = Serializer::from_pattern("{:}hPa").unwrap();
    assert_eq!(s.serialize(&850).unwrap(), "850hPa");

    // Unsupported format specs are rejected, not ignored
    assert_eq!(
        Serializer::<u32>::from_pattern("{:>5}").unwrap_err(),
        AxisError::InvalidSerializer("{:>5}".to_string())
    );
    assert!(Serializer::<u32>::from_pattern("{:x}").is_err());
    assert!(Serializer::<u32>::from_pattern("{:,d}").is_err());
}

#[test]
fn test_printf() {
    let s: Serializer<u32> = Serializer::from_pattern("%04d").unwrap();
    assert_eq!(s.serialize(&85).unwrap(), "0085");
    let s: Serializer<i32> = Serializer::from_pattern("t%3d").unwrap();
    assert_eq!(s.serialize(&-5).unwrap(), "t -5");
    let s: Serializer<f64> = Serializer::from_pattern("%.2f m").unwrap();
    assert_eq!(s.serialize(&2.5).unwrap(), "2.50 m");
    let s: Serializer<f64> = Serializer::from_pattern("%f").unwrap();
    assert_eq!(s.serialize(&0.25).unwrap(), "0.250000");
    let s: Serializer<&str> = Serializer::from_pattern("<%s>").unwrap();
    assert_eq!(s.serialize(&"abc").unwrap(), "<abc>");
    let s: Serializer<&str> = Serializer::from_pattern("%d").unwrap();
    assert!(s.serialize(&"abc").is_err());
}

#[test]
fn test_invalid_pattern() {
    assert!(Serializer::<u32>::from_pattern("plain").is_err());
    assert!(Serializer::<u32>::from_pattern("{}{}").is_err());
    assert!(Serializer::<u32>::from_pattern("%d%d").is_err());
}

#[test]
fn test_custom() {
    let s = Serializer::custom(|v: &u32| format!("{:x}", v));
    assert_eq!(s.serialize(&255).unwrap(), "ff");
    assert_eq!(format!("{:?}", s), "Custom");
}
