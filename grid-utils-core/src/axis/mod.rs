//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Named axes with value to position lookup

mod axis_index;
mod serializer;

pub use self::axis_index::{AxisBound, AxisIndex, AxisKey, AxisSelection, AxisValues};
pub use self::serializer::{PrintfSpec, Serializer};

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AxisError {
    /// Value not present on the axis
    #[error("{key}, valid values: [{}]", .valid.join(", "))]
    KeyNotFound { key: String, valid: Vec<String> },

    /// Format pattern with neither a `{}` placeholder nor a `%` directive
    #[error("Invalid serializer: {0}")]
    InvalidSerializer(String),

    /// Value not matching the serializer format
    #[error("Cannot serialize '{value}': {reason}")]
    Serialize { value: String, reason: String },

    /// Unparsable raw value
    #[error("Cannot parse '{value}': {reason}")]
    Parse { value: String, reason: String },
}
