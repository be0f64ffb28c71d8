// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Value text and range metadata for assistive technology.

use alloc::format;
use alloc::string::String;

use crate::Orientation;

/// Caller-supplied value formatter.
pub type ValueFormatter = dyn Fn(f64) -> String;

/// Human-readable text for a thumb value.
///
/// Uses `formatter` when supplied, else the value's shortest round-trip
/// decimal form (`25`, `0.5`). Negative zero renders as `0`.
#[must_use]
pub fn label_for(value: f64, formatter: Option<&ValueFormatter>) -> String {
    match formatter {
        Some(formatter) => formatter(value),
        None if value == 0.0 => String::from("0"),
        None => format!("{value}"),
    }
}

/// What a thumb exposes to assistive technology.
///
/// In range mode each thumb's `value_min` / `value_max` is bounded by the
/// other thumb, mirroring how far it can actually move.
#[derive(Clone, Debug, PartialEq)]
pub struct ThumbAccessibility {
    /// Current value.
    pub value_now: f64,
    /// Lowest value this thumb can take.
    pub value_min: f64,
    /// Highest value this thumb can take.
    pub value_max: f64,
    /// Text announced for the current value.
    pub value_text: String,
    /// Track orientation.
    pub orientation: Orientation,
    /// Whether the control currently ignores input.
    pub disabled: bool,
}
