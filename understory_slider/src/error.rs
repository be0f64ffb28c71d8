// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Error returned when a [`SliderConfig`](crate::SliderConfig) would violate
/// its invariants.
///
/// All downstream percentage math assumes a non-empty, finite range and a
/// positive step, so these are rejected eagerly at construction time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// A bound, the step, or the tick interval was NaN or infinite.
    NonFinite,
    /// `min` was not strictly less than `max`.
    EmptyRange {
        /// The rejected lower bound.
        min: f64,
        /// The rejected upper bound.
        max: f64,
    },
    /// The step was zero or negative.
    NonPositiveStep(f64),
    /// The tick interval was zero or negative.
    NonPositiveTickInterval(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite => write!(f, "slider bounds, step and tick interval must be finite"),
            Self::EmptyRange { min, max } => {
                write!(f, "slider min ({min}) must be less than max ({max})")
            }
            Self::NonPositiveStep(step) => write!(f, "slider step must be positive, got {step}"),
            Self::NonPositiveTickInterval(interval) => {
                write!(f, "slider tick interval must be positive, got {interval}")
            }
        }
    }
}

impl core::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::ConfigError;

    #[test]
    fn display_names_the_offending_values() {
        let err = ConfigError::EmptyRange {
            min: 10.0,
            max: 10.0,
        };
        assert_eq!(err.to_string(), "slider min (10) must be less than max (10)");
        assert_eq!(
            ConfigError::NonPositiveStep(-1.0).to_string(),
            "slider step must be positive, got -1"
        );
    }
}
