// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::ConfigError;

/// Axis along which the track runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Orientation {
    /// The track runs left to right; `min` is at the left edge.
    #[default]
    Horizontal,
    /// The track runs bottom to top; `min` is at the bottom edge.
    ///
    /// This is visually inverted relative to device coordinates, where `y`
    /// grows downward.
    Vertical,
}

/// Immutable slider configuration.
///
/// A valid configuration always has finite bounds with `min < max` and a
/// positive, finite `step`. Changing any of these means building a new
/// configuration and handing it to
/// [`Slider::set_config`](crate::Slider::set_config), which re-derives the
/// current value against the new bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderConfig {
    min: f64,
    max: f64,
    step: f64,
    range: bool,
    orientation: Orientation,
    tick_interval: Option<f64>,
}

impl SliderConfig {
    /// Creates a horizontal, single-value configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when any input is not finite, when
    /// `min >= max`, or when `step <= 0`.
    pub fn new(min: f64, max: f64, step: f64) -> Result<Self, ConfigError> {
        if !(min.is_finite() && max.is_finite() && step.is_finite()) {
            return Err(ConfigError::NonFinite);
        }
        if min >= max {
            return Err(ConfigError::EmptyRange { min, max });
        }
        if step <= 0.0 {
            return Err(ConfigError::NonPositiveStep(step));
        }
        Ok(Self {
            min,
            max,
            step,
            range: false,
            orientation: Orientation::Horizontal,
            tick_interval: None,
        })
    }

    /// Builder-style method selecting range (two-thumb) mode.
    #[must_use]
    pub fn with_range(mut self, range: bool) -> Self {
        self.range = range;
        self
    }

    /// Builder-style method setting the track orientation.
    #[must_use]
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Builder-style method setting the spacing between tick marks.
    ///
    /// Without an explicit interval, ticks are spaced by `step`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `interval` is not finite or not positive.
    pub fn with_tick_interval(mut self, interval: f64) -> Result<Self, ConfigError> {
        if !interval.is_finite() {
            return Err(ConfigError::NonFinite);
        }
        if interval <= 0.0 {
            return Err(ConfigError::NonPositiveTickInterval(interval));
        }
        self.tick_interval = Some(interval);
        Ok(self)
    }

    /// Lower bound of the value range.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound of the value range.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Snapping increment, relative to `min`.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Width of the value range, `max - min`. Always positive.
    #[must_use]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Returns `true` in two-thumb range mode.
    #[must_use]
    pub fn is_range(&self) -> bool {
        self.range
    }

    /// Track orientation.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Spacing between tick marks, falling back to `step`.
    #[must_use]
    pub fn tick_interval(&self) -> f64 {
        self.tick_interval.unwrap_or(self.step)
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, Orientation, SliderConfig};

    #[test]
    fn rejects_empty_and_inverted_ranges() {
        assert_eq!(
            SliderConfig::new(5.0, 5.0, 1.0),
            Err(ConfigError::EmptyRange { min: 5.0, max: 5.0 })
        );
        assert_eq!(
            SliderConfig::new(10.0, 0.0, 1.0),
            Err(ConfigError::EmptyRange {
                min: 10.0,
                max: 0.0
            })
        );
    }

    #[test]
    fn rejects_non_positive_step() {
        assert_eq!(
            SliderConfig::new(0.0, 1.0, 0.0),
            Err(ConfigError::NonPositiveStep(0.0))
        );
        assert_eq!(
            SliderConfig::new(0.0, 1.0, -0.5),
            Err(ConfigError::NonPositiveStep(-0.5))
        );
    }

    #[test]
    fn rejects_non_finite_inputs() {
        assert_eq!(
            SliderConfig::new(f64::NAN, 1.0, 0.1),
            Err(ConfigError::NonFinite)
        );
        assert_eq!(
            SliderConfig::new(0.0, f64::INFINITY, 0.1),
            Err(ConfigError::NonFinite)
        );
        let cfg = SliderConfig::new(0.0, 1.0, 0.1).unwrap();
        assert_eq!(cfg.with_tick_interval(f64::NAN), Err(ConfigError::NonFinite));
        assert_eq!(
            cfg.with_tick_interval(0.0),
            Err(ConfigError::NonPositiveTickInterval(0.0))
        );
    }

    #[test]
    fn defaults_and_builders() {
        let cfg = SliderConfig::new(-10.0, 10.0, 2.0).unwrap();
        assert!(!cfg.is_range());
        assert_eq!(cfg.orientation(), Orientation::Horizontal);
        assert_eq!(cfg.tick_interval(), 2.0);
        assert_eq!(cfg.span(), 20.0);

        let cfg = cfg
            .with_range(true)
            .with_orientation(Orientation::Vertical)
            .with_tick_interval(5.0)
            .unwrap();
        assert!(cfg.is_range());
        assert_eq!(cfg.orientation(), Orientation::Vertical);
        assert_eq!(cfg.tick_interval(), 5.0);
    }
}
