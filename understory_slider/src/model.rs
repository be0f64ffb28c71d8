// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Value model: configuration plus the current value, and the pure mappings
//! between values, percentages and the step grid.
//!
//! Percentages are expressed in `0..=100` along the track. The mappings do
//! not clamp their input; [`ValueModel::percentage_to_value`] clamps its
//! output into `[min, max]`, so pointer positions outside the track naturally
//! resolve to the bounds.

use crate::{RangePair, SliderConfig, SliderValue, Thumb};

/// Largest decimal scale used to scrub floating-point noise from snapped values.
const MAX_DECIMAL_SCALE: f64 = 1e12;

/// Configuration and current value of one slider.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueModel {
    config: SliderConfig,
    value: SliderValue,
}

impl ValueModel {
    /// Creates a model holding the mode's default value.
    #[must_use]
    pub fn new(config: SliderConfig) -> Self {
        Self {
            config,
            value: default_value(&config),
        }
    }

    /// Creates a model seeded with `initial`, or the default when `None`.
    ///
    /// A supplied value is only normalized to the configured mode; it is not
    /// clamped or snapped.
    #[must_use]
    pub fn with_value(config: SliderConfig, initial: Option<SliderValue>) -> Self {
        let mut model = Self::new(config);
        model.write(initial);
        model
    }

    /// The configuration.
    #[must_use]
    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    /// The current value.
    #[must_use]
    pub fn value(&self) -> SliderValue {
        self.value
    }

    /// Value of one thumb. In single-value mode every thumb reads the scalar.
    #[must_use]
    pub fn thumb_value(&self, thumb: Thumb) -> f64 {
        self.value.get(thumb)
    }

    /// The mode's default: `min` for a scalar, `[min, max]` for a range.
    #[must_use]
    pub fn default_value(&self) -> SliderValue {
        default_value(&self.config)
    }

    /// Maps a value to its position along the track, in percent.
    #[must_use]
    pub fn value_to_percentage(&self, value: f64) -> f64 {
        (value - self.config.min()) / self.config.span() * 100.0
    }

    /// Maps a track position in percent to a snapped value in `[min, max]`.
    #[must_use]
    pub fn percentage_to_value(&self, percentage: f64) -> f64 {
        let raw = self.config.min() + percentage / 100.0 * self.config.span();
        self.snap(raw)
    }

    /// Clamps a value into `[min, max]`.
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        self.config.min().max(self.config.max().min(value))
    }

    /// Rounds a value to the nearest step relative to `min`, then clamps it.
    ///
    /// Ties round away from zero. When the step does not divide the range,
    /// `max` itself counts as a grid point so the upper bound stays
    /// reachable.
    #[must_use]
    pub fn snap(&self, value: f64) -> f64 {
        let min = self.config.min();
        let max = self.config.max();
        let step = self.config.step();

        let steps = libm::round((value - min) / step);
        let mut snapped = min + steps * step;
        if (max - value).abs() < (snapped - value).abs() {
            snapped = max;
        }

        let scale = decimal_scale(step).max(decimal_scale(min));
        if scale > 1.0 {
            snapped = libm::round(snapped * scale) / scale;
        }
        self.clamp(snapped)
    }

    /// Moves one end of `pair`, keeping `low <= high`.
    ///
    /// Thumb 0 is clamped to `<= pair.high()`, thumb 1 to `>= pair.low()`.
    #[must_use]
    pub fn apply_ordering(&self, thumb: Thumb, value: f64, pair: RangePair) -> RangePair {
        pair.with(thumb, value)
    }

    /// Converts a value to the configured mode.
    ///
    /// A scalar `v` becomes `[min, v]` in range mode; a range collapses to
    /// its low end in single-value mode. Values already in the right shape
    /// are returned unchanged.
    #[must_use]
    pub fn normalize_for_mode(&self, value: SliderValue) -> SliderValue {
        match (self.config.is_range(), value) {
            (true, SliderValue::Scalar(v)) => {
                SliderValue::Range(RangePair::new(self.config.min(), v))
            }
            (false, SliderValue::Range(pair)) => SliderValue::Scalar(pair.low()),
            (_, value) => value,
        }
    }

    /// Sets one thumb, enforcing range ordering. Returns `true` if the stored
    /// value changed.
    ///
    /// The value is stored as given; callers clamp or snap beforehand.
    pub fn set_thumb(&mut self, thumb: Thumb, value: f64) -> bool {
        let next = match self.value {
            SliderValue::Scalar(_) => SliderValue::Scalar(value),
            SliderValue::Range(pair) => {
                SliderValue::Range(self.apply_ordering(thumb, value, pair))
            }
        };
        self.replace(next)
    }

    /// Programmatic write. Returns `true` if the stored value changed.
    ///
    /// `None` resets to [`ValueModel::default_value`]. A supplied value is
    /// normalized to the configured mode but otherwise stored as-is, even if
    /// it lies outside `[min, max]` or off the step grid.
    pub fn write(&mut self, value: Option<SliderValue>) -> bool {
        let next = match value {
            Some(value) => self.normalize_for_mode(value),
            None => self.default_value(),
        };
        self.replace(next)
    }

    /// Swaps in a new configuration and re-derives the value against it.
    ///
    /// The value is normalized when the range flag changed and then clamped
    /// into the new bounds. Returns `true` if the stored value changed.
    pub fn reconfigure(&mut self, config: SliderConfig) -> bool {
        self.config = config;
        let next = match self.normalize_for_mode(self.value) {
            SliderValue::Scalar(v) => SliderValue::Scalar(self.clamp(v)),
            SliderValue::Range(pair) => SliderValue::Range(RangePair::new(
                self.clamp(pair.low()),
                self.clamp(pair.high()),
            )),
        };
        self.replace(next)
    }

    fn replace(&mut self, next: SliderValue) -> bool {
        if next == self.value {
            return false;
        }
        self.value = next;
        true
    }
}

fn default_value(config: &SliderConfig) -> SliderValue {
    if config.is_range() {
        SliderValue::Range(RangePair::new(config.min(), config.max()))
    } else {
        SliderValue::Scalar(config.min())
    }
}

/// Smallest power of ten that makes `x` integral, up to [`MAX_DECIMAL_SCALE`].
fn decimal_scale(x: f64) -> f64 {
    let mut scale = 1.0;
    while scale < MAX_DECIMAL_SCALE {
        let scaled = x * scale;
        if (scaled - libm::round(scaled)).abs() < 1e-9 {
            break;
        }
        scale *= 10.0;
    }
    scale
}
