// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick generation for rendering guides along the track.

use alloc::vec;
use alloc::vec::Vec;

use crate::{SliderConfig, SliderValue, ValueModel};

/// Tolerance, in intervals, for deciding that the last tick landed on `max`.
const TICK_EPSILON: f64 = 1e-9;

/// Largest number of intervals [`ticks`] will lay out.
///
/// Past this, the guides would be denser than any track can draw, so only
/// the two bounds are returned.
pub const MAX_TICK_INTERVALS: usize = 10_000;

/// Evenly spaced marker values from `min` to `max` inclusive.
///
/// Ticks are spaced by [`SliderConfig::tick_interval`]. Each tick is computed
/// from its index rather than accumulated, so long sequences do not drift.
/// When the interval does not divide the range, `max` is appended as the
/// final tick. When the range holds more than [`MAX_TICK_INTERVALS`]
/// intervals, the result is just `[min, max]`.
#[must_use]
pub fn ticks(config: &SliderConfig) -> Vec<f64> {
    let min = config.min();
    let max = config.max();
    let interval = config.tick_interval();

    let intervals = libm::floor(config.span() / interval + TICK_EPSILON);
    if intervals > MAX_TICK_INTERVALS as f64 {
        return vec![min, max];
    }
    #[expect(
        clippy::cast_possible_truncation,
        reason = "checked against MAX_TICK_INTERVALS above"
    )]
    let count = intervals as usize;
    let mut out = Vec::with_capacity(count + 2);
    out.extend((0..=count).map(|i| (min + i as f64 * interval).min(max)));
    if out
        .last()
        .is_some_and(|&last| max - last > interval * TICK_EPSILON)
    {
        out.push(max);
    }
    out
}

/// A tick annotated for rendering.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickMark {
    /// The tick's value.
    pub value: f64,
    /// Position along the track, in percent.
    pub percentage: f64,
    /// Whether the tick lies inside the filled part of the track.
    ///
    /// For a scalar this is `[min, value]`; for a range it is `[low, high]`.
    pub active: bool,
}

/// [`ticks`] paired with their track positions and active state.
#[must_use]
pub fn tick_marks(model: &ValueModel) -> Vec<TickMark> {
    let (start, end) = match model.value() {
        SliderValue::Scalar(v) => (model.config().min(), v),
        SliderValue::Range(pair) => (pair.low(), pair.high()),
    };
    ticks(model.config())
        .into_iter()
        .map(|value| TickMark {
            value,
            percentage: model.value_to_percentage(value),
            active: value >= start && value <= end,
        })
        .collect()
}
