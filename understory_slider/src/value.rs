// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// One of the slider's draggable handles.
///
/// In single-value mode only [`Thumb::Lower`] exists; references to
/// [`Thumb::Upper`] resolve to it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub enum Thumb {
    /// Thumb 0: the single thumb, or the low end of a range.
    #[default]
    Lower,
    /// Thumb 1: the high end of a range.
    Upper,
}

impl Thumb {
    /// Returns the thumb's index (`0` or `1`).
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Lower => 0,
            Self::Upper => 1,
        }
    }

    /// Returns the other thumb of a range.
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Self::Lower => Self::Upper,
            Self::Upper => Self::Lower,
        }
    }
}

/// An ordered `[low, high]` pair.
///
/// The `low <= high` invariant holds by construction: [`RangePair::new`]
/// orders its inputs, and [`RangePair::with`] clamps the moved end against the
/// other one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RangePair {
    low: f64,
    high: f64,
}

impl RangePair {
    /// Creates a pair from two ends in either order.
    #[must_use]
    pub fn new(a: f64, b: f64) -> Self {
        if b < a {
            Self { low: b, high: a }
        } else {
            Self { low: a, high: b }
        }
    }

    /// Value of thumb 0.
    #[must_use]
    pub fn low(&self) -> f64 {
        self.low
    }

    /// Value of thumb 1.
    #[must_use]
    pub fn high(&self) -> f64 {
        self.high
    }

    /// Value of the given thumb.
    #[must_use]
    pub fn get(&self, thumb: Thumb) -> f64 {
        match thumb {
            Thumb::Lower => self.low,
            Thumb::Upper => self.high,
        }
    }

    /// Moves one end, clamping it so it never crosses the other.
    ///
    /// Thumb 0 is limited to `<= high` and thumb 1 to `>= low`.
    #[must_use]
    pub fn with(self, thumb: Thumb, value: f64) -> Self {
        match thumb {
            Thumb::Lower => Self {
                low: value.min(self.high),
                high: self.high,
            },
            Thumb::Upper => Self {
                low: self.low,
                high: value.max(self.low),
            },
        }
    }
}

/// The slider's current value: a scalar, or an ordered pair in range mode.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SliderValue {
    /// Single-value mode.
    Scalar(f64),
    /// Range mode.
    Range(RangePair),
}

impl SliderValue {
    /// Returns `true` for the range variant.
    #[must_use]
    pub fn is_range(&self) -> bool {
        matches!(self, Self::Range(_))
    }

    /// Value of the given thumb. A scalar answers for either thumb.
    #[must_use]
    pub fn get(&self, thumb: Thumb) -> f64 {
        match self {
            Self::Scalar(v) => *v,
            Self::Range(pair) => pair.get(thumb),
        }
    }

    /// Returns the scalar, or `None` in range mode.
    #[must_use]
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Self::Scalar(v) => Some(*v),
            Self::Range(_) => None,
        }
    }

    /// Returns the pair, or `None` in single-value mode.
    #[must_use]
    pub fn as_range(&self) -> Option<RangePair> {
        match self {
            Self::Scalar(_) => None,
            Self::Range(pair) => Some(*pair),
        }
    }
}

impl From<f64> for SliderValue {
    fn from(value: f64) -> Self {
        Self::Scalar(value)
    }
}

impl From<RangePair> for SliderValue {
    fn from(pair: RangePair) -> Self {
        Self::Range(pair)
    }
}

impl From<(f64, f64)> for SliderValue {
    fn from((a, b): (f64, f64)) -> Self {
        Self::Range(RangePair::new(a, b))
    }
}

impl From<[f64; 2]> for SliderValue {
    fn from([a, b]: [f64; 2]) -> Self {
        Self::Range(RangePair::new(a, b))
    }
}
