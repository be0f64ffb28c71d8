// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_slider --heading-base-level=0

//! Understory Slider: a headless interaction engine for continuous sliders.
//!
//! This crate models a slider in single-value mode or two-thumb range mode.
//! It computes values from pointer and keyboard input, keeps the two thumbs
//! ordered, snaps to a step grid, and produces the value text assistive
//! technology announces. It does **not** render anything. Callers are
//! expected to:
//! - Forward raw pointer and key events to a [`Slider`], along with the
//!   track's device-space [`kurbo::Rect`].
//! - React to the returned [`SliderEvent`]s (value changed, touched).
//! - Re-query percentages, thumb positions, ticks and accessibility data
//!   to redraw.
//!
//! The pieces are usable on their own:
//! - [`ValueModel`]: value ↔ percentage mapping, step snapping, clamping and
//!   range ordering.
//! - [`geometry`]: pointer position ↔ track percentage for horizontal and
//!   vertical tracks.
//! - [`ticks`]: evenly spaced tick values.
//! - [`label_for`]: value text with an optional caller-supplied formatter.
//! - [`drag`]: scoped pointer capture held for the lifetime of a drag.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use understory_slider::{Slider, SliderConfig, SliderEvent, SliderKey, SliderValue, Thumb};
//!
//! let config = SliderConfig::new(0.0, 100.0, 10.0).unwrap().with_range(true);
//! let mut slider = Slider::new(config).with_value(Some(SliderValue::from([40.0, 60.0])));
//!
//! // A 200px-wide track. Clicking at 85% moves the nearest thumb.
//! let track = Rect::new(0.0, 0.0, 200.0, 20.0);
//! let event = slider.track_press(Point::new(170.0, 10.0), track);
//! assert_eq!(event, Some(SliderEvent::Changed(SliderValue::from([40.0, 90.0]))));
//!
//! // Dragging the low thumb past the high one pins it.
//! slider.thumb_down(Thumb::Lower);
//! slider.pointer_move(Point::new(500.0, 10.0), track);
//! assert_eq!(slider.value(), SliderValue::from([90.0, 90.0]));
//! assert_eq!(slider.pointer_up(), Some(SliderEvent::Touched));
//!
//! // Keyboard input on a focused thumb.
//! slider.key_down(Thumb::Lower, SliderKey::Home);
//! assert_eq!(slider.value(), SliderValue::from([0.0, 90.0]));
//! assert_eq!(slider.value_text(Thumb::Upper), "90");
//! ```
//!
//! ## Design notes
//!
//! - Configuration is validated eagerly: `min >= max` or a non-positive step
//!   is a [`ConfigError`]. Nothing on the interaction path fails; pointer
//!   positions outside the track clamp to the bounds and unknown keys are
//!   ignored.
//! - A range value is a [`RangePair`], which keeps `low <= high` by
//!   construction.
//! - Programmatic writes ([`Slider::set_value`]) are stored without clamping
//!   or snapping; only interaction clamps and snaps.
//! - While disabled, all input is ignored. Disabling during a drag ends the
//!   drag and releases the pointer capture.
//!
//! Diagnostics are emitted through `tracing` at `debug` and `trace` levels.
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod a11y;
mod config;
pub mod drag;
mod error;
pub mod geometry;
mod keyboard;
mod model;
mod slider;
pub mod ticks;
mod value;

pub use a11y::{ThumbAccessibility, ValueFormatter, label_for};
pub use config::{Orientation, SliderConfig};
pub use drag::{CaptureGuard, NoCapture, PointerCapture};
pub use error::ConfigError;
pub use keyboard::{KeyAction, PAGE_STEPS, SliderKey};
pub use model::ValueModel;
pub use slider::{InteractionState, Slider, SliderEvent};
pub use ticks::TickMark;
pub use value::{RangePair, SliderValue, Thumb};
