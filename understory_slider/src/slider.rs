// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The interaction controller: turns pointer and keyboard input into value
//! commits.
//!
//! The controller is a small state machine over `idle` and
//! `dragging(thumb)`. Every handler runs synchronously and returns at most
//! one [`SliderEvent`]:
//!
//! - [`Slider::track_press`] resolves a click on the track, picks the nearest
//!   thumb in range mode, and commits.
//! - [`Slider::thumb_down`] starts a drag and acquires the host's pointer
//!   capture; [`Slider::pointer_move`] commits on every move;
//!   [`Slider::pointer_up`] ends the drag, releases the capture and reports
//!   [`SliderEvent::Touched`].
//! - [`Slider::key_down`] applies the [`SliderKey`] table to a thumb.
//!
//! While disabled, every handler is a no-op.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use kurbo::{Point, Rect};
use tracing::{debug, trace};

use crate::a11y::{ThumbAccessibility, ValueFormatter, label_for};
use crate::drag::{DragState, NoCapture, PointerCapture};
use crate::geometry;
use crate::keyboard::{KeyAction, SliderKey};
use crate::ticks::{self, TickMark};
use crate::{SliderConfig, SliderValue, Thumb, ValueModel};

/// Notifications raised by the controller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SliderEvent {
    /// A mutation changed the stored value; carries the new value.
    Changed(SliderValue),
    /// The user finished interacting (drag end or blur), whether or not the
    /// value changed.
    Touched,
}

/// Snapshot of the controller's interaction state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct InteractionState {
    /// The thumb being dragged, if any.
    pub dragging: Option<Thumb>,
    /// The thumb that last received focus.
    pub focused: Thumb,
}

/// A headless slider: value model plus interaction state.
///
/// `C` is the host's [`PointerCapture`], used to install global pointer
/// listeners while a thumb is dragged.
pub struct Slider<C = NoCapture> {
    model: ValueModel,
    focused: Thumb,
    drag: Option<DragState>,
    disabled: bool,
    formatter: Option<Box<ValueFormatter>>,
    capture: C,
}

impl Slider<NoCapture> {
    /// Creates a slider holding the mode's default value.
    #[must_use]
    pub fn new(config: SliderConfig) -> Self {
        Self::with_capture(config, NoCapture)
    }
}

impl<C: PointerCapture> Slider<C> {
    /// Creates a slider that acquires `capture` for the duration of each drag.
    #[must_use]
    pub fn with_capture(config: SliderConfig, capture: C) -> Self {
        Self {
            model: ValueModel::new(config),
            focused: Thumb::Lower,
            drag: None,
            disabled: false,
            formatter: None,
            capture,
        }
    }

    /// Builder-style method seeding the initial value.
    ///
    /// `None` keeps the mode default. See [`Slider::set_value`].
    #[must_use]
    pub fn with_value(mut self, initial: Option<SliderValue>) -> Self {
        self.model.write(initial);
        self
    }

    /// Builder-style method setting the value-text formatter.
    #[must_use]
    pub fn with_formatter(mut self, formatter: impl Fn(f64) -> String + 'static) -> Self {
        self.set_formatter(formatter);
        self
    }

    /// The configuration.
    #[must_use]
    pub fn config(&self) -> &SliderConfig {
        self.model.config()
    }

    /// The value model.
    #[must_use]
    pub fn model(&self) -> &ValueModel {
        &self.model
    }

    /// The current value.
    #[must_use]
    pub fn value(&self) -> SliderValue {
        self.model.value()
    }

    /// Returns `true` while input is ignored.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Returns `true` while a thumb is being dragged.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Snapshot of the dragging and focused thumbs.
    #[must_use]
    pub fn interaction_state(&self) -> InteractionState {
        InteractionState {
            dragging: self.drag.as_ref().map(DragState::thumb),
            focused: self.focused,
        }
    }

    /// Thumbs present in the current mode.
    #[must_use]
    pub fn thumbs(&self) -> &'static [Thumb] {
        if self.config().is_range() {
            &[Thumb::Lower, Thumb::Upper]
        } else {
            &[Thumb::Lower]
        }
    }

    /// Enables or disables the control.
    ///
    /// Disabling during a drag aborts it: the capture is released and
    /// [`SliderEvent::Touched`] is returned.
    pub fn set_disabled(&mut self, disabled: bool) -> Option<SliderEvent> {
        if self.disabled == disabled {
            return None;
        }
        self.disabled = disabled;
        debug!(disabled, "slider disabled state changed");
        if !disabled {
            return None;
        }
        let drag = self.drag.take()?;
        debug!(thumb = drag.thumb().index(), "drag aborted by disable");
        drag.end();
        Some(SliderEvent::Touched)
    }

    /// Programmatic write.
    ///
    /// `None` resets to `min` (scalar) or `[min, max]` (range). A supplied
    /// value is converted to the configured mode and stored without
    /// snapping or clamping. Returns [`SliderEvent::Changed`] only if the
    /// stored value changed.
    pub fn set_value(&mut self, value: Option<SliderValue>) -> Option<SliderEvent> {
        if self.model.write(value) {
            Some(SliderEvent::Changed(self.model.value()))
        } else {
            None
        }
    }

    /// Replaces the configuration, re-deriving the value against it.
    ///
    /// When the range flag changes, an active drag is ended and focus moves
    /// to thumb 0. Returns [`SliderEvent::Changed`] if the value changed.
    pub fn set_config(&mut self, config: SliderConfig) -> Option<SliderEvent> {
        let mode_changed = config.is_range() != self.config().is_range();
        debug!(?config, mode_changed, "slider reconfigured");
        if mode_changed {
            if let Some(drag) = self.drag.take() {
                drag.end();
            }
            self.focused = Thumb::Lower;
        }
        if self.model.reconfigure(config) {
            Some(SliderEvent::Changed(self.model.value()))
        } else {
            None
        }
    }

    /// Sets the formatter used for value text.
    pub fn set_formatter(&mut self, formatter: impl Fn(f64) -> String + 'static) {
        self.formatter = Some(Box::new(formatter));
    }

    /// Reverts value text to the default numeric form.
    pub fn clear_formatter(&mut self) {
        self.formatter = None;
    }

    /// Handles a press on the track outside any thumb.
    ///
    /// In range mode the thumb numerically closest to the pressed value moves
    /// (ties go to thumb 0) and receives focus. Ignored while dragging.
    pub fn track_press(&mut self, pos: Point, track: Rect) -> Option<SliderEvent> {
        if self.disabled {
            trace!("track press ignored: disabled");
            return None;
        }
        if self.drag.is_some() {
            return None;
        }
        let value = self.resolve_pointer(pos, track)?;
        let thumb = match self.model.value() {
            SliderValue::Scalar(_) => Thumb::Lower,
            SliderValue::Range(pair) => {
                if (pair.low() - value).abs() <= (pair.high() - value).abs() {
                    Thumb::Lower
                } else {
                    Thumb::Upper
                }
            }
        };
        self.focused = thumb;
        self.commit(thumb, value)
    }

    /// Handles pointer-down on a thumb: starts dragging it and focuses it.
    ///
    /// Returns `false` when disabled. A drag that was never ended is released
    /// before the new one acquires the capture.
    pub fn thumb_down(&mut self, thumb: Thumb) -> bool {
        if self.disabled {
            trace!("thumb press ignored: disabled");
            return false;
        }
        let thumb = self.resolve_thumb(thumb);
        if let Some(stale) = self.drag.take() {
            stale.end();
        }
        self.drag = Some(DragState::start(thumb, &mut self.capture));
        self.focused = thumb;
        debug!(thumb = thumb.index(), "drag started");
        true
    }

    /// Handles pointer-move during a drag, committing the dragged thumb.
    ///
    /// Positions outside the track resolve to the bounds.
    pub fn pointer_move(&mut self, pos: Point, track: Rect) -> Option<SliderEvent> {
        let thumb = self.drag.as_ref()?.thumb();
        let value = self.resolve_pointer(pos, track)?;
        self.commit(thumb, value)
    }

    /// Handles pointer-up: ends the drag and releases the capture.
    ///
    /// Returns [`SliderEvent::Touched`] if a drag was active.
    pub fn pointer_up(&mut self) -> Option<SliderEvent> {
        let drag = self.drag.take()?;
        debug!(thumb = drag.thumb().index(), "drag ended");
        drag.end();
        Some(SliderEvent::Touched)
    }

    /// Moves focus to a thumb.
    pub fn focus(&mut self, thumb: Thumb) {
        if self.disabled {
            return;
        }
        self.focused = self.resolve_thumb(thumb);
    }

    /// Handles focus leaving the control.
    pub fn blur(&mut self) -> Option<SliderEvent> {
        if self.disabled {
            return None;
        }
        Some(SliderEvent::Touched)
    }

    /// Handles a key press on a focused thumb.
    ///
    /// The new value is `clamp(current ± delta)`, or `min` / `max` for
    /// `Home` / `End`; range ordering applies as for pointer input.
    pub fn key_down(&mut self, thumb: Thumb, key: SliderKey) -> Option<SliderEvent> {
        if self.disabled {
            trace!(?key, "key ignored: disabled");
            return None;
        }
        let thumb = self.resolve_thumb(thumb);
        self.focused = thumb;
        let current = self.model.thumb_value(thumb);
        let value = match key.action(self.config()) {
            KeyAction::Delta(delta) => self.model.clamp(current + delta),
            KeyAction::Set(value) => value,
        };
        self.commit(thumb, value)
    }

    /// Assistive-technology increment action; same as `ArrowRight`.
    pub fn increment(&mut self, thumb: Thumb) -> Option<SliderEvent> {
        self.key_down(thumb, SliderKey::ArrowRight)
    }

    /// Assistive-technology decrement action; same as `ArrowLeft`.
    pub fn decrement(&mut self, thumb: Thumb) -> Option<SliderEvent> {
        self.key_down(thumb, SliderKey::ArrowLeft)
    }

    /// Position of a thumb along the track, in percent.
    #[must_use]
    pub fn percentage(&self, thumb: Thumb) -> f64 {
        self.model.value_to_percentage(self.model.thumb_value(thumb))
    }

    /// Filled portion of the track as `(start, end)` percentages.
    ///
    /// For a scalar this runs from `0` to the thumb; for a range, between the
    /// thumbs.
    #[must_use]
    pub fn active_segment(&self) -> (f64, f64) {
        match self.model.value() {
            SliderValue::Scalar(v) => (0.0, self.model.value_to_percentage(v)),
            SliderValue::Range(pair) => (
                self.model.value_to_percentage(pair.low()),
                self.model.value_to_percentage(pair.high()),
            ),
        }
    }

    /// Device-space center of a thumb on the given track.
    #[must_use]
    pub fn thumb_position(&self, thumb: Thumb, track: Rect) -> Point {
        geometry::thumb_position(self.percentage(thumb), track, self.config().orientation())
    }

    /// Tick values for the configured interval.
    #[must_use]
    pub fn ticks(&self) -> Vec<f64> {
        ticks::ticks(self.config())
    }

    /// Ticks with positions and active state.
    #[must_use]
    pub fn tick_marks(&self) -> Vec<TickMark> {
        ticks::tick_marks(&self.model)
    }

    /// Text announced for a thumb's value.
    #[must_use]
    pub fn value_text(&self, thumb: Thumb) -> String {
        label_for(self.model.thumb_value(thumb), self.formatter.as_deref())
    }

    /// Everything assistive technology needs for one thumb.
    #[must_use]
    pub fn accessibility(&self, thumb: Thumb) -> ThumbAccessibility {
        let thumb = self.resolve_thumb(thumb);
        let config = self.config();
        let (value_min, value_max) = match self.model.value() {
            SliderValue::Scalar(_) => (config.min(), config.max()),
            SliderValue::Range(pair) => {
                let other = pair.get(thumb.other());
                match thumb {
                    Thumb::Lower => (config.min(), other),
                    Thumb::Upper => (other, config.max()),
                }
            }
        };
        ThumbAccessibility {
            value_now: self.model.thumb_value(thumb),
            value_min,
            value_max,
            value_text: self.value_text(thumb),
            orientation: config.orientation(),
            disabled: self.disabled,
        }
    }

    fn resolve_thumb(&self, thumb: Thumb) -> Thumb {
        if self.config().is_range() {
            thumb
        } else {
            Thumb::Lower
        }
    }

    fn resolve_pointer(&self, pos: Point, track: Rect) -> Option<f64> {
        let percentage =
            geometry::pointer_to_percentage(pos, track, self.config().orientation())?;
        Some(self.model.percentage_to_value(percentage))
    }

    fn commit(&mut self, thumb: Thumb, value: f64) -> Option<SliderEvent> {
        let old = self.model.value();
        if !self.model.set_thumb(thumb, value) {
            return None;
        }
        let new = self.model.value();
        trace!(thumb = thumb.index(), ?old, ?new, "slider value committed");
        Some(SliderEvent::Changed(new))
    }
}

impl<C> fmt::Debug for Slider<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slider")
            .field("model", &self.model)
            .field("focused", &self.focused)
            .field("drag", &self.drag)
            .field("disabled", &self.disabled)
            .field("formatter", &self.formatter.is_some())
            .finish_non_exhaustive()
    }
}
