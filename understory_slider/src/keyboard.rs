// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::SliderConfig;

/// Multiplier applied to `step` for page-sized jumps.
pub const PAGE_STEPS: f64 = 10.0;

/// Keys the slider responds to while a thumb has focus.
///
/// | Key | Effect |
/// |---|---|
/// | `ArrowRight` / `ArrowUp` | `+ step` |
/// | `ArrowLeft` / `ArrowDown` | `- step` |
/// | `PageUp` | `+ step * 10` |
/// | `PageDown` | `- step * 10` |
/// | `Home` | set to `min` |
/// | `End` | set to `max` |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SliderKey {
    /// Increase by one step.
    ArrowRight,
    /// Increase by one step.
    ArrowUp,
    /// Decrease by one step.
    ArrowLeft,
    /// Decrease by one step.
    ArrowDown,
    /// Increase by ten steps.
    PageUp,
    /// Decrease by ten steps.
    PageDown,
    /// Jump to `min`.
    Home,
    /// Jump to `max`.
    End,
}

/// What a key does to the focused thumb's value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum KeyAction {
    /// Add a (possibly negative) delta to the current value.
    Delta(f64),
    /// Replace the current value.
    Set(f64),
}

impl SliderKey {
    /// Parses a DOM-style key name such as `"ArrowUp"` or `"PageDown"`.
    ///
    /// Anything outside the table returns `None`; callers treat that as a no-op.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "ArrowRight" => Self::ArrowRight,
            "ArrowUp" => Self::ArrowUp,
            "ArrowLeft" => Self::ArrowLeft,
            "ArrowDown" => Self::ArrowDown,
            "PageUp" => Self::PageUp,
            "PageDown" => Self::PageDown,
            "Home" => Self::Home,
            "End" => Self::End,
            _ => return None,
        })
    }

    /// Resolves the key against a configuration.
    #[must_use]
    pub fn action(self, config: &SliderConfig) -> KeyAction {
        let step = config.step();
        match self {
            Self::ArrowRight | Self::ArrowUp => KeyAction::Delta(step),
            Self::ArrowLeft | Self::ArrowDown => KeyAction::Delta(-step),
            Self::PageUp => KeyAction::Delta(step * PAGE_STEPS),
            Self::PageDown => KeyAction::Delta(-step * PAGE_STEPS),
            Self::Home => KeyAction::Set(config.min()),
            Self::End => KeyAction::Set(config.max()),
        }
    }
}
