// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag sessions and the scoped pointer-capture resource they hold.
//!
//! While a thumb is dragged the host must keep delivering pointer-move and
//! pointer-up events even after the pointer leaves the thumb, typically by
//! installing document-level listeners. The engine models that pair of
//! listeners as a [`CaptureGuard`]: the host hands one out from
//! [`PointerCapture::capture`] when a drag starts, and the guard runs its
//! release closure exactly once when the drag ends, is aborted, is replaced by
//! a new drag, or when the slider itself is dropped.
//!
//! ## Minimal example
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use understory_slider::drag::CaptureGuard;
//!
//! let installed = Rc::new(Cell::new(0));
//!
//! let counter = installed.clone();
//! counter.set(counter.get() + 1);
//! let guard = CaptureGuard::new(move || counter.set(counter.get() - 1));
//! assert_eq!(installed.get(), 1);
//!
//! drop(guard);
//! assert_eq!(installed.get(), 0);
//! ```

use alloc::boxed::Box;
use core::fmt;

use crate::Thumb;

/// Host hook that installs global pointer listeners for the duration of a drag.
///
/// Any `FnMut() -> CaptureGuard` closure implements this trait.
pub trait PointerCapture {
    /// Installs the listeners and returns the guard that removes them.
    fn capture(&mut self) -> CaptureGuard;
}

impl<F> PointerCapture for F
where
    F: FnMut() -> CaptureGuard,
{
    fn capture(&mut self) -> CaptureGuard {
        self()
    }
}

/// A [`PointerCapture`] for hosts that route pointer events without explicit
/// listener management.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoCapture;

impl PointerCapture for NoCapture {
    fn capture(&mut self) -> CaptureGuard {
        CaptureGuard::empty()
    }
}

/// Releases an installed listener pair when dropped.
#[must_use = "dropping the guard releases the capture immediately"]
pub struct CaptureGuard {
    release: Option<Box<dyn FnOnce()>>,
}

impl CaptureGuard {
    /// Creates a guard that runs `release` once, on [`CaptureGuard::release`]
    /// or drop.
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Creates a guard with nothing to release.
    pub fn empty() -> Self {
        Self { release: None }
    }

    /// Returns `true` while the release closure has not run yet.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.release.is_some()
    }

    /// Runs the release closure now.
    pub fn release(mut self) {
        self.run();
    }

    fn run(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for CaptureGuard {
    fn drop(&mut self) {
        self.run();
    }
}

impl fmt::Debug for CaptureGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CaptureGuard")
            .field("armed", &self.is_armed())
            .finish_non_exhaustive()
    }
}

/// An in-progress thumb drag.
///
/// Ending the session drops the capture guard, which releases the host's
/// listeners.
#[derive(Debug)]
pub struct DragState {
    thumb: Thumb,
    capture: CaptureGuard,
}

impl DragState {
    /// Starts a drag of `thumb`, acquiring the host's pointer capture.
    pub fn start(thumb: Thumb, host: &mut impl PointerCapture) -> Self {
        Self {
            thumb,
            capture: host.capture(),
        }
    }

    /// The thumb being dragged.
    #[must_use]
    pub fn thumb(&self) -> Thumb {
        self.thumb
    }

    /// Ends the drag and releases the capture.
    pub fn end(self) {
        self.capture.release();
    }
}

#[cfg(test)]
mod tests {
    use alloc::rc::Rc;
    use core::cell::Cell;

    use super::{CaptureGuard, DragState, NoCapture, PointerCapture};
    use crate::Thumb;

    fn counting_host(installed: &Rc<Cell<i32>>) -> impl PointerCapture + use<> {
        let installed = installed.clone();
        move || {
            installed.set(installed.get() + 1);
            let installed = installed.clone();
            CaptureGuard::new(move || installed.set(installed.get() - 1))
        }
    }

    #[test]
    fn release_runs_once() {
        let released = Rc::new(Cell::new(0));
        let counter = released.clone();
        let guard = CaptureGuard::new(move || counter.set(counter.get() + 1));
        assert!(guard.is_armed());
        guard.release();
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn drop_releases() {
        let released = Rc::new(Cell::new(false));
        let flag = released.clone();
        {
            let _guard = CaptureGuard::new(move || flag.set(true));
        }
        assert!(released.get());
    }

    #[test]
    fn empty_guard_is_not_armed() {
        assert!(!CaptureGuard::empty().is_armed());
        assert!(!NoCapture.capture().is_armed());
    }

    #[test]
    fn drag_state_pairs_acquire_and_release() {
        let installed = Rc::new(Cell::new(0));
        let mut host = counting_host(&installed);

        let drag = DragState::start(Thumb::Upper, &mut host);
        assert_eq!(drag.thumb(), Thumb::Upper);
        assert_eq!(installed.get(), 1);

        drag.end();
        assert_eq!(installed.get(), 0);
    }

    #[test]
    fn dropping_an_active_drag_releases() {
        let installed = Rc::new(Cell::new(0));
        let mut host = counting_host(&installed);

        let drag = DragState::start(Thumb::Lower, &mut host);
        assert_eq!(installed.get(), 1);
        drop(drag);
        assert_eq!(installed.get(), 0);
    }
}
