// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mapping between device-space pointer coordinates and track percentages.
//!
//! Nothing here clamps. A pointer outside the track yields a percentage
//! outside `0..=100`; [`ValueModel`](crate::ValueModel) owns clamping.

use kurbo::{Point, Rect};

use crate::Orientation;

/// Resolves a pointer position to a percentage along the track.
///
/// - Horizontal: `(x - left) / width * 100`.
/// - Vertical: `(bottom - y) / height * 100`, so moving up increases the value.
///
/// Returns `None` when the track has no extent along its axis.
#[must_use]
pub fn pointer_to_percentage(pos: Point, track: Rect, orientation: Orientation) -> Option<f64> {
    match orientation {
        Orientation::Horizontal => {
            let width = track.width();
            (width > 0.0).then(|| (pos.x - track.x0) / width * 100.0)
        }
        Orientation::Vertical => {
            let height = track.height();
            (height > 0.0).then(|| (track.y1 - pos.y) / height * 100.0)
        }
    }
}

/// Distance in device pixels from the track's top-left edge to the point at
/// `percentage` along the track axis.
///
/// For a vertical track `0%` is at the bottom, so the offset measured from
/// the top shrinks as the percentage grows.
#[must_use]
pub fn percentage_to_offset(percentage: f64, track: Rect, orientation: Orientation) -> f64 {
    let fraction = percentage / 100.0;
    match orientation {
        Orientation::Horizontal => fraction * track.width(),
        Orientation::Vertical => (1.0 - fraction) * track.height(),
    }
}

/// Device-space center of a thumb at `percentage`, on the track's center line.
#[must_use]
pub fn thumb_position(percentage: f64, track: Rect, orientation: Orientation) -> Point {
    let offset = percentage_to_offset(percentage, track, orientation);
    let center = track.center();
    match orientation {
        Orientation::Horizontal => Point::new(track.x0 + offset, center.y),
        Orientation::Vertical => Point::new(center.x, track.y0 + offset),
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect};

    use super::{percentage_to_offset, pointer_to_percentage, thumb_position};
    use crate::Orientation;

    #[test]
    fn horizontal_is_measured_from_the_left() {
        let track = Rect::new(100.0, 0.0, 300.0, 20.0);
        let p = pointer_to_percentage(Point::new(150.0, 10.0), track, Orientation::Horizontal);
        assert_eq!(p, Some(25.0));
    }

    #[test]
    fn vertical_is_measured_from_the_bottom() {
        let track = Rect::new(0.0, 50.0, 20.0, 150.0);
        let p = pointer_to_percentage(
            Point::new(10.0, track.y1 - 25.0),
            track,
            Orientation::Vertical,
        );
        assert_eq!(p, Some(25.0));
    }

    #[test]
    fn positions_outside_the_track_are_not_clamped() {
        let track = Rect::new(0.0, 0.0, 200.0, 10.0);
        assert_eq!(
            pointer_to_percentage(Point::new(-50.0, 500.0), track, Orientation::Horizontal),
            Some(-25.0)
        );
        assert_eq!(
            pointer_to_percentage(Point::new(300.0, 0.0), track, Orientation::Horizontal),
            Some(150.0)
        );
    }

    #[test]
    fn degenerate_track_has_no_percentage() {
        let track = Rect::new(10.0, 0.0, 10.0, 100.0);
        assert_eq!(
            pointer_to_percentage(Point::new(10.0, 5.0), track, Orientation::Horizontal),
            None
        );
        // The vertical axis is still usable.
        assert_eq!(
            pointer_to_percentage(Point::new(10.0, 50.0), track, Orientation::Vertical),
            Some(50.0)
        );
    }

    #[test]
    fn offset_inverts_the_pointer_mapping() {
        let track = Rect::new(20.0, 40.0, 220.0, 240.0);
        for orientation in [Orientation::Horizontal, Orientation::Vertical] {
            let pos = thumb_position(30.0, track, orientation);
            let back = pointer_to_percentage(pos, track, orientation).unwrap();
            assert!((back - 30.0).abs() < 1e-9, "{orientation:?}: {back}");
        }
        assert_eq!(percentage_to_offset(25.0, track, Orientation::Horizontal), 50.0);
        assert_eq!(percentage_to_offset(25.0, track, Orientation::Vertical), 150.0);
    }
}
