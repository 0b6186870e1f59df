// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag state helper: incremental movement deltas for an active drag.
//!
//! A [`DragState`] only exists while a drag is in progress, so callers model
//! "not dragging" as the absence of a value (for example `Option<DragState>`
//! or a variant of their own gesture enum) rather than as a flag.
//!
//! ## Usage
//!
//! 1) Create the state with [`DragState::new`] at the press position.
//! 2) On each move event, call [`DragState::advance`] to get the movement
//!    since the previous position.
//! 3) Optionally call [`DragState::total_offset`] for the cumulative offset.
//! 4) Drop the state when the drag ends.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use understory_event_state::drag::DragState;
//!
//! let mut drag = DragState::new(Point::new(10.0, 20.0));
//!
//! // Move to (15, 25): delta is (5, 5).
//! assert_eq!(drag.advance(Point::new(15.0, 25.0)), Vec2::new(5.0, 5.0));
//!
//! // Move to (20, 22): delta is (5, -3), total offset from the press is (10, 2).
//! assert_eq!(drag.advance(Point::new(20.0, 22.0)), Vec2::new(5.0, -3.0));
//! assert_eq!(drag.total_offset(), Vec2::new(10.0, 2.0));
//! ```

use kurbo::{Point, Vec2};

/// An in-progress drag: where it started and where the pointer was last seen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragState {
    origin: Point,
    last: Point,
}

impl DragState {
    /// Starts a drag at `at`.
    #[must_use]
    pub fn new(at: Point) -> Self {
        Self {
            origin: at,
            last: at,
        }
    }

    /// Position at which the drag started.
    #[must_use]
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Last recorded pointer position.
    #[must_use]
    pub fn last(&self) -> Point {
        self.last
    }

    /// Records a new pointer position and returns the movement since the
    /// previous one.
    pub fn advance(&mut self, to: Point) -> Vec2 {
        let delta = to - self.last;
        self.last = to;
        delta
    }

    /// Cumulative offset from the drag origin to the last recorded position.
    #[must_use]
    pub fn total_offset(&self) -> Vec2 {
        self.last - self.origin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_drag_has_no_offset() {
        let drag = DragState::new(Point::new(10.0, 20.0));
        assert_eq!(drag.origin(), drag.last());
        assert_eq!(drag.total_offset(), Vec2::ZERO);
    }

    #[test]
    fn advance_tracks_incremental_deltas() {
        let mut drag = DragState::new(Point::new(0.0, 0.0));

        assert_eq!(drag.advance(Point::new(5.0, 3.0)), Vec2::new(5.0, 3.0));
        assert_eq!(drag.advance(Point::new(8.0, 7.0)), Vec2::new(3.0, 4.0));
        assert_eq!(drag.advance(Point::new(10.0, 10.0)), Vec2::new(2.0, 3.0));

        assert_eq!(drag.last(), Point::new(10.0, 10.0));
        assert_eq!(drag.total_offset(), Vec2::new(10.0, 10.0));
    }

    #[test]
    fn advancing_back_and_forth_cancels_out() {
        let mut drag = DragState::new(Point::new(100.0, 100.0));

        let forward = drag.advance(Point::new(130.0, 120.0));
        let back = drag.advance(Point::new(100.0, 100.0));

        assert_eq!(forward, -back);
        assert_eq!(drag.total_offset(), Vec2::ZERO);
    }

    #[test]
    fn zero_movement_delta() {
        let start = Point::new(50.0, 50.0);
        let mut drag = DragState::new(start);

        assert_eq!(drag.advance(start), Vec2::ZERO);
    }

    #[test]
    fn fractional_coordinates() {
        let mut drag = DragState::new(Point::new(1.5, 2.7));

        let delta = drag.advance(Point::new(3.2, 4.1));

        assert!((delta.x - 1.7).abs() < f64::EPSILON * 10.0);
        assert!((delta.y - 1.4).abs() < f64::EPSILON * 10.0);
    }

    #[test]
    fn large_coordinate_values() {
        let mut drag = DragState::new(Point::new(1_000_000.0, 2_000_000.0));

        let delta = drag.advance(Point::new(1_000_001.0, 2_000_002.0));

        assert_eq!(delta, Vec2::new(1.0, 2.0));
    }
}
