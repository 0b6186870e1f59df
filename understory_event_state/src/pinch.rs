// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinch state helper: distance ratios and midpoints for two-point gestures.
//!
//! ## Usage
//!
//! 1) When exactly two contact points become active, create the state with
//!    [`PinchState::new`].
//! 2) On each move while both remain active, call [`PinchState::update`]. The
//!    returned [`PinchUpdate`] carries the new inter-point distance, the
//!    midpoint (a natural zoom anchor), and the ratio against the previously
//!    recorded distance.
//! 3) Drop the state when the contact count changes.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use understory_event_state::pinch::PinchState;
//!
//! let mut pinch = PinchState::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
//! assert_eq!(pinch.last_distance(), 10.0);
//!
//! // Fingers spread to 20 apart: the ratio is 2.
//! let update = pinch.update(Point::new(0.0, 0.0), Point::new(20.0, 0.0));
//! assert_eq!(update.ratio, Some(2.0));
//! assert_eq!(update.midpoint, Point::new(10.0, 0.0));
//! assert_eq!(pinch.last_distance(), 20.0);
//! ```

use kurbo::Point;

/// An in-progress two-point pinch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchState {
    last_distance: f64,
}

/// Result of feeding a new pair of contact points into a [`PinchState`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchUpdate {
    /// Distance between the two contact points.
    pub distance: f64,
    /// Midpoint between the two contact points.
    pub midpoint: Point,
    /// `distance / previous distance`.
    ///
    /// `None` when the previous distance was zero (both contacts reported at
    /// the same position), since no meaningful ratio exists.
    pub ratio: Option<f64>,
}

impl PinchState {
    /// Starts a pinch from two contact points.
    #[must_use]
    pub fn new(a: Point, b: Point) -> Self {
        Self {
            last_distance: a.distance(b),
        }
    }

    /// Most recently recorded inter-point distance.
    #[must_use]
    pub fn last_distance(&self) -> f64 {
        self.last_distance
    }

    /// Records a new pair of contact points.
    pub fn update(&mut self, a: Point, b: Point) -> PinchUpdate {
        let distance = a.distance(b);
        let ratio = (self.last_distance > 0.0).then(|| distance / self.last_distance);
        self.last_distance = distance;
        PinchUpdate {
            distance,
            midpoint: a.midpoint(b),
            ratio,
        }
    }
}
