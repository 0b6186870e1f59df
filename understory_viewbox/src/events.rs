// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host input payloads consumed by [`PanZoom`](crate::PanZoom), and the
//! response handed back to the host.
//!
//! Positions are client (device) pixels. Timestamps are milliseconds on any
//! monotonic clock shared by all events of one surface.

use kurbo::Point;

/// Pointer button that changed state, using DOM `MouseEvent.button` numbering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    /// Usually the left button (`0`).
    Primary,
    /// Usually the wheel or middle button (`1`).
    Auxiliary,
    /// Usually the right button (`2`).
    Secondary,
    /// Any other button.
    Other(i16),
}

impl From<i16> for PointerButton {
    fn from(button: i16) -> Self {
        match button {
            0 => Self::Primary,
            1 => Self::Auxiliary,
            2 => Self::Secondary,
            n => Self::Other(n),
        }
    }
}

/// Mouse-style pointer press, release or move.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    /// Pointer position.
    pub position: Point,
    /// Button that changed state (ignored for moves).
    pub button: PointerButton,
    /// Event time in milliseconds.
    pub timestamp: f64,
}

impl PointerEvent {
    /// Creates a pointer event.
    #[must_use]
    pub fn new(position: Point, button: PointerButton, timestamp: f64) -> Self {
        Self {
            position,
            button,
            timestamp,
        }
    }
}

/// Touch start, move or end, carrying the contacts still active afterwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchEvent<'a> {
    /// Active contact positions, in the host's order.
    pub touches: &'a [Point],
    /// Event time in milliseconds.
    pub timestamp: f64,
}

impl<'a> TouchEvent<'a> {
    /// Creates a touch event.
    #[must_use]
    pub fn new(touches: &'a [Point], timestamp: f64) -> Self {
        Self { touches, timestamp }
    }
}

/// Wheel scroll over the surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelEvent {
    /// Pointer position.
    pub position: Point,
    /// Vertical scroll amount; negative scrolls up (zooms in).
    pub delta_y: f64,
    /// Event time in milliseconds.
    pub timestamp: f64,
}

impl WheelEvent {
    /// Creates a wheel event.
    #[must_use]
    pub fn new(position: Point, delta_y: f64, timestamp: f64) -> Self {
        Self {
            position,
            delta_y,
            timestamp,
        }
    }
}

/// What handling an event did, and what the host should do about it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[must_use]
pub struct Response {
    /// The view box changed; re-render with the new value.
    pub changed: bool,
    /// Suppress the platform default action (text selection, page scroll).
    pub prevent_default: bool,
}

impl Response {
    /// Nothing happened.
    pub const IGNORED: Self = Self {
        changed: false,
        prevent_default: false,
    };

    pub(crate) fn changed(changed: bool) -> Self {
        Self {
            changed,
            prevent_default: false,
        }
    }

    pub(crate) fn prevent_default(mut self) -> Self {
        self.prevent_default = true;
        self
    }
}
