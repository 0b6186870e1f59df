// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Double activation detection from event timestamps.
//!
//! A [`DoubleActivation`] holds a single timestamp slot for one *kind* of
//! activation (for example "middle button released" or "last touch lifted").
//! Keep one detector per kind; activations of different kinds never pair up.
//!
//! An activation forms a double activation when it arrives strictly less than
//! the threshold after the previous one. Every activation is recorded, so a
//! rapid triple activation reports a double activation on both the second
//! and the third.
//!
//! Timestamps are plain milliseconds (`f64`, matching the resolution hosts
//! typically report). Detection is a pure timestamp comparison; nothing is
//! scheduled.
//!
//! ## Minimal example
//!
//! ```
//! use understory_event_state::activation::DoubleActivation;
//!
//! let mut middle = DoubleActivation::new(300.0);
//!
//! assert!(!middle.activate(1_000.0));
//! assert!(middle.activate(1_250.0)); // 250ms later: double activation.
//! assert!(middle.activate(1_400.0)); // 150ms after the previous one.
//! assert!(!middle.activate(1_800.0));
//! ```

/// Timestamp slot recognizing two activations within a time threshold.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DoubleActivation {
    threshold_ms: f64,
    last: Option<f64>,
}

impl DoubleActivation {
    /// Creates a detector with the given threshold in milliseconds.
    #[must_use]
    pub fn new(threshold_ms: f64) -> Self {
        Self {
            threshold_ms,
            last: None,
        }
    }

    /// Threshold in milliseconds.
    #[must_use]
    pub fn threshold_ms(&self) -> f64 {
        self.threshold_ms
    }

    /// Timestamp of the most recent activation, if any.
    #[must_use]
    pub fn pending(&self) -> Option<f64> {
        self.last
    }

    /// Records an activation at `timestamp` and returns `true` if it completes
    /// a double activation.
    ///
    /// `timestamp` always becomes the new previous activation. A timestamp
    /// earlier than the previous one never completes a double activation.
    pub fn activate(&mut self, timestamp: f64) -> bool {
        let within = self.last.is_some_and(|last| {
            let elapsed = timestamp - last;
            elapsed >= 0.0 && elapsed < self.threshold_ms
        });
        self.last = Some(timestamp);
        within
    }

    /// Forgets any pending activation.
    pub fn clear(&mut self) {
        self.last = None;
    }
}
