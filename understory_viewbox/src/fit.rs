// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Initial view box fitting from content bounds.

use kurbo::Rect;

use crate::ViewBox;

/// Outcome of fitting a view box around content bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
#[must_use]
pub enum Fit {
    /// Content bounds were usable; this view box shows all of it.
    Fitted(ViewBox),
    /// Content bounds have no area (or are not finite), for example because
    /// the content has not been rendered yet. Callers keep their previous view
    /// box.
    Degenerate,
}

impl Fit {
    /// The fitted view box, or `fallback` if the bounds were degenerate.
    pub fn unwrap_or(self, fallback: ViewBox) -> ViewBox {
        match self {
            Self::Fitted(vb) => vb,
            Self::Degenerate => fallback,
        }
    }

    /// The fitted view box, if any.
    pub fn fitted(self) -> Option<ViewBox> {
        match self {
            Self::Fitted(vb) => Some(vb),
            Self::Degenerate => None,
        }
    }
}

/// Fits a view box around `bounds` with proportional breathing room.
///
/// The padding is `max(width, height) * padding_factor`, split evenly on both
/// sides of each axis, so the margin is uniform regardless of aspect ratio.
/// A negative or non-finite `padding_factor` is treated as zero.
///
/// ```rust
/// use kurbo::Rect;
/// use understory_viewbox::{Fit, ViewBox, fit_content};
///
/// let fit = fit_content(Rect::new(0.0, 0.0, 100.0, 100.0), 0.05);
/// assert_eq!(fit, Fit::Fitted(ViewBox::new(-2.5, -2.5, 105.0, 105.0)));
///
/// assert_eq!(fit_content(Rect::new(0.0, 0.0, 0.0, 100.0), 0.05), Fit::Degenerate);
/// ```
pub fn fit_content(bounds: Rect, padding_factor: f64) -> Fit {
    let bounds = bounds.abs();
    let (width, height) = (bounds.width(), bounds.height());
    if !bounds.is_finite() || width <= 0.0 || height <= 0.0 {
        return Fit::Degenerate;
    }
    let factor = if padding_factor.is_finite() {
        padding_factor.max(0.0)
    } else {
        0.0
    };
    let padding = width.max(height) * factor;
    Fit::Fitted(ViewBox::new(
        bounds.x0 - padding / 2.0,
        bounds.y0 - padding / 2.0,
        width + padding,
        height + padding,
    ))
}
