// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stateless point math and client → local coordinate conversion.

use kurbo::{Affine, Point};

/// Clamps `value` into `[min, max]`.
///
/// Unlike [`f64::clamp`] this never panics: a NaN `value` yields `min`, and
/// if `min > max` the result is `max`.
#[must_use]
pub fn constrain(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Outcome of converting a client-space point into local (document) space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LocalPoint {
    /// The point was mapped through the surface's screen transform.
    Mapped(Point),
    /// No usable transform was available; the client point is returned as is.
    Unmapped(Point),
}

impl LocalPoint {
    /// The best available point, mapped or not.
    #[must_use]
    pub fn point(self) -> Point {
        match self {
            Self::Mapped(p) | Self::Unmapped(p) => p,
        }
    }

    /// Returns `true` if the point was actually mapped.
    #[must_use]
    pub fn is_mapped(self) -> bool {
        matches!(self, Self::Mapped(_))
    }
}

/// Converts a client-space point into local space.
///
/// `screen_ctm` is the surface's local → client transform (as reported by an
/// SVG element's screen CTM); its inverse is applied to `client`. A missing,
/// singular or non-finite transform degrades to [`LocalPoint::Unmapped`].
#[must_use]
pub fn to_local(client: Point, screen_ctm: Option<Affine>) -> LocalPoint {
    let Some(ctm) = screen_ctm else {
        return LocalPoint::Unmapped(client);
    };
    let det = ctm.determinant();
    if det == 0.0 || !det.is_finite() || !ctm.is_finite() {
        return LocalPoint::Unmapped(client);
    }
    let local = ctm.inverse() * client;
    if local.is_finite() {
        LocalPoint::Mapped(local)
    } else {
        LocalPoint::Unmapped(client)
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Affine, Point, Vec2};

    use super::{LocalPoint, constrain, to_local};

    #[test]
    fn constrain_clamps_and_absorbs_nan() {
        assert_eq!(constrain(5.0, 1.0, 10.0), 5.0);
        assert_eq!(constrain(-3.0, 1.0, 10.0), 1.0);
        assert_eq!(constrain(42.0, 1.0, 10.0), 10.0);
        assert_eq!(constrain(f64::NAN, 1.0, 10.0), 1.0);
    }

    #[test]
    fn to_local_inverts_screen_ctm() {
        // Local (0, 0) is drawn at client (100, 50), two pixels per unit.
        let ctm = Affine::translate(Vec2::new(100.0, 50.0)) * Affine::scale(2.0);
        let local = to_local(Point::new(120.0, 70.0), Some(ctm));

        assert!(local.is_mapped());
        let p = local.point();
        assert!((p.x - 10.0).abs() < 1e-9);
        assert!((p.y - 10.0).abs() < 1e-9);
    }

    #[test]
    fn to_local_without_transform_is_unmapped() {
        let client = Point::new(12.0, 34.0);
        assert_eq!(to_local(client, None), LocalPoint::Unmapped(client));
    }

    #[test]
    fn to_local_with_singular_transform_is_unmapped() {
        let client = Point::new(12.0, 34.0);
        let collapsed = Affine::scale_non_uniform(0.0, 1.0);
        assert_eq!(to_local(client, Some(collapsed)), LocalPoint::Unmapped(client));

        let broken = Affine::scale(f64::NAN);
        assert_eq!(to_local(client, Some(broken)), LocalPoint::Unmapped(client));
    }
}
