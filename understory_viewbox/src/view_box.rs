// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::str::FromStr;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `floor`
use kurbo::{Point, Rect, Size};

/// Visible window into document space: origin plus size.
///
/// This mirrors the four numbers of an SVG `viewBox` attribute. Engine
/// operations keep `width` and `height` strictly positive.
///
/// The [`Display`](fmt::Display) form is the attribute string
/// `"x y width height"`, each value rounded to one decimal place so that
/// consumers do not see sub-pixel jitter:
///
/// ```rust
/// use understory_viewbox::ViewBox;
///
/// let vb = ViewBox::new(-2.5, -2.5, 105.0, 105.0);
/// assert_eq!(vb.to_string(), "-2.5 -2.5 105 105");
///
/// let parsed: ViewBox = "0, 0, 640 480".parse().unwrap();
/// assert_eq!(parsed, ViewBox::new(0.0, 0.0, 640.0, 480.0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewBox {
    /// Minimum x of the visible window.
    pub x: f64,
    /// Minimum y of the visible window.
    pub y: f64,
    /// Width of the visible window.
    pub width: f64,
    /// Height of the visible window.
    pub height: f64,
}

impl ViewBox {
    /// Creates a view box from its origin and size.
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a view box covering `rect` (normalized first).
    #[must_use]
    pub fn from_rect(rect: Rect) -> Self {
        let rect = rect.abs();
        Self::new(rect.x0, rect.y0, rect.width(), rect.height())
    }

    /// The covered area as a rectangle.
    #[must_use]
    pub fn to_rect(self) -> Rect {
        Rect::from_origin_size(self.origin(), self.size())
    }

    /// Minimum corner.
    #[must_use]
    pub fn origin(self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Width and height.
    #[must_use]
    pub fn size(self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Center point.
    #[must_use]
    pub fn center(self) -> Point {
        Point::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Returns `true` if every component is finite and the size is positive.
    #[must_use]
    pub fn is_valid(self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }

    /// Same size, new origin.
    #[must_use]
    pub fn with_origin(self, x: f64, y: f64) -> Self {
        Self::new(x, y, self.width, self.height)
    }
}

impl From<Rect> for ViewBox {
    fn from(rect: Rect) -> Self {
        Self::from_rect(rect)
    }
}

/// Rounds half up to one decimal place, folding negative zero into zero.
fn round_tenth(v: f64) -> f64 {
    let r = (v * 10.0 + 0.5).floor() / 10.0;
    if r == 0.0 { 0.0 } else { r }
}

impl fmt::Display for ViewBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            round_tenth(self.x),
            round_tenth(self.y),
            round_tenth(self.width),
            round_tenth(self.height)
        )
    }
}

/// Error returned when parsing a `viewBox` attribute string fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseViewBoxError {
    /// The string did not contain exactly four values.
    WrongCount(usize),
    /// A value was not a finite number.
    InvalidNumber,
    /// Width or height was zero or negative.
    NonPositiveSize,
}

impl fmt::Display for ParseViewBoxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongCount(n) => write!(f, "expected 4 viewBox values, found {n}"),
            Self::InvalidNumber => f.write_str("viewBox value is not a finite number"),
            Self::NonPositiveSize => f.write_str("viewBox width and height must be positive"),
        }
    }
}

impl core::error::Error for ParseViewBoxError {}

impl FromStr for ViewBox {
    type Err = ParseViewBoxError;

    /// Parses `min-x min-y width height`, separated by whitespace and/or commas.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut values = [0.0_f64; 4];
        let mut count = 0;
        for token in s
            .split(|c: char| c.is_ascii_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
        {
            if count < values.len() {
                let v: f64 = token
                    .parse()
                    .map_err(|_| ParseViewBoxError::InvalidNumber)?;
                if !v.is_finite() {
                    return Err(ParseViewBoxError::InvalidNumber);
                }
                values[count] = v;
            }
            count += 1;
        }
        if count != values.len() {
            return Err(ParseViewBoxError::WrongCount(count));
        }
        let [x, y, width, height] = values;
        if width <= 0.0 || height <= 0.0 {
            return Err(ParseViewBoxError::NonPositiveSize);
        }
        Ok(Self::new(x, y, width, height))
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use kurbo::{Point, Rect};

    use super::{ParseViewBoxError, ViewBox};

    #[test]
    fn display_rounds_to_one_decimal() {
        let vb = ViewBox::new(-32.5, -22.5, 52.5, 105.0);
        assert_eq!(vb.to_string(), "-32.5 -22.5 52.5 105");

        let jitter = ViewBox::new(10.04999, 0.3333333, 99.96, 1.0 / 3.0);
        assert_eq!(jitter.to_string(), "10 0.3 100 0.3");
    }

    #[test]
    fn display_never_prints_negative_zero() {
        let vb = ViewBox::new(-0.04, -0.0, 1.0, 1.0);
        assert_eq!(vb.to_string(), "0 0 1 1");
    }

    #[test]
    fn display_rounds_halves_up() {
        let vb = ViewBox::new(0.25, -0.25, 1.0, 1.0);
        assert_eq!(vb.to_string(), "0.3 -0.2 1 1");
    }

    #[test]
    fn rect_conversions() {
        let vb = ViewBox::from_rect(Rect::new(10.0, 20.0, 0.0, 0.0));
        assert_eq!(vb, ViewBox::new(0.0, 0.0, 10.0, 20.0));
        assert_eq!(vb.to_rect(), Rect::new(0.0, 0.0, 10.0, 20.0));
        assert_eq!(vb.center(), Point::new(5.0, 10.0));
    }

    #[test]
    fn validity() {
        assert!(ViewBox::new(-5.0, -5.0, 10.0, 10.0).is_valid());
        assert!(!ViewBox::new(0.0, 0.0, 0.0, 10.0).is_valid());
        assert!(!ViewBox::new(0.0, 0.0, 10.0, -1.0).is_valid());
        assert!(!ViewBox::new(f64::NAN, 0.0, 10.0, 10.0).is_valid());
    }

    #[test]
    fn parse_accepts_svg_separators() {
        let expected = ViewBox::new(-2.5, 0.0, 105.0, 80.0);
        assert_eq!("-2.5 0 105 80".parse::<ViewBox>(), Ok(expected));
        assert_eq!("-2.5,0,105,80".parse::<ViewBox>(), Ok(expected));
        assert_eq!("  -2.5, 0\n105 ,80 ".parse::<ViewBox>(), Ok(expected));
    }

    #[test]
    fn parse_rejects_malformed_input() {
        assert_eq!(
            "0 0 100".parse::<ViewBox>(),
            Err(ParseViewBoxError::WrongCount(3))
        );
        assert_eq!(
            "0 0 100 100 5".parse::<ViewBox>(),
            Err(ParseViewBoxError::WrongCount(5))
        );
        assert_eq!(
            "0 0 wide 100".parse::<ViewBox>(),
            Err(ParseViewBoxError::InvalidNumber)
        );
        assert_eq!(
            "0 0 inf 100".parse::<ViewBox>(),
            Err(ParseViewBoxError::InvalidNumber)
        );
        assert_eq!(
            "0 0 0 100".parse::<ViewBox>(),
            Err(ParseViewBoxError::NonPositiveSize)
        );
    }

    #[test]
    fn display_output_parses_back() {
        let vb = ViewBox::new(23.5, -2.5, 52.5, 52.5);
        assert_eq!(vb.to_string().parse::<ViewBox>(), Ok(vb));
    }
}
