// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// How a pointer delta in client pixels is converted into document units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PanRatio {
    /// One ratio for both axes: view box height over rendered surface height.
    ///
    /// Assumes the surface does not scale x and y independently.
    #[default]
    Uniform,
    /// Independent ratios: width over rendered width, height over rendered
    /// height.
    PerAxis,
}

/// How a zoom anchor given in client pixels is placed in the view box.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnchorMode {
    /// Map the anchor into document space through the surface's screen
    /// transform, then use its position relative to the view box.
    #[default]
    ScreenCtm,
    /// Use the anchor's fractional position inside the surface's client
    /// rectangle.
    ClientRect,
}

/// Engine configuration.
///
/// ```rust
/// use understory_viewbox::PanZoomConfig;
///
/// let config = PanZoomConfig::editor().with_zoom_limits(1.0, 8.0);
/// assert_eq!(config.padding_factor, 0.05);
/// assert!(config.validate().is_ok());
///
/// assert!(PanZoomConfig::default().with_zoom_limits(2.0, 8.0).validate().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PanZoomConfig {
    /// Ignore pan gestures.
    pub pan_disabled: bool,
    /// Ignore wheel and pinch zoom gestures.
    pub zoom_disabled: bool,
    /// Lowest zoom level. Must not exceed the baseline level `1`.
    pub zoom_min: f64,
    /// Highest zoom level. Must not be below the baseline level `1`.
    pub zoom_max: f64,
    /// Breathing room around fitted content, relative to its longest side.
    pub padding_factor: f64,
    /// Two activations closer than this (in milliseconds) reset the view.
    pub double_activation_threshold_ms: f64,
    /// View box scale factor per zoom level.
    pub zoom_step_base: f64,
    /// Pan delta conversion.
    pub pan_ratio: PanRatio,
    /// Zoom anchor placement.
    pub anchor_mode: AnchorMode,
}

impl Default for PanZoomConfig {
    fn default() -> Self {
        Self {
            pan_disabled: false,
            zoom_disabled: false,
            zoom_min: 1.0,
            zoom_max: 10.0,
            padding_factor: 0.0,
            double_activation_threshold_ms: 300.0,
            zoom_step_base: 2.0,
            pan_ratio: PanRatio::Uniform,
            anchor_mode: AnchorMode::ScreenCtm,
        }
    }
}

impl PanZoomConfig {
    /// Zoom level at which the view box equals the initial view box.
    pub const BASELINE_ZOOM: f64 = 1.0;

    /// Editor profile: defaults plus a 5% margin around fitted content.
    #[must_use]
    pub fn editor() -> Self {
        Self {
            padding_factor: 0.05,
            ..Self::default()
        }
    }

    /// Sets whether pan gestures are ignored.
    #[must_use]
    pub fn with_pan_disabled(mut self, disabled: bool) -> Self {
        self.pan_disabled = disabled;
        self
    }

    /// Sets whether zoom gestures are ignored.
    #[must_use]
    pub fn with_zoom_disabled(mut self, disabled: bool) -> Self {
        self.zoom_disabled = disabled;
        self
    }

    /// Sets the zoom level range.
    #[must_use]
    pub fn with_zoom_limits(mut self, min: f64, max: f64) -> Self {
        self.zoom_min = min;
        self.zoom_max = max;
        self
    }

    /// Sets the fitted content margin factor.
    #[must_use]
    pub fn with_padding_factor(mut self, factor: f64) -> Self {
        self.padding_factor = factor;
        self
    }

    /// Sets the double activation threshold in milliseconds.
    #[must_use]
    pub fn with_double_activation_threshold_ms(mut self, ms: f64) -> Self {
        self.double_activation_threshold_ms = ms;
        self
    }

    /// Sets the per-level scale factor.
    #[must_use]
    pub fn with_zoom_step_base(mut self, base: f64) -> Self {
        self.zoom_step_base = base;
        self
    }

    /// Sets the pan delta conversion.
    #[must_use]
    pub fn with_pan_ratio(mut self, ratio: PanRatio) -> Self {
        self.pan_ratio = ratio;
        self
    }

    /// Sets the zoom anchor placement.
    #[must_use]
    pub fn with_anchor_mode(mut self, mode: AnchorMode) -> Self {
        self.anchor_mode = mode;
        self
    }

    /// Checks that the configuration describes a usable engine.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.zoom_min.is_finite() || !self.zoom_max.is_finite() || self.zoom_min > self.zoom_max
        {
            return Err(ConfigError::ZoomLimits {
                min: self.zoom_min,
                max: self.zoom_max,
            });
        }
        if !(self.zoom_min..=self.zoom_max).contains(&Self::BASELINE_ZOOM) {
            return Err(ConfigError::BaselineOutOfRange {
                min: self.zoom_min,
                max: self.zoom_max,
            });
        }
        if !self.zoom_step_base.is_finite() || self.zoom_step_base <= 1.0 {
            return Err(ConfigError::ZoomStepBase(self.zoom_step_base));
        }
        if !self.double_activation_threshold_ms.is_finite()
            || self.double_activation_threshold_ms < 0.0
        {
            return Err(ConfigError::Threshold(self.double_activation_threshold_ms));
        }
        if !self.padding_factor.is_finite() || self.padding_factor < 0.0 {
            return Err(ConfigError::PaddingFactor(self.padding_factor));
        }
        Ok(())
    }
}

/// Reason a [`PanZoomConfig`] was rejected.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// Zoom limits are not finite or `min > max`.
    ZoomLimits {
        /// Configured minimum.
        min: f64,
        /// Configured maximum.
        max: f64,
    },
    /// The baseline zoom level is outside the configured limits.
    BaselineOutOfRange {
        /// Configured minimum.
        min: f64,
        /// Configured maximum.
        max: f64,
    },
    /// The per-level scale factor is not finite or not greater than one.
    ZoomStepBase(f64),
    /// The double activation threshold is negative or not finite.
    Threshold(f64),
    /// The padding factor is negative or not finite.
    PaddingFactor(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZoomLimits { min, max } => write!(f, "invalid zoom limits [{min}, {max}]"),
            Self::BaselineOutOfRange { min, max } => write!(
                f,
                "zoom limits [{min}, {max}] exclude the baseline level {}",
                PanZoomConfig::BASELINE_ZOOM
            ),
            Self::ZoomStepBase(base) => write!(f, "zoom step base {base} must be greater than 1"),
            Self::Threshold(ms) => {
                write!(f, "double activation threshold {ms}ms must be non-negative")
            }
            Self::PaddingFactor(p) => write!(f, "padding factor {p} must be non-negative"),
        }
    }
}

impl core::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::{ConfigError, PanZoomConfig};

    #[test]
    fn defaults_are_valid() {
        assert_eq!(PanZoomConfig::default().validate(), Ok(()));
        assert_eq!(PanZoomConfig::editor().validate(), Ok(()));
    }

    #[test]
    fn limits_may_extend_below_baseline() {
        let config = PanZoomConfig::default().with_zoom_limits(0.0, 8.0);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn rejects_inverted_or_non_finite_limits() {
        assert_eq!(
            PanZoomConfig::default().with_zoom_limits(5.0, 1.0).validate(),
            Err(ConfigError::ZoomLimits { min: 5.0, max: 1.0 })
        );
        assert!(matches!(
            PanZoomConfig::default()
                .with_zoom_limits(1.0, f64::INFINITY)
                .validate(),
            Err(ConfigError::ZoomLimits { .. })
        ));
    }

    #[test]
    fn rejects_limits_excluding_baseline() {
        let err = PanZoomConfig::default()
            .with_zoom_limits(2.0, 8.0)
            .validate()
            .unwrap_err();
        assert_eq!(err, ConfigError::BaselineOutOfRange { min: 2.0, max: 8.0 });
        assert_eq!(
            err.to_string(),
            "zoom limits [2, 8] exclude the baseline level 1"
        );
    }

    #[test]
    fn rejects_bad_scalars() {
        assert_eq!(
            PanZoomConfig::default().with_zoom_step_base(1.0).validate(),
            Err(ConfigError::ZoomStepBase(1.0))
        );
        assert_eq!(
            PanZoomConfig::default()
                .with_double_activation_threshold_ms(-1.0)
                .validate(),
            Err(ConfigError::Threshold(-1.0))
        );
        assert_eq!(
            PanZoomConfig::default().with_padding_factor(-0.5).validate(),
            Err(ConfigError::PaddingFactor(-0.5))
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_partial_config() {
        let config: PanZoomConfig =
            serde_json::from_str(r#"{ "zoom_max": 8.0, "pan_ratio": "PerAxis" }"#).unwrap();
        assert_eq!(
            config,
            PanZoomConfig::default()
                .with_zoom_limits(1.0, 8.0)
                .with_pan_ratio(super::PanRatio::PerAxis)
        );
    }
}
