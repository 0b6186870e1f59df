// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::{String, ToString};

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `powf`
use kurbo::{Point, Rect, Vec2};
use tracing::{debug, trace};
use understory_event_state::activation::DoubleActivation;
use understory_event_state::drag::DragState;
use understory_event_state::pinch::PinchState;

use crate::config::{AnchorMode, ConfigError, PanRatio, PanZoomConfig};
use crate::events::{PointerButton, PointerEvent, Response, TouchEvent, WheelEvent};
use crate::fit::{Fit, fit_content};
use crate::geometry::{constrain, to_local};
use crate::surface::Surface;
use crate::view_box::ViewBox;

/// Which gesture, if any, is in progress. Exactly one at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum GestureMode {
    /// No gesture.
    #[default]
    Idle,
    /// A single pointer or contact is dragging the view.
    Panning,
    /// Two contacts are pinching.
    Pinching,
}

/// Gesture state carrying exactly the data its mode needs.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Gesture {
    Idle,
    Panning(DragState),
    Pinching(PinchState),
}

impl Gesture {
    fn mode(&self) -> GestureMode {
        match self {
            Self::Idle => GestureMode::Idle,
            Self::Panning(_) => GestureMode::Panning,
            Self::Pinching(_) => GestureMode::Pinching,
        }
    }
}

/// Pan/zoom state for one SVG surface.
///
/// `PanZoom` owns the initial (reset) view box, the current view box, the zoom
/// level, the in-progress gesture and the double activation slots. It is
/// driven either directly through the engine methods ([`pan_by`], [`zoom_to`],
/// [`reset`]) or by feeding host input into the recognizer handlers
/// ([`pointer_down`], [`touch_move`], [`wheel`], ...).
///
/// All handlers run synchronously to completion and never fail: out-of-range
/// requests are ignored and missing surface information degrades to a
/// best-effort result.
///
/// Invariants:
/// - `zoom_min <= zoom_level <= zoom_max`.
/// - The view box size is the initial size divided by
///   `zoom_step_base ^ (zoom_level - 1)`; panning only moves the origin.
/// - A last pointer exists only while panning, a last pinch distance only
///   while pinching.
///
/// [`pan_by`]: Self::pan_by
/// [`zoom_to`]: Self::zoom_to
/// [`reset`]: Self::reset
/// [`pointer_down`]: Self::pointer_down
/// [`touch_move`]: Self::touch_move
/// [`wheel`]: Self::wheel
#[derive(Clone, Debug)]
pub struct PanZoom {
    config: PanZoomConfig,
    initial: ViewBox,
    view_box: ViewBox,
    zoom: f64,
    gesture: Gesture,
    middle_release: DoubleActivation,
    touch_lift: DoubleActivation,
}

impl PanZoom {
    /// View box used until content has been fitted.
    pub const DEFAULT_VIEW_BOX: ViewBox = ViewBox::new(0.0, 0.0, 100.0, 100.0);

    /// Creates an engine showing [`Self::DEFAULT_VIEW_BOX`].
    ///
    /// Call [`attach`](Self::attach) or [`fit_to_content`](Self::fit_to_content)
    /// once the content bounds are known.
    pub fn new(config: PanZoomConfig) -> Result<Self, ConfigError> {
        Self::with_initial_view_box(config, Self::DEFAULT_VIEW_BOX)
    }

    /// Creates an engine whose reset target is `initial`, for documents that
    /// carry their own `viewBox`.
    ///
    /// An `initial` with non-positive size or non-finite values is replaced by
    /// [`Self::DEFAULT_VIEW_BOX`].
    pub fn with_initial_view_box(
        config: PanZoomConfig,
        initial: ViewBox,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let initial = if initial.is_valid() {
            initial
        } else {
            debug!(?initial, "unusable initial view box, using default");
            Self::DEFAULT_VIEW_BOX
        };
        let threshold = config.double_activation_threshold_ms;
        Ok(Self {
            config,
            initial,
            view_box: initial,
            zoom: PanZoomConfig::BASELINE_ZOOM,
            gesture: Gesture::Idle,
            middle_release: DoubleActivation::new(threshold),
            touch_lift: DoubleActivation::new(threshold),
        })
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &PanZoomConfig {
        &self.config
    }

    /// Replaces the configuration.
    ///
    /// Pending double activations are forgotten. A zoom level outside the new
    /// limits resets the view; a gesture that the new configuration disables
    /// is cancelled.
    pub fn set_config(&mut self, config: PanZoomConfig) -> Result<(), ConfigError> {
        config.validate()?;
        self.config = config;
        self.middle_release = DoubleActivation::new(config.double_activation_threshold_ms);
        self.touch_lift = DoubleActivation::new(config.double_activation_threshold_ms);
        if !(config.zoom_min..=config.zoom_max).contains(&self.zoom) {
            self.reset();
        }
        let disabled = match self.gesture {
            Gesture::Idle => false,
            Gesture::Panning(_) => config.pan_disabled,
            Gesture::Pinching(_) => config.zoom_disabled,
        };
        if disabled {
            self.set_gesture(Gesture::Idle);
        }
        Ok(())
    }

    /// Current view box.
    #[must_use]
    pub fn view_box(&self) -> ViewBox {
        self.view_box
    }

    /// Current view box formatted as an SVG `viewBox` attribute.
    #[must_use]
    pub fn view_box_string(&self) -> String {
        self.view_box.to_string()
    }

    /// View box restored by [`reset`](Self::reset).
    #[must_use]
    pub fn initial_view_box(&self) -> ViewBox {
        self.initial
    }

    /// Current zoom level.
    #[must_use]
    pub fn zoom_level(&self) -> f64 {
        self.zoom
    }

    /// Gesture in progress.
    #[must_use]
    pub fn mode(&self) -> GestureMode {
        self.gesture.mode()
    }

    /// Returns `true` while a pan is in progress, for example to show a
    /// "grabbing" cursor.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        matches!(self.gesture, Gesture::Panning(_))
    }

    /// Last pointer position of the pan in progress.
    #[must_use]
    pub fn last_pointer(&self) -> Option<Point> {
        match self.gesture {
            Gesture::Panning(drag) => Some(drag.last()),
            _ => None,
        }
    }

    /// Last recorded distance of the pinch in progress.
    #[must_use]
    pub fn last_pinch_distance(&self) -> Option<f64> {
        match self.gesture {
            Gesture::Pinching(pinch) => Some(pinch.last_distance()),
            _ => None,
        }
    }

    /// Fits the view to the surface's content bounds.
    ///
    /// Returns [`Fit::Degenerate`] and keeps the current state if the bounds
    /// are unavailable or have no area.
    pub fn attach(&mut self, surface: &(impl Surface + ?Sized)) -> Fit {
        match surface.content_bounds() {
            Some(bounds) => self.fit_to_content(bounds),
            None => {
                debug!("content bounds unavailable, keeping view box");
                Fit::Degenerate
            }
        }
    }

    /// Fits the view to `bounds` (padded per the configuration), making the
    /// result the new reset target at the baseline zoom level.
    ///
    /// Degenerate bounds leave the current state untouched.
    pub fn fit_to_content(&mut self, bounds: Rect) -> Fit {
        let fit = fit_content(bounds, self.config.padding_factor);
        match fit {
            Fit::Fitted(view_box) => {
                self.initial = view_box;
                self.view_box = view_box;
                self.zoom = PanZoomConfig::BASELINE_ZOOM;
                debug!(%view_box, "fitted content");
            }
            Fit::Degenerate => debug!(?bounds, "degenerate content bounds, keeping view box"),
        }
        fit
    }

    /// Restores the initial view box and the baseline zoom level.
    ///
    /// Returns `true` if anything changed.
    pub fn reset(&mut self) -> bool {
        let changed = self.view_box != self.initial || self.zoom != PanZoomConfig::BASELINE_ZOOM;
        self.view_box = self.initial;
        self.zoom = PanZoomConfig::BASELINE_ZOOM;
        debug!(changed, "view reset");
        changed
    }

    // --- Pan engine ---------------------------------------------------------

    /// Document units per client pixel along each axis.
    fn pan_ratio(&self, surface: &(impl Surface + ?Sized)) -> Option<Vec2> {
        let rect = surface.client_rect()?.abs();
        let (w, h) = (rect.width(), rect.height());
        let ratio = match self.config.pan_ratio {
            PanRatio::Uniform => {
                let r = self.view_box.height / h;
                Vec2::new(r, r)
            }
            PanRatio::PerAxis => Vec2::new(self.view_box.width / w, self.view_box.height / h),
        };
        ratio.is_finite().then_some(ratio)
    }

    /// Moves the view by `delta` client pixels, content following the pointer.
    ///
    /// The size of the view box never changes. Returns `false` (and does
    /// nothing) if the surface has no usable client rectangle.
    pub fn pan_by(&mut self, surface: &(impl Surface + ?Sized), delta: Vec2) -> bool {
        if delta == Vec2::ZERO {
            return false;
        }
        let Some(ratio) = self.pan_ratio(surface) else {
            debug!("surface client rect unavailable, ignoring pan");
            return false;
        };
        let vb = self.view_box;
        let next = vb.with_origin(vb.x - delta.x * ratio.x, vb.y - delta.y * ratio.y);
        if !next.is_valid() {
            return false;
        }
        self.view_box = next;
        trace!(view_box = %next, "pan");
        true
    }

    /// Continues the pan in progress to `pointer`.
    ///
    /// The last pointer always advances, even if the pan itself could not be
    /// applied, so a surface that becomes measurable later does not jump.
    /// Returns `false` when not panning.
    pub fn pan_to(&mut self, surface: &(impl Surface + ?Sized), pointer: Point) -> bool {
        let Gesture::Panning(drag) = &mut self.gesture else {
            return false;
        };
        let delta = drag.advance(pointer);
        self.pan_by(surface, delta)
    }

    // --- Zoom engine --------------------------------------------------------

    /// View box scale factor for a zoom level.
    fn scale_for(&self, level: f64) -> f64 {
        self.config
            .zoom_step_base
            .powf(level - PanZoomConfig::BASELINE_ZOOM)
    }

    /// Fractional position of `anchor` inside the current view box.
    fn anchor_fraction(&self, surface: &(impl Surface + ?Sized), anchor: Point) -> Vec2 {
        let vb = self.view_box;
        match self.config.anchor_mode {
            AnchorMode::ScreenCtm => {
                let local = to_local(anchor, surface.screen_ctm());
                if !local.is_mapped() {
                    debug!(?anchor, "screen transform unavailable, anchoring at client point");
                }
                let p = local.point();
                Vec2::new((p.x - vb.x) / vb.width, (p.y - vb.y) / vb.height)
            }
            AnchorMode::ClientRect => match surface.client_rect().map(|r| r.abs()) {
                Some(rect) if rect.width() > 0.0 && rect.height() > 0.0 => Vec2::new(
                    (anchor.x - rect.x0) / rect.width(),
                    (anchor.y - rect.y0) / rect.height(),
                ),
                _ => {
                    debug!(?anchor, "surface client rect unavailable, anchoring at center");
                    Vec2::new(0.5, 0.5)
                }
            },
        }
    }

    /// Zooms to `level`, keeping the document point under `anchor` (client
    /// pixels) stationary on screen.
    ///
    /// Levels outside the configured limits are ignored. Returns `true` if the
    /// view changed.
    pub fn zoom_to(&mut self, surface: &(impl Surface + ?Sized), level: f64, anchor: Point) -> bool {
        if !(self.config.zoom_min..=self.config.zoom_max).contains(&level) {
            trace!(level, "zoom level out of range");
            return false;
        }
        if level == self.zoom {
            return false;
        }
        let fraction = self.anchor_fraction(surface, anchor);
        let scale = self.scale_for(level);
        let (width, height) = (self.initial.width / scale, self.initial.height / scale);
        let vb = self.view_box;
        let next = ViewBox::new(
            vb.x - fraction.x * (width - vb.width),
            vb.y - fraction.y * (height - vb.height),
            width,
            height,
        );
        if !next.is_valid() {
            debug!(?anchor, level, "zoom produced an unusable view box, ignoring");
            return false;
        }
        self.view_box = next;
        self.zoom = level;
        trace!(level, view_box = %next, "zoom");
        true
    }

    /// Zooms by `steps` levels (positive zooms in) around `anchor`.
    pub fn zoom_by(&mut self, surface: &(impl Surface + ?Sized), steps: f64, anchor: Point) -> bool {
        self.zoom_to(surface, self.zoom + steps, anchor)
    }

    // --- Gesture recognizer -------------------------------------------------

    fn set_gesture(&mut self, next: Gesture) {
        let (from, to) = (self.gesture.mode(), next.mode());
        if from != to {
            debug!(?from, ?to, "gesture transition");
        }
        self.gesture = next;
    }

    fn end_pan(&mut self) {
        if self.is_panning() {
            self.set_gesture(Gesture::Idle);
        }
    }

    /// Pointer pressed on the surface. A primary press starts a pan.
    pub fn pointer_down(&mut self, event: &PointerEvent) -> Response {
        if event.button != PointerButton::Primary || self.config.pan_disabled {
            return Response::IGNORED;
        }
        self.set_gesture(Gesture::Panning(DragState::new(event.position)));
        // Dragging must not select text under the pointer.
        Response::IGNORED.prevent_default()
    }

    /// Pointer moved over the surface.
    pub fn pointer_move(&mut self, surface: &(impl Surface + ?Sized), event: &PointerEvent) -> Response {
        if !self.is_panning() {
            return Response::IGNORED;
        }
        Response::changed(self.pan_to(surface, event.position)).prevent_default()
    }

    /// Pointer released over the surface.
    ///
    /// Ends any pan. A second auxiliary (middle) button release within the
    /// threshold resets the view.
    pub fn pointer_up(&mut self, event: &PointerEvent) -> Response {
        self.end_pan();
        if event.button == PointerButton::Auxiliary && self.middle_release.activate(event.timestamp) {
            debug!("double middle click");
            return Response::changed(self.reset());
        }
        Response::IGNORED
    }

    /// Pointer left the surface. Ends any pan.
    pub fn pointer_leave(&mut self) -> Response {
        self.end_pan();
        Response::IGNORED
    }

    /// Pointer released anywhere (wire this to a window-level listener).
    ///
    /// Ends any pan so a release outside the surface cannot leave the view
    /// stuck panning.
    pub fn global_pointer_up(&mut self) -> Response {
        self.end_pan();
        Response::IGNORED
    }

    /// Contacts added. The gesture is rebuilt from the active contact count.
    pub fn touch_start(&mut self, event: &TouchEvent<'_>) -> Response {
        match *event.touches {
            [only] if !self.config.pan_disabled => {
                self.set_gesture(Gesture::Panning(DragState::new(only)));
                Response::IGNORED.prevent_default()
            }
            [a, b] if !self.config.zoom_disabled => {
                self.set_gesture(Gesture::Pinching(PinchState::new(a, b)));
                Response::IGNORED.prevent_default()
            }
            _ => {
                self.set_gesture(Gesture::Idle);
                Response::IGNORED
            }
        }
    }

    /// Contacts moved.
    ///
    /// One contact continues a pan; two contacts continue (or, if events
    /// arrived out of order, begin) a pinch. A single contact left over from a
    /// pinch does not pan until a new touch starts.
    pub fn touch_move(&mut self, surface: &(impl Surface + ?Sized), event: &TouchEvent<'_>) -> Response {
        match *event.touches {
            [only] => match self.gesture {
                Gesture::Panning(_) => {
                    Response::changed(self.pan_to(surface, only)).prevent_default()
                }
                Gesture::Pinching(_) => {
                    self.set_gesture(Gesture::Idle);
                    Response::IGNORED
                }
                Gesture::Idle => Response::IGNORED,
            },
            [a, b] if !self.config.zoom_disabled => {
                let Gesture::Pinching(pinch) = &mut self.gesture else {
                    self.set_gesture(Gesture::Pinching(PinchState::new(a, b)));
                    return Response::IGNORED.prevent_default();
                };
                let update = pinch.update(a, b);
                let Some(ratio) = update.ratio else {
                    return Response::IGNORED.prevent_default();
                };
                let level = constrain(self.zoom * ratio, self.config.zoom_min, self.config.zoom_max);
                Response::changed(self.zoom_to(surface, level, update.midpoint)).prevent_default()
            }
            _ => {
                self.set_gesture(Gesture::Idle);
                Response::IGNORED
            }
        }
    }

    /// Contacts lifted; `event.touches` holds those still active.
    ///
    /// Ends any pan. When the last contact lifts, a second lift within the
    /// threshold resets the view.
    pub fn touch_end(&mut self, event: &TouchEvent<'_>) -> Response {
        match *event.touches {
            [] => {
                self.set_gesture(Gesture::Idle);
                if self.touch_lift.activate(event.timestamp) {
                    debug!("double tap");
                    return Response::changed(self.reset());
                }
            }
            [a, b] if !self.config.zoom_disabled => {
                self.set_gesture(Gesture::Pinching(PinchState::new(a, b)));
            }
            _ => self.set_gesture(Gesture::Idle),
        }
        Response::IGNORED
    }

    /// Wheel scrolled over the surface: one zoom level per event around the
    /// pointer. Independent of any pan or pinch in progress.
    pub fn wheel(&mut self, surface: &(impl Surface + ?Sized), event: &WheelEvent) -> Response {
        if self.config.zoom_disabled || event.delta_y == 0.0 || event.delta_y.is_nan() {
            return Response::IGNORED;
        }
        let steps = if event.delta_y < 0.0 { 1.0 } else { -1.0 };
        Response::changed(self.zoom_by(surface, steps, event.position)).prevent_default()
    }
}
