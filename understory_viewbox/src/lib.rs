// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_viewbox --heading-base-level=0

//! Understory View Box: a pan/zoom engine for SVG `viewBox` windows.
//!
//! This crate keeps a rectangular window ("view box") over a fixed document
//! coordinate space and moves it in response to pointer, touch and wheel
//! input:
//! - Drag with the primary button or one finger to pan.
//! - Scroll or pinch with two fingers to zoom around the cursor or the pinch
//!   midpoint.
//! - Double middle-click or double tap to reset.
//!
//! It does **not** render anything or own the document. Callers are expected
//! to:
//! - Forward host input events to [`PanZoom`]'s handlers, honoring
//!   [`Response::prevent_default`].
//! - Answer a few measurement queries through the [`Surface`] trait (content
//!   bounds, rendered client rectangle, screen transform).
//! - Apply [`PanZoom::view_box_string`] to the `viewBox` attribute whenever a
//!   handler reports [`Response::changed`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Affine, Point, Rect};
//! use understory_viewbox::{
//!     PanZoom, PanZoomConfig, PointerButton, PointerEvent, SurfaceSnapshot, WheelEvent,
//! };
//!
//! let mut view = PanZoom::new(PanZoomConfig::editor()).unwrap();
//!
//! // Content is 100x100 document units; fit with a 5% margin.
//! let surface = SurfaceSnapshot::detached()
//!     .with_content_bounds(Rect::new(0.0, 0.0, 100.0, 100.0))
//!     .with_client_rect(Rect::new(0.0, 0.0, 105.0, 105.0))
//!     .with_screen_ctm(Affine::translate((2.5, 2.5)));
//! let _ = view.attach(&surface);
//! assert_eq!(view.view_box_string(), "-2.5 -2.5 105 105");
//!
//! // Drag 30px right and 20px down.
//! let _ = view.pointer_down(&PointerEvent::new(Point::ZERO, PointerButton::Primary, 0.0));
//! let moved = view.pointer_move(
//!     &surface,
//!     &PointerEvent::new(Point::new(30.0, 20.0), PointerButton::Primary, 16.0),
//! );
//! assert!(moved.changed);
//! assert_eq!(view.view_box_string(), "-32.5 -22.5 105 105");
//! let _ = view.global_pointer_up();
//!
//! // Scroll up to zoom in one level: the view box halves in size.
//! let _ = view.wheel(&surface, &WheelEvent::new(Point::new(52.5, 52.5), -100.0, 32.0));
//! assert_eq!(view.zoom_level(), 2.0);
//! assert_eq!(view.view_box().width, 52.5);
//! ```
//!
//! ## Design notes
//!
//! - Zoom is expressed as a level; each level scales the view box by
//!   [`PanZoomConfig::zoom_step_base`]. Wheel events move one level, pinches
//!   move continuously by the distance ratio.
//! - Gestures are a tagged state ([`GestureMode`]) rebuilt from the active
//!   touch count on every touch event, so out-of-order input cannot leave the
//!   engine in an impossible state.
//! - Soft failures are typed ([`LocalPoint`], [`Fit`]) rather than producing
//!   NaN or infinite view boxes.
//! - Everything is single-threaded and synchronous. Double activation
//!   detection compares timestamps; nothing is scheduled.
//!
//! ## Features
//!
//! - `std` (default) / `libm`: float math backend, forwarded to Kurbo.
//! - `serde`: `Serialize`/`Deserialize` for [`ViewBox`] and [`PanZoomConfig`].
//!
//! Diagnostics are emitted through `tracing` at `debug` (gesture transitions,
//! resets, degraded measurements) and `trace` (committed view boxes).
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod events;
mod fit;
mod geometry;
mod pan_zoom;
mod surface;
mod view_box;

pub use config::{AnchorMode, ConfigError, PanRatio, PanZoomConfig};
pub use events::{PointerButton, PointerEvent, Response, TouchEvent, WheelEvent};
pub use fit::{Fit, fit_content};
pub use geometry::{LocalPoint, constrain, to_local};
pub use pan_zoom::{GestureMode, PanZoom};
pub use surface::{Surface, SurfaceSnapshot};
pub use view_box::{ParseViewBoxError, ViewBox};
