// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_event_state --heading-base-level=0

//! Understory Event State: Common event state managers for UI interactions.
//!
//! This crate provides small, focused state machines for common UI interactions
//! that require stateful tracking across multiple events. Each module handles a
//! specific interaction pattern:
//!
//! - [`drag`]: Track drag operations with movement deltas and total offsets
//! - [`pinch`]: Track two-point pinch gestures as distance ratios around a midpoint
//! - [`activation`]: Recognize double activations (double click, double tap)
//!   from event timestamps
//!
//! ## Design Philosophy
//!
//! Each state manager is designed to be:
//!
//! - **Minimal and focused**: Each handles one specific interaction pattern
//! - **Stateful but simple**: Track just enough state to compute transitions
//! - **Integration-friendly**: Work with any event routing or input system
//!
//! The crate does not assume any particular UI framework or event system.
//! Managers accept raw positions and timestamps and produce deltas, ratios or
//! recognition results that applications interpret. Gesture-level policy (which
//! button pans, how many contacts pinch) belongs to the caller; see
//! `understory_viewbox` for a pan/zoom recognizer built from these pieces.
//!
//! ## Usage Patterns
//!
//! ### Drag Operations
//!
//! ```rust
//! # #[cfg(feature = "drag")]
//! # fn example() {
//! use kurbo::{Point, Vec2};
//! use understory_event_state::drag::DragState;
//!
//! let mut drag = DragState::new(Point::new(10.0, 10.0));
//! assert_eq!(drag.advance(Point::new(15.0, 12.0)), Vec2::new(5.0, 2.0));
//! # }
//! ```
//!
//! ### Pinch Gestures
//!
//! ```rust
//! # #[cfg(feature = "pinch")]
//! # fn example() {
//! use kurbo::Point;
//! use understory_event_state::pinch::PinchState;
//!
//! let mut pinch = PinchState::new(Point::new(0.0, 0.0), Point::new(0.0, 50.0));
//! let update = pinch.update(Point::new(0.0, 0.0), Point::new(0.0, 25.0));
//! assert_eq!(update.ratio, Some(0.5));
//! # }
//! ```
//!
//! ### Double Activation
//!
//! ```rust
//! # #[cfg(feature = "activation")]
//! # fn example() {
//! use understory_event_state::activation::DoubleActivation;
//!
//! let mut taps = DoubleActivation::new(300.0);
//! assert!(!taps.activate(10.0));
//! assert!(taps.activate(200.0));
//! # }
//! ```
//!
//! ## Features
//!
//! - `drag`: Enable drag state tracking (requires `kurbo` dependency)
//! - `pinch`: Enable pinch state tracking (requires `kurbo` dependency)
//! - `activation`: Enable double activation detection
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(feature = "activation")]
pub mod activation;
#[cfg(feature = "drag")]
pub mod drag;
#[cfg(feature = "pinch")]
pub mod pinch;
