// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Rect};

/// Queries the engine needs from the host surface (typically an `<svg>`
/// element or a canvas standing in for one).
///
/// Every query may be unavailable, for example before the surface has been
/// attached or laid out. The engine degrades gracefully in that case instead
/// of failing the whole viewport.
pub trait Surface {
    /// Intrinsic bounding box of the content, in document units.
    fn content_bounds(&self) -> Option<Rect>;

    /// Rendered bounding rectangle of the surface, in client pixels.
    fn client_rect(&self) -> Option<Rect>;

    /// Current local → client transform of the surface.
    fn screen_ctm(&self) -> Option<Affine>;
}

/// Plain-data [`Surface`] for hosts that push measurements in, and for tests.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SurfaceSnapshot {
    /// See [`Surface::content_bounds`].
    pub content_bounds: Option<Rect>,
    /// See [`Surface::client_rect`].
    pub client_rect: Option<Rect>,
    /// See [`Surface::screen_ctm`].
    pub screen_ctm: Option<Affine>,
}

impl SurfaceSnapshot {
    /// A snapshot with nothing available yet.
    #[must_use]
    pub fn detached() -> Self {
        Self::default()
    }

    /// Sets the content bounds.
    #[must_use]
    pub fn with_content_bounds(mut self, bounds: Rect) -> Self {
        self.content_bounds = Some(bounds);
        self
    }

    /// Sets the client rectangle.
    #[must_use]
    pub fn with_client_rect(mut self, rect: Rect) -> Self {
        self.client_rect = Some(rect);
        self
    }

    /// Sets the screen transform.
    #[must_use]
    pub fn with_screen_ctm(mut self, ctm: Affine) -> Self {
        self.screen_ctm = Some(ctm);
        self
    }
}

impl Surface for SurfaceSnapshot {
    fn content_bounds(&self) -> Option<Rect> {
        self.content_bounds
    }

    fn client_rect(&self) -> Option<Rect> {
        self.client_rect
    }

    fn screen_ctm(&self) -> Option<Affine> {
        self.screen_ctm
    }
}
