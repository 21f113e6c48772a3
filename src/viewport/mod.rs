//! Geographic to overlay-pixel projection
//!
//! The map engine itself is an external collaborator, reached only through
//! the [`MapProjection`] trait. [`MercatorView`] is a small reference
//! implementation for hosts without a map engine of their own, and for tests.

mod mercator;

pub use mercator::*;

use crate::types::{LatLng, PixelPoint};

/// Projection services of a panning/zooming map
pub trait MapProjection {
    /// Project a geographic position into the map's current pixel space
    fn project(&self, position: LatLng) -> PixelPoint;

    /// Top-left anchor of the map's pixel space relative to the overlay frame
    ///
    /// Changes whenever the viewport is panned or zoomed.
    fn pixel_origin(&self) -> PixelPoint;
}

impl<M: MapProjection + ?Sized> MapProjection for &M {
    fn project(&self, position: LatLng) -> PixelPoint {
        (**self).project(position)
    }

    fn pixel_origin(&self) -> PixelPoint {
        (**self).pixel_origin()
    }
}

/// Converts geographic positions to overlay-local pixel coordinates
///
/// Borrows the map for the duration of one render pass. Nothing is cached:
/// both the projection and the pixel origin depend on the live viewport, so
/// every call asks the map again.
pub struct ViewportProjector<'a, M: ?Sized> {
    map: &'a M,
}

impl<'a, M: MapProjection + ?Sized> ViewportProjector<'a, M> {
    pub fn new(map: &'a M) -> Self {
        Self { map }
    }

    /// Project `position` into the overlay's own coordinate frame
    ///
    /// The overlay surface stays put while the map's layer pane moves during a
    /// pan, so the layer pixel has to be re-anchored by subtracting the map's
    /// current pixel origin. Skipping this makes the overlay drift off the map.
    pub fn to_viewport_pixel(&self, position: LatLng) -> PixelPoint {
        self.map.project(position) - self.map.pixel_origin()
    }
}
