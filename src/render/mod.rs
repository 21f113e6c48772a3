//! Single-ellipse overlay rendering
//!
//! A [`Surface`] is the drawing backend (an SVG document, a canvas, a DOM
//! overlay). [`EllipseRenderer`] owns a surface plus the handle of the one
//! ellipse drawn on it, creates that ellipse lazily on first use and only
//! mutates it afterwards.

mod svg;

pub use svg::*;

use crate::types::{LinkId, PixelPoint};
use std::fmt;

/// Geometry of the clearance ellipse in overlay pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EllipseAttributes {
    pub center: PixelPoint,
    /// Clockwise rotation about `center` in degrees, applied to an ellipse
    /// whose major axis initially lies along the x axis
    pub rotation: f64,
    pub semi_major: f64,
    pub semi_minor: f64,
}

impl EllipseAttributes {
    /// Ellipse whose major axis points along a compass bearing
    ///
    /// An unrotated ellipse has its major axis east-west, which is a bearing
    /// of 90°, so the applied rotation is `bearing - 90`.
    pub fn along_bearing(
        center: PixelPoint,
        bearing: f64,
        semi_major: f64,
        semi_minor: f64,
    ) -> Self {
        Self {
            center,
            rotation: bearing - 90.0,
            semi_major,
            semi_minor,
        }
    }

    pub fn area(&self) -> f64 {
        std::f64::consts::PI * self.semi_major * self.semi_minor
    }
}

/// Drawing backend for the clearance overlay
pub trait Surface {
    /// Handle to a shape created on this surface
    type Shape: fmt::Debug;

    /// Create a new ellipse element, initially without geometry
    fn create_ellipse(&mut self) -> Self::Shape;

    /// Replace the geometry of an existing ellipse
    fn update_ellipse(&mut self, shape: &Self::Shape, attributes: &EllipseAttributes);

    /// Show or hide the whole overlay
    fn set_visible(&mut self, visible: bool);

    /// Toggle the selection highlight of a link, if the surface draws links
    fn set_link_highlight(&mut self, _link: LinkId, _highlighted: bool) {}
}

/// Renders the clearance ellipse onto a surface
///
/// At most one ellipse ever exists on the surface. It is created by the first
/// [`render`](Self::render) and reused by every later call.
#[derive(Debug)]
pub struct EllipseRenderer<S: Surface> {
    surface: S,
    shape: Option<S::Shape>,
}

impl<S: Surface> EllipseRenderer<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            shape: None,
        }
    }

    /// Draw (or redraw) the ellipse and make the overlay visible
    pub fn render(&mut self, attributes: &EllipseAttributes) {
        let shape = self
            .shape
            .get_or_insert_with(|| self.surface.create_ellipse());

        self.surface.update_ellipse(shape, attributes);
        self.surface.set_visible(true);
    }

    /// Hide the overlay, keeping the ellipse for later reuse
    pub fn hide(&mut self) {
        self.surface.set_visible(false);
    }

    /// Whether the ellipse has been created yet
    pub fn has_shape(&self) -> bool {
        self.shape.is_some()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }
}
