use crate::types::{LatLng, PixelPoint};
use crate::viewport::MapProjection;
use std::f64::consts::PI;

/// Latitude at which spherical Web Mercator becomes a square world
pub const MAX_LATITUDE: f64 = 85.051_128_779_806_6;

const DEFAULT_TILE_SIZE: f64 = 256.0;

/// Spherical Web Mercator viewport
///
/// Models the view state of a slippy map: a center, a zoom level and a
/// viewport size. `project` yields world pixels at the current zoom and
/// `pixel_origin` is the world pixel at the viewport's top-left corner,
/// rounded to whole pixels like tile-based engines do.
///
/// # Example
///
/// ```
/// use fresnel_planner::{LatLng, MapProjection, MercatorView, PixelPoint};
///
/// let view = MercatorView::new(LatLng::new(0.0, 0.0), 0.0, 256.0, 256.0);
/// assert_eq!(view.project(LatLng::new(0.0, 0.0)), PixelPoint::new(128.0, 128.0));
/// assert_eq!(view.pixel_origin(), PixelPoint::new(0.0, 0.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MercatorView {
    center: LatLng,
    zoom: f64,
    width: f64,
    height: f64,
    tile_size: f64,
}

impl MercatorView {
    /// Create a view of `width` × `height` pixels centered on `center`
    pub fn new(center: LatLng, zoom: f64, width: f64, height: f64) -> Self {
        Self {
            center,
            zoom,
            width,
            height,
            tile_size: DEFAULT_TILE_SIZE,
        }
    }

    /// Override the tile size (default 256 px)
    ///
    /// Returns `&mut self` to allow method chaining.
    pub fn with_tile_size(&mut self, tile_size: f64) -> &mut Self {
        self.tile_size = tile_size;
        self
    }

    pub fn center(&self) -> LatLng {
        self.center
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Viewport size as `(width, height)` in pixels
    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Move the view to a new center and zoom
    pub fn set_view(&mut self, center: LatLng, zoom: f64) {
        self.center = center;
        self.zoom = zoom;
    }

    /// Change the zoom level, keeping the center
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom;
    }

    /// Pan the view by a pixel offset at the current zoom
    ///
    /// Positive `dx` moves the view east, positive `dy` south.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        let center = self.project(self.center) + PixelPoint::new(dx, dy);
        self.center = self.unproject(center);
    }

    /// Convert a world pixel at the current zoom back to a geographic position
    pub fn unproject(&self, pixel: PixelPoint) -> LatLng {
        let scale = self.scale();
        let lng = pixel.x / scale * 360.0 - 180.0;
        let lat = (PI * (1.0 - 2.0 * pixel.y / scale)).sinh().atan().to_degrees();
        LatLng::new(lat, lng)
    }

    /// World size in pixels at the current zoom
    fn scale(&self) -> f64 {
        self.tile_size * self.zoom.exp2()
    }
}

impl MapProjection for MercatorView {
    fn project(&self, position: LatLng) -> PixelPoint {
        let scale = self.scale();
        let lat = position.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();

        let x = (position.lng + 180.0) / 360.0 * scale;
        let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / PI) / 2.0 * scale;

        PixelPoint::new(x, y)
    }

    fn pixel_origin(&self) -> PixelPoint {
        let half_size = PixelPoint::new(self.width / 2.0, self.height / 2.0);
        (self.project(self.center) - half_size).round()
    }
}
