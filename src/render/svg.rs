use crate::render::{EllipseAttributes, Surface};
use crate::types::LinkId;
use std::collections::BTreeSet;
use std::fmt::Write;

/// Visual style of the clearance ellipse
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayStyle {
    pub stroke: String,
    pub stroke_width: f64,
    pub fill: String,
    pub fill_opacity: f64,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            stroke: "#ff7800".to_string(),
            stroke_width: 2.0,
            fill: "#ff7800".to_string(),
            fill_opacity: 0.2,
        }
    }
}

impl OverlayStyle {
    /// Set stroke color and width
    ///
    /// Returns `&mut self` to allow method chaining.
    pub fn with_stroke(&mut self, stroke: impl Into<String>, width: f64) -> &mut Self {
        self.stroke = stroke.into();
        self.stroke_width = width;
        self
    }

    /// Set fill color and opacity
    ///
    /// Returns `&mut self` to allow method chaining.
    pub fn with_fill(&mut self, fill: impl Into<String>, opacity: f64) -> &mut Self {
        self.fill = fill.into();
        self.fill_opacity = opacity;
        self
    }
}

/// Handle to an ellipse element of an [`SvgOverlay`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeId(usize);

/// In-memory SVG overlay surface
///
/// Keeps its elements as plain data and serializes them on demand with
/// [`to_svg`](Self::to_svg). Also remembers which links are highlighted, so
/// hosts drawing their own link lines can query it.
#[derive(Debug, Clone)]
pub struct SvgOverlay {
    width: f64,
    height: f64,
    style: OverlayStyle,
    ellipses: Vec<Option<EllipseAttributes>>,
    visible: bool,
    highlighted: BTreeSet<LinkId>,
}

impl SvgOverlay {
    /// Create an empty, hidden overlay of `width` × `height` pixels
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            style: OverlayStyle::default(),
            ellipses: Vec::new(),
            visible: false,
            highlighted: BTreeSet::new(),
        }
    }

    /// Replace the ellipse style
    ///
    /// Returns `&mut self` to allow method chaining.
    pub fn with_style(&mut self, style: OverlayStyle) -> &mut Self {
        self.style = style;
        self
    }

    pub fn style(&self) -> &OverlayStyle {
        &self.style
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Number of ellipse elements ever created on this overlay
    pub fn shape_count(&self) -> usize {
        self.ellipses.len()
    }

    /// Geometry of an ellipse, `None` until it has been updated once
    pub fn ellipse(&self, shape: ShapeId) -> Option<&EllipseAttributes> {
        self.ellipses.get(shape.0)?.as_ref()
    }

    /// Ellipses that have geometry, in creation order
    pub fn ellipses(&self) -> impl Iterator<Item = &EllipseAttributes> {
        self.ellipses.iter().flatten()
    }

    pub fn is_highlighted(&self, link: LinkId) -> bool {
        self.highlighted.contains(&link)
    }

    pub fn highlighted_links(&self) -> impl Iterator<Item = LinkId> + '_ {
        self.highlighted.iter().copied()
    }

    /// Serialize the overlay as a standalone SVG document
    pub fn to_svg(&self) -> String {
        let mut svg = String::new();

        // Writing into a `String` cannot fail
        let _ = write!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}""#,
            self.width, self.height
        );
        if !self.visible {
            svg.push_str(r#" visibility="hidden""#);
        }
        svg.push_str(">\n");

        for ellipse in self.ellipses() {
            let OverlayStyle {
                stroke,
                stroke_width,
                fill,
                fill_opacity,
            } = &self.style;
            let (cx, cy) = (ellipse.center.x, ellipse.center.y);

            let _ = writeln!(
                svg,
                r#"  <ellipse cx="{cx:.2}" cy="{cy:.2}" rx="{:.2}" ry="{:.2}" transform="rotate({:.2} {cx:.2} {cy:.2})" stroke="{stroke}" stroke-width="{stroke_width}" fill="{fill}" fill-opacity="{fill_opacity}"/>"#,
                ellipse.semi_major, ellipse.semi_minor, ellipse.rotation,
            );
        }

        svg.push_str("</svg>");
        svg
    }
}

impl Surface for SvgOverlay {
    type Shape = ShapeId;

    fn create_ellipse(&mut self) -> ShapeId {
        self.ellipses.push(None);
        ShapeId(self.ellipses.len() - 1)
    }

    fn update_ellipse(&mut self, shape: &ShapeId, attributes: &EllipseAttributes) {
        if let Some(slot) = self.ellipses.get_mut(shape.0) {
            *slot = Some(*attributes);
        }
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn set_link_highlight(&mut self, link: LinkId, highlighted: bool) {
        if highlighted {
            self.highlighted.insert(link);
        } else {
            self.highlighted.remove(&link);
        }
    }
}
