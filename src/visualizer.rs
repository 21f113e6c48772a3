//! Selection handling and the render pipeline for the clearance ellipse

use crate::error::{Result, Warning};
use crate::render::{EllipseAttributes, EllipseRenderer, Surface};
use crate::types::{Frequency, LatLng, LinkId, Tower, TowerId};
use crate::viewport::{MapProjection, ViewportProjector};
use crate::{ClickOutcome, Planner, fresnel, geo};
use log::{debug, warn};

/// Distances (meters or pixels) at or below this are treated as zero
const DEGENERATE_EPSILON: f64 = 1e-9;

/// Which link, if any, has its clearance ellipse shown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Idle,
    Selected(LinkId),
}

/// Viewport-independent properties of a link
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinkGeometry {
    /// Great-circle length in meters
    pub distance: f64,
    /// Initial bearing from tower A to tower B in degrees
    pub bearing: f64,
    pub midpoint: LatLng,
    pub frequency: Frequency,
    /// Wavelength in meters
    pub wavelength: f64,
    /// First Fresnel zone radius at the midpoint in meters
    pub fresnel_radius: f64,
}

impl LinkGeometry {
    /// Compute the geometry of a link from `a` to `b`
    ///
    /// Uses the frequency of `a`. Both towers shared it when the link was
    /// created; if it has drifted since, `a` wins.
    pub fn between(a: &Tower, b: &Tower) -> Self {
        if a.frequency != b.frequency {
            debug!(
                "Towers {} and {} no longer share a frequency, using {}",
                a.id, b.id, a.frequency
            );
        }

        let frequency_hz = a.frequency.as_hz();
        let distance = geo::distance(a.position, b.position);

        Self {
            distance,
            bearing: geo::initial_bearing(a.position, b.position),
            midpoint: geo::midpoint(a.position, b.position),
            frequency: a.frequency,
            wavelength: fresnel::wavelength(frequency_hz),
            fresnel_radius: fresnel::max_fresnel_radius(frequency_hz, distance),
        }
    }
}

/// One completed render pass
#[derive(Debug, Clone, PartialEq)]
pub struct LinkRender {
    pub link: LinkId,
    pub geometry: LinkGeometry,
    pub ellipse: EllipseAttributes,
    /// Set when the ellipse was collapsed to zero size or may be misplaced
    pub warning: Option<Warning>,
}

/// What a selection or viewport change did to the overlay
#[derive(Debug, Clone, PartialEq)]
pub enum RenderOutcome {
    /// No link is selected, nothing to draw
    Idle,
    /// The ellipse was drawn for the selected link
    Rendered(LinkRender),
    /// Nothing could be drawn and the overlay is hidden
    Skipped(Warning),
}

impl RenderOutcome {
    pub fn rendered(&self) -> Option<&LinkRender> {
        match self {
            RenderOutcome::Rendered(render) => Some(render),
            _ => None,
        }
    }
}

/// Keeps the clearance ellipse of the selected link in sync with the map
///
/// Owns the planner state, the map collaborator and the renderer. All work
/// is synchronous: every selection, frequency edit or settled viewport change
/// runs one complete render pass before returning.
///
/// # Example
///
/// ```
/// use fresnel_planner::{Frequency, LatLng, LinkVisualizer, MercatorView, Planner, SvgOverlay};
///
/// let mut planner = Planner::new();
/// let ghz = Frequency::from_ghz(5.8)?;
/// let a = planner.add_tower(LatLng::new(46.000, 8.000), ghz)?;
/// let b = planner.add_tower(LatLng::new(46.005, 8.010), ghz)?;
/// let link = planner.create_link(a, b)?;
///
/// let map = MercatorView::new(LatLng::new(46.0025, 8.005), 15.0, 800.0, 600.0);
/// let mut visualizer = LinkVisualizer::new(planner, map, SvgOverlay::new(800.0, 600.0));
///
/// let outcome = visualizer.select_link(link);
/// assert!(outcome.rendered().is_some());
/// assert_eq!(visualizer.surface().shape_count(), 1);
/// # Ok::<(), fresnel_planner::Error>(())
/// ```
#[derive(Debug)]
pub struct LinkVisualizer<M, S: Surface> {
    planner: Planner,
    map: M,
    renderer: EllipseRenderer<S>,
    selection: Selection,
}

impl<M: MapProjection, S: Surface> LinkVisualizer<M, S> {
    pub fn new(planner: Planner, map: M, surface: S) -> Self {
        Self {
            planner,
            map,
            renderer: EllipseRenderer::new(surface),
            selection: Selection::Idle,
        }
    }

    /// Select a link and draw its clearance ellipse
    ///
    /// The previously selected link loses its highlight and the existing
    /// ellipse is reused for the new link. Unknown link ids leave the
    /// selection untouched.
    pub fn select_link(&mut self, link: LinkId) -> RenderOutcome {
        if self.planner.link(link).is_none() {
            warn!("Ignoring selection of unknown link {link}");
            return RenderOutcome::Skipped(Warning::UnknownLink(link));
        }

        if let Selection::Selected(previous) = self.selection
            && previous != link
        {
            self.renderer.surface_mut().set_link_highlight(previous, false);
        }

        debug!("Selected link {link}");
        self.selection = Selection::Selected(link);
        self.renderer.surface_mut().set_link_highlight(link, true);

        self.render_selected()
    }

    /// Deselect the current link and hide the overlay
    pub fn clear_selection(&mut self) {
        if let Selection::Selected(previous) = std::mem::take(&mut self.selection) {
            debug!("Deselected link {previous}");
            self.renderer.surface_mut().set_link_highlight(previous, false);
            self.renderer.hide();
        }
    }

    /// Re-render after the map finished a pan or zoom gesture
    ///
    /// Distances and bearings do not depend on the viewport but are
    /// recomputed anyway along with the pixel projection.
    pub fn on_viewport_changed(&mut self) -> RenderOutcome {
        self.render_selected()
    }

    /// Apply a settled gesture to the map, then re-render
    pub fn update_viewport(&mut self, gesture: impl FnOnce(&mut M)) -> RenderOutcome {
        gesture(&mut self.map);
        self.on_viewport_changed()
    }

    /// Place a new tower
    pub fn add_tower(&mut self, position: LatLng, frequency: Frequency) -> Result<TowerId> {
        self.planner.add_tower(position, frequency)
    }

    /// Edit a tower's frequency, re-rendering if the selected link uses it
    pub fn set_frequency(&mut self, tower: TowerId, frequency: Frequency) -> Result<()> {
        self.planner.set_frequency(tower, frequency)?;

        if let Selection::Selected(link) = self.selection
            && self
                .planner
                .link(link)
                .is_some_and(|link| link.connects(tower))
        {
            self.render_selected();
        }

        Ok(())
    }

    /// Forward a tower click to the link creation flow
    pub fn click_tower(&mut self, tower: TowerId) -> Result<ClickOutcome> {
        self.planner.click_tower(tower)
    }

    /// Forward a click on empty map area to the link creation flow
    pub fn click_map(&mut self) -> ClickOutcome {
        self.planner.click_map()
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Currently selected link
    pub fn selected_link(&self) -> Option<LinkId> {
        match self.selection {
            Selection::Idle => None,
            Selection::Selected(link) => Some(link),
        }
    }

    pub fn planner(&self) -> &Planner {
        &self.planner
    }

    pub fn map(&self) -> &M {
        &self.map
    }

    /// Mutable access to the map
    ///
    /// Call [`on_viewport_changed`](Self::on_viewport_changed) once the
    /// change has settled.
    pub fn map_mut(&mut self) -> &mut M {
        &mut self.map
    }

    pub fn surface(&self) -> &S {
        self.renderer.surface()
    }

    fn render_selected(&mut self) -> RenderOutcome {
        let Selection::Selected(link_id) = self.selection else {
            return RenderOutcome::Idle;
        };

        let outcome = self.compute(link_id);
        match &outcome {
            RenderOutcome::Rendered(render) => {
                debug!(
                    "Rendering link {link_id}: {:.1} m at {:.1}°, radius {:.2} m -> {:?}",
                    render.geometry.distance,
                    render.geometry.bearing,
                    render.geometry.fresnel_radius,
                    render.ellipse
                );
                if let Some(Warning::AntimeridianCrossing { .. }) = render.warning {
                    warn!("Link {link_id} crosses the antimeridian, overlay midpoint is misplaced");
                }
                self.renderer.render(&render.ellipse);
            }
            RenderOutcome::Skipped(warning) => {
                warn!("Not rendering link {link_id}: {warning:?}");
                self.renderer.hide();
            }
            RenderOutcome::Idle => {}
        }

        outcome
    }

    fn compute(&self, link_id: LinkId) -> RenderOutcome {
        let Some(link) = self.planner.link(link_id) else {
            return RenderOutcome::Skipped(Warning::UnknownLink(link_id));
        };
        let (a, b) = match (
            self.planner.tower(link.tower_a),
            self.planner.tower(link.tower_b),
        ) {
            (Some(a), Some(b)) => (a, b),
            (None, _) => {
                return RenderOutcome::Skipped(Warning::MissingTower {
                    link: link_id,
                    tower: link.tower_a,
                });
            }
            (_, None) => {
                return RenderOutcome::Skipped(Warning::MissingTower {
                    link: link_id,
                    tower: link.tower_b,
                });
            }
        };

        let geometry = LinkGeometry::between(a, b);

        let projector = ViewportProjector::new(&self.map);
        let start = projector.to_viewport_pixel(a.position);
        let end = projector.to_viewport_pixel(b.position);
        let center = projector.to_viewport_pixel(geometry.midpoint);

        if !(start.is_finite() && end.is_finite() && center.is_finite()) {
            return RenderOutcome::Skipped(Warning::NonFiniteProjection { link: link_id });
        }

        let length_px = start.distance_to(end);

        // Pixels per meter comes from the projected link itself, so it holds
        // at every zoom level and latitude
        let (ellipse, warning) =
            if geometry.distance <= DEGENERATE_EPSILON || length_px <= DEGENERATE_EPSILON {
                let ellipse = EllipseAttributes::along_bearing(center, geometry.bearing, 0.0, 0.0);
                (ellipse, Some(Warning::DegenerateGeometry { link: link_id }))
            } else {
                let scale = length_px / geometry.distance;
                let ellipse = EllipseAttributes::along_bearing(
                    center,
                    geometry.bearing,
                    length_px / 2.0,
                    geometry.fresnel_radius * scale,
                );
                let warning = ((a.position.lng - b.position.lng).abs() > 180.0)
                    .then_some(Warning::AntimeridianCrossing { link: link_id });
                (ellipse, warning)
            };

        RenderOutcome::Rendered(LinkRender {
            link: link_id,
            geometry,
            ellipse,
            warning,
        })
    }
}
