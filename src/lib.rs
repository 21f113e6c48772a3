#![doc = include_str!("../README.md")]

pub use crate::error::{Error, Result, Warning};
pub use crate::planner::{ClickOutcome, LinkCreation, Planner};
pub use crate::render::{
    EllipseAttributes, EllipseRenderer, OverlayStyle, ShapeId, Surface, SvgOverlay,
};
pub use crate::types::*;
pub use crate::viewport::{MapProjection, MercatorView, ViewportProjector};
pub use crate::visualizer::{LinkGeometry, LinkRender, LinkVisualizer, RenderOutcome, Selection};

mod error;
pub mod fresnel;
pub mod geo;
mod planner;
pub mod render;
mod types;
pub mod viewport;
mod visualizer;
