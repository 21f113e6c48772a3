use crate::types::{LinkId, TowerId};

/// Rejected planner commands
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Invalid frequency: {0:?} (expected a positive number of GHz)")]
    InvalidFrequency(String),

    #[error("Invalid tower position: lat={lat}, lng={lng}")]
    InvalidPosition { lat: f64, lng: f64 },

    #[error("Unknown tower: {0}")]
    UnknownTower(TowerId),

    #[error("Unknown link: {0}")]
    UnknownLink(LinkId),

    #[error("Cannot link tower {0} to itself")]
    SameTower(TowerId),

    #[error("Frequency mismatch: tower {a} and tower {b} operate on different frequencies")]
    FrequencyMismatch { a: TowerId, b: TowerId },

    #[error("Towers are already connected by link {0}")]
    DuplicateLink(LinkId),
}

/// Non-fatal issues encountered while rendering the clearance overlay
///
/// These never abort the caller. The overlay degrades to "render nothing"
/// (or a zero-area ellipse) and the warning is reported alongside.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Warning {
    /// Selected link id is not known to the planner
    UnknownLink(LinkId),

    /// Link references a tower the planner does not hold
    MissingTower { link: LinkId, tower: TowerId },

    /// Endpoints coincide (in meters or in pixels), ellipse collapsed to zero size
    DegenerateGeometry { link: LinkId },

    /// Map projected the link to NaN or infinite pixels
    NonFiniteProjection { link: LinkId },

    /// Link spans the antimeridian, so the coordinate-mean midpoint lies on
    /// the far side of the globe
    AntimeridianCrossing { link: LinkId },
}

pub type Result<T> = std::result::Result<T, Error>;
