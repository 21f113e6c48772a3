use crate::types::{Frequency, LatLng};
use std::fmt;

/// Stable tower identifier, unique within a planner
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TowerId(pub u32);

impl fmt::Display for TowerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

/// A radio tower placed on the map
#[derive(Debug, Clone, PartialEq)]
pub struct Tower {
    pub id: TowerId,
    pub position: LatLng,
    pub frequency: Frequency,
}
