use crate::types::TowerId;
use std::fmt;

/// Stable link identifier, unique within a planner
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LinkId(pub u32);

impl fmt::Display for LinkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L{}", self.0)
    }
}

/// Point-to-point link between two distinct towers
///
/// Holds tower ids only; the towers themselves live in the
/// [`Planner`](crate::Planner) and outlive the links that reference them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    pub id: LinkId,
    pub tower_a: TowerId,
    pub tower_b: TowerId,
}

impl Link {
    /// Check whether this link has `tower` as one of its endpoints
    pub fn connects(&self, tower: TowerId) -> bool {
        self.tower_a == tower || self.tower_b == tower
    }

    /// Check whether this link joins `a` and `b`, in either direction
    pub fn joins(&self, a: TowerId, b: TowerId) -> bool {
        (self.tower_a == a && self.tower_b == b) || (self.tower_a == b && self.tower_b == a)
    }
}
