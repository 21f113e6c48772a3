//! Tower and link bookkeeping plus the two-click link creation flow

use crate::error::{Error, Result};
use crate::types::{Frequency, LatLng, Link, LinkId, Tower, TowerId};
use log::{debug, info};
use std::collections::BTreeMap;

/// Progress of the two-click link creation interaction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LinkCreation {
    #[default]
    Idle,
    /// First tower picked, waiting for the second click
    AwaitingSecondTower(TowerId),
}

/// Result of a click that did not fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Tower became the pending first endpoint
    Pending(TowerId),
    /// Pending tower was cleared without creating a link
    Cancelled,
    /// Nothing was pending and nothing happened
    Ignored,
    /// Second click completed a new link
    Created(LinkId),
}

/// Planner state: all towers, all links and the link creation phase
///
/// Towers and links are kept ordered by id. Ids are handed out sequentially
/// and never reused.
#[derive(Debug, Clone, Default)]
pub struct Planner {
    pub(crate) towers: BTreeMap<TowerId, Tower>,
    pub(crate) links: BTreeMap<LinkId, Link>,
    creation: LinkCreation,
    next_tower_id: u32,
    next_link_id: u32,
}

impl Planner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a new tower on the map
    pub fn add_tower(&mut self, position: LatLng, frequency: Frequency) -> Result<TowerId> {
        if !position.is_valid() {
            return Err(Error::InvalidPosition {
                lat: position.lat,
                lng: position.lng,
            });
        }

        self.next_tower_id += 1;
        let id = TowerId(self.next_tower_id);
        self.towers.insert(
            id,
            Tower {
                id,
                position,
                frequency,
            },
        );

        debug!("Added tower {id} at {position:?} on {frequency}");
        Ok(id)
    }

    /// Change the operating frequency of a tower
    ///
    /// Existing links are not re-validated; see [`mismatched_links`](Self::mismatched_links).
    pub fn set_frequency(&mut self, tower: TowerId, frequency: Frequency) -> Result<()> {
        let entry = self
            .towers
            .get_mut(&tower)
            .ok_or(Error::UnknownTower(tower))?;

        debug!("Tower {tower} frequency {} -> {frequency}", entry.frequency);
        entry.frequency = frequency;
        Ok(())
    }

    /// Link two distinct towers that operate on the same frequency
    pub fn create_link(&mut self, a: TowerId, b: TowerId) -> Result<LinkId> {
        let tower_a = self.tower(a).ok_or(Error::UnknownTower(a))?;
        let tower_b = self.tower(b).ok_or(Error::UnknownTower(b))?;

        if a == b {
            return Err(Error::SameTower(a));
        }
        if tower_a.frequency != tower_b.frequency {
            return Err(Error::FrequencyMismatch { a, b });
        }
        if let Some(existing) = self.links.values().find(|link| link.joins(a, b)) {
            return Err(Error::DuplicateLink(existing.id));
        }

        self.next_link_id += 1;
        let id = LinkId(self.next_link_id);
        self.links.insert(
            id,
            Link {
                id,
                tower_a: a,
                tower_b: b,
            },
        );

        info!("Created link {id} between {a} and {b}");
        Ok(id)
    }

    /// Handle a click on a tower
    ///
    /// The first click marks the tower as pending, a second click on the same
    /// tower cancels, and a click on another tower attempts to link both.
    /// After a link attempt the pending tower is cleared whether it succeeded
    /// or not. Clicking an unknown tower is an error and changes nothing.
    pub fn click_tower(&mut self, tower: TowerId) -> Result<ClickOutcome> {
        if !self.towers.contains_key(&tower) {
            return Err(Error::UnknownTower(tower));
        }

        match self.creation {
            LinkCreation::Idle => {
                self.creation = LinkCreation::AwaitingSecondTower(tower);
                debug!("Link creation started at {tower}");
                Ok(ClickOutcome::Pending(tower))
            }
            LinkCreation::AwaitingSecondTower(first) if first == tower => {
                self.creation = LinkCreation::Idle;
                debug!("Link creation at {tower} cancelled");
                Ok(ClickOutcome::Cancelled)
            }
            LinkCreation::AwaitingSecondTower(first) => {
                self.creation = LinkCreation::Idle;
                self.create_link(first, tower).map(ClickOutcome::Created)
            }
        }
    }

    /// Handle a click on an empty map area, cancelling any pending link
    pub fn click_map(&mut self) -> ClickOutcome {
        match std::mem::take(&mut self.creation) {
            LinkCreation::Idle => ClickOutcome::Ignored,
            LinkCreation::AwaitingSecondTower(tower) => {
                debug!("Link creation at {tower} cancelled by map click");
                ClickOutcome::Cancelled
            }
        }
    }

    pub fn link_creation(&self) -> LinkCreation {
        self.creation
    }

    pub fn tower(&self, id: TowerId) -> Option<&Tower> {
        self.towers.get(&id)
    }

    pub fn link(&self, id: LinkId) -> Option<&Link> {
        self.links.get(&id)
    }

    /// All towers, ordered by id
    pub fn towers(&self) -> impl Iterator<Item = &Tower> {
        self.towers.values()
    }

    /// All links, ordered by id
    pub fn links(&self) -> impl Iterator<Item = &Link> {
        self.links.values()
    }

    /// Resolve both endpoints of a link
    ///
    /// Returns `None` if the link is unknown or either tower is missing.
    pub fn link_towers(&self, id: LinkId) -> Option<(&Tower, &Tower)> {
        let link = self.link(id)?;
        Some((self.tower(link.tower_a)?, self.tower(link.tower_b)?))
    }

    /// Links whose towers no longer share a frequency
    ///
    /// Frequencies are only compared when a link is created. Editing a tower
    /// afterwards can leave its links mismatched; they stay valid and are
    /// only reported here.
    pub fn mismatched_links(&self) -> impl Iterator<Item = &Link> {
        self.links.values().filter(|link| {
            matches!(
                (self.tower(link.tower_a), self.tower(link.tower_b)),
                (Some(a), Some(b)) if a.frequency != b.frequency
            )
        })
    }
}
