//! Pairing and Round: the abstract output of round-robin generation.

use crate::models::club::ClubId;
use serde::{Deserialize, Serialize};

/// Two clubs drawn against each other, home side first. `away == None` is a bye.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct Pairing {
    pub home: ClubId,
    pub away: Option<ClubId>,
}

impl Pairing {
    pub fn new(home: ClubId, away: ClubId) -> Self {
        Self {
            home,
            away: Some(away),
        }
    }

    pub fn bye(club: ClubId) -> Self {
        Self { home: club, away: None }
    }

    /// Build from two circle-method slots; at most one of them may be empty.
    pub(crate) fn from_slots(a: Option<ClubId>, b: Option<ClubId>) -> Option<Self> {
        match (a, b) {
            (Some(home), Some(away)) => Some(Self::new(home, away)),
            (Some(club), None) | (None, Some(club)) => Some(Self::bye(club)),
            (None, None) => None,
        }
    }

    pub fn is_bye(&self) -> bool {
        self.away.is_none()
    }

    /// Same clubs with home and away swapped. Byes are returned unchanged.
    pub fn reversed(&self) -> Self {
        match self.away {
            Some(away) => Self::new(away, self.home),
            None => *self,
        }
    }

    pub fn involves(&self, club: ClubId) -> bool {
        self.home == club || self.away == Some(club)
    }
}

/// One round of a round-robin: no club appears twice.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Round {
    /// 1-based round number.
    pub number: u32,
    pub pairings: Vec<Pairing>,
}

impl Round {
    /// Pairings that actually produce a match.
    pub fn matches(&self) -> impl Iterator<Item = &Pairing> {
        self.pairings.iter().filter(|p| !p.is_bye())
    }

    /// Club sitting out this round, if any.
    pub fn bye_club(&self) -> Option<ClubId> {
        self.pairings.iter().find(|p| p.is_bye()).map(|p| p.home)
    }
}
