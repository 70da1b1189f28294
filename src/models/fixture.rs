//! ScheduledMatch: the concrete fixture handed to the storage layer.

use crate::models::bracket::{BracketType, NodeId, Stage};
use crate::models::club::ClubId;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Where a scheduled match comes from.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum FixtureSource {
    RoundRobin {
        group: Option<usize>,
    },
    Bracket {
        node: NodeId,
        bracket: BracketType,
        stage: Stage,
    },
}

/// A single fixture on the calendar.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ScheduledMatch {
    /// 1-based position in the emitted calendar.
    pub number: u32,
    pub round: u32,
    /// 1..N inside a best-of-N or two-legged series.
    pub game_number: u8,
    /// None until the feeder node has a winner (playoffs only).
    pub home: Option<ClubId>,
    pub away: Option<ClubId>,
    pub kickoff: DateTime<FixedOffset>,
    pub venue: String,
    pub source: FixtureSource,
}

impl ScheduledMatch {
    pub fn involves(&self, club: ClubId) -> bool {
        self.home == Some(club) || self.away == Some(club)
    }

    pub fn group(&self) -> Option<usize> {
        match self.source {
            FixtureSource::RoundRobin { group } => group,
            FixtureSource::Bracket { .. } => None,
        }
    }

    pub fn node(&self) -> Option<NodeId> {
        match self.source {
            FixtureSource::Bracket { node, .. } => Some(node),
            FixtureSource::RoundRobin { .. } => None,
        }
    }
}
