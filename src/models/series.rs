//! SeriesFormat: how many matches one pairing turns into.

use crate::models::error::ScheduleError;
use serde::{Deserialize, Serialize};

/// Match format for a pairing.
///
/// `TwoLegs` is home-and-away on aggregate, with a shootout after an aggregate draw.
/// It is only valid in group-stage and qualification rounds.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesFormat {
    #[default]
    Single,
    BestOf(u8),
    TwoLegs,
}

impl SeriesFormat {
    /// Best-of-N with N in {1, 3, 5, 7}.
    pub fn best_of(n: u8) -> Result<Self, ScheduleError> {
        Self::BestOf(n).validate(false)
    }

    /// Reject even or oversized best-of lengths, and two-legged ties where they are not allowed.
    pub fn validate(self, allow_two_legs: bool) -> Result<Self, ScheduleError> {
        match self {
            SeriesFormat::Single => Ok(self),
            SeriesFormat::BestOf(1 | 3 | 5 | 7) => Ok(self),
            SeriesFormat::TwoLegs if allow_two_legs => Ok(self),
            _ => Err(ScheduleError::InvalidSeriesFormat(self)),
        }
    }

    /// Number of scheduled matches the series materializes into.
    pub fn match_count(self) -> u8 {
        match self {
            SeriesFormat::Single => 1,
            SeriesFormat::BestOf(n) => n,
            SeriesFormat::TwoLegs => 2,
        }
    }

    /// Wins needed to take the series; `None` when the aggregate score decides it.
    pub fn wins_required(self) -> Option<u8> {
        match self {
            SeriesFormat::Single => Some(1),
            SeriesFormat::BestOf(n) => Some(n / 2 + 1),
            SeriesFormat::TwoLegs => None,
        }
    }
}

impl std::fmt::Display for SeriesFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeriesFormat::Single => write!(f, "single match"),
            SeriesFormat::BestOf(n) => write!(f, "best of {}", n),
            SeriesFormat::TwoLegs => write!(f, "two legs"),
        }
    }
}
