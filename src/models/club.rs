//! Club identifiers and the Participant wrapper handed in by the caller.

use serde::{Deserialize, Serialize};

/// Opaque club identifier (whatever the storage layer uses as primary key).
pub type ClubId = u64;

/// A club taking part in a season, with optional group and seed metadata.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub club_id: ClubId,
    /// Group index when the season has a group stage.
    #[serde(default)]
    pub group: Option<usize>,
    /// 1-based rank; 1 is the best seed.
    #[serde(default)]
    pub seed: Option<u32>,
}

impl Participant {
    pub fn new(club_id: ClubId) -> Self {
        Self {
            club_id,
            group: None,
            seed: None,
        }
    }

    pub fn with_seed(club_id: ClubId, seed: u32) -> Self {
        Self {
            seed: Some(seed),
            ..Self::new(club_id)
        }
    }
}
