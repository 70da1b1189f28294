//! Group stage configuration and the resulting Group structures.

use crate::models::club::{ClubId, Participant};
use serde::{Deserialize, Serialize};

/// One filled position in a group.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GroupSlot {
    /// 1-based position inside the group; sets the round-robin order.
    pub position: usize,
    pub club_id: ClubId,
}

/// Caller-supplied content of one group.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GroupAssignment {
    /// 0-based group index.
    pub index: usize,
    #[serde(default)]
    pub name: Option<String>,
    pub slots: Vec<GroupSlot>,
}

/// Group stage definition: `group_count` groups of `group_size`, top `qualify_count` advance.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GroupStageConfig {
    pub group_count: usize,
    pub group_size: usize,
    pub qualify_count: usize,
    pub groups: Vec<GroupAssignment>,
}

impl GroupStageConfig {
    /// Clubs expected to reach the playoffs from the group stage.
    pub fn qualifiers(&self) -> usize {
        self.group_count.saturating_mul(self.qualify_count)
    }
}

/// A validated group: clubs ordered by slot position.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub index: usize,
    pub name: String,
    pub club_ids: Vec<ClubId>,
    pub qualify_count: usize,
}

impl Group {
    pub fn contains(&self, club: ClubId) -> bool {
        self.club_ids.contains(&club)
    }

    /// Members tagged with this group's index, in slot order.
    pub fn participants(&self) -> Vec<Participant> {
        self.club_ids
            .iter()
            .map(|&club_id| Participant {
                group: Some(self.index),
                ..Participant::new(club_id)
            })
            .collect()
    }
}

/// Default group label: A, B, ..., Z, then AA, AB, ...
pub fn default_group_name(index: usize) -> String {
    let mut name = String::new();
    let mut n = index + 1;
    while n > 0 {
        let rem = (n - 1) % 26;
        name.insert(0, (b'A' + rem as u8) as char);
        n = (n - 1) / 26;
    }
    name
}
