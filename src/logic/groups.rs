//! Group stage: validate the slot assignment and split clubs into groups.

use crate::models::{default_group_name, ClubId, Group, GroupStageConfig, ScheduleError};
use std::collections::HashSet;

/// Partition `club_ids` into groups following `config`.
///
/// Checks run in a fixed order (count, size, qualify count, coverage, index,
/// slot positions, clubs, completeness) and nothing is built before they all pass.
/// Returned groups are sorted by index, clubs by slot position.
pub fn partition_groups(
    club_ids: &[ClubId],
    config: &GroupStageConfig,
) -> Result<Vec<Group>, ScheduleError> {
    if config.group_count == 0 {
        return Err(ScheduleError::GroupStageInvalidCount);
    }
    if config.group_size < 2 {
        return Err(ScheduleError::GroupStageInvalidSize);
    }
    if config.qualify_count == 0 || config.qualify_count > config.group_size {
        return Err(ScheduleError::GroupStageInvalidQualifyCount);
    }
    if config.group_size > club_ids.len() {
        return Err(ScheduleError::GroupStageInvalidSize);
    }
    let expected = config.group_count.checked_mul(config.group_size);
    if expected != Some(club_ids.len()) {
        return Err(ScheduleError::GroupStageCountMismatch {
            expected: config.group_count.saturating_mul(config.group_size),
            actual: club_ids.len(),
        });
    }
    if config.groups.len() != config.group_count {
        return Err(ScheduleError::GroupStageCountMismatch {
            expected: config.group_count,
            actual: config.groups.len(),
        });
    }

    let season_clubs: HashSet<ClubId> = club_ids.iter().copied().collect();
    let mut seen_indexes = HashSet::new();
    let mut placed_clubs = HashSet::new();
    let mut groups = Vec::with_capacity(config.group_count);

    for assignment in &config.groups {
        let index = assignment.index;
        if index >= config.group_count {
            return Err(ScheduleError::GroupStageInvalidIndex(index));
        }
        if !seen_indexes.insert(index) {
            return Err(ScheduleError::GroupStageDuplicateIndex(index));
        }

        let mut by_position: Vec<Option<ClubId>> = vec![None; config.group_size];
        for slot in &assignment.slots {
            if slot.position == 0 || slot.position > config.group_size {
                return Err(ScheduleError::GroupStageInvalidSlotPosition {
                    group: index,
                    position: slot.position,
                });
            }
            let cell = &mut by_position[slot.position - 1];
            if cell.is_some() {
                return Err(ScheduleError::GroupStageDuplicateSlotPosition {
                    group: index,
                    position: slot.position,
                });
            }
            if !season_clubs.contains(&slot.club_id) {
                return Err(ScheduleError::GroupStageUnknownClub(slot.club_id));
            }
            if !placed_clubs.insert(slot.club_id) {
                return Err(ScheduleError::GroupStageDuplicateClub(slot.club_id));
            }
            *cell = Some(slot.club_id);
        }

        let club_ids: Vec<ClubId> = by_position.into_iter().flatten().collect();
        if club_ids.len() != config.group_size {
            return Err(ScheduleError::GroupStageIncomplete { group: index });
        }

        groups.push(Group {
            index,
            name: assignment
                .name
                .clone()
                .unwrap_or_else(|| default_group_name(index)),
            club_ids,
            qualify_count: config.qualify_count,
        });
    }

    groups.sort_by_key(|g| g.index);
    log::debug!(
        "Group stage: {} groups of {}, top {} qualify",
        config.group_count,
        config.group_size,
        config.qualify_count
    );
    Ok(groups)
}
