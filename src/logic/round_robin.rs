//! Round-robin pairing with the circle method.

use crate::models::{ClubId, Pairing, Round, ScheduleError};
use std::collections::HashSet;

/// Generate every round of a `rounds`-fold round-robin over `club_ids`.
///
/// 1. Pad to an even count with a bye slot when needed.
/// 2. Keep slot 0 fixed; pair slot i with slot n-1-i; rotate the rest one step per round.
/// 3. Repeat the pass `rounds` times, swapping home/away on every second pass.
///
/// Byes are kept as `Pairing { away: None, .. }` so callers can see who sits out.
pub fn generate_round_robin_pairs(
    club_ids: &[ClubId],
    rounds: u32,
) -> Result<Vec<Round>, ScheduleError> {
    if club_ids.len() < 2 {
        return Err(ScheduleError::NotEnoughParticipants);
    }
    if rounds == 0 {
        return Err(ScheduleError::InvalidRounds);
    }
    ensure_unique(club_ids)?;

    let first_pass = circle_pass(club_ids);
    let per_pass = first_pass.len();
    let mut schedule = Vec::with_capacity(per_pass * rounds as usize);

    for pass in 0..rounds {
        let mirrored = pass % 2 == 1;
        for pairings in &first_pass {
            let pairings = pairings
                .iter()
                .map(|p| if mirrored { p.reversed() } else { *p })
                .collect();
            schedule.push(Round {
                number: schedule.len() as u32 + 1,
                pairings,
            });
        }
    }

    log::debug!(
        "Round-robin: {} clubs, {} pass(es), {} rounds",
        club_ids.len(),
        rounds,
        schedule.len()
    );
    Ok(schedule)
}

/// Reject a club listed twice.
pub(crate) fn ensure_unique(club_ids: &[ClubId]) -> Result<(), ScheduleError> {
    let mut seen = HashSet::with_capacity(club_ids.len());
    for &id in club_ids {
        if !seen.insert(id) {
            return Err(ScheduleError::DuplicateClub(id));
        }
    }
    Ok(())
}

/// One full single round-robin.
fn circle_pass(club_ids: &[ClubId]) -> Vec<Vec<Pairing>> {
    let mut slots: Vec<Option<ClubId>> = club_ids.iter().copied().map(Some).collect();
    if slots.len() % 2 == 1 {
        slots.push(None);
    }
    let n = slots.len();

    let mut pass = Vec::with_capacity(n - 1);
    for round in 0..n - 1 {
        let pairings = (0..n / 2)
            .filter_map(|i| {
                let (a, b) = (slots[i], slots[n - 1 - i]);
                // The fixed slot alternates venue; everyone else alternates through rotation.
                if i == 0 && round % 2 == 1 {
                    Pairing::from_slots(b, a)
                } else {
                    Pairing::from_slots(a, b)
                }
            })
            .collect();
        pass.push(pairings);
        slots[1..].rotate_right(1);
    }
    pass
}
