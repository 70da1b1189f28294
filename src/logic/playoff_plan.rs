//! Playoff plans: seeded single-elimination tree with byes, an optional
//! qualification round, third-place deciders, and the gold/silver split.

use crate::logic::round_robin::ensure_unique;
use crate::logic::seeding::{generate_seed_order, highest_power_of_two, shuffle_numbers};
use crate::models::{
    Bracket, BracketNode, BracketType, ClubId, NodeId, PlayoffOptions, ScheduleError, SeededClub,
    SeriesFormat, Slot, Stage,
};

/// Stage label for a round with `remaining_teams` slots.
///
/// 2 -> Final, 4 -> Semifinal, 8 -> Quarterfinal, 16+ (power of two) -> Round of n.
/// Any other count can only come from an uneven field and is a qualification round.
pub fn stage_name_for_teams(remaining_teams: usize) -> Stage {
    match remaining_teams {
        1 | 2 => Stage::Final,
        4 => Stage::Semifinal,
        8 => Stage::Quarterfinal,
        n if n.is_power_of_two() => Stage::RoundOf(n),
        _ => Stage::Qualification,
    }
}

/// Bracket from a ranked list: `ranked[0]` is seed 1.
pub fn create_initial_playoff_plans(
    ranked: &[ClubId],
    options: &PlayoffOptions,
) -> Result<Bracket, ScheduleError> {
    if ranked.len() < 2 {
        return Err(ScheduleError::NotEnoughPairs);
    }
    ensure_unique(ranked)?;
    let seeds = ranked
        .iter()
        .enumerate()
        .map(|(i, &club_id)| SeededClub {
            seed: i as u32 + 1,
            club_id,
        })
        .collect();
    build_bracket(seeds, options)
}

/// Bracket with seeds drawn by `shuffle_numbers(1..=N, rng_seed)`; reproducible per seed.
pub fn create_random_playoff_plans(
    participants: &[ClubId],
    options: &PlayoffOptions,
    rng_seed: u64,
) -> Result<Bracket, ScheduleError> {
    if participants.len() < 2 {
        return Err(ScheduleError::NotEnoughPairs);
    }
    ensure_unique(participants)?;
    let numbers: Vec<u32> = (1..=participants.len() as u32).collect();
    let drawn = shuffle_numbers(&numbers, rng_seed);
    let mut seeds: Vec<SeededClub> = participants
        .iter()
        .zip(drawn)
        .map(|(&club_id, seed)| SeededClub { seed, club_id })
        .collect();
    seeds.sort_by_key(|s| s.seed);
    build_bracket(seeds, options)
}

/// Main bracket size for `participants` clubs.
///
/// Without a configured size this is the next power of two (byes fill the gap).
/// With one, a larger field keeps that size and plays a qualification round first.
pub fn main_bracket_size(
    participants: usize,
    options: &PlayoffOptions,
) -> Result<usize, ScheduleError> {
    match options.main_bracket_size {
        None => Ok(highest_power_of_two(participants)),
        Some(size) => {
            if size < 2 || !size.is_power_of_two() {
                return Err(ScheduleError::InvalidBracketSize(size));
            }
            if participants.saturating_sub(size) > size {
                return Err(ScheduleError::TooManyParticipants {
                    max: size.saturating_mul(2),
                    actual: participants,
                });
            }
            Ok(if participants > size {
                size
            } else {
                highest_power_of_two(participants)
            })
        }
    }
}

/// Championship-path stages for a field of `participants`, first round to final.
pub fn stage_sequence(
    participants: usize,
    options: &PlayoffOptions,
) -> Result<Vec<Stage>, ScheduleError> {
    if participants < 2 {
        return Err(ScheduleError::NotEnoughPairs);
    }
    let size = main_bracket_size(participants, options)?;
    let mut stages = Vec::new();
    if participants > size {
        stages.push(Stage::Qualification);
    }
    let mut teams = size;
    while teams >= 2 {
        stages.push(stage_name_for_teams(teams));
        teams /= 2;
    }
    Ok(stages)
}

/// What a pairing hands on: the slot that advances, the slot that drops out, and the node.
#[derive(Clone, Copy, Debug)]
struct Advance {
    winner: Slot,
    loser: Slot,
    node: Option<NodeId>,
}

impl Advance {
    fn seeded(slot: Slot) -> Self {
        Self {
            winner: slot,
            loser: Slot::Bye,
            node: None,
        }
    }

    /// The losing side, as an entry into a consolation pairing.
    fn dropped(&self) -> Self {
        Self {
            winner: self.loser,
            loser: Slot::Bye,
            node: self.node,
        }
    }
}

#[derive(Default)]
struct PlanBuilder {
    nodes: Vec<BracketNode>,
}

impl PlanBuilder {
    /// Add a node for two entries. A bye side auto-advances the other one without a match;
    /// two byes produce no node at all.
    fn pair(
        &mut self,
        home: Advance,
        away: Advance,
        bracket: BracketType,
        stage: Stage,
        round: u32,
        series: SeriesFormat,
    ) -> Advance {
        let (h, a) = (home.winner, away.winner);
        if h.is_bye() && a.is_bye() {
            return Advance::seeded(Slot::Bye);
        }
        let id = self.nodes.len();
        let bye = h.is_bye() || a.is_bye();
        let advancing = if h.is_bye() { a } else { h };
        self.nodes.push(BracketNode {
            id,
            bracket,
            stage,
            round,
            home: h,
            away: a,
            feeders: [home.node, away.node],
            series,
            winner: if bye { advancing.club() } else { None },
        });
        if bye {
            Advance {
                winner: advancing,
                loser: Slot::Bye,
                node: Some(id),
            }
        } else {
            Advance {
                winner: Slot::WinnerOf(id),
                loser: Slot::LoserOf(id),
                node: Some(id),
            }
        }
    }

    /// Silver bracket for the quarterfinal losers: semifinals in `round`,
    /// final and third-place decider in `round + 1`.
    fn silver_bracket(
        &mut self,
        quarterfinals: &[Advance],
        round: u32,
        series: SeriesFormat,
        third_place: bool,
    ) {
        let losers: Vec<Advance> = quarterfinals.iter().map(Advance::dropped).collect();
        let semis: Vec<Advance> = losers
            .chunks(2)
            .map(|p| self.pair(p[0], p[1], BracketType::Silver, Stage::Semifinal, round, series))
            .collect();
        self.pair(semis[0], semis[1], BracketType::Silver, Stage::Final, round + 1, series);
        if third_place {
            self.pair(
                semis[0].dropped(),
                semis[1].dropped(),
                BracketType::Silver,
                Stage::ThirdPlace,
                round + 1,
                series,
            );
        }
    }
}

fn club_slot(seed: &SeededClub) -> Slot {
    Slot::Club {
        club_id: seed.club_id,
        seed: seed.seed,
    }
}

/// Build the tree for seeds sorted ascending (seed 1 first).
fn build_bracket(
    seeds: Vec<SeededClub>,
    options: &PlayoffOptions,
) -> Result<Bracket, ScheduleError> {
    let n = seeds.len();
    if n < 2 {
        return Err(ScheduleError::NotEnoughPairs);
    }
    let series = options.series.validate(false)?;
    let qualification_series = options.qualification_format().validate(true)?;
    let size = main_bracket_size(n, options)?;
    let order = generate_seed_order(size)?;
    let mut builder = PlanBuilder::default();

    // Entry for each main-bracket seed; seeds past the field are byes.
    let mut entries: Vec<Advance> = (0..size)
        .map(|i| match seeds.get(i) {
            Some(s) => Advance::seeded(club_slot(s)),
            None => Advance::seeded(Slot::Bye),
        })
        .collect();

    let mut round = 1;
    if n > size {
        // Lowest 2 * excess seeds play in; each winner takes the higher seed's slot.
        let excess = n - size;
        for k in 0..excess {
            let hi = size - excess + k;
            let lo = n - 1 - k;
            entries[hi] = builder.pair(
                Advance::seeded(club_slot(&seeds[hi])),
                Advance::seeded(club_slot(&seeds[lo])),
                BracketType::Qualification,
                Stage::Qualification,
                round,
                qualification_series,
            );
        }
        log::debug!("Qualification round: {} pairing(s) into a {}-team bracket", excess, size);
        round += 1;
    } else if n < size {
        log::debug!("Bracket of {}: byes for seeds 1..={}", size, size - n);
    }

    let mut current: Vec<Advance> = order.iter().map(|&s| entries[s as usize - 1]).collect();
    let mut previous: Vec<Advance> = Vec::new();
    let mut bracket_type = BracketType::Main;

    while current.len() >= 2 {
        let teams = current.len();
        let stage = stage_name_for_teams(teams);
        let split = teams == 4 && options.consolation && previous.len() == 4;
        if split {
            bracket_type = BracketType::Gold;
        }

        let results: Vec<Advance> = current
            .chunks(2)
            .map(|p| builder.pair(p[0], p[1], bracket_type, stage, round, series))
            .collect();

        if split {
            builder.silver_bracket(&previous, round, series, options.third_place_match);
            log::debug!("Quarterfinal losers routed to the silver bracket");
        }
        if teams == 2 && options.third_place_match && previous.len() == 2 {
            builder.pair(
                previous[0].dropped(),
                previous[1].dropped(),
                bracket_type,
                Stage::ThirdPlace,
                round,
                series,
            );
        }

        previous = results;
        current = previous.clone();
        round += 1;
    }

    Ok(Bracket {
        nodes: builder.nodes,
        bracket_size: size,
        participants: n,
        seeds,
    })
}
