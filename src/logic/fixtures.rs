//! Turn pairings and bracket nodes into dated, numbered matches.

use crate::logic::calendar::{add_days, add_minutes, first_matchday};
use crate::models::{
    Bracket, BracketType, ClubId, FixtureSource, Round, ScheduleError, ScheduledMatch,
    SeriesFormat,
};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, Weekday};

/// A pairing waiting for dates: one series between `home` and `away`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Fixture {
    pub home: Option<ClubId>,
    pub away: Option<ClubId>,
    pub series: SeriesFormat,
    pub source: FixtureSource,
}

/// Walks the calendar week by week, handing out matchdays and match numbers.
#[derive(Clone, Debug)]
pub struct MatchdayCursor {
    first_matchday: DateTime<FixedOffset>,
    weeks_used: u32,
    slot_interval_minutes: u32,
    venue: String,
    next_number: u32,
}

impl MatchdayCursor {
    /// Cursor whose first matchday is the first `weekday` on or after `start`, at `time`.
    pub fn new(
        start: NaiveDate,
        weekday: Weekday,
        time: NaiveTime,
        offset: FixedOffset,
        slot_interval_minutes: u32,
        venue: impl Into<String>,
    ) -> Result<Self, ScheduleError> {
        Ok(Self {
            first_matchday: first_matchday(start, weekday, time, offset)?,
            weeks_used: 0,
            slot_interval_minutes,
            venue: venue.into(),
            next_number: 1,
        })
    }

    /// Continue match numbering from `first` (playoffs follow the regular season).
    pub fn numbered_from(mut self, first: u32) -> Self {
        self.next_number = first;
        self
    }

    /// Kickoff of the next round's first match.
    pub fn next_kickoff(&self) -> DateTime<FixedOffset> {
        add_days(self.first_matchday, 7 * i64::from(self.weeks_used))
    }

    /// Place one round on the next free matchday.
    ///
    /// Fixture i starts `i * slot_interval` minutes after the first kickoff; game k of a
    /// series is played k-1 weeks later on the same slot, with odd games at the listed
    /// home side. The cursor then skips as many weeks as the longest series needs.
    /// An empty round consumes no date.
    pub fn place_round(&mut self, round: u32, fixtures: &[Fixture]) -> Vec<ScheduledMatch> {
        let weeks = fixtures
            .iter()
            .map(|f| u32::from(f.series.match_count()))
            .max()
            .unwrap_or(0);
        if weeks == 0 {
            return Vec::new();
        }

        let matchday = self.next_kickoff();
        let mut matches = Vec::new();
        for (i, fixture) in fixtures.iter().enumerate() {
            let slot = add_minutes(matchday, i as i64 * i64::from(self.slot_interval_minutes));
            for game in 1..=fixture.series.match_count() {
                let (home, away) = if game % 2 == 1 {
                    (fixture.home, fixture.away)
                } else {
                    (fixture.away, fixture.home)
                };
                matches.push(ScheduledMatch {
                    number: self.next_number,
                    round,
                    game_number: game,
                    home,
                    away,
                    kickoff: add_days(slot, 7 * (i64::from(game) - 1)),
                    venue: self.venue.clone(),
                    source: fixture.source,
                });
                self.next_number += 1;
            }
        }
        self.weeks_used += weeks;
        matches
    }
}

/// Materialize round-robin rounds. Every group's round r shares one matchday;
/// byes are dropped and an all-bye round takes no date.
pub fn materialize_round_robin(
    cursor: &mut MatchdayCursor,
    schedules: &[(Option<usize>, Vec<Round>)],
    series: SeriesFormat,
) -> Vec<ScheduledMatch> {
    let round_count = schedules.iter().map(|(_, rounds)| rounds.len()).max().unwrap_or(0);
    let mut matches = Vec::new();
    for r in 0..round_count {
        let fixtures: Vec<Fixture> = schedules
            .iter()
            .filter_map(|(group, rounds)| rounds.get(r).map(|round| (*group, round)))
            .flat_map(|(group, round)| {
                round.matches().map(move |p| Fixture {
                    home: Some(p.home),
                    away: p.away,
                    series,
                    source: FixtureSource::RoundRobin { group },
                })
            })
            .collect();
        matches.extend(cursor.place_round(r as u32 + 1, &fixtures));
    }
    matches
}

/// Materialize every non-bye node, round by round; gold/main nodes before silver ones.
/// Sides still waiting on a feeder are left as `None`.
pub fn materialize_bracket(cursor: &mut MatchdayCursor, bracket: &Bracket) -> Vec<ScheduledMatch> {
    let mut matches = Vec::new();
    for round in 1..=bracket.round_count() {
        let mut nodes: Vec<_> = bracket.nodes_in_round(round).filter(|n| !n.is_bye()).collect();
        nodes.sort_by_key(|n| (n.bracket == BracketType::Silver, n.id));
        let fixtures: Vec<Fixture> = nodes
            .iter()
            .map(|n| Fixture {
                home: n.home.club(),
                away: n.away.club(),
                series: n.series,
                source: FixtureSource::Bracket {
                    node: n.id,
                    bracket: n.bracket,
                    stage: n.stage,
                },
            })
            .collect();
        matches.extend(cursor.place_round(round, &fixtures));
    }
    matches
}
