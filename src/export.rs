//! CSV export of scheduled matches, one row per match, for bulk import by a storage layer.

use crate::models::{ClubId, FixtureSource, Locale, NodeId, ScheduledMatch};
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct MatchRow<'a> {
    number: u32,
    round: u32,
    game_number: u8,
    home: Option<ClubId>,
    away: Option<ClubId>,
    kickoff: String,
    venue: &'a str,
    group: Option<usize>,
    node: Option<NodeId>,
    bracket: Option<&'static str>,
    stage: Option<String>,
}

impl<'a> MatchRow<'a> {
    fn from_match(m: &'a ScheduledMatch, locale: Locale) -> Self {
        let (bracket, stage) = match m.source {
            FixtureSource::Bracket { bracket, stage, .. } => (
                Some(bracket.as_str()),
                Some(stage.label(locale)),
            ),
            FixtureSource::RoundRobin { .. } => (None, None),
        };
        Self {
            number: m.number,
            round: m.round,
            game_number: m.game_number,
            home: m.home,
            away: m.away,
            kickoff: m.kickoff.to_rfc3339(),
            venue: &m.venue,
            group: m.group(),
            node: m.node(),
            bracket,
            stage,
        }
    }
}

/// Write `matches` as CSV with a header row. Stage labels use `locale`.
pub fn write_matches_csv<'a, W, I>(writer: W, matches: I, locale: Locale) -> Result<(), csv::Error>
where
    W: Write,
    I: IntoIterator<Item = &'a ScheduledMatch>,
{
    let mut csv = csv::Writer::from_writer(writer);
    for m in matches {
        csv.serialize(MatchRow::from_match(m, locale))?;
    }
    csv.flush()?;
    Ok(())
}
