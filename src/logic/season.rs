//! Season orchestration: regular-season calendar, then playoffs once the season is played.

use crate::logic::calendar::league_offset;
use crate::logic::fixtures::{materialize_bracket, materialize_round_robin, MatchdayCursor};
use crate::logic::groups::partition_groups;
use crate::logic::playoff_plan::{
    create_initial_playoff_plans, create_random_playoff_plans, main_bracket_size, stage_sequence,
};
use crate::logic::round_robin::{ensure_unique, generate_round_robin_pairs};
use crate::models::{
    ClubId, PlayoffCreationResult, PlayoffOptions, PlayoffOverrides, PlayoffSkeleton, Round,
    ScheduleError, Season, SeasonAutomationResult, SeasonConfig, SeasonState, Seeding,
};
use chrono::Duration;

/// Build the regular-season calendar for `config`.
///
/// Everything is validated before the first pairing is generated: time zone, club list,
/// round multipliers, series format, playoff layout, and the group-stage assignment.
/// Two-legged ties are only accepted when the season has a group stage.
/// No playoff matches are created here; see `create_season_playoffs`.
pub fn run_season_automation(
    config: &SeasonConfig,
) -> Result<SeasonAutomationResult, ScheduleError> {
    let offset = league_offset(config.utc_offset_minutes)?;
    if config.club_ids.len() < 2 {
        return Err(ScheduleError::NotEnoughParticipants);
    }
    ensure_unique(&config.club_ids)?;
    let group_rounds = config.group_rounds.unwrap_or(config.rounds);
    if config.rounds == 0 || group_rounds == 0 {
        return Err(ScheduleError::InvalidRounds);
    }
    let series = config.series.validate(config.group_stage.is_some())?;
    let groups = match &config.group_stage {
        Some(stage) => partition_groups(&config.club_ids, stage)?,
        None => Vec::new(),
    };
    let playoffs = config
        .playoffs
        .as_ref()
        .map(|options| playoff_skeleton(config, options))
        .transpose()?;

    let schedules: Vec<(Option<usize>, Vec<Round>)> = if groups.is_empty() {
        vec![(None, generate_round_robin_pairs(&config.club_ids, config.rounds)?)]
    } else {
        groups
            .iter()
            .map(|g| {
                let rounds = generate_round_robin_pairs(&g.club_ids, group_rounds)?;
                Ok::<_, ScheduleError>((Some(g.index), rounds))
            })
            .collect::<Result<_, _>>()?
    };

    let mut cursor = MatchdayCursor::new(
        config.start_date,
        config.match_weekday,
        config.match_time,
        offset,
        config.slot_interval_minutes,
        config.venue_city.clone(),
    )?;
    let matches = materialize_round_robin(&mut cursor, &schedules, series);

    log::info!(
        "Scheduled {} '{}': {} clubs, {} group(s), {} matches",
        config.competition_id,
        config.season_name,
        config.club_ids.len(),
        groups.len(),
        matches.len()
    );

    Ok(SeasonAutomationResult {
        competition_id: config.competition_id,
        season_name: config.season_name.clone(),
        matches,
        groups,
        playoffs,
    })
}

/// Expected playoff shape: group qualifiers, or the whole league capped by the main bracket size.
fn playoff_skeleton(
    config: &SeasonConfig,
    options: &PlayoffOptions,
) -> Result<PlayoffSkeleton, ScheduleError> {
    let series = options.series.validate(false)?;
    options.qualification_format().validate(true)?;
    let participants = match (&config.group_stage, options.main_bracket_size) {
        (Some(stage), _) => stage.qualifiers(),
        (None, Some(size)) => config.club_ids.len().min(size),
        (None, None) => config.club_ids.len(),
    };
    let stages = stage_sequence(participants, options)?;
    Ok(PlayoffSkeleton {
        participants,
        bracket_size: main_bracket_size(participants, options)?,
        stages,
        series,
    })
}

/// Create the playoff bracket and its matches for a finished regular season.
///
/// `qualified` is the caller's ranking (seed 1 first); it is only reordered when the
/// seeding method is random. On success the result is stored on `season` and its state
/// becomes `Playoffs`; calling again fails with `PlayoffsAlreadyExists`.
pub fn create_season_playoffs(
    season: &mut Season,
    qualified: &[ClubId],
    overrides: Option<&PlayoffOverrides>,
) -> Result<PlayoffCreationResult, ScheduleError> {
    let base = season
        .config
        .playoffs
        .as_ref()
        .ok_or(ScheduleError::PlayoffsNotSupported)?;
    if season.playoffs.is_some() || season.state == SeasonState::Playoffs {
        return Err(ScheduleError::PlayoffsAlreadyExists);
    }
    if season.state != SeasonState::RegularSeasonFinished {
        return Err(ScheduleError::MatchesNotFinished);
    }
    if let Some(&unknown) = qualified.iter().find(|&&club| !season.has_club(club)) {
        return Err(ScheduleError::UnknownClub(unknown));
    }

    let mut options = base.clone();
    let mut start_date = None;
    if let Some(o) = overrides {
        if let Some(series) = o.series {
            options.series = series;
        }
        if let Some(seeding) = o.seeding {
            options.seeding = seeding;
        }
        start_date = o.start_date;
    }

    let bracket = match options.seeding {
        Seeding::Ranked => create_initial_playoff_plans(qualified, &options)?,
        Seeding::Random { seed } => create_random_playoff_plans(qualified, &options, seed)?,
    };

    let config = &season.config;
    let start = start_date.unwrap_or_else(|| {
        season
            .schedule
            .last_kickoff()
            .map(|k| k.date_naive() + Duration::days(1))
            .unwrap_or(config.start_date)
    });
    let mut cursor = MatchdayCursor::new(
        start,
        config.match_weekday,
        config.match_time,
        league_offset(config.utc_offset_minutes)?,
        config.slot_interval_minutes,
        config.venue_city.clone(),
    )?
    .numbered_from(season.schedule.matches.len() as u32 + 1);
    let matches = materialize_bracket(&mut cursor, &bracket);

    log::info!(
        "Playoffs for season {}: {} clubs, bracket of {}, {} nodes, {} matches",
        season.id,
        bracket.participants,
        bracket.bracket_size,
        bracket.nodes.len(),
        matches.len()
    );

    let result = PlayoffCreationResult {
        season_id: season.id,
        bracket,
        matches,
    };
    season.playoffs = Some(result.clone());
    season.state = SeasonState::Playoffs;
    Ok(result)
}
