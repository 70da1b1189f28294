//! Season configuration, engine results, and the Season record with its state.

use crate::logic::run_season_automation;
use crate::models::bracket::{Bracket, Stage};
use crate::models::club::ClubId;
use crate::models::error::ScheduleError;
use crate::models::fixture::ScheduledMatch;
use crate::models::group::{Group, GroupStageConfig};
use crate::models::series::SeriesFormat;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a season.
pub type SeasonId = Uuid;

/// How playoff seeds are assigned.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "method")]
pub enum Seeding {
    /// Qualified list order is the seed order.
    #[default]
    Ranked,
    /// Seeds drawn with a reproducible shuffle.
    Random { seed: u64 },
}

/// Playoff layout for a season.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayoffOptions {
    #[serde(default)]
    pub series: SeriesFormat,
    /// Format of the qualification round; falls back to `series`.
    #[serde(default)]
    pub qualification_series: Option<SeriesFormat>,
    /// Fixed main bracket size; a larger field plays a qualification round first.
    #[serde(default)]
    pub main_bracket_size: Option<usize>,
    /// Route quarterfinal losers into a silver bracket.
    #[serde(default = "default_true")]
    pub consolation: bool,
    #[serde(default = "default_true")]
    pub third_place_match: bool,
    #[serde(default)]
    pub seeding: Seeding,
}

impl Default for PlayoffOptions {
    fn default() -> Self {
        Self {
            series: SeriesFormat::Single,
            qualification_series: None,
            main_bracket_size: None,
            consolation: true,
            third_place_match: true,
            seeding: Seeding::Ranked,
        }
    }
}

impl PlayoffOptions {
    pub fn with_series(series: SeriesFormat) -> Self {
        Self {
            series,
            ..Self::default()
        }
    }

    pub fn qualification_format(&self) -> SeriesFormat {
        self.qualification_series.unwrap_or(self.series)
    }
}

/// Per-call overrides for `create_season_playoffs`.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayoffOverrides {
    #[serde(default)]
    pub series: Option<SeriesFormat>,
    #[serde(default)]
    pub seeding: Option<Seeding>,
    /// Earliest playoff date; defaults to the day after the last regular-season kickoff.
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
}

fn default_true() -> bool {
    true
}

fn default_rounds() -> u32 {
    1
}

/// Everything `run_season_automation` needs.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct SeasonConfig {
    pub competition_id: u64,
    pub season_name: String,
    pub start_date: NaiveDate,
    pub match_weekday: Weekday,
    pub match_time: NaiveTime,
    /// League time zone as minutes east of UTC.
    #[serde(default)]
    pub utc_offset_minutes: i32,
    /// Minutes between kickoffs on the same matchday (0 = all at once).
    #[serde(default)]
    pub slot_interval_minutes: u32,
    pub venue_city: String,
    pub club_ids: Vec<ClubId>,
    #[serde(default)]
    pub series: SeriesFormat,
    /// How many times every pair meets in a league without groups.
    #[serde(default = "default_rounds")]
    pub rounds: u32,
    #[serde(default)]
    pub group_stage: Option<GroupStageConfig>,
    /// How many times every pair meets inside a group; defaults to `rounds`.
    #[serde(default)]
    pub group_rounds: Option<u32>,
    /// `None` means the competition has no playoffs.
    #[serde(default)]
    pub playoffs: Option<PlayoffOptions>,
}

/// Playoff shape known before the regular season is played.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayoffSkeleton {
    pub participants: usize,
    pub bracket_size: usize,
    /// Stage labels from the first playoff round to the final.
    pub stages: Vec<Stage>,
    pub series: SeriesFormat,
}

/// Output of `run_season_automation`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct SeasonAutomationResult {
    pub competition_id: u64,
    pub season_name: String,
    pub matches: Vec<ScheduledMatch>,
    pub groups: Vec<Group>,
    pub playoffs: Option<PlayoffSkeleton>,
}

impl SeasonAutomationResult {
    pub fn last_kickoff(&self) -> Option<DateTime<FixedOffset>> {
        self.matches.iter().map(|m| m.kickoff).max()
    }

    pub fn round_count(&self) -> u32 {
        self.matches.iter().map(|m| m.round).max().unwrap_or(0)
    }
}

/// Output of `create_season_playoffs`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayoffCreationResult {
    pub season_id: SeasonId,
    pub bracket: Bracket,
    pub matches: Vec<ScheduledMatch>,
}

/// Current phase of the season.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeasonState {
    /// Calendar generated; regular season in progress.
    #[default]
    RegularSeason,
    /// Caller confirmed every regular-season match is played.
    RegularSeasonFinished,
    /// Playoff bracket created.
    Playoffs,
}

/// A scheduled season: config, regular-season calendar, and playoffs once created.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Season {
    pub id: SeasonId,
    pub config: SeasonConfig,
    pub state: SeasonState,
    pub schedule: SeasonAutomationResult,
    pub playoffs: Option<PlayoffCreationResult>,
}

impl Season {
    /// Build the regular-season calendar for a new season.
    pub fn new(id: SeasonId, config: SeasonConfig) -> Result<Self, ScheduleError> {
        let schedule = run_season_automation(&config)?;
        Ok(Self {
            id,
            config,
            state: SeasonState::RegularSeason,
            schedule,
            playoffs: None,
        })
    }

    /// Mark the regular season as played (only valid during the regular season).
    pub fn confirm_regular_season_finished(&mut self) -> Result<(), ScheduleError> {
        if self.state != SeasonState::RegularSeason {
            return Err(ScheduleError::InvalidState);
        }
        self.state = SeasonState::RegularSeasonFinished;
        Ok(())
    }

    pub fn has_club(&self, club: ClubId) -> bool {
        self.config.club_ids.contains(&club)
    }

    /// Regular-season and playoff matches, in calendar order.
    pub fn all_matches(&self) -> impl Iterator<Item = &ScheduledMatch> {
        self.schedule
            .matches
            .iter()
            .chain(self.playoffs.iter().flat_map(|p| p.matches.iter()))
    }
}
