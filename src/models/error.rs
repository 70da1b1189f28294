//! ScheduleError: every named failure the engine reports to its caller.

use crate::models::club::ClubId;
use crate::models::series::SeriesFormat;

/// Errors that can occur while building a calendar or a bracket.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ScheduleError {
    /// Fewer than 2 clubs to schedule.
    NotEnoughParticipants,
    /// Fewer than 2 clubs to build a playoff pairing from.
    NotEnoughPairs,
    /// A club id is listed more than once.
    DuplicateClub(ClubId),
    /// A club id is not part of the season.
    UnknownClub(ClubId),
    /// Round-robin multiplier must be at least 1.
    InvalidRounds,
    /// Series length not allowed here: even best-of, or two legs outside group and
    /// qualification rounds.
    InvalidSeriesFormat(SeriesFormat),
    /// Bracket size must be a power of two (and at least 2 for a main bracket).
    InvalidBracketSize(usize),
    /// More qualified clubs than one qualification round can reduce to the main bracket.
    TooManyParticipants { max: usize, actual: usize },
    /// UTC offset (minutes) out of range.
    InvalidTimeZone(i32),
    /// Match time could not be applied to a date.
    InvalidMatchTime,
    GroupStageInvalidCount,
    GroupStageInvalidSize,
    GroupStageInvalidQualifyCount,
    /// Groups times group size must equal the club count, and every group must be defined.
    GroupStageCountMismatch { expected: usize, actual: usize },
    GroupStageDuplicateIndex(usize),
    GroupStageInvalidIndex(usize),
    GroupStageInvalidSlotPosition { group: usize, position: usize },
    GroupStageDuplicateSlotPosition { group: usize, position: usize },
    GroupStageDuplicateClub(ClubId),
    GroupStageUnknownClub(ClubId),
    GroupStageIncomplete { group: usize },
    /// Regular season not confirmed as finished.
    MatchesNotFinished,
    /// Playoffs were already created for this season.
    PlayoffsAlreadyExists,
    /// The season was configured without playoffs.
    PlayoffsNotSupported,
    /// Season is not in a state that allows this action.
    InvalidState,
}

impl ScheduleError {
    /// Stable snake_case name for API responses.
    pub fn code(&self) -> &'static str {
        use ScheduleError::*;
        match self {
            NotEnoughParticipants => "not_enough_participants",
            NotEnoughPairs => "not_enough_pairs",
            DuplicateClub(_) => "duplicate_club",
            UnknownClub(_) => "unknown_club",
            InvalidRounds => "invalid_rounds",
            InvalidSeriesFormat(_) => "invalid_series_format",
            InvalidBracketSize(_) => "invalid_bracket_size",
            TooManyParticipants { .. } => "too_many_participants",
            InvalidTimeZone(_) => "invalid_time_zone",
            InvalidMatchTime => "invalid_match_time",
            GroupStageInvalidCount => "group_stage_invalid_count",
            GroupStageInvalidSize => "group_stage_invalid_size",
            GroupStageInvalidQualifyCount => "group_stage_invalid_qualify_count",
            GroupStageCountMismatch { .. } => "group_stage_count_mismatch",
            GroupStageDuplicateIndex(_) => "group_stage_duplicate_index",
            GroupStageInvalidIndex(_) => "group_stage_invalid_index",
            GroupStageInvalidSlotPosition { .. } => "group_stage_invalid_slot_position",
            GroupStageDuplicateSlotPosition { .. } => "group_stage_duplicate_slot_position",
            GroupStageDuplicateClub(_) => "group_stage_duplicate_club",
            GroupStageUnknownClub(_) => "group_stage_unknown_club",
            GroupStageIncomplete { .. } => "group_stage_incomplete",
            MatchesNotFinished => "matches_not_finished",
            PlayoffsAlreadyExists => "playoffs_already_exists",
            PlayoffsNotSupported => "playoffs_not_supported",
            InvalidState => "invalid_state",
        }
    }
}

impl std::fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use ScheduleError::*;
        match self {
            NotEnoughParticipants => write!(f, "Need at least 2 clubs to build a schedule"),
            NotEnoughPairs => write!(f, "Need at least 2 clubs to build a playoff pairing"),
            DuplicateClub(id) => write!(f, "Club {} is listed more than once", id),
            UnknownClub(id) => write!(f, "Club {} is not part of this season", id),
            InvalidRounds => write!(f, "Round-robin must be played at least once"),
            InvalidSeriesFormat(format) => write!(f, "Series format not allowed here: {}", format),
            InvalidBracketSize(size) => write!(f, "Bracket size {} is not a power of two", size),
            TooManyParticipants { max, actual } => {
                write!(f, "At most {} clubs fit this bracket (got {})", max, actual)
            }
            InvalidTimeZone(minutes) => {
                write!(f, "UTC offset of {} minutes is out of range", minutes)
            }
            InvalidMatchTime => write!(f, "Match time could not be applied"),
            GroupStageInvalidCount => write!(f, "Group count must be at least 1"),
            GroupStageInvalidSize => write!(f, "Each group needs at least 2 clubs"),
            GroupStageInvalidQualifyCount => {
                write!(f, "Qualify count must be between 1 and the group size")
            }
            GroupStageCountMismatch { expected, actual } => {
                write!(f, "Group stage expects {} clubs (got {})", expected, actual)
            }
            GroupStageDuplicateIndex(index) => write!(f, "Group {} is defined twice", index),
            GroupStageInvalidIndex(index) => write!(f, "Group index {} is out of range", index),
            GroupStageInvalidSlotPosition { group, position } => {
                write!(f, "Position {} is out of range in group {}", position, group)
            }
            GroupStageDuplicateSlotPosition { group, position } => {
                write!(f, "Position {} is used twice in group {}", position, group)
            }
            GroupStageDuplicateClub(id) => write!(f, "Club {} is placed in more than one slot", id),
            GroupStageUnknownClub(id) => write!(f, "Club {} is not in the season club list", id),
            GroupStageIncomplete { group } => write!(f, "Group {} has empty slots", group),
            MatchesNotFinished => write!(f, "Regular season matches are not finished"),
            PlayoffsAlreadyExists => write!(f, "Playoffs already exist for this season"),
            PlayoffsNotSupported => write!(f, "This season has no playoffs"),
            InvalidState => write!(f, "Invalid state for this action"),
        }
    }
}

impl std::error::Error for ScheduleError {}
