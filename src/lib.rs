//! League scheduler: library with models and scheduling logic.
//!
//! `run_season_automation` builds a regular-season calendar (optionally split into groups);
//! `create_season_playoffs` builds the playoff bracket once the regular season is played.

pub mod export;
pub mod logic;
pub mod models;

pub use export::write_matches_csv;
pub use logic::{
    create_initial_playoff_plans, create_random_playoff_plans, create_season_playoffs,
    generate_round_robin_pairs, generate_seed_order, highest_power_of_two, partition_groups,
    run_season_automation, shuffle_numbers, stage_name_for_teams,
};
pub use models::{
    Bracket, BracketNode, BracketType, ClubId, FixtureSource, Group, GroupAssignment, GroupSlot,
    GroupStageConfig, Locale, NodeId, Pairing, Participant, PlayoffCreationResult, PlayoffOptions,
    PlayoffOverrides, PlayoffSkeleton, Round, ScheduleError, ScheduledMatch, Season,
    SeasonAutomationResult, SeasonConfig, SeasonId, SeasonState, SeededClub, Seeding, SeriesFormat,
    Slot, Stage,
};
