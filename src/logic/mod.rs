//! Scheduling logic: calendar, round-robin, groups, seeding, playoff plans, fixtures, seasons.

mod calendar;
mod fixtures;
mod groups;
mod playoff_plan;
mod round_robin;
mod season;
mod seeding;

pub use calendar::{
    add_days, add_minutes, apply_time_to_date, league_offset, next_weekday_on_or_after,
};
pub use fixtures::{materialize_bracket, materialize_round_robin, Fixture, MatchdayCursor};
pub use groups::partition_groups;
pub use playoff_plan::{
    create_initial_playoff_plans, create_random_playoff_plans, main_bracket_size,
    stage_name_for_teams, stage_sequence,
};
pub use round_robin::generate_round_robin_pairs;
pub use season::{create_season_playoffs, run_season_automation};
pub use seeding::{generate_seed_order, highest_power_of_two, shuffle_numbers};
