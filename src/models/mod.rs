//! Data structures for league scheduling: clubs, pairings, groups, brackets, fixtures, seasons.

mod bracket;
mod club;
mod error;
mod fixture;
mod group;
mod pairing;
mod season;
mod series;

pub use bracket::{Bracket, BracketNode, BracketType, Locale, NodeId, SeededClub, Slot, Stage};
pub use club::{ClubId, Participant};
pub use error::ScheduleError;
pub use fixture::{FixtureSource, ScheduledMatch};
pub use group::{default_group_name, Group, GroupAssignment, GroupSlot, GroupStageConfig};
pub use pairing::{Pairing, Round};
pub use season::{
    PlayoffCreationResult, PlayoffOptions, PlayoffOverrides, PlayoffSkeleton, Season,
    SeasonAutomationResult, SeasonConfig, SeasonId, SeasonState, Seeding,
};
pub use series::SeriesFormat;
