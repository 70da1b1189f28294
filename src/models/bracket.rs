//! Playoff bracket: an arena of nodes addressed by NodeId.

use crate::models::club::{ClubId, Participant};
use crate::models::series::SeriesFormat;
use serde::{Deserialize, Serialize};

/// Index of a node in `Bracket::nodes`.
pub type NodeId = usize;

/// Which part of the playoffs a node belongs to.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BracketType {
    Main,
    Qualification,
    Gold,
    Silver,
}

impl BracketType {
    /// Tag used in exports; matches the serialized name.
    pub fn as_str(&self) -> &'static str {
        match self {
            BracketType::Main => "MAIN",
            BracketType::Qualification => "QUALIFICATION",
            BracketType::Gold => "GOLD",
            BracketType::Silver => "SILVER",
        }
    }
}

impl std::fmt::Display for BracketType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Language for stage labels.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    #[default]
    En,
    Ru,
}

/// Round label, derived from the number of teams left.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Qualification,
    /// Round of n teams, n >= 16.
    RoundOf(usize),
    Quarterfinal,
    Semifinal,
    Final,
    ThirdPlace,
}

impl Stage {
    pub fn label(&self, locale: Locale) -> String {
        match (locale, self) {
            (Locale::En, Stage::Qualification) => "Qualification".to_string(),
            (Locale::En, Stage::RoundOf(n)) => format!("Round of {}", n),
            (Locale::En, Stage::Quarterfinal) => "Quarterfinal".to_string(),
            (Locale::En, Stage::Semifinal) => "Semifinal".to_string(),
            (Locale::En, Stage::Final) => "Final".to_string(),
            (Locale::En, Stage::ThirdPlace) => "Third place".to_string(),
            (Locale::Ru, Stage::Qualification) => "Квалификация".to_string(),
            (Locale::Ru, Stage::RoundOf(n)) => format!("1/{} финала", n / 2),
            (Locale::Ru, Stage::Quarterfinal) => "Четвертьфинал".to_string(),
            (Locale::Ru, Stage::Semifinal) => "Полуфинал".to_string(),
            (Locale::Ru, Stage::Final) => "Финал".to_string(),
            (Locale::Ru, Stage::ThirdPlace) => "Матч за 3-е место".to_string(),
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label(Locale::En))
    }
}

/// One side of a bracket node.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    Club { club_id: ClubId, seed: u32 },
    Bye,
    WinnerOf(NodeId),
    LoserOf(NodeId),
}

impl Slot {
    pub fn club(&self) -> Option<ClubId> {
        match self {
            Slot::Club { club_id, .. } => Some(*club_id),
            _ => None,
        }
    }

    pub fn is_bye(&self) -> bool {
        matches!(self, Slot::Bye)
    }

    /// Node this slot waits on, if it is not decided yet.
    pub fn source_node(&self) -> Option<NodeId> {
        match self {
            Slot::WinnerOf(id) | Slot::LoserOf(id) => Some(*id),
            _ => None,
        }
    }
}

/// A pairing inside the bracket tree.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct BracketNode {
    pub id: NodeId,
    pub bracket: BracketType,
    pub stage: Stage,
    /// 1-based playoff round; nodes sharing a round share matchdays.
    pub round: u32,
    pub home: Slot,
    pub away: Slot,
    /// Nodes whose result fills `home` / `away`; `None` for a seeded leaf.
    pub feeders: [Option<NodeId>; 2],
    pub series: SeriesFormat,
    /// Set up front for byes with a known club, otherwise by the result tracker.
    pub winner: Option<ClubId>,
}

impl BracketNode {
    /// A bye node auto-advances its other side and never produces a match.
    pub fn is_bye(&self) -> bool {
        self.home.is_bye() || self.away.is_bye()
    }
}

/// A seed number and the club holding it.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct SeededClub {
    pub seed: u32,
    pub club_id: ClubId,
}

/// The whole playoff plan.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Bracket {
    pub nodes: Vec<BracketNode>,
    /// Power-of-two size the seeds are laid out on (the main bracket).
    pub bracket_size: usize,
    /// Number of clubs that entered, including qualification.
    pub participants: usize,
    /// Seeds in ascending order.
    pub seeds: Vec<SeededClub>,
}

impl Bracket {
    pub fn node(&self, id: NodeId) -> Option<&BracketNode> {
        self.nodes.get(id)
    }

    pub fn nodes_of(&self, bracket: BracketType) -> impl Iterator<Item = &BracketNode> {
        self.nodes.iter().filter(move |n| n.bracket == bracket)
    }

    pub fn nodes_in_round(&self, round: u32) -> impl Iterator<Item = &BracketNode> {
        self.nodes.iter().filter(move |n| n.round == round)
    }

    pub fn nodes_at_stage(&self, stage: Stage) -> impl Iterator<Item = &BracketNode> {
        self.nodes.iter().filter(move |n| n.stage == stage)
    }

    pub fn byes(&self) -> impl Iterator<Item = &BracketNode> {
        self.nodes.iter().filter(|n| n.is_bye())
    }

    /// Entered clubs with their playoff seed.
    pub fn entrants(&self) -> Vec<Participant> {
        self.seeds
            .iter()
            .map(|s| Participant::with_seed(s.club_id, s.seed))
            .collect()
    }

    pub fn seed_of(&self, club: ClubId) -> Option<u32> {
        self.seeds.iter().find(|s| s.club_id == club).map(|s| s.seed)
    }

    /// Highest round number in the plan (0 when empty).
    pub fn round_count(&self) -> u32 {
        self.nodes.iter().map(|n| n.round).max().unwrap_or(0)
    }

    /// Stage sequence along the championship path (qualification, main and gold rounds).
    pub fn main_path_stages(&self) -> Vec<Stage> {
        let mut stages: Vec<(u32, Stage)> = self
            .nodes
            .iter()
            .filter(|n| n.bracket != BracketType::Silver && n.stage != Stage::ThirdPlace)
            .map(|n| (n.round, n.stage))
            .collect();
        stages.sort_by_key(|(round, _)| *round);
        stages.dedup();
        stages.into_iter().map(|(_, stage)| stage).collect()
    }
}
