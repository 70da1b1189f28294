//! Integration tests for the regular-season calendar.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveTime, Weekday};
use league_scheduler::{
    partition_groups, run_season_automation, ClubId, GroupAssignment, GroupSlot, GroupStageConfig,
    PlayoffOptions, ScheduleError, SeasonConfig, SeriesFormat, Stage,
};
use std::collections::HashSet;

fn config(clubs: u64) -> SeasonConfig {
    SeasonConfig {
        competition_id: 42,
        season_name: "2024".to_string(),
        start_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        match_weekday: Weekday::Sat,
        match_time: NaiveTime::from_hms_opt(19, 0, 0).unwrap(),
        utc_offset_minutes: 180,
        slot_interval_minutes: 0,
        venue_city: "Moscow".to_string(),
        club_ids: (1..=clubs).collect(),
        series: SeriesFormat::Single,
        rounds: 1,
        group_stage: None,
        group_rounds: None,
        playoffs: None,
    }
}

fn groups_of_four() -> GroupStageConfig {
    let group = |index: usize, clubs: &[ClubId]| GroupAssignment {
        index,
        name: None,
        slots: clubs
            .iter()
            .enumerate()
            .map(|(i, &club_id)| GroupSlot {
                position: i + 1,
                club_id,
            })
            .collect(),
    };
    GroupStageConfig {
        group_count: 2,
        group_size: 4,
        qualify_count: 2,
        groups: vec![group(0, &[1, 3, 5, 7]), group(1, &[2, 4, 6, 8])],
    }
}

fn kickoff(s: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(s).unwrap()
}

#[test]
fn first_matchday_is_next_match_weekday() {
    let result = run_season_automation(&config(4)).unwrap();
    assert_eq!(result.matches[0].kickoff, kickoff("2024-05-04T19:00:00+03:00"));
    assert!(result
        .matches
        .iter()
        .all(|m| m.kickoff.weekday() == Weekday::Sat));
    // One week per round.
    let round_three = result.matches.iter().find(|m| m.round == 3).unwrap();
    assert_eq!(round_three.kickoff, kickoff("2024-05-18T19:00:00+03:00"));
}

#[test]
fn matches_are_numbered_in_calendar_order() {
    let result = run_season_automation(&config(6)).unwrap();
    assert_eq!(result.matches.len(), 15);
    let numbers: Vec<u32> = result.matches.iter().map(|m| m.number).collect();
    assert_eq!(numbers, (1..=15).collect::<Vec<u32>>());
    assert!(result.matches.windows(2).all(|w| w[0].kickoff <= w[1].kickoff));
    assert_eq!(result.round_count(), 5);
    assert!(result.matches.iter().all(|m| m.venue == "Moscow" && m.group().is_none()));
    for club in 1..=6 {
        assert_eq!(result.matches.iter().filter(|m| m.involves(club)).count(), 5);
    }
}

#[test]
fn odd_league_skips_byes() {
    let result = run_season_automation(&config(5)).unwrap();
    assert_eq!(result.matches.len(), 10);
    assert!(result.matches.iter().all(|m| m.home.is_some() && m.away.is_some()));
    assert_eq!(
        result.last_kickoff(),
        Some(kickoff("2024-05-04T19:00:00+03:00") + chrono::Duration::weeks(4))
    );
}

#[test]
fn two_groups_of_four() {
    let mut cfg = config(8);
    cfg.group_stage = Some(groups_of_four());
    let result = run_season_automation(&cfg).unwrap();

    assert_eq!(result.groups.len(), 2);
    assert_eq!(result.groups[0].name, "A");
    assert_eq!(result.groups[1].name, "B");
    let members = result.groups[1].participants();
    let ids: Vec<ClubId> = members.iter().map(|p| p.club_id).collect();
    assert_eq!(ids, vec![2, 4, 6, 8]);
    assert!(members.iter().all(|p| p.group == Some(1) && p.seed.is_none()));
    assert_eq!(result.matches.len(), 12);
    for group in &result.groups {
        let group_matches: Vec<_> = result
            .matches
            .iter()
            .filter(|m| m.group() == Some(group.index))
            .collect();
        assert_eq!(group_matches.len(), 6);
        let rounds: HashSet<u32> = group_matches.iter().map(|m| m.round).collect();
        assert_eq!(rounds.len(), 3);
        for m in group_matches {
            assert!(group.contains(m.home.unwrap()));
            assert!(group.contains(m.away.unwrap()));
        }
    }
    // Both groups share matchdays.
    let matchdays: HashSet<_> = result.matches.iter().map(|m| m.kickoff).collect();
    assert_eq!(matchdays.len(), 3);
}

#[test]
fn group_rounds_override_league_rounds() {
    let mut cfg = config(8);
    cfg.group_stage = Some(groups_of_four());
    cfg.rounds = 1;
    cfg.group_rounds = Some(2);
    let result = run_season_automation(&cfg).unwrap();
    assert_eq!(result.matches.len(), 24);
    assert_eq!(result.round_count(), 6);
}

#[test]
fn group_stage_validation() {
    let mut cfg = config(8);
    let mut stage = groups_of_four();
    stage.group_count = 0;
    cfg.group_stage = Some(stage);
    assert_eq!(run_season_automation(&cfg), Err(ScheduleError::GroupStageInvalidCount));

    let mut stage = groups_of_four();
    stage.qualify_count = 5;
    cfg.group_stage = Some(stage);
    assert_eq!(
        run_season_automation(&cfg),
        Err(ScheduleError::GroupStageInvalidQualifyCount)
    );

    let mut stage = groups_of_four();
    stage.group_size = 3;
    cfg.group_stage = Some(stage);
    assert_eq!(
        run_season_automation(&cfg),
        Err(ScheduleError::GroupStageCountMismatch { expected: 6, actual: 8 })
    );

    let mut stage = groups_of_four();
    stage.groups[1].index = 0;
    cfg.group_stage = Some(stage);
    assert_eq!(
        run_season_automation(&cfg),
        Err(ScheduleError::GroupStageDuplicateIndex(0))
    );

    let mut stage = groups_of_four();
    stage.groups[1].slots[0].club_id = 99;
    cfg.group_stage = Some(stage);
    assert_eq!(
        run_season_automation(&cfg),
        Err(ScheduleError::GroupStageUnknownClub(99))
    );

    let mut stage = groups_of_four();
    stage.groups[1].slots[0].club_id = 1;
    cfg.group_stage = Some(stage);
    assert_eq!(
        run_season_automation(&cfg),
        Err(ScheduleError::GroupStageDuplicateClub(1))
    );

    let mut stage = groups_of_four();
    stage.groups[0].slots[1].position = 1;
    cfg.group_stage = Some(stage);
    assert_eq!(
        run_season_automation(&cfg),
        Err(ScheduleError::GroupStageDuplicateSlotPosition { group: 0, position: 1 })
    );

    let mut stage = groups_of_four();
    stage.groups[0].slots[3].position = 9;
    cfg.group_stage = Some(stage);
    assert_eq!(
        run_season_automation(&cfg),
        Err(ScheduleError::GroupStageInvalidSlotPosition { group: 0, position: 9 })
    );

    let mut stage = groups_of_four();
    stage.groups[1].slots.pop();
    cfg.group_stage = Some(stage);
    assert_eq!(
        run_season_automation(&cfg),
        Err(ScheduleError::GroupStageIncomplete { group: 1 })
    );
}

#[test]
fn oversized_group_counts_are_rejected() {
    let mut stage = groups_of_four();
    stage.group_size = usize::MAX / 2 + 3;
    assert_eq!(
        partition_groups(&[1, 2, 3, 4], &stage),
        Err(ScheduleError::GroupStageInvalidSize)
    );

    let mut stage = groups_of_four();
    stage.group_count = usize::MAX;
    assert_eq!(stage.qualifiers(), usize::MAX);
    let clubs: Vec<ClubId> = (1..=8).collect();
    assert_eq!(
        partition_groups(&clubs, &stage),
        Err(ScheduleError::GroupStageCountMismatch {
            expected: usize::MAX,
            actual: 8
        })
    );

    let mut cfg = config(4);
    let mut stage = groups_of_four();
    stage.group_count = 2;
    stage.group_size = usize::MAX / 2 + 3;
    cfg.group_stage = Some(stage);
    assert_eq!(run_season_automation(&cfg), Err(ScheduleError::GroupStageInvalidSize));
}

#[test]
fn best_of_three_takes_three_weeks_per_round() {
    let mut cfg = config(4);
    cfg.series = SeriesFormat::BestOf(3);
    let result = run_season_automation(&cfg).unwrap();
    assert_eq!(result.matches.len(), 18);

    let first: Vec<_> = result.matches.iter().filter(|m| m.round == 1).collect();
    assert_eq!(first.len(), 6);
    let series: Vec<_> = first.iter().take(3).collect();
    assert_eq!(series[0].game_number, 1);
    assert_eq!(series[1].game_number, 2);
    assert_eq!(series[2].game_number, 3);
    assert_eq!(series[1].home, series[0].away);
    assert_eq!(series[2].home, series[0].home);
    assert_eq!(series[2].kickoff, kickoff("2024-05-18T19:00:00+03:00"));

    let second = result.matches.iter().find(|m| m.round == 2).unwrap();
    assert_eq!(second.kickoff, kickoff("2024-05-25T19:00:00+03:00"));
}

#[test]
fn slot_interval_staggers_kickoffs() {
    let mut cfg = config(4);
    cfg.slot_interval_minutes = 90;
    let result = run_season_automation(&cfg).unwrap();
    assert_eq!(result.matches[0].kickoff, kickoff("2024-05-04T19:00:00+03:00"));
    assert_eq!(result.matches[1].kickoff, kickoff("2024-05-04T20:30:00+03:00"));
    assert_eq!(result.matches[2].kickoff, kickoff("2024-05-11T19:00:00+03:00"));
}

#[test]
fn two_legs_need_a_group_stage() {
    let mut cfg = config(8);
    cfg.series = SeriesFormat::TwoLegs;
    assert_eq!(
        run_season_automation(&cfg),
        Err(ScheduleError::InvalidSeriesFormat(SeriesFormat::TwoLegs))
    );

    cfg.group_stage = Some(groups_of_four());
    let result = run_season_automation(&cfg).unwrap();
    assert_eq!(result.matches.len(), 24);
    let legs: Vec<u8> = result.matches.iter().take(2).map(|m| m.game_number).collect();
    assert_eq!(legs, vec![1, 2]);
}

#[test]
fn playoff_skeleton_is_reported_up_front() {
    let mut cfg = config(8);
    cfg.group_stage = Some(groups_of_four());
    cfg.playoffs = Some(PlayoffOptions::with_series(SeriesFormat::BestOf(3)));
    let skeleton = run_season_automation(&cfg).unwrap().playoffs.unwrap();
    assert_eq!(skeleton.participants, 4);
    assert_eq!(skeleton.bracket_size, 4);
    assert_eq!(skeleton.stages, vec![Stage::Semifinal, Stage::Final]);
    assert_eq!(skeleton.series, SeriesFormat::BestOf(3));

    let mut cfg = config(10);
    cfg.playoffs = Some(PlayoffOptions {
        main_bracket_size: Some(8),
        ..PlayoffOptions::default()
    });
    let skeleton = run_season_automation(&cfg).unwrap().playoffs.unwrap();
    assert_eq!(skeleton.participants, 8);
    assert_eq!(
        skeleton.stages,
        vec![Stage::Quarterfinal, Stage::Semifinal, Stage::Final]
    );

    cfg.playoffs = Some(PlayoffOptions {
        main_bracket_size: Some(usize::MAX / 2 + 1),
        ..PlayoffOptions::default()
    });
    let skeleton = run_season_automation(&cfg).unwrap().playoffs.unwrap();
    assert_eq!(skeleton.participants, 10);
    assert_eq!(skeleton.bracket_size, 16);
}

#[test]
fn invalid_inputs_fail_before_scheduling() {
    let mut cfg = config(1);
    cfg.utc_offset_minutes = 1440;
    assert_eq!(run_season_automation(&cfg), Err(ScheduleError::InvalidTimeZone(1440)));

    assert_eq!(
        run_season_automation(&config(1)),
        Err(ScheduleError::NotEnoughParticipants)
    );

    let mut cfg = config(4);
    cfg.club_ids.push(2);
    assert_eq!(run_season_automation(&cfg), Err(ScheduleError::DuplicateClub(2)));

    let mut cfg = config(4);
    cfg.rounds = 0;
    assert_eq!(run_season_automation(&cfg), Err(ScheduleError::InvalidRounds));

    let mut cfg = config(4);
    cfg.series = SeriesFormat::BestOf(2);
    assert_eq!(
        run_season_automation(&cfg),
        Err(ScheduleError::InvalidSeriesFormat(SeriesFormat::BestOf(2)))
    );

    let mut cfg = config(4);
    cfg.playoffs = Some(PlayoffOptions {
        main_bracket_size: Some(3),
        ..PlayoffOptions::default()
    });
    assert_eq!(run_season_automation(&cfg), Err(ScheduleError::InvalidBracketSize(3)));
}

#[test]
fn config_defaults_from_json() {
    let cfg: SeasonConfig = serde_json::from_value(serde_json::json!({
        "competition_id": 7,
        "season_name": "Spring",
        "start_date": "2024-05-01",
        "match_weekday": "Sat",
        "match_time": "19:00:00",
        "venue_city": "Kazan",
        "club_ids": [1, 2, 3, 4],
        "playoffs": {}
    }))
    .unwrap();
    assert_eq!(cfg.rounds, 1);
    assert_eq!(cfg.utc_offset_minutes, 0);
    assert_eq!(cfg.series, SeriesFormat::Single);
    let playoffs = cfg.playoffs.unwrap();
    assert!(playoffs.consolation);
    assert!(playoffs.third_place_match);
}
