//! CSV export of a full season.

use chrono::{NaiveDate, NaiveTime, Weekday};
use league_scheduler::{
    create_season_playoffs, write_matches_csv, BracketType, Locale, PlayoffOptions, Season,
    SeasonConfig, SeriesFormat,
};
use uuid::Uuid;

fn season() -> Season {
    let config = SeasonConfig {
        competition_id: 3,
        season_name: "Autumn".to_string(),
        start_date: NaiveDate::from_ymd_opt(2024, 9, 2).unwrap(),
        match_weekday: Weekday::Mon,
        match_time: NaiveTime::from_hms_opt(20, 0, 0).unwrap(),
        utc_offset_minutes: 0,
        slot_interval_minutes: 0,
        venue_city: "Samara".to_string(),
        club_ids: vec![10, 20, 30, 40],
        series: SeriesFormat::Single,
        rounds: 1,
        group_stage: None,
        group_rounds: None,
        playoffs: Some(PlayoffOptions {
            third_place_match: false,
            ..PlayoffOptions::default()
        }),
    };
    let mut season = Season::new(Uuid::new_v4(), config).unwrap();
    season.confirm_regular_season_finished().unwrap();
    create_season_playoffs(&mut season, &[10, 20], None).unwrap();
    season
}

#[test]
fn one_row_per_match_with_header() {
    let season = season();
    let mut out = Vec::new();
    write_matches_csv(&mut out, season.all_matches(), Locale::En).unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(
        lines[0],
        "number,round,game_number,home,away,kickoff,venue,group,node,bracket,stage"
    );
    assert_eq!(lines.len(), 1 + 7);
    assert_eq!(lines[1], "1,1,1,10,40,2024-09-02T20:00:00+00:00,Samara,,,,");
    assert_eq!(lines[7], "7,1,1,10,20,2024-09-23T20:00:00+00:00,Samara,,0,MAIN,Final");
}

#[test]
fn stage_labels_follow_locale() {
    let season = season();
    let mut out = Vec::new();
    write_matches_csv(&mut out, season.all_matches(), Locale::Ru).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.lines().last().unwrap().ends_with(",MAIN,Финал"));
}

#[test]
fn bracket_tags_match_serialized_names() {
    for bracket in [
        BracketType::Main,
        BracketType::Qualification,
        BracketType::Gold,
        BracketType::Silver,
    ] {
        assert_eq!(serde_json::to_value(bracket).unwrap(), bracket.as_str());
        assert_eq!(bracket.to_string(), bracket.as_str());
    }
}
