use pretty_assertions::assert_eq;

use progsport_fixture_scraper::parser::parse_fixtures;

const FRONT_PAGE: &str = include_str!("fixtures/front_page.html");

#[test]
fn test_parses_all_well_formed_rows_in_source_order() {
    let fixtures = parse_fixtures(FRONT_PAGE);

    // The section header row shares the fixture row class but has three
    // cells and must not show up here.
    assert_eq!(fixtures.len(), 5);
    assert_eq!(fixtures[0].team_a, "Boston Celtics");
    assert_eq!(fixtures[1].team_a, "Denver Nuggets");
    assert_eq!(fixtures[2].team_a, "Real Madrid");
    assert_eq!(fixtures[3].team_a, "Toronto Maple Leafs");
    assert_eq!(fixtures[4].team_a, "Green Bay Packers");
}

#[test]
fn test_played_fixture_fields() {
    let fixtures = parse_fixtures(FRONT_PAGE);
    let boston = &fixtures[0];

    assert_eq!(boston.league, "NBA");
    assert_eq!(boston.team_a, "Boston Celtics");
    assert_eq!(boston.team_b, "LA Lakers");
    assert_eq!(boston.predict_win_a, Some(62.5));
    assert_eq!(boston.predict_win_b, Some(37.5));
    assert_eq!(boston.odds_win_a, Some(1.65));
    assert_eq!(boston.odds_win_b, Some(2.35));
    assert_eq!(boston.spread, Some(-4.5));
    assert_eq!(boston.predict_spread_a, Some(58.0));
    assert_eq!(boston.predict_spread_b, Some(42.0));
    assert_eq!(boston.total, Some(221.5));
    assert_eq!(boston.predict_total_under, Some(47.0));
    assert_eq!(boston.predict_total_over, Some(53.0));
    assert_eq!(boston.predict_total, Some(224.0));
    assert_eq!(boston.result_a, "108");
    assert_eq!(boston.result_b, "102");
}

#[test]
fn test_unplayed_fixture_has_empty_result_strings() {
    let fixtures = parse_fixtures(FRONT_PAGE);
    let denver = &fixtures[1];

    assert_eq!(denver.result_a, "");
    assert_eq!(denver.result_b, "");
}

#[test]
fn test_dash_placeholders_parse_as_absent() {
    let fixtures = parse_fixtures(FRONT_PAGE);
    let real_madrid = &fixtures[2];

    assert_eq!(real_madrid.predict_win_a, None);
    assert_eq!(real_madrid.predict_win_b, None);
    assert_eq!(real_madrid.predict_spread_a, None);
    assert_eq!(real_madrid.predict_spread_b, None);
    // The betting lines themselves are still there
    assert_eq!(real_madrid.odds_win_a, Some(1.50));
    assert_eq!(real_madrid.spread, Some(-6.5));
    assert_eq!(real_madrid.total, Some(158.5));
}

#[test]
fn test_missing_side_b_odds() {
    let fixtures = parse_fixtures(FRONT_PAGE);
    let green_bay = &fixtures[4];

    assert_eq!(green_bay.odds_win_a, Some(1.95));
    assert_eq!(green_bay.odds_win_b, None);
}
