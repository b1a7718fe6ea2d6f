//! The three rankings over the scraped fixture list.
//!
//! Each ranking is driven by a strength score that is only defined when the
//! fixture carries the relevant prediction data. Fixtures with a score sort
//! before fixtures without one; two scored fixtures sort by score
//! descending; two unscored fixtures compare equal, so the stable sort
//! keeps them in source order.

use std::cmp::Ordering;

use crate::fixture::Fixture;
use crate::value::calculate_value;

/// Best expected value across the two sides, over whichever sides have both
/// odds and a prediction. `None` when neither side is priced.
pub fn win_value(fixture: &Fixture) -> Option<f64> {
    max_present(
        calculate_value(fixture.odds_win_a, fixture.predict_win_a),
        calculate_value(fixture.odds_win_b, fixture.predict_win_b),
    )
}

/// Win ranking strength. The qualifying guard checks side A only, so a
/// fixture missing side B odds still ranks on its side A value.
fn win_strength(fixture: &Fixture) -> Option<f64> {
    if fixture.predict_win_a.is_none() || fixture.odds_win_a.is_none() {
        return None;
    }
    win_value(fixture)
}

/// Spread ranking strength: the stronger side's predicted probability of
/// covering the line, defined only when both sides were modelled.
fn spread_strength(fixture: &Fixture) -> Option<f64> {
    match (fixture.predict_spread_a, fixture.predict_spread_b) {
        (Some(a), Some(b)) => Some(a.max(b)),
        _ => None,
    }
}

/// Total ranking strength: the more confident of the under/over predictions,
/// defined only when both are present.
fn total_strength(fixture: &Fixture) -> Option<f64> {
    match (fixture.predict_total_under, fixture.predict_total_over) {
        (Some(under), Some(over)) => Some(under.max(over)),
        _ => None,
    }
}

fn max_present(a: Option<f64>, b: Option<f64>) -> Option<f64> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.max(b)),
        (Some(a), None) => Some(a),
        (None, Some(b)) => Some(b),
        (None, None) => None,
    }
}

fn compare_strength(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.total_cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn rank_by<'a>(
    fixtures: &'a [Fixture],
    strength: impl Fn(&Fixture) -> Option<f64>,
) -> Vec<&'a Fixture> {
    let mut ranked: Vec<&Fixture> = fixtures.iter().collect();
    ranked.sort_by(|a, b| compare_strength(strength(a), strength(b)));
    ranked
}

pub fn rank_by_win(fixtures: &[Fixture]) -> Vec<&Fixture> {
    rank_by(fixtures, win_strength)
}

pub fn rank_by_spread(fixtures: &[Fixture]) -> Vec<&Fixture> {
    rank_by(fixtures, spread_strength)
}

pub fn rank_by_total(fixtures: &[Fixture]) -> Vec<&Fixture> {
    rank_by(fixtures, total_strength)
}
