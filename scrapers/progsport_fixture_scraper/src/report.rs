//! Console tables for the three rankings. Each table takes the top N of
//! its ranking; the spread and total tables additionally drop entries that
//! have no betting line to show, so they can print fewer than N rows.

use tabled::{Table, Tabled};

use crate::fixture::Fixture;
use crate::rank;

#[derive(Debug, Tabled)]
struct WinRow {
    #[tabled(rename = "Fixture")]
    fixture: String,
    #[tabled(rename = "Predict A")]
    predict_a: String,
    #[tabled(rename = "Predict B")]
    predict_b: String,
    #[tabled(rename = "Odds A")]
    odds_a: String,
    #[tabled(rename = "Odds B")]
    odds_b: String,
    #[tabled(rename = "Value")]
    value: String,
}

#[derive(Debug, Tabled)]
struct SpreadRow {
    #[tabled(rename = "Fixture")]
    fixture: String,
    #[tabled(rename = "Spread")]
    spread: String,
    #[tabled(rename = "Team A")]
    team_a: String,
    #[tabled(rename = "Team B")]
    team_b: String,
}

#[derive(Debug, Tabled)]
struct TotalRow {
    #[tabled(rename = "Fixture")]
    fixture: String,
    #[tabled(rename = "Total")]
    total: String,
    #[tabled(rename = "Under")]
    under: String,
    #[tabled(rename = "Over")]
    over: String,
    #[tabled(rename = "Predicted Total")]
    predicted_total: String,
}

fn fmt_opt(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

fn fmt_value(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.3}"))
}

pub fn win_table(fixtures: &[Fixture], top_n: usize) -> String {
    let rows: Vec<WinRow> = rank::rank_by_win(fixtures)
        .into_iter()
        .take(top_n)
        .map(|f| WinRow {
            fixture: f.matchup(),
            predict_a: fmt_opt(f.predict_win_a),
            predict_b: fmt_opt(f.predict_win_b),
            odds_a: fmt_opt(f.odds_win_a),
            odds_b: fmt_opt(f.odds_win_b),
            value: fmt_value(rank::win_value(f)),
        })
        .collect();
    Table::new(rows).to_string()
}

pub fn spread_table(fixtures: &[Fixture], top_n: usize) -> String {
    let rows: Vec<SpreadRow> = rank::rank_by_spread(fixtures)
        .into_iter()
        .take(top_n)
        .filter(|f| f.spread.is_some())
        .map(|f| SpreadRow {
            fixture: f.matchup(),
            spread: fmt_opt(f.spread),
            team_a: fmt_opt(f.predict_spread_a),
            team_b: fmt_opt(f.predict_spread_b),
        })
        .collect();
    Table::new(rows).to_string()
}

pub fn total_table(fixtures: &[Fixture], top_n: usize) -> String {
    let rows: Vec<TotalRow> = rank::rank_by_total(fixtures)
        .into_iter()
        .take(top_n)
        .filter(|f| f.total.is_some())
        .map(|f| TotalRow {
            fixture: f.matchup(),
            total: fmt_opt(f.total),
            under: fmt_opt(f.predict_total_under),
            over: fmt_opt(f.predict_total_over),
            predicted_total: fmt_opt(f.predict_total),
        })
        .collect();
    Table::new(rows).to_string()
}

/// Print the win, spread and total tables in that order.
pub fn print_report(fixtures: &[Fixture], top_n: usize) {
    println!("{}", win_table(fixtures, top_n));
    println!("{}", spread_table(fixtures, top_n));
    println!("{}", total_table(fixtures, top_n));
}
