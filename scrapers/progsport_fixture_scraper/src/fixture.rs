use serde::{Deserialize, Serialize};

/// One fixture row scraped from the front page. Numeric cells that fail to
/// parse are kept as `None` rather than a sentinel value, so every
/// comparison site has to handle the missing case explicitly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
    pub league: String,
    pub team_a: String,
    pub team_b: String,
    pub predict_win_a: Option<f64>,
    pub predict_win_b: Option<f64>,
    pub odds_win_a: Option<f64>,
    pub odds_win_b: Option<f64>,
    pub spread: Option<f64>,
    pub predict_spread_a: Option<f64>,
    pub predict_spread_b: Option<f64>,
    pub total: Option<f64>,
    pub predict_total_under: Option<f64>,
    pub predict_total_over: Option<f64>,
    pub predict_total: Option<f64>,
    /// Score strings, empty while the match is unplayed.
    pub result_a: String,
    pub result_b: String,
}

impl Fixture {
    pub fn matchup(&self) -> String {
        format!("{} vs {}", self.team_a, self.team_b)
    }
}
