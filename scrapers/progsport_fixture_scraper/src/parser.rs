use scraper::{ElementRef, Html, Selector};

use crate::fixture::Fixture;

/// Fixture rows carry exactly this many direct `td` children; anything else
/// sharing the row classes is a header or spacer row.
const FIXTURE_CELL_COUNT: usize = 15;

/// Extract all fixture rows from the front page. Rows are matched by the
/// two fixture row classes; malformed rows are skipped without error, so
/// the output preserves source order over the accepted rows only.
pub fn parse_fixtures(html: &str) -> Vec<Fixture> {
    let document = Html::parse_document(html);
    let row_selector = Selector::parse("tr.F1, tr.F2").unwrap();

    let mut fixtures = Vec::new();
    for row in document.select(&row_selector) {
        if let Some(fixture) = parse_row(row) {
            fixtures.push(fixture);
        }
    }
    fixtures
}

fn parse_row(row: ElementRef) -> Option<Fixture> {
    // Direct children only; nested tables inside a cell must not shift the
    // positional field order.
    let cells: Vec<ElementRef> = row
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|el| el.value().name() == "td")
        .collect();

    if cells.len() != FIXTURE_CELL_COUNT {
        return None;
    }

    let league = cell_text(&cells[1]);
    let (team_a, team_b) = split_matchup(&cell_text(&cells[2]))?;

    let result = cell_text(&cells[14]);
    let (result_a, result_b) = split_result(&result);

    Some(Fixture {
        league,
        team_a,
        team_b,
        predict_win_a: cell_f64(&cells[3]),
        predict_win_b: cell_f64(&cells[4]),
        odds_win_a: cell_f64(&cells[5]),
        odds_win_b: cell_f64(&cells[6]),
        spread: cell_f64(&cells[7]),
        predict_spread_a: cell_f64(&cells[8]),
        predict_spread_b: cell_f64(&cells[9]),
        total: cell_f64(&cells[10]),
        predict_total_under: cell_f64(&cells[11]),
        predict_total_over: cell_f64(&cells[12]),
        predict_total: cell_f64(&cells[13]),
        result_a,
        result_b,
    })
}

fn cell_text(cell: &ElementRef) -> String {
    cell.text().collect::<String>().trim().to_string()
}

/// Numeric cells hold percentages, decimal odds or point lines. Only text
/// that fully parses as a float counts; placeholders like "-" or "" are
/// treated as missing data.
fn cell_f64(cell: &ElementRef) -> Option<f64> {
    cell_text(cell).parse::<f64>().ok()
}

/// The matchup cell reads "Team A - Team B". Split on the first hyphen;
/// a cell without one is not a fixture.
fn split_matchup(text: &str) -> Option<(String, String)> {
    let (a, b) = text.split_once('-')?;
    Some((a.trim().to_string(), b.trim().to_string()))
}

/// Played matches carry a "102-98" score, unplayed ones an empty cell.
fn split_result(text: &str) -> (String, String) {
    if text.is_empty() {
        return (String::new(), String::new());
    }
    match text.split_once('-') {
        Some((a, b)) => (a.to_string(), b.to_string()),
        None => (text.to_string(), String::new()),
    }
}
