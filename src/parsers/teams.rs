use log::{debug, info};
use scraper::{ElementRef, Html};
use serde::Serialize;

use super::numeric::{parse_or_default, parse_penalty};
use super::schema::{self, ResultsLayout};
use crate::domain::Team;
use crate::errors::ExtractionError;

/// Event title and teams read from a results summary page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultsPage {
    pub title: String,
    pub teams: Vec<Team>,
}

/// Extract teams using the default results table layout.
///
/// Returns `Ok(None)` when the results table exists but yields no usable
/// rows, and `Err(ResultsTableMissing)` when there is no table at all.
pub fn extract_teams(markup: &str) -> Result<Option<ResultsPage>, ExtractionError> {
    extract_teams_with(markup, &ResultsLayout::default())
}

pub fn extract_teams_with(
    markup: &str,
    layout: &ResultsLayout,
) -> Result<Option<ResultsPage>, ExtractionError> {
    let document = Html::parse_document(markup);
    let title = extract_title(&document);

    let table = document
        .select(&schema::RESULTS_TABLE)
        .next()
        .ok_or(ExtractionError::ResultsTableMissing)?;

    let teams: Vec<Team> = table
        .select(&schema::ROW)
        .skip(1)
        .filter_map(|row| parse_team_row(row, layout))
        .collect();

    if teams.is_empty() {
        info!("Results table for '{}' has no usable rows", title);
        return Ok(None);
    }

    info!("Extracted {} teams for '{}'", teams.len(), title);
    Ok(Some(ResultsPage { title, teams }))
}

fn extract_title(document: &Html) -> String {
    document
        .select(&schema::EVENT_INFO_TABLE)
        .next()
        .and_then(|table| table.select(&schema::EVENT_TITLE_ROW).next())
        .and_then(|row| row.select(&schema::CELL).next())
        .map(|cell| schema::trimmed_text(&cell))
        .unwrap_or_else(|| schema::DEFAULT_EVENT_TITLE.to_string())
}

fn parse_team_row(row: ElementRef, layout: &ResultsLayout) -> Option<Team> {
    let cells: Vec<ElementRef> = row.select(&schema::CELL).collect();
    if cells.len() < layout.min_cells {
        debug!("Skipping results row with {} cells", cells.len());
        return None;
    }

    let (name, personal_url) = parse_name_cell(cells.get(layout.name_cell)?);
    let matches = parse_vp_window(&cells, layout);
    let penalty = cells.last().map(parse_penalty_cell).unwrap_or(0.0);

    Some(Team {
        name,
        matches,
        penalty,
        personal_url,
    })
}

fn parse_name_cell(cell: &ElementRef) -> (String, Option<String>) {
    match cell.select(&schema::ANCHOR).next() {
        Some(anchor) => {
            let href = anchor.value().attr("href").map(str::to_string);
            (schema::trimmed_text(&anchor), href)
        }
        None => (schema::trimmed_text(cell), None),
    }
}

fn parse_vp_window(cells: &[ElementRef], layout: &ResultsLayout) -> Vec<f64> {
    let mut matches: Vec<f64> = cells
        .iter()
        .skip(layout.vp_offset)
        .take(layout.vp_window)
        .map(parse_vp_cell)
        .collect();
    matches.resize(layout.vp_window, 0.0);
    matches
}

fn parse_vp_cell(cell: &ElementRef) -> f64 {
    schema::text_span(cell)
        .map(|text| parse_or_default(&text).value)
        .unwrap_or(0.0)
}

fn parse_penalty_cell(cell: &ElementRef) -> f64 {
    schema::text_span(cell)
        .map(|text| parse_penalty(&text).value)
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vp_cells(values: &[&str]) -> String {
        values
            .iter()
            .map(|v| format!("<td><bdo>{}</bdo></td>", v))
            .collect()
    }

    fn row(name_cell: &str, vps: &[&str], penalty: &str) -> String {
        format!(
            "<tr><td>1</td><td>{}</td><td>x</td><td>y</td>{}<td><bdo>{}</bdo></td></tr>",
            name_cell,
            vp_cells(vps),
            penalty
        )
    }

    fn page(rows: &[String]) -> String {
        format!(
            r#"<html><body>
            <table class="eventInfo"><tr class="eventInfoTitle"><td> Spring Teams 2024 </td></tr></table>
            <table class="resultsTable">
                <tr><th>#</th><th>Team</th></tr>
                {}
            </table>
            </body></html>"#,
            rows.concat()
        )
    }

    #[test]
    fn test_extracts_name_link_vps_and_penalty() {
        let html = page(&[
            row(
                r#"<a href="personal1.php?event=26699&team=3"> Lions </a>"#,
                &["15,5", "12"],
                "-1,5",
            ),
            row("Tigers", &["4.5", "18"], " "),
        ]);

        let results = extract_teams(&html).unwrap().unwrap();
        assert_eq!(results.title, "Spring Teams 2024");
        assert_eq!(results.teams.len(), 2);

        let lions = &results.teams[0];
        assert_eq!(lions.name, "Lions");
        assert_eq!(
            lions.personal_url.as_deref(),
            Some("personal1.php?event=26699&team=3")
        );
        assert_eq!(lions.matches[0], 15.5);
        assert_eq!(lions.matches[1], 12.0);
        assert_eq!(lions.penalty, -1.5);

        let tigers = &results.teams[1];
        assert_eq!(tigers.name, "Tigers");
        assert_eq!(tigers.personal_url, None);
        assert_eq!(tigers.penalty, 0.0);
    }

    #[test]
    fn test_every_team_has_full_window() {
        let html = page(&[
            row("Short", &["10"], "0"),
            row("Long", &["1"; 30], "0"),
        ]);

        let results = extract_teams(&html).unwrap().unwrap();
        for team in &results.teams {
            assert_eq!(team.matches.len(), 28);
            assert!(team.matches.iter().all(|vp| vp.is_finite()));
            assert!(team.penalty.is_finite());
        }
    }

    #[test]
    fn test_malformed_vp_cell_defaults_to_zero() {
        let html = page(&[row("Lions", &["abc", "17,2", "NaN"], "")]);

        let results = extract_teams(&html).unwrap().unwrap();
        let lions = &results.teams[0];
        assert_eq!(lions.matches[0], 0.0);
        assert_eq!(lions.matches[1], 17.2);
        assert_eq!(lions.matches[2], 0.0);
    }

    #[test]
    fn test_short_rows_are_skipped() {
        let html = page(&[
            "<tr><td>1</td><td>Broken</td><td>x</td></tr>".to_string(),
            row("Lions", &["10"], "0"),
        ]);

        let results = extract_teams(&html).unwrap().unwrap();
        let names: Vec<&str> = results.teams.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Lions"]);
    }

    #[test]
    fn test_missing_results_table_is_an_error() {
        let html = r#"<html><body><table class="other"><tr><td>1</td></tr></table></body></html>"#;

        assert_eq!(extract_teams(html), Err(ExtractionError::ResultsTableMissing));
    }

    #[test]
    fn test_empty_results_table_is_not_an_error() {
        let html = page(&[]);

        assert_eq!(extract_teams(&html), Ok(None));
    }

    #[test]
    fn test_missing_title_falls_back_to_default() {
        let html = format!(
            r#"<table class="resultsTable"><tr><th>h</th></tr>{}</table>"#,
            row("Lions", &["10"], "0")
        );

        let results = extract_teams(&html).unwrap().unwrap();
        assert_eq!(results.title, schema::DEFAULT_EVENT_TITLE);
    }

    #[test]
    fn test_title_only_read_from_first_event_info_table() {
        let html = format!(
            r#"<table class="eventInfo"><tr><td>Venue</td></tr></table>
            <table class="eventInfo"><tr class="eventInfoTitle"><td>Second</td></tr></table>
            <table class="resultsTable"><tr><th>h</th></tr>{}</table>"#,
            row("Lions", &["10"], "0")
        );

        let results = extract_teams(&html).unwrap().unwrap();
        assert_eq!(results.title, schema::DEFAULT_EVENT_TITLE);
    }

    #[test]
    fn test_custom_layout_window() {
        let layout = ResultsLayout {
            vp_window: 3,
            ..ResultsLayout::default()
        };
        let html = page(&[row("Lions", &["1", "2", "3", "4"], "0")]);

        let results = extract_teams_with(&html, &layout).unwrap().unwrap();
        assert_eq!(results.teams[0].matches, vec![1.0, 2.0, 3.0]);
    }
}
