use log::debug;
use regex::Regex;
use scraper::{ElementRef, Html};
use std::sync::LazyLock;

use super::schema::{self, BOARD, CONTRACT, IMP, LEAD};
use crate::domain::Game;

static ROUND_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"round=([^&]*)").expect("static regex must be valid"));

/// Extract every played board from a team's detail page.
///
/// Never fails: tables without a round link and rows that do not look like
/// a played board are dropped, so one team's page quirks cannot abort the
/// load of the others.
pub fn extract_games(team_name: &str, markup: &str) -> Vec<Game> {
    let document = Html::parse_document(markup);
    let mut games = Vec::new();

    let tables: Vec<ElementRef> = document.select(&schema::MATCH_TABLE).collect();
    debug!("Team {}: found {} match tables", team_name, tables.len());

    for table in tables {
        let Some(match_number) = parse_match_number(&table) else {
            debug!("Team {}: no usable round link in match table", team_name);
            continue;
        };

        let before = games.len();
        games.extend(
            table
                .select(&schema::ROW)
                .skip(schema::MATCH_HEADER_ROWS)
                .filter_map(|row| parse_game_row(team_name, match_number, row)),
        );
        debug!(
            "Team {}, match {}: {} games",
            team_name,
            match_number,
            games.len() - before
        );
    }

    debug!("Team {}: total games collected: {}", team_name, games.len());
    games
}

fn parse_match_number(table: &ElementRef) -> Option<u32> {
    let link = table.select(&schema::ROUND_LINK).next()?;
    let href = link.value().attr("href")?;
    round_from_href(href)
}

/// Match number carried by a `round=` query parameter.
pub fn round_from_href(href: &str) -> Option<u32> {
    let captures = ROUND_VALUE.captures(href)?;
    captures.get(1)?.as_str().trim().parse().ok()
}

fn parse_game_row(team_name: &str, match_number: u32, row: ElementRef) -> Option<Game> {
    let cells: Vec<ElementRef> = row.select(&schema::CELL).collect();
    if cells.len() < schema::MIN_GAME_CELLS {
        debug!(
            "Team {}, match {}: skipped row with {} cells",
            team_name,
            match_number,
            cells.len()
        );
        return None;
    }

    let board = parse_board(&cells);
    if board.is_empty() {
        debug!("Team {}, match {}: skipped row without board", team_name, match_number);
        return None;
    }

    let contract = parse_contract(&cells);
    if !is_played(&contract) {
        debug!(
            "Team {}, match {}: skipped board {} with contract '{}'",
            team_name, match_number, board, contract
        );
        return None;
    }

    Some(Game {
        team: team_name.to_string(),
        match_number,
        board,
        contract,
        score: parse_score(&cells),
        imp: parse_imp(&cells),
        lead: parse_lead(&cells),
    })
}

fn parse_board(cells: &[ElementRef]) -> String {
    BOARD
        .find(cells)
        .and_then(|cell| cell.select(&schema::ANCHOR).next())
        .map(|anchor| schema::trimmed_text(&anchor))
        .filter(|text| text.chars().any(|c| c.is_ascii_digit()))
        .unwrap_or_default()
}

fn parse_contract(cells: &[ElementRef]) -> String {
    CONTRACT
        .find(cells)
        .map(|cell| schema::stripped_text(&cell))
        .unwrap_or_default()
}

fn is_played(contract: &str) -> bool {
    !contract.is_empty() && !contract.to_uppercase().contains(schema::NOT_PLAYED)
}

fn parse_lead(cells: &[ElementRef]) -> String {
    let lead = LEAD
        .find(cells)
        .map(|cell| match cell.select(&schema::TEXT_SPAN).next() {
            Some(span) => schema::stripped_text(&span),
            None => schema::stripped_text(&cell),
        })
        .unwrap_or_default();

    if !lead.is_empty() || cells.len() < schema::LEAD_FALLBACK_FROM_END {
        return lead;
    }
    schema::stripped_text(&cells[cells.len() - schema::LEAD_FALLBACK_FROM_END])
}

fn parse_imp(cells: &[ElementRef]) -> String {
    IMP.find(cells)
        .map(|cell| schema::stripped_text(&cell))
        .unwrap_or_default()
}

/// Whichever side's score column is filled for this seating.
fn parse_score(cells: &[ElementRef]) -> String {
    cells
        .iter()
        .take(2)
        .map(schema::stripped_text)
        .find(|text| !text.is_empty())
        .unwrap_or_default()
}
