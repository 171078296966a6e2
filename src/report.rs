//! Plain-text tables for the terminal.

use colored::Colorize;
use std::fmt::Write;

use crate::domain::Team;
use crate::ranking::Ranking;
use crate::services::MatchView;

pub fn teams_table(teams: &[Team]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<30} {:>10} {:>8}  {}", "Team", "Total VPs", "Penalty", "Link");
    for team in teams {
        let _ = writeln!(
            out,
            "{:<30} {:>10.2} {:>8.2}  {}",
            team.name,
            team.total(),
            team.penalty,
            team.personal_url.as_deref().unwrap_or("-")
        );
    }
    out
}

/// Standings table; the followed team's row is highlighted.
pub fn standings_table(ranking: &Ranking, label: &str, followed: Option<&str>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", format!("Round: {}", label).bold());
    let _ = writeln!(
        out,
        "{:>8}  {:<30} {:>9} {:>9}  {}",
        "Position", "Team", "Match VPs", "Total VPs", "Competitor"
    );

    for standing in &ranking.standings {
        let line = format!(
            "{:>8}  {:<30} {:>9.2} {:>9.2}  {}",
            standing.position,
            standing.team,
            standing.match_vps,
            standing.total_vps,
            standing.competitor
        );
        if followed == Some(standing.team.as_str()) {
            let _ = writeln!(out, "{}", line.black().on_yellow());
        } else {
            let _ = writeln!(out, "{}", line);
        }
    }
    out
}

pub fn match_table(view: &MatchView) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}",
        format!(
            "Games for Match {}: {} ({:.2} VP) - VS - {} ({:.2} VP)",
            view.match_number, view.team, view.team_vps, view.competitor, view.competitor_vps
        )
        .bold()
    );

    if view.games.is_empty() {
        let _ = writeln!(out, "No games found for {} in Match {}", view.team, view.match_number);
        return out;
    }

    let _ = writeln!(out, "{:>6}  {:<10} {:>7} {:>5}  {}", "Board", "Contract", "Score", "IMP", "Lead");
    for game in &view.games {
        let _ = writeln!(
            out,
            "{:>6}  {:<10} {:>7} {:>5}  {}",
            game.board, game.contract, game.score, game.imp, game.lead
        );
    }
    out
}
