pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod fetchers;
pub mod http;
pub mod parsers;
pub mod rate_limiter;
pub mod ranking;
pub mod report;
pub mod services;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;
use log::{info, warn};
use std::sync::Arc;
use std::time::Duration;

use crate::config::settings::AppConfig;
use crate::domain::TournamentSnapshot;
use crate::fetchers::ResultsScraper;
use crate::parsers::ResultsPage;
use crate::ranking::RankingEngine;
use crate::services::ingestion::IngestionService;
use crate::services::server::ServerService;
use crate::services::views::MatchView;
use crate::services::{SessionAction, SessionState};

pub fn interpret() -> Cli {
    Cli::parse()
}

pub fn handle_teams(config: &AppConfig, url: Option<&str>, json: bool) -> Result<()> {
    let url = config.results_url(url);
    let Some(results) = load_results(config, &url)? else {
        println!("No team data found at {}", url);
        return Ok(());
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&results.teams)?);
    } else {
        println!("{}\n", results.title);
        print!("{}", report::teams_table(&results.teams));
    }
    Ok(())
}

pub fn handle_standings(
    config: &AppConfig,
    url: Option<&str>,
    round: i64,
    follow: Option<&str>,
    json: bool,
) -> Result<()> {
    let url = config.results_url(url);
    let Some(results) = load_results(config, &url)? else {
        println!("No team data found at {}", url);
        return Ok(());
    };

    let engine = RankingEngine::from_settings(&config.ranking);
    let Some(ranking) = engine.rank(&results.teams, round) else {
        println!("No round selected yet");
        return Ok(());
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&ranking)?);
    } else {
        let label = config.ranking.schedule.label(ranking.round);
        println!("{}\n", results.title);
        print!("{}", report::standings_table(&ranking, &label, follow));
    }
    Ok(())
}

pub fn handle_games(
    config: &AppConfig,
    url: Option<&str>,
    team: &str,
    round: i64,
    json: bool,
) -> Result<()> {
    let url = config.results_url(url);
    let Some(snapshot) = load_snapshot(config, &url)? else {
        println!("No team data found at {}", url);
        return Ok(());
    };

    let engine = RankingEngine::from_settings(&config.ranking);
    let Some(ranking) = engine.rank(&snapshot.teams, round) else {
        println!("No round selected yet");
        return Ok(());
    };
    let Some(view) = MatchView::build(&snapshot, &ranking, team) else {
        anyhow::bail!("Unknown team: {}", team);
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", report::match_table(&view));
    }
    Ok(())
}

/// Walk a follow session from the first round to the last. With `watch`
/// the results page is reloaded after every pass and the walk starts over.
pub fn handle_replay(
    config: &AppConfig,
    url: Option<&str>,
    follow: Option<&str>,
    show_games: bool,
    watch: Option<u64>,
) -> Result<()> {
    let url = config.results_url(url);
    let Some(snapshot) = load_snapshot(config, &url)? else {
        println!("No team data found at {}", url);
        return Ok(());
    };
    println!("{}\n", snapshot.title);

    let engine = RankingEngine::from_settings(&config.ranking);
    let mut state = SessionState::new()
        .apply(SessionAction::Loaded(Arc::new(snapshot)), &engine)
        .apply(SessionAction::Follow(follow.map(str::to_string)), &engine);

    if follow.is_some() && state.followed_team.is_none() {
        warn!("Team {:?} is not part of this tournament", follow);
    }

    loop {
        state = walk_rounds(state, config, &engine, show_games);

        let Some(secs) = watch else {
            return Ok(());
        };
        info!("Reloading {} in {} s", url, secs);
        std::thread::sleep(Duration::from_secs(secs));

        let fresh = match load_snapshot(config, &url) {
            Ok(Some(snapshot)) => Some(Arc::new(snapshot)),
            Ok(None) => {
                warn!("No team data found at {}, keeping previous data", url);
                None
            }
            Err(e) => {
                warn!("Reload failed, keeping previous data: {:#}", e);
                None
            }
        };
        state = state.reload(fresh, &engine);
    }
}

fn walk_rounds(
    mut state: SessionState,
    config: &AppConfig,
    engine: &RankingEngine,
    show_games: bool,
) -> SessionState {
    while state.can_advance(engine) {
        state = state.apply(SessionAction::NextRound, engine);

        if let Some(ranking) = state.ranking(engine) {
            let label = config.ranking.schedule.label(ranking.round);
            println!("{}", report::standings_table(&ranking, &label, state.followed_team.as_deref()));
        }

        if let (true, Some(team)) = (show_games, state.followed_team.clone()) {
            state = state.apply(SessionAction::ViewGames(team), engine);
            if let Some(view) = state.match_view(engine) {
                println!("{}", report::match_table(&view));
            }
            state = state.apply(SessionAction::Back, engine);
        }
    }
    state
}

pub fn handle_serve(config: &AppConfig, port: u16, url: Option<&str>) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let service = ServerService::new(port, config.results_url(url), config.clone());
        service.run().await
    })
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}

/// Summary page only; enough for team lists and standings.
fn load_results(config: &AppConfig, url: &str) -> Result<Option<ResultsPage>> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let mut scraper = ResultsScraper::new(config.scraper.clone(), config.layout)?;
        scraper.fetch_results(url).await
    })
}

/// Summary page plus every team's detail page.
fn load_snapshot(config: &AppConfig, url: &str) -> Result<Option<TournamentSnapshot>> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let mut service = IngestionService::new(config)?;
        service.run(url).await
    })
}
