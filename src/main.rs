use anyhow::Result;

use bridge_follow::cli::Command;
use bridge_follow::config::settings::AppConfig;
use bridge_follow::{
    handle_completions, handle_games, handle_replay, handle_serve, handle_standings, handle_teams,
    interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let cli = interpret();
    let config = AppConfig::new().with_tie_break(cli.tie_break);
    execute_command(&cli.command, &config)
}

fn execute_command(command: &Command, config: &AppConfig) -> Result<()> {
    match command {
        Command::Teams { url, json } => handle_teams(config, url.as_deref(), *json),
        Command::Standings {
            round,
            url,
            follow,
            json,
        } => handle_standings(config, url.as_deref(), *round, follow.as_deref(), *json),
        Command::Games {
            team,
            round,
            url,
            json,
        } => handle_games(config, url.as_deref(), team, *round, *json),
        Command::Replay {
            url,
            follow,
            games,
            watch,
        } => handle_replay(config, url.as_deref(), follow.as_deref(), *games, *watch),
        Command::Serve { port, url } => handle_serve(config, *port, url.as_deref()),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
