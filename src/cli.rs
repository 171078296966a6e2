use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::ranking::TieBreak;

#[derive(Parser, Debug)]
#[command(author, version, about = "Follow a bridge teams tournament round by round")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,

    /// How teams with equal VPs are ordered
    #[arg(long, global = true, value_enum, default_value_t = TieBreak::OriginalOrder)]
    pub tie_break: TieBreak,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// List the teams of a tournament with their total VPs
    Teams {
        /// Results page URL (defaults to BRIDGE_RESULTS_URL or the built-in event)
        #[arg(short, long)]
        url: Option<String>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Standings and pairings after a round
    Standings {
        /// 0-based round; negative means no round yet
        #[arg(short, long, allow_negative_numbers = true)]
        round: i64,
        /// Results page URL
        #[arg(short, long)]
        url: Option<String>,
        /// Team to highlight
        #[arg(short, long)]
        follow: Option<String>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Boards a team played in a round
    Games {
        /// Team name as shown on the results page
        #[arg(short, long)]
        team: String,
        /// 0-based round
        #[arg(short, long)]
        round: i64,
        /// Results page URL
        #[arg(short, long)]
        url: Option<String>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Step through every round, as a follower would
    Replay {
        /// Results page URL
        #[arg(short, long)]
        url: Option<String>,
        /// Team to highlight
        #[arg(short, long)]
        follow: Option<String>,
        /// Also show the followed team's boards each round
        #[arg(long)]
        games: bool,
        /// Reload the results page this many seconds after each pass and replay it
        #[arg(long, value_name = "SECS")]
        watch: Option<u64>,
    },
    /// Start the JSON API server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
        /// Results page URL
        #[arg(short, long)]
        url: Option<String>,
    },
    /// Print shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_standings() {
        let cli = Cli::parse_from(["bridge_follow", "standings", "--round", "-1", "--follow", "Lions"]);

        assert_eq!(
            cli.command,
            Command::Standings {
                round: -1,
                url: None,
                follow: Some("Lions".to_string()),
                json: false,
            }
        );
        assert_eq!(cli.tie_break, TieBreak::OriginalOrder);
    }

    #[test]
    fn test_parse_global_tie_break() {
        let cli = Cli::parse_from(["bridge_follow", "replay", "--tie-break", "alphabetical"]);

        assert_eq!(cli.tie_break, TieBreak::Alphabetical);
        assert!(matches!(cli.command, Command::Replay { games: false, watch: None, .. }));
    }

    #[test]
    fn test_parse_replay_watch() {
        let cli = Cli::parse_from(["bridge_follow", "replay", "--games", "--watch", "300"]);

        assert!(matches!(cli.command, Command::Replay { games: true, watch: Some(300), .. }));
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
