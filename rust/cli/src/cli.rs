//! Command-line definitions parsed by clap.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "blackjack",
    version,
    about = "Single-player blackjack against a scripted dealer"
)]
pub struct BlackjackCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play interactively: hit or stand, then choose whether to go again
    Play {
        /// Player name shown next to the hand
        #[arg(long)]
        name: Option<String>,
        /// Number of 52-card decks in the shoe
        #[arg(long, value_parser = clap::value_parser!(u16).range(1..=8))]
        decks: Option<u16>,
        #[arg(long)]
        seed: Option<u64>,
        /// Stop after this many rounds
        #[arg(long)]
        rounds: Option<u32>,
        /// Append settled rounds to a JSONL file
        #[arg(long)]
        log: Option<String>,
    },
    /// Let an automated policy play a batch of rounds
    Sim {
        #[arg(long)]
        rounds: u32,
        #[arg(long, default_value = "baseline")]
        policy: String,
        #[arg(long, value_parser = clap::value_parser!(u16).range(1..=8))]
        decks: Option<u16>,
        #[arg(long)]
        seed: Option<u64>,
        /// Append settled rounds to a JSONL file
        #[arg(long)]
        output: Option<String>,
    },
    /// Summarize a JSONL round log
    Stats {
        #[arg(long)]
        input: String,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Play { .. } => "play",
            Commands::Sim { .. } => "sim",
            Commands::Stats { .. } => "stats",
            Commands::Cfg => "cfg",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_play_flags() {
        let cli = BlackjackCli::try_parse_from([
            "blackjack", "play", "--name", "Ann", "--decks", "2", "--seed", "5",
        ])
        .unwrap();
        match cli.cmd {
            Commands::Play {
                name, decks, seed, ..
            } => {
                assert_eq!(name.as_deref(), Some("Ann"));
                assert_eq!(decks, Some(2));
                assert_eq!(seed, Some(5));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn rejects_nine_decks() {
        assert!(BlackjackCli::try_parse_from(["blackjack", "play", "--decks", "9"]).is_err());
    }

    #[test]
    fn sim_defaults_to_baseline_policy() {
        let cli = BlackjackCli::try_parse_from(["blackjack", "sim", "--rounds", "3"]).unwrap();
        assert_eq!(cli.cmd.name(), "sim");
        match cli.cmd {
            Commands::Sim { policy, .. } => assert_eq!(policy, "baseline"),
            other => panic!("unexpected command {:?}", other),
        }
    }
}
