//! Command-line parser types.

use clap::{Parser, Subcommand, ValueEnum};

use greenfelt_ai::Difficulty;

#[derive(Parser)]
#[command(
    name = "greenfelt",
    version,
    about = "Four-player Texas Hold'em at the terminal"
)]
pub struct GreenfeltCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

/// Bot skill level as a flag value.
#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum DifficultyArg {
    Easy,
    Medium,
    Hard,
}

impl DifficultyArg {
    pub fn to_difficulty(self) -> Difficulty {
        match self {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Medium => Difficulty::Medium,
            DifficultyArg::Hard => Difficulty::Hard,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sit down at a four-player table against three bots
    Play {
        /// Your name at the table
        #[arg(long)]
        name: Option<String>,
        /// Starting stack for every seat
        #[arg(long)]
        stack: Option<u32>,
        /// Small blind (big blind is twice this)
        #[arg(long)]
        small_blind: Option<u32>,
        /// Bot skill level
        #[arg(long, value_enum)]
        difficulty: Option<DifficultyArg>,
        /// RNG seed for a reproducible session
        #[arg(long)]
        seed: Option<u64>,
        /// Stop after this many hands even if chips remain
        #[arg(long)]
        hands: Option<u32>,
        /// TOML file with table settings (flags still win)
        #[arg(long)]
        config: Option<String>,
    },
    /// Deal one sample hand and show every holding
    Deal {
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Rank a holding and estimate its win odds
    Eval {
        /// Two hole cards, e.g. "As Kh"
        #[arg(long)]
        hole: String,
        /// Zero to five board cards, e.g. "Qd Jc 10s"
        #[arg(long, default_value = "")]
        board: String,
        /// Monte Carlo trial count
        #[arg(long, default_value_t = 10_000)]
        trials: u32,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Run bot-vs-bot hands and summarize the results
    Sim {
        #[arg(long, default_value_t = 100)]
        hands: u32,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, value_enum)]
        difficulty: Option<DifficultyArg>,
        /// Write a JSONL hand history to this path
        #[arg(long)]
        log: Option<String>,
    },
}
