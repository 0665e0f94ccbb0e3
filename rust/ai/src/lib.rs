//! # greenfelt-ai: Bot Opponents for the Hold'em Table
//!
//! Decision policies for the bot seats. A policy is a pure mapping from a
//! read-only turn snapshot to a legal action; all chance (equity trials,
//! bluff rolls, raise sizing) flows through the RNG the caller passes in, so
//! sessions replay deterministically under a fixed seed.
//!
//! ## Core Components
//!
//! - [`DecisionPolicy`] - Trait the table's driving loop calls once per bot turn
//! - [`Difficulty`] - Tuning table shared by every policy
//! - [`rulebot`] - The rule-based policy used for the standard game
//! - [`create_policy`] - Factory for policies by name

use rand::RngCore;

use greenfelt_engine::player::PlayerAction;
use greenfelt_engine::table::TurnView;

pub mod rulebot;

/// Bot skill level. Each level carries the tuning constants the policy
/// folds into its decisions.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Extra strength margin required before calling instead of folding.
    pub fn fold_bias(self) -> f64 {
        match self {
            Difficulty::Easy => 0.10,
            Difficulty::Medium => 0.05,
            Difficulty::Hard => 0.00,
        }
    }

    /// Probability of playing a turn as a bluff.
    pub fn bluff_rate(self) -> f64 {
        match self {
            Difficulty::Easy => 0.04,
            Difficulty::Medium => 0.06,
            Difficulty::Hard => 0.10,
        }
    }

    /// Largest fraction of the stack a sized raise may consume.
    pub fn raise_cap(self) -> f64 {
        match self {
            Difficulty::Easy => 0.20,
            Difficulty::Medium => 0.30,
            Difficulty::Hard => 0.45,
        }
    }

    /// Flat adjustment to estimated strength.
    pub fn skill_offset(self) -> f64 {
        match self {
            Difficulty::Easy => -0.08,
            Difficulty::Medium => 0.00,
            Difficulty::Hard => 0.08,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn parse(s: &str) -> Option<Difficulty> {
        match s {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

/// Interface for bot decision-making. The table's driving loop hands the
/// policy a read-only snapshot of the turn and an RNG; the policy returns an
/// action that is legal for the snapshot's bounds by construction.
pub trait DecisionPolicy: Send + Sync {
    fn decide(&self, view: &TurnView<'_>, rng: &mut dyn RngCore) -> PlayerAction;

    /// Name/identifier of this policy.
    fn name(&self) -> &str;
}

/// Factory for decision policies by type string. Currently only the
/// rule-based policy exists.
pub fn create_policy(kind: &str, difficulty: Difficulty) -> Option<Box<dyn DecisionPolicy>> {
    match kind {
        "rulebot" => Some(Box::new(rulebot::RuleBot::new(difficulty))),
        _ => None,
    }
}
