//! The rule-based decision policy behind the standard bot seats.
//!
//! Strategy: estimate win probability against one random opponent by Monte
//! Carlo, shift it by persona and skill, occasionally inflate it for a
//! bluff, then pick a line from pot odds. Raise sizes track the pot but are
//! capped at a difficulty-dependent fraction of the stack.

use rand::Rng;
use rand::RngCore;

use greenfelt_engine::equity::{estimate_strength, DEFAULT_TRIALS};
use greenfelt_engine::player::{Persona, PlayerAction};
use greenfelt_engine::table::TurnView;

use crate::{DecisionPolicy, Difficulty};

/// Strength margin a bluff pretends to have on top of the real estimate.
const BLUFF_BOOST: f64 = 0.20;

#[derive(Debug, Clone)]
pub struct RuleBot {
    difficulty: Difficulty,
    trials: u32,
}

impl RuleBot {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            trials: DEFAULT_TRIALS,
        }
    }

    /// Override the equity trial count (latency/accuracy tradeoff).
    pub fn with_trials(difficulty: Difficulty, trials: u32) -> Self {
        Self {
            difficulty,
            trials: trials.max(1),
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Raise increment: between half and three-quarters pot, capped by the
    /// difficulty's stack fraction, never below the table minimum. The
    /// caller only asks for a size when `stack >= min_raise`, so the result
    /// stays affordable.
    fn raise_size(&self, view: &TurnView<'_>, rng: &mut dyn RngCore) -> u32 {
        let pot_bet = (f64::from(view.pot) * rng.random_range(0.5..0.75)) as u32;
        let cap = (f64::from(view.stack) * self.difficulty.raise_cap()) as u32;
        pot_bet.min(cap).min(view.stack).max(view.min_raise)
    }
}

fn persona_offset(persona: Persona) -> f64 {
    match persona {
        Persona::Aggressive => 0.10,
        Persona::Tight => -0.12,
        Persona::Loose => 0.04,
        Persona::None => 0.0,
    }
}

impl DecisionPolicy for RuleBot {
    fn decide(&self, view: &TurnView<'_>, rng: &mut dyn RngCore) -> PlayerAction {
        let strength = match estimate_strength(view.hole, view.community, self.trials, rng) {
            Ok(s) => s,
            // Unusable snapshot: take the cheapest legal line.
            Err(_) => {
                return if view.to_call == 0 {
                    PlayerAction::Check
                } else {
                    PlayerAction::Fold
                }
            }
        };
        let adjusted = (strength + persona_offset(view.persona) + self.difficulty.skill_offset())
            .clamp(0.0, 1.0);
        let bluffing = rng.random::<f64>() < self.difficulty.bluff_rate();
        let eff = if bluffing {
            (adjusted + BLUFF_BOOST).min(1.0)
        } else {
            adjusted
        };

        if view.to_call == 0 {
            if eff > 0.72 && view.stack >= view.min_raise && rng.random::<f64>() < 0.6 {
                return PlayerAction::Raise(self.raise_size(view, rng));
            }
            return PlayerAction::Check;
        }

        let pot_odds = f64::from(view.to_call) / f64::from(view.pot + view.to_call);
        if eff < pot_odds + self.difficulty.fold_bias() && !bluffing {
            PlayerAction::Fold
        } else if eff < 0.55 {
            // Marginal holding: peel only when the price is trivial.
            if view.to_call <= view.stack / 10 {
                PlayerAction::Call
            } else {
                PlayerAction::Fold
            }
        } else if eff < 0.75 {
            PlayerAction::Call
        } else if view.stack >= view.min_raise && rng.random::<f64>() < 0.55 {
            PlayerAction::Raise(self.raise_size(view, rng))
        } else {
            PlayerAction::Call
        }
    }

    fn name(&self) -> &str {
        "RuleBot"
    }
}
