use rand::seq::SliceRandom;
use rand::Rng;

use crate::cards::Card;
use crate::deck::deck_without;
use crate::errors::GameError;
use crate::hand::hand_rank;

/// Trial count used by the bot policy. Callers with looser latency budgets
/// (e.g. the table panel's odds readout) pass a higher count for a tighter
/// estimate.
pub const DEFAULT_TRIALS: u32 = 120;

/// Monte Carlo estimate of the probability that `hole` beats or ties one
/// random opponent, given the community cards dealt so far.
///
/// Each trial reshuffles the pool of unseen cards, completes the board to
/// five cards, deals the opponent two cards disjoint from that completion,
/// and compares the two 7-card ranks. Ties count as wins. This models a
/// single opponent, so it reads optimistic in multi-way pots; that bias is
/// intentional and callers should not correct for it.
pub fn estimate_strength<R: Rng + ?Sized>(
    hole: [Card; 2],
    community: &[Card],
    trials: u32,
    rng: &mut R,
) -> Result<f64, GameError> {
    if trials == 0 {
        return Err(GameError::InvalidTrialCount);
    }
    let mut known = hole.to_vec();
    known.extend_from_slice(community);
    let mut pool = deck_without(&known);
    let needed = 5 - community.len();

    let mut hero = Vec::with_capacity(7);
    let mut villain = Vec::with_capacity(7);
    let mut wins = 0u32;
    for _ in 0..trials {
        pool.shuffle(rng);
        hero.clear();
        hero.extend_from_slice(&hole);
        hero.extend_from_slice(community);
        hero.extend_from_slice(&pool[..needed]);
        villain.clear();
        villain.extend_from_slice(&pool[needed..needed + 2]);
        villain.extend_from_slice(community);
        villain.extend_from_slice(&pool[..needed]);
        if hand_rank(&hero)? >= hand_rank(&villain)? {
            wins += 1;
        }
    }
    Ok(f64::from(wins) / f64::from(trials))
}
