use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};

/// A shuffled 52-card deck with a deal cursor. Owns its RNG so the same seed
/// reproduces the same sequence of shuffles across an entire session.
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
    rng: ChaCha20Rng,
    fixed: bool,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep initial order until shuffle is called explicitly
        Self {
            cards: full_deck(),
            position: 0,
            rng,
            fixed: false,
        }
    }

    /// A deck that deals `cards` in exactly the given order; reshuffling
    /// restores that same order. Used for scripted deals in tests and
    /// replays.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self {
            cards,
            position: 0,
            rng: ChaCha20Rng::seed_from_u64(0),
            fixed: true,
        }
    }

    /// Rebuild the full 52 cards and apply a fresh uniform permutation.
    /// Fixed-order decks rewind instead.
    pub fn shuffle(&mut self) {
        if self.fixed {
            self.position = 0;
            return;
        }
        self.cards = full_deck();
        self.cards.shuffle(&mut self.rng);
        self.position = 0;
    }

    pub fn deal_card(&mut self) -> Option<Card> {
        if self.position >= self.cards.len() {
            None
        } else {
            let c = self.cards[self.position];
            self.position += 1;
            Some(c)
        }
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }
}

/// The 52-card deck minus every card in `excluded`. The equity estimator
/// draws opponent holdings and board completions from this pool so that no
/// known card can be dealt twice within a simulation trial.
pub fn deck_without(excluded: &[Card]) -> Vec<Card> {
    full_deck()
        .into_iter()
        .filter(|c| !excluded.contains(c))
        .collect()
}
