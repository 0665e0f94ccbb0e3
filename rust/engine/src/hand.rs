use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::GameError;

/// Poker hand categories, weakest to strongest. The discriminant order drives
/// hand comparison.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
        }
    }

    /// Advisory blurb shown next to the hand name in the table panel.
    pub fn strength_hint(self) -> &'static str {
        match self {
            Category::StraightFlush => "Unbeatable!",
            Category::FourOfAKind => "Monster hand!",
            Category::FullHouse => "Very strong!",
            Category::Flush => "Strong hand",
            Category::Straight | Category::ThreeOfAKind => "Decent hand",
            Category::TwoPair => "Okay hand",
            Category::OnePair => "Weak — be careful",
            Category::HighCard => "Trash — consider folding",
        }
    }
}

/// The total score of a 5-card hand: category first, then the tie-break key
/// compared lexicographically. For grouped categories the key lists the rank
/// values ordered by (group size, value) descending; for straights, flushes
/// and high cards it is the full sorted value sequence. The derived `Ord`
/// gives exactly that comparison.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd)]
pub struct HandRank {
    pub category: Category,
    pub tiebreak: Vec<u8>,
}

/// Score exactly five distinct cards.
pub fn score_five(cards: &[Card; 5]) -> HandRank {
    let mut vals: Vec<u8> = cards.iter().map(|c| c.rank as u8).collect();
    vals.sort_unstable_by(|a, b| b.cmp(a));

    let flush = cards.iter().all(|c| c.suit == cards[0].suit);
    let wheel = vals == [14, 5, 4, 3, 2];
    let straight = wheel || vals.windows(2).all(|w| w[0] == w[1] + 1);
    if wheel {
        // Ace plays low: a 5-high straight must rank below the 6-high one.
        vals = vec![5, 4, 3, 2, 1];
    }

    let mut counts = [0u8; 15];
    for &v in &vals {
        counts[v as usize] += 1;
    }
    let mut freq: Vec<u8> = counts.iter().copied().filter(|&c| c > 0).collect();
    freq.sort_unstable_by(|a, b| b.cmp(a));
    let mut grouped: Vec<u8> = (1..=14u8).filter(|&r| counts[r as usize] > 0).collect();
    grouped.sort_unstable_by(|&a, &b| (counts[b as usize], b).cmp(&(counts[a as usize], a)));

    let (category, tiebreak) = if straight && flush {
        (Category::StraightFlush, vals)
    } else if freq[0] == 4 {
        (Category::FourOfAKind, grouped)
    } else if freq[0] == 3 && freq[1] == 2 {
        (Category::FullHouse, grouped)
    } else if flush {
        (Category::Flush, vals)
    } else if straight {
        (Category::Straight, vals)
    } else if freq[0] == 3 {
        (Category::ThreeOfAKind, grouped)
    } else if freq[0] == 2 && freq[1] == 2 {
        (Category::TwoPair, grouped)
    } else if freq[0] == 2 {
        (Category::OnePair, grouped)
    } else {
        (Category::HighCard, vals)
    };
    HandRank { category, tiebreak }
}

/// The best 5-card score among 5 to 7 distinct cards, found by scoring every
/// 5-card subset (C(7,5) = 21 in the worst case). Exhaustive but exact.
pub fn hand_rank(cards: &[Card]) -> Result<HandRank, GameError> {
    let n = cards.len();
    if n < 5 {
        return Err(GameError::TooFewCards { got: n });
    }
    let mut best: Option<HandRank> = None;
    for a in 0..n - 4 {
        for b in a + 1..n - 3 {
            for c in b + 1..n - 2 {
                for d in c + 1..n - 1 {
                    for e in d + 1..n {
                        let five = [cards[a], cards[b], cards[c], cards[d], cards[e]];
                        let score = score_five(&five);
                        if best.as_ref().map_or(true, |bst| score > *bst) {
                            best = Some(score);
                        }
                    }
                }
            }
        }
    }
    best.ok_or(GameError::TooFewCards { got: n })
}

/// Category label of the best hand a player can make from their hole cards
/// and the community cards dealt so far.
pub fn best_hand_name(hole: &[Card; 2], community: &[Card]) -> Result<&'static str, GameError> {
    let mut cards = hole.to_vec();
    cards.extend_from_slice(community);
    Ok(hand_rank(&cards)?.category.label())
}
