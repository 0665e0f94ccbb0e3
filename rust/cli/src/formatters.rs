//! Text rendering for cards, chips and applied actions, plus card-string
//! parsing for the `eval` command.

use greenfelt_engine::cards::{Card, Rank, Suit};
use greenfelt_engine::table::AppliedAction;

pub fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// One line of table commentary, e.g. "Mia raises to $300 (ALL-IN)".
pub fn format_action(name: &str, action: &AppliedAction) -> String {
    match action {
        AppliedAction::Fold => format!("{} folds", name),
        AppliedAction::Check => format!("{} checks", name),
        AppliedAction::Call { amount, all_in } => {
            if *all_in {
                format!("{} calls ${} (ALL-IN)", name, amount)
            } else {
                format!("{} calls ${}", name, amount)
            }
        }
        AppliedAction::Raise { to, all_in } => {
            if *all_in {
                format!("{} raises to ${} (ALL-IN)", name, to)
            } else {
                format!("{} raises to ${}", name, to)
            }
        }
    }
}

/// Parse a single card like "As", "10d", "Td" or "Q♥". Case-insensitive;
/// both letter and symbol suits are accepted.
pub fn parse_card(s: &str) -> Result<Card, String> {
    let s = s.trim();
    let mut chars: Vec<char> = s.chars().collect();
    if chars.len() < 2 {
        return Err(format!("'{}' is not a card (rank + suit expected)", s));
    }
    let suit_ch = chars.pop().unwrap_or(' ');
    let suit = match suit_ch.to_ascii_lowercase() {
        'c' | '♣' => Suit::Clubs,
        'd' | '♦' => Suit::Diamonds,
        'h' | '♥' => Suit::Hearts,
        's' | '♠' => Suit::Spades,
        other => return Err(format!("'{}' is not a suit (c/d/h/s)", other)),
    };
    let rank_str: String = chars.iter().collect::<String>().to_ascii_uppercase();
    let rank = match rank_str.as_str() {
        "2" => Rank::Two,
        "3" => Rank::Three,
        "4" => Rank::Four,
        "5" => Rank::Five,
        "6" => Rank::Six,
        "7" => Rank::Seven,
        "8" => Rank::Eight,
        "9" => Rank::Nine,
        "10" | "T" => Rank::Ten,
        "J" => Rank::Jack,
        "Q" => Rank::Queen,
        "K" => Rank::King,
        "A" => Rank::Ace,
        other => return Err(format!("'{}' is not a rank (2-10, J, Q, K, A)", other)),
    };
    Ok(Card { suit, rank })
}

/// Parse a whitespace- or comma-separated card list. Rejects duplicates.
pub fn parse_cards(s: &str) -> Result<Vec<Card>, String> {
    let mut cards = Vec::new();
    for token in s.split(|c: char| c.is_whitespace() || c == ',') {
        if token.is_empty() {
            continue;
        }
        let card = parse_card(token)?;
        if cards.contains(&card) {
            return Err(format!("duplicate card '{}'", card));
        }
        cards.push(card);
    }
    Ok(cards)
}
