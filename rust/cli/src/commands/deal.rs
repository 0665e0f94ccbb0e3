//! Deal a single four-handed board for inspection.

use std::io::Write;

use greenfelt_engine::cards::Card;
use greenfelt_engine::deck::Deck;
use greenfelt_engine::hand::best_hand_name;

use crate::error::CliError;
use crate::formatters::format_cards;

pub fn handle_deal_command(seed: Option<u64>, out: &mut dyn Write) -> Result<(), CliError> {
    let seed = seed.unwrap_or_else(rand::random);
    writeln!(out, "deal: seed={}", seed)?;

    let mut deck = Deck::new_with_seed(seed);
    deck.shuffle();

    let mut holes: Vec<Vec<Card>> = vec![Vec::with_capacity(2); 4];
    for _ in 0..2 {
        for hole in holes.iter_mut() {
            hole.push(
                deck.deal_card()
                    .ok_or_else(|| CliError::Engine("deck exhausted".to_string()))?,
            );
        }
    }
    let mut board = Vec::with_capacity(5);
    for _ in 0..5 {
        board.push(
            deck.deal_card()
                .ok_or_else(|| CliError::Engine("deck exhausted".to_string()))?,
        );
    }

    writeln!(out, "Board: {}", format_cards(&board))?;
    for (i, hole) in holes.iter().enumerate() {
        let pair = [hole[0], hole[1]];
        let made = best_hand_name(&pair, &board)?;
        writeln!(out, "Seat {}: {}  ({})", i + 1, format_cards(hole), made)?;
    }
    Ok(())
}
