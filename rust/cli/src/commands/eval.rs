//! Rank a holding from card strings and estimate its win odds.

use std::io::Write;

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use greenfelt_engine::equity::estimate_strength;
use greenfelt_engine::hand::best_hand_name;

use crate::error::CliError;
use crate::formatters::{format_cards, parse_cards};

pub fn handle_eval_command(
    hole: &str,
    board: &str,
    trials: u32,
    seed: Option<u64>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let hole_cards = parse_cards(hole).map_err(CliError::InvalidInput)?;
    if hole_cards.len() != 2 {
        return Err(CliError::InvalidInput(
            "exactly two hole cards expected".to_string(),
        ));
    }
    let board_cards = parse_cards(board).map_err(CliError::InvalidInput)?;
    if board_cards.len() > 5 {
        return Err(CliError::InvalidInput(
            "at most five board cards expected".to_string(),
        ));
    }
    for c in &board_cards {
        if hole_cards.contains(c) {
            return Err(CliError::InvalidInput(format!("duplicate card '{}'", c)));
        }
    }
    let hole_pair = [hole_cards[0], hole_cards[1]];

    writeln!(out, "Hole: {}", format_cards(&hole_cards))?;
    if !board_cards.is_empty() {
        writeln!(out, "Board: {}", format_cards(&board_cards))?;
    }
    if board_cards.len() >= 3 {
        writeln!(out, "Made hand: {}", best_hand_name(&hole_pair, &board_cards)?)?;
    }

    let seed = seed.unwrap_or_else(rand::random);
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let odds = estimate_strength(hole_pair, &board_cards, trials, &mut rng)?;
    writeln!(
        out,
        "Win odds vs one opponent: {:.1}% ({} trials, seed {})",
        odds * 100.0,
        trials,
        seed
    )?;
    Ok(())
}
