//! Bot-vs-bot batches: run hands without a human seat and summarize who won,
//! optionally writing a JSONL hand history.

use std::io::Write;

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use greenfelt_ai::rulebot::RuleBot;
use greenfelt_ai::{DecisionPolicy, Difficulty};
use greenfelt_engine::logger::{ActionRecord, HandLogger, HandRecord};
use greenfelt_engine::player::{Controller, Persona, Player};
use greenfelt_engine::table::{Event, Table};

use crate::error::CliError;

const SIM_STACK: u32 = 1000;
const SIM_SMALL_BLIND: u32 = 25;

pub fn handle_sim_command(
    hands: u32,
    seed: Option<u64>,
    difficulty: Difficulty,
    log: Option<&str>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    if hands == 0 {
        return Err(CliError::InvalidInput("hands must be >= 1".to_string()));
    }
    let seed = seed.unwrap_or_else(rand::random);
    writeln!(
        out,
        "sim: hands={} difficulty={} seed={}",
        hands,
        difficulty.as_str(),
        seed
    )?;

    let personas = [
        Persona::Aggressive,
        Persona::Tight,
        Persona::Loose,
        Persona::None,
    ];
    let players: Vec<Player> = personas
        .iter()
        .enumerate()
        .map(|(i, &p)| Player::new(format!("Bot {}", i + 1), SIM_STACK, Controller::Bot(p)))
        .collect();
    let mut table = Table::new(players, SIM_SMALL_BLIND, seed)?;
    let policy = RuleBot::new(difficulty);
    let mut rng = ChaCha20Rng::seed_from_u64(seed.wrapping_add(1));
    let mut logger = match log {
        Some(path) => Some(HandLogger::create(path)?),
        None => None,
    };

    let mut wins = [0u32; 4];
    let mut played = 0u32;
    for _ in 0..hands {
        if table.is_game_over() {
            break;
        }
        let mut hand_events = table.start_hand()?;
        while let Some(turn) = table.current_turn() {
            let seat = turn.seat;
            let action = {
                let view = table
                    .turn_view(seat)
                    .ok_or_else(|| CliError::Engine("bot seat has no cards".to_string()))?;
                policy.decide(&view, &mut rng)
            };
            hand_events.extend(table.apply_action(seat, action)?);
        }
        played += 1;
        let record = build_record(&hand_events, &table, seed);
        for &w in &record.winners {
            wins[w] += 1;
        }
        if let Some(lg) = &mut logger {
            lg.write(&record)?;
        }
    }

    writeln!(out, "Hands played: {}", played)?;
    for (i, p) in table.players().iter().enumerate() {
        writeln!(out, "{}: {} wins, final stack ${}", p.name(), wins[i], p.stack())?;
    }
    if table.is_game_over() {
        writeln!(out, "Game ended early: one seat holds all the chips")?;
    }
    Ok(())
}

fn build_record(events: &[Event], table: &Table, seed: u64) -> HandRecord {
    let mut actions = Vec::new();
    let mut winners = Vec::new();
    let mut showdown = false;
    let mut pot = 0;
    for e in events {
        match e {
            Event::ActionTaken {
                seat,
                street,
                action,
            } => actions.push(ActionRecord {
                seat: *seat,
                street: *street,
                action: action.clone(),
            }),
            Event::HandEnded {
                winners: w,
                pot: p,
                showdown: s,
                ..
            } => {
                winners = w.clone();
                pot = *p;
                showdown = *s;
            }
            _ => {}
        }
    }
    HandRecord {
        hand_no: table.hand_no(),
        seed: Some(seed),
        actions,
        board: table.community().to_vec(),
        pot,
        winners,
        showdown,
        ts: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_hands_is_rejected() {
        let mut out = Vec::new();
        assert!(handle_sim_command(0, Some(1), Difficulty::Medium, None, &mut out).is_err());
    }

    #[test]
    fn runs_a_small_batch_deterministically() {
        let mut a = Vec::new();
        let mut b = Vec::new();
        handle_sim_command(3, Some(42), Difficulty::Easy, None, &mut a).unwrap();
        handle_sim_command(3, Some(42), Difficulty::Easy, None, &mut b).unwrap();
        assert_eq!(a, b);
        let output = String::from_utf8(a).unwrap();
        assert!(output.contains("Hands played:"));
        assert!(output.contains("Bot 4:"));
    }
}
