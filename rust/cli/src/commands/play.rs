//! The interactive four-player game: you against three bots.
//!
//! The loop owns the table and alternates between rendering its event stream
//! and collecting the next decision, from stdin for the human seat and from
//! the rule-based policy for the bots. Rejected input (malformed numbers,
//! illegal raises) is reported and re-prompted without touching game state.

use std::io::{BufRead, Write};

use rand::seq::IndexedRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use greenfelt_ai::rulebot::RuleBot;
use greenfelt_ai::DecisionPolicy;
use greenfelt_engine::equity::estimate_strength;
use greenfelt_engine::hand::{best_hand_name, hand_rank};
use greenfelt_engine::player::{Controller, Persona, Player, PlayerAction};
use greenfelt_engine::stats::SessionStats;
use greenfelt_engine::table::{Blind, Event, Table, TurnContext};

use crate::config::TableConfig;
use crate::error::CliError;
use crate::formatters::{format_action, format_cards};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{parse_player_action, ParseResult};

/// The human always sits at seat 0; the table rotates around them.
const HUMAN_SEAT: usize = 0;

/// Trial count for the hand panel's odds readout. Higher than the bots'
/// because it only runs once per human turn.
const ODDS_TRIALS: u32 = 150;

const NAME_POOL: &[&str] = &[
    "James", "Oliver", "Liam", "Noah", "Ethan", "Mason", "Logan", "Lucas",
    "Sophia", "Emma", "Olivia", "Ava", "Isabella", "Mia", "Charlotte",
    "Amelia", "Harper", "Evelyn", "William", "Henry", "Daniel", "Matthew",
    "Zoe", "Lily", "Grace", "Chloe", "Victoria", "Hannah", "Nora", "Riley",
];

enum TurnOutcome {
    Continue,
    Quit,
}

/// Handle the play command: a full session of hands until someone holds all
/// the chips, the human goes broke, the `--hands` cap is reached, or the
/// user quits.
pub fn handle_play_command(
    cfg: TableConfig,
    seed: Option<u64>,
    max_hands: Option<u32>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let seed = seed.unwrap_or_else(rand::random);
    // Decision and odds rolls draw from their own stream so the deck's
    // shuffles stay byte-identical for a given seed.
    let mut rng = ChaCha20Rng::seed_from_u64(seed.wrapping_add(1));

    let bot_names = pick_bot_names(&mut rng, &cfg.name);
    let players = vec![
        Player::new(cfg.name.clone(), cfg.stack, Controller::Human),
        Player::new(bot_names[0].clone(), cfg.stack, Controller::Bot(Persona::Aggressive)),
        Player::new(bot_names[1].clone(), cfg.stack, Controller::Bot(Persona::Tight)),
        Player::new(bot_names[2].clone(), cfg.stack, Controller::Bot(Persona::Loose)),
    ];
    let mut table = Table::new(players, cfg.small_blind, seed)?;
    let policy = RuleBot::new(cfg.difficulty);
    let mut stats = SessionStats::new(cfg.stack);

    writeln!(
        out,
        "play: name={} stack={} blinds={}/{} difficulty={} seed={}",
        cfg.name,
        cfg.stack,
        cfg.small_blind,
        cfg.small_blind * 2,
        cfg.difficulty.as_str(),
        seed
    )?;

    let mut quit = false;
    while !table.is_game_over() && !quit {
        if let Some(max) = max_hands {
            if table.hand_no() >= max {
                break;
            }
        }
        let events = table.start_hand()?;
        render_events(&events, &table, &mut stats, out)?;
        show_hole_cards(&table, out)?;

        while let Some(turn) = table.current_turn() {
            let seat = turn.seat;
            if table.players()[seat].is_human() {
                show_hand_panel(&table, &mut rng, out)?;
                match human_turn(&mut table, turn, &mut stats, out, err, stdin)? {
                    TurnOutcome::Continue => {}
                    TurnOutcome::Quit => {
                        quit = true;
                        break;
                    }
                }
            } else {
                let action = {
                    let view = table
                        .turn_view(seat)
                        .ok_or_else(|| CliError::Engine("bot seat has no cards".to_string()))?;
                    policy.decide(&view, &mut rng)
                };
                let events = table.apply_action(seat, action)?;
                render_events(&events, &table, &mut stats, out)?;
            }
        }

        if quit || table.is_game_over() {
            break;
        }
        writeln!(out)?;
        write!(out, "Press Enter to deal the next hand (q to quit) > ")?;
        out.flush()?;
        match read_stdin_line(stdin) {
            None => break,
            Some(line)
                if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") =>
            {
                break
            }
            Some(_) => {}
        }
    }

    finish_session(&table, &stats, out)?;
    Ok(())
}

fn pick_bot_names(rng: &mut ChaCha20Rng, exclude: &str) -> Vec<String> {
    let pool: Vec<&str> = NAME_POOL
        .iter()
        .copied()
        .filter(|n| !n.eq_ignore_ascii_case(exclude))
        .collect();
    pool.choose_multiple(rng, 3).map(|s| s.to_string()).collect()
}

/// One human decision: prompt, parse, submit. Parse failures and engine
/// rejections both report a reason and re-prompt; nothing mutates until the
/// table accepts the action.
fn human_turn(
    table: &mut Table,
    turn: TurnContext,
    stats: &mut SessionStats,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<TurnOutcome, CliError> {
    loop {
        writeln!(
            out,
            "To call: ${}   Min raise: ${}   Stack: ${}   Pot: ${}",
            turn.to_call, turn.min_raise, turn.stack, turn.pot
        )?;
        write!(out, "[f]old, [c]heck/call, raise <amount>, [a]ll-in, [q]uit > ")?;
        out.flush()?;
        let Some(line) = read_stdin_line(stdin) else {
            return Ok(TurnOutcome::Quit);
        };
        let action = match parse_player_action(&line, turn.to_call) {
            ParseResult::Quit => return Ok(TurnOutcome::Quit),
            ParseResult::Invalid(msg) => {
                ui::write_error(err, &msg)?;
                continue;
            }
            ParseResult::AllIn => {
                if turn.stack <= turn.to_call {
                    PlayerAction::Call
                } else {
                    PlayerAction::Raise(turn.stack - turn.to_call)
                }
            }
            ParseResult::Action(a) => a,
        };
        match table.apply_action(turn.seat, action) {
            Ok(events) => {
                render_events(&events, table, stats, out)?;
                return Ok(TurnOutcome::Continue);
            }
            Err(e) => {
                ui::write_error(err, &e.to_string())?;
            }
        }
    }
}

fn render_events(
    events: &[Event],
    table: &Table,
    stats: &mut SessionStats,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    for event in events {
        stats.observe(event, HUMAN_SEAT);
        match event {
            Event::HandStarted { hand_no, dealer } => {
                writeln!(out)?;
                ui::divider(out, &format!("Hand #{}", hand_no))?;
                writeln!(out, "Dealer: {}", table.players()[*dealer].name())?;
            }
            Event::BlindPosted { seat, blind, amount } => {
                let label = match blind {
                    Blind::Small => "SB",
                    Blind::Big => "BB",
                };
                writeln!(
                    out,
                    "{} posts {} ${}",
                    table.players()[*seat].name(),
                    label,
                    amount
                )?;
            }
            Event::StreetDealt { street, .. } => {
                ui::divider(out, street.label())?;
                writeln!(out, "Board: {}", format_cards(table.community()))?;
            }
            Event::ActionTaken { seat, action, .. } => {
                writeln!(out, "{}", format_action(table.players()[*seat].name(), action))?;
            }
            Event::HandEnded {
                winners,
                share,
                pot,
                showdown,
                revealed,
            } => {
                if *showdown {
                    ui::divider(out, "Showdown")?;
                    for (seat, hole) in revealed {
                        let made = best_hand_name(hole, table.community()).unwrap_or("(unknown)");
                        writeln!(
                            out,
                            "{}: {} -> {}",
                            table.players()[*seat].name(),
                            format_cards(hole),
                            made
                        )?;
                    }
                    let names: Vec<&str> = winners
                        .iter()
                        .map(|w| table.players()[*w].name())
                        .collect();
                    if winners.len() == 1 {
                        writeln!(out, "{} wins ${}", names[0], pot)?;
                    } else {
                        writeln!(
                            out,
                            "{} split ${} (${} each)",
                            names.join(" & "),
                            pot,
                            share
                        )?;
                    }
                } else if let Some(&w) = winners.first() {
                    writeln!(
                        out,
                        "{} wins ${} (everyone folded)",
                        table.players()[w].name(),
                        pot
                    )?;
                }
            }
            Event::GameOver { standings } => {
                writeln!(out)?;
                ui::divider(out, "GAME OVER")?;
                for (i, &seat) in standings.iter().enumerate() {
                    let p = &table.players()[seat];
                    writeln!(out, "{}. {}: ${}", i + 1, p.name(), p.stack())?;
                }
            }
        }
    }
    Ok(())
}

fn show_hole_cards(table: &Table, out: &mut dyn Write) -> Result<(), CliError> {
    if let Some(hole) = table.players()[HUMAN_SEAT].hole_cards() {
        let note = if hole[0].rank == hole[1].rank {
            " (pocket pair!)"
        } else if hole[0].suit == hole[1].suit {
            " (suited)"
        } else {
            ""
        };
        writeln!(out, "Your cards: {}{}", format_cards(&hole), note)?;
    }
    Ok(())
}

/// The original's hand panel: made-hand name, a strength hint, and win odds.
/// Only shown once the flop is out, same as the desktop version.
fn show_hand_panel(
    table: &Table,
    rng: &mut ChaCha20Rng,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let Some(hole) = table.players()[HUMAN_SEAT].hole_cards() else {
        return Ok(());
    };
    if table.community().len() < 3 {
        return Ok(());
    }
    let mut cards = hole.to_vec();
    cards.extend_from_slice(table.community());
    let rank = hand_rank(&cards)?;
    let odds = estimate_strength(hole, table.community(), ODDS_TRIALS, rng)?;
    writeln!(
        out,
        "Your hand: {} ({})   Win odds: {:.0}%",
        rank.category.label(),
        rank.category.strength_hint(),
        odds * 100.0
    )?;
    Ok(())
}

fn finish_session(
    table: &Table,
    stats: &SessionStats,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    writeln!(out)?;
    if !table.is_game_over() {
        ui::divider(out, "Session ended")?;
        for p in table.players() {
            writeln!(out, "{}: ${}", p.name(), p.stack())?;
        }
    }
    ui::divider(out, "Your stats")?;
    for line in stats.summary(table.players()[HUMAN_SEAT].stack()) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}
