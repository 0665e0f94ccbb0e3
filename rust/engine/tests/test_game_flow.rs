use std::collections::HashSet;

use greenfelt_engine::player::{Controller, Persona, Player, PlayerAction};
use greenfelt_engine::table::{Event, Street, Table};

fn table4(stack: u32, small_blind: u32, seed: u64) -> Table {
    let players = (0..4)
        .map(|i| Player::new(format!("P{}", i), stack, Controller::Bot(Persona::None)))
        .collect();
    Table::new(players, small_blind, seed).unwrap()
}

fn chips(table: &Table) -> u32 {
    table.players().iter().map(|p| p.stack()).sum::<u32>() + table.pot()
}

#[test]
fn blinds_are_posted_clockwise_from_the_dealer() {
    let mut table = table4(1000, 25, 3);
    table.start_hand().unwrap();

    let dealer = table.dealer();
    let sb = (dealer + 1) % 4;
    let bb = (dealer + 2) % 4;
    assert_eq!(table.small_blind(), 25);
    assert_eq!(table.big_blind(), 50);
    assert_eq!(table.players()[sb].bet(), 25);
    assert_eq!(table.players()[bb].bet(), 50);
    assert_eq!(table.pot(), 75);
    assert_eq!(table.current_bet(), 50);
    assert_eq!(table.street(), Some(Street::Preflop));

    // First to act is the seat after the big blind, owing a full call.
    let turn = table.current_turn().unwrap();
    assert_eq!(turn.seat, (bb + 1) % 4);
    assert_eq!(turn.to_call, 50);
    assert_eq!(turn.min_raise, 100);
}

#[test]
fn every_solvent_seat_gets_two_cards() {
    let mut table = table4(1000, 25, 3);
    table.start_hand().unwrap();
    for p in table.players() {
        assert!(p.hole_cards().is_some());
        assert!(!p.is_folded());
    }
}

#[test]
fn chips_are_conserved_through_a_full_hand() {
    let mut table = table4(1000, 25, 9);
    let total = 4000;
    let mut events = table.start_hand().unwrap();
    assert_eq!(chips(&table), total);

    while let Some(turn) = table.current_turn() {
        let action = if turn.to_call == 0 {
            PlayerAction::Check
        } else {
            PlayerAction::Call
        };
        events.extend(table.apply_action(turn.seat, action).unwrap());
        if table.street().is_some() {
            assert_eq!(chips(&table), total);
        }
    }

    // Settled: the only chips that may vanish are a split remainder.
    let (winners, share, pot) = events
        .iter()
        .find_map(|e| match e {
            Event::HandEnded {
                winners, share, pot, ..
            } => Some((winners.clone(), *share, *pot)),
            _ => None,
        })
        .expect("hand must settle");
    let distributed = share * winners.len() as u32;
    assert!(distributed <= pot);
    assert_eq!(chips(&table), total - (pot - distributed));
    assert_eq!(table.pot(), 0);
}

#[test]
fn streets_progress_three_then_one_then_one() {
    let mut table = table4(1000, 25, 9);
    table.start_hand().unwrap();
    assert_eq!(table.community().len(), 0);

    let mut seen = vec![];
    while let Some(turn) = table.current_turn() {
        let action = if turn.to_call == 0 {
            PlayerAction::Check
        } else {
            PlayerAction::Call
        };
        for e in table.apply_action(turn.seat, action).unwrap() {
            if let Event::StreetDealt { street, cards } = e {
                seen.push((street, cards.len(), table.community().len()));
            }
        }
    }
    assert_eq!(
        seen,
        vec![
            (Street::Flop, 3, 3),
            (Street::Turn, 1, 4),
            (Street::River, 1, 5)
        ]
    );
}

#[test]
fn bets_reset_when_a_street_is_dealt() {
    let mut table = table4(1000, 25, 9);
    table.start_hand().unwrap();
    while table.street() == Some(Street::Preflop) {
        let turn = table.current_turn().unwrap();
        let action = if turn.to_call == 0 {
            PlayerAction::Check
        } else {
            PlayerAction::Call
        };
        table.apply_action(turn.seat, action).unwrap();
    }
    assert_eq!(table.street(), Some(Street::Flop));
    assert_eq!(table.current_bet(), 0);
    for p in table.players() {
        assert_eq!(p.bet(), 0);
    }
    // The pot still holds the preflop money.
    assert_eq!(table.pot(), 200);
}

#[test]
fn a_raise_reopens_action_for_players_who_already_acted() {
    let mut table = table4(1000, 25, 3);
    table.start_hand().unwrap();
    let bb = (table.dealer() + 2) % 4;

    // Everyone calls around to the big blind's option.
    loop {
        let turn = table.current_turn().unwrap();
        if turn.seat == bb && turn.to_call == 0 {
            break;
        }
        table.apply_action(turn.seat, PlayerAction::Call).unwrap();
    }

    // The big blind raises; the other three seats had settled at the old
    // level and must each get exactly one more turn.
    let turn = table.current_turn().unwrap();
    table
        .apply_action(bb, PlayerAction::Raise(turn.min_raise))
        .unwrap();
    assert_eq!(table.street(), Some(Street::Preflop));

    let mut reopened = Vec::new();
    while table.street() == Some(Street::Preflop) {
        let turn = table.current_turn().expect("reopened seat to act");
        reopened.push(turn.seat);
        table.apply_action(turn.seat, PlayerAction::Call).unwrap();
    }
    assert_eq!(reopened.len(), 3);
    assert!(!reopened.contains(&bb), "the raiser must not act again");
    let unique: HashSet<usize> = reopened.iter().copied().collect();
    assert_eq!(unique.len(), 3, "each seat reappears exactly once");
}

#[test]
fn seats_still_queued_are_not_queued_twice_by_a_raise() {
    let mut table = table4(1000, 25, 3);
    table.start_hand().unwrap();
    let utg = (table.dealer() + 3) % 4;

    // First to act raises immediately; everyone else is still queued, so
    // the raise must add nobody.
    let turn = table.current_turn().unwrap();
    assert_eq!(turn.seat, utg);
    table
        .apply_action(utg, PlayerAction::Raise(turn.min_raise))
        .unwrap();

    let mut turns = Vec::new();
    while table.street() == Some(Street::Preflop) {
        let turn = table.current_turn().expect("queued seat to act");
        turns.push(turn.seat);
        table.apply_action(turn.seat, PlayerAction::Call).unwrap();
    }
    assert_eq!(turns.len(), 3);
    let unique: HashSet<usize> = turns.iter().copied().collect();
    assert_eq!(unique.len(), 3);
    assert!(!turns.contains(&utg));
}

#[test]
fn uncontested_hand_ends_without_showdown() {
    let mut table = table4(1000, 25, 3);
    let mut events = table.start_hand().unwrap();
    let bb = (table.dealer() + 2) % 4;

    // Everyone folds to the big blind.
    for _ in 0..3 {
        let turn = table.current_turn().unwrap();
        events.extend(table.apply_action(turn.seat, PlayerAction::Fold).unwrap());
    }

    let ended = events
        .iter()
        .find_map(|e| match e {
            Event::HandEnded {
                winners,
                share,
                pot,
                showdown,
                revealed,
            } => Some((winners.clone(), *share, *pot, *showdown, revealed.len())),
            _ => None,
        })
        .expect("hand ends when one player remains");
    assert_eq!(ended.0, vec![bb]);
    assert_eq!(ended.1, 75);
    assert_eq!(ended.2, 75);
    assert!(!ended.3, "no showdown on an uncontested win");
    assert_eq!(ended.4, 0, "nothing is revealed");

    // The winner's stack moved by exactly the pot.
    assert_eq!(table.players()[bb].stack(), 1000 - 50 + 75);
    assert_eq!(chips(&table), 4000);
    assert!(table.is_hand_over());
}

#[test]
fn all_in_seats_stop_acting_and_streets_run_out() {
    let mut table = table4(100, 25, 3);
    let mut events = table.start_hand().unwrap();

    // First to act shoves; everyone calls for their stacks.
    while let Some(turn) = table.current_turn() {
        let action = if turn.to_call >= turn.stack {
            PlayerAction::Call
        } else {
            PlayerAction::Raise(turn.stack - turn.to_call)
        };
        events.extend(table.apply_action(turn.seat, action).unwrap());
    }

    // Nobody could act after the shove, so the board ran out to showdown
    // within the same apply call.
    assert_eq!(table.community().len(), 5);
    let (winners, share, pot, showdown) = events
        .iter()
        .find_map(|e| match e {
            Event::HandEnded {
                winners,
                share,
                pot,
                showdown,
                ..
            } => Some((winners.clone(), *share, *pot, *showdown)),
            _ => None,
        })
        .expect("all-in hand reaches settlement");
    assert!(showdown);
    assert_eq!(pot, 400);
    let distributed = share * winners.len() as u32;
    assert!(distributed <= pot);
    assert_eq!(chips(&table), 400 - (pot - distributed));
}

#[test]
fn dealer_rotates_to_the_next_solvent_seat() {
    let mut table = table4(1000, 25, 3);
    let before = table.dealer();
    table.start_hand().unwrap();
    for _ in 0..3 {
        let turn = table.current_turn().unwrap();
        table.apply_action(turn.seat, PlayerAction::Fold).unwrap();
    }
    assert!(table.is_hand_over());
    assert_eq!(table.dealer(), (before + 1) % 4);
}
