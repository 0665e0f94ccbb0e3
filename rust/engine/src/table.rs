use std::collections::VecDeque;

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::hand::{hand_rank, HandRank};
use crate::player::{Persona, Player, PlayerAction};
use crate::rules::{validate_action, ValidatedAction};

pub const MAX_SEATS: usize = 4;

/// A betting round tied to board state.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Street {
    Preflop,
    Flop,
    Turn,
    River,
}

impl Street {
    pub fn label(self) -> &'static str {
        match self {
            Street::Preflop => "Preflop",
            Street::Flop => "Flop",
            Street::Turn => "Turn",
            Street::River => "River",
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Blind {
    Small,
    Big,
}

/// An action as actually applied, with clamped amounts. `Raise::to` is the
/// seat's total bet on this street after the raise.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum AppliedAction {
    Fold,
    Check,
    Call { amount: u32, all_in: bool },
    Raise { to: u32, all_in: bool },
}

/// Notifications for the rendering/input collaborator. Every state mutation
/// the front-end might announce flows out of the table as one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    HandStarted {
        hand_no: u32,
        dealer: usize,
    },
    BlindPosted {
        seat: usize,
        blind: Blind,
        amount: u32,
    },
    StreetDealt {
        street: Street,
        cards: Vec<Card>,
    },
    ActionTaken {
        seat: usize,
        street: Street,
        action: AppliedAction,
    },
    HandEnded {
        winners: Vec<usize>,
        share: u32,
        pot: u32,
        showdown: bool,
        revealed: Vec<(usize, [Card; 2])>,
    },
    /// Seat indices ordered by final stack, largest first.
    GameOver {
        standings: Vec<usize>,
    },
}

/// The active seat's legal bounds, for whoever supplies the next action.
/// The maximum raise is the remaining stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnContext {
    pub seat: usize,
    pub to_call: u32,
    pub min_raise: u32,
    pub pot: u32,
    pub stack: u32,
}

/// Read-only snapshot of everything a bot policy may look at for one turn.
/// Policies never touch the table itself.
#[derive(Debug, Clone, Copy)]
pub struct TurnView<'a> {
    pub hole: [Card; 2],
    pub community: &'a [Card],
    pub pot: u32,
    pub to_call: u32,
    pub min_raise: u32,
    pub stack: u32,
    pub persona: Persona,
}

/// The table: one full game session, owned by its driving loop. Sequences
/// blinds, turn order, street progression and settlement for hand after hand
/// until one player holds all the chips or the human is broke.
///
/// The driver alternates two calls: `current_turn()` to learn who owes a
/// decision and under what bounds, and `apply_action(seat, action)` to apply
/// it. `apply_action` advances the machine as far as it can go without
/// another decision (skipping dead seats, dealing streets once the queue
/// drains, settling uncontested hands and showdowns) and returns the events
/// that happened along the way.
#[derive(Debug)]
pub struct Table {
    players: Vec<Player>,
    deck: Deck,
    community: Vec<Card>,
    pot: u32,
    dealer: usize,
    small_blind: u32,
    big_blind: u32,
    current_bet: u32,
    queue: VecDeque<usize>,
    street: Option<Street>,
    active: Option<usize>,
    hand_no: u32,
    game_over: bool,
}

impl Table {
    pub fn new(players: Vec<Player>, small_blind: u32, seed: u64) -> Result<Self, GameError> {
        let n = players.len();
        if !(2..=MAX_SEATS).contains(&n) {
            return Err(GameError::InvalidSeatCount { got: n });
        }
        let mut seat_rng = ChaCha20Rng::seed_from_u64(seed);
        let dealer = seat_rng.random_range(0..n);
        Self::with_deck(players, small_blind, Deck::new_with_seed(seed), dealer)
    }

    /// A table over a caller-supplied deck and dealer seat. With a
    /// fixed-order deck this gives fully scripted deals, for tests and hand
    /// replays.
    pub fn with_deck(
        players: Vec<Player>,
        small_blind: u32,
        deck: Deck,
        dealer: usize,
    ) -> Result<Self, GameError> {
        let n = players.len();
        if !(2..=MAX_SEATS).contains(&n) {
            return Err(GameError::InvalidSeatCount { got: n });
        }
        Ok(Self {
            players,
            deck,
            community: Vec::with_capacity(5),
            pot: 0,
            dealer: dealer % n,
            small_blind,
            big_blind: small_blind * 2,
            current_bet: 0,
            queue: VecDeque::new(),
            street: None,
            active: None,
            hand_no: 0,
            game_over: false,
        })
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }
    pub fn community(&self) -> &[Card] {
        &self.community
    }
    pub fn pot(&self) -> u32 {
        self.pot
    }
    pub fn dealer(&self) -> usize {
        self.dealer
    }
    pub fn small_blind(&self) -> u32 {
        self.small_blind
    }
    pub fn big_blind(&self) -> u32 {
        self.big_blind
    }
    pub fn current_bet(&self) -> u32 {
        self.current_bet
    }
    pub fn street(&self) -> Option<Street> {
        self.street
    }
    pub fn hand_no(&self) -> u32 {
        self.hand_no
    }
    pub fn is_hand_over(&self) -> bool {
        self.street.is_none()
    }
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Begin the next hand: reshuffle, deal two cards to every solvent seat,
    /// post blinds and queue the preflop action. Zero-stack seats sit out,
    /// marked folded with no cards.
    pub fn start_hand(&mut self) -> Result<Vec<Event>, GameError> {
        if self.game_over {
            return Err(GameError::GameOver);
        }
        if self.street.is_some() {
            return Err(GameError::HandInProgress);
        }
        if self.solvent_seats() < 2 {
            return Err(GameError::InsufficientPlayers);
        }

        self.hand_no += 1;
        self.community.clear();
        self.pot = 0;
        self.current_bet = 0;
        self.queue.clear();
        self.active = None;
        for p in &mut self.players {
            p.reset_for_hand();
        }
        self.deck.shuffle();

        let mut events = vec![Event::HandStarted {
            hand_no: self.hand_no,
            dealer: self.dealer,
        }];

        let n = self.players.len();
        for _ in 0..2 {
            for seat in 0..n {
                if !self.players[seat].is_folded() {
                    let c = self.deck.deal_card().ok_or(GameError::DeckExhausted)?;
                    self.players[seat].give_card(c)?;
                }
            }
        }

        let sb_seat = self.next_solvent(self.dealer);
        let bb_seat = self.next_solvent(sb_seat);
        let sb_paid = self.players[sb_seat].commit(self.small_blind);
        self.pot += sb_paid;
        events.push(Event::BlindPosted {
            seat: sb_seat,
            blind: Blind::Small,
            amount: sb_paid,
        });
        let bb_paid = self.players[bb_seat].commit(self.big_blind);
        self.pot += bb_paid;
        events.push(Event::BlindPosted {
            seat: bb_seat,
            blind: Blind::Big,
            amount: bb_paid,
        });
        // A short-stacked big blind sets the bar at what it actually posted.
        self.current_bet = self.players[bb_seat].bet();
        self.street = Some(Street::Preflop);

        let start = (bb_seat + 1) % n;
        for off in 0..n {
            let i = (start + off) % n;
            let p = &self.players[i];
            if p.stack() > 0 && !p.is_folded() && !self.queue.contains(&i) {
                self.queue.push_back(i);
            }
        }

        self.step(&mut events)?;
        Ok(events)
    }

    /// The seat currently owed a decision, with its legal bounds. `None`
    /// between hands and after settlement.
    pub fn current_turn(&self) -> Option<TurnContext> {
        let seat = self.active?;
        let p = &self.players[seat];
        Some(TurnContext {
            seat,
            to_call: self.current_bet.saturating_sub(p.bet()),
            min_raise: self.min_raise_for(seat),
            pot: self.pot,
            stack: p.stack(),
        })
    }

    /// Snapshot for the bot policy. `None` if the seat holds no cards.
    pub fn turn_view(&self, seat: usize) -> Option<TurnView<'_>> {
        let p = self.players.get(seat)?;
        let hole = p.hole_cards()?;
        Some(TurnView {
            hole,
            community: &self.community,
            pot: self.pot,
            to_call: self.current_bet.saturating_sub(p.bet()),
            min_raise: self.min_raise_for(seat),
            stack: p.stack(),
            persona: p.persona(),
        })
    }

    /// Apply one action for the active seat and advance the machine to the
    /// next decision point (or through settlement). Illegal actions are
    /// rejected with no state change; the same seat stays active.
    pub fn apply_action(
        &mut self,
        seat: usize,
        action: PlayerAction,
    ) -> Result<Vec<Event>, GameError> {
        let street = self.street.ok_or(GameError::NoHandInProgress)?;
        let expected = self.active.ok_or(GameError::NoHandInProgress)?;
        if expected != seat {
            return Err(GameError::NotPlayersTurn {
                expected,
                actual: seat,
            });
        }
        let p = &self.players[seat];
        let to_call = self.current_bet.saturating_sub(p.bet());
        let min_raise = self.min_raise_for(seat);
        let applied = match validate_action(p.stack(), to_call, min_raise, action)? {
            ValidatedAction::Fold => {
                self.players[seat].fold();
                AppliedAction::Fold
            }
            ValidatedAction::Check => AppliedAction::Check,
            ValidatedAction::Call { amount, all_in } => {
                let paid = self.players[seat].commit(amount);
                self.pot += paid;
                AppliedAction::Call {
                    amount: paid,
                    all_in,
                }
            }
            ValidatedAction::Raise { amount, all_in } => {
                let paid = self.players[seat].commit(amount);
                self.pot += paid;
                let new_bet = self.players[seat].bet();
                if new_bet > self.current_bet {
                    self.current_bet = new_bet;
                    self.reopen_action(seat);
                }
                AppliedAction::Raise {
                    to: new_bet,
                    all_in,
                }
            }
        };
        self.active = None;
        let mut events = vec![Event::ActionTaken {
            seat,
            street,
            action: applied,
        }];
        self.step(&mut events)?;
        Ok(events)
    }

    /// Everyone still in the hand must get another chance to respond to a
    /// raise: append each live, solvent seat whose bet fell below the new
    /// level and is not already waiting to act.
    fn reopen_action(&mut self, raiser: usize) {
        for i in 0..self.players.len() {
            if i == raiser {
                continue;
            }
            let p = &self.players[i];
            if !p.is_folded()
                && p.stack() > 0
                && p.bet() < self.current_bet
                && !self.queue.contains(&i)
            {
                self.queue.push_back(i);
            }
        }
    }

    /// Drive the machine until a seat owes a decision or the hand settles:
    /// pop dead seats off the queue, deal the next street when it drains,
    /// and settle when one player remains or the river round completes.
    fn step(&mut self, events: &mut Vec<Event>) -> Result<(), GameError> {
        loop {
            if self.live_seats() <= 1 {
                return self.finish_hand(events);
            }
            while let Some(seat) = self.queue.pop_front() {
                let p = &self.players[seat];
                if p.is_folded() || p.stack() == 0 {
                    continue;
                }
                self.active = Some(seat);
                return Ok(());
            }
            match self.community.len() {
                0 => self.deal_street(Street::Flop, 3, events)?,
                3 => self.deal_street(Street::Turn, 1, events)?,
                4 => self.deal_street(Street::River, 1, events)?,
                _ => return self.finish_hand(events),
            }
        }
    }

    fn deal_street(
        &mut self,
        street: Street,
        count: usize,
        events: &mut Vec<Event>,
    ) -> Result<(), GameError> {
        for p in &mut self.players {
            p.reset_bet();
        }
        self.current_bet = 0;
        let mut cards = Vec::with_capacity(count);
        for _ in 0..count {
            cards.push(self.deck.deal_card().ok_or(GameError::DeckExhausted)?);
        }
        self.community.extend_from_slice(&cards);
        self.street = Some(street);
        events.push(Event::StreetDealt { street, cards });

        let n = self.players.len();
        let start = (self.dealer + 1) % n;
        self.queue.clear();
        for off in 0..n {
            let i = (start + off) % n;
            let p = &self.players[i];
            if !p.is_folded() && p.stack() > 0 {
                self.queue.push_back(i);
            }
        }
        Ok(())
    }

    /// Settle the pot, rotate the dealer and detect game over. Uncontested
    /// hands award the whole pot without revealing anything; showdowns rank
    /// every live holding and split among the ties (integer division, any
    /// remainder is a known rounding loss and goes to no one).
    fn finish_hand(&mut self, events: &mut Vec<Event>) -> Result<(), GameError> {
        self.active = None;
        self.queue.clear();
        let live: Vec<usize> = (0..self.players.len())
            .filter(|&i| !self.players[i].is_folded())
            .collect();
        let pot = self.pot;

        let (winners, share, showdown, revealed) = if live.len() == 1 {
            (live, pot, false, Vec::new())
        } else {
            let mut ranked: Vec<(usize, HandRank)> = Vec::with_capacity(live.len());
            let mut revealed = Vec::with_capacity(live.len());
            for &seat in &live {
                let hole = self.players[seat]
                    .hole_cards()
                    .ok_or(GameError::MissingHoleCards { seat })?;
                let mut cards = hole.to_vec();
                cards.extend_from_slice(&self.community);
                ranked.push((seat, hand_rank(&cards)?));
                revealed.push((seat, hole));
            }
            let best = ranked
                .iter()
                .map(|(_, r)| r.clone())
                .max()
                .ok_or(GameError::InsufficientPlayers)?;
            let winners: Vec<usize> = ranked
                .iter()
                .filter(|(_, r)| *r == best)
                .map(|&(s, _)| s)
                .collect();
            let share = pot / winners.len() as u32;
            (winners, share, true, revealed)
        };

        for &w in &winners {
            self.players[w].add_chips(share);
        }
        self.pot = 0;
        self.street = None;
        events.push(Event::HandEnded {
            winners,
            share,
            pot,
            showdown,
            revealed,
        });

        self.dealer = self.next_solvent(self.dealer);

        let human_broke = self
            .players
            .iter()
            .any(|p| p.is_human() && p.stack() == 0);
        if self.solvent_seats() < 2 || human_broke {
            self.game_over = true;
            let mut standings: Vec<usize> = (0..self.players.len()).collect();
            standings.sort_by(|&a, &b| self.players[b].stack().cmp(&self.players[a].stack()));
            events.push(Event::GameOver { standings });
        }
        Ok(())
    }

    fn min_raise_for(&self, seat: usize) -> u32 {
        self.big_blind
            .max(self.current_bet * 2)
            .saturating_sub(self.players[seat].bet())
    }

    fn next_solvent(&self, after: usize) -> usize {
        let n = self.players.len();
        let mut i = after;
        loop {
            i = (i + 1) % n;
            if self.players[i].stack() > 0 || i == after {
                return i;
            }
        }
    }

    fn solvent_seats(&self) -> usize {
        self.players.iter().filter(|p| p.stack() > 0).count()
    }

    fn live_seats(&self) -> usize {
        self.players.iter().filter(|p| !p.is_folded()).count()
    }
}
