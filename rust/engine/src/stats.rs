use crate::table::{AppliedAction, Event};

/// Running statistics for one tracked seat across a session, fed from the
/// table's event stream. Drives the end-of-game report.
#[derive(Debug, Clone, Default)]
pub struct SessionStats {
    pub hands_played: u32,
    pub hands_won: u32,
    pub total_won: u32,
    pub biggest_pot: u32,
    pub biggest_pot_hand: u32,
    pub folds: u32,
    pub checks: u32,
    pub calls: u32,
    pub raises: u32,
    pub all_ins: u32,
    pub showdowns: u32,
    pub showdowns_won: u32,
    pub start_stack: u32,
}

impl SessionStats {
    pub fn new(start_stack: u32) -> Self {
        Self {
            start_stack,
            ..Self::default()
        }
    }

    /// Observe one event for the tracked seat.
    pub fn observe(&mut self, event: &Event, seat: usize) {
        match event {
            Event::HandStarted { hand_no, .. } => {
                self.hands_played = *hand_no;
            }
            Event::ActionTaken {
                seat: actor,
                action,
                ..
            } if *actor == seat => match action {
                AppliedAction::Fold => self.folds += 1,
                AppliedAction::Check => self.checks += 1,
                AppliedAction::Call { all_in, .. } => {
                    self.calls += 1;
                    if *all_in {
                        self.all_ins += 1;
                    }
                }
                AppliedAction::Raise { all_in, .. } => {
                    self.raises += 1;
                    if *all_in {
                        self.all_ins += 1;
                    }
                }
            },
            Event::HandEnded {
                winners,
                share,
                pot,
                showdown,
                ..
            } => {
                if *showdown {
                    self.showdowns += 1;
                }
                if winners.contains(&seat) {
                    self.hands_won += 1;
                    self.total_won += share;
                    if *showdown {
                        self.showdowns_won += 1;
                    }
                    if *pot > self.biggest_pot {
                        self.biggest_pot = *pot;
                        self.biggest_pot_hand = self.hands_played;
                    }
                }
            }
            _ => {}
        }
    }

    pub fn win_rate(&self) -> f64 {
        f64::from(self.hands_won) / f64::from(self.hands_played.max(1))
    }

    pub fn net(&self, final_stack: u32) -> i64 {
        i64::from(final_stack) - i64::from(self.start_stack)
    }

    /// Report lines for the game-over screen.
    pub fn summary(&self, final_stack: u32) -> Vec<String> {
        let total_actions = self.raises + self.calls + self.checks + self.folds;
        let aggression = if total_actions > 0 {
            f64::from(self.raises) / f64::from(total_actions) * 100.0
        } else {
            0.0
        };
        let net = self.net(final_stack);
        let net_str = if net >= 0 {
            format!("+${}", net)
        } else {
            format!("-${}", -net)
        };
        let mut lines = vec![
            format!("Hands played:   {}", self.hands_played),
            format!(
                "Hands won:      {} ({:.0}%)",
                self.hands_won,
                self.win_rate() * 100.0
            ),
            format!(
                "Showdowns won:  {}/{}",
                self.showdowns_won, self.showdowns
            ),
            format!("Net profit:     {}", net_str),
            format!("Times raised:   {} ({:.0}%)", self.raises, aggression),
            format!("Times folded:   {}", self.folds),
        ];
        if self.all_ins > 0 {
            lines.push(format!("Went all-in {}x", self.all_ins));
        }
        if self.biggest_pot > 0 {
            lines.push(format!(
                "Biggest pot won: ${} (hand #{})",
                self.biggest_pot, self.biggest_pot_hand
            ));
        }
        lines
    }
}
