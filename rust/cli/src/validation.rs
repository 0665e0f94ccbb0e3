//! Parsing of interactive player input.
//!
//! Malformed input never reaches the table: it is reported with a reason and
//! the prompt repeats with no state change. Legality (min-raise, stack
//! bounds) is the engine's job; this module only turns text into actions.

use greenfelt_engine::player::PlayerAction;

/// Outcome of parsing one line of input during a human turn.
#[derive(Debug, PartialEq, Eq)]
pub enum ParseResult {
    /// Valid player action parsed from input
    Action(PlayerAction),
    /// Shove the whole stack; the caller sizes the raise (or call) itself
    AllIn,
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parse user input into a player action (case-insensitive):
/// - "f" / "fold"
/// - "c": check when nothing is owed, call otherwise
/// - "check", "call": explicit forms
/// - "r N" / "raise N": raise by N
/// - "a" / "allin" / "all-in"
/// - "q" / "quit"
pub fn parse_player_action(input: &str, to_call: u32) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    if parts.is_empty() {
        return ParseResult::Invalid("Empty input".to_string());
    }

    match parts[0] {
        "q" | "quit" => ParseResult::Quit,
        "fold" | "f" => ParseResult::Action(PlayerAction::Fold),
        "check" => ParseResult::Action(PlayerAction::Check),
        "call" => ParseResult::Action(PlayerAction::Call),
        "c" => {
            if to_call == 0 {
                ParseResult::Action(PlayerAction::Check)
            } else {
                ParseResult::Action(PlayerAction::Call)
            }
        }
        "allin" | "all-in" | "a" => ParseResult::AllIn,
        "raise" | "r" => {
            if parts.len() < 2 {
                return ParseResult::Invalid(
                    "Raise requires an amount (e.g., 'raise 100')".to_string(),
                );
            }
            match parts[1].parse::<u32>() {
                Ok(amount) if amount > 0 => ParseResult::Action(PlayerAction::Raise(amount)),
                Ok(_) => ParseResult::Invalid("Raise amount must be positive".to_string()),
                Err(_) => ParseResult::Invalid("Enter a valid number".to_string()),
            }
        }
        other => ParseResult::Invalid(format!(
            "Unrecognized action '{}' (fold/check/call/raise N/all-in/quit)",
            other
        )),
    }
}
