use crate::errors::GameError;
use crate::player::PlayerAction;

/// An action that passed legality checks, with its chip movement resolved
/// against the acting seat's stack. `Call` and `Raise` carry the total
/// amount to move this turn; `all_in` marks a movement that consumes the
/// whole stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidatedAction {
    Fold,
    Check,
    Call { amount: u32, all_in: bool },
    Raise { amount: u32, all_in: bool },
}

/// Validates an action against the current betting state. Used unchanged for
/// human input and for bot decisions, so both sides face the same rules:
///
/// - a check is only legal with nothing to call;
/// - a call moves `min(to_call, stack)` (an all-in call when short);
/// - a raise increment may not exceed the stack, and must meet `min_raise`
///   unless the full commitment is the player's entire remaining stack
///   (an undersized all-in is legal).
///
/// Rejections leave all state untouched; the caller re-prompts.
pub fn validate_action(
    stack: u32,
    to_call: u32,
    min_raise: u32,
    action: PlayerAction,
) -> Result<ValidatedAction, GameError> {
    match action {
        PlayerAction::Fold => Ok(ValidatedAction::Fold),
        PlayerAction::Check => {
            if to_call == 0 {
                Ok(ValidatedAction::Check)
            } else {
                Err(GameError::IllegalCheck)
            }
        }
        PlayerAction::Call => {
            let amount = to_call.min(stack);
            Ok(ValidatedAction::Call {
                amount,
                all_in: amount == stack,
            })
        }
        PlayerAction::Raise(increment) => {
            if increment > stack {
                return Err(GameError::BetExceedsStack {
                    amount: increment,
                    stack,
                });
            }
            let total = (to_call + increment).min(stack);
            if increment < min_raise && total < stack {
                return Err(GameError::RaiseBelowMinimum {
                    amount: increment,
                    minimum: min_raise,
                });
            }
            Ok(ValidatedAction::Raise {
                amount: total,
                all_in: total == stack,
            })
        }
    }
}
