//=========================================================================
// Interaction Resolver
//=========================================================================
//
// Turns (verb, hotspot) into an action-line outcome.
//
// Flow:
//   click → resolve() / resolve_with_item() → ActionOutcome → apply()
//
// Procedures commit their flag and inventory changes before returning,
// so the outcome is only surfaced once the state already reflects them.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::debug;

//=== Internal Dependencies ===============================================

use super::hotspot::{Effect, Hotspot};
use super::inventory::InventoryItem;
use super::state::GameState;
use super::verb::Verb;

//=== ActionOutcome =======================================================

/// Result of one resolved interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// New action line.
    Text(String),

    /// The procedure handled its own messaging; keep the current line.
    Unchanged,
}

//=== Resolution ==========================================================

/// Resolves `verb` against `hotspot`.
///
/// With no verb the outcome is the hotspot name. A verb the hotspot does
/// not handle yields `"I can't <verb> that."` with the raw verb id.
pub fn resolve(state: &mut GameState, verb: Option<Verb>, hotspot: &Hotspot) -> ActionOutcome {
    let Some(verb) = verb else {
        return ActionOutcome::Text(hotspot.name().to_string());
    };

    match hotspot.effect(verb) {
        Some(effect) => {
            debug!("Resolving {} on {}", verb, hotspot.id());
            run_effect(state, effect)
        }
        None => {
            debug!("{} has no effect for {}", hotspot.id(), verb);
            ActionOutcome::Text(refusal(verb))
        }
    }
}

/// Resolves `Use <item>` on `hotspot`, falling back to [`resolve`] when the
/// hotspot has nothing specific for the item.
pub fn resolve_with_item(
    state: &mut GameState,
    verb: Option<Verb>,
    item: &InventoryItem,
    hotspot: &Hotspot,
) -> ActionOutcome {
    if verb == Some(Verb::Use) {
        if let Some(effect) = hotspot.item_effect(&item.id) {
            debug!("Using {} on {}", item.id, hotspot.id());
            return run_effect(state, effect);
        }
    }
    resolve(state, verb, hotspot)
}

/// Surfaces `outcome` on the action line and walks the player to the
/// hotspot, as one state update.
pub fn apply(state: &mut GameState, outcome: ActionOutcome, hotspot: &Hotspot) {
    let text = match outcome {
        ActionOutcome::Text(text) => Some(text),
        ActionOutcome::Unchanged => None,
    };
    state.complete_interaction(hotspot.walk_to_position(), text);
}

/// Status line while the pointer rests on `hotspot`.
pub fn hover_text(verb: Option<Verb>, hotspot: &Hotspot) -> String {
    match verb {
        Some(verb) => format!("{} {}", verb.display_name(), hotspot.name()),
        None => hotspot.name().to_string(),
    }
}

/// Generic refusal for an unhandled verb.
pub fn refusal(verb: Verb) -> String {
    format!("I can't {} that.", verb.id())
}

//--- Internal Helpers ----------------------------------------------------

fn run_effect(state: &mut GameState, effect: Effect) -> ActionOutcome {
    match effect {
        Effect::Text(text) => ActionOutcome::Text(text.to_string()),
        Effect::Procedure(procedure) => match procedure(state) {
            Some(text) => ActionOutcome::Text(text),
            None => ActionOutcome::Unchanged,
        },
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
