//=========================================================================
// Content
//=========================================================================
//
// Authored data for the one playable room: the GB Studios breakroom the
// morning after El Fuego's party.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::hotspot::{Effect, Hotspot, Position, Region, Visibility};
use super::inventory::InventoryItem;
use super::scene::Scene;
use super::state::GameState;
use super::verb::Verb;

//=== Flags ===============================================================

pub const DAGGER_TAKEN: &str = "daggerTaken";
pub const WEAPON_MATCHED: &str = "weaponMatched";
pub const HAD_COFFEE: &str = "hadCoffee";
pub const FRIDGE_OPEN: &str = "fridgeOpen";

//=== Cut-scene ===========================================================

/// Chatter cycled on screen during the party.
pub const PARTY_LINES: &[&str] = &[
    "Darling, the cameras adore you!",
    "Has anyone seen the producer?",
    "Another round for El Fuego!",
    "Who keeps touching the dimmer?",
];

//=== Items ===============================================================

pub const DAGGER_ID: &str = "dagger";

pub fn dagger() -> InventoryItem {
    InventoryItem::new(
        DAGGER_ID,
        "Bloody dagger",
        "A jewelled prop dagger. The blood is not a prop.",
        "items/dagger.png",
    )
    .with_combination("body")
}

//=== Scene ===============================================================

pub const BREAKROOM_ID: &str = "breakroom";

/// The breakroom, as it looks once the lights come back on.
pub fn breakroom() -> Scene {
    Scene::new(
        BREAKROOM_ID,
        "Studio breakroom",
        "backgrounds/breakroom.jpg",
        vec![
            Hotspot::new("door", "Door", Region::new(2.0, 20.0, 14.0, 65.0))
                .text(Verb::Look, "The door to the studio lot.")
                .text(Verb::Open, "The lot is crawling with cops. I should solve this first.")
                .text(Verb::Close, "It's already closed.")
                .text(Verb::Push, "It opens inward. Not that I'm leaving."),
            Hotspot::new("coffee-machine", "Coffee machine", Region::new(20.0, 35.0, 12.0, 20.0))
                .text(Verb::Look, "Industrial strength. Fuels half of Hollywood.")
                .procedure(Verb::Use, brew_coffee)
                .text(Verb::Push, "It wobbles ominously.")
                .text(Verb::Pull, "The plug is taped in. Someone learned that lesson."),
            Hotspot::new("fridge", "Fridge", Region::new(80.0, 20.0, 16.0, 55.0))
                .procedure(Verb::Look, look_fridge)
                .procedure(Verb::Open, open_fridge)
                .procedure(Verb::Close, close_fridge)
                .text(Verb::Pull, "I'd rather use the handle."),
            Hotspot::new("body", "El Fuego", Region::new(38.0, 62.0, 22.0, 18.0))
                .text(Verb::Look, "El Fuego. The hottest act in town, now stone cold.")
                .text(Verb::Talk, "He isn't saying much these days.")
                .text(Verb::Push, "Show some respect.")
                .text(Verb::Pull, "Better not disturb the crime scene.")
                .text(Verb::Pickup, "He's heavier than he looked on screen.")
                .with_item(DAGGER_ID, Effect::Procedure(match_wound))
                .walk_to(Position::new(45.0, 85.0)),
            Hotspot::new("dagger", "Dagger", Region::new(54.0, 78.0, 6.0, 8.0))
                .text(Verb::Look, "A jewelled dagger, still wet with blood.")
                .procedure(Verb::Pickup, take_dagger)
                .visibility(Visibility::UnlessFlag(DAGGER_TAKEN)),
        ],
    )
}

//=== Procedures ==========================================================

fn take_dagger(state: &mut GameState) -> Option<String> {
    if state.flag(DAGGER_TAKEN) {
        return Some("I already have it.".into());
    }
    state.set_flag(DAGGER_TAKEN, true);
    state.add_to_inventory(dagger());
    Some("I picked up the dagger. Evidence!".into())
}

fn match_wound(state: &mut GameState) -> Option<String> {
    if state.flag(WEAPON_MATCHED) {
        return Some("Yep. Still the murder weapon.".into());
    }
    state.set_flag(WEAPON_MATCHED, true);
    Some("It fits the wound exactly. This is the murder weapon.".into())
}

fn brew_coffee(state: &mut GameState) -> Option<String> {
    if state.flag(HAD_COFFEE) {
        return Some("One more cup and I'll see through time.".into());
    }
    state.set_flag(HAD_COFFEE, true);
    Some("Burnt, bitter, perfect. Now I can think.".into())
}

fn look_fridge(state: &mut GameState) -> Option<String> {
    let text = if state.flag(FRIDGE_OPEN) {
        "Half a sandwich labelled 'EL FUEGO - DO NOT TOUCH'."
    } else {
        "A humming fridge covered in call sheets."
    };
    Some(text.into())
}

fn open_fridge(state: &mut GameState) -> Option<String> {
    if state.flag(FRIDGE_OPEN) {
        return Some("It's already open.".into());
    }
    state.set_flag(FRIDGE_OPEN, true);
    Some("Cold air and a suspicious sandwich.".into())
}

fn close_fridge(state: &mut GameState) -> Option<String> {
    if !state.flag(FRIDGE_OPEN) {
        return Some("It's already closed.".into());
    }
    state.set_flag(FRIDGE_OPEN, false);
    Some("Thunk.".into())
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::resolver::{self, ActionOutcome};

    fn hotspot<'a>(scene: &'a Scene, id: &str) -> &'a Hotspot {
        scene.hotspots().iter().find(|h| h.id() == id).unwrap()
    }

    //=====================================================================
    // Authoring checks
    //=====================================================================

    #[test]
    fn hotspot_ids_are_unique() {
        let scene = breakroom();
        let mut ids: Vec<_> = scene.hotspots().iter().map(|h| h.id()).collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn regions_lie_inside_the_scene() {
        for h in breakroom().hotspots() {
            let r = h.region();
            assert!(r.width > 0.0 && r.height > 0.0, "{} has empty region", h.id());
            assert!(r.x >= 0.0 && r.x + r.width <= 100.0, "{} out of bounds", h.id());
            assert!(r.y >= 0.0 && r.y + r.height <= 100.0, "{} out of bounds", h.id());
        }
    }

    #[test]
    fn every_hotspot_can_be_looked_at() {
        for h in breakroom().hotspots() {
            assert!(h.effect(Verb::Look).is_some(), "{} has no look text", h.id());
        }
    }

    #[test]
    fn dagger_hotspot_sits_on_top_of_body() {
        let scene = breakroom();
        let state = GameState::new();
        let dagger = hotspot(&scene, "dagger");
        let hit = scene.hotspot_at(dagger.region().center(), &state).unwrap();
        assert_eq!(hit.id(), "dagger");
    }

    //=====================================================================
    // Dagger pickup
    //=====================================================================

    #[test]
    fn first_pickup_takes_dagger() {
        let scene = breakroom();
        let mut state = GameState::new();
        let before = state.inventory().len();

        let dagger = hotspot(&scene, "dagger").clone();
        let outcome = resolver::resolve(&mut state, Some(Verb::Pickup), &dagger);

        assert_eq!(state.inventory().len(), before + 1);
        assert_eq!(state.inventory().iter().last().unwrap().id, "dagger");
        assert!(state.flag(DAGGER_TAKEN));
        assert!(scene.find("dagger", &state).is_none());
        assert!(scene.interactive(&state).all(|h| h.id() != "dagger"));
        assert_eq!(
            outcome,
            ActionOutcome::Text("I picked up the dagger. Evidence!".into())
        );
    }

    #[test]
    fn second_pickup_is_refused_without_duplicate() {
        let scene = breakroom();
        let mut state = GameState::new();
        let dagger = hotspot(&scene, "dagger").clone();

        let first = resolver::resolve(&mut state, Some(Verb::Pickup), &dagger);
        let len = state.inventory().len();
        let second = resolver::resolve(&mut state, Some(Verb::Pickup), &dagger);

        assert_eq!(state.inventory().len(), len);
        assert_ne!(first, second);
        assert_eq!(second, ActionOutcome::Text("I already have it.".into()));
    }

    #[test]
    fn dagger_on_body_matches_wound() {
        let scene = breakroom();
        let mut state = GameState::new();
        let body = hotspot(&scene, "body");

        let outcome = resolver::resolve_with_item(&mut state, Some(Verb::Use), &dagger(), body);

        assert!(state.flag(WEAPON_MATCHED));
        assert_eq!(
            outcome,
            ActionOutcome::Text("It fits the wound exactly. This is the murder weapon.".into())
        );
    }

    //=====================================================================
    // Other procedures
    //=====================================================================

    #[test]
    fn fridge_tracks_open_state() {
        let scene = breakroom();
        let mut state = GameState::new();
        let fridge = hotspot(&scene, "fridge");

        let closed_look = resolver::resolve(&mut state, Some(Verb::Look), fridge);
        resolver::resolve(&mut state, Some(Verb::Open), fridge);
        assert!(state.flag(FRIDGE_OPEN));
        let open_look = resolver::resolve(&mut state, Some(Verb::Look), fridge);
        assert_ne!(closed_look, open_look);

        resolver::resolve(&mut state, Some(Verb::Close), fridge);
        assert!(!state.flag(FRIDGE_OPEN));
        assert_eq!(
            resolver::resolve(&mut state, Some(Verb::Close), fridge),
            ActionOutcome::Text("It's already closed.".into())
        );
    }

    #[test]
    fn coffee_only_first_cup_sets_flag() {
        let scene = breakroom();
        let mut state = GameState::new();
        let machine = hotspot(&scene, "coffee-machine");

        let first = resolver::resolve(&mut state, Some(Verb::Use), machine);
        let second = resolver::resolve(&mut state, Some(Verb::Use), machine);
        assert!(state.flag(HAD_COFFEE));
        assert_ne!(first, second);
    }

    #[test]
    fn unhandled_verbs_refuse_with_raw_identifier() {
        let scene = breakroom();
        let mut state = GameState::new();
        let door = hotspot(&scene, "door");
        assert_eq!(
            resolver::resolve(&mut state, Some(Verb::Pickup), door),
            ActionOutcome::Text("I can't pickup that.".into())
        );
        assert_eq!(
            resolver::resolve(&mut state, Some(Verb::Talk), door),
            ActionOutcome::Text("I can't talk that.".into())
        );
    }
}
