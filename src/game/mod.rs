//=========================================================================
// Game
//=========================================================================
//
// Facade that wires the narrative core to its collaborators.
//
// Architecture:
//   GameInput ──► Game
//                  ├─ PhaseController  (state + cut-scene timers)
//                  ├─ Scene            (hit testing, interactive set)
//                  ├─ resolver         (verb/item × hotspot → action line)
//                  ├─ PauseMenu        (save / load / restart confirmation)
//                  ├─ AudioDirector    (music follows the phase)
//                  └─ SaveStore        (best-effort snapshots)
//
//   view() ──► SceneView (what the presentation layer shows)
//
// Nothing here returns an error. Collaborator failures are logged and, for
// saves and loads, reported on the action line.
//
//=========================================================================

//=== Submodules ==========================================================

pub mod content;
pub mod hotspot;
pub mod inventory;
pub mod menu;
pub mod phase;
pub mod phase_controller;
pub mod resolver;
pub mod scene;
pub mod state;
pub mod verb;

//=== External Dependencies ===============================================

use std::time::Duration;

use log::{debug, info, trace, warn};

//=== Internal Dependencies ===============================================

use crate::audio::{AudioDirector, AudioSink};
use crate::config::CutsceneTimings;
use crate::core::input::{Command, GameInput, InputContext};
use crate::persistence::{self, SaveError, SaveStore, DEFAULT_SLOT};
use hotspot::{Hotspot, Position};
use menu::{MenuOutcome, MenuState, PauseMenu};
use phase::GamePhase;
use phase_controller::PhaseController;
use scene::Scene;
use state::GameState;
use verb::Verb;

//=== Messages ============================================================

const SAVED: &str = "Game saved.";
const SAVE_FAILED: &str = "The game could not be saved.";
const NO_SAVE: &str = "There is no saved game.";
const LOAD_FAILED: &str = "The saved game could not be loaded.";

//=== SceneView ===========================================================

/// Snapshot of everything the presentation layer needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneView {
    pub phase: GamePhase,
    pub action_text: String,
    pub party_line: Option<&'static str>,
    pub selected_verb: Option<Verb>,
    pub selected_item: Option<String>,
    /// Item names in inventory order.
    pub inventory: Vec<String>,
    /// Ids of the currently interactive hotspots.
    pub hotspots: Vec<&'static str>,
    pub menu: MenuState,
}

impl SceneView {
    /// One-line summary for a window caption.
    pub fn caption(&self) -> String {
        match self.menu {
            MenuState::ConfirmRestart => return "Restart to title? [Y/N]".to_string(),
            MenuState::Open => return "Paused: [S]ave [L]oad [R]estart [Esc] resume".to_string(),
            MenuState::Closed => {}
        }

        match self.phase {
            GamePhase::Title => "Press Enter to start".to_string(),
            GamePhase::Party => self.party_line.unwrap_or_default().to_string(),
            GamePhase::Gameplay => self.action_text.clone(),
            GamePhase::Intro | GamePhase::Blackout | GamePhase::MurderReveal => String::new(),
        }
    }
}

//=== Game ================================================================

pub struct Game {
    controller: PhaseController,
    scene: Scene,
    menu: PauseMenu,
    audio: AudioDirector,
    store: Box<dyn SaveStore>,
    /// Hotspot currently under the pointer.
    hovered: Option<&'static str>,
    /// Phase the collaborators were last told about.
    synced_phase: GamePhase,
}

impl Game {
    //--- Construction -----------------------------------------------------

    pub fn new(timings: CutsceneTimings, store: Box<dyn SaveStore>, sink: Box<dyn AudioSink>) -> Self {
        let controller = PhaseController::new(timings, content::PARTY_LINES);
        let mut audio = AudioDirector::new(sink);
        audio.on_phase_change(controller.phase());

        info!("Game ready in {}", content::BREAKROOM_ID);
        Self {
            synced_phase: controller.phase(),
            controller,
            scene: content::breakroom(),
            menu: PauseMenu::new(),
            audio,
            store,
            hovered: None,
        }
    }

    //--- Accessors --------------------------------------------------------

    pub fn state(&self) -> &GameState {
        self.controller.state()
    }

    pub fn phase(&self) -> GamePhase {
        self.controller.phase()
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn menu(&self) -> &PauseMenu {
        &self.menu
    }

    pub fn audio(&self) -> &AudioDirector {
        &self.audio
    }

    pub fn hovered(&self) -> Option<&'static str> {
        self.hovered
    }

    /// Bindings that should be live right now.
    pub fn input_context(&self) -> InputContext {
        InputContext::for_phase(self.phase(), self.menu.is_open())
    }

    /// Hotspots the player can currently interact with.
    pub fn interactive_hotspots(&self) -> impl Iterator<Item = &Hotspot> {
        self.scene.interactive(self.controller.state())
    }

    //--- Input ------------------------------------------------------------

    /// Applies one input at time `now`.
    pub fn handle(&mut self, input: GameInput, now: Duration) {
        match input {
            GameInput::Command(command) => {
                self.handle_command(command, now);
                self.audio.on_user_interaction();
            }
            GameInput::Hover(position) => self.pointer_moved(position),
            GameInput::Leave => self.pointer_left(),
            GameInput::Click(position) => {
                self.click(position);
                self.audio.on_user_interaction();
            }
        }
    }

    pub fn handle_command(&mut self, command: Command, now: Duration) {
        debug!("Command {:?} in {}", command, self.phase());

        match command {
            Command::StartGame => {
                self.controller.press_start(now);
            }
            Command::SelectVerb(verb) if self.scene_accepts_input() => {
                self.controller.state_mut().select_verb(Some(verb));
            }
            Command::ClearVerb if self.scene_accepts_input() => {
                self.controller.state_mut().select_verb(None);
            }
            Command::CycleItem if self.scene_accepts_input() => self.cycle_item(),
            Command::ToggleMenu if self.phase() == GamePhase::Gameplay => {
                self.menu.toggle();
                self.hovered = None;
            }
            Command::SaveGame if self.menu.state() == MenuState::Open => self.save(),
            Command::LoadGame if self.menu.state() == MenuState::Open => self.load(now),
            Command::RequestRestart => {
                self.menu.request_restart();
            }
            Command::Confirm | Command::Decline => {
                let accepted = command == Command::Confirm;
                if self.menu.answer(accepted) == MenuOutcome::Restart {
                    self.controller.reset();
                    self.hovered = None;
                }
            }
            _ => trace!("{:?} ignored in {}", command, self.phase()),
        }

        self.sync_phase();
    }

    /// Pointer moved over the scene: shows the hover line on entering a
    /// hotspot and clears it on leaving one.
    pub fn pointer_moved(&mut self, position: Position) {
        if !self.scene_accepts_input() {
            return;
        }

        let hit = self
            .scene
            .hotspot_at(position, self.controller.state())
            .map(|h| (h.id(), resolver::hover_text(self.controller.state().selected_verb(), h)));

        let hit_id = hit.as_ref().map(|(id, _)| *id);
        if hit_id == self.hovered {
            return;
        }

        match hit {
            Some((_, text)) => self.controller.state_mut().set_action_text(text),
            None => self.controller.state_mut().set_action_text(""),
        }
        self.hovered = hit_id;
    }

    /// Pointer left the scene.
    pub fn pointer_left(&mut self) {
        if self.hovered.take().is_some() {
            self.controller.state_mut().set_action_text("");
        }
    }

    /// Resolves the selected verb (and item) against the hotspot under
    /// `position`.
    pub fn click(&mut self, position: Position) {
        if !self.scene_accepts_input() {
            return;
        }

        let Some(hotspot) = self.scene.hotspot_at(position, self.controller.state()) else {
            trace!("Click on empty floor at {:?}", position);
            return;
        };

        let state = self.controller.state_mut();
        let verb = state.selected_verb();
        let outcome = match state.selected_item().cloned() {
            Some(item) => resolver::resolve_with_item(state, verb, &item, hotspot),
            None => resolver::resolve(state, verb, hotspot),
        };
        resolver::apply(state, outcome, hotspot);

        // A procedure may have hidden the hotspot under the pointer
        if let Some(id) = self.hovered {
            if self.scene.find(id, self.controller.state()).is_none() {
                self.hovered = None;
            }
        }
    }

    //--- Time -------------------------------------------------------------

    /// Advances cut-scene timers. Returns `true` if the phase changed.
    pub fn tick(&mut self, now: Duration) -> bool {
        let changed = self.controller.tick(now);
        self.sync_phase();
        changed
    }

    //--- Presentation -----------------------------------------------------

    pub fn view(&self) -> SceneView {
        let state = self.controller.state();
        SceneView {
            phase: state.phase(),
            action_text: state.action_text().to_string(),
            party_line: self.controller.party_line(),
            selected_verb: state.selected_verb(),
            selected_item: state.selected_item().map(|i| i.name.clone()),
            inventory: state.inventory().iter().map(|i| i.name.clone()).collect(),
            hotspots: self.interactive_hotspots().map(Hotspot::id).collect(),
            menu: self.menu.state(),
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn scene_accepts_input(&self) -> bool {
        self.input_context().accepts_pointer()
    }

    fn cycle_item(&mut self) {
        let state = self.controller.state_mut();
        let next = state
            .inventory()
            .next_after(state.selected_item().map(|i| i.id.as_str()))
            .cloned();
        state.select_item(next);
    }

    fn save(&mut self) {
        let text = match persistence::save_game(self.store.as_mut(), self.controller.state(), DEFAULT_SLOT) {
            Ok(_) => SAVED,
            Err(e) => {
                warn!("Save failed: {}", e);
                SAVE_FAILED
            }
        };
        self.controller.state_mut().set_action_text(text);
    }

    fn load(&mut self, now: Duration) {
        match persistence::load_game(self.store.as_ref()) {
            Ok(data) => {
                self.controller.restore(data.game_state, now);
                self.menu.resume();
                self.hovered = None;
            }
            Err(SaveError::NotFound(_)) => {
                info!("Load requested with no saved game");
                self.controller.state_mut().set_action_text(NO_SAVE);
            }
            Err(e) => {
                warn!("Load failed: {}", e);
                self.controller.state_mut().set_action_text(LOAD_FAILED);
            }
        }
    }

    /// Tells the collaborators about a phase change, once.
    fn sync_phase(&mut self) {
        let phase = self.controller.phase();
        if phase == self.synced_phase {
            return;
        }

        self.audio.on_phase_change(phase);
        if phase != GamePhase::Gameplay {
            self.menu.resume();
            self.hovered = None;
        }
        self.synced_phase = phase;
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::{AudioError, GAME_TRACK, PARTY_TRACK, TITLE_TRACK};
    use crate::persistence::{MemoryStore, SAVE_KEY};
    use crate::game::state::MURDER_REVEALED_FLAG;
    use std::sync::{Arc, Mutex};

    //--- Test Doubles -----------------------------------------------------

    /// Records played tracks; refuses the first `blocked` plays.
    struct RecordingSink {
        played: Arc<Mutex<Vec<String>>>,
        blocked: usize,
    }

    impl AudioSink for RecordingSink {
        fn play(&mut self, track: &str) -> Result<(), AudioError> {
            self.played.lock().unwrap().push(track.to_string());
            if self.blocked > 0 {
                self.blocked -= 1;
                return Err(AudioError::Blocked);
            }
            Ok(())
        }

        fn pause(&mut self) {}
    }

    //--- Helpers ----------------------------------------------------------

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn game_with_audio(blocked: usize) -> (Game, Arc<Mutex<Vec<String>>>) {
        let played = Arc::new(Mutex::new(Vec::new()));
        let sink = RecordingSink {
            played: Arc::clone(&played),
            blocked,
        };
        let game = Game::new(
            CutsceneTimings::default(),
            Box::new(MemoryStore::new()),
            Box::new(sink),
        );
        (game, played)
    }

    fn new_game() -> Game {
        game_with_audio(0).0
    }

    /// A game already past the cut-scene.
    fn in_gameplay() -> Game {
        let mut game = new_game();
        game.handle_command(Command::StartGame, ms(0));
        game.tick(ms(60_000));
        assert_eq!(game.phase(), GamePhase::Gameplay);
        game
    }

    fn center_of(game: &Game, id: &str) -> Position {
        game.scene()
            .hotspots()
            .iter()
            .find(|h| h.id() == id)
            .unwrap()
            .region()
            .center()
    }

    fn command(game: &mut Game, command: Command) {
        game.handle(GameInput::Command(command), ms(60_000));
    }

    //=====================================================================
    // Phase sequence
    //=====================================================================

    #[test]
    fn start_runs_cutscene_into_gameplay() {
        let (mut game, played) = game_with_audio(0);
        assert_eq!(game.input_context(), InputContext::Title);

        game.handle(GameInput::Command(Command::StartGame), ms(0));
        assert_eq!(game.phase(), GamePhase::Intro);
        assert_eq!(game.input_context(), InputContext::Cutscene);

        let mut now = 0;
        while game.phase() != GamePhase::Gameplay {
            now += 100;
            game.tick(ms(now));
        }

        assert_eq!(now, 11_000);
        assert!(game.state().flag(MURDER_REVEALED_FLAG));
        assert_eq!(game.input_context(), InputContext::Gameplay);
        assert_eq!(
            *played.lock().unwrap(),
            vec![TITLE_TRACK, PARTY_TRACK, GAME_TRACK]
        );
    }

    #[test]
    fn party_line_is_shown_during_party() {
        let mut game = new_game();
        game.handle_command(Command::StartGame, ms(0));
        game.tick(ms(1_500));

        let view = game.view();
        assert_eq!(view.phase, GamePhase::Party);
        assert_eq!(view.party_line, Some(content::PARTY_LINES[0]));
        assert_eq!(view.caption(), content::PARTY_LINES[0]);
    }

    #[test]
    fn scene_input_is_ignored_during_cutscene() {
        let mut game = new_game();
        game.handle_command(Command::StartGame, ms(0));

        game.handle_command(Command::SelectVerb(Verb::Look), ms(10));
        game.handle_command(Command::ToggleMenu, ms(10));
        game.click(center_of(&game, "dagger"));

        assert_eq!(game.state().selected_verb(), None);
        assert!(!game.menu().is_open());
        assert!(game.state().inventory().is_empty());
    }

    #[test]
    fn blocked_music_retries_on_next_input() {
        let (mut game, played) = game_with_audio(1);
        assert!(game.audio().retry_pending());

        // Any key press counts as an interaction
        game.handle(GameInput::Command(Command::ClearVerb), ms(0));

        assert!(game.audio().is_playing());
        assert_eq!(*played.lock().unwrap(), vec![TITLE_TRACK, TITLE_TRACK]);
    }

    //=====================================================================
    // Hover and click
    //=====================================================================

    #[test]
    fn hover_shows_verb_and_name_then_clears() {
        let mut game = in_gameplay();
        command(&mut game, Command::SelectVerb(Verb::Pickup));

        game.handle(GameInput::Hover(center_of(&game, "dagger")), ms(0));
        assert_eq!(game.state().action_text(), "Pick up Dagger");
        assert_eq!(game.hovered(), Some("dagger"));

        game.handle(GameInput::Leave, ms(0));
        assert_eq!(game.state().action_text(), "");
        assert_eq!(game.hovered(), None);
    }

    #[test]
    fn hover_without_verb_shows_bare_name() {
        let mut game = in_gameplay();
        game.pointer_moved(center_of(&game, "fridge"));
        assert_eq!(game.state().action_text(), "Fridge");

        // Moving onto empty floor clears the line
        game.pointer_moved(Position::new(70.0, 5.0));
        assert_eq!(game.state().action_text(), "");
    }

    #[test]
    fn picking_up_dagger_hides_its_hotspot() {
        let mut game = in_gameplay();
        // Over the dagger and the edge of the body beneath it
        let dagger_spot = Position::new(56.0, 79.0);
        command(&mut game, Command::SelectVerb(Verb::Pickup));
        game.pointer_moved(dagger_spot);

        game.click(dagger_spot);

        assert_eq!(game.state().action_text(), "I picked up the dagger. Evidence!");
        assert_eq!(game.view().inventory, vec!["Bloody dagger".to_string()]);
        assert!(!game.view().hotspots.contains(&"dagger"));
        assert_eq!(game.hovered(), None);

        // The body underneath now takes the click
        game.click(dagger_spot);
        assert_eq!(game.state().action_text(), "He's heavier than he looked on screen.");
        assert_eq!(game.state().inventory().len(), 1);
    }

    #[test]
    fn using_dagger_on_body() {
        let mut game = in_gameplay();
        command(&mut game, Command::SelectVerb(Verb::Pickup));
        game.click(center_of(&game, "dagger"));

        command(&mut game, Command::SelectVerb(Verb::Use));
        command(&mut game, Command::CycleItem);
        assert_eq!(game.state().action_text(), "Use Bloody dagger");

        game.click(Position::new(40.0, 70.0));
        assert_eq!(
            game.state().action_text(),
            "It fits the wound exactly. This is the murder weapon."
        );
        assert!(game.state().flag(content::WEAPON_MATCHED));
    }

    #[test]
    fn cycle_item_wraps_to_nothing() {
        let mut game = in_gameplay();
        command(&mut game, Command::SelectVerb(Verb::Pickup));
        game.click(center_of(&game, "dagger"));
        command(&mut game, Command::ClearVerb);

        command(&mut game, Command::CycleItem);
        assert_eq!(game.state().action_text(), "Bloody dagger");
        command(&mut game, Command::CycleItem);
        assert_eq!(game.state().selected_item(), None);
        assert_eq!(game.state().action_text(), "");
    }

    #[test]
    fn click_with_no_verb_names_hotspot() {
        let mut game = in_gameplay();
        game.click(center_of(&game, "door"));
        assert_eq!(game.state().action_text(), "Door");
    }

    #[test]
    fn click_walks_player_to_hotspot() {
        let mut game = in_gameplay();
        let door = game.scene().find("door", game.state()).unwrap().walk_to_position();

        game.click(center_of(&game, "door"));
        assert_eq!(game.state().player_position(), door);
    }

    //=====================================================================
    // Menu
    //=====================================================================

    #[test]
    fn open_menu_blocks_scene_input() {
        let mut game = in_gameplay();
        command(&mut game, Command::ToggleMenu);
        assert_eq!(game.input_context(), InputContext::Menu);

        game.pointer_moved(center_of(&game, "fridge"));
        game.click(center_of(&game, "fridge"));
        assert_eq!(game.state().action_text(), "");
        assert_eq!(game.view().caption(), "Paused: [S]ave [L]oad [R]estart [Esc] resume");
    }

    #[test]
    fn declining_restart_leaves_state_untouched() {
        let mut game = in_gameplay();
        command(&mut game, Command::SelectVerb(Verb::Look));
        let before = game.state().clone();

        command(&mut game, Command::ToggleMenu);
        command(&mut game, Command::RequestRestart);
        assert_eq!(game.view().caption(), "Restart to title? [Y/N]");
        command(&mut game, Command::Decline);

        assert_eq!(game.state(), &before);
        assert_eq!(game.menu().state(), MenuState::Open);
    }

    #[test]
    fn confirming_restart_returns_to_fresh_title() {
        let (mut game, played) = game_with_audio(0);
        game.handle_command(Command::StartGame, ms(0));
        game.tick(ms(60_000));

        command(&mut game, Command::ToggleMenu);
        command(&mut game, Command::RequestRestart);
        command(&mut game, Command::Confirm);

        assert_eq!(game.state(), &GameState::new());
        assert!(!game.menu().is_open());
        assert_eq!(game.input_context(), InputContext::Title);
        assert_eq!(played.lock().unwrap().last().map(String::as_str), Some(TITLE_TRACK));
    }

    //=====================================================================
    // Save and load
    //=====================================================================

    #[test]
    fn save_then_load_restores_snapshot() {
        let mut game = in_gameplay();
        command(&mut game, Command::SelectVerb(Verb::Pickup));
        game.click(center_of(&game, "dagger"));

        command(&mut game, Command::ToggleMenu);
        let saved = game.state().clone();
        command(&mut game, Command::SaveGame);
        assert_eq!(game.state().action_text(), SAVED);

        // Change something, then load it back
        command(&mut game, Command::ToggleMenu);
        command(&mut game, Command::SelectVerb(Verb::Talk));
        command(&mut game, Command::ToggleMenu);
        command(&mut game, Command::LoadGame);

        assert_eq!(game.state(), &saved);
        assert!(!game.menu().is_open());
        assert!(game.store.read(SAVE_KEY).unwrap().is_some());
    }

    #[test]
    fn load_without_save_reports_it() {
        let mut game = in_gameplay();
        command(&mut game, Command::ToggleMenu);
        command(&mut game, Command::LoadGame);

        assert_eq!(game.state().action_text(), NO_SAVE);
        assert_eq!(game.phase(), GamePhase::Gameplay);
        assert!(game.menu().is_open());
    }

    #[test]
    fn save_requires_open_menu() {
        let mut game = in_gameplay();
        command(&mut game, Command::SaveGame);
        assert!(game.store.read(SAVE_KEY).unwrap().is_none());
    }
}
