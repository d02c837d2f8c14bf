use crate::difficulty::Difficulty;
use crate::engine::Selection;
use crate::error::GameError;
use crate::preferences::Preferences;
use crate::session::{GameEvent, GameSession, SoundCue};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = log)]
    fn console_log(s: &str);
}

struct ConsoleLogger;

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            console_log(&format!("[{}] {}", record.level(), record.args()));
        }
    }

    fn flush(&self) {}
}

static LOGGER: ConsoleLogger = ConsoleLogger;

/// Routes `log` output to the browser console. Safe to call more than once.
#[wasm_bindgen]
pub fn init_logging(verbose: bool) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        });
    }
}

fn to_js(err: GameError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn saturating_u32(secs: u64) -> u32 {
    u32::try_from(secs).unwrap_or(u32::MAX)
}

/// Applies a finished-game event to the saved records and returns the
/// sound to play for it, if sound is on.
fn apply_event(preferences: &mut Preferences, event: &GameEvent) -> Option<SoundCue> {
    if let GameEvent::Won { difficulty: Some(difficulty), elapsed_secs } = *event {
        preferences.records.update_best_time(difficulty, elapsed_secs);
    }
    if preferences.settings.sound_enabled {
        event.sound_cue()
    } else {
        None
    }
}

/// The game as seen from JavaScript: a session plus the player's saved
/// settings and records.
#[wasm_bindgen]
pub struct WasmGame {
    session: GameSession,
    preferences: Preferences,
    events: Vec<GameEvent>,
    cues: Vec<SoundCue>,
}

#[wasm_bindgen]
impl WasmGame {
    /// `preferences_json` is whatever [`WasmGame::export_preferences`]
    /// returned last time, or an empty string on first launch.
    #[wasm_bindgen(constructor)]
    pub fn new(preferences_json: &str) -> Result<WasmGame, JsValue> {
        let preferences = Preferences::from_json(preferences_json).map_err(to_js)?;
        let session = GameSession::with_difficulty(preferences.settings.difficulty()).map_err(to_js)?;
        Ok(WasmGame {
            session,
            preferences,
            events: vec![],
            cues: vec![],
        })
    }

    pub fn click(&mut self, index: usize) -> bool {
        let changed = self.session.click(index) != Selection::Ignored;
        self.absorb_events();
        changed
    }

    pub fn tick(&mut self, dt: f64) {
        self.session.tick(dt);
        self.absorb_events();
    }

    pub fn pause(&mut self) {
        self.session.pause();
    }

    pub fn resume(&mut self) {
        self.session.resume();
    }

    pub fn toggle_pause(&mut self) {
        self.session.toggle_pause();
    }

    pub fn is_paused(&self) -> bool {
        self.session.is_paused()
    }

    pub fn handle_app_backgrounded(&mut self) {
        self.session.handle_app_backgrounded();
    }

    pub fn restart(&mut self) -> Result<(), JsValue> {
        self.session.restart().map_err(to_js)?;
        self.clear_queues();
        Ok(())
    }

    /// Starts a new board for `label` (`EASY`, `MEDIUM` or `HARD`) and
    /// remembers it as the preferred size.
    pub fn set_difficulty(&mut self, label: &str) -> Result<(), JsValue> {
        let difficulty: Difficulty = label.parse().map_err(to_js)?;
        self.set_number_of_pairs(difficulty.number_of_pairs() as i32)
    }

    pub fn set_number_of_pairs(&mut self, pairs: i32) -> Result<(), JsValue> {
        let pairs = usize::try_from(pairs).map_err(|_| to_js(GameError::InvalidArgument(pairs as i64)))?;
        self.session.reset(pairs).map_err(to_js)?;
        self.preferences.settings.number_of_pairs = pairs;
        self.clear_queues();
        Ok(())
    }

    pub fn get_cards(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self.session.cards()).map_err(JsValue::from)
    }

    /// Drains everything that happened since the last call.
    pub fn take_events(&mut self) -> Result<JsValue, JsValue> {
        let events = std::mem::take(&mut self.events);
        serde_wasm_bindgen::to_value(&events).map_err(JsValue::from)
    }

    /// Names of the sounds to play, empty when sound is off.
    pub fn take_sound_cues(&mut self) -> js_sys::Array {
        self.cues
            .drain(..)
            .map(|cue| JsValue::from_str(cue.name()))
            .collect()
    }

    pub fn elapsed_secs(&self) -> u32 {
        saturating_u32(self.session.elapsed_secs())
    }

    pub fn is_game_over(&self) -> bool {
        self.session.is_game_over()
    }

    pub fn grid_side(&self) -> usize {
        self.session.grid_side()
    }

    pub fn difficulty(&self) -> String {
        self.session.difficulty().label().to_string()
    }

    pub fn best_time(&self, label: &str) -> Option<u32> {
        self.preferences
            .records
            .best_time_for_label(label)
            .map(saturating_u32)
    }

    pub fn sound_enabled(&self) -> bool {
        self.preferences.settings.sound_enabled
    }

    pub fn set_sound_enabled(&mut self, enabled: bool) {
        self.preferences.settings.sound_enabled = enabled;
    }

    pub fn music_enabled(&self) -> bool {
        self.preferences.settings.music_enabled
    }

    pub fn set_music_enabled(&mut self, enabled: bool) {
        self.preferences.settings.music_enabled = enabled;
    }

    pub fn set_theme(&mut self, theme: &str) -> Result<(), JsValue> {
        self.preferences.settings.theme = theme.parse().map_err(to_js)?;
        Ok(())
    }

    /// JSON the host should keep (e.g. in `localStorage`) and hand back to
    /// the constructor next time.
    pub fn export_preferences(&self) -> Result<String, JsValue> {
        self.preferences.to_json().map_err(to_js)
    }
}

impl WasmGame {
    fn absorb_events(&mut self) {
        for event in self.session.take_events() {
            self.cues.extend(apply_event(&mut self.preferences, &event));
            self.events.push(event);
        }
    }

    fn clear_queues(&mut self) {
        self.events.clear();
        self.cues.clear();
    }
}
