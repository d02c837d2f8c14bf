use crate::card::Card;
use crate::clock::GameClock;
use crate::difficulty::Difficulty;
use crate::engine::{MemoryGame, Selection};
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// How long a mismatched pair stays face up before it is turned back down.
pub const MISMATCH_DELAY_SECS: f64 = 1.0;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub enum TurnState {
    /// Clicks are forwarded to the engine.
    Open,
    /// A mismatch is on display; clicks are dropped until it is turned back.
    ShowingMismatch { remaining_secs: f64 },
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SoundCue {
    Click,
    Match,
    Mismatch,
    Victory,
}

impl SoundCue {
    pub fn name(self) -> &'static str {
        match self {
            SoundCue::Click => "click",
            SoundCue::Match => "match",
            SoundCue::Mismatch => "mismatch",
            SoundCue::Victory => "victory",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    Revealed { index: usize },
    Matched { first: usize, second: usize },
    Mismatched { first: usize, second: usize },
    FlippedBack { count: usize },
    /// `difficulty` is `None` for boards that are not one of the three
    /// standard sizes; those results are not recorded.
    Won { difficulty: Option<Difficulty>, elapsed_secs: u64 },
}

impl GameEvent {
    pub fn sound_cue(&self) -> Option<SoundCue> {
        match self {
            GameEvent::Revealed { .. } => Some(SoundCue::Click),
            GameEvent::Matched { .. } => Some(SoundCue::Match),
            GameEvent::Mismatched { .. } => Some(SoundCue::Mismatch),
            GameEvent::FlippedBack { .. } => None,
            GameEvent::Won { .. } => Some(SoundCue::Victory),
        }
    }
}

/// Drives one game for a front end: forwards clicks, keeps the clock,
/// holds mismatches on screen for [`MISMATCH_DELAY_SECS`] and queues
/// events for the host to drain with [`GameSession::take_events`].
pub struct GameSession {
    game: MemoryGame,
    clock: GameClock,
    turn: TurnState,
    events: Vec<GameEvent>,
}

impl GameSession {
    pub fn new(number_of_pairs: usize) -> Result<GameSession> {
        Ok(GameSession::from_game(MemoryGame::new(number_of_pairs)?))
    }

    pub fn with_difficulty(difficulty: Difficulty) -> Result<GameSession> {
        GameSession::new(difficulty.number_of_pairs())
    }

    pub fn from_game(game: MemoryGame) -> GameSession {
        GameSession {
            game,
            clock: GameClock::new(),
            turn: TurnState::Open,
            events: vec![],
        }
    }

    /// Throws the current board away and deals a new one. On error the
    /// current game is left as it was.
    pub fn reset(&mut self, number_of_pairs: usize) -> Result<()> {
        let game = MemoryGame::new(number_of_pairs)?;
        log::info!("new game with {} pairs", number_of_pairs);
        *self = GameSession::from_game(game);
        Ok(())
    }

    pub fn restart(&mut self) -> Result<()> {
        self.reset(self.game.number_of_pairs())
    }

    pub fn click(&mut self, index: usize) -> Selection {
        if self.clock.is_paused() || self.turn != TurnState::Open || self.game.is_game_over() {
            return Selection::Ignored;
        }
        let selection = self.game.select_card(index);
        match selection {
            Selection::Ignored => {}
            Selection::Revealed { index } => self.events.push(GameEvent::Revealed { index }),
            Selection::Matched { first, second } => {
                self.events.push(GameEvent::Matched { first, second });
                if self.game.is_game_over() {
                    self.clock.stop();
                    let elapsed_secs = self.clock.elapsed_secs();
                    log::info!("board cleared in {}s", elapsed_secs);
                    self.events.push(GameEvent::Won {
                        difficulty: Difficulty::for_pairs(self.game.number_of_pairs()),
                        elapsed_secs,
                    });
                }
            }
            Selection::Mismatched { first, second } => {
                self.events.push(GameEvent::Mismatched { first, second });
                self.turn = TurnState::ShowingMismatch {
                    remaining_secs: MISMATCH_DELAY_SECS,
                };
            }
        }
        selection
    }

    /// Advances the clock and any pending mismatch by `dt` seconds.
    pub fn tick(&mut self, dt: f64) {
        if self.clock.is_paused() {
            return;
        }
        if !self.game.is_game_over() {
            self.clock.tick(dt);
        }
        if let TurnState::ShowingMismatch { remaining_secs } = self.turn {
            let remaining_secs = remaining_secs - dt.max(0.0);
            if remaining_secs > 0.0 {
                self.turn = TurnState::ShowingMismatch { remaining_secs };
            } else {
                self.flip_back();
            }
        }
    }

    /// Turns a displayed mismatch back down right away.
    pub fn flip_back(&mut self) {
        let count = self.game.reset_unmatched_cards();
        self.turn = TurnState::Open;
        if count > 0 {
            self.events.push(GameEvent::FlippedBack { count });
        }
    }

    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn pause(&mut self) {
        self.clock.pause();
    }

    pub fn resume(&mut self) {
        self.clock.resume();
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.clock.set_paused(paused);
    }

    pub fn toggle_pause(&mut self) {
        self.clock.toggle_pause();
    }

    pub fn handle_app_backgrounded(&mut self) {
        if !self.clock.is_paused() && !self.game.is_game_over() {
            log::debug!("pausing for background");
            self.clock.pause();
        }
    }

    pub fn is_paused(&self) -> bool {
        self.clock.is_paused()
    }

    pub fn is_game_over(&self) -> bool {
        self.game.is_game_over()
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.clock.elapsed_secs()
    }

    pub fn cards(&self) -> &[Card] {
        self.game.cards()
    }

    pub fn game(&self) -> &MemoryGame {
        &self.game
    }

    pub fn turn_state(&self) -> TurnState {
        self.turn
    }

    pub fn pending_selection(&self) -> Option<usize> {
        self.game.pending_selection()
    }

    pub fn difficulty(&self) -> Difficulty {
        Difficulty::from_pairs(self.game.number_of_pairs())
    }

    pub fn grid_side(&self) -> usize {
        self.difficulty().grid_side()
    }
}
