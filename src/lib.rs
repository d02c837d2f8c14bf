//! A find-the-pair memory card game.
//!
//! [`MemoryGame`] is the rules engine: a shuffled deck of pairs, the one
//! face-up card waiting for its partner, and match resolution.
//! [`GameSession`] wraps it with the clock, pause handling and the delay
//! that keeps a mismatch on screen. [`wasm::WasmGame`] exposes the session
//! to JavaScript together with the saved [`Preferences`].

pub mod card;
pub mod clock;
pub mod difficulty;
pub mod engine;
pub mod error;
pub mod preferences;
pub mod session;
pub mod wasm;

pub use crate::card::Card;
pub use crate::clock::GameClock;
pub use crate::difficulty::Difficulty;
pub use crate::engine::{MemoryGame, Selection};
pub use crate::error::{GameError, Result};
pub use crate::preferences::{Preferences, Records, Settings, Theme};
pub use crate::session::{GameEvent, GameSession, SoundCue, TurnState, MISMATCH_DELAY_SECS};
