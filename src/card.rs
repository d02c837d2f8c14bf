use serde::{Deserialize, Serialize};

/// One physical card slot in a deck.
///
/// Two cards with the same `pair_key` form a pair. Only [`crate::MemoryGame`]
/// changes the flags; everyone else sees copies.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Card {
    pub(crate) id: u32,
    pub(crate) pair_key: u32,
    pub(crate) face_up: bool,
    pub(crate) matched: bool,
}

impl Card {
    pub(crate) fn new(id: u32, pair_key: u32) -> Card {
        Card {
            id,
            pair_key,
            face_up: false,
            matched: false,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn pair_key(&self) -> u32 {
        self.pair_key
    }

    pub fn is_face_up(&self) -> bool {
        self.face_up
    }

    pub fn is_matched(&self) -> bool {
        self.matched
    }

    /// Face up but still waiting for (or just failed to find) its partner.
    pub fn is_revealed_unmatched(&self) -> bool {
        self.face_up && !self.matched
    }
}
