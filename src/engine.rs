use crate::card::Card;
use crate::error::{GameError, Result};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// What a call to [`MemoryGame::select_card`] did.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    /// Out of range, already face up or already matched. Nothing changed.
    Ignored,
    /// First card of a turn was turned over.
    Revealed { index: usize },
    /// Second card completed a pair. Both cards stay face up for good.
    Matched { first: usize, second: usize },
    /// Second card did not match. Both stay face up until
    /// [`MemoryGame::reset_unmatched_cards`].
    Mismatched { first: usize, second: usize },
}

impl Selection {
    /// True when the call finished a turn, matched or not.
    pub fn ends_turn(&self) -> bool {
        matches!(self, Selection::Matched { .. } | Selection::Mismatched { .. })
    }
}

/// The find-the-pair game state: a shuffled deck of pairs plus the one
/// card, if any, waiting for its partner.
#[derive(Clone, Debug)]
pub struct MemoryGame {
    number_of_pairs: usize,
    cards: Vec<Card>,
    pending_selection: Option<usize>,
}

impl MemoryGame {
    pub fn new(number_of_pairs: usize) -> Result<MemoryGame> {
        MemoryGame::with_rng(number_of_pairs, &mut rand::rng())
    }

    /// Builds the deck with the caller's RNG, so a seeded generator yields
    /// the same layout every time.
    pub fn with_rng<R: Rng + ?Sized>(number_of_pairs: usize, rng: &mut R) -> Result<MemoryGame> {
        if number_of_pairs == 0 {
            return Err(GameError::InvalidArgument(0));
        }
        let mut cards = Vec::with_capacity(number_of_pairs * 2);
        let mut next_id = 0u32;
        for pair_key in 0..number_of_pairs as u32 {
            for _ in 0..2 {
                cards.push(Card::new(next_id, pair_key));
                next_id += 1;
            }
        }
        cards.shuffle(rng);
        log::debug!("dealt {} cards ({} pairs)", cards.len(), number_of_pairs);
        Ok(MemoryGame {
            number_of_pairs,
            cards,
            pending_selection: None,
        })
    }

    /// Lays the deck out exactly as given; card ids follow the positions.
    #[cfg(test)]
    pub(crate) fn from_pair_keys(pair_keys: &[u32]) -> MemoryGame {
        let cards = pair_keys
            .iter()
            .enumerate()
            .map(|(id, &pair_key)| Card::new(id as u32, pair_key))
            .collect::<Vec<_>>();
        MemoryGame {
            number_of_pairs: cards.len() / 2,
            cards,
            pending_selection: None,
        }
    }

    pub fn number_of_pairs(&self) -> usize {
        self.number_of_pairs
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn card(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub fn pending_selection(&self) -> Option<usize> {
        self.pending_selection
    }

    pub fn matched_pairs(&self) -> usize {
        self.cards.iter().filter(|card| card.matched).count() / 2
    }

    pub fn select_card(&mut self, index: usize) -> Selection {
        match self.cards.get(index) {
            Some(card) if !card.face_up && !card.matched => {}
            _ => return Selection::Ignored,
        }

        self.cards[index].face_up = true;
        let first = match self.pending_selection.take() {
            None => {
                self.pending_selection = Some(index);
                return Selection::Revealed { index };
            }
            Some(first) => first,
        };

        if self.cards[first].pair_key == self.cards[index].pair_key {
            self.cards[first].matched = true;
            self.cards[index].matched = true;
            log::debug!("cards {} and {} matched", first, index);
            Selection::Matched { first, second: index }
        } else {
            log::debug!("cards {} and {} do not match", first, index);
            Selection::Mismatched { first, second: index }
        }
    }

    /// Turns every face-up unmatched card back down and returns how many
    /// were turned.
    pub fn reset_unmatched_cards(&mut self) -> usize {
        let mut flipped = 0;
        for card in self.cards.iter_mut().filter(|card| card.is_revealed_unmatched()) {
            card.face_up = false;
            flipped += 1;
        }
        // A lone pending card goes down with the rest.
        self.pending_selection = None;
        flipped
    }

    pub fn is_game_over(&self) -> bool {
        self.cards.iter().all(|card| card.matched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    fn index_of(game: &MemoryGame, pair_key: u32, skip: usize) -> usize {
        game.cards()
            .iter()
            .enumerate()
            .filter(|(_, card)| card.pair_key() == pair_key)
            .nth(skip)
            .map(|(index, _)| index)
            .unwrap()
    }

    fn revealed_unmatched(game: &MemoryGame) -> usize {
        game.cards().iter().filter(|card| card.is_revealed_unmatched()).count()
    }

    #[test]
    fn test_zero_pairs_is_rejected() {
        assert!(matches!(MemoryGame::new(0), Err(GameError::InvalidArgument(0))));
    }

    #[test]
    fn test_new_deck_composition() {
        for n in [1, 2, 8, 18] {
            let game = MemoryGame::new(n).unwrap();
            assert_eq!(game.number_of_pairs(), n);
            assert_eq!(game.cards().len(), 2 * n);
            assert_eq!(game.pending_selection(), None);
            for pair_key in 0..n as u32 {
                let count = game.cards().iter().filter(|c| c.pair_key() == pair_key).count();
                assert_eq!(count, 2, "pair key {} appears {} times", pair_key, count);
            }
            let ids: HashSet<u32> = game.cards().iter().map(|c| c.id()).collect();
            assert_eq!(ids.len(), 2 * n);
            assert!(game.cards().iter().all(|c| !c.is_face_up() && !c.is_matched()));
        }
    }

    #[test]
    fn test_seeded_decks_are_reproducible() {
        let a = MemoryGame::with_rng(8, &mut ChaCha8Rng::seed_from_u64(7)).unwrap();
        let b = MemoryGame::with_rng(8, &mut ChaCha8Rng::seed_from_u64(7)).unwrap();
        assert_eq!(a.cards(), b.cards());
    }

    #[test]
    fn test_shuffle_spreads_positions() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut seen_at = [0usize; 4];
        let rounds = 4000;
        for _ in 0..rounds {
            let game = MemoryGame::with_rng(2, &mut rng).unwrap();
            let position = game.cards().iter().position(|c| c.id() == 0).unwrap();
            seen_at[position] += 1;
        }
        for count in seen_at {
            // Expected 1000 per slot.
            assert!((800..1200).contains(&count), "skewed positions: {:?}", seen_at);
        }
    }

    #[test]
    fn test_first_selection_reveals() {
        let mut game = MemoryGame::from_pair_keys(&[0, 1, 0, 1]);
        assert_eq!(game.select_card(2), Selection::Revealed { index: 2 });
        assert!(game.cards()[2].is_face_up());
        assert_eq!(game.pending_selection(), Some(2));
        assert_eq!(revealed_unmatched(&game), 1);
    }

    #[test]
    fn test_full_solve_scenario() {
        let mut game = MemoryGame::from_pair_keys(&[0, 0, 1, 1]);
        assert_eq!(game.select_card(0), Selection::Revealed { index: 0 });
        assert_eq!(game.pending_selection(), Some(0));
        assert_eq!(game.select_card(1), Selection::Matched { first: 0, second: 1 });
        assert!(game.cards()[0].is_matched() && game.cards()[1].is_matched());
        assert!(game.cards()[0].is_face_up() && game.cards()[1].is_face_up());
        assert_eq!(game.pending_selection(), None);
        assert!(!game.is_game_over());
        assert_eq!(game.matched_pairs(), 1);

        // Either order works.
        game.select_card(3);
        assert_eq!(game.select_card(2), Selection::Matched { first: 3, second: 2 });
        assert!(game.is_game_over());
        assert_eq!(game.matched_pairs(), 2);
    }

    #[test]
    fn test_mismatch_then_reset() {
        let mut game = MemoryGame::from_pair_keys(&[0, 1, 0, 1]);
        game.select_card(0);
        assert_eq!(game.select_card(1), Selection::Mismatched { first: 0, second: 1 });
        assert!(game.cards()[0].is_revealed_unmatched());
        assert!(game.cards()[1].is_revealed_unmatched());
        assert_eq!(game.pending_selection(), None);

        assert_eq!(game.reset_unmatched_cards(), 2);
        assert!(!game.cards()[0].is_face_up());
        assert!(!game.cards()[1].is_face_up());
        assert!(!game.is_game_over());

        assert_eq!(game.reset_unmatched_cards(), 0);
    }

    #[test]
    fn test_reset_drops_lone_pending_card() {
        let mut game = MemoryGame::from_pair_keys(&[0, 1, 0, 1]);
        game.select_card(3);
        assert_eq!(game.reset_unmatched_cards(), 1);
        assert_eq!(game.pending_selection(), None);
        assert_eq!(game.select_card(0), Selection::Revealed { index: 0 });
    }

    #[test]
    fn test_reset_keeps_matched_cards() {
        let mut game = MemoryGame::from_pair_keys(&[0, 1, 0, 1, 2, 2]);
        game.select_card(0);
        game.select_card(2);
        game.select_card(1);
        game.select_card(4);
        game.reset_unmatched_cards();
        assert!(game.cards()[0].is_matched() && game.cards()[0].is_face_up());
        assert!(game.cards()[2].is_matched() && game.cards()[2].is_face_up());
        assert!(!game.cards()[1].is_face_up());
        assert!(!game.cards()[4].is_face_up());
    }

    #[test]
    fn test_redundant_selections_are_ignored() {
        let mut game = MemoryGame::from_pair_keys(&[0, 0, 1, 1]);
        assert_eq!(game.select_card(4), Selection::Ignored);
        assert_eq!(game.select_card(usize::MAX), Selection::Ignored);

        game.select_card(2);
        let before = game.cards().to_vec();
        assert_eq!(game.select_card(2), Selection::Ignored);
        assert_eq!(game.cards(), &before[..]);
        assert_eq!(game.pending_selection(), Some(2));

        game.select_card(3);
        let before = game.cards().to_vec();
        assert_eq!(game.select_card(3), Selection::Ignored);
        assert_eq!(game.select_card(2), Selection::Ignored);
        assert_eq!(game.cards(), &before[..]);
        assert_eq!(game.pending_selection(), None);
    }

    #[test]
    fn test_single_pair_game() {
        let mut game = MemoryGame::new(1).unwrap();
        assert!(!game.is_game_over());
        game.select_card(0);
        assert!(game.select_card(1).ends_turn());
        assert!(game.is_game_over());
    }

    #[test]
    fn test_random_deck_can_be_solved() {
        let mut game = MemoryGame::new(8).unwrap();
        for pair_key in 0..8 {
            let first = index_of(&game, pair_key, 0);
            let second = index_of(&game, pair_key, 1);
            game.select_card(first);
            assert!(matches!(game.select_card(second), Selection::Matched { .. }));
        }
        assert!(game.is_game_over());
    }
}
