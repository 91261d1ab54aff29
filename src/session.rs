//! Practice session state
//!
//! A session is one bounded run over a fixed-size shuffled subset of the
//! vocabulary. Navigation wraps in both directions and always unflips the
//! card before moving so the answer cannot be read while skipping ahead.

use crate::vocab::WordPair;
use rand::seq::SliceRandom;

/// Navigation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

/// Snapshot of the current card for the display collaborator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub front: String,
    pub back: String,
    pub category: String,
    pub position: usize,
    pub total: usize,
}

/// One practice run over a shuffled subset of the vocabulary
#[derive(Debug, Clone)]
pub struct Session {
    items: Vec<WordPair>,
    position: usize,
    flipped: bool,
}

impl Session {
    /// Draw a new session of up to `size` unique words.
    ///
    /// The source vocabulary is copied and shuffled (Fisher-Yates), never
    /// mutated. Panics if the vocabulary is empty.
    pub fn start(vocabulary: &[WordPair], size: usize) -> Self {
        assert!(!vocabulary.is_empty(), "vocabulary must not be empty");

        let mut deck = vocabulary.to_vec();
        deck.shuffle(&mut rand::thread_rng());
        deck.truncate(size.max(1));

        Self {
            items: deck,
            position: 0,
            flipped: false,
        }
    }

    /// Move one card forward or backward, wrapping at either end.
    ///
    /// The card is unflipped before the position changes.
    pub fn advance(&mut self, direction: Direction) {
        self.flipped = false;

        let len = self.items.len();
        self.position = match direction {
            Direction::Next => (self.position + 1) % len,
            Direction::Previous => (self.position + len - 1) % len,
        };
    }

    /// Invert the flip state, returning the new state
    pub fn toggle_flip(&mut self) -> bool {
        self.flipped = !self.flipped;
        self.flipped
    }

    pub fn flipped(&self) -> bool {
        self.flipped
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn current(&self) -> &WordPair {
        &self.items[self.position]
    }

    pub fn items(&self) -> &[WordPair] {
        &self.items
    }

    /// The word the learner is expected to pronounce
    pub fn expected_answer(&self) -> &str {
        &self.current().target
    }

    /// Build the display snapshot for the current card
    pub fn card(&self) -> CardView {
        let word = self.current();
        CardView {
            front: word.source.clone(),
            back: word.target.clone(),
            category: word.category.clone(),
            position: self.position + 1,
            total: self.items.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab;

    #[test]
    fn test_start_draws_unique_subset() {
        let words = vocab::builtin();
        let session = Session::start(&words, 10);

        assert_eq!(session.len(), 10);
        assert_eq!(session.position(), 0);
        assert!(!session.flipped());

        // Every drawn item is a member of the source vocabulary, no repeats
        for (i, item) in session.items().iter().enumerate() {
            assert!(words.contains(item));
            assert!(!session.items()[..i].contains(item));
        }
    }

    #[test]
    fn test_start_clamps_to_vocabulary_size() {
        let words = vocab::builtin();
        let session = Session::start(&words[..4], 10);
        assert_eq!(session.len(), 4);
    }

    #[test]
    fn test_start_does_not_mutate_source() {
        let words = vocab::builtin();
        let before = words.clone();
        let _ = Session::start(&words, 10);
        assert_eq!(words, before);
    }

    #[test]
    fn test_shuffle_varies_between_sessions() {
        let words = vocab::builtin();

        // Five independent draws of 10 out of 26 are virtually never identical
        let first = Session::start(&words, 10).items().to_vec();
        let all_same = (0..5).all(|_| Session::start(&words, 10).items() == first.as_slice());
        assert!(!all_same);
    }

    #[test]
    fn test_advance_wraps_both_directions() {
        let words = vocab::builtin();
        let mut session = Session::start(&words, 5);

        session.advance(Direction::Previous);
        assert_eq!(session.position(), 4);

        session.advance(Direction::Next);
        assert_eq!(session.position(), 0);

        for _ in 0..5 {
            session.advance(Direction::Next);
        }
        assert_eq!(session.position(), 0);
    }

    #[test]
    fn test_advance_unflips_first() {
        let words = vocab::builtin();
        let mut session = Session::start(&words, 5);

        assert!(session.toggle_flip());
        session.advance(Direction::Next);
        assert!(!session.flipped());
        assert_eq!(session.position(), 1);
    }

    #[test]
    fn test_card_view_progress() {
        let words = vocab::builtin();
        let mut session = Session::start(&words, 5);
        session.advance(Direction::Next);

        let card = session.card();
        assert_eq!(card.position, 2);
        assert_eq!(card.total, 5);
        assert_eq!(card.back, session.expected_answer());
    }
}
