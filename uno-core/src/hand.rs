use crate::card::Card;
use crate::deck::Deck;
use crate::error::{GameError, Result};

/// A player's cards, in draw order. Positions supplied by callers are
/// 1-based; the first card in the listing is position 1.
#[derive(Debug, Default)]
pub struct Hand {
    pub cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `count` cards sampled with replacement from the deck
    /// population. Always succeeds.
    pub fn draw(&mut self, deck: &Deck, count: usize) {
        self.cards.extend(deck.sample_many(count));
    }

    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Looks at the card at a 1-based position without removing it.
    pub fn peek_at(&self, position: usize) -> Result<&Card> {
        self.index(position).map(|index| &self.cards[index])
    }

    /// Removes and returns the card at a 1-based position; later cards shift
    /// down one position. Callers confirm legality before removing.
    pub fn take_at(&mut self, position: usize) -> Result<Card> {
        let index = self.index(position)?;
        Ok(self.cards.remove(index))
    }

    fn index(&self, position: usize) -> Result<usize> {
        if position < 1 || position > self.cards.len() {
            return Err(GameError::OutOfRange {
                position,
                hand_size: self.cards.len(),
            });
        }
        Ok(position - 1)
    }
}
