use rand::{
    seq::{IteratorRandom, SliceRandom},
    thread_rng,
};

use crate::{
    card::{Card, Color, Variant},
    constants::*,
};

/// The fixed deck definition: one card per colored (variant, color)
/// combination plus one card per wild variant. It is a sampling population,
/// not a depleting pile; draws pick uniformly with replacement.
#[derive(Debug)]
pub struct Deck(Vec<Card>);

impl Deck {
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(TOTAL_CARDS_IN_DECK.into());

        for color in Color::CONCRETE {
            // Number Cards
            for number in 0..=MAX_NUMBER_CARD {
                cards.push(Card::colored(Variant::Number(number), color));
            }

            // Action Cards
            cards.push(Card::colored(Variant::Reverse, color));
            cards.push(Card::colored(Variant::Skip, color));
            cards.push(Card::colored(Variant::DrawTwo, color));
        }

        cards.push(Card::wild(Variant::WildDrawFour));
        cards.push(Card::wild(Variant::ChangeColor));

        Self(cards)
    }

    pub(crate) fn sample(&self) -> Card {
        let mut rng = thread_rng();
        self.0
            .choose(&mut rng)
            .expect("The deck population is never empty.")
            .clone()
    }

    pub(crate) fn sample_many(&self, count: usize) -> Vec<Card> {
        (0..count).map(|_| self.sample()).collect()
    }

    /// A uniform pick over the concrete-colored entries only. Used for the
    /// initial discard top, which must not start as an unresolvable wild.
    pub(crate) fn sample_concrete(&self) -> Card {
        let mut rng = thread_rng();
        self.0
            .iter()
            .filter(|card| !card.is_wild())
            .choose(&mut rng)
            .expect("The deck always holds colored cards.")
            .clone()
    }

    pub(crate) fn cards_count(&self) -> usize {
        self.0.len()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
