use crate::card::Color;

/// Cards dealt to each player when a game starts.
pub const STARTING_CARDS: usize = 5;

pub(crate) const MAX_NUMBER_CARD: u8 = 9;

pub(crate) const NUMBER_VARIANTS_PER_COLOR: u8 = MAX_NUMBER_CARD + 1;
// Reverse, Skip, +2
pub(crate) const ACTION_VARIANTS_PER_COLOR: u8 = 3;
pub(crate) const COLORED_VARIANTS_PER_COLOR: u8 =
    NUMBER_VARIANTS_PER_COLOR + ACTION_VARIANTS_PER_COLOR;
// Wild +4, Wild
pub(crate) const WILD_CARDS_IN_DECK: u8 = 2;

pub(crate) const COLORED_CARDS_IN_DECK: u8 =
    COLORED_VARIANTS_PER_COLOR * Color::CONCRETE.len() as u8;
pub(crate) const TOTAL_CARDS_IN_DECK: u8 = COLORED_CARDS_IN_DECK + WILD_CARDS_IN_DECK;
