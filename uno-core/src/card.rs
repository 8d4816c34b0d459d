use core::fmt;
use std::fmt::Display;

use rand::{seq::SliceRandom, thread_rng};
use strum_macros::{Display, EnumString};

#[derive(Clone, Copy, Debug, Display, EnumString, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Yellow,
    Green,
    Blue,
    Wild,
}

impl Color {
    /// The four playable colors, in the order they are presented to players.
    pub const CONCRETE: [Color; 4] = [Color::Red, Color::Yellow, Color::Green, Color::Blue];

    pub fn is_concrete(&self) -> bool {
        !matches!(self, Color::Wild)
    }

    pub(crate) fn random_concrete() -> Color {
        let mut rng = thread_rng();
        *Color::CONCRETE
            .choose(&mut rng)
            .expect("There are always four concrete colors.")
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    Number(u8),
    Reverse,
    Skip,
    DrawTwo,
    WildDrawFour,
    ChangeColor,
}

impl Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Number(number) => write!(f, "{number}"),
            Variant::Reverse => write!(f, "Reverse"),
            Variant::Skip => write!(f, "Skip"),
            Variant::DrawTwo => write!(f, "+2"),
            Variant::WildDrawFour => write!(f, "Wild +4"),
            Variant::ChangeColor => write!(f, "Wild"),
        }
    }
}

/// A single card. Value data: immutable after creation, except that a wild
/// card's color is assigned exactly once, when the play resolves, and never
/// reverts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    variant: Variant,
    color: Color,
}

impl Card {
    pub fn colored(variant: Variant, color: Color) -> Self {
        debug_assert!(color.is_concrete());
        Self { variant, color }
    }

    /// A wild-variant card; carries `Color::Wild` until played and resolved.
    pub fn wild(variant: Variant) -> Self {
        Self {
            variant,
            color: Color::Wild,
        }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn is_wild(&self) -> bool {
        self.color == Color::Wild
    }

    /// The played card with its color pinned to the chosen one.
    pub(crate) fn resolved(self, color: Color) -> Card {
        Card {
            variant: self.variant,
            color,
        }
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_wild() {
            write!(f, "{}", self.variant)
        } else {
            write!(f, "{} {}", self.color, self.variant)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn return_correct_string_for_number_card() {
        let red_3 = Card::colored(Variant::Number(3), Color::Red);
        assert_eq!(red_3.to_string(), "Red 3");

        let yellow_5 = Card::colored(Variant::Number(5), Color::Yellow);
        assert_eq!(yellow_5.to_string(), "Yellow 5");

        let blue_9 = Card::colored(Variant::Number(9), Color::Blue);
        assert_eq!(blue_9.to_string(), "Blue 9");
    }

    #[test]
    fn return_correct_string_for_action_cards() {
        let red_skip = Card::colored(Variant::Skip, Color::Red);
        assert_eq!(red_skip.to_string(), "Red Skip");

        let green_reverse = Card::colored(Variant::Reverse, Color::Green);
        assert_eq!(green_reverse.to_string(), "Green Reverse");

        let blue_draw = Card::colored(Variant::DrawTwo, Color::Blue);
        assert_eq!(blue_draw.to_string(), "Blue +2");
    }

    #[test]
    fn return_correct_string_for_wild_cards() {
        let wild = Card::wild(Variant::ChangeColor);
        assert_eq!(wild.to_string(), "Wild");

        let wild_draw = Card::wild(Variant::WildDrawFour);
        assert_eq!(wild_draw.to_string(), "Wild +4");
    }

    #[test]
    fn wild_cards_are_wild_until_resolved() {
        let wild = Card::wild(Variant::ChangeColor);
        assert!(wild.is_wild());

        let resolved = wild.resolved(Color::Green);
        assert!(!resolved.is_wild());
        assert_eq!(resolved.color(), Color::Green);
        assert_eq!(resolved.variant(), Variant::ChangeColor);
        assert_eq!(resolved.to_string(), "Green Wild");
    }

    #[test]
    fn random_concrete_never_returns_wild() {
        for _ in 0..100 {
            assert!(Color::random_concrete().is_concrete());
        }
    }
}
