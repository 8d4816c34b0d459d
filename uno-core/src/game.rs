use tracing::debug;

use crate::card::{Card, Variant};
use crate::choice::{self, ColorPrompt};
use crate::constants::STARTING_CARDS;
use crate::deck::Deck;
use crate::error::{GameError, Result};
use crate::hand::Hand;
use crate::player::{Identity, Player};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    pub(crate) fn toggled(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

/// What a variant does beyond becoming the discard reference. Skip and the
/// draw penalties are accepted but apply no effect yet; adding them here
/// leaves the legality check untouched.
#[derive(Debug, PartialEq, Eq)]
enum Effect {
    /// Becomes the discard top, nothing else.
    Neutral,
    /// Toggles the play direction, then becomes the discard top.
    ToggleDirection,
    /// Suspends on a color choice, then becomes the discard top with the
    /// chosen color.
    ChooseColor,
    /// Leaves the hand but stays off the discard pile: the card is never
    /// color-resolved, and the discard top must stay concrete.
    KeepTop,
}

fn effect_of(variant: Variant) -> Effect {
    match variant {
        Variant::Number(_) => Effect::Neutral,
        // TODO: skip the next player and apply the draw penalties.
        Variant::Skip | Variant::DrawTwo => Effect::Neutral,
        Variant::Reverse => Effect::ToggleDirection,
        Variant::ChangeColor => Effect::ChooseColor,
        Variant::WildDrawFour => Effect::KeepTop,
    }
}

/// One game's public view for status listings.
#[derive(Debug)]
pub struct StatusSnapshot {
    pub players: Vec<(String, usize)>,
    pub discard_top: Card,
    pub direction: Direction,
}

/// One running game: the seated players in mentioned order, whose turn it
/// is, which way play goes, and the discard pile top with its history.
#[derive(Debug)]
pub struct GameState {
    deck: Deck,
    players: Vec<Player>,
    turn: usize,
    direction: Direction,
    discard_top: Card,
    history: Vec<Card>,
}

impl GameState {
    /// Seats the given identities in order, deals each a starting hand, and
    /// opens with a concrete-colored discard top.
    pub fn new(identities: Vec<Identity>) -> Self {
        let deck = Deck::new();

        let players = identities
            .into_iter()
            .map(|identity| {
                let mut hand = Hand::new();
                hand.draw(&deck, STARTING_CARDS);
                Player::new(identity, hand)
            })
            .collect();

        let discard_top = deck.sample_concrete();

        Self {
            deck,
            players,
            turn: 0,
            direction: Direction::Clockwise,
            discard_top,
            history: Vec::new(),
        }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, actor: &Identity) -> Option<&Player> {
        self.players.iter().find(|p| p.identity() == actor)
    }

    pub fn player_mut(&mut self, actor: &Identity) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.identity() == actor)
    }

    pub fn discard_top(&self) -> &Card {
        &self.discard_top
    }

    pub fn history(&self) -> &[Card] {
        &self.history
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_playing(&self, actor: &Identity) -> bool {
        self.players.iter().any(|p| p.identity() == actor)
    }

    pub fn is_turn(&self, actor: &Identity) -> bool {
        self.players[self.turn % self.players.len()].identity() == actor
    }

    /// A card is playable if it is wild, or shares the discard top's color
    /// or variant.
    pub fn can_play(&self, card: &Card) -> bool {
        card.is_wild()
            || card.color() == self.discard_top.color()
            || card.variant() == self.discard_top.variant()
    }

    /// Plays the card at the actor's 1-based hand position. The hand is
    /// untouched on every error path; the card is removed only once the play
    /// is confirmed legal.
    ///
    /// A wild `ChangeColor` play suspends here: `solicit` receives the
    /// [`ColorPrompt`] for the shell to present, and the play resolves when
    /// the actor answers or the choice times out. On success the turn moves
    /// one seat in the current direction and the new discard top is
    /// returned.
    pub async fn attempt_play(
        &mut self,
        actor: &Identity,
        position: usize,
        solicit: impl FnOnce(ColorPrompt),
    ) -> Result<Card> {
        if !self.is_playing(actor) {
            return Err(GameError::NotInGame);
        }
        if !self.is_turn(actor) {
            return Err(GameError::OutOfTurn);
        }

        let player = self
            .player(actor)
            .expect("Membership was checked just above.");
        let candidate = player.hand.peek_at(position)?;
        if !self.can_play(candidate) {
            return Err(GameError::IllegalPlay);
        }

        let card = self
            .player_mut(actor)
            .expect("Membership was checked just above.")
            .hand
            .take_at(position)?;

        debug!(player = %actor, card = %card, "playing card");

        match effect_of(card.variant()) {
            Effect::Neutral => self.replace_top(card),
            Effect::ToggleDirection => {
                self.direction = self.direction.toggled();
                debug!(direction = ?self.direction, "play direction reversed");
                self.replace_top(card);
            }
            Effect::ChooseColor => {
                let (prompt, wait) = choice::color_choice(actor.clone());
                solicit(prompt);
                let color = wait.resolve().await;
                self.replace_top(card.resolved(color));
            }
            Effect::KeepTop => {}
        }

        self.advance_turn();

        Ok(self.discard_top.clone())
    }

    /// Self-draw: appends `count` sampled cards to the actor's hand.
    pub fn draw_to(&mut self, actor: &Identity, count: usize) -> Result<()> {
        let cards = self.deck.sample_many(count);

        let player = self.player_mut(actor).ok_or(GameError::NotInGame)?;
        for card in cards {
            player.hand.add(card);
        }

        Ok(())
    }

    /// Hands the actor an unplayed wild card.
    pub fn grant_wild(&mut self, actor: &Identity) -> Result<()> {
        let player = self.player_mut(actor).ok_or(GameError::NotInGame)?;
        player.hand.add(Card::wild(Variant::ChangeColor));
        Ok(())
    }

    pub fn status_snapshot(&self) -> StatusSnapshot {
        StatusSnapshot {
            players: self.players.iter().map(|p| p.public_summary()).collect(),
            discard_top: self.discard_top.clone(),
            direction: self.direction,
        }
    }

    fn replace_top(&mut self, card: Card) {
        let previous = std::mem::replace(&mut self.discard_top, card);
        self.history.push(previous);
    }

    /// The turn counter only ever grows; `is_turn` takes it mod the player
    /// count, so stepping backwards is adding `len - 1`.
    fn advance_turn(&mut self) {
        self.turn += match self.direction {
            Direction::Clockwise => 1,
            Direction::CounterClockwise => self.players.len() - 1,
        };
    }
}
