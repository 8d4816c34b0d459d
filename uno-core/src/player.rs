use core::fmt;
use std::fmt::Display;
use std::hash::{Hash, Hasher};

use crate::hand::Hand;

/// Opaque handle for an external actor (a chat-platform user). Equality and
/// hashing go by id only; the name is display data.
#[derive(Clone, Debug)]
pub struct Identity {
    id: u64,
    name: String,
}

impl Identity {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for Identity {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Identity {}

impl Hash for Identity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[derive(Debug)]
pub struct Player {
    identity: Identity,
    pub hand: Hand,
}

impl Player {
    pub fn new(identity: Identity, hand: Hand) -> Self {
        Self { identity, hand }
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    /// What everyone may see: the player's name and how many cards they hold.
    pub fn public_summary(&self) -> (String, usize) {
        (self.identity.name().to_string(), self.hand.len())
    }

    /// The full hand as display strings, in position order. For the player's
    /// eyes only.
    pub fn private_listing(&self) -> Vec<String> {
        self.hand.cards.iter().map(|card| card.to_string()).collect()
    }
}
