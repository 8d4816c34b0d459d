//! Turn-based Uno engine: the deck and hand model, a per-game rule state
//! machine with reversible turn order, and a timeout-bound color choice for
//! wild cards.
//!
//! The chat shell that drives the engine (transport, command parsing,
//! rendering) lives outside this crate. It supplies [`player::Identity`]
//! values for its users, calls into [`registry::GameRegistry`] and
//! [`game::GameState`], and answers wild-card color prompts through
//! [`choice::ColorSubmitter`].

pub mod card;
pub mod choice;
pub mod constants;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod player;
pub mod registry;
