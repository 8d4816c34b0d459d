use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::info;

use crate::error::{GameError, Result};
use crate::game::GameState;
use crate::player::Identity;

/// Key for one active game in the registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GameId(u64);

pub type SharedGame = Arc<Mutex<GameState>>;

/// Process-wide store of active games with an explicit create/teardown
/// lifecycle. The registry lock guards only the maps and is never held
/// across game work; mutation happens under each game's own mutex, so a
/// game suspended on a color choice never blocks lookups for other games.
#[derive(Debug, Default)]
pub struct GameRegistry {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    next_id: u64,
    games: HashMap<GameId, SharedGame>,
    memberships: HashMap<Identity, GameId>,
}

impl GameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a game seating the initiator first and the invited players in
    /// mentioned order. Every participant must be free: a player sits in at
    /// most one game at a time, so a busy invitee (or a duplicated one)
    /// fails the whole start.
    pub async fn start_game(
        &self,
        initiator: Identity,
        invited: Vec<Identity>,
    ) -> Result<SharedGame> {
        if invited.is_empty() {
            return Err(GameError::NoInvitees);
        }

        let mut identities = Vec::with_capacity(invited.len() + 1);
        identities.push(initiator);
        identities.extend(invited);

        let mut inner = self.inner.lock().await;

        let mut seen = HashSet::with_capacity(identities.len());
        for identity in &identities {
            if inner.memberships.contains_key(identity) || !seen.insert(identity) {
                return Err(GameError::AlreadyInGame);
            }
        }

        inner.next_id += 1;
        let id = GameId(inner.next_id);

        let game = Arc::new(Mutex::new(GameState::new(identities.clone())));
        inner.games.insert(id, Arc::clone(&game));
        for identity in identities {
            inner.memberships.insert(identity, id);
        }

        info!(game = ?id, "game started");

        Ok(game)
    }

    /// The game the actor currently sits in, if any. Reads only the
    /// membership index; no game mutex is touched.
    pub async fn find_game(&self, actor: &Identity) -> Option<SharedGame> {
        let inner = self.inner.lock().await;
        let id = inner.memberships.get(actor)?;
        inner.games.get(id).map(Arc::clone)
    }

    /// Tears the actor's game down, releasing every participant for new
    /// games.
    pub async fn end_game(&self, actor: &Identity) -> Result<()> {
        let mut inner = self.inner.lock().await;

        let id = *inner.memberships.get(actor).ok_or(GameError::NotInGame)?;
        inner.games.remove(&id);
        inner.memberships.retain(|_, game_id| *game_id != id);

        info!(game = ?id, "game ended");

        Ok(())
    }

    pub async fn active_games(&self) -> usize {
        self.inner.lock().await.games.len()
    }
}
