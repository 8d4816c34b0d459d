use std::time::Duration;

use tokio::{
    sync::mpsc,
    time::{timeout_at, Instant},
};
use tracing::debug;

use crate::card::Color;
use crate::player::Identity;

/// How long a wild play waits for the acting player to pick a color before
/// falling back to a random one.
pub const COLOR_CHOICE_TIMEOUT: Duration = Duration::from_secs(10);

const SELECTION_BUFFER: usize = 8;

/// Creates the two halves of a color-choice exchange: the prompt handed to
/// the shell, and the wait the engine suspends on.
pub fn color_choice(player: Identity) -> (ColorPrompt, ColorWait) {
    let (tx, rx) = mpsc::channel(SELECTION_BUFFER);
    let prompt = ColorPrompt {
        player: player.clone(),
        submitter: ColorSubmitter { tx },
    };
    let wait = ColorWait { player, rx };
    (prompt, wait)
}

/// Given to the shell when a wild play suspends: who must answer, what the
/// valid answers are, and a submitter to push selections in. Dropping the
/// prompt without keeping a submitter resolves the wait immediately via the
/// random fallback.
#[derive(Debug)]
pub struct ColorPrompt {
    player: Identity,
    submitter: ColorSubmitter,
}

impl ColorPrompt {
    pub fn player(&self) -> &Identity {
        &self.player
    }

    pub fn options(&self) -> [Color; 4] {
        Color::CONCRETE
    }

    pub fn submitter(&self) -> ColorSubmitter {
        self.submitter.clone()
    }
}

#[derive(Clone, Debug)]
pub struct ColorSubmitter {
    tx: mpsc::Sender<(Identity, Color)>,
}

impl ColorSubmitter {
    /// Pushes a selection in. Returns false once the exchange has already
    /// resolved.
    pub fn submit(&self, player: Identity, color: Color) -> bool {
        self.tx.try_send((player, color)).is_ok()
    }
}

/// The engine's half of the exchange. This is the engine's only suspension
/// point; it holds just the one play that is resolving.
#[derive(Debug)]
pub struct ColorWait {
    player: Identity,
    rx: mpsc::Receiver<(Identity, Color)>,
}

impl ColorWait {
    /// Waits for the acting player to pick one of the four concrete colors.
    /// Selections from anyone else, or of `Wild`, are ignored. The first
    /// valid selection wins and cancels the wait; on deadline, or once every
    /// submitter is gone, a uniformly random concrete color is chosen
    /// instead. Never returns `Wild`; the fallback is not an error.
    pub async fn resolve(mut self) -> Color {
        let deadline = Instant::now() + COLOR_CHOICE_TIMEOUT;

        loop {
            match timeout_at(deadline, self.rx.recv()).await {
                Ok(Some((player, color))) => {
                    if player == self.player && color.is_concrete() {
                        debug!(player = %player, ?color, "color selected");
                        return color;
                    }
                    debug!(player = %player, ?color, "ignoring invalid color selection");
                }
                Ok(None) | Err(_) => {
                    let color = Color::random_concrete();
                    debug!(player = %self.player, ?color, "color choice fell back to random");
                    return color;
                }
            }
        }
    }
}
