use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GameError {
    #[error("You are already in a game")]
    AlreadyInGame,
    #[error("Please mention user(s) that you want to play the game with")]
    NoInvitees,
    #[error("You are not in a game")]
    NotInGame,
    #[error("Not your turn")]
    OutOfTurn,
    #[error("Card position needs to be from 1 to {hand_size}")]
    OutOfRange { position: usize, hand_size: usize },
    #[error("That card cannot be played on the current discard top")]
    IllegalPlay,
}

pub type Result<T, E = GameError> = std::result::Result<T, E>;
