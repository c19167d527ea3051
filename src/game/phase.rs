/// Where the engine sits between player actions.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, serde::Serialize)]
pub enum Phase {
    /// Waiting for a move.
    #[default]
    Playing,
    /// A non-terminal outcome awaits acknowledgement.
    RoundEnded,
    /// The session's last trial has been made.
    GameOver,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Playing => write!(f, "playing"),
            Self::RoundEnded => write!(f, "round ended"),
            Self::GameOver => write!(f, "game over"),
        }
    }
}
