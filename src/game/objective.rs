use crate::Arbitrary;

/// What the player must do against the presented item.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, serde::Serialize)]
pub enum Objective {
    Win,
    Lose,
}

impl Objective {
    /// The move that meets this objective against `presented`.
    pub const fn target(&self, presented: crate::Item) -> crate::Item {
        match self {
            Self::Win => presented.beats(),
            Self::Lose => presented.loses_to(),
        }
    }
}

impl Arbitrary for Objective {
    fn random<R: rand::Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.random_bool(0.5) {
            Self::Win
        } else {
            Self::Lose
        }
    }
}

impl std::fmt::Display for Objective {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Win => "win",
                Self::Lose => "defeat",
            }
        )
    }
}
