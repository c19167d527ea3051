use super::Player;
use crate::Item;
use crate::Points;
use crate::Round;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;

/// Random player. Taps a uniformly random button from the lineup and
/// plays a fixed number of sessions.
#[derive(Debug, Clone)]
pub struct Fish {
    rng: SmallRng,
    sessions: usize,
}

impl Fish {
    pub fn new(sessions: usize) -> Self {
        Self::with(SmallRng::from_os_rng(), sessions)
    }
    pub fn seeded(seed: u64, sessions: usize) -> Self {
        Self::with(SmallRng::seed_from_u64(seed), sessions)
    }
    fn with(rng: SmallRng, sessions: usize) -> Self {
        Self { rng, sessions }
    }
}

impl Player for Fish {
    fn decide(&mut self, round: &Round) -> anyhow::Result<Item> {
        round
            .lineup()
            .choose(&mut self.rng)
            .copied()
            .ok_or_else(|| anyhow::anyhow!("empty lineup"))
    }
    fn again(&mut self, total: Points) -> anyhow::Result<bool> {
        log::debug!("fish finished a session with {} points", total);
        self.sessions = self.sessions.saturating_sub(1);
        Ok(self.sessions > 0)
    }
}
