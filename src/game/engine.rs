use super::outcome::Outcome;
use super::phase::Phase;
use super::round::Round;
use crate::Arbitrary;
use crate::Item;
use crate::Objective;
use crate::TRIALS;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

/// Owns the round state and the randomness that drives it.
///
/// Transitions:
/// - `Playing -> RoundEnded` on a scored move
/// - `Playing -> GameOver` on the move that reaches [`TRIALS`]
/// - `RoundEnded -> Playing` via [`Engine::advance`]
/// - `* -> Playing` via [`Engine::reset`]
#[derive(Debug, Clone)]
pub struct Engine<R = SmallRng> {
    rng: R,
    round: Round,
    phase: Phase,
}

impl Engine<SmallRng> {
    /// Engine seeded from the operating system.
    pub fn new() -> Self {
        Self::with(SmallRng::from_os_rng())
    }
    /// Engine with a reproducible sequence of rounds.
    pub fn seeded(seed: u64) -> Self {
        Self::with(SmallRng::seed_from_u64(seed))
    }
}

impl Default for Engine<SmallRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Engine<R> {
    /// Engine drawing rounds from `rng`.
    pub fn with(mut rng: R) -> Self {
        let round = Round::deal(&mut rng);
        log::debug!("new game: {} to {}", round.objective(), round.presented());
        Self {
            rng,
            round,
            phase: Phase::Playing,
        }
    }
    /// Engine whose first round presents a known item and objective.
    pub fn rigged(rng: R, presented: Item, objective: Objective) -> Self {
        Self {
            rng,
            round: Round::rigged(presented, objective),
            phase: Phase::Playing,
        }
    }

    pub fn round(&self) -> &Round {
        &self.round
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn is_over(&self) -> bool {
        self.round.is_over()
    }

    /// Play `chosen` against the current round.
    ///
    /// The move that brings the trial count to [`TRIALS`] ends the session
    /// without being scored.
    pub fn evaluate(&mut self, chosen: Item) -> anyhow::Result<Outcome> {
        if self.phase != Phase::Playing {
            anyhow::bail!("cannot play {} while {}", chosen, self.phase);
        }
        self.round.trials += 1;
        if self.round.trials == TRIALS {
            self.round.over = true;
            self.round.points = 0;
            self.phase = Phase::GameOver;
            log::debug!("game over with {} points", self.round.total);
            return Ok(Outcome::Terminal {
                total: self.round.total,
            });
        }
        let score = self.round.score(chosen);
        self.round.points = score.points;
        self.round.total += score.points;
        self.phase = Phase::RoundEnded;
        log::debug!(
            "trial {}: {} to {}, chose {} -> {:?} (+{}, total {})",
            self.round.trials,
            score.objective,
            score.presented,
            chosen,
            score.verdict,
            score.points,
            self.round.total,
        );
        Ok(Outcome::Scored(score))
    }

    /// Move on after a scored trial has been acknowledged.
    ///
    /// Draws a new objective, reshuffles the lineup and presents one of the
    /// two items other than the current one.
    pub fn advance(&mut self) -> anyhow::Result<()> {
        if self.phase != Phase::RoundEnded {
            anyhow::bail!("cannot advance while {}", self.phase);
        }
        let previous = u8::from(self.round.presented);
        let offset = self.rng.random_range(1..3u8);
        self.round.presented = Item::from((previous + offset) % 3);
        self.round.objective = Objective::random(&mut self.rng);
        self.round.lineup.shuffle(&mut self.rng);
        self.phase = Phase::Playing;
        log::debug!(
            "next round: {} to {}",
            self.round.objective,
            self.round.presented
        );
        Ok(())
    }

    /// Start a new session from any state.
    pub fn reset(&mut self) {
        self.round = Round::deal(&mut self.rng);
        self.phase = Phase::Playing;
        log::debug!(
            "reset: {} to {}",
            self.round.objective,
            self.round.presented
        );
    }
}
