//! Session driver between an [`Engine`] and a [`Player`].
use crate::Engine;
use crate::Player;
use crate::Points;
use crate::Trials;
use crate::Verdict;
use rand::Rng;
use rand::rngs::SmallRng;

/// Record of one finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Summary {
    pub session: usize,
    pub trials: Trials,
    pub wins: usize,
    pub total: Points,
}

/// Imperative shell around the engine: asks the player for moves, shows
/// outcomes, and picks `advance` or `reset` from the game-over flag.
pub struct Room<P, R = SmallRng> {
    engine: Engine<R>,
    player: P,
    history: Vec<Summary>,
}

impl<P, R> Room<P, R>
where
    P: Player,
    R: Rng,
{
    pub fn new(engine: Engine<R>, player: P) -> Self {
        Self {
            engine,
            player,
            history: Vec::new(),
        }
    }
    pub fn engine(&self) -> &Engine<R> {
        &self.engine
    }
    pub fn history(&self) -> &[Summary] {
        &self.history
    }

    /// Play one session to game over, starting a new one if the last has ended.
    pub fn play(&mut self) -> anyhow::Result<Summary> {
        if self.engine.is_over() {
            self.engine.reset();
        }
        let mut wins = 0;
        loop {
            let chosen = self.player.decide(self.engine.round())?;
            let outcome = self.engine.evaluate(chosen)?;
            if outcome.verdict() == Some(Verdict::Won) {
                wins += 1;
            }
            self.player.notify(self.engine.round(), &outcome)?;
            if self.engine.is_over() {
                break;
            }
            self.engine.advance()?;
        }
        let summary = Summary {
            session: self.history.len() + 1,
            trials: self.engine.round().trials(),
            wins,
            total: self.engine.round().total(),
        };
        log::info!("{}", serde_json::to_string(&summary)?);
        self.history.push(summary);
        Ok(summary)
    }

    /// Play sessions until the player declines another.
    pub fn run(&mut self) -> anyhow::Result<&[Summary]> {
        loop {
            let summary = self.play()?;
            if !self.player.again(summary.total)? {
                break;
            }
        }
        Ok(self.history.as_slice())
    }
}
