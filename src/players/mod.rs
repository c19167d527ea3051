//! Presentation layer.
//!
//! A [`Player`] sees the round, picks a move and acknowledges outcomes.
//! The [`crate::Room`] doesn't care whether moves come from a terminal or
//! from a random number generator.
//!
//! ## Implementations
//!
//! - [`Fish`] — Random player for autoplay and simulation
//! - [`Human`] — Interactive terminal player (requires `cli` feature)
mod fish;
#[cfg(feature = "cli")]
mod human;

pub use fish::*;
#[cfg(feature = "cli")]
pub use human::*;

use crate::Item;
use crate::Outcome;
use crate::Points;
use crate::Round;

pub trait Player {
    /// Pick a move for the current round.
    fn decide(&mut self, round: &Round) -> anyhow::Result<Item>;
    /// Show an outcome and wait for it to be dismissed.
    /// `round` is the state right after evaluation.
    fn notify(&mut self, _: &Round, _: &Outcome) -> anyhow::Result<()> {
        Ok(())
    }
    /// Whether to start another session after one scoring `total`.
    fn again(&mut self, total: Points) -> anyhow::Result<bool>;
}
