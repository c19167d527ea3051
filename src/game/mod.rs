//! Round state and move evaluation.
mod engine;
mod item;
mod objective;
mod outcome;
mod phase;
mod round;

pub use engine::*;
pub use item::*;
pub use objective::*;
pub use outcome::*;
pub use phase::*;
pub use round::*;
