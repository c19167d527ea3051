//! The Brain Game.
//!
//! A single-screen rock-paper-scissors trainer. Each round presents an item
//! and an objective, either beat it or lose to it, and the player scores
//! [`POINTS_PER_WIN`] for every move that meets the objective. A session
//! lasts [`TRIALS`] moves.
#[cfg(feature = "cli")]
pub mod config;
pub mod game;
pub mod players;
pub mod room;

#[cfg(feature = "cli")]
pub use config::*;
pub use game::*;
pub use players::*;
pub use room::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Points awarded for a trial and accumulated over a session.
pub type Points = u32;
/// Number of moves made in the current session.
pub type Trials = usize;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for round setup and simulation.
pub trait Arbitrary {
    /// Generate a uniformly random instance from the given source.
    fn random<R: rand::Rng + ?Sized>(rng: &mut R) -> Self;
}

// ============================================================================
// GAME PARAMETERS
// ============================================================================
/// Moves per session. The move that reaches this count ends the session.
pub const TRIALS: Trials = 10;
/// Points awarded for meeting the objective.
pub const POINTS_PER_WIN: Points = 2;
/// Screen title.
pub const TITLE: &str = "THE BRAIN GAME🧠";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, WARN to terminal
/// so the game screen is not interleaved with engine chatter.
#[cfg(feature = "cli")]
pub fn log() -> anyhow::Result<()> {
    std::fs::create_dir_all("logs")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time))?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Warn,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])?;
    Ok(())
}
