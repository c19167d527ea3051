//! Play Binary
//!
//! Runs The Brain Game in the terminal, or lets a random player run it.
//!
//! Options: --seed, --robot, --sessions

use braingame::*;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    log()?;
    let config = Config::parse();
    log::info!("starting with {:?}", config);
    let history = if config.robot {
        let fish = match config.seed {
            Some(seed) => Fish::seeded(seed.wrapping_add(1), config.sessions),
            None => Fish::new(config.sessions),
        };
        Room::new(config.engine(), fish).run()?.to_vec()
    } else {
        Room::new(config.engine(), Human).run()?.to_vec()
    };
    for summary in history.iter() {
        println!(
            "session {}: {} points ({} of {} trials won)",
            summary.session, summary.total, summary.wins, summary.trials
        );
    }
    Ok(())
}
