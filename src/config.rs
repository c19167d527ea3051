//! Command-line configuration for the `play` binary.
use crate::Engine;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about = "Beat or lose to the item you're given", long_about = None)]
pub struct Config {
    #[arg(long, help = "Seed the round generator for a reproducible game")]
    pub seed: Option<u64>,
    #[arg(long, help = "Let a random player tap the buttons")]
    pub robot: bool,
    #[arg(
        long,
        default_value_t = 1,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..),
        requires = "robot",
        help = "Sessions the random player plays"
    )]
    pub sessions: usize,
}

impl Config {
    pub fn engine(&self) -> Engine {
        match self.seed {
            Some(seed) => Engine::seeded(seed),
            None => Engine::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::try_parse_from(["play"]).unwrap();
        assert_eq!(config.seed, None);
        assert!(!config.robot);
        assert_eq!(config.sessions, 1);
    }

    #[test]
    fn robot_sessions() {
        let config =
            Config::try_parse_from(["play", "--robot", "--sessions", "3", "--seed", "7"]).unwrap();
        assert!(config.robot);
        assert_eq!(config.sessions, 3);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn rejects_zero_sessions() {
        assert!(Config::try_parse_from(["play", "--robot", "--sessions", "0"]).is_err());
    }

    #[test]
    fn sessions_need_robot() {
        assert!(Config::try_parse_from(["play", "--sessions", "3"]).is_err());
    }

    #[test]
    fn seeded_engines_agree() {
        let config = Config::try_parse_from(["play", "--seed", "99"]).unwrap();
        assert_eq!(config.engine().round(), config.engine().round());
    }
}
