use super::outcome::Score;
use super::outcome::Verdict;
use crate::Arbitrary;
use crate::Item;
use crate::Objective;
use crate::POINTS_PER_WIN;
use crate::Points;
use crate::TITLE;
use crate::Trials;
use rand::seq::SliceRandom;

/// Everything the screen shows between moves.
///
/// Fields are only mutated by [`crate::Engine`]; the presentation layer
/// reads them through the accessors. Scoring rules live here as pure
/// functions of the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Round {
    pub(crate) presented: Item,
    pub(crate) objective: Objective,
    pub(crate) lineup: [Item; 3],
    pub(crate) trials: Trials,
    pub(crate) points: Points,
    pub(crate) total: Points,
    pub(crate) over: bool,
}

impl Round {
    /// Fresh session state: zeroed counters, random item, objective and lineup.
    pub fn deal<R: rand::Rng + ?Sized>(rng: &mut R) -> Self {
        let mut lineup = Item::all();
        lineup.shuffle(rng);
        Self {
            presented: Item::random(rng),
            objective: Objective::random(rng),
            lineup,
            trials: 0,
            points: 0,
            total: 0,
            over: false,
        }
    }
    /// Fixed state for a known item and objective.
    pub fn rigged(presented: Item, objective: Objective) -> Self {
        Self {
            presented,
            objective,
            lineup: Item::all(),
            trials: 0,
            points: 0,
            total: 0,
            over: false,
        }
    }

    pub fn presented(&self) -> Item {
        self.presented
    }
    pub fn objective(&self) -> Objective {
        self.objective
    }
    /// Display order of the three buttons.
    pub fn lineup(&self) -> [Item; 3] {
        self.lineup
    }
    pub fn trials(&self) -> Trials {
        self.trials
    }
    /// Points awarded by the latest trial.
    pub fn points(&self) -> Points {
        self.points
    }
    pub fn total(&self) -> Points {
        self.total
    }
    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Score `chosen` against the presented item and objective.
    /// Any choice other than the objective's target is a loss.
    pub fn score(&self, chosen: Item) -> Score {
        let verdict = match self.objective {
            Objective::Win if chosen == self.presented.beats() => Verdict::Won,
            Objective::Win => Verdict::Lost,
            Objective::Lose if chosen == self.presented.loses_to() => Verdict::Won,
            _ => Verdict::Lost,
        };
        let points = match verdict {
            Verdict::Won => POINTS_PER_WIN,
            Verdict::Lost => 0,
        };
        Score {
            presented: self.presented,
            objective: self.objective,
            chosen,
            verdict,
            points,
        }
    }
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", TITLE)?;
        writeln!(f, "You got a {} {}", self.presented, self.presented.glyph())?;
        write!(f, "Make a {} move.", self.objective)?;
        if self.over {
            write!(f, "\nTotal Points: {}", self.total)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn win_against_rock() {
        let round = Round::rigged(Item::Rock, Objective::Win);
        let score = round.score(Item::Scissors);
        assert_eq!(score.verdict, Verdict::Won);
        assert_eq!(score.points, 2);
        assert_eq!(score.versus(), Item::Scissors);
    }

    #[test]
    fn miss_against_rock() {
        let round = Round::rigged(Item::Rock, Objective::Win);
        let score = round.score(Item::Paper);
        assert_eq!(score.verdict, Verdict::Lost);
        assert_eq!(score.points, 0);
    }

    #[test]
    fn lose_to_scissors() {
        let round = Round::rigged(Item::Scissors, Objective::Lose);
        let score = round.score(Item::Rock);
        assert_eq!(score.verdict, Verdict::Won);
        assert_eq!(score.points, 2);
    }

    #[test]
    fn exactly_one_winning_choice() {
        for presented in Item::all() {
            for objective in [Objective::Win, Objective::Lose] {
                let round = Round::rigged(presented, objective);
                let wins = Item::all()
                    .into_iter()
                    .filter(|c| round.score(*c).verdict == Verdict::Won)
                    .count();
                assert_eq!(wins, 1);
            }
        }
    }

    #[test]
    fn same_item_always_loses() {
        for presented in Item::all() {
            for objective in [Objective::Win, Objective::Lose] {
                let round = Round::rigged(presented, objective);
                assert_eq!(round.score(presented).verdict, Verdict::Lost);
            }
        }
    }

    #[test]
    fn deal_is_zeroed_and_complete() {
        let ref mut rng = SmallRng::seed_from_u64(3);
        for _ in 0..32 {
            let round = Round::deal(rng);
            assert_eq!(round.trials(), 0);
            assert_eq!(round.total(), 0);
            assert!(!round.is_over());
            let mut lineup = round.lineup();
            lineup.sort();
            assert_eq!(lineup, Item::all());
        }
    }

    #[test]
    fn screen_text() {
        let mut round = Round::rigged(Item::Paper, Objective::Lose);
        assert_eq!(
            round.to_string(),
            "THE BRAIN GAME🧠\nYou got a Paper 📃\nMake a defeat move."
        );
        round.over = true;
        round.total = 8;
        assert!(round.to_string().ends_with("\nTotal Points: 8"));
    }
}
