use crate::Item;
use crate::Objective;
use crate::Points;

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, serde::Serialize)]
pub enum Verdict {
    Won,
    Lost,
}

/// A scored, non-terminal trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Score {
    pub presented: Item,
    pub objective: Objective,
    pub chosen: Item,
    pub verdict: Verdict,
    pub points: Points,
}

impl Score {
    /// The item the presented one is compared against in the remark.
    pub fn versus(&self) -> Item {
        self.objective.target(self.presented)
    }
    fn relation(&self) -> &'static str {
        match self.objective {
            Objective::Win => "beats",
            Objective::Lose => "loses to",
        }
    }
}

/// Result of one call to [`crate::Engine::evaluate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum Outcome {
    Scored(Score),
    Terminal { total: Points },
}

impl Outcome {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Terminal { .. })
    }
    pub fn points(&self) -> Points {
        match self {
            Self::Scored(score) => score.points,
            Self::Terminal { .. } => 0,
        }
    }
    pub fn verdict(&self) -> Option<Verdict> {
        match self {
            Self::Scored(score) => Some(score.verdict),
            Self::Terminal { .. } => None,
        }
    }
    pub fn title(&self) -> &'static str {
        match self {
            Self::Terminal { .. } => "Your Journey ends here",
            Self::Scored(Score {
                verdict: Verdict::Won,
                ..
            }) => "Good Job!",
            Self::Scored(Score {
                verdict: Verdict::Lost,
                ..
            }) => "Oopsie!",
        }
    }
    pub fn remark(&self) -> String {
        match self {
            Self::Terminal { total } => format!("You scored a total of {} points!", total),
            Self::Scored(score) => {
                let lead = match score.verdict {
                    Verdict::Won => format!("You won! You've just scored {} points.", score.points),
                    Verdict::Lost => String::from("You lost! No points for you dumbie!"),
                };
                format!(
                    "{} {} {} {}",
                    lead,
                    score.presented,
                    score.relation(),
                    score.versus()
                )
            }
        }
    }
    /// Label of the button that acknowledges this outcome.
    pub fn dismiss(&self) -> &'static str {
        match self {
            Self::Terminal { .. } => "Play Again",
            Self::Scored(_) => "Continue",
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\n{}", self.title(), self.remark())
    }
}
