use crate::Arbitrary;

/// One of the three moves. The set is closed; only its display order varies.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, serde::Serialize)]
pub enum Item {
    Rock = 0,
    Paper = 1,
    Scissors = 2,
}

impl Item {
    pub const fn all() -> [Self; 3] {
        [Self::Rock, Self::Paper, Self::Scissors]
    }
    /// The item this one defeats.
    pub const fn beats(&self) -> Self {
        match self {
            Self::Rock => Self::Scissors,
            Self::Scissors => Self::Paper,
            Self::Paper => Self::Rock,
        }
    }
    /// The item this one is defeated by.
    pub const fn loses_to(&self) -> Self {
        match self {
            Self::Scissors => Self::Rock,
            Self::Paper => Self::Scissors,
            Self::Rock => Self::Paper,
        }
    }
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Rock => "Rock",
            Self::Paper => "Paper",
            Self::Scissors => "Scissors",
        }
    }
    pub const fn glyph(&self) -> &'static str {
        match self {
            Self::Rock => "🪨",
            Self::Paper => "📃",
            Self::Scissors => "✂️",
        }
    }
    /// Label followed by glyph, as drawn on a button.
    pub fn button(&self) -> String {
        format!("{}{}", self.label(), self.glyph())
    }
}

/// u8 isomorphism
impl From<u8> for Item {
    fn from(n: u8) -> Self {
        match n {
            0 => Self::Rock,
            1 => Self::Paper,
            2 => Self::Scissors,
            _ => panic!("Invalid item u8: {}", n),
        }
    }
}
impl From<Item> for u8 {
    fn from(item: Item) -> u8 {
        item as u8
    }
}

/// str parsing, case-insensitive, by label or initial
impl TryFrom<&str> for Item {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "rock" | "r" => Ok(Self::Rock),
            "paper" | "p" => Ok(Self::Paper),
            "scissors" | "s" => Ok(Self::Scissors),
            other => Err(anyhow::anyhow!("invalid item: {:?}", other)),
        }
    }
}

impl Arbitrary for Item {
    fn random<R: rand::Rng + ?Sized>(rng: &mut R) -> Self {
        Self::from(rng.random_range(0..3u8))
    }
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_are_inverse() {
        for item in Item::all() {
            assert_eq!(item.beats().loses_to(), item);
            assert_eq!(item.loses_to().beats(), item);
        }
    }

    #[test]
    fn tables_partition_opponents() {
        for a in Item::all() {
            for b in Item::all().into_iter().filter(|b| *b != a) {
                let hits = [a.beats(), a.loses_to()]
                    .into_iter()
                    .filter(|x| *x == b)
                    .count();
                assert_eq!(hits, 1, "{} vs {}", a, b);
            }
        }
    }

    #[test]
    fn never_beats_itself() {
        for item in Item::all() {
            assert_ne!(item.beats(), item);
            assert_ne!(item.loses_to(), item);
        }
    }

    #[test]
    fn bijective_u8() {
        for item in Item::all() {
            assert_eq!(item, Item::from(u8::from(item)));
        }
    }

    #[test]
    fn parses_labels() {
        assert_eq!(Item::try_from("Rock").unwrap(), Item::Rock);
        assert_eq!(Item::try_from(" paper ").unwrap(), Item::Paper);
        assert_eq!(Item::try_from("S").unwrap(), Item::Scissors);
    }

    #[test]
    fn rejects_unknown() {
        assert!(Item::try_from("lizard").is_err());
        assert!(Item::try_from("").is_err());
    }

    #[test]
    fn button_shows_glyph() {
        assert_eq!(Item::Rock.button(), "Rock🪨");
        assert_eq!(Item::Scissors.button(), "Scissors✂️");
    }
}
