use crate::*;

/// A janken hand: stone, scissors or paper.
///
/// Codes follow the order 0 = stone, 1 = scissors, 2 = paper. Names are
/// case-sensitive and only the canonical lowercase spelling is accepted.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Hand {
    /// Beats scissors, loses to paper.
    Stone,
    /// Beats paper, loses to stone.
    Scissors,
    /// Beats stone, loses to scissors.
    Paper,
}

impl Hand {
    /// All hands in code order.
    pub const fn all() -> [Hand; 3] {
        [Hand::Stone, Hand::Scissors, Hand::Paper]
    }

    /// Map a numeric code to a hand.
    pub fn resolve(code: i64) -> Result<Self, JankenError> {
        match code {
            0 => Ok(Hand::Stone),
            1 => Ok(Hand::Scissors),
            2 => Ok(Hand::Paper),
            x => Err(JankenError::InvalidHandCode(x)),
        }
    }

    /// Map a user-supplied name to a hand.
    pub fn parse(name: &str) -> Result<Self, JankenError> {
        match name {
            "stone" => Ok(Hand::Stone),
            "scissors" => Ok(Hand::Scissors),
            "paper" => Ok(Hand::Paper),
            x => Err(JankenError::UnknownHand(x.to_string())),
        }
    }

    pub fn code(&self) -> i64 {
        match self {
            Hand::Stone => 0,
            Hand::Scissors => 1,
            Hand::Paper => 2,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Hand::Stone => "stone",
            Hand::Scissors => "scissors",
            Hand::Paper => "paper",
        }
    }
}

impl std::str::FromStr for Hand {
    type Err = JankenError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_code() {
        for hand in Hand::all() {
            assert_eq!(Hand::resolve(hand.code()), Ok(hand));
        }
        assert_eq!(Hand::resolve(0), Ok(Hand::Stone));
        assert_eq!(Hand::resolve(1), Ok(Hand::Scissors));
        assert_eq!(Hand::resolve(2), Ok(Hand::Paper));
    }

    #[test]
    fn rejects_out_of_range_codes() {
        for code in [-1, 3, 4, 100, i64::MIN, i64::MAX] {
            assert_eq!(Hand::resolve(code), Err(JankenError::InvalidHandCode(code)));
        }
    }

    #[test]
    fn bijective_name() {
        for hand in Hand::all() {
            assert_eq!(Hand::parse(&hand.to_string()), Ok(hand));
            assert_eq!(hand.to_string().parse::<Hand>(), Ok(hand));
        }
    }

    #[test]
    fn names_are_case_sensitive() {
        for name in ["rock", "Stone", "PAPER", " paper", "scissor", ""] {
            assert_eq!(
                Hand::parse(name),
                Err(JankenError::UnknownHand(name.to_string()))
            );
        }
    }
}
