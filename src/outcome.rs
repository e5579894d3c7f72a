use crate::*;

/// Judged result of one match, from the user's point of view.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Outcome {
    UserWin,
    OpponentWin,
    Draw,
}

impl Outcome {
    /// Judge a pair of hands.
    ///
    /// Every pair is listed so that reordering or extending [`Hand`]
    /// cannot silently change a verdict.
    #[rustfmt::skip]
    pub fn resolve(user: Hand, opponent: Hand) -> Self {
        match (user, opponent) {
            (Hand::Stone,    Hand::Stone)    => Self::Draw,
            (Hand::Stone,    Hand::Scissors) => Self::UserWin,
            (Hand::Stone,    Hand::Paper)    => Self::OpponentWin,
            (Hand::Scissors, Hand::Stone)    => Self::OpponentWin,
            (Hand::Scissors, Hand::Scissors) => Self::Draw,
            (Hand::Scissors, Hand::Paper)    => Self::UserWin,
            (Hand::Paper,    Hand::Stone)    => Self::UserWin,
            (Hand::Paper,    Hand::Scissors) => Self::OpponentWin,
            (Hand::Paper,    Hand::Paper)    => Self::Draw,
        }
    }

    pub fn user_win(&self) -> bool {
        matches!(self, Self::UserWin)
    }
    pub fn opponent_win(&self) -> bool {
        matches!(self, Self::OpponentWin)
    }

    /// Recover an outcome from stored win flags.
    /// Both flags set is not a valid match.
    pub(crate) fn from_flags(user_win: bool, opponent_win: bool) -> Option<Self> {
        match (user_win, opponent_win) {
            (true, false) => Some(Self::UserWin),
            (false, true) => Some(Self::OpponentWin),
            (false, false) => Some(Self::Draw),
            (true, true) => None,
        }
    }

    /// The same match seen from the other side.
    pub fn flip(&self) -> Self {
        match self {
            Self::UserWin => Self::OpponentWin,
            Self::OpponentWin => Self::UserWin,
            Self::Draw => Self::Draw,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::UserWin => write!(f, "user_win"),
            Self::OpponentWin => write!(f, "opponent_win"),
            Self::Draw => write!(f, "draw"),
        }
    }
}
