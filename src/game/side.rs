use serde::{Deserialize, Serialize};

use super::board::{Piece, ROWS};

/// One of the two players.
///
/// `First` starts on rows 0..3 and advances toward row 7; `Second` starts on
/// rows 5..8 and advances toward row 0. First moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    First,
    Second,
}

impl Side {
    /// Get the other side
    pub fn other(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    /// Row delta of an un-crowned piece's forward step
    pub fn forward(self) -> i8 {
        match self {
            Side::First => 1,
            Side::Second => -1,
        }
    }

    /// Row on which this side's men are crowned
    pub fn far_rank(self) -> usize {
        match self {
            Side::First => ROWS - 1,
            Side::Second => 0,
        }
    }

    /// An un-crowned piece of this side
    pub fn man(self) -> Piece {
        Piece::man(self)
    }

    /// A crowned piece of this side
    pub fn king(self) -> Piece {
        Piece::king(self)
    }

    /// Colour used on the suggestion-service wire
    pub fn color_name(self) -> &'static str {
        match self {
            Side::First => "black",
            Side::Second => "red",
        }
    }

    /// Get side name for display
    pub fn name(self) -> &'static str {
        match self {
            Side::First => "Black",
            Side::Second => "Red",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_side() {
        assert_eq!(Side::First.other(), Side::Second);
        assert_eq!(Side::Second.other(), Side::First);
    }

    #[test]
    fn test_far_rank_opposes_direction() {
        assert_eq!(Side::First.forward(), 1);
        assert_eq!(Side::First.far_rank(), 7);
        assert_eq!(Side::Second.forward(), -1);
        assert_eq!(Side::Second.far_rank(), 0);
    }

    #[test]
    fn test_side_names() {
        assert_eq!(Side::First.name(), "Black");
        assert_eq!(Side::Second.color_name(), "red");
    }
}
