//! The eight straight-line directions a word can run in a word search grid.
//!
//! Each direction has a unit vector (`delta`), a short code (`LR`) and a
//! readable name (`Left to Right`). The report line uses both: `LR - Left to Right`.

use std::fmt;
use std::str::FromStr;

/// A straight-line reading direction.
///
/// Declaration order is the canonical scan order (see [`Direction::ALL`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum Direction {
    LeftToRight,
    RightToLeft,
    Up,
    Down,
    DiagonalUpLeft,
    DiagonalUpRight,
    DiagonalDownLeft,
    DiagonalDownRight,
}

impl Direction {
    /// All directions, in the order the scanner tries them from each cell.
    pub const ALL: [Direction; 8] = [
        Direction::LeftToRight,
        Direction::RightToLeft,
        Direction::Up,
        Direction::Down,
        Direction::DiagonalUpLeft,
        Direction::DiagonalUpRight,
        Direction::DiagonalDownLeft,
        Direction::DiagonalDownRight,
    ];

    /// Unit vector as `(row_delta, col_delta)`. Rows grow downward.
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::LeftToRight => (0, 1),
            Direction::RightToLeft => (0, -1),
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::DiagonalUpLeft => (-1, -1),
            Direction::DiagonalUpRight => (-1, 1),
            Direction::DiagonalDownLeft => (1, -1),
            Direction::DiagonalDownRight => (1, 1),
        }
    }

    /// Short code used in reports (e.g. `DUL`)
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Direction::LeftToRight => "LR",
            Direction::RightToLeft => "RL",
            Direction::Up => "U",
            Direction::Down => "D",
            Direction::DiagonalUpLeft => "DUL",
            Direction::DiagonalUpRight => "DUR",
            Direction::DiagonalDownLeft => "DDL",
            Direction::DiagonalDownRight => "DDR",
        }
    }

    /// Human-readable name used in reports (e.g. `Diagonal Up Left`)
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Direction::LeftToRight => "Left to Right",
            Direction::RightToLeft => "Right to Left",
            Direction::Up => "Up",
            Direction::Down => "Down",
            Direction::DiagonalUpLeft => "Diagonal Up Left",
            Direction::DiagonalUpRight => "Diagonal Up Right",
            Direction::DiagonalDownLeft => "Diagonal Down Left",
            Direction::DiagonalDownRight => "Diagonal Down Right",
        }
    }

    /// Move one cell from `(row, col)` in this direction.
    ///
    /// Positions are signed so that stepping off the top or left edge is
    /// representable; the caller decides whether the result is in bounds.
    #[must_use]
    pub const fn step(self, row: isize, col: isize) -> (isize, isize) {
        let (dr, dc) = self.delta();
        (row + dr, col + dc)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.code(), self.name())
    }
}

/// Error returned when a direction code is not one of the eight known codes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown direction code \"{0}\" (expected one of LR, RL, U, D, DUL, DUR, DDL, DDR)")]
pub struct UnknownDirection(pub String);

impl FromStr for Direction {
    type Err = UnknownDirection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Direction::ALL
            .into_iter()
            .find(|d| d.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| UnknownDirection(code.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_canonical_order() {
        let codes: Vec<_> = Direction::ALL.iter().map(|d| d.code()).collect();
        assert_eq!(codes, vec!["LR", "RL", "U", "D", "DUL", "DUR", "DDL", "DDR"]);
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(Direction::LeftToRight.to_string(), "LR - Left to Right");
        assert_eq!(Direction::RightToLeft.to_string(), "RL - Right to Left");
        assert_eq!(Direction::Up.to_string(), "U - Up");
        assert_eq!(Direction::Down.to_string(), "D - Down");
        assert_eq!(Direction::DiagonalUpLeft.to_string(), "DUL - Diagonal Up Left");
        assert_eq!(Direction::DiagonalUpRight.to_string(), "DUR - Diagonal Up Right");
        assert_eq!(Direction::DiagonalDownLeft.to_string(), "DDL - Diagonal Down Left");
        assert_eq!(Direction::DiagonalDownRight.to_string(), "DDR - Diagonal Down Right");
    }

    #[test]
    fn test_deltas_are_distinct_unit_vectors() {
        let deltas: HashSet<_> = Direction::ALL.iter().map(|d| d.delta()).collect();
        assert_eq!(deltas.len(), 8);
        for (dr, dc) in deltas {
            assert!((-1..=1).contains(&dr) && (-1..=1).contains(&dc));
            assert_ne!((dr, dc), (0, 0));
        }
    }

    #[test]
    fn test_opposites_cancel() {
        let pairs = [
            (Direction::LeftToRight, Direction::RightToLeft),
            (Direction::Up, Direction::Down),
            (Direction::DiagonalUpLeft, Direction::DiagonalDownRight),
            (Direction::DiagonalUpRight, Direction::DiagonalDownLeft),
        ];
        for (a, b) in pairs {
            let (r, c) = b.step(a.step(3, 3).0, a.step(3, 3).1);
            assert_eq!((r, c), (3, 3), "{a:?} and {b:?} should be opposites");
        }
    }

    #[test]
    fn test_step_can_leave_grid() {
        assert_eq!(Direction::DiagonalUpLeft.step(0, 0), (-1, -1));
        assert_eq!(Direction::Down.step(0, 0), (1, 0));
    }

    #[test]
    fn test_from_str() {
        assert_eq!("ddr".parse::<Direction>(), Ok(Direction::DiagonalDownRight));
        assert_eq!(" U ".parse::<Direction>(), Ok(Direction::Up));
        assert!("XY".parse::<Direction>().is_err());
    }
}
