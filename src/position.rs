use itertools::iproduct;
use std::fmt;

/// A cell coordinate as typed by the operator. Signed so that neighbors of
/// edge cells and negative input can be represented and bounds-checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: i64,
    pub col: i64,
}

impl Position {
    pub fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }

    pub fn neighbors(self) -> impl Iterator<Item = Position> {
        iproduct!(-1..=1, -1..=1).filter_map(move |(dr, dc)| {
            if dr == 0 && dc == 0 {
                None
            } else {
                Some(Position::new(self.row + dr, self.col + dc))
            }
        })
    }

    pub(crate) fn index(&self) -> [usize; 2] {
        [self.row as usize, self.col as usize]
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row as i64, col as i64)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_creation() {
        let pos = Position::new(5, 10);
        assert_eq!(pos.row, 5);
        assert_eq!(pos.col, 10);
        assert_eq!(Position::from((5, 10)), pos);
    }

    #[test]
    fn test_neighbors() {
        let pos = Position::new(1, 1);
        let neighbors: Vec<Position> = pos.neighbors().collect();

        assert_eq!(neighbors.len(), 8);
        assert!(!neighbors.contains(&pos));
        assert!(neighbors.contains(&Position::new(0, 0))); // Top-left
        assert!(neighbors.contains(&Position::new(0, 1))); // Top
        assert!(neighbors.contains(&Position::new(0, 2))); // Top-right
        assert!(neighbors.contains(&Position::new(1, 0))); // Left
        assert!(neighbors.contains(&Position::new(1, 2))); // Right
        assert!(neighbors.contains(&Position::new(2, 0))); // Bottom-left
        assert!(neighbors.contains(&Position::new(2, 1))); // Bottom
        assert!(neighbors.contains(&Position::new(2, 2))); // Bottom-right
    }

    #[test]
    fn test_corner_neighbors_are_unclipped() {
        let neighbors: Vec<Position> = Position::new(0, 0).neighbors().collect();
        assert_eq!(neighbors.len(), 8);
        assert!(neighbors.contains(&Position::new(-1, -1)));
    }
}
