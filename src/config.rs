use crate::{error::Result, GameError};
use std::fmt;

pub const MAX_CELLS: usize = 1 << 24;

/// Board shape and mine count, validated so that mine placement always
/// terminates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    rows: usize,
    cols: usize,
    mines: usize,
}

impl GameConfig {
    pub fn new(rows: i64, cols: i64, mines: i64) -> Result<Self> {
        let invalid = || GameError::InvalidConfiguration { rows, cols, mines };

        if rows <= 0 || cols <= 0 || mines < 0 {
            return Err(invalid());
        }
        let total = rows.checked_mul(cols).ok_or_else(invalid)?;
        if total > MAX_CELLS as i64 || mines > total {
            return Err(invalid());
        }

        Ok(Self {
            rows: usize::try_from(rows).map_err(|_| invalid())?,
            cols: usize::try_from(cols).map_err(|_| invalid())?,
            mines: usize::try_from(mines).map_err(|_| invalid())?,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn mines(&self) -> usize {
        self.mines
    }

    pub fn total_cells(&self) -> usize {
        self.rows * self.cols
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub const fn dimensions(self) -> (usize, usize, usize) {
        match self {
            Difficulty::Easy => (9, 9, 10),
            Difficulty::Medium => (16, 16, 40),
            Difficulty::Hard => (16, 30, 99),
        }
    }

    pub fn config(self) -> GameConfig {
        let (rows, cols, mines) = self.dimensions();
        GameConfig { rows, cols, mines }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (rows, cols, mines) = self.dimensions();
        write!(
            f,
            "{} ({}x{} grid, {} mines)",
            self.name(),
            rows,
            cols,
            mines
        )
    }
}
