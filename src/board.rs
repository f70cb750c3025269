use crate::{error::Result, GameConfig, GameError, Position};
use itertools::iproduct;
use ndarray::Array2;
use rand::Rng;
use tracing::debug;

pub const MINE: i8 = -1;

#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    mines: Array2<bool>,
    counts: Array2<i8>,
    mines_count: usize,
}

impl Board {
    pub fn new<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Self {
        let mines = place_mines(config, rng);
        Self::from_mask(mines)
    }

    /// Builds a board with mines exactly at `mine_positions`. Duplicates are
    /// collapsed.
    pub fn from_mine_positions(
        rows: usize,
        cols: usize,
        mine_positions: &[Position],
    ) -> Result<Self> {
        GameConfig::new(rows as i64, cols as i64, 0)?;

        let mut mines = Array2::from_elem((rows, cols), false);
        for &pos in mine_positions {
            if !in_bounds(rows, cols, pos) {
                return Err(GameError::InvalidCoordinate(pos));
            }
            mines[pos.index()] = true;
        }
        Ok(Self::from_mask(mines))
    }

    fn from_mask(mines: Array2<bool>) -> Self {
        let (rows, cols) = mines.dim();
        let mut counts = Array2::zeros((rows, cols));

        for (row, col) in iproduct!(0..rows, 0..cols) {
            let pos = Position::from((row, col));
            counts[pos.index()] = if mines[pos.index()] {
                MINE
            } else {
                pos.neighbors()
                    .filter(|p| in_bounds(rows, cols, *p) && mines[p.index()])
                    .count() as i8
            };
        }

        let mines_count = mines.iter().filter(|&&m| m).count();
        Self {
            mines,
            counts,
            mines_count,
        }
    }

    pub fn is_within_bounds(&self, pos: Position) -> bool {
        let (rows, cols) = self.dimensions();
        in_bounds(rows, cols, pos)
    }

    pub fn is_mine(&self, pos: Position) -> Result<bool> {
        self.check(pos).map(|pos| self.mines[pos.index()])
    }

    pub fn count(&self, pos: Position) -> Result<i8> {
        self.check(pos).map(|pos| self.counts[pos.index()])
    }

    pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        let (rows, cols) = self.dimensions();
        pos.neighbors().filter(move |p| in_bounds(rows, cols, *p))
    }

    pub fn mine_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.mines
            .indexed_iter()
            .filter(|&(_, &is_mine)| is_mine)
            .map(|(idx, _)| Position::from(idx))
    }

    pub fn dimensions(&self) -> (usize, usize) {
        self.mines.dim()
    }

    pub fn mines_count(&self) -> usize {
        self.mines_count
    }

    pub fn safe_cells(&self) -> usize {
        self.mines.len() - self.mines_count
    }

    pub(crate) fn check(&self, pos: Position) -> Result<Position> {
        if self.is_within_bounds(pos) {
            Ok(pos)
        } else {
            Err(GameError::InvalidCoordinate(pos))
        }
    }

    pub(crate) fn count_unchecked(&self, pos: Position) -> i8 {
        self.counts[pos.index()]
    }
}

fn in_bounds(rows: usize, cols: usize, pos: Position) -> bool {
    pos.row >= 0
        && pos.col >= 0
        && (pos.row as u64) < rows as u64
        && (pos.col as u64) < cols as u64
}

// Past half density the safe cells are placed instead of the mines.
fn place_mines<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Array2<bool> {
    let (rows, cols) = (config.rows(), config.cols());
    let dense = config.mines() * 2 > config.total_cells();
    let (background, target) = if dense {
        (true, config.total_cells() - config.mines())
    } else {
        (false, config.mines())
    };

    let mut mask = Array2::from_elem((rows, cols), background);
    let mut placed = 0;
    let mut draws = 0usize;

    while placed < target {
        let row = rng.gen_range(0..rows);
        let col = rng.gen_range(0..cols);
        draws += 1;

        let cell = &mut mask[[row, col]];
        if *cell == background {
            *cell = !background;
            placed += 1;
        }
    }

    debug!(
        rows,
        cols,
        mines = config.mines(),
        dense,
        retries = draws - placed,
        "placed mines"
    );
    mask
}
