use crate::{board::MINE, error::Result, Board, Position};
use ndarray::Array2;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Playing,
    Won,
    Lost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Revealed(usize),
    HitMine,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellView {
    Hidden,
    Mine,
    Count(u8),
}

/// Revealed/hidden bitmap layered over a borrowed [`Board`].
#[derive(Debug, Clone)]
pub struct RevealState<'a> {
    board: &'a Board,
    revealed: Array2<bool>,
    revealed_safe: usize,
    mine_revealed: bool,
}

impl<'a> RevealState<'a> {
    pub fn new(board: &'a Board) -> Self {
        Self {
            board,
            revealed: Array2::from_elem(board.dimensions(), false),
            revealed_safe: 0,
            mine_revealed: false,
        }
    }

    pub fn board(&self) -> &'a Board {
        self.board
    }

    /// Reveals `pos`. A safe zero cell floods outwards through its connected
    /// zero region and the numbered cells bordering it; a mine reveals only
    /// itself.
    pub fn reveal(&mut self, pos: Position) -> Result<RevealOutcome> {
        let pos = self.board.check(pos)?;

        if self.revealed[pos.index()] {
            return Ok(RevealOutcome::NoChange);
        }

        if self.board.count_unchecked(pos) == MINE {
            self.revealed[pos.index()] = true;
            self.mine_revealed = true;
            debug!(row = pos.row, col = pos.col, "revealed a mine");
            return Ok(RevealOutcome::HitMine);
        }

        let mut newly_revealed = 0;
        let mut stack = vec![pos];

        while let Some(current) = stack.pop() {
            let cell = &mut self.revealed[current.index()];
            if *cell {
                continue;
            }
            *cell = true;
            newly_revealed += 1;

            // Zero cells have no mine neighbors, so the flood never pushes a mine.
            if self.board.count_unchecked(current) == 0 {
                stack.extend(
                    self.board
                        .neighbors(current)
                        .filter(|p| !self.revealed[p.index()]),
                );
            }
        }

        self.revealed_safe += newly_revealed;
        debug!(
            row = pos.row,
            col = pos.col,
            cells = newly_revealed,
            "flood reveal"
        );
        Ok(RevealOutcome::Revealed(newly_revealed))
    }

    pub fn is_game_over(&self) -> bool {
        self.mine_revealed
    }

    pub fn is_game_won(&self) -> bool {
        self.revealed_safe == self.board.safe_cells()
    }

    pub fn state(&self) -> GameState {
        if self.is_game_won() {
            GameState::Won
        } else if self.is_game_over() {
            GameState::Lost
        } else {
            GameState::Playing
        }
    }

    pub fn is_revealed(&self, pos: Position) -> Result<bool> {
        self.board.check(pos).map(|pos| self.revealed[pos.index()])
    }

    pub fn cell(&self, pos: Position) -> Result<CellView> {
        let pos = self.board.check(pos)?;
        Ok(self.cell_unchecked(pos))
    }

    pub(crate) fn cell_unchecked(&self, pos: Position) -> CellView {
        if !self.revealed[pos.index()] {
            return CellView::Hidden;
        }
        match self.board.count_unchecked(pos) {
            MINE => CellView::Mine,
            n => CellView::Count(n as u8),
        }
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed_safe + usize::from(self.mine_revealed)
    }

    pub fn dimensions(&self) -> (usize, usize) {
        self.board.dimensions()
    }
}
