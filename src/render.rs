use crate::{game::CellView, Position, RevealState};
use std::fmt;

/// Column indices across the top, row index at the start of each line.
/// Indices are not padded, so boards wider than ten columns drift out of
/// alignment.
impl fmt::Display for RevealState<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (rows, cols) = self.dimensions();

        write!(f, "  ")?;
        for col in 0..cols {
            write!(f, "{} ", col)?;
        }
        writeln!(f)?;

        for row in 0..rows {
            write!(f, "{} ", row)?;
            for col in 0..cols {
                match self.cell_unchecked(Position::from((row, col))) {
                    CellView::Hidden => write!(f, ". ")?,
                    CellView::Mine => write!(f, "* ")?,
                    CellView::Count(n) => write!(f, "{} ", n)?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
