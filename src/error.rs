use crate::Position;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Invalid configuration: {rows}x{cols} board with {mines} mines")]
    InvalidConfiguration { rows: i64, cols: i64, mines: i64 },
    #[error("Position {0} is out of bounds")]
    InvalidCoordinate(Position),
    #[error("Expected an integer, got {0:?}")]
    MalformedInput(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = GameError::InvalidConfiguration {
            rows: 3,
            cols: 3,
            mines: 10,
        };
        assert_eq!(
            err.to_string(),
            "Invalid configuration: 3x3 board with 10 mines"
        );

        let err = GameError::InvalidCoordinate(Position::new(-1, 4));
        assert_eq!(err.to_string(), "Position (-1, 4) is out of bounds");
    }
}
