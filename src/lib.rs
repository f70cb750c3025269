pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod position;
mod render;
pub mod session;

pub use board::{Board, MINE};
pub use config::{Difficulty, GameConfig};
pub use error::{GameError, Result};
pub use game::{CellView, GameState, RevealOutcome, RevealState};
pub use position::Position;
pub use session::{Session, SessionOutcome};
