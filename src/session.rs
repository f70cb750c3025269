use crate::{
    error::Result, Board, Difficulty, GameConfig, GameError, GameState, Position, RevealState,
};
use rand::Rng;
use std::collections::VecDeque;
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

pub const WIN_MESSAGE: &str = "Congratulations! You won the game!";
pub const LOSS_MESSAGE: &str = "You Lost! Game over.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    Won,
    Lost,
    /// Input ran out or stopped being numeric before the game finished.
    EndOfInput,
}

/// Process exit status for a finished session. Only a rejected
/// configuration is a failure; a broken stream just ends the game.
pub fn exit_status(result: &Result<SessionOutcome>) -> u8 {
    match result {
        Err(GameError::InvalidConfiguration { .. }) => 1,
        _ => 0,
    }
}

/// Whitespace-separated integers, independent of line breaks.
struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// `Ok(None)` at end of input.
    fn next_int(&mut self) -> Result<Option<i64>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }

        match self.pending.pop_front() {
            Some(token) => token
                .parse()
                .map(Some)
                .map_err(|_| GameError::MalformedInput(token)),
            None => Ok(None),
        }
    }
}

/// Interactive game loop over arbitrary input and output streams.
pub struct Session<R, W, G> {
    input: Tokens<R>,
    out: W,
    rng: G,
}

impl<R: BufRead, W: Write, G: Rng> Session<R, W, G> {
    pub fn new(input: R, out: W, rng: G) -> Self {
        Self {
            input: Tokens::new(input),
            out,
            rng,
        }
    }

    /// Plays one game. Only an invalid configuration or a broken stream is
    /// an error; running out of input is a normal outcome.
    pub fn run(&mut self) -> Result<SessionOutcome> {
        self.greet()?;

        let Some(config) = self.read_config()? else {
            return Ok(SessionOutcome::EndOfInput);
        };
        info!(
            rows = config.rows(),
            cols = config.cols(),
            mines = config.mines(),
            "starting game"
        );

        let board = Board::new(config, &mut self.rng);
        let mut state = RevealState::new(&board);
        write!(self.out, "{}", state)?;

        let outcome = loop {
            self.prompt("Enter row and column to reveal: ")?;
            let (Some(row), Some(col)) = (self.next_int()?, self.next_int()?) else {
                break SessionOutcome::EndOfInput;
            };

            match state.reveal(Position::new(row, col)) {
                Ok(revealed) => debug!(row, col, ?revealed, "reveal"),
                Err(err @ GameError::InvalidCoordinate(_)) => {
                    debug!(row, col, "rejected coordinate");
                    writeln!(self.out, "Error: {}", err)?;
                    continue;
                }
                Err(err) => return Err(err),
            }
            write!(self.out, "{}", state)?;

            match state.state() {
                GameState::Won => {
                    writeln!(self.out, "{}", WIN_MESSAGE)?;
                    break SessionOutcome::Won;
                }
                GameState::Lost => {
                    writeln!(self.out, "{}", LOSS_MESSAGE)?;
                    break SessionOutcome::Lost;
                }
                GameState::Playing => {}
            }
        };

        info!(?outcome, revealed = state.revealed_count(), "game finished");
        self.out.flush()?;
        Ok(outcome)
    }

    fn greet(&mut self) -> Result<()> {
        writeln!(self.out, "Hello! Welcome to Minesweeper!")?;
        writeln!(self.out)?;
        writeln!(self.out, "Suggested levels of difficulty:")?;
        writeln!(self.out)?;
        for difficulty in Difficulty::ALL {
            writeln!(self.out, "{}", difficulty)?;
        }
        writeln!(self.out)?;
        writeln!(self.out, "Insert your preferences below:")?;
        writeln!(self.out)?;
        Ok(())
    }

    fn read_config(&mut self) -> Result<Option<GameConfig>> {
        self.prompt("Enter number of rows: ")?;
        let Some(rows) = self.next_int()? else {
            return Ok(None);
        };
        self.prompt("Enter number of columns: ")?;
        let Some(cols) = self.next_int()? else {
            return Ok(None);
        };
        self.prompt("Enter number of mines: ")?;
        let Some(mines) = self.next_int()? else {
            return Ok(None);
        };

        GameConfig::new(rows, cols, mines).map(Some)
    }

    fn prompt(&mut self, text: &str) -> Result<()> {
        write!(self.out, "{}", text)?;
        self.out.flush()?;
        Ok(())
    }

    /// Malformed input ends the session the same way end of input does.
    fn next_int(&mut self) -> Result<Option<i64>> {
        match self.input.next_int() {
            Err(GameError::MalformedInput(token)) => {
                warn!(%token, "non-integer input, ending session");
                Ok(None)
            }
            other => other,
        }
    }
}
