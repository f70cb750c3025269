use itertools::iproduct;
use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};
use std::collections::HashSet;
use textsweeper::{Board, GameConfig, GameState, Position, RevealState, MINE};

/// Valid configurations small enough to check exhaustively.
fn configs() -> impl Strategy<Value = GameConfig> {
    (1i64..=12, 1i64..=12)
        .prop_flat_map(|(rows, cols)| (Just(rows), Just(cols), 0..=rows * cols))
        .prop_map(|(rows, cols, mines)| GameConfig::new(rows, cols, mines).unwrap())
}

fn positions(board: &Board) -> impl Iterator<Item = Position> {
    let (rows, cols) = board.dimensions();
    iproduct!(0..rows, 0..cols).map(Position::from)
}

fn snapshot(state: &RevealState) -> HashSet<Position> {
    positions(state.board())
        .filter(|&p| state.is_revealed(p).unwrap())
        .collect()
}

/// Cells reachable from `start` through zero-count interiors.
fn flood_closure(board: &Board, start: Position) -> HashSet<Position> {
    let mut seen = HashSet::from([start]);
    let mut frontier = vec![start];
    while let Some(pos) = frontier.pop() {
        if board.count(pos).unwrap() != 0 {
            continue;
        }
        for next in board.neighbors(pos) {
            if seen.insert(next) {
                frontier.push(next);
            }
        }
    }
    seen
}

proptest! {
    #[test]
    fn placement_and_counts(config in configs(), seed in any::<u64>()) {
        let board = Board::new(config, &mut StdRng::seed_from_u64(seed));
        prop_assert_eq!(board.mine_positions().count(), config.mines());

        for pos in positions(&board) {
            let count = board.count(pos).unwrap();
            let is_mine = board.is_mine(pos).unwrap();
            prop_assert_eq!(is_mine, count == MINE);
            if !is_mine {
                let expected = board
                    .neighbors(pos)
                    .filter(|&p| board.is_mine(p).unwrap())
                    .count();
                prop_assert_eq!(count as usize, expected);
            }
        }
    }

    #[test]
    fn first_safe_reveal_floods_without_mines(
        config in configs(),
        seed in any::<u64>(),
        pick in any::<prop::sample::Index>(),
    ) {
        let board = Board::new(config, &mut StdRng::seed_from_u64(seed));
        let safe: Vec<Position> = positions(&board)
            .filter(|&p| !board.is_mine(p).unwrap())
            .collect();
        prop_assume!(!safe.is_empty());
        let start = safe[pick.index(safe.len())];

        let mut state = RevealState::new(&board);
        state.reveal(start).unwrap();

        prop_assert!(!state.is_game_over());
        prop_assert_eq!(snapshot(&state), flood_closure(&board, start));
    }

    #[test]
    fn reveals_are_monotone_and_idempotent(
        config in configs(),
        seed in any::<u64>(),
        moves in prop::collection::vec((-1i64..13, -1i64..13), 1..20),
    ) {
        let board = Board::new(config, &mut StdRng::seed_from_u64(seed));
        let mut state = RevealState::new(&board);

        for (row, col) in moves {
            let pos = Position::new(row, col);
            let before = snapshot(&state);
            if state.reveal(pos).is_err() {
                prop_assert!(!board.is_within_bounds(pos));
                prop_assert_eq!(snapshot(&state), before);
                continue;
            }
            let after = snapshot(&state);
            prop_assert!(before.is_subset(&after));

            state.reveal(pos).unwrap();
            prop_assert_eq!(snapshot(&state), after);
        }
    }

    #[test]
    fn driver_never_reports_both(
        config in configs(),
        seed in any::<u64>(),
        moves in prop::collection::vec((0i64..12, 0i64..12), 1..40),
    ) {
        let board = Board::new(config, &mut StdRng::seed_from_u64(seed));
        let mut state = RevealState::new(&board);

        for (row, col) in moves {
            if state.state() != GameState::Playing {
                break;
            }
            let _ = state.reveal(Position::new(row, col));
            match state.state() {
                GameState::Won => prop_assert!(state.is_game_won()),
                GameState::Lost => {
                    prop_assert!(state.is_game_over());
                    prop_assert!(!state.is_game_won());
                }
                GameState::Playing => {
                    prop_assert!(!state.is_game_over());
                    prop_assert!(!state.is_game_won());
                }
            }
        }
    }
}
