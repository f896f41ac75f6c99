use log::{debug, trace};

use crate::board::{Board, Cell};
use crate::error::GameError;

pub const PLAYER_ONE: u8 = 1;
pub const PLAYER_TWO: u8 = 2;

/// Smallest board on which a four-in-a-row is geometrically possible.
pub const MIN_DIMENSION: usize = 4;

/// Scan directions for a winning line, as `(dy, dx)` steps: rightward,
/// downward, down-right, down-left. Kept as data so the four cases can't
/// drift apart.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// A completed four-in-a-row. `cells` are `(y, x)` coordinates ordered
/// from the line's origin along its direction.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct WinLine {
    pub player: u8,
    pub cells: [(usize, usize); 4],
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum DropResult {
    /// Piece placed, game goes on; the turn has passed to `next_player`.
    Continue {
        next_player: u8,
        row: usize,
        column: usize,
    },
    /// The placed piece completed a line. The board is now locked.
    Win {
        player: u8,
        row: usize,
        column: usize,
        cells: [(usize, usize); 4],
    },
    /// The placed piece filled the last cell with no line anywhere.
    Draw,
    /// The column had no room. Nothing changed, the turn was not consumed.
    ColumnFull,
}

///
/// All state for one game: the grid, whose turn it is, and whether the
/// game has concluded. Every game gets its own value; there is no shared
/// or process-wide state, so independent games can run side by side.
///
/// Single-threaded by contract: callers wanting to share one state across
/// threads must serialise access themselves.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct GameState {
    board: Board,
    current_player: u8,
    locked: bool,
}

impl GameState {
    /// Creates a fresh game: empty board, player 1 to move, unlocked.
    /// Dimensions below [`MIN_DIMENSION`] are a configuration error.
    pub fn new(height: usize, width: usize) -> Result<GameState, GameError> {
        if height < MIN_DIMENSION || width < MIN_DIMENSION {
            return Err(GameError::InvalidDimensions { height, width });
        }
        Ok(GameState {
            board: Board::new(height, width),
            current_player: PLAYER_ONE,
            locked: false,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> u8 {
        self.current_player
    }

    pub fn locked(&self) -> bool {
        self.locked
    }

    /// Columns that still have room. Empty once the game is locked.
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.locked {
            return Vec::new();
        }
        (0..self.board.width())
            .filter(|&column| self.board.column_open(column))
            .collect()
    }

    /// The single mutating entry point: drops the current player's piece
    /// into `column` and settles the outcome. Win is checked before draw,
    /// so a board that fills up on a winning move reports the win. On
    /// `ColumnFull` nothing changes and the turn is not consumed.
    pub fn drop_piece(&mut self, column: usize) -> Result<DropResult, GameError> {
        if self.locked {
            return Err(GameError::Locked);
        }
        if column >= self.board.width() {
            return Err(GameError::InvalidColumn {
                column,
                width: self.board.width(),
            });
        }

        let row = match self.board.drop_into(column, self.current_player) {
            Some(row) => row,
            None => {
                debug!("Player {} dropped into full column {}", self.current_player, column);
                return Ok(DropResult::ColumnFull);
            }
        };
        debug!(
            "Player {} drops into column {}, landing at row {}",
            self.current_player, column, row
        );

        if let Some(line) = self.check_win(self.current_player) {
            self.locked = true;
            return Ok(DropResult::Win {
                player: line.player,
                row,
                column,
                cells: line.cells,
            });
        }

        if self.is_draw() {
            self.locked = true;
            return Ok(DropResult::Draw);
        }

        self.current_player = match self.current_player {
            PLAYER_ONE => PLAYER_TWO,
            _ => PLAYER_ONE,
        };
        Ok(DropResult::Continue {
            next_player: self.current_player,
            row,
            column,
        })
    }

    /// Pure whole-board scan for a four-in-a-row belonging to `player`.
    /// Origins are visited row-major and directions in [`DIRECTIONS`]
    /// order, so the first line found is deterministic.
    pub fn check_win(&self, player: u8) -> Option<WinLine> {
        let height = self.board.height() as isize;
        let width = self.board.width() as isize;
        for y in 0..height {
            for x in 0..width {
                'direction: for (dy, dx) in DIRECTIONS {
                    let mut cells = [(0usize, 0usize); 4];
                    for (i, cell) in cells.iter_mut().enumerate() {
                        let cy = y + dy * i as isize;
                        let cx = x + dx * i as isize;
                        if cy < 0 || cy >= height || cx < 0 || cx >= width {
                            continue 'direction;
                        }
                        if self.board.cell(cy as usize, cx as usize) != Cell::Piece(player) {
                            continue 'direction;
                        }
                        *cell = (cy as usize, cx as usize);
                    }
                    trace!("Player {} has a line through {:?}", player, cells);
                    return Some(WinLine { player, cells });
                }
            }
        }
        None
    }

    /// True iff every cell is occupied. Only meaningful after ruling out a
    /// win: a full board with a line on it is a win, never a draw.
    pub fn is_draw(&self) -> bool {
        self.board.is_full()
    }

    /// A brand-new game with the same dimensions. The old state is simply
    /// discarded; this never fails because the dimensions were already
    /// validated when the game was created.
    pub fn reset(&self) -> GameState {
        GameState {
            board: Board::new(self.board.height(), self.board.width()),
            current_player: PLAYER_ONE,
            locked: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(state: &mut GameState, columns: &[usize]) -> Vec<DropResult> {
        columns
            .iter()
            .map(|&column| state.drop_piece(column).expect("legal drop"))
            .collect()
    }

    #[test]
    fn test_empty_board_has_no_win() {
        let state = GameState::new(6, 7).unwrap();
        assert_eq!(state.check_win(PLAYER_ONE), None);
        assert_eq!(state.check_win(PLAYER_TWO), None);
    }

    #[test]
    fn test_too_small_board_rejected() {
        assert_eq!(
            GameState::new(3, 3),
            Err(GameError::InvalidDimensions {
                height: 3,
                width: 3
            })
        );
        assert_eq!(
            GameState::new(6, 3),
            Err(GameError::InvalidDimensions {
                height: 6,
                width: 3
            })
        );
        assert!(GameState::new(4, 4).is_ok());
    }

    #[test]
    fn test_out_of_range_column_rejected() {
        let mut state = GameState::new(6, 7).unwrap();
        assert_eq!(
            state.drop_piece(7),
            Err(GameError::InvalidColumn {
                column: 7,
                width: 7
            })
        );
    }

    #[test]
    fn test_horizontal_win_found_at_leftmost_origin() {
        let mut state = GameState::new(6, 7).unwrap();
        // Player 1 builds columns 1..=3, player 2 stacks out of the way.
        play(&mut state, &[1, 6, 2, 6, 3, 6]);
        let result = state.drop_piece(4).unwrap();
        match result {
            DropResult::Win {
                player,
                row,
                column,
                cells,
            } => {
                assert_eq!(player, PLAYER_ONE);
                assert_eq!(row, 5);
                assert_eq!(column, 4);
                assert_eq!(cells, [(5, 1), (5, 2), (5, 3), (5, 4)]);
            }
            other => panic!("expected a win, got {:?}", other),
        }
        assert!(state.locked());
    }

    #[test]
    fn test_diag_left_win_detected() {
        let mut state = GameState::new(6, 7).unwrap();
        // Player 1 climbs a / staircase on columns 0..=3; the scan finds
        // it as the down-right line from its top piece at (2, 0).
        play(
            &mut state,
            &[3, 2, 2, 1, 0, 1, 1, 0, 6, 0],
        );
        let result = state.drop_piece(0).unwrap();
        match result {
            DropResult::Win { player, cells, .. } => {
                assert_eq!(player, PLAYER_ONE);
                assert_eq!(cells, [(2, 0), (3, 1), (4, 2), (5, 3)]);
            }
            other => panic!("expected a win, got {:?}", other),
        }
    }

    #[test]
    fn test_win_takes_precedence_over_draw() {
        let mut state = GameState::new(4, 4).unwrap();
        // The sixteenth drop fills the board and completes the top row
        // for player 2 at the same time.
        let results = play(
            &mut state,
            &[0, 0, 0, 1, 1, 1, 2, 0, 2, 2, 3, 1, 3, 2, 3, 3],
        );
        for result in &results[..15] {
            assert!(matches!(result, DropResult::Continue { .. }));
        }
        match &results[15] {
            DropResult::Win { player, cells, .. } => {
                assert_eq!(*player, PLAYER_TWO);
                assert_eq!(*cells, [(0, 0), (0, 1), (0, 2), (0, 3)]);
            }
            other => panic!("expected a win on the final drop, got {:?}", other),
        }
        assert!(state.is_draw());
    }

    #[test]
    fn test_legal_columns_shrink_and_empty_when_locked() {
        let mut state = GameState::new(4, 4).unwrap();
        assert_eq!(state.legal_columns(), vec![0, 1, 2, 3]);
        play(&mut state, &[2, 2, 2, 2]);
        assert_eq!(state.legal_columns(), vec![0, 1, 3]);
        // Vertical win for player 1 on column 0.
        play(&mut state, &[0, 1, 0, 1, 0, 1, 0]);
        assert!(state.locked());
        assert!(state.legal_columns().is_empty());
    }

    #[test]
    fn test_reset_discards_everything() {
        let mut state = GameState::new(5, 8).unwrap();
        play(&mut state, &[0, 1, 0, 1, 0, 1, 0]);
        assert!(state.locked());
        let fresh = state.reset();
        assert!(!fresh.locked());
        assert_eq!(fresh.current_player(), PLAYER_ONE);
        assert_eq!(fresh.board().height(), 5);
        assert_eq!(fresh.board().width(), 8);
        assert!(!fresh.board().is_full());
        assert_eq!(fresh.check_win(PLAYER_ONE), None);
    }
}
