#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Cell {
    Empty,
    Piece(u8),
}

///
/// The grid itself, stored flat in row-major order.
///
/// Row 0 is the top of the board; the last row is the floor, so dropped
/// pieces settle at the highest `y` with an empty cell.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    cells: Vec<Cell>,
    height: usize,
    width: usize,
}

impl Board {
    pub(crate) fn new(height: usize, width: usize) -> Board {
        Board {
            cells: vec![Cell::Empty; height * width],
            height,
            width,
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn cell(&self, y: usize, x: usize) -> Cell {
        self.cells[y * self.width + x]
    }

    /// Drops a piece into `column`, scanning from the floor upward, and
    /// returns the row it settled in. `None` means the column is full and
    /// the board is unchanged.
    pub(crate) fn drop_into(&mut self, column: usize, player: u8) -> Option<usize> {
        for y in (0..self.height).rev() {
            if self.cells[y * self.width + column] == Cell::Empty {
                self.cells[y * self.width + column] = Cell::Piece(player);
                return Some(y);
            }
        }
        None
    }

    pub fn column_open(&self, column: usize) -> bool {
        self.cells[column] == Cell::Empty
    }

    /// Whole-board fullness check. Deliberately not a top-row scan: this
    /// stays correct even if the gravity invariant were ever broken.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Cell::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drop_lands_on_floor_then_stacks() {
        let mut board = Board::new(6, 7);
        assert_eq!(board.drop_into(3, 1), Some(5));
        assert_eq!(board.drop_into(3, 2), Some(4));
        assert_eq!(board.drop_into(3, 1), Some(3));
        assert_eq!(board.cell(5, 3), Cell::Piece(1));
        assert_eq!(board.cell(4, 3), Cell::Piece(2));
        assert_eq!(board.cell(3, 3), Cell::Piece(1));
        assert_eq!(board.cell(2, 3), Cell::Empty);
    }

    #[test]
    fn test_drop_into_full_column_returns_none() {
        let mut board = Board::new(4, 4);
        for player in [1, 2, 1, 2] {
            assert!(board.drop_into(0, player).is_some());
        }
        let before = board.clone();
        assert_eq!(board.drop_into(0, 1), None);
        assert_eq!(board, before);
        assert!(!board.column_open(0));
        assert!(board.column_open(1));
    }

    #[test]
    fn test_is_full() {
        let mut board = Board::new(4, 4);
        assert!(!board.is_full());
        for column in 0..4 {
            for player in [1, 2, 1, 2] {
                board.drop_into(column, player);
            }
        }
        assert!(board.is_full());
    }
}
