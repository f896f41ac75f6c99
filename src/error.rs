/// Rule violations the engine reports to its caller. A full column is not
/// among these: it is an ordinary `DropResult` variant, not an error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("board must be at least 4x4 for a four-in-a-row to fit, got {height}x{width}")]
    InvalidDimensions { height: usize, width: usize },

    #[error("column {column} is out of range for a board {width} wide")]
    InvalidColumn { column: usize, width: usize },

    #[error("the game has already ended")]
    Locked,
}
