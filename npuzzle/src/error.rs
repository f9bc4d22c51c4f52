use thiserror::Error;

/// Reasons for rejecting tiles given to [`crate::board::Board::new`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("board dimension must be at least 2, got {0}")]
    DimensionTooSmall(usize),

    #[error("board dimension must be at most {max}, got {dimension}")]
    DimensionTooLarge { dimension: usize, max: usize },

    #[error("{dimension}x{dimension} board needs {expected} tiles, got {got}")]
    WrongTileCount { dimension: usize, expected: usize, got: usize },

    #[error("row {row} has {len} tiles, but the board has {dimension} rows")]
    RaggedRows { row: usize, len: usize, dimension: usize },

    #[error("tile {tile} is out of range 0..={max}")]
    TileOutOfRange { tile: u16, max: usize },

    #[error("tile {0} occurs more than once")]
    DuplicateTile(u16),
}

/// Failures of the search itself.
///
/// None of them can happen for a valid board searched without an expansion limit.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    #[error("priority queue is empty before any goal was reached")]
    EmptyQueue,

    #[error("search interrupted after {expanded} expanded nodes")]
    Interrupted { expanded: u64 },
}
