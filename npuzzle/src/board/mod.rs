pub mod heuristic;
pub mod neighbors;

use std::fmt;
use arrayvec::ArrayVec;
use crate::error::BoardError;
use self::heuristic::{goal_cell, hamming, manhattan};
use self::neighbors::{cell_coords, cell_nr, neighbors_of};

/// Largest supported dimension; tiles of larger boards do not fit in `u16`.
pub const MAX_DIMENSION: usize = u8::MAX as usize;

/// Arrangement of tiles on a square board.
///
/// Every `Board` holds a permutation of `0..dimension²`, where `0` denotes the blank.
/// Boards are never modified once constructed; moves produce new boards.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Board {
    dimension: usize,
    /// Indexed by cell numbers (row-major), gives tiles that occupy given board cell.
    tiles: Box<[u16]>,
    /// Cell of the blank (to speed up operations).
    blank: usize,
}

impl Board {
    /// Constructs the board of size `dimension` x `dimension` with `tiles` given in row-major order.
    ///
    /// Fails unless `tiles` is a permutation of `0..dimension²` and `dimension` is in range `2..=MAX_DIMENSION`.
    pub fn new(dimension: usize, tiles: impl IntoIterator<Item=u16>) -> Result<Self, BoardError> {
        if dimension < 2 { return Err(BoardError::DimensionTooSmall(dimension)); }
        if dimension > MAX_DIMENSION {
            return Err(BoardError::DimensionTooLarge { dimension, max: MAX_DIMENSION });
        }
        let cells = dimension * dimension;
        let tiles: Box<[u16]> = tiles.into_iter().collect();
        if tiles.len() != cells {
            return Err(BoardError::WrongTileCount { dimension, expected: cells, got: tiles.len() });
        }
        let mut seen = vec![false; cells];
        let mut blank = 0;
        for (cell, &tile) in tiles.iter().enumerate() {
            let seen_tile = seen.get_mut(tile as usize)
                .ok_or(BoardError::TileOutOfRange { tile, max: cells - 1 })?;
            if *seen_tile { return Err(BoardError::DuplicateTile(tile)); }
            *seen_tile = true;
            if tile == 0 { blank = cell; }
        }
        Ok(Self { dimension, tiles, blank })
    }

    /// Constructs the board from its rows. The number of rows gives the dimension.
    pub fn from_rows<R: AsRef<[u16]>>(rows: &[R]) -> Result<Self, BoardError> {
        let dimension = rows.len();
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.as_ref().len() != dimension) {
            return Err(BoardError::RaggedRows { row, len: r.as_ref().len(), dimension });
        }
        Self::new(dimension, rows.iter().flat_map(|r| r.as_ref().iter().copied()))
    }

    /// Constructs goal board of size `dimension` x `dimension`.
    ///
    /// # Panics
    /// If `dimension` is not in range `2..=MAX_DIMENSION`.
    pub fn goal(dimension: usize) -> Self {
        assert!((2..=MAX_DIMENSION).contains(&dimension), "unsupported board dimension {}", dimension);
        let cells = dimension * dimension;
        let tiles = (1..cells as u16).chain(std::iter::once(0)).collect();
        Self { dimension, tiles, blank: cells - 1 }
    }

    /// Returns the length of the board side.
    #[inline] pub fn dimension(&self) -> usize { self.dimension }

    /// Returns tiles in row-major order.
    #[inline] pub fn tiles(&self) -> &[u16] { &self.tiles }

    /// Returns tile at given coordinates.
    #[inline] pub fn tile_at(&self, row: usize, col: usize) -> u16 {
        self.tiles[cell_nr(self.dimension, row, col)]
    }

    /// Returns (row, col) coordinates of the blank.
    #[inline] pub fn blank_position(&self) -> (usize, usize) {
        cell_coords(self.dimension, self.blank)
    }

    /// Returns the number of the cell occupied by the blank.
    #[inline] pub fn blank_cell(&self) -> usize { self.blank }

    /// Returns the number of tiles out of their goal cells (the blank excluded).
    pub fn hamming(&self) -> u32 { hamming(&self.tiles) }

    /// Returns the sum of Manhattan distances between tiles and their goal cells (the blank excluded).
    pub fn manhattan(&self) -> u32 { manhattan(self.dimension, &self.tiles) }

    /// Returns `true` if this is the goal board.
    pub fn is_goal(&self) -> bool {
        let cells = self.tiles.len();
        self.tiles.iter().enumerate().all(|(cell, t)| goal_cell(*t, cells) == cell)
    }

    /// Returns copy of this board with tiles at cells `a` and `b` exchanged.
    fn swapped(&self, a: usize, b: usize) -> Self {
        let mut result = self.clone();
        result.tiles.swap(a, b);
        if self.blank == a { result.blank = b; } else if self.blank == b { result.blank = a; }
        result
    }

    /// Returns the board obtained by moving the blank to `new_blank` cell,
    /// together with the tile that occupied that cell (and now occupies the old blank cell).
    pub(crate) fn moved_blank(&self, new_blank: usize) -> (Self, u16) {
        (self.swapped(self.blank, new_blank), self.tiles[new_blank])
    }

    /// Returns the board obtained by exchanging the first (in row-major order) pair of
    /// horizontally adjacent tiles, none of which is the blank.
    ///
    /// Exactly one of the board and its twin can be solved.
    pub fn twin(&self) -> Self {
        let d = self.dimension;
        // each board has at least two rows, so some row does not contain the blank
        let cell = (0..d)
            .flat_map(|row| (0..d - 1).map(move |col| cell_nr(d, row, col)))
            .find(|&cell| self.tiles[cell] != 0 && self.tiles[cell + 1] != 0)
            .unwrap_or_else(|| unreachable!("{}x{} board without two adjacent tiles", d, d));
        self.swapped(cell, cell + 1)
    }

    /// Returns boards reachable by a single move, obtained by moving the blank:
    /// up, down, left, right (skipping directions blocked by the edge of the board).
    pub fn neighbors(&self) -> ArrayVec<Board, 4> {
        neighbors_of(self.dimension, self.blank).into_iter()
            .map(|cell| self.moved_blank(cell).0)
            .collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.dimension)?;
        for row in self.tiles.chunks(self.dimension) {
            for (col, tile) in row.iter().enumerate() {
                if col != 0 { f.write_str(" ")?; }
                write!(f, "{:2}", tile)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
