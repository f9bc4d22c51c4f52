use arrayvec::ArrayVec;

pub const UP: usize = 0;
pub const DOWN: usize  = 1;
pub const LEFT: usize  = 2;
pub const RIGHT: usize  = 3;

/// Directions in the order in which neighbors are generated.
pub const DIRECTIONS: [usize; 4] = [UP, DOWN, LEFT, RIGHT];

/// Returns cell number = index of cell with given (row, col) coordinates in the board with given dimension.
#[inline(always)] pub fn cell_nr(dimension: usize, row: usize, col: usize) -> usize { row * dimension + col }

/// Returns (row, col) coordinates of the cell with given number in the board with given dimension.
#[inline(always)] pub fn cell_coords(dimension: usize, cell: usize) -> (usize, usize) {
    (cell / dimension, cell % dimension)
}

/// Returns the cell adjacent to `cell` in the direction `dir`, or `None` if `cell` lies at the edge of the board.
pub fn neighbor_cell(dimension: usize, cell: usize, dir: usize) -> Option<usize> {
    let (row, col) = cell_coords(dimension, cell);
    match dir {
        UP => (row != 0).then(|| cell - dimension),
        DOWN => (row + 1 != dimension).then(|| cell + dimension),
        LEFT => (col != 0).then(|| cell - 1),
        RIGHT => (col + 1 != dimension).then(|| cell + 1),
        _ => None
    }
}

/// Returns neighbors (cell numbers) of the given `cell`, in order: up, down, left, right.
pub fn neighbors_of(dimension: usize, cell: usize) -> ArrayVec<usize, 4> {
    DIRECTIONS.iter().filter_map(|dir| neighbor_cell(dimension, cell, *dir)).collect()
}

/// Returns `true` if cells `a` and `b` share a side.
pub fn are_adjacent(dimension: usize, a: usize, b: usize) -> bool {
    let (ar, ac) = cell_coords(dimension, a);
    let (br, bc) = cell_coords(dimension, b);
    ar.abs_diff(br) + ac.abs_diff(bc) == 1
}
