use crate::board::neighbors::cell_coords;

/// Returns the cell occupied by `tile` in the goal board with `cells` cells.
/// Tiles `1..cells` fill the board in row-major order, the blank (`0`) takes the last cell.
#[inline(always)] pub fn goal_cell(tile: u16, cells: usize) -> usize {
    if tile == 0 { cells - 1 } else { tile as usize - 1 }
}

/// Returns Manhattan distance between two cells of the board with given dimension.
#[inline] pub fn cell_distance(dimension: usize, first: usize, second: usize) -> u32 {
    let (first_r, first_c) = cell_coords(dimension, first);
    let (second_r, second_c) = cell_coords(dimension, second);
    (first_r.abs_diff(second_r) + first_c.abs_diff(second_c)) as u32
}

/// Returns the number of tiles (the blank excluded) which are not in their goal cells.
pub fn hamming(tiles: &[u16]) -> u32 {
    let cells = tiles.len();
    tiles.iter().enumerate()
        .filter(|(cell, t)| **t != 0 && goal_cell(**t, cells) != *cell)
        .count() as u32
}

/// Returns the sum of Manhattan distances between tiles (the blank excluded) and their goal cells.
pub fn manhattan(dimension: usize, tiles: &[u16]) -> u32 {
    let cells = tiles.len();
    tiles.iter().enumerate()
        .map(|(cell, t)| if *t == 0 { 0 } else { cell_distance(dimension, cell, goal_cell(*t, cells)) })
        .sum()
}

/// Returns Manhattan heuristic of the board obtained by moving `tile` from cell `from` to cell `to`
/// of the board whose Manhattan heuristic is `old_value`.
#[inline] pub fn update_manhattan(dimension: usize, old_value: u32, tile: u16, from: usize, to: usize) -> u32 {
    let goal = goal_cell(tile, dimension * dimension);
    old_value
        - cell_distance(dimension, from, goal)
        + cell_distance(dimension, to, goal)
}
