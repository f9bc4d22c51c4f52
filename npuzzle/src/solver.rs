use arrayvec::ArrayVec;
use log::{debug, trace};
use crate::board::Board;
use crate::board::heuristic::update_manhattan;
use crate::board::neighbors::neighbors_of;
use crate::error::SolverError;
use crate::min_pq::MinPQ;
use crate::search_node::{NodeId, SearchTree};
use crate::stats::SearchStatsCollector;

/// A* search started from a single board.
struct Search {
    tree: SearchTree,
    queue: MinPQ,
}

impl Search {
    fn new(initial: Board) -> Self {
        let mut tree = SearchTree::new();
        let mut queue = MinPQ::new();
        let root = tree.push_root(initial);
        queue.insert(root, &tree[root]);
        Self { tree, queue }
    }

    /// Removes the most promising node from the queue.
    #[inline] fn pop(&mut self) -> Result<NodeId, SolverError> {
        self.queue.delete_min()
    }

    /// Manhattan heuristic is 0 only if every tile, and so also the blank, is in its goal cell.
    #[inline] fn is_goal(&self, id: NodeId) -> bool {
        self.tree[id].manhattan == 0
    }

    /// Pushes to the queue all neighbors of the board of `id`, except the board `id` was reached from.
    fn expand(&mut self, id: NodeId, stats: &mut impl SearchStatsCollector) {
        let node = &self.tree[id];
        let dimension = node.board.dimension();
        let blank = node.board.blank_cell();
        // only moving the blank back to its previous cell gives the previous board
        let previous_blank = self.tree.previous_board(id).map(Board::blank_cell);
        let mut children = ArrayVec::<(Board, u32), 4>::new();
        for neighbor_cell in neighbors_of(dimension, blank) {
            if previous_blank == Some(neighbor_cell) {
                stats.pruned();
                continue;
            }
            let (board, tile) = node.board.moved_blank(neighbor_cell);
            // tile was at neighbor_cell and now is at blank cell
            let manhattan = update_manhattan(dimension, node.manhattan, tile, neighbor_cell, blank);
            children.push((board, manhattan));
        }
        for (board, manhattan) in children {
            let child = self.tree.push_child(id, board, manhattan);
            self.queue.insert(child, &self.tree[child]);
            stats.enqueued();
        }
    }
}

/// Finds the shortest solution of a sliding puzzle or detects that there is no solution.
///
/// Two A* searches run in lockstep, one from the initial board and one from its twin.
/// Only one of them can reach the goal, and which one tells whether the initial board is solvable.
/// The whole search is done during construction.
#[derive(Clone, Debug)]
pub struct Solver {
    /// Boards from the initial one to the goal, `None` if the initial board cannot be solved.
    solution: Option<Vec<Board>>,
}

impl Solver {
    /// Solves `initial`.
    #[inline] pub fn new(initial: Board) -> Result<Self, SolverError> {
        Self::with_stats(initial, &mut ())
    }

    /// Solves `initial`, collecting statistics during search.
    ///
    /// The search ends with [`SolverError::Interrupted`] if `stats` cancels it.
    /// [`SolverError::EmptyQueue`] indicates a bug, as one of the searches always reaches the goal.
    pub fn with_stats(initial: Board, stats: &mut impl SearchStatsCollector) -> Result<Self, SolverError> {
        if initial.is_goal() {
            return Ok(Self { solution: Some(vec![initial]) });
        }
        let twin = initial.twin();
        if twin.is_goal() {
            debug!("the twin of the initial board is the goal, no solution");
            return Ok(Self { solution: None });
        }
        debug!("searching from {}x{} board, Manhattan heuristic {}, twin {}",
               initial.dimension(), initial.dimension(), initial.manhattan(), twin.manhattan());
        let mut search = Search::new(initial);
        let mut twin_search = Search::new(twin);
        let mut expanded = 0u64;
        loop {
            let node = search.pop()?;
            let twin_node = twin_search.pop()?;
            if twin_search.is_goal(twin_node) {
                debug!("the twin reached the goal in {} moves after {} expansions, no solution",
                       twin_search.tree[twin_node].moves, expanded);
                return Ok(Self { solution: None });
            }
            if search.is_goal(node) {
                debug!("goal reached in {} moves after {} expansions", search.tree[node].moves, expanded);
                return Ok(Self { solution: Some(search.tree.path_to(node)) });
            }
            trace!("expanding nodes with priorities {} and {} (twin), {} and {} queued",
                   search.tree[node].priority(), twin_search.tree[twin_node].priority(),
                   search.queue.len(), twin_search.queue.len());
            for (side, id) in [(&mut search, node), (&mut twin_search, twin_node)] {
                if !stats.expanded() {
                    debug!("search cancelled after {} expansions", expanded);
                    return Err(SolverError::Interrupted { expanded });
                }
                expanded += 1;
                side.expand(id, stats);
            }
        }
    }

    /// Returns `true` if the initial board can be solved.
    #[inline] pub fn is_solvable(&self) -> bool { self.solution.is_some() }

    /// Returns the minimal number of moves needed to solve the initial board, or -1 if it cannot be solved.
    pub fn moves(&self) -> i32 {
        self.solution.as_ref().map_or(-1, |s| s.len() as i32 - 1)
    }

    /// Returns boards of the shortest solution, from the initial board to the goal (both included),
    /// or `None` if the initial board cannot be solved.
    #[inline] pub fn solution(&self) -> Option<&[Board]> { self.solution.as_deref() }

    #[inline] pub fn into_solution(self) -> Option<Vec<Board>> { self.solution }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashMap, VecDeque};
    use crate::board::tests::random_walk;
    use crate::stats::{Limited, SearchAllStats};
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    /// Returns the number of moves between the goal and every board reachable from it.
    fn distances_from_goal(dimension: usize) -> HashMap<Board, i32> {
        let goal = Board::goal(dimension);
        let mut distances = HashMap::from([(goal.clone(), 0)]);
        let mut queue = VecDeque::from([goal]);
        while let Some(board) = queue.pop_front() {
            let distance = distances[&board];
            for neighbor in board.neighbors() {
                if !distances.contains_key(&neighbor) {
                    distances.insert(neighbor.clone(), distance + 1);
                    queue.push_back(neighbor);
                }
            }
        }
        distances
    }

    fn solvable(board: &Board) -> bool {
        Solver::new(board.clone()).unwrap().is_solvable()
    }

    /// Checks that `solution` starts at `initial`, ends at the goal and consists of single moves.
    fn check_solution(initial: &Board, solution: &[Board]) {
        assert_eq!(solution.first(), Some(initial));
        assert!(solution.last().unwrap().is_goal());
        for pair in solution.windows(2) {
            assert!(pair[0].neighbors().contains(&pair[1]), "{} -> {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_goal() {
        let goal = Board::new(3, [1, 2, 3, 4, 5, 6, 7, 8, 0]).unwrap();
        let solver = Solver::new(goal.clone()).unwrap();
        assert!(solver.is_solvable());
        assert_eq!(solver.moves(), 0);
        assert_eq!(solver.solution(), Some(&[goal][..]));
    }

    #[test]
    fn test_solvable_33() {
        // 8 1 3
        // 4 0 2
        // 7 6 5
        let initial = Board::new(3, [8, 1, 3,  4, 0, 2,  7, 6, 5]).unwrap();
        let solver = Solver::new(initial.clone()).unwrap();
        assert!(solver.is_solvable());
        assert_eq!(solver.moves(), 14);
        let solution = solver.solution().unwrap();
        assert_eq!(solution.len(), 15);
        check_solution(&initial, solution);
    }

    #[test]
    fn test_solvable_33_short() {
        // 0 1 3
        // 4 2 5
        // 7 8 6
        let initial = Board::new(3, [0, 1, 3,  4, 2, 5,  7, 8, 6]).unwrap();
        let solution = Solver::new(initial.clone()).unwrap().into_solution().unwrap();
        assert_eq!(solution, vec![
            initial.clone(),
            Board::new(3, [1, 0, 3,  4, 2, 5,  7, 8, 6]).unwrap(),
            Board::new(3, [1, 2, 3,  4, 0, 5,  7, 8, 6]).unwrap(),
            Board::new(3, [1, 2, 3,  4, 5, 0,  7, 8, 6]).unwrap(),
            Board::goal(3),
        ]);
    }

    #[test]
    fn test_unsolvable_33() {
        let initial = Board::new(3, [1, 2, 3,  4, 5, 6,  8, 7, 0]).unwrap();
        let solver = Solver::new(initial).unwrap();
        assert!(!solver.is_solvable());
        assert_eq!(solver.moves(), -1);
        assert_eq!(solver.solution(), None);
    }

    #[test]
    fn test_22() {
        let initial = Board::new(2, [1, 0, 3, 2]).unwrap();
        let mut stats = SearchAllStats::default();
        let solver = Solver::with_stats(initial.clone(), &mut stats).unwrap();
        assert!(solver.is_solvable());
        assert_eq!(solver.moves(), 1);
        assert_eq!(solver.solution(), Some(&[initial.clone(), Board::goal(2)][..]));
        // both roots expanded, each has two neighbors
        assert_eq!(stats, SearchAllStats { expanded: 2, enqueued: 4, pruned: 0 });
        assert!(!solvable(&initial.twin()));
    }

    #[test]
    fn test_twin_is_goal() {
        let initial = Board::new(2, [2, 1, 3, 0]).unwrap();
        assert!(initial.twin().is_goal());
        let mut stats = SearchAllStats::default();
        let solver = Solver::with_stats(initial, &mut stats).unwrap();
        assert!(!solver.is_solvable());
        assert_eq!(solver.moves(), -1);
        assert_eq!(stats, SearchAllStats::default());
    }

    #[test]
    fn test_pruning() {
        let initial = Board::new(3, [8, 1, 3,  4, 0, 2,  7, 6, 5]).unwrap();
        let mut stats = SearchAllStats::default();
        Solver::with_stats(initial, &mut stats).unwrap();
        assert!(stats.expanded >= 14);
        // every expanded node except both roots has its predecessor among neighbors
        assert_eq!(stats.pruned, stats.expanded - 2);
        assert_eq!(stats.generated(), stats.enqueued + stats.pruned);
    }

    #[test]
    fn test_limited() {
        let initial = Board::new(3, [8, 1, 3,  4, 0, 2,  7, 6, 5]).unwrap();
        let mut limited = Limited::with_limit(5);
        assert_eq!(Solver::with_stats(initial.clone(), &mut limited).unwrap_err(),
                   SolverError::Interrupted { expanded: 5 });
        assert_eq!(limited.expanded, 5);
        limited.reset_limit(u64::MAX);
        assert_eq!(Solver::with_stats(initial, &mut limited).unwrap().moves(), 14);
    }

    #[test]
    fn test_all_22() {
        let distances = distances_from_goal(2);
        assert_eq!(distances.len(), 12);
        let mut solvable_count = 0;
        for code in 0..4u16.pow(4) {
            let tiles: Vec<u16> = (0..4).map(|i| code / 4u16.pow(i) % 4).collect();
            let Ok(board) = Board::new(2, tiles) else { continue };
            let solver = Solver::new(board.clone()).unwrap();
            assert_eq!(solver.moves(), distances.get(&board).copied().unwrap_or(-1), "{}", board);
            if let Some(solution) = solver.solution() {
                check_solution(&board, solution);
                solvable_count += 1;
            }
            assert_ne!(solver.is_solvable(), solvable(&board.twin()), "{}", board);
        }
        assert_eq!(solvable_count, 12);
    }

    #[test]
    fn test_random_33() {
        let distances = distances_from_goal(3);
        assert_eq!(distances.len(), 181440);
        let mut rng = ChaCha8Rng::seed_from_u64(314);
        for _ in 0..20 {
            let steps = rng.gen_range(0..30);
            let board = random_walk(3, steps, &mut rng);
            let solver = Solver::new(board.clone()).unwrap();
            assert_eq!(solver.moves(), distances[&board], "{}", board);
            check_solution(&board, solver.solution().unwrap());

            let twin = board.twin();
            assert!(!distances.contains_key(&twin));
            assert!(!solvable(&twin), "{}", twin);
        }
    }

    #[test]
    fn test_random_44() {
        let mut rng = ChaCha8Rng::seed_from_u64(123);
        for steps in [1, 4, 9, 12, 15] {
            let board = random_walk(4, steps, &mut rng);
            let solver = Solver::new(board.clone()).unwrap();
            let moves = solver.moves();
            assert!(moves <= steps as i32);
            assert!(moves >= board.manhattan() as i32);
            // blank ends in the same cell, so move counts have the same parity
            assert_eq!(moves % 2, steps as i32 % 2);
            check_solution(&board, solver.solution().unwrap());
        }
    }
}
