use std::iter::FusedIterator;
use std::ops::Index;
use crate::board::Board;

/// Index of a node in its [`SearchTree`].
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct NodeId(usize);

/// Board reached by the search, together with the path cost and the node it was reached from.
#[derive(Clone, Debug)]
pub struct SearchNode {
    pub board: Board,
    /// Number of moves made from the initial board.
    pub moves: u32,
    /// Manhattan heuristic of `board`.
    pub manhattan: u32,
    /// Node whose board was expanded to obtain this one, `None` for the root.
    pub previous: Option<NodeId>,
}

impl SearchNode {
    /// Estimated number of moves from the initial board to the goal through this node.
    #[inline] pub fn priority(&self) -> u32 { self.moves + self.manhattan }
}

/// Arena of search nodes. Each node refers to its predecessor by [`NodeId`],
/// so nodes form a tree rooted at the initial board.
#[derive(Default)]
pub struct SearchTree {
    nodes: Vec<SearchNode>,
}

impl SearchTree {
    pub fn new() -> Self { Self::default() }

    /// Adds node with `board` reached without any move.
    pub fn push_root(&mut self, board: Board) -> NodeId {
        let manhattan = board.manhattan();
        self.push(SearchNode { board, moves: 0, manhattan, previous: None })
    }

    /// Adds node with `board` reached by one move from the board of `previous`.
    /// `manhattan` must be the Manhattan heuristic of `board`.
    pub fn push_child(&mut self, previous: NodeId, board: Board, manhattan: u32) -> NodeId {
        debug_assert_eq!(manhattan, board.manhattan());
        let moves = self[previous].moves + 1;
        self.push(SearchNode { board, moves, manhattan, previous: Some(previous) })
    }

    fn push(&mut self, node: SearchNode) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    /// Returns the board of the node that `id` was reached from.
    #[inline] pub fn previous_board(&self, id: NodeId) -> Option<&Board> {
        self[id].previous.map(|p| &self[p].board)
    }

    /// Returns iterator over `id` and its predecessors, ending at the root.
    #[inline] pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors { tree: self, next: Some(id) }
    }

    /// Returns boards on the path from the root to `id` (both included).
    pub fn path_to(&self, id: NodeId) -> Vec<Board> {
        let mut path: Vec<Board> = self.ancestors(id).map(|n| self[n].board.clone()).collect();
        path.reverse();
        path
    }

    #[inline] pub fn len(&self) -> usize { self.nodes.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.nodes.is_empty() }
}

impl Index<NodeId> for SearchTree {
    type Output = SearchNode;

    #[inline] fn index(&self, id: NodeId) -> &Self::Output {
        &self.nodes[id.0]
    }
}

#[derive(Copy, Clone)]
pub struct Ancestors<'t> {
    tree: &'t SearchTree,
    next: Option<NodeId>
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let result = self.next?;
        self.next = self.tree[result].previous;
        Some(result)
    }
}

impl FusedIterator for Ancestors<'_> {}
