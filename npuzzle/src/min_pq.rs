use std::cmp::Reverse;
use std::collections::BinaryHeap;
use crate::error::SolverError;
use crate::search_node::{NodeId, SearchNode};

/// Queue entry. Fields are compared in order of declaration.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct Entry {
    priority: u32,
    manhattan: u32,
    /// Number of entries inserted before this one.
    seq: u64,
    node: NodeId,
}

/// Minimum priority queue of search nodes.
///
/// Nodes with lower priority (moves + Manhattan heuristic) come first.
/// Ties are broken by lower Manhattan heuristic, then by insertion order.
/// A board can be inserted many times; the queue never updates entries in place.
#[derive(Default)]
pub struct MinPQ {
    heap: BinaryHeap<Reverse<Entry>>,
    inserted: u64,
}

impl MinPQ {
    pub fn new() -> Self { Self::default() }

    /// Inserts `node` identified by `id`.
    pub fn insert(&mut self, id: NodeId, node: &SearchNode) {
        self.heap.push(Reverse(Entry {
            priority: node.priority(),
            manhattan: node.manhattan,
            seq: self.inserted,
            node: id,
        }));
        self.inserted += 1;
    }

    /// Removes and returns the node that comes first.
    pub fn delete_min(&mut self) -> Result<NodeId, SolverError> {
        self.heap.pop().map(|Reverse(entry)| entry.node).ok_or(SolverError::EmptyQueue)
    }

    #[inline] pub fn len(&self) -> usize { self.heap.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.heap.is_empty() }
}
