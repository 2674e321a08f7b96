//! Priority-ordered invasion frontier.
//!
//! The frontier's ordering is part of the output contract, not an
//! implementation detail: candidates are popped by ascending physical
//! depth (buoyant gas reaches shallower cells first), with exact depth
//! ties broken by ascending lexicographic `(x, y, z)`. `f64::total_cmp`
//! makes the primary key a total order, so two runs over identical
//! inputs pop identical sequences and snapshots reproduce bit-for-bit.
//!
//! Duplicate entries are expected — a cell can be discovered from
//! several already-invaded neighbours — and are discarded at pop time
//! by the scheduler's visited check.

use plume_grid::Cell;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// One invasion candidate: a cell keyed by its physical depth.
#[derive(Debug, Clone, Copy)]
pub struct Candidate {
    /// Physical depth of the target cell.
    pub depth: f64,
    /// The target cell.
    pub cell: Cell,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.depth
            .total_cmp(&other.depth)
            .then_with(|| self.cell.cmp(&other.cell))
    }
}

/// Min-priority queue of invasion candidates.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<Reverse<Candidate>>,
}

impl Frontier {
    /// Create an empty frontier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a candidate. Duplicates are allowed.
    pub fn push(&mut self, depth: f64, cell: Cell) {
        self.heap.push(Reverse(Candidate { depth, cell }));
    }

    /// Remove and return the shallowest candidate, ties broken by
    /// lexicographic cell order.
    pub fn pop(&mut self) -> Option<Candidate> {
        self.heap.pop().map(|Reverse(candidate)| candidate)
    }

    /// Number of queued candidates, duplicates included.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns `true` if no candidates are queued.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(x: i32, y: i32, z: i32) -> Cell {
        Cell::new(x, y, z)
    }

    // ── Ordering contract ─────────────────────────────────────────

    #[test]
    fn shallower_pops_first() {
        let mut frontier = Frontier::new();
        frontier.push(3.0, c(0, 0, 3));
        frontier.push(1.0, c(0, 0, 1));
        frontier.push(2.0, c(0, 0, 2));
        assert_eq!(frontier.pop().unwrap().cell, c(0, 0, 1));
        assert_eq!(frontier.pop().unwrap().cell, c(0, 0, 2));
        assert_eq!(frontier.pop().unwrap().cell, c(0, 0, 3));
        assert!(frontier.pop().is_none());
    }

    #[test]
    fn equal_depth_breaks_ties_lexicographically() {
        let mut frontier = Frontier::new();
        frontier.push(1.0, c(2, 0, 0));
        frontier.push(1.0, c(0, 1, 0));
        frontier.push(1.0, c(0, 0, 5));
        frontier.push(1.0, c(0, 1, 2));
        assert_eq!(frontier.pop().unwrap().cell, c(0, 0, 5));
        assert_eq!(frontier.pop().unwrap().cell, c(0, 1, 0));
        assert_eq!(frontier.pop().unwrap().cell, c(0, 1, 2));
        assert_eq!(frontier.pop().unwrap().cell, c(2, 0, 0));
    }

    #[test]
    fn duplicates_are_retained() {
        let mut frontier = Frontier::new();
        frontier.push(1.0, c(0, 0, 0));
        frontier.push(1.0, c(0, 0, 0));
        assert_eq!(frontier.len(), 2);
        assert_eq!(frontier.pop().unwrap().cell, c(0, 0, 0));
        assert_eq!(frontier.pop().unwrap().cell, c(0, 0, 0));
        assert!(frontier.is_empty());
    }

    #[test]
    fn negative_depths_order_correctly() {
        // Elevation-style inputs with negative values are legal.
        let mut frontier = Frontier::new();
        frontier.push(0.0, c(1, 0, 0));
        frontier.push(-5.0, c(2, 0, 0));
        assert_eq!(frontier.pop().unwrap().cell, c(2, 0, 0));
    }

    #[test]
    fn nan_depth_does_not_poison_ordering() {
        // total_cmp places NaN after every finite depth.
        let mut frontier = Frontier::new();
        frontier.push(f64::NAN, c(0, 0, 0));
        frontier.push(7.0, c(1, 0, 0));
        assert_eq!(frontier.pop().unwrap().cell, c(1, 0, 0));
    }
}
