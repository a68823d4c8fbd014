//! Candidate frontier
//!
//! `CandidateQueue` is a binary min-heap keyed by `(difference, sequence)`.
//! The sequence number is handed out by the queue on every push, so among
//! candidates with equal difference the one pushed first is popped first.
//! Extraction order is therefore fully determined by the push order.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A pending pixel, scored against the region that discovered it
#[derive(Debug, Clone, Copy)]
pub struct Candidate {
    /// Linear index of the pixel
    pub index: usize,
    /// Slot of the owning region in the engine's region table
    pub region: usize,
    /// Difference to the region mean at push time
    pub difference: f64,
    /// Insertion sequence number
    pub sequence: u64,
}

impl Candidate {
    fn key_cmp(&self, other: &Self) -> Ordering {
        self.difference
            .total_cmp(&other.difference)
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.key_cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap, the best candidate has the
        // smallest key.
        other.key_cmp(self)
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Priority queue of candidates, smallest difference first, FIFO on ties
#[derive(Debug, Default)]
pub struct CandidateQueue {
    heap: BinaryHeap<Candidate>,
    next_sequence: u64,
}

impl CandidateQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a candidate and return its sequence number
    pub fn push(&mut self, index: usize, region: usize, difference: f64) -> u64 {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.heap.push(Candidate {
            index,
            region,
            difference,
            sequence,
        });
        sequence
    }

    /// Remove and return the best pending candidate
    pub fn pop_best(&mut self) -> Option<Candidate> {
        self.heap.pop()
    }

    /// Best pending candidate, without removing it
    pub fn peek_best(&self) -> Option<&Candidate> {
        self.heap.peek()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
