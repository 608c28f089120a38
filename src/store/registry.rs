//! registry.rs
//! Columnar edge-key layout shared between graphs of identical structure.

use super::types::NodeKey;
use std::collections::HashMap;

/// The key half of a graph: focal and neighbor columns plus a lookup index.
///
/// Weights live outside the registry so that every graph derived from another
/// one (scaled, multiplied, transformed) can point at the same registry.
#[derive(Debug, Clone)]
pub(crate) struct EdgeRegistry<N> {
    // Columnar Arrays, insertion order
    pub focal: Vec<N>,
    pub neighbor: Vec<N>,

    // focal -> neighbor -> position in the columns
    lookup: HashMap<N, HashMap<N, usize>>,
}

impl<N: NodeKey> EdgeRegistry<N> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            focal: Vec::with_capacity(capacity),
            neighbor: Vec::with_capacity(capacity),
            lookup: HashMap::new(),
        }
    }

    #[inline(always)]
    pub fn count(&self) -> usize {
        self.focal.len()
    }

    /// Appends a key. Returns the key back if it is already present.
    pub fn insert(&mut self, focal: N, neighbor: N) -> Result<usize, (N, N)> {
        let idx = self.focal.len();
        let row = self.lookup.entry(focal.clone()).or_default();
        if row.contains_key(&neighbor) {
            return Err((focal, neighbor));
        }
        row.insert(neighbor.clone(), idx);
        self.focal.push(focal);
        self.neighbor.push(neighbor);
        Ok(idx)
    }

    #[inline(always)]
    pub fn position(&self, focal: &N, neighbor: &N) -> Option<usize> {
        self.lookup.get(focal)?.get(neighbor).copied()
    }

    #[inline(always)]
    pub fn key(&self, idx: usize) -> (&N, &N) {
        (&self.focal[idx], &self.neighbor[idx])
    }

    pub fn keys(&self) -> impl Iterator<Item = (&N, &N)> + '_ {
        self.focal.iter().zip(self.neighbor.iter())
    }

    /// Positions of every edge leaving `focal`, in insertion order.
    pub fn row(&self, focal: &N) -> Vec<usize> {
        let mut positions: Vec<usize> = self
            .lookup
            .get(focal)
            .map(|row| row.values().copied().collect())
            .unwrap_or_default();
        positions.sort_unstable();
        positions
    }

    /// First key of `self` that `other` lacks, if any.
    pub fn first_missing_from<'a>(&'a self, other: &Self) -> Option<(&'a N, &'a N)> {
        self.keys().find(|(f, n)| other.position(f, n).is_none())
    }

    /// Key-set equality, independent of insertion order.
    pub fn same_keys(&self, other: &Self) -> bool {
        self.count() == other.count() && self.first_missing_from(other).is_none()
    }
}
