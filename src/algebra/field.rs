//! Per-node scalar fields (e.g. timestamps) consumed by kernel rescaling.

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// A lookup from node id to a scalar value.
///
/// The field is never stored inside a graph; it only feeds the algebra. A
/// `None` for a node that an edge references is a `MissingFieldValue` error.
pub trait NodeField<N> {
    fn value(&self, node: &N) -> Option<f64>;
}

impl<N: Eq + Hash, S: BuildHasher> NodeField<N> for HashMap<N, f64, S> {
    fn value(&self, node: &N) -> Option<f64> {
        self.get(node).copied()
    }
}

impl<N: Ord> NodeField<N> for BTreeMap<N, f64> {
    fn value(&self, node: &N) -> Option<f64> {
        self.get(node).copied()
    }
}

/// Positional column: node `i` reads element `i`.
impl NodeField<usize> for [f64] {
    fn value(&self, node: &usize) -> Option<f64> {
        self.get(*node).copied()
    }
}

impl NodeField<usize> for Vec<f64> {
    fn value(&self, node: &usize) -> Option<f64> {
        self.as_slice().value(node)
    }
}

impl<N, F: NodeField<N> + ?Sized> NodeField<N> for &F {
    fn value(&self, node: &N) -> Option<f64> {
        (**self).value(node)
    }
}
