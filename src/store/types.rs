use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Requirements on a node identifier: opaque, totally ordered, hashable.
///
/// Blanket-implemented, so integers, `String` labels and tuples all qualify.
pub trait NodeKey: Clone + Eq + Hash + Ord + Debug + Send + Sync {}

impl<T: Clone + Eq + Hash + Ord + Debug + Send + Sync> NodeKey for T {}

/// One directed, weighted edge. The record format used by serde.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge<N> {
    pub focal: N,
    pub neighbor: N,
    pub weight: f64,
}

impl<N> Edge<N> {
    pub fn new(focal: N, neighbor: N, weight: f64) -> Self {
        Self { focal, neighbor, weight }
    }
}

impl<N> From<(N, N, f64)> for Edge<N> {
    fn from((focal, neighbor, weight): (N, N, f64)) -> Self {
        Self { focal, neighbor, weight }
    }
}

impl<N> From<Edge<N>> for (N, N, f64) {
    fn from(edge: Edge<N>) -> Self {
        (edge.focal, edge.neighbor, edge.weight)
    }
}

/// Borrowed view used when serializing a graph without cloning its keys.
#[derive(Serialize)]
pub(crate) struct EdgeRef<'a, N> {
    pub focal: &'a N,
    pub neighbor: &'a N,
    pub weight: f64,
}
