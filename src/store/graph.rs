//! graph.rs
//! The immutable edge store: shared key columns plus a dense weight column.

use super::registry::EdgeRegistry;
use super::types::{Edge, EdgeRef, NodeKey};
use crate::error::{GraphError, GraphResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

/// A sparse, directed, weighted graph.
///
/// Immutable once built: every operation returns a new `Graph`. Graphs derived
/// from one another share their key columns, so a rescaled graph costs one
/// weight vector.
#[derive(Debug, Clone)]
pub struct Graph<N> {
    edges: Arc<EdgeRegistry<N>>,
    weights: Vec<f64>,
}

#[inline(always)]
fn valid_weight(w: f64) -> bool {
    w.is_finite() && w >= 0.0
}

impl<N: NodeKey> Graph<N> {
    /// Builds a graph from `(focal, neighbor, weight)` triples.
    ///
    /// Fails with `DuplicateEdge` on a repeated key and `InvalidWeight` on a
    /// NaN, infinite or negative weight.
    pub fn new<I>(edges: I) -> GraphResult<Self>
    where
        I: IntoIterator<Item = (N, N, f64)>,
    {
        let iter = edges.into_iter();
        let mut registry = EdgeRegistry::with_capacity(iter.size_hint().0);
        let mut weights = Vec::with_capacity(iter.size_hint().0);

        for (focal, neighbor, weight) in iter {
            if !valid_weight(weight) {
                return Err(GraphError::invalid_weight(&focal, &neighbor, weight));
            }
            registry.insert(focal, neighbor).map_err(|(f, n)| GraphError::DuplicateEdge {
                focal: format!("{:?}", f),
                neighbor: format!("{:?}", n),
            })?;
            weights.push(weight);
        }

        Ok(Self { edges: Arc::new(registry), weights })
    }

    pub fn empty() -> Self {
        Self { edges: Arc::new(EdgeRegistry::with_capacity(0)), weights: Vec::new() }
    }

    /// A graph over the same keys as `self` with a new weight column.
    pub(crate) fn with_weights(&self, weights: Vec<f64>) -> GraphResult<Self> {
        debug_assert_eq!(weights.len(), self.weights.len());
        if let Some(idx) = weights.iter().position(|&w| !valid_weight(w)) {
            let (f, n) = self.edges.key(idx);
            return Err(GraphError::invalid_weight(f, n, weights[idx]));
        }
        Ok(Self { edges: Arc::clone(&self.edges), weights })
    }

    /// True iff both graphs hold exactly the same `(focal, neighbor)` keys.
    pub fn same_structure(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.edges, &other.edges) || self.edges.same_keys(&other.edges)
    }

    /// Describes the first key that breaks structural equality, if any.
    pub(crate) fn structure_difference(&self, other: &Self) -> Option<String> {
        if self.same_structure(other) {
            return None;
        }
        if let Some((f, n)) = self.edges.first_missing_from(&other.edges) {
            return Some(format!("edge ({:?}, {:?}) missing from right", f, n));
        }
        if let Some((f, n)) = other.edges.first_missing_from(&self.edges) {
            return Some(format!("edge ({:?}, {:?}) missing from left", f, n));
        }
        Some("edge sets differ".to_string())
    }

    /// Applies `f` to every weight, keeping keys and their order.
    pub fn map_weights<F>(&self, f: F) -> GraphResult<Self>
    where
        F: Fn(f64) -> f64,
    {
        self.with_weights(self.weights.iter().map(|&w| f(w)).collect())
    }

    /// Drops zero-weight edges.
    pub fn eliminate_zeros(&self) -> Self {
        let mut registry = EdgeRegistry::with_capacity(self.n_edges());
        let mut weights = Vec::with_capacity(self.n_edges());
        for (f, n, w) in self.iter().filter(|&(_, _, w)| w != 0.0) {
            // Keys come from a valid registry, so they cannot collide.
            let _ = registry.insert(f.clone(), n.clone());
            weights.push(w);
        }
        Self { edges: Arc::new(registry), weights }
    }

    // --- Accessors ---

    pub fn n_edges(&self) -> usize {
        self.edges.count()
    }

    pub fn is_empty(&self) -> bool {
        self.n_edges() == 0
    }

    /// Number of distinct node ids referenced by any edge.
    pub fn n_nodes(&self) -> usize {
        self.edges
            .focal
            .iter()
            .chain(self.edges.neighbor.iter())
            .collect::<HashSet<_>>()
            .len()
    }

    pub fn weight(&self, focal: &N, neighbor: &N) -> Option<f64> {
        self.edges.position(focal, neighbor).map(|idx| self.weights[idx])
    }

    /// Weight column, aligned with [`Graph::edge_keys`].
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn edge_keys(&self) -> impl Iterator<Item = (&N, &N)> + '_ {
        self.edges.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&N, &N, f64)> + '_ {
        self.edges.keys().zip(self.weights.iter()).map(|((f, n), &w)| (f, n, w))
    }

    /// Outgoing edges of `focal`, in insertion order.
    pub fn neighbors(&self, focal: &N) -> Vec<(&N, f64)> {
        self.edges
            .row(focal)
            .into_iter()
            .map(|idx| (&self.edges.neighbor[idx], self.weights[idx]))
            .collect()
    }

    /// Out-degree of every referenced node (zero for pure neighbors).
    pub fn cardinalities(&self) -> BTreeMap<N, usize> {
        let mut counts: BTreeMap<N, usize> =
            self.edges.neighbor.iter().map(|n| (n.clone(), 0)).collect();
        for f in &self.edges.focal {
            *counts.entry(f.clone()).or_insert(0) += 1;
        }
        counts
    }

    pub fn total_weight(&self) -> f64 {
        self.weights.iter().sum()
    }

    pub fn mean_weight(&self) -> Option<f64> {
        if self.is_empty() {
            None
        } else {
            Some(self.total_weight() / self.n_edges() as f64)
        }
    }

    pub(crate) fn position(&self, focal: &N, neighbor: &N) -> Option<usize> {
        self.edges.position(focal, neighbor)
    }
}

impl<N: NodeKey> Default for Graph<N> {
    fn default() -> Self {
        Self::empty()
    }
}

/// Value equality: same key set and equal weight per key, regardless of order.
impl<N: NodeKey> PartialEq for Graph<N> {
    fn eq(&self, other: &Self) -> bool {
        self.same_structure(other)
            && self
                .iter()
                .all(|(f, n, w)| other.weight(f, n).is_some_and(|o| o == w))
    }
}

impl<N: NodeKey + Serialize> Serialize for Graph<N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter().map(|(focal, neighbor, weight)| EdgeRef { focal, neighbor, weight }))
    }
}

impl<'de, N: NodeKey + Deserialize<'de>> Deserialize<'de> for Graph<N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let edges = Vec::<Edge<N>>::deserialize(deserializer)?;
        Graph::new(edges.into_iter().map(Into::into)).map_err(serde::de::Error::custom)
    }
}
