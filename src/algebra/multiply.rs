//! Element-wise product of two graphs over one edge structure.

use crate::error::{GraphError, GraphResult};
use crate::store::{Graph, NodeKey};

impl<N: NodeKey> Graph<N> {
    /// Returns a graph with `self`'s keys and weight `self[e] * other[e]` per edge.
    ///
    /// Both graphs must share the same edge structure; weights are matched by
    /// key, never by position.
    pub fn multiply(&self, other: &Self) -> GraphResult<Self> {
        if let Some(detail) = self.structure_difference(other) {
            return Err(GraphError::StructuralMismatch {
                left_edges: self.n_edges(),
                right_edges: other.n_edges(),
                detail,
            });
        }
        tracing::trace!(edges = self.n_edges(), "multiply");

        let mut weights = Vec::with_capacity(self.n_edges());
        for (focal, neighbor, w) in self.iter() {
            // Presence guaranteed by the structure check above.
            let idx = other.position(focal, neighbor).ok_or_else(|| GraphError::StructuralMismatch {
                left_edges: self.n_edges(),
                right_edges: other.n_edges(),
                detail: format!("edge ({:?}, {:?}) missing from right", focal, neighbor),
            })?;
            weights.push(w * other.weights()[idx]);
        }
        self.with_weights(weights)
    }
}

/// Free-function form of [`Graph::multiply`].
pub fn multiply<N: NodeKey>(a: &Graph<N>, b: &Graph<N>) -> GraphResult<Graph<N>> {
    a.multiply(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> Graph<u32> {
        Graph::new([(0, 1, 1.0), (1, 0, 1.0), (1, 2, 1.0), (2, 1, 1.0)]).unwrap()
    }

    fn weighted() -> Graph<u32> {
        Graph::new([(0, 1, 0.5), (1, 0, 2.0), (1, 2, 3.0), (2, 1, 0.1)]).unwrap()
    }

    #[test]
    fn test_multiply_by_self_squares() {
        let g = weighted();
        let squared = g.multiply(&g).unwrap();
        assert_eq!(squared, g.map_weights(|w| w * w).unwrap());
    }

    #[test]
    fn test_multiply_by_scaled_copy() {
        let g = chain();
        let half = g.scale(0.5).unwrap();
        assert_eq!(g.multiply(&half).unwrap(), half);

        let w = weighted();
        let product = w.multiply(&w.scale(3.0).unwrap()).unwrap();
        for ((_, _, got), (_, _, base)) in product.iter().zip(w.iter()) {
            assert!((got - base * base * 3.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_multiply_matches_by_key_not_position() {
        let a = weighted();
        let b = Graph::new([(2, 1, 10.0), (1, 2, 1.0), (1, 0, 1.0), (0, 1, 4.0)]).unwrap();
        let c = multiply(&a, &b).unwrap();
        assert_eq!(c.weight(&0, &1), Some(2.0));
        assert_eq!(c.weight(&2, &1), Some(1.0));
        assert!(c.edge_keys().eq(a.edge_keys()));
    }

    #[test]
    fn test_multiply_rejects_structural_mismatch() {
        let g = chain();
        let other = Graph::new([(0, 1, 1.0), (1, 0, 1.0)]).unwrap();
        let err = g.multiply(&other).unwrap_err();
        assert!(matches!(err, GraphError::StructuralMismatch { left_edges: 4, right_edges: 2, .. }));
        assert!(err.to_string().contains("same edge structure"));
        assert!(other.multiply(&g).is_err());
        assert!(g.weights().iter().all(|&w| w == 1.0));
        assert!(other.weights().iter().all(|&w| w == 1.0));
    }

    #[test]
    fn test_same_count_different_keys_is_a_mismatch() {
        let a = Graph::new([(0u32, 1u32, 1.0), (1, 0, 1.0)]).unwrap();
        let b = Graph::new([(0u32, 1u32, 1.0), (1, 2, 1.0)]).unwrap();
        assert!(matches!(a.multiply(&b), Err(GraphError::StructuralMismatch { .. })));
    }

    #[test]
    fn test_multiply_produces_new_graph() {
        let g = chain();
        let result = g.multiply(&g).unwrap();
        assert!(!std::ptr::eq(result.weights().as_ptr(), g.weights().as_ptr()));
        assert!(g.weights().iter().all(|&w| w == 1.0));
    }
}
