//! Kernel-based and uniform rescaling of an existing graph.

use super::field::NodeField;
use crate::error::{check_bandwidth, GraphError, GraphResult};
use crate::kernel::ResolveKernel;
use crate::store::{Graph, NodeKey};

fn field_value<N: NodeKey, F: NodeField<N> + ?Sized>(field: &F, node: &N) -> GraphResult<f64> {
    let value = field
        .value(node)
        .ok_or_else(|| GraphError::MissingFieldValue(format!("{:?}", node)))?;
    if !value.is_finite() {
        return Err(GraphError::InvalidParameter(format!(
            "field value for node {:?} must be finite, got {}",
            node, value
        )));
    }
    Ok(value)
}

impl<N: NodeKey> Graph<N> {
    /// Reweights every edge by a kernel of the field difference across it.
    ///
    /// For edge `(i, j)` with weight `w` the new weight is
    /// `w * K(|field[i] - field[j]| / bandwidth)`. Keys and their order are
    /// kept exactly: rescaling never adds or removes an edge, even when the
    /// kernel evaluates to zero.
    pub fn scale_by_kernel<F, K>(&self, field: &F, bandwidth: f64, kernel: K) -> GraphResult<Self>
    where
        F: NodeField<N> + ?Sized,
        K: ResolveKernel,
    {
        check_bandwidth(bandwidth)?;
        let kernel = kernel.resolve()?;
        tracing::debug!(edges = self.n_edges(), bandwidth, %kernel, "scale_by_kernel");

        let mut weights = Vec::with_capacity(self.n_edges());
        for (focal, neighbor, w) in self.iter() {
            let d = (field_value(field, focal)? - field_value(field, neighbor)?).abs();
            weights.push(w * kernel.profile(d / bandwidth));
        }
        self.with_weights(weights)
    }

    /// Multiplies every weight by the constant `factor`.
    pub fn scale(&self, factor: f64) -> GraphResult<Self> {
        if !factor.is_finite() || factor < 0.0 {
            return Err(GraphError::InvalidParameter(format!(
                "scale factor must be finite and >= 0, got {}",
                factor
            )));
        }
        self.map_weights(|w| w * factor)
    }
}

/// Free-function form of [`Graph::scale_by_kernel`].
pub fn scale_by_kernel<N, F, K>(graph: &Graph<N>, field: &F, bandwidth: f64, kernel: K) -> GraphResult<Graph<N>>
where
    N: NodeKey,
    F: NodeField<N> + ?Sized,
    K: ResolveKernel,
{
    graph.scale_by_kernel(field, bandwidth, kernel)
}
