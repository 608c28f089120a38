//! distance_band.rs
//! Brute-force Euclidean kernel graph over all ordered pairs of points.

use super::{KernelGraphBuilder, Point};
use crate::error::{check_bandwidth, GraphError, GraphResult};
use crate::kernel::Kernel;
use crate::store::Graph;

/// Reference builder: O(n²) pair scan, no spatial index.
///
/// Zero weights are dropped, so finite-support kernels prune every pair at or
/// beyond the bandwidth. Unbounded kernels keep every pair unless
/// `max_distance` narrows the candidate set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DistanceBandBuilder {
    include_self: bool,
    max_distance: Option<f64>,
}

impl DistanceBandBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Also emit `(i, i)` edges, weighted `K(0)`.
    pub fn with_self_weights(mut self, include_self: bool) -> Self {
        self.include_self = include_self;
        self
    }

    /// Only consider pairs closer than or at `max_distance`.
    pub fn max_distance(mut self, max_distance: f64) -> Self {
        self.max_distance = Some(max_distance);
        self
    }

    fn validate(&self, positions: &[Point], bandwidth: f64) -> GraphResult<()> {
        check_bandwidth(bandwidth)?;
        if let Some(cap) = self.max_distance {
            if !(cap >= 0.0) {
                return Err(GraphError::InvalidParameter(format!(
                    "max_distance must be >= 0, got {}",
                    cap
                )));
            }
        }
        if let Some(idx) = positions.iter().position(|p| !p.iter().all(|c| c.is_finite())) {
            return Err(GraphError::InvalidParameter(format!(
                "position {} has non-finite coordinates {:?}",
                idx, positions[idx]
            )));
        }
        Ok(())
    }
}

#[inline(always)]
fn euclidean(a: &Point, b: &Point) -> f64 {
    (a[0] - b[0]).hypot(a[1] - b[1])
}

impl KernelGraphBuilder for DistanceBandBuilder {
    fn build_kernel(&self, positions: &[Point], bandwidth: f64, kernel: Kernel) -> GraphResult<Graph<usize>> {
        self.validate(positions, bandwidth)?;

        let mut edges = Vec::new();
        for (i, a) in positions.iter().enumerate() {
            for (j, b) in positions.iter().enumerate() {
                if i == j && !self.include_self {
                    continue;
                }
                let d = euclidean(a, b);
                if self.max_distance.is_some_and(|cap| d > cap) {
                    continue;
                }
                let w = kernel.profile(d / bandwidth);
                if w > 0.0 {
                    edges.push((i, j, w));
                }
            }
        }

        tracing::debug!(
            nodes = positions.len(),
            edges = edges.len(),
            bandwidth,
            %kernel,
            "built spatial kernel graph"
        );
        Graph::new(edges)
    }
}
