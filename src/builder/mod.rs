//! The seam to spatial neighbour search.
//!
//! The composer only needs "positions in, kernel graph out". Anything that can
//! do that, from a spatial index to a closure returning a fixed graph,
//! implements [`KernelGraphBuilder`].
pub mod distance_band;

pub use distance_band::DistanceBandBuilder;

use crate::error::GraphResult;
use crate::kernel::Kernel;
use crate::store::Graph;

/// Planar, projected coordinates of one node.
pub type Point = [f64; 2];

pub trait KernelGraphBuilder {
    /// Builds the spatial kernel graph over `positions`, keyed by position index.
    ///
    /// Implementations must return exactly the pairs with strictly positive
    /// kernel weight under `kernel` and `bandwidth`.
    fn build_kernel(&self, positions: &[Point], bandwidth: f64, kernel: Kernel) -> GraphResult<Graph<usize>>;
}

impl<F> KernelGraphBuilder for F
where
    F: Fn(&[Point], f64, Kernel) -> GraphResult<Graph<usize>>,
{
    fn build_kernel(&self, positions: &[Point], bandwidth: f64, kernel: Kernel) -> GraphResult<Graph<usize>> {
        self(positions, bandwidth, kernel)
    }
}
