//! Kernel-weighted spatial and temporal proximity graphs.
//!
//! A [`Graph`] is an immutable sparse set of `(focal, neighbor) -> weight`
//! edges. Graphs come out of a [`KernelGraphBuilder`] (spatial proximity) and
//! are combined with [`Graph::multiply`], [`Graph::scale_by_kernel`] and
//! [`build_spatiotemporal`], each of which returns a new graph.
//!
//! ```rust
//! use kernel_graph_core::{build_spatiotemporal, GraphResult};
//!
//! # fn main() -> GraphResult<()> {
//! let points = [[0.0, 0.0], [100.0, 0.0], [200.0, 0.0]];
//! let days = vec![0.0, 10.0, 20.0];
//! let g = build_spatiotemporal(&points, &days, 250.0, 15.0, "gaussian")?;
//! assert_eq!(g.n_edges(), 6);
//! # Ok(())
//! # }
//! ```

pub mod algebra;
pub mod builder;
pub mod compose;
pub mod config;
pub mod error;
pub mod kernel;
pub mod store;

#[cfg(feature = "python")]
mod bindings {
    pub mod python;
}

pub use algebra::{multiply, scale_by_kernel, NodeField, Transform};
pub use builder::{DistanceBandBuilder, KernelGraphBuilder, Point};
pub use compose::{build_spatiotemporal, SpatiotemporalComposer};
pub use config::SpatiotemporalConfig;
pub use error::{GraphError, GraphResult};
pub use kernel::{evaluate, Kernel, ResolveKernel, Support};
pub use store::{Edge, Graph, NodeKey};

// --- Module Definition ---
/// Defines the `_core` Python extension module.
#[cfg(feature = "python")]
#[pyo3::pymodule]
fn _core(m: &pyo3::Bound<'_, pyo3::types::PyModule>) -> pyo3::PyResult<()> {
    use pyo3::prelude::*;

    m.add_class::<bindings::python::PyGraph>()?;
    m.add_function(wrap_pyfunction!(bindings::python::evaluate_kernel, m)?)?;
    Ok(())
}
