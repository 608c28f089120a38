//! Python facade over the graph core. Node ids are positional (`0..n`).

use crate::algebra::Transform;
use crate::builder::{DistanceBandBuilder, KernelGraphBuilder, Point};
use crate::compose::SpatiotemporalComposer;
use crate::error::GraphError;
use crate::kernel::{self, Kernel};
use crate::store::Graph;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

fn to_py_err(e: GraphError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

fn to_points(coords: Vec<(f64, f64)>) -> Vec<Point> {
    coords.into_iter().map(|(x, y)| [x, y]).collect()
}

#[pyclass(name = "Graph", frozen)]
#[derive(Debug, Clone)]
pub struct PyGraph {
    inner: Graph<usize>,
}

impl From<Graph<usize>> for PyGraph {
    fn from(inner: Graph<usize>) -> Self {
        Self { inner }
    }
}

#[pymethods]
impl PyGraph {
    /// Builds a graph from three aligned columns.
    #[staticmethod]
    pub fn from_edges(focal: Vec<usize>, neighbor: Vec<usize>, weight: Vec<f64>) -> PyResult<Self> {
        if focal.len() != neighbor.len() || focal.len() != weight.len() {
            return Err(PyValueError::new_err("focal, neighbor and weight must have equal length"));
        }
        let edges = focal.into_iter().zip(neighbor).zip(weight).map(|((f, n), w)| (f, n, w));
        Graph::new(edges).map(Self::from).map_err(to_py_err)
    }

    #[staticmethod]
    #[pyo3(signature = (coords, bandwidth, kernel = "gaussian"))]
    pub fn build_kernel(coords: Vec<(f64, f64)>, bandwidth: f64, kernel: &str) -> PyResult<Self> {
        let kernel: Kernel = kernel.parse().map_err(to_py_err)?;
        DistanceBandBuilder::new()
            .build_kernel(&to_points(coords), bandwidth, kernel)
            .map(Self::from)
            .map_err(to_py_err)
    }

    #[staticmethod]
    #[pyo3(signature = (coords, t, spatial_bandwidth, temporal_bandwidth, kernel = "gaussian"))]
    pub fn build_spatiotemporal(
        coords: Vec<(f64, f64)>,
        t: Vec<f64>,
        spatial_bandwidth: f64,
        temporal_bandwidth: f64,
        kernel: &str,
    ) -> PyResult<Self> {
        SpatiotemporalComposer::<DistanceBandBuilder>::default()
            .build_spatiotemporal(&to_points(coords), &t, spatial_bandwidth, temporal_bandwidth, kernel)
            .map(Self::from)
            .map_err(to_py_err)
    }

    pub fn multiply(&self, other: &PyGraph) -> PyResult<Self> {
        self.inner.multiply(&other.inner).map(Self::from).map_err(to_py_err)
    }

    #[pyo3(signature = (values, bandwidth, kernel = "gaussian"))]
    pub fn scale_by_kernel(&self, values: Vec<f64>, bandwidth: f64, kernel: &str) -> PyResult<Self> {
        self.inner
            .scale_by_kernel(&values, bandwidth, kernel)
            .map(Self::from)
            .map_err(to_py_err)
    }

    pub fn transform(&self, how: &str) -> PyResult<Self> {
        let how: Transform = how.parse().map_err(to_py_err)?;
        self.inner.transform(how).map(Self::from).map_err(to_py_err)
    }

    /// `(focal, neighbor, weight)` columns in insertion order.
    pub fn adjacency(&self) -> (Vec<usize>, Vec<usize>, Vec<f64>) {
        let (focal, neighbor) = self.inner.edge_keys().map(|(f, n)| (*f, *n)).unzip();
        (focal, neighbor, self.inner.weights().to_vec())
    }

    #[getter]
    pub fn n_edges(&self) -> usize {
        self.inner.n_edges()
    }

    #[getter]
    pub fn n_nodes(&self) -> usize {
        self.inner.n_nodes()
    }

    pub fn __len__(&self) -> usize {
        self.inner.n_edges()
    }

    pub fn __repr__(&self) -> String {
        format!("<Graph of {} nodes and {} edges>", self.inner.n_nodes(), self.inner.n_edges())
    }
}

/// Evaluates a named kernel at a normalized distance.
#[pyfunction]
pub fn evaluate_kernel(kernel_name: &str, u: f64) -> PyResult<f64> {
    kernel::evaluate(kernel_name, u).map_err(to_py_err)
}
