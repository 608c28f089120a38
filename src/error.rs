//! Error taxonomy shared by every graph operation.

use thiserror::Error;

/// The single failure type of the crate.
///
/// Node identifiers are rendered with their `Debug` form so the error stays
/// independent of the graph's node type.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    /// Out-of-domain scalar input: non-positive bandwidth, negative distance, NaN field value.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("Unknown kernel '{0}'")]
    UnknownKernel(String),
    #[error("Duplicate edge ({focal}, {neighbor})")]
    DuplicateEdge { focal: String, neighbor: String },
    #[error("Invalid weight {weight} on edge ({focal}, {neighbor}): weights must be finite and non-negative")]
    InvalidWeight { focal: String, neighbor: String, weight: f64 },
    #[error("Structural mismatch: graphs must share the same edge structure ({left_edges} vs {right_edges} edges; {detail})")]
    StructuralMismatch { left_edges: usize, right_edges: usize, detail: String },
    #[error("Missing field value for node {0}")]
    MissingFieldValue(String),
    #[error("Config error: {0}")]
    Config(String),
}

pub type GraphResult<T> = Result<T, GraphError>;

impl GraphError {
    pub(crate) fn invalid_weight<N: std::fmt::Debug>(focal: &N, neighbor: &N, weight: f64) -> Self {
        GraphError::InvalidWeight {
            focal: format!("{:?}", focal),
            neighbor: format!("{:?}", neighbor),
            weight,
        }
    }
}

/// Rejects non-finite and non-positive bandwidths before any work happens.
pub(crate) fn check_bandwidth(bandwidth: f64) -> GraphResult<()> {
    if bandwidth.is_finite() && bandwidth > 0.0 {
        Ok(())
    } else {
        Err(GraphError::InvalidParameter(format!(
            "bandwidth must be finite and > 0, got {}",
            bandwidth
        )))
    }
}
