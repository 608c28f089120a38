//! Configuration of a spatiotemporal build.

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, GraphResult};
use crate::kernel::Kernel;

/// Parameters for [`crate::compose::SpatiotemporalComposer::build_from_config`].
///
/// Bandwidths have no meaningful default and must always be given; the rest
/// falls back to the builder defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpatiotemporalConfig {
    /// Distance at which the spatial kernel is evaluated at `u = 1`.
    pub spatial_bandwidth: f64,

    /// Same, for differences in the per-node field (e.g. days).
    pub temporal_bandwidth: f64,

    /// Kernel family shared by both components. Default: gaussian.
    #[serde(default)]
    pub kernel: Kernel,

    /// Emit `(i, i)` edges in the spatial graph.
    #[serde(default)]
    pub include_self: bool,

    /// Optional cap on candidate pair distance.
    #[serde(default)]
    pub max_distance: Option<f64>,
}

impl SpatiotemporalConfig {
    pub fn new(spatial_bandwidth: f64, temporal_bandwidth: f64, kernel: Kernel) -> Self {
        Self {
            spatial_bandwidth,
            temporal_bandwidth,
            kernel,
            include_self: false,
            max_distance: None,
        }
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> GraphResult<()> {
        for (name, value) in [
            ("spatial_bandwidth", self.spatial_bandwidth),
            ("temporal_bandwidth", self.temporal_bandwidth),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(GraphError::Config(format!("{name} must be finite and > 0, got {value}")));
            }
        }
        if let Some(cap) = self.max_distance {
            if !(cap.is_finite() && cap >= 0.0) {
                return Err(GraphError::Config(format!("max_distance must be finite and >= 0, got {cap}")));
            }
        }
        Ok(())
    }

    /// Load and validate from a JSON string.
    pub fn from_json(json: &str) -> GraphResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| GraphError::Config(format!("JSON parse error: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_defaults() {
        let config = SpatiotemporalConfig::from_json(r#"{"spatial_bandwidth": 250, "temporal_bandwidth": 15}"#).unwrap();
        assert_eq!(config, SpatiotemporalConfig::new(250.0, 15.0, Kernel::Gaussian));
    }

    #[test]
    fn test_from_json_full() {
        let config = SpatiotemporalConfig::from_json(
            r#"{"spatial_bandwidth": 1.5, "temporal_bandwidth": 2, "kernel": "Parabolic",
                "include_self": true, "max_distance": 3.0}"#,
        )
        .unwrap();
        assert_eq!(config.kernel, Kernel::Epanechnikov);
        assert!(config.include_self);
        assert_eq!(config.max_distance, Some(3.0));
    }

    #[test]
    fn test_rejects_bad_values() {
        for json in [
            r#"{"spatial_bandwidth": 0, "temporal_bandwidth": 15}"#,
            r#"{"spatial_bandwidth": 1, "temporal_bandwidth": -2}"#,
            r#"{"spatial_bandwidth": 1, "temporal_bandwidth": 2, "max_distance": -1}"#,
            r#"{"spatial_bandwidth": 1, "temporal_bandwidth": 2, "kernel": "box"}"#,
            r#"{"spatial_bandwidth": 1, "temporal_bandwidth": 2, "bandwidth": 3}"#,
            r#"{"temporal_bandwidth": 2}"#,
        ] {
            assert!(matches!(SpatiotemporalConfig::from_json(json), Err(GraphError::Config(_))), "{json}");
        }
    }
}
