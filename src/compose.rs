//! Fuses a spatial kernel graph with a temporal decay factor.
//!
//! The pipeline has two steps: the injected builder defines the edge set and
//! the spatial weight, then [`Graph::scale_by_kernel`] multiplies in the
//! temporal weight. The temporal step never adds or prunes edges.

use rayon::prelude::*;

use crate::algebra::NodeField;
use crate::builder::{DistanceBandBuilder, KernelGraphBuilder, Point};
use crate::config::SpatiotemporalConfig;
use crate::error::{check_bandwidth, GraphResult};
use crate::kernel::ResolveKernel;
use crate::store::Graph;

#[derive(Debug, Clone, Default)]
pub struct SpatiotemporalComposer<B = DistanceBandBuilder> {
    builder: B,
}

impl SpatiotemporalComposer<DistanceBandBuilder> {
    /// A composer over a [`DistanceBandBuilder`] shaped by `config`.
    pub fn from_config(config: &SpatiotemporalConfig) -> GraphResult<Self> {
        config.validate()?;
        let mut builder = DistanceBandBuilder::new().with_self_weights(config.include_self);
        if let Some(cap) = config.max_distance {
            builder = builder.max_distance(cap);
        }
        Ok(Self::new(builder))
    }

    /// One-shot build driven entirely by `config`.
    pub fn build_from_config<F>(
        config: &SpatiotemporalConfig,
        positions: &[Point],
        field: &F,
    ) -> GraphResult<Graph<usize>>
    where
        F: NodeField<usize> + ?Sized,
    {
        Self::from_config(config)?.build_spatiotemporal(
            positions,
            field,
            config.spatial_bandwidth,
            config.temporal_bandwidth,
            config.kernel,
        )
    }
}

impl<B: KernelGraphBuilder> SpatiotemporalComposer<B> {
    pub fn new(builder: B) -> Self {
        Self { builder }
    }

    pub fn builder(&self) -> &B {
        &self.builder
    }

    /// Spatial kernel graph over `positions`, reweighted by the temporal
    /// kernel of `field` differences. Node ids are position indices.
    pub fn build_spatiotemporal<F, K>(
        &self,
        positions: &[Point],
        field: &F,
        spatial_bandwidth: f64,
        temporal_bandwidth: f64,
        kernel: K,
    ) -> GraphResult<Graph<usize>>
    where
        F: NodeField<usize> + ?Sized,
        K: ResolveKernel,
    {
        check_bandwidth(spatial_bandwidth)?;
        check_bandwidth(temporal_bandwidth)?;
        let kernel = kernel.resolve()?;

        let spatial = self.builder.build_kernel(positions, spatial_bandwidth, kernel)?;
        let fused = spatial.scale_by_kernel(field, temporal_bandwidth, kernel)?;
        debug_assert!(fused.edge_keys().eq(spatial.edge_keys()));

        tracing::debug!(
            nodes = positions.len(),
            edges = fused.n_edges(),
            spatial_bandwidth,
            temporal_bandwidth,
            %kernel,
            "built spatiotemporal graph"
        );
        Ok(fused)
    }

    /// Builds the spatial graph once and fuses it with each temporal bandwidth
    /// in parallel. Results follow the order of `temporal_bandwidths`.
    pub fn sweep_temporal<F, K>(
        &self,
        positions: &[Point],
        field: &F,
        spatial_bandwidth: f64,
        temporal_bandwidths: &[f64],
        kernel: K,
    ) -> GraphResult<Vec<Graph<usize>>>
    where
        F: NodeField<usize> + Sync + ?Sized,
        K: ResolveKernel,
    {
        check_bandwidth(spatial_bandwidth)?;
        for &bandwidth in temporal_bandwidths {
            check_bandwidth(bandwidth)?;
        }
        let kernel = kernel.resolve()?;

        let spatial = self.builder.build_kernel(positions, spatial_bandwidth, kernel)?;
        tracing::debug!(
            edges = spatial.n_edges(),
            bandwidths = temporal_bandwidths.len(),
            %kernel,
            "sweeping temporal bandwidths"
        );
        temporal_bandwidths
            .par_iter()
            .map(|&bandwidth| spatial.scale_by_kernel(field, bandwidth, kernel))
            .collect()
    }
}

/// [`SpatiotemporalComposer::build_spatiotemporal`] over the default
/// [`DistanceBandBuilder`].
pub fn build_spatiotemporal<F, K>(
    positions: &[Point],
    field: &F,
    spatial_bandwidth: f64,
    temporal_bandwidth: f64,
    kernel: K,
) -> GraphResult<Graph<usize>>
where
    F: NodeField<usize> + ?Sized,
    K: ResolveKernel,
{
    SpatiotemporalComposer::<DistanceBandBuilder>::default().build_spatiotemporal(
        positions,
        field,
        spatial_bandwidth,
        temporal_bandwidth,
        kernel,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{GraphError, GraphResult};
    use crate::kernel::Kernel;
    use std::cell::Cell;

    // Five points 100m apart, observed 10 days apart.
    fn points() -> Vec<Point> {
        (0..5).map(|i| [i as f64 * 100.0, 0.0]).collect()
    }

    fn days() -> Vec<f64> {
        vec![0.0, 10.0, 20.0, 30.0, 40.0]
    }

    fn mean(g: &Graph<usize>) -> f64 {
        g.mean_weight().unwrap()
    }

    #[test]
    fn test_weights_are_non_negative() {
        for kernel in Kernel::ALL {
            let st = build_spatiotemporal(&points(), &days(), 250.0, 15.0, kernel).unwrap();
            assert!(st.weights().iter().all(|&w| w >= 0.0), "{kernel}");
        }
    }

    #[test]
    fn test_same_edge_structure_as_spatial() {
        let spatial = DistanceBandBuilder::new().build_kernel(&points(), 250.0, Kernel::Gaussian).unwrap();
        let st = build_spatiotemporal(&points(), &days(), 250.0, 15.0, "gaussian").unwrap();
        assert!(st.edge_keys().eq(spatial.edge_keys()));

        let spatial = DistanceBandBuilder::new().build_kernel(&points(), 250.0, Kernel::Bisquare).unwrap();
        let st = build_spatiotemporal(&points(), &days(), 250.0, 5.0, "bisquare").unwrap();
        assert!(st.same_structure(&spatial));
    }

    #[test]
    fn test_wider_temporal_bandwidth_raises_weights() {
        let narrow = build_spatiotemporal(&points(), &days(), 250.0, 5.0, "gaussian").unwrap();
        let wide = build_spatiotemporal(&points(), &days(), 250.0, 100.0, "gaussian").unwrap();
        assert!(mean(&wide) > mean(&narrow));
    }

    #[test]
    fn test_mean_weight_is_monotone_in_temporal_bandwidth() {
        let composer = SpatiotemporalComposer::<DistanceBandBuilder>::default();
        let bandwidths = [1.0, 5.0, 15.0, 50.0, 500.0];
        for kernel in Kernel::ALL {
            let graphs = composer.sweep_temporal(&points(), &days(), 250.0, &bandwidths, kernel).unwrap();
            for pair in graphs.windows(2) {
                assert!(mean(&pair[1]) >= mean(&pair[0]), "{kernel}");
            }
        }
    }

    #[test]
    fn test_weight_is_product_of_components() {
        let st = build_spatiotemporal(&points(), &days(), 250.0, 15.0, Kernel::Gaussian).unwrap();
        let spatial = Kernel::Gaussian.weight(100.0, 250.0).unwrap();
        let temporal = Kernel::Gaussian.weight(10.0, 15.0).unwrap();
        assert!((st.weight(&1, &2).unwrap() - spatial * temporal).abs() < 1e-12);
    }

    #[test]
    fn test_sweep_matches_single_builds() {
        let composer = SpatiotemporalComposer::<DistanceBandBuilder>::default();
        let sweep = composer.sweep_temporal(&points(), &days(), 250.0, &[5.0, 100.0], "gaussian").unwrap();
        assert_eq!(sweep.len(), 2);
        assert_eq!(sweep[0], build_spatiotemporal(&points(), &days(), 250.0, 5.0, "gaussian").unwrap());
        assert_eq!(sweep[1], build_spatiotemporal(&points(), &days(), 250.0, 100.0, "gaussian").unwrap());
        assert!(matches!(
            composer.sweep_temporal(&points(), &days(), 250.0, &[5.0, 0.0], "gaussian"),
            Err(GraphError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_injected_builder_defines_edges() {
        let calls = Cell::new(0);
        let synthetic = |_: &[Point], _: f64, _: Kernel| -> GraphResult<Graph<usize>> {
            calls.set(calls.get() + 1);
            Graph::new([(0usize, 2usize, 1.0), (2, 0, 1.0)])
        };
        let composer = SpatiotemporalComposer::new(synthetic);
        let st = composer.build_spatiotemporal(&[], &vec![0.0, 0.0, 0.0], 1.0, 1.0, "uniform").unwrap();
        assert_eq!(calls.get(), 1);
        assert_eq!(st.weights(), &[0.5, 0.5]);
    }

    #[test]
    fn test_validates_before_building() {
        let calls = Cell::new(0);
        let synthetic = |_: &[Point], _: f64, _: Kernel| -> GraphResult<Graph<usize>> {
            calls.set(calls.get() + 1);
            Ok(Graph::empty())
        };
        let composer = SpatiotemporalComposer::new(synthetic);
        assert!(matches!(
            composer.build_spatiotemporal(&points(), &days(), 250.0, 0.0, "gaussian"),
            Err(GraphError::InvalidParameter(_))
        ));
        assert!(matches!(
            composer.build_spatiotemporal(&points(), &days(), 250.0, 1.0, "gauss"),
            Err(GraphError::UnknownKernel(_))
        ));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_missing_field_value() {
        let err = build_spatiotemporal(&points(), &vec![0.0, 1.0], 250.0, 15.0, "gaussian").unwrap_err();
        assert!(matches!(err, GraphError::MissingFieldValue(_)));
    }

    #[test]
    fn test_build_from_config() {
        let config = SpatiotemporalConfig::from_json(
            r#"{"spatial_bandwidth": 250, "temporal_bandwidth": 15, "kernel": "bisquare"}"#,
        )
        .unwrap();
        let st = SpatiotemporalComposer::<DistanceBandBuilder>::build_from_config(&config, &points(), &days()).unwrap();
        assert_eq!(st, build_spatiotemporal(&points(), &days(), 250.0, 15.0, Kernel::Bisquare).unwrap());
        assert_eq!(st.n_edges(), 14);
    }
}
