use crate::{
    collection::PointCollection,
    error::{AnalysisError, Result},
    generator::PointGenerator,
    scan::Nearest,
};
use conv::ValueFrom;
use rand::Rng;
use tracing::{info, warn};

/// Number of points generated per run.
pub const NUM_POINTS: usize = 100;

/// Run parameters. The near-origin threshold is fixed at
/// [`crate::NEAR_ORIGIN_THRESHOLD`] and is not part of the config.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnalyzerConfig {
    pub num_points: usize,
}

impl AnalyzerConfig {
    pub fn new(num_points: usize) -> Result<Self> {
        if num_points == 0 {
            warn!(num_points, "rejected analyzer config");
            return Err(AnalysisError::InvalidConfig(
                "at least one point is required".to_string(),
            ));
        }
        Ok(AnalyzerConfig { num_points })
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        AnalyzerConfig {
            num_points: NUM_POINTS,
        }
    }
}

/// Outcome of one analysis run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Report {
    pub total: usize,
    pub near_origin: usize,
    pub nearest: Nearest,
}

impl Report {
    pub fn near_origin_fraction(&self) -> Result<f64> {
        let near = f64::value_from(self.near_origin)
            .map_err(|_| AnalysisError::CountConversion(self.near_origin))?;
        let total =
            f64::value_from(self.total).map_err(|_| AnalysisError::CountConversion(self.total))?;
        Ok(near / total)
    }

    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        vec![
            format!(
                "{} of {} points are near the origin.",
                self.near_origin, self.total
            ),
            format!(
                "The nearest point was {} with distance {}",
                self.nearest.point, self.nearest.distance
            ),
        ]
    }
}

#[derive(Debug, Default)]
pub struct Analyzer {
    config: AnalyzerConfig,
}

impl Analyzer {
    #[must_use]
    pub fn new(config: AnalyzerConfig) -> Self {
        Analyzer { config }
    }

    #[must_use]
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Generates the configured number of points from the shared generator.
    #[must_use]
    pub fn generate(&self) -> PointCollection {
        PointCollection::random(self.config.num_points)
    }

    pub fn generate_with<R: Rng>(&self, generator: &mut PointGenerator<R>) -> PointCollection {
        PointCollection::generate(self.config.num_points, generator)
    }

    /// Counts the near-origin points and finds the nearest one.
    pub fn analyze(&self, points: &PointCollection) -> Result<Report> {
        let near_origin = points.count_near_origin();
        let nearest = points.nearest_to_origin()?;
        let report = Report {
            total: points.len(),
            near_origin,
            nearest,
        };
        let fraction = report.near_origin_fraction()?;
        info!(
            total = report.total,
            near_origin,
            fraction,
            nearest_index = nearest.index,
            nearest_distance = nearest.distance,
            "scan finished"
        );
        Ok(report)
    }
}

/// Last line of the output, naming the toolchain the build was made for.
#[must_use]
pub fn build_mode_line() -> String {
    format!(
        "Compiled using Rust {} or later",
        env!("CARGO_PKG_RUST_VERSION")
    )
}
