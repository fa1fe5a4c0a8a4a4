mod classify;
mod collection;
mod distance;
mod error;
mod generator;
mod point;
mod report;
mod scan;

pub use classify::{is_near_origin, is_within, NEAR_ORIGIN_THRESHOLD};
pub use collection::PointCollection;
pub use distance::manhattan_to_origin;
pub use error::{AnalysisError, Result};
pub use generator::{random_point, PointGenerator, COORDINATE_MAX, COORDINATE_MIN};
pub use point::Point;
pub use report::{build_mode_line, Analyzer, AnalyzerConfig, Report, NUM_POINTS};
pub use scan::Nearest;
