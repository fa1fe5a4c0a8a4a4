use crate::{distance::manhattan_to_origin, point::Point};

/// Points strictly closer than this (L1) count as near the origin.
pub const NEAR_ORIGIN_THRESHOLD: f64 = 0.5;

#[must_use]
pub fn is_within(point: &Point, threshold: f64) -> bool {
    manhattan_to_origin(point) < threshold
}

#[must_use]
pub fn is_near_origin(point: &Point) -> bool {
    is_within(point, NEAR_ORIGIN_THRESHOLD)
}
