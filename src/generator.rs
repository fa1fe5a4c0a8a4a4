use crate::point::Point;
use rand::{
    distributions::{Distribution, Uniform},
    rngs::StdRng,
    Rng, SeedableRng,
};
use std::cell::RefCell;
use tracing::debug;

pub const COORDINATE_MIN: f64 = -1.0;
pub const COORDINATE_MAX: f64 = 1.0;

thread_local! {
    // Seeded from OS entropy on first use and kept for the life of the thread.
    static GENERATOR: RefCell<PointGenerator<StdRng>> =
        RefCell::new(PointGenerator::new(StdRng::from_entropy()));
}

/// Draws a point from the shared generator.
///
/// Both coordinates are independent and uniform on `[-1, 1]`. The generator
/// state lives in a thread local, so sequential callers on one thread share a
/// single stream.
#[must_use]
pub fn random_point() -> Point {
    GENERATOR.with(|generator| generator.borrow_mut().next_point())
}

/// Uniform point source over a caller-supplied RNG.
pub struct PointGenerator<R> {
    rng: R,
    uniform: Uniform<f64>,
}

impl<R: Rng> PointGenerator<R> {
    #[must_use]
    pub fn new(rng: R) -> Self {
        PointGenerator {
            rng,
            uniform: Uniform::new_inclusive(COORDINATE_MIN, COORDINATE_MAX),
        }
    }

    pub fn next_point(&mut self) -> Point {
        let x = self.uniform.sample(&mut self.rng);
        let y = self.uniform.sample(&mut self.rng);
        let point = Point::new(x, y);
        debug!(%point, "new point created");
        point
    }
}

impl PointGenerator<StdRng> {
    /// Reproducible generator for tests and benchmarks.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Iterator for PointGenerator<R> {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        Some(self.next_point())
    }
}
