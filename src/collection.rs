use crate::{
    generator::{random_point, PointGenerator},
    point::Point,
};
use rand::Rng;

/// Ordered, fixed-size set of points. Read-only once built.
#[derive(Clone, Debug, Default)]
pub struct PointCollection {
    points: Vec<Point>,
}

impl PointCollection {
    #[must_use]
    pub fn new(points: Vec<Point>) -> Self {
        PointCollection { points }
    }

    /// Fills a collection of `num_points` from the shared generator.
    #[must_use]
    pub fn random(num_points: usize) -> Self {
        (0..num_points).map(|_| random_point()).collect()
    }

    pub fn generate<R: Rng>(num_points: usize, generator: &mut PointGenerator<R>) -> Self {
        generator.take(num_points).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }
}

impl From<Vec<Point>> for PointCollection {
    fn from(points: Vec<Point>) -> Self {
        Self::new(points)
    }
}

impl FromIterator<Point> for PointCollection {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a PointCollection {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
