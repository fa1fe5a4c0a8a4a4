use crate::{
    classify::{is_within, NEAR_ORIGIN_THRESHOLD},
    collection::PointCollection,
    distance::manhattan_to_origin,
    error::{AnalysisError, Result},
    point::Point,
};
use ordered_float::OrderedFloat;

/// The point closest to the origin and where it sits in the collection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Nearest {
    pub index: usize,
    pub point: Point,
    pub distance: f64,
}

impl PointCollection {
    #[must_use]
    pub fn count_within(&self, threshold: f64) -> usize {
        self.iter().filter(|point| is_within(point, threshold)).count()
    }

    #[must_use]
    pub fn count_near_origin(&self) -> usize {
        self.count_within(NEAR_ORIGIN_THRESHOLD)
    }

    /// Single pass over the points keeping the running minimum of the L1
    /// distance to the origin. Only a strictly smaller distance replaces the
    /// current best, so the earliest of several equally near points wins.
    pub fn nearest_to_origin(&self) -> Result<Nearest> {
        let mut nearest: Option<(usize, Point, OrderedFloat<f64>)> = None;
        for (index, point) in self.iter().enumerate() {
            let distance = OrderedFloat(manhattan_to_origin(point));
            if nearest.map_or(true, |(_, _, best)| distance < best) {
                nearest = Some((index, *point, distance));
            }
        }

        let (index, point, distance) = nearest.ok_or(AnalysisError::EmptyCollection)?;
        Ok(Nearest {
            index,
            point,
            distance: distance.into_inner(),
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::{collection::PointCollection, error::AnalysisError, point::Point};

    fn collection(points: &[[f64; 2]]) -> PointCollection {
        points.iter().map(|&p| Point::from(p)).collect()
    }

    #[test]
    fn nearest_picks_minimum() {
        let points = collection(&[[0.0, 0.0], [1.0, 1.0], [0.2, 0.1]]);
        let nearest = points.nearest_to_origin().unwrap();
        assert_eq!(nearest.index, 0);
        assert_eq!(nearest.point, Point::origin());
        assert_eq!(nearest.distance, 0.0);

        let points = collection(&[[1.0, 1.0], [0.2, 0.1], [-0.5, 0.5]]);
        let nearest = points.nearest_to_origin().unwrap();
        assert_eq!(nearest.index, 1);
        assert_eq!(nearest.point, Point::new(0.2, 0.1));
        assert!((nearest.distance - 0.3).abs() < 1e-12);
    }

    #[test]
    fn nearest_tie_goes_to_first() {
        let points = collection(&[[0.3, 0.0], [0.0, 0.3]]);
        let nearest = points.nearest_to_origin().unwrap();
        assert_eq!(nearest.index, 0);
        assert_eq!(nearest.point, Point::new(0.3, 0.0));
        assert_eq!(nearest.distance, 0.3);

        let points = collection(&[[0.9, 0.9], [-0.25, 0.0], [0.0, 0.25], [0.25, 0.0]]);
        assert_eq!(points.nearest_to_origin().unwrap().index, 1);
    }

    #[test]
    fn nearest_on_empty_fails() {
        let points = PointCollection::default();
        assert_eq!(
            points.nearest_to_origin(),
            Err(AnalysisError::EmptyCollection)
        );
    }

    #[test]
    fn count_near_origin() {
        let points = collection(&[[0.0, 0.0], [1.0, 1.0], [0.4, 0.05]]);
        assert_eq!(points.count_near_origin(), 2);
        assert_eq!(points.count_within(0.0), 0);
        assert_eq!(points.count_within(f64::INFINITY), 3);
        assert_eq!(PointCollection::default().count_near_origin(), 0);
    }
}
