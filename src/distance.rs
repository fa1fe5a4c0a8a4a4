use crate::point::Point;

/// L1 distance of `point` to the origin, `|x| + |y|`.
#[must_use]
pub fn manhattan_to_origin(point: &Point) -> f64 {
    point.x.abs() + point.y.abs()
}

#[cfg(test)]
mod tests {
    use super::manhattan_to_origin;
    use crate::point::Point;

    #[test]
    fn to_origin_is_sum_of_abs() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(-0.75, 0.25),
            Point::new(1.0, -1.0),
            Point::new(-0.125, -0.5),
        ];
        for point in points {
            let expected = point.x.abs() + point.y.abs();
            assert_eq!(manhattan_to_origin(&point), expected);
            // Pure: a second call sees the same value.
            assert_eq!(manhattan_to_origin(&point), manhattan_to_origin(&point));
        }
    }

    #[test]
    fn sign_does_not_matter() {
        let distance = manhattan_to_origin(&Point::new(0.5, 0.25));
        assert_eq!(manhattan_to_origin(&Point::new(-0.5, 0.25)), distance);
        assert_eq!(manhattan_to_origin(&Point::new(0.5, -0.25)), distance);
        assert_eq!(manhattan_to_origin(&Point::new(-0.5, -0.25)), distance);
        assert_eq!(distance, 0.75);
    }
}
