use serde::{
    Deserialize,
    Serialize
};

/// A `(time, value)` pair.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    time: f64,
    value: f64
}

impl Point {
    pub const fn new(time: f64, value: f64) -> Point {
        Point { time, value }
    }

    /// Builds a point from a loosely sized coordinate list, ignoring anything past
    /// the second coordinate. Returns `None` when fewer than two finite
    /// coordinates are present.
    pub fn from_coordinates(coordinates: &[f64]) -> Option<Point> {
        match coordinates {
            [time, value, ..] if !time.is_nan() && !value.is_nan() => Some(Point::new(*time, *value)),
            _ => None
        }
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn is_defined(&self) -> bool {
        !self.time.is_nan() && !self.value.is_nan()
    }

    pub fn slope(lhs_pt: &Point, rhs_pt: &Point) -> f64 {
        (rhs_pt.value - lhs_pt.value) / (rhs_pt.time - lhs_pt.time)
    }
}

impl From<(f64, f64)> for Point {
    fn from((time, value): (f64, f64)) -> Point {
        Point::new(time, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_coordinates_requires_two_components() {
        assert_eq!(Point::from_coordinates(&[1.0, 2.0]), Some(Point::new(1.0, 2.0)));
        assert_eq!(Point::from_coordinates(&[1.0, 2.0, 3.0]), Some(Point::new(1.0, 2.0)));
        assert_eq!(Point::from_coordinates(&[1.0]), None);
        assert_eq!(Point::from_coordinates(&[]), None);
        assert_eq!(Point::from_coordinates(&[f64::NAN, 1.0]), None);
    }

    #[test]
    fn test_slope() {
        let lhs = Point::new(0.0, 1.0);
        let rhs = Point::new(2.0, 5.0);
        assert_eq!(Point::slope(&lhs, &rhs), 2.0);
    }
}
