use tracing::trace;

use crate::formula::formula::{
    snap_into_domain,
    Interpolation
};
use crate::formula::formulaerror::FormulaError;
use crate::math::point::Point;

/// Straight line between two points, flat outside them.
///
/// The points are stored in ascending time order whatever order they were given in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearFormula {
    start_point: Point,
    end_point: Point,
    slope: f64,
    offset: f64
}

impl LinearFormula {
    pub fn new(start_point: Point, end_point: Point) -> Result<LinearFormula, FormulaError> {
        if !start_point.is_defined() {
            return Err(FormulaError::InvalidPoint("start point".to_owned()));
        }
        if !end_point.is_defined() {
            return Err(FormulaError::InvalidPoint("end point".to_owned()));
        }
        if end_point.time() - start_point.time() == 0.0 {
            return Err(FormulaError::DegenerateTimeRange("start point and end point"));
        }

        let (start_point, end_point) = if start_point.time() < end_point.time() {
            (start_point, end_point)
        } else {
            (end_point, start_point)
        };
        let slope = Point::slope(&start_point, &end_point);
        let offset = start_point.value() - slope * start_point.time();
        trace!(slope, offset, "linear formula built");
        Ok(LinearFormula { start_point, end_point, slope, offset })
    }

    pub fn start_point(&self) -> Point {
        self.start_point
    }

    pub fn end_point(&self) -> Point {
        self.end_point
    }

    pub fn slope(&self) -> f64 {
        self.slope
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }
}

impl Interpolation for LinearFormula {
    fn value(&self, time: f64) -> f64 {
        if time <= self.start_point.time() {
            self.start_point.value()
        } else if time >= self.end_point.time() {
            self.end_point.value()
        } else {
            self.slope * time + self.offset
        }
    }

    fn domain(&self) -> Option<(f64, f64)> {
        Some((self.start_point.time(), self.end_point.time()))
    }

    fn times_at_value(&self, value: f64) -> Vec<f64> {
        let (start, end) = (self.start_point.time(), self.end_point.time());
        if self.slope == 0.0 {
            return if value == self.start_point.value() { vec![start, end] } else { Vec::new() };
        }
        snap_into_domain((value - self.offset) / self.slope, start, end)
            .into_iter()
            .collect()
    }
}
