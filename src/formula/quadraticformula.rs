use tracing::trace;

use crate::formula::formula::{
    snap_into_domain,
    sorted_unique,
    Interpolation
};
use crate::formula::formulaerror::FormulaError;
use crate::math::linearsolver::cramerrule;
use crate::math::point::Point;

/// `a·t² + b·t + c` fitted exactly through three points, flat outside them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuadraticFormula {
    /// Ascending by time.
    points: [Point; 3],
    a: f64,
    b: f64,
    c: f64
}

impl QuadraticFormula {
    pub fn new(points: [Point; 3]) -> Result<QuadraticFormula, FormulaError> {
        let points = sorted_points(points)?;

        // t_k²·a + t_k·b + c = v_k
        let row = |pt: &Point| [pt.time() * pt.time(), pt.time(), 1.0];
        let rhs = [points[0].value(), points[1].value(), points[2].value()];
        let coefs = cramerrule::solve(row(&points[0]), row(&points[1]), row(&points[2]), rhs)?
            .filter(|coefs| coefs.iter().all(|x| x.is_finite()))
            .ok_or(FormulaError::UnsolvableSystem)?;

        let [a, b, c] = coefs;
        trace!(a, b, c, "quadratic formula built");
        Ok(QuadraticFormula { points, a, b, c })
    }

    pub fn points(&self) -> [Point; 3] {
        self.points
    }

    pub fn coefficients(&self) -> (f64, f64, f64) {
        (self.a, self.b, self.c)
    }

    fn polynomial(&self, time: f64) -> f64 {
        f64::mul_add(f64::mul_add(self.a, time, self.b), time, self.c)
    }
}

/// Validates the three points and returns them ordered by time.
pub(crate) fn sorted_points(mut points: [Point; 3]) -> Result<[Point; 3], FormulaError> {
    for (index, pt) in points.iter().enumerate() {
        if !pt.is_defined() {
            return Err(FormulaError::InvalidPoint(format!("point {}", index)));
        }
    }
    points.sort_by(|lhs, rhs| lhs.time().total_cmp(&rhs.time()));
    if points.windows(2).any(|pair| pair[0].time() == pair[1].time()) {
        return Err(FormulaError::DegenerateTimeRange("points"));
    }
    Ok(points)
}

impl Interpolation for QuadraticFormula {
    fn value(&self, time: f64) -> f64 {
        if time <= self.points[0].time() {
            self.points[0].value()
        } else if time >= self.points[2].time() {
            self.points[2].value()
        } else {
            self.polynomial(time)
        }
    }

    fn domain(&self) -> Option<(f64, f64)> {
        Some((self.points[0].time(), self.points[2].time()))
    }

    fn times_at_value(&self, value: f64) -> Vec<f64> {
        let (start, end) = (self.points[0].time(), self.points[2].time());
        let c = self.c - value;
        let roots = if self.a == 0.0 {
            if self.b == 0.0 {
                if c == 0.0 { vec![start, end] } else { Vec::new() }
            } else {
                vec![-c / self.b]
            }
        } else {
            let discriminant = self.b * self.b - 4.0 * self.a * c;
            if discriminant < 0.0 {
                Vec::new()
            } else {
                // q = -(b + sign(b)·√Δ) / 2 avoids cancellation; roots are q/a and c/q.
                let q = -0.5 * (self.b + self.b.signum() * discriminant.sqrt());
                if q == 0.0 {
                    vec![0.0]
                } else {
                    vec![q / self.a, c / q]
                }
            }
        };
        sorted_unique(
            roots
                .into_iter()
                .filter_map(|time| snap_into_domain(time, start, end))
                .collect())
    }
}
