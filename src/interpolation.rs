//! Flat entry points over formulas and curves.
//!
//! ```
//! use easecurve::interpolation::{compose_curve, evaluate_curve, new_linear};
//! use easecurve::curve::easing::Easing;
//!
//! let main = new_linear((0.0, 0.0), (8.0, 8.0)).unwrap();
//! let curve = compose_curve(&main, Some(Easing::new(4.0, 2.0)), None).unwrap();
//! assert!((evaluate_curve(&curve, 6.0) - 5.0).abs() < 1e-9);
//! ```

use crate::curve::curve::Curve;
use crate::curve::curveerror::CurveError;
use crate::curve::curveoptions::CurveOptions;
use crate::curve::easing::Easing;
use crate::formula::constantformula::ConstantFormula;
use crate::formula::formula::{
    Formula,
    Interpolation
};
use crate::formula::formulaerror::FormulaError;
use crate::formula::linearformula::LinearFormula;
use crate::formula::quadraticformula::QuadraticFormula;
use crate::formula::sineformula::SineFormula;
use crate::math::point::Point;

pub fn new_constant(value: f64) -> Result<Formula, FormulaError> {
    Ok(ConstantFormula::new(value)?.into())
}

pub fn new_linear(start_point: (f64, f64), end_point: (f64, f64)) -> Result<Formula, FormulaError> {
    Ok(LinearFormula::new(start_point.into(), end_point.into())?.into())
}

pub fn new_quadratic(points: [(f64, f64); 3]) -> Result<Formula, FormulaError> {
    Ok(QuadraticFormula::new(points.map(Point::from))?.into())
}

/// Phase and vertical shift default to zero when `None`.
pub fn new_sine(time_range: (f64, f64),
                amplitude: f64,
                frequency: f64,
                phase_shift: Option<f64>,
                vertical_shift: Option<f64>) -> Result<Formula, FormulaError> {
    Ok(SineFormula::new(time_range, amplitude, frequency, phase_shift, vertical_shift)?.into())
}

/// Value of `formula` at `time`, clamped to its domain.
pub fn evaluate(formula: &Formula, time: f64) -> f64 {
    formula.value(time)
}

/// Composes with the default [`CurveOptions`].
pub fn compose_curve(main: &Formula,
                     ease_in: Option<Easing>,
                     ease_out: Option<Easing>) -> Result<Curve, CurveError> {
    compose_curve_with(main, ease_in, ease_out, &CurveOptions::default())
}

pub fn compose_curve_with(main: &Formula,
                          ease_in: Option<Easing>,
                          ease_out: Option<Easing>,
                          options: &CurveOptions) -> Result<Curve, CurveError> {
    Curve::new(main, ease_in, ease_out, options)
}

pub fn evaluate_curve(curve: &Curve, time: f64) -> f64 {
    curve.value(time)
}

pub fn curve_start_point(curve: &Curve) -> (f64, f64) {
    let point = curve.start_point();
    (point.time(), point.value())
}

pub fn curve_end_point(curve: &Curve) -> (f64, f64) {
    let point = curve.end_point();
    (point.time(), point.value())
}
