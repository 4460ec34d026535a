use crate::formula::constantformula::ConstantFormula;
use crate::formula::formulatype::FormulaType;
use crate::formula::linearformula::LinearFormula;
use crate::formula::quadraticformula::QuadraticFormula;
use crate::formula::sineformula::SineFormula;
use crate::math::point::Point;

/// A closed-form mapping from time to value.
///
/// `value` is total: outside its domain a formula clamps to the value at the
/// nearest edge.
pub trait Interpolation {
    fn value(&self, time: f64) -> f64;

    /// `(start, end)` of the time interval the formula covers, `None` when the
    /// formula does not depend on time.
    fn domain(&self) -> Option<(f64, f64)>;

    /// Every time inside the domain at which the formula takes `value`,
    /// ascending.
    fn times_at_value(&self, value: f64) -> Vec<f64>;

    /// Earliest time at which the formula takes `value`.
    fn first_time_at_value(&self, value: f64) -> Option<f64> {
        self.times_at_value(value).first().copied()
    }

    /// Latest time at which the formula takes `value`.
    fn last_time_at_value(&self, value: f64) -> Option<f64> {
        self.times_at_value(value).last().copied()
    }

    fn time_span(&self) -> Option<f64> {
        self.domain().map(|(start, end)| end - start)
    }

    fn boundary_points(&self) -> Option<(Point, Point)> {
        self.domain().map(|(start, end)| {
            (Point::new(start, self.value(start)), Point::new(end, self.value(end)))
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Formula {
    Constant(ConstantFormula),
    Linear(LinearFormula),
    Quadratic(QuadraticFormula),
    Sine(SineFormula)
}

impl Formula {
    pub fn formula_type(&self) -> FormulaType {
        match self {
            Formula::Constant(_) => FormulaType::Constant,
            Formula::Linear(_) => FormulaType::Linear,
            Formula::Quadratic(_) => FormulaType::Quadratic,
            Formula::Sine(_) => FormulaType::Sine
        }
    }

    fn as_interpolation(&self) -> &dyn Interpolation {
        match self {
            Formula::Constant(formula) => formula,
            Formula::Linear(formula) => formula,
            Formula::Quadratic(formula) => formula,
            Formula::Sine(formula) => formula
        }
    }
}

impl Interpolation for Formula {
    fn value(&self, time: f64) -> f64 {
        self.as_interpolation().value(time)
    }

    fn domain(&self) -> Option<(f64, f64)> {
        self.as_interpolation().domain()
    }

    fn times_at_value(&self, value: f64) -> Vec<f64> {
        self.as_interpolation().times_at_value(value)
    }

    fn first_time_at_value(&self, value: f64) -> Option<f64> {
        self.as_interpolation().first_time_at_value(value)
    }

    fn last_time_at_value(&self, value: f64) -> Option<f64> {
        self.as_interpolation().last_time_at_value(value)
    }
}

impl From<ConstantFormula> for Formula {
    fn from(formula: ConstantFormula) -> Formula {
        Formula::Constant(formula)
    }
}

impl From<LinearFormula> for Formula {
    fn from(formula: LinearFormula) -> Formula {
        Formula::Linear(formula)
    }
}

impl From<QuadraticFormula> for Formula {
    fn from(formula: QuadraticFormula) -> Formula {
        Formula::Quadratic(formula)
    }
}

impl From<SineFormula> for Formula {
    fn from(formula: SineFormula) -> Formula {
        Formula::Sine(formula)
    }
}

/// Accepts a root that floating point pushed just past a domain edge and snaps
/// it back onto the edge.
pub(crate) fn snap_into_domain(time: f64, start: f64, end: f64) -> Option<f64> {
    let tolerance = 1e-9 * (end - start).abs().max(1.0);
    if time < start - tolerance || time > end + tolerance {
        None
    } else {
        Some(time.clamp(start, end))
    }
}

pub(crate) fn sorted_unique(mut times: Vec<f64>) -> Vec<f64> {
    times.sort_by(f64::total_cmp);
    times.dedup_by(|a, b| (*a - *b).abs() <= 1e-12 * a.abs().max(1.0));
    times
}
