use serde::{
    Deserialize,
    Serialize
};
use tracing::debug;

use crate::formula::constantformula::ConstantFormula;
use crate::formula::formula::{
    Formula,
    Interpolation
};
use crate::formula::formulaerror::FormulaError;
use crate::formula::formulatype::FormulaType;
use crate::formula::linearformula::LinearFormula;
use crate::formula::quadraticformula::{
    sorted_points,
    QuadraticFormula
};
use crate::formula::sineformula::{
    validate_shape,
    SineFormula
};
use crate::math::point::Point;

/// Formula parameters as a caller or a JSON document supplies them.
///
/// Every field may be absent and points are plain coordinate lists, so nothing
/// here is trusted until [`FormulaSettings::build`] validates it.
///
/// ```json
/// { "type": "Linear", "start_point": [0.0, 0.0], "end_point": [8.0, 8.0] }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FormulaSettings {
    Constant {
        value: Option<f64>
    },
    Linear {
        start_point: Option<Vec<f64>>,
        end_point: Option<Vec<f64>>
    },
    Quadratic {
        points: Option<Vec<Option<Vec<f64>>>>
    },
    Sine {
        time_range: Option<Vec<f64>>,
        amplitude: Option<f64>,
        frequency: Option<f64>,
        phase_shift: Option<f64>,
        vertical_shift: Option<f64>
    }
}

impl FormulaSettings {
    pub fn formula_type(&self) -> FormulaType {
        match self {
            FormulaSettings::Constant { .. } => FormulaType::Constant,
            FormulaSettings::Linear { .. } => FormulaType::Linear,
            FormulaSettings::Quadratic { .. } => FormulaType::Quadratic,
            FormulaSettings::Sine { .. } => FormulaType::Sine
        }
    }

    pub fn build(&self) -> Result<Formula, FormulaError> {
        let formula: Formula = match self {
            FormulaSettings::Constant { value } => {
                ConstantFormula::new(required(*value, "value")?)?.into()
            },
            FormulaSettings::Linear { start_point, end_point } => {
                let start_point = point(start_point.as_deref(), "start point")?;
                let end_point = point(end_point.as_deref(), "end point")?;
                LinearFormula::new(start_point, end_point)?.into()
            },
            FormulaSettings::Quadratic { points } => {
                QuadraticFormula::new(three_points(points.as_deref())?)?.into()
            },
            FormulaSettings::Sine { time_range, amplitude, frequency, phase_shift, vertical_shift } => {
                let amplitude = required(*amplitude, "amplitude")?;
                let frequency = required(*frequency, "frequency")?;
                SineFormula::new(range(time_range.as_deref())?, amplitude, frequency, *phase_shift, *vertical_shift)?.into()
            }
        };
        debug!(formula_type = %formula.formula_type(), "formula built from settings");
        Ok(formula)
    }

    /// Elapsed time the formula will cover, `None` for a constant.
    ///
    /// Only the fields that determine the time range are checked.
    pub fn time_span(&self) -> Result<Option<f64>, FormulaError> {
        match self {
            FormulaSettings::Constant { .. } => Ok(None),
            FormulaSettings::Linear { start_point, end_point } => {
                let start_point = point(start_point.as_deref(), "start point")?;
                let end_point = point(end_point.as_deref(), "end point")?;
                Ok(Some((end_point.time() - start_point.time()).abs()))
            },
            FormulaSettings::Quadratic { points } => {
                let points = sorted_points(three_points(points.as_deref())?)?;
                Ok(Some(points[2].time() - points[0].time()))
            },
            FormulaSettings::Sine { time_range, frequency, .. } => {
                let frequency = required(*frequency, "frequency")?;
                let (start, end) = validate_shape(range(time_range.as_deref())?, frequency)?;
                Ok(Some(end - start))
            }
        }
    }

    /// `(time, value)` at each edge of the formula, `None` for a constant.
    pub fn boundary_points(&self) -> Result<Option<(Point, Point)>, FormulaError> {
        match self {
            FormulaSettings::Constant { .. } => Ok(None),
            FormulaSettings::Linear { start_point, end_point } => {
                let start_point = point(start_point.as_deref(), "start point")?;
                let end_point = point(end_point.as_deref(), "end point")?;
                if start_point.time() <= end_point.time() {
                    Ok(Some((start_point, end_point)))
                } else {
                    Ok(Some((end_point, start_point)))
                }
            },
            FormulaSettings::Quadratic { points } => {
                let points = sorted_points(three_points(points.as_deref())?)?;
                Ok(Some((points[0], points[2])))
            },
            FormulaSettings::Sine { .. } => Ok(self.build()?.boundary_points())
        }
    }
}

fn required(value: Option<f64>, name: &'static str) -> Result<f64, FormulaError> {
    value
        .filter(|x| !x.is_nan())
        .ok_or(FormulaError::MissingParameter(name))
}

fn point(coordinates: Option<&[f64]>, name: &str) -> Result<Point, FormulaError> {
    coordinates
        .and_then(Point::from_coordinates)
        .ok_or_else(|| FormulaError::InvalidPoint(name.to_owned()))
}

fn three_points(points: Option<&[Option<Vec<f64>>]>) -> Result<[Point; 3], FormulaError> {
    let points = points.ok_or(FormulaError::MissingParameter("points"))?;
    let mut result = [Point::new(0.0, 0.0); 3];
    for (index, slot) in result.iter_mut().enumerate() {
        let coordinates = points.get(index).and_then(|pt| pt.as_deref());
        *slot = point(coordinates, &format!("point {}", index))?;
    }
    Ok(result)
}

/// First and last entries of the range list.
fn range(time_range: Option<&[f64]>) -> Result<(f64, f64), FormulaError> {
    match time_range {
        Some([start, .., end]) => Ok((*start, *end)),
        _ => Err(FormulaError::MissingParameter("time range"))
    }
}
