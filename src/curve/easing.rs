use std::fmt;

use serde::{
    Deserialize,
    Serialize
};

use crate::formula::constantformula::ConstantFormula;
use crate::formula::formula::Formula;
use crate::formula::formulaerror::FormulaError;
use crate::formula::formulatype::FormulaType;
use crate::formula::linearformula::LinearFormula;
use crate::formula::quadraticformula::QuadraticFormula;
use crate::formula::sineformula::SineFormula;
use crate::math::point::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EasingEdge {
    EaseIn,
    EaseOut
}

impl EasingEdge {
    pub fn as_str(&self) -> &'static str {
        match self {
            EasingEdge::EaseIn => "easeIn",
            EasingEdge::EaseOut => "easeOut"
        }
    }

    pub(crate) fn time_field(&self) -> &'static str {
        match self {
            EasingEdge::EaseIn => "easeIn.time",
            EasingEdge::EaseOut => "easeOut.time"
        }
    }

    pub(crate) fn distance_field(&self) -> &'static str {
        match self {
            EasingEdge::EaseIn => "easeIn.distance",
            EasingEdge::EaseOut => "easeOut.distance"
        }
    }
}

impl fmt::Display for EasingEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Shape of an ease transition, one variant per formula kind.
///
/// A template only carries what its kind cannot derive from the two points it
/// joins. `Constant` switches the ease off.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EaseTemplate {
    Constant,
    #[default]
    Linear,
    /// Parabola through the midpoint at `from + interior_ratio·(to − from)`.
    /// Defaults to 0.25 on ease-in and 0.75 on ease-out, which puts the vertex
    /// on the outer edge.
    Quadratic {
        #[serde(default)]
        interior_ratio: Option<f64>
    },
    /// Half cosine wave, flat at both ends.
    Sine
}

impl EaseTemplate {
    pub fn formula_type(&self) -> FormulaType {
        match self {
            EaseTemplate::Constant => FormulaType::Constant,
            EaseTemplate::Linear => FormulaType::Linear,
            EaseTemplate::Quadratic { .. } => FormulaType::Quadratic,
            EaseTemplate::Sine => FormulaType::Sine
        }
    }

    /// Builds the formula of this kind running from `from` to `to`.
    /// `from` must be earlier than `to`.
    pub fn build(&self, edge: EasingEdge, from: Point, to: Point) -> Result<Formula, FormulaError> {
        let formula: Formula = match self {
            EaseTemplate::Constant => ConstantFormula::new(from.value())?.into(),
            EaseTemplate::Linear => LinearFormula::new(from, to)?.into(),
            EaseTemplate::Quadratic { interior_ratio } => {
                let ratio = interior_ratio.unwrap_or(match edge {
                    EasingEdge::EaseIn => 0.25,
                    EasingEdge::EaseOut => 0.75
                });
                let interior = Point::new(
                    0.5 * (from.time() + to.time()),
                    from.value() + ratio * (to.value() - from.value()));
                QuadraticFormula::new([from, interior, to])?.into()
            },
            EaseTemplate::Sine => {
                // Δ/2·sin(π/d·(x − d/2)) + from + Δ/2 = from + Δ·(1 − cos(πx/d))/2
                let duration = to.time() - from.time();
                let travel = to.value() - from.value();
                SineFormula::new(
                    (from.time(), to.time()),
                    0.5 * travel,
                    2.0 * duration,
                    Some(-0.5 * duration),
                    Some(from.value() + 0.5 * travel))?.into()
            }
        };
        Ok(formula)
    }
}

/// An ease-in or ease-out request: how long it lasts, how far the value moves
/// during it, and the shape of the move.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Easing {
    time: f64,
    distance: f64,
    template: EaseTemplate
}

impl Easing {
    pub fn new(time: f64, distance: f64) -> Easing {
        Easing { time, distance, template: EaseTemplate::default() }
    }

    pub fn with_template(self, template: EaseTemplate) -> Easing {
        Easing { template, ..self }
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn template(&self) -> EaseTemplate {
        self.template
    }

    /// An ease contributes a segment only when it takes time, moves the value,
    /// and is not a constant hold.
    pub fn is_active(&self) -> bool {
        self.time > 0.0 && self.distance != 0.0 && self.template.formula_type() != FormulaType::Constant
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::formula::formula::Interpolation;

    const FROM: Point = Point::new(0.0, 0.0);

    fn to() -> Point {
        Point::new(4.0, 2.0)
    }

    #[test]
    fn test_activity() {
        assert!(Easing::new(4.0, 2.0).is_active());
        assert!(!Easing::new(0.0, 2.0).is_active());
        assert!(!Easing::new(4.0, 0.0).is_active());
        assert!(!Easing::new(4.0, 2.0).with_template(EaseTemplate::Constant).is_active());
        assert!(Easing::new(4.0, -2.0).with_template(EaseTemplate::Sine).is_active());
    }

    #[test]
    fn test_every_template_joins_the_points() {
        let templates = [
            EaseTemplate::Linear,
            EaseTemplate::Quadratic { interior_ratio: None },
            EaseTemplate::Quadratic { interior_ratio: Some(0.6) },
            EaseTemplate::Sine
        ];
        for edge in [EasingEdge::EaseIn, EasingEdge::EaseOut] {
            for template in templates {
                let formula = template.build(edge, FROM, to()).unwrap();
                assert_eq!(formula.formula_type(), template.formula_type());
                assert_abs_diff_eq!(formula.value(0.0), 0.0, epsilon = 1e-12);
                assert_abs_diff_eq!(formula.value(4.0), 2.0, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_quadratic_default_interior() {
        let ease_in = EaseTemplate::Quadratic { interior_ratio: None }.build(EasingEdge::EaseIn, FROM, to()).unwrap();
        assert_abs_diff_eq!(ease_in.value(2.0), 0.5, epsilon = 1e-12);
        let ease_out = EaseTemplate::Quadratic { interior_ratio: None }.build(EasingEdge::EaseOut, FROM, to()).unwrap();
        assert_abs_diff_eq!(ease_out.value(2.0), 1.5, epsilon = 1e-12);
    }

    #[test]
    fn test_sine_is_half_cosine() {
        let formula = EaseTemplate::Sine.build(EasingEdge::EaseIn, FROM, to()).unwrap();
        assert_abs_diff_eq!(formula.value(2.0), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(formula.value(1.0), 1.0 - (std::f64::consts::FRAC_PI_4).cos(), epsilon = 1e-12);
    }

    #[test]
    fn test_template_json() {
        let template: EaseTemplate = serde_json::from_str(r#"{ "type": "Quadratic", "interior_ratio": 0.1 }"#).unwrap();
        assert_eq!(template, EaseTemplate::Quadratic { interior_ratio: Some(0.1) });
        let template: EaseTemplate = serde_json::from_str(r#"{ "type": "Sine" }"#).unwrap();
        assert_eq!(template, EaseTemplate::Sine);
    }
}
