use serde::{
    Deserialize,
    Serialize
};

use crate::curve::curve::Curve;
use crate::curve::curveerror::CurveError;
use crate::curve::curveoptions::CurveOptions;
use crate::curve::easing::{
    EaseTemplate,
    Easing,
    EasingEdge
};
use crate::formula::formulaerror::FormulaError;
use crate::formula::formulasettings::FormulaSettings;

/// Easing parameters as supplied in a curve document.
///
/// ```json
/// { "time": 4.0, "distance": 2.0, "template": { "type": "Sine" } }
/// ```
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct EasingSettings {
    pub time: Option<f64>,
    pub distance: Option<f64>,
    #[serde(default)]
    pub template: EaseTemplate
}

impl EasingSettings {
    pub fn new(time: f64, distance: f64) -> EasingSettings {
        EasingSettings { time: Some(time), distance: Some(distance), template: EaseTemplate::default() }
    }

    pub fn build(&self, edge: EasingEdge) -> Result<Easing, FormulaError> {
        let time = self.time.ok_or(FormulaError::MissingParameter(edge.time_field()))?;
        let distance = self.distance.ok_or(FormulaError::MissingParameter(edge.distance_field()))?;
        Ok(Easing::new(time, distance).with_template(self.template))
    }
}

/// A main formula with its optional easing, the unit a curve document
/// describes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurveSettings {
    pub formula: FormulaSettings,
    #[serde(default)]
    pub ease_in: Option<EasingSettings>,
    #[serde(default)]
    pub ease_out: Option<EasingSettings>
}

impl CurveSettings {
    pub fn new(formula: FormulaSettings) -> CurveSettings {
        CurveSettings { formula, ease_in: None, ease_out: None }
    }

    pub fn with_ease_in(mut self, ease_in: EasingSettings) -> CurveSettings {
        self.ease_in = Some(ease_in);
        self
    }

    pub fn with_ease_out(mut self, ease_out: EasingSettings) -> CurveSettings {
        self.ease_out = Some(ease_out);
        self
    }

    pub fn build(&self, options: &CurveOptions) -> Result<Curve, CurveError> {
        let formula = self.formula.build()?;
        let ease_in = self.ease_in.as_ref().map(|settings| settings.build(EasingEdge::EaseIn)).transpose()?;
        let ease_out = self.ease_out.as_ref().map(|settings| settings.build(EasingEdge::EaseOut)).transpose()?;
        Curve::new(&formula, ease_in, ease_out, options)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use serde_json::json;

    use super::*;
    use crate::curve::curveerror::BudgetViolation;

    #[test]
    fn test_build_from_json() {
        let settings: CurveSettings = serde_json::from_value(json!({
            "formula": { "type": "Linear", "start_point": [0.0, 0.0], "end_point": [8.0, 8.0] },
            "ease_in": { "time": 4.0, "distance": 2.0 }
        })).unwrap();
        assert_eq!(settings.ease_in.as_ref().unwrap().template, EaseTemplate::Linear);
        assert!(settings.ease_out.is_none());

        let curve = settings.build(&CurveOptions::default()).unwrap();
        assert_abs_diff_eq!(curve.value(2.0), 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(curve.value(6.0), 5.0, epsilon = 1e-9);
    }

    #[test]
    fn test_template_from_json() {
        let settings: EasingSettings = serde_json::from_value(json!({
            "time": 1.0,
            "distance": 0.5,
            "template": { "type": "Quadratic", "interior_ratio": 0.5 }
        })).unwrap();
        assert_eq!(settings.template, EaseTemplate::Quadratic { interior_ratio: Some(0.5) });
    }

    #[test]
    fn test_missing_easing_field() {
        let settings = EasingSettings { time: Some(1.0), distance: None, template: EaseTemplate::Linear };
        assert_eq!(settings.build(EasingEdge::EaseOut), Err(FormulaError::MissingParameter("easeOut.distance")));

        let curve = CurveSettings::new(FormulaSettings::Constant { value: Some(1.0) })
            .with_ease_in(EasingSettings::default());
        assert_eq!(curve.build(&CurveOptions::default()), Err(CurveError::from(FormulaError::MissingParameter("easeIn.time"))));
    }

    #[test]
    fn test_budget_violation_surfaces() {
        let settings = CurveSettings::new(FormulaSettings::Linear {
            start_point: Some(vec![0.0, 0.0]),
            end_point: Some(vec![2.0, 2.0])
        })
        .with_ease_in(EasingSettings::new(2.0, 1.0))
        .with_ease_out(EasingSettings::new(2.0, 1.0));
        assert_eq!(
            settings.build(&CurveOptions::default()),
            Err(CurveError::EasingBudgetExceeded(BudgetViolation::CombinedTimeExceedsElapsed)));
    }
}
