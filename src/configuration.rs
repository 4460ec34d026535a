use std::cell::{
    Cell,
    RefCell,
    RefMut
};
use std::fs::File;
use std::io::BufReader;

use serde::Deserialize;
use tracing::debug;

use crate::curve::curvemanager::CurveManager;
use crate::curve::curveoptions::CurveOptions;
use crate::formula::formula::Formula;
use crate::formula::formulamanager::FormulaManager;
use crate::manager::manager::{
    IManager,
    Manager
};
use crate::manager::managererror::ManagerError;

#[derive(Deserialize)]
struct ConfigurationJsonProp {
    #[serde(default)]
    options: CurveOptions,
    #[serde(default)]
    formulas: Vec<serde_json::Value>,
    #[serde(default)]
    curves: Vec<serde_json::Value>
}

/// Composition options plus the named formulas and curves of one document.
///
/// ```json
/// {
///     "options": { "model": "TimeBands", "distance_validation": "Bounded" },
///     "formulas": [ { "name": "ramp", "type": "Linear", "start_point": [0, 0], "end_point": [8, 8] } ],
///     "curves": [ { "name": "fade", "formula": { "type": "Constant", "value": 1.0 } } ]
/// }
/// ```
pub struct Configuration {
    options: Cell<CurveOptions>,
    formula_manager_cell: RefCell<Manager<Formula>>,
    curve_manager_cell: RefCell<CurveManager>
}

impl Configuration {
    pub fn new() -> Configuration {
        Configuration {
            options: Cell::new(CurveOptions::default()),
            formula_manager_cell: RefCell::new(FormulaManager::new()),
            curve_manager_cell: RefCell::new(CurveManager::new())
        }
    }

    pub fn options(&self) -> CurveOptions {
        self.options.get()
    }

    pub fn formula_manager(&self) -> RefMut<'_, Manager<Formula>> {
        self.formula_manager_cell.borrow_mut()
    }

    pub fn curve_manager(&self) -> RefMut<'_, CurveManager> {
        self.curve_manager_cell.borrow_mut()
    }

    pub fn from_reader(&self, file_path: &str) -> Result<(), ManagerError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_value: serde_json::Value = serde_json::from_reader(reader)?;
        self.from_json(json_value)
    }

    /// Options in the document apply to the curves it declares. Curves built
    /// later take `options()` explicitly as their supports.
    ///
    /// Nothing is registered and the options are left as they were when any
    /// object in the document fails.
    pub fn from_json(&self, json_value: serde_json::Value) -> Result<(), ManagerError> {
        let json_prop: ConfigurationJsonProp = ManagerError::from_json_or_json_parse_error(json_value)?;
        let formulas = FormulaManager::new();
        formulas.insert_obj_from_json_vec(&json_prop.formulas, &())?;
        let curves = CurveManager::new();
        curves.insert_obj_from_json_vec(&json_prop.curves, &json_prop.options)?;

        self.formula_manager().map().extend(formulas.map().drain());
        self.curve_manager().map().extend(curves.map().drain());
        self.options.set(json_prop.options);
        debug!(
            formulas = json_prop.formulas.len(),
            curves = json_prop.curves.len(),
            "configuration loaded");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use serde_json::json;

    use super::*;
    use crate::curve::curveoptions::{
        CompositionModel,
        DistanceValidation
    };
    use crate::formula::formula::Interpolation;

    #[test]
    fn test_from_json() {
        let configuration = Configuration::new();
        configuration.from_json(json!({
            "options": { "model": "Segmented" },
            "formulas": [
                { "name": "wave", "type": "Sine", "time_range": [0.0, 4.0], "amplitude": 1.0, "frequency": 4.0 }
            ],
            "curves": [
                {
                    "name": "fade",
                    "formula": { "type": "Linear", "start_point": [0.0, 0.0], "end_point": [8.0, 8.0] },
                    "ease_out": { "time": 4.0, "distance": 2.0 }
                }
            ]
        })).unwrap();

        assert_eq!(configuration.options().model(), CompositionModel::Segmented);
        assert_eq!(configuration.options().distance_validation(), DistanceValidation::Unchecked);
        let wave = configuration.formula_manager().get("wave").unwrap();
        assert_abs_diff_eq!(wave.value(1.0), 1.0, epsilon = 1e-12);
        let fade = configuration.curve_manager().get("fade").unwrap();
        assert_abs_diff_eq!(fade.value(2.0), 3.0, epsilon = 1e-9);
    }

    #[test]
    fn test_sections_are_optional() {
        let configuration = Configuration::new();
        configuration.from_json(json!({})).unwrap();
        assert_eq!(configuration.options(), CurveOptions::default());
        assert!(configuration.curve_manager().names().is_empty());
    }

    #[test]
    fn test_bounded_distance_applies_to_curves() {
        let configuration = Configuration::new();
        let result = configuration.from_json(json!({
            "options": { "distance_validation": "Bounded" },
            "curves": [
                {
                    "name": "overshoot",
                    "formula": { "type": "Linear", "start_point": [0.0, 0.0], "end_point": [8.0, 8.0] },
                    "ease_in": { "time": 1.0, "distance": 9.0 }
                }
            ]
        }));
        assert!(matches!(result, Err(ManagerError::CurveError(_))));
    }

    #[test]
    fn test_failed_document_registers_nothing() {
        let configuration = Configuration::new();
        let result = configuration.from_json(json!({
            "options": { "model": "Segmented" },
            "formulas": [
                { "name": "ramp", "type": "Linear", "start_point": [0.0, 0.0], "end_point": [8.0, 8.0] }
            ],
            "curves": [
                {
                    "name": "broken",
                    "formula": { "type": "Linear", "start_point": [0.0, 0.0], "end_point": [8.0, 8.0] },
                    "ease_in": { "time": 9001.0, "distance": 1.0 }
                }
            ]
        }));
        assert!(matches!(result, Err(ManagerError::CurveError(_))));
        assert!(!configuration.formula_manager().contains("ramp"));
        assert!(configuration.curve_manager().names().is_empty());
        assert_eq!(configuration.options(), CurveOptions::default());
    }

    #[test]
    fn test_options_feed_later_curves() {
        let configuration = Configuration::new();
        configuration.from_json(json!({ "options": { "distance_validation": "Bounded" } })).unwrap();
        let later = json!({
            "name": "overshoot",
            "formula": { "type": "Linear", "start_point": [0.0, 0.0], "end_point": [8.0, 8.0] },
            "ease_in": { "time": 1.0, "distance": 9.0 }
        });
        let result = configuration.curve_manager().insert_obj_from_json(later, &configuration.options());
        assert!(matches!(result, Err(ManagerError::CurveError(_))));
    }

    #[test]
    fn test_from_reader_missing_file() {
        let configuration = Configuration::new();
        let result = configuration.from_reader("/nonexistent/easecurve.json");
        assert!(matches!(result, Err(ManagerError::IOError(_))));
    }
}
