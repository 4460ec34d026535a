use tracing::debug;

use crate::formula::formula::Formula;
use crate::formula::formulasettings::FormulaSettings;
use crate::manager::manager::Manager;
use crate::manager::managererror::ManagerError;

fn get_formula_from_json(json_value: serde_json::Value) -> Result<Formula, ManagerError> {
    let settings: FormulaSettings = ManagerError::from_json_or_json_parse_error(json_value)?;
    let formula = settings.build()?;
    debug!(formula_type = %formula.formula_type(), "formula registered");
    Ok(formula)
}

/// Named formulas, each described by its [`FormulaSettings`] fields next to a
/// `name`.
///
/// ```json
/// { "name": "ramp", "type": "Linear", "start_point": [0.0, 0.0], "end_point": [8.0, 8.0] }
/// ```
pub struct FormulaManager;

impl FormulaManager {
    pub fn new() -> Manager<Formula> {
        Manager::new(get_formula_from_json)
    }
}
