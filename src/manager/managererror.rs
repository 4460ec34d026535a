use serde::Deserialize;
use thiserror::Error;

use crate::curve::curveerror::CurveError;
use crate::formula::formulaerror::FormulaError;

#[derive(Error, Debug)]
pub enum ManagerError {
    #[error(transparent)]
    CurveError(#[from] CurveError),

    #[error(transparent)]
    FormulaError(#[from] FormulaError),

    #[error(transparent)]
    IOError(#[from] std::io::Error),

    #[error(transparent)]
    JsonParseError(#[from] serde_json::Error),

    #[error("key '{0}' not found")]
    NameNotFoundError(String)
}

impl ManagerError {
    pub fn from_json_or_json_parse_error<T>(json_value: serde_json::Value) -> Result<T, Self>
        where T: for<'a> Deserialize<'a> {
        serde_json::from_value(json_value).map_err(ManagerError::JsonParseError)
    }

    pub fn map_elem_not_found(name: &str) -> ManagerError {
        ManagerError::NameNotFoundError(name.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::curve::curveerror::BudgetViolation;

    #[test]
    fn test_name_not_found_message() {
        assert_eq!(ManagerError::map_elem_not_found("ramp").to_string(), "key 'ramp' not found");
    }

    #[test]
    fn test_wrapped_errors_keep_their_message() {
        let err = ManagerError::from(CurveError::from(BudgetViolation::CombinedTimeExceedsElapsed));
        assert!(err.to_string().contains("easeIn.time + easeOut.time"));
        let err = ManagerError::from(FormulaError::MissingParameter("value"));
        assert_eq!(err.to_string(), "value must be defined");
    }

    #[test]
    fn test_json_parse_error() {
        let result: Result<Vec<f64>, ManagerError> = ManagerError::from_json_or_json_parse_error(json!({ "a": 1 }));
        assert!(matches!(result, Err(ManagerError::JsonParseError(_))));
    }
}
