use thiserror::Error;

/// Validation failures raised while building a formula. Evaluating a formula
/// never fails.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormulaError {
    #[error("{0} must be defined")]
    MissingParameter(&'static str),

    #[error("{0} is invalid: a point needs a time and a value")]
    InvalidPoint(String),

    #[error("{0} must have different time values")]
    DegenerateTimeRange(&'static str),

    #[error("frequency must be positive, got {0}")]
    NonPositiveFrequency(f64),

    #[error("points are unsolvable")]
    UnsolvableSystem,

    #[error("a wave of amplitude {amplitude} and frequency {frequency} cannot pass through both points")]
    UnfittableWave {
        amplitude: f64,
        frequency: f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(FormulaError::MissingParameter("amplitude").to_string(), "amplitude must be defined");
        assert!(FormulaError::InvalidPoint("point 0".to_owned()).to_string().contains("point 0 is invalid"));
        assert!(FormulaError::DegenerateTimeRange("points").to_string().contains("different time values"));
        assert!(FormulaError::NonPositiveFrequency(-1.0).to_string().contains("-1"));
        assert_eq!(FormulaError::UnsolvableSystem.to_string(), "points are unsolvable");
        let err = FormulaError::UnfittableWave { amplitude: 1.0, frequency: 4.0 };
        assert!(err.to_string().starts_with("a wave of amplitude 1 and frequency 4"));
    }

    #[test]
    fn test_error_is_std_error() {
        let err = FormulaError::UnsolvableSystem;
        let _: &dyn std::error::Error = &err;
    }
}
