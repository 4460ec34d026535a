use tracing::trace;

use crate::formula::formula::Interpolation;
use crate::formula::formulaerror::FormulaError;

/// Holds one value for every time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConstantFormula {
    value: f64
}

impl ConstantFormula {
    pub fn new(value: f64) -> Result<ConstantFormula, FormulaError> {
        if value.is_nan() {
            return Err(FormulaError::MissingParameter("value"));
        }
        trace!(value, "constant formula built");
        Ok(ConstantFormula { value })
    }

    pub fn constant(&self) -> f64 {
        self.value
    }
}

impl Interpolation for ConstantFormula {
    fn value(&self, _time: f64) -> f64 {
        self.value
    }

    fn domain(&self) -> Option<(f64, f64)> {
        None
    }

    fn times_at_value(&self, _value: f64) -> Vec<f64> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_must_be_defined() {
        assert_eq!(ConstantFormula::new(f64::NAN), Err(FormulaError::MissingParameter("value")));
    }

    #[test]
    fn test_always_returns_value() {
        let formula = ConstantFormula::new(10.0).unwrap();
        assert_eq!(formula.constant(), 10.0);
        for time in [-9001.0, 0.0, 1.5, 9001.0] {
            assert_eq!(formula.value(time), 10.0);
        }
    }
}
