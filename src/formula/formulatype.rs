use std::fmt;

use serde::{
    Deserialize,
    Serialize
};

/// The closed set of formula kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormulaType {
    Constant,
    Linear,
    Quadratic,
    Sine
}

impl FormulaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormulaType::Constant => "Constant",
            FormulaType::Linear => "Linear",
            FormulaType::Quadratic => "Quadratic",
            FormulaType::Sine => "Sine"
        }
    }
}

impl fmt::Display for FormulaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_names_match_display() {
        for formula_type in [FormulaType::Constant, FormulaType::Linear, FormulaType::Quadratic, FormulaType::Sine] {
            let json = serde_json::to_string(&formula_type).unwrap();
            assert_eq!(json, format!("\"{}\"", formula_type));
            let back: FormulaType = serde_json::from_str(&json).unwrap();
            assert_eq!(back, formula_type);
        }
    }
}
