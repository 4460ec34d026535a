use serde::{
    Deserialize,
    Serialize
};

use crate::manager::managererror::ManagerError;

/// The `name` every registered JSON object carries next to its own fields.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NamedJsonObject {
    name: String
}

impl NamedJsonObject {
    pub fn new(name: String) -> NamedJsonObject {
        NamedJsonObject { name }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Reads only the name, leaving the rest of `json_value` to its builder.
    pub fn name_of(json_value: &serde_json::Value) -> Result<String, ManagerError> {
        let named: NamedJsonObject = ManagerError::from_json_or_json_parse_error(json_value.clone())?;
        Ok(named.name)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_name_of() {
        let json_value = json!({ "name": "fade", "type": "Constant", "value": 1.0 });
        assert_eq!(NamedJsonObject::name_of(&json_value).unwrap(), "fade");
        assert_eq!(NamedJsonObject::new("fade".to_owned()).name(), "fade");
    }

    #[test]
    fn test_missing_name() {
        let result = NamedJsonObject::name_of(&json!({ "type": "Constant" }));
        assert!(matches!(result, Err(ManagerError::JsonParseError(_))));
    }
}
