use std::cell::{
    RefCell,
    RefMut
};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;

use super::managererror::ManagerError;
use super::namedobject::NamedJsonObject;

/// A registry of named objects built from JSON values.
///
/// `S` carries whatever the builder needs besides the JSON itself.
pub trait IManager<V, S> where
    V: Clone {
    fn map(&self) -> RefMut<'_, HashMap<String, V>>;

    fn insert_obj_from_json(&self,
                            json_value: serde_json::Value,
                            supports: &S) -> Result<(), ManagerError>;

    fn get(&self, name: &str) -> Result<V, ManagerError> {
        let elem_opt = self.map().get(name).cloned();
        elem_opt.ok_or_else(|| ManagerError::map_elem_not_found(name))
    }

    fn contains(&self, name: &str) -> bool {
        self.map().contains_key(name)
    }

    fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.map().keys().cloned().collect();
        names.sort();
        names
    }

    fn insert_obj_from_json_vec(&self,
                                json_vec: &[serde_json::Value],
                                supports: &S) -> Result<(), ManagerError> {
        for j in json_vec.iter() {
            self.insert_obj_from_json(j.clone(), supports)?;
        }
        Ok(())
    }

    /// Loads a single object or an array of objects from a JSON file.
    fn from_reader(&self,
                   file_path: &str,
                   supports: &S) -> Result<(), ManagerError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_value: serde_json::Value = serde_json::from_reader(reader)?;
        match json_value {
            serde_json::Value::Array(json_array) => self.insert_obj_from_json_vec(&json_array, supports),
            json_value => self.insert_obj_from_json(json_value, supports)
        }
    }
}

/// A registry whose objects need nothing but their own JSON.
pub struct Manager<V> {
    map_cell: RefCell<HashMap<String, V>>,
    get_obj_from_json: fn(serde_json::Value) -> Result<V, ManagerError>
}

impl<V> Manager<V> where
    V: Clone {
    pub fn new(get_obj_from_json: fn(serde_json::Value) -> Result<V, ManagerError>) -> Manager<V> {
        Manager { map_cell: RefCell::new(HashMap::new()), get_obj_from_json }
    }
}

impl<V> IManager<V, ()> for Manager<V> where
    V: Clone {
    fn map(&self) -> RefMut<'_, HashMap<String, V>> {
        self.map_cell.borrow_mut()
    }

    fn insert_obj_from_json(&self,
                            json_value: serde_json::Value,
                            _supports: &()) -> Result<(), ManagerError> {
        let name = NamedJsonObject::name_of(&json_value)?;
        let v = (self.get_obj_from_json)(json_value)?;
        self.map().insert(name, v);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[derive(serde::Deserialize)]
    struct ScaleJsonProp {
        factor: f64
    }

    fn scale_from_json(json_value: serde_json::Value) -> Result<f64, ManagerError> {
        let json_prop: ScaleJsonProp = ManagerError::from_json_or_json_parse_error(json_value)?;
        Ok(json_prop.factor)
    }

    #[test]
    fn test_insert_and_get() {
        let manager = Manager::new(scale_from_json);
        manager
            .insert_obj_from_json_vec(&[json!({ "name": "half", "factor": 0.5 }), json!({ "name": "double", "factor": 2.0 })], &())
            .unwrap();
        assert_eq!(manager.get("half").unwrap(), 0.5);
        assert!(manager.contains("double"));
        assert_eq!(manager.names(), vec!["double".to_owned(), "half".to_owned()]);
    }

    #[test]
    fn test_missing_name_is_reported() {
        let manager = Manager::new(scale_from_json);
        let err = manager.get("triple").unwrap_err();
        assert_eq!(err.to_string(), "key 'triple' not found");
    }

    #[test]
    fn test_bad_object_stops_the_batch() {
        let manager = Manager::new(scale_from_json);
        let result = manager.insert_obj_from_json_vec(&[json!({ "name": "half", "factor": 0.5 }), json!({ "name": "bad" })], &());
        assert!(matches!(result, Err(ManagerError::JsonParseError(_))));
        assert!(manager.contains("half"));
        assert!(!manager.contains("bad"));
    }

    #[test]
    fn test_from_reader_missing_file() {
        let manager = Manager::new(scale_from_json);
        let result = manager.from_reader("/nonexistent/scales.json", &());
        assert!(matches!(result, Err(ManagerError::IOError(_))));
    }
}
