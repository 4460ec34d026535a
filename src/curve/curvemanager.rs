use std::cell::{
    RefCell,
    RefMut
};
use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::curve::curve::Curve;
use crate::curve::curveoptions::CurveOptions;
use crate::curve::curvesettings::CurveSettings;
use crate::manager::manager::IManager;
use crate::manager::managererror::ManagerError;
use crate::manager::namedobject::NamedJsonObject;

/// Named curves built under the composition options passed as supports.
///
/// ```json
/// {
///     "name": "fade",
///     "formula": { "type": "Linear", "start_point": [0.0, 0.0], "end_point": [8.0, 8.0] },
///     "ease_in": { "time": 4.0, "distance": 2.0 }
/// }
/// ```
pub struct CurveManager {
    map_cell: RefCell<HashMap<String, Arc<Curve>>>
}

impl CurveManager {
    pub fn new() -> CurveManager {
        CurveManager { map_cell: RefCell::new(HashMap::new()) }
    }
}

impl IManager<Arc<Curve>, CurveOptions> for CurveManager {
    fn map(&self) -> RefMut<'_, HashMap<String, Arc<Curve>>> {
        self.map_cell.borrow_mut()
    }

    fn insert_obj_from_json(&self,
                            json_value: serde_json::Value,
                            supports: &CurveOptions) -> Result<(), ManagerError> {
        let name = NamedJsonObject::name_of(&json_value)?;
        let settings: CurveSettings = ManagerError::from_json_or_json_parse_error(json_value)?;
        let curve = settings.build(supports)?;
        debug!(name = name.as_str(), model = ?supports.model(), "curve registered");
        self.map().insert(name, Arc::new(curve));
        Ok(())
    }
}
