use serde::{
    Deserialize,
    Serialize
};

/// How a curve stitches easing onto its main formula.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CompositionModel {
    /// Each segment owns a formula refitted to its own boundary points.
    Segmented,
    /// One shared main formula; each segment remaps real time into a band of
    /// formula time.
    #[default]
    TimeBands
}

/// Whether easing distances are checked against the distance the main formula
/// travels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DistanceValidation {
    /// Ease segments may overshoot freely.
    #[default]
    Unchecked,
    /// `|easeIn.distance|`, `|easeOut.distance|` and their sum must each fit in
    /// `|end value − start value|`.
    Bounded
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CurveOptions {
    model: CompositionModel,
    distance_validation: DistanceValidation
}

impl CurveOptions {
    pub fn new(model: CompositionModel, distance_validation: DistanceValidation) -> CurveOptions {
        CurveOptions { model, distance_validation }
    }

    pub fn model(&self) -> CompositionModel {
        self.model
    }

    pub fn distance_validation(&self) -> DistanceValidation {
        self.distance_validation
    }

    pub fn with_model(self, model: CompositionModel) -> CurveOptions {
        CurveOptions { model, ..self }
    }

    pub fn with_distance_validation(self, distance_validation: DistanceValidation) -> CurveOptions {
        CurveOptions { distance_validation, ..self }
    }
}
