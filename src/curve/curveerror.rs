use thiserror::Error;

use crate::curve::easing::EasingEdge;
use crate::formula::formulaerror::FormulaError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    #[error(transparent)]
    Formula(#[from] FormulaError),

    #[error("easing budget exceeded: {0}")]
    EasingBudgetExceeded(BudgetViolation),

    #[error("{edge}.distance of {distance} is never reached by the main formula")]
    UnreachableEasingDistance {
        edge: EasingEdge,
        distance: f64
    }
}

/// Which easing constraint was broken.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetViolation {
    #[error("{0}.time cannot be negative")]
    NegativeTime(EasingEdge),

    #[error("{0}.time must be less than the elapsed time")]
    TimeExceedsElapsed(EasingEdge),

    #[error("easeIn.time + easeOut.time must be less than the elapsed time")]
    CombinedTimeExceedsElapsed,

    #[error("{0}.distance must be less than the distance traveled")]
    DistanceExceedsTraveled(EasingEdge),

    #[error("easeIn.distance + easeOut.distance must be less than the distance traveled")]
    CombinedDistanceExceedsTraveled,

    #[error("easeIn and easeOut overlap in formula time")]
    OverlappingFormulaBands
}

impl From<BudgetViolation> for CurveError {
    fn from(violation: BudgetViolation) -> CurveError {
        CurveError::EasingBudgetExceeded(violation)
    }
}
