use std::sync::Arc;

use tracing::{
    debug,
    trace
};

use crate::curve::curveerror::{
    BudgetViolation,
    CurveError
};
use crate::curve::curveoptions::{
    CompositionModel,
    CurveOptions,
    DistanceValidation
};
use crate::curve::easing::{
    EaseTemplate,
    Easing,
    EasingEdge
};
use crate::curve::segment::{
    Remap,
    Segment
};
use crate::curve::timeband::TimeBand;
use crate::formula::constantformula::ConstantFormula;
use crate::formula::formula::{
    Formula,
    Interpolation
};
use crate::formula::formulaerror::FormulaError;
use crate::formula::linearformula::LinearFormula;
use crate::formula::quadraticformula::QuadraticFormula;
use crate::math::point::Point;

// ─────────────────────────────────────────────────────────────────────────────
// Curve
// ─────────────────────────────────────────────────────────────────────────────
//
// Up to three segments partition the timeline:
//
//   (-∞, main.start)          ease-in   (when present)
//   [main.start, out.start)   main
//   [out.start, +∞)           ease-out  (when present)
//
// Every formula clamps outside its own domain, so the outer segments also
// cover the open ends. Junction values are taken from the main segment, which
// keeps the curve continuous whatever the easing shape.

/// A main formula with optional ease-in and ease-out transitions.
///
/// Immutable once built and safe to share between threads.
#[derive(Clone, Debug, PartialEq)]
pub struct Curve {
    ease_in: Option<Segment>,
    main: Segment,
    ease_out: Option<Segment>,
    time_range: (f64, f64),
    model: CompositionModel
}

/// Validated inputs shared by both composition models.
struct Layout {
    start: Point,
    end: Point,
    ease_in: Option<Easing>,
    ease_out: Option<Easing>,
    main_band: TimeBand
}

impl Layout {
    /// Value the main segment starts from before it is refitted.
    fn main_start_value(&self) -> f64 {
        self.start.value() + self.ease_in.map_or(0.0, |easing| easing.distance())
    }

    fn main_end_value(&self) -> f64 {
        self.end.value() - self.ease_out.map_or(0.0, |easing| easing.distance())
    }
}

impl Curve {
    pub fn new(main: &Formula,
               ease_in: Option<Easing>,
               ease_out: Option<Easing>,
               options: &CurveOptions) -> Result<Curve, CurveError> {
        let (start, end) = match main.boundary_points() {
            Some(points) => points,
            None => return Ok(Curve::constant(main.clone(), options.model()))
        };

        validate_budget(ease_in, ease_out, start, end, options.distance_validation())?;

        let ease_in = ease_in.filter(|easing| active(easing, EasingEdge::EaseIn));
        let ease_out = ease_out.filter(|easing| active(easing, EasingEdge::EaseOut));
        let main_band = TimeBand::new(
            start.time() + ease_in.map_or(0.0, |easing| easing.time()),
            end.time() - ease_out.map_or(0.0, |easing| easing.time()));
        let layout = Layout { start, end, ease_in, ease_out, main_band };

        let curve = match options.model() {
            CompositionModel::Segmented => Curve::segmented(main, &layout)?,
            CompositionModel::TimeBands => match Curve::time_bands(main, &layout) {
                // Unchecked distances may overshoot what the main formula reaches.
                Err(err) if options.distance_validation() == DistanceValidation::Unchecked
                    && without_formula_bands(&err) => {
                    debug!(%err, "no formula bands, refitting the main formula");
                    Curve::segmented(main, &layout)?
                },
                result => result?
            }
        };
        debug!(
            model = ?curve.model,
            formula_type = %main.formula_type(),
            ease_in = curve.ease_in.is_some(),
            ease_out = curve.ease_out.is_some(),
            start = curve.time_range.0,
            end = curve.time_range.1,
            "curve composed");
        Ok(curve)
    }

    /// A constant holds its value everywhere, so easing has nothing to act on.
    fn constant(formula: Formula, model: CompositionModel) -> Curve {
        trace!("constant main formula, easing ignored");
        Curve {
            ease_in: None,
            main: Segment::direct(TimeBand::new(0.0, 0.0), formula),
            ease_out: None,
            time_range: (0.0, 0.0),
            model
        }
    }

    fn segmented(main: &Formula, layout: &Layout) -> Result<Curve, CurveError> {
        let main_band = layout.main_band;
        let main_formula = refit(
            main,
            Point::new(main_band.start(), layout.main_start_value()),
            Point::new(main_band.end(), layout.main_end_value()))?;

        let ease_in = match layout.ease_in {
            Some(easing) => {
                let to = Point::new(main_band.start(), main_formula.value(main_band.start()));
                let formula = easing.template().build(EasingEdge::EaseIn, layout.start, to)?;
                Some(Segment::direct(TimeBand::new(layout.start.time(), main_band.start()), formula))
            },
            None => None
        };
        let ease_out = match layout.ease_out {
            Some(easing) => {
                let from = Point::new(main_band.end(), main_formula.value(main_band.end()));
                let formula = easing.template().build(EasingEdge::EaseOut, from, layout.end)?;
                Some(Segment::direct(TimeBand::new(main_band.end(), layout.end.time()), formula))
            },
            None => None
        };

        Ok(Curve {
            ease_in,
            main: Segment::direct(main_band, main_formula),
            ease_out,
            time_range: (layout.start.time(), layout.end.time()),
            model: CompositionModel::Segmented
        })
    }

    fn time_bands(main: &Formula, layout: &Layout) -> Result<Curve, CurveError> {
        let main_band = layout.main_band;
        let (start, end) = (layout.start, layout.end);

        let formula_start = match layout.ease_in {
            Some(easing) => main
                .first_time_at_value(layout.main_start_value())
                .ok_or(CurveError::UnreachableEasingDistance {
                    edge: EasingEdge::EaseIn,
                    distance: easing.distance()
                })?,
            None => start.time()
        };
        let formula_end = if main_band.is_empty() {
            // Easing consumed the whole span: the main band holds where ease-in landed.
            formula_start
        } else {
            match layout.ease_out {
                Some(easing) => main
                    .last_time_at_value(layout.main_end_value())
                    .ok_or(CurveError::UnreachableEasingDistance {
                        edge: EasingEdge::EaseOut,
                        distance: easing.distance()
                    })?,
                None => end.time()
            }
        };
        if formula_start > formula_end {
            return Err(CurveError::from(BudgetViolation::OverlappingFormulaBands));
        }

        let shared = Arc::new(main.clone());
        let ease_in = match layout.ease_in {
            Some(easing) => {
                let real_band = TimeBand::new(start.time(), main_band.start());
                let formula_band = TimeBand::new(start.time(), formula_start);
                let remap = band_remap(easing.template(), EasingEdge::EaseIn, real_band, formula_band)?;
                Some(Segment::banded(real_band, formula_band, remap, Arc::clone(&shared)))
            },
            None => None
        };
        let ease_out = match layout.ease_out {
            Some(easing) => {
                let real_band = TimeBand::new(main_band.end(), end.time());
                let formula_band = TimeBand::new(formula_end, end.time());
                let remap = band_remap(easing.template(), EasingEdge::EaseOut, real_band, formula_band)?;
                Some(Segment::banded(real_band, formula_band, remap, Arc::clone(&shared)))
            },
            None => None
        };
        let main = Segment::banded(
            main_band,
            TimeBand::new(formula_start, formula_end),
            Remap::Linear,
            shared);

        Ok(Curve {
            ease_in,
            main,
            ease_out,
            time_range: (start.time(), end.time()),
            model: CompositionModel::TimeBands
        })
    }

    pub fn value(&self, time: f64) -> f64 {
        self.segment_at(time).value(time)
    }

    /// The segment governing `time`.
    pub fn segment_at(&self, time: f64) -> &Segment {
        match (&self.ease_in, &self.ease_out) {
            (Some(ease_in), _) if time < self.main.start_time() => ease_in,
            (_, Some(ease_out)) if time >= ease_out.start_time() => ease_out,
            _ => &self.main
        }
    }

    pub fn start_point(&self) -> Point {
        Point::new(self.time_range.0, self.value(self.time_range.0))
    }

    pub fn end_point(&self) -> Point {
        Point::new(self.time_range.1, self.value(self.time_range.1))
    }

    pub fn time_range(&self) -> (f64, f64) {
        self.time_range
    }

    pub fn ease_in(&self) -> Option<&Segment> {
        self.ease_in.as_ref()
    }

    pub fn main(&self) -> &Segment {
        &self.main
    }

    pub fn ease_out(&self) -> Option<&Segment> {
        self.ease_out.as_ref()
    }

    pub fn model(&self) -> CompositionModel {
        self.model
    }
}

fn active(easing: &Easing, edge: EasingEdge) -> bool {
    let active = easing.is_active();
    if !active {
        trace!(%edge, time = easing.time(), distance = easing.distance(), "easing skipped");
    }
    active
}

fn without_formula_bands(err: &CurveError) -> bool {
    matches!(
        err,
        CurveError::UnreachableEasingDistance { .. }
            | CurveError::EasingBudgetExceeded(BudgetViolation::OverlappingFormulaBands))
}

fn validate_budget(ease_in: Option<Easing>,
                   ease_out: Option<Easing>,
                   start: Point,
                   end: Point,
                   distance_validation: DistanceValidation) -> Result<(), CurveError> {
    let time_elapsed = end.time() - start.time();
    let distance_traveled = (end.value() - start.value()).abs();

    for (easing, edge) in [(ease_in, EasingEdge::EaseIn), (ease_out, EasingEdge::EaseOut)] {
        let Some(easing) = easing else { continue };
        if easing.time().is_nan() {
            return Err(FormulaError::MissingParameter(edge.time_field()).into());
        }
        if easing.distance().is_nan() {
            return Err(FormulaError::MissingParameter(edge.distance_field()).into());
        }
        if easing.time() < 0.0 {
            return Err(CurveError::from(BudgetViolation::NegativeTime(edge)));
        }
        if easing.time() > time_elapsed {
            return Err(CurveError::from(BudgetViolation::TimeExceedsElapsed(edge)));
        }
        if distance_validation == DistanceValidation::Bounded && easing.distance().abs() > distance_traveled {
            return Err(CurveError::from(BudgetViolation::DistanceExceedsTraveled(edge)));
        }
    }

    if let (Some(ease_in), Some(ease_out)) = (ease_in, ease_out) {
        if ease_in.time() + ease_out.time() > time_elapsed {
            return Err(CurveError::from(BudgetViolation::CombinedTimeExceedsElapsed));
        }
        if distance_validation == DistanceValidation::Bounded
            && ease_in.distance().abs() + ease_out.distance().abs() > distance_traveled {
            return Err(CurveError::from(BudgetViolation::CombinedDistanceExceedsTraveled));
        }
    }
    Ok(())
}

/// Fits a formula of the same kind as `main` between two adjusted boundary
/// points.
///
/// A quadratic needs an interior point: it is sampled from the unstretched
/// formula at the midpoint of the new range, which keeps the curvature close
/// to that of `main` when the range shrinks moderately. A sine keeps its
/// amplitude and frequency and moves its phase and vertical shift.
fn refit(main: &Formula, start: Point, end: Point) -> Result<Formula, FormulaError> {
    if end.time() == start.time() {
        return Ok(ConstantFormula::new(start.value())?.into());
    }
    if main.boundary_points() == Some((start, end)) {
        return Ok(main.clone());
    }
    let formula: Formula = match main {
        Formula::Constant(formula) => (*formula).into(),
        Formula::Linear(_) => LinearFormula::new(start, end)?.into(),
        Formula::Quadratic(_) => {
            let middle = 0.5 * (start.time() + end.time());
            QuadraticFormula::new([start, Point::new(middle, main.value(middle)), end])?.into()
        },
        Formula::Sine(formula) => formula.through_points(start, end)?.into()
    };
    Ok(formula)
}

/// Builds the real → formula time mapping of an ease band.
fn band_remap(template: EaseTemplate,
              edge: EasingEdge,
              real_band: TimeBand,
              formula_band: TimeBand) -> Result<Remap, FormulaError> {
    match template {
        EaseTemplate::Linear => Ok(Remap::Linear),
        _ => {
            let from = Point::new(real_band.start(), formula_band.start());
            let to = Point::new(real_band.end(), formula_band.end());
            Ok(Remap::Shaped(template.build(edge, from, to)?))
        }
    }
}
