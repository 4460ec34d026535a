use std::sync::Arc;

use crate::curve::timeband::TimeBand;
use crate::formula::formula::{
    Formula,
    Interpolation
};

/// How a band segment turns query time into formula time.
#[derive(Clone, Debug, PartialEq)]
pub enum Remap {
    /// Same position within the formula band as within the real band.
    Linear,
    /// A formula mapping real time onto formula time.
    Shaped(Formula)
}

#[derive(Clone, Debug, PartialEq)]
enum Evaluation {
    Direct(Formula),
    Banded {
        formula_band: TimeBand,
        remap: Remap,
        formula: Arc<Formula>
    }
}

/// One piece of a curve: the part of the timeline it governs and how it turns
/// a query time into a value.
#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    real_band: TimeBand,
    evaluation: Evaluation
}

impl Segment {
    /// A segment that evaluates its own formula on query time.
    pub fn direct(real_band: TimeBand, formula: Formula) -> Segment {
        Segment { real_band, evaluation: Evaluation::Direct(formula) }
    }

    /// A segment that maps `real_band` onto `formula_band` before evaluating
    /// the shared `formula`.
    pub fn banded(real_band: TimeBand, formula_band: TimeBand, remap: Remap, formula: Arc<Formula>) -> Segment {
        Segment { real_band, evaluation: Evaluation::Banded { formula_band, remap, formula } }
    }

    /// Time from which this segment governs the curve.
    pub fn start_time(&self) -> f64 {
        self.real_band.start()
    }

    pub fn real_band(&self) -> TimeBand {
        self.real_band
    }

    pub fn formula_band(&self) -> Option<TimeBand> {
        match &self.evaluation {
            Evaluation::Direct(_) => None,
            Evaluation::Banded { formula_band, .. } => Some(*formula_band)
        }
    }

    /// The formula that produces this segment's values.
    pub fn formula(&self) -> &Formula {
        match &self.evaluation {
            Evaluation::Direct(formula) => formula,
            Evaluation::Banded { formula, .. } => formula
        }
    }

    /// Formula time for a query time; identity for a direct segment.
    pub fn formula_time(&self, time: f64) -> f64 {
        match &self.evaluation {
            Evaluation::Direct(_) => time,
            Evaluation::Banded { formula_band, remap: Remap::Linear, .. } => {
                formula_band.at(self.real_band.position(time))
            },
            Evaluation::Banded { remap: Remap::Shaped(remap), .. } => remap.value(time)
        }
    }

    pub fn value(&self, time: f64) -> f64 {
        self.formula().value(self.formula_time(time))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formula::linearformula::LinearFormula;
    use crate::math::point::Point;

    fn line() -> Formula {
        LinearFormula::new(Point::new(0.0, 0.0), Point::new(8.0, 8.0)).unwrap().into()
    }

    #[test]
    fn test_direct_segment() {
        let segment = Segment::direct(TimeBand::new(0.0, 8.0), line());
        assert_eq!(segment.start_time(), 0.0);
        assert_eq!(segment.formula_band(), None);
        assert_eq!(segment.formula_time(3.0), 3.0);
        assert_eq!(segment.value(3.0), 3.0);
    }

    #[test]
    fn test_banded_segment_remaps_linearly() {
        let segment = Segment::banded(
            TimeBand::new(4.0, 8.0),
            TimeBand::new(2.0, 8.0),
            Remap::Linear,
            Arc::new(line()));
        assert_eq!(segment.start_time(), 4.0);
        assert_eq!(segment.formula_time(6.0), 5.0);
        assert_eq!(segment.value(6.0), 5.0);
        assert_eq!(segment.value(100.0), 8.0);
        assert_eq!(segment.value(-100.0), 2.0);
    }

    #[test]
    fn test_banded_segment_with_shaped_remap() {
        let remap: Formula = LinearFormula::new(Point::new(0.0, 0.0), Point::new(4.0, 2.0)).unwrap().into();
        let segment = Segment::banded(
            TimeBand::new(0.0, 4.0),
            TimeBand::new(0.0, 2.0),
            Remap::Shaped(remap),
            Arc::new(line()));
        assert_eq!(segment.value(2.0), 1.0);
        assert_eq!(segment.formula().formula_type(), crate::formula::formulatype::FormulaType::Linear);
    }
}
