/// A contiguous interval of time, either query ("real") time or the time fed
/// into a formula.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeBand {
    start: f64,
    end: f64
}

impl TimeBand {
    pub fn new(start: f64, end: f64) -> TimeBand {
        TimeBand { start, end }
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    pub fn width(&self) -> f64 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0.0
    }

    /// Fraction of the band elapsed at `time`, clamped to `[0, 1]`. An empty
    /// band reports 0.
    pub fn position(&self, time: f64) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            ((time - self.start) / self.width()).clamp(0.0, 1.0)
        }
    }

    pub fn at(&self, position: f64) -> f64 {
        self.start + position * self.width()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_is_clamped() {
        let band = TimeBand::new(4.0, 8.0);
        assert_eq!(band.width(), 4.0);
        assert_eq!(band.position(6.0), 0.5);
        assert_eq!(band.position(-10.0), 0.0);
        assert_eq!(band.position(10.0), 1.0);
        assert_eq!(band.at(0.25), 5.0);
    }

    #[test]
    fn test_empty_band() {
        let band = TimeBand::new(3.0, 3.0);
        assert!(band.is_empty());
        assert_eq!(band.position(100.0), 0.0);
        assert_eq!(band.at(band.position(100.0)), 3.0);
    }
}
