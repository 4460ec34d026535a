use std::f64::consts::{
    PI,
    TAU
};

use tracing::trace;

use crate::formula::formula::{
    snap_into_domain,
    sorted_unique,
    Interpolation
};
use crate::formula::formulaerror::FormulaError;
use crate::math::point::Point;

/// `amplitude·sin(2π/frequency·(t − start + phase_shift)) + vertical_shift`
///
/// `frequency` is the length of one full cycle in time units. Time is clamped
/// into `time_range` before evaluation, so the formula is flat outside it.
/// The phase shift is stored reduced to `[0, frequency)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SineFormula {
    time_range: (f64, f64),
    amplitude: f64,
    frequency: f64,
    phase_shift: f64,
    vertical_shift: f64
}

impl SineFormula {
    pub fn new(time_range: (f64, f64),
               amplitude: f64,
               frequency: f64,
               phase_shift: Option<f64>,
               vertical_shift: Option<f64>) -> Result<SineFormula, FormulaError> {
        if amplitude.is_nan() {
            return Err(FormulaError::MissingParameter("amplitude"));
        }
        let time_range = validate_shape(time_range, frequency)?;
        let phase_shift = phase_shift
            .filter(|x| x.is_finite())
            .map_or(0.0, |x| x.rem_euclid(frequency));
        let vertical_shift = vertical_shift.filter(|x| !x.is_nan()).unwrap_or(0.0);
        trace!(amplitude, frequency, phase_shift, vertical_shift, "sine formula built");
        Ok(SineFormula { time_range, amplitude, frequency, phase_shift, vertical_shift })
    }

    /// The same amplitude and frequency over the range spanned by two points,
    /// with phase and vertical shift solved so the wave passes through both.
    ///
    /// Of the possible phases, the one closest to this wave's own phase at the
    /// earlier point is taken.
    pub fn through_points(&self, start: Point, end: Point) -> Result<SineFormula, FormulaError> {
        let (start, end) = if start.time() <= end.time() { (start, end) } else { (end, start) };
        validate_shape((start.time(), end.time()), self.frequency)?;

        // A·sin(θ + Δ) − A·sin(θ) = 2A·cos(θ + Δ/2)·sin(Δ/2) = rise
        let rate = self.angular_rate();
        let aligned = rate * (start.time() - self.time_range.0 + self.phase_shift);
        let half_sweep = 0.5 * rate * (end.time() - start.time());
        let rise = end.value() - start.value();
        let denominator = 2.0 * self.amplitude * half_sweep.sin();
        let scale = self.amplitude.abs().max(1.0);
        let unfittable = FormulaError::UnfittableWave { amplitude: self.amplitude, frequency: self.frequency };

        let theta = if denominator.abs() <= 1e-12 * scale {
            if rise.abs() > 1e-9 * scale {
                return Err(unfittable);
            }
            aligned
        } else {
            let ratio = rise / denominator;
            if ratio.abs() > 1.0 + 1e-12 {
                return Err(unfittable);
            }
            let angle = ratio.clamp(-1.0, 1.0).acos();
            [angle - half_sweep, -angle - half_sweep]
                .into_iter()
                .map(|branch| branch + TAU * ((aligned - branch) / TAU).round())
                .min_by(|lhs, rhs| (lhs - aligned).abs().total_cmp(&(rhs - aligned).abs()))
                .unwrap_or(aligned)
        };

        SineFormula::new(
            (start.time(), end.time()),
            self.amplitude,
            self.frequency,
            Some(theta / rate),
            Some(start.value() - self.amplitude * theta.sin()))
    }

    pub fn time_range(&self) -> (f64, f64) {
        self.time_range
    }

    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    pub fn phase_shift(&self) -> f64 {
        self.phase_shift
    }

    pub fn vertical_shift(&self) -> f64 {
        self.vertical_shift
    }

    fn angular_rate(&self) -> f64 {
        TAU / self.frequency
    }

    fn wave(&self, time_in_formula: f64) -> f64 {
        self.amplitude * (self.angular_rate() * (time_in_formula + self.phase_shift)).sin() + self.vertical_shift
    }

    /// Angles `θ` with `sin θ` giving `value`, one per branch, or `None` when the
    /// wave never reaches it. A flat wave is handled by the callers.
    fn branches(&self, value: f64) -> Option<[f64; 2]> {
        let ratio = (value - self.vertical_shift) / self.amplitude;
        if ratio.abs() > 1.0 + 1e-12 {
            return None;
        }
        let principal = ratio.clamp(-1.0, 1.0).asin();
        Some([principal, PI - principal])
    }

    fn time_at_angle(&self, theta: f64) -> f64 {
        self.time_range.0 + theta / self.angular_rate() - self.phase_shift
    }

    /// θ at each end of the range.
    fn angle_range(&self) -> (f64, f64) {
        let (start, end) = self.time_range;
        let rate = self.angular_rate();
        (rate * self.phase_shift, rate * (end - start + self.phase_shift))
    }
}

/// Checks frequency and range; returns the range ordered ascending.
pub(crate) fn validate_shape(time_range: (f64, f64), frequency: f64) -> Result<(f64, f64), FormulaError> {
    if frequency.is_nan() {
        return Err(FormulaError::MissingParameter("frequency"));
    }
    if frequency <= 0.0 {
        return Err(FormulaError::NonPositiveFrequency(frequency));
    }
    let (start, end) = time_range;
    if start.is_nan() || end.is_nan() {
        return Err(FormulaError::MissingParameter("time range"));
    }
    if start == end {
        return Err(FormulaError::DegenerateTimeRange("time range"));
    }
    Ok((start.min(end), start.max(end)))
}

impl Interpolation for SineFormula {
    fn value(&self, time: f64) -> f64 {
        let (start, end) = self.time_range;
        self.wave(time.clamp(start, end) - start)
    }

    fn domain(&self) -> Option<(f64, f64)> {
        Some(self.time_range)
    }

    /// Lists every crossing, so the result grows with the number of cycles in
    /// the range.
    fn times_at_value(&self, value: f64) -> Vec<f64> {
        let (start, end) = self.time_range;
        if self.amplitude == 0.0 {
            return if value == self.vertical_shift { vec![start, end] } else { Vec::new() };
        }
        let Some(branches) = self.branches(value) else {
            return Vec::new();
        };

        // Solutions are branch + 2πk for every k with θ inside the range.
        let (theta_min, theta_max) = self.angle_range();
        let k_min = ((theta_min - PI) / TAU).floor() as i64;
        let k_max = (theta_max / TAU).ceil() as i64;

        let mut times = Vec::new();
        for k in k_min.saturating_sub(1)..=k_max.saturating_add(1) {
            let turn = TAU * k as f64;
            for branch in branches {
                if let Some(time) = snap_into_domain(self.time_at_angle(branch + turn), start, end) {
                    times.push(time);
                }
            }
        }
        sorted_unique(times)
    }

    fn first_time_at_value(&self, value: f64) -> Option<f64> {
        let (start, end) = self.time_range;
        if self.amplitude == 0.0 {
            return (value == self.vertical_shift).then_some(start);
        }
        let (theta_min, _) = self.angle_range();
        self.branches(value)?
            .into_iter()
            .flat_map(|branch| {
                let k = ((theta_min - branch) / TAU).floor();
                [k, k + 1.0].map(|k| self.time_at_angle(branch + TAU * k))
            })
            .filter_map(|time| snap_into_domain(time, start, end))
            .min_by(f64::total_cmp)
    }

    fn last_time_at_value(&self, value: f64) -> Option<f64> {
        let (start, end) = self.time_range;
        if self.amplitude == 0.0 {
            return (value == self.vertical_shift).then_some(end);
        }
        let (_, theta_max) = self.angle_range();
        self.branches(value)?
            .into_iter()
            .flat_map(|branch| {
                let k = ((theta_max - branch) / TAU).ceil();
                [k, k - 1.0].map(|k| self.time_at_angle(branch + TAU * k))
            })
            .filter_map(|time| snap_into_domain(time, start, end))
            .max_by(f64::total_cmp)
    }
}
