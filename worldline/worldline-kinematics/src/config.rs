//! Tunables for the numeric layers. Defaults carry the documented values.

/// Bisection parameters for [`crate::locate`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LocatorConfig {
    /// Lower end of the proper-time bracket.
    pub lower: f64,
    /// Upper end of the proper-time bracket.
    pub upper: f64,
    pub max_iterations: usize,
    /// Early exit once `|t(mid) - target|` drops below this.
    pub tolerance: f64,
    /// A final residual above this is a convergence failure.
    pub divergence_limit: f64,
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self { lower: -1000.0, upper: 1000.0, max_iterations: 100, tolerance: 1e-4, divergence_limit: 100.0 }
    }
}

/// Sampling grid and bounds for [`crate::sweep_for_violation`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SweepConfig {
    pub start: f64,
    pub end: f64,
    pub step: f64,
    /// Largest admitted 3-speed squared; padded above 1 for round-off.
    pub speed_bound: f64,
    /// `|U0|` below this counts as zero.
    pub time_epsilon: f64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self { start: -50.0, end: 50.0, step: 1.0, speed_bound: 1.05, time_epsilon: 1e-9 }
    }
}

impl SweepConfig {
    /// Sample points `start, start + step, ..., <= end`. Empty for a
    /// non-positive or non-finite step.
    pub fn samples(&self) -> impl Iterator<Item = f64> + '_ {
        let count = if self.step > 0.0 && self.step.is_finite() && self.end >= self.start {
            ((self.end - self.start) / self.step).floor() as usize + 1
        } else {
            0
        };
        (0..count).map(move |i| self.start + i as f64 * self.step)
    }
}

/// Limits past which a comoving boost is treated as singular.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameConfig {
    pub min_time_component: f64,
    /// Fraction of light speed.
    pub max_speed: f64,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self { min_time_component: 1e-5, max_speed: 0.99999 }
    }
}
