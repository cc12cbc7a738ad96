use std::fmt::Display;

use crate::error::Error;

/// Properties of the g-h filter.
#[derive(Clone, Debug)]
pub struct FilterProp {
    /// Position-correction gain in `[0, 1]`.
    ///
    /// 0 ignores the measurement entirely, 1 trusts it fully.
    pub g: f64,
    /// Rate-correction gain.
    ///
    /// Controls how fast the rate-of-change belief follows the residual,
    /// independently of how fast the position snaps to the measurement.
    pub h: f64,
    /// Time between two consecutive observations. Must be strictly positive.
    pub dt: f64,
}

impl FilterProp {
    fn validate(&self) -> Result<(), Error> {
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(Error::invalid(
                "dt",
                format!("must be finite and strictly positive, got {}", self.dt),
            ));
        }
        if !(0.0..=1.0).contains(&self.g) {
            return Err(Error::invalid(
                "g",
                format!("must lie in [0, 1], got {}", self.g),
            ));
        }
        if !self.h.is_finite() {
            return Err(Error::invalid(
                "h",
                format!("must be finite, got {}", self.h),
            ));
        }
        Ok(())
    }
}

/// Belief about the tracked signal.
#[derive(Clone, Debug, Default)]
pub struct FilterState {
    /// Estimated position.
    pub x_est: f64,
    /// Estimated rate of change of the position, per unit of time.
    pub dx_est: f64,
}

impl FilterState {
    fn validate(&self) -> Result<(), Error> {
        if !self.x_est.is_finite() {
            return Err(Error::invalid(
                "x_est",
                format!("prior must be finite, got {}", self.x_est),
            ));
        }
        if !self.dx_est.is_finite() {
            return Err(Error::invalid(
                "dx_est",
                format!("prior must be finite, got {}", self.dx_est),
            ));
        }
        Ok(())
    }

    /// Prediction step of the filter.
    ///
    /// Extrapolates the position at constant velocity. The rate estimate is
    /// left untouched.
    fn prediction(&self, prop: &FilterProp) -> f64 {
        self.x_est + self.dx_est * prop.dt
    }

    /// Update step of the filter.
    ///
    /// Corrects position and rate from the residual between the observation
    /// and the prediction.
    fn update(&mut self, prop: &FilterProp, x_pred: f64, residual: f64) {
        self.x_est = x_pred + prop.g * residual;
        self.dx_est += prop.h * residual / prop.dt;
    }
}

impl Display for FilterState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "x_est: {}, dx_est: {}", self.x_est, self.dx_est)
    }
}

/// One predict/update cycle of the filter.
#[derive(Clone, Debug)]
pub struct Step {
    /// Extrapolated position before the observation was taken into account.
    pub prediction: f64,
    /// Corrected position after the observation was taken into account.
    pub estimate: f64,
}

/// Recursive g-h estimator over a scalar signal.
///
/// The filter owns exactly one mutable state pair, seeded from the caller's
/// priors, and consumes observations one at a time in arrival order with no
/// look-ahead. The family decouples how fast the position snaps to the
/// measurement (`g`) from how fast the rate belief updates (`h`), which
/// makes it a one-step-memory alternative to a full Kalman filter when the
/// noise statistics are not precisely known.
#[derive(Clone, Debug)]
pub struct GhFilter {
    prop: FilterProp,
    state: FilterState,
}

impl GhFilter {
    /// Creates a filter from its gains and the prior belief.
    ///
    /// Rejects `dt <= 0` (the rate update divides the residual by `dt`),
    /// gains outside their documented ranges and non-finite priors with
    /// [Error::InvalidArgument].
    pub fn new(prop: FilterProp, prior: FilterState) -> Result<Self, Error> {
        prop.validate()?;
        prior.validate()?;
        Ok(Self { prop, state: prior })
    }

    /// Current belief of the filter.
    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// Consumes one observation and returns the prediction and the
    /// corrected estimate of this cycle.
    pub fn step(&mut self, z: f64) -> Step {
        let x_pred = self.state.prediction(&self.prop);
        let residual = z - x_pred;
        self.state.update(&self.prop, x_pred, residual);
        Step {
            prediction: x_pred,
            estimate: self.state.x_est,
        }
    }

    /// Filters the whole observation sequence in a single pass.
    ///
    /// The estimate sequence records the prior as element 0 and one
    /// corrected estimate per observation; the prediction sequence records
    /// one extrapolation per observation. A non-finite intermediate fails
    /// the call atomically with [Error::NumericDegenerate] and no partial
    /// sequences are returned.
    pub fn run(mut self, observations: &[f64]) -> Result<FilterOutput, Error> {
        let mut estimates = Vec::with_capacity(observations.len() + 1);
        let mut predictions = Vec::with_capacity(observations.len());
        estimates.push(self.state.x_est);

        for (k, &z) in observations.iter().enumerate() {
            let step = self.step(z);
            if !step.prediction.is_finite() {
                return Err(Error::NumericDegenerate {
                    step: k,
                    value: step.prediction,
                });
            }
            if !step.estimate.is_finite() {
                return Err(Error::NumericDegenerate {
                    step: k,
                    value: step.estimate,
                });
            }
            predictions.push(step.prediction);
            estimates.push(step.estimate);
        }

        Ok(FilterOutput {
            estimates,
            predictions,
        })
    }
}

/// Output sequences of one filtering pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterOutput {
    /// Corrected estimates, starting with the prior; one entry longer than
    /// the observation sequence.
    pub estimates: Vec<f64>,
    /// Constant-velocity extrapolations, one per observation.
    pub predictions: Vec<f64>,
}
