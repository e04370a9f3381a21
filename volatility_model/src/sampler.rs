//! Entropy seam for the volatility walk.
//!
//! The predictor never touches a random number generator directly; it asks a
//! [`VolatilitySampler`] for each random quantity it needs. Production code
//! uses [`RngSampler`] over any `rand::Rng`, tests can script the draws.

use rand::Rng;
use rand_distr::{Distribution, Normal};
use std::ops::Range;

use crate::classifier::UpgradeImpact;
use crate::error::PredictionError;

/// Range the placeholder model accuracy is drawn from.
pub const MODEL_ACCURACY_RANGE: Range<f64> = 0.85..0.98;

pub trait VolatilitySampler {
    /// Initial volatility, uniform over `impact.base_range()`.
    fn base_volatility(&mut self, impact: UpgradeImpact) -> f64;

    /// Normally distributed shock with mean 0. `std_dev` must be finite and
    /// non-negative, anything else is a `PredictionError::Distribution`.
    fn shock(&mut self, std_dev: f64) -> Result<f64, PredictionError>;

    /// Placeholder accuracy in [`MODEL_ACCURACY_RANGE`].
    fn model_accuracy(&mut self) -> f64;
}

#[derive(Debug, Clone)]
pub struct RngSampler<R> {
    rng: R,
}

impl<R: Rng> RngSampler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> VolatilitySampler for RngSampler<R> {
    fn base_volatility(&mut self, impact: UpgradeImpact) -> f64 {
        self.rng.random_range(impact.base_range())
    }

    fn shock(&mut self, std_dev: f64) -> Result<f64, PredictionError> {
        if std_dev < 0.0 {
            return Err(PredictionError::Distribution(format!(
                "negative standard deviation {std_dev}"
            )));
        }
        let normal =
            Normal::new(0.0, std_dev).map_err(|e| PredictionError::Distribution(e.to_string()))?;
        Ok(normal.sample(&mut self.rng))
    }

    fn model_accuracy(&mut self) -> f64 {
        self.rng.random_range(MODEL_ACCURACY_RANGE)
    }
}
