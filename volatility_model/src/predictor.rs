use log::debug;

use crate::classifier::UpgradeImpact;
use crate::error::PredictionError;
use crate::misc::{ConfidenceInterval, PredictionRequest, PredictionResponse};
use crate::sampler::VolatilitySampler;

/// Upper bound on `predictionWindow` unless configured otherwise.
pub const DEFAULT_MAX_WINDOW: u32 = 3650;

const MEAN_REVERSION: f64 = 0.95;
const SHOCK_SCALE: f64 = 0.5;
const VOLATILITY_FLOOR: f64 = 0.005;
const Z_SCORE: f64 = 1.96;
const BAND_SCALE: f64 = 0.5;

#[derive(Debug, Clone, Copy)]
pub struct VolatilityPredictor {
    max_window: u32,
}

impl Default for VolatilityPredictor {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_WINDOW)
    }
}

impl VolatilityPredictor {
    pub fn new(max_window: u32) -> Self {
        Self { max_window }
    }

    pub fn max_window(&self) -> u32 {
        self.max_window
    }

    /// Rejects windows outside `1..=max_window` and returns the step count.
    pub fn validate_window(&self, window: i64) -> Result<usize, PredictionError> {
        if window <= 0 {
            return Err(PredictionError::NonPositiveWindow(window));
        }
        if window > i64::from(self.max_window) {
            return Err(PredictionError::WindowTooLarge {
                window,
                max: self.max_window,
            });
        }
        Ok(window as usize)
    }

    /// Classifies the upgrade, runs the mean-reverting walk for
    /// `prediction_window` steps and attaches a placeholder accuracy.
    pub fn predict<S: VolatilitySampler>(
        &self,
        request: &PredictionRequest,
        sampler: &mut S,
    ) -> Result<PredictionResponse, PredictionError> {
        let steps = self.validate_window(request.prediction_window)?;

        let impact = UpgradeImpact::classify(&request.upgrade_description);
        let base = sampler.base_volatility(impact);
        debug!(
            "{}: {} upgrade, base volatility {:.4}",
            request.asset_ticker, impact, base
        );

        let predicted_volatility = walk(base, steps, sampler)?;
        let confidence_intervals = predicted_volatility
            .iter()
            .map(|&v| confidence_interval(v))
            .collect();

        Ok(PredictionResponse {
            predicted_volatility,
            model_accuracy: sampler.model_accuracy(),
            confidence_intervals,
        })
    }
}

/// Each step depends only on the previous one:
/// `next = max(floor, current * 0.95 + N(0, current * 0.5))`.
fn walk<S: VolatilitySampler>(
    base: f64,
    steps: usize,
    sampler: &mut S,
) -> Result<Vec<f64>, PredictionError> {
    let mut series = Vec::with_capacity(steps);
    let mut current = base;

    for _ in 0..steps {
        let shock = sampler.shock(current * SHOCK_SCALE)?;
        let next = (current * MEAN_REVERSION + shock).max(VOLATILITY_FLOOR);
        series.push(next);
        current = next;
    }

    Ok(series)
}

/// Band of ±1.96 × 0.5 × volatility, lower bound clamped at zero.
pub fn confidence_interval(volatility: f64) -> ConfidenceInterval {
    let half_width = volatility * Z_SCORE * BAND_SCALE;
    ConfidenceInterval {
        lower_bound: (volatility - half_width).max(0.0),
        upper_bound: volatility + half_width,
    }
}
