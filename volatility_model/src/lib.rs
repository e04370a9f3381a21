pub mod classifier;
pub mod error;
pub mod misc;
pub mod predictor;
pub mod sampler;

pub use classifier::UpgradeImpact;
pub use error::PredictionError;
pub use misc::{ConfidenceInterval, PredictionRequest, PredictionResponse};
pub use predictor::{DEFAULT_MAX_WINDOW, VolatilityPredictor};
pub use sampler::{RngSampler, VolatilitySampler};
