use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PredictionError {
    #[error("predictionWindow must be a positive integer, got {0}")]
    NonPositiveWindow(i64),

    #[error("predictionWindow {window} exceeds the maximum of {max}")]
    WindowTooLarge { window: i64, max: u32 },

    #[error("Shock distribution error: {0}")]
    Distribution(String),
}

impl PredictionError {
    /// Request field the error is attributed to, if any.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            PredictionError::NonPositiveWindow(_) | PredictionError::WindowTooLarge { .. } => {
                Some("predictionWindow")
            }
            PredictionError::Distribution(_) => None,
        }
    }
}
