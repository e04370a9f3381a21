use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionRequest {
    pub asset_ticker: String,
    pub upgrade_description: String,
    pub prediction_window: i64,
}

/// Fixed-multiple band around a single predicted value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfidenceInterval {
    pub lower_bound: f64,
    pub upper_bound: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResponse {
    pub predicted_volatility: Vec<f64>,
    pub model_accuracy: f64,
    pub confidence_intervals: Vec<ConfidenceInterval>,
}
