use log::{debug, error};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;
use volatility_model::{PredictionRequest, PredictionResponse};

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";
const API_URL_VAR: &str = "VOLATILITY_API_URL";

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Volatility API request failed: {status} - {body}")]
    Api { status: StatusCode, body: String },
}

#[derive(Debug, Deserialize)]
struct IdentityBody {
    message: String,
}

/// Thin HTTP client for the volatility endpoint.
#[derive(Debug, Clone)]
pub struct VolatilityClient {
    client: Client,
    base_url: String,
}

impl VolatilityClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Reads `VOLATILITY_API_URL`, falling back to [`DEFAULT_API_URL`].
    pub fn from_env() -> Self {
        Self::from_var(API_URL_VAR)
    }

    fn from_var(key: &str) -> Self {
        let url = std::env::var(key).unwrap_or_else(|_| DEFAULT_API_URL.into());
        Self::new(url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn service_identity(&self) -> Result<String, ClientError> {
        let response = self.client.get(format!("{}/", self.base_url)).send().await?;
        let body: IdentityBody = Self::check(response).await?.json().await?;
        Ok(body.message)
    }

    pub async fn predict_volatility(
        &self,
        request: &PredictionRequest,
    ) -> Result<PredictionResponse, ClientError> {
        debug!("POST {}/predict_volatility for {}", self.base_url, request.asset_ticker);
        let response = self
            .client
            .post(format!("{}/predict_volatility", self.base_url))
            .json(request)
            .send()
            .await?;

        Ok(Self::check(response).await?.json().await?)
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        error!("Volatility API error {}: {}", status, body);
        Err(ClientError::Api { status, body })
    }
}
