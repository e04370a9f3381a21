use anyhow::Result;
use axum::{
    Router,
    extract::State,
    response::Json,
    routing::{get, post},
};
use log::{info, warn};
use parking_lot::Mutex;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use std::sync::Arc;
use tokio::net::TcpListener;
use volatility_model::{PredictionRequest, PredictionResponse, RngSampler, VolatilityPredictor};

use crate::config::ServerConfig;
use crate::error::AppResult;
use crate::extract::ValidatedJson;

pub const SERVICE_IDENTITY: &str = "Protocol Upgrade Monitor Volatility Backend";

/// Shared application state: the predictor and the root generator.
#[derive(Clone)]
pub struct AppState {
    predictor: VolatilityPredictor,
    rng: Arc<Mutex<StdRng>>,
}

impl AppState {
    pub fn new(predictor: VolatilityPredictor, rng: StdRng) -> Self {
        Self {
            predictor,
            rng: Arc::new(Mutex::new(rng)),
        }
    }

    pub fn from_config(config: &ServerConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::new(VolatilityPredictor::new(config.max_prediction_window), rng)
    }

    /// Forks an independent generator so the walk runs without holding the lock.
    fn request_rng(&self) -> StdRng {
        let mut root = self.rng.lock();
        StdRng::from_rng(&mut *root)
    }
}

#[derive(Debug, Serialize)]
pub struct IdentityResponse {
    pub message: &'static str,
}

/// GET / returns the service identity.
async fn read_root() -> Json<IdentityResponse> {
    Json(IdentityResponse {
        message: SERVICE_IDENTITY,
    })
}

/// POST /predict_volatility runs one volatility walk.
async fn predict_volatility(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<PredictionRequest>,
) -> AppResult<Json<PredictionResponse>> {
    info!(
        "Prediction requested for {} over {} steps",
        request.asset_ticker, request.prediction_window
    );

    let mut sampler = RngSampler::new(state.request_rng());
    let response = state
        .predictor
        .predict(&request, &mut sampler)
        .inspect_err(|e| warn!("Rejected prediction for {}: {}", request.asset_ticker, e))?;

    Ok(Json(response))
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(read_root))
        .route("/predict_volatility", post(predict_volatility))
        .with_state(state)
}

pub struct Server {
    config: ServerConfig,
    state: AppState,
}

impl Server {
    pub fn init(config: ServerConfig) -> Self {
        let state = AppState::from_config(&config);
        Self { config, state }
    }

    pub async fn run(&self) -> Result<()> {
        let app = create_router(self.state.clone());

        let addr = self.config.bind_addr();
        let listener = TcpListener::bind(&addr).await?;
        info!("HTTP server running on {}", addr);
        info!(
            "Maximum prediction window: {}",
            self.state.predictor.max_window()
        );

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Received shutdown signal, initiating graceful shutdown");
}
