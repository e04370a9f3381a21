//! Client tests against a live router on an ephemeral port

use anyhow::Result;
use prediction_server::client::{ClientError, VolatilityClient};
use prediction_server::server::SERVICE_IDENTITY;
use prediction_server::{AppState, create_router};
use rand::SeedableRng;
use rand::rngs::StdRng;
use reqwest::StatusCode;
use tokio::net::TcpListener;
use volatility_model::{PredictionRequest, VolatilityPredictor};

async fn spawn_server() -> Result<VolatilityClient> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let app = create_router(AppState::new(
        VolatilityPredictor::new(100),
        StdRng::seed_from_u64(9),
    ));

    tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });

    Ok(VolatilityClient::new(format!("http://{addr}")))
}

fn request(window: i64) -> PredictionRequest {
    PredictionRequest {
        asset_ticker: "SOL".into(),
        upgrade_description: "Minor parameter change to fee market".into(),
        prediction_window: window,
    }
}

#[tokio::test]
async fn test_client_identity() -> Result<()> {
    let client = spawn_server().await?;
    assert_eq!(client.service_identity().await?, SERVICE_IDENTITY);
    Ok(())
}

#[tokio::test]
async fn test_client_prediction() -> Result<()> {
    let client = spawn_server().await?;

    let response = client.predict_volatility(&request(14)).await?;
    assert_eq!(response.predicted_volatility.len(), 14);
    assert_eq!(response.confidence_intervals.len(), 14);

    Ok(())
}

#[tokio::test]
async fn test_client_surfaces_api_errors() -> Result<()> {
    let client = spawn_server().await?;

    let err = client.predict_volatility(&request(0)).await.unwrap_err();
    match err {
        ClientError::Api { status, body } => {
            assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
            assert!(body.contains("predictionWindow"));
        }
        other => panic!("expected API error, got {other:?}"),
    }

    Ok(())
}
