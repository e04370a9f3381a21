use anyhow::Result;
use log::info;
use prediction_server::Server;
use prediction_server::config::ServerConfig;
use prediction_server::logger::init_logger;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_logger();

    let config = ServerConfig::from_env()?;
    info!("🚀Starting volatility prediction service...");

    let server = Server::init(config);
    server.run().await?;

    info!("Server has been shut down gracefully");
    Ok(())
}
