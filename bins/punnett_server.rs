use anyhow::Result;
use punnett::api::Server;
use punnett::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config/punnett.toml".to_string());

    let config = Config::load(&config_path)?;
    let server = Server::new(&config)?;
    server.run().await?;

    Ok(())
}
