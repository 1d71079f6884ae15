use mock_backend::{config::Config, server, telemetry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env();
    telemetry::init(&config);
    config.print_summary();

    server::run().await?;

    Ok(())
}
