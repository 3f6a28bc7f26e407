use client::{fake, WeatherClient};
use common::utils::logging::init_logging_from_env;
use configs::{AppConfig, ServiceKind};
use dotenvy::dotenv;
use tracing::info;

fn base_url() -> String {
    std::env::var("WEATHER_URL").unwrap_or_else(|_| {
        let cfg = AppConfig::load_and_validate().unwrap_or_default();
        format!("http://{}", cfg.service(ServiceKind::Weather).bind_addr())
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging_from_env();

    let client = WeatherClient::new(base_url());
    let mut rng = rand::thread_rng();
    let city = fake::city(&mut rng);

    match client.get(&city).await? {
        Some(w) => info!(city = %w.city, temperature = w.temperature, "existing weather"),
        None => info!(%city, "no weather yet"),
    }

    let stored = client.put(&city, fake::temperature(&mut rng)).await?;
    info!(city = %stored.city, temperature = stored.temperature, updated_at = %stored.updated_at, "weather stored");

    if let Some(w) = client.get(&city).await? {
        info!(city = %w.city, temperature = w.temperature, "weather fetched");
    }
    Ok(())
}
