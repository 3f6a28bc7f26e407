use client::{fake, UfoClient};
use common::utils::logging::init_logging_from_env;
use configs::{AppConfig, ServiceKind};
use dotenvy::dotenv;
use tracing::info;

fn base_url() -> String {
    std::env::var("UFO_URL").unwrap_or_else(|_| {
        let cfg = AppConfig::load_and_validate().unwrap_or_default();
        format!("http://{}", cfg.service(ServiceKind::Ufo).bind_addr())
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging_from_env();

    let client = UfoClient::new(base_url());
    let mut rng = rand::thread_rng();

    let uuid = client.create(fake::sighting_info(&mut rng)).await?;
    info!(%uuid, "sighting created");

    let sighting = client.get(&uuid).await?;
    info!(?sighting, "sighting fetched");

    let update = fake::sighting_update(&mut rng);
    client.update(&uuid, Some(update.clone())).await?;
    info!(?update, "sighting updated");

    let sighting = client.get(&uuid).await?;
    info!(?sighting, "sighting after update");

    client.delete(&uuid).await?;
    let sighting = client.get(&uuid).await?;
    info!(?sighting, deleted_at = ?sighting.deleted_at, "sighting after delete");
    Ok(())
}
