use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use client::WeatherClient;
use reqwest::StatusCode as HttpStatusCode;
use serde_json::json;
use server::routes;
use service::weather;
use tokio::net::TcpListener;

async fn start_server() -> anyhow::Result<String> {
    let app: Router = routes::build_weather_router(weather::new_store(), Duration::from_secs(5));
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(format!("http://{}:{}", addr.ip(), addr.port()))
}

#[tokio::test]
async fn missing_city_is_plain_text_404() -> anyhow::Result<()> {
    let base = start_server().await?;
    let res = reqwest::get(format!("{base}/api/v1/weather/Oslo")).await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    assert_eq!(res.text().await?, "Weather for city 'Oslo' not found");
    Ok(())
}

#[tokio::test]
async fn put_then_get_returns_latest_reading() -> anyhow::Result<()> {
    let base = start_server().await?;
    let c = WeatherClient::new(&base);

    assert!(c.get("Oslo").await?.is_none());

    let first = c.put("Oslo", -4.5).await?;
    assert_eq!(first.city, "Oslo");
    assert_eq!(first.temperature, -4.5);

    let second = c.put("Oslo", 2.0).await?;
    assert_eq!(second.temperature, 2.0);
    assert!(second.updated_at >= first.updated_at);

    let got = c.get("Oslo").await?.expect("weather stored");
    assert_eq!(got, second);
    Ok(())
}

#[tokio::test]
async fn bad_body_and_blank_city_on_put_are_400() -> anyhow::Result<()> {
    let base = start_server().await?;
    let http = reqwest::Client::new();

    let res = http
        .put(format!("{base}/api/v1/weather/Lima"))
        .header("content-type", "application/json")
        .body("temperature=hot")
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    assert_eq!(res.text().await?, "Invalid request body");

    let res = http
        .put(format!("{base}/api/v1/weather/%20"))
        .json(&json!({"temperature": 1.0}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    assert_eq!(res.text().await?, "City parameter is required");
    Ok(())
}

#[tokio::test]
async fn whitespace_city_on_get_is_not_found() -> anyhow::Result<()> {
    let base = start_server().await?;
    let res = reqwest::get(format!("{base}/api/v1/weather/%20")).await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    assert_eq!(res.text().await?, "Weather for city ' ' not found");
    Ok(())
}

#[tokio::test]
async fn city_with_reserved_characters_round_trips() -> anyhow::Result<()> {
    let base = start_server().await?;
    let c = WeatherClient::new(&base);

    let stored = c.put("Rio/Centro?x#y", 31.5).await?;
    assert_eq!(stored.city, "Rio/Centro?x#y");

    let got = c.get("Rio/Centro?x#y").await?.expect("weather stored");
    assert_eq!(got.temperature, 31.5);
    assert!(c.get("Rio").await?.is_none());
    Ok(())
}
