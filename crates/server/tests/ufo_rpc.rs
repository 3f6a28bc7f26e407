use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use client::UfoClient;
use models::sighting::{SightingInfo, SightingUpdateInfo};
use reqwest::StatusCode as HttpStatusCode;
use serde_json::json;
use server::routes;
use service::sightings;
use tokio::net::TcpListener;

struct TestApp {
    base_url: String,
}

async fn start_server() -> anyhow::Result<TestApp> {
    let app: Router = routes::build_ufo_router(sightings::new_store(), Duration::from_secs(5));
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url })
}

#[tokio::test]
async fn sighting_lifecycle_over_rpc() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = UfoClient::new(&app.base_url);

    let uuid = c
        .create(SightingInfo {
            location: "Paris".into(),
            description: "bright light".into(),
            ..Default::default()
        })
        .await?;

    let s = c.get(&uuid).await?;
    assert_eq!(s.uuid, uuid);
    assert_eq!(s.info.location, "Paris");
    assert!(s.updated_at.is_none());
    assert!(s.deleted_at.is_none());

    c.update(&uuid, Some(SightingUpdateInfo { color: Some("green".into()), ..Default::default() })).await?;
    let s = c.get(&uuid).await?;
    assert_eq!(s.info.description, "bright light");
    assert_eq!(s.info.color.as_deref(), Some("green"));
    let t1 = s.updated_at.expect("updated_at");
    assert!(t1 >= s.created_at);

    c.delete(&uuid).await?;
    let s = c.get(&uuid).await?;
    assert_eq!(s.info.color.as_deref(), Some("green"));
    assert!(s.deleted_at.expect("deleted_at") >= t1);
    Ok(())
}

#[tokio::test]
async fn unknown_uuid_is_not_found_for_every_method() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = UfoClient::new(&app.base_url);

    let err = c.get("missing").await.unwrap_err();
    assert!(err.is_not_found());
    let err = c.update("missing", Some(SightingUpdateInfo::default())).await.unwrap_err();
    assert!(err.is_not_found());
    let err = c.delete("missing").await.unwrap_err();
    assert!(err.is_not_found());
    // unknown key is reported before the missing payload
    let err = c.update("missing", None).await.unwrap_err();
    assert!(err.is_not_found());
    Ok(())
}

#[tokio::test]
async fn update_without_info_is_invalid_argument() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = UfoClient::new(&app.base_url);
    let uuid = c.create(SightingInfo::default()).await?;

    match c.update(&uuid, None).await {
        Err(client::ClientError::Status { status, code, .. }) => {
            assert_eq!(status, 400);
            assert_eq!(code, "invalid_argument");
        }
        other => panic!("unexpected result: {other:?}"),
    }

    c.update(&uuid, Some(SightingUpdateInfo::default())).await?;
    assert!(c.get(&uuid).await?.updated_at.is_some());
    Ok(())
}

#[tokio::test]
async fn malformed_and_unknown_calls_are_rejected() -> anyhow::Result<()> {
    let app = start_server().await?;
    let http = reqwest::Client::new();

    let res = http
        .post(format!("{}/ufo.v1.UFOService/Get", app.base_url))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["code"], "invalid_argument");

    let res = http
        .post(format!("{}/ufo.v1.UFOService/List", app.base_url))
        .json(&json!({}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_IMPLEMENTED);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["code"], "unimplemented");
    Ok(())
}

#[tokio::test]
async fn descriptor_health_and_metrics() -> anyhow::Result<()> {
    let app = start_server().await?;
    let http = reqwest::Client::new();

    let body = http
        .get(format!("{}/ufo.v1.UFOService", app.base_url))
        .send()
        .await?
        .json::<serde_json::Value>()
        .await?;
    assert_eq!(body["service"], "ufo.v1.UFOService");
    assert_eq!(body["methods"], json!(["Create", "Get", "Update", "Delete"]));

    let res = http.get(format!("{}/health", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<serde_json::Value>().await?["status"], "ok");

    UfoClient::new(&app.base_url).create(SightingInfo::default()).await?;
    let text = http.get(format!("{}/metrics", app.base_url)).send().await?.text().await?;
    assert!(text.contains("records_store_operations_total"));
    Ok(())
}

#[tokio::test]
async fn empty_update_info_only_bumps_updated_at() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = UfoClient::new(&app.base_url);
    let info = SightingInfo { location: "Roswell".into(), color: Some("silver".into()), ..Default::default() };
    let uuid = c.create(info.clone()).await?;

    let patch = SightingUpdateInfo::default();
    assert!(patch.is_empty());
    c.update(&uuid, Some(patch)).await?;

    let s = c.get(&uuid).await?;
    assert_eq!(s.info, info);
    assert!(s.updated_at.expect("updated_at") >= s.created_at);
    Ok(())
}
