use std::sync::Arc;

use forecast_player::{server::router, types::SessionState};
use tokio::sync::Mutex;

async fn spawn_server() -> String {
    let session: SessionState = Arc::new(Mutex::new(None));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router(session)).await.unwrap();
    });

    format!("http://{}", addr)
}

#[tokio::test]
async fn test_health_reports_version() {
    let base = spawn_server().await;

    let body: serde_json::Value = reqwest::get(format!("{}/health", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_results_form_is_served() {
    let base = spawn_server().await;

    let response = reqwest::get(format!("{}/results", base)).await.unwrap();
    assert!(response.status().is_success());

    let html = response.text().await.unwrap();
    assert!(html.contains("name=\"place\""));
}

#[tokio::test]
async fn test_results_rejects_blank_place() {
    let base = spawn_server().await;

    let response = reqwest::Client::new()
        .post(format!("{}/results", base))
        .form(&[("place", "   ")])
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn test_callback_without_code() {
    let base = spawn_server().await;

    let html = reqwest::get(format!("{}/callback", base))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert!(html.contains("Missing authorization code"));
}
