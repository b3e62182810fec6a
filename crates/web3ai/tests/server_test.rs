use serde_json::Value;
use std::sync::Arc;
use tokio::net::TcpListener;
use web3ai::{serve_with_listener, Settings};

/// Start the info server on an ephemeral port and return its base URL
async fn spawn_server(settings: Settings) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(serve_with_listener(listener, Arc::new(settings)));
    format!("http://{}", addr)
}

async fn get_json(url: &str) -> (u16, Value) {
    let response = reqwest::get(url).await.unwrap();
    let status = response.status().as_u16();
    (status, response.json().await.unwrap())
}

#[tokio::test]
async fn root_reports_running() {
    let base = spawn_server(Settings::default()).await;
    let (status, body) = get_json(&base).await;

    assert_eq!(status, 200);
    assert_eq!(body["message"], "Web3AI API");
    assert_eq!(body["version"], "1.0.0");
    assert_eq!(body["status"], "running");
}

#[tokio::test]
async fn health_echoes_configuration() {
    let settings = Settings::from_pairs([("MODEL_NAME", "gpt-4o"), ("NETWORK", "sepolia")]);
    let base = spawn_server(settings).await;
    let (status, body) = get_json(&format!("{}/health", base)).await;

    assert_eq!(status, 200);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["model"], "gpt-4o");
    assert_eq!(body["network"], "sepolia");
}

#[tokio::test]
async fn api_info_with_default_settings() {
    let base = spawn_server(Settings::default()).await;
    let (status, body) = get_json(&format!("{}/api/info", base)).await;

    assert_eq!(status, 200);
    let fields = body.as_object().unwrap();
    assert_eq!(fields.len(), 4);
    assert_eq!(body["app_name"], "Web3AI API");
    assert_eq!(body["model_name"], "gpt-3.5-turbo");
    assert_eq!(body["network"], "mainnet");
    assert_eq!(body["version"], "1.0.0");
}

#[tokio::test]
async fn api_info_with_custom_settings() {
    let settings = Settings::from_pairs([("APP_NAME", "Chain Tutor"), ("NETWORK", "")]);
    let base = spawn_server(settings).await;
    let (status, body) = get_json(&format!("{}/api/info", base)).await;

    assert_eq!(status, 200);
    assert_eq!(body["app_name"], "Chain Tutor");
    assert_eq!(body["network"], "");
}

#[tokio::test]
async fn cors_mirrors_origin_with_credentials() {
    let base = spawn_server(Settings::default()).await;
    let client = reqwest::Client::new();

    let response = client
        .request(reqwest::Method::OPTIONS, format!("{}/health", base))
        .header("Origin", "http://localhost:3000")
        .header("Access-Control-Request-Method", "GET")
        .header("Access-Control-Request-Headers", "x-custom")
        .send()
        .await
        .unwrap();

    assert!(response.status().is_success());
    let headers = response.headers();
    assert_eq!(
        headers["access-control-allow-origin"],
        "http://localhost:3000"
    );
    assert_eq!(headers["access-control-allow-credentials"], "true");
    assert_eq!(headers["access-control-allow-methods"], "GET");
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let base = spawn_server(Settings::default()).await;
    let response = reqwest::get(format!("{}/api/missing", base)).await.unwrap();
    assert_eq!(response.status().as_u16(), 404);
}
