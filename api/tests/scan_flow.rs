use std::sync::{Arc, Mutex};

use axum::{Json, Router, http::StatusCode, routing::post};
use axum_test::{
    TestServer,
    multipart::{MultipartForm, Part},
};
use clap::Parser;
use labelscan_api::{
    application::http::server::http_server::{router, state},
    args::Args,
};
use serde_json::{Value, json};

type Received = Arc<Mutex<Vec<String>>>;

/// Serves `POST /analyze` on an ephemeral local port, replying with `status` and `body`
/// and recording the `text` field of every request.
async fn spawn_analyze_stub(status: StatusCode, body: Value) -> (String, Received) {
    let received: Received = Arc::default();
    let recorded = received.clone();

    let app = Router::new().route(
        "/analyze",
        post(move |Json(payload): Json<Value>| {
            let recorded = recorded.clone();
            let body = body.clone();
            async move {
                let text = payload["text"].as_str().unwrap_or_default().to_string();
                recorded.lock().unwrap().push(text);
                (status, Json(body))
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}/analyze"), received)
}

fn server_with_proxy(proxy_url: &str) -> TestServer {
    let args = Args::try_parse_from([
        "labelscan".to_string(),
        "--gemini-api-key=".to_string(),
        format!("--analyze-proxy-url={proxy_url}"),
        "--server-root-path=".to_string(),
    ])
    .unwrap();

    let app_state = state(Arc::new(args)).unwrap();
    TestServer::new(router(app_state).unwrap()).unwrap()
}

fn proxy_analysis() -> Value {
    json!({
        "health_score": 71,
        "summary": "Mostly fine, watch the sugar.",
        "breakdown": [
            {"ingredient": "Peanuts", "classification": "Healthy", "severity": 0, "reason": "Protein source"},
            {"ingredient": "Sugar", "classification": "Moderately Harmful", "severity": 2, "reason": "Added sugar"},
            {"ingredient": "milk", "classification": "Healthy", "severity": 0, "reason": "Dairy"}
        ],
        "flags": ["Sugar"],
        "health_advice": ["Limit added sugar."]
    })
}

#[tokio::test]
async fn test_scan_uses_proxy_analysis_and_side_checks() {
    let (url, received) = spawn_analyze_stub(StatusCode::OK, proxy_analysis()).await;
    let server = server_with_proxy(&url);

    let response = server
        .post("/analysis/scan")
        .json(&json!({ "text": "Peanuts,Sugar ,  milk" }))
        .await;

    response.assert_status_ok();
    let report: Value = response.json();
    let data = &report["data"];

    assert_eq!(data["source"], "text");
    assert_eq!(data["analysis"]["health_score"], 71);
    assert_eq!(data["analysis"]["flags"], json!(["Sugar"]));
    assert_eq!(data["analysis"]["health_advice"], json!(["Limit added sugar."]));
    assert_eq!(data["health_hue"], 85);
    assert_eq!(data["cleaned_ingredients"], json!(["Peanuts", "Sugar", "milk"]));

    let allergens: Vec<&str> = data["allergens"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|a| a["name"].as_str())
        .collect();
    assert!(allergens.contains(&"Peanuts"));
    assert!(allergens.contains(&"Dairy"));
    assert_eq!(data["diets"].as_array().unwrap().len(), 10);

    assert_eq!(*received.lock().unwrap(), vec!["Peanuts, Sugar, milk"]);
}

#[tokio::test]
async fn test_failing_proxy_falls_through_to_missing_key() {
    let (url, received) = spawn_analyze_stub(
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({ "error": "upstream down" }),
    )
    .await;
    let server = server_with_proxy(&url);

    let response = server
        .post("/analysis/scan")
        .json(&json!({ "text": "Sugar, Salt" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["code"], "E_CONFIGURATION");
    assert_eq!(received.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_proxy_body_with_wrong_shape_falls_through() {
    let (url, received) =
        spawn_analyze_stub(StatusCode::OK, json!({ "summary": "no score here" })).await;
    let server = server_with_proxy(&url);

    let response = server
        .post("/analysis")
        .json(&json!({ "text": "Sugar" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["code"], "E_CONFIGURATION");
    assert_eq!(*received.lock().unwrap(), vec!["Sugar"]);
}

#[tokio::test]
async fn test_scan_image_requires_image_field() {
    let server = server_with_proxy("");

    let form = MultipartForm::new().add_text("api_key", "");
    let response = server.post("/analysis/scan/image").multipart(form).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["message"], "Missing image field");
}

#[tokio::test]
async fn test_scan_image_without_key_is_a_configuration_error() {
    let server = server_with_proxy("");

    let image = Part::bytes(vec![0x89, 0x50, 0x4e, 0x47])
        .file_name("label.png")
        .mime_type("image/png");
    let form = MultipartForm::new().add_part("image", image);
    let response = server.post("/analysis/scan/image").multipart(form).await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["code"], "E_CONFIGURATION");
}
