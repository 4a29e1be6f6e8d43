// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{create_test_server, mock_page};
use axum::http::StatusCode;
use serde_json::{json, Value};

const SAMPLE_PAGE: &str = r#"
<!DOCTYPE html>
<html>
    <head><title>Sample</title></head>
    <body>
        <h1>Notícias do dia</h1>
        <p>Primeiro parágrafo sobre Rust.</p>
        <p>Segundo parágrafo, com vírgula.</p>
        <div class="card"><span>Card A</span></div>
        <div class="card">Card B</div>
        <a href="/sobre">Sobre</a>
        <img src="/logo.png" alt="Logo">
    </body>
</html>
"#;

#[tokio::test]
async fn test_titles_inline_scenario() {
    let upstream = mock_page("/", "<h1>Hello</h1><p>ignored</p>").await;
    let server = create_test_server();

    let response = server
        .post("/scrape")
        .json(&json!({
            "url": upstream.uri(),
            "data_type": "titles",
            "output_format": "inline"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!({ "results": ["Hello"] }));
}

#[tokio::test]
async fn test_links_scenario() {
    let upstream = mock_page("/links", r#"<a href="/x"></a><a href="/y">Go</a>"#).await;
    let server = create_test_server();

    let response = server
        .post("/scrape")
        .json(&json!({
            "url": format!("{}/links", upstream.uri()),
            "data_type": "links"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!({ "results": ["/x", "Go (/y)"] }));
}

#[tokio::test]
async fn test_images_and_custom_selector() {
    let upstream = mock_page("/page", SAMPLE_PAGE).await;
    let server = create_test_server();

    let images = server
        .post("/scrape")
        .json(&json!({
            "url": format!("{}/page", upstream.uri()),
            "data_type": "images"
        }))
        .await;
    assert_eq!(images.json::<Value>(), json!({ "results": ["Logo (/logo.png)"] }));

    let cards = server
        .post("/scrape")
        .json(&json!({
            "url": format!("{}/page", upstream.uri()),
            "data_type": "custom",
            "custom_selector": "div.card"
        }))
        .await;
    assert_eq!(cards.json::<Value>(), json!({ "results": ["Card A", "Card B"] }));
}

#[tokio::test]
async fn test_query_filter_is_case_insensitive() {
    let upstream = mock_page("/page", SAMPLE_PAGE).await;
    let server = create_test_server();

    let response = server
        .post("/scrape")
        .json(&json!({
            "url": format!("{}/page", upstream.uri()),
            "query": "RUST",
            "data_type": "paragraphs",
            "custom_selector": ""
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        json!({ "results": ["Primeiro parágrafo sobre Rust."] })
    );
}

#[tokio::test]
async fn test_custom_without_selector_is_rejected_before_fetch() {
    let upstream = mock_page("/", SAMPLE_PAGE).await;
    let server = create_test_server();

    let response = server
        .post("/scrape")
        .json(&json!({
            "url": upstream.uri(),
            "data_type": "custom"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert!(body["error"].as_str().unwrap().contains("custom_selector"));

    let received = upstream.received_requests().await.unwrap_or_default();
    assert!(received.is_empty());
}

#[tokio::test]
async fn test_custom_with_malformed_selector_is_rejected() {
    let server = create_test_server();

    let response = server
        .post("/scrape")
        .json(&json!({
            "url": "https://example.com",
            "data_type": "custom",
            "custom_selector": "div[[["
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert!(response.json::<Value>()["error"].is_string());
}

#[tokio::test]
async fn test_missing_url_is_rejected() {
    let server = create_test_server();

    let response = server
        .post("/scrape")
        .json(&json!({ "data_type": "titles" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert!(body["error"].as_str().unwrap().contains("url is required"));

    let response = server
        .post("/scrape")
        .json(&json!({ "url": "", "data_type": "titles" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unparseable_body_is_rejected() {
    let server = create_test_server();

    let response = server
        .post("/scrape")
        .text("{not json")
        .content_type("application/json")
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert!(response.json::<Value>()["error"].is_string());

    let response = server.post("/scrape").await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert!(response.json::<Value>()["error"].is_string());

    let response = server.post("/scrape").json(&json!({ "url": 42 })).await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unreachable_url_returns_server_error() {
    // Reserve a port and release it so the connection is refused
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let server = create_test_server();
    let response = server
        .post("/scrape")
        .json(&json!({
            "url": format!("http://{}/", addr),
            "data_type": "titles"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = response.json::<Value>();
    let message = body["error"].as_str().unwrap();
    assert!(message.starts_with("Failed to fetch URL: Request failed"));
    assert!(
        message.to_lowercase().contains("refused"),
        "cause missing from: {}",
        message
    );
    assert!(body.get("results").is_none());
}

#[tokio::test]
async fn test_upstream_error_status_returns_server_error() {
    let upstream = mock_page("/exists", SAMPLE_PAGE).await;
    let server = create_test_server();

    let response = server
        .post("/scrape")
        .json(&json!({
            "url": format!("{}/missing", upstream.uri()),
            "data_type": "titles"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.json::<Value>()["error"]
        .as_str()
        .unwrap()
        .contains("404"));
}

#[tokio::test]
async fn test_unknown_data_type_returns_empty_results() {
    let upstream = mock_page("/page", SAMPLE_PAGE).await;
    let server = create_test_server();

    let response = server
        .post("/scrape")
        .json(&json!({
            "url": format!("{}/page", upstream.uri()),
            "data_type": "headlines"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!({ "results": [] }));
}

#[tokio::test]
async fn test_unknown_output_format_falls_back_to_inline() {
    let upstream = mock_page("/page", SAMPLE_PAGE).await;
    let server = create_test_server();

    let response = server
        .post("/scrape")
        .json(&json!({
            "url": format!("{}/page", upstream.uri()),
            "data_type": "titles",
            "output_format": "table"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!({ "results": ["Notícias do dia"] }));
}

#[tokio::test]
async fn test_csv_attachment() {
    let upstream = mock_page("/", "<p>a,b</p><p>c</p>").await;
    let server = create_test_server();

    let response = server
        .post("/scrape")
        .json(&json!({
            "url": upstream.uri(),
            "data_type": "paragraphs",
            "output_format": "csv"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.header("content-type"), "text/csv");
    assert_eq!(
        response.header("content-disposition"),
        "attachment; filename=\"resultados.csv\""
    );

    let body = response.text();
    let lines: Vec<&str> = body.lines().collect();
    assert_eq!(lines, vec!["Resultado", "\"a,b\"", "c"]);
}

#[tokio::test]
async fn test_json_attachment_keeps_non_ascii() {
    let upstream = mock_page("/page", SAMPLE_PAGE).await;
    let server = create_test_server();

    let response = server
        .post("/scrape")
        .json(&json!({
            "url": format!("{}/page", upstream.uri()),
            "data_type": "paragraphs",
            "output_format": "json"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.header("content-type"), "application/json");
    assert_eq!(
        response.header("content-disposition"),
        "attachment; filename=\"resultados.json\""
    );

    let body = response.text();
    assert!(body.contains("\n  \"results\": [\n"));
    assert!(body.contains("Primeiro parágrafo sobre Rust."));

    let decoded: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(
        decoded,
        json!({
            "results": [
                "Primeiro parágrafo sobre Rust.",
                "Segundo parágrafo, com vírgula."
            ]
        })
    );
}
