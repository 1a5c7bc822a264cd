//! Integration tests for the spreadsheet bridge client (wiremock-based)

use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use integration_sheets::{HttpSheetsClient, SheetsClient, SheetsConfig};

fn config_for_mock(base_url: &str) -> SheetsConfig {
    SheetsConfig {
        base_url: base_url.to_string(),
        timeout_secs: 5,
    }
}

fn sample_row() -> Vec<String> {
    [
        "2026-08-07T10:15:00Z",
        "KUM/101-48213",
        "Ama Serwaa",
        "0591234567",
        "Kumasi",
        "Circle Odawna",
        "Sprinter",
        "117.00",
        "Kofi Serwaa",
        "web",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

#[tokio::test]
async fn append_row_posts_the_bridge_body() {
    let server = MockServer::start().await;
    let row = sample_row();

    Mock::given(method("POST"))
        .and(path("/data"))
        .and(body_json(serde_json::json!({ "values": row })))
        .respond_with(ResponseTemplate::new(200).set_body_string("Data saved to Google Sheet!"))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpSheetsClient::new(&config_for_mock(&server.uri())).unwrap();
    client.append_row(&row).await.unwrap();
}

#[tokio::test]
async fn append_row_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/data"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = HttpSheetsClient::new(&config_for_mock(&server.uri())).unwrap();
    let err = client.append_row(&sample_row()).await.unwrap_err();
    assert!(err.to_string().contains("500"));
}

#[tokio::test]
async fn append_row_bad_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/data"))
        .respond_with(
            ResponseTemplate::new(400).set_body_string("Bad request: Expected array of values"),
        )
        .mount(&server)
        .await;

    let client = HttpSheetsClient::new(&config_for_mock(&server.uri())).unwrap();
    assert!(client.append_row(&sample_row()).await.is_err());
}

#[tokio::test]
async fn read_rows_returns_every_row() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"[["2026-08-07T10:15:00Z","KUM/101-48213","Ama Serwaa"],
                ["2026-08-07T11:02:00Z","TM/102-91544","Yaw Mensah"]]"#,
        ))
        .mount(&server)
        .await;

    let client = HttpSheetsClient::new(&config_for_mock(&server.uri())).unwrap();
    let rows = client.read_rows().await.unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0][1], "KUM/101-48213");
    assert_eq!(rows[1][2], "Yaw Mensah");
}

#[tokio::test]
async fn read_rows_handles_empty_sheet() {
    let server = MockServer::start().await;

    // The bridge serializes an empty sheet as `null`.
    Mock::given(method("GET"))
        .and(path("/data"))
        .respond_with(ResponseTemplate::new(200).set_body_string("null"))
        .mount(&server)
        .await;

    let client = HttpSheetsClient::new(&config_for_mock(&server.uri())).unwrap();
    assert!(client.read_rows().await.unwrap().is_empty());
}

#[tokio::test]
async fn is_healthy_reflects_bridge_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .mount(&server)
        .await;

    let client = HttpSheetsClient::new(&config_for_mock(&server.uri())).unwrap();
    assert!(client.is_healthy().await);

    server.reset().await;
    Mock::given(method("GET"))
        .and(path("/data"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    assert!(!client.is_healthy().await);
}
