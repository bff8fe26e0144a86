//! Integration tests for `HyperClient` using wiremock.

use grapnel::{Encoding, HttpClient, HyperClient, Method, Request, record};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, method, path},
};

fn parse(url: &str) -> url::Url {
    url::Url::parse(url).expect("valid URL")
}

#[tokio::test]
async fn test_get_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": 1, "name": "Alice"})),
        )
        .mount(&mock_server)
        .await;

    let client = HyperClient::new();
    let request = Request::builder(
        Method::Get,
        parse(&format!("{}/users/1", mock_server.uri())),
    )
    .header("Accept", "application/json")
    .build();

    let response = client.execute(request).await.expect("response");

    assert!(response.is_success());
    assert_eq!(response.status(), 200);
    assert_eq!(
        response.body().as_ref(),
        br#"{"id":1,"name":"Alice"}"#
    );
}

#[tokio::test]
async fn test_post_request_with_json_payload() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/users"))
        .and(header("Content-Type", "application/json;charset=UTF-8"))
        .and(body_json(serde_json::json!({"name": "Bob"})))
        .respond_with(ResponseTemplate::new(201))
        .mount(&mock_server)
        .await;

    let client = HyperClient::new();
    let payload = Encoding::Json
        .encode(&record! { "name" => "Bob" })
        .expect("encode");
    let request = Request::builder(Method::Post, parse(&format!("{}/users", mock_server.uri())))
        .payload(payload)
        .build();

    let response = client.execute(request).await.expect("response");

    assert!(response.is_success());
    assert_eq!(response.status(), 201);
}

#[tokio::test]
async fn test_http_error_status_is_not_an_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/not-found"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&mock_server)
        .await;

    let client = HyperClient::new();
    let request = Request::builder(
        Method::Get,
        parse(&format!("{}/not-found", mock_server.uri())),
    )
    .build();

    let response = client.execute(request).await.expect("response");

    assert!(response.is_client_error());
    assert_eq!(response.status(), 404);
    assert_eq!(response.body().as_ref(), b"Not Found");
}

#[tokio::test]
async fn test_custom_headers_are_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/data"))
        .and(header("Authorization", "Bearer token123"))
        .and(header("X-Custom-Header", "custom-value"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let client = HyperClient::new();
    let request = Request::builder(
        Method::Get,
        parse(&format!("{}/api/data", mock_server.uri())),
    )
    .header("Authorization", "Bearer token123")
    .header("X-Custom-Header", "custom-value")
    .build();

    let response = client.execute(request).await.expect("response");

    assert!(response.is_success());
}

#[tokio::test]
async fn test_connection_error_propagates() {
    // Grab a port with no listener behind it.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        listener.local_addr().expect("addr").port()
    };

    let client = HyperClient::new();
    let request = Request::builder(Method::Get, parse(&format!("http://127.0.0.1:{port}/"))).build();

    let err = client.execute(request).await.expect_err("should fail");
    assert!(err.is_connection());
}
