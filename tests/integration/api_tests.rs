//! API integration tests
//!
//! Each test spawns the real router on an ephemeral port with fresh stores.

use catalog_server::{create_router, AppState};
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        let app = create_router(AppState::new());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind ephemeral port");
        let addr = listener.local_addr().expect("No local address");

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Server error");
        });

        Self {
            base_url: format!("http://{}", addr),
            handle,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[tokio::test]
async fn test_health_check() {
    let srv = TestServer::spawn().await;
    let response = Client::new()
        .get(srv.url("/health"))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_readiness_reports_store_sizes() {
    let srv = TestServer::spawn().await;
    let client = Client::new();

    client
        .delete(srv.url("/publishers/1"))
        .send()
        .await
        .expect("Failed to send request");

    let body: Value = client
        .get(srv.url("/ready"))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(body["status"], "ready");
    assert_eq!(body["authors"], 2);
    assert_eq!(body["publishers"], 1);
}

#[tokio::test]
async fn test_list_seed_authors() {
    let srv = TestServer::spawn().await;
    let response = Client::new()
        .get(srv.url("/authors"))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(
        body,
        json!([
            {"id": 1, "name": "JRR Tolkien", "email": "jrr@tolkien.com"},
            {"id": 2, "name": "Jane Austen", "email": "jane@austen.com"}
        ])
    );
}

#[tokio::test]
async fn test_create_author_assigns_next_id() {
    let srv = TestServer::spawn().await;
    let client = Client::new();

    let response = client
        .post(srv.url("/authors"))
        .json(&json!({"name": "Mary Shelley", "email": "mary@shelley.com"}))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(
        body,
        json!({"id": 3, "name": "Mary Shelley", "email": "mary@shelley.com"})
    );

    let list: Value = client
        .get(srv.url("/authors"))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(list.as_array().map(Vec::len), Some(3));
}

#[tokio::test]
async fn test_get_author_by_position() {
    let srv = TestServer::spawn().await;
    let response = Client::new()
        .get(srv.url("/authors/1"))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["name"], "Jane Austen");
    assert_eq!(body["id"], 2);
}

#[tokio::test]
async fn test_author_out_of_range_returns_empty_body() {
    let srv = TestServer::spawn().await;
    let client = Client::new();

    for index in ["2", "9", "-1"] {
        let response = client
            .get(srv.url(&format!("/authors/{}", index)))
            .send()
            .await
            .expect("Failed to send request");
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().get("content-type").is_none());
        let body = response.text().await.expect("Failed to read body");
        assert_eq!(body, "", "index {} gave {:?}", index, body);
    }

    let response = client
        .put(srv.url("/authors/7"))
        .json(&json!({"name": "Nobody", "email": "no@body.com"}))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(response.text().await.expect("Failed to read body"), "");

    let response = client
        .delete(srv.url("/authors/7"))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text().await.expect("Failed to read body"), "");
}

#[tokio::test]
async fn test_author_update_consumes_an_id() {
    let srv = TestServer::spawn().await;
    let client = Client::new();

    for index in ["0", "9"] {
        let response = client
            .put(srv.url(&format!("/authors/{}", index)))
            .json(&json!({"name": "a", "email": "b"}))
            .send()
            .await
            .expect("Failed to send request");
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let body: Value = client
        .post(srv.url("/authors"))
        .json(&json!({"name": "Mary Shelley", "email": "mary@shelley.com"}))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(body["id"], 5);
}

#[tokio::test]
async fn test_update_author_in_place() {
    let srv = TestServer::spawn().await;
    let client = Client::new();

    let response = client
        .put(srv.url("/authors/0"))
        .json(&json!({"name": "J.R.R. Tolkien", "email": "tolkien@oxford.ac.uk"}))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(
        body,
        json!({"id": 1, "name": "J.R.R. Tolkien", "email": "tolkien@oxford.ac.uk"})
    );

    let fetched: Value = client
        .get(srv.url("/authors/0"))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(fetched, body);
}

#[tokio::test]
async fn test_delete_author_shifts_positions() {
    let srv = TestServer::spawn().await;
    let client = Client::new();

    let response = client
        .delete(srv.url("/authors/0"))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["name"], "JRR Tolkien");

    let first: Value = client
        .get(srv.url("/authors/0"))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(first["name"], "Jane Austen");
}

#[tokio::test]
async fn test_malformed_author_body_is_rejected() {
    let srv = TestServer::spawn().await;
    let response = Client::new()
        .post(srv.url("/authors"))
        .json(&json!({"name": "Missing Email"}))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["code"], 400);
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn test_non_numeric_index_is_rejected() {
    let srv = TestServer::spawn().await;
    let response = Client::new()
        .get(srv.url("/publishers/first"))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "Bad Request");
}

#[tokio::test]
async fn test_list_seed_publishers() {
    let srv = TestServer::spawn().await;
    let response = Client::new()
        .get(srv.url("/publishers"))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(
        body,
        json!([
            {"name": "Kunnskapsforlaget", "city": "Trondheim"},
            {"name": "Damm", "city": "Bergen"}
        ])
    );
}

#[tokio::test]
async fn test_create_and_update_publisher() {
    let srv = TestServer::spawn().await;
    let client = Client::new();

    let response = client
        .post(srv.url("/publishers"))
        .json(&json!({"name": "Cappelen", "city": "Oslo"}))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, json!({"name": "Cappelen", "city": "Oslo"}));

    let response = client
        .put(srv.url("/publishers/2"))
        .json(&json!({"name": "Cappelen Damm", "city": "Oslo"}))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["name"], "Cappelen Damm");
}

#[tokio::test]
async fn test_delete_publisher_out_of_range() {
    let srv = TestServer::spawn().await;
    let response = Client::new()
        .delete(srv.url("/publishers/5"))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response.text().await.expect("Failed to read body");
    assert_eq!(body, "Id out of range");
}

#[tokio::test]
async fn test_publisher_negative_index_is_rejected() {
    let srv = TestServer::spawn().await;
    let client = Client::new();

    let response = client
        .get(srv.url("/publishers/-1"))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(response.text().await.expect("Failed to read body"), "Id out of range");

    let response = client
        .put(srv.url("/publishers/-1"))
        .json(&json!({"name": "Nobody", "city": "Nowhere"}))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(response.text().await.expect("Failed to read body"), "Id out of range");
}

#[tokio::test]
async fn test_delete_first_publisher() {
    let srv = TestServer::spawn().await;
    let client = Client::new();

    let response = client
        .delete(srv.url("/publishers/0"))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, json!({"name": "Kunnskapsforlaget", "city": "Trondheim"}));

    let list: Value = client
        .get(srv.url("/publishers"))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(list, json!([{"name": "Damm", "city": "Bergen"}]));
}

#[tokio::test]
async fn test_openapi_document_served() {
    let srv = TestServer::spawn().await;
    let response = Client::new()
        .get(srv.url("/api-docs/openapi.json"))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["paths"]["/publishers/{id}"].is_object());
}
