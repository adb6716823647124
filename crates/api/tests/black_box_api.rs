use std::collections::HashSet;

use reqwest::StatusCode;
use serde_json::{json, Value};

use stockd_infra::ServiceConfig;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Same router as prod, in-memory store, ephemeral port.
        let app = stockd_api::app::build_app(&ServiceConfig::in_memory())
            .expect("in-memory services always build");
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
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

async fn create(client: &reqwest::Client, srv: &TestServer, body: Value) -> Value {
    let res = client.post(srv.url("/stock/")).json(&body).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    res.json().await.unwrap()
}

#[tokio::test]
async fn create_returns_record_with_first_id() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let body = create(
        &client,
        &srv,
        json!({"productId": 1, "quantity": 100, "category": "electronics"}),
    )
    .await;

    assert_eq!(
        body,
        json!({"id": 1, "productId": 1, "quantity": 100, "category": "electronics"})
    );
}

#[tokio::test]
async fn sequential_creates_get_increasing_ids() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let first = create(&client, &srv, json!({"productId": 1, "quantity": 1, "category": "a"})).await;
    let second = create(&client, &srv, json!({"productId": 2, "quantity": 2, "category": "b"})).await;

    assert!(second["id"].as_i64().unwrap() > first["id"].as_i64().unwrap());
}

#[tokio::test]
async fn list_returns_all_created_records() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    create(&client, &srv, json!({"productId": 1, "quantity": 100, "category": "electronics"})).await;
    create(&client, &srv, json!({"product_id": 2, "quantity": 50, "category": "books"})).await;

    for path in ["/stock/", "/stock"] {
        let res = client.get(srv.url(path)).send().await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let data: Vec<Value> = res.json().await.unwrap();

        assert_eq!(data.len(), 2);
        let products: HashSet<i64> = data.iter().map(|r| r["productId"].as_i64().unwrap()).collect();
        let categories: HashSet<&str> = data.iter().map(|r| r["category"].as_str().unwrap()).collect();
        assert_eq!(products, HashSet::from([1, 2]));
        assert_eq!(categories, HashSet::from(["electronics", "books"]));
    }
}

#[tokio::test]
async fn get_by_id_returns_created_fields() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let created = create(&client, &srv, json!({"productId": 1, "quantity": 100, "category": "electronics"})).await;
    let id = created["id"].as_i64().unwrap();

    let res = client.get(srv.url(&format!("/stock/{id}"))).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let data: Value = res.json().await.unwrap();

    assert_eq!(data, created);
}

#[tokio::test]
async fn update_overwrites_fields_and_keeps_id() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let created = create(&client, &srv, json!({"productId": 1, "quantity": 100, "category": "electronics"})).await;
    let id = created["id"].as_i64().unwrap();

    let res = client
        .put(srv.url(&format!("/stock/{id}")))
        .json(&json!({"productId": 1, "quantity": 75, "category": "updated"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let updated: Value = res.json().await.unwrap();
    assert_eq!(updated["id"].as_i64(), Some(id));
    assert_eq!(updated["quantity"].as_i64(), Some(75));
    assert_eq!(updated["category"].as_str(), Some("updated"));

    let fetched: Value = client
        .get(srv.url(&format!("/stock/{id}")))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn delete_removes_record() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let created = create(&client, &srv, json!({"productId": 1, "quantity": 100, "category": "electronics"})).await;
    let id = created["id"].as_i64().unwrap();

    let res = client.delete(srv.url(&format!("/stock/{id}"))).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Stock information deleted");

    let list: Vec<Value> = client.get(srv.url("/stock/")).send().await.unwrap().json().await.unwrap();
    assert!(list.is_empty());

    let res = client.get(srv.url(&format!("/stock/{id}"))).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_ids_are_not_found() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client.get(srv.url("/stock/999")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Stock information not found");
    assert_eq!(body["detail"], "Stock information not found");

    let res = client
        .put(srv.url("/stock/999"))
        .json(&json!({"productId": 1, "quantity": 100, "category": "test"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = client.delete(srv.url("/stock/999")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    // Integers beyond the id range can never exist.
    let res = client.get(srv.url("/stock/99999999999999999999")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    // Nothing was created as a side effect.
    let list: Vec<Value> = client.get(srv.url("/stock/")).send().await.unwrap().json().await.unwrap();
    assert!(list.is_empty());
}

#[tokio::test]
async fn malformed_input_is_rejected() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(srv.url("/stock/"))
        .json(&json!({"productId": "one", "quantity": 1, "category": "x"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "invalid_body");

    let res = client.get(srv.url("/stock/abc")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "invalid_id");
}

#[tokio::test]
async fn health_reports_store() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client.get(srv.url("/health")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({"status": "ok", "store": "memory"}));
}

#[tokio::test]
async fn create_update_delete_scenario() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let created = create(&client, &srv, json!({"productId": 1, "quantity": 100, "category": "electronics"})).await;
    assert_eq!(created, json!({"id": 1, "productId": 1, "quantity": 100, "category": "electronics"}));

    let updated: Value = client
        .put(srv.url("/stock/1"))
        .json(&json!({"productId": 1, "quantity": 75, "category": "updated"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(updated, json!({"id": 1, "productId": 1, "quantity": 75, "category": "updated"}));

    let res = client.delete(srv.url("/stock/1")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let list: Vec<Value> = client.get(srv.url("/stock/")).send().await.unwrap().json().await.unwrap();
    assert!(list.is_empty());
}
