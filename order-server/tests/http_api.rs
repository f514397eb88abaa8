use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use order_server::routes::build_app;
use order_server::{Config, OrderRepository, OrderService, RepoError, RepoResult, ServerState};
use serde_json::{Value, json};
use shared::models::Order;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

async fn app() -> Router {
    let state = ServerState::initialize(&Config::default()).await.unwrap();
    build_app().with_state(state)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn json_request(method: Method, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn order_payload(restaurant_id: &str) -> Value {
    json!({
        "customer_id": "c-42",
        "restaurant_id": restaurant_id,
        "status": "Delivered",
        "order_items": [
            {"product_code": "p-1", "name": "Ramen", "unit_price": 12.5, "quantity": 2}
        ]
    })
}

async fn create(app: &Router, restaurant_id: &str) -> String {
    let (status, body) = send(
        app,
        json_request(Method::POST, "/api/v1/orders", &order_payload(restaurant_id)),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    body["data"]["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_health() {
    let app = app().await;
    let (status, body) = send(&app, get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["backend"], "memory");
    assert_eq!(body["orders"], 0);
}

#[tokio::test]
async fn test_create_then_get() {
    let app = app().await;
    let id = create(&app, "r-1").await;
    assert!(!id.is_empty());

    let (status, body) = send(&app, get(&format!("/api/v1/orders/id/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], 0);
    assert_eq!(body["data"]["id"], id.as_str());
    assert_eq!(body["data"]["status"], "Pending");
    assert_eq!(body["data"]["restaurant_id"], "r-1");
    assert_eq!(body["data"]["order_items"][0]["quantity"], 2);
    assert!(body["data"]["created_on"].as_i64().unwrap() > 0);
}

#[tokio::test]
async fn test_create_invalid_order_rejected() {
    let app = app().await;

    let mut payload = order_payload("r-1");
    payload["order_items"] = json!([]);
    let (status, body) = send(&app, json_request(Method::POST, "/api/v1/orders", &payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 4007);

    let (status, body) = send(
        &app,
        json_request(Method::POST, "/api/v1/orders", &order_payload("")),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 4008);

    let (_, body) = send(&app, get("/api/v1/orders/count")).await;
    assert_eq!(body["data"]["count"], 0);
}

#[tokio::test]
async fn test_malformed_body_is_invalid_request() {
    let app = app().await;
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/orders")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 5);
    assert!(body.get("data").is_none());
}

#[tokio::test]
async fn test_list_empty_store_is_empty_array() {
    let app = app().await;
    let (status, body) = send(&app, get("/api/v1/orders")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!([]));

    let (_, body) = send(&app, get("/api/v1/orders?page=0&size=0")).await;
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn test_list_pages() {
    let app = app().await;
    for i in 0..5 {
        create(&app, &format!("r-{i}")).await;
    }

    let (_, all) = send(&app, get("/api/v1/orders")).await;
    assert_eq!(all["data"].as_array().unwrap().len(), 5);

    let (_, page) = send(&app, get("/api/v1/orders?page=1&size=2")).await;
    let page = page["data"].as_array().unwrap().clone();
    assert_eq!(page.len(), 2);
    assert_eq!(page[0]["id"], all["data"][2]["id"]);

    let (_, last) = send(&app, get("/api/v1/orders?page=2&size=2")).await;
    assert_eq!(last["data"].as_array().unwrap().len(), 1);

    let (_, count) = send(&app, get("/api/v1/orders/count")).await;
    assert_eq!(count["data"]["count"], 5);
}

#[tokio::test]
async fn test_list_far_page_is_empty() {
    let app = app().await;
    create(&app, "r-1").await;

    let (status, body) = send(&app, get("/api/v1/orders?page=4294967296&size=1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn test_change_status_empty_id_is_zero() {
    let app = app().await;
    let (status, body) = send(
        &app,
        json_request(
            Method::PUT,
            "/api/v1/orders/status",
            &json!({"id": "", "status": "Shipped"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["updated"], 0);
}

#[tokio::test]
async fn test_bad_query_is_invalid_request() {
    let app = app().await;
    let (status, body) = send(&app, get("/api/v1/orders?size=lots")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 5);
}

#[tokio::test]
async fn test_missing_order_is_not_found() {
    let app = app().await;
    let (status, body) = send(&app, get("/api/v1/orders/id/nope")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 4001);
    assert_eq!(body["details"]["id"], "nope");
}

#[tokio::test]
async fn test_unknown_route_is_bad_routing() {
    let app = app().await;

    let (status, body) = send(&app, get("/api/v1/orders/id/")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 9);

    let (status, body) = send(&app, get("/api/v2/anything")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 9);
}

#[tokio::test]
async fn test_change_status() {
    let app = app().await;
    let id = create(&app, "r-1").await;

    let (status, body) = send(
        &app,
        json_request(
            Method::PUT,
            "/api/v1/orders/status",
            &json!({"id": "missing", "status": "Shipped"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["updated"], 0);

    let (status, body) = send(
        &app,
        json_request(
            Method::PUT,
            "/api/v1/orders/status",
            &json!({"id": id, "status": "Shipped"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["updated"], 1);

    let (_, body) = send(&app, get(&format!("/api/v1/orders/id/{id}"))).await;
    assert_eq!(body["data"]["status"], "Shipped");
}

#[tokio::test]
async fn test_change_status_requires_fields() {
    let app = app().await;
    let (status, body) = send(
        &app,
        json_request(Method::PUT, "/api/v1/orders/status", &json!({"id": "1"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 5);
}

#[tokio::test]
async fn test_request_id_propagated() {
    let app = app().await;
    let response = app.clone().oneshot(get("/health")).await.unwrap();
    let request_id = response.headers().get("x-request-id").unwrap();
    assert_eq!(request_id.len(), 36);

    let request = Request::builder()
        .uri("/health")
        .header("x-request-id", "caller-123")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.headers().get("x-request-id").unwrap(), "caller-123");
}

#[derive(Debug)]
struct StalledRepo;

impl StalledRepo {
    async fn stall<T>(&self) -> RepoResult<T> {
        tokio::time::sleep(Duration::from_secs(30)).await;
        Err(RepoError::Database("unreachable".into()))
    }
}

#[async_trait]
impl OrderRepository for StalledRepo {
    fn backend(&self) -> &'static str {
        "stalled"
    }
    async fn create_order(&self, _order: Order) -> RepoResult<String> {
        self.stall().await
    }
    async fn get_order_by_id(&self, _id: &str) -> RepoResult<Order> {
        self.stall().await
    }
    async fn change_order_status(&self, _id: &str, _status: &str) -> RepoResult<u64> {
        self.stall().await
    }
    async fn get_all(&self) -> RepoResult<Vec<Order>> {
        self.stall().await
    }
    async fn get_page(&self, _page: u64, _size: u64) -> RepoResult<Vec<Order>> {
        self.stall().await
    }
    async fn count(&self) -> RepoResult<u64> {
        self.stall().await
    }
}

#[tokio::test]
async fn test_deadline_is_service_unavailable() {
    let orders = OrderService::with_defaults(Arc::new(StalledRepo), Duration::from_millis(50));
    let state = ServerState::with_service(Config::default(), orders);
    let app = build_app().with_state(state);

    let (status, body) = send(&app, get("/api/v1/orders/count")).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["code"], 9004);

    let (status, body) = send(&app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "degraded");
    assert!(body.get("orders").is_none());
}
