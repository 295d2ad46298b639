// reef-client/tests/customers_api.rs
// Integration tests against a local axum stand-in for the customers service.

use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::{Value, json};

use reef_client::{ClientConfig, ClientError, CustomerDirectory, HttpClient};
use shared::CustomerPayload;

#[derive(Clone, Default)]
struct ApiState {
    customers: Arc<Mutex<Vec<Value>>>,
    posted_bodies: Arc<Mutex<Vec<Value>>>,
    deleted_ids: Arc<Mutex<Vec<String>>>,
    auth_headers: Arc<Mutex<Vec<Option<String>>>>,
}

fn seed_customer(id: &str, name: &str, mobile: &str, email: &str) -> Value {
    json!({
        "_id": id,
        "name": name,
        "mobile": mobile,
        "email": email,
        "proposalsAwaiting": 2,
        "approveProposal": 1,
        "expiredProposal": 0,
        "unapprovedProposal": 3
    })
}

async fn list(State(state): State<ApiState>, headers: HeaderMap) -> Json<Value> {
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    state.auth_headers.lock().unwrap().push(auth);
    Json(json!({ "customers": *state.customers.lock().unwrap() }))
}

async fn detail(State(state): State<ApiState>, Path(id): Path<String>) -> Response {
    if id == "nullish" {
        return Json(json!({ "customer": null })).into_response();
    }
    let customers = state.customers.lock().unwrap();
    match customers.iter().find(|c| c["_id"] == id.as_str()) {
        Some(customer) => Json(json!({ "customer": customer })).into_response(),
        None => (StatusCode::NOT_FOUND, "Customer not found").into_response(),
    }
}

async fn create(State(state): State<ApiState>, Json(body): Json<Value>) -> Response {
    if body["name"] == "" {
        return (StatusCode::BAD_REQUEST, "Name is required").into_response();
    }
    let mut stored = body.clone();
    stored["_id"] = json!("created-1");
    state.posted_bodies.lock().unwrap().push(body);
    state.customers.lock().unwrap().push(stored.clone());
    Json(json!({ "message": "Customer created successfully", "customer": stored })).into_response()
}

async fn update(
    State(state): State<ApiState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    let mut customers = state.customers.lock().unwrap();
    match customers.iter_mut().find(|c| c["_id"] == id.as_str()) {
        Some(slot) => {
            let mut stored = body;
            stored["_id"] = json!(id);
            *slot = stored.clone();
            Json(json!({ "message": "Customer updated successfully", "customer": stored }))
                .into_response()
        }
        None => (StatusCode::NOT_FOUND, "Customer not found").into_response(),
    }
}

async fn remove(State(state): State<ApiState>, Path(id): Path<String>) -> Response {
    state.deleted_ids.lock().unwrap().push(id);
    // 200 with no body; the client must not try to parse one.
    StatusCode::OK.into_response()
}

async fn spawn_api(state: ApiState) -> String {
    let app = Router::new()
        .route("/customers", get(list).post(create))
        .route("/customers/{id}", get(detail).put(update).delete(remove))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn client_for(base_url: &str) -> HttpClient {
    ClientConfig::new(base_url).build_http_client()
}

fn payload(name: &str) -> CustomerPayload {
    CustomerPayload {
        name: name.to_string(),
        mobile: "0521112222".to_string(),
        email: "dana@example.com".to_string(),
        proposals_awaiting: 4,
        approve_proposal: 0,
        expired_proposal: 1,
        unapproved_proposal: 0,
    }
}

#[tokio::test]
async fn lists_seeded_customers() {
    let state = ApiState::default();
    state.customers.lock().unwrap().push(seed_customer(
        "a1",
        "Dana Levi",
        "0521234567",
        "dana@example.com",
    ));
    let base = spawn_api(state).await;

    let customers = client_for(&base).list_customers().await.unwrap();
    assert_eq!(customers.len(), 1);
    assert_eq!(customers[0].id, "a1");
    assert_eq!(customers[0].proposals_awaiting, 2);
    assert_eq!(customers[0].unapproved_proposal, 3);
}

#[tokio::test]
async fn fetch_known_id_returns_customer() {
    let state = ApiState::default();
    state
        .customers
        .lock()
        .unwrap()
        .push(seed_customer("a1", "Dana", "052", "dana@example.com"));
    let base = spawn_api(state).await;

    let customer = client_for(&base).fetch_customer("a1").await.unwrap();
    assert_eq!(customer.unwrap().name, "Dana");
}

#[tokio::test]
async fn fetch_unknown_id_is_none() {
    let base = spawn_api(ApiState::default()).await;
    let customer = client_for(&base).fetch_customer("ghost").await.unwrap();
    assert!(customer.is_none());
}

#[tokio::test]
async fn fetch_null_customer_key_is_none() {
    let base = spawn_api(ApiState::default()).await;
    let customer = client_for(&base).fetch_customer("nullish").await.unwrap();
    assert!(customer.is_none());
}

#[tokio::test]
async fn create_posts_once_with_camel_case_body_and_no_id() {
    let state = ApiState::default();
    let posted = state.posted_bodies.clone();
    let base = spawn_api(state).await;

    let response = client_for(&base).create_customer(&payload("Dana")).await.unwrap();
    assert_eq!(response.message, "Customer created successfully");
    assert_eq!(response.customer.unwrap().id, "created-1");

    let bodies = posted.lock().unwrap();
    assert_eq!(bodies.len(), 1);
    assert_eq!(bodies[0]["proposalsAwaiting"], 4);
    assert_eq!(bodies[0]["expiredProposal"], 1);
    assert!(bodies[0].get("id").is_none());
    assert!(bodies[0].get("_id").is_none());
}

#[tokio::test]
async fn create_with_rejected_payload_maps_to_validation() {
    let base = spawn_api(ApiState::default()).await;
    let err = client_for(&base).create_customer(&payload("")).await.unwrap_err();
    match err {
        ClientError::Validation(text) => assert_eq!(text, "Name is required"),
        other => panic!("expected Validation, got {other:?}"),
    }
}

#[tokio::test]
async fn update_puts_to_the_id_path() {
    let state = ApiState::default();
    state
        .customers
        .lock()
        .unwrap()
        .push(seed_customer("a1", "Dana", "052", "dana@example.com"));
    let customers = state.customers.clone();
    let base = spawn_api(state).await;

    let response = client_for(&base)
        .update_customer("a1", &payload("Dana Cohen"))
        .await
        .unwrap();
    assert_eq!(response.message, "Customer updated successfully");
    assert_eq!(customers.lock().unwrap()[0]["name"], "Dana Cohen");
}

#[tokio::test]
async fn update_unknown_id_is_not_found() {
    let base = spawn_api(ApiState::default()).await;
    let err = client_for(&base)
        .update_customer("ghost", &payload("Dana"))
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::NotFound(_)));
}

#[tokio::test]
async fn delete_hits_the_id_path_and_tolerates_an_empty_body() {
    let state = ApiState::default();
    let deleted = state.deleted_ids.clone();
    let base = spawn_api(state).await;

    client_for(&base).delete_customer("a1").await.unwrap();
    assert_eq!(*deleted.lock().unwrap(), vec!["a1".to_string()]);
}

#[tokio::test]
async fn non_success_statuses_map_to_error_variants() {
    let app = Router::new()
        .route("/customers", get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }))
        .route(
            "/customers/{id}",
            get(|| async { (StatusCode::UNAUTHORIZED, "") })
                .delete(|| async { (StatusCode::FORBIDDEN, "read only") }),
        );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    let client = client_for(&format!("http://{addr}"));

    assert!(matches!(
        client.list_customers().await.unwrap_err(),
        ClientError::Internal(_)
    ));
    assert!(matches!(
        client.fetch_customer("x").await.unwrap_err(),
        ClientError::Unauthorized
    ));
    assert!(matches!(
        client.delete_customer("x").await.unwrap_err(),
        ClientError::Forbidden(_)
    ));
}

#[tokio::test]
async fn bearer_token_rides_along_when_configured() {
    let state = ApiState::default();
    let seen = state.auth_headers.clone();
    let base = spawn_api(state).await;

    let client = ClientConfig::new(&base).with_token("secret").build_http_client();
    client.list_customers().await.unwrap();

    let headers = seen.lock().unwrap();
    assert_eq!(headers[0].as_deref(), Some("Bearer secret"));
}

#[tokio::test]
async fn directory_trait_dispatches_through_the_http_client() {
    let state = ApiState::default();
    state
        .customers
        .lock()
        .unwrap()
        .push(seed_customer("a1", "Dana", "052", "dana@example.com"));
    let base = spawn_api(state).await;

    let client = client_for(&base);
    let directory: &dyn CustomerDirectory = &client;
    let customers = directory.list_customers().await.unwrap();
    assert_eq!(customers.len(), 1);
}
