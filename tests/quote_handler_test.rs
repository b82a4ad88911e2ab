use axum::{body::Body, http::{Request, StatusCode}, Router};
use agrofert_backend::app::app::App;
use agrofert_backend::config::{AppConfig, QuoteConfig};
use agrofert_backend::model::quote::StatusFilter;
use agrofert_backend::repository::{quote_store, seed::sample_quotes};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt; // for .oneshot()

const ADMIN_KEY: &str = "test-admin-key-0123456789";

fn setup_app(quote_config: QuoteConfig) -> Router {
    App::new(AppConfig::default(), quote_config).router()
}

fn open_app() -> Router {
    setup_app(QuoteConfig::default())
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let body_bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let body = if body_bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&body_bytes).to_string()))
    };
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap()
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn ids(body: &Value) -> Vec<String> {
    body["quotes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|q| q["id"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_health() {
    let app = open_app();
    let (status, body) = send(&app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::String("OK".to_string()));
}

#[tokio::test]
async fn test_list_quotes_handler() {
    let app = open_app();
    let (status, body) = send(&app, get("/quotes")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec!["Q001", "Q002", "Q003", "Q004", "Q005"]);
    assert_eq!(body["stats"], json!({ "total": 5, "pending": 2, "processed": 2, "cancelled": 1 }));
}

#[tokio::test]
async fn test_list_quotes_filtered_keeps_full_stats() {
    let app = open_app();
    let (status, body) = send(&app, get("/quotes?status=processed&search=CRUZ")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec!["Q005"]);
    assert_eq!(body["stats"]["total"], 5);

    let (_, body) = send(&app, get("/quotes?status=pending&search=maria")).await;
    assert!(ids(&body).is_empty());
    assert_eq!(body["stats"]["pending"], 2);
}

#[tokio::test]
async fn test_list_quotes_rejects_unknown_status() {
    let app = open_app();
    let (status, body) = send(&app, get("/quotes?status=archived")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadRequest");
}

#[tokio::test]
async fn test_list_quotes_search_matches_store_filter() {
    let app = open_app();
    for (query, term) in [("Q00%20", "Q00 "), ("%20", " "), ("Q00", "Q00"), ("juan%20", "juan ")] {
        let (status, body) = send(&app, get(&format!("/quotes?search={}", query))).await;
        assert_eq!(status, StatusCode::OK);
        let expected: Vec<String> = quote_store::filter(&sample_quotes(), term, StatusFilter::All)
            .into_iter()
            .map(|q| q.id)
            .collect();
        assert_eq!(ids(&body), expected, "search term {:?}", term);
    }

    let (_, body) = send(&app, get("/quotes?search=Q00%20")).await;
    assert!(ids(&body).is_empty());
}

#[tokio::test]
async fn test_get_quote_handler() {
    let app = open_app();
    let (status, body) = send(&app, get("/quotes/Q001")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["quote"]["name"], "Juan Dela Cruz");
    assert_eq!(body["quote"]["status"], "pending");
    let labels: Vec<&str> = body["actions"].as_array().unwrap().iter().map(|a| a["label"].as_str().unwrap()).collect();
    assert_eq!(labels, vec!["Mark as Processed", "Cancel Request"]);

    let (status, body) = send(&app, get("/quotes/Q404")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NotFound");
}

#[tokio::test]
async fn test_update_quote_status_handler() {
    let app = open_app();
    let (status, body) = send(&app, json_request("PATCH", "/quotes/Q001", json!({ "status": "processed" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "processed");
    assert_eq!(body["date"], "2024-12-08T10:30:00");

    let (_, body) = send(&app, get("/quotes/stats")).await;
    assert_eq!(body, json!({ "total": 5, "pending": 1, "processed": 3, "cancelled": 1 }));
}

#[tokio::test]
async fn test_update_unknown_quote_leaves_collection() {
    let app = open_app();
    let (_, before) = send(&app, get("/quotes")).await;
    let (status, _) = send(&app, json_request("PATCH", "/quotes/Q999", json!({ "status": "cancelled" }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (_, after) = send(&app, get("/quotes")).await;
    assert_eq!(before, after);
}

#[tokio::test]
async fn test_update_rejects_unknown_status_value() {
    let app = open_app();
    let (status, body) = send(&app, json_request("PATCH", "/quotes/Q001", json!({ "status": "archived" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadRequest");
}

#[tokio::test]
async fn test_permissive_transitions_by_default() {
    let app = open_app();
    // Q002 is processed; the admin view never offers processed -> cancelled
    let (status, body) = send(&app, json_request("PATCH", "/quotes/Q002", json!({ "status": "cancelled" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "cancelled");
}

#[tokio::test]
async fn test_strict_transitions() {
    let app = setup_app(QuoteConfig { strict_transitions: true, ..QuoteConfig::default() });
    let (status, body) = send(&app, json_request("PATCH", "/quotes/Q002", json!({ "status": "cancelled" }))).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Conflict");

    let (status, _) = send(&app, json_request("PATCH", "/quotes/Q002", json!({ "status": "pending" }))).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, json_request("PATCH", "/quotes/Q002", json!({ "status": "pending" }))).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_delete_quote_handler() {
    let app = open_app();
    let req = Request::builder().method("DELETE").uri("/quotes/Q004").body(Body::empty()).unwrap();
    let (status, _) = send(&app, req).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, body) = send(&app, get("/quotes")).await;
    assert_eq!(ids(&body), vec!["Q001", "Q002", "Q003", "Q005"]);
    assert_eq!(body["stats"]["cancelled"], 0);

    let req = Request::builder().method("DELETE").uri("/quotes/Q004").body(Body::empty()).unwrap();
    let (status, _) = send(&app, req).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_quote_handler() {
    let app = open_app();
    let body = json!({
        "name": "Lito Ramos",
        "email": "lito@ramosfarm.ph",
        "phone": "+63 917 222 3333",
        "product": "Calcium Nitrate",
        "quantity": "40 bags",
        "message": "For tomato greenhouse."
    });
    let (status, created) = send(&app, json_request("POST", "/quotes", body)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["quote"]["id"], "Q006");
    assert_eq!(created["quote"]["status"], "pending");
    assert_eq!(created["ack"]["title"], "Quote Request Sent!");
    assert_eq!(created["ack"]["description"], "We'll contact you soon regarding Calcium Nitrate.");

    let (_, listing) = send(&app, get("/quotes")).await;
    assert_eq!(ids(&listing).last().map(String::as_str), Some("Q006"));
    assert_eq!(listing["stats"]["pending"], 3);
}

#[tokio::test]
async fn test_create_quote_with_only_required_fields() {
    let app = open_app();
    let body = json!({ "name": "Jo", "email": "jo@farm.ph", "product": "Urea (46-0-0)" });
    let (status, created) = send(&app, json_request("POST", "/quotes", body)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["quote"]["id"], "Q006");
    assert_eq!(created["quote"]["phone"], "");
    assert_eq!(created["quote"]["quantity"], "");
    assert_eq!(created["quote"]["message"], "");

    let body = json!({
        "name": "J",
        "email": "j@farm.ph",
        "phone": "",
        "product": "Urea (46-0-0)",
        "quantity": "",
        "message": ""
    });
    let (status, created) = send(&app, json_request("POST", "/quotes", body)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["quote"]["id"], "Q007");

    let (_, listing) = send(&app, get("/quotes")).await;
    assert_eq!(listing["stats"]["total"], 7);
}

#[tokio::test]
async fn test_create_quote_requires_name() {
    let app = open_app();
    let body = json!({ "name": "", "email": "jo@farm.ph", "product": "Urea (46-0-0)" });
    let (status, resp) = send(&app, json_request("POST", "/quotes", body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(resp["error"], "Validation");

    let body = json!({ "name": "Jo", "product": "Urea (46-0-0)" });
    let (status, resp) = send(&app, json_request("POST", "/quotes", body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(resp["error"], "BadRequest");
}

#[tokio::test]
async fn test_create_quote_validation() {
    let app = open_app();
    let body = json!({
        "name": "L",
        "email": "not-an-email",
        "phone": "+63 917 222 3333",
        "product": "Calcium Nitrate",
        "quantity": "40 bags"
    });
    let (status, resp) = send(&app, json_request("POST", "/quotes", body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(resp["error"], "Validation");
    assert!(resp["details"].as_str().unwrap().contains("email"));

    let (_, listing) = send(&app, get("/quotes")).await;
    assert_eq!(listing["stats"]["total"], 5);
}

#[tokio::test]
async fn test_unseeded_app_starts_empty() {
    let app = setup_app(QuoteConfig { seed_samples: false, ..QuoteConfig::default() });
    let (_, body) = send(&app, get("/quotes")).await;
    assert!(ids(&body).is_empty());
    assert_eq!(body["stats"]["total"], 0);
}

#[tokio::test]
async fn test_admin_key_required_when_configured() {
    let app = setup_app(QuoteConfig { admin_api_key: Some(ADMIN_KEY.to_string()), ..QuoteConfig::default() });

    let (status, body) = send(&app, get("/quotes")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Unauthorized");

    let req = Request::builder().uri("/quotes").header("x-admin-key", "wrong-key-wrong-key").body(Body::empty()).unwrap();
    let (status, _) = send(&app, req).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let req = Request::builder().uri("/quotes").header("x-admin-key", ADMIN_KEY).body(Body::empty()).unwrap();
    let (status, _) = send(&app, req).await;
    assert_eq!(status, StatusCode::OK);

    // Submitting a quote stays public
    let body = json!({
        "name": "Open Gate",
        "email": "open@gate.ph",
        "phone": "+63 917 000 0000",
        "product": "Urea (46-0-0)",
        "quantity": "5 bags"
    });
    let (status, _) = send(&app, json_request("POST", "/quotes", body)).await;
    assert_eq!(status, StatusCode::CREATED);
}
