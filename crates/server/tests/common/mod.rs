use axum::{
    extract::{Path, Query},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use server::backend::BackendClient;
use shared_types::BackendConfig;
use std::collections::HashMap;

/// Matter that exists in the mock backend.
#[allow(dead_code)]
pub const MATTER_ID: &str = "7f8c2e1a-0b4d-4c5e-9f6a-1b2c3d4e5f60";
/// Well-formed id the mock backend has never heard of.
#[allow(dead_code)]
pub const MISSING_ID: &str = "00000000-0000-4000-8000-000000000000";
/// Matter whose facts endpoint blows up.
#[allow(dead_code)]
pub const BROKEN_ID: &str = "11111111-1111-4111-8111-111111111111";
/// Document of [`MATTER_ID`] that has review facts and entities.
#[allow(dead_code)]
pub const DOCUMENT_ID: &str = "3a9d6b2c-5e7f-4a1b-8c2d-9e0f1a2b3c4d";
#[allow(dead_code)]
pub const VALID_TOKEN: &str = "valid-token";

fn detail(status: StatusCode, message: &str) -> axum::response::Response {
    (status, Json(json!({ "detail": message }))).into_response()
}

async fn facts_per_entity(Path(id): Path<String>) -> axum::response::Response {
    match id.as_str() {
        MATTER_ID => Json(json!([
            {"name": "Acme Corp", "value": 12, "color": "#1e40af", "type": "organization"},
            {"name": "Jane Doe", "value": 7, "color": "#be123c", "type": "person"},
            {"name": "Springfield", "value": 1, "color": "#15803d", "type": "location"}
        ]))
        .into_response(),
        BROKEN_ID => (StatusCode::INTERNAL_SERVER_ERROR, "database on fire").into_response(),
        _ => detail(StatusCode::NOT_FOUND, "Matter not found"),
    }
}

async fn documents(Query(params): Query<HashMap<String, String>>) -> axum::response::Response {
    if params.get("matter_id").map(String::as_str) != Some(MATTER_ID) {
        return Json(json!({"total": 0, "limit": 500, "offset": 0, "documents": []}))
            .into_response();
    }
    Json(json!({
        "total": 3,
        "limit": 500,
        "offset": 0,
        "documents": [
            {"id": "d-old", "filename": "old.pdf", "file_name": "old.pdf",
             "ingested_at": "2024-03-01T10:00:00", "citation_count": 1},
            {"id": "d-new", "filename": "new.pdf", "file_name": "new.pdf",
             "title": "Amended Complaint", "ingested_at": "2026-01-20T21:35:00",
             "citation_count": 4},
            {"id": "d-mid", "filename": "mid.pdf", "file_name": "mid.pdf",
             "created_at": "2025-07-15T09:30:00.5"}
        ]
    }))
    .into_response()
}

async fn matter_facts(
    Path(id): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> axum::response::Response {
    if id != MATTER_ID {
        return detail(StatusCode::NOT_FOUND, "Matter not found");
    }
    let limit: usize = params.get("limit").and_then(|v| v.parse().ok()).unwrap_or(20);
    let offset: usize = params.get("offset").and_then(|v| v.parse().ok()).unwrap_or(0);
    let all: Vec<Value> = (0..25)
        .map(|i| {
            json!({
                "id": format!("f{i}"),
                "date_time": null,
                "fact": format!("Fact number {i}"),
                "issues": [],
                "evidence": "complaint.pdf",
                "review_status": "not_reviewed",
                "document_id": DOCUMENT_ID
            })
        })
        .collect();
    let facts: Vec<Value> = all.into_iter().skip(offset).take(limit).collect();
    Json(json!({"total": 25, "limit": limit, "offset": offset, "facts": facts})).into_response()
}

async fn review_facts(Path(id): Path<String>) -> axum::response::Response {
    if id != DOCUMENT_ID {
        return detail(StatusCode::NOT_FOUND, "Document not found");
    }
    Json(json!([
        {"id": "rf1", "fact": "Acme breached the supply agreement.", "event_date": "2025-02-03",
         "tags": ["contract"], "confidence": 0.9, "page_number": 2, "review_status": "accepted"},
        {"id": "rf2", "fact": "   ", "tags": []}
    ]))
    .into_response()
}

async fn review_entities(Path(id): Path<String>) -> axum::response::Response {
    if id != DOCUMENT_ID {
        return detail(StatusCode::NOT_FOUND, "Document not found");
    }
    Json(json!([
        {"id": "e1", "name": "Jane Doe", "type": "person", "mentions": 2, "confidence": 0.8},
        {"id": "e2", "name": "Acme Corp", "type": "organization", "mentions": 5, "confidence": 0.9}
    ]))
    .into_response()
}

async fn matters() -> Json<Value> {
    Json(json!([
        {"id": MATTER_ID, "matter_number": "2025-001", "matter_name": "Doe v. Acme",
         "matter_type": "litigation", "status": "active", "created_at": "2025-01-02T03:04:05"},
        {"id": BROKEN_ID, "matter_number": "2026-004", "matter_name": "In re Widget",
         "matter_type": "investigation", "status": "active", "created_at": "2026-02-01T00:00:00"}
    ]))
}

async fn login(Json(body): Json<Value>) -> axum::response::Response {
    if body["password"] == "correct-horse" {
        Json(json!({
            "access_token": VALID_TOKEN,
            "user": {"username": body["username"], "display_name": "Jane Doe"}
        }))
        .into_response()
    } else {
        detail(StatusCode::UNAUTHORIZED, "Invalid username or password")
    }
}

async fn me(headers: HeaderMap) -> axum::response::Response {
    let bearer = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "));
    match bearer {
        Some(VALID_TOKEN) => Json(json!({"username": "jdoe", "display_name": "Jane Doe"}))
            .into_response(),
        _ => detail(StatusCode::UNAUTHORIZED, "Not authenticated"),
    }
}

async fn rate_limited() -> axum::response::Response {
    (
        StatusCode::TOO_MANY_REQUESTS,
        [("retry-after", "30")],
        Json(json!({"detail": "Slow down"})),
    )
        .into_response()
}

/// In-process stand-in for the case-analysis backend.
pub fn mock_backend() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route(
            "/api/documents/matter/{id}/facts-per-entity",
            get(facts_per_entity),
        )
        .route("/api/documents/matter/{id}/facts", get(matter_facts))
        .route("/api/documents/{id}/review/facts", get(review_facts))
        .route("/api/documents/{id}/review/entities", get(review_entities))
        .route("/api/documents", get(documents))
        .route("/api/matters", get(matters))
        .route("/api/activities/matter/{id}", get(rate_limited))
        .route("/api/auth/login", post(login))
        .route("/api/auth/me", get(me))
        .route("/api/auth/logout", post(|| async { StatusCode::NO_CONTENT }))
}

/// Serve the mock backend on an ephemeral port and return a client for it.
#[allow(dead_code)]
pub async fn spawn_backend() -> BackendClient {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, mock_backend()).await.unwrap();
    });

    BackendClient::new(BackendConfig {
        base_url: format!("http://{addr}"),
        timeout_secs: 5,
    })
}

/// A client pointed at a port nothing listens on.
#[allow(dead_code)]
pub async fn unreachable_backend() -> BackendClient {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    BackendClient::new(BackendConfig {
        base_url: format!("http://{addr}"),
        timeout_secs: 2,
    })
}
