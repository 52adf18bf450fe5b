//! Integration tests for the backend REST client.
//!
//! Each test spins up an in-process mock backend on an ephemeral port.
//! Run with: `cargo test -p server --features server --test backend_client_tests`

#![cfg(feature = "server")]

mod common;

use common::{
    spawn_backend, unreachable_backend, BROKEN_ID, DOCUMENT_ID, MATTER_ID, MISSING_ID, VALID_TOKEN,
};
use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, SignInRequest};

#[tokio::test]
async fn facts_per_entity_returns_backend_slices_in_order() {
    let client = spawn_backend().await;
    let slices = client.facts_per_entity(MATTER_ID).await.unwrap();

    let names: Vec<&str> = slices.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Acme Corp", "Jane Doe", "Springfield"]);
    assert_eq!(slices[0].value, 12.0);
    assert_eq!(slices[1].entity_type, "person");
}

#[tokio::test]
async fn facts_for_unknown_matter_is_not_found() {
    let client = spawn_backend().await;
    let err = client.facts_per_entity(MISSING_ID).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::NotFound);
    assert_eq!(err.message, "Matter not found");
}

#[tokio::test]
async fn backend_failure_maps_to_upstream() {
    let client = spawn_backend().await;
    let err = client.facts_per_entity(BROKEN_ID).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Upstream);
    assert_eq!(err.message, "database on fire");
}

#[tokio::test]
async fn invalid_id_is_rejected_before_any_request() {
    let client = unreachable_backend().await;
    let err = client.documents_by_matter("not-a-uuid").await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::BadRequest);
}

#[tokio::test]
async fn documents_come_back_newest_first() {
    let client = spawn_backend().await;
    let docs = client.documents_by_matter(MATTER_ID).await.unwrap();

    let ids: Vec<&str> = docs.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, vec!["d-new", "d-mid", "d-old"]);
    assert_eq!(docs[0].display_name(), "Amended Complaint");
    assert_eq!(docs[0].citation_count, Some(4));
    assert_eq!(docs[1].citation_count, None);
}

#[tokio::test]
async fn matter_facts_are_paged() {
    let client = spawn_backend().await;
    let first = client.matter_facts(MATTER_ID, 0).await.unwrap();
    assert_eq!(first.total, 25);
    assert_eq!(first.facts.len(), 20);
    assert_eq!(first.next_offset(), Some(20));

    let second = client.matter_facts(MATTER_ID, 20).await.unwrap();
    assert_eq!(second.facts.len(), 5);
    assert_eq!(second.facts[0].text(), "Fact number 20");
    assert_eq!(second.next_offset(), None);
    assert_eq!(second.previous_offset(), Some(0));
}

#[tokio::test]
async fn document_review_drops_blank_facts() {
    let client = spawn_backend().await;
    let facts = client.document_facts(DOCUMENT_ID).await.unwrap();
    assert_eq!(facts.len(), 1);
    assert_eq!(facts[0].page_number, Some(2));
    assert_eq!(facts[0].review_status.as_deref(), Some("accepted"));
}

#[tokio::test]
async fn document_entities_come_back_most_mentioned_first() {
    let client = spawn_backend().await;
    let entities = client.document_entities(DOCUMENT_ID).await.unwrap();
    let names: Vec<&str> = entities.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Acme Corp", "Jane Doe"]);

    let err = client.document_entities(MISSING_ID).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::NotFound);
}

#[tokio::test]
async fn documents_for_empty_matter_is_empty_list() {
    let client = spawn_backend().await;
    let docs = client.documents_by_matter(MISSING_ID).await.unwrap();
    assert!(docs.is_empty());
}

#[tokio::test]
async fn matters_are_listed() {
    let client = spawn_backend().await;
    let matters = client.matters().await.unwrap();
    assert_eq!(matters.len(), 2);
    assert_eq!(matters[0].matter_name, "Doe v. Acme");
}

#[tokio::test]
async fn rate_limit_keeps_retry_hint() {
    let client = spawn_backend().await;
    let err = client.matter_activity(MATTER_ID).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::RateLimited);
    assert_eq!(err.message, "Slow down (retry after 30s)");
}

#[tokio::test]
async fn unreachable_backend_is_upstream_error() {
    let client = unreachable_backend().await;
    let err = client.matters().await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Upstream);
    assert!(!client.ping().await);
}

#[tokio::test]
async fn ping_reports_reachable_backend() {
    let client = spawn_backend().await;
    assert!(client.ping().await);
}

#[tokio::test]
async fn sign_in_returns_token_and_user() {
    let client = spawn_backend().await;
    let resp = client
        .sign_in(&SignInRequest {
            username: "jdoe".to_string(),
            password: "correct-horse".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(resp.access_token, VALID_TOKEN);
    assert_eq!(resp.user.username, "jdoe");
    assert_eq!(resp.user.initials(), "JD");
}

#[tokio::test]
async fn sign_in_with_bad_password_is_unauthorized() {
    let client = spawn_backend().await;
    let err = client
        .sign_in(&SignInRequest {
            username: "jdoe".to_string(),
            password: "wrong-password".to_string(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Unauthorized);
    assert_eq!(err.message, "Invalid username or password");
}

#[tokio::test]
async fn current_user_resolves_valid_token() {
    let client = spawn_backend().await;
    let user = client.current_user(VALID_TOKEN).await.unwrap();
    assert_eq!(user.map(|u| u.username), Some("jdoe".to_string()));
}

#[tokio::test]
async fn expired_token_means_signed_out_not_error() {
    let client = spawn_backend().await;
    let user = client.current_user("stale").await.unwrap();
    assert!(user.is_none());
}

#[tokio::test]
async fn sign_out_succeeds_on_no_content() {
    let client = spawn_backend().await;
    client.sign_out(VALID_TOKEN).await.unwrap();
}
