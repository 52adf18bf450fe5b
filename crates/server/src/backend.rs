//! REST client for the case-analysis backend.
//!
//! Every data and auth server function funnels through [`BackendClient`].
//! The backend owns aggregation, extraction and authentication; this client
//! only builds requests, attaches the session token, and maps failures onto
//! [`AppError`].

use reqwest::{header, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use shared_types::{
    sort_by_mentions_desc, sort_by_upload_date_desc, Activity, AppError, BackendConfig,
    DocumentEntity, DocumentFact, DocumentListResponse, DocumentSummary, EntityData, Matter,
    MatterEntityList, MatterFactPage, SessionUser, SignInRequest, SignInResponse,
    SourceDocument, FACTS_PAGE_SIZE,
};
use std::sync::OnceLock;
use std::time::Duration;
use uuid::Uuid;

use crate::error_convert::ReqwestErrorExt;

/// Upper bound on documents fetched for one matter's table.
const DOCUMENT_PAGE_LIMIT: u32 = 500;

/// Number of activity entries shown in a matter's feed.
const ACTIVITY_LIMIT: u32 = 20;

static CLIENT: OnceLock<BackendClient> = OnceLock::new();

/// Process-wide client built from the loaded config. The underlying
/// `reqwest::Client` pools connections, so one instance serves every request.
pub fn backend() -> &'static BackendClient {
    CLIENT.get_or_init(|| BackendClient::new(crate::config::backend_config().clone()))
}

/// Normalise a matter/document id, rejecting anything that is not a UUID
/// before it reaches the backend.
pub fn validate_id(raw: &str, what: &str) -> Result<String, AppError> {
    Uuid::parse_str(raw.trim())
        .map(|id| id.hyphenated().to_string())
        .map_err(|_| AppError::bad_request(format!("Invalid {what} id: {raw}")))
}

/// HTTP client for the backend REST API.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    config: BackendConfig,
}

impl BackendClient {
    pub fn new(config: BackendConfig) -> Self {
        let http = reqwest::Client::builder()
            .user_agent(concat!("casefold/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "falling back to default HTTP client");
                reqwest::Client::new()
            });
        Self { http, config }
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    // ── Documents & facts ─────────────────────────────────

    /// Entity slices for the facts-per-entity chart.
    pub async fn facts_per_entity(&self, matter_id: &str) -> Result<Vec<EntityData>, AppError> {
        let id = validate_id(matter_id, "matter")?;
        let path = format!("/api/documents/matter/{id}/facts-per-entity");
        self.send_json(self.http.get(self.config.url(&path)), None).await
    }

    /// All current documents of a matter, newest upload first.
    pub async fn documents_by_matter(
        &self,
        matter_id: &str,
    ) -> Result<Vec<SourceDocument>, AppError> {
        let id = validate_id(matter_id, "matter")?;
        let req = self
            .http
            .get(self.config.url("/api/documents"))
            .query(&[("matter_id", id.as_str())])
            .query(&[("limit", DOCUMENT_PAGE_LIMIT)]);
        let listing: DocumentListResponse = self.send_json(req, None).await?;
        let mut documents = listing.documents;
        sort_by_upload_date_desc(&mut documents);
        Ok(documents)
    }

    pub async fn document(&self, document_id: &str) -> Result<SourceDocument, AppError> {
        let id = validate_id(document_id, "document")?;
        let path = format!("/api/documents/{id}");
        self.send_json(self.http.get(self.config.url(&path)), None).await
    }

    pub async fn document_summary(&self, document_id: &str) -> Result<DocumentSummary, AppError> {
        let id = validate_id(document_id, "document")?;
        let path = format!("/api/documents/{id}/review/summary");
        self.send_json(self.http.get(self.config.url(&path)), None).await
    }

    /// One page of a matter's facts. The backend orders them by event date,
    /// newest first.
    pub async fn matter_facts(
        &self,
        matter_id: &str,
        offset: u32,
    ) -> Result<MatterFactPage, AppError> {
        let id = validate_id(matter_id, "matter")?;
        let path = format!("/api/documents/matter/{id}/facts");
        let req = self
            .http
            .get(self.config.url(&path))
            .query(&[("limit", FACTS_PAGE_SIZE), ("offset", offset)]);
        self.send_json(req, None).await
    }

    /// Facts suggested for one document. Facts without text are dropped.
    pub async fn document_facts(&self, document_id: &str) -> Result<Vec<DocumentFact>, AppError> {
        let id = validate_id(document_id, "document")?;
        let path = format!("/api/documents/{id}/review/facts");
        let facts: Vec<DocumentFact> = self
            .send_json(self.http.get(self.config.url(&path)), None)
            .await?;
        Ok(facts
            .into_iter()
            .filter(|f| !f.fact.trim().is_empty())
            .collect())
    }

    /// Entities mentioned in one document, most mentioned first.
    pub async fn document_entities(
        &self,
        document_id: &str,
    ) -> Result<Vec<DocumentEntity>, AppError> {
        let id = validate_id(document_id, "document")?;
        let path = format!("/api/documents/{id}/review/entities");
        let mut entities: Vec<DocumentEntity> = self
            .send_json(self.http.get(self.config.url(&path)), None)
            .await?;
        sort_by_mentions_desc(&mut entities);
        Ok(entities)
    }

    pub async fn matter_entities(&self, matter_id: &str) -> Result<MatterEntityList, AppError> {
        let id = validate_id(matter_id, "matter")?;
        let path = format!("/api/documents/matter/{id}/entities");
        self.send_json(self.http.get(self.config.url(&path)), None).await
    }

    // ── Matters ───────────────────────────────────────────

    pub async fn matters(&self) -> Result<Vec<Matter>, AppError> {
        self.send_json(self.http.get(self.config.url("/api/matters")), None)
            .await
    }

    pub async fn matter(&self, matter_id: &str) -> Result<Matter, AppError> {
        let id = validate_id(matter_id, "matter")?;
        let path = format!("/api/matters/{id}");
        self.send_json(self.http.get(self.config.url(&path)), None).await
    }

    pub async fn matter_activity(&self, matter_id: &str) -> Result<Vec<Activity>, AppError> {
        let id = validate_id(matter_id, "matter")?;
        let path = format!("/api/activities/matter/{id}");
        let req = self
            .http
            .get(self.config.url(&path))
            .query(&[("limit", ACTIVITY_LIMIT)]);
        self.send_json(req, None).await
    }

    // ── Auth ──────────────────────────────────────────────

    pub async fn sign_in(&self, credentials: &SignInRequest) -> Result<SignInResponse, AppError> {
        let req = self
            .http
            .post(self.config.url("/api/auth/login"))
            .json(credentials);
        self.send_json(req, None).await
    }

    /// Resolve a session token to its user. An expired or revoked token is
    /// not an error: it simply means nobody is signed in.
    pub async fn current_user(&self, token: &str) -> Result<Option<SessionUser>, AppError> {
        let req = self.http.get(self.config.url("/api/auth/me"));
        match self.send_json(req, Some(token)).await {
            Ok(user) => Ok(Some(user)),
            Err(e) if e.kind == shared_types::AppErrorKind::Unauthorized => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub async fn sign_out(&self, token: &str) -> Result<(), AppError> {
        let req = self.http.post(self.config.url("/api/auth/logout"));
        self.send(req, Some(token)).await.map(|_| ())
    }

    /// Whether the backend answers its health endpoint.
    pub async fn ping(&self) -> bool {
        match self.http.get(self.config.url("/health")).send().await {
            Ok(resp) => resp.status().is_success(),
            Err(e) => {
                tracing::debug!(error = %e, "backend health probe failed");
                false
            }
        }
    }

    // ── Plumbing ──────────────────────────────────────────

    async fn send(&self, req: RequestBuilder, token: Option<&str>) -> Result<Response, AppError> {
        let req = match token {
            Some(token) => req.bearer_auth(token),
            None => req,
        };
        let resp = req
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(ReqwestErrorExt::into_app_error)?;
        check_response(resp).await
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        req: RequestBuilder,
        token: Option<&str>,
    ) -> Result<T, AppError> {
        let resp = self.send(req, token).await?;
        resp.json::<T>()
            .await
            .map_err(ReqwestErrorExt::into_app_error)
    }
}

/// Turn a non-success response into an [`AppError`], keeping the backend's
/// own message when it sent one.
async fn check_response(resp: Response) -> Result<Response, AppError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let retry_after = parse_retry_after(&resp);
    let body = resp.text().await.unwrap_or_default();
    let mut message = backend_error_message(status, &body);
    if let Some(secs) = retry_after {
        message = format!("{message} (retry after {secs}s)");
    }
    tracing::warn!(status = status.as_u16(), %message, "backend request failed");
    Err(AppError::from_status(status.as_u16(), message))
}

fn parse_retry_after(resp: &Response) -> Option<u64> {
    if resp.status() != StatusCode::TOO_MANY_REQUESTS {
        return None;
    }
    resp.headers()
        .get(header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse().ok())
}

/// The backend reports errors as `{"detail": "..."}`; fall back to the raw
/// body, then to the status reason.
fn backend_error_message(status: StatusCode, body: &str) -> String {
    let detail = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("detail").and_then(|d| d.as_str()).map(str::to_string));
    if let Some(detail) = detail.filter(|d| !d.is_empty()) {
        return detail;
    }
    let trimmed = body.trim();
    if !trimmed.is_empty() && trimmed.len() <= 200 {
        return trimmed.to_string();
    }
    status
        .canonical_reason()
        .unwrap_or("Backend request failed")
        .to_string()
}
