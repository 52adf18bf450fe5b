use dioxus::prelude::*;
use shared_types::{DocumentSummary, SourceDocument};

// ── Document Server Functions ──────────────────────────────────

/// Documents of a matter, newest upload first.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_documents_by_matter(
    matter_id: String,
) -> Result<Vec<SourceDocument>, ServerFnError> {
    use crate::backend::backend;
    use crate::error_convert::AppErrorExt;

    let documents = backend()
        .documents_by_matter(&matter_id)
        .await
        .map_err(|e| e.into_server_fn_error())?;
    tracing::debug!(count = documents.len(), "documents loaded");
    Ok(documents)
}

#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_document(document_id: String) -> Result<SourceDocument, ServerFnError> {
    use crate::backend::backend;
    use crate::error_convert::AppErrorExt;

    backend()
        .document(&document_id)
        .await
        .map_err(|e| e.into_server_fn_error())
}

/// Backend-generated review summary of one document.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_document_summary(document_id: String) -> Result<DocumentSummary, ServerFnError> {
    use crate::backend::backend;
    use crate::error_convert::AppErrorExt;

    backend()
        .document_summary(&document_id)
        .await
        .map_err(|e| e.into_server_fn_error())
}
