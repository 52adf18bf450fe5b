use dioxus::prelude::*;
use shared_types::{DocumentEntity, DocumentFact, EntityData, MatterEntityList, MatterFactPage};

/// Slices for the facts-per-entity chart. The backend does the counting;
/// slices come back in the backend's order.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_facts_per_entity(matter_id: String) -> Result<Vec<EntityData>, ServerFnError> {
    use crate::backend::backend;
    use crate::error_convert::AppErrorExt;

    backend()
        .facts_per_entity(&matter_id)
        .await
        .map_err(|e| e.into_server_fn_error())
}

/// One page of a matter's facts starting at `offset`.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_matter_facts(
    matter_id: String,
    offset: u32,
) -> Result<MatterFactPage, ServerFnError> {
    use crate::backend::backend;
    use crate::error_convert::AppErrorExt;

    let page = backend()
        .matter_facts(&matter_id, offset)
        .await
        .map_err(|e| e.into_server_fn_error())?;
    tracing::debug!(total = page.total, count = page.facts.len(), "facts page loaded");
    Ok(page)
}

#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_matter_entities(matter_id: String) -> Result<MatterEntityList, ServerFnError> {
    use crate::backend::backend;
    use crate::error_convert::AppErrorExt;

    backend()
        .matter_entities(&matter_id)
        .await
        .map_err(|e| e.into_server_fn_error())
}

/// Facts the backend suggests for one document under review.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_document_facts(document_id: String) -> Result<Vec<DocumentFact>, ServerFnError> {
    use crate::backend::backend;
    use crate::error_convert::AppErrorExt;

    backend()
        .document_facts(&document_id)
        .await
        .map_err(|e| e.into_server_fn_error())
}

#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_document_entities(
    document_id: String,
) -> Result<Vec<DocumentEntity>, ServerFnError> {
    use crate::backend::backend;
    use crate::error_convert::AppErrorExt;

    backend()
        .document_entities(&document_id)
        .await
        .map_err(|e| e.into_server_fn_error())
}
