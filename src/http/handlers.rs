//! Per-resource request handlers.

use axum::body::Bytes;
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{SecondsFormat, Utc};

use crate::fallback::{sample_clients, sample_creators, sample_templates, with_fallback};
use crate::gateway::CreatorFilters;
use crate::http::error::ApiError;
use crate::http::response::{json_ok, list_response};
use crate::http::server::AppState;
use crate::model::{Client, Creator, GenerationRequest, StoredProposal, Template, WebhookJob};
use crate::proposal;
use crate::routing::Resource;

/// GET health: liveness plus whether the data store is configured.
pub async fn health(state: &AppState) -> Response {
    json_ok(serde_json::json!({
        "success": true,
        "message": "R3ACH Proposal API is working!",
        "timestamp": Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        "version": env!("CARGO_PKG_VERSION"),
        "supabaseConnected": state.gateway.store_configured(),
    }))
}

/// GET clients: newest-synced first, sample data when the store is out.
pub async fn clients(state: &AppState) -> Response {
    let result = state
        .gateway
        .fetch_collection::<Client>(Resource::Clients, &CreatorFilters::default())
        .await;
    let (data, source) = with_fallback(
        result,
        state.config.fallback.on_empty(Resource::Clients),
        sample_clients,
    );
    list_response(data, source)
}

/// GET creators: filterable by search term, management status, pricing tier.
pub async fn creators(state: &AppState, filters: &CreatorFilters) -> Response {
    let result = state
        .gateway
        .fetch_collection::<Creator>(Resource::Creators, filters)
        .await;
    let (data, source) = with_fallback(
        result,
        state.config.fallback.on_empty(Resource::Creators),
        sample_creators,
    );
    list_response(data, source)
}

/// GET templates: most-used first.
pub async fn templates(state: &AppState) -> Response {
    let result = state
        .gateway
        .fetch_collection::<Template>(Resource::Templates, &CreatorFilters::default())
        .await;
    let (data, source) = with_fallback(
        result,
        state.config.fallback.on_empty(Resource::Templates),
        sample_templates,
    );
    list_response(data, source)
}

/// GET proposals: previously generated documents. Empty is a legitimate
/// answer here, so no sample substitution by default.
pub async fn proposals(state: &AppState) -> Response {
    let result = state
        .gateway
        .fetch_collection::<StoredProposal>(Resource::Proposals, &CreatorFilters::default())
        .await;
    let (data, source) = with_fallback(
        result,
        state.config.fallback.on_empty(Resource::Proposals),
        Vec::new,
    );
    list_response(data, source)
}

/// Discoverability index. Unknown GET paths land here rather than a 404.
pub fn index(method: &Method, path: &str) -> Response {
    json_ok(serde_json::json!({
        "success": true,
        "message": "R3ACH Proposal API",
        "availableEndpoints": Resource::AVAILABLE,
        "debug": {
            "method": method.as_str(),
            "path": path,
        },
    }))
}

/// Generic acknowledgement for POSTs to non-generation resources.
pub fn acknowledge(path: &str) -> Response {
    json_ok(serde_json::json!({
        "success": true,
        "message": "Request received",
        "path": path,
    }))
}

/// 405 with the allowed method list echoed for diagnostics.
pub fn method_not_allowed(method: &Method) -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(serde_json::json!({
            "error": "Method not allowed",
            "method": method.as_str(),
            "allowedMethods": ["GET", "POST", "OPTIONS"],
        })),
    )
        .into_response()
}

/// POST generate: validate, then either forward to the configured webhook
/// or render locally in demo mode.
pub async fn generate(state: &AppState, body: &Bytes) -> Result<Response, ApiError> {
    let request: GenerationRequest = serde_json::from_slice(body)
        .map_err(|err| ApiError::BadRequest(format!("Invalid JSON body: {err}")))?;
    proposal::validate(&request)?;

    if state.gateway.webhook_configured() {
        let job = WebhookJob::from_request(&request);
        let result = state.gateway.submit_generation(&job).await?;
        return Ok(json_ok(serde_json::json!({
            "success": true,
            "data": result,
        })));
    }

    let document = proposal::render(&request);
    tracing::info!(
        proposal_id = %document.proposal_id,
        client_name = %document.metadata.client_name,
        creator_count = document.metadata.creator_count,
        "Proposal generated in demo mode"
    );

    // Best-effort persistence; a storage hiccup must not fail the request.
    if state.gateway.store_configured() {
        if let Err(err) = state.gateway.persist_proposal(&document).await {
            tracing::warn!(
                proposal_id = %document.proposal_id,
                error = %err,
                "Failed to persist generated proposal"
            );
        }
    }

    Ok(json_ok(serde_json::json!({
        "success": true,
        "data": document,
        "note": "Generated in demo mode; configure N8N_WEBHOOK_URL for AI-assisted generation",
    })))
}
