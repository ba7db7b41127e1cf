//! Domain records for the proposal tool.
//!
//! The cached_* records mirror the Supabase tables exactly: this service is
//! a read-only view over an external source of truth, so the structs carry
//! the column names as-is and tolerate missing columns via defaults.
//! Wire-facing types (requests, proposals) use camelCase to match the
//! original JSON surface.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A client row from `cached_clients`. Read-only cache.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Client {
    pub id: String,
    pub name: String,
    pub deal_value: f64,
    pub status: String,
    pub notion_id: Option<String>,
    pub last_synced: Option<String>,
}

/// A creator row from `cached_creators`. Read-only cache.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Creator {
    pub id: String,
    pub name: String,
    pub management_status: String,
    pub pricing_tier: String,
    pub monthly_impressions: i64,
    pub niche_focus: String,
    pub content_types: Vec<String>,
}

/// A template row from `cached_templates`. Read-only cache.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Template {
    pub id: String,
    pub name: String,
    pub template_type: Vec<String>,
    pub usage_count: i64,
}

/// A persisted proposal row from `user_proposals`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StoredProposal {
    pub id: Option<String>,
    pub proposal_id: String,
    pub client_name: String,
    pub campaign_type: String,
    pub budget_range: String,
    pub content: String,
    pub metadata: Value,
    pub created_at: Option<String>,
}

/// A generated proposal document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Proposal {
    pub proposal_id: String,
    pub content: String,
    pub metadata: ProposalMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProposalMetadata {
    pub client_name: String,
    pub creator_count: usize,
    pub generation_time: String,
    pub template_used: String,
    pub budget_range: String,
    pub campaign_type: String,
    pub tokens_used: u32,
    pub model: String,
}

/// Inbound generation request body.
///
/// Every field is defaulted so that missing required fields reach the
/// validator (which names the field in its 400) instead of dying as an
/// opaque deserialization error.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerationRequest {
    pub client_id: Option<String>,
    pub client_name: String,
    pub campaign_type: String,
    pub budget_range: String,
    pub selected_creators: Vec<String>,
    pub template_id: Option<String>,
    pub metadata: Option<Value>,
}

/// Normalized job payload POSTed to the generation webhook.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookJob {
    pub client_id: Option<String>,
    pub client_name: String,
    pub campaign_type: String,
    pub budget_range: String,
    pub selected_creators: Vec<String>,
    pub template_id: Option<String>,
    pub timestamp: String,
    pub metadata: Value,
    pub request_id: String,
}

impl WebhookJob {
    /// Build the outbound job from a validated request.
    pub fn from_request(request: &GenerationRequest) -> Self {
        Self {
            client_id: request.client_id.clone(),
            client_name: request.client_name.clone(),
            campaign_type: request.campaign_type.clone(),
            budget_range: request.budget_range.clone(),
            selected_creators: request.selected_creators.clone(),
            template_id: request.template_id.clone(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            metadata: request.metadata.clone().unwrap_or(Value::Null),
            request_id: uuid::Uuid::new_v4().to_string(),
        }
    }
}
