//! Typed client for the Supabase REST store and the generation webhook.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::AppConfig;
use crate::gateway::error::{GatewayError, GatewayResult};
use crate::gateway::query::{self, CreatorFilters};
use crate::model::{Proposal, WebhookJob};
use crate::routing::Resource;

/// Credentials for the Supabase REST interface.
#[derive(Debug, Clone)]
struct SupabaseCredentials {
    base_url: String,
    service_role_key: String,
}

/// Gateway over both outbound collaborators.
///
/// Constructed once at startup and injected into the handlers, so tests
/// can point it at local mock upstreams instead of process-wide state.
#[derive(Debug, Clone)]
pub struct DataGateway {
    http: reqwest::Client,
    supabase: Option<SupabaseCredentials>,
    webhook_url: Option<String>,
}

impl DataGateway {
    /// Build the gateway from configuration.
    ///
    /// Missing credentials are carried as None and surface later as
    /// `GatewayError::Unconfigured`; they never fail construction.
    pub fn new(config: &AppConfig) -> GatewayResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.upstream_secs))
            .build()?;

        let supabase = if config.supabase.is_configured() {
            // is_configured guarantees both fields are present
            match (&config.supabase.url, &config.supabase.service_role_key) {
                (Some(url), Some(key)) => Some(SupabaseCredentials {
                    base_url: url.trim_end_matches('/').to_string(),
                    service_role_key: key.clone(),
                }),
                _ => None,
            }
        } else {
            None
        };

        let webhook_url = if config.webhook.is_configured() {
            config.webhook.url.clone()
        } else {
            None
        };

        Ok(Self {
            http,
            supabase,
            webhook_url,
        })
    }

    /// True when the data store credentials are present.
    pub fn store_configured(&self) -> bool {
        self.supabase.is_some()
    }

    /// True when the generation webhook URL is present.
    pub fn webhook_configured(&self) -> bool {
        self.webhook_url.is_some()
    }

    /// Read a collection from the data store.
    ///
    /// Applies the per-resource query plan (sort order, row cap) and, for
    /// creators only, the optional filters. Signals Unconfigured before any
    /// network activity when credentials are absent.
    pub async fn fetch_collection<T: DeserializeOwned>(
        &self,
        resource: Resource,
        filters: &CreatorFilters,
    ) -> GatewayResult<Vec<T>> {
        let creds = self.supabase.as_ref().ok_or(GatewayError::Unconfigured)?;

        let Some(plan) = query::plan_for(resource) else {
            // Pseudo-resources (health, generate, index) have no collection.
            return Ok(Vec::new());
        };

        let empty = CreatorFilters::default();
        let filters = if resource == Resource::Creators {
            filters
        } else {
            &empty
        };

        let url = format!("{}/rest/v1/{}", creds.base_url, plan.table);
        let response = self
            .http
            .get(&url)
            .query(&query::build_query(&plan, filters))
            .header("apikey", &creds.service_role_key)
            .bearer_auth(&creds.service_role_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = truncate(response.text().await.unwrap_or_default());
            tracing::warn!(
                table = plan.table,
                status = status.as_u16(),
                detail = %detail,
                "Data store read failed"
            );
            return Err(GatewayError::Upstream {
                status: status.as_u16(),
                detail,
            });
        }

        Ok(response.json::<Vec<T>>().await?)
    }

    /// POST a generation job to the external webhook.
    ///
    /// The response body is returned verbatim; this layer does not validate
    /// the shape of an externally-owned result.
    pub async fn submit_generation(&self, job: &WebhookJob) -> GatewayResult<Value> {
        let url = self.webhook_url.as_ref().ok_or(GatewayError::Unconfigured)?;

        tracing::info!(
            request_id = %job.request_id,
            client_name = %job.client_name,
            "Forwarding generation job to webhook"
        );

        let response = self.http.post(url).json(job).send().await?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        if !status.is_success() {
            let detail = truncate(body);
            tracing::error!(
                request_id = %job.request_id,
                status = status.as_u16(),
                detail = %detail,
                "Generation webhook failed"
            );
            return Err(GatewayError::Upstream {
                status: status.as_u16(),
                detail,
            });
        }

        // Non-JSON bodies are forwarded as a plain string rather than dropped.
        Ok(serde_json::from_str(&body).unwrap_or(Value::String(body)))
    }

    /// Best-effort INSERT of a demo-mode proposal into `user_proposals`.
    pub async fn persist_proposal(&self, proposal: &Proposal) -> GatewayResult<()> {
        let creds = self.supabase.as_ref().ok_or(GatewayError::Unconfigured)?;

        let row = serde_json::json!({
            "proposal_id": proposal.proposal_id,
            "client_name": proposal.metadata.client_name,
            "campaign_type": proposal.metadata.campaign_type,
            "budget_range": proposal.metadata.budget_range,
            "content": proposal.content,
            "metadata": proposal.metadata,
        });

        let url = format!("{}/rest/v1/user_proposals", creds.base_url);
        let response = self
            .http
            .post(&url)
            .header("apikey", &creds.service_role_key)
            .bearer_auth(&creds.service_role_key)
            .header("Prefer", "return=minimal")
            .json(&row)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = truncate(response.text().await.unwrap_or_default());
            return Err(GatewayError::Upstream {
                status: status.as_u16(),
                detail,
            });
        }

        tracing::debug!(proposal_id = %proposal.proposal_id, "Proposal persisted");
        Ok(())
    }
}

/// Cap upstream error bodies so log lines stay bounded.
fn truncate(detail: String) -> String {
    const MAX: usize = 200;
    if detail.len() <= MAX {
        detail
    } else {
        let mut end = MAX;
        while !detail.is_char_boundary(end) {
            end -= 1;
        }
        detail[..end].to_string()
    }
}
