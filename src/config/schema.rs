//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the API.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::routing::Resource;

/// Root configuration for the proposal API.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Supabase data store credentials.
    pub supabase: SupabaseConfig,

    /// External generation webhook.
    pub webhook: WebhookConfig,

    /// Per-resource fallback policy.
    pub fallback: FallbackConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Timeout configuration for inbound and outbound requests.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Inbound request timeout (total time for request/response) in seconds.
    pub request_secs: u64,

    /// Outbound call timeout (Supabase read, webhook POST) in seconds.
    /// The original drafts had none; 8s is an explicit hardening choice.
    pub upstream_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            request_secs: 30,
            upstream_secs: 8,
        }
    }
}

/// Supabase REST data store credentials.
///
/// Both fields must be present for the gateway to issue reads; anything
/// less is treated as "unconfigured", never as an error.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct SupabaseConfig {
    /// Project base URL (e.g., "https://xyz.supabase.co").
    pub url: Option<String>,

    /// Service-role API key.
    pub service_role_key: Option<String>,
}

impl SupabaseConfig {
    /// True when both the URL and the key are set and non-empty.
    pub fn is_configured(&self) -> bool {
        let set = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.trim().is_empty());
        set(&self.url) && set(&self.service_role_key)
    }
}

/// External generation webhook (n8n workflow).
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct WebhookConfig {
    /// Webhook URL. Absent means demo-mode generation.
    pub url: Option<String>,
}

impl WebhookConfig {
    pub fn is_configured(&self) -> bool {
        self.url.as_deref().is_some_and(|s| !s.trim().is_empty())
    }
}

/// Per-resource policy for empty-but-successful upstream reads.
///
/// The historical drafts were inconsistent about whether an empty result
/// should trigger sample data; this makes the choice explicit per resource.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FallbackConfig {
    /// Substitute sample clients when the upstream returns zero rows.
    pub on_empty_clients: bool,

    /// Substitute sample creators when the upstream returns zero rows.
    pub on_empty_creators: bool,

    /// Substitute sample templates when the upstream returns zero rows.
    pub on_empty_templates: bool,

    /// Proposals default to false: an empty list is a legitimate answer.
    pub on_empty_proposals: bool,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            on_empty_clients: true,
            on_empty_creators: true,
            on_empty_templates: true,
            on_empty_proposals: false,
        }
    }
}

impl FallbackConfig {
    /// Whether an empty upstream result for this resource should be
    /// replaced by sample data.
    pub fn on_empty(&self, resource: Resource) -> bool {
        match resource {
            Resource::Clients => self.on_empty_clients,
            Resource::Creators => self.on_empty_creators,
            Resource::Templates => self.on_empty_templates,
            Resource::Proposals => self.on_empty_proposals,
            _ => false,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supabase_configured_requires_both_fields() {
        let mut config = SupabaseConfig::default();
        assert!(!config.is_configured());

        config.url = Some("https://example.supabase.co".into());
        assert!(!config.is_configured());

        config.service_role_key = Some("service-key".into());
        assert!(config.is_configured());
    }

    #[test]
    fn test_blank_credentials_are_unconfigured() {
        let config = SupabaseConfig {
            url: Some("  ".into()),
            service_role_key: Some("key".into()),
        };
        assert!(!config.is_configured());
    }

    #[test]
    fn test_fallback_defaults_spare_proposals() {
        let config = FallbackConfig::default();
        assert!(config.on_empty(Resource::Clients));
        assert!(config.on_empty(Resource::Creators));
        assert!(config.on_empty(Resource::Templates));
        assert!(!config.on_empty(Resource::Proposals));
    }
}
