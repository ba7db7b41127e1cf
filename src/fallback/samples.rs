//! Static sample records and the layered fallback policy.

use serde::Serialize;

use crate::gateway::GatewayError;
use crate::model::{Client, Creator, Template};

/// Where the rows in a list response came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Source {
    /// Live rows from the data store.
    #[serde(rename = "supabase")]
    Supabase,
    /// Samples because the store is not configured (no call attempted).
    #[serde(rename = "demo")]
    Demo,
    /// Samples because the store answered successfully but empty.
    #[serde(rename = "fallback")]
    Fallback,
    /// Samples because the store call failed.
    #[serde(rename = "error-fallback")]
    ErrorFallback,
}

/// Layered fallback for one collection read.
///
/// Replaces the near-duplicate conditional chains of the historical drafts
/// with a single policy: live rows win, unconfigured stores degrade
/// silently to samples, failures degrade loudly (logged by the gateway)
/// but still answer, and an empty success substitutes samples only when
/// the resource opts in.
pub fn with_fallback<T>(
    result: Result<Vec<T>, GatewayError>,
    substitute_empty: bool,
    samples: impl FnOnce() -> Vec<T>,
) -> (Vec<T>, Source) {
    match result {
        Ok(rows) if !rows.is_empty() => (rows, Source::Supabase),
        Ok(rows) => {
            if substitute_empty {
                (samples(), Source::Fallback)
            } else {
                (rows, Source::Supabase)
            }
        }
        Err(GatewayError::Unconfigured) => (samples(), Source::Demo),
        Err(_) => (samples(), Source::ErrorFallback),
    }
}

/// Illustrative client records.
pub fn sample_clients() -> Vec<Client> {
    vec![
        Client {
            id: "demo-client-1".into(),
            name: "Glow Cosmetics".into(),
            deal_value: 45_000.0,
            status: "Proposal Sent".into(),
            notion_id: Some("notion-glow".into()),
            last_synced: Some("2025-08-20T10:30:00Z".into()),
        },
        Client {
            id: "demo-client-2".into(),
            name: "Peak Performance Gear".into(),
            deal_value: 82_500.0,
            status: "Qualified".into(),
            notion_id: Some("notion-peak".into()),
            last_synced: Some("2025-08-19T16:45:00Z".into()),
        },
        Client {
            id: "demo-client-3".into(),
            name: "Urban Eats Delivery".into(),
            deal_value: 30_000.0,
            status: "Discovery".into(),
            notion_id: None,
            last_synced: Some("2025-08-18T09:15:00Z".into()),
        },
    ]
}

/// Illustrative creator records.
pub fn sample_creators() -> Vec<Creator> {
    vec![
        Creator {
            id: "demo-creator-1".into(),
            name: "Maya Torres".into(),
            management_status: "Full Management".into(),
            pricing_tier: "$$$".into(),
            monthly_impressions: 2_400_000,
            niche_focus: "Fitness & Wellness".into(),
            content_types: vec!["Reels".into(), "Stories".into(), "YouTube".into()],
        },
        Creator {
            id: "demo-creator-2".into(),
            name: "Devon Clarke".into(),
            management_status: "Network".into(),
            pricing_tier: "$$".into(),
            monthly_impressions: 850_000,
            niche_focus: "Food & Lifestyle".into(),
            content_types: vec!["TikTok".into(), "Reels".into()],
        },
        Creator {
            id: "demo-creator-3".into(),
            name: "Priya Shah".into(),
            management_status: "Full Management".into(),
            pricing_tier: "$".into(),
            monthly_impressions: 310_000,
            niche_focus: "Beauty".into(),
            content_types: vec!["Stories".into(), "UGC".into()],
        },
    ]
}

/// Illustrative template records.
pub fn sample_templates() -> Vec<Template> {
    vec![
        Template {
            id: "demo-template-1".into(),
            name: "Product Launch Playbook".into(),
            template_type: vec!["launch".into(), "awareness".into()],
            usage_count: 42,
        },
        Template {
            id: "demo-template-2".into(),
            name: "Always-On Creator Program".into(),
            template_type: vec!["evergreen".into()],
            usage_count: 17,
        },
    ]
}
