//! Per-resource PostgREST query plans.
//!
//! # Design Decisions
//! - Plans are static data: table, sort order, row cap per resource
//! - Row caps bound response size (50/100/20/50), matching the drafts
//! - Filters exist for creators only; other resources ignore them
//! - Pure functions so the query surface is unit-testable without a network

use std::collections::HashMap;

use crate::routing::Resource;

/// Read plan for one collection resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryPlan {
    /// Supabase table name.
    pub table: &'static str,
    /// PostgREST `order` expression.
    pub order: &'static str,
    /// Upper row limit.
    pub limit: u32,
}

/// Query plan for a collection resource, or None for pseudo-resources
/// (health, generate, index) that never touch the data store.
pub fn plan_for(resource: Resource) -> Option<QueryPlan> {
    match resource {
        Resource::Clients => Some(QueryPlan {
            table: "cached_clients",
            order: "last_synced.desc",
            limit: 50,
        }),
        Resource::Creators => Some(QueryPlan {
            table: "cached_creators",
            order: "monthly_impressions.desc",
            limit: 100,
        }),
        Resource::Templates => Some(QueryPlan {
            table: "cached_templates",
            order: "usage_count.desc",
            limit: 20,
        }),
        Resource::Proposals => Some(QueryPlan {
            table: "user_proposals",
            order: "created_at.desc",
            limit: 50,
        }),
        _ => None,
    }
}

/// Optional filters, honored for the creators resource only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreatorFilters {
    /// Case-insensitive substring match over name or niche focus.
    pub search: Option<String>,
    /// Exact management status.
    pub management_status: Option<String>,
    /// Exact pricing tier ($, $$, $$$).
    pub pricing_tier: Option<String>,
}

impl CreatorFilters {
    /// Extract the recognized filter parameters from a query map.
    pub fn from_params(params: &HashMap<String, String>) -> Self {
        let non_blank = |key: &str| {
            params
                .get(key)
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };
        Self {
            search: non_blank("search"),
            management_status: non_blank("managementStatus"),
            pricing_tier: non_blank("pricingTier"),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.search.is_none() && self.management_status.is_none() && self.pricing_tier.is_none()
    }
}

/// Build the PostgREST query string pairs for a plan plus filters.
///
/// Filters only apply to creators; the caller passes an empty filter set
/// for every other resource.
pub fn build_query(plan: &QueryPlan, filters: &CreatorFilters) -> Vec<(String, String)> {
    let mut pairs = vec![
        ("select".to_string(), "*".to_string()),
        ("order".to_string(), plan.order.to_string()),
        ("limit".to_string(), plan.limit.to_string()),
    ];

    if let Some(term) = &filters.search {
        let term = sanitize_pattern(term);
        pairs.push((
            "or".to_string(),
            format!("(name.ilike.*{term}*,niche_focus.ilike.*{term}*)"),
        ));
    }
    if let Some(status) = &filters.management_status {
        pairs.push(("management_status".to_string(), format!("eq.{status}")));
    }
    if let Some(tier) = &filters.pricing_tier {
        pairs.push(("pricing_tier".to_string(), format!("eq.{tier}")));
    }

    pairs
}

/// Strip characters that carry meaning inside a PostgREST `or=(...)` tree
/// so user input cannot rewrite the filter expression.
fn sanitize_pattern(term: &str) -> String {
    term.chars()
        .filter(|c| !matches!(c, '(' | ')' | ',' | '*' | '%' | '\\'))
        .collect()
}
