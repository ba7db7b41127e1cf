//! Deterministic markdown proposal rendering.

use chrono::{DateTime, SecondsFormat, Utc};
use thiserror::Error;

use crate::model::{GenerationRequest, Proposal, ProposalMetadata};

/// Fixed token-usage figure reported for demo-mode generations.
const DEMO_TOKENS_USED: u32 = 1847;

/// Budget allocation lines. Presentation text only, not a ledger.
const BUDGET_SPLIT: [(&str, u8); 4] = [
    ("Creator partnerships", 40),
    ("Content production", 35),
    ("Paid amplification", 20),
    ("Reporting & management", 5),
];

/// Caller input missing a required field. Never retried; maps to HTTP 400.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Client name is required")]
    MissingClientName,

    #[error("Campaign type is required")]
    MissingCampaignType,

    #[error("Budget range is required")]
    MissingBudgetRange,

    #[error("At least one creator is required")]
    NoCreatorsSelected,
}

/// Validate a generation request before rendering or forwarding.
pub fn validate(request: &GenerationRequest) -> Result<(), ValidationError> {
    if request.client_name.trim().is_empty() {
        return Err(ValidationError::MissingClientName);
    }
    if request.campaign_type.trim().is_empty() {
        return Err(ValidationError::MissingCampaignType);
    }
    if request.budget_range.trim().is_empty() {
        return Err(ValidationError::MissingBudgetRange);
    }
    if request.selected_creators.is_empty() {
        return Err(ValidationError::NoCreatorsSelected);
    }
    Ok(())
}

/// Render a proposal with the current wall clock.
pub fn render(request: &GenerationRequest) -> Proposal {
    render_at(request, Utc::now())
}

/// Render a proposal at an injected timestamp.
///
/// Deterministic: identical input and timestamp always produce an
/// identical document. The timestamp only reaches the proposal id and the
/// generationTime metadata field, never the markdown body.
pub fn render_at(request: &GenerationRequest, generated_at: DateTime<Utc>) -> Proposal {
    let client = request.client_name.trim();
    let campaign = request.campaign_type.trim();
    let budget = request.budget_range.trim();
    let creator_count = request.selected_creators.len();

    let mut content = String::new();
    content.push_str(&format!("# {campaign} Proposal for {client}\n\n"));

    content.push_str("## Executive Summary\n");
    content.push_str(&format!(
        "This proposal outlines a {campaign} campaign for {client} with a total \
         investment of {budget}. Over a 6–8 week engagement, {creator_count} \
         hand-picked creators will deliver an estimated combined reach of \
         2.5M–4M impressions.\n\n"
    ));

    content.push_str("## Objectives\n");
    content.push_str(&format!(
        "- Grow awareness of {client} among each creator's core audience\n\
         - Drive qualified traffic to {client}'s owned channels\n\
         - Build a reusable library of creator content for {client}\n\n"
    ));

    content.push_str("## Content Strategy\n");
    content.push_str(
        "### Phase 1: Foundation\n\
         Creators introduce the brand through authentic storytelling formats, \
         establishing credibility with their audiences before any direct offer.\n\n\
         ### Phase 2: Amplification\n\
         Top-performing foundation content is boosted and cross-posted, and \
         creators layer in product-focused formats to widen reach.\n\n\
         ### Phase 3: Conversion\n\
         Clear calls to action, trackable links, and limited-time offers convert \
         the warmed-up audience into measurable outcomes.\n\n",
    );

    content.push_str("## Expected Results\n");
    content.push_str(
        "- 2.5M–4M total impressions\n\
         - 3–5% average engagement rate\n\
         - 15K–25K link clicks\n\
         - 400–700 attributed conversions\n\n",
    );

    content.push_str("## Investment Breakdown\n");
    content.push_str(&format!("Total investment: {budget}\n\n"));
    for (line, percent) in BUDGET_SPLIT {
        content.push_str(&format!("- {line}: {percent}%\n"));
    }

    Proposal {
        proposal_id: format!("proposal-{}", generated_at.timestamp_millis()),
        content,
        metadata: ProposalMetadata {
            client_name: client.to_string(),
            creator_count,
            generation_time: generated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            template_used: request
                .template_id
                .clone()
                .unwrap_or_else(|| "default".to_string()),
            budget_range: budget.to_string(),
            campaign_type: campaign.to_string(),
            tokens_used: DEMO_TOKENS_USED,
            model: "demo-mode".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn request() -> GenerationRequest {
        GenerationRequest {
            client_name: "Acme".into(),
            campaign_type: "Launch".into(),
            budget_range: "$50K".into(),
            selected_creators: vec!["1".into(), "2".into()],
            ..Default::default()
        }
    }

    fn frozen_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 8, 24, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_validation_messages_are_exact_wire_strings() {
        let mut req = request();
        req.client_name = String::new();
        assert_eq!(
            validate(&req).unwrap_err().to_string(),
            "Client name is required"
        );

        let mut req = request();
        req.campaign_type = "  ".into();
        assert_eq!(
            validate(&req).unwrap_err().to_string(),
            "Campaign type is required"
        );

        let mut req = request();
        req.budget_range = String::new();
        assert_eq!(
            validate(&req).unwrap_err().to_string(),
            "Budget range is required"
        );

        let mut req = request();
        req.selected_creators.clear();
        assert_eq!(
            validate(&req).unwrap_err().to_string(),
            "At least one creator is required"
        );
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(validate(&request()).is_ok());
    }

    #[test]
    fn test_render_is_deterministic_under_frozen_time() {
        let a = render_at(&request(), frozen_time());
        let b = render_at(&request(), frozen_time());
        assert_eq!(a, b);
    }

    #[test]
    fn test_timestamp_only_reaches_id_and_generation_time() {
        let a = render_at(&request(), frozen_time());
        let later = frozen_time() + chrono::Duration::milliseconds(1500);
        let b = render_at(&request(), later);

        assert_eq!(a.content, b.content);
        assert_ne!(a.proposal_id, b.proposal_id);
        assert_ne!(a.metadata.generation_time, b.metadata.generation_time);
        assert_eq!(a.metadata.client_name, b.metadata.client_name);
    }

    #[test]
    fn test_proposal_id_is_millisecond_token() {
        let proposal = render_at(&request(), frozen_time());
        let expected = format!("proposal-{}", frozen_time().timestamp_millis());
        assert_eq!(proposal.proposal_id, expected);
    }

    #[test]
    fn test_content_sections_in_order() {
        let content = render_at(&request(), frozen_time()).content;

        let sections = [
            "# Launch Proposal for Acme",
            "## Executive Summary",
            "## Objectives",
            "## Content Strategy",
            "### Phase 1: Foundation",
            "### Phase 2: Amplification",
            "### Phase 3: Conversion",
            "## Expected Results",
            "## Investment Breakdown",
        ];

        let mut cursor = 0;
        for section in sections {
            let at = content[cursor..]
                .find(section)
                .unwrap_or_else(|| panic!("missing section {section}"));
            cursor += at + section.len();
        }
    }

    #[test]
    fn test_budget_split_lines() {
        let content = render_at(&request(), frozen_time()).content;
        assert!(content.contains("Total investment: $50K"));
        assert!(content.contains("- Creator partnerships: 40%"));
        assert!(content.contains("- Content production: 35%"));
        assert!(content.contains("- Paid amplification: 20%"));
        assert!(content.contains("- Reporting & management: 5%"));
    }

    #[test]
    fn test_metadata_echoes_input() {
        let proposal = render_at(&request(), frozen_time());
        let meta = &proposal.metadata;

        assert_eq!(meta.client_name, "Acme");
        assert_eq!(meta.creator_count, 2);
        assert_eq!(meta.campaign_type, "Launch");
        assert_eq!(meta.budget_range, "$50K");
        assert_eq!(meta.template_used, "default");
        assert_eq!(meta.tokens_used, 1847);
        assert_eq!(meta.model, "demo-mode");
    }

    #[test]
    fn test_template_id_echoed_when_present() {
        let mut req = request();
        req.template_id = Some("tpl-7".into());
        let proposal = render_at(&req, frozen_time());
        assert_eq!(proposal.metadata.template_used, "tpl-7");
    }
}
